use anyhow::Result;
use colored::Colorize;
use examclock::i18n;
use examclock::preferences::open_store;
use examclock::prelude::*;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration before logging so the filter can come from it.
    let config = ExamClockConfig::load()?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_target(false)
        .init();

    // 3. Validate the compiled-in routine; a bad row stops startup here.
    let schedule = Schedule::builtin()?;
    let store = open_store(config.preferences_path.as_deref());

    // 4. Create the engine.
    let engine = ExamClockEngine::new(config, schedule, store);

    // 5. Spawn listeners for every event stream.
    let as_json = env::args().any(|arg| arg == "--json");
    spawn_event_listeners(&engine, as_json);

    // 6. Run the engine.
    engine.run().await?;

    Ok(())
}

/// Spawns one task per event stream, each logging what it receives.
fn spawn_event_listeners(engine: &ExamClockEngine, as_json: bool) {
    let mut system_rx = engine.subscribe_system_events();
    tokio::spawn(async move {
        while let Ok(event) = system_rx.recv().await {
            info!("[SYSTEM] => {:?}", event);
        }
    });

    let mut exam_rx = engine.subscribe_exam_events();
    tokio::spawn(async move {
        while let Ok(event) = exam_rx.recv().await {
            info!("[EXAM] => {:?}", event);
        }
    });

    let mut snapshot_rx = engine.subscribe_snapshots();
    tokio::spawn(async move {
        while let Ok(snapshot) = snapshot_rx.recv().await {
            if as_json {
                match serde_json::to_string(snapshot.as_ref()) {
                    Ok(line) => println!("{}", line),
                    Err(e) => tracing::error!("Failed to encode snapshot: {}", e),
                }
                continue;
            }
            let t = i18n::translation(snapshot.preferences.language);
            match &snapshot.next_exam {
                Some(exam) => info!(
                    "[COUNTDOWN] {} {} {} ({:.0}% {})",
                    t.headline(snapshot.season_started).cyan(),
                    exam.subject(snapshot.preferences.language).bold(),
                    snapshot.time_remaining.to_string().yellow(),
                    snapshot.progress,
                    t.season_progress,
                ),
                None => info!("[COUNTDOWN] {}", t.good_luck.green()),
            }
        }
    });
}
