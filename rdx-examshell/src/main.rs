mod render;

use anyhow::Result;
use colored::Colorize;
use examclock::preferences::open_store;
use examclock::prelude::*;
use examclock::{ENGINE_NAME, VERSION as LIB_VERSION};
use render::InfoPanel;
use rustyline::highlight::Highlighter;
use rustyline::Editor;
use rustyline_derive::{Completer, Helper, Hinter, Validator};
use std::borrow::Cow;
use std::env;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

const SHELL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A custom helper struct for rustyline that enables syntax highlighting.
#[derive(Completer, Helper, Hinter, Validator)]
struct MyHighlighter;

impl Highlighter for MyHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if let Some((command, rest)) = line.split_once(' ') {
            let colored_command = command.yellow().bold();
            let colored_rest = rest.yellow();
            Cow::Owned(format!("{} {}", colored_command, colored_rest))
        } else {
            Cow::Owned(line.yellow().bold().to_string())
        }
    }
    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

fn print_banner() {
    if env::var("QUIET_MODE").is_ok() {
        return;
    }
    // Embedded at compile time; `logo.log` sits in the crate root.
    const LOGO_TEXT: &str = include_str!("../logo.log");
    println!("{}", LOGO_TEXT.cyan());

    let version_string = format!(
        "          Shell   v{:<8} Library   v{:<8}",
        SHELL_VERSION, LIB_VERSION
    );
    let rule = "-".repeat(79);

    println!("{}", rule.as_str().dimmed());
    println!("{}", version_string);
    let license_blurb = "
    This software is provided 'as is', without warranty of any kind.
    Distributed under the MIT OR Apache-2.0 license. Use at your own risk.
    ";
    println!("{}", license_blurb.dimmed());
    println!("{}", rule.as_str().dimmed());
}

/// Spawns several tasks, each subscribing to a different event stream from the engine.
fn spawn_event_listeners(engine: &ExamClockEngine, is_watching: Arc<AtomicBool>) {
    let mut system_rx = engine.subscribe_system_events();
    tokio::spawn(async move {
        while let Ok(event) = system_rx.recv().await {
            if let SystemEvent::EngineStarted { .. } | SystemEvent::EngineShutdown = event {
                println!("\n<-- [SYSTEM EVENT] {:?}", event);
            }
        }
    });

    let mut exam_rx = engine.subscribe_exam_events();
    tokio::spawn(async move {
        while let Ok(event) = exam_rx.recv().await {
            println!("\n<-- [EXAM EVENT] {:?}", event);
        }
    });

    // Live countdown, controlled by the shared flag.
    let mut snapshot_rx = engine.subscribe_snapshots();
    tokio::spawn(async move {
        while let Ok(snapshot) = snapshot_rx.recv().await {
            if !is_watching.load(Ordering::Relaxed) {
                continue;
            }
            let t = examclock::i18n::translation(snapshot.preferences.language);
            let line = match &snapshot.next_exam {
                Some(exam) => format!(
                    "{} {}",
                    exam.subject(snapshot.preferences.language),
                    render::render_countdown(&snapshot.time_remaining, t)
                ),
                None => t.good_luck.to_string(),
            };
            print!("\r<-- [COUNTDOWN] {}   ", line.as_str().yellow());
            std::io::stdout().flush().ok();
        }
    });
}

fn print_help() {
    println!("Available commands:");
    println!("  next                          - Shows the next exam and its countdown.");
    println!("  list                          - Shows the routine for the selected track.");
    println!("  progress                      - Shows how much of the season is done.");
    println!("  track <science|commerce|arts> - Selects a track.");
    println!("  lang [en|bn]                  - Selects (or toggles) the display language.");
    println!("  theme                         - Toggles the dark theme preference.");
    println!("  info <practical|instructions> - Shows an information panel.");
    println!("  watch <start|stop>            - Starts or stops the live countdown.");
    println!("  exit                          - Quits the shell.");
}

#[tokio::main]
async fn main() -> Result<()> {
    print_banner();

    let config = ExamClockConfig::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_target(false)
        .init();

    let schedule = Schedule::builtin()?;
    let store = open_store(config.preferences_path.as_deref());
    let engine = ExamClockEngine::new(config, schedule, store);
    let engine_handle = engine.clone();

    let is_watching = Arc::new(AtomicBool::new(false));
    spawn_event_listeners(&engine_handle, is_watching.clone());

    info!("Spawning {} in the background...", ENGINE_NAME.cyan());
    tokio::spawn(async move {
        if let Err(e) = engine.run().await {
            eprintln!("\nEngine stopped with an error: {}", e);
        }
    });

    tokio::time::sleep(Duration::from_millis(100)).await;

    let mut rl = Editor::new()?;
    rl.set_helper(Some(MyHighlighter));

    println!("{} is running. Type 'help' for commands or 'exit' to quit.", ENGINE_NAME.cyan());

    loop {
        let prompt = format!("{}", ">> ".cyan().bold());
        let readline = rl.readline(&prompt);
        match readline {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                let args = line.split_whitespace().collect::<Vec<_>>();

                if let Some(command) = args.first() {
                    match *command {
                        "next" => {
                            let snapshot = engine_handle.snapshot().await;
                            let t = engine_handle.translation().await;
                            println!("{}", render::render_next(&snapshot, t));
                        }
                        "list" => {
                            let snapshot = engine_handle.snapshot().await;
                            let t = engine_handle.translation().await;
                            println!("{}", render::render_list(&snapshot, t));
                        }
                        "progress" => {
                            let snapshot = engine_handle.snapshot().await;
                            let t = engine_handle.translation().await;
                            println!("{}", render::render_progress(&snapshot, t));
                        }
                        "track" => match args.get(1).map(|raw| raw.parse::<Track>()) {
                            Some(Ok(track)) => {
                                let snapshot = engine_handle.set_track(track).await;
                                let t = engine_handle.translation().await;
                                println!("--> Track set to {}.", t.track_name(track));
                                println!("{}", render::render_next(&snapshot, t));
                            }
                            Some(Err(e)) => println!("Error: {}.", e),
                            None => println!("Usage: track <science|commerce|arts>"),
                        },
                        "lang" => {
                            let snapshot = match args.get(1).map(|raw| raw.parse::<Language>()) {
                                Some(Ok(language)) => engine_handle.set_language(language).await,
                                Some(Err(e)) => {
                                    println!("Error: {}.", e);
                                    continue;
                                }
                                None => engine_handle.toggle_language().await,
                            };
                            println!("--> Language set to {}.", snapshot.preferences.language);
                        }
                        "theme" => {
                            let snapshot = engine_handle.toggle_theme().await;
                            let mode = if snapshot.preferences.dark { "dark" } else { "light" };
                            println!("--> Theme set to {}.", mode);
                        }
                        "info" => {
                            let panel = match args.get(1) {
                                Some(&"practical") => InfoPanel::Practical,
                                Some(&"instructions") => InfoPanel::Instructions,
                                _ => {
                                    println!("Usage: info <practical|instructions>");
                                    continue;
                                }
                            };
                            let language = engine_handle.preferences().await.language;
                            println!("{}", render::render_info(panel, language));
                        }
                        "watch" => match args.get(1) {
                            Some(&"start") => {
                                is_watching.store(true, Ordering::Relaxed);
                                println!("--> Started the live countdown.");
                            }
                            Some(&"stop") => {
                                is_watching.store(false, Ordering::Relaxed);
                                println!("\n--> Stopped the live countdown.");
                            }
                            _ => println!("Usage: watch <start|stop>"),
                        },
                        "help" => print_help(),
                        "exit" => break,
                        _ => println!("Unknown command: '{}'. Type 'help'.", line),
                    }
                }
            }
            Err(_) => {
                println!("Exiting examshell...");
                break;
            }
        }
    }

    Ok(())
}
