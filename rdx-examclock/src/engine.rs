//! The core engine that orchestrates the entire Examclock system.

use crate::common::{Language, ListenerId, Track};
use crate::components::watcher::ExamWatcher;
use crate::config::ExamClockConfig;
use crate::events::{ExamEvent, SystemEvent};
use crate::i18n::{self, Translation};
use crate::preferences::{PreferenceStore, Preferences};
use crate::schedule::Schedule;
use crate::snapshot::Snapshot;
use crate::time::{reference_offset, SystemClock, SystemTimeSource, TickEvent, TimeSource};
use chrono::{DateTime, Utc};
use slotmap::SlotMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};
use tracing::{error, info, trace};

/// A callback invoked with every freshly computed snapshot.
pub type SnapshotListener = Box<dyn FnMut(&Snapshot) + Send + Sync>;

/// The main Examclock engine.
///
/// This struct holds the schedule, the user's preferences and the event
/// channels, and drives the tick loop. It is designed to be cloned and shared
/// across tasks, providing a handle to the running instance.
#[derive(Clone)]
pub struct ExamClockEngine {
    config: Arc<ExamClockConfig>,
    schedule: Arc<Schedule>,
    store: Arc<dyn PreferenceStore>,
    time_source: Arc<dyn TimeSource>,
    preferences: Arc<RwLock<Preferences>>,
    tick_sender: broadcast::Sender<Arc<TickEvent>>,
    snapshot_sender: broadcast::Sender<Arc<Snapshot>>,
    system_event_sender: broadcast::Sender<SystemEvent>,
    exam_event_sender: broadcast::Sender<ExamEvent>,
    snapshot_listeners: Arc<RwLock<SlotMap<ListenerId, SnapshotListener>>>,
    exam_watcher: Arc<RwLock<ExamWatcher>>,
}

// Core implementation block for internal logic.
impl ExamClockEngine {
    /// Creates a new engine reading the host clock, with preferences loaded from `store`.
    pub fn new(config: ExamClockConfig, schedule: Schedule, store: Arc<dyn PreferenceStore>) -> Self {
        const CHANNEL_CAPACITY: usize = 64;
        let (tick_sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        let (snapshot_sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        let (system_event_sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        let (exam_event_sender, _) = broadcast::channel(CHANNEL_CAPACITY);

        let preferences = Preferences::load(store.as_ref());
        info!(
            "Loaded preferences: track={}, language={}, dark={}.",
            preferences.track, preferences.language, preferences.dark
        );

        Self {
            config: Arc::new(config),
            schedule: Arc::new(schedule),
            store,
            time_source: Arc::new(SystemTimeSource),
            preferences: Arc::new(RwLock::new(preferences)),
            tick_sender,
            snapshot_sender,
            system_event_sender,
            exam_event_sender,
            snapshot_listeners: Arc::new(RwLock::new(SlotMap::with_key())),
            exam_watcher: Arc::new(RwLock::new(ExamWatcher::new())),
        }
    }

    /// Replaces the wall clock the engine reads on every tick.
    pub fn with_time_source(mut self, time_source: Arc<dyn TimeSource>) -> Self {
        self.time_source = time_source;
        self
    }

    /// Runs the engine's main loop until Ctrl+C is received.
    pub async fn run(&self) -> anyhow::Result<()> {
        self.run_until(async {
            tokio::signal::ctrl_c().await?;
            Ok::<(), anyhow::Error>(())
        })
        .await
    }

    /// Runs the engine's main loop until `shutdown` resolves.
    ///
    /// This method will:
    /// 1. Spawn the `SystemClock` task.
    /// 2. Spawn the dispatcher task that recomputes a snapshot on every tick.
    /// 3. Wait for `shutdown`, then stop both tasks.
    pub async fn run_until<F>(&self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = anyhow::Result<()>>,
    {
        info!("ExamClockEngine starting up...");
        let (shutdown_tx, _) = broadcast::channel(1);

        let clock = SystemClock::new(
            self.config.resolution.clone(),
            self.time_source.clone(),
            self.tick_sender.clone(),
        );
        let clock_shutdown_rx = shutdown_tx.subscribe();
        let clock_task = tokio::spawn(async move { clock.run(clock_shutdown_rx).await });

        let dispatcher = self.clone();
        let dispatcher_shutdown_rx = shutdown_tx.subscribe();
        let dispatcher_task =
            tokio::spawn(async move { dispatcher.dispatcher_loop(dispatcher_shutdown_rx).await });

        info!(
            "Engine running at {:?} over {} exams; reference time is {}.",
            self.config.resolution,
            self.schedule.len(),
            self.time_source.now().with_timezone(&reference_offset())
        );
        let outcome = shutdown.await;

        info!("Shutdown signal received. Broadcasting to all tasks...");
        if shutdown_tx.send(()).is_err() {
            error!("Failed to send shutdown signal. Some tasks may not terminate gracefully.");
        }
        let mut failure = None;
        for (name, task) in [("clock", clock_task), ("dispatcher", dispatcher_task)] {
            match tokio::time::timeout(Duration::from_millis(500), task).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    error!("The {} task failed: {}", name, e);
                    failure.get_or_insert_with(|| anyhow::anyhow!("the {} task failed: {}", name, e));
                }
                Err(_) => error!("The {} task did not stop within 500ms.", name),
            }
        }
        self.system_event_sender
            .send(SystemEvent::EngineShutdown)
            .ok();
        info!("ExamClockEngine has shut down.");
        match failure {
            Some(e) => Err(e),
            None => outcome,
        }
    }

    #[doc(hidden)]
    async fn dispatcher_loop(self, mut shutdown_rx: broadcast::Receiver<()>) {
        let mut tick_rx = self.tick_sender.subscribe();
        self.system_event_sender
            .send(SystemEvent::EngineStarted {
                timestamp: self.time_source.now(),
            })
            .ok();
        loop {
            tokio::select! {
                biased;
                _ = shutdown_rx.recv() => break,
                received = tick_rx.recv() => match received {
                    Ok(tick) => {
                        trace!("Tick #{} received.", tick.tick_count);
                        self.refresh(tick.now).await;
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        trace!("Dispatcher lagged; skipped {} ticks.", skipped);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                },
            }
        }
    }

    /// Recomputes the snapshot for `now` and pushes it to every consumer.
    ///
    /// The watcher lock is held from computation to broadcast, so concurrent
    /// refreshes reach consumers in the order their preferences were read.
    #[doc(hidden)]
    async fn refresh(&self, now: DateTime<Utc>) -> Arc<Snapshot> {
        let mut watcher = self.exam_watcher.write().await;
        let snapshot = Arc::new(self.snapshot_at(now).await);
        watcher.process_snapshot(&snapshot, &self.exam_event_sender);
        {
            let mut listeners = self.snapshot_listeners.write().await;
            for (_id, listener) in listeners.iter_mut() {
                listener(snapshot.as_ref());
            }
        }
        self.snapshot_sender.send(snapshot.clone()).ok();
        snapshot
    }

    #[doc(hidden)]
    async fn update_preferences(&self, change: impl FnOnce(&mut Preferences)) -> Arc<Snapshot> {
        let updated = {
            let mut preferences = self.preferences.write().await;
            change(&mut *preferences);
            *preferences
        };
        if let Err(e) = updated.save(self.store.as_ref()) {
            error!("Failed to persist preferences: {}", e);
        }
        info!(
            "Preferences changed: track={}, language={}, dark={}.",
            updated.track, updated.language, updated.dark
        );
        self.system_event_sender
            .send(SystemEvent::PreferencesChanged {
                preferences: updated,
            })
            .ok();
        self.refresh(self.time_source.now()).await
    }
}

// Public API implementation block.
impl ExamClockEngine {
    /// Computes the view for the current instant without broadcasting it.
    pub async fn snapshot(&self) -> Snapshot {
        self.snapshot_at(self.time_source.now()).await
    }

    /// Computes the view for an arbitrary instant without broadcasting it.
    pub async fn snapshot_at(&self, now: DateTime<Utc>) -> Snapshot {
        let preferences = *self.preferences.read().await;
        Snapshot::compute(&self.schedule, preferences, now)
    }

    pub async fn preferences(&self) -> Preferences {
        *self.preferences.read().await
    }

    /// The labels for the currently selected language.
    pub async fn translation(&self) -> &'static Translation {
        i18n::translation(self.preferences.read().await.language)
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn config(&self) -> &ExamClockConfig {
        &self.config
    }

    /// Selects a track, persists it, and broadcasts the recomputed snapshot.
    pub async fn set_track(&self, track: Track) -> Arc<Snapshot> {
        self.update_preferences(|preferences| preferences.track = track)
            .await
    }

    pub async fn set_language(&self, language: Language) -> Arc<Snapshot> {
        self.update_preferences(|preferences| preferences.language = language)
            .await
    }

    pub async fn toggle_language(&self) -> Arc<Snapshot> {
        self.update_preferences(|preferences| preferences.language = preferences.language.toggled())
            .await
    }

    pub async fn toggle_theme(&self) -> Arc<Snapshot> {
        self.update_preferences(|preferences| preferences.dark = !preferences.dark)
            .await
    }

    /// Registers a callback run with every snapshot the engine produces.
    ///
    /// # Returns
    /// A `ListenerId` which can be used to later remove this listener.
    pub async fn on_snapshot(
        &self,
        listener: impl FnMut(&Snapshot) + Send + Sync + 'static,
    ) -> ListenerId {
        let id = self
            .snapshot_listeners
            .write()
            .await
            .insert(Box::new(listener));
        self.system_event_sender
            .send(SystemEvent::ListenerAdded { id })
            .ok();
        id
    }

    /// Removes a snapshot listener.
    ///
    /// Returns `true` if the listener was found and removed.
    pub async fn remove_listener(&self, id: ListenerId) -> bool {
        let was_removed = self.snapshot_listeners.write().await.remove(id).is_some();
        if was_removed {
            self.system_event_sender
                .send(SystemEvent::ListenerRemoved { id })
                .ok();
        }
        was_removed
    }

    /// Subscribes to the raw `TickEvent` stream.
    pub fn subscribe_tick_events(&self) -> broadcast::Receiver<Arc<TickEvent>> {
        self.tick_sender.subscribe()
    }

    /// Subscribes to the per-tick `Snapshot` stream.
    pub fn subscribe_snapshots(&self) -> broadcast::Receiver<Arc<Snapshot>> {
        self.snapshot_sender.subscribe()
    }

    /// Subscribes to the `SystemEvent` stream.
    pub fn subscribe_system_events(&self) -> broadcast::Receiver<SystemEvent> {
        self.system_event_sender.subscribe()
    }

    /// Subscribes to the `ExamEvent` stream.
    pub fn subscribe_exam_events(&self) -> broadcast::Receiver<ExamEvent> {
        self.exam_event_sender.subscribe()
    }
}
