//! # Examclock
//!
//! A tick-driven countdown engine for the SSC 2026 exam routine.
//!
//! Examclock answers, once per second, the questions a student keeps asking
//! during exam season: which exams apply to my track, which are done, what is
//! next, and how long until it starts.
//!
//! ## Core Concepts
//!
//! - **SystemClock**: A ticker that re-reads the wall clock on every tick, so
//!   missed or throttled ticks never accumulate drift.
//! - **Fixed reference time**: All exam times are UTC+6. An exam counts as
//!   completed once 13:00 on its date has passed.
//! - **Snapshots**: Every tick produces a fresh `Snapshot` (routine with
//!   statuses and gaps, next exam, countdown, progress). Nothing is cached
//!   between ticks.
//! - **Event-Driven**: Presentation layers subscribe to snapshot, exam and
//!   system event streams.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use examclock::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // 1. Build the validated exam table and a preference store.
//!     let schedule = Schedule::builtin()?;
//!     let store = Arc::new(MemoryStore::new());
//!
//!     // 2. Create the engine.
//!     let engine = ExamClockEngine::new(ExamClockConfig::default(), schedule, store);
//!
//!     // 3. Subscribe before starting the engine.
//!     let mut snapshots = engine.subscribe_snapshots();
//!     tokio::spawn(async move {
//!         while let Ok(snapshot) = snapshots.recv().await {
//!             println!("{}", snapshot.time_remaining);
//!         }
//!     });
//!
//!     // 4. Run the engine. It will shut down on Ctrl+C.
//!     engine.run().await?;
//!
//!     Ok(())
//! }
//! ```

pub const ENGINE_NAME: &str = "Exam Engine";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Declare all the modules in the crate.
pub mod classify;
pub mod common;
pub mod components;
pub mod config;
pub mod countdown;
pub mod engine;
pub mod error;
pub mod events;
pub mod i18n;
pub mod preferences;
pub mod schedule;
pub mod snapshot;
pub mod time;

/// A prelude module for easy importing of the most common Examclock types.
pub mod prelude {
    pub use crate::classify::{ExamStatus, Gap};
    pub use crate::common::{ExamId, Language, ListenerId, Track};
    pub use crate::config::{ClockResolution, ExamClockConfig};
    pub use crate::countdown::TimeRemaining;
    pub use crate::engine::ExamClockEngine;
    pub use crate::error::{ConfigError, PreferenceError, ScheduleError};
    pub use crate::events::{ExamEvent, SystemEvent};
    pub use crate::i18n::Translation;
    pub use crate::preferences::{FileStore, MemoryStore, PreferenceStore, Preferences};
    pub use crate::schedule::{ExamRecord, Schedule};
    pub use crate::snapshot::{ExamEntry, Snapshot};
    pub use crate::time::{ManualTimeSource, SystemTimeSource, TimeSource};
}
