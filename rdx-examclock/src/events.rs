//! Defines all public event types broadcast by the Examclock engine.
//!
//! Listeners subscribe to these strongly-typed streams; the engine never calls
//! back into the presentation layer directly except through `on_snapshot`.

use crate::common::{ExamId, ListenerId, Track};
use crate::preferences::Preferences;
use chrono::{DateTime, Utc};

/// Events related to the lifecycle and state of the engine itself.
#[derive(Debug, Clone, PartialEq)]
pub enum SystemEvent {
    /// Fired once when the engine's `run` loop begins.
    EngineStarted { timestamp: DateTime<Utc> },
    /// Fired once when the engine's `run` loop is about to exit.
    EngineShutdown,
    /// Fired when a snapshot listener is added.
    ListenerAdded { id: ListenerId },
    /// Fired when a snapshot listener is removed.
    ListenerRemoved { id: ListenerId },
    /// Fired after the user changes track, language, or theme.
    PreferencesChanged { preferences: Preferences },
}

/// Transitions in the exam season, detected between consecutive ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExamEvent {
    /// The exam the countdown targets is now a different one (or none).
    NextExamChanged {
        previous: Option<ExamId>,
        current: Option<ExamId>,
    },
    /// An exam's cutoff passed since the last tick.
    ExamCompleted { id: ExamId },
    /// The last exam of the track's season just completed.
    SeasonFinished { track: Track },
}
