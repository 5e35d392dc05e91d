//! Contains the building blocks that react to time passing.
//!
//! The `ExamClockEngine` feeds every computed snapshot through these
//! components to derive higher-level events.

pub mod watcher;
