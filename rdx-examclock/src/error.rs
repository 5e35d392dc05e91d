//! Error types surfaced by the library.
//!
//! Bad schedule data is a startup failure. Preference problems are reported to
//! the caller, which logs them and falls back to defaults.

use crate::common::ExamId;
use std::path::PathBuf;
use thiserror::Error;

/// Rejection of the exam table while building a `Schedule`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("invalid exam date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid exam time '{0}', expected H:MM AM|PM")]
    InvalidTime(String),

    #[error("exam {0} is not assigned to any track")]
    NoTracks(ExamId),

    #[error("exam id {0} appears more than once")]
    DuplicateId(ExamId),

    #[error("exam {id}: {source}")]
    Record {
        id: ExamId,
        #[source]
        source: Box<ScheduleError>,
    },
}

/// Failure of a `PreferenceStore` backend.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to access preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failure to assemble the engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("custom resolution of {ticks_per_second} ticks/s is outside 1..={max}")]
    InvalidResolution { ticks_per_second: u64, max: u64 },
}
