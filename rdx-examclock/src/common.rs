//! Contains common, primitive types shared across the engine.
//!
//! This module defines the user-facing enumerations (`Track`, `Language`) and
//! the ID types used to identify exams and registered listeners. Using distinct
//! types improves type safety and code clarity.

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use std::fmt;
use std::str::FromStr;

new_key_type! {
    /// Uniquely and safely identifies a registered snapshot listener within the engine.
    ///
    /// This key is returned when a listener is added to the engine. It is
    /// guaranteed to be unique and will not be reused, preventing stale ID bugs.
    pub struct ListenerId;
}

/// Identifies a single exam in the schedule table (e.g. `"101"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExamId(pub String);

impl fmt::Display for ExamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExamId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// The academic stream that determines which exams apply to a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    #[default]
    Science,
    Commerce,
    Arts,
}

impl Track {
    /// Every track, in the order they are presented.
    pub const ALL: [Track; 3] = [Track::Science, Track::Commerce, Track::Arts];

    /// The stable key used when persisting this track.
    pub fn as_str(&self) -> &'static str {
        match self {
            Track::Science => "science",
            Track::Commerce => "commerce",
            Track::Arts => "arts",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Track {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Track::ALL
            .into_iter()
            .find(|track| track.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "track",
                value: s.to_string(),
            })
    }
}

/// The display language for subjects and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Bn,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Bn];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Bn => "bn",
        }
    }

    /// The other language; used by the shell's quick toggle.
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Bn,
            Language::Bn => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "language",
                value: s.to_string(),
            })
    }
}

/// Returned when a string does not name any variant of a user-facing enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
