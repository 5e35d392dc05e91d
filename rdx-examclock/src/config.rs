//! Defines all configuration structures for the Examclock engine.
//!
//! These structs are deserialized with `serde`, layered by the `config` crate
//! from an optional TOML file and `EXAMCLOCK__*` environment variables. The
//! exam table itself is compiled in and is never part of the configuration.

use crate::error::ConfigError;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default file name searched for in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "examclock.toml";

/// Upper bound for `ClockResolution::Custom`; the tick period never drops below 1ms.
pub const MAX_TICKS_PER_SECOND: u64 = 1_000;

/// The top-level configuration for the `ExamClockEngine`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExamClockConfig {
    /// The tick speed of the `SystemClock`.
    #[serde(default)]
    pub resolution: ClockResolution,

    /// Where user preferences are persisted. When unset, preferences are kept
    /// in memory for the lifetime of the process.
    #[serde(default)]
    pub preferences_path: Option<PathBuf>,

    /// The tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

/// Defines the operational speed of the `SystemClock`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockResolution {
    /// ~30 ticks per second. Smooth enough for animated displays.
    High,
    /// ~4 ticks per second.
    Medium,
    /// 1 tick per second, matching a seconds countdown.
    #[default]
    Low,
    /// A user-defined speed in ticks per second.
    Custom { ticks_per_second: u64 },
}

impl ClockResolution {
    /// The interval between two ticks.
    ///
    /// Custom rates are clamped to `1..=MAX_TICKS_PER_SECOND`, so the period is
    /// never zero.
    pub fn period(&self) -> Duration {
        let ticks_per_second = match self {
            ClockResolution::High => 30,
            ClockResolution::Medium => 4,
            ClockResolution::Low => 1,
            ClockResolution::Custom { ticks_per_second } => {
                (*ticks_per_second).clamp(1, MAX_TICKS_PER_SECOND)
            }
        };
        Duration::from_micros(1_000_000 / ticks_per_second)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self {
            ClockResolution::Custom { ticks_per_second }
                if !(1..=MAX_TICKS_PER_SECOND).contains(ticks_per_second) =>
            {
                Err(ConfigError::InvalidResolution {
                    ticks_per_second: *ticks_per_second,
                    max: MAX_TICKS_PER_SECOND,
                })
            }
            _ => Ok(()),
        }
    }
}

impl Default for ExamClockConfig {
    fn default() -> Self {
        Self {
            resolution: ClockResolution::default(),
            preferences_path: None,
            log_filter: default_log_filter(),
        }
    }
}

impl ExamClockConfig {
    /// Loads the configuration from `examclock.toml` (if present) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Loads the configuration from `path` (if present) and the environment.
    ///
    /// Environment variables use the `EXAMCLOCK` prefix and `__` as the
    /// nesting separator, e.g. `EXAMCLOCK__LOG_FILTER=debug`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(path, environment())
    }

    fn load_with(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()?;
        let config: Self = settings.try_deserialize()?;
        config.resolution.validate()?;
        Ok(config)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("EXAMCLOCK").separator("__")
}

// --- Default value functions for serde ---

fn default_log_filter() -> String {
    "info".to_string()
}
