//! Countdown arithmetic: whole seconds until a target, broken into units.

use crate::error::ScheduleError;
use crate::time::{exam_instant, parse_exam_time};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use std::fmt;

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Remaining duration until a target instant, never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub total_seconds: u64,
}

impl TimeRemaining {
    pub const ZERO: TimeRemaining = TimeRemaining {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        total_seconds: 0,
    };

    /// Decomposes a whole number of seconds.
    pub fn from_total_seconds(total_seconds: u64) -> Self {
        Self {
            days: total_seconds / SECONDS_PER_DAY,
            hours: (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total_seconds % SECONDS_PER_MINUTE,
            total_seconds,
        }
    }

    /// Time left from `now` until `target`, floored to whole seconds and clamped at zero.
    pub fn between(now: DateTime<Utc>, target: DateTime<Utc>) -> Self {
        let millis = (target - now).num_milliseconds();
        if millis <= 0 {
            return Self::ZERO;
        }
        Self::from_total_seconds(millis as u64 / 1000)
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds == 0
    }
}

/// Two-digit units, `DD:HH:MM:SS`; days widen past 99.
impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Countdown to an already-parsed date and start time in the reference timezone.
pub fn countdown_to(date: NaiveDate, time: NaiveTime, now: DateTime<Utc>) -> TimeRemaining {
    TimeRemaining::between(now, exam_instant(date, time))
}

/// Countdown to `target_date` at `target_time` (`"H:MM AM|PM"`) in the reference timezone.
pub fn countdown(
    target_date: NaiveDate,
    target_time: &str,
    now: DateTime<Utc>,
) -> Result<TimeRemaining, ScheduleError> {
    let time = parse_exam_time(target_time)?;
    Ok(countdown_to(target_date, time, now))
}
