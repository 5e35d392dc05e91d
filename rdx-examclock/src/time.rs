//! Time primitives: the fixed reference offset, exam time parsing, the
//! injectable wall clock, and the `SystemClock` ticker that drives the engine.
//!
//! All exam times are interpreted in a single fixed offset (UTC+6). There is
//! no timezone database involved and no daylight saving to account for.

use crate::config::ClockResolution;
use crate::error::ScheduleError;
use chrono::{DateTime, Duration as ChronoDuration, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace};

/// Offset of the reference timezone from UTC, in seconds (UTC+6).
pub const REFERENCE_OFFSET_SECS: i32 = 6 * 3600;

/// Wall-clock time on an exam date after which the exam counts as completed.
pub const CUTOFF_HOUR: u32 = 13;

/// The fixed UTC+6 offset all exam dates and times are read in.
pub fn reference_offset() -> FixedOffset {
    FixedOffset::east_opt(REFERENCE_OFFSET_SECS).expect("UTC+6 is within the valid offset range")
}

/// Parses a 12-hour `"H:MM AM|PM"` string into a 24-hour wall-clock time.
///
/// An hour of `12` is first mapped to `0`, then `PM` adds twelve hours. So
/// `"12:00 AM"` is midnight and `"12:00 PM"` is noon.
pub fn parse_exam_time(input: &str) -> Result<NaiveTime, ScheduleError> {
    let invalid = || ScheduleError::InvalidTime(input.to_string());

    let mut parts = input.split_whitespace();
    let (clock, designator) = match (parts.next(), parts.next(), parts.next()) {
        (Some(clock), Some(designator), None) => (clock, designator),
        _ => return Err(invalid()),
    };
    let (hour_str, minute_str) = clock.split_once(':').ok_or_else(invalid)?;
    if hour_str.is_empty() || hour_str.len() > 2 || minute_str.len() != 2 {
        return Err(invalid());
    }
    let hour: u32 = hour_str.parse().map_err(|_| invalid())?;
    let minute: u32 = minute_str.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&hour) {
        return Err(invalid());
    }

    let mut hour = if hour == 12 { 0 } else { hour };
    if designator.eq_ignore_ascii_case("PM") {
        hour += 12;
    } else if !designator.eq_ignore_ascii_case("AM") {
        return Err(invalid());
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Parses an ISO `YYYY-MM-DD` calendar date.
pub fn parse_exam_date(input: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| ScheduleError::InvalidDate(input.to_string()))
}

/// Combines a date and wall-clock time in the reference offset into an absolute instant.
pub fn exam_instant(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    let local = date.and_time(time);
    Utc.from_utc_datetime(&(local - ChronoDuration::seconds(i64::from(REFERENCE_OFFSET_SECS))))
}

/// The instant after which every exam held on `date` counts as completed.
pub fn cutoff_instant(date: NaiveDate) -> DateTime<Utc> {
    let cutoff = NaiveTime::from_hms_opt(CUTOFF_HOUR, 0, 0).expect("13:00 is a valid wall-clock time");
    exam_instant(date, cutoff)
}

/// A source of the current wall-clock instant.
///
/// The engine never counts ticks to derive time; it asks its `TimeSource` on
/// every tick, so throttled or missed ticks self-correct.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the host's real-time clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A manually controlled clock, used by tests and replays.
#[derive(Debug)]
pub struct ManualTimeSource {
    instant: RwLock<DateTime<Utc>>,
}

impl ManualTimeSource {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            instant: RwLock::new(start),
        }
    }

    /// Moves the clock to `instant`.
    pub fn set(&self, instant: DateTime<Utc>) {
        let mut guard = self.instant.write().unwrap_or_else(|e| e.into_inner());
        *guard = instant;
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: ChronoDuration) {
        let mut guard = self.instant.write().unwrap_or_else(|e| e.into_inner());
        *guard += by;
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.read().unwrap_or_else(|e| e.into_inner())
    }
}

/// A single reading of the clock, broadcast on every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickEvent {
    /// Number of ticks since the clock started, starting at 1.
    pub tick_count: u64,
    /// The live wall-clock instant read at this tick.
    pub now: DateTime<Utc>,
}

/// The ticker that acts as the engine's single source of time.
pub struct SystemClock {
    resolution: ClockResolution,
    time_source: Arc<dyn TimeSource>,
    tick_sender: broadcast::Sender<Arc<TickEvent>>,
}

impl SystemClock {
    pub fn new(
        resolution: ClockResolution,
        time_source: Arc<dyn TimeSource>,
        tick_sender: broadcast::Sender<Arc<TickEvent>>,
    ) -> Self {
        Self {
            resolution,
            time_source,
            tick_sender,
        }
    }

    /// Ticks at the configured resolution until the shutdown signal arrives.
    pub async fn run(self, mut shutdown_rx: broadcast::Receiver<()>) {
        let mut ticker = tokio::time::interval(self.resolution.period());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut tick_count: u64 = 0;
        debug!("SystemClock started at {:?}.", self.resolution);
        loop {
            tokio::select! {
                biased;
                _ = shutdown_rx.recv() => break,
                _ = ticker.tick() => {
                    tick_count += 1;
                    let tick = TickEvent { tick_count, now: self.time_source.now() };
                    if self.tick_sender.send(Arc::new(tick)).is_err() {
                        trace!("Tick #{} dropped: no subscribers.", tick_count);
                    }
                }
            }
        }
        debug!("SystemClock stopped after {} ticks.", tick_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("10:00 AM", 10, 0 ; "morning")]
    #[test_case("2:30 PM", 14, 30 ; "afternoon")]
    #[test_case("12:00 PM", 12, 0 ; "noon")]
    #[test_case("12:00 AM", 0, 0 ; "midnight")]
    #[test_case("12:45 am", 0, 45 ; "lowercase designator")]
    #[test_case("11:59 PM", 23, 59 ; "last minute")]
    fn parses_twelve_hour_times(input: &str, hour: u32, minute: u32) {
        let parsed = parse_exam_time(input).unwrap();
        assert_eq!(parsed, NaiveTime::from_hms_opt(hour, minute, 0).unwrap());
    }

    #[test_case("10:00" ; "missing designator")]
    #[test_case("13:00 PM" ; "hour out of range")]
    #[test_case("0:15 AM" ; "zero hour")]
    #[test_case("10:60 AM" ; "minute out of range")]
    #[test_case("10:0 AM" ; "single digit minute")]
    #[test_case("10:00 XM" ; "bad designator")]
    #[test_case("10:00 AM extra" ; "trailing text")]
    #[test_case("" ; "empty")]
    fn rejects_malformed_times(input: &str) {
        assert_eq!(
            parse_exam_time(input),
            Err(ScheduleError::InvalidTime(input.to_string()))
        );
    }

    #[test]
    fn exam_instant_applies_the_reference_offset() {
        let date = NaiveDate::from_ymd_opt(2026, 4, 21).unwrap();
        let time = parse_exam_time("10:00 AM").unwrap();
        let expected = DateTime::parse_from_rfc3339("2026-04-21T04:00:00Z").unwrap();
        assert_eq!(exam_instant(date, time), expected);
    }

    #[test]
    fn cutoff_is_one_pm_reference_time() {
        let date = NaiveDate::from_ymd_opt(2026, 5, 10).unwrap();
        let expected = DateTime::parse_from_rfc3339("2026-05-10T13:00:00+06:00").unwrap();
        assert_eq!(cutoff_instant(date), expected);
    }

    #[test]
    fn manual_time_source_advances() {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let clock = ManualTimeSource::new(start);
        clock.advance(ChronoDuration::seconds(90));
        assert_eq!(clock.now(), start + ChronoDuration::seconds(90));
        clock.set(start);
        assert_eq!(clock.now(), start);
    }

    #[tokio::test]
    async fn system_clock_stamps_ticks_from_its_time_source() {
        let start = Utc.with_ymd_and_hms(2026, 4, 20, 0, 0, 0).unwrap();
        let source = Arc::new(ManualTimeSource::new(start));
        let (tick_tx, mut tick_rx) = broadcast::channel(16);
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let clock = SystemClock::new(
            ClockResolution::Custom { ticks_per_second: 100 },
            source.clone(),
            tick_tx,
        );
        let handle = tokio::spawn(clock.run(shutdown_rx));

        let first = tick_rx.recv().await.unwrap();
        assert_eq!(first.tick_count, 1);
        assert_eq!(first.now, start);

        shutdown_tx.send(()).unwrap();
        handle.await.unwrap();
    }
}
