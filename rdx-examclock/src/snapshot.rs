//! The per-tick view handed to the presentation layer.

use crate::classify::{self, ExamStatus, Gap};
use crate::countdown::{countdown_to, TimeRemaining};
use crate::preferences::Preferences;
use crate::schedule::{ExamRecord, Schedule};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One row of the routine as shown for the selected track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExamEntry {
    pub exam: ExamRecord,
    pub status: ExamStatus,
    /// Free days since the previous exam of the season; `None` for the first.
    pub gap: Option<Gap>,
}

/// Everything derived from `(schedule, preferences, now)` for a single tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub now: DateTime<Utc>,
    pub preferences: Preferences,
    pub exams: Vec<ExamEntry>,
    pub next_exam: Option<ExamRecord>,
    /// Time until the next exam *starts*; zero when there is none or it has begun.
    pub time_remaining: TimeRemaining,
    pub progress: f64,
    pub season_started: bool,
}

impl Snapshot {
    /// Recomputes the full view from scratch.
    pub fn compute(schedule: &Schedule, preferences: Preferences, now: DateTime<Utc>) -> Self {
        let table = schedule.exams();
        let track = preferences.track;
        let relevant = classify::relevant_exams(table, track);

        let exams = relevant
            .iter()
            .enumerate()
            .map(|(index, exam)| ExamEntry {
                exam: (*exam).clone(),
                status: classify::status(exam, now),
                gap: index
                    .checked_sub(1)
                    .map(|prev| classify::gap_between(relevant[prev], exam)),
            })
            .collect();

        let next_exam = classify::next_exam(table, track, now).cloned();
        let time_remaining = next_exam
            .as_ref()
            .map(|exam| countdown_to(exam.date, exam.start_time, now))
            .unwrap_or(TimeRemaining::ZERO);

        Self {
            now,
            preferences,
            exams,
            next_exam,
            time_remaining,
            progress: classify::progress(table, track, now),
            season_started: classify::season_started(table, track, now),
        }
    }

    pub fn completed_count(&self) -> usize {
        self.exams
            .iter()
            .filter(|entry| entry.status == ExamStatus::Completed)
            .count()
    }

    /// True when every exam of the season is behind the student.
    pub fn season_finished(&self) -> bool {
        self.next_exam.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Language, Track};
    use pretty_assertions::assert_eq;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    fn prefs(track: Track) -> Preferences {
        Preferences {
            track,
            language: Language::En,
            dark: true,
        }
    }

    #[test]
    fn before_the_season_counts_down_to_the_first_exam() {
        let schedule = Schedule::builtin().unwrap();
        let snap = Snapshot::compute(&schedule, prefs(Track::Science), at("2026-04-20T10:00:00+06:00"));
        assert_eq!(snap.next_exam.as_ref().map(|e| e.id.0.as_str()), Some("101"));
        assert_eq!(snap.time_remaining.days, 1);
        assert_eq!(snap.time_remaining.hours, 0);
        assert!(!snap.season_started);
        assert_eq!(snap.progress, 0.0);
        assert_eq!(snap.exams[0].gap, None);
        assert_eq!(snap.exams[1].gap, Some(Gap::Days(1)));
    }

    #[test]
    fn between_start_and_cutoff_the_countdown_is_zero() {
        let schedule = Schedule::builtin().unwrap();
        let snap = Snapshot::compute(&schedule, prefs(Track::Arts), at("2026-04-21T11:30:00+06:00"));
        assert_eq!(snap.next_exam.as_ref().map(|e| e.id.0.as_str()), Some("101"));
        assert!(snap.time_remaining.is_zero());
        assert_eq!(snap.completed_count(), 0);
    }

    #[test]
    fn after_the_last_exam_the_season_is_finished() {
        let schedule = Schedule::builtin().unwrap();
        let snap = Snapshot::compute(&schedule, prefs(Track::Commerce), at("2026-06-01T00:00:00+06:00"));
        assert!(snap.season_finished());
        assert!(snap.season_started);
        assert_eq!(snap.time_remaining, TimeRemaining::ZERO);
        assert_eq!(snap.progress, 100.0);
        assert_eq!(snap.completed_count(), snap.exams.len());
    }
}
