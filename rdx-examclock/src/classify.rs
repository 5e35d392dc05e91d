//! Exam classification: which exams apply to a track, which are done, which is next.
//!
//! Every function here is pure over `(table, track, now)`. Completion is judged
//! against a fixed 13:00 cutoff on the exam's date, not against the exam's own
//! start time.

use crate::common::Track;
use crate::schedule::ExamRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Whether an exam is still ahead or already behind the student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamStatus {
    Upcoming,
    Completed,
}

/// Free days between two consecutive exams of a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gap {
    /// The exams are on consecutive days (or the same day).
    None,
    Days(u32),
}

/// Exams for `track`, ascending by date; same-date exams keep table order.
pub fn relevant_exams(table: &[ExamRecord], track: Track) -> Vec<&ExamRecord> {
    let mut exams: Vec<&ExamRecord> = table.iter().filter(|exam| exam.applies_to(track)).collect();
    // `sort_by_key` is stable.
    exams.sort_by_key(|exam| exam.date);
    exams
}

/// True once `now` is strictly past the exam's cutoff.
pub fn is_completed(exam: &ExamRecord, now: DateTime<Utc>) -> bool {
    now > exam.cutoff()
}

pub fn status(exam: &ExamRecord, now: DateTime<Utc>) -> ExamStatus {
    if is_completed(exam, now) {
        ExamStatus::Completed
    } else {
        ExamStatus::Upcoming
    }
}

/// The first relevant exam whose cutoff is still strictly ahead of `now`.
pub fn next_exam(table: &[ExamRecord], track: Track, now: DateTime<Utc>) -> Option<&ExamRecord> {
    relevant_exams(table, track)
        .into_iter()
        .find(|exam| exam.cutoff() > now)
}

/// Percentage of the track's exams that are completed; 0 for an empty season.
pub fn progress(table: &[ExamRecord], track: Track, now: DateTime<Utc>) -> f64 {
    let exams = relevant_exams(table, track);
    if exams.is_empty() {
        return 0.0;
    }
    let completed = exams.iter().filter(|exam| is_completed(exam, now)).count();
    completed as f64 / exams.len() as f64 * 100.0
}

/// Whether any of the track's exams is already completed.
///
/// Drives the "next exam" versus "exams start in" headline.
pub fn season_started(table: &[ExamRecord], track: Track, now: DateTime<Utc>) -> bool {
    table
        .iter()
        .filter(|exam| exam.applies_to(track))
        .any(|exam| is_completed(exam, now))
}

/// Free days between `previous` and `current`.
pub fn gap_between(previous: &ExamRecord, current: &ExamRecord) -> Gap {
    let free_days = (current.date - previous.date).num_days() - 1;
    if free_days <= 0 {
        Gap::None
    } else {
        Gap::Days(u32::try_from(free_days).unwrap_or(u32::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{ExamSpec, Schedule};
    use crate::common::Track::{Arts, Commerce, Science};
    use pretty_assertions::assert_eq;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    fn row(id: &'static str, date: &'static str, tracks: &'static [Track]) -> ExamSpec {
        ExamSpec {
            id,
            subject_en: id,
            subject_bn: id,
            date,
            time: "10:00 AM",
            tracks,
            code: id,
            is_practical: false,
        }
    }

    fn table() -> Schedule {
        Schedule::from_specs(&[
            row("c", "2026-05-03", &[Science]),
            row("a", "2026-04-21", &[Science, Arts]),
            row("b1", "2026-04-23", &[Science]),
            row("b2", "2026-04-23", &[Science]),
            row("x", "2026-04-22", &[Arts]),
        ])
        .unwrap()
    }

    fn ids(exams: &[&ExamRecord]) -> Vec<String> {
        exams.iter().map(|exam| exam.id.0.clone()).collect()
    }

    #[test]
    fn relevant_exams_sorts_by_date_and_keeps_table_order_for_ties() {
        let schedule = table();
        let exams = relevant_exams(schedule.exams(), Science);
        assert_eq!(ids(&exams), vec!["a", "b1", "b2", "c"]);
    }

    #[test]
    fn cutoff_is_strict() {
        let schedule = table();
        let exam = schedule.exams().iter().find(|e| e.id.0 == "a").unwrap();
        assert!(!is_completed(exam, at("2026-04-21T12:59:59+06:00")));
        assert!(!is_completed(exam, at("2026-04-21T13:00:00+06:00")));
        assert!(is_completed(exam, at("2026-04-21T13:00:01+06:00")));
        assert_eq!(status(exam, at("2026-04-21T13:00:01+06:00")), ExamStatus::Completed);
    }

    #[test]
    fn next_exam_skips_completed_and_prefers_table_order_on_ties() {
        let schedule = table();
        let now = at("2026-04-22T09:00:00+06:00");
        let next = next_exam(schedule.exams(), Science, now).unwrap();
        assert_eq!(next.id.0, "b1");
    }

    #[test]
    fn progress_counts_completed_share() {
        let schedule = table();
        let now = at("2026-04-23T14:00:00+06:00");
        assert_eq!(progress(schedule.exams(), Science, now), 75.0);
        assert_eq!(progress(schedule.exams(), Arts, now), 100.0);
    }

    #[test]
    fn empty_track_has_no_next_exam_and_zero_progress() {
        let schedule = table();
        let now = at("2026-04-20T00:00:00+06:00");
        assert_eq!(next_exam(schedule.exams(), Commerce, now), None);
        assert_eq!(progress(schedule.exams(), Commerce, now), 0.0);
        assert!(!season_started(schedule.exams(), Commerce, now));
    }

    #[test]
    fn season_starts_after_first_cutoff() {
        let schedule = table();
        assert!(!season_started(schedule.exams(), Science, at("2026-04-21T13:00:00+06:00")));
        assert!(season_started(schedule.exams(), Science, at("2026-04-21T13:00:01+06:00")));
    }

    #[test]
    fn gaps_between_consecutive_exams() {
        let schedule = table();
        let exams = relevant_exams(schedule.exams(), Science);
        assert_eq!(gap_between(exams[0], exams[1]), Gap::Days(1));
        assert_eq!(gap_between(exams[1], exams[2]), Gap::None);
        assert_eq!(gap_between(exams[2], exams[3]), Gap::Days(9));
        let arts = relevant_exams(schedule.exams(), Arts);
        assert_eq!(gap_between(arts[0], arts[1]), Gap::None);
    }
}
