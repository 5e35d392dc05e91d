//! The exam table: raw compiled-in rows and the validated `Schedule`.
//!
//! Rows are written as plain strings so the table reads like the printed
//! routine. Building a `Schedule` parses and checks every row once; after that
//! the engine only ever sees typed `ExamRecord`s.

mod ssc2026;

pub use ssc2026::SSC_2026;

use crate::common::{ExamId, Language, Track};
use crate::error::ScheduleError;
use crate::time::{cutoff_instant, exam_instant, parse_exam_date, parse_exam_time};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// One row of the exam table, as written in source.
#[derive(Debug, Clone, Copy)]
pub struct ExamSpec {
    pub id: &'static str,
    pub subject_en: &'static str,
    pub subject_bn: &'static str,
    /// ISO `YYYY-MM-DD`.
    pub date: &'static str,
    /// `H:MM AM|PM`, reference timezone.
    pub time: &'static str,
    pub tracks: &'static [Track],
    pub code: &'static str,
    pub is_practical: bool,
}

/// A validated exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExamRecord {
    pub id: ExamId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    /// The start time exactly as printed in the routine.
    pub start_label: String,
    pub tracks: Vec<Track>,
    pub subject_en: String,
    pub subject_bn: String,
    pub code: String,
    pub is_practical: bool,
}

impl ExamRecord {
    /// Validates a single row.
    pub fn from_spec(spec: &ExamSpec) -> Result<Self, ScheduleError> {
        let id = ExamId::from(spec.id);
        let wrap = |source: ScheduleError| ScheduleError::Record {
            id: id.clone(),
            source: Box::new(source),
        };
        let date = parse_exam_date(spec.date).map_err(wrap)?;
        let start_time = parse_exam_time(spec.time).map_err(wrap)?;
        if spec.tracks.is_empty() {
            return Err(ScheduleError::NoTracks(id));
        }
        Ok(Self {
            id,
            date,
            start_time,
            start_label: spec.time.to_string(),
            tracks: spec.tracks.to_vec(),
            subject_en: spec.subject_en.to_string(),
            subject_bn: spec.subject_bn.to_string(),
            code: spec.code.to_string(),
            is_practical: spec.is_practical,
        })
    }

    pub fn applies_to(&self, track: Track) -> bool {
        self.tracks.contains(&track)
    }

    /// The subject label in the requested language.
    pub fn subject(&self, language: Language) -> &str {
        match language {
            Language::En => &self.subject_en,
            Language::Bn => &self.subject_bn,
        }
    }

    /// The absolute instant the exam starts.
    pub fn starts_at(&self) -> DateTime<Utc> {
        exam_instant(self.date, self.start_time)
    }

    /// The instant after which this exam counts as completed (13:00 on its date).
    pub fn cutoff(&self) -> DateTime<Utc> {
        cutoff_instant(self.date)
    }
}

/// The full, validated exam table. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    exams: Vec<ExamRecord>,
}

impl Schedule {
    /// Builds a schedule from raw rows, rejecting the whole table on the first bad row.
    pub fn from_specs(specs: &[ExamSpec]) -> Result<Self, ScheduleError> {
        let mut seen = HashSet::with_capacity(specs.len());
        let mut exams = Vec::with_capacity(specs.len());
        for spec in specs {
            let record = ExamRecord::from_spec(spec)?;
            if !seen.insert(record.id.clone()) {
                return Err(ScheduleError::DuplicateId(record.id));
            }
            exams.push(record);
        }
        debug!("Loaded schedule with {} exams.", exams.len());
        Ok(Self { exams })
    }

    /// The compiled-in SSC 2026 routine.
    pub fn builtin() -> Result<Self, ScheduleError> {
        Self::from_specs(SSC_2026)
    }

    /// All exams in table order.
    pub fn exams(&self) -> &[ExamRecord] {
        &self.exams
    }

    pub fn get(&self, id: &ExamId) -> Option<&ExamRecord> {
        self.exams.iter().find(|exam| &exam.id == id)
    }

    pub fn len(&self) -> usize {
        self.exams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(id: &'static str, date: &'static str, time: &'static str) -> ExamSpec {
        ExamSpec {
            id,
            subject_en: "Subject",
            subject_bn: "বিষয়",
            date,
            time,
            tracks: &[Track::Science],
            code: id,
            is_practical: false,
        }
    }

    #[test]
    fn builtin_routine_is_valid() {
        let schedule = Schedule::builtin().unwrap();
        assert_eq!(schedule.len(), SSC_2026.len());
        let first = schedule.get(&ExamId::from("101")).unwrap();
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2026, 4, 21).unwrap());
        assert_eq!(first.tracks, Track::ALL.to_vec());
        assert_eq!(first.subject(Language::En), "Bangla 1st Paper");
    }

    #[test]
    fn rejects_bad_date_with_exam_context() {
        let err = Schedule::from_specs(&[spec("1", "2026-02-30", "10:00 AM")]).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::Record {
                id: ExamId::from("1"),
                source: Box::new(ScheduleError::InvalidDate("2026-02-30".to_string())),
            }
        );
    }

    #[test]
    fn rejects_bad_time() {
        let err = Schedule::from_specs(&[spec("1", "2026-04-21", "25:00")]).unwrap_err();
        assert!(matches!(err, ScheduleError::Record { .. }));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let rows = [spec("7", "2026-04-21", "10:00 AM"), spec("7", "2026-04-22", "10:00 AM")];
        assert_eq!(
            Schedule::from_specs(&rows).unwrap_err(),
            ScheduleError::DuplicateId(ExamId::from("7"))
        );
    }

    #[test]
    fn rejects_exam_without_tracks() {
        let mut row = spec("9", "2026-04-21", "10:00 AM");
        row.tracks = &[];
        assert_eq!(
            Schedule::from_specs(&[row]).unwrap_err(),
            ScheduleError::NoTracks(ExamId::from("9"))
        );
    }

    #[test]
    fn start_and_cutoff_are_independent_of_each_other() {
        let record = ExamRecord::from_spec(&spec("1", "2026-04-21", "2:00 PM")).unwrap();
        assert_eq!(
            record.starts_at(),
            DateTime::parse_from_rfc3339("2026-04-21T14:00:00+06:00").unwrap()
        );
        assert_eq!(
            record.cutoff(),
            DateTime::parse_from_rfc3339("2026-04-21T13:00:00+06:00").unwrap()
        );
    }
}
