//! Defines watchers that turn the snapshot stream into higher-level events.

use crate::classify::ExamStatus;
use crate::common::{ExamId, Track};
use crate::events::ExamEvent;
use crate::snapshot::Snapshot;
use std::collections::HashSet;
use tokio::sync::broadcast;

/// Watches consecutive snapshots for season milestones.
///
/// The first snapshot after creation or after a track change only primes the
/// watcher; exams that were already completed then are not reported.
#[derive(Debug, Default)]
pub(crate) struct ExamWatcher {
    track: Option<Track>,
    next_exam: Option<ExamId>,
    completed: HashSet<ExamId>,
}

impl ExamWatcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Compares `snapshot` against the previous one and returns the events it implies.
    pub(crate) fn observe(&mut self, snapshot: &Snapshot) -> Vec<ExamEvent> {
        let track = snapshot.preferences.track;
        let next_exam = snapshot.next_exam.as_ref().map(|exam| exam.id.clone());
        let completed: HashSet<ExamId> = snapshot
            .exams
            .iter()
            .filter(|entry| entry.status == ExamStatus::Completed)
            .map(|entry| entry.exam.id.clone())
            .collect();

        let primed = self.track == Some(track);
        let mut events = Vec::new();
        if primed {
            // Table order keeps the events deterministic.
            for entry in &snapshot.exams {
                if completed.contains(&entry.exam.id) && !self.completed.contains(&entry.exam.id) {
                    events.push(ExamEvent::ExamCompleted {
                        id: entry.exam.id.clone(),
                    });
                }
            }
            if next_exam != self.next_exam {
                events.push(ExamEvent::NextExamChanged {
                    previous: self.next_exam.clone(),
                    current: next_exam.clone(),
                });
                if next_exam.is_none() && !snapshot.exams.is_empty() {
                    events.push(ExamEvent::SeasonFinished { track });
                }
            }
        }

        self.track = Some(track);
        self.next_exam = next_exam;
        self.completed = completed;
        events
    }

    /// Observes and broadcasts in one step.
    pub(crate) fn process_snapshot(
        &mut self,
        snapshot: &Snapshot,
        exam_event_sender: &broadcast::Sender<ExamEvent>,
    ) {
        for event in self.observe(snapshot) {
            exam_event_sender.send(event).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Language;
    use crate::preferences::Preferences;
    use crate::schedule::Schedule;
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;

    fn snapshot(track: Track, at: &str) -> Snapshot {
        let schedule = Schedule::builtin().unwrap();
        let now = DateTime::parse_from_rfc3339(at).unwrap().with_timezone(&Utc);
        let preferences = Preferences {
            track,
            language: Language::En,
            dark: true,
        };
        Snapshot::compute(&schedule, preferences, now)
    }

    #[test]
    fn first_observation_only_primes() {
        let mut watcher = ExamWatcher::new();
        let events = watcher.observe(&snapshot(Track::Science, "2026-05-01T00:00:00+06:00"));
        assert!(events.is_empty());
    }

    #[test]
    fn crossing_a_cutoff_reports_completion_and_new_target() {
        let mut watcher = ExamWatcher::new();
        watcher.observe(&snapshot(Track::Science, "2026-04-21T12:59:59+06:00"));
        let events = watcher.observe(&snapshot(Track::Science, "2026-04-21T13:00:01+06:00"));
        assert_eq!(
            events,
            vec![
                ExamEvent::ExamCompleted { id: ExamId::from("101") },
                ExamEvent::NextExamChanged {
                    previous: Some(ExamId::from("101")),
                    current: Some(ExamId::from("102")),
                },
            ]
        );
    }

    #[test]
    fn last_cutoff_finishes_the_season() {
        let mut watcher = ExamWatcher::new();
        watcher.observe(&snapshot(Track::Arts, "2026-05-20T12:00:00+06:00"));
        let events = watcher.observe(&snapshot(Track::Arts, "2026-05-20T13:30:00+06:00"));
        assert_eq!(
            events.last(),
            Some(&ExamEvent::SeasonFinished { track: Track::Arts })
        );
    }

    #[test]
    fn track_change_reprimes_silently() {
        let mut watcher = ExamWatcher::new();
        watcher.observe(&snapshot(Track::Science, "2026-05-15T00:00:00+06:00"));
        let events = watcher.observe(&snapshot(Track::Commerce, "2026-05-15T00:00:00+06:00"));
        assert!(events.is_empty());
    }
}
