// Property tests for the classification and countdown arithmetic.
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use examclock::classify::{is_completed, next_exam, progress};
use examclock::countdown::{countdown, TimeRemaining};
use examclock::prelude::*;
use examclock::time::{cutoff_instant, exam_instant, parse_exam_time};
use proptest::prelude::*;

fn season_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap()
}

fn any_track() -> impl Strategy<Value = Track> {
    prop_oneof![Just(Track::Science), Just(Track::Commerce), Just(Track::Arts)]
}

/// Instants spanning a little before the first exam to a little after the last.
fn season_instant() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..70 * 86_400).prop_map(|secs| season_start() + Duration::seconds(secs))
}

proptest! {
    #[test]
    fn completion_flips_strictly_after_the_cutoff(day in 0i64..3650, offset in -200_000i64..200_000) {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(day);
        let spec = examclock::schedule::ExamSpec {
            id: "p",
            subject_en: "P",
            subject_bn: "P",
            date: "2020-01-01",
            time: "10:00 AM",
            tracks: &[Track::Science],
            code: "p",
            is_practical: false,
        };
        let mut exam = ExamRecord::from_spec(&spec).unwrap();
        exam.date = date;
        let now = cutoff_instant(date) + Duration::seconds(offset);
        prop_assert_eq!(is_completed(&exam, now), offset > 0);
    }

    #[test]
    fn next_exam_is_never_completed(track in any_track(), now in season_instant()) {
        let schedule = Schedule::builtin().unwrap();
        if let Some(exam) = next_exam(schedule.exams(), track, now) {
            prop_assert!(!is_completed(exam, now));
        }
    }

    #[test]
    fn countdown_units_recompose_to_the_total(
        target_offset in 0i64..400 * 86_400,
        now_offset in 0i64..400 * 86_400 * 1000,
    ) {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + Duration::days(target_offset / 86_400);
        let now = season_start() - Duration::days(200) + Duration::milliseconds(now_offset);
        let left = countdown(date, "10:00 AM", now).unwrap();
        prop_assert_eq!(
            left.days * 86_400 + left.hours * 3_600 + left.minutes * 60 + left.seconds,
            left.total_seconds
        );
        prop_assert!(left.hours < 24 && left.minutes < 60 && left.seconds < 60);
        let target = exam_instant(date, parse_exam_time("10:00 AM").unwrap());
        if target <= now {
            prop_assert_eq!(left, TimeRemaining::ZERO);
        }
    }

    #[test]
    fn progress_never_decreases(track in any_track(), a in season_instant(), b in season_instant()) {
        let schedule = Schedule::builtin().unwrap();
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        let before = progress(schedule.exams(), track, earlier);
        let after = progress(schedule.exams(), track, later);
        prop_assert!(before <= after);
        prop_assert!((0.0..=100.0).contains(&after));
    }

    #[test]
    fn instant_reconstruction_is_deterministic(day in 0i64..3650) {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(day);
        let first = exam_instant(date, parse_exam_time("10:00 AM").unwrap());
        let second = exam_instant(date, parse_exam_time("10:00 AM").unwrap());
        prop_assert_eq!(first, second);
    }
}
