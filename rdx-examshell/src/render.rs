//! Text rendering of engine snapshots for the terminal.

use colored::Colorize;
use examclock::i18n::{self, Translation};
use examclock::prelude::*;
use std::fmt::Write;

const BAR_WIDTH: usize = 30;

/// The hero block: headline, subject, start time and the four countdown units.
pub fn render_next(snapshot: &Snapshot, t: &Translation) -> String {
    let language = snapshot.preferences.language;
    let Some(exam) = &snapshot.next_exam else {
        return format!(
            "{}\n{}",
            t.good_luck.green().bold(),
            t.no_exam.dimmed()
        );
    };

    let left = snapshot.time_remaining;
    let mut out = String::new();
    writeln!(out, "{}", t.headline(snapshot.season_started).cyan().bold()).ok();
    writeln!(out, "{}", exam.subject(language).bold()).ok();
    writeln!(out, "{} • {}", exam.start_label, exam.date.format("%Y-%m-%d")).ok();
    write!(out, "{}", render_countdown(&left, t).as_str().yellow()).ok();
    out
}

/// `DD Days  HH Hours  MM Mins  SS Secs`
pub fn render_countdown(left: &TimeRemaining, t: &Translation) -> String {
    format!(
        "{:02} {}  {:02} {}  {:02} {}  {:02} {}",
        left.days, t.days, left.hours, t.hours, left.minutes, t.minutes, left.seconds, t.seconds
    )
}

/// The routine for the selected track with status, code and gap per exam.
pub fn render_list(snapshot: &Snapshot, t: &Translation) -> String {
    let language = snapshot.preferences.language;
    let mut out = String::new();
    writeln!(
        out,
        "{}: {}",
        t.routine_title.bold(),
        t.track_name(snapshot.preferences.track)
    )
    .ok();
    if snapshot.exams.is_empty() {
        write!(out, "{}", t.no_exam.dimmed()).ok();
        return out;
    }
    for entry in &snapshot.exams {
        if let Some(gap) = entry.gap {
            writeln!(out, "      {}", t.gap_label(gap).as_str().dimmed()).ok();
        }
        let line = format!(
            "{} {}  {}  ({} {})",
            entry.exam.date.format("%a %d %b"),
            entry.exam.start_label,
            entry.exam.subject(language),
            t.exam_code,
            entry.exam.code
        );
        match entry.status {
            ExamStatus::Completed => {
                writeln!(out, "  [x] {} {}", line.as_str().dimmed(), t.completed.green()).ok()
            }
            ExamStatus::Upcoming => writeln!(out, "  [ ] {}", line).ok(),
        };
    }
    out
}

/// `Season Progress  43%  [#############.................]`
pub fn render_progress(snapshot: &Snapshot, t: &Translation) -> String {
    let percent = snapshot.progress.clamp(0.0, 100.0);
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "{}  {:.0}%  [{}{}]",
        t.season_progress.bold(),
        percent,
        "#".repeat(filled).as_str().blue(),
        ".".repeat(BAR_WIDTH - filled).as_str().dimmed()
    )
}

/// Which informational panel to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoPanel {
    Practical,
    Instructions,
}

pub fn render_info(panel: InfoPanel, language: Language) -> String {
    let t = i18n::translation(language);
    match panel {
        InfoPanel::Practical => format!(
            "{}\n{}",
            t.practical_info.bold(),
            i18n::practical_info(language)
        ),
        InfoPanel::Instructions => {
            let mut out = format!("{}", t.instructions.bold());
            for (index, line) in i18n::instructions(language).iter().enumerate() {
                write!(out, "\n  {}. {}", index + 1, line).ok();
            }
            out
        }
    }
}
