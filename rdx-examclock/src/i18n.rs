//! Display strings for both supported languages, plus the informational panels.

use crate::classify::Gap;
use crate::common::{Language, Track};

/// Every label the presentation layer needs, in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub days: &'static str,
    pub day: &'static str,
    pub hours: &'static str,
    pub minutes: &'static str,
    pub seconds: &'static str,
    pub upcoming: &'static str,
    pub completed: &'static str,
    pub next_exam: &'static str,
    pub starts_in: &'static str,
    pub practical_info: &'static str,
    pub instructions: &'static str,
    pub group_science: &'static str,
    pub group_commerce: &'static str,
    pub group_arts: &'static str,
    pub exam_code: &'static str,
    pub routine_title: &'static str,
    pub season_progress: &'static str,
    pub no_exam: &'static str,
    pub good_luck: &'static str,
    pub gap: &'static str,
    pub no_gap: &'static str,
}

pub static EN: Translation = Translation {
    title: "SSC 2026 Companion",
    subtitle: "All Education Boards",
    days: "Days",
    day: "Day",
    hours: "Hours",
    minutes: "Mins",
    seconds: "Secs",
    upcoming: "Upcoming Exams",
    completed: "Completed",
    next_exam: "Next Exam",
    starts_in: "Exam Starts In",
    practical_info: "Practical Exam Info",
    instructions: "Special Instructions",
    group_science: "Science",
    group_commerce: "Commerce",
    group_arts: "Arts",
    exam_code: "Code",
    routine_title: "Examination Routine",
    season_progress: "Season Progress",
    no_exam: "No pending exams found for this group.",
    good_luck: "Good Luck!",
    gap: "Gap",
    no_gap: "No Gap",
};

pub static BN: Translation = Translation {
    title: "এসএসসি ২০২৬ সহায়ক",
    subtitle: "সকল শিক্ষা বোর্ড",
    days: "দিন",
    day: "দিন",
    hours: "ঘণ্টা",
    minutes: "মিনিট",
    seconds: "সেকেন্ড",
    upcoming: "আসন্ন পরীক্ষাসমূহ",
    completed: "সম্পন্ন",
    next_exam: "পরবর্তী পরীক্ষা",
    starts_in: "পরীক্ষা শুরু হতে বাকি",
    practical_info: "ব্যাবহারিক তথ্য",
    instructions: "বিশেষ নির্দেশাবলী",
    group_science: "বিজ্ঞান",
    group_commerce: "ব্যবসায়",
    group_arts: "মানবিক",
    exam_code: "কোড",
    routine_title: "পরীক্ষার রুটিন",
    season_progress: "পরীক্ষা অগ্রগতি",
    no_exam: "এই গ্রুপের জন্য আর কোন পরীক্ষা নেই।",
    good_luck: "শুভ কামনা!",
    gap: "ছুটি",
    no_gap: "ছুটি নেই",
};

pub fn translation(language: Language) -> &'static Translation {
    match language {
        Language::En => &EN,
        Language::Bn => &BN,
    }
}

impl Translation {
    pub fn track_name(&self, track: Track) -> &'static str {
        match track {
            Track::Science => self.group_science,
            Track::Commerce => self.group_commerce,
            Track::Arts => self.group_arts,
        }
    }

    /// Headline above the countdown.
    pub fn headline(&self, season_started: bool) -> &'static str {
        if season_started {
            self.next_exam
        } else {
            self.starts_in
        }
    }

    /// e.g. "1 Day Gap", "3 Days Gap", "No Gap".
    pub fn gap_label(&self, gap: Gap) -> String {
        match gap {
            Gap::None => self.no_gap.to_string(),
            Gap::Days(1) => format!("1 {} {}", self.day, self.gap),
            Gap::Days(n) => format!("{} {} {}", n, self.days, self.gap),
        }
    }
}

pub const PRACTICAL_INFO_EN: &str = "Practical exams will be held from Wednesday, May 27, 2026, to Tuesday, June 2, 2026. Exams start at 10:00 AM at respective centers. You must bring your admit card and registration card. Music practical students must report by 9:30 AM.";
pub const PRACTICAL_INFO_BN: &str = "ব্যবহারিক পরীক্ষা ২৭/০৫/২০২৬ বুধবার হতে ০২/০৬/২০২৬ মঙ্গলবার পর্যন্ত প্রতিদিন সকাল ১০টা হতে স্ব-স্ব কেন্দ্রে অনুষ্ঠিত হবে। সঙ্গীত বিষয়ের ব্যবহারিক পরীক্ষার জন্য সকাল ৯:৩০ মিনিটের মধ্যে উপস্থিত হতে হবে।";

pub const INSTRUCTIONS_EN: &[&str] = &[
    "Must enter the exam hall 30 minutes before the start.",
    "MCQ exam is held first, followed by CQ (Creative) with no break in between.",
    "Collect Admit Card from your school head at least 3 days prior.",
    "Fill OMR circles carefully with a black ballpoint pen.",
    "Mobile phones are strictly prohibited (except non-programmable calculators).",
    "You must pass separately in Theory, MCQ, and Practical parts.",
];

pub const INSTRUCTIONS_BN: &[&str] = &[
    "পরীক্ষা শুরুর ৩০ মিনিট পূর্বে অবশ্যই পরীক্ষাকক্ষে আসন গ্রহণ করতে হবে।",
    "প্রথমে বহুনির্বাচনী ও পরে সৃজনশীল/রচনামূলক পরীক্ষা হবে; মাঝখানে কোনো বিরতি থাকবে না।",
    "পরীক্ষা শুরুর অন্তত ৩ দিন পূর্বে প্রতিষ্ঠান প্রধানের নিকট হতে প্রবেশপত্র সংগ্রহ করতে হবে।",
    "কালো বলপয়েন্ট কলম দিয়ে OMR ফরমের বৃত্ত ভরাট করতে হবে।",
    "মোবাইল ফোন আনা সম্পূর্ণ নিষেধ (নন-প্রোগ্রামেবল ক্যালকুলেটর ব্যতীত)।",
    "সৃজনশীল, বহুনির্বাচনী ও ব্যবহারিক অংশে পৃথকভাবে পাস করতে হবে।",
];

pub fn practical_info(language: Language) -> &'static str {
    match language {
        Language::En => PRACTICAL_INFO_EN,
        Language::Bn => PRACTICAL_INFO_BN,
    }
}

pub fn instructions(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => INSTRUCTIONS_EN,
        Language::Bn => INSTRUCTIONS_BN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_labels_pluralize() {
        assert_eq!(EN.gap_label(Gap::None), "No Gap");
        assert_eq!(EN.gap_label(Gap::Days(1)), "1 Day Gap");
        assert_eq!(EN.gap_label(Gap::Days(3)), "3 Days Gap");
        assert_eq!(BN.gap_label(Gap::Days(2)), "2 দিন ছুটি");
    }

    #[test]
    fn headline_follows_season_state() {
        assert_eq!(EN.headline(false), "Exam Starts In");
        assert_eq!(translation(Language::Bn).headline(true), "পরবর্তী পরীক্ষা");
    }

    #[test]
    fn both_languages_carry_the_same_instructions() {
        assert_eq!(instructions(Language::En).len(), instructions(Language::Bn).len());
        assert!(practical_info(Language::En).contains("May 27, 2026"));
    }
}
