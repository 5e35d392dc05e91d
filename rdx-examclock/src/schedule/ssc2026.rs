//! The SSC 2026 routine (all education boards). Every written exam starts at 10:00 AM.

use super::ExamSpec;
use crate::common::Track::{self, Arts, Commerce, Science};

const ALL: &[Track] = &[Science, Commerce, Arts];

pub static SSC_2026: &[ExamSpec] = &[
    ExamSpec {
        id: "101",
        subject_en: "Bangla 1st Paper",
        subject_bn: "বাংলা (আবশ্যিক)-১ম পত্র",
        date: "2026-04-21",
        time: "10:00 AM",
        tracks: ALL,
        code: "101",
        is_practical: false,
    },
    ExamSpec {
        id: "102",
        subject_en: "Bangla 2nd Paper",
        subject_bn: "বাংলা (আবশ্যিক)-২য় পত্র",
        date: "2026-04-23",
        time: "10:00 AM",
        tracks: ALL,
        code: "102",
        is_practical: false,
    },
    ExamSpec {
        id: "107",
        subject_en: "English 1st Paper",
        subject_bn: "ইংরেজি (আবশ্যিক)-১ম পত্র",
        date: "2026-04-26",
        time: "10:00 AM",
        tracks: ALL,
        code: "107",
        is_practical: false,
    },
    ExamSpec {
        id: "108",
        subject_en: "English 2nd Paper",
        subject_bn: "ইংরেজি (আবশ্যিক)-২য় পত্র",
        date: "2026-04-28",
        time: "10:00 AM",
        tracks: ALL,
        code: "108",
        is_practical: false,
    },
    ExamSpec {
        id: "154",
        subject_en: "ICT",
        subject_bn: "তথ্য ও যোগাযোগ প্রযুক্তি",
        date: "2026-04-30",
        time: "10:00 AM",
        tracks: ALL,
        code: "154",
        is_practical: false,
    },
    ExamSpec {
        id: "109",
        subject_en: "Mathematics",
        subject_bn: "গণিত (আবশ্যিক)",
        date: "2026-05-03",
        time: "10:00 AM",
        tracks: ALL,
        code: "109",
        is_practical: false,
    },
    ExamSpec {
        id: "150",
        subject_en: "Bangladesh & Global Studies",
        subject_bn: "বাংলাদেশ ও বিশ্ব পরিচয়",
        date: "2026-05-05",
        time: "10:00 AM",
        tracks: &[Science],
        code: "150",
        is_practical: false,
    },
    ExamSpec {
        id: "111",
        subject_en: "Religion & Moral Education",
        subject_bn: "ধর্ম ও নৈতিক শিক্ষা",
        date: "2026-05-07",
        time: "10:00 AM",
        tracks: ALL,
        code: "111-114",
        is_practical: false,
    },
    ExamSpec {
        id: "136",
        subject_en: "Physics (Theory)",
        subject_bn: "পদার্থবিজ্ঞান (তত্ত্বীয়)",
        date: "2026-05-10",
        time: "10:00 AM",
        tracks: &[Science],
        code: "136",
        is_practical: false,
    },
    ExamSpec {
        id: "153",
        subject_en: "History of Bangladesh & World Civilization",
        subject_bn: "বাংলাদেশের ইতিহাস ও বিশ্বসভ্যতা",
        date: "2026-05-10",
        time: "10:00 AM",
        tracks: &[Arts],
        code: "153",
        is_practical: false,
    },
    ExamSpec {
        id: "152",
        subject_en: "Finance & Banking",
        subject_bn: "ফিন্যান্স ও ব্যাংকিং",
        date: "2026-05-10",
        time: "10:00 AM",
        tracks: &[Commerce],
        code: "152",
        is_practical: false,
    },
    ExamSpec {
        id: "110",
        subject_en: "Geography & Environment",
        subject_bn: "ভূগোল ও পরিবেশ",
        date: "2026-05-11",
        time: "10:00 AM",
        tracks: &[Arts],
        code: "110",
        is_practical: false,
    },
    ExamSpec {
        id: "134",
        subject_en: "Agri / Home Sci / Music / Arabic / Sports / Arts",
        subject_bn: "গার্হস্থ্য / কৃষি / সঙ্গীত / আরবি / পালি / শারীরিক শিক্ষা / চারু ও কারুকলা",
        date: "2026-05-12",
        time: "10:00 AM",
        tracks: ALL,
        code: "134/151+",
        is_practical: false,
    },
    ExamSpec {
        id: "146",
        subject_en: "Accounting",
        subject_bn: "হিসাব বিজ্ঞান",
        date: "2026-05-13",
        time: "10:00 AM",
        tracks: &[Commerce],
        code: "146",
        is_practical: false,
    },
    ExamSpec {
        id: "137",
        subject_en: "Chemistry (Theory)",
        subject_bn: "রসায়ন (তত্ত্বীয়)",
        date: "2026-05-14",
        time: "10:00 AM",
        tracks: &[Science],
        code: "137",
        is_practical: false,
    },
    ExamSpec {
        id: "140",
        subject_en: "Civics & Citizenship",
        subject_bn: "পৌরনীতি ও নাগরিকতা",
        date: "2026-05-14",
        time: "10:00 AM",
        tracks: &[Arts],
        code: "140",
        is_practical: false,
    },
    ExamSpec {
        id: "143",
        subject_en: "Business Entrepreneurship",
        subject_bn: "ব্যবসায় উদ্যোগ",
        date: "2026-05-14",
        time: "10:00 AM",
        tracks: &[Commerce],
        code: "143",
        is_practical: false,
    },
    ExamSpec {
        id: "126",
        subject_en: "Higher Math (Theory)",
        subject_bn: "উচ্চতর গণিত (তত্ত্বীয়)",
        date: "2026-05-17",
        time: "10:00 AM",
        tracks: &[Science],
        code: "126",
        is_practical: false,
    },
    ExamSpec {
        id: "127",
        subject_en: "General Science",
        subject_bn: "বিজ্ঞান",
        date: "2026-05-17",
        time: "10:00 AM",
        tracks: &[Arts, Commerce],
        code: "127",
        is_practical: false,
    },
    ExamSpec {
        id: "138",
        subject_en: "Biology (Theory)",
        subject_bn: "জীববিজ্ঞান (তত্ত্বীয়)",
        date: "2026-05-20",
        time: "10:00 AM",
        tracks: &[Science],
        code: "138",
        is_practical: false,
    },
    ExamSpec {
        id: "141",
        subject_en: "Economics",
        subject_bn: "অর্থনীতি",
        date: "2026-05-20",
        time: "10:00 AM",
        tracks: &[Arts],
        code: "141",
        is_practical: false,
    },
];
