//! Aggregate metrics: syllable totals, complex-word ratio, grade level and
//! reading time.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::classify::Difficulty;
use crate::params::{round_to, PARAMS};
use crate::syllables::count_syllables;

/// Long words most readers handle without effort.
static EASY_POLYSYLLABLES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "another", "anything", "everyone", "everything", "everybody", "important", "together",
        "understand", "understood", "different", "difference", "company", "companies", "family",
        "families", "government", "interest", "interested", "interesting", "remember",
        "several", "yesterday", "tomorrow", "beautiful", "already", "business", "personal",
        "possible", "probably", "usually", "actually", "especially", "whatever", "whenever",
        "however", "computer", "official", "position", "general", "generally", "national",
        "natural", "material", "animal", "library", "tomato", "potato", "banana", "holiday",
        "hospital", "yourself", "somebody", "telephone", "television", "video", "radio",
        "energy", "history", "enemy", "camera", "area", "idea", "media", "america", "american",
        "similar", "example", "animals", "celebrate", "certainly", "continue", "develop",
        "educate", "exercise", "favorite", "finally", "imagine", "instead", "internet",
        "medicine", "memory", "minutes", "musical", "ordinary", "popular", "quality", "really",
        "seventeen", "seventy", "terrible", "thirteen", "usual", "vacation", "wonderful",
    ]
    .into_iter()
    .collect()
});

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingTime {
    pub minutes: u64,
    pub wpm: u32,
    pub formatted: String,
}

pub fn is_complex_word(word: &str) -> bool {
    word.chars().count() >= PARAMS.complex_min_len
        && !EASY_POLYSYLLABLES.contains(word)
        && count_syllables(word) >= PARAMS.complex_min_syllables
}

pub fn complex_word_ratio<S: AsRef<str>>(words: &[S]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let complex = words.iter().filter(|w| is_complex_word(w.as_ref())).count();
    complex as f64 / words.len() as f64
}

pub fn total_syllables<S: AsRef<str>>(words: &[S]) -> usize {
    words.iter().map(|w| count_syllables(w.as_ref())).sum()
}

/// Flesch-Kincaid grade, floored at 0 and rounded to one decimal.
///
/// Returns `None` when there are no words or no sentences.
pub fn grade_level(words: usize, sentences: usize, syllables: usize) -> Option<f64> {
    if words == 0 || sentences == 0 {
        return None;
    }
    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    let grade = PARAMS.grade_words_weight * words_per_sentence
        + PARAMS.grade_syllables_weight * syllables_per_word
        - PARAMS.grade_offset;
    Some(round_to(grade.max(0.0), 1))
}

pub fn words_per_minute(level: Difficulty) -> f64 {
    match level {
        Difficulty::Easy => PARAMS.wpm_easy,
        Difficulty::Medium => PARAMS.wpm_medium,
        Difficulty::Hard => PARAMS.wpm_hard,
    }
}

pub fn reading_time(word_count: usize, level: Difficulty) -> ReadingTime {
    let wpm = words_per_minute(level);
    let exact = word_count as f64 / wpm;
    let minutes = exact.round() as u64;
    let formatted = if exact < PARAMS.less_than_minute {
        "< 1 min".to_string()
    } else if minutes == 1 {
        "1 min".to_string()
    } else {
        format!("{minutes} mins")
    };
    ReadingTime {
        minutes,
        wpm: wpm as u32,
        formatted,
    }
}
