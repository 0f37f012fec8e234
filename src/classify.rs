//! Discrete labels derived from the aggregate metrics.

use std::fmt;

use serde::Serialize;

use crate::params::PARAMS;

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorClass {
    Good,
    Neutral,
    Warn,
    Bad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentenceQuality {
    #[serde(rename = "Too Short")]
    TooShort,
    Short,
    Optimal,
    Long,
    #[serde(rename = "Too Long")]
    TooLong,
}

impl fmt::Display for SentenceQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SentenceQuality::TooShort => "Too Short",
            SentenceQuality::Short => "Short",
            SentenceQuality::Optimal => "Optimal",
            SentenceQuality::Long => "Long",
            SentenceQuality::TooLong => "Too Long",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WordCountCategory {
    #[serde(rename = "Quick Read")]
    QuickRead,
    Short,
    Medium,
    #[serde(rename = "Long Read")]
    LongRead,
    #[serde(rename = "In-Depth")]
    InDepth,
}

impl fmt::Display for WordCountCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WordCountCategory::QuickRead => "Quick Read",
            WordCountCategory::Short => "Short",
            WordCountCategory::Medium => "Medium",
            WordCountCategory::LongRead => "Long Read",
            WordCountCategory::InDepth => "In-Depth",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Label<T> {
    pub label: T,
    pub color_class: ColorClass,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

fn grade_band(grade: f64) -> Difficulty {
    if grade <= PARAMS.easy_max_grade {
        Difficulty::Easy
    } else if grade <= PARAMS.medium_max_grade {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}

// 0-4, used when no grade can be computed.
fn composite_score(avg_sentence_length: f64, complex_ratio: f64) -> u32 {
    let length_points = if avg_sentence_length <= PARAMS.composite_short_sentence_max {
        0
    } else if avg_sentence_length <= PARAMS.composite_medium_sentence_max {
        1
    } else {
        2
    };
    let complexity_points = if complex_ratio <= PARAMS.composite_low_complex_ratio {
        0
    } else if complex_ratio <= PARAMS.composite_medium_complex_ratio {
        1
    } else {
        2
    };
    length_points + complexity_points
}

fn composite_band(score: u32) -> Difficulty {
    if score <= PARAMS.composite_easy_max {
        Difficulty::Easy
    } else if score <= PARAMS.composite_medium_max {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}

/// Difficulty tier.
///
/// Under 100 words the answer is always `Medium`. Between 100 and 299 words
/// a `Hard` verdict is softened to `Medium` unless the grade is at least 15.
pub fn classify_difficulty(
    word_count: usize,
    grade: Option<f64>,
    avg_sentence_length: f64,
    complex_ratio: f64,
) -> Difficulty {
    if word_count < PARAMS.low_confidence_words {
        return Difficulty::Medium;
    }
    let short_sample = word_count < PARAMS.softening_max_words;

    match grade {
        Some(grade) => {
            let level = grade_band(grade);
            if level == Difficulty::Hard && short_sample && grade < PARAMS.softening_max_grade {
                Difficulty::Medium
            } else {
                level
            }
        }
        None => {
            let level = composite_band(composite_score(avg_sentence_length, complex_ratio));
            if level == Difficulty::Hard && short_sample {
                Difficulty::Medium
            } else {
                level
            }
        }
    }
}

pub fn sentence_quality(avg_sentence_length: f64) -> Label<SentenceQuality> {
    let (label, color_class) = if avg_sentence_length < PARAMS.quality_too_short_below {
        (SentenceQuality::TooShort, ColorClass::Warn)
    } else if avg_sentence_length <= PARAMS.quality_short_max {
        (SentenceQuality::Short, ColorClass::Good)
    } else if avg_sentence_length <= PARAMS.quality_optimal_max {
        (SentenceQuality::Optimal, ColorClass::Good)
    } else if avg_sentence_length <= PARAMS.quality_long_max {
        (SentenceQuality::Long, ColorClass::Warn)
    } else {
        (SentenceQuality::TooLong, ColorClass::Bad)
    };
    Label { label, color_class }
}

pub fn word_count_category(word_count: usize) -> Label<WordCountCategory> {
    let (label, color_class) = if word_count < PARAMS.category_quick_below {
        (WordCountCategory::QuickRead, ColorClass::Good)
    } else if word_count <= PARAMS.category_short_max {
        (WordCountCategory::Short, ColorClass::Good)
    } else if word_count <= PARAMS.category_medium_max {
        (WordCountCategory::Medium, ColorClass::Neutral)
    } else if word_count <= PARAMS.category_long_max {
        (WordCountCategory::LongRead, ColorClass::Warn)
    } else {
        (WordCountCategory::InDepth, ColorClass::Warn)
    };
    Label { label, color_class }
}
