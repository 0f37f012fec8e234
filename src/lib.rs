//! Rule-based readability scoring for English prose.
//!
//! [`analyze`] takes the full text and its paragraphs and returns an
//! [`AnalysisResult`]: grade level, difficulty tier, reading time, sentence
//! and word counts, summary labels, and a list of structural issues that
//! point back into the paragraph list by index.
//!
//! Every function here is pure. The same input always produces the same
//! result, and degenerate input (empty text, no sentences) yields zeroed
//! metrics rather than an error.

pub mod classify;
pub mod error;
pub mod issues;
pub mod metrics;
mod params;
pub mod segment;
pub mod syllables;

use serde::Serialize;

pub use classify::{ColorClass, Difficulty, Label, SentenceQuality, WordCountCategory};
pub use error::{Error, Result};
pub use issues::{ComplexSentenceIssue, DenseParagraphIssue, DensityTrigger, Issues};
pub use metrics::ReadingTime;
pub use segment::{extract_sentences, extract_words, split_paragraphs};
pub use syllables::count_syllables;

use params::{round_to, PARAMS};

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub level: Difficulty,
    /// Grade level, 0 when it cannot be computed.
    pub grade: f64,
    pub reading_time: ReadingTime,
    pub word_count: usize,
    pub word_count_category: Label<WordCountCategory>,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
    pub sentence_quality: Label<SentenceQuality>,
    pub syllable_count: usize,
    pub complex_word_ratio: f64,
    /// Fewer than 100 words: the level is not grade-based.
    pub is_low_confidence: bool,
    /// The source text is under 50 characters; issue lists are left empty.
    pub input_too_short: bool,
    pub issues: Issues,
}

impl AnalysisResult {
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!(
                "Level: {} (grade {:.1}){}",
                self.level,
                self.grade,
                if self.is_low_confidence {
                    ", low confidence"
                } else {
                    ""
                }
            ),
            format!(
                "Reading time: {} at {} wpm",
                self.reading_time.formatted, self.reading_time.wpm
            ),
            format!(
                "Words: {} ({})",
                self.word_count, self.word_count_category.label
            ),
            format!(
                "Sentences: {}, average {:.1} words ({})",
                self.sentence_count, self.avg_sentence_length, self.sentence_quality.label
            ),
        ];
        for issue in &self.issues.complex_sentences {
            lines.push(format!(
                "Complex sentence {} in paragraph {}: {} clauses, {} words",
                issue.sentence_index + 1,
                issue.paragraph_index + 1,
                issue.clause_count,
                issue.word_count
            ));
        }
        for issue in &self.issues.dense_paragraphs {
            lines.push(format!(
                "Dense paragraph {}: {} words in {} sentences",
                issue.index + 1,
                issue.word_count,
                issue.sentence_count
            ));
        }
        lines.join("\n")
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Score `full_text` and scan `paragraphs` for structural issues.
///
/// Aggregate metrics come from `full_text`; issue addresses are indices into
/// `paragraphs`. The caller keeps the two consistent.
pub fn analyze<S: AsRef<str>>(full_text: &str, paragraphs: &[S]) -> AnalysisResult {
    let words = extract_words(full_text);
    let sentences = extract_sentences(full_text);
    let word_count = words.len();
    let sentence_count = sentences.len();

    let syllable_count = metrics::total_syllables(&words);
    let complex_ratio = metrics::complex_word_ratio(&words);
    let grade = metrics::grade_level(word_count, sentence_count, syllable_count);
    let avg_sentence_length = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        0.0
    };

    let level =
        classify::classify_difficulty(word_count, grade, avg_sentence_length, complex_ratio);
    let sentence_quality = classify::sentence_quality(avg_sentence_length);

    let input_too_short = full_text.trim().chars().count() < PARAMS.min_source_chars;
    let issues = if input_too_short {
        Issues::default()
    } else {
        issues::detect_issues(paragraphs)
    };

    AnalysisResult {
        level,
        grade: grade.unwrap_or(0.0),
        reading_time: metrics::reading_time(word_count, level),
        word_count,
        word_count_category: classify::word_count_category(word_count),
        sentence_count,
        avg_sentence_length: round_to(avg_sentence_length, 1),
        sentence_quality,
        syllable_count,
        complex_word_ratio: round_to(complex_ratio, 3),
        is_low_confidence: word_count < PARAMS.low_confidence_words,
        input_too_short,
        issues,
    }
}

pub fn analyze_text(text: &str) -> AnalysisResult {
    let paragraphs = split_paragraphs(text);
    analyze(text, &paragraphs)
}

/// Analyze raw bytes, which must be UTF-8.
pub fn analyze_bytes(bytes: &[u8]) -> Result<AnalysisResult> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| Error::InvalidArgument(format!("input is not valid UTF-8: {e}")))?;
    Ok(analyze_text(text))
}
