//! Structural issue detection: complex sentences and dense paragraphs.
//!
//! Clause counting is a heuristic over punctuation and connective words,
//! not a grammatical parse.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::params::{round_to, PARAMS};
use crate::segment::{extract_sentences, extract_words};

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexSentenceIssue {
    pub text: String,
    pub clause_count: usize,
    pub word_count: usize,
    pub sentence_index: usize,
    pub paragraph_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DensityTrigger {
    WallOfText,
    VeryLong,
    LongSentences,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DenseParagraphIssue {
    pub text: String,
    pub index: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
    pub is_dense: bool,
    pub trigger: DensityTrigger,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issues {
    pub complex_sentences: Vec<ComplexSentenceIssue>,
    pub dense_paragraphs: Vec<DenseParagraphIssue>,
}

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static STRONG_PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[;:]").unwrap());

// Only connectives at the start of the sentence or right after a comma or
// semicolon count.
static CONNECTIVE_RE: Lazy<Regex> = Lazy::new(|| {
    let connectives = [
        // Transitional
        "however",
        "therefore",
        "moreover",
        "furthermore",
        "nevertheless",
        "consequently",
        "meanwhile",
        "otherwise",
        "thus",
        "hence",
        // Subordinating
        "although",
        "though",
        "because",
        "since",
        "unless",
        "whereas",
        "while",
        "after",
        "before",
        "until",
        "once",
        // Relative
        "which",
        "who",
        "whom",
        "whose",
        "where",
        "when",
        // Conditional
        "if",
        "provided",
        "assuming",
    ];
    Regex::new(&format!(r"(?i)(?:^|[,;])\s*\b(?:{})\b", connectives.join("|"))).unwrap()
});

static THAT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(?:(so|such)\s+)?that\b").unwrap());

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

/// Estimate the number of clauses in a sentence. Always at least 1.
pub fn count_clauses(sentence: &str) -> usize {
    let punctuation = STRONG_PUNCT_RE.find_iter(sentence).count();
    let connectives = CONNECTIVE_RE.find_iter(sentence).count();
    let relative_that = THAT_RE
        .captures_iter(sentence)
        .filter(|caps| caps.get(1).is_none())
        .count()
        .min(PARAMS.that_clause_cap);
    1 + punctuation + connectives + relative_that
}

fn is_complex_sentence(clause_count: usize, word_count: usize) -> bool {
    clause_count >= PARAMS.complex_min_clauses && word_count >= PARAMS.complex_min_sentence_words
}

fn density_trigger(word_count: usize, sentence_count: usize, avg: f64) -> Option<DensityTrigger> {
    if word_count >= PARAMS.dense_wall_words && sentence_count >= PARAMS.dense_wall_sentences {
        Some(DensityTrigger::WallOfText)
    } else if word_count >= PARAMS.dense_very_long_words {
        Some(DensityTrigger::VeryLong)
    } else if word_count >= PARAMS.dense_long_sentence_words
        && avg >= PARAMS.dense_long_sentence_avg
    {
        Some(DensityTrigger::LongSentences)
    } else {
        None
    }
}

pub fn find_complex_sentences<S: AsRef<str>>(paragraphs: &[S]) -> Vec<ComplexSentenceIssue> {
    let mut issues = Vec::new();
    let mut sentence_index = 0usize;

    for (paragraph_index, paragraph) in paragraphs.iter().enumerate() {
        for sentence in extract_sentences(paragraph.as_ref()) {
            let clause_count = count_clauses(&sentence);
            let word_count = extract_words(&sentence).len();
            if is_complex_sentence(clause_count, word_count) {
                issues.push(ComplexSentenceIssue {
                    text: sentence,
                    clause_count,
                    word_count,
                    sentence_index,
                    paragraph_index,
                });
            }
            sentence_index += 1;
        }
    }
    issues
}

pub fn find_dense_paragraphs<S: AsRef<str>>(paragraphs: &[S]) -> Vec<DenseParagraphIssue> {
    let mut issues = Vec::new();

    for (index, paragraph) in paragraphs.iter().enumerate() {
        let text = paragraph.as_ref();
        let word_count = extract_words(text).len();
        if word_count == 0 {
            continue;
        }
        let sentence_count = extract_sentences(text).len();
        // A paragraph with no recognizable sentence reads as one long one.
        let avg = word_count as f64 / sentence_count.max(1) as f64;

        if let Some(trigger) = density_trigger(word_count, sentence_count, avg) {
            issues.push(DenseParagraphIssue {
                text: text.to_string(),
                index,
                word_count,
                sentence_count,
                avg_sentence_length: round_to(avg, 1),
                is_dense: true,
                trigger,
            });
        }
    }
    issues
}

pub fn detect_issues<S: AsRef<str>>(paragraphs: &[S]) -> Issues {
    Issues {
        complex_sentences: find_complex_sentences(paragraphs),
        dense_paragraphs: find_dense_paragraphs(paragraphs),
    }
}
