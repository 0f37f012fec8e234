//! Sentence, word and paragraph segmentation.
//!
//! Sentence splitting runs as an ordered pipeline: every protection
//! (links, decimals, ellipses, abbreviations, initials, list markers) is
//! applied to the whole text before the single split pass, and the
//! placeholders are restored afterwards. Protecting after splitting would
//! leave fragments that were already cut in the wrong place.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::params::PARAMS;

// ---------------------------------------------------------------------------
// Placeholders
// ---------------------------------------------------------------------------

// Private-use code points never appear in ordinary prose.
const PERIOD_MARK: char = '\u{E000}';
const URL_MARK: char = '\u{E001}';
const EMAIL_MARK: char = '\u{E002}';

const URL_LABEL: &str = "[URL]";
const EMAIL_LABEL: &str = "[EMAIL]";

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"]*[^\s<>".,!?;:)\]]"#).unwrap()
});

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

static HORIZONTAL_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\x0B\x0C]+").unwrap());

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d)\.(\d)").unwrap());

static CURRENCY_FRACTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([$\u{20AC}\u{00A3}\u{00A5}])\.(\d)").unwrap());

static ELLIPSIS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{2,}").unwrap());

static ABBREVIATION_RE: Lazy<Regex> = Lazy::new(|| {
    let abbreviations = [
        // Titles
        "Mr", "Mrs", "Ms", "Dr", "Prof", "Sr", "Jr", "St", "Rev", "Gen", "Col", "Lt", "Sgt",
        "Capt", "Gov", "Sen", "Rep", "Hon", "Mt", "Ft",
        // Months
        "Jan", "Feb", "Mar", "Apr", "Jun", "Jul", "Aug", "Sep", "Sept", "Oct", "Nov", "Dec",
        // Days
        "Mon", "Tue", "Tues", "Wed", "Thu", "Thur", "Thurs", "Fri", "Sat", "Sun",
        // Units
        "ft", "lb", "lbs", "oz", "mi", "km", "cm", "mm", "kg", "mg", "hr", "hrs", "min",
        "mins", "sec", "approx", "no", "No", "vol", "Vol", "fig", "Fig", "pp",
        // Latin and business
        "etc", "vs", "e.g", "i.e", "cf", "al", "Inc", "Ltd", "Co", "Corp", "Dept", "Univ",
        "Ave", "Blvd", "Rd",
        // Degrees and roles
        "Ph.D", "M.D", "B.A", "M.A", "B.S", "M.S", "MBA", "CEO", "CFO", "CTO", "Esq",
    ];
    let alt = abbreviations
        .iter()
        .map(|a| regex::escape(a))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b({alt}|[A-Za-z])\.(\s|$)")).unwrap()
});

static INITIALS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][.\u{E000}](?:[A-Z][.\u{E000}])+").unwrap()
});

static LIST_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)(^[ ]?|[:\s])(\d{1,2})\.(\s)").unwrap());

static SENTENCE_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]+["'\u{201D}\u{2019})\]]*"#).unwrap());

static BRACKET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\[\]{}()<>]").unwrap());

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+(?:[.,]\d+)*[A-Za-z]{0,3}\b").unwrap());

static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s'-]").unwrap());

static PARAGRAPH_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]*\n").unwrap());

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn normalize_whitespace(text: &str) -> String {
    let text = text.replace('\u{00A0}', " ");
    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

fn is_sentence_opener(c: char) -> bool {
    c.is_uppercase()
        || matches!(
            c,
            '"' | '\'' | '\u{201C}' | '\u{2018}' | '(' | '[' | '{' | URL_MARK | EMAIL_MARK
        )
}

fn protect_periods(matched: &str) -> String {
    matched.replace('.', &PERIOD_MARK.to_string())
}

fn alphabetic_token_count(sentence: &str) -> usize {
    sentence
        .split_whitespace()
        .filter(|t| t.chars().any(char::is_alphabetic))
        .count()
}

// ---------------------------------------------------------------------------
// Sentence pipeline
// ---------------------------------------------------------------------------

fn protect(text: &str) -> String {
    let period = PERIOD_MARK.to_string();

    // Line breaks survive until list markers have been found.
    let text = text.replace('\u{00A0}', " ").replace("\r\n", "\n").replace('\r', "\n");
    let text = HORIZONTAL_SPACE_RE.replace_all(&text, " ");

    let text = EMAIL_RE.replace_all(&text, EMAIL_MARK.to_string().as_str());
    let mut text = URL_RE
        .replace_all(&text, URL_MARK.to_string().as_str())
        .into_owned();

    let decimal = format!("${{1}}{period}${{2}}");
    while DECIMAL_RE.is_match(&text) {
        text = DECIMAL_RE.replace_all(&text, decimal.as_str()).into_owned();
    }
    let text = CURRENCY_FRACTION_RE.replace_all(&text, decimal.as_str());

    let text = ELLIPSIS_RE.replace_all(&text, |caps: &regex::Captures| protect_periods(&caps[0]));

    let abbreviation = format!("${{1}}{period}${{2}}");
    let mut text = text.into_owned();
    while ABBREVIATION_RE.is_match(&text) {
        text = ABBREVIATION_RE
            .replace_all(&text, abbreviation.as_str())
            .into_owned();
    }

    let text = INITIALS_RE.replace_all(&text, |caps: &regex::Captures| protect_periods(&caps[0]));

    let marker = format!("${{1}}${{2}}{period}${{3}}");
    let text = LIST_MARKER_RE.replace_all(&text, marker.as_str());

    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

fn split_protected(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0usize;

    for m in SENTENCE_END_RE.find_iter(text) {
        let rest = &text[m.end()..];
        let boundary = match rest.strip_prefix(' ') {
            Some(after) => after.chars().next().is_some_and(is_sentence_opener),
            None => rest.is_empty(),
        };
        if boundary {
            pieces.push(text[start..m.end()].trim());
            start = m.end();
        }
    }
    if start < text.len() {
        pieces.push(text[start..].trim());
    }
    pieces
}

fn restore(piece: &str) -> String {
    let mut out = String::with_capacity(piece.len());
    for c in piece.chars() {
        match c {
            PERIOD_MARK => out.push('.'),
            URL_MARK => out.push_str(URL_LABEL),
            EMAIL_MARK => out.push_str(EMAIL_LABEL),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Split text into sentences. Links come back as `[URL]`, addresses as
/// `[EMAIL]`.
pub fn extract_sentences(text: &str) -> Vec<String> {
    let protected = protect(text);
    if protected.is_empty() {
        return Vec::new();
    }

    split_protected(&protected)
        .into_iter()
        .map(restore)
        .filter(|s| {
            s.chars().count() > PARAMS.min_sentence_chars
                && alphabetic_token_count(s) >= PARAMS.min_sentence_words
        })
        .collect()
}

pub fn extract_words(text: &str) -> Vec<String> {
    let text = normalize_whitespace(text);
    let text = URL_RE.replace_all(&text, " ");
    let text = EMAIL_RE.replace_all(&text, " ");
    let text = BRACKET_RE.replace_all(&text, " ");
    let text = NUMBER_RE.replace_all(&text, " ");
    let text = text.replace(['\u{2019}', '\u{2018}'], "'");
    let text = NON_WORD_RE.replace_all(&text, " ").to_lowercase();

    let mut words = Vec::new();
    for token in text.split_whitespace() {
        if token.contains('-') && !token.contains('\'') {
            words.extend(token.split('-').filter_map(clean_token));
        } else if let Some(word) = clean_token(token) {
            words.push(word);
        }
    }
    words
}

fn clean_token(token: &str) -> Option<String> {
    let token = token.trim_matches(|c| c == '\'' || c == '-');
    let len = token.chars().count();
    if len < PARAMS.min_word_len {
        return None;
    }
    if !token.chars().next().is_some_and(char::is_alphabetic) {
        return None;
    }
    let alphabetic = token.chars().filter(|c| c.is_alphabetic()).count();
    if (alphabetic as f64) / (len as f64) < PARAMS.min_alpha_density {
        return None;
    }
    Some(token.to_string())
}

/// Blank-line separated blocks, for plain text input without an extractor.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n");
    PARAGRAPH_BREAK_RE
        .split(&text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
