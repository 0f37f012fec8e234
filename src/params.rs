// ---------------------------------------------------------------------------
// Scoring parameters
// ---------------------------------------------------------------------------

/// Every threshold the engine uses. Bands are inclusive at the upper bound.
pub(crate) struct Parameters {
    // Input gates
    pub min_source_chars: usize,
    pub low_confidence_words: usize,
    pub softening_max_words: usize,
    pub softening_max_grade: f64,

    // Tokens and sentences
    pub min_word_len: usize,
    pub min_alpha_density: f64,
    pub min_sentence_chars: usize,
    pub min_sentence_words: usize,

    // Grade formula
    pub grade_words_weight: f64,
    pub grade_syllables_weight: f64,
    pub grade_offset: f64,

    // Difficulty bands
    pub easy_max_grade: f64,
    pub medium_max_grade: f64,
    pub composite_easy_max: u32,
    pub composite_medium_max: u32,
    pub composite_short_sentence_max: f64,
    pub composite_medium_sentence_max: f64,
    pub composite_low_complex_ratio: f64,
    pub composite_medium_complex_ratio: f64,

    // Complex words
    pub complex_min_len: usize,
    pub complex_min_syllables: usize,

    // Reading speed (words per minute)
    pub wpm_easy: f64,
    pub wpm_medium: f64,
    pub wpm_hard: f64,
    pub less_than_minute: f64,

    // Sentence quality bands (average words per sentence)
    pub quality_too_short_below: f64,
    pub quality_short_max: f64,
    pub quality_optimal_max: f64,
    pub quality_long_max: f64,

    // Word-count categories
    pub category_quick_below: usize,
    pub category_short_max: usize,
    pub category_medium_max: usize,
    pub category_long_max: usize,

    // Clause detection
    pub that_clause_cap: usize,
    pub complex_min_clauses: usize,
    pub complex_min_sentence_words: usize,

    // Dense paragraphs
    pub dense_wall_words: usize,
    pub dense_wall_sentences: usize,
    pub dense_very_long_words: usize,
    pub dense_long_sentence_words: usize,
    pub dense_long_sentence_avg: f64,
}

pub(crate) static PARAMS: Parameters = Parameters {
    min_source_chars: 50,
    low_confidence_words: 100,
    softening_max_words: 300,
    softening_max_grade: 15.0,

    min_word_len: 2,
    min_alpha_density: 0.5,
    min_sentence_chars: 5,
    min_sentence_words: 3,

    grade_words_weight: 0.39,
    grade_syllables_weight: 11.8,
    grade_offset: 15.59,

    easy_max_grade: 6.0,
    medium_max_grade: 12.0,
    composite_easy_max: 1,
    composite_medium_max: 2,
    composite_short_sentence_max: 14.0,
    composite_medium_sentence_max: 22.0,
    composite_low_complex_ratio: 0.08,
    composite_medium_complex_ratio: 0.15,

    complex_min_len: 6,
    complex_min_syllables: 3,

    wpm_easy: 275.0,
    wpm_medium: 250.0,
    wpm_hard: 200.0,
    less_than_minute: 0.5,

    quality_too_short_below: 8.0,
    quality_short_max: 12.0,
    quality_optimal_max: 18.0,
    quality_long_max: 25.0,

    category_quick_below: 300,
    category_short_max: 700,
    category_medium_max: 1400,
    category_long_max: 2500,

    that_clause_cap: 3,
    complex_min_clauses: 3,
    complex_min_sentence_words: 20,

    dense_wall_words: 100,
    dense_wall_sentences: 4,
    dense_very_long_words: 150,
    dense_long_sentence_words: 80,
    dense_long_sentence_avg: 25.0,
};

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
