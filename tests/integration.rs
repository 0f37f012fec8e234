use readability_score::{
    analyze, analyze_bytes, analyze_text, extract_sentences, extract_words, Difficulty, Error,
    SentenceQuality, WordCountCategory,
};

fn easy_text() -> String {
    vec!["The cat sat on the mat."; 20].join(" ")
}

fn hard_text() -> String {
    let sentence = "The comprehensive organizational restructuring initiative necessitated \
                    the establishment of interdepartmental communication protocols that \
                    facilitated the dissemination of procedural documentation across \
                    numerous international subsidiaries.";
    vec![sentence; 14].join(" ")
}

#[test]
fn analysis_is_deterministic() {
    let text = hard_text();
    let paragraphs = vec![text.clone()];
    let first = analyze(&text, &paragraphs);
    let second = analyze(&text, &paragraphs);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn counts_match_segmenter() {
    let text = "Dr. Smith went to Washington, D.C. on Monday. \
                I paid $19.99 for the item. It was cheap, but the well-known shop was closed.";
    let result = analyze_text(text);
    assert_eq!(result.word_count, extract_words(text).len());
    assert_eq!(result.sentence_count, extract_sentences(text).len());
    assert_eq!(result.sentence_count, 3);
}

#[test]
fn short_text_is_medium_and_low_confidence() {
    let text = "Quantum chromodynamics elucidates interactions between constituent \
                quarks mediated by gluons within hadronic matter.";
    let result = analyze_text(text);
    assert!(result.word_count < 100);
    assert!(result.grade > 12.0, "grade was {}", result.grade);
    assert_eq!(result.level, Difficulty::Medium);
    assert!(result.is_low_confidence);
}

#[test]
fn simple_text_is_easy() {
    let text = easy_text();
    let result = analyze_text(&text);
    assert_eq!(result.word_count, 120);
    assert_eq!(result.sentence_count, 20);
    assert_eq!(result.grade, 0.0);
    assert_eq!(result.level, Difficulty::Easy);
    assert!(!result.is_low_confidence);
    assert_eq!(result.reading_time.wpm, 275);
    assert_eq!(result.reading_time.formatted, "< 1 min");
    assert_eq!(result.sentence_quality.label, SentenceQuality::TooShort);
    assert_eq!(result.word_count_category.label, WordCountCategory::QuickRead);
}

#[test]
fn dense_jargon_is_hard() {
    let text = hard_text();
    let result = analyze_text(&text);
    assert_eq!(result.word_count, 322);
    assert_eq!(result.sentence_count, 14);
    assert_eq!(result.level, Difficulty::Hard);
    assert_eq!(result.reading_time.wpm, 200);
    assert_eq!(result.reading_time.minutes, 2);
    assert!(result.complex_word_ratio > 0.15);
    assert_eq!(result.sentence_quality.label, SentenceQuality::Long);
}

#[test]
fn empty_input_yields_zeroed_result() {
    let result = analyze_text("");
    assert_eq!(result.word_count, 0);
    assert_eq!(result.sentence_count, 0);
    assert_eq!(result.grade, 0.0);
    assert_eq!(result.avg_sentence_length, 0.0);
    assert_eq!(result.complex_word_ratio, 0.0);
    assert_eq!(result.level, Difficulty::Medium);
    assert!(result.is_low_confidence);
    assert!(result.input_too_short);
    assert_eq!(result.reading_time.minutes, 0);
    assert_eq!(result.reading_time.formatted, "< 1 min");
}

#[test]
fn too_short_input_skips_issue_detection() {
    let paragraph = "word ".repeat(160);
    let result = analyze("Tiny.", &[paragraph]);
    assert!(result.input_too_short);
    assert!(result.issues.dense_paragraphs.is_empty());
}

#[test]
fn dense_paragraph_addresses_round_trip() {
    let long = format!("{}.", vec!["reading"; 170].join(" "));
    let paragraphs = vec![
        "An opening paragraph that is short and calm.".to_string(),
        long,
        "A closing paragraph that is also short.".to_string(),
    ];
    let full_text = paragraphs.join("\n\n");
    let result = analyze(&full_text, &paragraphs);
    assert_eq!(result.issues.dense_paragraphs.len(), 1);
    for issue in &result.issues.dense_paragraphs {
        assert_eq!(paragraphs[issue.index], issue.text);
        assert!(issue.is_dense);
    }
}

#[test]
fn complex_sentence_points_at_its_paragraph() {
    let paragraphs = vec![
        "The first paragraph is short. It has two sentences.".to_string(),
        "Nothing unusual happens in this one at all.".to_string(),
        "If the weather holds, which nobody can promise, the team will travel north; \
         otherwise the whole trip will be postponed until the spring when the roads reopen."
            .to_string(),
    ];
    let full_text = paragraphs.join("\n\n");
    let result = analyze(&full_text, &paragraphs);
    assert_eq!(result.issues.complex_sentences.len(), 1);
    let issue = &result.issues.complex_sentences[0];
    assert_eq!(issue.paragraph_index, 2);
    assert_eq!(issue.sentence_index, 3);
    assert!(paragraphs[issue.paragraph_index].contains(&issue.text));
}

#[test]
fn json_uses_camel_case_contract() {
    let result = analyze_text(&easy_text());
    let json = serde_json::to_string_pretty(&result).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    for key in [
        "level",
        "grade",
        "readingTime",
        "wordCount",
        "wordCountCategory",
        "sentenceCount",
        "avgSentenceLength",
        "sentenceQuality",
        "isLowConfidence",
        "issues",
    ] {
        assert!(parsed.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(parsed["level"], "Easy");
    assert_eq!(parsed["wordCountCategory"]["label"], "Quick Read");
    assert!(parsed["readingTime"].get("formatted").is_some());
    assert!(parsed["issues"]["complexSentences"].is_array());
    assert!(parsed["issues"]["denseParagraphs"].is_array());
}

#[test]
fn invalid_utf8_is_rejected() {
    let err = analyze_bytes(&[0x66, 0x6f, 0xff, 0xfe]).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn valid_bytes_match_text_analysis() {
    let text = easy_text();
    let from_bytes = analyze_bytes(text.as_bytes()).unwrap();
    assert_eq!(from_bytes, analyze_text(&text));
}

#[test]
fn summary_mentions_level_and_issues() {
    let text = hard_text();
    let summary = analyze_text(&text).summary();
    assert!(summary.starts_with("Level: Hard"));
    assert!(summary.contains("Dense paragraph 1"));
}

#[test]
fn sentence_quality_uses_unrounded_average() {
    let mut sentences = vec!["The cat sat on the warm red mat."; 19];
    sentences.push("The cat sat on the red mat.");
    let text = sentences.join(" ");
    let result = analyze_text(&text);
    assert_eq!(result.word_count, 159);
    assert_eq!(result.sentence_count, 20);
    // 7.95 words per sentence is still under the 8-word band.
    assert_eq!(result.sentence_quality.label, SentenceQuality::TooShort);
}
