// tests/integration_tests/analysis_test.rs
use super::common::article;
use synopsis::{TextStats, analyze, estimate_reading_time};

#[test]
fn test_empty_text() {
    assert_eq!(
        analyze(""),
        TextStats {
            words: 0,
            characters: 0,
            sentences: 0,
            paragraphs: 0
        }
    );
    assert_eq!(estimate_reading_time(""), 1);
}

#[test]
fn test_mixed_whitespace() {
    assert_eq!(analyze("one  two\tthree").words, 3);
}

#[test]
fn test_naive_sentence_count() {
    assert_eq!(analyze("Hi! Is it 3.14? Yes.").sentences, 4);
}

#[test]
fn test_generated_article() {
    let text = article(45);
    let stats = analyze(&text);
    assert_eq!(stats.words, 45);
    assert_eq!(stats.sentences, 4, "one terminator every ten words");
    assert_eq!(stats.paragraphs, 1);
    assert_eq!(stats.characters, text.chars().count());
}

#[test]
fn test_reading_time_grows_with_length() {
    assert_eq!(estimate_reading_time(&article(400)), 2);
    assert_eq!(estimate_reading_time(&article(1_000)), 5);
    assert!(estimate_reading_time(&article(1_200)) >= estimate_reading_time(&article(1_000)));
}
