//! Sentence splitting tests.

use std::str::FromStr;
use storyteller_error::StoryTellerError;
use storyteller_pipeline::{Language, SentenceSplitter, check_preconditions};
use strum::IntoEnumIterator;

fn english(text: &str) -> Vec<String> {
    SentenceSplitter::default().split(text)
}

#[test]
fn test_basic_punctuation() {
    assert_eq!(
        english("It rained. The end! Or was it? Yes."),
        vec!["It rained.", "The end!", "Or was it?", "Yes."]
    );
}

#[test]
fn test_leading_and_trailing_whitespace() {
    assert_eq!(
        english("   Unicorns roamed the Earth.   They were happy.  "),
        vec!["Unicorns roamed the Earth.", "They were happy."]
    );
}

#[test]
fn test_unterminated_tail_is_kept() {
    assert_eq!(
        english("The dragon slept. Then suddenly the"),
        vec!["The dragon slept.", "Then suddenly the"]
    );
}

#[test]
fn test_abbreviations_do_not_split() {
    assert_eq!(
        english("Mrs. Brown met Dr. Who at St. Paul. They talked."),
        vec!["Mrs. Brown met Dr. Who at St. Paul.", "They talked."]
    );
}

#[test]
fn test_initials_and_acronyms_do_not_split() {
    assert_eq!(
        english("J. R. R. Tolkien wrote books. He lived in the U.K. for years."),
        vec!["J. R. R. Tolkien wrote books.", "He lived in the U.K. for years."]
    );
}

#[test]
fn test_lowercase_continuation_does_not_split() {
    assert_eq!(
        english("It cost approx. ten coins. Cheap."),
        vec!["It cost approx. ten coins.", "Cheap."]
    );
}

#[test]
fn test_closing_quotes_stay_with_sentence() {
    assert_eq!(
        english("\"Run!\" she cried. \"Now.\" He ran."),
        vec!["\"Run!\" she cried.", "\"Now.\"", "He ran."]
    );
}

#[test]
fn test_blank_line_ends_sentence() {
    assert_eq!(
        english("Chapter One\n\nThe night was cold"),
        vec!["Chapter One", "The night was cold"]
    );
}

#[test]
fn test_blank_line_after_abbreviation_ends_sentence() {
    assert_eq!(
        english("They brought tools, pens, etc.\n\nThe next day came."),
        vec!["They brought tools, pens, etc.", "The next day came."]
    );
}

#[test]
fn test_blank_line_before_lowercase_ends_sentence() {
    assert_eq!(
        english("It was over.\n\nthen silence fell."),
        vec!["It was over.", "then silence fell."]
    );
    assert_eq!(
        english("It was over. \t\n  \n then silence fell."),
        vec!["It was over.", "then silence fell."]
    );
}

#[test]
fn test_ellipsis_ends_sentence() {
    assert_eq!(
        english("And then... Silence."),
        vec!["And then...", "Silence."]
    );
}

#[test]
fn test_empty_text() {
    assert!(english("").is_empty());
    assert!(english("   \n\n  ").is_empty());
}

#[test]
fn test_german_abbreviations() {
    let splitter = SentenceSplitter::new(Language::German);
    assert_eq!(
        splitter.split("Das kostet ca. 5 Euro bzw. mehr. Danke."),
        vec!["Das kostet ca. 5 Euro bzw. mehr.", "Danke."]
    );
}

#[test]
fn test_french_abbreviations() {
    let splitter = SentenceSplitter::new(Language::French);
    assert_eq!(
        splitter.split("Mme. Dupont arrive. Elle sourit."),
        vec!["Mme. Dupont arrive.", "Elle sourit."]
    );
}

#[test]
fn test_spanish_abbreviations() {
    let splitter = SentenceSplitter::new(Language::Spanish);
    assert_eq!(
        splitter.split("La Sra. García llegó. ¿Quién es?"),
        vec!["La Sra. García llegó.", "¿Quién es?"]
    );
}

#[test]
fn test_language_parsing() {
    assert_eq!(Language::from_str("english").unwrap(), Language::English);
    assert_eq!(Language::from_str("FR").unwrap(), Language::French);
    assert_eq!(Language::from_str("Spanish").unwrap(), Language::Spanish);
    assert!(Language::from_str("portuguese").is_err());
    assert_eq!(Language::default().to_string(), "english");
    assert_eq!(Language::iter().count(), 4);
}

#[test]
fn test_unsupported_language_is_fatal() {
    let err = check_preconditions("klingon").unwrap_err();
    let err: StoryTellerError = err.into();
    assert!(err.is_fatal());
}
