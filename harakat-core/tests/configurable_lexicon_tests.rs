//! Integration tests for lexicons loaded from TOML

use harakat_core::{Config, DomainError, Lexicon, TextProcessor};
use std::io::Write;
use tempfile::NamedTempFile;

const DAMMA: char = '\u{064F}';
const KASRA: char = '\u{0650}';
const FATHA: char = '\u{064E}';

fn write_lexicon(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_external_lexicon_drives_both_passes() {
    let file = write_lexicon(
        r#"
[metadata]
code = "ar-min"
name = "Minimal Arabic"

[sentences]
terminators = ["."]
joiner = " | "

[marking]
definite_article = "ال"
prepositions = ["نحو"]
transitive_verbs = ["رسم"]

[corrections.misc]
"انشاء" = "إنشاء"
"#,
    );

    let config = Config::builder()
        .lexicon_file(file.path(), None)
        .unwrap()
        .build()
        .unwrap();
    let processor = TextProcessor::with_config(config).unwrap();
    let output = processor.process_text("سار نحو البيت. رسم انشاء! جميل");

    assert_eq!(output.corrected, "سار نحو البيت. رسم إنشاء! جميل");
    assert_eq!(output.metadata.lexicon, "ar-min");
    // "!" is not a terminator here, so it stays inside the second sentence
    assert_eq!(
        output.marked,
        format!("سار{DAMMA} نحو{FATHA} البيت{KASRA} | رسم{DAMMA} إنشاء!{FATHA} جميل{FATHA}")
    );
    assert_eq!(output.stats.sentences_count, 2);
}

#[test]
fn test_duplicate_misspelling_rejected() {
    let file = write_lexicon(
        r#"
[metadata]
code = "dup"
name = "Duplicate"

[marking]
definite_article = "ال"

[corrections.a]
"الى" = "إلى"

[corrections.b]
"الى" = "الي"
"#,
    );

    match Lexicon::from_file(file.path(), None) {
        Err(DomainError::InvalidLexicon(msg)) => assert!(msg.contains("الى")),
        other => panic!("Expected InvalidLexicon, got {other:?}"),
    }
}

#[test]
fn test_missing_marking_section_rejected() {
    let file = write_lexicon(
        r#"
[metadata]
code = "broken"
name = "Broken"
"#,
    );

    assert!(matches!(
        Lexicon::from_file(file.path(), None),
        Err(DomainError::ConfigurationError(_))
    ));
}

#[test]
fn test_code_override() {
    let file = write_lexicon(
        r#"
[metadata]
code = "original"
name = "Override"

[marking]
definite_article = "ال"
"#,
    );

    let lexicon = Lexicon::from_file(file.path(), Some("renamed")).unwrap();
    assert_eq!(lexicon.code(), "renamed");
    assert!(lexicon.corrections().is_empty());
}
