//! Property tests for the correction and marking passes

use harakat_core::domain::marks::is_diacritic;
use harakat_core::{IrabMarker, Lexicon, SpellingCorrector};
use proptest::prelude::*;
use std::sync::Arc;

const CASE_MARKS: [char; 3] = ['\u{064F}', '\u{0650}', '\u{064E}'];

fn engines() -> (SpellingCorrector, IrabMarker) {
    let lexicon = Arc::new(Lexicon::arabic().unwrap());
    (
        SpellingCorrector::new(lexicon.clone()),
        IrabMarker::new(lexicon),
    )
}

/// Words built from letters that never form a table entry
fn unmatched_word() -> impl Strategy<Value = String> {
    "[سشصض]{1,6}[،,]?"
}

proptest! {
    #[test]
    fn correct_never_panics(text in "\\PC*") {
        let (corrector, marker) = engines();
        let corrected = corrector.correct(&text);
        let _ = marker.mark(&corrected.text);
    }

    #[test]
    fn miss_path_is_identity(words in prop::collection::vec(unmatched_word(), 0..8)) {
        let (corrector, _) = engines();
        let text = words.join(" ");
        let result = corrector.correct(&text);
        prop_assert_eq!(result.text, text);
        prop_assert!(result.corrections.is_empty());
    }

    #[test]
    fn whitespace_runs_collapse(gap in "[ \t\n]{1,12}") {
        let (corrector, _) = engines();
        let result = corrector.correct(&format!("a{gap}b"));
        prop_assert_eq!(result.text, "a b");
    }

    #[test]
    fn every_marked_word_ends_in_one_case_mark(
        words in prop::collection::vec("[\\x{0621}-\\x{063A}\\x{0641}-\\x{064A}]{1,5}", 1..10)
    ) {
        let (_, marker) = engines();
        let marked = marker.mark(&words.join(" "));
        for word in marked.split(' ') {
            let mut chars = word.chars().rev();
            let last = chars.next().unwrap_or(' ');
            prop_assert!(CASE_MARKS.contains(&last), "{:?}", word);
            if let Some(before) = chars.next() {
                prop_assert!(!is_diacritic(before), "stacked mark in {:?}", word);
            }
        }
    }

    #[test]
    fn corrections_are_ordered_and_in_range(text in "(الى|المدرسه|بيت|اكثر|،| ){0,20}") {
        let (corrector, _) = engines();
        let result = corrector.correct(&text);
        let count = text.split_whitespace().count();
        let positions: Vec<_> = result.corrections.iter().map(|c| c.position).collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(positions.iter().all(|&p| p < count));
        prop_assert_eq!(result.text.split_whitespace().count(), count);
    }
}
