//! Tests for the processing API

#[cfg(test)]
mod api_tests {
    use crate::api::*;
    use crate::domain::{DiffSegment, Lexicon, RuleSet};

    const DAMMA: char = '\u{064F}';
    const KASRA: char = '\u{0650}';
    const FATHA: char = '\u{064E}';

    #[test]
    fn test_processor_creation() {
        let processor = TextProcessor::new().unwrap();
        assert!(matches!(
            processor.config().lexicon_source(),
            LexiconSource::Embedded(code) if code == defaults::LEXICON
        ));

        let by_alias = TextProcessor::with_lexicon_code("arabic").unwrap();
        assert_eq!(by_alias.corrector().lexicon().code(), "ar");

        assert!(TextProcessor::with_lexicon_code("xx").is_err());
    }

    #[test]
    fn test_end_to_end_example() {
        let processor = TextProcessor::new().unwrap();
        let output = processor
            .process(Input::from_text("الطالب ذهب الى المدرسه"))
            .unwrap();

        assert_eq!(output.corrected, "الطالب ذهب إلى المدرسة");
        let positions: Vec<_> = output.corrections.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![2, 3]);

        let words: Vec<_> = output.marked.split(' ').collect();
        assert_eq!(words.len(), 4);
        assert!(words[0].ends_with(DAMMA));
        assert_eq!(words[2], format!("إلى{FATHA}"));
        assert_eq!(words[3], format!("المدرسة{KASRA}"));
    }

    #[test]
    fn test_stats() {
        let processor = TextProcessor::new().unwrap();
        let output = processor.process_text(
            "الطالب ذهب الى المدرسه ودرس الرياضيات والعلوم. ثم عاد الى البيت وقرء كتابه المفضل. اللة يوفقه في دراسته.",
        );

        assert_eq!(
            output.stats,
            ProcessingStats {
                corrections_count: 6,
                words_count: 18,
                sentences_count: 3,
                words_marked: 18,
            }
        );
        let positions: Vec<_> = output.corrections.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![2, 3, 5, 9, 12, 14]);
        assert!(output.marked.ends_with(&format!("دراسته{KASRA}")));
        assert_eq!(output.marked.matches(". ").count(), 2);
    }

    #[test]
    fn test_empty_input() {
        let processor = TextProcessor::new().unwrap();
        let output = processor.process_text("");
        assert_eq!(output.corrected, "");
        assert_eq!(output.marked, "");
        assert!(!output.has_corrections());
        assert_eq!(output.stats, ProcessingStats::default());
    }

    #[test]
    fn test_diff_view() {
        let processor = TextProcessor::new().unwrap();
        let output = processor.process_text("ذهب   الى البيت");
        let diff = output.diff();
        assert_eq!(diff.len(), 3);
        assert_eq!(diff.iter().filter(|segment| segment.is_change()).count(), 1);
        assert_eq!(
            diff[1],
            DiffSegment::Changed {
                removed: Some("الى".into()),
                added: Some("إلى".into()),
            }
        );
    }

    #[test]
    fn test_metadata() {
        let processor = TextProcessor::new().unwrap();
        let output = processor.process_text("بيت");
        assert_eq!(output.metadata.lexicon, "ar");
    }

    #[test]
    fn test_json_record_shape() {
        let processor = TextProcessor::new().unwrap();
        let output = processor.process_text("هاذا الكتاب");
        let value = serde_json::to_value(&output).unwrap();

        for key in ["original", "corrected", "marked", "corrections", "stats"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert!(value.get("metadata").is_none());
        assert_eq!(value["corrections"][0]["position"], 0);
        assert_eq!(value["stats"]["corrections_count"], 1);
        assert_eq!(value["stats"]["words_marked"], 2);
    }

    #[test]
    fn test_custom_rules_flow_through() {
        let config = Config::builder()
            .custom_lexicon(Lexicon::arabic().unwrap())
            .rules(RuleSet::new(Vec::new()))
            .build()
            .unwrap();
        let processor = TextProcessor::with_config(config).unwrap();
        assert_eq!(processor.process_text("بيت").marked, format!("بيت{FATHA}"));
    }

    #[test]
    fn test_processor_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TextProcessor>();
    }
}
