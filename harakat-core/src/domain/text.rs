//! Tokenization helpers shared by the corrector and the marker

use crate::domain::marks::{is_alphanumeric, is_diacritic, is_word_char};

/// Token separator: Unicode whitespace plus the information separators
/// U+001C..=U+001F
#[inline]
pub fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&ch)
}

/// Trim separators from both ends
pub fn trim(text: &str) -> &str {
    text.trim_matches(is_separator)
}

/// Separator-delimited tokens; runs of separators never yield empty tokens
#[inline]
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|token| !token.is_empty())
}

/// Number of whitespace-delimited tokens
pub fn word_count(text: &str) -> usize {
    tokens(text).count()
}

/// The lookup key of a token: its word characters only.
///
/// Punctuation, symbols and every combining mark (diacritics included) are removed.
pub fn token_core(token: &str) -> String {
    token.chars().filter(|&ch| is_word_char(ch)).collect()
}

/// Characters carried over when a token is replaced.
///
/// Everything that is neither alphanumeric nor a recognized diacritic, in
/// original order. `_` counts as a trailing mark even though it is part of
/// the core.
pub fn trailing_marks(token: &str) -> impl Iterator<Item = char> + '_ {
    token
        .chars()
        .filter(|&ch| !is_alphanumeric(ch) && !is_diacritic(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_collapse_whitespace() {
        let collected: Vec<_> = tokens("  a \t b\n\nc  ").collect();
        assert_eq!(collected, vec!["a", "b", "c"]);
        assert_eq!(tokens("").count(), 0);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_information_separators_split_tokens() {
        let collected: Vec<_> = tokens("x\u{1F}y\u{1C}\u{1D} z").collect();
        assert_eq!(collected, vec!["x", "y", "z"]);
        assert_eq!(trim("\u{1E} نص \u{1F}"), "نص");
    }

    #[test]
    fn test_token_core_strips_punctuation_and_marks() {
        assert_eq!(token_core("الى،"), "الى");
        assert_eq!(token_core("«المدرسه»"), "المدرسه");
        assert_eq!(token_core("الَى"), "الى");
        assert_eq!(token_core("..."), "");
    }

    #[test]
    fn test_trailing_marks_keep_order_and_drop_diacritics() {
        let marks: String = trailing_marks("«الَى»،").collect();
        assert_eq!(marks, "«»،");
        assert_eq!(trailing_marks("بيت").count(), 0);
    }
}
