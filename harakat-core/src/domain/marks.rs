//! Arabic diacritic marks and character classes
//!
//! The recognized marks are the three tanween forms, the three short vowels,
//! shadda and sukun (U+064B..=U+0652). Only the short vowels are ever
//! appended by the marker; the full set is stripped or ignored.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A recognized Arabic diacritic mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diacritic {
    Fathatan,
    Dammatan,
    Kasratan,
    Fatha,
    Damma,
    Kasra,
    Shadda,
    Sukun,
}

impl Diacritic {
    /// All recognized marks, in code point order
    pub const ALL: [Diacritic; 8] = [
        Diacritic::Fathatan,
        Diacritic::Dammatan,
        Diacritic::Kasratan,
        Diacritic::Fatha,
        Diacritic::Damma,
        Diacritic::Kasra,
        Diacritic::Shadda,
        Diacritic::Sukun,
    ];

    /// The combining character for this mark
    pub const fn as_char(self) -> char {
        match self {
            Diacritic::Fathatan => '\u{064B}',
            Diacritic::Dammatan => '\u{064C}',
            Diacritic::Kasratan => '\u{064D}',
            Diacritic::Fatha => '\u{064E}',
            Diacritic::Damma => '\u{064F}',
            Diacritic::Kasra => '\u{0650}',
            Diacritic::Shadda => '\u{0651}',
            Diacritic::Sukun => '\u{0652}',
        }
    }

    /// Look up the mark for a character
    pub fn from_char(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|mark| mark.as_char() == ch)
    }

    /// Lowercase name, as used in serialized output
    pub const fn name(self) -> &'static str {
        match self {
            Diacritic::Fathatan => "fathatan",
            Diacritic::Dammatan => "dammatan",
            Diacritic::Kasratan => "kasratan",
            Diacritic::Fatha => "fatha",
            Diacritic::Damma => "damma",
            Diacritic::Kasra => "kasra",
            Diacritic::Shadda => "shadda",
            Diacritic::Sukun => "sukun",
        }
    }
}

impl fmt::Display for Diacritic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Check if a character is one of the recognized diacritic marks
#[inline]
pub fn is_diacritic(ch: char) -> bool {
    ('\u{064B}'..='\u{0652}').contains(&ch)
}

/// Remove every recognized diacritic mark, wherever it occurs
pub fn strip_diacritics(word: &str) -> String {
    word.chars().filter(|&ch| !is_diacritic(ch)).collect()
}

/// Unicode general categories L* and N*
fn letter_or_number() -> Option<&'static Regex> {
    static CLASS: OnceLock<Option<Regex>> = OnceLock::new();
    CLASS
        .get_or_init(|| match Regex::new(r"^[\p{L}\p{N}]$") {
            Ok(class) => Some(class),
            Err(e) => {
                log::warn!("letter class unavailable, using char::is_alphanumeric: {e}");
                None
            }
        })
        .as_ref()
}

/// Letter or digit by general category; no mark (Mn, Mc, Me) qualifies
#[inline]
pub fn is_alphanumeric(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphanumeric();
    }

    match letter_or_number() {
        Some(class) => class.is_match(ch.encode_utf8(&mut [0; 4])),
        None => ch.is_alphanumeric(),
    }
}

/// Word character: a letter, a digit, or `_`
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch == '_' || is_alphanumeric(ch)
}
