//! Sentence terminator lookup with an ASCII fast path

use std::collections::HashSet;

use crate::domain::text::trim;

/// Fast terminator lookup table
#[derive(Debug, Clone)]
pub struct TermTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// HashSet for non-ASCII terminators such as `؟`
    non_ascii: HashSet<char>,
}

impl TermTable {
    /// Create from list of terminator characters
    pub fn new(terminators: impl IntoIterator<Item = char>) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for ch in terminators {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    /// Check if character is a terminator
    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// Split text on every terminator, trimming segments and dropping empty ones.
    ///
    /// Consecutive terminators produce no sentence for the gap between them.
    pub fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(|ch| self.is_terminator(ch))
            .map(trim)
            .filter(|segment| !segment.is_empty())
            .collect()
    }
}
