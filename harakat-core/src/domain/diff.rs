//! Word-level comparison of original and corrected text
//!
//! Words are aligned by token index. Correction never adds or removes
//! tokens, so for corrector output every change is a one-for-one
//! replacement; arbitrary inputs may leave unmatched words at the tail.

use serde::Serialize;

use crate::domain::text::tokens;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffSegment {
    /// Identical word in both texts
    Same { word: String },
    /// Word differs, or exists on one side only
    Changed {
        removed: Option<String>,
        added: Option<String>,
    },
}

impl DiffSegment {
    pub fn is_change(&self) -> bool {
        matches!(self, DiffSegment::Changed { .. })
    }
}

/// Compare two texts word by word
pub fn word_diff(original: &str, corrected: &str) -> Vec<DiffSegment> {
    let mut before = tokens(original);
    let mut after = tokens(corrected);
    let mut segments = Vec::new();

    loop {
        match (before.next(), after.next()) {
            (None, None) => break,
            (Some(old), Some(new)) if old == new => segments.push(DiffSegment::Same {
                word: old.to_string(),
            }),
            (old, new) => segments.push(DiffSegment::Changed {
                removed: old.map(str::to_string),
                added: new.map(str::to_string),
            }),
        }
    }

    segments
}
