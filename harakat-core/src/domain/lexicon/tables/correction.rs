//! Misspelling lookup table

use std::collections::HashMap;

use crate::domain::error::DomainError;

/// Immutable map from a token core to its standard spelling
#[derive(Debug, Clone, Default)]
pub struct CorrectionTable {
    entries: HashMap<String, String>,
}

impl CorrectionTable {
    /// Build from categorized entries, rejecting a misspelling declared twice
    pub fn from_categories<'a, I>(categories: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (&'a String, &'a HashMap<String, String>)>,
    {
        let mut entries = HashMap::new();
        let mut origin: HashMap<&str, &str> = HashMap::new();

        for (category, mappings) in categories {
            for (wrong, right) in mappings {
                if let Some(previous) = origin.insert(wrong.as_str(), category.as_str()) {
                    return Err(DomainError::InvalidLexicon(format!(
                        "misspelling '{wrong}' declared in both '{previous}' and '{category}'"
                    )));
                }
                entries.insert(wrong.clone(), right.clone());
            }
        }

        Ok(Self { entries })
    }

    /// Exact, case-sensitive lookup
    #[inline]
    pub fn lookup(&self, core: &str) -> Option<&str> {
        self.entries.get(core).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for CorrectionTable {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
