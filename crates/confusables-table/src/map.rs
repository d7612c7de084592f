use std::collections::btree_map::{self, BTreeMap};

use log::{debug, info, warn};

use crate::entry::ConfusableEntry;
use crate::overrides::{resolve, Resolution, SUPPLEMENTARY_OVERRIDES};

/// Immutable mapping from a confusable codepoint to its prototype string.
///
/// Ordered by codepoint so that rendered tables are reproducible. Order
/// carries no meaning beyond that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfusableMap {
    inner: BTreeMap<char, String>,
}

impl ConfusableMap {
    pub fn get(&self, ch: char) -> Option<&str> {
        self.inner.get(&ch).map(String::as_str)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.inner.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.inner.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl FromIterator<(char, String)> for ConfusableMap {
    fn from_iter<I: IntoIterator<Item = (char, String)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ConfusableMap {
    type Item = (&'a char, &'a String);
    type IntoIter = btree_map::Iter<'a, char, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

/// Fold parsed entries through the override rules, then apply the
/// supplementary overrides.
///
/// Later entries for the same source replace earlier ones.
pub fn build_map(entries: &[ConfusableEntry]) -> ConfusableMap {
    let mut inner = BTreeMap::new();
    let mut dropped = 0usize;

    for entry in entries {
        match resolve(entry) {
            Resolution::Emit(replacement) => {
                if inner.insert(entry.source, replacement).is_some() {
                    warn!(
                        "duplicate confusable source U+{:04X}, keeping the later entry",
                        entry.source as u32
                    );
                }
            }
            Resolution::Drop => {
                info!(
                    "dropping self-referential confusable U+{:04X} -> {:?}",
                    entry.source as u32,
                    entry.target_string()
                );
                dropped += 1;
            }
        }
    }

    for &(source, replacement) in SUPPLEMENTARY_OVERRIDES {
        inner.insert(source, replacement.to_string());
    }

    debug!(
        "built confusable map: {} entries from {} dataset rows ({} dropped, {} supplementary)",
        inner.len(),
        entries.len(),
        dropped,
        SUPPLEMENTARY_OVERRIDES.len()
    );

    ConfusableMap { inner }
}
