//! TR39 skeleton: NFKD, confusable substitution, NFKD again.
//!
//! See <http://www.unicode.org/reports/tr39/#Confusable_Detection>.

use std::collections::HashMap;

use confusables_table::ConfusableMap;

use crate::confusables;
use crate::normalize::nfkd;

/// A source of confusable replacements keyed by exact codepoint.
pub trait Replacements {
    fn replacement(&self, ch: char) -> Option<&str>;
}

/// The table embedded at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTable;

impl Replacements for EmbeddedTable {
    fn replacement(&self, ch: char) -> Option<&str> {
        confusables::replacement(ch)
    }
}

impl Replacements for ConfusableMap {
    fn replacement(&self, ch: char) -> Option<&str> {
        self.get(ch)
    }
}

impl<S: AsRef<str>> Replacements for HashMap<char, S> {
    fn replacement(&self, ch: char) -> Option<&str> {
        self.get(&ch).map(|s| s.as_ref())
    }
}

/// Convert a string to its skeleton using the embedded table.
pub fn skeleton(input: &str) -> String {
    skeleton_with(input, &EmbeddedTable)
}

/// Convert a string to its skeleton using `table`.
///
/// Substitution is a single left-to-right pass into a fresh buffer: text
/// produced by a replacement is never looked up again.
pub fn skeleton_with<R: Replacements + ?Sized>(input: &str, table: &R) -> String {
    let decomposed = nfkd(input);

    let mut substituted = String::with_capacity(decomposed.len());
    for ch in decomposed.chars() {
        match table.replacement(ch) {
            Some(replacement) => substituted.push_str(replacement),
            None => substituted.push(ch),
        }
    }

    nfkd(&substituted)
}

/// Check if two strings are confusable (their skeletons match).
///
/// Case is significant: "Paypal" and "paypal" are not confusable.
pub fn are_confusable(a: &str, b: &str) -> bool {
    skeleton(a) == skeleton(b)
}
