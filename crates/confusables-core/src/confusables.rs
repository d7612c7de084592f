//! Unicode confusable lookup using the table compiled by build.rs.
use std::collections::HashMap;

use once_cell::sync::Lazy;

use confusables_table::dataset::header_version;

// Include generated confusable table
include!(concat!(env!("OUT_DIR"), "/confusables_gen.rs"));

/// Map from confusable char to the prototype string it resembles.
static CONFUSABLES_MAP: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::with_capacity(CONFUSABLE_COUNT);
    for &(src, replacement) in CONFUSABLE_TABLE {
        m.insert(src, replacement);
    }
    m
});

/// Replacement for a confusable character, if it has one.
pub fn replacement(ch: char) -> Option<&'static str> {
    CONFUSABLES_MAP.get(&ch).copied()
}

/// Check if a character has a confusable mapping.
pub fn is_confusable(ch: char) -> bool {
    CONFUSABLES_MAP.contains_key(&ch)
}

/// Number of entries in the embedded table.
pub fn table_len() -> usize {
    CONFUSABLE_COUNT
}

/// All embedded (source, replacement) pairs, ordered by source.
pub fn table() -> &'static [(char, &'static str)] {
    CONFUSABLE_TABLE
}

/// Unicode version of the dataset the table was built from.
pub fn dataset_version() -> Option<&'static str> {
    header_version(DATASET_HEADER)
}

/// Hex SHA-256 of the dataset the table was built from.
pub fn dataset_sha256() -> &'static str {
    DATASET_SHA256
}
