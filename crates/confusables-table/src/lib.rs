//! Builds the TR39 confusable mapping table from the Unicode
//! `confusables.txt` dataset.
//!
//! The pipeline is pure: [`parse_dataset`] turns the raw text into an
//! immutable [`Dataset`], [`build_map`] folds its entries through the
//! override rules into a [`ConfusableMap`], and [`render_table`] emits the
//! map as Rust source for embedding.

pub mod dataset;
pub mod entry;
pub mod error;
pub mod map;
pub mod overrides;
pub mod render;

pub use dataset::{parse_dataset, Dataset};
pub use entry::{parse_codepoint, parse_line, ConfusableEntry, MAX_CODEPOINT};
pub use error::TableError;
pub use map::{build_map, ConfusableMap};
pub use overrides::{Resolution, OverrideRule, OVERRIDE_RULES, SUPPLEMENTARY_OVERRIDES};
pub use render::render_table;

/// Name of the upstream dataset file.
pub const DATASET_FILE: &str = "confusables.txt";
