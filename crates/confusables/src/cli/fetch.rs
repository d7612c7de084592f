use std::path::Path;

use confusables_table::parse_dataset;

use crate::cli::write_atomic;
use crate::source::{self, DatasetSource};

/// Download (or copy) the dataset to `output` after checking that it parses.
pub fn run(source: &DatasetSource, output: &Path) -> i32 {
    eprintln!("confusables: fetching {}", source.describe());

    let content = match source::load(source) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("confusables: {e}");
            return 1;
        }
    };

    // Refuse to store a dataset we could not build a table from.
    let dataset = match parse_dataset(&content) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("confusables: dataset is malformed: {e}");
            return 2;
        }
    };

    if let Err(e) = write_atomic(output, content.as_bytes()) {
        eprintln!("confusables: cannot write {}: {e}", output.display());
        return 1;
    }

    eprintln!(
        "confusables: wrote {} ({} bytes, version {}, {} MA entries, SHA256: {})",
        output.display(),
        content.len(),
        dataset.version().unwrap_or("unknown"),
        dataset.entries.len(),
        &dataset.sha256[..12]
    );
    0
}
