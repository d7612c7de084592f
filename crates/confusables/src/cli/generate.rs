use std::io::Write;
use std::path::Path;

use confusables_table::{build_map, parse_dataset, render_table};

use crate::cli::write_atomic;
use crate::source::{self, DatasetSource};

/// Build the confusable table and emit it as Rust source.
///
/// Writes to `output` when given, otherwise to stdout.
pub fn run(source: &DatasetSource, output: Option<&Path>) -> i32 {
    let content = match source::load(source) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("confusables: {e}");
            return 1;
        }
    };

    let dataset = match parse_dataset(&content) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("confusables: dataset is malformed: {e}");
            return 2;
        }
    };
    let map = build_map(&dataset.entries);
    let code = render_table(&map, &dataset);

    match output {
        Some(path) => {
            if let Err(e) = write_atomic(path, code.as_bytes()) {
                eprintln!("confusables: cannot write {}: {e}", path.display());
                return 1;
            }
            eprintln!(
                "confusables: wrote {} entries to {}",
                map.len(),
                path.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            if let Err(e) = out.write_all(code.as_bytes()).and_then(|_| out.flush()) {
                eprintln!("confusables: cannot write table: {e}");
                return 1;
            }
        }
    }
    0
}
