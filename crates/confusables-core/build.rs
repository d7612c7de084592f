use std::env;
use std::fs;
use std::path::Path;

use confusables_table::{build_map, parse_dataset, render_table, DATASET_FILE};

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    // Data files live under the crate directory so they are included in the
    // crate tarball and `cargo publish` / `cargo install` work correctly.
    let data_dir = Path::new(&manifest_dir).join("assets").join("data");

    compile_confusables(&data_dir, &out_dir);

    println!("cargo:rerun-if-changed=assets/data/confusables.txt");
    println!("cargo:rerun-if-changed=build.rs");
}

fn compile_confusables(data_dir: &Path, out_dir: &str) {
    let confusables_path = data_dir.join(DATASET_FILE);
    let content = fs::read_to_string(&confusables_path)
        .unwrap_or_else(|e| panic!("Failed to read {DATASET_FILE}: {e}"));

    // A malformed dataset must fail the build rather than embed a partial table.
    let dataset = parse_dataset(&content)
        .unwrap_or_else(|e| panic!("{DATASET_FILE} is malformed: {e}"));
    if dataset.entries.is_empty() {
        panic!("{DATASET_FILE} contains no MA entries");
    }
    let map = build_map(&dataset.entries);

    let code = render_table(&map, &dataset);
    let out_path = Path::new(out_dir).join("confusables_gen.rs");
    fs::write(&out_path, code).unwrap();
}
