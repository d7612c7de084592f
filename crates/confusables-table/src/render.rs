use std::fmt::Write;

use crate::dataset::Dataset;
use crate::map::ConfusableMap;

const BANNER: &str = "// Auto-generated confusable table. DO NOT EDIT.\n\
// Regenerate with `confusables generate` or by rebuilding confusables-core.\n";

/// Render the map as Rust source.
///
/// The output defines `DATASET_SHA256`, `DATASET_HEADER`, `CONFUSABLE_TABLE`
/// and `CONFUSABLE_COUNT`, and carries the dataset header as comments.
pub fn render_table(map: &ConfusableMap, dataset: &Dataset) -> String {
    let mut code = String::with_capacity(map.len() * 32 + 1024);
    code.push_str(BANNER);

    if !dataset.header.is_empty() {
        code.push_str("//\n// Following is the original header of the source confusables.txt file\n//\n");
        for line in &dataset.header {
            // writing into a String cannot fail
            let _ = writeln!(code, "//{line}");
        }
    }

    let sha256 = &dataset.sha256;
    let _ = writeln!(code, "\npub const DATASET_SHA256: &str = \"{sha256}\";");

    code.push_str("\npub const DATASET_HEADER: &[&str] = &[\n");
    for line in &dataset.header {
        let _ = writeln!(code, "    {line:?},");
    }
    code.push_str("];\n");

    code.push_str("\npub const CONFUSABLE_TABLE: &[(char, &str)] = &[\n");
    for (source, replacement) in map.iter() {
        let _ = writeln!(
            code,
            "    ('\\u{{{:06X}}}', {replacement:?}),",
            source as u32
        );
    }
    code.push_str("];\n");

    let count = map.len();
    let _ = writeln!(code, "\npub const CONFUSABLE_COUNT: usize = {count};");
    code
}
