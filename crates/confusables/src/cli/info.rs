use serde::Serialize;

use confusables_core::confusables;

#[derive(Debug, Serialize)]
struct TableInfo {
    version: String,
    dataset_version: Option<String>,
    dataset_sha256: String,
    entries: usize,
}

fn gather_info() -> TableInfo {
    TableInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        dataset_version: confusables::dataset_version().map(String::from),
        dataset_sha256: confusables::dataset_sha256().to_string(),
        entries: confusables::table_len(),
    }
}

/// Describe the embedded confusable table.
pub fn run(json: bool) -> i32 {
    let info = gather_info();

    if json {
        match serde_json::to_string_pretty(&info) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("confusables: JSON serialization failed: {e}");
                return 1;
            }
        }
    } else {
        print_human(&info);
    }
    0
}

fn print_human(info: &TableInfo) {
    println!("confusables {}", info.version);
    println!(
        "  dataset:  Unicode confusables.txt {}",
        info.dataset_version.as_deref().unwrap_or("(unknown version)")
    );
    println!("  sha256:   {}", info.dataset_sha256);
    println!("  entries:  {}", info.entries);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gather_info() {
        let info = gather_info();
        assert!(info.entries > 0);
        assert_eq!(info.dataset_sha256.len(), 64);
    }
}
