use log::debug;
use sha2::{Digest, Sha256};

use crate::entry::{parse_line, ConfusableEntry};
use crate::error::TableError;

const BOM: char = '\u{FEFF}';

/// A fully parsed `confusables.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Leading comment block, one element per line, without the `#`.
    pub header: Vec<String>,
    /// MA entries in file order.
    pub entries: Vec<ConfusableEntry>,
    /// Hex SHA-256 of the raw dataset text.
    pub sha256: String,
}

impl Dataset {
    /// The `Version:` value from the header, if present.
    pub fn version(&self) -> Option<&str> {
        header_version(&self.header)
    }
}

/// Parse a whole dataset. Any malformed line aborts the parse.
pub fn parse_dataset(text: &str) -> Result<Dataset, TableError> {
    let sha256 = sha256_hex(text.as_bytes());
    let body = text.strip_prefix(BOM).unwrap_or(text);

    let mut lines = body.lines().enumerate().peekable();

    let mut header = Vec::new();
    while let Some((_, line)) = lines.next_if(|(_, line)| line.starts_with('#')) {
        header.push(line[1..].to_string());
    }

    let mut entries = Vec::new();
    for (index, line) in lines {
        if let Some(entry) = parse_line(line).map_err(|e| e.at_line(index + 1))? {
            entries.push(entry);
        }
    }

    debug!(
        "parsed confusables dataset: {} header lines, {} MA entries",
        header.len(),
        entries.len()
    );

    Ok(Dataset {
        header,
        entries,
        sha256,
    })
}

/// Find the `Version:` line in a dataset header.
pub fn header_version<S: AsRef<str>>(header: &[S]) -> Option<&str> {
    header.iter().find_map(|line| {
        line.as_ref()
            .trim()
            .strip_prefix("Version:")
            .map(str::trim)
    })
}

/// Hex SHA-256 of raw dataset bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
