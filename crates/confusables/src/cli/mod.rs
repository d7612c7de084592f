pub mod compare;
pub mod fetch;
pub mod generate;
pub mod info;
pub mod skeleton;

use std::io::{self, BufRead, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Write `data` to `path` atomically (temp file in the same directory + rename).
pub fn write_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Inputs from the command line, or one per stdin line when none were given
/// and stdin is not a terminal.
pub fn collect_inputs(args: Vec<String>) -> io::Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }
    if is_terminal::is_terminal(io::stdin()) {
        return Ok(Vec::new());
    }
    io::stdin().lock().lines().collect()
}
