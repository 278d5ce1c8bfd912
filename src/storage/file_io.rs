//! Line-oriented file I/O
//!
//! Every helper opens, operates on and closes the file; no handle outlives a
//! call. Full rewrites go through a temp file and a rename so a crash leaves
//! either the old or the new contents.

use std::fmt::Display;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::LedgerError;

/// Read all lines of a text file, returning an empty list if it doesn't exist
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD and the line is
/// logged, so a file written in a legacy code page still loads.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LedgerError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut lines = Vec::new();
    for (number, raw) in BufReader::new(file).split(b'\n').enumerate() {
        let mut raw = raw.map_err(|e| {
            LedgerError::Storage(format!("Failed to read {}: {}", path.display(), e))
        })?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }

        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                warn!(path = %path.display(), line = number + 1, "Line is not valid UTF-8; replacing invalid bytes");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        lines.push(line);
    }

    Ok(lines)
}

/// Append one line (plus terminator) to a file, creating it if needed
pub fn append_line<P: AsRef<Path>>(path: P, line: &str) -> Result<(), LedgerError> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    writeln!(file, "{}", line)
        .and_then(|_| file.flush())
        .map_err(|e| LedgerError::Storage(format!("Failed to append to {}: {}", path.display(), e)))
}

/// Truncate a file to zero length, creating it if needed
pub fn truncate<P: AsRef<Path>>(path: P) -> Result<(), LedgerError> {
    let path = path.as_ref();
    ensure_parent(path)?;

    File::create(path)
        .map(drop)
        .map_err(|e| LedgerError::Storage(format!("Failed to truncate {}: {}", path.display(), e)))
}

/// Replace a file's contents with the given lines atomically (write to temp, then rename)
pub fn write_lines_atomic<P, I>(path: P, lines: I) -> Result<(), LedgerError>
where
    P: AsRef<Path>,
    I: IntoIterator,
    I::Item: Display,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    let temp_path = temp_path_for(path)?;

    if let Err(e) = write_lines(&temp_path, lines) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn write_lines<I>(path: &Path, lines: I) -> Result<(), LedgerError>
where
    I: IntoIterator,
    I::Item: Display,
{
    let file = File::create(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line)
            .map_err(|e| LedgerError::Storage(format!("Failed to write data: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))
}

fn ensure_parent(path: &Path) -> Result<(), LedgerError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| {
                LedgerError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })
        }
        _ => Ok(()),
    }
}

/// `income.txt` -> `income.txt.tmp`, in the same directory so the rename stays atomic
fn temp_path_for(path: &Path) -> Result<PathBuf, LedgerError> {
    let mut name = path
        .file_name()
        .ok_or_else(|| LedgerError::Storage(format!("Not a file path: {}", path.display())))?
        .to_os_string();
    name.push(".tmp");
    Ok(path.with_file_name(name))
}
