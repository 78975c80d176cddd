//! Filesystem helpers for whole-file replacement.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Replace `destination` with `contents` without leaving a half-written file.
///
/// The bytes go to a sibling temp file first, which is then renamed over
/// the destination. Parent directories are created as needed.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or the rename fails.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = temp_sibling(destination);
    let written = fs::File::create(&temp_path).and_then(|mut file| {
        file.write_all(contents)?;
        file.sync_all()
    });
    discard_on_error(&temp_path, written)?;
    replace_file(&temp_path, destination)
}

/// Pass `result` through, deleting the half-written `temp_path` on error.
fn discard_on_error<T>(temp_path: &Path, result: io::Result<T>) -> io::Result<T> {
    if result.is_err() {
        let _ = fs::remove_file(temp_path);
    }
    result
}

/// Rename `source` over `destination`, retrying once after removing the
/// destination on platforms where rename refuses to overwrite.
///
/// The source file is removed if the retry fails too.
pub fn replace_file(source: &Path, destination: &Path) -> io::Result<()> {
    if let Err(first) = fs::rename(source, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(source, destination).map_err(|second| {
            let _ = fs::remove_file(source);
            io::Error::new(
                second.kind(),
                format!("Replace failed (first: {}, retry: {})", first, second),
            )
        })?;
    }
    Ok(())
}

fn temp_sibling(destination: &Path) -> PathBuf {
    let file_name = destination
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "store".to_string());
    destination.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_creates_parents() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("nested").join("list.json");

        write_atomic(&dest, b"[]").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "[]");
    }

    #[test]
    fn test_failed_temp_write_is_removed() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join(".list.json.1.tmp");
        fs::write(&temp, b"half").unwrap();

        let failed: io::Result<()> =
            discard_on_error(&temp, Err(io::Error::new(io::ErrorKind::Other, "disk full")));

        assert_eq!(failed.unwrap_err().to_string(), "disk full");
        assert!(!temp.exists());
    }

    #[test]
    fn test_successful_temp_write_is_kept() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join(".list.json.1.tmp");
        fs::write(&temp, b"[]").unwrap();

        discard_on_error(&temp, Ok(())).unwrap();

        assert!(temp.exists());
    }

    #[test]
    fn test_write_atomic_overwrites_and_cleans_temp() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("list.json");

        write_atomic(&dest, b"old").unwrap();
        write_atomic(&dest, b"new").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
