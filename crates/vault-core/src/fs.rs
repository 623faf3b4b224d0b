//! Filesystem utilities for atomic writes.

use std::fs;
use std::io;
use std::path::Path;

/// Write a file atomically: write to a sibling temp file, then rename over
/// the destination.
///
/// Readers either see the old contents or the new contents, never a
/// partial write.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or the rename fails
/// even after the fallback attempt.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, contents)?;
    rename_with_fallback(&temp_path, path)
}

/// Rename a file, tolerating platforms where rename fails if the target
/// exists (notably Windows): remove the destination and retry once. The
/// temp file is cleaned up if the retry also fails.
fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
