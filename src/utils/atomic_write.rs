//! Crash-safe replacement of a file's content.
//!
//! The new content goes to a temporary file in the target's directory which is then renamed
//! over the target. `NamedTempFile` deletes itself on drop, so every early return cleans up.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.as_file().sync_all()?;

    // Keep the original file's permissions
    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp_file.path(), metadata.permissions())?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    log::debug!("Atomically rewrote {}", path.display());
    Ok(())
}
