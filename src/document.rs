//! Reading and in-place rewriting of documents on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::utils::write_atomic;

/// A per-file failure while reading or writing back a document
#[derive(Debug, thiserror::Error)]
pub enum FixError {
    #[error("Error reading file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Error writing file {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl FixError {
    pub fn path(&self) -> &Path {
        match self {
            FixError::Read { path, .. } | FixError::Write { path, .. } => path,
        }
    }
}

/// Read a document as UTF-8. Undecodable content is a read error.
pub fn read_document(path: &Path) -> Result<String, FixError> {
    fs::read_to_string(path).map_err(|source| FixError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply `transform` to the file at `path` and write the result back atomically.
///
/// `transform` returns `None` when nothing needs to change. The file is written only when the
/// new content differs byte-for-byte from what was read; with `dry_run` nothing is written.
/// Returns whether the file changed (or would change).
pub fn rewrite_in_place<F>(path: &Path, dry_run: bool, transform: F) -> Result<bool, FixError>
where
    F: FnOnce(&str) -> Option<String>,
{
    let original = read_document(path)?;

    let updated = match transform(&original) {
        Some(updated) if updated != original => updated,
        _ => return Ok(false),
    };

    if dry_run {
        log::debug!("Would rewrite {}", path.display());
        return Ok(true);
    }

    write_atomic(path, &updated).map_err(|source| FixError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}
