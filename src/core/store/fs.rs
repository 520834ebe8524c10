//! Filesystem access for the backing file.
//!
//! Reads tolerate a missing file. Writes go through a temporary file in the
//! same directory and are renamed into place, so a crash mid-save leaves the
//! previous contents intact.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, StoreError};

/// Read the raw bytes of the file, or `None` if it does not exist.
///
/// Decoding is left to the caller so that one bad line does not fail the
/// whole read.
pub(super) fn read_if_exists(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StoreError::Read {
            path: path.to_path_buf(),
            source,
        }
        .into()),
    }
}

/// Replace the file with `contents`.
///
/// The temporary file is created with owner-only permissions on Unix, and
/// the rename keeps them.
pub(super) fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source: io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}
