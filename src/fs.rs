//! Compressing files in place.
//!
//! The whole file is read, shifted in memory and only then written back. The
//! write goes to a temporary file next to the target which is renamed over it,
//! so a failure at any step leaves the original contents untouched.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::engine::CompressionEngine;
use crate::error::Error;
use crate::shift::Shift;

type Result<T> = core::result::Result<T, Error>;

/// File sizes before and after an in-place shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub size_before: u64,
    pub size_after: u64,
}

/// Reads the complete contents of the regular file at `path`.
pub fn read(path: &Path) -> Result<Vec<u8>> {
    let metadata = fs::metadata(path).map_err(|e| Error::file_access(path, e))?;
    if !metadata.is_file() {
        return Err(Error::file_access(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }

    let contents = fs::read(path).map_err(|e| Error::file_access(path, e))?;
    debug!(size = contents.len(), "read input file");
    Ok(contents)
}

/// Replaces the contents of `path` with `contents` in one atomic rename.
///
/// A symbolic link is followed and its target is replaced, so the link
/// survives. The permissions of the existing file are carried over to the
/// replacement. A file that cannot be opened for writing is refused before
/// anything is staged.
pub fn write(path: &Path, contents: &[u8]) -> Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    check_writable(&target).map_err(|e| Error::file_access(path, e))?;

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(|e| Error::file_access(path, e))?;
    staged
        .write_all(contents)
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|e| Error::file_access(path, e))?;

    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(staged.path(), metadata.permissions())
            .map_err(|e| Error::file_access(path, e))?;
    }

    staged
        .persist(&target)
        .map_err(|e| Error::file_access(path, e.error))?;
    debug!(size = contents.len(), path = %target.display(), "wrote output file");
    Ok(())
}

/// Fails unless an existing `target` may be written in place.
///
/// The read-only bit is checked on its own because a privileged user can open
/// such a file for writing anyway.
fn check_writable(target: &Path) -> io::Result<()> {
    match fs::metadata(target) {
        Ok(metadata) if metadata.permissions().readonly() => Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "file is read-only",
        )),
        Ok(_) => OpenOptions::new().write(true).open(target).map(drop),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Compresses the file at `path` by `shift` steps in place.
///
/// Nothing is written unless the shift is valid for the file.
pub fn compress_file(engine: &CompressionEngine, path: &Path, shift: &Shift) -> Result<Outcome> {
    let input = read(path)?;
    let output = engine.compress(&input, shift)?;
    write(path, &output)?;

    let outcome = Outcome {
        size_before: input.len() as u64,
        size_after: output.len() as u64,
    };
    info!(
        path = %path.display(),
        %shift,
        size_before = outcome.size_before,
        size_after = outcome.size_after,
        "shifted file"
    );
    Ok(outcome)
}
