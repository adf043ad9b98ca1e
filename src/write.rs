//! Filesystem writes shared by the pipelines.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::Builder;

use crate::error::{LeilaError, Result};

/// Create `dir` (and parents) unless it already exists.
///
/// Returns `true` when the directory was created.
pub fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(dir).map_err(|source| LeilaError::DirectoryCreationFailed {
        path: dir.to_path_buf(),
        source,
    })?;

    Ok(true)
}

/// Write `bytes` to `path`, replacing any existing file.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| LeilaError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace `path` with `bytes` via a sibling temporary file and a rename.
///
/// Readers see either the old file or the complete new one. A replaced file
/// keeps its permissions; a new file gets the same mode a plain write would.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_failed = |source: std::io::Error| LeilaError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = fs::metadata(path).ok().map(|m| m.permissions());

    let mut file = temp_file_builder().tempfile_in(dir).map_err(write_failed)?;
    if let Some(permissions) = existing {
        file.as_file()
            .set_permissions(permissions)
            .map_err(write_failed)?;
    }
    file.write_all(bytes).map_err(write_failed)?;
    file.as_file().sync_all().map_err(write_failed)?;
    file.persist(path).map_err(|e| write_failed(e.error))?;

    Ok(())
}

/// Temp files default to owner-only; request 0666 so the umask applies.
#[cfg(unix)]
fn temp_file_builder() -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_file_builder() -> Builder<'static, 'static> {
    Builder::new()
}
