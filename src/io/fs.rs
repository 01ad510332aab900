//! File reading and atomic writing

use crate::error::{HeroError, Result};
use log::debug;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// Read a UTF-8 text file, mapping missing files and permission problems to typed errors
pub fn read_to_string(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(HeroError::file_not_found(path));
    }
    fs::read_to_string(path).map_err(|e| HeroError::from_io(path, e))
}

/// Create a temp file next to `path`, let `fill` write it, then rename it over `path`
///
/// The destination is left untouched when `fill` fails. An existing target
/// keeps its permissions, and a symlinked target is written through to the
/// file it points at.
pub fn write_atomic_with<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut NamedTempFile) -> Result<()>,
{
    let target = resolve_target(path)?;
    let parent_dir = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(|e| HeroError::from_io(parent_dir, e))?;

    let existing = match fs::metadata(&target) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(HeroError::from_io(&target, e)),
    };

    let mut temp_file = temp_file_builder()
        .tempfile_in(parent_dir)
        .map_err(|e| HeroError::from_io(parent_dir, e))?;
    fill(&mut temp_file)?;
    temp_file.flush()?;

    if let Some(permissions) = existing {
        temp_file
            .as_file()
            .set_permissions(permissions)
            .map_err(|e| HeroError::from_io(temp_file.path(), e))?;
    }

    debug!(
        "Persisting {} to {}",
        temp_file.path().display(),
        target.display()
    );
    temp_file
        .persist(&target)
        .map_err(|e| HeroError::from_io(&target, e.error))?;
    Ok(())
}

/// The real file behind `path` when it already exists
fn resolve_target(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        fs::canonicalize(path).map_err(|e| HeroError::from_io(path, e))
    } else {
        Ok(path.to_path_buf())
    }
}

/// New files get the usual umask-derived mode instead of 0600
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

/// Write `content` to `path` atomically
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    write_atomic_with(path, |file| {
        file.write_all(content.as_bytes())?;
        Ok(())
    })
}
