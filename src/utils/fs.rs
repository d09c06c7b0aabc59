//! Filesystem helpers shared by the asset writers.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Normalize a path to absolute form for display.
///
/// Tries `canonicalize()` first, then falls back to joining a relative
/// path onto the current directory.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Create the parent directory of `path` (and any missing ancestors).
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory `{}`", parent.display()))?;
    }
    Ok(())
}

/// Write `data` to `path`, creating parent directories first.
pub fn write_file(path: &Path, data: impl AsRef<[u8]>) -> Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, data).with_context(|| format!("Failed to write `{}`", path.display()))
}
