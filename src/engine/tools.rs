//! Path utilities

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

/// Convert absolute path to relative path from base
pub fn path_relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    path.strip_prefix(base).ok().map(|p| p.to_path_buf())
}

/// Short form for log lines: relative to `root` when possible.
pub fn display_path(path: &Path, root: &Path) -> String {
    path_relative_to(path, root)
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}

/// Canonicalize `path` and require it to be a directory.
pub fn check_root_and_canonicalize(path: &Path) -> Result<PathBuf> {
    let root = path
        .canonicalize()
        .with_context(|| format!("canonicalize root {}", path.display()))?;
    if !root.is_dir() {
        bail!("not a directory: {}", root.display());
    }
    Ok(root)
}
