//! Application configuration constants.
//! Worker counts, naming template and root discovery in one place.

use anyhow::{Result, anyhow};
use std::path::PathBuf;
use std::sync::OnceLock;

// ---- Package / env (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    pkg_name: &'static str,
    dir_env_var: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                pkg_name: pkg,
                dir_env_var: format!("{}_DIR", pkg.to_uppercase()),
            }
        })
    }

    pub fn pkg_name(&self) -> &str {
        self.pkg_name
    }

    /// Env var naming the directory to process (e.g. `SUMRENAME_DIR`).
    pub fn dir_env_var(&self) -> &str {
        &self.dir_env_var
    }
}

// ---- Worker threads ----

/// Fixed worker counts per replicated stage.
pub struct WorkerCounts;

impl WorkerCounts {
    /// Hashing is CPU-bound.
    pub const HASH: usize = 3;
    /// Renaming is I/O-bound.
    pub const RENAME: usize = 4;
}

// ---- Channels ----

/// Capacity of every inter-stage channel. Zero makes each send a rendezvous with a receiver.
pub const HANDOFF_CAP: usize = 0;

// ---- Target naming ----

/// Naming template for renamed files: `<PREFIX><fingerprint><EXTENSION>` inside the root.
pub struct TargetName;

impl TargetName {
    pub const PREFIX: &'static str = "file-";
    pub const EXTENSION: &'static str = ".txt";
}

// ---- Root discovery ----

/// Fallback when no dir is given: `$TEMP/TEMP`.
const TEMP_ENV_VAR: &str = "TEMP";
const TEMP_SUBDIR: &str = "TEMP";

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Resolve the directory to process when none was given on the command line:
/// `.env` → `SUMRENAME_DIR` → `$TEMP/TEMP`.
pub fn resolve_root_from_env() -> Result<PathBuf> {
    let _ = dotenvy::dotenv();
    let pkg = PackagePaths::get();
    if let Some(dir) = non_empty_env(pkg.dir_env_var()) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(temp) = non_empty_env(TEMP_ENV_VAR) {
        return Ok(PathBuf::from(temp).join(TEMP_SUBDIR));
    }
    Err(anyhow!(
        "no directory given; pass DIR or set {} (or {})",
        pkg.dir_env_var(),
        TEMP_ENV_VAR
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_env_var_is_upper_pkg() {
        assert_eq!(PackagePaths::get().dir_env_var(), "SUMRENAME_DIR");
        assert_eq!(PackagePaths::get().pkg_name(), "sumrename");
    }
}
