//! Sumrename: rename every file in a directory to `file-<md5>.txt` through a concurrent pipeline.

pub mod engine;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

pub use pipeline::PipelineConfig;

/// Result alias used by public sumrename API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: run one pass over `root` with the default worker counts.
///
/// Files that fail to rename are counted in the returned tally, not reported as `Err`.
///
/// ```ignore
/// let report = sumrename::rename_dir(std::path::Path::new("/tmp/in"))?;
/// println!("{}", report);
/// ```
pub fn rename_dir(root: &std::path::Path) -> Result<RunReport> {
    pipeline::rename_dir(&PipelineConfig::new(root))
}
