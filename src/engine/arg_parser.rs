use clap::Parser;
use std::path::PathBuf;

/// Rename every file in a directory to `file-<md5>.txt`.
#[derive(Clone, Parser)]
#[command(name = "sumrename")]
#[command(about = "Read, hash and rename every file under DIR concurrently.")]
pub struct Cli {
    /// Directory to process. Default: $SUMRENAME_DIR, then $TEMP/TEMP.
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Verbose output (per-file debug lines).
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }
}
