//! CLI command handler: resolve the root, run one pass, report the tally.

use anyhow::Result;
use log::{debug, info, warn};

use crate::engine::arg_parser::Cli;
use crate::pipeline::{PipelineConfig, rename_dir};
use crate::utils::{resolve_root_from_env, setup_logging};

fn setup_config(cli: &Cli) -> Result<PipelineConfig> {
    setup_logging(cli.verbose());
    let root = match &cli.dir {
        Some(dir) => dir.clone(),
        None => resolve_root_from_env()?,
    };
    Ok(PipelineConfig::new(root))
}

/// Run a single rename pass. Failed renames lower the tally but are not an error.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let config = setup_config(cli)?;
    info!("Start: {}", config.root.display());
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        config
    );

    let report = rename_dir(&config)?;
    if let Some(err) = &report.source.error {
        warn!("Walk stopped early: {}", err);
    }
    if cli.verbose() {
        for (path, err) in &report.tally.failures {
            eprintln!("  not renamed: {} ({})", path.display(), err);
        }
    }
    info!("{}", report);
    Ok(())
}
