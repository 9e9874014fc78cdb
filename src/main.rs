//! Sumrename CLI: rename every file under DIR to its content hash.

use anyhow::Result;
use clap::Parser;
use sumrename::engine::arg_parser::Cli;
use sumrename::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
