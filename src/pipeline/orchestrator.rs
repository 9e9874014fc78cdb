use anyhow::{Result, anyhow};
use log::debug;
use std::thread::JoinHandle;
use std::time::Instant;

use crate::RunReport;
use crate::engine::tools::check_root_and_canonicalize;
use crate::pipeline;

/// Start source → hash×N → merge → rename×M → merge. Returns the final receiver and every
/// handle; caller drains `record_rx` and then joins with [`shutdown_pipeline_handles`].
pub fn run_pipeline(config: &pipeline::PipelineConfig) -> Result<pipeline::PipelineHandles> {
    let root = check_root_and_canonicalize(&config.root)?;
    let (hash_workers, rename_workers) = config.worker_counts();
    debug!(
        "pipeline: {} hash workers, {} rename workers",
        hash_workers, rename_workers
    );

    let (record_tx, record_rx) = pipeline::handoff_channel();
    let source_handle = pipeline::spawn_source_thread(&root, record_tx)?;

    let (hashed_outputs, mut worker_handles) =
        pipeline::spawn_hash_workers(record_rx, hash_workers)?;
    let hashed = pipeline::merge(hashed_outputs)?;

    let (renamed_outputs, rename_handles) =
        pipeline::spawn_rename_workers(hashed.output, &root, rename_workers)?;
    let renamed = pipeline::merge(renamed_outputs)?;

    worker_handles.extend(rename_handles);
    let mut merge_handles = hashed.handles;
    merge_handles.extend(renamed.handles);

    Ok(pipeline::PipelineHandles {
        root,
        record_rx: renamed.output,
        source_handle,
        worker_handles,
        merge_handles,
    })
}

/// Join source, worker and merge threads (after the final stream is drained).
/// Returns the source summary.
pub fn shutdown_pipeline_handles(
    source_handle: JoinHandle<crate::SourceSummary>,
    worker_handles: Vec<JoinHandle<usize>>,
    merge_handles: Vec<JoinHandle<usize>>,
) -> Result<crate::SourceSummary> {
    let summary = source_handle
        .join()
        .map_err(|_| anyhow!("source thread panicked"))?;
    for h in worker_handles {
        h.join().map_err(|_| anyhow!("pipeline worker panicked"))?;
    }
    for h in merge_handles {
        h.join().map_err(|_| anyhow!("merge thread panicked"))?;
    }
    Ok(summary)
}

/// Main orchestrator: one full pass over `config.root`. Per-file failures end up in the tally;
/// only setup errors and thread panics are returned as `Err`.
pub fn rename_dir(config: &pipeline::PipelineConfig) -> Result<RunReport> {
    let start = Instant::now();
    let pipeline::PipelineHandles {
        root,
        record_rx,
        source_handle,
        worker_handles,
        merge_handles,
    } = run_pipeline(config)?;

    let tally = pipeline::aggregate(record_rx);
    debug!(
        "main: final stream closed, {} records from {}",
        tally.total,
        root.display()
    );

    let source = shutdown_pipeline_handles(source_handle, worker_handles, merge_handles)?;
    Ok(RunReport {
        tally,
        source,
        elapsed: start.elapsed(),
    })
}
