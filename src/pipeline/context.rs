//! Pipeline configuration and the handles a running pipeline hands back.

use crossbeam_channel::{Receiver, Sender, bounded};
use std::path::PathBuf;
use std::thread::JoinHandle;

use crate::utils::config::{HANDOFF_CAP, WorkerCounts};
use crate::{Record, SourceSummary};

/// Everything the pipeline needs. Built by the caller and passed in; nothing is read from globals.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Directory to process. Canonicalized by [`run_pipeline`](super::run_pipeline).
    pub root: PathBuf,
    pub hash_workers: usize,
    pub rename_workers: usize,
}

impl PipelineConfig {
    /// Default worker counts (3 hashing, 4 renaming).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            hash_workers: WorkerCounts::HASH,
            rename_workers: WorkerCounts::RENAME,
        }
    }

    /// Worker counts clamped to at least one so every stage drains its input.
    pub(crate) fn worker_counts(&self) -> (usize, usize) {
        (self.hash_workers.max(1), self.rename_workers.max(1))
    }
}

/// One stage hop. Every channel in the pipeline is a zero-capacity handoff.
pub fn handoff_channel() -> (Sender<Record>, Receiver<Record>) {
    bounded::<Record>(HANDOFF_CAP)
}

/// Handles returned by [`run_pipeline`](super::run_pipeline): receive from `record_rx` until it
/// closes, then join everything with [`shutdown_pipeline_handles`](super::shutdown_pipeline_handles).
pub struct PipelineHandles {
    /// Root after canonicalization.
    pub root: PathBuf,
    pub record_rx: Receiver<Record>,
    pub source_handle: JoinHandle<SourceSummary>,
    /// Hash and rename workers; each returns how many records it processed.
    pub worker_handles: Vec<JoinHandle<usize>>,
    /// Drain threads of both fan-in points.
    pub merge_handles: Vec<JoinHandle<usize>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_worker_counts() {
        let c = PipelineConfig::new("/x");
        assert_eq!((c.hash_workers, c.rename_workers), (3, 4));
    }

    #[test]
    fn test_zero_workers_clamped() {
        let c = PipelineConfig {
            root: PathBuf::from("/x"),
            hash_workers: 0,
            rename_workers: 0,
        };
        assert_eq!(c.worker_counts(), (1, 1));
    }
}
