//! Hash stage: competing workers fingerprint records, each on its own output channel.

use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, Sender};
use log::debug;
use std::thread::{self, JoinHandle};

use crate::Record;
use crate::engine::fingerprint::fingerprint;

use super::context::handoff_channel;

/// Fingerprint `record` and release its content buffer.
pub fn hash_record(mut record: Record) -> Record {
    if record.fingerprint.is_none() {
        record.fingerprint = Some(fingerprint(&record.content));
    }
    record.content = Vec::new();
    record
}

/// Single hash worker: read records from `record_rx`, attach fingerprints, send on `hashed_tx`.
fn hash_worker_loop(record_rx: Receiver<Record>, hashed_tx: Sender<Record>) -> usize {
    let mut n = 0_usize;
    while let Ok(record) = record_rx.recv() {
        let record = hash_record(record);
        debug!(
            "hashed {} -> {}",
            record.path.display(),
            record.fingerprint.as_deref().unwrap_or_default()
        );
        if hashed_tx.send(record).is_err() {
            break;
        }
        n += 1;
    }
    drop(hashed_tx);
    n
}

/// Spawn `num_workers` hash workers sharing `record_rx`. Returns one output receiver per worker
/// (to be merged) and the worker handles.
pub fn spawn_hash_workers(
    record_rx: Receiver<Record>,
    num_workers: usize,
) -> Result<(Vec<Receiver<Record>>, Vec<JoinHandle<usize>>)> {
    let mut outputs = Vec::with_capacity(num_workers);
    let mut handles = Vec::with_capacity(num_workers);
    for i in 0..num_workers {
        let (hashed_tx, hashed_rx) = handoff_channel();
        let record_rx = record_rx.clone();
        let handle = thread::Builder::new()
            .name(format!("hash-{i}"))
            .spawn(move || hash_worker_loop(record_rx, hashed_tx))
            .context("spawn hash worker")?;
        outputs.push(hashed_rx);
        handles.push(handle);
    }
    Ok((outputs, handles))
}
