//! Rename stage: competing workers move each file to its fingerprint-derived name.

use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, warn};
use std::io;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use crate::engine::fingerprint::{is_target_name, target_path};
use crate::engine::tools::display_path;
use crate::{Record, RenameOutcome};

use super::context::handoff_channel;

/// Move `from` to `to`. A different file already at `to` is a collision and fails with
/// `AlreadyExists` instead of being overwritten. The check is not a lock: two workers racing
/// on the same target can both pass it.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    if from != to && to.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("target already exists: {}", to.display()),
        ));
    }
    std::fs::rename(from, to)
}

/// Rename the file behind `record` and record the outcome. Never fails; errors are logged and
/// stored in [`RenameOutcome::Failed`].
pub fn rename_record(mut record: Record, root: &Path) -> Record {
    let Some(fp) = record.fingerprint.as_deref() else {
        warn!("no fingerprint for {}; not renamed", record.path.display());
        record.outcome = RenameOutcome::Failed {
            target: record.path.clone(),
            error: "missing fingerprint".into(),
        };
        return record;
    };
    let target = target_path(root, fp);
    if record.path == target
        && let Some(name) = target.file_name().and_then(|n| n.to_str())
        && is_target_name(name)
    {
        debug!("{} already has its target name", name);
    }
    record.outcome = match move_file(&record.path, &target) {
        Ok(()) => {
            debug!(
                "renamed {} -> {}",
                display_path(&record.path, root),
                display_path(&target, root)
            );
            RenameOutcome::Renamed { target }
        }
        Err(err) => {
            warn!(
                "rename {} -> {}: {}",
                display_path(&record.path, root),
                display_path(&target, root),
                err
            );
            RenameOutcome::Failed {
                target,
                error: err.to_string(),
            }
        }
    };
    record
}

/// Single rename worker: rename each record, forward it regardless of outcome.
fn rename_worker_loop(hashed_rx: Receiver<Record>, renamed_tx: Sender<Record>, root: PathBuf) -> usize {
    let mut n = 0_usize;
    while let Ok(record) = hashed_rx.recv() {
        if renamed_tx.send(rename_record(record, &root)).is_err() {
            break;
        }
        n += 1;
    }
    drop(renamed_tx);
    n
}

/// Spawn `num_workers` rename workers sharing `hashed_rx`. Returns one output receiver per
/// worker (to be merged) and the worker handles.
pub fn spawn_rename_workers(
    hashed_rx: Receiver<Record>,
    root: &Path,
    num_workers: usize,
) -> Result<(Vec<Receiver<Record>>, Vec<JoinHandle<usize>>)> {
    let mut outputs = Vec::with_capacity(num_workers);
    let mut handles = Vec::with_capacity(num_workers);
    for i in 0..num_workers {
        let (renamed_tx, renamed_rx) = handoff_channel();
        let hashed_rx = hashed_rx.clone();
        let root = root.to_path_buf();
        let handle = thread::Builder::new()
            .name(format!("rename-{i}"))
            .spawn(move || rename_worker_loop(hashed_rx, renamed_tx, root))
            .context("spawn rename worker")?;
        outputs.push(renamed_rx);
        handles.push(handle);
    }
    Ok((outputs, handles))
}
