//! Source stage: walk the root, read every non-directory entry, send one record per file.

use anyhow::{Context, Result};
use crossbeam_channel::Sender;
use log::{debug, error};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use crate::{Record, SourceSummary};

/// One result from a directory walk: either an entry to consider or an error with optional path.
pub enum WalkOutcome {
    Entry { path: PathBuf, is_dir: bool },
    Err { msg: String, path: Option<PathBuf> },
}

/// Convert a walkdir result into [`WalkOutcome`].
pub fn to_outcome_walkdir(r: Result<walkdir::DirEntry, walkdir::Error>) -> WalkOutcome {
    match r {
        Ok(entry) => {
            let is_dir = entry.file_type().is_dir();
            WalkOutcome::Entry {
                path: entry.into_path(),
                is_dir,
            }
        }
        Err(err) => WalkOutcome::Err {
            msg: format!("{}", err),
            path: err.path().map(PathBuf::from),
        },
    }
}

/// Sorted walk: walkdir reads a whole directory listing before yielding any of it, so files
/// renamed into the root while the walk is running are not picked up again.
fn walkdir_iter(root: &Path) -> impl Iterator<Item = WalkOutcome> + use<> {
    walkdir::WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .map(to_outcome_walkdir)
}

pub fn spawn_source_thread(
    root: &Path,
    record_tx: Sender<Record>,
) -> Result<JoinHandle<SourceSummary>> {
    let root = root.to_path_buf();
    thread::Builder::new()
        .name("source".into())
        .spawn(move || run_source_loop(walkdir_iter(&root), record_tx))
        .context("spawn source thread")
}

/// Consume `iter`, skip directories, read each file and send it on `record_tx`.
/// The first walk or read error is logged and stops the loop. `record_tx` is dropped on return,
/// which is what closes the rest of the pipeline.
pub fn run_source_loop<I>(iter: I, record_tx: Sender<Record>) -> SourceSummary
where
    I: IntoIterator<Item = WalkOutcome>,
{
    let mut summary = SourceSummary::default();
    for outcome in iter {
        let path = match outcome {
            WalkOutcome::Entry { is_dir: true, .. } => continue,
            WalkOutcome::Entry { path, .. } => path,
            WalkOutcome::Err { msg, path } => {
                let msg = match path {
                    Some(p) => format!("walk {}: {}", p.display(), msg),
                    None => format!("walk: {}", msg),
                };
                error!("{}", msg);
                summary.error = Some(msg);
                break;
            }
        };
        let content = match std::fs::read(&path) {
            Ok(c) => c,
            Err(err) => {
                let msg = format!("read {}: {}", path.display(), err);
                error!("{}", msg);
                summary.error = Some(msg);
                break;
            }
        };
        debug!("read {} ({} bytes)", path.display(), content.len());
        if record_tx.send(Record::new(path, content)).is_err() {
            // Every hasher is gone; nothing left to feed.
            break;
        }
        summary.emitted += 1;
    }
    drop(record_tx);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn test_directories_skipped_and_error_stops_walk() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        std::fs::write(&a, b"1").unwrap();
        std::fs::write(&b, b"2").unwrap();

        let outcomes = vec![
            WalkOutcome::Entry {
                path: dir.path().to_path_buf(),
                is_dir: true,
            },
            WalkOutcome::Entry {
                path: a.clone(),
                is_dir: false,
            },
            WalkOutcome::Err {
                msg: "denied".into(),
                path: None,
            },
            WalkOutcome::Entry {
                path: b,
                is_dir: false,
            },
        ];
        let (tx, rx) = unbounded();
        let summary = run_source_loop(outcomes, tx);

        let got: Vec<Record> = rx.iter().collect();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].path, a);
        assert_eq!(got[0].content, b"1");
        assert_eq!(summary.emitted, 1);
        assert!(summary.error.as_deref().unwrap().contains("denied"));
    }

    #[test]
    fn test_read_error_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let present = dir.path().join("here");
        std::fs::write(&present, b"x").unwrap();

        let outcomes = vec![
            WalkOutcome::Entry {
                path: missing,
                is_dir: false,
            },
            WalkOutcome::Entry {
                path: present,
                is_dir: false,
            },
        ];
        let (tx, rx) = unbounded();
        let summary = run_source_loop(outcomes, tx);

        assert_eq!(rx.iter().count(), 0);
        assert_eq!(summary.emitted, 0);
        assert!(summary.error.as_deref().unwrap().starts_with("read "));
    }

    #[test]
    fn test_walkdir_iter_visits_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub").join("x"), b"x").unwrap();
        std::fs::write(dir.path().join("y"), b"y").unwrap();

        let files = walkdir_iter(dir.path())
            .filter(|o| matches!(o, WalkOutcome::Entry { is_dir: false, .. }))
            .count();
        assert_eq!(files, 2);
    }
}
