//! Final stage: drain the merged stream and count outcomes.

use crossbeam_channel::Receiver;
use log::debug;

use crate::{Record, RenameOutcome, Tally};

/// Consume `record_rx` until it closes. The only sequential point in the pipeline.
pub fn aggregate(record_rx: Receiver<Record>) -> Tally {
    let mut tally = Tally::default();
    while let Ok(record) = record_rx.recv() {
        tally.total += 1;
        match record.outcome {
            RenameOutcome::Renamed { .. } => tally.success += 1,
            RenameOutcome::Failed { error, .. } => tally.failures.push((record.path, error)),
            RenameOutcome::Pending => {
                debug!("{} reached the end unrenamed", record.path.display());
                tally
                    .failures
                    .push((record.path, "never reached a renamer".into()));
            }
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use std::path::PathBuf;

    #[test]
    fn test_counts_success_and_failure() {
        let (tx, rx) = unbounded();
        let mut ok = Record::new(PathBuf::from("/a"), Vec::new());
        ok.outcome = RenameOutcome::Renamed {
            target: PathBuf::from("/t"),
        };
        let mut bad = Record::new(PathBuf::from("/b"), Vec::new());
        bad.outcome = RenameOutcome::Failed {
            target: PathBuf::from("/t"),
            error: "exists".into(),
        };
        tx.send(ok).unwrap();
        tx.send(bad).unwrap();
        drop(tx);

        let t = aggregate(rx);
        assert_eq!((t.success, t.total), (1, 2));
        assert_eq!(t.failures, vec![(PathBuf::from("/b"), "exists".to_string())]);
    }

    #[test]
    fn test_empty_stream() {
        let (tx, rx) = unbounded::<Record>();
        drop(tx);
        let t = aggregate(rx);
        assert_eq!((t.success, t.total), (0, 0));
    }
}
