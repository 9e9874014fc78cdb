//! Public types for the sumrename API and pipeline.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of the rename attempt for one record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Not yet seen by a renamer.
    #[default]
    Pending,
    /// File now lives at `target`.
    Renamed { target: PathBuf },
    /// Rename to `target` failed; file stays at the record's path.
    Failed { target: PathBuf, error: String },
}

impl RenameOutcome {
    /// Tri-state view: `None` before the renamer ran, then `Some(success)`.
    pub fn renamed(&self) -> Option<bool> {
        match self {
            RenameOutcome::Pending => None,
            RenameOutcome::Renamed { .. } => Some(true),
            RenameOutcome::Failed { .. } => Some(false),
        }
    }
}

/// One file travelling through the pipeline. Owned by exactly one stage at a time.
///
/// `path` is the pre-rename location; after a successful rename the new location is in
/// [`RenameOutcome::Renamed`].
#[derive(Clone, Debug)]
pub struct Record {
    pub path: PathBuf,
    /// Raw bytes; emptied by the hasher once the fingerprint is computed.
    pub content: Vec<u8>,
    /// Size of the content in bytes, kept after `content` is released.
    pub size: u64,
    /// Lowercase hex MD5 of the content. `None` until hashed.
    pub fingerprint: Option<String>,
    pub outcome: RenameOutcome,
}

impl Record {
    pub fn new(path: PathBuf, content: Vec<u8>) -> Self {
        let size = content.len() as u64;
        Self {
            path,
            content,
            size,
            fingerprint: None,
            outcome: RenameOutcome::Pending,
        }
    }

    pub fn renamed(&self) -> Option<bool> {
        self.outcome.renamed()
    }
}

/// Counts from draining the final stream.
#[derive(Clone, Debug, Default)]
pub struct Tally {
    pub success: usize,
    pub total: usize,
    /// (original path, error) for every failed rename.
    pub failures: Vec<(PathBuf, String)>,
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} files renamed", self.success, self.total)
    }
}

/// What the walk thread reports when it exits.
#[derive(Clone, Debug, Default)]
pub struct SourceSummary {
    /// Records sent downstream.
    pub emitted: usize,
    /// First traversal or read error; the walk stopped there.
    pub error: Option<String>,
}

/// Result of one full pass over a directory.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub tally: Tally,
    pub source: SourceSummary,
    pub elapsed: Duration,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {:?}", self.tally, self.elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_tri_state() {
        assert_eq!(RenameOutcome::Pending.renamed(), None);
        let target = PathBuf::from("/tmp/file-x.txt");
        assert_eq!(
            RenameOutcome::Renamed {
                target: target.clone()
            }
            .renamed(),
            Some(true)
        );
        assert_eq!(
            RenameOutcome::Failed {
                target,
                error: "boom".into()
            }
            .renamed(),
            Some(false)
        );
    }

    #[test]
    fn test_record_new_keeps_size() {
        let r = Record::new(PathBuf::from("/a"), b"hello".to_vec());
        assert_eq!(r.size, 5);
        assert!(r.fingerprint.is_none());
        assert_eq!(r.renamed(), None);
    }

    #[test]
    fn test_tally_display() {
        let t = Tally {
            success: 2,
            total: 3,
            failures: Vec::new(),
        };
        assert_eq!(t.to_string(), "2/3 files renamed");
    }
}
