//! Pipeline components: source, hash and rename stages, fan-in merge, aggregation.
//!
//! ```text
//! source ─► hash×3 ─► merge ─► rename×4 ─► merge ─► aggregate
//! ```
//!
//! Every hop is a zero-capacity channel, so a slow stage stalls the ones before it.

pub mod aggregate;
pub mod context;
pub mod hasher;
pub mod merge;
pub mod orchestrator;
pub mod renamer;
pub mod source;

pub use aggregate::aggregate;
pub use context::{PipelineConfig, PipelineHandles, handoff_channel};
pub use hasher::{hash_record, spawn_hash_workers};
pub use merge::{Merged, merge};
pub use orchestrator::{rename_dir, run_pipeline, shutdown_pipeline_handles};
pub use renamer::{rename_record, spawn_rename_workers};
pub use source::{WalkOutcome, run_source_loop, spawn_source_thread, to_outcome_walkdir};
