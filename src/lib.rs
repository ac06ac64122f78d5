//! Rehab Ranker
//!
//! Priority-weighted ordering and session assembly for rehabilitation
//! exercises. Two layers:
//! - `ranker`: pure urgency ordering of per-body-part assessment signals
//!   against a static priority table (deterministic, totally ordered).
//! - `plan`: assembles a full session (warmup/main/cooldown, durations)
//!   from scored exercise mappings, honoring pain ranges, equipment,
//!   difficulty limits and contraindications.
//!
//! Both layers are pure and hold no shared mutable state; any number of
//! requests may run concurrently.

pub mod error;
pub mod plan;
pub mod priority;
pub mod ranker;
pub mod signal;
pub mod weights;

// Re-export commonly used types
pub use error::RankError;
pub use priority::{PriorityTable, FALLBACK_PRIORITY};
pub use ranker::{RankingEngine, SCORE_EPSILON};
pub use signal::{AssessmentSignal, RankedItem};
pub use weights::RankWeights;
