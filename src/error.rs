//! Error taxonomy for the ranking engine.
//!
//! Unknown body parts are deliberately NOT an error: they resolve through
//! the priority table's fallback. The only failure modes are out-of-range
//! numeric inputs and bad weight configuration, both rejected before any
//! scoring begins. There are no transient or retryable variants.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    /// A signal carried a numeric value outside its documented range.
    ///
    /// The whole ranking call is rejected; no partial output is produced.
    #[error("invalid {field} for body part '{body_part}': {value} (allowed {min}..={max})")]
    InvalidSignal {
        body_part: String,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A ranking weight was configured negative or non-finite.
    #[error("invalid weight '{name}': {value} (weights must be non-negative)")]
    InvalidWeight { name: &'static str, value: f64 },
}
