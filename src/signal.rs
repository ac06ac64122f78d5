//! Assessment signals and ranked output records.
//!
//! Signals are per-request caller input and are never persisted here.
//! Bounds are enforced, not clamped: silently pulling a severity of 15
//! down to 10 would hide upstream data-quality bugs.

use crate::error::RankError;
use serde::{Deserialize, Serialize};

/// Inclusive bounds for pain/severity scores.
pub const SEVERITY_RANGE: (f64, f64) = (0.0, 10.0);

/// Inclusive bounds for recency, in days since the last report.
pub const RECENCY_RANGE: (f64, f64) = (0.0, 365.0);

/// Inclusive bounds for exercise difficulty scores.
pub const DIFFICULTY_RANGE: (f64, f64) = (0.0, 10.0);

/// Per-request ranking input for one body part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentSignal {
    pub body_part: String,
    /// Reported pain severity (0-10).
    pub severity: f64,
    /// Days since the complaint was last reported (0-365).
    #[serde(default)]
    pub recency_days: Option<f64>,
    /// Difficulty of the associated exercise (0-10).
    #[serde(default)]
    pub difficulty: Option<f64>,
}

impl AssessmentSignal {
    pub fn new(body_part: impl Into<String>, severity: f64) -> Self {
        Self {
            body_part: body_part.into(),
            severity,
            recency_days: None,
            difficulty: None,
        }
    }

    pub fn with_recency(mut self, days: f64) -> Self {
        self.recency_days = Some(days);
        self
    }

    pub fn with_difficulty(mut self, difficulty: f64) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Check every numeric field against its documented range.
    pub fn validate(&self) -> Result<(), RankError> {
        self.check("severity", self.severity, SEVERITY_RANGE)?;
        if let Some(days) = self.recency_days {
            self.check("recency_days", days, RECENCY_RANGE)?;
        }
        if let Some(difficulty) = self.difficulty {
            self.check("difficulty", difficulty, DIFFICULTY_RANGE)?;
        }
        Ok(())
    }

    fn check(&self, field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), RankError> {
        if !value.is_finite() || value < min || value > max {
            return Err(RankError::InvalidSignal {
                body_part: self.body_part.clone(),
                field,
                value,
                min,
                max,
            });
        }
        Ok(())
    }
}

/// One entry of the ranked output. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedItem {
    pub body_part: String,
    /// Base priority resolved through the priority table.
    pub base_priority: u32,
    /// Composite urgency score; lower = more urgent.
    pub composite_score: f64,
    /// 0-based output position.
    pub rank: usize,
}
