//! Ranking weight configuration.
//!
//! The coefficients are domain-tuned values expected to change
//! independently of code, so they load from JSON the same way the
//! priority table does. All weights must be non-negative.

use crate::error::RankError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Coefficients of the composite urgency score.
///
/// composite = base_priority − severity·severity_score
///           − recency·recency_days + difficulty_penalty·difficulty_score
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankWeights {
    pub severity: f64,
    pub recency: f64,
    pub difficulty_penalty: f64,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            severity: 1.0,
            recency: 0.1,
            difficulty_penalty: 0.05,
        }
    }
}

impl RankWeights {
    /// Reject negative or non-finite weights at configuration time.
    pub fn validate(&self) -> Result<(), RankError> {
        for (name, value) in [
            ("severity", self.severity),
            ("recency", self.recency),
            ("difficulty_penalty", self.difficulty_penalty),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RankError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }

    /// Load weights from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read weights file: {:?}", path))?;

        let weights: RankWeights =
            serde_json::from_str(&contents).with_context(|| "Failed to parse weights JSON")?;

        weights.validate()?;
        Ok(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let weights = RankWeights::default();
        assert_relative_eq!(weights.severity, 1.0);
        assert_relative_eq!(weights.recency, 0.1);
        assert_relative_eq!(weights.difficulty_penalty, 0.05);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = RankWeights {
            recency: -0.5,
            ..RankWeights::default()
        };
        assert_eq!(
            weights.validate().unwrap_err(),
            RankError::InvalidWeight {
                name: "recency",
                value: -0.5
            }
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let weights: RankWeights = serde_json::from_str(r#"{ "severity": 2.0 }"#).unwrap();
        assert_relative_eq!(weights.severity, 2.0);
        assert_relative_eq!(weights.recency, 0.1);
    }
}
