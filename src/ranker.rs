//! Ranking engine.
//!
//! Combines each body part's base priority with its assessment signal
//! into a composite urgency score and produces a deterministic,
//! totally-ordered sequence (most urgent first). Pure: no I/O, no shared
//! mutable state, safe for unrestricted concurrent invocation.

use crate::error::RankError;
use crate::priority::PriorityTable;
use crate::signal::{AssessmentSignal, RankedItem};
use crate::weights::RankWeights;
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::debug;

/// Composite scores closer than this are ties, broken by base priority
/// and then lexicographic body-part identifier.
pub const SCORE_EPSILON: f64 = 1e-9;

/// Stateless scorer over an immutable priority table and weight set.
pub struct RankingEngine {
    table: PriorityTable,
    weights: RankWeights,
}

impl RankingEngine {
    pub fn new(table: PriorityTable, weights: RankWeights) -> Result<Self, RankError> {
        weights.validate()?;
        Ok(Self { table, weights })
    }

    /// Engine over the built-in priority table and reference weights.
    pub fn with_defaults() -> Self {
        Self {
            table: PriorityTable::default(),
            weights: RankWeights::default(),
        }
    }

    pub fn table(&self) -> &PriorityTable {
        &self.table
    }

    pub fn weights(&self) -> &RankWeights {
        &self.weights
    }

    /// Rank assessment signals by urgency (lowest composite score first).
    ///
    /// Every signal is validated before any scoring: one out-of-range
    /// value fails the whole call so callers can never receive a plan
    /// that is silently missing items.
    pub fn rank(&self, signals: &[AssessmentSignal]) -> Result<Vec<RankedItem>, RankError> {
        for signal in signals {
            signal.validate()?;
        }

        let mut items: Vec<RankedItem> = signals
            .iter()
            .map(|signal| {
                let base_priority = self.table.resolve(&signal.body_part);
                RankedItem {
                    body_part: signal.body_part.clone(),
                    base_priority,
                    composite_score: self.composite_score(base_priority, signal),
                    rank: 0,
                }
            })
            .collect();

        items.sort_by(compare_items);

        for (position, item) in items.iter_mut().enumerate() {
            item.rank = position;
        }

        debug!(count = items.len(), "ranked assessment signals");
        Ok(items)
    }

    /// Rank many independent signal sets in parallel.
    ///
    /// Output order matches input order; each set is ranked exactly as
    /// `rank` would rank it on its own.
    pub fn rank_batch(
        &self,
        batches: &[Vec<AssessmentSignal>],
    ) -> Result<Vec<Vec<RankedItem>>, RankError> {
        batches.par_iter().map(|signals| self.rank(signals)).collect()
    }

    fn composite_score(&self, base_priority: u32, signal: &AssessmentSignal) -> f64 {
        f64::from(base_priority) - self.weights.severity * signal.severity
            - self.weights.recency * signal.recency_days.unwrap_or(0.0)
            + self.weights.difficulty_penalty * signal.difficulty.unwrap_or(0.0)
    }
}

/// Total order: composite score ascending, then base priority, then
/// identifier. Reproducible regardless of input ordering.
fn compare_items(a: &RankedItem, b: &RankedItem) -> Ordering {
    if (a.composite_score - b.composite_score).abs() > SCORE_EPSILON {
        // Scores are validated finite, so partial_cmp cannot fail here.
        return a
            .composite_score
            .partial_cmp(&b.composite_score)
            .unwrap_or(Ordering::Equal);
    }

    a.base_priority
        .cmp(&b.base_priority)
        .then_with(|| a.body_part.cmp(&b.body_part))
}
