//! Plan priority score.
//!
//! Folds reported pain, the body part's base priority, exercise intensity
//! and per-mapping ordering into one sortable score. Lower = earlier in
//! the plan. The weight spread (100 / 10 / 1 / 0.1 / 0.01) makes each
//! factor a strict tie-breaker for the one above it.

use crate::plan::exercise::BodyPartSelection;
use crate::priority::PriorityTable;

pub const PAIN_WEIGHT: f64 = 100.0;
pub const BASE_PRIORITY_WEIGHT: f64 = 10.0;
pub const INTENSITY_WEIGHT: f64 = 1.0;
pub const MAPPING_PRIORITY_WEIGHT: f64 = 0.1;
pub const SELECTION_ORDER_WEIGHT: f64 = 0.01;

/// Intensity assumed for mappings without one.
pub const DEFAULT_INTENSITY_LEVEL: u8 = 2;

/// Score one mapping for one selected body part.
///
/// Within a body part the pain and base-priority terms are constant, so
/// mappings order by intensity (subtracted: gentler first) and then by
/// their configured mapping priority.
pub fn priority_score(
    selection: &BodyPartSelection,
    table: &PriorityTable,
    mapping_priority: u32,
    intensity_level: u8,
) -> f64 {
    let base_priority = table.resolve(&selection.body_part_name);

    f64::from(selection.pain_level) * PAIN_WEIGHT
        + f64::from(base_priority) * BASE_PRIORITY_WEIGHT
        - f64::from(intensity_level) * INTENSITY_WEIGHT
        + f64::from(mapping_priority) * MAPPING_PRIORITY_WEIGHT
        + f64::from(selection.selection_order.unwrap_or(0)) * SELECTION_ORDER_WEIGHT
}
