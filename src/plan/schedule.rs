//! Per-exercise time distribution.
//!
//! Splits the requested session length across sections, then evenly
//! across each section's exercises, clamped so single exercises never
//! balloon or shrink past useful bounds.

use crate::plan::exercise::PlannedExercise;
use crate::plan::section::SectionPlan;
use serde::{Deserialize, Serialize};

/// Main block never shrinks below this, whatever the request says.
pub const MIN_MAIN_TIME: f64 = 30.0;

/// Session length assumed when the request does not carry one.
pub const DEFAULT_TOTAL_MINUTES: u32 = 90;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Minutes reserved for the warmup block.
    pub warmup_time: f64,
    /// Minutes reserved for the cooldown block.
    pub cooldown_time: f64,
    /// Floor for any single exercise.
    pub min_exercise_time: f64,
    /// Ceiling for a main exercise.
    pub max_main_exercise_time: f64,
    /// Ceiling for a warmup or cooldown exercise.
    pub max_warmup_cooldown_time: f64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            warmup_time: 15.0,
            cooldown_time: 15.0,
            min_exercise_time: 5.0,
            max_main_exercise_time: 20.0,
            max_warmup_cooldown_time: 10.0,
        }
    }
}

/// Assign per-exercise durations and flatten the sections into plan order
/// (warmup, main, cooldown).
pub fn distribute_time(
    sections: SectionPlan,
    total_minutes: u32,
    config: &ScheduleConfig,
) -> Vec<PlannedExercise> {
    let main_time =
        (f64::from(total_minutes) - config.warmup_time - config.cooldown_time).max(MIN_MAIN_TIME);

    let mut planned = Vec::new();
    planned.extend(allocate(
        sections.warmup,
        config.warmup_time,
        config.min_exercise_time,
        config.max_warmup_cooldown_time,
    ));
    planned.extend(allocate(
        sections.main,
        main_time,
        config.min_exercise_time,
        config.max_main_exercise_time,
    ));
    planned.extend(allocate(
        sections.cooldown,
        config.cooldown_time,
        config.min_exercise_time,
        config.max_warmup_cooldown_time,
    ));
    planned
}

fn allocate(
    exercises: Vec<PlannedExercise>,
    section_time: f64,
    min_time: f64,
    max_time: f64,
) -> Vec<PlannedExercise> {
    if exercises.is_empty() {
        return exercises;
    }

    let per_exercise = (section_time / exercises.len() as f64)
        .max(min_time)
        .min(max_time);
    let rounded = (per_exercise * 10.0).round() / 10.0;

    exercises
        .into_iter()
        .map(|mut exercise| {
            exercise.duration_minutes = rounded;
            exercise
        })
        .collect()
}
