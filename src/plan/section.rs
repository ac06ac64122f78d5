//! Warmup / main / cooldown classification.
//!
//! Low-intensity exercises bookend the session; everything else is main
//! work sorted by priority score. A template appears in exactly one
//! section, with precedence main > warmup > cooldown.

use crate::plan::exercise::{PlannedExercise, Section};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Intensity at or below this level qualifies for warmup/cooldown slots.
/// Missing intensity counts as low.
pub const LOW_INTENSITY_MAX: u8 = 2;

#[derive(Debug, Default)]
pub struct SectionPlan {
    pub warmup: Vec<PlannedExercise>,
    pub main: Vec<PlannedExercise>,
    pub cooldown: Vec<PlannedExercise>,
}

/// Classify exercises into sections.
///
/// Expects input sorted by priority score. Warmup takes the first two
/// low-intensity exercises (one when fewer than three exist); cooldown
/// takes the last one or two; leftover low-intensity exercises join the
/// main block.
pub fn classify_sections(exercises: Vec<PlannedExercise>) -> SectionPlan {
    let (mut low, high): (Vec<_>, Vec<_>) = exercises
        .into_iter()
        .partition(|ex| ex.intensity_level.map_or(true, |level| level <= LOW_INTENSITY_MAX));

    let warmup_count = if low.len() < 3 { 1 } else { 2 }.min(low.len());
    let mut remaining = low.split_off(warmup_count);
    let warmup = low;

    let cooldown_count = match remaining.len() {
        0 => 0,
        n if n >= 3 => 2,
        _ => 1,
    };
    let cooldown = remaining.split_off(remaining.len() - cooldown_count);

    // Leftover low-intensity exercises pad the main block.
    let mut main: Vec<PlannedExercise> = high.into_iter().chain(remaining).collect();
    main.sort_by(|a, b| {
        a.priority_score
            .partial_cmp(&b.priority_score)
            .unwrap_or(Ordering::Equal)
    });

    // A template appears once across the whole session.
    let mut used: FxHashSet<String> = FxHashSet::default();
    let main = take_unique(main, &mut used);
    let warmup = take_unique(warmup, &mut used);
    let cooldown = take_unique(cooldown, &mut used);

    SectionPlan {
        warmup: finalize(warmup, Section::Warmup),
        main: finalize(main, Section::Main),
        cooldown: finalize(cooldown, Section::Cooldown),
    }
}

fn take_unique(
    exercises: Vec<PlannedExercise>,
    used: &mut FxHashSet<String>,
) -> Vec<PlannedExercise> {
    exercises
        .into_iter()
        .filter(|exercise| used.insert(exercise.template_id.clone()))
        .collect()
}

fn finalize(exercises: Vec<PlannedExercise>, section: Section) -> Vec<PlannedExercise> {
    exercises
        .into_iter()
        .enumerate()
        .map(|(index, mut exercise)| {
            exercise.section = section;
            exercise.order_in_section = index + 1;
            exercise
        })
        .collect()
}
