//! Plan builder - pipeline coordinator for assembling a session plan.
//!
//! Stages: candidate filtering (active / pain range / equipment) →
//! priority scoring → difficulty filtering → sort → cross-body-part
//! dedup → contraindication filtering → section classification → time
//! distribution → stats. Each stage is a pure transform; the builder
//! only wires them together.

use crate::plan::contraindication::{filter_contraindications, Contraindication};
use crate::plan::dedupe::dedupe_exercises;
use crate::plan::difficulty::{adjust_for_user, filter_by_range};
use crate::plan::equipment::EquipmentFilter;
use crate::plan::exercise::{
    BodyPartSelection, ExerciseMapping, Plan, PlanRequest, PlanStats, PlannedExercise, Section,
};
use crate::plan::schedule::{distribute_time, ScheduleConfig, DEFAULT_TOTAL_MINUTES};
use crate::plan::score::{priority_score, DEFAULT_INTENSITY_LEVEL};
use crate::plan::section::classify_sections;
use crate::priority::PriorityTable;
use rustc_hash::FxHashMap;
use smallvec::smallvec;
use std::cmp::Ordering;
use tracing::debug;

pub struct PlanBuilder {
    table: PriorityTable,
    schedule: ScheduleConfig,
}

impl PlanBuilder {
    pub fn new(table: PriorityTable) -> Self {
        Self {
            table,
            schedule: ScheduleConfig::default(),
        }
    }

    pub fn with_schedule(mut self, schedule: ScheduleConfig) -> Self {
        self.schedule = schedule;
        self
    }

    /// Assemble a session plan from caller-supplied mappings.
    ///
    /// An empty candidate set yields an empty plan with a warning, not an
    /// error: the surrounding application decides how to fall back.
    pub fn build(
        &self,
        request: &PlanRequest,
        mappings: &[ExerciseMapping],
        contraindications: &[Contraindication],
    ) -> Plan {
        let mut warnings: Vec<String> = Vec::new();
        let total_minutes = request.total_duration_minutes.unwrap_or(DEFAULT_TOTAL_MINUTES);

        let selections: FxHashMap<&str, &BodyPartSelection> = request
            .selections
            .iter()
            .map(|selection| (selection.body_part_id.as_str(), selection))
            .collect();
        let equipment = EquipmentFilter::new(request.equipment_available.iter().cloned());

        // Filter mappings to usable candidates and score them.
        let mut candidates: Vec<PlannedExercise> = Vec::new();
        for mapping in mappings {
            let Some(selection) = selections.get(mapping.body_part_id.as_str()) else {
                continue;
            };
            if !mapping.is_active || !mapping.template.is_active {
                continue;
            }
            if let Some(range) = mapping.pain_level_range {
                if !range.matches(selection.pain_level) {
                    continue;
                }
            }
            if !equipment.allows(&mapping.template.equipment) {
                continue;
            }

            // Mapping-level intensity overrides the template's.
            let intensity = mapping.intensity_level.or(mapping.template.intensity_level);
            let score = priority_score(
                selection,
                &self.table,
                mapping.priority,
                intensity.unwrap_or(DEFAULT_INTENSITY_LEVEL),
            );

            candidates.push(PlannedExercise {
                template_id: mapping.template.id.clone(),
                template_name: mapping.template.name.clone(),
                body_part_ids: smallvec![mapping.body_part_id.clone()],
                priority_score: score,
                section: Section::Main, // reassigned during classification
                order_in_section: 0,
                duration_minutes: mapping.template.duration_minutes.unwrap_or(0.0),
                intensity_level: intensity,
                difficulty_score: mapping.template.difficulty_score,
                reps: mapping.template.reps,
                sets: mapping.template.sets,
                rest_seconds: mapping.template.rest_seconds,
            });
        }

        if candidates.is_empty() {
            warnings.push("추천 운동을 찾을 수 없습니다.".to_string());
            return Plan {
                exercises: Vec::new(),
                total_duration: total_minutes,
                warnings,
                stats: PlanStats::default(),
            };
        }
        debug!(candidates = candidates.len(), "scored plan candidates");

        // Difficulty filtering, when the caller knows the user's experience.
        if let Some(experience) = request.experience_level {
            let adjustment = adjust_for_user(experience, request.pain_level);
            candidates = filter_by_range(candidates, &adjustment.allowed_range);
            if let Some(reason) = adjustment.adjustment_reason {
                warnings.push(reason);
            }
        }

        candidates.sort_by(|a, b| {
            a.priority_score
                .partial_cmp(&b.priority_score)
                .unwrap_or(Ordering::Equal)
        });

        let deduplicated = dedupe_exercises(candidates);

        let filtered =
            filter_contraindications(deduplicated, contraindications, request.pain_level);
        warnings.extend(filtered.warnings);

        let sections = classify_sections(filtered.exercises);
        let exercises = distribute_time(sections, total_minutes, &self.schedule);

        let stats = compute_stats(&exercises, &request.selections);
        let total_duration = exercises
            .iter()
            .map(|exercise| exercise.duration_minutes)
            .sum::<f64>()
            .round() as u32;

        debug!(
            exercises = exercises.len(),
            total_duration, "assembled session plan"
        );

        Plan {
            exercises,
            total_duration,
            warnings,
            stats,
        }
    }
}

fn compute_stats(exercises: &[PlannedExercise], selections: &[BodyPartSelection]) -> PlanStats {
    let mut stats = PlanStats::default();

    for exercise in exercises {
        match exercise.section {
            Section::Warmup => stats.warmup += 1,
            Section::Main => stats.main += 1,
            Section::Cooldown => stats.cooldown += 1,
        }
    }

    for selection in selections {
        let count = exercises
            .iter()
            .filter(|exercise| {
                exercise
                    .body_part_ids
                    .iter()
                    .any(|id| id == &selection.body_part_id)
            })
            .count();
        stats
            .by_body_part
            .insert(selection.body_part_name.clone(), count);
    }

    stats
}
