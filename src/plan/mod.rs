//! Session plan assembly.
//!
//! Turns scored exercise mappings for the user's selected body parts into
//! a full session: warmup / main / cooldown sections with per-exercise
//! durations. Every stage lives in its own module; `builder` wires them
//! together.

pub mod builder;
pub mod contraindication;
pub mod dedupe;
pub mod difficulty;
pub mod equipment;
pub mod exercise;
pub mod pain_range;
pub mod schedule;
pub mod score;
pub mod section;

// Re-export the pipeline surface
pub use builder::PlanBuilder;
pub use contraindication::{filter_contraindications, Contraindication, ContraindicationResult, Severity};
pub use dedupe::dedupe_exercises;
pub use difficulty::{adjust_for_user, DifficultyAdjustment, DifficultyLevel, ExperienceLevel};
pub use equipment::EquipmentFilter;
pub use exercise::{
    BodyPartSelection, ExerciseMapping, ExerciseTemplate, Plan, PlanRequest, PlanStats,
    PlannedExercise, Section,
};
pub use pain_range::PainLevelRange;
pub use schedule::{distribute_time, ScheduleConfig};
pub use score::priority_score;
pub use section::{classify_sections, SectionPlan};
