//! Plan pipeline input and output types.
//!
//! Inputs (selections, templates, mappings) are caller-supplied rows from
//! whatever persistence layer surrounds this crate; nothing here is
//! stored. `PlannedExercise` and `Plan` are the pipeline's output.

use crate::plan::difficulty::ExperienceLevel;
use crate::plan::pain_range::PainLevelRange;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One body part the user selected, with its reported pain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyPartSelection {
    pub body_part_id: String,
    pub body_part_name: String,
    /// Reported pain (1-5, 5 worst).
    pub pain_level: u8,
    /// Order the user picked the part in, for fine tie-breaking.
    #[serde(default)]
    pub selection_order: Option<u32>,
}

/// An exercise template as configured upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseTemplate {
    pub id: String,
    pub name: String,
    /// Intensity 1-4; 1-2 qualifies for warmup/cooldown slots.
    #[serde(default)]
    pub intensity_level: Option<u8>,
    /// Difficulty 1-10 on the principle/adaptation/mastery scale.
    #[serde(default)]
    pub difficulty_score: Option<u8>,
    #[serde(default)]
    pub duration_minutes: Option<f64>,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub sets: Option<u32>,
    #[serde(default)]
    pub rest_seconds: Option<u32>,
    /// Equipment options; empty means none needed.
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Body part → exercise template association.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseMapping {
    pub body_part_id: String,
    pub template: ExerciseTemplate,
    /// Per-mapping ordering within the body part (lower = earlier).
    pub priority: u32,
    #[serde(default)]
    pub pain_level_range: Option<PainLevelRange>,
    /// Mapping-level intensity override.
    #[serde(default)]
    pub intensity_level: Option<u8>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Everything the caller knows about the user's session request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub selections: Vec<BodyPartSelection>,
    /// Overall pain level (1-5) used for contraindications and difficulty.
    pub pain_level: u8,
    #[serde(default)]
    pub equipment_available: Vec<String>,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub total_duration_minutes: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Warmup,
    Main,
    Cooldown,
}

/// One exercise in the assembled plan.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedExercise {
    pub template_id: String,
    pub template_name: String,
    /// Body parts this exercise serves; merged across selections.
    pub body_part_ids: SmallVec<[String; 2]>,
    /// Final priority score (lower = earlier in the plan).
    pub priority_score: f64,
    pub section: Section,
    /// 1-based position within the section.
    pub order_in_section: usize,
    pub duration_minutes: f64,
    pub intensity_level: Option<u8>,
    pub difficulty_score: Option<u8>,
    pub reps: Option<u32>,
    pub sets: Option<u32>,
    pub rest_seconds: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PlanStats {
    pub warmup: usize,
    pub main: usize,
    pub cooldown: usize,
    /// Body part name → number of exercises serving it.
    pub by_body_part: FxHashMap<String, usize>,
}

/// Assembled session plan.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub exercises: Vec<PlannedExercise>,
    /// Total planned minutes, rounded.
    pub total_duration: u32,
    pub warnings: Vec<String>,
    pub stats: PlanStats,
}
