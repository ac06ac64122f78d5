//! Difficulty adjustment from experience level and reported pain.
//!
//! Three-stage system (principle → adaptation → mastery) over a 1-10
//! difficulty score. Pain overrides experience: severe pain forces the
//! principle stage regardless of how experienced the user is.

use crate::plan::exercise::PlannedExercise;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Difficulty assumed for exercises without a score.
pub const DEFAULT_DIFFICULTY_SCORE: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// Map free-form assessment answers onto a level. Unknown or missing
    /// input defaults to beginner, the safe end.
    pub fn from_input(input: Option<&str>) -> Self {
        let Some(raw) = input else {
            return Self::Beginner;
        };

        match raw.trim().to_lowercase().as_str() {
            "rarely" | "beginner" => Self::Beginner,
            "weekly_1_2" | "intermediate" => Self::Intermediate,
            "weekly_3_plus" | "advanced" => Self::Advanced,
            _ => Self::Beginner,
        }
    }

    pub fn default_level(self) -> DifficultyLevel {
        match self {
            Self::Beginner => DifficultyLevel::Principle,
            Self::Intermediate => DifficultyLevel::Adaptation,
            Self::Advanced => DifficultyLevel::Mastery,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Principle,
    Adaptation,
    Mastery,
}

impl DifficultyLevel {
    pub fn score_range(self) -> RangeInclusive<u8> {
        match self {
            Self::Principle => 1..=3,
            Self::Adaptation => 4..=7,
            Self::Mastery => 8..=10,
        }
    }
}

/// Outcome of difficulty adjustment for one user.
#[derive(Debug, Clone)]
pub struct DifficultyAdjustment {
    pub target_level: DifficultyLevel,
    pub allowed_range: RangeInclusive<u8>,
    /// Human-readable reason when pain forced a change, for plan warnings.
    pub adjustment_reason: Option<String>,
}

/// Determine the target difficulty and allowed score range.
pub fn adjust_for_user(experience: ExperienceLevel, pain_level: u8) -> DifficultyAdjustment {
    let base_level = experience.default_level();
    let target_level = adjust_level_by_pain(base_level, pain_level);
    let base_range = allowed_range_for_pain(pain_level);
    let allowed_range = narrow_range_by_target(target_level, base_range);

    let adjustment_reason = if pain_level >= 5 {
        Some("통증이 심하여 안전을 위해 원리 단계로 제한됩니다.".to_string())
    } else if pain_level == 4 && base_level == DifficultyLevel::Mastery {
        Some("통증이 높아 도움 단계에서 적응 단계로 조정되었습니다.".to_string())
    } else {
        None
    };

    DifficultyAdjustment {
        target_level,
        allowed_range,
        adjustment_reason,
    }
}

/// Keep exercises whose difficulty score falls inside the allowed range.
pub fn filter_by_range(
    exercises: Vec<PlannedExercise>,
    range: &RangeInclusive<u8>,
) -> Vec<PlannedExercise> {
    exercises
        .into_iter()
        .filter(|exercise| {
            range.contains(&exercise.difficulty_score.unwrap_or(DEFAULT_DIFFICULTY_SCORE))
        })
        .collect()
}

fn adjust_level_by_pain(base: DifficultyLevel, pain_level: u8) -> DifficultyLevel {
    // Pain 5: force the principle stage.
    if pain_level >= 5 {
        return DifficultyLevel::Principle;
    }

    // Pain 4: demote mastery to adaptation.
    if pain_level == 4 && base == DifficultyLevel::Mastery {
        return DifficultyLevel::Adaptation;
    }

    base
}

fn allowed_range_for_pain(pain_level: u8) -> RangeInclusive<u8> {
    match pain_level {
        level if level >= 5 => 1..=5, // principle plus early adaptation
        4 => 1..=7,
        _ => 1..=10,
    }
}

/// When pain permits the whole scale, narrow it around the target level.
fn narrow_range_by_target(
    target: DifficultyLevel,
    base: RangeInclusive<u8>,
) -> RangeInclusive<u8> {
    if base != (1..=10) {
        return base;
    }

    match target {
        DifficultyLevel::Principle => 1..=4,
        DifficultyLevel::Adaptation => 1..=8,
        DifficultyLevel::Mastery => 4..=10,
    }
}
