//! Contraindicated-exercise filtering.
//!
//! A contraindication either removes an exercise outright (strict) or
//! keeps it with a warning the caller can surface to the user.

use crate::plan::exercise::PlannedExercise;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Strict,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contraindication {
    pub template_id: String,
    pub template_name: String,
    /// Pain level at or above which this applies; `None` = always.
    #[serde(default)]
    pub pain_level_min: Option<u8>,
    pub severity: Severity,
    #[serde(default)]
    pub reason: Option<String>,
}

impl Contraindication {
    fn applies(&self, user_pain_level: u8) -> bool {
        self.pain_level_min
            .map_or(true, |min| user_pain_level >= min)
    }
}

#[derive(Debug, Default)]
pub struct ContraindicationResult {
    pub exercises: Vec<PlannedExercise>,
    pub excluded_template_ids: Vec<String>,
    pub warnings: Vec<String>,
}

/// Apply contraindications against the user's overall pain level.
pub fn filter_contraindications(
    exercises: Vec<PlannedExercise>,
    contraindications: &[Contraindication],
    user_pain_level: u8,
) -> ContraindicationResult {
    let by_template: FxHashMap<&str, &Contraindication> = contraindications
        .iter()
        .map(|contra| (contra.template_id.as_str(), contra))
        .collect();

    let mut result = ContraindicationResult::default();

    for exercise in exercises {
        let Some(contra) = by_template.get(exercise.template_id.as_str()) else {
            result.exercises.push(exercise);
            continue;
        };

        if !contra.applies(user_pain_level) {
            result.exercises.push(exercise);
            continue;
        }

        match contra.severity {
            Severity::Strict => {
                warn!(
                    template = %contra.template_name,
                    user_pain_level,
                    "excluding contraindicated exercise"
                );
                result.excluded_template_ids.push(exercise.template_id.clone());
            }
            Severity::Warning => {
                let reason = contra.reason.as_deref().unwrap_or("주의가 필요합니다");
                let message = match contra.pain_level_min {
                    Some(min) => format!(
                        "경고: 통증 정도가 {min} 이상일 때 {}은(는) {reason}.",
                        contra.template_name
                    ),
                    None => format!("경고: {}은(는) {reason}.", contra.template_name),
                };
                result.warnings.push(message);
                result.exercises.push(exercise);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::exercise::Section;
    use smallvec::smallvec;

    fn exercise(template_id: &str) -> PlannedExercise {
        PlannedExercise {
            template_id: template_id.to_string(),
            template_name: template_id.to_uppercase(),
            body_part_ids: smallvec!["bp-1".to_string()],
            priority_score: 100.0,
            section: Section::Main,
            order_in_section: 0,
            duration_minutes: 0.0,
            intensity_level: None,
            difficulty_score: None,
            reps: None,
            sets: None,
            rest_seconds: None,
        }
    }

    fn contra(
        template_id: &str,
        pain_level_min: Option<u8>,
        severity: Severity,
    ) -> Contraindication {
        Contraindication {
            template_id: template_id.to_string(),
            template_name: template_id.to_uppercase(),
            pain_level_min,
            severity,
            reason: None,
        }
    }

    #[test]
    fn test_strict_removes_exercise() {
        let result = filter_contraindications(
            vec![exercise("deadlift"), exercise("stretch")],
            &[contra("deadlift", Some(3), Severity::Strict)],
            4,
        );

        assert_eq!(result.exercises.len(), 1);
        assert_eq!(result.exercises[0].template_id, "stretch");
        assert_eq!(result.excluded_template_ids, ["deadlift"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_warning_keeps_exercise() {
        let result = filter_contraindications(
            vec![exercise("twist")],
            &[contra("twist", Some(3), Severity::Warning)],
            4,
        );

        assert_eq!(result.exercises.len(), 1);
        assert!(result.excluded_template_ids.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("TWIST"));
    }

    #[test]
    fn test_below_threshold_not_applied() {
        let result = filter_contraindications(
            vec![exercise("deadlift")],
            &[contra("deadlift", Some(4), Severity::Strict)],
            3,
        );

        assert_eq!(result.exercises.len(), 1);
        assert!(result.excluded_template_ids.is_empty());
    }

    #[test]
    fn test_missing_threshold_always_applies() {
        let result = filter_contraindications(
            vec![exercise("deadlift")],
            &[contra("deadlift", None, Severity::Strict)],
            1,
        );

        assert!(result.exercises.is_empty());
        assert_eq!(result.excluded_template_ids, ["deadlift"]);
    }
}
