//! Cross-body-part exercise merging.
//!
//! The same template is often mapped from several selected body parts.
//! Those duplicates collapse into one entry that serves all of them.

use crate::plan::exercise::PlannedExercise;
use rustc_hash::FxHashMap;

/// Merge duplicate templates, keyed by template id.
///
/// The merged entry keeps the union of body-part ids (first-seen order)
/// and the best (lowest) priority score; remaining fields keep their
/// first-seen values. Output preserves first-seen order.
pub fn dedupe_exercises(exercises: Vec<PlannedExercise>) -> Vec<PlannedExercise> {
    let mut order: Vec<String> = Vec::new();
    let mut merged: FxHashMap<String, PlannedExercise> = FxHashMap::default();

    for exercise in exercises {
        match merged.get_mut(&exercise.template_id) {
            None => {
                order.push(exercise.template_id.clone());
                merged.insert(exercise.template_id.clone(), exercise);
            }
            Some(existing) => {
                for body_part_id in exercise.body_part_ids {
                    if !existing.body_part_ids.contains(&body_part_id) {
                        existing.body_part_ids.push(body_part_id);
                    }
                }
                existing.priority_score = existing.priority_score.min(exercise.priority_score);
            }
        }
    }

    order
        .into_iter()
        .filter_map(|template_id| merged.remove(&template_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::exercise::Section;
    use approx::assert_relative_eq;
    use smallvec::smallvec;

    fn exercise(template_id: &str, body_part_id: &str, priority_score: f64) -> PlannedExercise {
        PlannedExercise {
            template_id: template_id.to_string(),
            template_name: template_id.to_uppercase(),
            body_part_ids: smallvec![body_part_id.to_string()],
            priority_score,
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

    #[test]
    fn test_merges_duplicate_templates() {
        let merged = dedupe_exercises(vec![
            exercise("stretch", "bp-back", 210.0),
            exercise("squat", "bp-knee", 220.0),
            exercise("stretch", "bp-knee", 205.0),
        ]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].template_id, "stretch");
        assert_eq!(merged[0].body_part_ids.as_slice(), ["bp-back", "bp-knee"]);
        assert_relative_eq!(merged[0].priority_score, 205.0);
        assert_eq!(merged[1].template_id, "squat");
    }

    #[test]
    fn test_no_duplicate_body_parts() {
        let merged = dedupe_exercises(vec![
            exercise("stretch", "bp-back", 210.0),
            exercise("stretch", "bp-back", 215.0),
        ]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].body_part_ids.as_slice(), ["bp-back"]);
    }

    #[test]
    fn test_preserves_first_seen_order() {
        let merged = dedupe_exercises(vec![
            exercise("c", "bp-1", 3.0),
            exercise("a", "bp-1", 1.0),
            exercise("b", "bp-1", 2.0),
        ]);

        let ids: Vec<&str> = merged.iter().map(|ex| ex.template_id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }
}
