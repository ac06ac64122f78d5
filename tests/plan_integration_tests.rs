//! End-to-end plan assembly tests.
//!
//! Exercises the whole pipeline with realistic multi-body-part requests:
//! filtering, scoring, dedup, contraindications, sections and timing.

use rehab_ranker::plan::{
    BodyPartSelection, Contraindication, ExerciseMapping, ExerciseTemplate, ExperienceLevel,
    PainLevelRange, PlanBuilder, PlanRequest, Section, Severity,
};
use rehab_ranker::PriorityTable;

fn template(id: &str, intensity: u8, difficulty: u8, equipment: &[&str]) -> ExerciseTemplate {
    ExerciseTemplate {
        id: id.to_string(),
        name: id.to_uppercase(),
        intensity_level: Some(intensity),
        difficulty_score: Some(difficulty),
        duration_minutes: None,
        reps: Some(12),
        sets: Some(3),
        rest_seconds: Some(45),
        equipment: equipment.iter().map(|s| (*s).to_string()).collect(),
        is_active: true,
    }
}

fn mapping(
    body_part_id: &str,
    template: ExerciseTemplate,
    priority: u32,
    pain_level_range: Option<PainLevelRange>,
) -> ExerciseMapping {
    ExerciseMapping {
        body_part_id: body_part_id.to_string(),
        template,
        priority,
        pain_level_range,
        intensity_level: None,
        is_active: true,
    }
}

fn selection(id: &str, name: &str, pain_level: u8, order: u32) -> BodyPartSelection {
    BodyPartSelection {
        body_part_id: id.to_string(),
        body_part_name: name.to_string(),
        pain_level,
        selection_order: Some(order),
    }
}

fn two_part_request() -> PlanRequest {
    PlanRequest {
        selections: vec![
            selection("bp-back", "허리", 3, 1),
            selection("bp-knee", "무릎", 2, 2),
        ],
        pain_level: 3,
        equipment_available: vec!["맨몸".to_string()],
        experience_level: None,
        total_duration_minutes: Some(90),
    }
}

fn catalog() -> Vec<ExerciseMapping> {
    vec![
        mapping("bp-back", template("cat-cow", 1, 2, &["맨몸"]), 1, None),
        mapping("bp-back", template("bird-dog", 3, 4, &["맨몸"]), 2, None),
        mapping(
            "bp-back",
            template("deadlift", 4, 9, &["바벨"]),
            3,
            Some(PainLevelRange::Between(1, 2)),
        ),
        mapping("bp-knee", template("quad-stretch", 1, 2, &["맨몸"]), 1, None),
        mapping("bp-knee", template("wall-sit", 3, 5, &["맨몸"]), 2, None),
        // Shared template mapped from both body parts.
        mapping("bp-knee", template("cat-cow", 1, 2, &["맨몸"]), 3, None),
        mapping("bp-knee", template("hamstring-curl", 2, 4, &["맨몸"]), 4, None),
    ]
}

#[test]
fn test_full_pipeline_layout() {
    let builder = PlanBuilder::new(PriorityTable::default());
    let plan = builder.build(&two_part_request(), &catalog(), &[]);

    // deadlift is excluded twice over: pain range 1-2 vs pain 3, and the
    // barbell is not available.
    assert!(plan
        .exercises
        .iter()
        .all(|exercise| exercise.template_id != "deadlift"));

    // cat-cow appears once, serving both body parts. The knee mapping
    // scores lower (pain 2 vs 3), so its id comes first in the merge.
    let cat_cow: Vec<_> = plan
        .exercises
        .iter()
        .filter(|exercise| exercise.template_id == "cat-cow")
        .collect();
    assert_eq!(cat_cow.len(), 1);
    assert_eq!(cat_cow[0].body_part_ids.as_slice(), ["bp-knee", "bp-back"]);

    // Every exercise got a positive duration and a 1-based section order.
    for exercise in &plan.exercises {
        assert!(exercise.duration_minutes > 0.0);
        assert!(exercise.order_in_section >= 1);
    }

    // Section counts match stats.
    let warmup = plan.exercises.iter().filter(|e| e.section == Section::Warmup).count();
    let main = plan.exercises.iter().filter(|e| e.section == Section::Main).count();
    let cooldown = plan.exercises.iter().filter(|e| e.section == Section::Cooldown).count();
    assert_eq!(plan.stats.warmup, warmup);
    assert_eq!(plan.stats.main, main);
    assert_eq!(plan.stats.cooldown, cooldown);
    assert!(main >= 1);
}

#[test]
fn test_main_section_ordered_by_priority_score() {
    let request = PlanRequest {
        selections: vec![
            selection("bp-back", "허리", 2, 1),
            selection("bp-knee", "무릎", 5, 2),
        ],
        pain_level: 3,
        equipment_available: vec!["맨몸".to_string()],
        experience_level: None,
        total_duration_minutes: Some(90),
    };
    let mappings = vec![
        mapping("bp-back", template("bird-dog", 3, 4, &["맨몸"]), 1, None),
        mapping("bp-knee", template("wall-sit", 3, 5, &["맨몸"]), 1, None),
    ];

    let builder = PlanBuilder::new(PriorityTable::default());
    let plan = builder.build(&request, &mappings, &[]);

    let main: Vec<&str> = plan
        .exercises
        .iter()
        .filter(|e| e.section == Section::Main)
        .map(|e| e.template_id.as_str())
        .collect();

    // 허리 pain 2: 2*100 + 1*10 - 3 + 0.1 + 0.01 = 207.11
    // 무릎 pain 5: 5*100 + 2*10 - 3 + 0.1 + 0.02 = 517.12
    assert_eq!(main, ["bird-dog", "wall-sit"]);
}

#[test]
fn test_strict_contraindication_removed_with_stats() {
    let contraindications = vec![Contraindication {
        template_id: "wall-sit".to_string(),
        template_name: "WALL-SIT".to_string(),
        pain_level_min: Some(3),
        severity: Severity::Strict,
        reason: None,
    }];

    let builder = PlanBuilder::new(PriorityTable::default());
    let plan = builder.build(&two_part_request(), &catalog(), &contraindications);

    assert!(plan
        .exercises
        .iter()
        .all(|exercise| exercise.template_id != "wall-sit"));
}

#[test]
fn test_warning_contraindication_keeps_exercise() {
    let contraindications = vec![Contraindication {
        template_id: "bird-dog".to_string(),
        template_name: "BIRD-DOG".to_string(),
        pain_level_min: Some(3),
        severity: Severity::Warning,
        reason: Some("허리에 부담이 될 수 있습니다".to_string()),
    }];

    let builder = PlanBuilder::new(PriorityTable::default());
    let plan = builder.build(&two_part_request(), &catalog(), &contraindications);

    assert!(plan
        .exercises
        .iter()
        .any(|exercise| exercise.template_id == "bird-dog"));
    assert!(plan
        .warnings
        .iter()
        .any(|warning| warning.contains("BIRD-DOG")));
}

#[test]
fn test_severe_pain_with_experience_limits_difficulty() {
    let mut request = two_part_request();
    request.pain_level = 5;
    request.experience_level = Some(ExperienceLevel::Advanced);

    let builder = PlanBuilder::new(PriorityTable::default());
    let plan = builder.build(&request, &catalog(), &[]);

    // Allowed difficulty is 1..=5 at pain 5; nothing harder survives.
    for exercise in &plan.exercises {
        assert!(exercise.difficulty_score.unwrap_or(5) <= 5);
    }
    assert!(plan
        .warnings
        .iter()
        .any(|warning| warning.contains("원리 단계")));
}

#[test]
fn test_equipment_gates_candidates() {
    let mut request = two_part_request();
    request.pain_level = 2;
    for selection in &mut request.selections {
        selection.pain_level = 2;
    }
    request.equipment_available = vec!["바벨".to_string()];

    let builder = PlanBuilder::new(PriorityTable::default());
    let plan = builder.build(&request, &catalog(), &[]);

    // With a barbell available and pain 2, deadlift qualifies; bodyweight
    // exercises remain usable regardless of the equipment selection.
    assert!(plan
        .exercises
        .iter()
        .any(|exercise| exercise.template_id == "deadlift"));
    assert!(plan
        .exercises
        .iter()
        .any(|exercise| exercise.template_id == "cat-cow"));
}

#[test]
fn test_total_duration_is_sum_of_exercises() {
    let builder = PlanBuilder::new(PriorityTable::default());
    let plan = builder.build(&two_part_request(), &catalog(), &[]);

    let sum: f64 = plan.exercises.iter().map(|e| e.duration_minutes).sum();
    assert_eq!(plan.total_duration, sum.round() as u32);
}
