//! Rank a sample assessment and assemble a session plan.

use anyhow::Result;
use rehab_ranker::plan::{
    BodyPartSelection, Contraindication, ExerciseMapping, ExerciseTemplate, PlanBuilder,
    PlanRequest, Severity,
};
use rehab_ranker::{AssessmentSignal, PriorityTable, RankingEngine};
use std::time::Instant;

fn template(id: &str, name: &str, intensity: u8, difficulty: u8) -> ExerciseTemplate {
    ExerciseTemplate {
        id: id.to_string(),
        name: name.to_string(),
        intensity_level: Some(intensity),
        difficulty_score: Some(difficulty),
        duration_minutes: None,
        reps: Some(10),
        sets: Some(3),
        rest_seconds: Some(30),
        equipment: Vec::new(),
        is_active: true,
    }
}

fn mapping(body_part_id: &str, template: ExerciseTemplate, priority: u32) -> ExerciseMapping {
    ExerciseMapping {
        body_part_id: body_part_id.to_string(),
        template,
        priority,
        pain_level_range: None,
        intensity_level: None,
        is_active: true,
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. Urgency ranking across reported body parts
    let engine = RankingEngine::with_defaults();
    let signals = vec![
        AssessmentSignal::new("허리", 2.0).with_recency(3.0),
        AssessmentSignal::new("무릎", 8.0).with_recency(1.0),
        AssessmentSignal::new("어깨", 5.0),
    ];

    let start = Instant::now();
    let ranked = engine.rank(&signals)?;
    println!("Urgency ranking ({:?}):", start.elapsed());
    for item in &ranked {
        println!(
            "  #{} {} (base {}, score {:.2})",
            item.rank, item.body_part, item.base_priority, item.composite_score
        );
    }

    // 2. Session plan for the two most urgent parts
    let request = PlanRequest {
        selections: vec![
            BodyPartSelection {
                body_part_id: "bp-knee".to_string(),
                body_part_name: "무릎".to_string(),
                pain_level: 4,
                selection_order: Some(1),
            },
            BodyPartSelection {
                body_part_id: "bp-back".to_string(),
                body_part_name: "허리".to_string(),
                pain_level: 2,
                selection_order: Some(2),
            },
        ],
        pain_level: 4,
        equipment_available: vec!["맨몸".to_string()],
        experience_level: None,
        total_duration_minutes: Some(90),
    };

    let mappings = vec![
        mapping("bp-knee", template("quad-stretch", "대퇴사두근 스트레칭", 1, 2), 1),
        mapping("bp-knee", template("wall-sit", "월싯", 3, 5), 2),
        mapping("bp-back", template("cat-cow", "고양이 자세", 1, 2), 1),
        mapping("bp-back", template("bird-dog", "버드독", 3, 4), 2),
        mapping("bp-back", template("child-pose", "아기 자세", 1, 1), 3),
    ];

    let contraindications = vec![Contraindication {
        template_id: "wall-sit".to_string(),
        template_name: "월싯".to_string(),
        pain_level_min: Some(4),
        severity: Severity::Strict,
        reason: Some("무릎 통증이 심할 때 관절에 부담을 줍니다".to_string()),
    }];

    let builder = PlanBuilder::new(PriorityTable::default());
    let start = Instant::now();
    let plan = builder.build(&request, &mappings, &contraindications);

    println!("\nSession plan ({:?}):", start.elapsed());
    for exercise in &plan.exercises {
        println!(
            "  [{:?} #{}] {} — {:.1} min (score {:.2})",
            exercise.section,
            exercise.order_in_section,
            exercise.template_name,
            exercise.duration_minutes,
            exercise.priority_score
        );
    }
    println!("Total: {} min", plan.total_duration);
    for warning in &plan.warnings {
        println!("  ! {warning}");
    }

    Ok(())
}
