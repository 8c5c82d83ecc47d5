use super::*;

fn filled() -> LessonPlanner {
    LessonPlanner {
        topic: "Photosynthesis".to_owned(),
        grade: GRADE_LEVELS[1].to_owned(),
        duration: DURATIONS[1].to_owned(),
        ..LessonPlanner::default()
    }
}

fn plan(title: &str) -> LessonPlan {
    LessonPlan { title: title.to_owned(), ..LessonPlan::default() }
}

#[test]
fn begin_requires_every_field() {
    for clear in 0..3 {
        let mut planner = filled();
        match clear {
            0 => planner.topic = "  ".to_owned(),
            1 => planner.grade.clear(),
            _ => planner.duration.clear(),
        }
        assert!(planner.begin().is_none());
        assert_eq!(planner.error(), Some(MISSING_FIELDS));
        assert!(!planner.is_generating());
    }
}

#[test]
fn begin_builds_trimmed_request() {
    let mut planner = filled();
    planner.topic = "  Photosynthesis ".to_owned();
    let request = planner.begin().unwrap();
    assert_eq!(request.topic, "Photosynthesis");
    assert_eq!(request.duration, "45 minutes");
    assert!(planner.is_generating());
}

#[test]
fn failed_generation_leaves_no_plan_and_one_error() {
    let mut planner = filled();
    planner.begin().unwrap();
    planner.succeed(plan("Old"));

    planner.begin().unwrap();
    assert!(planner.plan().is_none());
    assert!(planner.error().is_none());

    planner.fail("Failed to generate lesson plan. Please try again.".to_owned());
    assert!(planner.plan().is_none());
    assert_eq!(planner.error(), Some("Failed to generate lesson plan. Please try again."));
    assert!(!planner.is_generating());
}

#[test]
fn export_payload_carries_grade() {
    let mut planner = filled();
    assert!(planner.export_payload().is_none());
    planner.begin().unwrap();
    planner.succeed(plan("Light and Life"));
    let export = planner.export_payload().unwrap();
    assert_eq!(export.plan.title, "Light and Life");
    assert_eq!(export.grade, "Middle School (6-8)");
}

#[test]
fn export_failure_keeps_plan() {
    let mut planner = filled();
    planner.begin().unwrap();
    planner.succeed(plan("Kept"));
    planner.export_failed("Failed to export lesson plan PDF.".to_owned());
    assert_eq!(planner.plan().unwrap().title, "Kept");
    assert!(planner.error().is_some());
}

#[test]
fn export_retry_success_clears_export_error() {
    let mut planner = filled();
    planner.begin().unwrap();
    planner.succeed(plan("Retry"));
    planner.export_failed("Failed to export lesson plan PDF.".to_owned());
    planner.export_succeeded();
    assert!(planner.error().is_none());
    assert_eq!(planner.plan().unwrap().title, "Retry");
}
