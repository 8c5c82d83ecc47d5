use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_defaults_gamification_fields_when_absent() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "name": "ana",
        "email": "ana@example.com",
        "role": "student",
        "grade": "N/A",
        "photo": null,
        "isVerified": true
    }))
    .unwrap();
    assert_eq!(user.xp, 0);
    assert_eq!(user.level, 1);
    assert!(user.badges.is_empty());
    assert!(user.is_verified);
    assert_eq!(user.role, Role::Student);
}

#[test]
fn user_serializes_camel_case_fields() {
    let user = User {
        id: "u1".to_owned(),
        name: "ana".to_owned(),
        email: "ana@example.com".to_owned(),
        role: Role::Teacher,
        grade: None,
        photo: None,
        is_verified: true,
        xp: 250,
        level: 2,
        badges: vec!["Perfect Score".to_owned()],
    };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["isVerified"], true);
    assert_eq!(json["role"], "teacher");
    assert_eq!(json["badges"][0], "Perfect Score");
}

#[test]
fn role_paths() {
    assert_eq!(Role::Student.login_path(), "/student-login");
    assert_eq!(Role::Teacher.login_path(), "/teacher-login");
    assert_eq!(Role::Student.dashboard_path(), "/student");
    assert_eq!(Role::Teacher.dashboard_path(), "/teacher");
}

// =============================================================
// Error bodies
// =============================================================

#[test]
fn error_body_prefers_error_then_message() {
    let both: ErrorBody =
        serde_json::from_str(r#"{"error":"bad","message":"other"}"#).unwrap();
    assert_eq!(both.text(), Some("bad"));
    let message_only: ErrorBody = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
    assert_eq!(message_only.text(), Some("nope"));
    let blank: ErrorBody = serde_json::from_str(r#"{"error":"  "}"#).unwrap();
    assert_eq!(blank.text(), None);
}

// =============================================================
// Model-produced payloads
// =============================================================

#[test]
fn lesson_plan_tolerates_missing_lists() {
    let plan: LessonPlan =
        serde_json::from_str(r#"{"title":"Fractions","duration":"45 minutes"}"#).unwrap();
    assert_eq!(plan.title, "Fractions");
    assert!(plan.activities.is_empty());
    assert!(plan.differentiation.is_empty());
}

#[test]
fn lesson_plan_export_flattens_plan_and_grade() {
    let export = LessonPlanExport {
        plan: LessonPlan { title: "Cells".to_owned(), ..LessonPlan::default() },
        grade: "High School (9-12)".to_owned(),
    };
    let json = serde_json::to_value(&export).unwrap();
    assert_eq!(json["title"], "Cells");
    assert_eq!(json["grade"], "High School (9-12)");
}

#[test]
fn grade_request_uses_snake_case_answers_field() {
    let req = GradeRequest { manual_answers: "Ana: 4".to_owned(), rubric: "standard".to_owned() };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["manual_answers"], "Ana: 4");
}

#[test]
fn grading_report_accepts_numeric_strings() {
    let report: GradingReport = serde_json::from_value(serde_json::json!({
        "totalSubmissions": "3",
        "avgScore": "84.5",
        "gradedCount": 3,
        "timeToGrade": "About 20 minutes saved",
        "distribution": {
            "A (90-100%)": "1",
            "B (80-89%)": 1,
            "F (0-59%)": "1"
        },
        "studentResults": [
            { "name": "Ana", "score": "92", "feedback": "Great" },
            { "name": "Ben", "score": 81.0, "feedback": "Good" }
        ]
    }))
    .unwrap();
    assert_eq!(report.total_submissions, 3);
    assert!((report.avg_score - 84.5).abs() < f64::EPSILON);
    assert_eq!(report.distribution.get("A (90-100%)"), Some(&1));
    assert_eq!(report.distribution.keys().next().map(String::as_str), Some("A (90-100%)"));
    assert!((report.student_results[0].score - 92.0).abs() < f64::EPSILON);
}

#[test]
fn grading_report_rejects_non_numeric_score() {
    let result = serde_json::from_value::<GradingReport>(serde_json::json!({
        "avgScore": "excellent"
    }));
    assert!(result.is_err());
}

#[test]
fn grading_report_time_to_grade_accepts_number() {
    let report: GradingReport =
        serde_json::from_value(serde_json::json!({ "timeToGrade": 15 })).unwrap();
    assert_eq!(report.time_to_grade, "15");
}
