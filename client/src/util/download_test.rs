use super::*;

#[test]
fn lesson_plan_file_name_replaces_non_alphanumerics() {
    assert_eq!(
        lesson_plan_file_name("Photosynthesis 101: Light & Life"),
        "photosynthesis_101__light___life_lesson_plan.pdf"
    );
}

#[test]
fn lesson_plan_file_name_replaces_non_ascii_letters() {
    assert_eq!(lesson_plan_file_name("Álgebra"), "_lgebra_lesson_plan.pdf");
}

#[test]
fn lesson_plan_file_name_handles_empty_title() {
    assert_eq!(lesson_plan_file_name(""), "_lesson_plan.pdf");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn save_bytes_requires_browser() {
    assert!(save_bytes(b"%PDF", PDF_MIME, "x.pdf").is_err());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn save_json_serializes_before_download() {
    let err = save_json(&serde_json::json!({"a": 1}), GRADED_RESULTS_FILE).unwrap_err();
    assert_eq!(err, "downloads require a browser");
}

#[test]
fn export_file_names_match_download_names() {
    assert_eq!(GRADING_REPORT_FILE, "graded_assignments.pdf");
    assert_eq!(GRADED_RESULTS_FILE, "graded_results.json");
}
