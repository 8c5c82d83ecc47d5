use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_defaults_to_overview_tabs() {
    let state = UiState::default();
    assert_eq!(state.student_tab, StudentTab::Overview);
    assert_eq!(state.teacher_tab, TeacherTab::Overview);
    assert!(!state.notifications_open);
    assert!(!state.confirm_delete_open);
}

#[test]
fn tab_lists_match_dashboard_sections() {
    assert_eq!(StudentTab::ALL.len(), 5);
    assert_eq!(TeacherTab::ALL.len(), 5);
    assert_eq!(StudentTab::Tutor.label(), "AI Tutor");
    assert_eq!(TeacherTab::Planner.label(), "Lesson Planner");
}

// =============================================================
// Search + notifications
// =============================================================

#[test]
fn blank_query_is_no_filter() {
    let mut state = UiState::default();
    assert_eq!(state.active_query(), None);
    state.search_query = "   ".to_owned();
    assert_eq!(state.active_query(), None);
    state.search_query = " alg ".to_owned();
    assert_eq!(state.active_query(), Some("alg"));
}

#[test]
fn toggle_notifications_flips() {
    let mut state = UiState::default();
    state.toggle_notifications();
    assert!(state.notifications_open);
    state.toggle_notifications();
    assert!(!state.notifications_open);
}

#[test]
fn open_lesson_switches_to_gamified_tab() {
    let mut state = UiState::default();
    state.open_lesson("photosynthesis");
    assert_eq!(state.student_tab, StudentTab::Gamified);
    assert_eq!(state.pending_lesson, Some("photosynthesis"));
}
