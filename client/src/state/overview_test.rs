use super::*;

// =============================================================
// Student overview
// =============================================================

#[test]
fn quote_rotates_by_weekday() {
    assert_eq!(quote_for_weekday(0), MOTIVATIONAL_QUOTES[0]);
    assert_eq!(quote_for_weekday(3), MOTIVATIONAL_QUOTES[3]);
    assert_eq!(quote_for_weekday(4), MOTIVATIONAL_QUOTES[0]);
    assert_eq!(quote_for_weekday(6), MOTIVATIONAL_QUOTES[2]);
}

#[test]
fn known_badges_use_their_icon_and_others_fall_back() {
    assert_eq!(badge_icon("Streak Master"), "🔥");
    assert_eq!(badge_icon("Perfect Score"), "🏅");
}

#[test]
fn learning_hub_links_every_feature_tab() {
    let tabs: Vec<StudentTab> = LEARNING_MODULES.iter().map(|m| m.tab).collect();
    assert_eq!(tabs, vec![StudentTab::Tutor, StudentTab::Gamified, StudentTab::Planner, StudentTab::Wellness]);
}

// =============================================================
// Teacher overview + analytics
// =============================================================

#[test]
fn teaching_tools_skip_overview_tab() {
    assert!(TEACHING_MODULES.iter().all(|m| m.tab != TeacherTab::Overview));
}

#[test]
fn engagement_trend_covers_a_week() {
    assert_eq!(ENGAGEMENT_TREND.len(), 7);
    assert_eq!(ENGAGEMENT_TREND[0].day, "Mon");
    assert!(ENGAGEMENT_TREND.iter().all(|p| p.engagement <= 100));
}

#[test]
fn highly_engaged_threshold_is_inclusive() {
    let engaged: Vec<&str> = CLASS_ANALYTICS.iter().filter(|c| c.is_highly_engaged()).map(|c| c.class).collect();
    assert_eq!(engaged, vec!["Mathematics 10A", "Advanced Algebra", "Statistics"]);
}

#[test]
fn recent_activity_never_exceeds_class_size() {
    assert!(RECENT_ACTIVITY.iter().all(|a| a.submitted <= a.total));
}
