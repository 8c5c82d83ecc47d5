//! Static showcase data for the dashboard overview and analytics tabs.
//!
//! DESIGN
//! ======
//! Figures here are display fixtures, not derived from the signed-in user.
//! Live values (XP, level, badges, upcoming tasks) come from `session` and
//! `planner`; everything else on the overview cards reads from this module.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use crate::state::ui::{StudentTab, TeacherTab};

// =============================================================================
// STUDENT
// =============================================================================

pub const MOTIVATIONAL_QUOTES: [&str; 4] = [
    "Every expert was once a beginner. Keep pushing forward! 🚀",
    "The future belongs to those who learn today. You're on the right path! ✨",
    "Progress, not perfection. Every step counts! 💪",
    "Your potential is limitless. Today's efforts shape tomorrow's success! 🌟",
];

/// Quote for a weekday number (0 = Sunday).
pub fn quote_for_weekday(weekday: u8) -> &'static str {
    MOTIVATIONAL_QUOTES[usize::from(weekday) % MOTIVATIONAL_QUOTES.len()]
}

pub const WEEKLY_GOAL_PERCENT: u32 = 68;
pub const STREAK_DAYS: u32 = 12;

pub struct ShowcaseBadge {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub static RECENT_BADGES: [ShowcaseBadge; 4] = [
    ShowcaseBadge { name: "Streak Master", icon: "🔥", description: "7 days in a row!" },
    ShowcaseBadge { name: "Quiz Champion", icon: "🏆", description: "Perfect score on 5 quizzes" },
    ShowcaseBadge { name: "Speed Learner", icon: "⚡", description: "Completed lesson in under 10 min" },
    ShowcaseBadge { name: "Helper", icon: "🤝", description: "Helped 3 classmates" },
];

/// Badge icon for a name earned in the gamified lessons.
pub fn badge_icon(name: &str) -> &'static str {
    RECENT_BADGES
        .iter()
        .find(|b| b.name == name)
        .map_or("🏅", |b| b.icon)
}

pub struct HubModule<T: 'static> {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub tab: T,
}

pub static LEARNING_MODULES: [HubModule<StudentTab>; 4] = [
    HubModule {
        title: "AI Tutor",
        description: "Get personalized help with any subject",
        icon: "🧠",
        tab: StudentTab::Tutor,
    },
    HubModule {
        title: "Gamified Lessons",
        description: "Learn through interactive games and challenges",
        icon: "🏆",
        tab: StudentTab::Gamified,
    },
    HubModule {
        title: "Study Planner",
        description: "AI-powered scheduling and productivity tools",
        icon: "📅",
        tab: StudentTab::Planner,
    },
    HubModule {
        title: "Wellness Center",
        description: "Mood tracking and stress relief exercises",
        icon: "❤️",
        tab: StudentTab::Wellness,
    },
];

// =============================================================================
// TEACHER
// =============================================================================

pub struct TeacherStat {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

pub const TOTAL_STUDENTS: u32 = 125;
pub const ACTIVE_CLASSES: u32 = 6;

pub static TEACHER_STATS: [TeacherStat; 6] = [
    TeacherStat { label: "Total Students", value: "125", icon: "👥" },
    TeacherStat { label: "Active Classes", value: "6", icon: "📚" },
    TeacherStat { label: "Avg Engagement", value: "87%", icon: "📈" },
    TeacherStat { label: "Lessons Created", value: "32", icon: "📝" },
    TeacherStat { label: "Pending Grades", value: "18", icon: "✅" },
    TeacherStat { label: "Saved This Week", value: "12h", icon: "⏱" },
];

pub static TEACHING_MODULES: [HubModule<TeacherTab>; 4] = [
    HubModule {
        title: "Classroom Analytics",
        description: "View student progress and engagement metrics",
        icon: "📊",
        tab: TeacherTab::Analytics,
    },
    HubModule {
        title: "AI Lesson Planner",
        description: "Generate lesson plans with AI assistance",
        icon: "🧠",
        tab: TeacherTab::Planner,
    },
    HubModule {
        title: "Grading Tool",
        description: "Automated grading and feedback system",
        icon: "✅",
        tab: TeacherTab::Grading,
    },
    HubModule {
        title: "Attendance",
        description: "Track and manage student attendance",
        icon: "👥",
        tab: TeacherTab::Attendance,
    },
];

pub struct RecentActivity {
    pub activity: &'static str,
    pub class: &'static str,
    pub submitted: u32,
    pub total: u32,
}

pub static RECENT_ACTIVITY: [RecentActivity; 4] = [
    RecentActivity { activity: "Quiz: Quadratic Equations", class: "Mathematics 10A", submitted: 25, total: 28 },
    RecentActivity { activity: "Assignment: Linear Functions", class: "Advanced Algebra", submitted: 20, total: 22 },
    RecentActivity { activity: "Project: Data Analysis", class: "Statistics", submitted: 18, total: 20 },
    RecentActivity { activity: "Homework: Chapter 5", class: "Geometry", submitted: 28, total: 30 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngagementPoint {
    pub day: &'static str,
    pub engagement: u32,
    pub assignments: u32,
}

pub static ENGAGEMENT_TREND: [EngagementPoint; 7] = [
    EngagementPoint { day: "Mon", engagement: 85, assignments: 12 },
    EngagementPoint { day: "Tue", engagement: 88, assignments: 15 },
    EngagementPoint { day: "Wed", engagement: 82, assignments: 10 },
    EngagementPoint { day: "Thu", engagement: 91, assignments: 18 },
    EngagementPoint { day: "Fri", engagement: 89, assignments: 16 },
    EngagementPoint { day: "Sat", engagement: 75, assignments: 8 },
    EngagementPoint { day: "Sun", engagement: 70, assignments: 6 },
];

pub struct ClassAnalytics {
    pub class: &'static str,
    pub students: u32,
    pub engagement: u32,
    pub avg_grade: u32,
}

/// Engagement at or above this is shown as healthy.
pub const HIGH_ENGAGEMENT: u32 = 90;

impl ClassAnalytics {
    pub fn is_highly_engaged(&self) -> bool {
        self.engagement >= HIGH_ENGAGEMENT
    }
}

pub static CLASS_ANALYTICS: [ClassAnalytics; 5] = [
    ClassAnalytics { class: "Mathematics 10A", students: 28, engagement: 92, avg_grade: 85 },
    ClassAnalytics { class: "Mathematics 10B", students: 25, engagement: 88, avg_grade: 82 },
    ClassAnalytics { class: "Advanced Algebra", students: 22, engagement: 95, avg_grade: 89 },
    ClassAnalytics { class: "Geometry", students: 30, engagement: 84, avg_grade: 78 },
    ClassAnalytics { class: "Statistics", students: 20, engagement: 91, avg_grade: 87 },
];
