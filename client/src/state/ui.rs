//! Dashboard chrome state (active tabs, search, dropdowns).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of domain state (`session`, `planner`,
//! ...) so layout controls can change without touching feature data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Student dashboard sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StudentTab {
    #[default]
    Overview,
    Tutor,
    Gamified,
    Planner,
    Wellness,
}

impl StudentTab {
    pub const ALL: [Self; 5] = [Self::Overview, Self::Tutor, Self::Gamified, Self::Planner, Self::Wellness];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Tutor => "AI Tutor",
            Self::Gamified => "Gamified Learning",
            Self::Planner => "Study Planner",
            Self::Wellness => "Wellness",
        }
    }
}

/// Teacher dashboard sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TeacherTab {
    #[default]
    Overview,
    Analytics,
    Planner,
    Grading,
    Attendance,
}

impl TeacherTab {
    pub const ALL: [Self; 5] = [Self::Overview, Self::Analytics, Self::Planner, Self::Grading, Self::Attendance];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Analytics => "Analytics",
            Self::Planner => "Lesson Planner",
            Self::Grading => "Grading",
            Self::Attendance => "Attendance",
        }
    }
}

pub const NOTIFICATIONS: [&str; 3] = [
    "You completed the \"Photosynthesis\" lesson. 🎉",
    "New badge earned: \"Quiz Master\"! 🏆",
    "Upcoming: Math Quiz due Friday. 🗓️",
];

/// UI state shared by the dashboard layout and its pages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub student_tab: StudentTab,
    pub teacher_tab: TeacherTab,
    /// Lesson filter bound to the layout's search box.
    pub search_query: String,
    pub notifications_open: bool,
    pub confirm_delete_open: bool,
    /// Lesson to open when the gamified tab mounts.
    pub pending_lesson: Option<&'static str>,
}

impl UiState {
    /// The query as used for filtering; blank means no filter.
    #[must_use]
    pub fn active_query(&self) -> Option<&str> {
        let query = self.search_query.trim();
        (!query.is_empty()).then_some(query)
    }

    /// Jump to the gamified tab with `lesson_id` open.
    pub fn open_lesson(&mut self, lesson_id: &'static str) {
        self.student_tab = StudentTab::Gamified;
        self.pending_lesson = Some(lesson_id);
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications_open = !self.notifications_open;
    }
}
