//! Study planner tasks.
//!
//! DESIGN
//! ======
//! `TaskList` owns the ordered tasks for one user. Mutations are pure; the
//! component calls [`TaskList::persist`] after each one, which rewrites the
//! whole list under `study_tasks_<userId>`. Due dates are ISO strings, so
//! date comparisons are plain string comparisons.

#[cfg(test)]
#[path = "planner_test.rs"]
mod planner_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{self, LocalStore, Namespace, StorageKey};

pub const UPCOMING_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    #[must_use]
    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// `YYYY-MM-DD`, or empty when the task has no deadline.
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub subject: String,
}

impl Task {
    #[must_use]
    pub fn is_overdue(&self, today: &str) -> bool {
        !self.completed && !self.due_date.is_empty() && self.due_date.as_str() < today
    }
}

/// Add/edit form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: Priority,
    pub subject: String,
}

impl TaskDraft {
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date.clone(),
            priority: task.priority,
            subject: task.subject.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("Task title is required.")]
    BlankTitle,
    #[error("task `{0}` not found")]
    NotFound(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub overdue: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    fn key(user_id: &str) -> StorageKey {
        StorageKey::scoped(Namespace::StudyTasks, user_id)
    }

    /// Load `user_id`'s tasks; malformed data yields an empty list.
    pub fn load<S: LocalStore + ?Sized>(store: &S, user_id: &str) -> Self {
        Self { tasks: storage::load_or_default(store, &Self::key(user_id)) }
    }

    pub fn persist<S: LocalStore + ?Sized>(&self, store: &S, user_id: &str) {
        storage::save_logged(store, &Self::key(user_id), &self.tasks);
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a new incomplete task built from `draft`.
    ///
    /// # Errors
    ///
    /// [`TaskError::BlankTitle`] when the title is empty after trimming.
    pub fn add(&mut self, draft: TaskDraft, id: String) -> Result<&Task, TaskError> {
        if draft.title.trim().is_empty() {
            return Err(TaskError::BlankTitle);
        }
        let index = self.tasks.len();
        self.tasks.push(Task {
            id,
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            completed: false,
            priority: draft.priority,
            subject: draft.subject,
        });
        Ok(&self.tasks[index])
    }

    /// Flip completion for `id`.
    ///
    /// # Errors
    ///
    /// [`TaskError::NotFound`] when no task has that id.
    pub fn toggle(&mut self, id: &str) -> Result<bool, TaskError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_owned()))?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// Remove the task with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Replace the editable fields of `id`, keeping its id and completion.
    ///
    /// # Errors
    ///
    /// [`TaskError::BlankTitle`] or [`TaskError::NotFound`].
    pub fn update(&mut self, id: &str, draft: TaskDraft) -> Result<(), TaskError> {
        if draft.title.trim().is_empty() {
            return Err(TaskError::BlankTitle);
        }
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_owned()))?;
        task.title = draft.title;
        task.description = draft.description;
        task.due_date = draft.due_date;
        task.priority = draft.priority;
        task.subject = draft.subject;
        Ok(())
    }

    /// Incomplete tasks due today or later, soonest first, at most five.
    #[must_use]
    pub fn upcoming(&self, today: &str) -> Vec<Task> {
        let mut upcoming: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| !t.completed && !t.due_date.is_empty() && t.due_date.as_str() >= today)
            .cloned()
            .collect();
        upcoming.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        upcoming.truncate(UPCOMING_LIMIT);
        upcoming
    }

    #[must_use]
    pub fn stats(&self, today: &str) -> TaskStats {
        TaskStats {
            total: self.tasks.len(),
            completed: self.tasks.iter().filter(|t| t.completed).count(),
            overdue: self.tasks.iter().filter(|t| t.is_overdue(today)).count(),
        }
    }

    /// Incomplete first, then by due date with undated tasks last.
    #[must_use]
    pub fn sorted_for_display(&self) -> Vec<Task> {
        let mut tasks = self.tasks.clone();
        tasks.sort_by(|a, b| {
            a.completed
                .cmp(&b.completed)
                .then_with(|| a.due_date.is_empty().cmp(&b.due_date.is_empty()))
                .then_with(|| a.due_date.cmp(&b.due_date))
        });
        tasks
    }
}
