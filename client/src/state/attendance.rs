//! Attendance register for the fixed class roster.

#[cfg(test)]
#[path = "attendance_test.rs"]
mod attendance_test;

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: u32,
    pub name: &'static str,
}

pub static ROSTER: [Student; 5] = [
    Student { id: 1, name: "Alice Johnson" },
    Student { id: 2, name: "Bob Williams" },
    Student { id: 3, name: "Charlie Brown" },
    Student { id: 4, name: "Diana Miller" },
    Student { id: 5, name: "Ethan Davis" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Status {
    Present,
    Absent,
    Tardy,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Present, Self::Absent, Self::Tardy];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Tardy => "Tardy",
        }
    }

    /// CSS modifier for the status pill.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Tardy => "tardy",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub present: usize,
    pub absent: usize,
    pub tardy: usize,
    pub unmarked: usize,
}

/// Statuses for one date. Unmarked students have no entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AttendanceSheet {
    pub date: String,
    marks: BTreeMap<u32, Status>,
}

impl AttendanceSheet {
    #[must_use]
    pub fn new(date: String) -> Self {
        Self { date, marks: BTreeMap::new() }
    }

    /// Switch to another date; marks start over.
    pub fn set_date(&mut self, date: String) {
        if date != self.date {
            self.date = date;
            self.marks.clear();
        }
    }

    /// Mark a roster student. Unknown ids are ignored.
    pub fn mark(&mut self, student_id: u32, status: Status) -> bool {
        if !ROSTER.iter().any(|s| s.id == student_id) {
            return false;
        }
        self.marks.insert(student_id, status);
        true
    }

    #[must_use]
    pub fn status(&self, student_id: u32) -> Option<Status> {
        self.marks.get(&student_id).copied()
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for student in &ROSTER {
            match self.status(student.id) {
                Some(Status::Present) => summary.present += 1,
                Some(Status::Absent) => summary.absent += 1,
                Some(Status::Tardy) => summary.tardy += 1,
                None => summary.unmarked += 1,
            }
        }
        summary
    }

    /// One `name: status` line per roster student.
    #[must_use]
    pub fn report_lines(&self) -> Vec<String> {
        ROSTER
            .iter()
            .map(|s| format!("{}: {}", s.name, self.status(s.id).map_or("N/A", Status::label)))
            .collect()
    }

    /// Write the report to the log and return the confirmation text.
    pub fn export(&self) -> String {
        let summary = self.summary();
        log::info!(
            "attendance report date={} present={} absent={} tardy={} unmarked={}",
            self.date,
            summary.present,
            summary.absent,
            summary.tardy,
            summary.unmarked
        );
        for line in self.report_lines() {
            log::info!("attendance {line}");
        }
        format!("Attendance report for {} exported to the console.", self.date)
    }
}
