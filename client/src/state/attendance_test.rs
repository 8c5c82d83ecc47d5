use super::*;

#[test]
fn fresh_sheet_has_everyone_unmarked() {
    let sheet = AttendanceSheet::new("2024-03-01".to_owned());
    assert_eq!(sheet.summary(), Summary { unmarked: 5, ..Summary::default() });
}

#[test]
fn marking_counts_latest_status_only() {
    let mut sheet = AttendanceSheet::new("2024-03-01".to_owned());
    assert!(sheet.mark(1, Status::Present));
    assert!(sheet.mark(2, Status::Absent));
    assert!(sheet.mark(3, Status::Tardy));
    assert!(sheet.mark(1, Status::Tardy));
    assert_eq!(sheet.summary(), Summary { present: 0, absent: 1, tardy: 2, unmarked: 2 });
}

#[test]
fn unknown_student_is_ignored() {
    let mut sheet = AttendanceSheet::new("2024-03-01".to_owned());
    assert!(!sheet.mark(99, Status::Present));
    assert_eq!(sheet.status(99), None);
}

#[test]
fn changing_date_resets_marks() {
    let mut sheet = AttendanceSheet::new("2024-03-01".to_owned());
    sheet.mark(4, Status::Present);
    sheet.set_date("2024-03-01".to_owned());
    assert_eq!(sheet.status(4), Some(Status::Present));
    sheet.set_date("2024-03-02".to_owned());
    assert_eq!(sheet.status(4), None);
}

#[test]
fn report_lists_every_student() {
    let mut sheet = AttendanceSheet::new("2024-03-01".to_owned());
    sheet.mark(5, Status::Absent);
    let lines = sheet.report_lines();
    assert_eq!(lines.len(), ROSTER.len());
    assert_eq!(lines[0], "Alice Johnson: N/A");
    assert_eq!(lines[4], "Ethan Davis: Absent");
    assert!(sheet.export().contains("2024-03-01"));
}
