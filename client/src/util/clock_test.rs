use super::*;
use time::{Month, OffsetDateTime};

fn utc(day: u8, hour: u8, minute: u8) -> OffsetDateTime {
    Date::from_calendar_date(2026, Month::October, day)
        .unwrap()
        .with_hms(hour, minute, 0)
        .unwrap()
        .assume_utc()
}

#[test]
fn iso_date_zero_pads() {
    let date = Date::from_calendar_date(2024, Month::March, 5).unwrap();
    assert_eq!(iso_date(date), "2024-03-05");
}

#[test]
fn today_iso_has_iso_shape() {
    let today = today_iso();
    assert_eq!(today.len(), 10);
    assert_eq!(&today[4..5], "-");
    assert_eq!(&today[7..8], "-");
}

#[test]
fn now_millis_is_after_2020() {
    assert!(now_millis() > 1_577_836_800_000);
}

#[test]
fn display_date_formats_iso() {
    assert_eq!(display_date("2024-03-05"), "Mar 5, 2024");
}

#[test]
fn display_date_passes_through_other_text() {
    assert_eq!(display_date(""), "");
    assert_eq!(display_date("tomorrow"), "tomorrow");
    assert_eq!(display_date("2024-02-30"), "2024-02-30");
}

#[test]
fn time_of_day_is_zero_padded() {
    // 2024-03-05T09:07:30Z
    assert_eq!(time_of_day_at(1_709_629_650_000, UtcOffset::UTC), "09:07");
    assert_eq!(time_of_day_at(0, UtcOffset::UTC), "00:00");
}

#[test]
fn time_of_day_shifts_to_local_offset() {
    let ist = UtcOffset::from_hms(5, 30, 0).unwrap();
    let pago_pago = UtcOffset::from_hms(-11, 0, 0).unwrap();
    assert_eq!(time_of_day_at(1_709_629_650_000, ist), "14:37");
    assert_eq!(time_of_day_at(1_709_629_650_000, pago_pago), "22:07");
}

// =============================================================================
// local calendar day
// =============================================================================

#[test]
fn date_follows_local_calendar_west_of_utc() {
    // 2026-10-18T05:30Z is still the 17th in Pago Pago (UTC-11).
    let now = utc(18, 5, 30);
    let pago_pago = UtcOffset::from_hms(-11, 0, 0).unwrap();
    assert_eq!(date_iso_at(now, pago_pago), "2026-10-17");
    assert_eq!(date_iso_at(now, UtcOffset::UTC), "2026-10-18");
}

#[test]
fn date_follows_local_calendar_east_of_utc() {
    // 2026-10-17T20:00Z is already the 18th in Auckland (UTC+13).
    let now = utc(17, 20, 0);
    let auckland = UtcOffset::from_hms(13, 0, 0).unwrap();
    assert_eq!(date_iso_at(now, auckland), "2026-10-18");
}

#[test]
fn task_due_on_local_today_is_upcoming_not_overdue() {
    use crate::state::planner::{TaskDraft, TaskList};

    let now = utc(18, 5, 30);
    let today = date_iso_at(now, UtcOffset::from_hms(-11, 0, 0).unwrap());

    let mut list = TaskList::default();
    let draft = TaskDraft { title: "Essay".into(), due_date: "2026-10-17".into(), ..TaskDraft::default() };
    list.add(draft, "t1".into()).unwrap();

    assert_eq!(list.stats(&today).overdue, 0);
    assert_eq!(list.upcoming(&today).len(), 1);
}

#[test]
fn weekday_is_in_range() {
    assert!(weekday_from_sunday() < 7);
}
