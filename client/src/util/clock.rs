//! Wall-clock helpers.
//!
//! Dates are ISO `YYYY-MM-DD` strings throughout the client so that
//! lexicographic order equals chronological order.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::{Date, OffsetDateTime, UtcOffset};

/// `YYYY-MM-DD` for `date`.
pub fn iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// The browser's (or host's) current UTC offset. Falls back to UTC when the
/// platform cannot report one.
pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

/// Calendar date of `now` as seen at `offset`, as `YYYY-MM-DD`.
pub fn date_iso_at(now: OffsetDateTime, offset: UtcOffset) -> String {
    iso_date(now.to_offset(offset).date())
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    date_iso_at(OffsetDateTime::now_utc(), local_offset())
}

/// Today's local weekday, 0 = Sunday.
pub fn weekday_from_sunday() -> u8 {
    OffsetDateTime::now_utc()
        .to_offset(local_offset())
        .weekday()
        .number_days_from_sunday()
}

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    let now = OffsetDateTime::now_utc();
    #[allow(clippy::cast_possible_truncation)]
    let millis = (now.unix_timestamp_nanos() / 1_000_000) as i64;
    millis
}

/// `HH:MM` at `offset` for a millisecond timestamp.
pub fn time_of_day_at(millis: i64, offset: UtcOffset) -> String {
    let nanos = i128::from(millis) * 1_000_000;
    match OffsetDateTime::from_unix_timestamp_nanos(nanos) {
        Ok(at) => {
            let at = at.to_offset(offset);
            format!("{:02}:{:02}", at.hour(), at.minute())
        }
        Err(_) => String::new(),
    }
}

/// Local `HH:MM` for a millisecond timestamp.
pub fn time_of_day(millis: i64) -> String {
    time_of_day_at(millis, local_offset())
}

/// Human label for an ISO date (`2024-03-05` -> `Mar 5, 2024`). Text that is
/// not an ISO date is returned unchanged.
pub fn display_date(iso: &str) -> String {
    let mut parts = iso.splitn(3, '-');
    let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_owned();
    };
    let (Ok(year), Ok(month), Ok(day)) = (y.parse::<i32>(), m.parse::<u8>(), d.parse::<u8>()) else {
        return iso.to_owned();
    };
    let Ok(month) = time::Month::try_from(month) else {
        return iso.to_owned();
    };
    match Date::from_calendar_date(year, month, day) {
        Ok(date) => format!("{} {}, {}", &month_name(date.month())[..3], date.day(), date.year()),
        Err(_) => iso.to_owned(),
    }
}

fn month_name(month: time::Month) -> &'static str {
    use time::Month::{
        April, August, December, February, January, July, June, March, May, November, October,
        September,
    };
    match month {
        January => "January",
        February => "February",
        March => "March",
        April => "April",
        May => "May",
        June => "June",
        July => "July",
        August => "August",
        September => "September",
        October => "October",
        November => "November",
        December => "December",
    }
}
