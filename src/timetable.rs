use chrono::{Datelike, NaiveDate};

pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Monday-first, matching chrono's `num_days_from_monday`.
pub const WEEKDAYS: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

/// Fixed daily bell schedule, lesson numbers 1–5.
/// A miss means the number is outside the known grid, never an error.
pub fn lesson_time(number: &str) -> Option<(&'static str, &'static str)> {
    match number {
        "1" => Some(("09:00", "10:30")),
        "2" => Some(("10:45", "12:15")),
        "3" => Some(("13:00", "14:30")),
        "4" => Some(("14:45", "16:15")),
        "5" => Some(("16:30", "18:00")),
        _ => None,
    }
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

pub fn weekday_abbrev(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_monday() as usize]
}
