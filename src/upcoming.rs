use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};

use crate::schedule::Lesson;

/// Europe/Moscow is UTC+3 with no DST, so a fixed offset is enough.
pub fn moscow() -> FixedOffset {
    FixedOffset::east_opt(3 * 3600).unwrap()
}

/// Lead time before the lesson start. The third lesson follows the long
/// midday break, so its reminder goes out 45 minutes ahead regardless of the
/// configured default.
pub fn notification_lead(lesson_number: &str, default_minutes: i64) -> i64 {
    if lesson_number == "3" {
        45
    } else {
        default_minutes
    }
}

/// Lesson start instant in Moscow time, from the record's own date and
/// time_start strings. None when either field is empty or malformed.
pub fn lesson_start(date: &str, time_start: &str) -> Option<DateTime<FixedOffset>> {
    let naive =
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time_start), "%d.%m.%Y %H:%M")
            .ok()?;
    moscow().from_local_datetime(&naive).single()
}

pub fn is_distance(room: &str) -> bool {
    let room = room.trim().to_lowercase();
    room.contains("дистанц") || room.contains("виртуал")
}

/// A lesson paired with the instant its reminder should fire.
#[derive(Debug, Clone)]
pub struct Notification {
    pub lesson: Lesson,
    pub notify_at: DateTime<FixedOffset>,
}

/// Lessons whose reminder instant is still ahead of `now`, in schedule order.
pub fn upcoming(
    schedule: &[Lesson],
    now: DateTime<FixedOffset>,
    default_minutes: i64,
) -> Vec<Notification> {
    schedule
        .iter()
        .filter_map(|lesson| {
            let start = lesson_start(&lesson.date, &lesson.time_start)?;
            let lead = notification_lead(&lesson.lesson_number, default_minutes);
            let notify_at = start - chrono::Duration::minutes(lead);
            (now < notify_at).then(|| Notification {
                lesson: lesson.clone(),
                notify_at,
            })
        })
        .collect()
}
