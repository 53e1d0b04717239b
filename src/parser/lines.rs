use std::sync::LazyLock;

use regex::Regex;

use super::LessonDraft;
use crate::timetable;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2}\.\d{2}\.\d{4})").unwrap());
static LESSON_NUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*пара").unwrap());

const LESSON_MARKER: &str = "пара";
const ROOM_MARKER: &str = "ауд.";
const ADDED_BY_MARKER: &str = "добавлено";

/// One classifier per field, applied to each line in this order. A classifier
/// returns true when it consumes the line; consumed lines are never offered to
/// later classifiers. First match per field wins.
pub type Classifier = fn(&mut LessonDraft, &str) -> bool;

pub const CLASSIFIERS: &[Classifier] = &[date_lesson, subject, room, teacher];

/// Header line like "24.11.2025 1 пара". Exclusive: once a line carries the
/// lesson marker next to a dotted token it is consumed even if neither the
/// date nor the number can be extracted from it.
fn date_lesson(draft: &mut LessonDraft, line: &str) -> bool {
    if !line.contains('.') || !line.to_lowercase().contains(LESSON_MARKER) {
        return false;
    }

    if draft.date.is_empty() {
        if let Some(caps) = DATE_RE.captures(line) {
            draft.date = caps[1].to_string();
            if let Some(parsed) = timetable::parse_date(&draft.date) {
                draft.weekday = timetable::weekday_abbrev(parsed).to_string();
            }
        }
    }

    if draft.lesson_number.is_empty() {
        if let Some(caps) = LESSON_NUM_RE.captures(line) {
            draft.lesson_number = caps[1].to_string();
            if let Some((start, end)) = timetable::lesson_time(&draft.lesson_number) {
                draft.time_start = start.to_string();
                draft.time_end = end.to_string();
            }
        }
    }

    true
}

/// Subject lines carry the bracketed lesson-type tag: "Экономика [лекция]".
fn subject(draft: &mut LessonDraft, line: &str) -> bool {
    if draft.subject.is_empty() && line.contains('[') && line.contains(']') {
        draft.subject = line.to_string();
        return true;
    }
    false
}

fn room(draft: &mut LessonDraft, line: &str) -> bool {
    if draft.room.is_empty() && line.to_lowercase().contains(ROOM_MARKER) {
        draft.room = line.to_string();
        return true;
    }
    false
}

/// Teacher name: at least two tokens, one of them capitalized, and not the
/// "Добавлено: ..." annotation line.
fn teacher(draft: &mut LessonDraft, line: &str) -> bool {
    if !draft.teacher.is_empty() {
        return false;
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() < 2 {
        return false;
    }
    let has_capital = words
        .iter()
        .any(|w| w.chars().next().is_some_and(|c| c.is_uppercase()));
    if !has_capital || line.to_lowercase().contains(ADDED_BY_MARKER) {
        return false;
    }
    draft.teacher = line.to_string();
    true
}
