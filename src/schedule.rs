use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One lesson in the group timetable. Built once by the parser, immutable
/// afterwards; `schedule.json` is the only persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub subject: String,
    pub teacher: String,
    pub room: String,
    pub lesson_number: String,
    pub time_start: String,
    pub time_end: String,
    pub date: String,
    pub weekday: String,
    pub group: String,
}

/// Stable sort by (date, lesson_number) compared as literal strings.
///
/// This is the order the downstream bot has always consumed: lexicographic
/// over "DD.MM.YYYY", NOT chronological (01.12 sorts before 30.11). Kept for
/// byte-compatibility of the artifact. Ties keep arrival order; repeated
/// identical records from re-reads are kept as distinct entries.
pub fn assemble(mut lessons: Vec<Lesson>) -> Vec<Lesson> {
    lessons.sort_by(|a, b| {
        (a.date.as_str(), a.lesson_number.as_str())
            .cmp(&(b.date.as_str(), b.lesson_number.as_str()))
    });
    lessons
}

/// Write the ordered schedule as pretty-printed UTF-8 JSON, overwriting any
/// previous artifact. Non-ASCII text is emitted literally. A write failure is
/// fatal to the run.
pub fn write(path: &Path, lessons: &[Lesson]) -> Result<()> {
    let mut json = serde_json::to_string_pretty(lessons)
        .context("serializing schedule")?;
    json.push('\n');
    std::fs::write(path, json)
        .with_context(|| format!("writing schedule to {}", path.display()))?;
    Ok(())
}

pub fn load(path: &Path) -> Result<Vec<Lesson>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading schedule from {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("parsing schedule in {}", path.display()))
}

#[cfg(test)]
pub fn sample(date: &str, number: &str, subject: &str) -> Lesson {
    Lesson {
        subject: subject.to_string(),
        teacher: String::new(),
        room: String::new(),
        lesson_number: number.to_string(),
        time_start: String::new(),
        time_end: String::new(),
        date: date.to_string(),
        weekday: String::new(),
        group: "303".to_string(),
    }
}
