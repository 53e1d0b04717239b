pub mod lines;

use crate::schedule::Lesson;

/// Accumulator threaded through the per-line classifiers. Field precedence
/// lives in the classifier order, not in hidden flags: a classifier only
/// writes its field when it is still empty.
#[derive(Debug, Default)]
pub struct LessonDraft {
    pub subject: String,
    pub teacher: String,
    pub room: String,
    pub lesson_number: String,
    pub time_start: String,
    pub time_end: String,
    pub date: String,
    pub weekday: String,
}

impl LessonDraft {
    /// Run the line through the classifier chain; the first classifier that
    /// consumes it wins.
    pub fn apply(&mut self, line: &str) {
        for classify in lines::CLASSIFIERS {
            if classify(self, line) {
                return;
            }
        }
    }

    /// Promote to a record only when the required fields are all present.
    /// Partial drafts are never emitted.
    pub fn into_lesson(self, group: &str) -> Option<Lesson> {
        if self.subject.is_empty() || self.date.is_empty() || self.lesson_number.is_empty() {
            return None;
        }
        Some(Lesson {
            subject: self.subject,
            teacher: self.teacher,
            room: self.room,
            lesson_number: self.lesson_number,
            time_start: self.time_start,
            time_end: self.time_end,
            date: self.date,
            weekday: self.weekday,
            group: group.to_string(),
        })
    }
}

/// Parse one detail-panel text (plus its compact cell text) into a lesson
/// candidate. Returns None for blank cells and for drafts missing a required
/// field; a bad candidate never affects other cells.
pub fn parse_detail(detail: &str, compact: &str, group: &str) -> Option<Lesson> {
    if compact.trim().chars().count() < 5 {
        return None;
    }

    let mut draft = LessonDraft::default();
    for line in detail.lines().map(str::trim).filter(|l| !l.is_empty()) {
        draft.apply(line);
    }
    draft.into_lesson(group)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUP: &str = "303";

    fn parse(detail: &str) -> Option<Lesson> {
        parse_detail(detail, "Экономика [лекция]", GROUP)
    }

    #[test]
    fn full_popup() {
        let detail = "24.11.2025 3 пара\n\
                      Экономика [лекция]\n\
                      ауд. 517\n\
                      Иванов Иван Иванович\n\
                      Добавлено: 20.11.2025";
        let lesson = parse(detail).unwrap();
        assert_eq!(lesson.subject, "Экономика [лекция]");
        assert_eq!(lesson.teacher, "Иванов Иван Иванович");
        assert_eq!(lesson.room, "ауд. 517");
        assert_eq!(lesson.lesson_number, "3");
        assert_eq!(lesson.time_start, "13:00");
        assert_eq!(lesson.time_end, "14:30");
        assert_eq!(lesson.date, "24.11.2025");
        assert_eq!(lesson.weekday, "Пн");
        assert_eq!(lesson.group, GROUP);
    }

    #[test]
    fn no_bracketed_line_means_no_record() {
        let detail = "24.11.2025 1 пара\nауд. 100\nПетров Петр";
        assert!(parse(detail).is_none());
    }

    #[test]
    fn missing_date_line_means_no_record() {
        let detail = "Экономика [лекция]\nауд. 100\nПетров Петр";
        assert!(parse(detail).is_none());
    }

    #[test]
    fn unmapped_number_keeps_record_with_empty_times() {
        let detail = "24.11.2025 9 пара\nФакультатив [семинар]";
        let lesson = parse(detail).unwrap();
        assert_eq!(lesson.lesson_number, "9");
        assert_eq!(lesson.time_start, "");
        assert_eq!(lesson.time_end, "");
    }

    #[test]
    fn teacher_and_room_are_best_effort() {
        let detail = "25.11.2025 2 пара\nПраво [семинар]";
        let lesson = parse(detail).unwrap();
        assert_eq!(lesson.teacher, "");
        assert_eq!(lesson.room, "");
        assert_eq!(lesson.weekday, "Вт");
    }

    #[test]
    fn short_compact_text_is_rejected_up_front() {
        let detail = "24.11.2025 1 пара\nЭкономика [лекция]";
        assert!(parse_detail(detail, "  [] ", GROUP).is_none());
        assert!(parse_detail(detail, "", GROUP).is_none());
    }

    #[test]
    fn line_order_does_not_matter_for_fields() {
        let detail = "Иванов Иван\nауд. 200\nЭкономика [лекция]\n26.11.2025 4 пара";
        let lesson = parse(detail).unwrap();
        assert_eq!(lesson.teacher, "Иванов Иван");
        assert_eq!(lesson.room, "ауд. 200");
        assert_eq!(lesson.date, "26.11.2025");
        assert_eq!(lesson.time_start, "14:45");
    }

    #[test]
    fn repeated_fields_keep_the_first_seen() {
        let detail = "24.11.2025 1 пара\n\
                      25.11.2025 2 пара\n\
                      Экономика [лекция]\n\
                      ауд. 100\n\
                      ауд. 200";
        let lesson = parse(detail).unwrap();
        assert_eq!(lesson.date, "24.11.2025");
        assert_eq!(lesson.lesson_number, "1");
        assert_eq!(lesson.room, "ауд. 100");
    }
}
