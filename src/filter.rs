use chrono::{Days, NaiveDate};

use crate::schedule::Lesson;
use crate::timetable;

/// Elective course category, always excluded.
const ELECTIVE_MARKER: &str = "МФК";
/// Military-affairs subjects, excluded on Thursdays only.
const MILITARY_KEYWORDS: &[&str] = &["военная", "военное", "воен"];
const THURSDAY: &str = "Чт";

/// Collection window, fixed once per run. Inclusive on both ends.
#[derive(Debug, Clone, Copy)]
pub struct DateWindow {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateWindow {
    pub fn next_days(today: NaiveDate, days: u64) -> Self {
        DateWindow {
            min: today,
            max: today + Days::new(days),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }
}

/// Why a well-formed candidate was excluded. The source conflated these with
/// parse rejections in one skip counter; kept separate here so the run summary
/// can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    BadDate,
    OutOfWindow,
    Elective,
    MilitaryThursday,
}

/// Rules evaluated in order; the first failing rule excludes.
pub fn check(lesson: &Lesson, window: &DateWindow) -> Option<Exclusion> {
    let date = match timetable::parse_date(&lesson.date) {
        Some(d) => d,
        None => return Some(Exclusion::BadDate),
    };
    if !window.contains(date) {
        return Some(Exclusion::OutOfWindow);
    }

    if lesson.subject.to_uppercase().contains(ELECTIVE_MARKER) {
        return Some(Exclusion::Elective);
    }

    if lesson.weekday == THURSDAY {
        let subject = lesson.subject.to_lowercase();
        if MILITARY_KEYWORDS.iter().any(|kw| subject.contains(kw)) {
            return Some(Exclusion::MilitaryThursday);
        }
    }

    None
}

pub fn include(lesson: &Lesson, window: &DateWindow) -> bool {
    check(lesson, window).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::sample;

    fn window() -> DateWindow {
        // 24.11.2025 (Mon) .. 29.11.2025 (Sat)
        DateWindow::next_days(NaiveDate::from_ymd_opt(2025, 11, 24).unwrap(), 5)
    }

    fn lesson(date: &str, weekday: &str, subject: &str) -> Lesson {
        let mut l = sample(date, "1", subject);
        l.weekday = weekday.to_string();
        l
    }

    #[test]
    fn window_is_inclusive_on_both_ends() {
        let w = window();
        assert_eq!(
            check(&lesson("23.11.2025", "Вс", "Экономика [лекция]"), &w),
            Some(Exclusion::OutOfWindow)
        );
        assert!(include(&lesson("24.11.2025", "Пн", "Экономика [лекция]"), &w));
        assert!(include(&lesson("29.11.2025", "Сб", "Экономика [лекция]"), &w));
        assert_eq!(
            check(&lesson("30.11.2025", "Вс", "Экономика [лекция]"), &w),
            Some(Exclusion::OutOfWindow)
        );
    }

    #[test]
    fn unparseable_date_is_excluded() {
        assert_eq!(
            check(&lesson("99.99.2025", "Пн", "Экономика [лекция]"), &window()),
            Some(Exclusion::BadDate)
        );
    }

    #[test]
    fn elective_excluded_on_any_weekday() {
        let w = window();
        for (date, weekday) in [("26.11.2025", "Ср"), ("27.11.2025", "Чт")] {
            assert_eq!(
                check(&lesson(date, weekday, "МФК: История искусства [лекция]"), &w),
                Some(Exclusion::Elective)
            );
        }
        // Case-insensitive via uppercasing the subject
        assert_eq!(
            check(&lesson("25.11.2025", "Вт", "мфк по средам [лекция]"), &w),
            Some(Exclusion::Elective)
        );
    }

    #[test]
    fn military_excluded_only_on_thursday() {
        let w = window();
        let subject = "Военная кафедра [практика]";
        assert_eq!(
            check(&lesson("27.11.2025", "Чт", subject), &w),
            Some(Exclusion::MilitaryThursday)
        );
        assert!(include(&lesson("25.11.2025", "Вт", subject), &w));
    }

    #[test]
    fn military_keyword_stems_match() {
        let w = window();
        for subject in [
            "Военное дело [лекция]",
            "Военно-учебный сбор [практика]",
        ] {
            assert_eq!(
                check(&lesson("27.11.2025", "Чт", subject), &w),
                Some(Exclusion::MilitaryThursday),
                "subject: {}",
                subject
            );
        }
    }

    #[test]
    fn ordinary_lesson_passes() {
        assert!(include(
            &lesson("27.11.2025", "Чт", "Экономика [лекция]"),
            &window()
        ));
    }
}
