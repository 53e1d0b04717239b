use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use crate::filter::{self, DateWindow};
use crate::parser;
use crate::schedule::Lesson;
use crate::source::{CellSource, CellView};

/// What became of one calendar cell.
#[derive(Debug)]
pub enum CellOutcome {
    Accepted(Lesson),
    /// Candidate lacked a required field (subject, date or lesson number).
    Rejected,
    /// Well-formed candidate excluded by policy.
    Filtered,
    /// Cell could not be read at all; the run continues.
    Errored(String),
}

#[derive(Debug, Default)]
pub struct RunCounts {
    pub accepted: usize,
    pub rejected: usize,
    pub filtered: usize,
    pub errored: usize,
}

impl RunCounts {
    pub fn print(&self) {
        println!(
            "Accepted {} lessons ({} rejected, {} filtered out, {} cell errors).",
            self.accepted, self.rejected, self.filtered, self.errored,
        );
    }
}

/// Classify a single cell. Pure: all I/O and panel handling stays with the
/// source.
pub fn process_cell(view: &CellView, window: &DateWindow, group: &str) -> CellOutcome {
    let Some(detail) = view.detail else {
        return CellOutcome::Errored("detail panel missing".to_string());
    };

    match parser::parse_detail(detail, view.compact, group) {
        None => CellOutcome::Rejected,
        Some(lesson) => match filter::check(&lesson, window) {
            Some(reason) => {
                debug!(?reason, subject = %lesson.subject, date = %lesson.date, "filtered out");
                CellOutcome::Filtered
            }
            None => CellOutcome::Accepted(lesson),
        },
    }
}

/// Drive the sequential cell loop: one cell fully handled, its view released,
/// before the next is acquired. A failing cell is counted and skipped, never
/// fatal.
pub fn run<S: CellSource>(
    source: &mut S,
    window: &DateWindow,
    group: &str,
) -> Result<(Vec<Lesson>, RunCounts)> {
    let pb = match source.len_hint() {
        Some(total) => {
            let pb = ProgressBar::new(total as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec})")?
                    .progress_chars("=> "),
            );
            pb
        }
        None => ProgressBar::hidden(),
    };

    let mut lessons = Vec::new();
    let mut counts = RunCounts::default();

    while let Some(cell) = source.next_cell() {
        match cell {
            Ok(view) => match process_cell(&view, window, group) {
                CellOutcome::Accepted(lesson) => {
                    lessons.push(lesson);
                    counts.accepted += 1;
                }
                CellOutcome::Rejected => counts.rejected += 1,
                CellOutcome::Filtered => counts.filtered += 1,
                CellOutcome::Errored(e) => {
                    warn!("cell skipped: {}", e);
                    counts.errored += 1;
                }
            },
            Err(e) => {
                warn!("cell read failed: {}", e);
                counts.errored += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok((lessons, counts))
}
