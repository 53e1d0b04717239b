use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One calendar cell as captured by the automation layer: the compact text
/// shown in the grid, plus the popup text when the detail panel opened.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCell {
    pub compact: String,
    pub detail: Option<String>,
}

/// Scoped read of one cell. Borrows the source mutably, so the previous view
/// is provably released before the next cell can be acquired — the detail
/// panel is a single shared surface upstream.
#[derive(Debug)]
pub struct CellView<'a> {
    pub compact: &'a str,
    pub detail: Option<&'a str>,
}

/// The seam to the excluded automation collaborator. Cells arrive strictly
/// sequentially; exhaustion is None, a per-cell acquisition failure is an Err
/// item the caller may skip.
pub trait CellSource {
    fn next_cell(&mut self) -> Option<Result<CellView<'_>>>;

    /// Total cell count when known up front, for progress reporting.
    fn len_hint(&self) -> Option<usize> {
        None
    }
}

/// Replays a captured cell dump: a JSON array of `{compact, detail}` objects.
#[derive(Debug)]
pub struct JsonDumpSource {
    cells: Vec<RawCell>,
    pos: usize,
}

impl JsonDumpSource {
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading cell dump {}", path.display()))?;
        let cells: Vec<RawCell> = serde_json::from_str(&data)
            .with_context(|| format!("parsing cell dump {}", path.display()))?;
        Ok(JsonDumpSource { cells, pos: 0 })
    }

    pub fn from_cells(cells: Vec<RawCell>) -> Self {
        JsonDumpSource { cells, pos: 0 }
    }
}

impl CellSource for JsonDumpSource {
    fn next_cell(&mut self) -> Option<Result<CellView<'_>>> {
        if self.pos >= self.cells.len() {
            return None;
        }
        self.pos += 1;
        let cell = &self.cells[self.pos - 1];
        Some(Ok(CellView {
            compact: &cell.compact,
            detail: cell.detail.as_deref(),
        }))
    }

    fn len_hint(&self) -> Option<usize> {
        Some(self.cells.len())
    }
}
