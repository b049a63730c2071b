//! Table previews of CSV assets on project pages.
//!
//! The first non-empty line is the header; the next `max_rows` lines are
//! shown. Cells are split on `,` without quoting rules, which is all the
//! example tables need. Any failure becomes [`PreviewState::Missing`] so a
//! page still renders with a short notice in place of the table.

use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewState {
    /// Header plus up to `max_rows` rows. Every row has one cell per column.
    Table {
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Header only; nothing is shown.
    Empty,
    /// File unreadable or empty.
    Missing,
}

/// Parse CSV text into a preview. `None` if there is no header line.
pub fn parse_preview(text: &str, max_rows: usize) -> Option<PreviewState> {
    let mut lines = text.lines().filter(|line| !line.is_empty());
    let header = lines.next()?;
    let columns: Vec<String> = header.split(',').map(|h| h.trim().to_string()).collect();
    let rows: Vec<Vec<String>> = lines
        .take(max_rows)
        .map(|line| {
            let cells: Vec<&str> = line.split(',').collect();
            (0..columns.len())
                .map(|i| cells.get(i).map(|c| c.trim().to_string()).unwrap_or_default())
                .collect()
        })
        .collect();
    if rows.is_empty() {
        return Some(PreviewState::Empty);
    }
    Some(PreviewState::Table { columns, rows })
}

/// Load `src` (relative to `assets_dir`) as a preview.
pub fn load_preview(assets_dir: &Path, src: &str, max_rows: usize) -> PreviewState {
    let path = assets_dir.join(src);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            log::warn!("preview {} unavailable: {err}", path.display());
            return PreviewState::Missing;
        }
    };
    parse_preview(&text, max_rows).unwrap_or_else(|| {
        log::warn!("preview {} is empty", path.display());
        PreviewState::Missing
    })
}
