//! CSV grid loader.
//!
//! Parses comma-separated scalar field files into a [`ScalarGrid`]. The
//! expected format is one header line (always skipped) followed by rows of
//! floating-point numbers, one grid row per line, all rows the same length.

use std::fs;

use tracing::debug;

use field_common::{FieldResult, LoadError, ScalarGrid};

/// Load a scalar grid from a CSV file.
///
/// The first line is a header and is skipped; blank lines are ignored.
///
/// # Errors
/// - `LoadError::EmptyPath` if `path` is empty (the user cancelled the file
///   picker).
/// - `LoadError::ParseFailure` if the file is missing, unreadable, contains a
///   non-numeric cell, has inconsistent row lengths, or has no data rows.
///
/// No partial state is retained on failure.
pub fn load_csv(path: &str) -> FieldResult<ScalarGrid> {
    if path.is_empty() {
        return Err(LoadError::EmptyPath);
    }

    let contents =
        fs::read_to_string(path).map_err(|e| LoadError::parse_failure(path, e.to_string()))?;

    let grid = parse_csv(&contents, path)?;
    debug!(
        path,
        rows = grid.height(),
        cols = grid.width(),
        "loaded grid"
    );
    Ok(grid)
}

/// Parse CSV text (header line included) into a grid.
pub fn parse_csv(contents: &str, source: &str) -> FieldResult<ScalarGrid> {
    let mut rows = Vec::new();

    // skip(1): the header row
    for (line_no, line) in contents.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::new();
        for cell in line.split(',') {
            let value: f32 = cell.trim().parse().map_err(|_| {
                LoadError::parse_failure(
                    source,
                    format!("line {}: invalid number {:?}", line_no + 1, cell.trim()),
                )
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    ScalarGrid::from_rows(rows, source)
}
