//! Temp-file backed CSV fixtures.
//!
//! Loader tests need real files on disk; these helpers write a grid out in
//! the exact format the loader consumes (one header line, comma-separated
//! float rows) and keep the temp file alive for the duration of the test.

use std::io::Write;

use tempfile::NamedTempFile;

/// Render rows of floats as CSV text with a generated header line.
pub fn csv_body(rows: &[Vec<f32>]) -> String {
    let cols = rows.first().map(|r| r.len()).unwrap_or(0);
    let header: Vec<String> = (0..cols).map(|c| format!("c{c}")).collect();
    let mut out = header.join(",");
    out.push('\n');
    for row in rows {
        let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

/// Write a grid to a temp CSV file.
///
/// Returns the temp file handle (keep it in scope so the file survives) and
/// its path as a string.
pub fn write_csv_fixture(rows: &[Vec<f32>]) -> (NamedTempFile, String) {
    write_csv_raw(&csv_body(rows))
}

/// Write arbitrary text to a temp file with a `.csv` suffix.
pub fn write_csv_raw(contents: &str) -> (NamedTempFile, String) {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("failed to create temp csv");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp csv");
    file.flush().expect("failed to flush temp csv");
    let path = file.path().to_string_lossy().into_owned();
    (file, path)
}
