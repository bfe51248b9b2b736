//! Test data generators for creating synthetic scalar fields.
//!
//! These generators create predictable, verifiable data patterns that can be
//! used across the test suite.

/// Creates a test grid with predictable values.
///
/// Each cell value is calculated as: `col * 1000 + row`
///
/// This makes it easy to verify that data is being read/written correctly
/// by checking that grid[row][col] == col * 1000 + row.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
///
/// # Returns
///
/// A `Vec<f32>` in row-major order (row 0 first, then row 1, etc.)
pub fn create_test_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f32);
        }
    }
    data
}

/// Creates a grid where every cell holds the same value.
///
/// Useful for gradient tests: both gradient components of a constant field
/// must be zero everywhere.
pub fn create_constant_grid(width: usize, height: usize, value: f32) -> Vec<f32> {
    vec![value; width * height]
}

/// Creates a paraboloid "bowl" centered on the grid.
///
/// `z = (col - cx)^2 + (row - cy)^2`, so the negated gradient points toward
/// the center from every direction. Handy for checking that rendered vectors
/// point downhill.
pub fn create_bowl_grid(width: usize, height: usize) -> Vec<f32> {
    let cx = (width as f32 - 1.0) / 2.0;
    let cy = (height as f32 - 1.0) / 2.0;
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let dx = col as f32 - cx;
            let dy = row as f32 - cy;
            data.push(dx * dx + dy * dy);
        }
    }
    data
}

/// Creates a linear ramp along the column axis: `z = col * slope`.
///
/// The field is constant along rows, so the row-axis gradient component is
/// zero and the column-axis component is `slope` everywhere.
pub fn create_column_ramp(width: usize, height: usize, slope: f32) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for _row in 0..height {
        for col in 0..width {
            data.push(col as f32 * slope);
        }
    }
    data
}
