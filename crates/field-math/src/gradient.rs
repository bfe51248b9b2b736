//! Negated numerical gradient of a scalar field.

use field_common::ScalarGrid;

/// The negated gradient components of a grid.
///
/// Both arrays are row-major with the grid's shape. `dx` holds the negated
/// difference along the row index (axis 0) and `dy` along the column index
/// (axis 1); arrows take their components in that order. Negation makes the
/// vectors point downhill.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientPair {
    pub dx: Vec<f32>,
    pub dy: Vec<f32>,
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl GradientPair {
    /// Vector components `(dx, dy)` at `(col, row)`.
    pub fn vector(&self, col: usize, row: usize) -> Option<(f32, f32)> {
        if col >= self.width || row >= self.height {
            return None;
        }
        let idx = row * self.width + col;
        Some((self.dx[idx], self.dy[idx]))
    }
}

/// Compute the negated numerical gradient of a grid.
///
/// Central differences in the interior, one-sided differences at the
/// boundaries. A length-1 axis has no difference to take; its component is
/// zero. Recomputed once per load and reused across rescale operations.
pub fn compute_gradient(grid: &ScalarGrid) -> GradientPair {
    let width = grid.width();
    let height = grid.height();
    let z = grid.values();

    let mut dx = vec![0.0f32; width * height];
    let mut dy = vec![0.0f32; width * height];

    // Axis 0: differences down each column (row index varies)
    if height > 1 {
        for col in 0..width {
            for row in 0..height {
                let d = if row == 0 {
                    z[width + col] - z[col]
                } else if row == height - 1 {
                    z[row * width + col] - z[(row - 1) * width + col]
                } else {
                    (z[(row + 1) * width + col] - z[(row - 1) * width + col]) / 2.0
                };
                dx[row * width + col] = -d;
            }
        }
    }

    // Axis 1: differences along each row (column index varies)
    if width > 1 {
        for row in 0..height {
            let base = row * width;
            for col in 0..width {
                let d = if col == 0 {
                    z[base + 1] - z[base]
                } else if col == width - 1 {
                    z[base + col] - z[base + col - 1]
                } else {
                    (z[base + col + 1] - z[base + col - 1]) / 2.0
                };
                dy[base + col] = -d;
            }
        }
    }

    GradientPair {
        dx,
        dy,
        width,
        height,
    }
}
