//! Integer coordinate mesh derived from a grid's shape.

use field_common::ScalarGrid;

/// Integer coordinate arrays matching a grid's shape.
///
/// Both arrays are row-major with the same dimensions as the source grid:
/// `x[r][c] = c` and `y[r][c] = r`. Recomputed whenever the grid changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mesh {
    /// Column index of each cell (row-major).
    pub x: Vec<u32>,
    /// Row index of each cell (row-major).
    pub y: Vec<u32>,
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl Mesh {
    /// Coordinate pair `(x, y)` of the cell at `(col, row)`.
    pub fn coord(&self, col: usize, row: usize) -> Option<(u32, u32)> {
        if col >= self.width || row >= self.height {
            return None;
        }
        let idx = row * self.width + col;
        Some((self.x[idx], self.y[idx]))
    }
}

/// Build the coordinate mesh for a grid.
///
/// Pure function of the grid's shape; the shape invariant (rectangular,
/// at least 1x1) is guaranteed by the loader, so there is no failure mode.
pub fn build_mesh(grid: &ScalarGrid) -> Mesh {
    let width = grid.width();
    let height = grid.height();
    let mut x = Vec::with_capacity(width * height);
    let mut y = Vec::with_capacity(width * height);

    for row in 0..height {
        for col in 0..width {
            x.push(col as u32);
            y.push(row as u32);
        }
    }

    Mesh {
        x,
        y,
        width,
        height,
    }
}
