//! The loaded 2-D scalar field.

use crate::error::LoadError;

/// A rectangular 2-D grid of scalar values.
///
/// Values are stored in row-major order, top row first. `width` is the number
/// of columns, `height` the number of rows. A grid is always at least 1x1;
/// the constructors reject anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarGrid {
    /// The grid values (row-major order).
    data: Vec<f32>,
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
}

impl ScalarGrid {
    /// Build a grid from parsed rows, validating the rectangular invariant.
    ///
    /// Fails with `LoadError::ParseFailure` if there are no rows, a row is
    /// empty, or row lengths differ.
    pub fn from_rows(rows: Vec<Vec<f32>>, source: &str) -> Result<Self, LoadError> {
        if rows.is_empty() {
            return Err(LoadError::parse_failure(source, "no data rows after header"));
        }

        let width = rows[0].len();
        if width == 0 {
            return Err(LoadError::parse_failure(source, "empty data row"));
        }

        let height = rows.len();
        let mut data = Vec::with_capacity(width * height);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(LoadError::parse_failure(
                    source,
                    format!(
                        "row {} has {} columns, expected {}",
                        i + 1,
                        row.len(),
                        width
                    ),
                ));
            }
            data.extend(row);
        }

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build a grid directly from a row-major buffer.
    ///
    /// # Panics
    /// Panics if `data.len() != width * height` or either dimension is zero.
    pub fn from_raw(data: Vec<f32>, width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid must be at least 1x1");
        assert_eq!(data.len(), width * height, "buffer does not match shape");
        Self {
            data,
            width,
            height,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw values in row-major order.
    pub fn values(&self) -> &[f32] {
        &self.data
    }

    /// Get the value at a specific grid coordinate.
    pub fn get(&self, col: usize, row: usize) -> Option<f32> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.data[row * self.width + col])
    }

    /// Minimum and maximum values over the grid.
    ///
    /// NaN cells are skipped; a grid of only NaN reports `(0.0, 0.0)`.
    pub fn value_range(&self) -> (f32, f32) {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for &v in &self.data {
            if v.is_nan() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }
        if min > max {
            (0.0, 0.0)
        } else {
            (min, max)
        }
    }
}
