//! Colormapped surface rendering for gridded scalar data.

use rayon::prelude::*;
use tracing::debug;

use crate::colormap::{viridis_color, Color};

/// Resample grid data to a different resolution using bilinear interpolation.
///
/// # Arguments
/// - `data`: Input grid data (row-major order)
/// - `src_width`: Source grid width
/// - `src_height`: Source grid height
/// - `dst_width`: Destination grid width
/// - `dst_height`: Destination grid height
///
/// # Returns
/// Resampled grid data at the requested resolution
pub fn resample_grid(
    data: &[f32],
    src_width: usize,
    src_height: usize,
    dst_width: usize,
    dst_height: usize,
) -> Vec<f32> {
    if src_width == dst_width && src_height == dst_height {
        // No resampling needed
        return data.to_vec();
    }

    let mut output = vec![0.0f32; dst_width * dst_height];

    // A 1-wide (or 1-high) destination pins to the first source sample.
    let x_ratio = if dst_width > 1 {
        (src_width - 1) as f32 / (dst_width - 1) as f32
    } else {
        0.0
    };
    let y_ratio = if dst_height > 1 {
        (src_height - 1) as f32 / (dst_height - 1) as f32
    } else {
        0.0
    };

    for y in 0..dst_height {
        for x in 0..dst_width {
            let src_x = x as f32 * x_ratio;
            let src_y = y as f32 * y_ratio;

            // Bilinear interpolation
            let x1 = src_x.floor() as usize;
            let y1 = src_y.floor() as usize;
            let x2 = (x1 + 1).min(src_width - 1);
            let y2 = (y1 + 1).min(src_height - 1);

            let dx = src_x - x1 as f32;
            let dy = src_y - y1 as f32;

            // Get the four surrounding values
            let v11 = data.get(y1 * src_width + x1).copied().unwrap_or(0.0);
            let v21 = data.get(y1 * src_width + x2).copied().unwrap_or(0.0);
            let v12 = data.get(y2 * src_width + x1).copied().unwrap_or(0.0);
            let v22 = data.get(y2 * src_width + x2).copied().unwrap_or(0.0);

            // Interpolate
            let v1 = v11 * (1.0 - dx) + v21 * dx;
            let v2 = v12 * (1.0 - dx) + v22 * dx;
            let value = v1 * (1.0 - dy) + v2 * dy;

            output[y * dst_width + x] = value;
        }
    }

    output
}

/// Render grid data as a colormapped image
///
/// # Arguments
/// - `data`: 2D grid of values (row-major order)
/// - `width`: Number of columns
/// - `height`: Number of rows
/// - `min_val`: Minimum value in the data (for scaling)
/// - `max_val`: Maximum value in the data (for scaling)
/// - `color_fn`: Function to convert a normalized value (0-1) to a color
///
/// # Returns
/// RGBA pixel data (4 bytes per pixel)
pub fn render_grid<F>(
    data: &[f32],
    width: usize,
    height: usize,
    min_val: f32,
    max_val: f32,
    color_fn: F,
) -> Vec<u8>
where
    F: Fn(f32) -> Color + Sync,
{
    let mut pixels = vec![0u8; width * height * 4];

    let range = max_val - min_val;
    let range = if range.abs() < 0.001 { 1.0 } else { range };

    pixels
        .par_chunks_mut(width * 4)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let idx = y * width + x;
                if idx < data.len() {
                    let value = data[idx];
                    let normalized = if value.is_nan() {
                        f32::NAN
                    } else {
                        ((value - min_val) / range).clamp(0.0, 1.0)
                    };

                    let color = color_fn(normalized);

                    let pixel_idx = x * 4;
                    row[pixel_idx] = color.r;
                    row[pixel_idx + 1] = color.g;
                    row[pixel_idx + 2] = color.b;
                    row[pixel_idx + 3] = color.a;
                }
            }
        });

    pixels
}

/// Render a scalar grid as a viridis surface image at canvas resolution.
///
/// The grid is bilinearly resampled to the canvas size, normalized over its
/// own value range, and mapped through the viridis ramp.
pub fn render_surface(
    data: &[f32],
    grid_width: usize,
    grid_height: usize,
    canvas_width: usize,
    canvas_height: usize,
) -> Vec<u8> {
    let resampled = resample_grid(data, grid_width, grid_height, canvas_width, canvas_height);

    let (min_val, max_val) = resampled.iter().filter(|v| !v.is_nan()).fold(
        (f32::INFINITY, f32::NEG_INFINITY),
        |(min, max), &val| (min.min(val), max.max(val)),
    );

    debug!(
        grid_width,
        grid_height, canvas_width, canvas_height, min_val, max_val, "rendering surface"
    );

    render_grid(
        &resampled,
        canvas_width,
        canvas_height,
        min_val,
        max_val,
        viridis_color,
    )
}
