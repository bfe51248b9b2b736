//! Gradient-vector arrow rendering.
//!
//! Draws one arrow per mesh cell onto a transparent RGBA layer. The layer is
//! composited over the rendered surface so rescaling can replace the arrows
//! without repainting the surface underneath.

use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::debug;

/// Configuration for arrow rendering
#[derive(Debug, Clone)]
pub struct ArrowConfig {
    /// Stroke color (RGBA)
    pub color: [u8; 4],
    /// Stroke width in pixels
    pub line_width: f32,
    /// Head stroke length as a fraction of the shaft length
    pub head_fraction: f32,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            color: [0, 0, 0, 255],
            line_width: 1.5,
            head_fraction: 0.3,
        }
    }
}

/// Map a data coordinate onto a pixel axis through the pinned view extents.
///
/// A zero-span extent (1-wide or 1-high mesh) centers on the canvas.
fn map_axis(value: f32, extent: (f32, f32), size_px: usize) -> f32 {
    let span = extent.1 - extent.0;
    if span.abs() < f32::EPSILON {
        size_px as f32 / 2.0
    } else {
        (value - extent.0) / span * (size_px - 1) as f32
    }
}

/// Render gradient arrows onto a transparent RGBA layer.
///
/// One arrow per mesh cell: base at the cell's mesh coordinate, direction
/// `(dx, dy)` scaled by `length`, both expressed in mesh units and projected
/// to pixels through the view extents pinned at surface-render time.
///
/// # Arguments
/// - `xs`, `ys`: mesh coordinate arrays (row-major, same length)
/// - `dx`, `dy`: gradient component arrays (row-major, same length)
/// - `length`: vector length multiplier (the slider value)
/// - `extent_x`, `extent_y`: view extents in mesh coordinates
/// - `width`, `height`: layer size in pixels
///
/// # Returns
/// RGBA pixel buffer (4 bytes per pixel), transparent where no arrow drawn
#[allow(clippy::too_many_arguments)]
pub fn render_arrows(
    xs: &[u32],
    ys: &[u32],
    dx: &[f32],
    dy: &[f32],
    length: f32,
    extent_x: (f32, f32),
    extent_y: (f32, f32),
    width: usize,
    height: usize,
    config: &ArrowConfig,
) -> Vec<u8> {
    let mut pixmap = match Pixmap::new(width as u32, height as u32) {
        Some(p) => p,
        None => return vec![0u8; width * height * 4],
    };

    let mut paint = Paint::default();
    paint.set_color_rgba8(config.color[0], config.color[1], config.color[2], config.color[3]);
    paint.anti_alias = true;

    let mut stroke = Stroke::default();
    stroke.width = config.line_width;
    stroke.line_cap = LineCap::Round;
    stroke.line_join = LineJoin::Round;

    let count = xs.len().min(ys.len()).min(dx.len()).min(dy.len());
    let mut drawn = 0usize;

    for i in 0..count {
        let (u, v) = (dx[i], dy[i]);
        if u.is_nan() || v.is_nan() {
            continue;
        }

        let base_x = map_axis(xs[i] as f32, extent_x, width);
        let base_y = map_axis(ys[i] as f32, extent_y, height);
        let tip_x = map_axis(xs[i] as f32 + u * length, extent_x, width);
        let tip_y = map_axis(ys[i] as f32 + v * length, extent_y, height);

        let shaft_x = tip_x - base_x;
        let shaft_y = tip_y - base_y;
        let shaft_len = (shaft_x * shaft_x + shaft_y * shaft_y).sqrt();
        if shaft_len < 0.5 {
            // Sub-pixel vector, nothing visible to draw
            continue;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(base_x, base_y);
        pb.line_to(tip_x, tip_y);

        // Two head strokes swept back from the tip
        let head_len = (shaft_len * config.head_fraction).clamp(2.0, 12.0);
        let angle = shaft_y.atan2(shaft_x);
        for side in [-1.0f32, 1.0] {
            let theta = angle + std::f32::consts::PI - side * 0.5;
            pb.move_to(tip_x, tip_y);
            pb.line_to(tip_x + head_len * theta.cos(), tip_y + head_len * theta.sin());
        }

        if let Some(path) = pb.finish() {
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            drawn += 1;
        }
    }

    debug!(arrows = drawn, length, "rendered arrow layer");

    pixmap.data().to_vec()
}

/// Composite an RGBA overlay onto a base canvas (source-over blending).
///
/// Both buffers must be the same size. Fully transparent overlay pixels are
/// skipped.
pub fn composite_over(canvas: &mut [u8], overlay: &[u8]) {
    for (dst, src) in canvas.chunks_exact_mut(4).zip(overlay.chunks_exact(4)) {
        let src_a = src[3];
        if src_a == 0 {
            continue;
        }

        let src_a_f = src_a as f32 / 255.0;
        let dst_a_f = dst[3] as f32 / 255.0;
        let out_a = src_a_f + dst_a_f * (1.0 - src_a_f);
        if out_a <= 0.0 {
            continue;
        }

        for c in 0..3 {
            let blended = (src[c] as f32 * src_a_f + dst[c] as f32 * dst_a_f * (1.0 - src_a_f))
                / out_a;
            dst[c] = blended as u8;
        }
        dst[3] = (out_a * 255.0) as u8;
    }
}
