//! PNG-backed render target.
//!
//! Owns the pixel buffers the session draws into: an opaque surface layer
//! and a transparent arrow overlay that can be replaced without repainting
//! the surface. `encode_png` composites the two for output.

use field_common::ScalarGrid;
use field_math::{GradientPair, Mesh};
use plot_session::{ArrowHandle, RenderTarget};
use renderer::arrows::{composite_over, render_arrows, ArrowConfig};
use renderer::png::create_png;
use renderer::surface::render_surface;
use tracing::debug;

/// A fixed-size RGBA canvas that renders to PNG bytes.
pub struct PngCanvas {
    width: usize,
    height: usize,
    surface: Option<Vec<u8>>,
    arrows: Option<(ArrowHandle, Vec<u8>)>,
    extents: Option<((f32, f32), (f32, f32))>,
    next_handle: u64,
    arrow_config: ArrowConfig,
}

impl PngCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            surface: None,
            arrows: None,
            extents: None,
            next_handle: 0,
            arrow_config: ArrowConfig::default(),
        }
    }

    /// Composite the layers and encode the canvas as a PNG.
    ///
    /// An empty canvas encodes as fully transparent pixels.
    pub fn encode_png(&self) -> Result<Vec<u8>, String> {
        let mut pixels = match &self.surface {
            Some(surface) => surface.clone(),
            None => vec![0u8; self.width * self.height * 4],
        };
        if let Some((_, overlay)) = &self.arrows {
            composite_over(&mut pixels, overlay);
        }
        create_png(&pixels, self.width, self.height)
    }
}

impl RenderTarget for PngCanvas {
    fn clear(&mut self) {
        self.surface = None;
        self.arrows = None;
        self.extents = None;
    }

    fn render_surface(&mut self, grid: &ScalarGrid, _mesh: &Mesh) {
        self.surface = Some(render_surface(
            grid.values(),
            grid.width(),
            grid.height(),
            self.width,
            self.height,
        ));
    }

    fn fix_extents(&mut self, x: (f32, f32), y: (f32, f32)) {
        self.extents = Some((x, y));
    }

    fn render_arrows(&mut self, mesh: &Mesh, gradient: &GradientPair, length: f32) -> ArrowHandle {
        // Extents are pinned at surface-render time; fall back to the mesh
        // bounds if a caller skipped that step.
        let (extent_x, extent_y) = self.extents.unwrap_or((
            (0.0, (mesh.width - 1) as f32),
            (0.0, (mesh.height - 1) as f32),
        ));

        let layer = render_arrows(
            &mesh.x,
            &mesh.y,
            &gradient.dx,
            &gradient.dy,
            length,
            extent_x,
            extent_y,
            self.width,
            self.height,
            &self.arrow_config,
        );

        let handle = ArrowHandle(self.next_handle);
        self.next_handle += 1;
        debug!(?handle, length, "arrow layer drawn");
        self.arrows = Some((handle, layer));
        handle
    }

    fn remove_arrows(&mut self, handle: ArrowHandle) {
        if let Some((current, _)) = &self.arrows {
            if *current == handle {
                self.arrows = None;
            }
        }
    }
}
