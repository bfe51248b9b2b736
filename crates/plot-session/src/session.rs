//! The plot session state machine.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use csv_parser::load_csv;
use field_common::{LoadError, ScalarGrid};
use field_math::{build_mesh, compute_gradient, GradientPair, Mesh};

use crate::controls::Controls;
use crate::target::{ArrowHandle, RenderTarget};

/// How far the visualization has progressed.
///
/// Each successful action unlocks the next: a grid must be loaded before the
/// surface renders, the surface must exist before vectors overlay it, and
/// vectors must exist before they can be rescaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualizationState {
    /// Nothing loaded (or the last load attempt failed).
    Empty,
    /// A grid is loaded; the surface can be plotted.
    Loaded,
    /// The surface is on the canvas; vectors can be plotted.
    Surfaced,
    /// Vectors are on the canvas; they can be rescaled.
    Vectored,
}

impl Default for VisualizationState {
    fn default() -> Self {
        Self::Empty
    }
}

/// The vector-length multiplier, an integer in `[1, 5]`.
///
/// Mirrors the shell's slider range. Does not mutate the gradient data, only
/// the rendered arrow length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleFactor(u8);

impl ScaleFactor {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// A scale factor, if `value` is within the slider range.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// A scale factor with out-of-range values clamped into `[1, 5]`.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

/// The visualization session.
///
/// Owns the loaded grid and everything derived from it, and gates the render
/// actions behind [`VisualizationState`]. All operations run synchronously to
/// completion; the render target is mutated only from here.
#[derive(Debug, Default)]
pub struct PlotSession {
    grid: Option<ScalarGrid>,
    mesh: Option<Mesh>,
    gradient: Option<GradientPair>,
    arrows: Option<ArrowHandle>,
    scale: ScaleFactor,
    state: VisualizationState,
}

impl PlotSession {
    /// A fresh session with nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state-machine position.
    pub fn state(&self) -> VisualizationState {
        self.state
    }

    /// The loaded grid, if any. Retained across failed loads.
    pub fn grid(&self) -> Option<&ScalarGrid> {
        self.grid.as_ref()
    }

    /// The mesh of the last surface render, if any.
    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_ref()
    }

    /// The gradient of the last vector render, if any.
    pub fn gradient(&self) -> Option<&GradientPair> {
        self.gradient.as_ref()
    }

    /// The current vector-length multiplier.
    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    /// Enable/disable signals for the shell, derived from the current state.
    pub fn controls(&self) -> Controls {
        Controls {
            load: true,
            plot: self.state >= VisualizationState::Loaded,
            quiver: self.state >= VisualizationState::Surfaced,
            slider: self.state >= VisualizationState::Vectored,
        }
    }

    /// Load a grid from `path`, replacing any previously loaded data.
    ///
    /// On success the canvas is cleared, derived data is discarded, and the
    /// session moves to `Loaded`. On failure previously loaded data stays in
    /// place but the state drops back to `Empty`, closing every render gate
    /// until the next successful load.
    pub fn load<R: RenderTarget>(&mut self, target: &mut R, path: &str) -> Result<(), LoadError> {
        match load_csv(path) {
            Ok(grid) => {
                info!(path, rows = grid.height(), cols = grid.width(), "grid loaded");
                target.clear();
                self.grid = Some(grid);
                self.mesh = None;
                self.gradient = None;
                self.arrows = None;
                self.scale = ScaleFactor::default();
                self.state = VisualizationState::Loaded;
                Ok(())
            }
            Err(e) => {
                warn!(path, error = %e, "grid load failed");
                self.state = VisualizationState::Empty;
                Err(e)
            }
        }
    }

    /// Render the loaded grid as a height surface and pin the view extents.
    ///
    /// Re-rendering from `Surfaced` or `Vectored` repaints the same surface;
    /// the state never regresses below `Surfaced`.
    ///
    /// # Panics
    /// Panics if no grid is loaded; the shell must keep the plot control
    /// disabled until `load` succeeds.
    pub fn render_surface<R: RenderTarget>(&mut self, target: &mut R) {
        assert!(
            self.state >= VisualizationState::Loaded,
            "render_surface requires a loaded grid"
        );
        let grid = self.grid.as_ref().expect("loaded state implies a grid");

        let mesh = build_mesh(grid);
        target.render_surface(grid, &mesh);

        // Pin the extents to the rendered bounds so the vector overlay aligns.
        let x_extent = (0.0, (mesh.width - 1) as f32);
        let y_extent = (0.0, (mesh.height - 1) as f32);
        target.fix_extents(x_extent, y_extent);

        debug!(cols = mesh.width, rows = mesh.height, "surface rendered");
        self.mesh = Some(mesh);
        self.state = self.state.max(VisualizationState::Surfaced);
    }

    /// Render the gradient-vector field over the surface at unit scale.
    ///
    /// The gradient is computed here, once per load, and reused by rescales.
    /// A previous vector render is removed before the replacement is drawn.
    ///
    /// # Panics
    /// Panics if the surface has not been rendered; the shell must keep the
    /// quiver control disabled until `render_surface` has run.
    pub fn render_vectors<R: RenderTarget>(&mut self, target: &mut R) {
        assert!(
            self.state >= VisualizationState::Surfaced,
            "render_vectors requires a rendered surface"
        );
        let grid = self.grid.as_ref().expect("surfaced state implies a grid");
        let mesh = self.mesh.as_ref().expect("surfaced state implies a mesh");

        let gradient = compute_gradient(grid);

        if let Some(handle) = self.arrows.take() {
            target.remove_arrows(handle);
        }
        self.scale = ScaleFactor::default();
        let handle = target.render_arrows(mesh, &gradient, self.scale.get() as f32);

        debug!(?handle, "vector field rendered");
        self.gradient = Some(gradient);
        self.arrows = Some(handle);
        self.state = VisualizationState::Vectored;
    }

    /// Replace the rendered arrows with the same gradient at length `k`.
    ///
    /// Pure function of the stored gradient and `k`: directions are
    /// unchanged, only the rendered length scales.
    ///
    /// # Panics
    /// Panics if vectors have not been rendered; the shell must keep the
    /// slider disabled until `render_vectors` has run.
    pub fn rescale_vectors<R: RenderTarget>(&mut self, target: &mut R, k: ScaleFactor) {
        assert!(
            self.state >= VisualizationState::Vectored,
            "rescale_vectors requires a rendered vector field"
        );
        let mesh = self.mesh.as_ref().expect("vectored state implies a mesh");
        let gradient = self
            .gradient
            .as_ref()
            .expect("vectored state implies a gradient");

        if let Some(handle) = self.arrows.take() {
            target.remove_arrows(handle);
        }
        let handle = target.render_arrows(mesh, gradient, k.get() as f32);

        debug!(?handle, k = k.get(), "vector field rescaled");
        self.arrows = Some(handle);
        self.scale = k;
    }
}
