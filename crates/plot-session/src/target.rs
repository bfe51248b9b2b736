//! The rendering collaborator contract.

use field_common::ScalarGrid;
use field_math::{GradientPair, Mesh};

/// Identifier for a rendered set of arrows.
///
/// Returned by [`RenderTarget::render_arrows`]; the session hands it back to
/// remove that geometry before a replacement render. Opaque to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrowHandle(pub u64);

/// The canvas the session draws on.
///
/// Implementations own the actual drawing surface (an image canvas, a plot
/// widget, a recording stub in tests). All methods are infallible and run to
/// completion before returning; the session is the only mutator.
pub trait RenderTarget {
    /// Discard everything drawn so far.
    fn clear(&mut self);

    /// Draw the grid as a height surface over the mesh.
    fn render_surface(&mut self, grid: &ScalarGrid, mesh: &Mesh);

    /// Pin the view extents so later overlays align with the surface.
    fn fix_extents(&mut self, x: (f32, f32), y: (f32, f32));

    /// Draw one arrow per mesh cell with direction `(dx, dy, 0)` at base
    /// height zero, scaled by `length`. Returns a handle to the drawn
    /// geometry.
    fn render_arrows(&mut self, mesh: &Mesh, gradient: &GradientPair, length: f32) -> ArrowHandle;

    /// Remove previously drawn arrow geometry.
    fn remove_arrows(&mut self, handle: ArrowHandle);
}
