//! Software rendering for scalar field visualization.
//!
//! Implements the drawing primitives the plot session's canvas is built on:
//! - Colormapped surface rendering with bilinear resampling
//! - Gradient-vector arrow overlays
//! - PNG encoding of the finished canvas

pub mod arrows;
pub mod colormap;
pub mod png;
pub mod surface;

pub use colormap::{viridis_color, Color};
