//! The visualization session: load/plot/rescale state machine.
//!
//! `PlotSession` owns the loaded grid, its derived mesh and gradient, and the
//! progression of render actions. It is independent of any UI toolkit: the
//! shell triggers actions, the session drives a [`RenderTarget`] collaborator
//! and reports which controls should be enabled after each transition.

pub mod controls;
pub mod session;
pub mod target;

pub use controls::Controls;
pub use session::{PlotSession, ScaleFactor, VisualizationState};
pub use target::{ArrowHandle, RenderTarget};
