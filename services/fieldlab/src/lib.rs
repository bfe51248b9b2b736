//! Canvas implementation for the fieldlab shell.

pub mod canvas;

pub use canvas::PngCanvas;
