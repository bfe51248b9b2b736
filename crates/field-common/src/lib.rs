//! Common types shared across the field-lab workspace.

pub mod error;
pub mod grid;
pub mod notify;

pub use error::{FieldResult, LoadError};
pub use grid::ScalarGrid;
pub use notify::{Notification, Severity};
