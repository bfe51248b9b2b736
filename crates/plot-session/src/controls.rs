//! Enable/disable signals for the UI shell.

use serde::{Deserialize, Serialize};

/// Which shell controls should be clickable.
///
/// Recomputed after every transition; the shell must not expose a render
/// action whose flag is false (the session treats such calls as contract
/// violations, see [`crate::PlotSession`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    /// The load action; always available.
    pub load: bool,
    /// The surface plot action.
    pub plot: bool,
    /// The vector plot action.
    pub quiver: bool,
    /// The vector length slider.
    pub slider: bool,
}

impl Controls {
    /// Only `load` enabled.
    pub fn load_only() -> Self {
        Self {
            load: true,
            plot: false,
            quiver: false,
            slider: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_only() {
        let c = Controls::load_only();
        assert!(c.load);
        assert!(!c.plot && !c.quiver && !c.slider);
    }

    #[test]
    fn test_serializes_for_shell() {
        let json = serde_json::to_string(&Controls::load_only()).unwrap();
        assert!(json.contains("\"load\":true"));
    }
}
