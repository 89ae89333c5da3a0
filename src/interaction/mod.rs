use serde::{Deserialize, Serialize};

/// Numeric output of a host gesture recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureInput {
    /// Horizontal drag delta in pixels, positive when dragging right.
    Pan { delta: f64 },
    /// Multiplicative pinch factor; `> 1` zooms in.
    Zoom { factor: f64 },
}

/// Result of a zoom request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomOutcome {
    Applied { from: usize, to: usize },
    /// The candidate count left the configured limits or the factor was
    /// unusable; viewport state is unchanged.
    Rejected,
}

impl ZoomOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}
