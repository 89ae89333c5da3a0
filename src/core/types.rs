use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel dimensions of the plotting area, axis-label margins excluded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Accepts finite, non-negative dimensions. Zero is allowed and maps to
    /// degenerate layout outputs rather than an error.
    pub fn validated(width: f64, height: f64) -> ChartResult<Self> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ChartError::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    #[must_use]
    pub fn has_area(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}
