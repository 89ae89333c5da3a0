use serde::{Deserialize, Serialize};

use crate::core::primitives::round_to_index;

/// Target pixel band between adjacent vertical gridlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPixelBand {
    pub min_px: f64,
    pub max_px: f64,
}

/// Cached "candles per vertical gridline".
///
/// Starts at `f64::MAX` so the first recompute with a real canvas always
/// lands inside the band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeGridSpacing {
    candles_per_line: f64,
}

impl Default for TimeGridSpacing {
    fn default() -> Self {
        Self {
            candles_per_line: f64::MAX,
        }
    }
}

impl TimeGridSpacing {
    #[must_use]
    pub const fn with_candles_per_line(candles_per_line: f64) -> Self {
        Self { candles_per_line }
    }

    #[must_use]
    pub fn candles_per_line(self) -> f64 {
        self.candles_per_line
    }

    /// Re-evaluates spacing against the band with hysteresis.
    ///
    /// Below the band the spacing widens to `max_px`, above it narrows to
    /// `min_px`; inside the band nothing changes. Returns `true` when the
    /// spacing changed. Zero width or count is a no-op.
    pub fn recompute(
        &mut self,
        canvas_width: f64,
        visible_count: usize,
        band: GridPixelBand,
    ) -> bool {
        if canvas_width.is_nan() || canvas_width <= 0.0 || visible_count == 0 {
            return false;
        }

        let candle_width_px = canvas_width / visible_count as f64;
        let current_grid_px = self.candles_per_line * candle_width_px;
        let next = if current_grid_px < band.min_px {
            band.max_px / candle_width_px
        } else if current_grid_px > band.max_px {
            band.min_px / candle_width_px
        } else {
            return false;
        };

        let changed = next != self.candles_per_line;
        self.candles_per_line = next;
        changed
    }

    /// Index step between gridline candles, `round(spacing)` floored at 1.
    ///
    /// `None` while the spacing has never been fitted to a canvas.
    #[must_use]
    pub fn step(self) -> Option<usize> {
        if !self.candles_per_line.is_finite() || self.candles_per_line == f64::MAX {
            return None;
        }
        Some(round_to_index(self.candles_per_line).max(1))
    }

    /// Absolute series indices carrying a gridline. Alignment is anchored at
    /// index 0 so gridlines stay put while the window scrolls.
    pub fn line_indices(self, series_len: usize) -> impl Iterator<Item = usize> {
        let (step, len) = match self.step() {
            Some(step) => (step, series_len),
            None => (1, 0),
        };
        (0..len).step_by(step)
    }

    /// Gridline indices inside `start..end`, on the same index-0 anchoring
    /// as [`Self::line_indices`].
    pub fn line_indices_within(self, start: usize, end: usize) -> impl Iterator<Item = usize> {
        let (step, first, end) = match self.step() {
            Some(step) => (step, start.div_ceil(step).saturating_mul(step), end),
            None => (1, 0, 0),
        };
        (first..end).step_by(step)
    }
}
