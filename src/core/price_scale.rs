use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Candle;

/// Interior price levels; inline capacity covers the usual gridline counts.
pub type PriceLevels = SmallVec<[f64; 16]>;

/// Vertical price extent of a candle window.
///
/// Empty windows yield the degenerate `(0, 0)` bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl PriceBounds {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `min(low)` and `max(high)` over `candles`.
    #[must_use]
    pub fn from_candles(candles: &[Candle]) -> Self {
        let Some(first) = candles.first() else {
            return Self::default();
        };

        candles.iter().skip(1).fold(
            Self {
                min: first.low,
                max: first.high,
            },
            |acc, candle| Self {
                min: acc.min.min(candle.low),
                max: acc.max.max(candle.high),
            },
        )
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.max == self.min
    }

    /// Splits the range into `line_count` equal steps and returns the
    /// `line_count - 1` interior levels, top to bottom, at
    /// `max - i * step` for `i = 1..line_count`.
    #[must_use]
    pub fn grid_levels(self, line_count: usize) -> PriceLevels {
        if self.is_degenerate() || line_count == 0 {
            return PriceLevels::new();
        }

        let step = self.span() / line_count as f64;
        (1..line_count).map(|i| self.max - step * i as f64).collect()
    }

    /// Maps a price onto `[0, canvas_height]`, `max` at the top.
    ///
    /// Degenerate bounds map every price to the vertical center.
    #[must_use]
    pub fn price_to_y(self, price: f64, canvas_height: f64) -> f64 {
        if self.is_degenerate() {
            return canvas_height / 2.0;
        }
        canvas_height * (self.max - price) / self.span()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn grid_levels_exclude_top_and_bottom() {
        let levels = PriceBounds::new(0.0, 10.0).grid_levels(10);
        assert_eq!(levels.len(), 9);
        assert_relative_eq!(levels[0], 9.0);
        assert_relative_eq!(levels[8], 1.0);
    }

    #[test]
    fn degenerate_bounds_have_no_levels_and_center_mapping() {
        let bounds = PriceBounds::new(5.0, 5.0);
        assert!(bounds.grid_levels(10).is_empty());
        assert_relative_eq!(bounds.price_to_y(5.0, 300.0), 150.0);
    }

    #[test]
    fn price_to_y_puts_max_on_top() {
        let bounds = PriceBounds::new(10.0, 20.0);
        assert_relative_eq!(bounds.price_to_y(20.0, 400.0), 0.0);
        assert_relative_eq!(bounds.price_to_y(10.0, 400.0), 400.0);
        assert_relative_eq!(bounds.price_to_y(15.0, 400.0), 200.0);
    }

    #[test]
    fn empty_window_bounds_are_zero() {
        assert_eq!(PriceBounds::from_candles(&[]), PriceBounds::new(0.0, 0.0));
    }
}
