use crate::core::{
    Candle, CandleGeometry, PriceBounds, PriceLevels, VisibleRange, project_candles,
};
use crate::error::ChartResult;

use super::ViewportEngine;

impl ViewportEngine {
    /// Series index range currently drawn.
    #[must_use]
    pub fn visible_range(&self) -> VisibleRange {
        VisibleRange::resolve(self.scroll_offset, self.visible_count, self.series.len())
    }

    /// Contiguous slice of the series currently drawn.
    #[must_use]
    pub fn visible_window(&self) -> &[Candle] {
        let range = self.visible_range();
        &self.series[range.start..range.end]
    }

    /// Lowest low and highest high of the visible window; `(0, 0)` when empty.
    #[must_use]
    pub fn price_bounds(&self) -> PriceBounds {
        PriceBounds::from_candles(self.visible_window())
    }

    /// Interior horizontal gridline prices, top to bottom.
    #[must_use]
    pub fn price_grid_lines(&self) -> PriceLevels {
        self.price_bounds().grid_levels(self.config.price_line_count)
    }

    /// Series indices that carry a vertical gridline, over the full series.
    pub fn time_grid_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.grid_spacing.line_indices(self.series.len())
    }

    /// Candles that carry a vertical gridline, over the full series.
    #[must_use]
    pub fn time_grid_candles(&self) -> Vec<Candle> {
        self.time_grid_indices()
            .map(|index| self.series[index])
            .collect()
    }

    /// Horizontal pixel offset of a series index, `None` outside the window.
    #[must_use]
    pub fn x_offset_of_index(&self, series_index: usize) -> Option<f64> {
        let range = self.visible_range();
        if !range.contains(series_index) {
            return None;
        }
        let slot = series_index - range.start;
        Some(self.canvas.width * slot as f64 / self.visible_count as f64)
    }

    /// Horizontal pixel offset of `candle`, `None` when it is not visible.
    #[must_use]
    pub fn x_offset(&self, candle: &Candle) -> Option<f64> {
        let range = self.visible_range();
        self.visible_window()
            .iter()
            .position(|visible| visible == candle)
            .and_then(|slot| self.x_offset_of_index(range.start + slot))
    }

    /// Vertical pixel offset of `price` against the visible price bounds.
    #[must_use]
    pub fn price_to_y(&self, price: f64) -> f64 {
        self.price_bounds().price_to_y(price, self.canvas.height)
    }

    /// Geometry of every visible candle at the current bounds.
    pub fn project_visible_candles(&self, body_width_px: f64) -> ChartResult<Vec<CandleGeometry>> {
        project_candles(
            self.visible_window(),
            self.visible_count,
            self.canvas,
            self.price_bounds(),
            body_width_px,
        )
    }
}
