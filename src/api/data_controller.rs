use tracing::{debug, warn};

use crate::core::{Candle, clamp_scroll_offset, max_scroll_offset};

use super::ViewportEngine;

impl ViewportEngine {
    /// Replaces the candle series wholesale.
    ///
    /// Input must already be sorted ascending by time. The first non-empty
    /// series opens the view on its tail with the default zoom; later
    /// replacements keep zoom and offset, re-clamped to the new length.
    /// An empty series leaves the viewport uninitialized.
    pub fn set_series(&mut self, candles: Vec<Candle>) {
        if candles.windows(2).any(|pair| pair[0].time > pair[1].time) {
            warn!(
                count = candles.len(),
                "series is not sorted ascending by time; windowing assumes sorted input"
            );
        }

        self.series = candles;
        let len = self.series.len();

        if self.initialized {
            self.scroll_offset = clamp_scroll_offset(self.scroll_offset, len, self.visible_count);
        } else if len > 0 {
            self.visible_count = self.config.initial_visible_count();
            self.scroll_offset = max_scroll_offset(len, self.visible_count);
            self.initialized = true;
        } else {
            self.scroll_offset = 0.0;
        }

        debug!(
            count = len,
            visible_count = self.visible_count,
            scroll_offset = self.scroll_offset,
            initialized = self.initialized,
            "set series"
        );
        self.recompute_time_grid_spacing();
    }

    /// Drops the series while keeping zoom and initialization state.
    pub fn clear_series(&mut self) {
        self.set_series(Vec::new());
    }
}
