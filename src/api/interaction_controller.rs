use tracing::{trace, warn};

use crate::core::clamp_scroll_offset;
use crate::core::primitives::round_to_index;
use crate::interaction::{GestureInput, ZoomOutcome};

use super::ViewportEngine;

impl ViewportEngine {
    /// Pans by a raw pixel delta; positive (drag right) reveals earlier bars.
    ///
    /// The delta converts to candles as `delta * visible_count / width` and
    /// the offset is clamped to the series. No-op without a canvas width.
    pub fn scroll(&mut self, raw_delta: f64) {
        if !raw_delta.is_finite() {
            warn!(raw_delta, "ignoring non-finite scroll delta");
            return;
        }
        if self.canvas.width.is_nan() || self.canvas.width <= 0.0 {
            return;
        }

        let candle_delta = raw_delta * self.visible_count as f64 / self.canvas.width;
        self.scroll_offset = clamp_scroll_offset(
            self.scroll_offset - candle_delta,
            self.series.len(),
            self.visible_count,
        );
        trace!(
            raw_delta,
            candle_delta,
            scroll_offset = self.scroll_offset,
            "scroll"
        );
    }

    /// Divides the visible count by `zoom_factor` (`> 1` zooms in).
    ///
    /// The rounded result must stay within the configured candle limits or
    /// the request is dropped. The offset is neither re-centered nor
    /// re-clamped here; the window's right edge is clamped at read time.
    pub fn zoom(&mut self, zoom_factor: f64) -> ZoomOutcome {
        if !zoom_factor.is_finite() || zoom_factor <= 0.0 {
            warn!(zoom_factor, "ignoring invalid zoom factor");
            return ZoomOutcome::Rejected;
        }

        let candidate = (self.visible_count as f64 / zoom_factor).round();
        if candidate < self.config.min_candles as f64 || candidate > self.config.max_candles as f64
        {
            trace!(
                zoom_factor,
                candidate,
                visible_count = self.visible_count,
                "zoom rejected at candle limit"
            );
            return ZoomOutcome::Rejected;
        }

        let from = self.visible_count;
        let to = round_to_index(candidate);
        self.visible_count = to;
        trace!(zoom_factor, from, to, "zoom applied");
        self.recompute_time_grid_spacing();
        ZoomOutcome::Applied { from, to }
    }

    /// Routes a recognized gesture to `scroll` or `zoom`.
    pub fn apply_gesture(&mut self, gesture: GestureInput) -> Option<ZoomOutcome> {
        match gesture {
            GestureInput::Pan { delta } => {
                self.scroll(delta);
                None
            }
            GestureInput::Zoom { factor } => Some(self.zoom(factor)),
        }
    }
}
