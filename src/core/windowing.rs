use serde::{Deserialize, Serialize};

use crate::core::primitives::round_to_index;

/// Half-open index range `[start, end)` into the full series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize,
}

impl VisibleRange {
    /// Resolves the visible window from the raw viewport state.
    ///
    /// `start = clamp(round(scroll_offset), 0, len)` and
    /// `end = clamp(start + visible_count, 0, len)`. The right edge may sit
    /// past the series after a zoom-out; it is clamped here, at read time.
    #[must_use]
    pub fn resolve(scroll_offset: f64, visible_count: usize, series_len: usize) -> Self {
        let start = round_to_index(scroll_offset).min(series_len);
        let end = start.saturating_add(visible_count).min(series_len);
        Self { start, end }
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

/// Largest scroll offset that still fills the viewport, `max(0, len - count)`.
#[must_use]
pub fn max_scroll_offset(series_len: usize, visible_count: usize) -> f64 {
    series_len.saturating_sub(visible_count) as f64
}

/// Clamps an offset into `[0, max_scroll_offset]`. NaN clamps to `0`.
#[must_use]
pub fn clamp_scroll_offset(offset: f64, series_len: usize, visible_count: usize) -> f64 {
    let max = max_scroll_offset(series_len, visible_count);
    if offset.is_nan() {
        return 0.0;
    }
    offset.clamp(0.0, max)
}
