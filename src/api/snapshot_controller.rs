use tracing::debug;

use crate::core::{clamp_scroll_offset, max_scroll_offset};
use crate::error::{ChartError, ChartResult};

use super::{ViewportEngine, ViewportSnapshot};

impl ViewportEngine {
    /// Captures zoom and offset, optionally with the series itself.
    #[must_use]
    pub fn snapshot(&self, include_series: bool) -> ViewportSnapshot {
        ViewportSnapshot {
            scroll_offset: self.scroll_offset,
            visible_count: self.visible_count,
            series: include_series.then(|| self.series.clone()),
        }
    }

    /// Serializes a snapshot as pretty JSON.
    pub fn snapshot_json_pretty(&self, include_series: bool) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot(include_series))
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    /// Re-applies a snapshot under the current limits.
    ///
    /// The visible count is clamped into the zoom limits and the offset is
    /// clamped against the series length, which may differ from the one the
    /// snapshot was taken with. A non-finite offset reopens on the tail.
    pub fn restore(&mut self, snapshot: ViewportSnapshot) {
        if let Some(series) = snapshot.series {
            self.series = series;
        }

        let len = self.series.len();
        self.visible_count = self.config.clamp_visible_count(snapshot.visible_count);
        self.scroll_offset = if snapshot.scroll_offset.is_finite() {
            clamp_scroll_offset(snapshot.scroll_offset, len, self.visible_count)
        } else {
            max_scroll_offset(len, self.visible_count)
        };
        self.initialized = true;

        debug!(
            count = len,
            visible_count = self.visible_count,
            scroll_offset = self.scroll_offset,
            "restored viewport snapshot"
        );
        self.recompute_time_grid_spacing();
    }

    /// Parses and re-applies a JSON snapshot.
    pub fn restore_json(&mut self, json: &str) -> ChartResult<()> {
        let snapshot: ViewportSnapshot = serde_json::from_str(json)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse snapshot: {e}")))?;
        self.restore(snapshot);
        Ok(())
    }
}
