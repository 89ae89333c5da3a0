use serde::{Deserialize, Serialize};

use crate::core::GridPixelBand;
use crate::error::{ChartError, ChartResult};

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can persist chart setup next to viewport snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportEngineConfig {
    #[serde(default = "default_min_candles")]
    pub min_candles: usize,
    #[serde(default = "default_max_candles")]
    pub max_candles: usize,
    #[serde(default = "default_visible_count")]
    pub default_visible_count: usize,
    #[serde(default = "default_min_grid_px")]
    pub min_grid_px: f64,
    #[serde(default = "default_max_grid_px")]
    pub max_grid_px: f64,
    #[serde(default = "default_price_line_count")]
    pub price_line_count: usize,
}

impl Default for ViewportEngineConfig {
    fn default() -> Self {
        Self {
            min_candles: default_min_candles(),
            max_candles: default_max_candles(),
            default_visible_count: default_visible_count(),
            min_grid_px: default_min_grid_px(),
            max_grid_px: default_max_grid_px(),
            price_line_count: default_price_line_count(),
        }
    }
}

impl ViewportEngineConfig {
    /// Sets the zoom limits in candles.
    #[must_use]
    pub fn with_candle_limits(mut self, min_candles: usize, max_candles: usize) -> Self {
        self.min_candles = min_candles;
        self.max_candles = max_candles;
        self
    }

    #[must_use]
    pub fn with_default_visible_count(mut self, count: usize) -> Self {
        self.default_visible_count = count;
        self
    }

    /// Sets the target pixel band between vertical gridlines.
    #[must_use]
    pub fn with_grid_band(mut self, min_grid_px: f64, max_grid_px: f64) -> Self {
        self.min_grid_px = min_grid_px;
        self.max_grid_px = max_grid_px;
        self
    }

    #[must_use]
    pub fn with_price_line_count(mut self, count: usize) -> Self {
        self.price_line_count = count;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.min_candles == 0 {
            return Err(ChartError::InvalidConfig(
                "min_candles must be >= 1".to_owned(),
            ));
        }
        if self.min_candles > self.max_candles {
            return Err(ChartError::InvalidConfig(format!(
                "min_candles ({}) must be <= max_candles ({})",
                self.min_candles, self.max_candles
            )));
        }
        if !self.min_grid_px.is_finite()
            || !self.max_grid_px.is_finite()
            || self.min_grid_px <= 0.0
            || self.min_grid_px >= self.max_grid_px
        {
            return Err(ChartError::InvalidConfig(
                "grid band must be finite with 0 < min_grid_px < max_grid_px".to_owned(),
            ));
        }
        if self.price_line_count == 0 {
            return Err(ChartError::InvalidConfig(
                "price_line_count must be >= 1".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn clamp_visible_count(self, count: usize) -> usize {
        count.clamp(self.min_candles, self.max_candles)
    }

    #[must_use]
    pub fn initial_visible_count(self) -> usize {
        self.clamp_visible_count(self.default_visible_count)
    }

    #[must_use]
    pub fn grid_band(self) -> GridPixelBand {
        GridPixelBand {
            min_px: self.min_grid_px,
            max_px: self.max_grid_px,
        }
    }
}

fn default_min_candles() -> usize {
    30
}

fn default_max_candles() -> usize {
    100
}

fn default_visible_count() -> usize {
    60
}

fn default_min_grid_px() -> f64 {
    250.0
}

fn default_max_grid_px() -> f64 {
    500.0
}

fn default_price_line_count() -> usize {
    10
}
