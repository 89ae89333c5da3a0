use std::cmp::Ordering;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::primitives::decimal_to_f64;
use crate::core::{CanvasSize, PriceBounds};
use crate::error::{ChartError, ChartResult};

/// One OHLC bar for a minute-resolution time bucket.
///
/// The engine assumes `low <= min(open, close) <= max(open, close) <= high`
/// but does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    #[must_use]
    pub const fn new(time: NaiveDateTime, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
        }
    }

    /// Converts decimal feed prices into a candle.
    pub fn from_decimal(
        time: NaiveDateTime,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Ok(Self::new(
            time,
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        ))
    }

    /// Returns `true` when close price is greater than or equal to open price.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }

    /// Candles order by time only.
    #[must_use]
    pub fn cmp_by_time(&self, other: &Self) -> Ordering {
        self.time.cmp(&other.time)
    }
}

/// Projected candle geometry in plot-area pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleGeometry {
    pub center_x: f64,
    pub body_left: f64,
    pub body_right: f64,
    pub body_top: f64,
    pub body_bottom: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub is_bullish: bool,
}

/// Projects the visible window into render geometry.
///
/// `window` must be the current visible window; slot `i` lands at
/// `canvas.width * i / visible_count`.
pub fn project_candles(
    window: &[Candle],
    visible_count: usize,
    canvas: CanvasSize,
    bounds: PriceBounds,
    body_width_px: f64,
) -> ChartResult<Vec<CandleGeometry>> {
    if !body_width_px.is_finite() || body_width_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "body width must be finite and > 0".to_owned(),
        ));
    }
    if visible_count == 0 {
        return Ok(Vec::new());
    }

    #[cfg(feature = "parallel-projection")]
    {
        Ok(window
            .par_iter()
            .enumerate()
            .map(|(slot, candle)| {
                project_single_candle(*candle, slot, visible_count, canvas, bounds, body_width_px)
            })
            .collect())
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        Ok(window
            .iter()
            .enumerate()
            .map(|(slot, candle)| {
                project_single_candle(*candle, slot, visible_count, canvas, bounds, body_width_px)
            })
            .collect())
    }
}

fn project_single_candle(
    candle: Candle,
    slot: usize,
    visible_count: usize,
    canvas: CanvasSize,
    bounds: PriceBounds,
    body_width_px: f64,
) -> CandleGeometry {
    let half = body_width_px / 2.0;
    let center_x = canvas.width * slot as f64 / visible_count as f64;
    let open_y = bounds.price_to_y(candle.open, canvas.height);
    let close_y = bounds.price_to_y(candle.close, canvas.height);

    CandleGeometry {
        center_x,
        body_left: center_x - half,
        body_right: center_x + half,
        body_top: open_y.min(close_y),
        body_bottom: open_y.max(close_y),
        wick_top: bounds.price_to_y(candle.high, canvas.height),
        wick_bottom: bounds.price_to_y(candle.low, canvas.height),
        is_bullish: candle.is_bullish(),
    }
}
