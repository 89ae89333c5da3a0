use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ViewportEngine;
use super::axis_label_format::{format_price_label, format_time_label};

/// Horizontal gridline with its price label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAxisLine {
    pub price: f64,
    pub y: f64,
    pub label: String,
}

/// Vertical gridline anchored on a series candle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeAxisLine {
    pub series_index: usize,
    pub time: NaiveDateTime,
    pub x: f64,
    pub label: String,
}

impl ViewportEngine {
    /// Price gridlines with pixel positions and labels.
    #[must_use]
    pub fn price_axis_lines(&self) -> Vec<PriceAxisLine> {
        let bounds = self.price_bounds();
        self.price_grid_lines()
            .into_iter()
            .map(|price| PriceAxisLine {
                price,
                y: bounds.price_to_y(price, self.canvas.height),
                label: format_price_label(price),
            })
            .collect()
    }

    /// Time gridlines that fall inside the visible window and the plot width.
    ///
    /// Only the gridline indices of the window are walked.
    #[must_use]
    pub fn time_axis_lines(&self) -> Vec<TimeAxisLine> {
        let range = self.visible_range();
        let width = self.canvas.width;
        self.grid_spacing
            .line_indices_within(range.start, range.end)
            .filter_map(|series_index| {
                let slot = series_index - range.start;
                let x = width * slot as f64 / self.visible_count as f64;
                if !(0.0..=width).contains(&x) {
                    return None;
                }
                let time = self.series[series_index].time;
                Some(TimeAxisLine {
                    series_index,
                    time,
                    x,
                    label: format_time_label(time),
                })
            })
            .collect()
    }
}
