use serde::{Deserialize, Serialize};

use crate::core::CanvasSize;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle};

/// Paint decisions supplied by the host for frame building.
///
/// The viewport engine never picks colors or strokes on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub axis_line_color: Color,
    pub grid_line_color: Color,
    pub label_color: Color,
    pub wick_color: Color,
    pub bullish_body_color: Color,
    pub bearish_body_color: Color,
    pub axis_line_width: f64,
    pub grid_line_width: f64,
    pub wick_line_width: f64,
    pub grid_line_style: LineStrokeStyle,
    pub candle_body_width_px: f64,
    pub label_font_size_px: f64,
    pub label_gap_px: f64,
    /// Right margin reserved for price labels.
    pub price_axis_width_px: f64,
    /// Bottom margin reserved for time labels.
    pub time_axis_height_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            axis_line_color: Color::WHITE,
            grid_line_color: Color::WHITE,
            label_color: Color::WHITE,
            wick_color: Color::WHITE,
            bullish_body_color: Color::rgb(0.0, 1.0, 0.0),
            bearish_body_color: Color::rgb(1.0, 0.0, 0.0),
            axis_line_width: 2.0,
            grid_line_width: 1.0,
            wick_line_width: 2.0,
            grid_line_style: LineStrokeStyle::Dashed {
                on_px: 10.0,
                off_px: 20.0,
                phase_px: 5.0,
            },
            candle_body_width_px: 12.0,
            label_font_size_px: 35.0,
            label_gap_px: 8.0,
            price_axis_width_px: 128.0,
            time_axis_height_px: 64.0,
        }
    }
}

impl RenderStyle {
    /// Plot area left after reserving both axis margins.
    #[must_use]
    pub fn plot_area(&self, surface: CanvasSize) -> CanvasSize {
        CanvasSize::new(
            (surface.width - self.price_axis_width_px).max(0.0),
            (surface.height - self.time_axis_height_px).max(0.0),
        )
    }

    /// Full surface needed around a plot area.
    #[must_use]
    pub fn surface_for(&self, plot: CanvasSize) -> CanvasSize {
        CanvasSize::new(
            plot.width + self.price_axis_width_px,
            plot.height + self.time_axis_height_px,
        )
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("axis_line_width", self.axis_line_width),
            ("grid_line_width", self.grid_line_width),
            ("wick_line_width", self.wick_line_width),
            ("candle_body_width_px", self.candle_body_width_px),
            ("label_font_size_px", self.label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("label_gap_px", self.label_gap_px),
            ("price_axis_width_px", self.price_axis_width_px),
            ("time_axis_height_px", self.time_axis_height_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and >= 0"
                )));
            }
        }
        for color in [
            self.axis_line_color,
            self.grid_line_color,
            self.label_color,
            self.wick_color,
            self.bullish_body_color,
            self.bearish_body_color,
        ] {
            color.validate()?;
        }
        self.grid_line_style.validate()
    }
}
