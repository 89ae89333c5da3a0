use crate::error::ChartResult;
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::{RenderStyle, ViewportEngine};

impl ViewportEngine {
    /// Materializes the current view into draw primitives.
    ///
    /// Layers in paint order: axis edges, time gridlines and labels, price
    /// gridlines and labels, then candle wicks and bodies.
    pub fn build_render_frame(&self, style: &RenderStyle) -> ChartResult<RenderFrame> {
        style.validate()?;

        let plot = self.canvas;
        let mut frame = RenderFrame::new(style.surface_for(plot));
        if !plot.has_area() {
            return Ok(frame);
        }

        frame = frame.with_line(LinePrimitive::new(
            0.0,
            plot.height,
            plot.width,
            plot.height,
            style.axis_line_width,
            style.axis_line_color,
        ));
        frame = frame.with_line(LinePrimitive::new(
            plot.width,
            0.0,
            plot.width,
            plot.height,
            style.axis_line_width,
            style.axis_line_color,
        ));

        for line in self.time_axis_lines() {
            frame = frame.with_line(
                LinePrimitive::new(
                    line.x,
                    0.0,
                    line.x,
                    plot.height,
                    style.grid_line_width,
                    style.grid_line_color,
                )
                .with_stroke_style(style.grid_line_style),
            );
            frame = frame.with_text(TextPrimitive::new(
                line.label,
                line.x,
                plot.height + style.label_gap_px + style.label_font_size_px,
                style.label_font_size_px,
                style.label_color,
                TextHAlign::Center,
            ));
        }

        for line in self.price_axis_lines() {
            frame = frame.with_line(
                LinePrimitive::new(
                    0.0,
                    line.y,
                    plot.width,
                    line.y,
                    style.grid_line_width,
                    style.grid_line_color,
                )
                .with_stroke_style(style.grid_line_style),
            );
            frame = frame.with_text(TextPrimitive::new(
                line.label,
                plot.width + style.label_gap_px,
                line.y + style.label_font_size_px / 2.0,
                style.label_font_size_px,
                style.label_color,
                TextHAlign::Left,
            ));
        }

        for candle in self.project_visible_candles(style.candle_body_width_px)? {
            frame = frame.with_line(LinePrimitive::new(
                candle.center_x,
                candle.wick_bottom,
                candle.center_x,
                candle.wick_top,
                style.wick_line_width,
                style.wick_color,
            ));
            let fill = if candle.is_bullish {
                style.bullish_body_color
            } else {
                style.bearish_body_color
            };
            frame = frame.with_rect(RectPrimitive::new(
                candle.body_left,
                candle.body_top,
                candle.body_right - candle.body_left,
                candle.body_bottom - candle.body_top,
                fill,
            ));
        }

        frame.validate()?;
        Ok(frame)
    }
}
