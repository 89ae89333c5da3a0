use tracing::trace;

use crate::core::CanvasSize;
use crate::error::ChartResult;

use super::{RenderStyle, ViewportEngine};

impl ViewportEngine {
    /// Stores plot-area dimensions and refits gridline spacing.
    ///
    /// Unchanged dimensions leave all state untouched.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> ChartResult<()> {
        let canvas = CanvasSize::validated(width, height)?;
        if canvas == self.canvas {
            return Ok(());
        }

        trace!(width, height, "set canvas size");
        self.canvas = canvas;
        self.recompute_time_grid_spacing();
        Ok(())
    }

    /// Sizes the plot area from the full drawing surface by subtracting the
    /// axis label margins of `style`.
    pub fn set_surface_size(
        &mut self,
        surface_width: f64,
        surface_height: f64,
        style: &RenderStyle,
    ) -> ChartResult<()> {
        let plot = style.plot_area(CanvasSize::validated(surface_width, surface_height)?);
        self.set_canvas_size(plot.width, plot.height)
    }

    /// Keeps the pixel distance between time gridlines inside the configured
    /// band. Returns `true` when the spacing changed.
    pub fn recompute_time_grid_spacing(&mut self) -> bool {
        let changed = self.grid_spacing.recompute(
            self.canvas.width,
            self.visible_count,
            self.config.grid_band(),
        );
        if changed {
            trace!(
                candles_per_line = self.grid_spacing.candles_per_line(),
                visible_count = self.visible_count,
                canvas_width = self.canvas.width,
                "time grid spacing updated"
            );
        }
        changed
    }
}
