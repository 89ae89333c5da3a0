use crate::core::{Candle, CanvasSize, TimeGridSpacing};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{RenderStyle, ViewportEngineConfig};

/// Owns the candle series and the scroll/zoom/size state of one chart.
///
/// Every derived value (visible window, price bounds, gridlines, pixel
/// offsets) is recomputed from this state on read. Only the time gridline
/// spacing is cached, because its hysteresis depends on history.
///
/// The engine is single-owner and not meant to be shared across threads.
#[derive(Debug, Clone)]
pub struct ViewportEngine {
    pub(super) config: ViewportEngineConfig,
    pub(super) series: Vec<Candle>,
    pub(super) visible_count: usize,
    pub(super) scroll_offset: f64,
    pub(super) canvas: CanvasSize,
    pub(super) grid_spacing: TimeGridSpacing,
    pub(super) initialized: bool,
}

impl Default for ViewportEngine {
    fn default() -> Self {
        Self::from_valid_config(ViewportEngineConfig::default())
    }
}

impl ViewportEngine {
    pub fn new(config: ViewportEngineConfig) -> ChartResult<Self> {
        Ok(Self::from_valid_config(config.validate()?))
    }

    fn from_valid_config(config: ViewportEngineConfig) -> Self {
        Self {
            config,
            series: Vec::new(),
            visible_count: config.initial_visible_count(),
            scroll_offset: 0.0,
            canvas: CanvasSize::default(),
            grid_spacing: TimeGridSpacing::default(),
            initialized: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> ViewportEngineConfig {
        self.config
    }

    #[must_use]
    pub fn series(&self) -> &[Candle] {
        &self.series
    }

    /// Zoom level: number of candle slots the viewport spans.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Fractional series index of the left edge.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    #[must_use]
    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn grid_spacing(&self) -> TimeGridSpacing {
        self.grid_spacing
    }

    /// `true` once a non-empty series or a snapshot has positioned the view.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Builds the current frame and hands it to `renderer`.
    pub fn render<R: Renderer>(&self, renderer: &mut R, style: &RenderStyle) -> ChartResult<()> {
        let frame = self.build_render_frame(style)?;
        renderer.render(&frame)
    }
}
