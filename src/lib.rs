//! candle-viewport: viewport engine for scrollable, zoomable candlestick charts.
//!
//! The engine maps a sorted OHLC series onto a finite plot area under pan and
//! zoom, and derives the visible window, price bounds, gridlines and pixel
//! offsets a renderer needs for each frame.

pub mod api;
pub mod core;
pub mod error;
pub mod feed;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{RenderStyle, ViewportEngine, ViewportEngineConfig, ViewportSnapshot};
pub use error::{ChartError, ChartResult};
