pub mod candlestick;
pub mod price_scale;
pub mod primitives;
pub mod time_grid;
pub mod types;
pub mod windowing;

pub use candlestick::{Candle, CandleGeometry, project_candles};
pub use price_scale::{PriceBounds, PriceLevels};
pub use time_grid::{GridPixelBand, TimeGridSpacing};
pub use types::CanvasSize;
pub use windowing::{VisibleRange, clamp_scroll_offset, max_scroll_offset};
