mod axis_label_format;
mod axis_ticks;
mod data_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod interaction_controller;
mod layout_controller;
mod render_frame_builder;
mod render_style;
mod snapshot_controller;
mod visible_window_access;

pub use axis_label_format::{TIME_LABEL_PATTERN, format_price_label, format_time_label};
pub use axis_ticks::{PriceAxisLine, TimeAxisLine};
pub use engine::ViewportEngine;
pub use engine_config::ViewportEngineConfig;
pub use engine_snapshot::ViewportSnapshot;
pub use render_style::RenderStyle;
