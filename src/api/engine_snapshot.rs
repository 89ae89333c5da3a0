use serde::{Deserialize, Serialize};

use crate::core::Candle;

/// Minimal state needed to reopen an identical view.
///
/// `series` is optional; without it the snapshot is re-applied against the
/// series already loaded in the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    pub scroll_offset: f64,
    pub visible_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<Candle>>,
}
