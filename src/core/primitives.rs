use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Rounds half away from zero and saturates into `usize`.
///
/// Negative and NaN inputs map to `0`.
#[must_use]
pub fn round_to_index(value: f64) -> usize {
    let rounded = value.round();
    if rounded.is_nan() || rounded <= 0.0 {
        0
    } else if rounded >= usize::MAX as f64 {
        usize::MAX
    } else {
        rounded as usize
    }
}
