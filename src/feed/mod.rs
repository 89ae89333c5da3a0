//! Quote feed loader.
//!
//! Reads the plain quote format, one bar per line:
//!
//! ```text
//! YYYYMMDD HHMM open high low close
//! ```
//!
//! Lines may arrive in any order; the loader hands back a series sorted
//! ascending by time, ready for [`crate::api::ViewportEngine::set_series`].
//! Prices are plain decimal literals and go through [`Candle::from_decimal`].
//! OHLC consistency is not checked.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use tracing::debug;

use crate::core::Candle;
use crate::error::{ChartError, ChartResult};

/// Parses one quote line. `line_no` is 1-based and only used for errors.
///
/// Fields past the close price are ignored.
pub fn parse_quote_line(line_no: usize, line: &str) -> ChartResult<Candle> {
    let malformed = |reason: String| ChartError::InvalidQuoteLine {
        line: line_no,
        reason,
    };

    let mut fields = line.split_whitespace();
    let mut next_field = |name: &str| {
        fields
            .next()
            .ok_or_else(|| malformed(format!("missing {name} field")))
    };

    let date = next_field("date")?;
    let time = next_field("time")?;
    let open = next_field("open")?;
    let high = next_field("high")?;
    let low = next_field("low")?;
    let close = next_field("close")?;

    let time = parse_timestamp(date, time).map_err(malformed)?;
    let parse_price = |name: &str, raw: &str| -> ChartResult<Decimal> {
        Decimal::from_str(raw)
            .map_err(|err| malformed(format!("{name} price `{raw}` is not a decimal: {err}")))
    };

    Candle::from_decimal(
        time,
        parse_price("open", open)?,
        parse_price("high", high)?,
        parse_price("low", low)?,
        parse_price("close", close)?,
    )
    .map_err(|err| malformed(err.to_string()))
}

/// Parses a whole feed and sorts it ascending by time.
///
/// Blank lines are skipped; the first malformed line aborts the load.
pub fn parse_quotes(text: &str) -> ChartResult<Vec<Candle>> {
    let mut candles = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_quote_line(index + 1, line))
        .collect::<ChartResult<Vec<_>>>()?;

    candles.sort_by(Candle::cmp_by_time);
    Ok(candles)
}

/// Reads and parses a quote file.
pub fn load_quotes_file(path: impl AsRef<Path>) -> ChartResult<Vec<Candle>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let candles = parse_quotes(&text)?;
    debug!(path = %path.display(), count = candles.len(), "loaded quote feed");
    Ok(candles)
}

fn parse_timestamp(date: &str, time: &str) -> Result<NaiveDateTime, String> {
    let digits = |raw: &str, len: usize, name: &str| -> Result<(), String> {
        if raw.len() != len || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("{name} `{raw}` must be {len} digits"));
        }
        Ok(())
    };
    digits(date, 8, "date")?;
    digits(time, 4, "time")?;

    // All-ASCII-digit fields, so the slices and parses below cannot fail.
    let number = |raw: &str| raw.parse::<u32>().unwrap_or_default();
    let year = number(&date[0..4]) as i32;
    let month = number(&date[4..6]);
    let day = number(&date[6..8]);
    let hour = number(&time[0..2]);
    let minute = number(&time[2..4]);

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| format!("date `{date}` is not a calendar date"))?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| format!("time `{time}` is not a valid HHMM time"))?;
    Ok(NaiveDateTime::new(date, time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_fields_in_open_high_low_close_order() {
        let candle = parse_quote_line(1, "20210305 1430 10.5 12.0 9.5 11.25").expect("parse");
        assert_eq!(candle.time.to_string(), "2021-03-05 14:30:00");
        assert_eq!(candle.open, 10.5);
        assert_eq!(candle.high, 12.0);
        assert_eq!(candle.low, 9.5);
        assert_eq!(candle.close, 11.25);
    }

    #[test]
    fn rejects_short_lines_with_line_number() {
        let err = parse_quote_line(7, "20210305 1430 10.5 12.0").expect_err("too short");
        assert!(matches!(err, ChartError::InvalidQuoteLine { line: 7, .. }));
    }

    #[test]
    fn rejects_impossible_dates() {
        let err = parse_quote_line(1, "20210231 1430 1 2 0.5 1.5").expect_err("bad date");
        assert!(matches!(err, ChartError::InvalidQuoteLine { .. }));
        let err = parse_quote_line(1, "20210301 2460 1 2 0.5 1.5").expect_err("bad time");
        assert!(matches!(err, ChartError::InvalidQuoteLine { .. }));
    }

    #[test]
    fn rejects_non_numeric_prices() {
        let err = parse_quote_line(2, "20210301 1000 1 two 0.5 1.5").expect_err("bad price");
        assert!(matches!(err, ChartError::InvalidQuoteLine { line: 2, .. }));
        let err = parse_quote_line(2, "20210301 1000 1 NaN 0.5 1.5").expect_err("nan price");
        assert!(matches!(err, ChartError::InvalidQuoteLine { line: 2, .. }));
        let err = parse_quote_line(2, "20210301 1000 1 inf 0.5 1.5").expect_err("inf price");
        assert!(matches!(err, ChartError::InvalidQuoteLine { line: 2, .. }));
    }

    #[test]
    fn decimal_prices_keep_their_fraction_digits() {
        let candle = parse_quote_line(1, "20210301 1000 1.10 1.2345678 1.05 -0.75").expect("parse");
        assert_relative_eq!(candle.open, 1.1, epsilon = 1e-12);
        assert_relative_eq!(candle.high, 1.2345678, epsilon = 1e-12);
        assert_relative_eq!(candle.low, 1.05, epsilon = 1e-12);
        assert_eq!(candle.close, -0.75);
    }

    #[test]
    fn feed_is_sorted_and_blank_lines_skipped() {
        let text = "20210301 1002 3 4 2 3\n\n20210301 1000 1 2 0.5 1.5\n20210301 1001 2 3 1 2\n";
        let candles = parse_quotes(text).expect("parse feed");
        let minutes: Vec<String> = candles
            .iter()
            .map(|candle| candle.time.format("%H%M").to_string())
            .collect();
        assert_eq!(minutes, vec!["1000", "1001", "1002"]);
    }

    #[test]
    fn feed_error_reports_physical_line() {
        let text = "20210301 1000 1 2 0.5 1.5\n\nbroken\n";
        let err = parse_quotes(text).expect_err("malformed");
        assert!(matches!(err, ChartError::InvalidQuoteLine { line: 3, .. }));
    }
}
