use chrono::NaiveDateTime;

/// Time axis label pattern, e.g. `05.03, 14:30`.
pub const TIME_LABEL_PATTERN: &str = "%d.%m, %H:%M";

/// Formats a price gridline label with two decimals.
#[must_use]
pub fn format_price_label(price: f64) -> String {
    format!("{price:.2}")
}

/// Formats a time gridline label as day.month, hour:minute.
#[must_use]
pub fn format_time_label(time: NaiveDateTime) -> String {
    time.format(TIME_LABEL_PATTERN).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn price_label_uses_two_decimals() {
        assert_eq!(format_price_label(12.5), "12.50");
        assert_eq!(format_price_label(0.126), "0.13");
    }

    #[test]
    fn time_label_is_day_month_hour_minute() {
        let time = NaiveDate::from_ymd_opt(2021, 3, 5)
            .and_then(|date| date.and_hms_opt(14, 30, 0))
            .expect("valid datetime");
        assert_eq!(format_time_label(time), "05.03, 14:30");
    }
}
