use approx::assert_relative_eq;
use candle_viewport::core::{Candle, VisibleRange};
use candle_viewport::{ChartError, ViewportEngine, ViewportEngineConfig};
use chrono::{Duration, NaiveDate, NaiveDateTime};

fn start_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 1, 4)
        .and_then(|date| date.and_hms_opt(10, 0, 0))
        .expect("valid start time")
}

fn series(len: usize) -> Vec<Candle> {
    (0..len)
        .map(|i| {
            let base = 100.0 + i as f64;
            Candle::new(
                start_time() + Duration::minutes(i as i64),
                base,
                base + 2.0,
                base - 2.0,
                base + 1.0,
            )
        })
        .collect()
}

#[test]
fn first_series_opens_on_tail_with_default_zoom() {
    let mut engine = ViewportEngine::default();
    assert!(!engine.is_initialized());

    engine.set_series(series(200));

    assert!(engine.is_initialized());
    assert_eq!(engine.visible_count(), 60);
    assert_relative_eq!(engine.scroll_offset(), 140.0);
    assert_eq!(engine.visible_range(), VisibleRange { start: 140, end: 200 });
    assert_eq!(engine.visible_window().len(), 60);
}

#[test]
fn short_series_opens_at_zero() {
    let mut engine = ViewportEngine::default();
    engine.set_series(series(20));

    assert_relative_eq!(engine.scroll_offset(), 0.0);
    assert_eq!(engine.visible_window().len(), 20);
}

#[test]
fn default_visible_count_is_clamped_into_limits() {
    let config = ViewportEngineConfig::default().with_default_visible_count(500);
    let mut engine = ViewportEngine::new(config).expect("engine init");
    engine.set_series(series(300));

    assert_eq!(engine.visible_count(), 100);
    assert_relative_eq!(engine.scroll_offset(), 200.0);
}

#[test]
fn replacing_series_keeps_zoom_and_reclamps_offset() {
    let mut engine = ViewportEngine::default();
    engine.set_series(series(200));
    engine.set_canvas_size(1000.0, 500.0).expect("canvas");
    assert!(engine.zoom(1.5).is_applied());
    assert_eq!(engine.visible_count(), 40);
    engine.scroll(250.0);
    assert_relative_eq!(engine.scroll_offset(), 130.0);

    engine.set_series(series(150));
    assert_eq!(engine.visible_count(), 40);
    assert_relative_eq!(engine.scroll_offset(), 110.0);

    engine.set_series(series(500));
    assert_relative_eq!(engine.scroll_offset(), 110.0);
}

#[test]
fn empty_series_yields_degenerate_outputs() {
    let mut engine = ViewportEngine::default();
    engine.set_canvas_size(800.0, 400.0).expect("canvas");
    engine.set_series(Vec::new());

    assert!(!engine.is_initialized());
    assert!(engine.visible_window().is_empty());
    let bounds = engine.price_bounds();
    assert_relative_eq!(bounds.min, 0.0);
    assert_relative_eq!(bounds.max, 0.0);
    assert!(engine.price_grid_lines().is_empty());
    assert!(engine.time_grid_candles().is_empty());
    assert!(engine.time_axis_lines().is_empty());
}

#[test]
fn empty_then_loaded_series_still_opens_on_tail() {
    let mut engine = ViewportEngine::default();
    engine.set_series(Vec::new());
    engine.set_series(series(90));

    assert_relative_eq!(engine.scroll_offset(), 30.0);
}

#[test]
fn clearing_series_keeps_zoom() {
    let mut engine = ViewportEngine::default();
    engine.set_series(series(200));
    engine.zoom(2.0);
    engine.clear_series();

    assert_eq!(engine.visible_count(), 30);
    assert_relative_eq!(engine.scroll_offset(), 0.0);
    assert!(engine.visible_window().is_empty());
}

#[test]
fn canvas_size_rejects_invalid_dimensions() {
    let mut engine = ViewportEngine::default();
    let err = engine
        .set_canvas_size(f64::NAN, 100.0)
        .expect_err("nan width must fail");
    assert!(matches!(err, ChartError::InvalidCanvas { .. }));
    let err = engine
        .set_canvas_size(100.0, -1.0)
        .expect_err("negative height must fail");
    assert!(matches!(err, ChartError::InvalidCanvas { .. }));
    engine.set_canvas_size(0.0, 0.0).expect("zero is allowed");
}

#[test]
fn unchanged_canvas_size_keeps_grid_state() {
    let mut engine = ViewportEngine::default();
    engine.set_series(series(200));
    engine.set_canvas_size(1200.0, 600.0).expect("canvas");
    let spacing = engine.grid_spacing();

    engine.set_canvas_size(1200.0, 600.0).expect("same canvas");
    assert_eq!(engine.grid_spacing(), spacing);
}

#[test]
fn invalid_config_is_rejected() {
    let err = ViewportEngine::new(ViewportEngineConfig::default().with_candle_limits(50, 10))
        .expect_err("inverted limits");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err = ViewportEngine::new(ViewportEngineConfig::default().with_grid_band(500.0, 250.0))
        .expect_err("inverted band");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err = ViewportEngine::new(ViewportEngineConfig::default().with_price_line_count(0))
        .expect_err("zero price lines");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn config_deserializes_with_defaults() {
    let config: ViewportEngineConfig =
        serde_json::from_str(r#"{ "max_candles": 80 }"#).expect("parse config");
    assert_eq!(config.min_candles, 30);
    assert_eq!(config.max_candles, 80);
    assert_eq!(config.default_visible_count, 60);
    assert_eq!(config.price_line_count, 10);
}
