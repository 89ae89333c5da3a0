use candle_viewport::ViewportEngine;
use candle_viewport::core::Candle;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

fn series(len: usize, seed: u64) -> Vec<Candle> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid start time");
    (0..len)
        .map(|i| {
            let wave = ((i as u64).wrapping_mul(seed.wrapping_add(7)) % 97) as f64;
            let open = 50.0 + wave * 0.3;
            let close = open + ((i % 5) as f64 - 2.0);
            let high = open.max(close) + 1.0 + (i % 3) as f64;
            let low = open.min(close) - 1.0 - (i % 4) as f64;
            Candle::new(start + Duration::minutes(i as i64), open, high, low, close)
        })
        .collect()
}

fn engine(len: usize, seed: u64, width: f64) -> ViewportEngine {
    let mut engine = ViewportEngine::default();
    engine.set_series(series(len, seed));
    engine.set_canvas_size(width, 600.0).expect("canvas");
    engine
}

proptest! {
    #[test]
    fn window_length_matches_clamped_start(
        len in 0usize..400,
        seed in 0u64..1000,
        deltas in proptest::collection::vec(-3000.0f64..3000.0, 0..8),
        zooms in proptest::collection::vec(0.5f64..2.0, 0..4)
    ) {
        let mut engine = engine(len, seed, 1200.0);
        for delta in deltas {
            engine.scroll(delta);
        }
        for factor in zooms {
            engine.zoom(factor);
        }

        let range = engine.visible_range();
        let expected = engine.visible_count().min(len - range.start);
        prop_assert_eq!(engine.visible_window().len(), expected);
        prop_assert!(range.start <= len);
    }

    #[test]
    fn scroll_offset_stays_within_series(
        len in 0usize..400,
        deltas in proptest::collection::vec(-5000.0f64..5000.0, 1..10)
    ) {
        let mut engine = engine(len, 3, 900.0);
        for delta in deltas {
            engine.scroll(delta);
            let max = len.saturating_sub(engine.visible_count()) as f64;
            prop_assert!(engine.scroll_offset() >= 0.0);
            prop_assert!(engine.scroll_offset() <= max);
        }
    }

    #[test]
    fn inverse_scroll_round_trips_away_from_edges(
        delta in -300.0f64..300.0
    ) {
        // 1000 candles, 60 visible, 1200 px: |delta| <= 15 candles from the middle.
        let mut engine = engine(1000, 11, 1200.0);
        engine.scroll(9000.0);
        let origin = engine.scroll_offset();
        prop_assert!((origin - 490.0).abs() <= 1e-9);

        engine.scroll(delta);
        engine.scroll(-delta);
        prop_assert!((engine.scroll_offset() - origin).abs() <= 1e-9);
    }

    #[test]
    fn inverse_zoom_restores_visible_count(
        start_zoom in 0.6f64..1.7,
        factor in 0.5f64..1.0
    ) {
        let mut engine = engine(500, 5, 1000.0);
        engine.zoom(start_zoom);
        let before = engine.visible_count();
        let zoomed_out = engine.zoom(factor);
        prop_assume!(zoomed_out.is_applied());

        let zoomed_in = engine.zoom(1.0 / factor);
        prop_assert!(zoomed_in.is_applied());
        prop_assert_eq!(engine.visible_count(), before);
    }

    #[test]
    fn visible_count_stays_within_limits(
        zooms in proptest::collection::vec(0.1f64..10.0, 1..20)
    ) {
        let mut engine = engine(300, 1, 800.0);
        for factor in zooms {
            engine.zoom(factor);
            prop_assert!((30..=100).contains(&engine.visible_count()));
        }
    }

    #[test]
    fn price_bounds_enclose_visible_candles(
        len in 1usize..400,
        seed in 0u64..1000,
        delta in -5000.0f64..5000.0
    ) {
        let mut engine = engine(len, seed, 1000.0);
        engine.scroll(delta);
        let bounds = engine.price_bounds();
        for candle in engine.visible_window() {
            prop_assert!(bounds.min <= candle.low);
            prop_assert!(bounds.max >= candle.high);
        }
        for level in engine.price_grid_lines() {
            prop_assert!(level > bounds.min && level < bounds.max);
        }
    }

    #[test]
    fn grid_spacing_lands_in_band_after_resize(
        width in 200.0f64..4000.0,
        zoom in 0.6f64..2.0
    ) {
        let mut engine = engine(300, 2, 1000.0);
        engine.zoom(zoom);
        engine.set_canvas_size(width, 600.0).expect("resize");
        let candle_width = width / engine.visible_count() as f64;
        let grid_px = engine.grid_spacing().candles_per_line() * candle_width;
        prop_assert!(grid_px >= 250.0 - 1e-9 && grid_px <= 500.0 + 1e-9);
    }
}
