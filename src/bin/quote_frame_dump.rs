use candle_viewport::api::{PriceAxisLine, RenderStyle, TimeAxisLine, ViewportEngine};
use candle_viewport::core::{PriceBounds, VisibleRange};
use candle_viewport::feed::load_quotes_file;
use candle_viewport::interaction::GestureInput;
use candle_viewport::render::{NullRenderer, Renderer};
use candle_viewport::telemetry::init_default_tracing;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: quote_frame_dump --input <quotes> [--surface <WIDTHxHEIGHT>] [--restore <snapshot.json>] [--pan <px>]... [--zoom <factor>]... [--save <snapshot.json>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    surface: (f64, f64),
    restore: Option<PathBuf>,
    save: Option<PathBuf>,
    gestures: Vec<GestureInput>,
}

#[derive(Debug, Serialize)]
struct ViewSummary {
    series_len: usize,
    visible_count: usize,
    scroll_offset: f64,
    visible_range: VisibleRange,
    price_bounds: PriceBounds,
    grid_candles_per_line: f64,
    price_axis_lines: Vec<PriceAxisLine>,
    time_axis_lines: Vec<TimeAxisLine>,
    frame_lines: usize,
    frame_rects: usize,
    frame_texts: usize,
}

fn main() {
    let _ = init_default_tracing("info");
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let style = RenderStyle::default();

    let candles = load_quotes_file(&args.input)
        .map_err(|err| format!("failed to load `{}`: {err}", args.input.display()))?;

    let mut engine = ViewportEngine::default();
    engine.set_series(candles);
    engine
        .set_surface_size(args.surface.0, args.surface.1, &style)
        .map_err(|err| err.to_string())?;

    if let Some(path) = &args.restore {
        let raw = fs::read_to_string(path)
            .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
        engine.restore_json(&raw).map_err(|err| err.to_string())?;
    }

    for gesture in &args.gestures {
        engine.apply_gesture(*gesture);
    }

    let frame = engine
        .build_render_frame(&style)
        .map_err(|err| err.to_string())?;
    let mut renderer = NullRenderer::default();
    renderer.render(&frame).map_err(|err| err.to_string())?;

    let summary = ViewSummary {
        series_len: engine.series().len(),
        visible_count: engine.visible_count(),
        scroll_offset: engine.scroll_offset(),
        visible_range: engine.visible_range(),
        price_bounds: engine.price_bounds(),
        grid_candles_per_line: engine.grid_spacing().candles_per_line(),
        price_axis_lines: engine.price_axis_lines(),
        time_axis_lines: engine.time_axis_lines(),
        frame_lines: renderer.last_line_count,
        frame_rects: renderer.last_rect_count,
        frame_texts: renderer.last_text_count,
    };
    let json = serde_json::to_string_pretty(&summary)
        .map_err(|err| format!("failed to serialize summary: {err}"))?;
    println!("{json}");

    if let Some(path) = &args.save {
        let snapshot = engine
            .snapshot_json_pretty(false)
            .map_err(|err| err.to_string())?;
        fs::write(path, snapshot)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
    }
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut surface = (1208.0, 704.0);
    let mut restore = None::<PathBuf>;
    let mut save = None::<PathBuf>;
    let mut gestures = Vec::new();

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--input" => input = Some(PathBuf::from(value("--input")?)),
            "--surface" => surface = parse_surface(&value("--surface")?)?,
            "--restore" => restore = Some(PathBuf::from(value("--restore")?)),
            "--save" => save = Some(PathBuf::from(value("--save")?)),
            "--pan" => gestures.push(GestureInput::Pan {
                delta: parse_number("--pan", &value("--pan")?)?,
            }),
            "--zoom" => gestures.push(GestureInput::Zoom {
                factor: parse_number("--zoom", &value("--zoom")?)?,
            }),
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| format!("missing --input\n{USAGE}"))?,
        surface,
        restore,
        save,
        gestures,
    })
}

fn parse_surface(raw: &str) -> Result<(f64, f64), String> {
    let (width, height) = raw
        .split_once('x')
        .ok_or_else(|| format!("surface `{raw}` must look like WIDTHxHEIGHT"))?;
    Ok((
        parse_number("--surface", width)?,
        parse_number("--surface", height)?,
    ))
}

fn parse_number(name: &str, raw: &str) -> Result<f64, String> {
    raw.parse::<f64>()
        .map_err(|err| format!("invalid value `{raw}` for {name}: {err}"))
}
