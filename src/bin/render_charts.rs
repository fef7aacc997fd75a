use std::fs;
use std::path::PathBuf;

use camp_charts::api::{AreaChart, BarChart, ChartConfig, load_population_csv, shelter_shares};
use camp_charts::interaction::PointerEvent;
use camp_charts::render::SvgRenderer;
use camp_charts::telemetry::init_default_tracing;
use tracing::{error, info};

const USAGE: &str = "usage: render_charts --input <csv> [--out-dir <dir>] [--config <json>] [--hover-x <px>] [--png]";

struct CliArgs {
    input: PathBuf,
    out_dir: PathBuf,
    config: Option<PathBuf>,
    hover_x: Option<f64>,
    png: bool,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartConfig::default(),
    };

    // A dataset that fails to load halts rendering; nothing is drawn.
    let series = load_population_csv(&args.input).map_err(|err| {
        error!(error = %err, "error loading data");
        err.to_string()
    })?;

    fs::create_dir_all(&args.out_dir)
        .map_err(|err| format!("failed to create `{}`: {err}", args.out_dir.display()))?;

    let area_chart = AreaChart::new(config.clone(), series).map_err(|err| err.to_string())?;
    let tooltip = match args.hover_x {
        Some(x) => {
            let plot = area_chart.plot_area();
            let y = config.margins.top + plot.height / 2.0;
            let state = area_chart
                .on_pointer_move(PointerEvent::new(x, y))
                .map_err(|err| err.to_string())?;
            println!(
                "{}",
                state
                    .to_json_contract_v1_pretty()
                    .map_err(|err| err.to_string())?
            );
            Some(state)
        }
        None => None,
    };

    let mut renderer = SvgRenderer::new();
    let area_path = args.out_dir.join("area_chart.svg");
    area_chart
        .render(&mut renderer, tooltip.as_ref())
        .and_then(|()| renderer.save(&area_path))
        .map_err(|err| format!("failed to write `{}`: {err}", area_path.display()))?;
    info!(path = %area_path.display(), "wrote area chart");

    let bar_chart = BarChart::new(config, shelter_shares()).map_err(|err| err.to_string())?;
    let bar_path = args.out_dir.join("bar_chart.svg");
    bar_chart
        .render(&mut renderer)
        .and_then(|()| renderer.save(&bar_path))
        .map_err(|err| format!("failed to write `{}`: {err}", bar_path.display()))?;
    info!(path = %bar_path.display(), "wrote bar chart");

    if args.png {
        write_pngs(&area_chart, tooltip.as_ref(), &bar_chart, &args.out_dir)?;
    }

    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn write_pngs(
    area_chart: &AreaChart,
    tooltip: Option<&camp_charts::interaction::TooltipState>,
    bar_chart: &BarChart,
    out_dir: &std::path::Path,
) -> Result<(), String> {
    use camp_charts::render::CairoRenderer;

    let viewport = area_chart.config().viewport;
    let width = i32::try_from(viewport.width).map_err(|err| err.to_string())?;
    let height = i32::try_from(viewport.height).map_err(|err| err.to_string())?;

    let mut renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
    let area_path = out_dir.join("area_chart.png");
    area_chart
        .render(&mut renderer, tooltip)
        .and_then(|()| renderer.write_png(&area_path))
        .map_err(|err| format!("failed to write `{}`: {err}", area_path.display()))?;
    info!(path = %area_path.display(), "wrote area chart png");

    let mut renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
    let bar_path = out_dir.join("bar_chart.png");
    bar_chart
        .render(&mut renderer)
        .and_then(|()| renderer.write_png(&bar_path))
        .map_err(|err| format!("failed to write `{}`: {err}", bar_path.display()))?;
    info!(path = %bar_path.display(), "wrote bar chart png");
    Ok(())
}

#[cfg(not(feature = "cairo-backend"))]
fn write_pngs(
    _area_chart: &AreaChart,
    _tooltip: Option<&camp_charts::interaction::TooltipState>,
    _bar_chart: &BarChart,
    _out_dir: &std::path::Path,
) -> Result<(), String> {
    Err("--png requires the `cairo-backend` feature".to_owned())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);

    let mut input = None::<PathBuf>;
    let mut out_dir = PathBuf::from(".");
    let mut config = None::<PathBuf>;
    let mut hover_x = None::<f64>;
    let mut png = false;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--out-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --out-dir".to_owned())?;
                out_dir = PathBuf::from(value);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--hover-x" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --hover-x".to_owned())?;
                let parsed = value
                    .parse::<f64>()
                    .map_err(|err| format!("invalid --hover-x `{value}`: {err}"))?;
                hover_x = Some(parsed);
            }
            "--png" => png = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }

    let input = input.ok_or_else(|| USAGE.to_owned())?;
    Ok(CliArgs {
        input,
        out_dir,
        config,
        hover_x,
        png,
    })
}
