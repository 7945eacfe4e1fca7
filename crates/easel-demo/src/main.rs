// File: crates/easel-demo/src/main.rs
// Summary: Demo loads a value column from CSV (or uses built-in samples) and writes chart.png and canvas.png.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use easel_core::{Appearance, ChartControl, ChartOptions, ChartSeries, DrawingCanvas, Theme};
use easel_render_skia::{render_canvas_png_bytes, render_chart_png_bytes, write_png, RenderOptions};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const SAMPLE_VALUES: [f64; 12] = [3.0, 7.5, 4.2, 9.8, 12.1, 8.0, 15.3, 11.7, 13.9, 10.4, 17.2, 16.0];

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Appearance {
    fn from(t: ThemeArg) -> Self {
        match t {
            ThemeArg::Light => Appearance::Light,
            ThemeArg::Dark => Appearance::Dark,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "easel-demo")]
#[command(about = "Render the line chart and the drawing canvas to PNG", long_about = None)]
struct Args {
    /// CSV file to read values from; built-in samples are used when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Column holding the values (defaults to the first numeric column)
    #[arg(long)]
    column: Option<String>,

    /// Chart title
    #[arg(long, default_value = "Samples")]
    title: String,

    #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
    theme: ThemeArg,

    #[arg(long, default_value_t = easel_core::types::WIDTH)]
    width: i32,

    #[arg(long, default_value_t = easel_core::types::HEIGHT)]
    height: i32,

    /// Device scale applied to fonts, margins and the canvas scene
    #[arg(long, default_value_t = 1.0)]
    dpi_scale: f64,

    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Skip the title and gridline labels
    #[arg(long)]
    no_labels: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let values = match &args.input {
        Some(path) => load_column(path, args.column.as_deref())
            .with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => SAMPLE_VALUES.to_vec(),
    };
    info!(count = values.len(), "loaded values");

    let appearance = Appearance::from(args.theme);
    let theme = Theme::for_appearance(appearance);
    let opts = RenderOptions { width: args.width, height: args.height };

    let options = ChartOptions {
        dpi_scale: args.dpi_scale,
        draw_labels: !args.no_labels,
        ..ChartOptions::with_appearance(appearance)
    };
    let series = ChartSeries::try_new(args.title.clone(), values).context("invalid series")?;
    let chart = ChartControl::new(series).with_options(options);

    let out_chart = args.out_dir.join("chart.png");
    let bytes = render_chart_png_bytes(&chart, &opts)?;
    write_png(&bytes, &out_chart)?;
    println!("Wrote {}", out_chart.display());

    let canvas = DrawingCanvas::with_default_scene(args.dpi_scale).with_theme(theme);
    let out_canvas = args.out_dir.join("canvas.png");
    let bytes = render_canvas_png_bytes(&canvas, &opts)?;
    write_png(&bytes, &out_canvas)?;
    println!("Wrote {}", out_canvas.display());

    Ok(())
}

/// Read one numeric column. Rows whose cell does not parse are skipped.
fn load_column(path: &Path, column: Option<&str>) -> Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    let records = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;

    let index = match column {
        Some(name) => {
            let want = name.to_lowercase();
            match headers.iter().position(|h| *h == want) {
                Some(i) => i,
                None => bail!("column '{}' not found; headers are {:?}", name, headers),
            }
        }
        // first column whose first row parses as a number
        None => records
            .first()
            .and_then(|rec| rec.iter().position(|cell| cell.trim().parse::<f64>().is_ok()))
            .context("no numeric column found")?,
    };

    let mut out = Vec::with_capacity(records.len());
    for (row, rec) in records.iter().enumerate() {
        match rec.get(index).map(str::trim).and_then(|s| s.parse::<f64>().ok()) {
            Some(v) if v.is_finite() => out.push(v),
            _ => warn!(row, "skipping row without a numeric value"),
        }
    }
    Ok(out)
}
