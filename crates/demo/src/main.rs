// File: crates/demo/src/main.rs
// Summary: Replays an x,y CSV (or a generated signal) through a bounded chart and writes PNG frames.
//
// Usage: livegraph-demo [input.csv] [--config chart.toml] [--frames N] [--size WxH]

use anyhow::{Context, Result};
use clap::Parser;
use livegraph_core::{AxisTickSet, Chart, DrawConfig, Point, TickPrecision};
use livegraph_render_skia::SkiaRenderer;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Replay x,y samples through a bounded chart and write PNG frames to target/out.
#[derive(Parser, Debug)]
#[command(name = "livegraph-demo", version)]
struct Args {
    /// CSV with x,y columns; a damped sine is generated when omitted.
    input: Option<String>,
    /// Draw config in TOML.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of frames to split the samples into.
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
    frames: u32,
    /// Output size as WxH.
    #[arg(long, default_value = "640x480", value_parser = parse_size)]
    size: (u32, u32),
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s.split_once('x').ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let w = w.parse::<u32>().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h = h.parse::<u32>().map_err(|e| format!("bad height '{h}': {e}"))?;
    if w == 0 || h == 0 {
        return Err(format!("size must be non-zero, got '{s}'"));
    }
    Ok((w, h))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(p) => DrawConfig::load(p).with_context(|| format!("loading config {}", p.display()))?,
        None => DrawConfig::default(),
    };

    let (samples, stem) = match &args.input {
        Some(raw) => {
            let (path, used_alt) = resolve_path(raw)?;
            info!(path = %path.display(), "using input file");
            if used_alt {
                info!("extension swapped between .csv/.cvs");
            }
            let samples = load_xy_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string();
            (samples, stem)
        }
        None => {
            info!("no input given; generating a damped sine");
            (generate_signal(config.capacity * 3), "signal".to_string())
        }
    };
    if samples.is_empty() {
        anyhow::bail!("no samples loaded; expected two numeric columns x,y");
    }
    info!(count = samples.len(), "loaded samples");

    let mut chart = Chart::from_config(config.clone()).context("building chart from config")?;
    if config.x_ticks.is_empty() && config.y_ticks.is_empty() {
        // nothing configured: crop to the data and label its full range
        let (x_lo, x_hi, y_lo, y_hi) = bounds(&samples);
        chart
            .set_crop_to_data(true)
            .set_auto_margin(true)
            .set_precision(TickPrecision::Fractional)
            .set_x_ticks(AxisTickSet::evenly_spaced(x_lo, x_hi, 11))
            .set_y_ticks(AxisTickSet::evenly_spaced(y_lo, y_hi, 5));
    }

    let renderer = SkiaRenderer::new();
    let per_frame = samples.len().div_ceil(args.frames as usize);
    let out_dir = PathBuf::from("target/out");
    for (frame, chunk) in samples.chunks(per_frame).enumerate() {
        chart.extend(chunk.iter().copied());
        let out = out_dir.join(format!("{stem}_{frame:03}.png"));
        renderer.render_to_png(&mut chart, args.size.0, args.size.1, &out)?;
        let ex = chart.extrema();
        info!(
            frame,
            points = chart.data_size(),
            x_min = ex.x_min,
            x_max = ex.x_max,
            path = %out.display(),
            "wrote frame"
        );
    }

    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load `x,y` rows. Header names are matched loosely; without a usable x column
/// the row index is used.
fn load_xy_csv(path: &Path) -> Result<Vec<Point>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_x = idx(&["x", "time", "timestamp", "t", "date"]);
    let i_y = idx(&["y", "value", "close", "v"]).or(if headers.len() >= 2 { Some(1) } else { None });
    let Some(i_y) = i_y else {
        anyhow::bail!("no value column among {:?}", headers);
    };

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let x = i_x
            .and_then(|ix| rec.get(ix))
            .and_then(parse_time_to_f64)
            .unwrap_or(row as f64);
        match rec.get(i_y).and_then(|s| s.parse::<f64>().ok()) {
            Some(y) => out.push(Point::new(x, y)),
            None => warn!(row, "skipping row without a numeric value"),
        }
    }
    Ok(out)
}

fn parse_time_to_f64(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        if n > 10_i64.pow(12) {
            return Some(n as f64 / 1000.0);
        } // epoch ms -> sec
        return Some(n as f64);
    }
    s.parse::<f64>().ok()
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

fn generate_signal(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.05;
            Point::new(t, (t * 2.0).sin() * (-t * 0.05).exp() * 10.0)
        })
        .collect()
}

fn bounds(v: &[Point]) -> (f64, f64, f64, f64) {
    let ex = livegraph_core::Extrema::from_points(v.iter().copied());
    (ex.x_min, ex.x_max, ex.y_min, ex.y_max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_defaults() {
        let args = Args::try_parse_from(["livegraph-demo"]).unwrap();
        assert_eq!(args.input, None);
        assert_eq!(args.frames, 8);
        assert_eq!(args.size, (640, 480));
    }

    #[test]
    fn args_flags_and_input() {
        let args = Args::try_parse_from([
            "livegraph-demo", "data.csv", "--config", "chart.toml", "--frames", "3", "--size", "800x500",
        ])
        .unwrap();
        assert_eq!(args.input.as_deref(), Some("data.csv"));
        assert_eq!(args.config, Some(PathBuf::from("chart.toml")));
        assert_eq!(args.frames, 3);
        assert_eq!(args.size, (800, 500));
    }

    #[test]
    fn args_reject_bad_values() {
        assert!(Args::try_parse_from(["livegraph-demo", "--frames", "0"]).is_err());
        assert!(Args::try_parse_from(["livegraph-demo", "--size", "800"]).is_err());
        assert!(Args::try_parse_from(["livegraph-demo", "--size", "0x10"]).is_err());
        assert!(Args::try_parse_from(["livegraph-demo", "--bogus"]).is_err());
    }
}
