// File: crates/window-demo/src/main.rs
// Summary: Windowed demo; streams a live signal into a bounded chart and blits it via winit + softbuffer.
//
// Keys: C toggles crop-to-data, G grid, S line/scatter, T cycles themes, L extrema policy, R clears.

use anyhow::{Context, Result};
use livegraph_core::{
    theme, AxisTickSet, Chart, DrawConfig, ExtremaPolicy, LineStrategy, ScatterStrategy, TickPrecision,
};
use livegraph_render_skia::SkiaRenderer;
use std::num::NonZeroU32;
use std::time::{Duration, Instant};
use tracing::{error, info};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const FRAME: Duration = Duration::from_millis(33);
const POINTS_PER_FRAME: usize = 4;

/// Noisy two-tone signal sampled at a fixed step.
struct Signal {
    t: f64,
    seed: u32,
}

impl Signal {
    fn next(&mut self) -> (f64, f64) {
        // xorshift for a little deterministic jitter
        self.seed ^= self.seed << 13;
        self.seed ^= self.seed >> 17;
        self.seed ^= self.seed << 5;
        let jitter = (self.seed % 1000) as f64 / 1000.0 - 0.5;
        let y = (self.t * 0.8).sin() * 40.0 + (self.t * 3.1).sin() * 8.0 + jitter * 4.0;
        let p = (self.t, y);
        self.t += 0.05;
        p
    }
}

fn build_chart(config: &DrawConfig) -> Result<Chart> {
    let mut chart = Chart::from_config(config.clone())?;
    chart
        .set_precision(TickPrecision::Fractional)
        .set_crop_to_data(true)
        .set_auto_margin(true)
        .set_y_ticks(AxisTickSet::evenly_spaced(-60.0, 60.0, 7));
    Ok(chart)
}

/// Ticks every two seconds across the visible window of samples.
fn x_ticks_for(chart: &Chart) -> AxisTickSet {
    let start = chart.model().iter().next().map_or(0.0, |p| p.x).floor();
    let end = chart.model().iter().next_back().map_or(0.0, |p| p.x).ceil();
    let count = ((end - start) / 2.0).floor() as usize + 1;
    AxisTickSet::evenly_spaced(start, start + 2.0 * (count.saturating_sub(1)) as f64, count)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(p) => DrawConfig::load(&p).with_context(|| format!("loading config {p}"))?,
        None => DrawConfig { capacity: 400, ..DrawConfig::default() },
    };
    let mut chart = build_chart(&config)?;
    let renderer = SkiaRenderer::new();
    let themes = theme::presets();
    let mut theme_idx = 0usize;
    let mut scatter = false;
    let mut signal = Signal { t: 0.0, seed: 0x9e37_79b9 };

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("livegraph - streaming")
        .with_inner_size(winit::dpi::LogicalSize::new(960.0, 540.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let size = window.inner_size();
    chart.on_resize(size.width, size.height);
    info!(width = size.width, height = size.height, capacity = config.capacity, "window ready");

    let mut next_frame = Instant::now();

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::WaitUntil(next_frame);
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    chart.on_resize(new_size.width, new_size.height);
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    match key {
                        VirtualKeyCode::C => {
                            let crop = !chart.config().crop_to_data;
                            chart.set_crop_to_data(crop);
                        }
                        VirtualKeyCode::G => {
                            let grid = !chart.config().show_grid;
                            chart.show_grid(grid);
                        }
                        VirtualKeyCode::S => {
                            scatter = !scatter;
                            let current = std::mem::take(&mut chart);
                            chart = if scatter {
                                current.with_strategy(ScatterStrategy::default())
                            } else {
                                current.with_strategy(LineStrategy)
                            };
                        }
                        VirtualKeyCode::T => {
                            theme_idx = (theme_idx + 1) % themes.len();
                            chart.set_theme(themes[theme_idx].clone());
                        }
                        VirtualKeyCode::L => {
                            let policy = match chart.model().policy() {
                                ExtremaPolicy::AllTime => ExtremaPolicy::Live,
                                ExtremaPolicy::Live => ExtremaPolicy::AllTime,
                            };
                            chart.set_extrema_policy(policy);
                        }
                        VirtualKeyCode::R => {
                            chart.clear();
                        }
                        _ => return,
                    }
                    window.set_title(&format!(
                        "livegraph - {} | {} | {}{}",
                        chart.config().theme.name,
                        chart.strategy_id(),
                        if chart.config().crop_to_data { "crop" } else { "fixed" },
                        if chart.model().policy() == ExtremaPolicy::Live { " | live extrema" } else { "" },
                    ));
                    window.request_redraw();
                }
                _ => {}
            },
            Event::NewEvents(_) if Instant::now() >= next_frame => {
                for _ in 0..POINTS_PER_FRAME {
                    let (x, y) = signal.next();
                    chart.insert(x, y);
                }
                let ticks = x_ticks_for(&chart);
                chart.set_x_ticks(ticks);
                next_frame = Instant::now() + FRAME;
                *cf = ControlFlow::WaitUntil(next_frame);
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    error!("softbuffer resize: {e}");
                    return;
                }
                let rgba = match renderer.render_to_rgba8(&mut chart, size.width, size.height) {
                    Ok((rgba, ..)) => rgba,
                    Err(e) => {
                        error!("render: {e:#}");
                        return;
                    }
                };
                let mut frame = match surface.buffer_mut() {
                    Ok(f) => f,
                    Err(e) => {
                        error!("softbuffer buffer: {e}");
                        return;
                    }
                };
                // softbuffer pixels are 0RGB
                for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
                    *dst = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
                }
                if let Err(e) = frame.present() {
                    error!("present error: {e}");
                }
            }
            _ => {}
        }
    });
}
