// File: crates/livegraph-core/src/chart.rs
// Summary: Chart; owns the data model and config, keeps the viewport layout fresh, and paints through a DrawSurface.

use tracing::debug;

use crate::config::{validate_margin, DrawConfig};
use crate::error::ChartResult;
use crate::geometry::{PanelSize, PixelPoint, PixelRect, Point};
use crate::model::{ChartDataModel, ExtremaPolicy, Extrema};
use crate::scale::{margin_needs_update, required_margin, LayoutMode, TickMark, ViewportScaler, LABEL_GAP_PX};
use crate::strategy::{LineStrategy, RenderStrategy, SeriesStyle};
use crate::surface::{DrawSurface, TextExtent};
use crate::theme::{Rgba, Theme};
use crate::ticks::{format_tick, AxisTickSet, TickPrecision};

pub struct Chart {
    model: ChartDataModel,
    config: DrawConfig,
    panel: PanelSize,
    strategy: Box<dyn RenderStrategy>,
    // None whenever something the layout depends on has changed since it was built.
    layout: Option<ViewportScaler>,
    scratch: Vec<PixelPoint>,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    /// Line chart with the default config (capacity 100, margin 32).
    pub fn new() -> Self {
        let config = DrawConfig::default();
        let model = ChartDataModel::default().with_policy(config.extrema_policy);
        Self {
            model,
            config,
            panel: PanelSize::default(),
            strategy: Box::new(LineStrategy),
            layout: None,
            scratch: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> ChartResult<Self> {
        Self::from_config(DrawConfig { capacity, ..DrawConfig::default() })
    }

    pub fn from_config(mut config: DrawConfig) -> ChartResult<Self> {
        config.validate()?;
        config.normalize();
        let model = ChartDataModel::new(config.capacity)?.with_policy(config.extrema_policy);
        Ok(Self {
            model,
            config,
            panel: PanelSize::default(),
            strategy: Box::new(LineStrategy),
            layout: None,
            scratch: Vec::new(),
        })
    }

    pub fn with_strategy(mut self, strategy: impl RenderStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    pub fn strategy_id(&self) -> &'static str { self.strategy.id() }
    pub fn config(&self) -> &DrawConfig { &self.config }
    pub fn model(&self) -> &ChartDataModel { &self.model }
    pub fn panel(&self) -> PanelSize { self.panel }
    pub fn extrema(&self) -> Extrema { self.model.extrema() }
    pub fn data_size(&self) -> usize { self.model.data_size() }
    pub fn is_empty(&self) -> bool { self.model.is_empty() }
    pub fn x_ticks(&self) -> &AxisTickSet { &self.config.x_ticks }
    pub fn y_ticks(&self) -> &AxisTickSet { &self.config.y_ticks }

    fn invalidate(&mut self) {
        self.layout = None;
    }

    // ---- data ---------------------------------------------------------------

    pub fn insert(&mut self, x: f64, y: f64) -> &mut Self {
        self.model.insert(x, y);
        self.invalidate();
        self
    }

    pub fn insert_point(&mut self, point: Point) -> &mut Self {
        self.insert(point.x, point.y)
    }

    pub fn extend<I>(&mut self, points: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        self.model.extend(points);
        self.invalidate();
        self
    }

    pub fn remove_oldest(&mut self) -> ChartResult<Point> {
        let p = self.model.remove_oldest()?;
        self.invalidate();
        Ok(p)
    }

    pub fn remove_newest(&mut self) -> ChartResult<Point> {
        let p = self.model.remove_newest()?;
        self.invalidate();
        Ok(p)
    }

    pub fn remove_point(&mut self, point: Point, tolerance: f64) -> ChartResult<bool> {
        let removed = self.model.remove_point(point, tolerance)?;
        if removed {
            self.invalidate();
        }
        Ok(removed)
    }

    pub fn set_capacity(&mut self, capacity: usize) -> ChartResult<&mut Self> {
        self.model.set_capacity(capacity)?;
        self.config.capacity = capacity;
        self.invalidate();
        Ok(self)
    }

    pub fn clear(&mut self) -> &mut Self {
        self.model.clear();
        self.invalidate();
        self
    }

    // ---- layout inputs ------------------------------------------------------

    /// Resize notification from the host panel. Repeating the current size is a no-op.
    pub fn on_resize(&mut self, width: u32, height: u32) -> &mut Self {
        let size = PanelSize::new(width, height);
        if size != self.panel {
            debug!(width, height, "panel resized");
            self.panel = size;
            self.invalidate();
        }
        self
    }

    pub fn set_margin(&mut self, margin: f64) -> ChartResult<&mut Self> {
        validate_margin(margin)?;
        self.config.margin = margin;
        self.invalidate();
        Ok(self)
    }

    /// Replace the X ticks; they are converted to the chart's precision.
    pub fn set_x_ticks(&mut self, mut ticks: AxisTickSet) -> &mut Self {
        ticks.set_precision(self.config.precision);
        self.config.x_ticks = ticks;
        self.invalidate();
        self
    }

    pub fn set_y_ticks(&mut self, mut ticks: AxisTickSet) -> &mut Self {
        ticks.set_precision(self.config.precision);
        self.config.y_ticks = ticks;
        self.invalidate();
        self
    }

    /// Switch both axes between integer and fractional ticks.
    pub fn set_precision(&mut self, precision: TickPrecision) -> &mut Self {
        self.config.precision = precision;
        self.config.x_ticks.set_precision(precision);
        self.config.y_ticks.set_precision(precision);
        self.invalidate();
        self
    }

    pub fn set_crop_to_data(&mut self, crop: bool) -> &mut Self {
        self.config.crop_to_data = crop;
        self.invalidate();
        self
    }

    pub fn set_extrema_policy(&mut self, policy: ExtremaPolicy) -> &mut Self {
        self.config.extrema_policy = policy;
        self.model.set_policy(policy);
        self.invalidate();
        self
    }

    // ---- styling pass-through -----------------------------------------------

    pub fn set_theme(&mut self, theme: Theme) -> &mut Self { self.config.theme = theme; self }
    pub fn show_grid(&mut self, show: bool) -> &mut Self { self.config.show_grid = show; self }
    pub fn show_border(&mut self, show: bool) -> &mut Self { self.config.show_border = show; self }
    pub fn show_ticks(&mut self, show: bool) -> &mut Self { self.config.show_ticks = show; self }
    pub fn show_tick_labels(&mut self, show: bool) -> &mut Self { self.config.show_tick_labels = show; self }
    pub fn show_x_ticks(&mut self, show: bool) -> &mut Self { self.config.show_x_ticks = show; self }
    pub fn show_y_ticks(&mut self, show: bool) -> &mut Self { self.config.show_y_ticks = show; self }
    pub fn set_tick_length(&mut self, len: f32) -> &mut Self { self.config.tick_length = len.max(0.0); self }
    pub fn set_line_thickness(&mut self, px: f32) -> &mut Self { self.config.line_thickness = px.max(0.0); self }
    pub fn set_font_size(&mut self, px: f32) -> &mut Self { self.config.font_size = px.max(1.0); self }
    pub fn set_auto_margin(&mut self, on: bool) -> &mut Self { self.config.auto_margin = on; self }

    // ---- layout -------------------------------------------------------------

    /// Current layout, rebuilt first if any input changed since the last call.
    pub fn layout(&mut self) -> ViewportScaler {
        if let Some(scaler) = self.layout {
            return scaler;
        }
        let mode = LayoutMode::from_crop(self.config.crop_to_data);
        let scaler = ViewportScaler::compute(
            self.panel,
            self.config.margin,
            &self.config.x_ticks,
            &self.config.y_ticks,
            &self.model.extrema(),
            mode,
        );
        debug!(
            ?mode,
            width = self.panel.width,
            height = self.panel.height,
            margin = self.config.margin,
            delta_x = scaler.delta_x(),
            delta_y = scaler.delta_y(),
            "recomputed viewport layout"
        );
        self.layout = Some(scaler);
        scaler
    }

    pub fn map_point(&mut self, point: Point) -> PixelPoint {
        self.layout().to_pixel(point)
    }

    /// Fit the margin to the widest tick label. Returns whether the margin changed.
    pub fn verify_margin(&mut self, surface: &dyn DrawSurface) -> bool {
        let Some(label) = self.widest_label(surface) else { return false };
        let required = required_margin(label, self.config.half_tick());
        if !margin_needs_update(self.config.margin, required) {
            return false;
        }
        debug!(from = self.config.margin, to = required, "adjusted margin to fit tick labels");
        self.config.margin = required;
        self.invalidate();
        true
    }

    fn widest_label(&self, surface: &dyn DrawSurface) -> Option<TextExtent> {
        [&self.config.x_ticks, &self.config.y_ticks]
            .into_iter()
            .flat_map(|ticks| (0..ticks.tick_count()).filter_map(move |i| ticks.label(i).ok()))
            .map(|label| surface.measure_text(&label))
            .reduce(|a, b| TextExtent {
                width: a.width.max(b.width),
                height: a.height.max(b.height),
                ascent: a.ascent.max(b.ascent),
            })
    }

    // ---- rendering ----------------------------------------------------------

    /// Paint background, grid, ticks, border and then the series, in that order.
    pub fn render(&mut self, surface: &mut dyn DrawSurface) {
        if self.config.auto_margin && self.config.show_tick_labels {
            self.verify_margin(&*surface);
        }
        let scaler = self.layout();
        let cfg = &self.config;

        let panel = PixelRect::from_ltwh(0.0, 0.0, self.panel.width as f32, self.panel.height as f32);
        surface.fill_rect(panel, cfg.theme.background);

        let x_marks = scaler.x_ticks(&cfg.x_ticks);
        let y_marks = scaler.y_ticks(&cfg.y_ticks);
        let plot = scaler.plot_rect();

        if cfg.show_grid {
            draw_grid(surface, plot, &x_marks, &y_marks, cfg.theme.grid);
        }
        if cfg.show_ticks {
            if cfg.show_x_ticks {
                draw_x_ticks(surface, plot, &x_marks, cfg);
            }
            if cfg.show_y_ticks {
                draw_y_ticks(surface, plot, &y_marks, cfg);
            }
        }
        if cfg.show_border {
            surface.draw_rect(plot, cfg.theme.border, 1.0);
        }

        self.scratch.clear();
        self.scratch.extend(self.model.iter().map(|p| scaler.to_pixel(p)));
        let style = SeriesStyle { color: cfg.theme.series, thickness: cfg.line_thickness };
        self.strategy.render(&self.scratch, &style, surface);
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(surface: &mut dyn DrawSurface, plot: PixelRect, x: &[TickMark], y: &[TickMark], color: Rgba) {
    for m in x {
        surface.draw_line(PixelPoint::new(m.pixel, plot.top), PixelPoint::new(m.pixel, plot.bottom), color, 1.0);
    }
    for m in y {
        surface.draw_line(PixelPoint::new(plot.left, m.pixel), PixelPoint::new(plot.right, m.pixel), color, 1.0);
    }
}

fn draw_x_ticks(surface: &mut dyn DrawSurface, plot: PixelRect, marks: &[TickMark], cfg: &DrawConfig) {
    let half = cfg.half_tick() as f32;
    for m in marks {
        surface.draw_line(
            PixelPoint::new(m.pixel, plot.bottom + half),
            PixelPoint::new(m.pixel, plot.bottom - half),
            cfg.theme.tick,
            1.0,
        );
        if cfg.show_tick_labels {
            let label = format_tick(cfg.x_ticks.precision(), m.value);
            let ext = surface.measure_text(&label);
            // centered under the tick, one and a third ascents below its lower end
            let baseline = plot.bottom + half + ext.ascent / 3.0 + ext.ascent;
            surface.draw_text(&label, PixelPoint::new(m.pixel - ext.width / 2.0, baseline), cfg.theme.tick_label);
        }
    }
}

fn draw_y_ticks(surface: &mut dyn DrawSurface, plot: PixelRect, marks: &[TickMark], cfg: &DrawConfig) {
    let half = cfg.half_tick() as f32;
    for m in marks {
        surface.draw_line(
            PixelPoint::new(plot.left - half, m.pixel),
            PixelPoint::new(plot.left + half, m.pixel),
            cfg.theme.tick,
            1.0,
        );
        if cfg.show_tick_labels {
            let label = format_tick(cfg.y_ticks.precision(), m.value);
            let ext = surface.measure_text(&label);
            let left = plot.left - half - LABEL_GAP_PX as f32 - ext.width;
            surface.draw_text(&label, PixelPoint::new(left, m.pixel + ext.ascent / 2.0), cfg.theme.tick_label);
        }
    }
}
