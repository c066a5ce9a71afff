// File: crates/livegraph-core/src/scale.rs
// Summary: Viewport scaling; pixels-per-unit deltas, data/pixel mapping, tick placement, margin sizing.

use serde::{Deserialize, Serialize};

use crate::geometry::{PanelSize, PixelPoint, PixelRect, Point};
use crate::model::Extrema;
use crate::surface::TextExtent;
use crate::ticks::AxisTickSet;

/// Smallest visible span in crop mode, so a flat series never divides by zero.
pub const CROP_SPAN_FLOOR: f64 = 1e-10;
/// Margin changes at or below this many pixels are treated as rounding noise.
pub const MARGIN_TOLERANCE_PX: f64 = 1.0;
/// Relative tolerance for crop-mode tick filtering.
const CONTAINS_SLACK: f64 = 4.0 * f64::EPSILON;
/// Gap between a tick mark and its label.
pub const LABEL_GAP_PX: f64 = 2.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// Span covers `tick_count - 1` tick intervals starting at data value 0.
    #[default]
    FixedRange,
    /// Span covers the observed data extent.
    CropToData,
}

impl LayoutMode {
    pub fn from_crop(crop_to_data: bool) -> Self {
        if crop_to_data { Self::CropToData } else { Self::FixedRange }
    }
}

/// Scale for one axis: `offset(v) = (v - origin) * delta` pixels from the margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    pub delta: f64,
    pub origin: f64,
    pub visible_span: f64,
    pub cropped: bool,
}

impl AxisScale {
    fn fixed(usable_px: f64, tick_count: usize) -> Self {
        let intervals = tick_count.saturating_sub(1).max(1) as f64;
        Self { delta: usable_px / intervals, origin: 0.0, visible_span: intervals, cropped: false }
    }

    fn cropped(usable_px: f64, min: f64, max: f64) -> Self {
        let span = (max - min).max(CROP_SPAN_FLOOR);
        Self { delta: usable_px / span, origin: min, visible_span: span, cropped: true }
    }

    fn build(mode: LayoutMode, usable_px: f64, tick_count: usize, bounds: Option<(f64, f64)>) -> Self {
        match (mode, bounds) {
            (LayoutMode::CropToData, Some((min, max))) => Self::cropped(usable_px, min, max),
            // crop mode before any data arrives falls back to the nominal tick range
            _ => Self::fixed(usable_px, tick_count),
        }
    }

    #[inline]
    pub fn offset(&self, value: f64) -> f64 {
        (value - self.origin) * self.delta
    }

    #[inline]
    pub fn value_at(&self, offset_px: f64) -> f64 {
        if self.delta == 0.0 { self.origin } else { self.origin + offset_px / self.delta }
    }

    /// Inclusive range test, with a few ulps of slack at both ends so a tick sitting
    /// exactly on the data extent survives `origin + span` rounding.
    pub fn contains(&self, value: f64) -> bool {
        let slack = (self.origin.abs() + self.visible_span.abs()) * CONTAINS_SLACK;
        value >= self.origin - slack && value <= self.origin + self.visible_span + slack
    }

    /// Pixel offset of tick `index` holding `value`, or `None` when crop mode filters it out.
    fn tick_offset(&self, index: usize, value: f64) -> Option<f64> {
        if !self.cropped {
            Some(self.delta * index as f64)
        } else if self.contains(value) {
            Some(self.offset(value))
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMark {
    pub index: usize,
    pub value: f64,
    /// Pixel coordinate along the axis (x for the X axis, y for the Y axis).
    pub pixel: f32,
}

/// Layout for one pass. Built from the current panel, margin, ticks and extrema;
/// the chart rebuilds it whenever any of those change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportScaler {
    panel: PanelSize,
    margin: f64,
    mode: LayoutMode,
    x: AxisScale,
    y: AxisScale,
}

impl ViewportScaler {
    pub fn compute(
        panel: PanelSize,
        margin: f64,
        x_ticks: &AxisTickSet,
        y_ticks: &AxisTickSet,
        extrema: &Extrema,
        mode: LayoutMode,
    ) -> Self {
        let usable_w = (panel.width as f64 - 2.0 * margin).max(0.0);
        let usable_h = (panel.height as f64 - 2.0 * margin).max(0.0);
        let x_bounds = extrema.has_x().then_some((extrema.x_min, extrema.x_max));
        let y_bounds = extrema.has_y().then_some((extrema.y_min, extrema.y_max));
        Self {
            panel,
            margin,
            mode,
            x: AxisScale::build(mode, usable_w, x_ticks.tick_count(), x_bounds),
            y: AxisScale::build(mode, usable_h, y_ticks.tick_count(), y_bounds),
        }
    }

    pub fn panel(&self) -> PanelSize { self.panel }
    pub fn margin(&self) -> f64 { self.margin }
    pub fn mode(&self) -> LayoutMode { self.mode }
    pub fn x_axis(&self) -> &AxisScale { &self.x }
    pub fn y_axis(&self) -> &AxisScale { &self.y }
    pub fn delta_x(&self) -> f64 { self.x.delta }
    pub fn delta_y(&self) -> f64 { self.y.delta }

    #[inline]
    pub fn to_pixel(&self, point: Point) -> PixelPoint {
        let px = self.margin + self.x.offset(point.x);
        let py = self.panel.height as f64 - (self.margin + self.y.offset(point.y));
        PixelPoint::new(px as f32, py as f32)
    }

    pub fn to_data(&self, pixel: PixelPoint) -> Point {
        let dx = pixel.x as f64 - self.margin;
        let dy = self.panel.height as f64 - self.margin - pixel.y as f64;
        Point::new(self.x.value_at(dx), self.y.value_at(dy))
    }

    /// Rectangle inside the margin. Degenerates to a line when the margin eats the panel.
    pub fn plot_rect(&self) -> PixelRect {
        let w = self.panel.width as f32;
        let h = self.panel.height as f32;
        let m = self.margin as f32;
        PixelRect::from_ltrb(m.min(w), m.min(h), (w - m).max(m.min(w)), (h - m).max(m.min(h)))
    }

    pub fn x_ticks(&self, ticks: &AxisTickSet) -> Vec<TickMark> {
        ticks
            .iter()
            .enumerate()
            .filter_map(|(index, value)| {
                let off = self.x.tick_offset(index, value)?;
                Some(TickMark { index, value, pixel: (self.margin + off) as f32 })
            })
            .collect()
    }

    pub fn y_ticks(&self, ticks: &AxisTickSet) -> Vec<TickMark> {
        let h = self.panel.height as f64;
        ticks
            .iter()
            .enumerate()
            .filter_map(|(index, value)| {
                let off = self.y.tick_offset(index, value)?;
                Some(TickMark { index, value, pixel: (h - (self.margin + off)) as f32 })
            })
            .collect()
    }
}

/// Margin needed to fit the widest tick label beside the Y axis and a label row
/// under the X axis.
pub fn required_margin(label: TextExtent, half_tick: f64) -> f64 {
    let width_driven = label.width as f64 + half_tick + LABEL_GAP_PX;
    let height_driven = half_tick + label.ascent as f64 / 3.0 + label.height as f64 + LABEL_GAP_PX;
    width_driven.max(height_driven).ceil()
}

pub fn margin_needs_update(current: f64, required: f64) -> bool {
    (current - required).abs() > MARGIN_TOLERANCE_PX
}
