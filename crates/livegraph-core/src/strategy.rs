// File: crates/livegraph-core/src/strategy.rs
// Summary: Render strategies; how a mapped point sequence turns into surface primitives.

use crate::geometry::{PixelPoint, PixelRect};
use crate::surface::DrawSurface;
use crate::theme::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    pub color: Rgba,
    pub thickness: f32,
}

/// Draws one series. Points arrive already in pixel space, oldest first.
pub trait RenderStrategy {
    fn id(&self) -> &'static str;
    fn render(&self, points: &[PixelPoint], style: &SeriesStyle, surface: &mut dyn DrawSurface);
}

/// Polyline through consecutive points.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineStrategy;

impl RenderStrategy for LineStrategy {
    fn id(&self) -> &'static str { "line" }

    fn render(&self, points: &[PixelPoint], style: &SeriesStyle, surface: &mut dyn DrawSurface) {
        for pair in points.windows(2) {
            surface.draw_line(pair[0], pair[1], style.color, style.thickness);
        }
    }
}

/// Square marker centered on every point.
#[derive(Clone, Copy, Debug)]
pub struct ScatterStrategy {
    pub size: f32,
}

impl Default for ScatterStrategy {
    fn default() -> Self { Self { size: 4.0 } }
}

impl RenderStrategy for ScatterStrategy {
    fn id(&self) -> &'static str { "scatter" }

    fn render(&self, points: &[PixelPoint], style: &SeriesStyle, surface: &mut dyn DrawSurface) {
        let half = self.size.max(style.thickness) * 0.5;
        for p in points {
            let rect = PixelRect::from_ltrb(p.x - half, p.y - half, p.x + half, p.y + half);
            surface.fill_rect(rect, style.color);
        }
    }
}
