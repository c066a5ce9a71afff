// File: crates/livegraph-render-skia/src/surface.rs
// Summary: DrawSurface over a borrowed Skia canvas.

use skia_safe as skia;

use livegraph_core::{DrawSurface, PixelPoint, PixelRect, Rgba, TextExtent};

use crate::text::TextShaper;

pub fn to_skia_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_skia_rect(r: PixelRect) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
    font_size: f32,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper, font_size: f32) -> Self {
        Self { canvas, shaper, font_size }
    }

    fn stroke(color: Rgba, width: f32) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia_color(color));
        paint.set_anti_alias(true);
        paint.set_style(skia::PaintStyle::Stroke);
        paint.set_stroke_width(width);
        paint
    }
}

impl DrawSurface for SkiaSurface<'_> {
    fn draw_line(&mut self, from: PixelPoint, to: PixelPoint, color: Rgba, width: f32) {
        let paint = Self::stroke(color, width);
        self.canvas.draw_line((from.x, from.y), (to.x, to.y), &paint);
    }

    fn draw_rect(&mut self, rect: PixelRect, color: Rgba, width: f32) {
        let paint = Self::stroke(color, width);
        self.canvas.draw_rect(to_skia_rect(rect), &paint);
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgba) {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia_color(color));
        paint.set_anti_alias(true);
        paint.set_style(skia::PaintStyle::Fill);
        self.canvas.draw_rect(to_skia_rect(rect), &paint);
    }

    fn draw_text(&mut self, text: &str, origin: PixelPoint, color: Rgba) {
        self.shaper.draw(self.canvas, text, origin.x, origin.y, self.font_size, to_skia_color(color));
    }

    fn measure_text(&self, text: &str) -> TextExtent {
        self.shaper.measure(text, self.font_size)
    }
}
