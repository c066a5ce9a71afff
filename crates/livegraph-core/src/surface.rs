// File: crates/livegraph-core/src/surface.rs
// Summary: The drawing-surface capability the chart paints through, plus a recording implementation.

use crate::geometry::{PixelPoint, PixelRect};
use crate::theme::Rgba;

/// Measured size of a text run in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
    /// Distance from the top of the run to its baseline.
    pub ascent: f32,
}

/// Backend primitives. Implementors own antialiasing, fonts and pixel formats;
/// the chart only hands them already-mapped pixel coordinates.
pub trait DrawSurface {
    fn draw_line(&mut self, from: PixelPoint, to: PixelPoint, color: Rgba, width: f32);
    fn draw_rect(&mut self, rect: PixelRect, color: Rgba, width: f32);
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba);
    /// Draw `text` with its baseline starting at `origin`.
    fn draw_text(&mut self, text: &str, origin: PixelPoint, color: Rgba);
    fn measure_text(&self, text: &str) -> TextExtent;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line { from: PixelPoint, to: PixelPoint, color: Rgba, width: f32 },
    Rect { rect: PixelRect, color: Rgba, width: f32 },
    FillRect { rect: PixelRect, color: Rgba },
    Text { text: String, origin: PixelPoint, color: Rgba },
}

/// Surface that keeps every primitive it is given. Text is measured with a fixed
/// per-character advance so layouts are reproducible without a font stack.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    char_width: f32,
    line_height: f32,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self { commands: Vec::new(), char_width: 7.0, line_height: 12.0 }
    }
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    pub fn with_metrics(char_width: f32, line_height: f32) -> Self {
        Self { commands: Vec::new(), char_width, line_height }
    }

    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    pub fn clear(&mut self) { self.commands.clear(); }

    pub fn lines(&self) -> impl Iterator<Item = (PixelPoint, PixelPoint)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_line(&mut self, from: PixelPoint, to: PixelPoint, color: Rgba, width: f32) {
        self.commands.push(DrawCommand::Line { from, to, color, width });
    }
    fn draw_rect(&mut self, rect: PixelRect, color: Rgba, width: f32) {
        self.commands.push(DrawCommand::Rect { rect, color, width });
    }
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }
    fn draw_text(&mut self, text: &str, origin: PixelPoint, color: Rgba) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), origin, color });
    }
    fn measure_text(&self, text: &str) -> TextExtent {
        TextExtent {
            width: text.chars().count() as f32 * self.char_width,
            height: self.line_height,
            ascent: self.line_height * 0.75,
        }
    }
}
