// File: crates/livegraph-render-skia/src/text.rs
// Summary: Tick label shaping with Skia textlayout; measures runs and paints them on a baseline.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

use livegraph_core::TextExtent;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // tick labels are numeric; tabular families keep columns aligned
        ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure(&self, text: &str, size: f32) -> TextExtent {
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        TextExtent {
            width: p.longest_line(),
            height: p.height(),
            ascent: p.alphabetic_baseline(),
        }
    }

    /// Paint `text` with its baseline starting at `(x, baseline)`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, baseline: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        // paragraphs paint from their top-left corner
        p.paint(canvas, (x, baseline - p.alphabetic_baseline()));
    }
}
