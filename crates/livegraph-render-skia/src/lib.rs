// File: crates/livegraph-render-skia/src/lib.rs
// Summary: Skia drawing adapter; paints a livegraph Chart on CPU raster surfaces and exports PNG or RGBA8.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use livegraph_core::Chart;

pub mod surface;
pub mod text;

pub use surface::{to_skia_color, SkiaSurface};
pub use text::TextShaper;

/// Holds the font collection so repeated frames don't rebuild it.
#[derive(Default)]
pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self { Self::default() }

    pub fn shaper(&self) -> &TextShaper { &self.shaper }

    /// Paint `chart` onto an existing canvas at the chart's current panel size.
    pub fn draw(&self, chart: &mut Chart, canvas: &skia::Canvas) {
        let mut surface = SkiaSurface::new(canvas, &self.shaper, chart.config().font_size);
        chart.render(&mut surface);
    }

    fn raster(&self, chart: &mut Chart, width: u32, height: u32) -> Result<skia::Surface> {
        chart.on_resize(width, height);
        let mut surface = skia::surfaces::raster_n32_premul((width as i32, height as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;
        self.draw(chart, surface.canvas());
        Ok(surface)
    }

    pub fn render_to_png_bytes(&self, chart: &mut Chart, width: u32, height: u32) -> Result<Vec<u8>> {
        let mut surface = self.raster(chart, width, height)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_png(
        &self,
        chart: &mut Chart,
        width: u32,
        height: u32,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(chart, width, height)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote chart png");
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels as `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, chart: &mut Chart, width: u32, height: u32) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.raster(chart, width, height)?;
        let info = skia::ImageInfo::new(
            (width as i32, height as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * height as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("reading back {width}x{height} pixels failed");
        }
        Ok((pixels, width, height, row_bytes))
    }
}

pub fn render_to_png(chart: &mut Chart, width: u32, height: u32, path: impl AsRef<std::path::Path>) -> Result<()> {
    SkiaRenderer::new().render_to_png(chart, width, height, path)
}

pub fn render_to_png_bytes(chart: &mut Chart, width: u32, height: u32) -> Result<Vec<u8>> {
    SkiaRenderer::new().render_to_png_bytes(chart, width, height)
}

pub fn render_to_rgba8(chart: &mut Chart, width: u32, height: u32) -> Result<(Vec<u8>, u32, u32, usize)> {
    SkiaRenderer::new().render_to_rgba8(chart, width, height)
}
