// File: crates/livegraph-core/src/lib.rs
// Summary: Core library entry point; bounded point storage, tick sets, viewport scaling and chart rendering.

pub mod buffer;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod model;
pub mod scale;
pub mod strategy;
pub mod surface;
pub mod theme;
pub mod ticks;

pub use buffer::{PointRingBuffer, Points, Snapshot, DEFAULT_CAPACITY};
pub use chart::Chart;
pub use config::{ConfigError, DrawConfig};
pub use error::{ChartError, ChartResult};
pub use geometry::{PanelSize, PixelPoint, PixelRect, Point};
pub use model::{ChartDataModel, Extrema, ExtremaPolicy};
pub use scale::{AxisScale, LayoutMode, TickMark, ViewportScaler};
pub use strategy::{LineStrategy, RenderStrategy, ScatterStrategy, SeriesStyle};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface, TextExtent};
pub use theme::{Rgba, Theme};
pub use ticks::{AxisTickSet, TickPrecision, TickValues};
