// File: crates/livegraph-core/src/model.rs
// Summary: ChartDataModel; the only owner of the point buffer, tracking running extrema on insert.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::buffer::{PointRingBuffer, Points, Snapshot};
use crate::error::ChartResult;
use crate::geometry::Point;

/// Observed min/max per axis. Starts at (+inf, -inf, +inf, -inf) so the first
/// point sets both bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extrema {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Extrema {
    pub const EMPTY: Self = Self {
        x_min: f64::INFINITY,
        x_max: f64::NEG_INFINITY,
        y_min: f64::INFINITY,
        y_max: f64::NEG_INFINITY,
    };

    /// Widen to include `(x, y)`. NaN coordinates never compare, so they leave the bounds alone.
    pub fn include(&mut self, x: f64, y: f64) {
        if x < self.x_min { self.x_min = x; }
        if x > self.x_max { self.x_max = x; }
        if y < self.y_min { self.y_min = y; }
        if y > self.y_max { self.y_max = y; }
    }

    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut e = Self::EMPTY;
        for p in points {
            e.include(p.x, p.y);
        }
        e
    }

    pub fn has_x(&self) -> bool { self.x_min.is_finite() && self.x_max.is_finite() }
    pub fn has_y(&self) -> bool { self.y_min.is_finite() && self.y_max.is_finite() }
    pub fn x_span(&self) -> f64 { self.x_max - self.x_min }
    pub fn y_span(&self) -> f64 { self.y_max - self.y_min }
}

impl Default for Extrema {
    fn default() -> Self { Self::EMPTY }
}

/// Which extrema the model reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtremaPolicy {
    /// High-water marks over every point ever inserted, including evicted ones.
    #[default]
    AllTime,
    /// Recomputed from the points currently held in the buffer.
    Live,
}

#[derive(Clone, Debug, Default)]
pub struct ChartDataModel {
    buffer: PointRingBuffer,
    all_time: Extrema,
    policy: ExtremaPolicy,
}

impl ChartDataModel {
    pub fn new(capacity: usize) -> ChartResult<Self> {
        Ok(Self { buffer: PointRingBuffer::new(capacity)?, all_time: Extrema::EMPTY, policy: ExtremaPolicy::AllTime })
    }

    pub fn with_policy(mut self, policy: ExtremaPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ExtremaPolicy { self.policy }
    pub fn set_policy(&mut self, policy: ExtremaPolicy) { self.policy = policy; }

    pub fn insert(&mut self, x: f64, y: f64) {
        self.all_time.include(x, y);
        self.buffer.insert(x, y);
        trace!(x, y, size = self.buffer.len(), "inserted point");
    }

    pub fn insert_point(&mut self, point: Point) {
        self.insert(point.x, point.y);
    }

    pub fn extend<I>(&mut self, points: I)
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        for p in points {
            self.insert_point(p.into());
        }
    }

    pub fn extrema(&self) -> Extrema {
        match self.policy {
            ExtremaPolicy::AllTime => self.all_time,
            ExtremaPolicy::Live => Extrema::from_points(self.buffer.iter()),
        }
    }

    pub fn data_size(&self) -> usize { self.buffer.len() }
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
    pub fn capacity(&self) -> usize { self.buffer.capacity() }

    pub fn set_capacity(&mut self, capacity: usize) -> ChartResult<()> {
        self.buffer.resize(capacity)
    }

    pub fn get(&self, index: usize) -> ChartResult<Point> { self.buffer.get(index) }
    pub fn iter(&self) -> Points<'_> { self.buffer.iter() }
    pub fn snapshot(&self) -> Snapshot { self.buffer.snapshot() }

    pub fn remove_oldest(&mut self) -> ChartResult<Point> { self.buffer.remove_oldest() }
    pub fn remove_newest(&mut self) -> ChartResult<Point> { self.buffer.remove_newest() }

    pub fn remove_point(&mut self, point: Point, tolerance: f64) -> ChartResult<bool> {
        self.buffer.remove_by_value(point, tolerance)
    }

    /// Drop all points and forget the running extrema.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.all_time = Extrema::EMPTY;
        debug!("cleared chart data");
    }
}
