// File: crates/livegraph-core/src/buffer.rs
// Summary: Fixed-capacity, overwrite-on-full ring buffer of (x, y) points.
// Notes:
// - Coordinates live in two parallel fixed arrays indexed modulo capacity, so an
//   insert never allocates. Logical index 0 is always the oldest surviving point.
// - `iter()` borrows the buffer, so the borrow checker already forbids mutation
//   mid-scan; `snapshot()` gives an owned copy for callers that must keep reading
//   while new data streams in.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};
use crate::geometry::Point;

pub const DEFAULT_CAPACITY: usize = 100;

#[derive(Clone, Debug)]
pub struct PointRingBuffer {
    xs: Box<[f64]>,
    ys: Box<[f64]>,
    head: usize,
    len: usize,
}

impl PointRingBuffer {
    pub fn new(capacity: usize) -> ChartResult<Self> {
        if capacity == 0 {
            return Err(ChartError::InvalidCapacity(capacity));
        }
        Ok(Self {
            xs: vec![0.0; capacity].into_boxed_slice(),
            ys: vec![0.0; capacity].into_boxed_slice(),
            head: 0,
            len: 0,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize { self.xs.len() }
    #[inline]
    pub fn len(&self) -> usize { self.len }
    #[inline]
    pub fn is_empty(&self) -> bool { self.len == 0 }
    #[inline]
    pub fn is_full(&self) -> bool { self.len == self.capacity() }

    #[inline]
    fn slot(&self, logical: usize) -> usize {
        (self.head + logical) % self.capacity()
    }

    #[inline]
    fn point_at_slot(&self, slot: usize) -> Point {
        Point::new(self.xs[slot], self.ys[slot])
    }

    /// Append a point. When full, the oldest point is overwritten and `head` advances.
    pub fn insert(&mut self, x: f64, y: f64) {
        let slot = self.slot(self.len);
        self.xs[slot] = x;
        self.ys[slot] = y;
        if self.len < self.capacity() {
            self.len += 1;
        } else {
            self.head = (self.head + 1) % self.capacity();
        }
    }

    pub fn get(&self, index: usize) -> ChartResult<Point> {
        if index >= self.len {
            return Err(ChartError::IndexOutOfRange { index, len: self.len });
        }
        Ok(self.point_at_slot(self.slot(index)))
    }

    pub fn first(&self) -> Option<Point> {
        self.get(0).ok()
    }

    pub fn last(&self) -> Option<Point> {
        self.len.checked_sub(1).and_then(|i| self.get(i).ok())
    }

    pub fn remove_oldest(&mut self) -> ChartResult<Point> {
        if self.len == 0 {
            return Err(ChartError::Empty);
        }
        let point = self.point_at_slot(self.head);
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        trace!(x = point.x, y = point.y, remaining = self.len, "removed oldest point");
        Ok(point)
    }

    pub fn remove_newest(&mut self) -> ChartResult<Point> {
        if self.len == 0 {
            return Err(ChartError::Empty);
        }
        let point = self.point_at_slot(self.slot(self.len - 1));
        self.len -= 1;
        trace!(x = point.x, y = point.y, remaining = self.len, "removed newest point");
        Ok(point)
    }

    /// Remove the first point (oldest to newest) matching `target`.
    ///
    /// A zero `tolerance` compares by IEEE total order, so NaN matches NaN and
    /// `-0.0` does not match `0.0`. A positive tolerance matches when both
    /// coordinates differ by at most `tolerance`. After a removal the survivors are
    /// compacted into a fresh layout starting at slot 0.
    pub fn remove_by_value(&mut self, target: Point, tolerance: f64) -> ChartResult<bool> {
        if !(tolerance.is_finite() && tolerance >= 0.0) {
            return Err(ChartError::InvalidTolerance(tolerance));
        }
        let found = (0..self.len).find(|&i| {
            let p = self.point_at_slot(self.slot(i));
            coord_matches(p.x, target.x, tolerance) && coord_matches(p.y, target.y, tolerance)
        });
        let Some(removed) = found else { return Ok(false) };

        let cap = self.capacity();
        let mut xs = vec![0.0; cap].into_boxed_slice();
        let mut ys = vec![0.0; cap].into_boxed_slice();
        let mut out = 0usize;
        for i in (0..self.len).filter(|&i| i != removed) {
            let slot = self.slot(i);
            xs[out] = self.xs[slot];
            ys[out] = self.ys[slot];
            out += 1;
        }
        self.xs = xs;
        self.ys = ys;
        self.head = 0;
        self.len = out;
        trace!(index = removed, remaining = self.len, "removed point by value");
        Ok(true)
    }

    /// Change capacity, keeping the most recent `min(len, new_capacity)` points in order.
    pub fn resize(&mut self, new_capacity: usize) -> ChartResult<()> {
        if new_capacity == 0 {
            return Err(ChartError::InvalidCapacity(new_capacity));
        }
        let keep = self.len.min(new_capacity);
        let skip = self.len - keep;
        let mut xs = vec![0.0; new_capacity].into_boxed_slice();
        let mut ys = vec![0.0; new_capacity].into_boxed_slice();
        for i in 0..keep {
            let slot = self.slot(skip + i);
            xs[i] = self.xs[slot];
            ys[i] = self.ys[slot];
        }
        debug!(from = self.capacity(), to = new_capacity, kept = keep, dropped = skip, "resized point buffer");
        self.xs = xs;
        self.ys = ys;
        self.head = 0;
        self.len = keep;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Forward cursor over the stored points, oldest first.
    pub fn iter(&self) -> Points<'_> {
        Points { buffer: self, front: 0, back: self.len }
    }

    /// Owned copy of the current contents, oldest first.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { points: self.iter().collect() }
    }
}

impl Default for PointRingBuffer {
    fn default() -> Self {
        Self {
            xs: vec![0.0; DEFAULT_CAPACITY].into_boxed_slice(),
            ys: vec![0.0; DEFAULT_CAPACITY].into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }
}

fn coord_matches(a: f64, b: f64, tolerance: f64) -> bool {
    if tolerance == 0.0 {
        a.total_cmp(&b).is_eq()
    } else {
        (a - b).abs() <= tolerance
    }
}

impl<'a> IntoIterator for &'a PointRingBuffer {
    type Item = Point;
    type IntoIter = Points<'a>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Cursor over a [`PointRingBuffer`]. Clone it to restart from the same position.
#[derive(Clone, Debug)]
pub struct Points<'a> {
    buffer: &'a PointRingBuffer,
    front: usize,
    back: usize,
}

impl Iterator for Points<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.front >= self.back {
            return None;
        }
        let p = self.buffer.point_at_slot(self.buffer.slot(self.front));
        self.front += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Points<'_> {
    fn next_back(&mut self) -> Option<Point> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.buffer.point_at_slot(self.buffer.slot(self.back)))
    }
}

impl ExactSizeIterator for Points<'_> {}
impl FusedIterator for Points<'_> {}

/// Points copied out of a buffer at one instant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    points: Vec<Point>,
}

impl Snapshot {
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn as_slice(&self) -> &[Point] { &self.points }
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Point>> {
        self.points.iter().copied()
    }
}

impl IntoIterator for Snapshot {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;
    fn into_iter(self) -> Self::IntoIter { self.points.into_iter() }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = Point;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Point>>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
