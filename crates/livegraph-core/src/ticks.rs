// File: crates/livegraph-core/src/ticks.rs
// Summary: Per-axis tick values stored in exactly one of integer or fractional precision.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickPrecision {
    #[default]
    Integer,
    Fractional,
}

/// The active representation. Holding one variant at a time makes the
/// "exactly one array is live" rule structural.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "precision", content = "values", rename_all = "lowercase")]
pub enum TickValues {
    Integer(Vec<i64>),
    Fractional(Vec<f64>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxisTickSet {
    values: TickValues,
}

impl Default for AxisTickSet {
    fn default() -> Self {
        Self { values: TickValues::Integer(Vec::new()) }
    }
}

impl AxisTickSet {
    pub fn new() -> Self { Self::default() }

    pub fn from_integers(values: impl Into<Vec<i64>>) -> Self {
        Self { values: TickValues::Integer(values.into()) }
    }

    pub fn from_fractionals(values: impl Into<Vec<f64>>) -> Self {
        Self { values: TickValues::Fractional(values.into()) }
    }

    /// `count` fractional ticks from `start` to `end` inclusive.
    pub fn evenly_spaced(start: f64, end: f64, count: usize) -> Self {
        Self::from_fractionals(linspace(start, end, count))
    }

    pub fn precision(&self) -> TickPrecision {
        match self.values {
            TickValues::Integer(_) => TickPrecision::Integer,
            TickValues::Fractional(_) => TickPrecision::Fractional,
        }
    }

    pub fn as_values(&self) -> &TickValues { &self.values }

    pub fn as_integers(&self) -> Option<&[i64]> {
        match &self.values {
            TickValues::Integer(v) => Some(v),
            TickValues::Fractional(_) => None,
        }
    }

    pub fn as_fractionals(&self) -> Option<&[f64]> {
        match &self.values {
            TickValues::Fractional(v) => Some(v),
            TickValues::Integer(_) => None,
        }
    }

    /// Replace the ticks; widened when the set is in fractional precision.
    pub fn set_integers(&mut self, values: impl Into<Vec<i64>>) -> &mut Self {
        let values = values.into();
        self.values = match self.precision() {
            TickPrecision::Integer => TickValues::Integer(values),
            TickPrecision::Fractional => TickValues::Fractional(widen(&values)),
        };
        self
    }

    /// Replace the ticks; truncated toward zero when the set is in integer precision.
    pub fn set_fractionals(&mut self, values: impl Into<Vec<f64>>) -> &mut Self {
        let values = values.into();
        self.values = match self.precision() {
            TickPrecision::Integer => TickValues::Integer(truncate(&values)),
            TickPrecision::Fractional => TickValues::Fractional(values),
        };
        self
    }

    /// Switch representation, converting the whole array.
    ///
    /// Integer to fractional is lossless. Fractional to integer truncates toward
    /// zero (2.9 becomes 2, -2.9 becomes -2); it does not round.
    pub fn set_precision(&mut self, precision: TickPrecision) -> &mut Self {
        if precision == self.precision() {
            return self;
        }
        self.values = match &self.values {
            TickValues::Integer(v) => TickValues::Fractional(widen(v)),
            TickValues::Fractional(v) => TickValues::Integer(truncate(v)),
        };
        debug!(?precision, count = self.tick_count(), "converted tick precision");
        self
    }

    pub fn tick_count(&self) -> usize {
        match &self.values {
            TickValues::Integer(v) => v.len(),
            TickValues::Fractional(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.tick_count() == 0 }

    pub fn value_at(&self, index: usize) -> ChartResult<f64> {
        self.raw(index)
            .ok_or(ChartError::TickIndexOutOfRange { index, len: self.tick_count() })
    }

    fn raw(&self, index: usize) -> Option<f64> {
        match &self.values {
            TickValues::Integer(v) => v.get(index).map(|&t| t as f64),
            TickValues::Fractional(v) => v.get(index).copied(),
        }
    }

    pub fn iter(&self) -> TickIter<'_> {
        TickIter { set: self, index: 0 }
    }

    /// Copy of ticks `range.start..range.end`; an out-of-bounds or empty range gives an empty set.
    pub fn slice(&self, range: Range<usize>) -> Self {
        let valid = range.start < range.end && range.end <= self.tick_count();
        let values = match &self.values {
            TickValues::Integer(v) => {
                TickValues::Integer(if valid { v[range].to_vec() } else { Vec::new() })
            }
            TickValues::Fractional(v) => {
                TickValues::Fractional(if valid { v[range].to_vec() } else { Vec::new() })
            }
        };
        Self { values }
    }

    /// Label text for tick `index`: plain integers, or two decimals in fractional precision.
    pub fn label(&self, index: usize) -> ChartResult<String> {
        let value = self.value_at(index)?;
        Ok(format_tick(self.precision(), value))
    }
}

pub fn format_tick(precision: TickPrecision, value: f64) -> String {
    match precision {
        TickPrecision::Integer => format!("{}", value as i64),
        TickPrecision::Fractional => format!("{value:.2}"),
    }
}

pub struct TickIter<'a> {
    set: &'a AxisTickSet,
    index: usize,
}

impl Iterator for TickIter<'_> {
    type Item = f64;
    fn next(&mut self) -> Option<f64> {
        let v = self.set.raw(self.index)?;
        self.index += 1;
        Some(v)
    }
}

fn widen(values: &[i64]) -> Vec<f64> {
    values.iter().map(|&v| v as f64).collect()
}

// `as` truncates toward zero and saturates out-of-range values (NaN becomes 0).
fn truncate(values: &[f64]) -> Vec<i64> {
    values.iter().map(|&v| v as i64).collect()
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
            // accumulated rounding can overshoot the end by an ulp
            out[steps - 1] = end;
            out
        }
    }
}
