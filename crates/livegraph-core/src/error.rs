// File: crates/livegraph-core/src/error.rs
// Summary: Contract-violation errors surfaced by the buffer, tick sets and chart setters.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("point index {index} out of range for {len} stored points")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("tick index {index} out of range for {len} ticks")]
    TickIndexOutOfRange { index: usize, len: usize },
    #[error("buffer is empty")]
    Empty,
    #[error("capacity must be positive, got {0}")]
    InvalidCapacity(usize),
    #[error("margin must be finite and non-negative, got {0}")]
    InvalidMargin(f64),
    #[error("tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
}
