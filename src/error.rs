//! Error types for matrix-pool operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid numeric argument: {0}")]
    Parse(#[from] std::num::ParseIntError),

    #[error("matrix dimension must be at least 1")]
    ZeroDimension,

    #[error("row {0} has {2} columns, expected {1}")]
    RaggedRow(usize, usize, usize),

    #[error("cannot transpose a {0}x{1} matrix in place")]
    NotSquare(usize, usize),

    #[error("matrix dimension mismatch: left is {0}x{1}, right is {2}x{3}")]
    DimensionMismatch(usize, usize, usize, usize),

    #[error("worker pool must have at least one worker")]
    NoWorkers,
}
