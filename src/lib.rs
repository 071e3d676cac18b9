//! Parallel matrix multiplication over a fixed pool of worker threads.
//!
//! `matrix-pool` decomposes the product of two matrices into one task per
//! destination cell, loads every task into a bounded queue up front, and
//! drains the queue across a fixed number of worker threads. The queue is
//! closed before the first worker starts, closure is the only "no more work"
//! signal, and the thread scope joining all workers is the completion
//! barrier.
//!
//! # Why no locks
//!
//! Each task owns the exclusive reference to the single destination cell it
//! writes. The producer enumerates every cell exactly once, so the write
//! targets of any two tasks are disjoint and workers share the destination
//! without synchronization beyond the channel itself.
//!
//! # Example
//!
//! ```
//! use matrix_pool::{Matrix, multiply};
//!
//! fn main() -> Result<(), matrix_pool::Error> {
//!     let lhs = Matrix::from_rows("a", vec![vec![1, 2], vec![3, 4]])?;
//!     let mut rhs = Matrix::from_rows("b", vec![vec![5, 6], vec![7, 8]])?;
//!
//!     // The right operand is transposed so its rows line up as
//!     // dot-product partners.
//!     rhs.transpose()?;
//!
//!     let product = multiply(&lhs, &rhs, "x", 4)?;
//!     assert_eq!(product.row(0), &[17, 23]);
//!     assert_eq!(product.row(1), &[39, 53]);
//!     Ok(())
//! }
//! ```

mod error;
mod matrix;
mod multiply;
mod pool;
mod queue;

pub use error::Error;
pub use matrix::Matrix;
pub use multiply::multiply;
pub use pool::{available_workers, run_workers};
pub use queue::{Task, TaskQueue, queue_tasks};
