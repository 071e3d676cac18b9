//! One multiplication stage: validate, queue, drain, return.

use tracing::debug;

use crate::queue::queue_tasks;
use crate::{Error, Matrix, pool};

/// Multiplies `lhs` by the pre-transposed `rhs`, draining one task per
/// destination cell across `workers` worker threads.
///
/// `rhs` must already be arranged so that its rows are the columns of the
/// logical right operand; the product of an `m x n` `lhs` and a `p x n` `rhs`
/// is then `m x p`. All preconditions are checked before any task is created:
/// a width mismatch or an empty pool is reported up front rather than
/// producing garbage mid-flight.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] when the operand widths differ and
/// [`Error::NoWorkers`] when `workers` is zero.
pub fn multiply(
    lhs: &Matrix,
    rhs: &Matrix,
    name: impl Into<String>,
    workers: usize,
) -> Result<Matrix, Error> {
    if workers == 0 {
        return Err(Error::NoWorkers);
    }
    if lhs.cols() != rhs.cols() {
        return Err(Error::DimensionMismatch(
            lhs.rows(),
            lhs.cols(),
            rhs.rows(),
            rhs.cols(),
        ));
    }

    let mut dest = Matrix::zeroed(lhs.rows(), rhs.rows(), name)?;
    let queue = queue_tasks(lhs, rhs, &mut dest);
    debug!(
        lhs = lhs.name(),
        rhs = rhs.name(),
        tasks = queue.len(),
        workers,
        "starting multiplication"
    );
    pool::run_workers(queue, workers)?;

    Ok(dest)
}
