//! Task descriptors and the bounded, closeable task queue.

use crossbeam_channel::{Receiver, bounded};
use tracing::trace;

use crate::Matrix;

/// One unit of work: the dot product filling a single destination cell.
///
/// A task pairs row `row` of the left operand with row `col` of the
/// pre-transposed right operand and holds the exclusive reference to the one
/// cell it may write. Tasks are built once by [`queue_tasks`], delivered to
/// exactly one worker by the channel, and consumed by [`Task::run`].
pub struct Task<'m> {
    row: usize,
    col: usize,
    lhs: &'m [i64],
    rhs: &'m [i64],
    cell: &'m mut i64,
}

impl Task<'_> {
    /// Coordinates of the destination cell this task fills.
    pub fn coordinates(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Computes the dot product of the two operand rows and writes it into
    /// the destination cell.
    ///
    /// The iteration bound is the operand length, not the destination
    /// dimension, so rectangular intermediates multiply correctly. Equal
    /// operand lengths are guaranteed by the validation in
    /// [`multiply`](crate::multiply) before any task exists.
    pub fn run(self) {
        debug_assert_eq!(self.lhs.len(), self.rhs.len());
        let product: i64 = self.lhs.iter().zip(self.rhs).map(|(a, b)| a * b).sum();
        trace!(row = self.row, col = self.col, product, "computed cell");
        *self.cell = product;
    }
}

/// A fully-populated, already-closed queue of tasks for one multiplication.
///
/// The sole sender is dropped before the queue is handed to the caller, so
/// no task can be enqueued after construction; workers observe closure once
/// every task has been delivered.
pub struct TaskQueue<'m> {
    rx: Receiver<Task<'m>>,
}

impl<'m> TaskQueue<'m> {
    /// Number of tasks currently waiting in the queue.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    pub(crate) fn into_receiver(self) -> Receiver<Task<'m>> {
        self.rx
    }
}

/// Enumerates every destination cell and queues one task per cell.
///
/// The channel capacity is exactly `rows(lhs) * rows(rhs)`, population
/// completes synchronously before this function returns, and the queue comes
/// back closed. `rhs` must already be arranged so that its rows are the
/// dot-product partners (the logical right operand transposed); operand
/// widths are validated by the caller.
pub fn queue_tasks<'m>(lhs: &'m Matrix, rhs: &'m Matrix, dest: &'m mut Matrix) -> TaskQueue<'m> {
    let (tx, rx) = bounded(dest.rows() * dest.cols());

    for (row, col, cell) in dest.cells_mut() {
        let task = Task {
            row,
            col,
            lhs: lhs.row(row),
            rhs: rhs.row(col),
            cell,
        };
        // The receiver is alive and the channel is sized for every task, so
        // the send cannot fail or block.
        tx.send(task).expect("receiver held until population completes");
    }

    drop(tx); // close the queue: no more work
    TaskQueue { rx }
}
