//! The fixed-size worker pool and its completion barrier.

use std::thread;

use tracing::trace;

use crate::Error;
use crate::queue::TaskQueue;

/// Number of workers matching the available hardware parallelism.
pub fn available_workers() -> usize {
    thread::available_parallelism().map_or(1, usize::from)
}

/// Drains the queue across `workers` concurrent consumers and blocks until
/// every one of them has finished.
///
/// Each worker clones the receiver and loops until the channel is closed and
/// empty; the channel hands every task to exactly one worker. No ordering is
/// guaranteed across workers, only that after this function returns every
/// queued task has run. The enclosing thread scope joins all workers before
/// returning, including when one of them panics, so the caller never reads a
/// partially-written destination.
pub fn run_workers(queue: TaskQueue<'_>, workers: usize) -> Result<(), Error> {
    if workers == 0 {
        return Err(Error::NoWorkers);
    }

    let rx = queue.into_receiver();
    thread::scope(|scope| {
        for worker in 0..workers {
            let rx = rx.clone();
            scope.spawn(move || {
                let mut computed = 0usize;
                for task in rx {
                    task.run();
                    computed += 1;
                }
                trace!(worker, computed, "queue drained");
            });
        }
    });

    Ok(())
}
