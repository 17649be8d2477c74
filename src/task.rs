use std::panic::{self, AssertUnwindSafe};

use crossbeam::channel;

use crate::error::TaskError;
use crate::handle::JoinHandle;

/// A deferred unit of work: the wrapped job plus the producer side of its
/// result slot.
///
/// A task is owned by the queue until dequeued, then by the executing worker.
/// Exactly one of [`run`](Task::run) or [`cancel`](Task::cancel) consumes it,
/// so the slot resolves at most once.
pub(crate) struct Task {
    run: Box<dyn FnOnce(usize) -> Result<(), String> + Send>,
    cancel: Box<dyn FnOnce() + Send>,
}

impl Task {
    /// Wraps a job into a type-erased task and the handle observing its
    /// outcome.
    pub(crate) fn new<F, T>(job: F) -> (Task, JoinHandle<T>)
    where
        F: FnOnce(usize) -> T + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = channel::bounded(1);
        let cancel_tx = tx.clone();

        let run = Box::new(move |worker: usize| {
            match panic::catch_unwind(AssertUnwindSafe(|| job(worker))) {
                Ok(value) => {
                    // The receiver may be gone already (fire-and-forget).
                    let _ = tx.send(Ok(value));
                    Ok(())
                }
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    let _ = tx.send(Err(TaskError::Panicked(message.clone())));
                    Err(message)
                }
            }
        });

        let cancel = Box::new(move || {
            let _ = cancel_tx.send(Err(TaskError::PoolStopped));
        });

        (Task { run, cancel }, JoinHandle::new(rx))
    }

    /// Executes the job on the given worker, resolving the slot with its
    /// value or the caught panic. Returns the panic message, if any, so the
    /// worker loop can report it.
    pub(crate) fn run(self, worker: usize) -> Result<(), String> {
        (self.run)(worker)
    }

    /// Resolves the slot with [`TaskError::PoolStopped`] without executing
    /// the job.
    pub(crate) fn cancel(self) {
        (self.cancel)()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
