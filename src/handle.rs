use std::fmt;
use std::time::Duration;

use crossbeam::channel::{Receiver, RecvTimeoutError};

use crate::error::{TaskError, TaskResult};

/// Observer side of a task's one-shot result slot.
///
/// Returned by [`ThreadPool::submit`](crate::ThreadPool::submit). A handle
/// can be polled, waited on, or simply dropped without ever being inspected;
/// an unobserved failure is never reported anywhere else.
pub struct JoinHandle<T> {
    receiver: Receiver<TaskResult<T>>,
}

impl<T> JoinHandle<T> {
    pub(crate) fn new(receiver: Receiver<TaskResult<T>>) -> Self {
        JoinHandle { receiver }
    }

    /// Whether the task has resolved, without blocking.
    pub fn is_ready(&self) -> bool {
        !self.receiver.is_empty()
    }

    /// Blocks until the task resolves and returns its outcome.
    pub fn wait(self) -> TaskResult<T> {
        // A disconnected slot means the producer side was dropped without
        // resolving; report it like a task discarded at shutdown.
        self.receiver.recv().unwrap_or(Err(TaskError::PoolStopped))
    }

    /// Waits up to `timeout` for the task to resolve.
    ///
    /// On timeout the handle is handed back so the caller can keep polling
    /// or fall back to a blocking [`wait`](JoinHandle::wait).
    pub fn wait_timeout(self, timeout: Duration) -> Result<TaskResult<T>, JoinHandle<T>> {
        match self.receiver.recv_timeout(timeout) {
            Ok(outcome) => Ok(outcome),
            Err(RecvTimeoutError::Timeout) => Err(self),
            Err(RecvTimeoutError::Disconnected) => Ok(Err(TaskError::PoolStopped)),
        }
    }
}

impl<T> fmt::Debug for JoinHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoinHandle")
            .field("ready", &self.is_ready())
            .finish()
    }
}
