use std::io;
use thiserror::Error;

/// Error type for pool lifecycle operations.
#[derive(Error, Debug)]
pub enum PoolError {
    /// The requested worker count was zero.
    #[error("worker count must be at least 1")]
    NoWorkers,

    /// A worker thread could not be spawned.
    #[error("Failed to spawn worker thread: {0}")]
    Spawn(#[from] io::Error),
}

/// Outcome reported through a task's handle when the task did not produce
/// a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// The task panicked while executing.
    #[error("Task panicked: {0}")]
    Panicked(String),

    /// The pool was stopped before the task could run.
    #[error("Pool stopped before the task could run")]
    PoolStopped,
}

/// Result type alias for pool lifecycle operations.
pub type Result<T> = std::result::Result<T, PoolError>;

/// Result of a finished task: the job's return value or its failure.
pub type TaskResult<T> = std::result::Result<T, TaskError>;
