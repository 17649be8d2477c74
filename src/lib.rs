#![deny(missing_docs)]

//! A fixed-size worker thread pool with future-like result handles.
//!
//! Jobs are pushed onto a shared FIFO queue and executed by a fixed set of
//! worker threads. Each submission returns a [`JoinHandle`] that later
//! yields the job's return value, the panic it raised, or a notice that the
//! pool stopped before the job could run. Submission never blocks; the
//! queue is unbounded.
//!
//! ```
//! use workpool::ThreadPool;
//!
//! let pool = ThreadPool::new(4).unwrap();
//! let handle = pool.submit(|_worker| 2 + 2);
//! assert_eq!(handle.wait(), Ok(4));
//! pool.stop();
//! ```

mod error;
mod handle;
mod pool;
mod queue;
mod task;

pub use error::{PoolError, Result, TaskError, TaskResult};
pub use handle::JoinHandle;
pub use pool::ThreadPool;
pub use queue::TaskQueue;
