use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use log::{debug, error};
use parking_lot::Mutex;

use crate::error::{PoolError, Result};
use crate::handle::JoinHandle;
use crate::queue::TaskQueue;
use crate::task::Task;

/// A fixed-size pool of worker threads draining a shared FIFO queue.
///
/// Jobs are submitted with [`submit`](ThreadPool::submit) and executed by
/// whichever worker claims them first; each submission returns a
/// [`JoinHandle`] that resolves with the job's return value, the panic it
/// raised, or [`TaskError::PoolStopped`](crate::TaskError::PoolStopped) if
/// the pool shut down before the job ran.
///
/// Dropping the pool invokes [`stop`](ThreadPool::stop), so no worker thread
/// outlives the pool value.
pub struct ThreadPool {
    shared: Arc<Shared>,
    workers: Mutex<Vec<thread::JoinHandle<()>>>,
    worker_count: usize,
}

/// State shared between the pool owner and its worker threads.
struct Shared {
    queue: TaskQueue<Task>,
    stop: AtomicBool,
}

impl ThreadPool {
    /// Creates a pool with exactly `workers` threads, identified by ids in
    /// `[0, workers)`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::NoWorkers`] when `workers` is zero, and
    /// [`PoolError::Spawn`] when a worker thread cannot be created. On a
    /// spawn failure the workers started so far are stopped before the
    /// error is returned.
    pub fn new(workers: usize) -> Result<ThreadPool> {
        if workers == 0 {
            return Err(PoolError::NoWorkers);
        }

        let shared = Arc::new(Shared {
            queue: TaskQueue::new(),
            stop: AtomicBool::new(false),
        });

        let mut handles = Vec::with_capacity(workers);
        for id in 0..workers {
            match spawn_worker(id, Arc::clone(&shared)) {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    let partial = ThreadPool {
                        shared,
                        workers: Mutex::new(handles),
                        worker_count: id,
                    };
                    partial.stop();
                    return Err(PoolError::Spawn(err));
                }
            }
        }

        Ok(ThreadPool {
            shared,
            workers: Mutex::new(handles),
            worker_count: workers,
        })
    }

    /// Creates a pool with one worker per logical CPU.
    pub fn with_default_size() -> Result<ThreadPool> {
        Self::new(num_cpus::get())
    }

    /// Number of worker threads the pool was created with.
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Number of tasks submitted but not yet claimed by a worker.
    ///
    /// A snapshot; the value may be stale as soon as it is returned.
    pub fn queued_tasks(&self) -> usize {
        self.shared.queue.len()
    }

    /// Submits a job for execution and returns the handle observing its
    /// outcome.
    ///
    /// The job receives the id of the worker executing it. Submission never
    /// blocks and may be called concurrently from any number of threads. A
    /// job submitted after [`stop`](ThreadPool::stop) has begun is not
    /// enqueued; its handle resolves immediately with
    /// [`TaskError::PoolStopped`](crate::TaskError::PoolStopped).
    pub fn submit<F, T>(&self, job: F) -> JoinHandle<T>
    where
        F: FnOnce(usize) -> T + Send + 'static,
        T: Send + 'static,
    {
        let (task, handle) = Task::new(job);

        if self.shared.stop.load(Ordering::Acquire) {
            task.cancel();
            return handle;
        }

        self.shared.queue.push(task);

        // A concurrent stop may have drained the queue between the flag
        // check and the push. Re-checking and draining here guarantees the
        // task cannot sit in the queue with every worker already gone.
        if self.shared.stop.load(Ordering::Acquire) {
            for task in self.shared.queue.clear() {
                task.cancel();
            }
        }

        handle
    }

    /// Stops the pool: signals every worker, joins them, and cancels any
    /// task still in the queue so its handle resolves with
    /// [`TaskError::PoolStopped`](crate::TaskError::PoolStopped).
    ///
    /// Blocks until all workers have exited. Idempotent: later calls (and
    /// the implicit call from `Drop`) find nothing left to join. May be
    /// called from inside a running task; the worker executing that task is
    /// skipped during the join and exits on its own once the task returns.
    pub fn stop(&self) {
        self.shared.stop.store(true, Ordering::Release);
        // Broadcast under the queue lock so a worker between its stop check
        // and its wait cannot miss the wake-up.
        self.shared.queue.notify_all();

        let workers = std::mem::take(&mut *self.workers.lock());
        let current = thread::current().id();
        for worker in workers {
            if worker.thread().id() == current {
                continue;
            }
            if worker.join().is_err() {
                error!("Worker thread exited with a panic");
            }
        }

        for task in self.shared.queue.clear() {
            task.cancel();
        }
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawns a single worker thread that drains tasks from the shared queue
/// until the stop flag is observed.
fn spawn_worker(id: usize, shared: Arc<Shared>) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name(format!("pool-worker-{id}"))
        .spawn(move || {
            while !shared.stop.load(Ordering::Acquire) {
                while let Some(task) = shared.queue.pop() {
                    debug!("Worker {id} executing task");
                    // Catch panics so the worker loop continues
                    if let Err(message) = task.run(id) {
                        error!("Worker {id} task panicked, continuing: {message}");
                    }
                }
                shared
                    .queue
                    .wait_not_empty(|| shared.stop.load(Ordering::Acquire));
            }
            debug!("Worker {id}: stop requested, shutting down");
        })
}
