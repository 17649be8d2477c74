use std::collections::VecDeque;

use parking_lot::{Condvar, Mutex};

/// A thread-safe FIFO queue of pending work items.
///
/// All operations serialize on a single internal lock. The consumer wake
/// primitive shares that lock, so a consumer that checks for work and goes
/// to sleep can never miss a wake-up issued in between.
pub struct TaskQueue<T> {
    items: Mutex<VecDeque<T>>,
    available: Condvar,
}

impl<T> TaskQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        TaskQueue {
            items: Mutex::new(VecDeque::new()),
            available: Condvar::new(),
        }
    }

    /// Appends an item at the tail and wakes at most one waiting consumer.
    ///
    /// Which consumer wakes is unspecified; any idle one may claim the item.
    pub fn push(&self, item: T) {
        let mut items = self.items.lock();
        items.push_back(item);
        self.available.notify_one();
    }

    /// Removes and returns the head, or `None` when the queue is empty.
    ///
    /// Never blocks.
    pub fn pop(&self) -> Option<T> {
        self.items.lock().pop_front()
    }

    /// Whether the queue is currently empty.
    ///
    /// The answer may be stale the instant it returns, so treat it as a
    /// scheduling hint: a `pop` right after a non-empty report may still
    /// find nothing if another consumer won the race.
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Number of items currently queued. Same staleness caveat as
    /// [`is_empty`](TaskQueue::is_empty).
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    /// Drains every pending item and hands them back in FIFO order.
    ///
    /// Used during shutdown; the caller is responsible for disposing of the
    /// drained items.
    pub fn clear(&self) -> Vec<T> {
        self.items.lock().drain(..).collect()
    }

    /// Blocks until the queue is non-empty or `cancelled` reports true.
    ///
    /// The predicate is evaluated under the queue lock, so a
    /// [`notify_all`](TaskQueue::notify_all) issued after setting a
    /// cancellation flag cannot slip in between the check and the wait.
    pub fn wait_not_empty(&self, cancelled: impl Fn() -> bool) {
        let mut items = self.items.lock();
        while items.is_empty() && !cancelled() {
            self.available.wait(&mut items);
        }
    }

    /// Wakes every waiting consumer.
    ///
    /// Takes the queue lock first so the wake pairs with the predicate check
    /// in [`wait_not_empty`](TaskQueue::wait_not_empty).
    pub fn notify_all(&self) {
        let _items = self.items.lock();
        self.available.notify_all();
    }
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
