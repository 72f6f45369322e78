//! QueueMonitor - self-resizing blocking queue
//!
//! The monitor wraps a [`CircularBuffer`] with a single mutex and two
//! condition variables:
//! - `space_available`: producers wait here while every slot is taken
//! - `item_available`: consumers wait here while the buffer is empty and
//!   producers are still running
//!
//! Capacity is elastic. An insert that fills the last slot doubles the
//! buffer; a removal that drops occupancy to a quarter or less halves it.
//! Growth is only ever checked by `enqueue` and shrinking only by the
//! dequeue family, so a single operation can never trigger both.
//!
//! Every resize runs with the lock held, re-linearizes the content, and
//! appends one `Queue resized to <capacity>` line to the resize sink. The
//! sink is owned by the locked state, so its lines are in the exact order
//! the resizes happened even when many threads trigger them.

use crate::core::sync::handle_mutex_poison;
use crate::queue::buffer::CircularBuffer;
use crate::queue::error::{QueueError, QueueResult};
use crate::queue::sink::ResizeSink;
use crate::queue::types::{Dequeued, QueueStats};
use std::sync::{Condvar, Mutex, MutexGuard};
use std::time::Duration;

/// State guarded by the monitor's mutex
struct MonitorState<T> {
    buffer: CircularBuffer<T>,
    /// Monotonic: set once, never cleared
    producers_done: bool,
    resizes: usize,
    peak_capacity: usize,
    sink: Box<dyn ResizeSink>,
}

impl<T> MonitorState<T> {
    fn consumers_must_wait(&self) -> bool {
        self.buffer.is_empty() && !self.producers_done
    }

    /// Reallocate the buffer and record the event
    fn resize(&mut self, new_capacity: usize) {
        let old_capacity = self.buffer.capacity();
        self.buffer.relocate(new_capacity);
        self.resizes += 1;
        self.peak_capacity = self.peak_capacity.max(new_capacity);

        log::debug!(
            "Queue resized from {} to {} slots ({} items)",
            old_capacity,
            new_capacity,
            self.buffer.len()
        );

        let line = format!("Queue resized to {}", new_capacity);
        if let Err(e) = self.sink.append_line(&line) {
            log::warn!("Failed to record resize to {}: {}", new_capacity, e);
        }
    }

    /// Remove the front item and shrink if occupancy fell to 25% or less
    fn take_front(&mut self) -> Option<T> {
        let item = self.buffer.pop_front()?;
        let capacity = self.buffer.capacity();
        if capacity > 1 && self.buffer.len() <= capacity / 4 {
            self.resize(capacity / 2);
        }
        Some(item)
    }

    fn stats(&self) -> QueueStats {
        QueueStats {
            capacity: self.buffer.capacity(),
            len: self.buffer.len(),
            producers_done: self.producers_done,
            resizes: self.resizes,
            peak_capacity: self.peak_capacity,
        }
    }
}

/// Shared producer/consumer queue with elastic capacity
///
/// Share it between threads as `Arc<QueueMonitor<T>>`. All operations take
/// the same exclusive lock; there is no reader/writer split since every
/// operation may move the indices.
///
/// # Example
///
/// ```rust
/// use pcsim::queue::{MemorySink, QueueMonitor};
///
/// let sink = MemorySink::new();
/// let monitor = QueueMonitor::new(2, sink.clone()).unwrap();
///
/// monitor.enqueue("a").unwrap();
/// monitor.enqueue("b").unwrap(); // fills the buffer, capacity doubles
/// assert_eq!(monitor.capacity().unwrap(), 4);
///
/// monitor.mark_producers_done().unwrap();
/// assert_eq!(monitor.dequeue().unwrap(), Some("a"));
/// assert_eq!(monitor.dequeue().unwrap(), Some("b"));
/// assert_eq!(monitor.dequeue().unwrap(), None);
/// assert_eq!(sink.lines()[0], "Queue resized to 4");
/// ```
pub struct QueueMonitor<T> {
    state: Mutex<MonitorState<T>>,
    space_available: Condvar,
    item_available: Condvar,
}

impl<T> QueueMonitor<T> {
    /// Create a monitor with `initial_capacity` slots reporting resizes to `sink`
    pub fn new<S>(initial_capacity: usize, sink: S) -> QueueResult<Self>
    where
        S: ResizeSink + 'static,
    {
        if initial_capacity == 0 {
            return Err(QueueError::InvalidCapacity {
                capacity: initial_capacity,
            });
        }

        Ok(Self {
            state: Mutex::new(MonitorState {
                buffer: CircularBuffer::with_capacity(initial_capacity),
                producers_done: false,
                resizes: 0,
                peak_capacity: initial_capacity,
                sink: Box::new(sink),
            }),
            space_available: Condvar::new(),
            item_available: Condvar::new(),
        })
    }

    fn lock(&self) -> QueueResult<MutexGuard<'_, MonitorState<T>>> {
        handle_mutex_poison(self.state.lock(), |message| QueueError::Poisoned {
            message,
        })
    }

    /// Append an item, blocking while every slot is occupied
    ///
    /// If the insert fills the buffer, capacity is doubled before the lock
    /// is released.
    pub fn enqueue(&self, item: T) -> QueueResult<()> {
        let mut state = self.lock()?;
        let mut pending = item;
        while let Err(rejected) = state.buffer.push_back(pending) {
            pending = rejected;
            state = handle_mutex_poison(self.space_available.wait(state), |message| {
                QueueError::Poisoned { message }
            })?;
        }
        self.item_available.notify_one();

        if state.buffer.is_full() {
            let doubled = state.buffer.capacity() * 2;
            state.resize(doubled);
        }

        Ok(())
    }

    /// Remove the front item, blocking while the queue is empty
    ///
    /// Returns `Ok(None)` only once producers are done and nothing is left;
    /// that is the end-of-stream signal, not an error.
    pub fn dequeue(&self) -> QueueResult<Option<T>> {
        let guard = self.lock()?;
        let mut state = handle_mutex_poison(
            self.item_available
                .wait_while(guard, |state| state.consumers_must_wait()),
            |message| QueueError::Poisoned { message },
        )?;

        let item = state.take_front();
        if item.is_some() {
            self.space_available.notify_one();
        }
        Ok(item)
    }

    /// Remove the front item, waiting at most `timeout` for one to arrive
    ///
    /// Behaves like [`dequeue`](Self::dequeue) except that an empty queue
    /// with active producers yields [`Dequeued::TimedOut`] once the wait
    /// elapses. Spurious wakeups do not extend the total wait.
    pub fn dequeue_timeout(&self, timeout: Duration) -> QueueResult<Dequeued<T>> {
        let guard = self.lock()?;
        let (mut state, _) = handle_mutex_poison(
            self.item_available
                .wait_timeout_while(guard, timeout, |state| state.consumers_must_wait()),
            |message| QueueError::Poisoned { message },
        )?;

        if let Some(item) = state.take_front() {
            self.space_available.notify_one();
            return Ok(Dequeued::Item(item));
        }

        if state.producers_done {
            Ok(Dequeued::EndOfStream)
        } else {
            Ok(Dequeued::TimedOut)
        }
    }

    /// Declare that no more items will be enqueued
    ///
    /// Wakes every waiting consumer so each can observe end-of-stream.
    /// Calling it again has no further effect.
    pub fn mark_producers_done(&self) -> QueueResult<()> {
        let mut state = self.lock()?;
        if !state.producers_done {
            state.producers_done = true;
            log::debug!(
                "Producers marked done with {} items still queued",
                state.buffer.len()
            );
        }
        self.item_available.notify_all();
        Ok(())
    }

    /// Consistent snapshot of capacity, length and resize counters
    pub fn stats(&self) -> QueueResult<QueueStats> {
        Ok(self.lock()?.stats())
    }

    pub fn capacity(&self) -> QueueResult<usize> {
        Ok(self.lock()?.buffer.capacity())
    }

    pub fn len(&self) -> QueueResult<usize> {
        Ok(self.lock()?.buffer.len())
    }

    pub fn is_empty(&self) -> QueueResult<bool> {
        Ok(self.lock()?.buffer.is_empty())
    }

    pub fn producers_done(&self) -> QueueResult<bool> {
        Ok(self.lock()?.producers_done)
    }
}

impl<T> std::fmt::Debug for QueueMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.state.try_lock() {
            Ok(state) => f
                .debug_struct("QueueMonitor")
                .field("stats", &state.stats())
                .finish(),
            Err(_) => f.debug_struct("QueueMonitor").finish_non_exhaustive(),
        }
    }
}
