//! Type definitions for the queue system
//!
//! Outcome and statistics types returned by the monitor's public operations.

/// Result of a time-bounded dequeue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dequeued<T> {
    /// An item was removed from the front of the queue
    Item(T),
    /// The queue is empty and no producer will ever enqueue again
    EndOfStream,
    /// The wait elapsed while the queue stayed empty and producers were still active
    TimedOut,
}

/// Point-in-time snapshot of the monitor, taken under its lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueStats {
    /// Currently allocated slot count
    pub capacity: usize,
    /// Number of items waiting to be dequeued
    pub len: usize,
    /// Whether producers have been marked finished
    pub producers_done: bool,
    /// Number of grow or shrink operations performed so far
    pub resizes: usize,
    /// Largest capacity the queue has reached
    pub peak_capacity: usize,
}

impl QueueStats {
    /// Fraction of allocated slots currently holding items
    pub fn occupancy(&self) -> f64 {
        self.len as f64 / self.capacity as f64
    }
}
