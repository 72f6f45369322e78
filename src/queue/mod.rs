//! Elastic Queue Component
//!
//! A blocking producer/consumer queue whose capacity follows demand.
//!
//! # Overview
//!
//! - **Multiple Producers**: any number of threads may enqueue concurrently
//! - **Multiple Consumers**: every item is delivered to exactly one consumer
//! - **Elastic Capacity**: doubles when an insert fills the buffer, halves when
//!   a removal drops occupancy to 25% or less (never below one slot)
//! - **End-of-Stream**: once producers are marked done, drained consumers get
//!   `None` instead of blocking forever
//! - **Resize Log**: every capacity change is appended to a [`ResizeSink`]
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  Producer A  │     │  Producer B  │     │  Producer C  │
//! └──────┬───────┘     └──────┬───────┘     └──────┬───────┘
//!        │ enqueue            │ enqueue            │ enqueue
//!        ▼                    ▼                    ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │        QueueMonitor (Mutex + 2 Condvars)                │
//! │  ┌─────────────────────────────────────────────────┐    │
//! │  │   CircularBuffer     front ──▶  ... ──▶ rear    │    │──▶ ResizeSink
//! │  └─────────────────────────────────────────────────┘    │
//! └────────┬───────────────────┬───────────────────┬────────┘
//!          │ dequeue           │ dequeue           │ dequeue
//! ┌────────┴──┐          ┌─────┴─────┐       ┌─────┴─────┐
//! │Consumer A │          │Consumer B │       │Consumer C │ (each item once)
//! └───────────┘          └───────────┘       └───────────┘
//! ```
//!
//! # Example Usage
//!
//! ```rust
//! use pcsim::queue::{NullSink, QueueMonitor};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let monitor = Arc::new(QueueMonitor::new(4, NullSink).unwrap());
//!
//! let producer = {
//!     let monitor = Arc::clone(&monitor);
//!     thread::spawn(move || {
//!         for value in 0..10 {
//!             monitor.enqueue(value).unwrap();
//!         }
//!         monitor.mark_producers_done().unwrap();
//!     })
//! };
//!
//! let mut received = Vec::new();
//! while let Some(value) = monitor.dequeue().unwrap() {
//!     received.push(value);
//! }
//! producer.join().unwrap();
//! assert_eq!(received, (0..10).collect::<Vec<_>>());
//! ```

pub mod api;
mod buffer;
mod error;
mod monitor;
mod sink;
mod types;

pub use buffer::CircularBuffer;
pub use error::{QueueError, QueueResult};
pub use monitor::QueueMonitor;
pub use sink::{FileSink, MemorySink, NullSink, ResizeSink};
pub use types::{Dequeued, QueueStats};

#[cfg(test)]
mod tests;
