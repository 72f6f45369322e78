//! Consumer worker and its idle-timeout state machine
//!
//! ```text
//!            item                  timed wait elapsed,
//!          ┌──────┐                budget left
//!          ▼      │               ┌──────┐
//!      ┌──────────┴┐  empty   ┌───┴──────▼──┐
//!      │ Draining  ├─────────▶│ IdleWaiting │
//!      └─────┬─────┘◀─────────┴──────┬──────┘
//!            │         item          │
//!            │ end-of-stream         │ end-of-stream / idle budget spent
//!            ▼                       ▼
//!      ┌──────────────────────────────────┐
//!      │              Exited              │
//!      └──────────────────────────────────┘
//! ```
//!
//! Waiting uses the monitor's timed dequeue bounded by the remaining idle
//! budget, so an idle consumer sleeps on the condition variable instead of
//! polling. Leaving on idle timeout is a local decision: the monitor and the
//! other consumers are not told.

use crate::queue::{Dequeued, QueueMonitor};
use crate::workers::error::WorkerResult;
use crate::workers::item::WorkItem;
use std::thread;
use std::time::{Duration, Instant};

/// Why a consumer stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConsumerExit {
    /// Producers are done and the queue is drained
    EndOfStream,
    /// No item arrived within the idle budget
    IdleTimeout,
}

/// Consumer lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumerState {
    Draining,
    IdleWaiting,
    Exited(ConsumerExit),
}

impl ConsumerState {
    /// Next state after a dequeue attempt
    ///
    /// `idle_for` is the time since the last successful dequeue, measured
    /// after the attempt returned.
    pub fn next(self, outcome: &Dequeued<WorkItem>, idle_for: Duration, max_idle: Duration) -> Self {
        match (self, outcome) {
            (ConsumerState::Exited(exit), _) => ConsumerState::Exited(exit),
            (_, Dequeued::Item(_)) => ConsumerState::Draining,
            (_, Dequeued::EndOfStream) => ConsumerState::Exited(ConsumerExit::EndOfStream),
            (_, Dequeued::TimedOut) if idle_for >= max_idle => {
                ConsumerState::Exited(ConsumerExit::IdleTimeout)
            }
            (_, Dequeued::TimedOut) => ConsumerState::IdleWaiting,
        }
    }

    pub fn is_exited(&self) -> bool {
        matches!(self, ConsumerState::Exited(_))
    }
}

/// Summary returned when a consumer exits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerReport {
    pub consumer_id: usize,
    /// Items in the order this consumer dequeued them
    pub received: Vec<WorkItem>,
    pub exit: ConsumerExit,
}

impl ConsumerReport {
    pub fn consumed(&self) -> usize {
        self.received.len()
    }
}

/// Dequeues until end-of-stream or until idle for too long
#[derive(Debug, Clone)]
pub struct ConsumerWorker {
    consumer_id: usize,
    max_idle: Duration,
    work: Duration,
}

impl ConsumerWorker {
    pub fn new(consumer_id: usize, max_idle: Duration, work: Duration) -> Self {
        Self {
            consumer_id,
            max_idle,
            work,
        }
    }

    pub fn run(&self, monitor: &QueueMonitor<WorkItem>) -> WorkerResult<ConsumerReport> {
        log::debug!("Consumer {} starting", self.consumer_id);

        let mut received = Vec::new();
        let mut state = ConsumerState::Draining;
        let mut last_success = Instant::now();

        let exit = loop {
            let budget = self.max_idle.saturating_sub(last_success.elapsed());
            let outcome = monitor.dequeue_timeout(budget)?;
            let next = state.next(&outcome, last_success.elapsed(), self.max_idle);

            if let Dequeued::Item(item) = outcome {
                self.process(&item);
                received.push(item);
                last_success = Instant::now();
            }

            if next != state {
                log::trace!(
                    "Consumer {}: {:?} -> {:?}",
                    self.consumer_id,
                    state,
                    next
                );
            }
            state = next;

            if let ConsumerState::Exited(exit) = state {
                break exit;
            }
        };

        log::debug!(
            "Consumer {} exited ({}) after {} items",
            self.consumer_id,
            exit,
            received.len()
        );
        Ok(ConsumerReport {
            consumer_id: self.consumer_id,
            received,
            exit,
        })
    }

    // Placeholder work: the item itself needs no handling
    fn process(&self, item: &WorkItem) {
        log::trace!("Consumer {} processing {}", self.consumer_id, item);
        if !self.work.is_zero() {
            thread::sleep(self.work);
        }
    }
}
