//! Producer worker

use crate::queue::QueueMonitor;
use crate::workers::error::WorkerResult;
use crate::workers::item::WorkItem;
use std::thread;
use std::time::Duration;

/// Summary returned when a producer finishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerReport {
    pub producer_id: usize,
    pub produced: usize,
}

/// Enqueues a fixed number of items, pausing between them
#[derive(Debug, Clone)]
pub struct ProducerWorker {
    producer_id: usize,
    items: usize,
    pause: Duration,
}

impl ProducerWorker {
    pub fn new(producer_id: usize, items: usize, pause: Duration) -> Self {
        Self {
            producer_id,
            items,
            pause,
        }
    }

    /// Enqueue items `0..items` in order
    pub fn run(&self, monitor: &QueueMonitor<WorkItem>) -> WorkerResult<ProducerReport> {
        log::debug!("Producer {} starting ({} items)", self.producer_id, self.items);

        for sequence in 0..self.items {
            monitor.enqueue(WorkItem::new(self.producer_id, sequence))?;
            if !self.pause.is_zero() {
                thread::sleep(self.pause);
            }
        }

        log::debug!("Producer {} finished", self.producer_id);
        Ok(ProducerReport {
            producer_id: self.producer_id,
            produced: self.items,
        })
    }
}
