//! Simulation parameters shared by the coordinator and its workers

use std::time::Duration;

/// Worker counts, queue sizing and pacing for one run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub producers: usize,
    pub consumers: usize,
    pub initial_capacity: usize,
    pub items_per_producer: usize,
    /// Consumers give up after this long without a successful dequeue
    pub max_idle: Duration,
    /// Sleep between two enqueues of the same producer
    pub producer_pause: Duration,
    /// Simulated processing time per dequeued item
    pub consumer_work: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            producers: 10,
            consumers: 5,
            initial_capacity: 50,
            items_per_producer: 100,
            max_idle: Duration::from_secs(1),
            producer_pause: Duration::from_millis(10),
            consumer_work: Duration::from_millis(15),
        }
    }
}

impl SimulationConfig {
    /// Total number of items the producers will enqueue
    pub fn total_items(&self) -> usize {
        self.producers.saturating_mul(self.items_per_producer)
    }

    /// Check every count and duration is usable
    pub fn validate(&self) -> Result<(), String> {
        let counts = [
            ("producers", self.producers),
            ("consumers", self.consumers),
            ("initial_capacity", self.initial_capacity),
            ("items_per_producer", self.items_per_producer),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(format!("{} must be greater than 0", name));
            }
        }
        if self.max_idle.is_zero() {
            return Err("max_idle must be greater than 0 seconds".to_string());
        }
        Ok(())
    }
}
