//! Items exchanged between producers and consumers

use std::fmt;

/// One generated value, tagged with the producer that made it
///
/// `sequence` runs `0..items_per_producer` for every producer, so the pair
/// is unique across a run and lets consumers check per-producer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkItem {
    pub producer_id: usize,
    pub sequence: usize,
}

impl WorkItem {
    pub fn new(producer_id: usize, sequence: usize) -> Self {
        Self {
            producer_id,
            sequence,
        }
    }
}

impl fmt::Display for WorkItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "producer-{}#{}", self.producer_id, self.sequence)
    }
}
