//! Producer and consumer workers plus the coordinator that runs them
//!
//! ```rust
//! use pcsim::queue::MemorySink;
//! use pcsim::workers::{Coordinator, SimulationConfig};
//! use std::time::Duration;
//!
//! let config = SimulationConfig {
//!     producers: 2,
//!     consumers: 2,
//!     initial_capacity: 4,
//!     items_per_producer: 20,
//!     producer_pause: Duration::ZERO,
//!     consumer_work: Duration::ZERO,
//!     ..SimulationConfig::default()
//! };
//!
//! let sink = MemorySink::new();
//! let report = Coordinator::new(config).run(sink.clone()).unwrap();
//! assert_eq!(report.total_consumed(), 40);
//! assert_eq!(sink.lines().len(), report.final_stats.resizes);
//! ```

mod config;
mod consumer;
mod coordinator;
mod error;
mod item;
mod producer;

pub use config::SimulationConfig;
pub use consumer::{ConsumerExit, ConsumerReport, ConsumerState, ConsumerWorker};
pub use coordinator::{Coordinator, RunReport};
pub use error::{WorkerError, WorkerResult};
pub use item::WorkItem;
pub use producer::{ProducerReport, ProducerWorker};
