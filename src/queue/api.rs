//! Public API for the queue system
//!
//! External modules should import from here rather than directly from internal modules.
//! See module documentation for complete usage examples and architecture details.

// Core queue component
pub use crate::queue::monitor::QueueMonitor;

// Resize event destinations
pub use crate::queue::sink::{FileSink, MemorySink, NullSink, ResizeSink};

// Error handling
pub use crate::queue::error::{QueueError, QueueResult};

// Operation outcomes and statistics
pub use crate::queue::types::{Dequeued, QueueStats};
