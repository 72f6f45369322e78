//! Worker Error Types

use crate::queue::QueueError;

#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    #[error("Queue operation failed: {0}")]
    Queue(#[from] QueueError),

    #[error("Failed to spawn {worker}: {source}")]
    Spawn {
        worker: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Worker {worker} panicked")]
    Panicked { worker: String },
}

/// Result type for worker and coordinator operations
pub type WorkerResult<T> = Result<T, WorkerError>;
