//! Queue Error Types

#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("Queue capacity must be at least 1 (got {capacity})")]
    InvalidCapacity { capacity: usize },

    #[error("Queue state unavailable: {message}")]
    Poisoned { message: String },
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;
