//! Generic error handling utilities
//!
//! Unified fatal-error reporting that works across the different error
//! types of the crate while keeping user-facing output short.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` should return
/// `Some(message)` with a helpful, actionable message. Otherwise it should
/// return `None`.
pub trait ContextualError: std::error::Error {
    /// True for errors the user can fix by changing the invocation
    ///
    /// Examples: unknown options, non-positive counts, an unwritable resize
    /// log path. Counter-examples: a worker thread panicking.
    fn is_user_actionable(&self) -> bool;

    /// The specific user message if this is a user-actionable error
    fn user_message(&self) -> Option<String>;
}

/// Build the single line shown to the user for a fatal error
pub fn fatal_message<E: ContextualError>(error: &E, operation_context: &str) -> String {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => user_msg,
        _ => format!("{}: {}", operation_context, error),
    }
}

/// Report a fatal error on stderr and in the diagnostic log
///
/// Details (the full `Debug` form) only go to the log at debug level.
pub fn report_fatal<E: ContextualError + std::fmt::Debug>(error: &E, operation_context: &str) {
    let message = fatal_message(error, operation_context);
    eprintln!("Error: {}", message);
    log::error!("FATAL: {}", message);
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
