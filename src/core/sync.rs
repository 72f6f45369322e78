//! Synchronization utilities for robust mutex handling
//!
//! Converts lock poisoning into application errors in a consistent manner
//! across the codebase.

use std::sync::LockResult;

/// Handle poisoned mutex cases with consistent error handling
///
/// Works for anything returned as a `LockResult`: plain `lock()` calls as
/// well as `Condvar` waits, which hand the guard back through the same type.
///
/// # Arguments
/// * `result` - The result from a mutex lock or condition variable wait
/// * `error_constructor` - Function to create the appropriate error type
///
/// # Examples
/// ```
/// use std::sync::Mutex;
/// use pcsim::core::sync::handle_mutex_poison;
/// use pcsim::queue::QueueError;
///
/// let mutex = Mutex::new(42);
/// let guard = handle_mutex_poison(
///     mutex.lock(),
///     |message| QueueError::Poisoned { message }
/// ).unwrap();
/// assert_eq!(*guard, 42);
/// ```
pub fn handle_mutex_poison<T, E>(
    result: LockResult<T>,
    error_constructor: impl FnOnce(String) -> E,
) -> Result<T, E> {
    result.map_err(|poison_err| {
        error_constructor(
            format!(
                "Internal synchronisation error (mutex poisoned). This indicates a panic occurred while holding a lock. PoisonError: {:?}",
                poison_err
            )
        )
    })
}
