//! Validation utilities for CLI and configuration values

use std::time::Duration;

/// Validate positive integer value
pub fn validate_positive_int(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("Value must be greater than 0".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a valid positive integer", value)),
    }
}

/// Validate a positive number of seconds, fractions allowed (e.g. `0.5`)
pub fn validate_positive_secs(value: &str) -> Result<Duration, String> {
    let secs = value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a valid number of seconds", value))?;
    positive_duration_from_secs(secs)
}

/// Convert seconds to a `Duration`, rejecting zero, negatives, NaN and overflow
pub fn positive_duration_from_secs(secs: f64) -> Result<Duration, String> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("Duration must be greater than 0 seconds (got {})", secs));
    }
    Duration::try_from_secs_f64(secs).map_err(|e| format!("Invalid duration {}: {}", secs, e))
}

/// Validate a pause length in milliseconds; zero disables the pause
pub fn validate_millis(value: &str) -> Result<Duration, String> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| format!("'{}' is not a valid number of milliseconds", value))
}
