//! Error types for captcha-warp

use thiserror::Error;

/// Errors that can occur while configuring the warp engine
#[derive(Debug, Error)]
pub enum WarpError {
    /// Magnitude bounds must satisfy 0 <= min <= max
    #[error("invalid magnitude range: min {min}, max {max}")]
    InvalidRange { min: f64, max: f64 },

    /// Noise fraction must lie in [0, 1]
    #[error("invalid noise fraction: {0}")]
    InvalidPercent(f64),
}

/// Result type for warp operations
pub type WarpResult<T> = Result<T, WarpError>;
