//! I/O error types
//!
//! Provides a unified error type for all image encoding operations.
//! Each format-specific module maps its underlying library errors
//! into `IoError` variants so that callers only need to handle one
//! error type.

use thiserror::Error;

/// Error type for image encoding operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A format-specific encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// JPEG quality must lie in 1..=100
    #[error("invalid JPEG quality: {0}")]
    InvalidQuality(u8),

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] captcha_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
