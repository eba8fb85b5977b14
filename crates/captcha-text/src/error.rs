//! Error types for captcha-text

use thiserror::Error;

/// Errors that can occur during text rasterization
#[derive(Debug, Error)]
pub enum TextError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] captcha_core::Error),

    /// Font size must be positive
    #[error("invalid font size: {0}")]
    InvalidFontSize(u32),
}

/// Result type for text operations
pub type TextResult<T> = Result<T, TextError>;
