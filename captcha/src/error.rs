//! Error types for the captcha umbrella crate

use thiserror::Error;

/// Top-level error type for captcha generation
#[derive(Debug, Error)]
pub enum CaptchaError {
    /// Configuration rejected before any pixel work
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] captcha_core::Error),

    /// Text rasterization error
    #[error("text error: {0}")]
    Text(#[from] captcha_text::TextError),

    /// Warp engine error
    #[error("warp error: {0}")]
    Warp(#[from] captcha_warp::WarpError),

    /// Image encoding error
    #[error("encode error: {0}")]
    Io(#[from] captcha_io::IoError),
}

/// Result type for captcha generation
pub type CaptchaResult<T> = Result<T, CaptchaError>;
