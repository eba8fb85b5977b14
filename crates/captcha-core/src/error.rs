//! Error types for captcha-core
//!
//! Provides a unified error type for canvas and color operations.
//! Each variant captures enough context for diagnostics without
//! exposing internal representation details.

use thiserror::Error;

/// captcha-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid canvas dimensions
    #[error("invalid canvas dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinate out of bounds
    #[error("pixel out of bounds: ({x}, {y}) on {width}x{height} canvas")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Color string could not be parsed
    #[error("invalid color string: {0:?}")]
    InvalidColor(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
