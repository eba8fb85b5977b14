//! captcha - Distorted-text captcha image generator
//!
//! Renders a short alphanumeric code onto a canvas, remaps every
//! pixel through a randomized wave distortion, scatters noise pixels
//! over the result, and encodes it as PNG, JPEG or BMP.
//!
//! # Example
//!
//! ```
//! use captcha::{CaptchaConfig, CaptchaGenerator};
//!
//! let mut generator = CaptchaGenerator::new(CaptchaConfig::default()).unwrap();
//! let png_bytes = generator.build_png("AB3K").unwrap();
//! assert!(!png_bytes.is_empty());
//! ```
//!
//! Seed the generator with [`CaptchaGenerator::with_seed`] for
//! reproducible output, e.g. in tests.

// Re-export core types (primary data structures used everywhere)
pub use captcha_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use captcha_io as io;
pub use captcha_text as text;
pub use captcha_warp as warp;

mod config;
mod error;
mod generator;

pub use captcha_io::ImageFormat;
pub use captcha_warp::{MagnitudeRange, MagnitudeScope};
pub use config::CaptchaConfig;
pub use error::{CaptchaError, CaptchaResult};
pub use generator::CaptchaGenerator;
