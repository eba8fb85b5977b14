//! captcha-text - Text rasterization for captcha generation
//!
//! This crate turns a code string into pixels on a
//! [`Canvas`](captcha_core::Canvas):
//!
//! - [`font`] - the built-in 5x7 column-encoded bitmap face
//! - [`draw_text`] / [`measure_width`] - baseline-anchored drawing
//!   and advance measurement
//!
//! The face covers ASCII digits and letters; anything else renders as
//! a filled replacement block. There is no font discovery - the single
//! built-in face is the whole font system.

pub mod error;
pub mod font;
pub mod render;

pub use error::{TextError, TextResult};
pub use font::{BUILTIN_FACE, GLYPH_HEIGHT, GLYPH_SPACING, GLYPH_WIDTH};
pub use render::{draw_text, measure_width, scale_for};
