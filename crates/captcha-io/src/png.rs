//! PNG image format support
//!
//! Writes finished canvases as 8-bit RGB PNG using the `png` crate.

use crate::{IoError, IoResult};
use captcha_core::Canvas;
use png::{BitDepth, ColorType, Encoder};
use std::io::Write;

/// Write a canvas as an 8-bit RGB PNG.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if the underlying encoder fails,
/// or [`IoError::Io`] on writer errors.
pub fn write_png<W: Write>(canvas: &Canvas, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, canvas.width(), canvas.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    png_writer
        .write_image_data(&canvas.to_rgb8())
        .map_err(|e| IoError::EncodeError(format!("PNG data error: {}", e)))?;
    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;
    Ok(())
}
