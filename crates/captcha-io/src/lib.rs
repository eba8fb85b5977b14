//! captcha-io - Image encoding for captcha generation
//!
//! Turns a finished [`Canvas`](captcha_core::Canvas) into an encoded
//! byte stream. Encode-only: the generator never reads images back.
//!
//! - [`png`] - 8-bit RGB PNG via the `png` crate
//! - [`jpeg`] - baseline RGB JPEG via the `jpeg-encoder` crate
//! - [`bmp`] - uncompressed 24-bit BMP
//! - [`encode`] / [`ImageFormat`] - format dispatch
//! - [`write_image`] - encode straight to a file path

pub mod bmp;
mod error;
pub mod format;
pub mod jpeg;
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, encode};
pub use jpeg::DEFAULT_QUALITY;

use captcha_core::Canvas;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Encode a canvas to a file, picking the writer from `format`.
///
/// JPEG output uses [`DEFAULT_QUALITY`]; call
/// [`jpeg::write_jpeg`] directly for explicit quality control.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created, plus the
/// format writer's errors.
pub fn write_image<P: AsRef<Path>>(
    canvas: &Canvas,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let file = File::create(path).map_err(IoError::Io)?;
    let mut writer = BufWriter::new(file);
    match format {
        ImageFormat::Png => png::write_png(canvas, &mut writer),
        ImageFormat::Jpeg => jpeg::write_jpeg(canvas, &mut writer, DEFAULT_QUALITY),
        ImageFormat::Bmp => bmp::write_bmp(canvas, &mut writer),
    }
}
