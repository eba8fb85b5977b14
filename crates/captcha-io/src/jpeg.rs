//! JPEG image format support
//!
//! Writes finished canvases as baseline RGB JPEG using the
//! `jpeg-encoder` crate. The encoder targets an in-memory buffer
//! which is then flushed to the caller's writer.

use crate::{IoError, IoResult};
use captcha_core::Canvas;
use std::io::Write;

/// Default quality used by the format-dispatch layer.
pub const DEFAULT_QUALITY: u8 = 85;

/// Write a canvas as a baseline RGB JPEG at `quality` (1..=100).
///
/// # Errors
///
/// Returns [`IoError::InvalidQuality`] for a quality outside 1..=100,
/// [`IoError::EncodeError`] if the canvas exceeds the JPEG dimension
/// limit of 65535 or the underlying encoder fails, and [`IoError::Io`]
/// on writer errors.
pub fn write_jpeg<W: Write>(canvas: &Canvas, mut writer: W, quality: u8) -> IoResult<()> {
    if quality == 0 || quality > 100 {
        return Err(IoError::InvalidQuality(quality));
    }
    if canvas.width() > u16::MAX as u32 || canvas.height() > u16::MAX as u32 {
        return Err(IoError::EncodeError(format!(
            "canvas {}x{} exceeds JPEG dimension limit",
            canvas.width(),
            canvas.height()
        )));
    }

    let mut jpeg_buf = Vec::new();
    let encoder = jpeg_encoder::Encoder::new(&mut jpeg_buf, quality);
    encoder
        .encode(
            &canvas.to_rgb8(),
            canvas.width() as u16,
            canvas.height() as u16,
            jpeg_encoder::ColorType::Rgb,
        )
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;

    writer.write_all(&jpeg_buf).map_err(IoError::Io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use captcha_core::color;

    #[test]
    fn test_write_jpeg_soi_marker() {
        let canvas = Canvas::new_filled(8, 6, color::compose_rgb(100, 150, 200)).unwrap();
        let mut buf = Vec::new();
        write_jpeg(&canvas, &mut buf, 85).unwrap();
        assert_eq!(&buf[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_write_jpeg_rejects_bad_quality() {
        let canvas = Canvas::new_filled(4, 4, 0).unwrap();
        let mut buf = Vec::new();
        assert!(matches!(
            write_jpeg(&canvas, &mut buf, 0),
            Err(IoError::InvalidQuality(0))
        ));
        assert!(matches!(
            write_jpeg(&canvas, &mut buf, 101),
            Err(IoError::InvalidQuality(101))
        ));
    }
}
