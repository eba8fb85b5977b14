//! Output format selection and dispatch

use crate::{IoResult, bmp, jpeg, png};
use captcha_core::Canvas;

/// Supported output container formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// PNG format (lossless, the default)
    #[default]
    Png,
    /// JFIF JPEG format (lossy, quality-controlled)
    Jpeg,
    /// Uncompressed 24-bit BMP
    Bmp,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Bmp => "bmp",
        }
    }

    /// Get the MIME type for this format.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Bmp => "image/bmp",
        }
    }
}

/// Encode a canvas into a byte vector in the given format.
///
/// `quality` applies to JPEG only (1..=100) and is ignored by the
/// lossless formats.
///
/// # Errors
///
/// Propagates the format writer's errors; see [`png::write_png`],
/// [`jpeg::write_jpeg`] and [`bmp::write_bmp`].
pub fn encode(canvas: &Canvas, format: ImageFormat, quality: u8) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    match format {
        ImageFormat::Png => png::write_png(canvas, &mut buf)?,
        ImageFormat::Jpeg => jpeg::write_jpeg(canvas, &mut buf, quality)?,
        ImageFormat::Bmp => bmp::write_bmp(canvas, &mut buf)?,
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use captcha_core::Color;

    #[test]
    fn test_extension_and_mime() {
        assert_eq!(ImageFormat::Png.extension(), "png");
        assert_eq!(ImageFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(ImageFormat::Bmp.extension(), "bmp");
    }

    #[test]
    fn test_encode_dispatch_magic_bytes() {
        let canvas = Canvas::new_filled(6, 4, Color::WHITE.to_pixel()).unwrap();

        let png_bytes = encode(&canvas, ImageFormat::Png, 0).unwrap();
        assert_eq!(&png_bytes[..4], &[0x89, b'P', b'N', b'G']);

        let jpeg_bytes = encode(&canvas, ImageFormat::Jpeg, 85).unwrap();
        assert_eq!(&jpeg_bytes[..2], &[0xFF, 0xD8]);

        let bmp_bytes = encode(&canvas, ImageFormat::Bmp, 0).unwrap();
        assert_eq!(&bmp_bytes[..2], b"BM");
    }
}
