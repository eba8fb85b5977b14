//! BMP image format support
//!
//! Writes finished canvases as uncompressed 24-bit Windows Bitmap
//! (BITMAPINFOHEADER) files: bottom-up rows, BGR byte order, rows
//! padded to 4-byte boundaries.

use crate::{IoError, IoResult};
use captcha_core::{Canvas, color};
use std::io::Write;

/// BMP file header size
const BMP_FILE_HEADER_SIZE: usize = 14;

/// BMP info header size (BITMAPINFOHEADER)
const BMP_INFO_HEADER_SIZE: u32 = 40;

/// Write a canvas as an uncompressed 24-bit BMP.
///
/// # Errors
///
/// Returns [`IoError::Io`] on writer errors.
pub fn write_bmp<W: Write>(canvas: &Canvas, mut writer: W) -> IoResult<()> {
    let width = canvas.width();
    let height = canvas.height();

    let row_stride = ((width as usize * 24 + 31) / 32) * 4;
    let pixel_data_size = row_stride * height as usize;
    let pixel_offset = BMP_FILE_HEADER_SIZE + BMP_INFO_HEADER_SIZE as usize;
    let file_size = pixel_offset + pixel_data_size;

    // File header
    writer.write_all(b"BM").map_err(IoError::Io)?;
    writer
        .write_all(&(file_size as u32).to_le_bytes())
        .map_err(IoError::Io)?;
    writer.write_all(&[0u8; 4]).map_err(IoError::Io)?; // Reserved
    writer
        .write_all(&(pixel_offset as u32).to_le_bytes())
        .map_err(IoError::Io)?;

    // Info header
    writer
        .write_all(&BMP_INFO_HEADER_SIZE.to_le_bytes())
        .map_err(IoError::Io)?;
    writer
        .write_all(&(width as i32).to_le_bytes())
        .map_err(IoError::Io)?;
    writer
        .write_all(&(height as i32).to_le_bytes())
        .map_err(IoError::Io)?; // Positive height: bottom-up rows
    writer.write_all(&1u16.to_le_bytes()).map_err(IoError::Io)?; // Planes
    writer
        .write_all(&24u16.to_le_bytes())
        .map_err(IoError::Io)?;
    writer.write_all(&0u32.to_le_bytes()).map_err(IoError::Io)?; // Compression
    writer
        .write_all(&(pixel_data_size as u32).to_le_bytes())
        .map_err(IoError::Io)?;
    writer.write_all(&0i32.to_le_bytes()).map_err(IoError::Io)?; // X pixels per meter
    writer.write_all(&0i32.to_le_bytes()).map_err(IoError::Io)?; // Y pixels per meter
    writer.write_all(&0u32.to_le_bytes()).map_err(IoError::Io)?; // Colors used
    writer.write_all(&0u32.to_le_bytes()).map_err(IoError::Io)?; // Important colors

    // Pixel rows, bottom to top
    let mut row = vec![0u8; row_stride];
    for y in (0..height).rev() {
        row.fill(0);
        for x in 0..width {
            let (r, g, b) = color::extract_rgb(canvas.get_pixel_unchecked(x, y));
            let idx = x as usize * 3;
            row[idx] = b;
            row[idx + 1] = g;
            row[idx + 2] = r;
        }
        writer.write_all(&row).map_err(IoError::Io)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use captcha_core::Color;

    #[test]
    fn test_write_bmp_header() {
        let canvas = Canvas::new_filled(3, 2, Color::WHITE.to_pixel()).unwrap();
        let mut buf = Vec::new();
        write_bmp(&canvas, &mut buf).unwrap();

        assert_eq!(&buf[..2], b"BM");
        // Row stride for 3 pixels at 24bpp is 12 bytes (9 rounded up)
        let expected_size = 14 + 40 + 12 * 2;
        assert_eq!(buf.len(), expected_size);
        assert_eq!(
            u32::from_le_bytes([buf[2], buf[3], buf[4], buf[5]]),
            expected_size as u32
        );
    }

    #[test]
    fn test_write_bmp_bottom_up_bgr() {
        let mut canvas = Canvas::new_filled(1, 2, Color::BLACK.to_pixel()).unwrap();
        // Top row red, bottom row blue
        canvas.set_pixel(0, 0, Color::RED.to_pixel()).unwrap();
        canvas.set_pixel(0, 1, Color::BLUE.to_pixel()).unwrap();

        let mut buf = Vec::new();
        write_bmp(&canvas, &mut buf).unwrap();

        let data = &buf[14 + 40..];
        // First stored row is the bottom one: blue, as B G R
        assert_eq!(&data[..3], &[255, 0, 0]);
        // Second stored row is the top one: red
        assert_eq!(&data[4..7], &[0, 0, 255]);
    }
}
