//! Text rasterization onto a canvas
//!
//! Draws strings with the built-in 5x7 face, scaled up by an integer
//! factor derived from the requested font size. Placement is baseline
//! anchored: the caller passes the x of the left edge and the y of the
//! text baseline, and glyph rows are laid out above the baseline.

use crate::error::{TextError, TextResult};
use crate::font::{self, GLYPH_HEIGHT, GLYPH_SPACING, GLYPH_WIDTH};
use captcha_core::{Canvas, Color};

/// Integer magnification factor for a font size.
///
/// The 5x7 face is scaled by whole pixels; the factor is the multiple
/// of [`GLYPH_HEIGHT`] closest to `font_size`, and never less than 1.
pub fn scale_for(font_size: u32) -> u32 {
    ((font_size + GLYPH_HEIGHT / 2) / GLYPH_HEIGHT).max(1)
}

/// Measure the advance width of `text` at `font_size`, in pixels.
///
/// # Errors
///
/// Returns [`TextError::InvalidFontSize`] if `font_size` is zero.
pub fn measure_width(text: &str, font_size: u32) -> TextResult<u32> {
    if font_size == 0 {
        return Err(TextError::InvalidFontSize(font_size));
    }
    let n = text.chars().count() as u32;
    if n == 0 {
        return Ok(0);
    }
    let scale = scale_for(font_size);
    Ok(n * (GLYPH_WIDTH + GLYPH_SPACING) * scale - GLYPH_SPACING * scale)
}

/// Draw `text` onto `canvas` in `color`.
///
/// `x` is the left edge of the first glyph; `baseline` is the pixel
/// row the glyphs sit on. Either may place part of the text outside
/// the canvas; out-of-range pixels are skipped, not an error.
/// Characters outside the face render as a filled block.
///
/// # Errors
///
/// Returns [`TextError::InvalidFontSize`] if `font_size` is zero.
pub fn draw_text(
    canvas: &mut Canvas,
    text: &str,
    x: i32,
    baseline: i32,
    font_size: u32,
    color: Color,
) -> TextResult<()> {
    if font_size == 0 {
        return Err(TextError::InvalidFontSize(font_size));
    }
    let scale = scale_for(font_size);
    let top = baseline - (GLYPH_HEIGHT * scale) as i32;
    let advance = ((GLYPH_WIDTH + GLYPH_SPACING) * scale) as i32;
    let pixel = color.to_pixel();

    let mut pen_x = x;
    for c in text.chars() {
        let columns = font::glyph(c).unwrap_or(&font::REPLACEMENT);
        for (col, &bits) in columns.iter().enumerate() {
            for row in 0..GLYPH_HEIGHT {
                if bits & (1u8 << row) == 0 {
                    continue;
                }
                fill_block(
                    canvas,
                    pen_x + (col as u32 * scale) as i32,
                    top + (row * scale) as i32,
                    scale,
                    pixel,
                );
            }
        }
        pen_x += advance;
    }
    Ok(())
}

/// Fill a scale x scale block, clipping against the canvas edges.
fn fill_block(canvas: &mut Canvas, x: i32, y: i32, scale: u32, pixel: u32) {
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;
    for dy in 0..scale as i32 {
        for dx in 0..scale as i32 {
            let px = x + dx;
            let py = y + dy;
            if px >= 0 && px < w && py >= 0 && py < h {
                canvas.set_pixel_unchecked(px as u32, py as u32, pixel);
            }
        }
    }
}
