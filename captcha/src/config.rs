//! Generator configuration
//!
//! One immutable parameter block created up front and owned by the
//! generator for its lifetime. Every invalid combination is rejected
//! here, before any pixel work begins; the pixel loops run against a
//! validated configuration and have no failure modes of their own.

use crate::error::{CaptchaError, CaptchaResult};
use captcha_core::Color;
use captcha_warp::{MagnitudeRange, MagnitudeScope};

/// Parameters for one captcha generator.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptchaConfig {
    /// Color the code is drawn in
    pub text_color: Color,
    /// Canvas fill color
    pub background_color: Color,
    /// Color of the scattered noise pixels
    pub noise_color: Color,

    /// Canvas width in pixels (positive)
    pub width: u32,
    /// Canvas height in pixels (positive)
    pub height: u32,

    /// Requested face name. Only the built-in face exists; unknown
    /// names fall back to it.
    pub font_name: Option<String>,
    /// Text height in pixels (positive)
    pub font_size: u32,

    /// Warp magnitude bounds; `None` disables distortion entirely
    pub distortion: Option<MagnitudeRange>,
    /// Whether the magnitude is drawn once per image or per pixel
    pub magnitude_scope: MagnitudeScope,

    /// Fraction of the pixel count to scatter as noise, in `[0, 1]`;
    /// `0.0` disables the overlay entirely
    pub noise_percent: f64,
}

impl Default for CaptchaConfig {
    fn default() -> Self {
        Self {
            text_color: Color::BLACK,
            background_color: Color::WHITE,
            noise_color: Color::BLACK,
            width: 130,
            height: 48,
            font_name: None,
            font_size: 28,
            distortion: Some(MagnitudeRange::default()),
            magnitude_scope: MagnitudeScope::PerImage,
            noise_percent: 0.05,
        }
    }
}

impl CaptchaConfig {
    /// Check every precondition the pixel loops rely on.
    ///
    /// # Errors
    ///
    /// Returns [`CaptchaError::Config`] for zero dimensions, a zero
    /// font size, or a noise fraction outside `[0, 1]`. (Magnitude
    /// bounds are validated by [`MagnitudeRange`] at construction.)
    pub fn validate(&self) -> CaptchaResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CaptchaError::Config(format!(
                "canvas dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.font_size == 0 {
            return Err(CaptchaError::Config(
                "font size must be positive".to_string(),
            ));
        }
        if !self.noise_percent.is_finite() || !(0.0..=1.0).contains(&self.noise_percent) {
            return Err(CaptchaError::Config(format!(
                "noise fraction must lie in [0, 1], got {}",
                self.noise_percent
            )));
        }
        Ok(())
    }

    /// Whether the resample pass runs at all.
    pub fn distortion_enabled(&self) -> bool {
        self.distortion.is_some()
    }

    /// Whether the noise overlay runs at all.
    pub fn noise_enabled(&self) -> bool {
        self.noise_percent > 0.0
    }
}
