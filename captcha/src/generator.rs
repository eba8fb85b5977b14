//! The image compositor
//!
//! [`CaptchaGenerator`] drives one image build through four stages:
//!
//! 1. **Render** - fill a canvas with the background color and draw
//!    the code centered on it
//! 2. **Early exit** - with distortion and noise both disabled the
//!    plain canvas is the result
//! 3. **Resample** - remap every destination pixel through the
//!    distortion strategy into a second canvas
//! 4. **Noise overlay** - overwrite the scattered noise coordinates
//!    with the noise color
//!
//! The generator owns the process's only random source for these
//! builds, an [`StdRng`]; seeding it makes whole images reproducible.
//! A generator is single-threaded by design - building advances the
//! RNG, so sharing one across threads needs external synchronization.

use crate::config::CaptchaConfig;
use crate::error::CaptchaResult;
use captcha_core::Canvas;
use captcha_io::ImageFormat;
use captcha_text::{draw_text, measure_width};
use captcha_warp::{
    DistortionStrategy, IdentityWarp, MagnitudeRange, MagnitudeScope, NoNoise, NoiseStrategy,
    SineWarp, UniformScatter, clamp_source,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Builds captcha images from a validated configuration.
pub struct CaptchaGenerator {
    config: CaptchaConfig,
    distortion: Box<dyn DistortionStrategy>,
    noise: Box<dyn NoiseStrategy>,
    rng: StdRng,
}

impl CaptchaGenerator {
    /// Create a generator seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`CaptchaError::Config`](crate::CaptchaError::Config)
    /// if the configuration fails validation.
    pub fn new(config: CaptchaConfig) -> CaptchaResult<Self> {
        Self::with_rng(config, StdRng::from_rng(&mut rand::rng()))
    }

    /// Create a generator with a fixed seed.
    ///
    /// Two generators built from the same configuration and seed
    /// produce identical images call for call.
    ///
    /// # Errors
    ///
    /// Returns [`CaptchaError::Config`](crate::CaptchaError::Config)
    /// if the configuration fails validation.
    pub fn with_seed(config: CaptchaConfig, seed: u64) -> CaptchaResult<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: CaptchaConfig, rng: StdRng) -> CaptchaResult<Self> {
        config.validate()?;

        let distortion: Box<dyn DistortionStrategy> = if config.distortion_enabled() {
            Box::new(SineWarp)
        } else {
            Box::new(IdentityWarp)
        };
        let noise: Box<dyn NoiseStrategy> = if config.noise_enabled() {
            Box::new(UniformScatter::new(config.noise_percent)?)
        } else {
            Box::new(NoNoise)
        };

        Ok(Self {
            config,
            distortion,
            noise,
            rng,
        })
    }

    /// The configuration this generator was built with.
    pub fn config(&self) -> &CaptchaConfig {
        &self.config
    }

    /// Build the finished captcha canvas for `code`.
    ///
    /// # Errors
    ///
    /// Text rasterization errors propagate; the pixel stages
    /// themselves cannot fail on a validated configuration.
    pub fn build_image(&mut self, code: &str) -> CaptchaResult<Canvas> {
        let plain = self.render_plain(code)?;

        if !self.config.distortion_enabled() && !self.config.noise_enabled() {
            return Ok(plain);
        }

        // Resample into a second canvas, or hand the text canvas
        // straight to the overlay when distortion is off.
        let mut image = match self.config.distortion {
            Some(range) => self.resample(&plain, range)?,
            None => plain,
        };

        self.overlay_noise(&mut image);
        Ok(image)
    }

    /// Stage 1: the undistorted, noise-free text canvas.
    ///
    /// The code is centered horizontally and sits on a baseline at
    /// `(height - font_size) / 2 + font_size`.
    pub fn render_plain(&self, code: &str) -> CaptchaResult<Canvas> {
        let c = &self.config;
        let mut canvas = Canvas::new_filled(c.width, c.height, c.background_color.to_pixel())?;

        let text_width = measure_width(code, c.font_size)?;
        let x = (c.width as i32 - text_width as i32) / 2;
        let baseline = (c.height as i32 - c.font_size as i32) / 2 + c.font_size as i32;
        draw_text(&mut canvas, code, x, baseline, c.font_size, c.text_color)?;
        Ok(canvas)
    }

    /// Stage 3: copy every pixel from its warped source coordinate.
    fn resample(&mut self, src: &Canvas, range: MagnitudeRange) -> CaptchaResult<Canvas> {
        let w = src.width();
        let h = src.height();
        let mut out = Canvas::new(w, h)?;

        let per_pixel = self.config.magnitude_scope == MagnitudeScope::PerPixel;
        let shared = if per_pixel {
            0.0
        } else {
            range.sample(&mut self.rng)
        };

        for y in 0..h {
            for x in 0..w {
                let magnitude = if per_pixel {
                    range.sample(&mut self.rng)
                } else {
                    shared
                };
                let (sx, sy) = self.distortion.source_coord(x, y, magnitude);
                let (sx, sy) = clamp_source(sx, sy, w, h);
                out.set_pixel_unchecked(x, y, src.get_pixel_unchecked(sx, sy));
            }
        }

        Ok(out)
    }

    /// Stage 4: overwrite the scattered coordinates, later points win.
    fn overlay_noise(&mut self, image: &mut Canvas) {
        let pixel = self.config.noise_color.to_pixel();
        let points = self
            .noise
            .scatter(image.width(), image.height(), &mut self.rng);
        for (x, y) in points {
            image.set_pixel_unchecked(x, y, pixel);
        }
    }

    /// Build and encode in one step.
    ///
    /// `quality` applies to JPEG only.
    pub fn build_encoded(
        &mut self,
        code: &str,
        format: ImageFormat,
        quality: u8,
    ) -> CaptchaResult<Vec<u8>> {
        let image = self.build_image(code)?;
        Ok(captcha_io::encode(&image, format, quality)?)
    }

    /// Build and encode as PNG.
    pub fn build_png(&mut self, code: &str) -> CaptchaResult<Vec<u8>> {
        self.build_encoded(code, ImageFormat::Png, 0)
    }

    /// Build and encode as JPEG at `quality` (1..=100).
    pub fn build_jpeg(&mut self, code: &str, quality: u8) -> CaptchaResult<Vec<u8>> {
        self.build_encoded(code, ImageFormat::Jpeg, quality)
    }

    /// Build and encode as BMP.
    pub fn build_bmp(&mut self, code: &str) -> CaptchaResult<Vec<u8>> {
        self.build_encoded(code, ImageFormat::Bmp, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaptchaError;
    use captcha_core::Color;

    fn test_config() -> CaptchaConfig {
        CaptchaConfig {
            noise_color: Color::RED,
            ..Default::default()
        }
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = CaptchaConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(
            CaptchaGenerator::new(config),
            Err(CaptchaError::Config(_))
        ));
    }

    #[test]
    fn test_build_reproducible_with_seed() {
        let mut gen1 = CaptchaGenerator::with_seed(test_config(), 99).unwrap();
        let mut gen2 = CaptchaGenerator::with_seed(test_config(), 99).unwrap();
        assert_eq!(
            gen1.build_image("XY42").unwrap(),
            gen2.build_image("XY42").unwrap()
        );
    }

    #[test]
    fn test_build_different_seeds_diverge() {
        let mut gen1 = CaptchaGenerator::with_seed(test_config(), 1).unwrap();
        let mut gen2 = CaptchaGenerator::with_seed(test_config(), 2).unwrap();
        assert_ne!(
            gen1.build_image("XY42").unwrap(),
            gen2.build_image("XY42").unwrap()
        );
    }

    #[test]
    fn test_everything_disabled_returns_plain_render() {
        let config = CaptchaConfig {
            distortion: None,
            noise_percent: 0.0,
            ..test_config()
        };
        let mut generator = CaptchaGenerator::with_seed(config, 7).unwrap();
        let plain = generator.render_plain("AB3K").unwrap();
        assert_eq!(generator.build_image("AB3K").unwrap(), plain);
    }

    #[test]
    fn test_noise_only_touches_at_most_count_pixels() {
        let config = CaptchaConfig {
            distortion: None,
            noise_percent: 0.1,
            ..test_config()
        };
        let mut generator = CaptchaGenerator::with_seed(config, 7).unwrap();
        let plain = generator.render_plain("AB3K").unwrap();
        let image = generator.build_image("AB3K").unwrap();

        let noise = generator.config().noise_color.to_pixel();
        let budget = captcha_warp::noise_point_count(130, 48, 0.1);
        let mut changed = 0;
        for y in 0..48 {
            for x in 0..130 {
                let before = plain.get_pixel_unchecked(x, y);
                let after = image.get_pixel_unchecked(x, y);
                if before != after {
                    assert_eq!(after, noise);
                    changed += 1;
                }
            }
        }
        assert!(changed > 0);
        assert!(changed <= budget);
    }

    #[test]
    fn test_per_pixel_scope_builds() {
        let config = CaptchaConfig {
            magnitude_scope: MagnitudeScope::PerPixel,
            ..test_config()
        };
        let mut generator = CaptchaGenerator::with_seed(config, 5).unwrap();
        let image = generator.build_image("Q7").unwrap();
        assert_eq!(image.width(), 130);
        assert_eq!(image.height(), 48);
    }

    #[test]
    fn test_unknown_font_name_falls_back() {
        let config = CaptchaConfig {
            font_name: Some("no-such-face".to_string()),
            ..test_config()
        };
        let mut generator = CaptchaGenerator::with_seed(config, 5).unwrap();
        assert!(generator.build_image("A1").is_ok());
    }

    #[test]
    fn test_encoded_outputs_carry_magic_bytes() {
        let mut generator = CaptchaGenerator::with_seed(test_config(), 11).unwrap();
        let png = generator.build_png("ZZ9").unwrap();
        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
        let jpeg = generator.build_jpeg("ZZ9", 85).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
        let bmp = generator.build_bmp("ZZ9").unwrap();
        assert_eq!(&bmp[..2], b"BM");
    }
}
