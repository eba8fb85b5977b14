//! Coordinate distortion
//!
//! For every destination pixel of the output canvas, a distortion
//! strategy names the source pixel of the plain text canvas to sample
//! from. The default strategy is a sine/cosine wave warp:
//!
//! ```text
//! x' = round(x + magnitude * sin(pi * x / 64))
//! y' = round(y + magnitude * cos(pi * y / 64))
//! ```
//!
//! Using the destination coordinate itself as the phase argument keeps
//! the warp smooth in both axes; the divisor 64 fixes the wave period
//! at 128 pixels regardless of image size, so larger canvases show
//! more cycles.
//!
//! A computed source component that leaves the canvas falls back to 0
//! on that axis ([`clamp_source`]) - sampling snaps to the canvas
//! origin instead of reflecting or saturating.

use crate::error::{WarpError, WarpResult};
use rand::RngExt;
use std::f64::consts::PI;

/// Divisor applied to the phase argument of the wave functions.
///
/// Together with pi this fixes the spatial period at 128 pixels.
pub const PHASE_DIVISOR: f64 = 64.0;

// ============================================================================
// Distortion strategies
// ============================================================================

/// Maps a destination pixel to the source pixel to sample.
///
/// Implementations are pure with respect to the image: the only
/// per-call input besides the coordinate is the magnitude scalar drawn
/// by the caller (see [`MagnitudeRange`]). Out-of-range results are
/// permitted; the caller resolves them with [`clamp_source`].
pub trait DistortionStrategy {
    /// Compute the (possibly out-of-range) source coordinate for
    /// destination pixel `(x, y)`.
    fn source_coord(&self, x: u32, y: u32, magnitude: f64) -> (i64, i64);
}

/// The default sine/cosine wave warp.
#[derive(Debug, Clone, Copy, Default)]
pub struct SineWarp;

impl DistortionStrategy for SineWarp {
    fn source_coord(&self, x: u32, y: u32, magnitude: f64) -> (i64, i64) {
        let xf = x as f64;
        let yf = y as f64;
        let xs = xf + magnitude * (PI * xf / PHASE_DIVISOR).sin();
        let ys = yf + magnitude * (PI * yf / PHASE_DIVISOR).cos();
        (xs.round() as i64, ys.round() as i64)
    }
}

/// No-op strategy for the distortion-disabled case.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityWarp;

impl DistortionStrategy for IdentityWarp {
    fn source_coord(&self, x: u32, y: u32, _magnitude: f64) -> (i64, i64) {
        (x as i64, y as i64)
    }
}

/// Resolve a computed source coordinate against the canvas bounds.
///
/// A component outside `[0, width)` (resp. `[0, height)`) is replaced
/// with 0. The fallback is per-axis: `(-3, 7)` on a large canvas
/// resolves to `(0, 7)`, and only a coordinate with both components
/// out of range lands exactly on the origin.
#[inline]
pub fn clamp_source(xs: i64, ys: i64, width: u32, height: u32) -> (u32, u32) {
    let x = if xs < 0 || xs >= width as i64 { 0 } else { xs as u32 };
    let y = if ys < 0 || ys >= height as i64 { 0 } else { ys as u32 };
    (x, y)
}

// ============================================================================
// Magnitude policy
// ============================================================================

/// Bounds for the random distortion magnitude.
///
/// A drawn magnitude is uniform over `[-max, -min] U [min, max]`:
/// strength never sits near zero (an imperceptible warp) and the
/// direction is symmetric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnitudeRange {
    min: f64,
    max: f64,
}

impl MagnitudeRange {
    /// Create a magnitude range.
    ///
    /// # Errors
    ///
    /// Returns [`WarpError::InvalidRange`] unless
    /// `0 <= min <= max` and both bounds are finite.
    pub fn new(min: f64, max: f64) -> WarpResult<Self> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(WarpError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower magnitude bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper magnitude bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Draw a signed magnitude from the range.
    ///
    /// `m = min + (max - min) * U` with `U` uniform in `[0, 1)`,
    /// negated with probability 0.5.
    pub fn sample<R: RngExt + ?Sized>(&self, rng: &mut R) -> f64 {
        let m = self.min + (self.max - self.min) * rng.random::<f64>();
        if rng.random_bool(0.5) { -m } else { m }
    }
}

impl Default for MagnitudeRange {
    /// A 3..8 pixel warp, strong enough to defeat shape matching
    /// while the code stays readable at typical captcha sizes.
    fn default() -> Self {
        Self { min: 3.0, max: 8.0 }
    }
}

/// How often the magnitude is redrawn during a resample pass.
///
/// `PerImage` draws once and shares it across every pixel, giving a
/// coherent global wave; `PerPixel` redraws for each destination
/// pixel, giving a grainier field. The two produce visibly different
/// textures, so the choice is part of the configuration surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MagnitudeScope {
    /// One magnitude for the whole image
    #[default]
    PerImage,
    /// A fresh magnitude for every destination pixel
    PerPixel,
}

// ============================================================================
// Tests
// ============================================================================
