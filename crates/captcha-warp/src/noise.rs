//! Noise point generation
//!
//! A noise strategy produces the coordinates that the compositor
//! overwrites with the configured noise color after resampling. The
//! default scatters a fixed fraction of the pixel count uniformly over
//! the canvas; collisions between points (or with text pixels) are
//! allowed and simply overwrite.

use crate::error::{WarpError, WarpResult};
use rand::RngExt;
use rand::rand_core::RngCore;

/// Number of noise points for a canvas and coverage fraction.
///
/// `floor(width * height * percent)` - the exact number of overlay
/// writes the compositor performs.
pub fn noise_point_count(width: u32, height: u32, percent: f64) -> usize {
    (width as f64 * height as f64 * percent).floor() as usize
}

/// Produces the coordinates to overwrite with the noise color.
///
/// Every returned pair must lie in `[0, width) x [0, height)`; order
/// is the write order (later points win ties).
pub trait NoiseStrategy {
    /// Generate the full point set for one image build.
    fn scatter(&self, width: u32, height: u32, rng: &mut dyn RngCore) -> Vec<(u32, u32)>;
}

/// Uniform scatter over the canvas, default strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformScatter {
    percent: f64,
}

impl UniformScatter {
    /// Create a scatter covering `percent` of the pixel count.
    ///
    /// # Errors
    ///
    /// Returns [`WarpError::InvalidPercent`] unless `percent` is a
    /// finite value in `[0, 1]`.
    pub fn new(percent: f64) -> WarpResult<Self> {
        if !percent.is_finite() || !(0.0..=1.0).contains(&percent) {
            return Err(WarpError::InvalidPercent(percent));
        }
        Ok(Self { percent })
    }

    /// The configured coverage fraction.
    pub fn percent(&self) -> f64 {
        self.percent
    }
}

impl NoiseStrategy for UniformScatter {
    fn scatter(&self, width: u32, height: u32, rng: &mut dyn RngCore) -> Vec<(u32, u32)> {
        let count = noise_point_count(width, height, self.percent);
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            let x = rng.random_range(0..width);
            let y = rng.random_range(0..height);
            points.push((x, y));
        }
        points
    }
}

/// No-op strategy for the noise-disabled case.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNoise;

impl NoiseStrategy for NoNoise {
    fn scatter(&self, _width: u32, _height: u32, _rng: &mut dyn RngCore) -> Vec<(u32, u32)> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_point_count_floor() {
        assert_eq!(noise_point_count(100, 100, 0.05), 500);
        assert_eq!(noise_point_count(120, 48, 0.1), 576);
        assert_eq!(noise_point_count(10, 10, 0.999), 99);
        assert_eq!(noise_point_count(10, 10, 0.0), 0);
    }

    #[test]
    fn test_uniform_scatter_rejects_bad_percent() {
        assert!(matches!(
            UniformScatter::new(-0.1),
            Err(WarpError::InvalidPercent(_))
        ));
        assert!(matches!(
            UniformScatter::new(1.5),
            Err(WarpError::InvalidPercent(_))
        ));
        assert!(matches!(
            UniformScatter::new(f64::NAN),
            Err(WarpError::InvalidPercent(_))
        ));
    }

    #[test]
    fn test_uniform_scatter_zero_percent_is_empty() {
        let scatter = UniformScatter::new(0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(scatter.scatter(100, 100, &mut rng).is_empty());
    }

    #[test]
    fn test_uniform_scatter_count_and_bounds() {
        let scatter = UniformScatter::new(0.05).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let points = scatter.scatter(100, 100, &mut rng);
        assert_eq!(points.len(), 500);
        assert!(points.iter().all(|&(x, y)| x < 100 && y < 100));
    }

    #[test]
    fn test_uniform_scatter_reproducible() {
        let scatter = UniformScatter::new(0.1).unwrap();
        let mut rng1 = StdRng::seed_from_u64(123);
        let mut rng2 = StdRng::seed_from_u64(123);
        assert_eq!(
            scatter.scatter(64, 32, &mut rng1),
            scatter.scatter(64, 32, &mut rng2)
        );
    }

    #[test]
    fn test_uniform_scatter_different_seeds() {
        let scatter = UniformScatter::new(0.1).unwrap();
        let mut rng1 = StdRng::seed_from_u64(123);
        let mut rng2 = StdRng::seed_from_u64(456);
        assert_ne!(
            scatter.scatter(64, 32, &mut rng1),
            scatter.scatter(64, 32, &mut rng2)
        );
    }

    #[test]
    fn test_no_noise_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(NoNoise.scatter(100, 100, &mut rng).is_empty());
    }
}
