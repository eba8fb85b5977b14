//! captcha-warp - Pixel remapping and noise overlay
//!
//! The distortion engine at the center of captcha generation:
//!
//! - [`DistortionStrategy`] with [`SineWarp`] (wave warp) and
//!   [`IdentityWarp`] (disabled) - destination-to-source coordinate
//!   mapping
//! - [`MagnitudeRange`] / [`MagnitudeScope`] - how the random warp
//!   amplitude is drawn and how often
//! - [`NoiseStrategy`] with [`UniformScatter`] and [`NoNoise`] -
//!   where the noise pixels land
//!
//! Everything random flows through a caller-supplied `rand` generator
//! so image builds are reproducible under a fixed seed.

pub mod distort;
mod error;
pub mod noise;

pub use distort::{
    DistortionStrategy, IdentityWarp, MagnitudeRange, MagnitudeScope, PHASE_DIVISOR, SineWarp,
    clamp_source,
};
pub use error::{WarpError, WarpResult};
pub use noise::{NoNoise, NoiseStrategy, UniformScatter, noise_point_count};
