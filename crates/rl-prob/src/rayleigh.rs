//! Rayleigh(σ=1) distribution utilities.
//!
//! The experiments only model the unit-scale Rayleigh distribution
//! (variance parameter a = σ² = 1), so every function here is specialized
//! to it. Support: `x >= 0`.

use rand::Rng;
use rand_distr::Distribution;
use rl_core::{Error, Result};

/// PDF of the Rayleigh(1) distribution at `x`: `x * exp(-x²/2)`.
///
/// Returns 0 outside the support.
pub fn pdf(x: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    x * (-(x * x) / 2.0).exp()
}

/// CDF of the Rayleigh(1) distribution at `x`: `1 - exp(-x²/2)`.
pub fn cdf(x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    1.0 - (-(x * x) / 2.0).exp()
}

/// Quantile (inverse CDF) of the Rayleigh(1) distribution.
///
/// `quantile(u) = sqrt(-2 ln(1 - u))` for `u` in `[0, 1)`. This is the
/// inverse-transform kernel used by the sampler; `u = 0` maps to 0, which
/// is a valid draw, and `1 - u` never reaches 0 so the log is finite.
pub fn quantile(u: f64) -> Result<f64> {
    if !(0.0..1.0).contains(&u) {
        return Err(Error::Validation(format!("u must be in [0, 1), got {}", u)));
    }
    Ok((-2.0 * (1.0 - u).ln()).sqrt())
}

/// Unit-scale Rayleigh distribution as a [`rand_distr::Distribution`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Rayleigh;

impl Distribution<f64> for Rayleigh {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // `random::<f64>()` is uniform on [0, 1), so `1 - u` stays in (0, 1]
        // and the log never sees 0.
        let u: f64 = rng.random();
        (-2.0 * (1.0 - u).ln()).sqrt()
    }
}

/// Draw exactly `count` independent Rayleigh(1) variates.
///
/// Deterministic given a seeded `rng`.
pub fn sample_n<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<Vec<f64>> {
    if count == 0 {
        return Err(Error::Validation("count must be > 0".to_string()));
    }
    Ok(Rayleigh.sample_iter(rng).take(count).collect())
}
