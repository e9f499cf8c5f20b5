//! Chi-squared goodness-of-fit test.
//!
//! The statistic is `Σ_k ((count_k / N) - p_theor_k)² / p_theor_k` over the
//! histogram bins. Note the denominator is the theoretical *density*, not
//! an expected count; this matches the experiment this tool reproduces and
//! is deliberately not the textbook Pearson form.

use rl_core::types::{FitStatistic, HistogramResult};
use rl_core::{Error, Result};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Compute the chi-squared statistic for a histogram.
///
/// Errors with `Computation` if any bin's theoretical density is zero,
/// which cannot happen for the Rayleigh(1) density on a properly bounded
/// sample (midpoints stay strictly positive).
pub fn chi_squared(hist: &HistogramResult) -> Result<f64> {
    let n = hist.sample_size as f64;
    let mut statistic = 0.0;
    for bin in &hist.bins {
        if bin.p_theor == 0.0 {
            return Err(Error::Computation(format!(
                "zero theoretical density in bin {}",
                bin.index
            )));
        }
        let d = bin.count as f64 / n - bin.p_theor;
        statistic += d * d / bin.p_theor;
    }
    Ok(statistic)
}

/// Classify a statistic against an explicit critical value.
pub fn evaluate(statistic: f64, critical_value: f64) -> FitStatistic {
    FitStatistic::evaluate(statistic, critical_value)
}

/// Chi-squared critical value for `dof` degrees of freedom at significance
/// level `alpha` (the `1 - alpha` quantile).
pub fn critical_value(dof: usize, alpha: f64) -> Result<f64> {
    if dof == 0 {
        return Err(Error::Validation("dof must be > 0".to_string()));
    }
    if !(0.0..1.0).contains(&alpha) || alpha == 0.0 {
        return Err(Error::Validation(format!("alpha must be in (0, 1), got {}", alpha)));
    }
    let dist = ChiSquared::new(dof as f64)
        .map_err(|e| Error::Computation(format!("chi-squared({}): {}", dof, e)))?;
    Ok(dist.inverse_cdf(1.0 - alpha))
}
