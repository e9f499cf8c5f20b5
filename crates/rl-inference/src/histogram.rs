//! Adaptive equal-width histogram binning.
//!
//! The range `[min, max]` of the sample is split into `bin_count` intervals
//! of equal width. Interior intervals are half-open `[lo, hi)`; the last
//! one is closed so the sample maximum lands in it instead of falling off
//! the end. Counts are tallied first, then densities and midpoints are
//! derived into an immutable [`HistogramResult`] in a second phase.

use rl_core::types::{Bin, HistogramResult};
use rl_core::{Error, Result};

/// Bin `sample` into `bin_count` equal-width intervals over its range.
///
/// Per bin: `midpoint = (lo + hi) / 2`, `p_theor` is the Rayleigh(1)
/// density at the midpoint, `p_stat = count / (N * bin_width)`.
///
/// Assignment walks the boundaries and takes the first bin whose upper
/// boundary strictly exceeds the value; the maximum (which no boundary
/// exceeds) goes to the last bin. At exact interior boundary values this
/// is sensitive to float rounding; the tie goes to the higher bin the
/// comparison resolves to.
///
/// Errors: `Validation` on an empty sample or `bin_count == 0`,
/// `DegenerateSample` when all values are identical (zero bin width would
/// poison the density computation).
pub fn histogram(sample: &[f64], bin_count: usize) -> Result<HistogramResult> {
    if sample.is_empty() {
        return Err(Error::Validation("sample must be non-empty".to_string()));
    }
    if bin_count == 0 {
        return Err(Error::Validation("bin_count must be > 0".to_string()));
    }

    // f64::min/max skip NaN, so check each value before taking the range.
    if sample.iter().any(|x| !x.is_finite()) {
        return Err(Error::Validation("sample must be finite".to_string()));
    }

    let min_value = sample.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_value = sample.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let bin_width = (max_value - min_value) / bin_count as f64;
    if bin_width == 0.0 {
        return Err(Error::DegenerateSample(format!(
            "all {} sample values equal {}; zero-width bins",
            sample.len(),
            min_value
        )));
    }

    // boundaries[0] = min, boundaries[bin_count] = max
    let boundaries: Vec<f64> =
        (0..=bin_count).map(|i| min_value + bin_width * i as f64).collect();

    // Phase 1: tally.
    let mut counts = vec![0usize; bin_count];
    for &x in sample {
        match boundaries[1..].iter().position(|&b| x < b) {
            Some(k) => counts[k] += 1,
            // No upper boundary exceeds x, so x == max_value.
            None => counts[bin_count - 1] += 1,
        }
    }

    // Phase 2: derive densities and midpoints.
    let n = sample.len() as f64;
    let bins = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let lower = boundaries[i];
            let upper = boundaries[i + 1];
            let midpoint = (lower + upper) / 2.0;
            Bin {
                index: i + 1,
                lower,
                upper,
                midpoint,
                count,
                p_stat: count as f64 / (n * bin_width),
                p_theor: rl_prob::rayleigh::pdf(midpoint),
            }
        })
        .collect();

    Ok(HistogramResult { bins, min_value, max_value, bin_width, sample_size: sample.len() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_counts_sum_to_sample_size() {
        let mut rng = StdRng::seed_from_u64(42);
        let sample = rl_prob::rayleigh::sample_n(&mut rng, 1000).unwrap();
        let hist = histogram(&sample, 12).unwrap();
        assert_eq!(hist.bins.len(), 12);
        assert_eq!(hist.counts_sum(), 1000);
    }

    #[test]
    fn test_bins_partition_range() {
        let sample = vec![0.5, 1.0, 1.5, 2.0, 3.5];
        let hist = histogram(&sample, 3).unwrap();
        assert_eq!(hist.min_value, 0.5);
        assert_eq!(hist.max_value, 3.5);
        assert!((hist.bin_width - 1.0).abs() < 1e-12);
        // Adjacent bins share boundaries, first/last hit the range ends.
        assert_eq!(hist.bins[0].lower, hist.min_value);
        assert_eq!(hist.bins[2].upper, hist.max_value);
        for w in hist.bins.windows(2) {
            assert_eq!(w[0].upper, w[1].lower);
        }
    }

    #[test]
    fn test_maximum_lands_in_last_bin() {
        let sample = vec![0.0, 1.0, 2.0, 3.0];
        let hist = histogram(&sample, 3).unwrap();
        let counts: Vec<usize> = hist.bins.iter().map(|b| b.count).collect();
        // 3.0 == max goes to the last (closed) bin alongside 2.0.
        assert_eq!(counts, vec![1, 1, 2]);
    }

    #[test]
    fn test_densities() {
        let sample = vec![0.0, 0.25, 1.0, 2.0];
        let hist = histogram(&sample, 2).unwrap();
        // width 1, N = 4: counts [2, 2], p_stat = 2 / (4 * 1) = 0.5
        assert_eq!(hist.bins[0].count, 2);
        assert!((hist.bins[0].p_stat - 0.5).abs() < 1e-12);
        // p_theor is the Rayleigh(1) pdf at the midpoint.
        let m = hist.bins[0].midpoint;
        assert!((hist.bins[0].p_theor - m * (-(m * m) / 2.0).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_idempotent() {
        let mut rng = StdRng::seed_from_u64(9);
        let sample = rl_prob::rayleigh::sample_n(&mut rng, 200).unwrap();
        let a = histogram(&sample, 12).unwrap();
        let b = histogram(&sample, 12).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_sample_rejected() {
        assert!(matches!(histogram(&[], 12), Err(Error::Validation(_))));
    }

    #[test]
    fn test_zero_bins_rejected() {
        assert!(matches!(histogram(&[1.0, 2.0], 0), Err(Error::Validation(_))));
    }

    #[test]
    fn test_non_finite_sample_rejected() {
        assert!(matches!(histogram(&[1.0, f64::NAN, 2.0], 2), Err(Error::Validation(_))));
        assert!(matches!(histogram(&[1.0, f64::INFINITY], 2), Err(Error::Validation(_))));
    }

    #[test]
    fn test_degenerate_sample_rejected() {
        // Size-1 sample has zero range.
        assert!(matches!(histogram(&[1.5], 1), Err(Error::DegenerateSample(_))));
        // So does any constant sample.
        assert!(matches!(histogram(&[2.0, 2.0, 2.0], 4), Err(Error::DegenerateSample(_))));
    }
}
