//! Common data types for RayLab

use serde::{Deserialize, Serialize};

/// Parameters of one experiment run, shared by the batch-sampling and
/// event-flow experiments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Number of variates to draw.
    pub sample_size: usize,

    /// Number of histogram intervals.
    pub bin_count: usize,

    /// Chi-squared critical value the statistic is compared against.
    pub critical_value: f64,

    /// RNG seed; `None` means entropy-seeded.
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        // The batch experiment: N=1000, 12 bins, Pearson threshold 24.7.
        Self { sample_size: 1000, bin_count: 12, critical_value: 24.7, seed: None }
    }
}

/// A single histogram interval.
///
/// Interior bins cover the half-open range `[lower, upper)`; the last bin
/// is closed on both ends so the sample maximum is never dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// 1-based interval index in `1..=bin_count`.
    pub index: usize,

    /// Lower boundary.
    pub lower: f64,

    /// Upper boundary.
    pub upper: f64,

    /// Interval midpoint, `(lower + upper) / 2`.
    pub midpoint: f64,

    /// Number of sample values falling into this interval.
    pub count: usize,

    /// Empirical density, `count / (sample_size * bin_width)`.
    pub p_stat: f64,

    /// Theoretical density evaluated at `midpoint`.
    pub p_theor: f64,
}

/// Equal-width histogram over a sample, with empirical and theoretical
/// densities per bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramResult {
    /// Bins in index order (`1..=bin_count`).
    pub bins: Vec<Bin>,

    /// Smallest sample value.
    pub min_value: f64,

    /// Largest sample value.
    pub max_value: f64,

    /// Width of each interval, `(max_value - min_value) / bin_count`.
    pub bin_width: f64,

    /// Number of values in the sample the histogram was built from.
    pub sample_size: usize,
}

impl HistogramResult {
    /// Sum of per-bin counts. Equals `sample_size` by construction; exposed
    /// so reporting code can show the self-check.
    pub fn counts_sum(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Interval boundaries `min_value, min_value + w, ..., max_value`
    /// (length `bin_count + 1`).
    pub fn boundaries(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.bins.len() + 1);
        out.push(self.min_value);
        out.extend(self.bins.iter().map(|b| b.upper));
        out
    }
}

/// Outcome of the chi-squared goodness-of-fit comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitStatistic {
    /// The chi-squared statistic.
    pub statistic: f64,

    /// Threshold the statistic was compared against.
    pub critical_value: f64,

    /// `statistic <= critical_value`.
    pub passes: bool,
}

impl FitStatistic {
    /// Classify a statistic against a critical value.
    pub fn evaluate(statistic: f64, critical_value: f64) -> Self {
        Self { statistic, critical_value, passes: statistic <= critical_value }
    }
}

/// One row of a simulated event flow: the inter-arrival delta consumed at
/// this position and the cumulative event time.
///
/// Index 0 carries `delta = 0` and marks the observation start, not a real
/// arrival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// 0-based position in the flow.
    pub index: usize,

    /// Inter-arrival time consumed at this position.
    pub delta: f64,

    /// Running sum of all deltas through `index`.
    pub time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experiment_config_default() {
        let cfg = ExperimentConfig::default();
        assert_eq!(cfg.sample_size, 1000);
        assert_eq!(cfg.bin_count, 12);
        assert!((cfg.critical_value - 24.7).abs() < 1e-12);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn test_experiment_config_roundtrip() {
        let cfg = ExperimentConfig { sample_size: 200, bin_count: 12, critical_value: 24.7, seed: Some(42) };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: ExperimentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn test_fit_statistic_evaluate() {
        let ok = FitStatistic::evaluate(10.0, 24.7);
        assert!(ok.passes);
        let bad = FitStatistic::evaluate(30.0, 24.7);
        assert!(!bad.passes);
        // Equality counts as passing.
        assert!(FitStatistic::evaluate(24.7, 24.7).passes);
    }

    #[test]
    fn test_histogram_boundaries() {
        let bins = vec![
            Bin { index: 1, lower: 0.0, upper: 1.0, midpoint: 0.5, count: 2, p_stat: 1.0, p_theor: 0.4 },
            Bin { index: 2, lower: 1.0, upper: 2.0, midpoint: 1.5, count: 0, p_stat: 0.0, p_theor: 0.3 },
        ];
        let hist = HistogramResult {
            bins,
            min_value: 0.0,
            max_value: 2.0,
            bin_width: 1.0,
            sample_size: 2,
        };
        assert_eq!(hist.boundaries(), vec![0.0, 1.0, 2.0]);
        assert_eq!(hist.counts_sum(), 2);
    }
}
