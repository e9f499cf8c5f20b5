//! RayLab CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rl_core::types::{EventRecord, ExperimentConfig, FitStatistic, HistogramResult};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "raylab")]
#[command(about = "RayLab - Rayleigh sampling and goodness-of-fit experiments")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample Rayleigh(1) variates, bin them, and run the chi-squared fit test
    SampleFit {
        /// Number of variates to draw
        #[arg(long, default_value = "1000")]
        count: usize,

        /// Number of histogram intervals
        #[arg(long, default_value = "12")]
        bins: usize,

        /// Chi-squared critical value
        #[arg(long, default_value = "24.7")]
        crit: f64,

        /// Derive the critical value from a significance level instead
        /// (chi-squared quantile at 1 - alpha with bins - 1 dof)
        #[arg(long, conflicts_with = "crit")]
        alpha: Option<f64>,

        /// RNG seed. Omitted means entropy-seeded.
        #[arg(long)]
        seed: Option<u64>,

        /// Output file for results (pretty JSON). Defaults to table on stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Simulate an event flow with Rayleigh(1) inter-arrival times and
    /// validate the deltas with the same chi-squared test
    Arrivals {
        /// Number of events to simulate
        #[arg(long, default_value = "200")]
        count: usize,

        /// Number of histogram intervals for the validation step
        #[arg(long, default_value = "12")]
        bins: usize,

        /// Chi-squared critical value
        #[arg(long, default_value = "24.7")]
        crit: f64,

        /// RNG seed. Omitted means entropy-seeded.
        #[arg(long)]
        seed: Option<u64>,

        /// Output file for results (pretty JSON). Defaults to table on stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::SampleFit { count, bins, crit, alpha, seed, output } => {
            cmd_sample_fit(count, bins, crit, alpha, seed, output.as_ref())
        }
        Commands::Arrivals { count, bins, crit, seed, output } => {
            cmd_arrivals(count, bins, crit, seed, output.as_ref())
        }
        Commands::Version => {
            println!("raylab {}", rl_core::VERSION);
            Ok(())
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => {
            tracing::debug!(seed = s, "seeded rng");
            StdRng::seed_from_u64(s)
        }
        None => StdRng::from_os_rng(),
    }
}

/// Sample, bin, and test per the config. Shared by both experiments.
fn run_pipeline(config: &ExperimentConfig) -> Result<(Vec<f64>, HistogramResult, FitStatistic)> {
    let mut rng = make_rng(config.seed);
    let sample = rl_prob::rayleigh::sample_n(&mut rng, config.sample_size)?;
    let hist = rl_inference::histogram::histogram(&sample, config.bin_count)?;
    let stat = rl_inference::gof::chi_squared(&hist)?;
    let fit = rl_inference::gof::evaluate(stat, config.critical_value);
    tracing::info!(statistic = fit.statistic, passes = fit.passes, "fit test complete");
    Ok((sample, hist, fit))
}

fn cmd_sample_fit(
    count: usize,
    bins: usize,
    crit: f64,
    alpha: Option<f64>,
    seed: Option<u64>,
    output: Option<&PathBuf>,
) -> Result<()> {
    let critical_value = match alpha {
        Some(a) => {
            let dof = bins.saturating_sub(1);
            let c = rl_inference::gof::critical_value(dof, a)?;
            tracing::info!(dof, alpha = a, critical_value = c, "derived critical value");
            c
        }
        None => crit,
    };
    let config = ExperimentConfig { sample_size: count, bin_count: bins, critical_value, seed };

    let (_sample, hist, fit) = run_pipeline(&config)?;

    if let Some(path) = output {
        let json = serde_json::json!({
            "config": config,
            "histogram": hist,
            "fit": fit,
        });
        std::fs::write(path, serde_json::to_string_pretty(&json)?)?;
    } else {
        print_histogram(&hist);
        print_fit(&fit);
    }
    Ok(())
}

fn cmd_arrivals(
    count: usize,
    bins: usize,
    crit: f64,
    seed: Option<u64>,
    output: Option<&PathBuf>,
) -> Result<()> {
    let config = ExperimentConfig { sample_size: count, bin_count: bins, critical_value: crit, seed };

    // The deltas double as the validation sample: the same pipeline bins
    // them and checks the fit against the distribution they were drawn from.
    let (deltas, hist, fit) = run_pipeline(&config)?;
    let events = rl_inference::arrivals::event_sequence(&deltas)?;
    tracing::info!(
        events = events.len(),
        total_time = events.last().map(|e| e.time).unwrap_or(0.0),
        "event flow built"
    );

    if let Some(path) = output {
        let json = serde_json::json!({
            "config": config,
            "events": events,
            "histogram": hist,
            "fit": fit,
        });
        std::fs::write(path, serde_json::to_string_pretty(&json)?)?;
    } else {
        print_events(&events);
        print_histogram(&hist);
        print_fit(&fit);
    }
    Ok(())
}

fn print_histogram(hist: &HistogramResult) {
    println!("min = {:.6}  max = {:.6}  bin width = {:.6}", hist.min_value, hist.max_value, hist.bin_width);
    let boundaries: Vec<String> =
        hist.boundaries().iter().map(|b| format!("{:.6}", b)).collect();
    println!("boundaries: [{}]", boundaries.join(", "));
    println!();
    println!("{:>4} {:>12} {:>12} {:>12} {:>7} {:>10} {:>10}", "bin", "lower", "upper", "midpoint", "count", "p_stat", "p_theor");
    for b in &hist.bins {
        println!(
            "{:>4} {:>12.6} {:>12.6} {:>12.6} {:>7} {:>10.6} {:>10.6}",
            b.index, b.lower, b.upper, b.midpoint, b.count, b.p_stat, b.p_theor
        );
    }
    println!();
    println!("counts sum: {} / {}", hist.counts_sum(), hist.sample_size);
}

fn print_fit(fit: &FitStatistic) {
    println!(
        "X^2 = {:.6}  critical = {:.4}  {}",
        fit.statistic,
        fit.critical_value,
        if fit.passes { "PASS" } else { "FAIL" }
    );
}

fn print_events(events: &[EventRecord]) {
    println!("{:>6} {:>14} {:>14}", "index", "delta", "event_time");
    for e in events {
        println!("{:>6} {:>14.6} {:>14.6}", e.index, e.delta, e.time);
    }
    println!();
}
