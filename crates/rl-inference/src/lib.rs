//! Statistical experiment logic for RayLab.
//!
//! The pipeline is linear: a sample from `rl-prob` goes through
//! [`histogram::histogram`] into [`gof::chi_squared`], and the same deltas
//! feed [`arrivals::event_sequence`] for the event-flow experiment.

pub mod arrivals;
pub mod gof;
pub mod histogram;
