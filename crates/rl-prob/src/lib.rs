//! Probability building blocks for RayLab.
//!
//! This crate hosts the distribution math the experiments are built on:
//! the Rayleigh(σ=1) density/CDF/quantile and the inverse-transform
//! sampler that turns a uniform source into Rayleigh variates.

pub mod rayleigh;
