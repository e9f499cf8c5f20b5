//! Core types for RayLab.
//!
//! This crate hosts what every other workspace member needs: the error
//! enum, the `Result` alias, and the immutable result structs produced by
//! the sampling/binning/fit pipeline.

pub mod error;
pub mod types;

pub use error::{Error, Result};

/// Crate version string (workspace-wide).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
