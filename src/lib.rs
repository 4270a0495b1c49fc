#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Pseudo-random sample generation and histogram summarization.
//!
//! Generates fixed-size samples from three statistical distributions —
//! uniform, exponential, and normal — and summarizes them into
//! equal-width frequency histograms ready for display. Generation uses
//! inverse-transform sampling for the uniform and exponential cases and
//! the Box–Muller transform for the normal case, all over one seedable
//! randomness source.
//!
//! # Getting Started
//!
//! Generate a sample and summarize it in four lines:
//!
//! ```
//! use variates::prelude::*;
//!
//! let sampler = Sampler::with_seed(42);
//! let sample = sampler.sample_normal(1_000, 0.0, 1.0)?;
//! let histogram = Histogram::from_sample(&sample, 10)?;
//! assert_eq!(histogram.total_count(), 1_000);
//! # Ok::<(), variates::Error>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Sampler`] | Draw fixed-size samples for a chosen distribution; owns the randomness source. |
//! | [`Distribution`] | Tagged selection of a distribution kind with its parameter set. |
//! | [`Histogram`] | Equal-width frequency summary of a sample — bins plus occupancy counts. |
//! | [`transforms`] | The pure per-draw math, testable without a randomness source. |
//! | [`stats`] | Descriptive statistics (mean, variance, extrema) over a sample. |
//!
//! Samples are plain `Vec<f64>` values, rounded to 4 decimal digits and
//! owned by the caller; every generator call draws fresh randomness.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on public types | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at generation and report points | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod distribution;
mod error;
mod histogram;
mod rng_util;
mod sampler;
pub mod stats;
pub mod transforms;
mod visualization;

pub use distribution::{
    Distribution, ExponentialDistribution, NormalDistribution, UniformDistribution,
};
pub use error::{Error, Result};
pub use histogram::{Bin, Histogram};
pub use sampler::Sampler;
pub use visualization::generate_html_report;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use variates::prelude::*;
/// ```
pub mod prelude {
    pub use crate::distribution::{
        Distribution, ExponentialDistribution, NormalDistribution, UniformDistribution,
    };
    pub use crate::error::{Error, Result};
    pub use crate::histogram::{Bin, Histogram};
    pub use crate::sampler::Sampler;
    pub use crate::visualization::generate_html_report;
}
