//! Per-draw transform math shared by the generators.
//!
//! Each function maps unit-interval draws onto a target distribution and
//! is fully deterministic, so the sampling algebra can be exercised
//! without a randomness source.

use core::f64::consts::TAU;

/// Maps a unit draw `u` onto `[low, high)`: `low + u * (high - low)`.
///
/// When `low > high` the result lies in `(high, low]` instead; the
/// bounds are not ordered.
///
/// # Examples
///
/// ```
/// use variates::transforms::uniform;
///
/// assert_eq!(uniform(0.5, 0.0, 10.0), 5.0);
/// ```
#[inline]
#[must_use]
pub fn uniform(u: f64, low: f64, high: f64) -> f64 {
    low + u * (high - low)
}

/// Maps a unit draw `u` onto an exponential distribution with the given
/// rate via the inverse CDF: `-ln(1 - u) / rate`.
///
/// The caller guarantees `rate > 0`. For `u` in `[0, 1)` the argument
/// `1 - u` stays in `(0, 1]`, so the logarithm is finite and the result
/// is non-negative.
#[inline]
#[must_use]
pub fn exponential(u: f64, rate: f64) -> f64 {
    -(1.0 - u).ln() / rate
}

/// Box–Muller transform: two independent unit draws to two independent
/// `N(mean, std_dev²)` values.
///
/// `r = sqrt(-2 ln u1)` and `theta = 2π u2` give the polar coordinates
/// of a standard-normal pair. `u1` must be strictly positive; the
/// sampler guarantees this by redrawing zero.
#[inline]
#[must_use]
pub fn normal_pair(u1: f64, u2: f64, mean: f64, std_dev: f64) -> (f64, f64) {
    let r = (-2.0 * u1.ln()).sqrt();
    let theta = TAU * u2;
    (
        mean + std_dev * r * theta.cos(),
        mean + std_dev * r * theta.sin(),
    )
}

/// Rounds a value to 4 decimal digits, the sample display precision.
#[inline]
#[must_use]
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
