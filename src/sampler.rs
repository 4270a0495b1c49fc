//! Sample generation for the supported distributions.

use parking_lot::Mutex;

use crate::distribution::Distribution;
use crate::error::{Error, Result};
use crate::rng_util;
use crate::transforms;

/// Generates fixed-size samples of pseudo-random values.
///
/// The sampler owns the shared randomness source. Every call draws fresh
/// entropy, so repeated calls with identical parameters produce
/// independent samples; construct with [`Sampler::with_seed`] to make the
/// full sequence reproducible.
///
/// All generated values are rounded to 4 decimal digits. A successful
/// call always returns a sample of exactly the requested length; failures
/// are detected before any value is drawn, never partway through.
///
/// # Examples
///
/// ```
/// use variates::Sampler;
///
/// let sampler = Sampler::with_seed(42);
/// let sample = sampler.sample_uniform(10, 0.0, 1.0);
/// assert_eq!(sample.len(), 10);
/// ```
pub struct Sampler {
    rng: Mutex<fastrand::Rng>,
}

impl Sampler {
    /// Creates a sampler with a non-deterministic seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Creates a sampler with a fixed seed for reproducibility.
    ///
    /// Using the same seed will produce the same sequence of samples.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }

    /// Draws `n` values uniformly distributed over `[low, high)`.
    ///
    /// The bounds are not ordered: when `low > high` the sample simply
    /// lies in `[high, low]`. This mirrors the underlying transform
    /// `low + u * (high - low)` and is accepted, not rejected.
    #[must_use]
    pub fn sample_uniform(&self, n: usize, low: f64, high: f64) -> Vec<f64> {
        let mut rng = self.rng.lock();
        let sample: Vec<f64> = (0..n)
            .map(|_| transforms::round4(transforms::uniform(rng.f64(), low, high)))
            .collect();
        trace_debug!(n, low, high, "generated uniform sample");
        sample
    }

    /// Draws `n` values from an exponential distribution with the given
    /// rate, via inverse-transform sampling.
    ///
    /// The rate is validated before any value is drawn: zero would divide
    /// by zero and a negative or non-finite rate has no exponential
    /// interpretation, so all three are rejected up front instead of
    /// propagating infinities.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPositiveRate`] unless `rate` is a positive
    /// finite number.
    pub fn sample_exponential(&self, n: usize, rate: f64) -> Result<Vec<f64>> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(Error::NonPositiveRate { rate });
        }
        let mut rng = self.rng.lock();
        let sample = (0..n)
            .map(|_| transforms::round4(transforms::exponential(rng.f64(), rate)))
            .collect();
        trace_debug!(n, rate, "generated exponential sample");
        Ok(sample)
    }

    /// Draws `n` values from `N(mean, std_dev²)` using the Box–Muller
    /// transform.
    ///
    /// Values are generated in pairs from two uniform draws; for odd `n`
    /// the second member of the final pair is discarded so the sample
    /// length is exactly `n`. The first draw of each pair is redrawn
    /// until strictly positive, keeping the logarithm finite.
    ///
    /// `std_dev` of zero is allowed and yields a constant sample equal
    /// to `mean`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeStdDev`] if `std_dev` is negative or not
    /// finite.
    pub fn sample_normal(&self, n: usize, mean: f64, std_dev: f64) -> Result<Vec<f64>> {
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(Error::NegativeStdDev { std_dev });
        }
        let mut rng = self.rng.lock();
        let mut sample = Vec::with_capacity(n);
        while sample.len() < n {
            let u1 = rng_util::positive_f64(&mut rng);
            let u2 = rng.f64();
            let (z1, z2) = transforms::normal_pair(u1, u2, mean, std_dev);
            sample.push(transforms::round4(z1));
            if sample.len() < n {
                sample.push(transforms::round4(z2));
            }
        }
        trace_debug!(n, mean, std_dev, "generated normal sample");
        Ok(sample)
    }

    /// Draws `n` values from the given distribution.
    ///
    /// Dispatches to the matching generator; equivalent to calling
    /// [`sample_uniform`](Self::sample_uniform),
    /// [`sample_exponential`](Self::sample_exponential), or
    /// [`sample_normal`](Self::sample_normal) directly.
    ///
    /// # Errors
    ///
    /// Propagates the parameter validation errors of the selected
    /// generator.
    pub fn sample(&self, distribution: &Distribution, n: usize) -> Result<Vec<f64>> {
        match distribution {
            Distribution::Uniform(d) => Ok(self.sample_uniform(n, d.low, d.high)),
            Distribution::Exponential(d) => self.sample_exponential(n, d.rate),
            Distribution::Normal(d) => self.sample_normal(n, d.mean, d.std_dev),
        }
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}
