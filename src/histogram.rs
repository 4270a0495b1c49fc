//! Equal-width frequency histograms over generated samples.

use core::fmt;
use core::slice;

use crate::error::{Error, Result};
use crate::stats;
use crate::transforms;

/// A single bin `[start, end)` with its occupancy count.
///
/// The last bin of a histogram is closed on the right instead, so the
/// maximum sample value is always counted.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bin {
    /// Lower boundary (inclusive), rounded to 4 decimals for display.
    pub start: f64,
    /// Upper boundary, rounded to 4 decimals for display.
    pub end: f64,
    /// Number of sample values falling in this bin.
    pub count: usize,
}

/// An equal-width frequency histogram, the read-only summary of a sample.
///
/// The observed range `[min, max]` of the source sample is partitioned
/// into `k` equal-width intervals, each carrying the count of values it
/// contains. Counts always sum to the source sample length.
///
/// # Examples
///
/// ```
/// use variates::Histogram;
///
/// let histogram = Histogram::from_sample(&[1.0, 2.0, 3.0, 4.0, 5.0], 2)?;
/// let counts: Vec<usize> = histogram.bins().iter().map(|b| b.count).collect();
/// assert_eq!(counts, vec![2, 3]);
/// # Ok::<(), variates::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    bins: Vec<Bin>,
    total_count: usize,
}

impl Histogram {
    /// Partitions `sample` into `k` equal-width bins and counts occupancy.
    ///
    /// Each value maps to the bin index `floor((value - min) / width)`,
    /// clamped to the last bin so floating-point rounding at the upper
    /// edge cannot push the maximum out of range. When all values are
    /// equal the range widens to `[v - 0.5, v + 0.5]`, keeping the bin
    /// width nonzero and still producing `k` bins.
    ///
    /// Counting uses the unrounded bin edges; only the reported
    /// boundaries are rounded to 4 decimals.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroBins`] if `k` is zero and
    /// [`Error::EmptySample`] if `sample` is empty.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn from_sample(sample: &[f64], k: usize) -> Result<Self> {
        if k == 0 {
            return Err(Error::ZeroBins);
        }
        let (Some(mut lo), Some(mut hi)) = (stats::min(sample), stats::max(sample)) else {
            return Err(Error::EmptySample);
        };
        if hi <= lo {
            // Degenerate range: all values equal. Widen to unit width so
            // the bin width stays nonzero.
            lo -= 0.5;
            hi += 0.5;
        }
        let width = (hi - lo) / k as f64;

        let mut counts = vec![0usize; k];
        for &value in sample {
            let index = ((value - lo) / width).floor() as usize;
            counts[index.min(k - 1)] += 1;
        }

        let bins = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| Bin {
                start: transforms::round4(lo + i as f64 * width),
                end: if i + 1 == k {
                    transforms::round4(hi)
                } else {
                    transforms::round4(lo + (i + 1) as f64 * width)
                },
                count,
            })
            .collect();

        trace_debug!(n = sample.len(), k, "summarized sample");
        Ok(Self {
            bins,
            total_count: sample.len(),
        })
    }

    /// The bins in ascending boundary order.
    #[must_use]
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Number of bins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Whether the histogram has no bins. Never true for a histogram
    /// built by [`from_sample`](Self::from_sample).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Total number of counted values, equal to the source sample length.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Iterates over the bins.
    pub fn iter(&self) -> slice::Iter<'_, Bin> {
        self.bins.iter()
    }
}

impl<'a> IntoIterator for &'a Histogram {
    type Item = &'a Bin;
    type IntoIter = slice::Iter<'a, Bin>;

    fn into_iter(self) -> Self::IntoIter {
        self.bins.iter()
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bin) in self.bins.iter().enumerate() {
            let close = if i + 1 == self.bins.len() { ']' } else { ')' };
            writeln!(
                f,
                "[{:.4}, {:.4}{close} {}",
                bin.start, bin.end, bin.count
            )?;
        }
        Ok(())
    }
}
