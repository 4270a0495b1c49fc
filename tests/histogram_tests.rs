//! Integration tests for histogram summarization.

use variates::{Bin, Distribution, Error, Histogram, Sampler};

#[test]
fn worked_example_from_five_values() {
    let histogram = Histogram::from_sample(&[1.0, 2.0, 3.0, 4.0, 5.0], 2).unwrap();
    assert_eq!(
        histogram.bins(),
        &[
            Bin {
                start: 1.0,
                end: 3.0,
                count: 2
            },
            Bin {
                start: 3.0,
                end: 5.0,
                count: 3
            },
        ]
    );
}

#[test]
fn counts_sum_to_sample_length_for_generated_samples() {
    let sampler = Sampler::with_seed(11);
    let distributions = [
        Distribution::uniform(0.0, 100.0),
        Distribution::exponential(0.5),
        Distribution::normal(-3.0, 4.0),
    ];
    for distribution in &distributions {
        let sample = sampler.sample(distribution, 10_000).unwrap();
        for k in [1, 10, 15, 20, 25] {
            let histogram = Histogram::from_sample(&sample, k).unwrap();
            assert_eq!(histogram.len(), k);
            let total: usize = histogram.iter().map(|b| b.count).sum();
            assert_eq!(total, sample.len(), "{} with {k} bins", distribution.label());
            assert_eq!(histogram.total_count(), sample.len());
        }
    }
}

#[test]
fn bins_are_contiguous_and_equal_width() {
    let sampler = Sampler::with_seed(12);
    let sample = sampler.sample_normal(5_000, 0.0, 1.0).unwrap();
    let histogram = Histogram::from_sample(&sample, 20).unwrap();

    let bins = histogram.bins();
    let width = bins[0].end - bins[0].start;
    for pair in bins.windows(2) {
        // Boundaries are rounded identically, so adjacency is exact.
        assert!(
            (pair[0].end - pair[1].start).abs() < 1e-12,
            "gap between {:?} and {:?}",
            pair[0],
            pair[1]
        );
        let w = pair[1].end - pair[1].start;
        // Displayed widths agree up to the 4-decimal rounding of edges.
        assert!((w - width).abs() < 2e-4, "uneven widths {width} vs {w}");
    }
}

#[test]
fn range_covers_sample_extrema() {
    let sampler = Sampler::with_seed(13);
    let sample = sampler.sample_exponential(5_000, 1.0).unwrap();
    let histogram = Histogram::from_sample(&sample, 10).unwrap();

    let lo = variates::stats::min(&sample).unwrap();
    let hi = variates::stats::max(&sample).unwrap();
    assert!((histogram.bins()[0].start - lo).abs() < 1e-4);
    assert!((histogram.bins()[9].end - hi).abs() < 1e-4);
}

#[test]
fn maximum_value_is_counted_in_the_last_bin() {
    // The maximum maps exactly onto the open upper edge; the clamp must
    // fold it into the final bin.
    let sample = [0.0, 2.5, 5.0, 7.5, 10.0];
    let histogram = Histogram::from_sample(&sample, 4).unwrap();
    assert_eq!(histogram.bins().last().unwrap().count, 2);
}

#[test]
fn single_bin_holds_everything() {
    let sampler = Sampler::with_seed(14);
    let sample = sampler.sample_uniform(1_000, -5.0, 5.0);
    let histogram = Histogram::from_sample(&sample, 1).unwrap();
    assert_eq!(histogram.len(), 1);
    assert_eq!(histogram.bins()[0].count, 1_000);
}

#[test]
fn degenerate_sample_still_produces_k_bins() {
    let sampler = Sampler::with_seed(15);
    // std_dev = 0 gives a constant sample, the degenerate binning case.
    let sample = sampler.sample_normal(500, 42.0, 0.0).unwrap();
    let histogram = Histogram::from_sample(&sample, 10).unwrap();
    assert_eq!(histogram.len(), 10);
    let total: usize = histogram.iter().map(|b| b.count).sum();
    assert_eq!(total, 500);
}

#[test]
fn rejects_empty_sample_and_zero_bins() {
    assert!(matches!(
        Histogram::from_sample(&[], 10),
        Err(Error::EmptySample)
    ));
    assert!(matches!(
        Histogram::from_sample(&[1.0], 0),
        Err(Error::ZeroBins)
    ));
}

#[test]
fn histogram_is_recomputed_per_request() {
    // Same sample, different k: independent summaries, no shared state.
    let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
    let coarse = Histogram::from_sample(&sample, 2).unwrap();
    let fine = Histogram::from_sample(&sample, 4).unwrap();
    assert_eq!(coarse.len(), 2);
    assert_eq!(fine.len(), 4);
    assert_eq!(coarse.total_count(), fine.total_count());
}
