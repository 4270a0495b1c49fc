#![cfg(feature = "serde")]

use variates::{Distribution, Histogram, Sampler};

#[test]
fn distribution_round_trip() {
    let distributions = [
        Distribution::uniform(-1.5, 4.0),
        Distribution::exponential(0.25),
        Distribution::normal(10.0, 2.5),
    ];
    for distribution in &distributions {
        let json = serde_json::to_string(distribution).unwrap();
        let back: Distribution = serde_json::from_str(&json).unwrap();
        assert_eq!(*distribution, back);
    }
}

#[test]
fn histogram_round_trip() {
    let sampler = Sampler::with_seed(42);
    let sample = sampler.sample_normal(1_000, 0.0, 1.0).unwrap();
    let histogram = Histogram::from_sample(&sample, 15).unwrap();

    let json = serde_json::to_string(&histogram).unwrap();
    let back: Histogram = serde_json::from_str(&json).unwrap();

    assert_eq!(histogram, back);
    assert_eq!(back.total_count(), 1_000);
}

#[test]
fn distribution_json_is_tagged_by_kind() {
    let json = serde_json::to_string(&Distribution::exponential(2.0)).unwrap();
    assert!(json.contains("Exponential"));
    assert!(json.contains("rate"));
}
