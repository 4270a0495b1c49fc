//! Generate-and-summarize walkthrough — the "hello world" of the variates crate.
//!
//! Draws a normal sample, bins it into a frequency histogram, and prints
//! the result alongside the sample's descriptive statistics.
//!
//! Run with: `cargo run --example generate_sample`

use variates::prelude::*;
use variates::stats;

fn main() -> variates::Result<()> {
    // One sampler per program run; seed it for reproducible output.
    let sampler = Sampler::with_seed(42);

    // 10,000 draws from N(50, 15²), then 15 equal-width bins.
    let sample = sampler.sample_normal(10_000, 50.0, 15.0)?;
    let histogram = Histogram::from_sample(&sample, 15)?;

    println!("normal sample, n = {}", sample.len());
    println!(
        "  mean = {:.4}  std dev = {:.4}",
        stats::mean(&sample).unwrap_or(f64::NAN),
        stats::std_dev(&sample).unwrap_or(f64::NAN),
    );
    println!();
    print!("{histogram}");

    Ok(())
}
