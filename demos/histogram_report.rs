//! Write a standalone HTML report for a generated sample.
//!
//! Samples an exponential distribution, summarizes it, and renders the
//! histogram chart plus frequency table to `report.html` in the current
//! directory.
//!
//! Run with: `cargo run --example histogram_report`

use variates::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let sampler = Sampler::new();

    // Interarrival-style data: rate 1.5 events per unit time.
    let distribution = Distribution::exponential(1.5);
    let sample = sampler.sample(&distribution, 25_000)?;
    let histogram = Histogram::from_sample(&sample, 25)?;

    generate_html_report(&sample, &histogram, "Exponential λ = 1.5", "report.html")?;
    println!("wrote report.html ({} bins)", histogram.len());

    Ok(())
}
