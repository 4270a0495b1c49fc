use variates::{generate_html_report, Histogram, Sampler};

#[test]
fn html_report_creates_file() {
    let sampler = Sampler::with_seed(42);
    let sample = sampler.sample_uniform(200, 0.0, 10.0);
    let histogram = Histogram::from_sample(&sample, 10).unwrap();

    let path = std::env::temp_dir().join("variates_report_creates_file.html");
    generate_html_report(&sample, &histogram, "Uniform [0, 10)", &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("<!DOCTYPE html>"));
    assert!(content.contains("plotly"));
    std::fs::remove_file(&path).ok();
}

#[test]
fn html_report_contains_all_sections() {
    let sampler = Sampler::with_seed(7);
    let sample = sampler.sample_exponential(500, 1.5).unwrap();
    let histogram = Histogram::from_sample(&sample, 15).unwrap();

    let path = std::env::temp_dir().join("variates_report_sections.html");
    generate_html_report(&sample, &histogram, "Exponential λ = 1.5", &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();

    // Chart container, frequency table, and stats strip.
    assert!(content.contains("id=\"histogram\""));
    assert!(content.contains("Frequency Table"));
    assert!(content.contains("mean"));
    assert!(content.contains("std dev"));

    // Title and sizing line.
    assert!(content.contains("Exponential λ = 1.5"));
    assert!(content.contains("500 values"));
    assert!(content.contains("15 bins"));

    // One table row per bin.
    assert_eq!(content.matches("<tr><td>").count(), histogram.len());

    std::fs::remove_file(&path).ok();
}
