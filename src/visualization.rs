//! HTML report generation for samples and their histograms.
//!
//! Generate a self-contained HTML file with an embedded
//! [Plotly.js](https://plotly.com/javascript/) bar chart of the
//! histogram, a frequency table, and a summary-statistics strip. No
//! feature flag is required — this module is always available.
//!
//! # Usage
//!
//! ```no_run
//! use variates::{generate_html_report, Histogram, Sampler};
//!
//! let sampler = Sampler::new();
//! let sample = sampler.sample_normal(10_000, 0.0, 1.0)?;
//! let histogram = Histogram::from_sample(&sample, 20)?;
//! generate_html_report(&sample, &histogram, "Normal N(0, 1)", "report.html")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The output is a single HTML file that can be opened in any browser.
//! An internet connection is needed on first load to fetch `Plotly.js`
//! from a CDN.

use core::fmt::Write as _;
use std::path::Path;

use crate::histogram::Histogram;
use crate::stats;

/// Generate an HTML report for a sample and its histogram.
///
/// Create a self-contained HTML file at `path` with an interactive bar
/// chart of the bin counts, a frequency table (interval, count, relative
/// frequency), and the sample's descriptive statistics.
///
/// # Errors
///
/// Return an I/O error if the file cannot be created or written.
pub fn generate_html_report(
    sample: &[f64],
    histogram: &Histogram,
    title: &str,
    path: impl AsRef<Path>,
) -> std::io::Result<()> {
    let html = build_html(sample, histogram, title);
    std::fs::write(path, html)?;
    trace_info!(n = sample.len(), "wrote histogram report");
    Ok(())
}

fn build_html(sample: &[f64], histogram: &Histogram, title: &str) -> String {
    let mut html = String::with_capacity(8192);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
  * {{ margin: 0; padding: 0; box-sizing: border-box; }}
  body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
         background: #f5f6fa; color: #2c3e50; padding: 24px; }}
  h1 {{ text-align: center; margin-bottom: 8px; font-size: 1.8em; }}
  .subtitle {{ text-align: center; color: #7f8c8d; margin-bottom: 24px; }}
  .card {{ background: #fff; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.08);
           margin-bottom: 24px; padding: 16px; }}
  .card-title {{ font-size: 1.1em; font-weight: 600; margin-bottom: 8px; }}
  .stats {{ display: flex; gap: 24px; justify-content: center; flex-wrap: wrap; }}
  .stat b {{ display: block; text-align: center; }}
  table {{ border-collapse: collapse; width: 100%; }}
  th, td {{ border-bottom: 1px solid #ecf0f1; padding: 6px 12px; text-align: right; }}
  th {{ color: #7f8c8d; }}
</style>
</head>
<body>
<h1>{title}</h1>
<p class="subtitle">{n} values &middot; {k} bins</p>"#,
        n = sample.len(),
        k = histogram.len(),
    );

    // Summary statistics strip.
    html.push_str("\n<div class=\"card\"><div class=\"stats\">");
    let entries = [
        ("mean", stats::mean(sample)),
        ("std dev", stats::std_dev(sample)),
        ("min", stats::min(sample)),
        ("max", stats::max(sample)),
    ];
    for (label, value) in entries {
        let _ = write!(
            html,
            "\n<div class=\"stat\"><b>{}</b>{label}</div>",
            value.map_or_else(|| "-".to_owned(), |v| format!("{v:.4}")),
        );
    }
    html.push_str("\n</div></div>");

    // Histogram bar chart container.
    html.push_str(
        "\n<div class=\"card\"><div class=\"card-title\">Histogram</div><div id=\"histogram\"></div></div>",
    );

    write_frequency_table(&mut html, histogram);
    write_chart_script(&mut html, histogram);
    html.push_str("\n</body>\n</html>\n");

    html
}

#[allow(clippy::cast_precision_loss)]
fn write_frequency_table(html: &mut String, histogram: &Histogram) {
    html.push_str(
        "\n<div class=\"card\"><div class=\"card-title\">Frequency Table</div>\n<table>\n<tr><th>Interval</th><th>Count</th><th>Relative</th></tr>",
    );
    let total = histogram.total_count() as f64;
    for (i, bin) in histogram.iter().enumerate() {
        let close = if i + 1 == histogram.len() { ']' } else { ')' };
        let _ = write!(
            html,
            "\n<tr><td>[{:.4}, {:.4}{close}</td><td>{}</td><td>{:.4}</td></tr>",
            bin.start,
            bin.end,
            bin.count,
            bin.count as f64 / total,
        );
    }
    html.push_str("\n</table></div>");
}

/// Bin labels on x, counts on y.
fn write_chart_script(html: &mut String, histogram: &Histogram) {
    html.push_str("\n<script>\nPlotly.newPlot('histogram', [{type: 'bar', x: [");
    for (i, bin) in histogram.iter().enumerate() {
        if i > 0 {
            html.push(',');
        }
        let close = if i + 1 == histogram.len() { ']' } else { ')' };
        let _ = write!(html, "'[{:.4}, {:.4}{close}'", bin.start, bin.end);
    }
    html.push_str("], y: [");
    for (i, bin) in histogram.iter().enumerate() {
        if i > 0 {
            html.push(',');
        }
        let _ = write!(html, "{}", bin.count);
    }
    html.push_str(
        "], marker: {color: '#3498db'}}], \
         {margin: {t: 16}, xaxis: {title: 'interval'}, yaxis: {title: 'count'}}, \
         {responsive: true});\n</script>",
    );
}
