//! Human readable rendering of a [`SimulationResult`].

use slicesim_core::{ResultSummary, SimulationResult, Summary};
use std::fmt::Write as _;

/// Render `result` as a plain text report.
pub fn render(result: &SimulationResult) -> String {
    let mut out = String::new();
    // writing into a `String` cannot fail
    let _ = write_report(&mut out, result);
    out
}

fn write_report(out: &mut String, result: &SimulationResult) -> std::fmt::Result {
    writeln!(
        out,
        "{} simulation at {}: {} users, {} IoT devices",
        result.protocol, result.timestamp, result.user_count, result.iot_count
    )?;
    if let Some(warning) = &result.iot_warning {
        writeln!(out, "warning: {warning}")?;
    }

    writeln!(out, "\nlatency")?;
    for entry in &result.latency {
        writeln!(out, "  {:<16} {:<14} {}", entry.node_id, entry.radio, entry.latency)?;
    }

    writeln!(out, "\nbandwidth")?;
    for entry in &result.bandwidth {
        let link = format!("{} -> {}", entry.source, entry.target);
        writeln!(out, "  {link:<31} {}", entry.bandwidth)?;
    }

    writeln!(out, "\nslices")?;
    for (slice, entry) in result.slices.iter().zip(&result.throughput) {
        writeln!(
            out,
            "  {:<6} users {:<8} iot {:<8} avg {} max {} min {}",
            slice.name,
            slice.users,
            slice.iot,
            entry.throughput.average,
            entry.throughput.max,
            entry.throughput.min,
        )?;
    }

    let summary = ResultSummary::of(result);
    writeln!(out, "\nsummary")?;
    write_summary(out, "latency (ms)", summary.latency)?;
    write_summary(out, "bandwidth (Mbps)", summary.bandwidth)
}

fn write_summary(out: &mut String, label: &str, summary: Option<Summary>) -> std::fmt::Result {
    match summary {
        Some(s) => writeln!(
            out,
            "  {label:<16} avg {:.2} min {:.2} max {:.2} std {:.2} p90 {:.2} p95 {:.2}",
            s.avg, s.min, s.max, s.std_dev, s.p90, s.p95
        ),
        None => writeln!(out, "  {label:<16} no samples"),
    }
}
