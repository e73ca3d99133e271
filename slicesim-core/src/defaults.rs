//! Constants driving the synthesis formulas.
//!
//! Every value here is part of the output contract: changing one changes
//! the range a caller observes for the corresponding metric.

/// Maximum number of IoT devices a single 5G cell accepts before the
/// result carries an `iotWarning`.
///
/// Every node of the topology counts as a cell.
///
/// ```
/// # use slicesim_core::defaults::*;
/// assert_eq!(MAX_IOT_PER_CELL, 200);
/// ```
pub const MAX_IOT_PER_CELL: u64 = 200;

/// Probability for a node to be assigned [`Radio::MmWave`] under 5G.
///
/// [`Radio::MmWave`]: crate::radio::Radio::MmWave
pub const MM_WAVE_PROBABILITY: f64 = 0.5;

/// Base latency (ms) of a 5G node on `mmWave`.
pub const LATENCY_5G_MM_WAVE_MS: f64 = 5.0;
/// Base latency (ms) of a 5G node on `sub-6GHz`.
pub const LATENCY_5G_SUB_6GHZ_MS: f64 = 10.0;
/// Width (ms) of the uniform jitter added to 5G latencies.
pub const LATENCY_5G_JITTER_MS: f64 = 5.0;
/// Base latency (ms) of any 6G node.
pub const LATENCY_6G_MS: f64 = 1.5;
/// Width (ms) of the uniform jitter added to 6G latencies.
pub const LATENCY_6G_JITTER_MS: f64 = 2.0;

/// Base bandwidth (Mbps) of a 5G link joining two `mmWave` nodes.
pub const BANDWIDTH_5G_MM_WAVE_MBPS: f64 = 1_000.0;
/// Base bandwidth (Mbps) of every other 5G link.
pub const BANDWIDTH_5G_MIXED_MBPS: f64 = 300.0;
/// Width (Mbps) of the uniform jitter added to 5G bandwidths.
pub const BANDWIDTH_5G_JITTER_MBPS: f64 = 200.0;
/// Base bandwidth (Mbps) of any 6G link.
pub const BANDWIDTH_6G_MBPS: f64 = 5_000.0;
/// Width (Mbps) of the uniform jitter added to 6G bandwidths.
pub const BANDWIDTH_6G_JITTER_MBPS: f64 = 1_000.0;

/// Ratio of the slice base throughput reported as `average`.
pub const THROUGHPUT_AVERAGE_RATIO: f64 = 0.8;
/// Ratio of the slice base throughput reported as `min`.
pub const THROUGHPUT_MIN_RATIO: f64 = 0.6;
