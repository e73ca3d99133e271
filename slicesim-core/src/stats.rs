//! Summary statistics over the metrics of a [`SimulationResult`].

use crate::result::SimulationResult;
use serde::Serialize;

/// Descriptive statistics of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// `sorted[floor(len * 0.9)]`
    pub p90: f64,
    /// `sorted[floor(len * 0.95)]`
    pub p95: f64,
}

impl Summary {
    /// Summarise `values`. Returns `None` for an empty sample.
    ///
    /// ```
    /// # use slicesim_core::stats::Summary;
    /// let summary = Summary::of([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    /// assert_eq!(summary.avg, 5.0);
    /// assert_eq!(summary.std_dev, 2.0);
    /// ```
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut sorted: Vec<f64> = values.into_iter().collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let len = sorted.len() as f64;
        let avg = sorted.iter().sum::<f64>() / len;
        let variance = sorted.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / len;
        let percentile = |p: f64| sorted[((len * p).floor() as usize).min(sorted.len() - 1)];

        Some(Self {
            avg,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            std_dev: variance.sqrt(),
            p90: percentile(0.9),
            p95: percentile(0.95),
        })
    }
}

/// Summaries of the per-node latencies (ms) and per-link bandwidths (Mbps)
/// of one result. A metric with no sample is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultSummary {
    pub latency: Option<Summary>,
    pub bandwidth: Option<Summary>,
}

impl ResultSummary {
    pub fn of(result: &SimulationResult) -> Self {
        Self {
            latency: Summary::of(result.latency.iter().map(|e| e.latency.as_millis())),
            bandwidth: Summary::of(result.bandwidth.iter().map(|e| e.bandwidth.as_mbps())),
        }
    }
}
