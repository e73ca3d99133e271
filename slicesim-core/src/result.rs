use crate::{
    measure::{Bandwidth, Latency, Throughput},
    node::NodeId,
    radio::{Protocol, Radio},
    slice::{Slice, SliceKind},
};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

/// Wall-clock instant, in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const UNIX_EPOCH: Self = Self(0);

    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Read the system clock.
    ///
    /// A clock set before 1970 reads as [`Timestamp::UNIX_EPOCH`].
    pub fn now() -> Self {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| Self(elapsed.as_millis() as u64))
            .unwrap_or(Self::UNIX_EPOCH)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Latency synthesized for one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencyEntry {
    pub node_id: NodeId,
    pub radio: Radio,
    pub latency: Latency,
}

/// Bandwidth synthesized for one link, keyed by the canonical ids of
/// its endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandwidthEntry {
    pub source: NodeId,
    pub target: NodeId,
    pub bandwidth: Bandwidth,
}

/// Throughput profile of one slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThroughputEntry {
    pub slice: SliceKind,
    #[serde(flatten)]
    pub throughput: Throughput,
}

/// Everything one simulation produced.
///
/// Created once per simulation and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub timestamp: Timestamp,
    pub protocol: Protocol,
    pub user_count: u64,
    pub iot_count: u64,
    /// Opaque reference echoed back from the request, `null` if none.
    #[serde(default)]
    pub topology_id: serde_json::Value,
    pub latency: Vec<LatencyEntry>,
    pub bandwidth: Vec<BandwidthEntry>,
    pub throughput: Vec<ThroughputEntry>,
    pub slices: Vec<Slice>,
    pub iot_warning: Option<String>,
}
