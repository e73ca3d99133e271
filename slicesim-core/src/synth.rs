//! The metrics synthesizer.
//!
//! A run goes through the following stages, in order:
//!
//! 1. every link endpoint is resolved to the index of its node
//!    (fails on a dangling endpoint, before anything is drawn);
//! 2. every node draws its [`Radio`];
//! 3. user and IoT demand is [`partition`]ed into slices;
//! 4. the 5G cell capacity is checked;
//! 5. every node draws its latency;
//! 6. every link draws its bandwidth;
//! 7. every slice gets its throughput profile.
//!
//! Random draws happen in stages 2, 5 and 6 only, one `next_u64()` per
//! node or link, in topology order. Running twice from the same seed
//! gives the same result.

use crate::{
    defaults::{
        BANDWIDTH_5G_JITTER_MBPS, BANDWIDTH_5G_MIXED_MBPS, BANDWIDTH_5G_MM_WAVE_MBPS,
        BANDWIDTH_6G_JITTER_MBPS, BANDWIDTH_6G_MBPS, LATENCY_5G_JITTER_MS,
        LATENCY_5G_MM_WAVE_MS, LATENCY_5G_SUB_6GHZ_MS, LATENCY_6G_JITTER_MS, LATENCY_6G_MS,
        MAX_IOT_PER_CELL,
    },
    link::LinkEnd,
    measure::{Bandwidth, Latency, uniform},
    node::{NodeId, RadioNode},
    radio::{Protocol, Radio},
    result::{BandwidthEntry, LatencyEntry, SimulationResult, ThroughputEntry, Timestamp},
    slice::{Slice, partition},
    topology::Topology,
};
use rand_chacha::ChaChaRng;
use rand_core::{Rng, SeedableRng as _};
use std::collections::HashMap;
use thiserror::Error;

/// The parameters of one simulation, besides the topology itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub protocol: Protocol,
    pub user_count: u64,
    pub iot_count: u64,
    /// Opaque reference echoed into the result.
    pub topology_id: serde_json::Value,
}

/// Error returned when a simulation cannot be synthesized.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthesisError {
    /// A link end names a node absent from the topology.
    #[error("Link #{link} {end:?} refers to unknown node ({node})")]
    DanglingEndpoint {
        link: usize,
        end: LinkEnd,
        node: NodeId,
    },
}

/// Indices, into the topology's nodes, of both ends of a link.
#[derive(Debug, Clone, Copy)]
struct Route {
    source: usize,
    target: usize,
}

impl Scenario {
    pub fn new(protocol: Protocol, user_count: u64, iot_count: u64) -> Self {
        Self {
            protocol,
            user_count,
            iot_count,
            topology_id: serde_json::Value::Null,
        }
    }

    pub fn with_topology_id(mut self, topology_id: serde_json::Value) -> Self {
        self.topology_id = topology_id;
        self
    }
}

/// Synthesize the metrics of `topology` under `scenario`.
///
/// `topology` is only read: the radios drawn for this run live in the
/// returned result and nowhere else. All randomness comes from `rng`.
///
/// # Errors
///
/// [`SynthesisError::DanglingEndpoint`] if a link refers to a node that
/// is not in `topology.nodes`. Nothing is drawn from `rng` in that case.
pub fn synthesize<R: Rng + ?Sized>(
    scenario: &Scenario,
    topology: &Topology,
    timestamp: Timestamp,
    rng: &mut R,
) -> Result<SimulationResult, SynthesisError> {
    let protocol = scenario.protocol;

    let routes = resolve_routes(topology)?;
    let nodes = assign_radios(protocol, topology, rng);
    let slices = partition(scenario.user_count, scenario.iot_count);
    let iot_warning = check_iot_capacity(protocol, scenario.iot_count, nodes.len());

    let latency = synthesize_latency(protocol, &nodes, rng);
    let bandwidth = synthesize_bandwidth(protocol, &nodes, &routes, rng);
    let throughput = synthesize_throughput(protocol, &slices);

    Ok(SimulationResult {
        timestamp,
        protocol,
        user_count: scenario.user_count,
        iot_count: scenario.iot_count,
        topology_id: scenario.topology_id.clone(),
        latency,
        bandwidth,
        throughput,
        slices: slices.to_vec(),
        iot_warning,
    })
}

fn resolve_routes(topology: &Topology) -> Result<Vec<Route>, SynthesisError> {
    let mut index = HashMap::with_capacity(topology.nodes.len());
    for (position, node) in topology.nodes.iter().enumerate() {
        // first declaration wins
        index.entry(node.id.as_str()).or_insert(position);
    }

    let lookup = |link: usize, end: LinkEnd| {
        let node = topology.links[link].end(end).node_id();
        index
            .get(node.as_str())
            .copied()
            .ok_or_else(|| SynthesisError::DanglingEndpoint {
                link,
                end,
                node: node.clone(),
            })
    };

    (0..topology.links.len())
        .map(|link| {
            Ok::<_, SynthesisError>(Route {
                source: lookup(link, LinkEnd::Source)?,
                target: lookup(link, LinkEnd::Target)?,
            })
        })
        .collect()
}

fn assign_radios<'a, R: Rng + ?Sized>(
    protocol: Protocol,
    topology: &'a Topology,
    rng: &mut R,
) -> Vec<RadioNode<'a>> {
    topology
        .nodes
        .iter()
        .map(|node| RadioNode {
            node,
            radio: protocol.draw_radio(rng),
        })
        .collect()
}

/// Under 5G, warn when there are more IoT devices than the cells accept.
fn check_iot_capacity(protocol: Protocol, iot_count: u64, cells: usize) -> Option<String> {
    let capacity = MAX_IOT_PER_CELL.saturating_mul(cells as u64);
    match protocol {
        Protocol::FiveG if iot_count > capacity => Some(format!(
            "5G constraint: Too many IoT devices for available cells (max {MAX_IOT_PER_CELL} per cell)."
        )),
        _ => None,
    }
}

fn synthesize_latency<R: Rng + ?Sized>(
    protocol: Protocol,
    nodes: &[RadioNode<'_>],
    rng: &mut R,
) -> Vec<LatencyEntry> {
    nodes
        .iter()
        .map(|node| {
            let (base, jitter) = match (protocol, node.radio) {
                (Protocol::FiveG, Radio::MmWave) => (LATENCY_5G_MM_WAVE_MS, LATENCY_5G_JITTER_MS),
                (Protocol::FiveG, _) => (LATENCY_5G_SUB_6GHZ_MS, LATENCY_5G_JITTER_MS),
                (Protocol::SixG, _) => (LATENCY_6G_MS, LATENCY_6G_JITTER_MS),
            };
            LatencyEntry {
                node_id: node.id().clone(),
                radio: node.radio,
                latency: Latency::from_millis(uniform(base, jitter, rng)),
            }
        })
        .collect()
}

fn synthesize_bandwidth<R: Rng + ?Sized>(
    protocol: Protocol,
    nodes: &[RadioNode<'_>],
    routes: &[Route],
    rng: &mut R,
) -> Vec<BandwidthEntry> {
    routes
        .iter()
        .map(|route| {
            let source = &nodes[route.source];
            let target = &nodes[route.target];
            let (base, jitter) = match protocol {
                Protocol::FiveG if source.radio == Radio::MmWave && target.radio == Radio::MmWave => {
                    (BANDWIDTH_5G_MM_WAVE_MBPS, BANDWIDTH_5G_JITTER_MBPS)
                }
                Protocol::FiveG => (BANDWIDTH_5G_MIXED_MBPS, BANDWIDTH_5G_JITTER_MBPS),
                Protocol::SixG => (BANDWIDTH_6G_MBPS, BANDWIDTH_6G_JITTER_MBPS),
            };
            BandwidthEntry {
                source: source.id().clone(),
                target: target.id().clone(),
                bandwidth: Bandwidth::from_mbps(uniform(base, jitter, rng)),
            }
        })
        .collect()
}

fn synthesize_throughput(protocol: Protocol, slices: &[Slice]) -> Vec<ThroughputEntry> {
    slices
        .iter()
        .map(|slice| ThroughputEntry {
            slice: slice.name,
            throughput: slice.name.throughput(protocol),
        })
        .collect()
}

/// A [`synthesize`] front-end owning its own seedable generator.
///
/// The default seed is `0`. Each `Synthesizer` is independent: give
/// every concurrent caller its own.
///
/// # Example
///
/// ```
/// use slicesim_core::{
///     link::Link, node::Node, radio::Protocol, result::Timestamp,
///     synth::{Scenario, Synthesizer}, topology::Topology,
/// };
///
/// let topology = Topology::new()
///     .with_node(Node::new("bs1"))
///     .with_node(Node::new("ue1"))
///     .with_link(Link::new("bs1", "ue1"));
/// let scenario = Scenario::new(Protocol::SixG, 10, 5);
///
/// let mut synthesizer = Synthesizer::with_seed(42);
/// let result = synthesizer.run(&scenario, &topology, Timestamp::now()).unwrap();
///
/// assert_eq!(result.latency.len(), 2);
/// assert_eq!(result.bandwidth.len(), 1);
/// assert_eq!(result.throughput.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Synthesizer {
    rng: ChaChaRng,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Synthesizer {
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaChaRng::seed_from_u64(seed),
        }
    }

    /// See [`synthesize`].
    pub fn run(
        &mut self,
        scenario: &Scenario,
        topology: &Topology,
        timestamp: Timestamp,
    ) -> Result<SimulationResult, SynthesisError> {
        synthesize(scenario, topology, timestamp, &mut self.rng)
    }
}
