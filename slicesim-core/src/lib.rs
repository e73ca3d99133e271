/*!
# Slice Simulator core

Synthesizes latency, bandwidth and per-slice throughput figures for a
drawn network [`Topology`] under a 5G or 6G [`Protocol`].

The synthesis is a pure function of its inputs and of the random
generator handed to it:

```
use rand_chacha::ChaChaRng;
use rand_core::SeedableRng as _;
use slicesim_core::{
    Link, Node, Protocol, Scenario, Timestamp, Topology, synthesize,
};

let topology = Topology::new()
    .with_node(Node::new("bs1"))
    .with_node(Node::new("ue1"))
    .with_link(Link::new("bs1", "ue1"));
let scenario = Scenario::new(Protocol::FiveG, 100, 50);

let mut rng = ChaChaRng::seed_from_u64(0);
let result = synthesize(&scenario, &topology, Timestamp::now(), &mut rng).unwrap();

assert_eq!(result.slices[0].users, 50);
assert_eq!(result.iot_warning, None);
```

Results are kept in a [`History`]; [`InMemoryHistory`] is the
process-lifetime implementation.
*/

pub mod defaults;
pub mod history;
pub mod link;
pub mod measure;
pub mod node;
pub mod radio;
pub mod result;
pub mod slice;
pub mod stats;
pub mod synth;
pub mod topology;

pub use self::{
    history::{History, InMemoryHistory},
    link::{Endpoint, Link, LinkEnd},
    measure::{Bandwidth, Latency, Throughput},
    node::{Node, NodeId, NodeKind},
    radio::{Protocol, Radio},
    result::{SimulationResult, Timestamp},
    slice::{Slice, SliceKind},
    stats::{ResultSummary, Summary},
    synth::{Scenario, SynthesisError, Synthesizer, synthesize},
    topology::{Topology, TopologyError},
};
