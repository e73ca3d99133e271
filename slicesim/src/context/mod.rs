mod seed;
mod store;

pub use self::{seed::SeedSource, store::TopologyStore};
use crate::{
    api::{ApiError, NewTopology, SavedTopology, SimulateRequest},
    config::ServiceConfig,
};
use slicesim_core::{
    History, InMemoryHistory, Scenario, SimulationResult, Synthesizer, Timestamp, Topology,
    TopologyError,
};
use std::sync::Arc;

/// State shared by every request of the service.
pub struct SimContext {
    history: Arc<dyn History>,
    topologies: TopologyStore,
    seeds: SeedSource,
}

impl SimContext {
    pub fn new(config: &ServiceConfig) -> Self {
        let history = match config.history_limit {
            Some(limit) => InMemoryHistory::with_limit(limit),
            None => InMemoryHistory::new(),
        };

        Self::with_parts(Arc::new(history), SeedSource::from_config(config.seed))
    }

    pub fn with_parts(history: Arc<dyn History>, seeds: SeedSource) -> Self {
        Self {
            history,
            topologies: TopologyStore::new(),
            seeds,
        }
    }

    pub fn history(&self) -> &Arc<dyn History> {
        &self.history
    }

    pub fn topologies(&self) -> &TopologyStore {
        &self.topologies
    }

    /// Run one simulation and append its result to the history.
    ///
    /// The request's own topology is used when it has one. Otherwise the
    /// topology is picked by [`TopologyStore::resolve`].
    ///
    /// # Errors
    ///
    /// Fails if a link references a node the topology doesn't have, in
    /// which case the history is left untouched.
    pub fn simulate(&self, request: SimulateRequest) -> Result<Arc<SimulationResult>, ApiError> {
        let SimulateRequest {
            protocol,
            users,
            iot_devices,
            topology_id,
            topology,
        } = request;

        let topology = match topology {
            Some(topology) => Arc::new(topology),
            None => self.topologies.resolve(&topology_id),
        };
        let scenario = Scenario::new(protocol, users, iot_devices).with_topology_id(topology_id);

        let seed = self.seeds.next_seed();
        let mut synthesizer = Synthesizer::with_seed(seed);
        tracing::debug!(
            %protocol,
            users,
            iot_devices,
            nodes = topology.nodes.len(),
            links = topology.links.len(),
            seed,
            "synthesizing"
        );

        // synthesized outside the history lock, which only stamps and stores
        let result = synthesizer.run(&scenario, &topology, Timestamp::now())?;
        let result = self.history.record(result);

        tracing::info!(
            %protocol,
            timestamp = %result.timestamp,
            warning = result.iot_warning.as_deref(),
            "simulation recorded"
        );

        Ok(result)
    }

    /// Every recorded result, most recent first.
    pub fn results(&self) -> Vec<Arc<SimulationResult>> {
        self.history.entries()
    }

    /// Replace the topology used by simulations that don't name one.
    pub fn replace_topology(&self, topology: Topology) -> Result<(), TopologyError> {
        let (nodes, links) = (topology.nodes.len(), topology.links.len());
        self.topologies.replace_current(topology)?;
        tracing::info!(nodes, links, "topology updated");
        Ok(())
    }

    pub fn save_topology(&self, new: NewTopology) -> Result<Arc<SavedTopology>, TopologyError> {
        let saved = self.topologies.save(new)?;
        tracing::info!(id = %saved.id, nodes = saved.topology.nodes.len(), "topology saved");
        Ok(saved)
    }
}

impl Drop for SimContext {
    fn drop(&mut self) {
        tracing::debug!(results = self.history.len(), "shutting down simulation context");
    }
}
