use crate::api::{NewTopology, SavedTopology};
use slicesim_core::{Timestamp, Topology, TopologyError};
use std::sync::{
    Arc, RwLock,
    atomic::{AtomicU64, Ordering},
};

/// Topologies kept for simulations that do not bring their own.
///
/// Holds the *current* topology, replaced wholesale by
/// [`TopologyStore::replace_current`], and a list of saved topologies
/// addressed by their `_id`.
#[derive(Debug, Default)]
pub struct TopologyStore {
    current: RwLock<Arc<Topology>>,
    saved: RwLock<Vec<Arc<SavedTopology>>>,
    last_id: AtomicU64,
}

impl TopologyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current topology, empty until one is set.
    pub fn current(&self) -> Arc<Topology> {
        Arc::clone(&self.current.read().expect("We shouldn't have poisoning"))
    }

    /// Replace the current topology.
    ///
    /// # Errors
    ///
    /// The topology is rejected if [`Topology::validate`] fails.
    pub fn replace_current(&self, topology: Topology) -> Result<(), TopologyError> {
        topology.validate()?;
        *self.current.write().expect("We shouldn't have poisoning") = Arc::new(topology);
        Ok(())
    }

    /// Save a topology under its `_id`.
    ///
    /// Topologies without an `_id` get a fresh one (`topology-1`,
    /// `topology-2`, …) not taken by any saved topology. Saving under an
    /// existing id replaces the record in place.
    ///
    /// # Errors
    ///
    /// The topology is rejected if [`Topology::validate`] fails.
    pub fn save(&self, new: NewTopology) -> Result<Arc<SavedTopology>, TopologyError> {
        let NewTopology {
            id,
            name,
            description,
            nodes,
            links,
        } = new;
        let topology = Topology { nodes, links };
        topology.validate()?;

        let mut saved = self.saved.write().expect("We shouldn't have poisoning");
        let id = match id.filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => self.fresh_id(&saved),
        };
        let record = Arc::new(SavedTopology {
            id,
            name,
            description,
            topology,
            created_at: Timestamp::now(),
        });

        match saved.iter_mut().find(|existing| existing.id == record.id) {
            Some(existing) => *existing = Arc::clone(&record),
            None => saved.push(Arc::clone(&record)),
        }

        Ok(record)
    }

    fn fresh_id(&self, saved: &[Arc<SavedTopology>]) -> String {
        loop {
            let id = format!("topology-{}", self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
            if saved.iter().all(|existing| existing.id != id) {
                return id;
            }
        }
    }

    /// All saved topologies, oldest first.
    pub fn saved(&self) -> Vec<Arc<SavedTopology>> {
        self.saved
            .read()
            .expect("We shouldn't have poisoning")
            .clone()
    }

    /// lookup a saved topology by id
    pub fn lookup(&self, id: &str) -> Option<Arc<SavedTopology>> {
        self.saved
            .read()
            .expect("We shouldn't have poisoning")
            .iter()
            .find(|saved| saved.id == id)
            .cloned()
    }

    /// Pick the topology a simulation without its own runs on.
    ///
    /// A `topology_id` naming a saved topology selects it; anything else
    /// falls back to the current topology.
    pub fn resolve(&self, topology_id: &serde_json::Value) -> Arc<Topology> {
        topology_id
            .as_str()
            .and_then(|id| self.lookup(id))
            .map(|saved| Arc::new(saved.topology.clone()))
            .unwrap_or_else(|| self.current())
    }
}
