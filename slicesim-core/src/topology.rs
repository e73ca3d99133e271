use crate::{
    link::{Link, LinkEnd},
    node::{Node, NodeId},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// A network drawn by the caller: nodes and the links between them.
///
/// Both sequences are required on the wire, even when empty.
///
/// # Example
///
/// ```
/// use slicesim_core::{link::Link, node::Node, topology::Topology};
///
/// let topology = Topology::new()
///     .with_node(Node::new("bs1"))
///     .with_node(Node::new("ue1"))
///     .with_link(Link::new("bs1", "ue1"));
///
/// assert!(topology.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

/// Error returned by [`Topology::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    /// Two nodes share the same identifier.
    #[error("Node ({node}) is declared more than once")]
    DuplicateNode { node: NodeId },
    /// A link refers to a node that is not part of the topology.
    #[error("Link #{link} {end:?} refers to unknown node ({node})")]
    DanglingEndpoint {
        link: usize,
        end: LinkEnd,
        node: NodeId,
    },
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// Check the topology is self-consistent.
    ///
    /// This is a boundary check for topologies kept around for later
    /// use. Synthesis does not require it: it tolerates duplicated ids
    /// (the first node wins) and only fails on dangling endpoints.
    ///
    /// # Errors
    ///
    /// - [`TopologyError::DuplicateNode`] on the first repeated node id.
    /// - [`TopologyError::DanglingEndpoint`] on the first link end that
    ///   does not name a node of this topology.
    pub fn validate(&self) -> Result<(), TopologyError> {
        let mut ids = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(TopologyError::DuplicateNode {
                    node: node.id.clone(),
                });
            }
        }

        for (index, link) in self.links.iter().enumerate() {
            for end in [LinkEnd::Source, LinkEnd::Target] {
                let node = link.end(end).node_id();
                if !ids.contains(node.as_str()) {
                    return Err(TopologyError::DanglingEndpoint {
                        link: index,
                        end,
                        node: node.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
