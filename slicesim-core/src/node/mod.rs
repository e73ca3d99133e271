mod id;

pub use self::id::NodeId;
use crate::radio::Radio;
use serde::{Deserialize, Serialize};

/// The role a node plays in the drawn topology.
///
/// Only informative: synthesis treats every node the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    BaseStation,
    UserEquipment,
    IotDevice,
}

/// A node of a [`Topology`] as supplied by the caller.
///
/// The coordinates and free-form `parameters` only matter to whoever
/// drew the topology; they are carried through untouched.
///
/// [`Topology`]: crate::topology::Topology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NodeKind>,

    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Node {
    /// Create a node at the origin with no [`NodeKind`].
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            kind: None,
            x: 0.0,
            y: 0.0,
            parameters: None,
        }
    }

    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

/// A [`Node`] decorated with the [`Radio`] drawn for one synthesis run.
///
/// Built fresh on every run and never written back into the caller's
/// topology.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadioNode<'a> {
    pub node: &'a Node,
    pub radio: Radio,
}

impl RadioNode<'_> {
    #[inline]
    pub fn id(&self) -> &NodeId {
        &self.node.id
    }
}
