use crate::{
    measure::{Bandwidth, Latency},
    node::NodeId,
};
use serde::{Deserialize, Serialize};

/// One end of a [`Link`].
///
/// Callers reference a node either by its bare id or by handing back the
/// node object itself (anything with an `id` field; other fields are
/// ignored). [`Endpoint::node_id`] normalises both forms.
///
/// ```
/// # use slicesim_core::link::Endpoint;
/// let bare: Endpoint = serde_json::from_str(r#""bs1""#).unwrap();
/// let object: Endpoint = serde_json::from_str(r#"{"id":"bs1","x":10,"y":20}"#).unwrap();
/// assert_eq!(bare.node_id(), object.node_id());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    Id(NodeId),
    Node { id: NodeId },
}

impl Endpoint {
    /// The canonical id of the node this endpoint refers to.
    #[inline]
    pub fn node_id(&self) -> &NodeId {
        match self {
            Self::Id(id) | Self::Node { id } => id,
        }
    }
}

impl From<NodeId> for Endpoint {
    fn from(id: NodeId) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for Endpoint {
    fn from(id: &str) -> Self {
        Self::Id(NodeId::new(id))
    }
}

/// Which end of a [`Link`] is being talked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkEnd {
    Source,
    Target,
}

/// A connection between two nodes of a [`Topology`].
///
/// `bandwidth` and `latency` are hints left by whoever drew the link.
/// They are kept on the record but synthesis recomputes both from the
/// radios of the endpoints.
///
/// [`Topology`]: crate::topology::Topology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub source: Endpoint,
    pub target: Endpoint,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth: Option<Bandwidth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<Latency>,
}

impl Link {
    pub fn new(source: impl Into<Endpoint>, target: impl Into<Endpoint>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            bandwidth: None,
            latency: None,
        }
    }

    /// Returns the endpoint at the given end of the link.
    #[inline]
    pub fn end(&self, end: LinkEnd) -> &Endpoint {
        match end {
            LinkEnd::Source => &self.source,
            LinkEnd::Target => &self.target,
        }
    }
}
