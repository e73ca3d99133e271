use serde::{Deserialize, Deserializer, Serialize};
use std::{borrow::Borrow, convert::Infallible, fmt, str};

/// The identifier of a node in a [`Topology`].
///
/// Identifiers are assigned by the caller and are only required to be
/// unique within one topology. On the wire they may be given as a string
/// or as an integer; integers are kept as their decimal string so `1` and
/// `"1"` name the same node.
///
/// [`Topology`]: crate::topology::Topology
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNodeId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = match RawNodeId::deserialize(deserializer)? {
            RawNodeId::Text(text) => text,
            RawNodeId::Unsigned(value) => value.to_string(),
            RawNodeId::Signed(value) => value.to_string(),
        };
        Ok(Self(id))
    }
}

impl str::FromStr for NodeId {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
