//! Wire types of the HTTP API and the mapping of failures to responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use slicesim_core::{Link, Node, Protocol, SynthesisError, Timestamp, Topology, TopologyError};
use thiserror::Error;

/// Body of `POST /api/simulate`.
///
/// Counts must be non-negative integers. When `topology` is absent the
/// service substitutes a stored one, see [`SimContext::simulate`].
///
/// [`SimContext::simulate`]: crate::SimContext::simulate
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateRequest {
    pub protocol: Protocol,
    pub users: u64,
    pub iot_devices: u64,
    #[serde(default)]
    pub topology_id: serde_json::Value,
    #[serde(default)]
    pub topology: Option<Topology>,
}

/// Body of `POST /api/topologies`.
///
/// A client supplied `_id` is kept; one is assigned when it is missing.
/// Saving again under an existing `_id` replaces that record.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTopology {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

/// A topology kept by the service for later simulations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTopology {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub topology: Topology,
    pub created_at: Timestamp,
}

/// Acknowledgement body.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub message: &'static str,
}

/// Error returned by the API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body is not JSON or does not have the expected shape.
    #[error("Malformed request: {0}")]
    Malformed(#[from] serde_json::Error),
    /// A topology to be stored is not self-consistent.
    #[error("Invalid topology: {0}")]
    Topology(#[from] TopologyError),
    /// The simulation could not be synthesized.
    #[error("Simulation failed: {0}")]
    Synthesis(#[from] SynthesisError),
    /// The worker running the simulation did not complete.
    #[error("Simulation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Malformed(_) => StatusCode::BAD_REQUEST,
            Self::Topology(_) | Self::Synthesis(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, error = %self, "request rejected");

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
