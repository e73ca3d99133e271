//! HTTP routes of the service.

use crate::{
    api::{ApiError, Message, NewTopology, SavedTopology, SimulateRequest},
    config::ServiceConfig,
    context::SimContext,
};
use anyhow::{Context as _, Result};
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use slicesim_core::{SimulationResult, Topology};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

type Shared = State<Arc<SimContext>>;

/// Build the router of the service API.
pub fn router(context: Arc<SimContext>) -> Router {
    Router::new()
        .route("/api/simulate", post(simulate))
        .route("/api/results", get(results))
        .route("/api/topology", post(replace_topology))
        .route("/api/topologies", get(list_topologies).post(save_topology))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(context)
}

/// Listen on the configured address until Ctrl-C.
pub async fn serve(config: &ServiceConfig, context: Arc<SimContext>) -> Result<()> {
    let address = config.address();
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    tracing::info!(address = %listener.local_addr()?, "listening");

    axum::serve(listener, router(context))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "cannot listen for Ctrl-C, shutdown only by termination");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

/// Bodies are parsed here rather than through `Json` so every shape
/// error is answered with the same `{error}` body.
fn parse<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

async fn simulate(
    State(context): Shared,
    body: Bytes,
) -> Result<Json<Arc<SimulationResult>>, ApiError> {
    let request: SimulateRequest = parse(&body)?;
    // synthesis is CPU bound, keep it off the async workers
    let result = tokio::task::spawn_blocking(move || context.simulate(request)).await??;
    Ok(Json(result))
}

async fn results(State(context): Shared) -> Json<Vec<Arc<SimulationResult>>> {
    Json(context.results())
}

async fn replace_topology(State(context): Shared, body: Bytes) -> Result<Json<Message>, ApiError> {
    let topology: Topology = parse(&body)?;
    context.replace_topology(topology)?;
    Ok(Json(Message {
        message: "Topology updated successfully",
    }))
}

async fn save_topology(
    State(context): Shared,
    body: Bytes,
) -> Result<(StatusCode, Json<Arc<SavedTopology>>), ApiError> {
    let new: NewTopology = parse(&body)?;
    let saved = context.save_topology(new)?;
    Ok((StatusCode::CREATED, Json(saved)))
}

async fn list_topologies(State(context): Shared) -> Json<Vec<Arc<SavedTopology>>> {
    Json(context.topologies().saved())
}
