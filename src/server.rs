// ABOUTME: Unified HTTP server combining the REST API and the MCP endpoint
// ABOUTME: Builds the axum router with middleware and runs the listener
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Unified Server
//!
//! One axum server carries both protocols: the REST API under
//! `/api/v1/diet_plan` and the MCP JSON-RPC endpoint at `POST /mcp`.
//! Root-level `/health` and `/ready` exist alongside the prefixed ones for
//! load balancers that probe the root.

use crate::config::ServerConfig;
use crate::database::Database;
use crate::jsonrpc::JsonRpcRequest;
use crate::mcp::McpHandler;
use crate::routes;
use anyhow::{Context, Result};
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Request timeout for all endpoints
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the complete application router
#[must_use]
pub fn build_router(database: Database) -> Router {
    let mcp_router = Router::new()
        .route("/mcp", post(handle_mcp))
        .with_state(McpHandler::new(database.clone()));

    Router::new()
        .merge(routes::health::HealthRoutes::routes())
        .merge(routes::api_routes(database))
        .merge(mcp_router)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
}

/// The MCP JSON-RPC endpoint
async fn handle_mcp(
    State(handler): State<McpHandler>,
    Json(request): Json<JsonRpcRequest>,
) -> Json<serde_json::Value> {
    let response = handler.handle_request(request).await;
    match serde_json::to_value(&response) {
        Ok(value) => Json(value),
        Err(e) => Json(serde_json::json!({
            "jsonrpc": "2.0",
            "error": {
                "code": crate::jsonrpc::error_codes::INTERNAL_ERROR,
                "message": format!("Failed to serialize response: {e}"),
            },
            "id": null,
        })),
    }
}

/// Run the server until the process is signalled
///
/// # Errors
///
/// Returns an error if the database, listener, or server fails
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let database = Database::new(&config.database.url)
        .await
        .context("failed to initialize database")?;
    info!("Database initialized: {}", config.database.url);

    let app = build_router(database);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on {addr} (REST under /api/v1/diet_plan, MCP at POST /mcp)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    // Termination is not an error path; log and return
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install shutdown handler: {e}");
        return;
    }
    info!("shutdown signal received");
}
