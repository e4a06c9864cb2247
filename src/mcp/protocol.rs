// ABOUTME: MCP protocol method dispatch over JSON-RPC 2.0
// ABOUTME: Handles initialize, ping, tools/list, and tools/call requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Protocol dispatch
//!
//! One handler per server, shared across requests. Validation failures map
//! to JSON-RPC invalid params, unknown methods and tools to their standard
//! codes, and database failures to internal errors. Tool results carry a
//! text rendering plus `structuredContent` for clients that parse JSON.

use super::schema::{self, Content, InitializeResponse, ToolCall, ToolResponse};
use super::tool_handlers::ToolHandlers;
use crate::constants::{protocol::MCP_PROTOCOL_VERSION, service_names};
use crate::database::Database;
use crate::errors::{AppError, ErrorCode};
use crate::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};
use crate::logging::AppLogger;
use serde_json::{json, Value};
use std::time::Instant;
use tracing::warn;

/// MCP request handler backed by the reference database
#[derive(Clone)]
pub struct McpHandler {
    database: Database,
}

impl McpHandler {
    /// Create a new handler
    #[must_use]
    pub const fn new(database: Database) -> Self {
        Self { database }
    }

    /// Dispatch a JSON-RPC request to its MCP method
    pub async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => Self::handle_initialize(request.id),
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            "tools/list" => JsonRpcResponse::success(
                request.id,
                json!({ "tools": schema::get_tools() }),
            ),
            "tools/call" => self.handle_tools_call(request).await,
            other => {
                warn!(method = %other, "unknown MCP method");
                JsonRpcResponse::error(
                    request.id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("Method not found: {other}"),
                )
            }
        }
    }

    fn handle_initialize(id: Option<Value>) -> JsonRpcResponse {
        let response = InitializeResponse::new(
            MCP_PROTOCOL_VERSION.to_string(),
            service_names::DIET_PLAN_MCP_SERVER.to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        );
        match serde_json::to_value(&response) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(
                id,
                error_codes::INTERNAL_ERROR,
                format!("Failed to serialize initialize response: {e}"),
            ),
        }
    }

    async fn handle_tools_call(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let Some(params) = request.params else {
            return JsonRpcResponse::error(
                request.id,
                error_codes::INVALID_PARAMS,
                "tools/call requires params",
            );
        };

        let call: ToolCall = match serde_json::from_value(params) {
            Ok(call) => call,
            Err(e) => {
                return JsonRpcResponse::error(
                    request.id,
                    error_codes::INVALID_PARAMS,
                    format!("invalid tools/call params: {e}"),
                );
            }
        };

        let args = call.arguments.unwrap_or_else(|| json!({}));
        let started = Instant::now();
        let result = ToolHandlers::route_tool_call(&self.database, &call.name, &args).await;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match result {
            Ok(value) => {
                AppLogger::log_mcp_tool_call(&call.name, true, duration_ms);
                let text = serde_json::to_string_pretty(&value)
                    .unwrap_or_else(|_| value.to_string());
                let response = ToolResponse {
                    content: vec![Content::Text { text }],
                    is_error: false,
                    structured_content: Some(value),
                };
                match serde_json::to_value(&response) {
                    Ok(body) => JsonRpcResponse::success(request.id, body),
                    Err(e) => JsonRpcResponse::error(
                        request.id,
                        error_codes::INTERNAL_ERROR,
                        format!("Failed to serialize tool response: {e}"),
                    ),
                }
            }
            Err(e) => {
                warn!(
                    mcp.tool = %call.name,
                    mcp.success = false,
                    mcp.duration_ms = %duration_ms,
                    error = %e,
                    "MCP tool call failed"
                );
                JsonRpcResponse::error(request.id, map_error_code(&e), e.message)
            }
        }
    }
}

/// Map application error codes onto JSON-RPC error codes
const fn map_error_code(error: &AppError) -> i32 {
    match error.code {
        ErrorCode::InvalidInput
        | ErrorCode::MissingRequiredField
        | ErrorCode::ValueOutOfRange
        | ErrorCode::ResourceNotFound => error_codes::INVALID_PARAMS,
        ErrorCode::ConfigError
        | ErrorCode::InternalError
        | ErrorCode::DatabaseError
        | ErrorCode::SerializationError => error_codes::INTERNAL_ERROR,
    }
}
