// ABOUTME: Model Context Protocol server implementation for diet plan tools
// ABOUTME: Organizes protocol schemas, request dispatch, and tool execution handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # MCP Protocol Implementation
//!
//! JSON-RPC 2.0 over HTTP POST. Supported methods: `initialize`, `ping`,
//! `tools/list`, and `tools/call`. Every tool is read-only; results carry
//! both a text rendering and `structuredContent` with the raw JSON.

/// Protocol method dispatch
pub mod protocol;

/// Protocol schema definitions and tool schemas
pub mod schema;

/// Tool execution handlers
pub mod tool_handlers;

pub use protocol::McpHandler;
