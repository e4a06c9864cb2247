// ABOUTME: Configuration module organization for the diet plan MCP server
// ABOUTME: Re-exports environment-based configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration management

/// Environment-based configuration for production deployment
pub mod environment;

pub use environment::{Environment, LogLevel, ServerConfig};
