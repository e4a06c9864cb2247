// ABOUTME: Main library entry point for the diet plan MCP server
// ABOUTME: Provides MCP and REST API protocols for food, nutrient, and diet-suitability data
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Diet Plan MCP Server
//!
//! A Model Context Protocol (MCP) server for diet-plan generation backends.
//! It exposes a USDA-derived food catalog, per-food nutrient profiles, and
//! curated LCHF/LFV diet-suitability rule tables through MCP tools and a
//! REST API, so an AI orchestration layer can assemble diet-safe food lists
//! for prompt construction.
//!
//! ## Architecture
//!
//! - **Models**: food, nutrient, and diet-rule data structures
//! - **Database**: sqlx/SQLite managers for the four reference tables
//! - **Eligibility**: the diet-and-allergen-safe food join consumed by
//!   prompt builders
//! - **MCP**: JSON-RPC 2.0 tool-calling interface
//! - **Routes**: REST endpoints mirroring the MCP tools

/// Allergen filter tokenization and exclusion predicate
pub mod allergen;

/// Macro-balance classification of nutrient profiles
pub mod balance;

/// Configuration management
pub mod config;

/// Application constants and default threshold values
pub mod constants;

/// Database managers for foods, nutrients, diet rules, and eligibility
pub mod database;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// JSON-RPC 2.0 foundation for the MCP protocol
pub mod jsonrpc;

/// Production logging and structured output
pub mod logging;

/// Model Context Protocol server implementation
pub mod mcp;

/// Common data models for food and diet data
pub mod models;

/// `HTTP` routes for the REST API
pub mod routes;

/// Unified HTTP server combining REST and MCP
pub mod server;
