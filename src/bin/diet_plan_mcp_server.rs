// ABOUTME: Server binary for the diet plan MCP and REST API
// ABOUTME: Loads configuration, initializes logging, and runs the unified server
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Diet Plan MCP Server Binary
//!
//! Starts the unified server: REST API under `/api/v1/diet_plan` and the
//! MCP JSON-RPC endpoint at `POST /mcp`, backed by a SQLite database of
//! food, nutrient, and diet-rule reference data.

use anyhow::Result;
use clap::Parser;
use diet_plan_mcp_server::{config::ServerConfig, logging, server};
use tracing::info;

#[derive(Parser)]
#[command(name = "diet-plan-mcp-server")]
#[command(about = "Diet plan data API for LLMs - food, nutrient, and diet-suitability tools")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = database_url;
    }

    logging::init_from_env()?;

    info!("Starting Diet Plan MCP Server");
    info!("{}", config.summary());

    server::serve(&config).await
}
