// ABOUTME: End-to-end tests for the MCP handler over an in-memory database
// ABOUTME: Covers initialize, tools/list, tools/call, and JSON-RPC error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(missing_docs, clippy::unwrap_used)]

use diet_plan_mcp_server::database::Database;
use diet_plan_mcp_server::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};
use diet_plan_mcp_server::mcp::McpHandler;
use serde_json::{json, Value};
use sqlx::SqlitePool;

async fn create_handler() -> (McpHandler, Database) {
    let database = Database::new("sqlite::memory:").await.unwrap();
    (McpHandler::new(database.clone()), database)
}

async fn seed(pool: &SqlitePool) {
    sqlx::query(
        r"
        INSERT INTO foods (fdc_id, food_name, data_type, food_category, publication_date, allergen_flags)
        VALUES
            (1, 'Chicken breast, grilled', 'SR Legacy', 'Poultry Products', '2019-04-01', 'NaN'),
            (2, 'Bread, white', 'SR Legacy', 'Baked Products', '2019-04-01', 'Contains wheat')
        ",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO nutrients (fdc_id, food_name, energy_kcal, protein_g) VALUES (1, 'Chicken breast, grilled', 165.0, 31.0)",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO lchf_rules (name, category, limitation) VALUES ('chicken', 'Poultry', 'OK'), ('bread', 'Grains', 'Avoid')",
    )
    .execute(pool)
    .await
    .unwrap();
}

fn tool_call(name: &str, arguments: Value) -> JsonRpcRequest {
    JsonRpcRequest::new(
        "tools/call",
        Some(json!({ "name": name, "arguments": arguments })),
    )
}

fn structured_content(response: &JsonRpcResponse) -> Value {
    let result = response.result.as_ref().unwrap();
    assert_eq!(result["isError"], false);
    result["structuredContent"].clone()
}

#[tokio::test]
async fn test_initialize_reports_protocol_and_server_info() {
    let (handler, _db) = create_handler().await;

    let response = handler
        .handle_request(JsonRpcRequest::new("initialize", None))
        .await;
    assert!(response.is_success());

    let result = response.result.unwrap();
    assert_eq!(result["protocolVersion"], "2025-06-18");
    assert_eq!(result["serverInfo"]["name"], "diet-plan-mcp-server");
    assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
}

#[tokio::test]
async fn test_ping_returns_empty_object() {
    let (handler, _db) = create_handler().await;

    let response = handler.handle_request(JsonRpcRequest::new("ping", None)).await;
    assert!(response.is_success());
    assert_eq!(response.result.unwrap(), json!({}));
}

#[tokio::test]
async fn test_tools_list_exposes_all_tools() {
    let (handler, _db) = create_handler().await;

    let response = handler
        .handle_request(JsonRpcRequest::new("tools/list", None))
        .await;
    assert!(response.is_success());

    let result = response.result.unwrap();
    let tools = result["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 31);
    assert!(tools
        .iter()
        .any(|t| t["name"] == "find_eligible_foods"));
    assert!(tools[0].get("inputSchema").is_some());
}

#[tokio::test]
async fn test_search_tool_returns_structured_content() {
    let (handler, db) = create_handler().await;
    seed(db.pool()).await;

    let response = handler
        .handle_request(tool_call(
            "search_foods_by_name",
            json!({ "searchTerm": "chicken" }),
        ))
        .await;
    assert!(response.is_success());

    let content = structured_content(&response);
    let foods = content.as_array().unwrap();
    assert_eq!(foods.len(), 1);
    assert_eq!(foods[0]["food_name"], "Chicken breast, grilled");
}

#[tokio::test]
async fn test_eligible_foods_tool_end_to_end() {
    let (handler, db) = create_handler().await;
    seed(db.pool()).await;

    let response = handler
        .handle_request(tool_call(
            "find_eligible_foods",
            json!({ "dietType": "LCHF" }),
        ))
        .await;
    assert!(response.is_success());

    let content = structured_content(&response);
    let foods = content.as_array().unwrap();
    assert_eq!(foods.len(), 1);
    assert_eq!(foods[0]["food_name"], "Chicken breast, grilled");
    assert_eq!(foods[0]["protein_g"], 31.0);
}

#[tokio::test]
async fn test_missing_required_field_is_invalid_params() {
    let (handler, _db) = create_handler().await;

    let response = handler
        .handle_request(tool_call("search_foods_by_name", json!({})))
        .await;
    assert!(response.is_error());
    assert_eq!(
        response.error.unwrap().code,
        error_codes::INVALID_PARAMS
    );
}

#[tokio::test]
async fn test_invalid_tier_argument_is_invalid_params() {
    let (handler, _db) = create_handler().await;

    let response = handler
        .handle_request(tool_call(
            "get_lchf_foods_by_limitation",
            json!({ "limitation": "Sometimes" }),
        ))
        .await;
    assert!(response.is_error());
    assert_eq!(
        response.error.unwrap().code,
        error_codes::INVALID_PARAMS
    );
}

#[tokio::test]
async fn test_unknown_tool_is_invalid_params() {
    let (handler, _db) = create_handler().await;

    let response = handler
        .handle_request(tool_call("launch_rocket", json!({})))
        .await;
    assert!(response.is_error());
    assert_eq!(
        response.error.unwrap().code,
        error_codes::INVALID_PARAMS
    );
}

#[tokio::test]
async fn test_unknown_method_is_method_not_found() {
    let (handler, _db) = create_handler().await;

    let response = handler
        .handle_request(JsonRpcRequest::new("resources/list", None))
        .await;
    assert!(response.is_error());
    assert_eq!(
        response.error.unwrap().code,
        error_codes::METHOD_NOT_FOUND
    );
}

#[tokio::test]
async fn test_tools_call_without_params_is_invalid() {
    let (handler, _db) = create_handler().await;

    let response = handler
        .handle_request(JsonRpcRequest::new("tools/call", None))
        .await;
    assert!(response.is_error());
    assert_eq!(
        response.error.unwrap().code,
        error_codes::INVALID_PARAMS
    );
}

#[tokio::test]
async fn test_response_id_matches_request_id() {
    let (handler, _db) = create_handler().await;

    let request = JsonRpcRequest::with_id("ping", None, json!("req-42"));
    let response = handler.handle_request(request).await;
    assert_eq!(response.id, Some(json!("req-42")));
}
