// ABOUTME: MCP protocol schema definitions and message structures
// ABOUTME: Defines initialize/capability types and the diet plan tool schemas
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! MCP Protocol Schema Definitions
//!
//! Type-safe definitions for MCP protocol messages, capabilities, and the
//! tool schemas exposed by this server. Tool descriptions are written for
//! the LLM selecting among tools, so they spell out defaults and units.

use crate::constants::{
    json_fields::{
        ALLERGENS, CATEGORY, DIET_TYPE, FDC_ID, LIMITATION, MIN_AMOUNT, SEARCH_TERM, VITAMIN_TYPE,
    },
    tools,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Server Information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

/// MCP Tool Schema Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonSchema,
}

/// JSON Schema Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, PropertySchema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

/// JSON Schema Property Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub property_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Tool Call for executing a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

/// Tool Response after execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResponse {
    pub content: Vec<Content>,
    #[serde(rename = "isError")]
    pub is_error: bool,
    #[serde(rename = "structuredContent", skip_serializing_if = "Option::is_none")]
    pub structured_content: Option<serde_json::Value>,
}

/// Content types for MCP messages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

/// MCP Server Capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolsCapability>,
}

/// Tools capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCapability {
    #[serde(rename = "listChanged", skip_serializing_if = "Option::is_none")]
    pub list_changed: Option<bool>,
}

/// Complete MCP Initialize Response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResponse {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    pub capabilities: ServerCapabilities,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl InitializeResponse {
    /// Create a new initialize response with current server configuration
    #[must_use]
    pub fn new(protocol_version: String, server_name: String, server_version: String) -> Self {
        Self {
            protocol_version,
            server_info: ServerInfo {
                name: server_name,
                version: server_version,
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            instructions: Some(
                "This server provides USDA food, nutrient, and diet-suitability data for diet \
                 plan generation. Use `find_eligible_foods` to get diet-safe, allergen-safe food \
                 lists, the LCHF/LFV tools for rule lookups, and the nutrient tools for \
                 threshold queries. All tools are read-only."
                    .into(),
            ),
        }
    }
}

fn string_prop(description: &str) -> PropertySchema {
    PropertySchema {
        property_type: "string".into(),
        description: Some(description.into()),
    }
}

fn number_prop(description: &str) -> PropertySchema {
    PropertySchema {
        property_type: "number".into(),
        description: Some(description.into()),
    }
}

fn boolean_prop(description: &str) -> PropertySchema {
    PropertySchema {
        property_type: "boolean".into(),
        description: Some(description.into()),
    }
}

fn tool(
    name: &str,
    description: &str,
    properties: HashMap<String, PropertySchema>,
    required: Vec<&str>,
) -> ToolSchema {
    ToolSchema {
        name: name.into(),
        description: description.into(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(properties),
            required: Some(required.into_iter().map(Into::into).collect()),
        },
    }
}

/// Get all available tools
#[must_use]
pub fn get_tools() -> Vec<ToolSchema> {
    let mut all = create_food_catalog_tools();
    all.extend(create_nutrient_tools());
    all.extend(create_lchf_tools());
    all.extend(create_lfv_tools());
    all.push(create_find_eligible_foods_tool());
    all
}

/// Food catalog tool schemas
fn create_food_catalog_tools() -> Vec<ToolSchema> {
    vec![
        tool(
            tools::SEARCH_FOODS_BY_NAME,
            "Search the USDA food catalog by name (case-insensitive substring match)",
            HashMap::from([(
                SEARCH_TERM.to_string(),
                string_prop("Food name or fragment to search for"),
            )]),
            vec![SEARCH_TERM],
        ),
        tool(
            tools::GET_FOOD_BY_ID,
            "Get a single food from the catalog by its Food Data Central (FDC) id",
            HashMap::from([(
                FDC_ID.to_string(),
                number_prop("Food Data Central identifier"),
            )]),
            vec![FDC_ID],
        ),
        tool(
            tools::GET_FOOD_CATEGORIES,
            "List all distinct food categories in the catalog",
            HashMap::new(),
            vec![],
        ),
        tool(
            tools::GET_FOODS_BY_CATEGORY,
            "List foods in a catalog category (exact, case-insensitive match)",
            HashMap::from([(
                CATEGORY.to_string(),
                string_prop("Food category name, e.g. 'Fruits'"),
            )]),
            vec![CATEGORY],
        ),
        tool(
            tools::FIND_FOODS_WITHOUT_ALLERGENS,
            "Find foods that carry none of the given allergens. Accepts a comma-separated \
             list, e.g. 'milk, peanuts'. Foods without allergen data always pass.",
            HashMap::from([(
                ALLERGENS.to_string(),
                string_prop("Comma-separated allergens to exclude"),
            )]),
            vec![],
        ),
        tool(
            tools::FIND_FOODS_WITH_ALLERGENS,
            "Find foods whose allergen flags contain the given allergen",
            HashMap::from([(
                ALLERGENS.to_string(),
                string_prop("Allergen to look for, e.g. 'milk'"),
            )]),
            vec![ALLERGENS],
        ),
    ]
}

/// Nutrient tool schemas
fn create_nutrient_tools() -> Vec<ToolSchema> {
    vec![
        tool(
            tools::GET_NUTRIENTS_BY_FDC_ID,
            "Get the full nutrient profile (per 100 g) for a food by its FDC id",
            HashMap::from([(
                FDC_ID.to_string(),
                number_prop("Food Data Central identifier"),
            )]),
            vec![FDC_ID],
        ),
        tool(
            tools::SEARCH_NUTRIENTS_BY_FOOD_NAME,
            "Search nutrient profiles by food name (case-insensitive substring match)",
            HashMap::from([(
                SEARCH_TERM.to_string(),
                string_prop("Food name or fragment to search for"),
            )]),
            vec![SEARCH_TERM],
        ),
        tool(
            tools::FIND_HIGH_PROTEIN_FOODS,
            "Find foods with at least the given protein per 100 g (default 10 g)",
            HashMap::from([(
                "minProtein".to_string(),
                number_prop("Minimum protein in grams (default 10)"),
            )]),
            vec![],
        ),
        tool(
            tools::FIND_LOW_CALORIE_FOODS,
            "Find foods with at most the given calories per 100 g (default 100 kcal)",
            HashMap::from([(
                "maxCalories".to_string(),
                number_prop("Maximum calories in kcal (default 100)"),
            )]),
            vec![],
        ),
        tool(
            tools::FIND_FOODS_IN_CALORIE_RANGE,
            "Find foods whose calories fall in a range. A missing maximum defaults to \
             minCalories + 500.",
            HashMap::from([
                (
                    "minCalories".to_string(),
                    number_prop("Minimum calories in kcal"),
                ),
                (
                    "maxCalories".to_string(),
                    number_prop("Maximum calories in kcal (default min + 500)"),
                ),
            ]),
            vec!["minCalories"],
        ),
        tool(
            tools::FIND_HIGH_FIBER_FOODS,
            "Find foods with at least the given fiber per 100 g (default 3 g)",
            HashMap::from([(
                "minFiber".to_string(),
                number_prop("Minimum fiber in grams (default 3)"),
            )]),
            vec![],
        ),
        tool(
            tools::FIND_LOW_SODIUM_FOODS,
            "Find foods with at most the given sodium per 100 g (default 140 mg)",
            HashMap::from([(
                "maxSodium".to_string(),
                number_prop("Maximum sodium in mg (default 140)"),
            )]),
            vec![],
        ),
        tool(
            tools::FIND_VITAMIN_RICH_FOODS,
            "Find foods rich in a vitamin or mineral. Supported types: C, D, CALCIUM, IRON, \
             POTASSIUM, MAGNESIUM. Each type has its own default minimum.",
            HashMap::from([
                (
                    VITAMIN_TYPE.to_string(),
                    string_prop("Vitamin or mineral type, e.g. 'C' or 'IRON'"),
                ),
                (
                    MIN_AMOUNT.to_string(),
                    number_prop("Minimum amount in the nutrient's unit (type-specific default)"),
                ),
            ]),
            vec![VITAMIN_TYPE],
        ),
        tool(
            tools::FIND_FOODS_FOR_DIET,
            "Find foods meeting dietary-restriction cutoffs: low sodium (<140 mg), low fat \
             (<3 g), high fiber (>3 g), low sugar (<5 g). Enable any combination of flags.",
            HashMap::from([
                ("lowSodium".to_string(), boolean_prop("Require sodium below 140 mg")),
                ("lowFat".to_string(), boolean_prop("Require total fat below 3 g")),
                ("highFiber".to_string(), boolean_prop("Require fiber above 3 g")),
                ("lowSugar".to_string(), boolean_prop("Require sugars below 5 g")),
            ]),
            vec![],
        ),
        tool(
            tools::FIND_BALANCED_FOODS,
            "Find foods with balanced macros: protein 10-35%, fat 20-35%, and carbohydrates \
             45-65% of energy",
            HashMap::new(),
            vec![],
        ),
    ]
}

/// LCHF diet rule tool schemas
fn create_lchf_tools() -> Vec<ToolSchema> {
    vec![
        tool(
            tools::SEARCH_LCHF_FOODS_BY_NAME,
            "Search LCHF (Low Carb High Fat) diet rules by food name",
            HashMap::from([(
                SEARCH_TERM.to_string(),
                string_prop("Food name or fragment to search for"),
            )]),
            vec![SEARCH_TERM],
        ),
        tool(
            tools::GET_LCHF_FOODS_BY_CATEGORY,
            "List LCHF diet rules in a category",
            HashMap::from([(
                CATEGORY.to_string(),
                string_prop("LCHF category name, e.g. 'Cheese'"),
            )]),
            vec![CATEGORY],
        ),
        tool(
            tools::GET_LCHF_FOODS_BY_LIMITATION,
            "List LCHF diet rules with a limitation tier. Valid tiers: OK, Restricted, \
             Limit, Avoid, Limited, Recommended.",
            HashMap::from([(
                LIMITATION.to_string(),
                string_prop("LCHF limitation tier"),
            )]),
            vec![LIMITATION],
        ),
        tool(
            tools::GET_ALLOWED_LCHF_FOODS,
            "List foods allowed on the LCHF diet (tiers OK and Recommended)",
            HashMap::new(),
            vec![],
        ),
        tool(
            tools::GET_RECOMMENDED_LCHF_FOODS,
            "List foods recommended on the LCHF diet",
            HashMap::new(),
            vec![],
        ),
        tool(
            tools::GET_RESTRICTED_LCHF_FOODS,
            "List foods restricted on the LCHF diet (tiers Restricted, Avoid, Limited)",
            HashMap::new(),
            vec![],
        ),
        tool(
            tools::GET_FOODS_TO_AVOID_LCHF,
            "List foods to avoid entirely on the LCHF diet",
            HashMap::new(),
            vec![],
        ),
        tool(
            tools::GET_LCHF_FOOD_CATEGORIES,
            "List all distinct LCHF rule categories",
            HashMap::new(),
            vec![],
        ),
    ]
}

/// LFV diet rule tool schemas
fn create_lfv_tools() -> Vec<ToolSchema> {
    vec![
        tool(
            tools::SEARCH_LFV_FOODS_BY_NAME,
            "Search LFV (Low Fat Vegetarian) diet rules by food name",
            HashMap::from([(
                SEARCH_TERM.to_string(),
                string_prop("Food name or fragment to search for"),
            )]),
            vec![SEARCH_TERM],
        ),
        tool(
            tools::GET_LFV_FOODS_BY_CATEGORY,
            "List LFV diet rules in a category",
            HashMap::from([(
                CATEGORY.to_string(),
                string_prop("LFV category name, e.g. 'Legumes'"),
            )]),
            vec![CATEGORY],
        ),
        tool(
            tools::GET_LFV_FOODS_BY_LIMITATION,
            "List LFV diet rules with a limitation tier. Valid tiers: OK, Moderation, \
             Restricted, Limited.",
            HashMap::from([(
                LIMITATION.to_string(),
                string_prop("LFV limitation tier"),
            )]),
            vec![LIMITATION],
        ),
        tool(
            tools::GET_ALLOWED_LFV_FOODS,
            "List foods allowed on the LFV diet (tiers OK and Moderation)",
            HashMap::new(),
            vec![],
        ),
        tool(
            tools::GET_RESTRICTED_LFV_FOODS,
            "List foods restricted on the LFV diet (tiers Restricted and Limited)",
            HashMap::new(),
            vec![],
        ),
        tool(
            tools::GET_LFV_FOOD_CATEGORIES,
            "List all distinct LFV rule categories",
            HashMap::new(),
            vec![],
        ),
    ]
}

/// The eligibility tool schema
fn create_find_eligible_foods_tool() -> ToolSchema {
    tool(
        tools::FIND_ELIGIBLE_FOODS,
        "Find catalog foods eligible for a diet plan: matched by a permissive rule (OK or \
         Limited) of the chosen diet, free of the given allergens, with nutrient profiles \
         attached. Results are deduplicated by food name and capped at 30 for prompt use.",
        HashMap::from([
            (
                DIET_TYPE.to_string(),
                string_prop("Diet type: LCHF or LFV"),
            ),
            (
                ALLERGENS.to_string(),
                string_prop("Comma-separated allergens to exclude, e.g. 'milk, peanuts'"),
            ),
        ]),
        vec![DIET_TYPE],
    )
}
