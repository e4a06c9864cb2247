// ABOUTME: Application constants and configuration values
// ABOUTME: Centralizes default thresholds, result caps, tool names, and env var names
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application constants
//!
//! Single source of truth for the server's magic numbers: dietary threshold
//! defaults, result caps, MCP tool names, and environment variable names.

/// Service identification
pub mod service_names {
    /// Canonical service name for logging and server info
    pub const DIET_PLAN_MCP_SERVER: &str = "diet-plan-mcp-server";
}

/// Default threshold values for nutrient queries (per 100 g)
pub mod defaults {
    /// Default minimum protein for `find_high_protein_foods` (g)
    pub const MIN_PROTEIN_G: f64 = 10.0;
    /// Default maximum calories for `find_low_calorie_foods` (kcal)
    pub const MAX_CALORIES_KCAL: f64 = 100.0;
    /// Default minimum fiber for `find_high_fiber_foods` (g)
    pub const MIN_FIBER_G: f64 = 3.0;
    /// Default maximum sodium for `find_low_sodium_foods` (mg)
    pub const MAX_SODIUM_MG: f64 = 140.0;
    /// Default calorie-range width when only a minimum is supplied (kcal)
    pub const CALORIE_RANGE_SPAN: f64 = 500.0;
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8081;
    /// Default SQLite database URL
    pub const DATABASE_URL: &str = "sqlite:./data/diet_plan.db";
}

/// Fixed cutoffs for the dietary-restriction flags query (per 100 g)
pub mod dietary_flags {
    /// Low sodium: below this many mg
    pub const LOW_SODIUM_MG: f64 = 140.0;
    /// Low fat: below this many g
    pub const LOW_FAT_G: f64 = 3.0;
    /// High fiber: above this many g
    pub const HIGH_FIBER_G: f64 = 3.0;
    /// Low sugar: below this many g
    pub const LOW_SUGAR_G: f64 = 5.0;
}

/// Result-set limits
pub mod limits {
    /// Cap on eligibility results destined for prompt construction.
    /// Bounds downstream prompt size, not a completeness guarantee.
    pub const ELIGIBLE_FOODS_PROMPT_CAP: u32 = 30;
    /// Default page size for paginated REST endpoints
    pub const DEFAULT_PAGE_SIZE: u32 = 20;
    /// Maximum page size for paginated REST endpoints
    pub const MAX_PAGE_SIZE: u32 = 100;
}

/// MCP protocol values
pub mod protocol {
    /// Supported MCP protocol version
    pub const MCP_PROTOCOL_VERSION: &str = "2025-06-18";
}

/// MCP tool names
pub mod tools {
    // Food catalog tools
    pub const SEARCH_FOODS_BY_NAME: &str = "search_foods_by_name";
    pub const GET_FOOD_BY_ID: &str = "get_food_by_id";
    pub const GET_FOOD_CATEGORIES: &str = "get_food_categories";
    pub const GET_FOODS_BY_CATEGORY: &str = "get_foods_by_category";
    pub const FIND_FOODS_WITHOUT_ALLERGENS: &str = "find_foods_without_allergens";
    pub const FIND_FOODS_WITH_ALLERGENS: &str = "find_foods_with_allergens";

    // Nutrient tools
    pub const GET_NUTRIENTS_BY_FDC_ID: &str = "get_nutrients_by_fdc_id";
    pub const SEARCH_NUTRIENTS_BY_FOOD_NAME: &str = "search_nutrients_by_food_name";
    pub const FIND_HIGH_PROTEIN_FOODS: &str = "find_high_protein_foods";
    pub const FIND_LOW_CALORIE_FOODS: &str = "find_low_calorie_foods";
    pub const FIND_FOODS_IN_CALORIE_RANGE: &str = "find_foods_in_calorie_range";
    pub const FIND_HIGH_FIBER_FOODS: &str = "find_high_fiber_foods";
    pub const FIND_LOW_SODIUM_FOODS: &str = "find_low_sodium_foods";
    pub const FIND_VITAMIN_RICH_FOODS: &str = "find_vitamin_rich_foods";
    pub const FIND_FOODS_FOR_DIET: &str = "find_foods_for_diet";
    pub const FIND_BALANCED_FOODS: &str = "find_balanced_foods";

    // LCHF diet tools
    pub const SEARCH_LCHF_FOODS_BY_NAME: &str = "search_lchf_foods_by_name";
    pub const GET_LCHF_FOODS_BY_CATEGORY: &str = "get_lchf_foods_by_category";
    pub const GET_LCHF_FOODS_BY_LIMITATION: &str = "get_lchf_foods_by_limitation";
    pub const GET_ALLOWED_LCHF_FOODS: &str = "get_allowed_lchf_foods";
    pub const GET_RECOMMENDED_LCHF_FOODS: &str = "get_recommended_lchf_foods";
    pub const GET_RESTRICTED_LCHF_FOODS: &str = "get_restricted_lchf_foods";
    pub const GET_FOODS_TO_AVOID_LCHF: &str = "get_foods_to_avoid_lchf";
    pub const GET_LCHF_FOOD_CATEGORIES: &str = "get_lchf_food_categories";

    // LFV diet tools
    pub const SEARCH_LFV_FOODS_BY_NAME: &str = "search_lfv_foods_by_name";
    pub const GET_LFV_FOODS_BY_CATEGORY: &str = "get_lfv_foods_by_category";
    pub const GET_LFV_FOODS_BY_LIMITATION: &str = "get_lfv_foods_by_limitation";
    pub const GET_ALLOWED_LFV_FOODS: &str = "get_allowed_lfv_foods";
    pub const GET_RESTRICTED_LFV_FOODS: &str = "get_restricted_lfv_foods";
    pub const GET_LFV_FOOD_CATEGORIES: &str = "get_lfv_food_categories";

    // Eligibility
    pub const FIND_ELIGIBLE_FOODS: &str = "find_eligible_foods";
}

/// JSON field names shared between tool schemas and handlers
pub mod json_fields {
    pub const SEARCH_TERM: &str = "searchTerm";
    pub const FDC_ID: &str = "fdcId";
    pub const CATEGORY: &str = "category";
    pub const LIMITATION: &str = "limitation";
    pub const DIET_TYPE: &str = "dietType";
    pub const ALLERGENS: &str = "allergens";
    pub const VITAMIN_TYPE: &str = "vitaminType";
    pub const MIN_AMOUNT: &str = "minAmount";
}

/// Environment variable names
pub mod env_config {
    pub const HTTP_PORT: &str = "HTTP_PORT";
    pub const DATABASE_URL: &str = "DATABASE_URL";
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    pub const RUST_LOG: &str = "RUST_LOG";
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}
