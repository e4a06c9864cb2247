// ABOUTME: Tool execution handlers for MCP tools/call requests
// ABOUTME: Routes tool names to database managers and serializes their results
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool execution
//!
//! Each tool maps to one manager operation. Argument extraction is strict:
//! a missing required field or a wrongly typed value is a validation error
//! surfaced to the client as invalid params, never a silent default.

use crate::constants::{
    json_fields::{
        ALLERGENS, CATEGORY, DIET_TYPE, FDC_ID, LIMITATION, MIN_AMOUNT, SEARCH_TERM, VITAMIN_TYPE,
    },
    tools,
};
use crate::database::Database;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{DietType, VitaminMineral};
use serde_json::Value;
use tracing::debug;

/// Tool execution handlers for the MCP protocol
pub struct ToolHandlers;

impl ToolHandlers {
    /// Route a tools/call by name to its implementation
    ///
    /// # Errors
    ///
    /// Returns a validation error for unknown tools or bad arguments, and
    /// propagates database errors
    pub async fn route_tool_call(
        database: &Database,
        tool_name: &str,
        args: &Value,
    ) -> AppResult<Value> {
        debug!(tool = %tool_name, "executing MCP tool");

        match tool_name {
            // Food catalog
            tools::SEARCH_FOODS_BY_NAME => {
                let term = require_str(args, SEARCH_TERM)?;
                to_value(database.foods().search_by_name(term).await?)
            }
            tools::GET_FOOD_BY_ID => {
                let fdc_id = require_i64(args, FDC_ID)?;
                let food = database
                    .foods()
                    .get_by_fdc_id(fdc_id)
                    .await?
                    .ok_or_else(|| AppError::not_found(format!("Food {fdc_id}")))?;
                to_value(food)
            }
            tools::GET_FOOD_CATEGORIES => to_value(database.foods().get_categories().await?),
            tools::GET_FOODS_BY_CATEGORY => {
                let category = require_str(args, CATEGORY)?;
                to_value(database.foods().get_by_category(category).await?)
            }
            tools::FIND_FOODS_WITHOUT_ALLERGENS => {
                let allergens = optional_str(args, ALLERGENS);
                to_value(database.foods().find_without_allergens(allergens).await?)
            }
            tools::FIND_FOODS_WITH_ALLERGENS => {
                let allergen = require_str(args, ALLERGENS)?;
                to_value(database.foods().find_with_allergen(allergen).await?)
            }

            // Nutrients
            tools::GET_NUTRIENTS_BY_FDC_ID => {
                let fdc_id = require_i64(args, FDC_ID)?;
                let profile = database
                    .nutrients()
                    .get_by_fdc_id(fdc_id)
                    .await?
                    .ok_or_else(|| AppError::not_found(format!("Nutrients for food {fdc_id}")))?;
                to_value(profile)
            }
            tools::SEARCH_NUTRIENTS_BY_FOOD_NAME => {
                let term = require_str(args, SEARCH_TERM)?;
                to_value(database.nutrients().search_by_food_name(term).await?)
            }
            tools::FIND_HIGH_PROTEIN_FOODS => {
                let min = optional_f64(args, "minProtein")?;
                to_value(database.nutrients().find_high_protein(min).await?)
            }
            tools::FIND_LOW_CALORIE_FOODS => {
                let max = optional_f64(args, "maxCalories")?;
                to_value(database.nutrients().find_low_calorie(max).await?)
            }
            tools::FIND_FOODS_IN_CALORIE_RANGE => {
                let min = require_f64(args, "minCalories")?;
                let max = optional_f64(args, "maxCalories")?;
                to_value(database.nutrients().find_in_calorie_range(min, max).await?)
            }
            tools::FIND_HIGH_FIBER_FOODS => {
                let min = optional_f64(args, "minFiber")?;
                to_value(database.nutrients().find_high_fiber(min).await?)
            }
            tools::FIND_LOW_SODIUM_FOODS => {
                let max = optional_f64(args, "maxSodium")?;
                to_value(database.nutrients().find_low_sodium(max).await?)
            }
            tools::FIND_VITAMIN_RICH_FOODS => {
                let raw = require_str(args, VITAMIN_TYPE)?;
                let vitamin = VitaminMineral::parse(raw).ok_or_else(|| {
                    AppError::invalid_input(format!("unknown vitamin type: {raw}"))
                })?;
                let min = optional_f64(args, MIN_AMOUNT)?;
                to_value(database.nutrients().find_vitamin_rich(vitamin, min).await?)
            }
            tools::FIND_FOODS_FOR_DIET => {
                let low_sodium = optional_bool(args, "lowSodium")?;
                let low_fat = optional_bool(args, "lowFat")?;
                let high_fiber = optional_bool(args, "highFiber")?;
                let low_sugar = optional_bool(args, "lowSugar")?;
                to_value(
                    database
                        .nutrients()
                        .find_for_dietary_restrictions(low_sodium, low_fat, high_fiber, low_sugar)
                        .await?,
                )
            }
            tools::FIND_BALANCED_FOODS => to_value(database.nutrients().find_balanced().await?),

            // LCHF rules
            tools::SEARCH_LCHF_FOODS_BY_NAME => {
                let term = require_str(args, SEARCH_TERM)?;
                to_value(database.diet_rules().lchf_search_by_name(term).await?)
            }
            tools::GET_LCHF_FOODS_BY_CATEGORY => {
                let category = require_str(args, CATEGORY)?;
                to_value(database.diet_rules().lchf_by_category(category).await?)
            }
            tools::GET_LCHF_FOODS_BY_LIMITATION => {
                let limitation = require_str(args, LIMITATION)?;
                to_value(database.diet_rules().lchf_by_limitation(limitation).await?)
            }
            tools::GET_ALLOWED_LCHF_FOODS => to_value(database.diet_rules().lchf_allowed().await?),
            tools::GET_RECOMMENDED_LCHF_FOODS => {
                to_value(database.diet_rules().lchf_recommended().await?)
            }
            tools::GET_RESTRICTED_LCHF_FOODS => {
                to_value(database.diet_rules().lchf_restricted().await?)
            }
            tools::GET_FOODS_TO_AVOID_LCHF => {
                to_value(database.diet_rules().lchf_to_avoid().await?)
            }
            tools::GET_LCHF_FOOD_CATEGORIES => {
                to_value(database.diet_rules().lchf_categories().await?)
            }

            // LFV rules
            tools::SEARCH_LFV_FOODS_BY_NAME => {
                let term = require_str(args, SEARCH_TERM)?;
                to_value(database.diet_rules().lfv_search_by_name(term).await?)
            }
            tools::GET_LFV_FOODS_BY_CATEGORY => {
                let category = require_str(args, CATEGORY)?;
                to_value(database.diet_rules().lfv_by_category(category).await?)
            }
            tools::GET_LFV_FOODS_BY_LIMITATION => {
                let limitation = require_str(args, LIMITATION)?;
                to_value(database.diet_rules().lfv_by_limitation(limitation).await?)
            }
            tools::GET_ALLOWED_LFV_FOODS => to_value(database.diet_rules().lfv_allowed().await?),
            tools::GET_RESTRICTED_LFV_FOODS => {
                to_value(database.diet_rules().lfv_restricted().await?)
            }
            tools::GET_LFV_FOOD_CATEGORIES => {
                to_value(database.diet_rules().lfv_categories().await?)
            }

            // Eligibility
            tools::FIND_ELIGIBLE_FOODS => {
                let raw = require_str(args, DIET_TYPE)?;
                let diet = DietType::parse(raw).ok_or_else(|| {
                    AppError::invalid_input(format!("unknown diet type: {raw}"))
                })?;
                let allergens = optional_str(args, ALLERGENS);
                to_value(
                    database
                        .eligibility()
                        .find_eligible_foods_for_prompt(diet, allergens)
                        .await?,
                )
            }

            unknown => Err(AppError::invalid_input(format!("unknown tool: {unknown}"))),
        }
    }
}

fn to_value<T: serde::Serialize>(value: T) -> AppResult<Value> {
    Ok(serde_json::to_value(value)?)
}

fn require_str<'a>(args: &'a Value, field: &str) -> AppResult<&'a str> {
    args.get(field).and_then(Value::as_str).ok_or_else(|| {
        AppError::new(
            ErrorCode::MissingRequiredField,
            format!("missing required string field: {field}"),
        )
    })
}

fn optional_str<'a>(args: &'a Value, field: &str) -> Option<&'a str> {
    args.get(field).and_then(Value::as_str)
}

fn require_i64(args: &Value, field: &str) -> AppResult<i64> {
    args.get(field).and_then(Value::as_i64).ok_or_else(|| {
        AppError::new(
            ErrorCode::MissingRequiredField,
            format!("missing required integer field: {field}"),
        )
    })
}

fn require_f64(args: &Value, field: &str) -> AppResult<f64> {
    args.get(field).and_then(Value::as_f64).ok_or_else(|| {
        AppError::new(
            ErrorCode::MissingRequiredField,
            format!("missing required number field: {field}"),
        )
    })
}

fn optional_f64(args: &Value, field: &str) -> AppResult<Option<f64>> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_f64().map(Some).ok_or_else(|| {
            AppError::invalid_input(format!("field {field} must be a number"))
        }),
    }
}

fn optional_bool(args: &Value, field: &str) -> AppResult<bool> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(false),
        Some(value) => value.as_bool().ok_or_else(|| {
            AppError::invalid_input(format!("field {field} must be a boolean"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require_str_rejects_missing_field() {
        let args = json!({});
        let err = require_str(&args, SEARCH_TERM).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
    }

    #[test]
    fn test_optional_f64_rejects_wrong_type() {
        let args = json!({"minProtein": "ten"});
        assert!(optional_f64(&args, "minProtein").is_err());
        assert_eq!(optional_f64(&json!({}), "minProtein").unwrap(), None);
    }

    #[test]
    fn test_optional_bool_defaults_false() {
        assert!(!optional_bool(&json!({}), "lowFat").unwrap());
        assert!(optional_bool(&json!({"lowFat": true}), "lowFat").unwrap());
        assert!(optional_bool(&json!({"lowFat": 1}), "lowFat").is_err());
    }
}
