// ABOUTME: Food catalog database operations for search, lookup, and allergen queries
// ABOUTME: Provides the FoodManager over the USDA-derived foods table
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Food catalog queries
//!
//! Name search is case-insensitive substring matching, the same fuzzy
//! semantics the diet-rule join uses. Allergen exclusion happens in Rust
//! via [`AllergenFilter`] after fetching, never inside the SQL string.

use crate::allergen::AllergenFilter;
use crate::errors::{AppError, AppResult};
use crate::models::FoodItem;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Manager for the food catalog table
#[derive(Clone)]
pub struct FoodManager {
    pool: SqlitePool,
}

impl FoodManager {
    /// Create a new food manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Search foods by case-insensitive name fragment
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty search term, or a database
    /// error if the query fails
    pub async fn search_by_name(&self, search_term: &str) -> AppResult<Vec<FoodItem>> {
        let term = search_term.trim();
        if term.is_empty() {
            return Err(AppError::invalid_input("search term cannot be empty"));
        }

        let rows = sqlx::query(
            r"
            SELECT fdc_id, food_name, data_type, food_category, publication_date, allergen_flags
            FROM foods
            WHERE LOWER(food_name) LIKE '%' || LOWER(?) || '%'
            ORDER BY food_name
            ",
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to search foods by name: {e}")))?;

        rows.iter().map(row_to_food).collect()
    }

    /// Look up a single food by its FDC id
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive id, or a database error
    /// if the query fails
    pub async fn get_by_fdc_id(&self, fdc_id: i64) -> AppResult<Option<FoodItem>> {
        if fdc_id <= 0 {
            return Err(AppError::invalid_input("fdc_id must be positive"));
        }

        let row = sqlx::query(
            r"
            SELECT fdc_id, food_name, data_type, food_category, publication_date, allergen_flags
            FROM foods
            WHERE fdc_id = ?
            ",
        )
        .bind(fdc_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch food {fdc_id}: {e}")))?;

        row.as_ref().map(row_to_food).transpose()
    }

    /// List the distinct food categories, alphabetically
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn get_categories(&self) -> AppResult<Vec<String>> {
        let rows = sqlx::query(
            r"
            SELECT DISTINCT food_category
            FROM foods
            WHERE food_category IS NOT NULL AND food_category != ''
            ORDER BY food_category
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch food categories: {e}")))?;

        rows.iter()
            .map(|row| {
                row.try_get("food_category")
                    .map_err(|e| AppError::database(format!("Failed to read category: {e}")))
            })
            .collect()
    }

    /// List foods in a category (exact, case-insensitive match)
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty category, or a database error
    /// if the query fails
    pub async fn get_by_category(&self, category: &str) -> AppResult<Vec<FoodItem>> {
        let category = category.trim();
        if category.is_empty() {
            return Err(AppError::invalid_input("category cannot be empty"));
        }

        let rows = sqlx::query(
            r"
            SELECT fdc_id, food_name, data_type, food_category, publication_date, allergen_flags
            FROM foods
            WHERE LOWER(food_category) = LOWER(?)
            ORDER BY food_name
            ",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch foods by category: {e}")))?;

        rows.iter().map(row_to_food).collect()
    }

    /// Find foods that carry none of the given allergens
    ///
    /// Foods without allergen data always pass. An empty allergen string
    /// returns the full catalog.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn find_without_allergens(&self, allergens: Option<&str>) -> AppResult<Vec<FoodItem>> {
        let filter = AllergenFilter::from_raw(allergens);
        let foods = self.list_all().await?;
        Ok(foods
            .into_iter()
            .filter(|food| !filter.excludes(food.allergen_flags.as_deref()))
            .collect())
    }

    /// Find foods whose allergen flags contain the given allergen
    ///
    /// The inverse query: foods without allergen data never match.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty allergen, or a database error
    /// if the query fails
    pub async fn find_with_allergen(&self, allergen: &str) -> AppResult<Vec<FoodItem>> {
        let allergen = allergen.trim();
        if allergen.is_empty() {
            return Err(AppError::invalid_input("allergen cannot be empty"));
        }

        let filter = AllergenFilter::from_raw(Some(allergen));
        let foods = self.list_all().await?;
        Ok(foods
            .into_iter()
            .filter(|food| filter.excludes(food.allergen_flags.as_deref()))
            .collect())
    }

    /// List a page of the catalog ordered by name
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn list(&self, limit: u32, offset: u32) -> AppResult<Vec<FoodItem>> {
        let rows = sqlx::query(
            r"
            SELECT fdc_id, food_name, data_type, food_category, publication_date, allergen_flags
            FROM foods
            ORDER BY food_name
            LIMIT ? OFFSET ?
            ",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list foods: {e}")))?;

        rows.iter().map(row_to_food).collect()
    }

    /// Count the foods in the catalog
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn count(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM foods")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count foods: {e}")))?;

        row.try_get("count")
            .map_err(|e| AppError::database(format!("Failed to read count: {e}")))
    }

    async fn list_all(&self) -> AppResult<Vec<FoodItem>> {
        let rows = sqlx::query(
            r"
            SELECT fdc_id, food_name, data_type, food_category, publication_date, allergen_flags
            FROM foods
            ORDER BY food_name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch foods: {e}")))?;

        rows.iter().map(row_to_food).collect()
    }
}

/// Convert a database row into a [`FoodItem`]
fn row_to_food(row: &SqliteRow) -> AppResult<FoodItem> {
    Ok(FoodItem {
        fdc_id: row
            .try_get("fdc_id")
            .map_err(|e| AppError::database(format!("Failed to read fdc_id: {e}")))?,
        food_name: row
            .try_get("food_name")
            .map_err(|e| AppError::database(format!("Failed to read food_name: {e}")))?,
        data_type: row
            .try_get("data_type")
            .map_err(|e| AppError::database(format!("Failed to read data_type: {e}")))?,
        food_category: row
            .try_get("food_category")
            .map_err(|e| AppError::database(format!("Failed to read food_category: {e}")))?,
        publication_date: row
            .try_get("publication_date")
            .map_err(|e| AppError::database(format!("Failed to read publication_date: {e}")))?,
        allergen_flags: row
            .try_get("allergen_flags")
            .map_err(|e| AppError::database(format!("Failed to read allergen_flags: {e}")))?,
    })
}
