// ABOUTME: Nutrient profile database operations for threshold and composition queries
// ABOUTME: Provides the NutrientManager over the per-food nutrients table
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nutrient profile queries
//!
//! Threshold queries (high protein, low calorie, and so on) apply the
//! documented defaults when the caller supplies no threshold. SQL comparisons
//! against NULL are false, so foods missing the queried nutrient never appear
//! in threshold results.

use crate::balance;
use crate::constants::{defaults, dietary_flags};
use crate::errors::{AppError, AppResult};
use crate::models::{NutrientProfile, NutritionalStatistics, VitaminMineral};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const PROFILE_COLUMNS: &str = r"
    fdc_id, food_name, simplified_name, synonyms, energy_kcal, total_fat_g,
    protein_g, carbohydrate_g, fiber_g, sugars_g, added_sugars_g, sodium_mg,
    potassium_mg, calcium_mg, iron_mg, vitamin_c_mg, cholesterol_mg,
    saturated_fat_g, vitamin_d_mcg, magnesium_mg
";

/// Manager for the nutrient profile table
#[derive(Clone)]
pub struct NutrientManager {
    pool: SqlitePool,
}

impl NutrientManager {
    /// Create a new nutrient manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Look up a nutrient profile by FDC id
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive id, or a database error
    /// if the query fails
    pub async fn get_by_fdc_id(&self, fdc_id: i64) -> AppResult<Option<NutrientProfile>> {
        if fdc_id <= 0 {
            return Err(AppError::invalid_input("fdc_id must be positive"));
        }

        let query = format!("SELECT {PROFILE_COLUMNS} FROM nutrients WHERE fdc_id = ?");
        let row = sqlx::query(&query)
            .bind(fdc_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to fetch nutrients {fdc_id}: {e}")))?;

        row.as_ref().map(row_to_profile).transpose()
    }

    /// Search nutrient profiles by case-insensitive name fragment
    ///
    /// Matches against the food name, its simplified name, and the synonym
    /// list, so "garbanzo" finds chickpeas.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty search term, or a database
    /// error if the query fails
    pub async fn search_by_food_name(&self, search_term: &str) -> AppResult<Vec<NutrientProfile>> {
        let term = search_term.trim();
        if term.is_empty() {
            return Err(AppError::invalid_input("search term cannot be empty"));
        }

        let query = format!(
            r"
            SELECT {PROFILE_COLUMNS} FROM nutrients
            WHERE LOWER(food_name) LIKE '%' || LOWER(?) || '%'
               OR LOWER(simplified_name) LIKE '%' || LOWER(?) || '%'
               OR LOWER(synonyms) LIKE '%' || LOWER(?) || '%'
            ORDER BY food_name
            "
        );
        let rows = sqlx::query(&query)
            .bind(term)
            .bind(term)
            .bind(term)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to search nutrients: {e}")))?;

        rows.iter().map(row_to_profile).collect()
    }

    /// Foods with at least `min_protein` grams of protein (default 10 g)
    ///
    /// # Errors
    ///
    /// Returns a validation error for a negative threshold, or a database
    /// error if the query fails
    pub async fn find_high_protein(
        &self,
        min_protein: Option<f64>,
    ) -> AppResult<Vec<NutrientProfile>> {
        let threshold = validate_threshold("minProtein", min_protein, defaults::MIN_PROTEIN_G)?;
        self.threshold_query("protein_g >=", threshold, "protein_g DESC")
            .await
    }

    /// Foods with at most `max_calories` kcal (default 100 kcal)
    ///
    /// # Errors
    ///
    /// Returns a validation error for a negative threshold, or a database
    /// error if the query fails
    pub async fn find_low_calorie(
        &self,
        max_calories: Option<f64>,
    ) -> AppResult<Vec<NutrientProfile>> {
        let threshold =
            validate_threshold("maxCalories", max_calories, defaults::MAX_CALORIES_KCAL)?;
        self.threshold_query("energy_kcal <=", threshold, "energy_kcal ASC")
            .await
    }

    /// Foods whose energy falls within a calorie range
    ///
    /// A missing maximum defaults to `min + 500`. The minimum is required.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a negative or inverted range, or a
    /// database error if the query fails
    pub async fn find_in_calorie_range(
        &self,
        min_calories: f64,
        max_calories: Option<f64>,
    ) -> AppResult<Vec<NutrientProfile>> {
        if !min_calories.is_finite() || min_calories < 0.0 {
            return Err(AppError::invalid_input("minCalories must be non-negative"));
        }
        let max = max_calories.unwrap_or(min_calories + defaults::CALORIE_RANGE_SPAN);
        if !max.is_finite() || max < min_calories {
            return Err(AppError::invalid_input(
                "maxCalories must be at least minCalories",
            ));
        }

        let query = format!(
            r"
            SELECT {PROFILE_COLUMNS} FROM nutrients
            WHERE energy_kcal >= ? AND energy_kcal <= ?
            ORDER BY energy_kcal ASC
            "
        );
        let rows = sqlx::query(&query)
            .bind(min_calories)
            .bind(max)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::database(format!("Failed to fetch foods in calorie range: {e}"))
            })?;

        rows.iter().map(row_to_profile).collect()
    }

    /// Foods with at least `min_fiber` grams of fiber (default 3 g)
    ///
    /// # Errors
    ///
    /// Returns a validation error for a negative threshold, or a database
    /// error if the query fails
    pub async fn find_high_fiber(&self, min_fiber: Option<f64>) -> AppResult<Vec<NutrientProfile>> {
        let threshold = validate_threshold("minFiber", min_fiber, defaults::MIN_FIBER_G)?;
        self.threshold_query("fiber_g >=", threshold, "fiber_g DESC")
            .await
    }

    /// Foods with at most `max_sodium` mg of sodium (default 140 mg)
    ///
    /// # Errors
    ///
    /// Returns a validation error for a negative threshold, or a database
    /// error if the query fails
    pub async fn find_low_sodium(
        &self,
        max_sodium: Option<f64>,
    ) -> AppResult<Vec<NutrientProfile>> {
        let threshold = validate_threshold("maxSodium", max_sodium, defaults::MAX_SODIUM_MG)?;
        self.threshold_query("sodium_mg <=", threshold, "sodium_mg ASC")
            .await
    }

    /// Foods rich in a vitamin or mineral
    ///
    /// Uses the vitamin-specific default minimum when none is supplied.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a negative amount, or a database error
    /// if the query fails
    pub async fn find_vitamin_rich(
        &self,
        vitamin: VitaminMineral,
        min_amount: Option<f64>,
    ) -> AppResult<Vec<NutrientProfile>> {
        let threshold =
            validate_threshold("minAmount", min_amount, vitamin.default_min_amount())?;
        let column = vitamin.column();

        let query = format!(
            r"
            SELECT {PROFILE_COLUMNS} FROM nutrients
            WHERE {column} >= ?
            ORDER BY {column} DESC
            "
        );
        let rows = sqlx::query(&query)
            .bind(threshold)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to fetch vitamin-rich foods: {e}")))?;

        rows.iter().map(row_to_profile).collect()
    }

    /// Foods meeting the fixed dietary-restriction cutoffs
    ///
    /// Each enabled flag adds a conjunct: low sodium (<140 mg), low fat
    /// (<3 g), high fiber (>3 g), low sugar (<5 g). All flags off returns
    /// the whole table.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn find_for_dietary_restrictions(
        &self,
        low_sodium: bool,
        low_fat: bool,
        high_fiber: bool,
        low_sugar: bool,
    ) -> AppResult<Vec<NutrientProfile>> {
        let mut conditions = Vec::new();
        if low_sodium {
            conditions.push(format!("sodium_mg < {}", dietary_flags::LOW_SODIUM_MG));
        }
        if low_fat {
            conditions.push(format!("total_fat_g < {}", dietary_flags::LOW_FAT_G));
        }
        if high_fiber {
            conditions.push(format!("fiber_g > {}", dietary_flags::HIGH_FIBER_G));
        }
        if low_sugar {
            conditions.push(format!("sugars_g < {}", dietary_flags::LOW_SUGAR_G));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {PROFILE_COLUMNS} FROM nutrients {where_clause} ORDER BY food_name"
        );
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::database(format!("Failed to fetch restriction-matching foods: {e}"))
            })?;

        rows.iter().map(row_to_profile).collect()
    }

    /// Foods whose macro energy shares fall in the balanced ranges
    ///
    /// The classification runs in Rust over rows with known energy; see
    /// [`crate::balance`].
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn find_balanced(&self) -> AppResult<Vec<NutrientProfile>> {
        let query = format!(
            r"
            SELECT {PROFILE_COLUMNS} FROM nutrients
            WHERE energy_kcal IS NOT NULL AND energy_kcal > 0
            ORDER BY food_name
            "
        );
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to fetch nutrient profiles: {e}")))?;

        let profiles: Vec<NutrientProfile> =
            rows.iter().map(row_to_profile).collect::<AppResult<_>>()?;
        Ok(profiles
            .into_iter()
            .filter(balance::is_balanced)
            .collect())
    }

    /// Average macronutrient values over rows with a known energy value
    ///
    /// Rows without energy data are excluded from every average, so all four
    /// figures describe the same set of foods.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn statistics(&self) -> AppResult<NutritionalStatistics> {
        let row = sqlx::query(
            r"
            SELECT
                AVG(energy_kcal) as avg_calories,
                AVG(protein_g) as avg_protein,
                AVG(total_fat_g) as avg_fat,
                AVG(carbohydrate_g) as avg_carbs
            FROM nutrients
            WHERE energy_kcal IS NOT NULL
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to compute statistics: {e}")))?;

        Ok(NutritionalStatistics {
            avg_calories: read_f64(&row, "avg_calories")?,
            avg_protein: read_f64(&row, "avg_protein")?,
            avg_fat: read_f64(&row, "avg_fat")?,
            avg_carbs: read_f64(&row, "avg_carbs")?,
        })
    }

    async fn threshold_query(
        &self,
        condition: &str,
        threshold: f64,
        order: &str,
    ) -> AppResult<Vec<NutrientProfile>> {
        // `condition` and `order` are compile-time column fragments; only
        // the threshold is caller data and it is bound
        let query = format!(
            "SELECT {PROFILE_COLUMNS} FROM nutrients WHERE {condition} ? ORDER BY {order}"
        );
        let rows = sqlx::query(&query)
            .bind(threshold)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to run threshold query: {e}")))?;

        rows.iter().map(row_to_profile).collect()
    }
}

fn validate_threshold(name: &str, value: Option<f64>, default: f64) -> AppResult<f64> {
    let threshold = value.unwrap_or(default);
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(AppError::invalid_input(format!(
            "{name} must be non-negative"
        )));
    }
    Ok(threshold)
}

fn read_f64(row: &SqliteRow, column: &str) -> AppResult<Option<f64>> {
    row.try_get(column)
        .map_err(|e| AppError::database(format!("Failed to read {column}: {e}")))
}

/// Convert a database row into a [`NutrientProfile`]
pub(crate) fn row_to_profile(row: &SqliteRow) -> AppResult<NutrientProfile> {
    Ok(NutrientProfile {
        fdc_id: row
            .try_get("fdc_id")
            .map_err(|e| AppError::database(format!("Failed to read fdc_id: {e}")))?,
        food_name: row
            .try_get("food_name")
            .map_err(|e| AppError::database(format!("Failed to read food_name: {e}")))?,
        simplified_name: row
            .try_get("simplified_name")
            .map_err(|e| AppError::database(format!("Failed to read simplified_name: {e}")))?,
        synonyms: row
            .try_get("synonyms")
            .map_err(|e| AppError::database(format!("Failed to read synonyms: {e}")))?,
        energy_kcal: read_f64(row, "energy_kcal")?,
        total_fat_g: read_f64(row, "total_fat_g")?,
        protein_g: read_f64(row, "protein_g")?,
        carbohydrate_g: read_f64(row, "carbohydrate_g")?,
        fiber_g: read_f64(row, "fiber_g")?,
        sugars_g: read_f64(row, "sugars_g")?,
        added_sugars_g: read_f64(row, "added_sugars_g")?,
        sodium_mg: read_f64(row, "sodium_mg")?,
        potassium_mg: read_f64(row, "potassium_mg")?,
        calcium_mg: read_f64(row, "calcium_mg")?,
        iron_mg: read_f64(row, "iron_mg")?,
        vitamin_c_mg: read_f64(row, "vitamin_c_mg")?,
        cholesterol_mg: read_f64(row, "cholesterol_mg")?,
        saturated_fat_g: read_f64(row, "saturated_fat_g")?,
        vitamin_d_mcg: read_f64(row, "vitamin_d_mcg")?,
        magnesium_mg: read_f64(row, "magnesium_mg")?,
    })
}
