// ABOUTME: Diet-and-allergen-safe food eligibility join for prompt construction
// ABOUTME: Combines the food catalog, diet rule tables, and nutrient profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Eligibility queries
//!
//! The central query of the server: which catalog foods may appear in a diet
//! plan for a given diet type and allergen list. A food is eligible when at
//! least one rule in the selected diet's table matches its name (fuzzy,
//! case-insensitive containment) with a permissive tier (OK or Limited), and
//! none of the caller's allergens appear in its allergen flags.
//!
//! Tier filtering and the name join run in SQL; allergen exclusion and
//! deduplication run in Rust afterwards. Results are deduplicated by food
//! name because the fuzzy join can match one food against several rules and
//! the catalog can carry name duplicates under distinct FDC ids; the first
//! occurrence in name order wins.

use crate::allergen::AllergenFilter;
use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use crate::models::{DietType, EligibleFood};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Manager for the cross-table eligibility join
#[derive(Clone)]
pub struct EligibilityManager {
    pool: SqlitePool,
}

impl EligibilityManager {
    /// Create a new eligibility manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All foods eligible for the given diet and allergen list
    ///
    /// Foods without a nutrient profile still appear, with every nutrient
    /// field absent. An empty or missing allergen string excludes nothing.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn find_eligible_foods(
        &self,
        diet: DietType,
        allergens: Option<&str>,
    ) -> AppResult<Vec<EligibleFood>> {
        let rule_table = match diet {
            DietType::Lchf => "lchf_rules",
            DietType::Lfv => "lfv_rules",
        };

        // The rule tables have no foreign keys into the catalog; the join
        // is fuzzy name containment by design
        let query = format!(
            r"
            SELECT DISTINCT
                f.fdc_id, f.food_name, f.allergen_flags,
                n.energy_kcal, n.total_fat_g, n.protein_g, n.carbohydrate_g,
                n.fiber_g, n.sugars_g, n.added_sugars_g, n.sodium_mg,
                n.potassium_mg, n.calcium_mg, n.iron_mg, n.vitamin_c_mg,
                n.cholesterol_mg, n.saturated_fat_g, n.vitamin_d_mcg,
                n.magnesium_mg
            FROM foods f
            JOIN {rule_table} r
                ON LOWER(f.food_name) LIKE '%' || LOWER(r.name) || '%'
            LEFT JOIN nutrients n ON n.fdc_id = f.fdc_id
            WHERE LOWER(r.limitation) IN ('ok', 'limited')
            ORDER BY f.food_name
            "
        );
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to fetch eligible foods: {e}")))?;

        let filter = AllergenFilter::from_raw(allergens);
        let mut seen_names: Vec<String> = Vec::new();
        let mut eligible = Vec::new();

        for row in &rows {
            let allergen_flags: Option<String> = row
                .try_get("allergen_flags")
                .map_err(|e| AppError::database(format!("Failed to read allergen_flags: {e}")))?;
            if filter.excludes(allergen_flags.as_deref()) {
                continue;
            }

            let food = row_to_eligible_food(row)?;
            let name_key = food.food_name.to_lowercase();
            if seen_names.contains(&name_key) {
                continue;
            }
            seen_names.push(name_key);
            eligible.push(food);
        }

        Ok(eligible)
    }

    /// Eligible foods capped for prompt construction
    ///
    /// Same semantics as [`Self::find_eligible_foods`], truncated to the
    /// first 30 names. The cap bounds downstream prompt size; it is not a
    /// relevance ranking.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn find_eligible_foods_for_prompt(
        &self,
        diet: DietType,
        allergens: Option<&str>,
    ) -> AppResult<Vec<EligibleFood>> {
        let mut eligible = self.find_eligible_foods(diet, allergens).await?;
        eligible.truncate(limits::ELIGIBLE_FOODS_PROMPT_CAP as usize);
        Ok(eligible)
    }

    /// Count of distinct eligible food names for a diet and allergen list
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn count_eligible_foods(
        &self,
        diet: DietType,
        allergens: Option<&str>,
    ) -> AppResult<usize> {
        Ok(self.find_eligible_foods(diet, allergens).await?.len())
    }
}

fn row_to_eligible_food(row: &SqliteRow) -> AppResult<EligibleFood> {
    let read = |column: &str| -> AppResult<Option<f64>> {
        row.try_get(column)
            .map_err(|e| AppError::database(format!("Failed to read {column}: {e}")))
    };

    Ok(EligibleFood {
        fdc_id: row
            .try_get("fdc_id")
            .map_err(|e| AppError::database(format!("Failed to read fdc_id: {e}")))?,
        food_name: row
            .try_get("food_name")
            .map_err(|e| AppError::database(format!("Failed to read food_name: {e}")))?,
        energy_kcal: read("energy_kcal")?,
        total_fat_g: read("total_fat_g")?,
        protein_g: read("protein_g")?,
        carbohydrate_g: read("carbohydrate_g")?,
        fiber_g: read("fiber_g")?,
        sugars_g: read("sugars_g")?,
        added_sugars_g: read("added_sugars_g")?,
        sodium_mg: read("sodium_mg")?,
        potassium_mg: read("potassium_mg")?,
        calcium_mg: read("calcium_mg")?,
        iron_mg: read("iron_mg")?,
        vitamin_c_mg: read("vitamin_c_mg")?,
        cholesterol_mg: read("cholesterol_mg")?,
        saturated_fat_g: read("saturated_fat_g")?,
        vitamin_d_mcg: read("vitamin_d_mcg")?,
        magnesium_mg: read("magnesium_mg")?,
    })
}
