// ABOUTME: Database management for the diet plan reference tables
// ABOUTME: Owns the SQLite pool, schema migrations, and the per-table managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Database Management
//!
//! This module provides database functionality for the diet plan MCP server:
//! the USDA-derived food catalog, per-food nutrient profiles, and the curated
//! LCHF/LFV diet rule tables. All four tables are read-mostly reference data;
//! writes happen only through the seeding binary.

pub mod diet_rules;
pub mod eligibility;
pub mod foods;
pub mod nutrients;

pub use diet_rules::DietRuleManager;
pub use eligibility::EligibilityManager;
pub use foods::FoodManager;
pub use nutrients::NutrientManager;

use anyhow::Result;
use sqlx::{Pool, Sqlite, SqlitePool};

/// Database handle owning the connection pool
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Manager for the food catalog table
    #[must_use]
    pub fn foods(&self) -> FoodManager {
        FoodManager::new(self.pool.clone())
    }

    /// Manager for the nutrient profile table
    #[must_use]
    pub fn nutrients(&self) -> NutrientManager {
        NutrientManager::new(self.pool.clone())
    }

    /// Manager for the LCHF/LFV diet rule tables
    #[must_use]
    pub fn diet_rules(&self) -> DietRuleManager {
        DietRuleManager::new(self.pool.clone())
    }

    /// Manager for the cross-table eligibility join
    #[must_use]
    pub fn eligibility(&self) -> EligibilityManager {
        EligibilityManager::new(self.pool.clone())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a table or index creation fails
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_foods().await?;
        self.migrate_nutrients().await?;
        self.migrate_diet_rules().await?;
        Ok(())
    }

    /// Create the food catalog table
    async fn migrate_foods(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS foods (
                fdc_id INTEGER PRIMARY KEY,
                food_name TEXT NOT NULL,
                data_type TEXT,
                food_category TEXT,
                publication_date TEXT,
                allergen_flags TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_foods_name ON foods(food_name)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_foods_category ON foods(food_category)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Create the nutrient profile table (1:1 with foods by FDC id)
    async fn migrate_nutrients(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS nutrients (
                fdc_id INTEGER PRIMARY KEY,
                food_name TEXT NOT NULL,
                simplified_name TEXT,
                synonyms TEXT,
                energy_kcal REAL,
                total_fat_g REAL,
                protein_g REAL,
                carbohydrate_g REAL,
                fiber_g REAL,
                sugars_g REAL,
                added_sugars_g REAL,
                sodium_mg REAL,
                potassium_mg REAL,
                calcium_mg REAL,
                iron_mg REAL,
                vitamin_c_mg REAL,
                cholesterol_mg REAL,
                saturated_fat_g REAL,
                vitamin_d_mcg REAL,
                magnesium_mg REAL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_nutrients_name ON nutrients(food_name)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Create the curated LCHF and LFV rule tables
    ///
    /// Rules join to the catalog by fuzzy name containment only, so there
    /// are no foreign keys here.
    async fn migrate_diet_rules(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS lchf_rules (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                limitation TEXT NOT NULL,
                notes TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS lfv_rules (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                limitation TEXT NOT NULL,
                notes TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_lchf_limitation ON lchf_rules(limitation)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_lchf_category ON lchf_rules(category)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_lfv_limitation ON lfv_rules(limitation)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_lfv_category ON lfv_rules(category)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
