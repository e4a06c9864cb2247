// ABOUTME: Curated LCHF and LFV diet rule queries with strict tier validation
// ABOUTME: Provides the DietRuleManager over the lchf_rules and lfv_rules tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diet rule queries
//!
//! Each diet has its own closed limitation vocabulary; caller-supplied tiers
//! are parsed strictly and unknown tiers are rejected as validation errors
//! rather than silently matching nothing. The "allowed" and "restricted"
//! accessors encode the permissive and restrictive tier groupings per diet:
//! LCHF allowed = {OK, Recommended}, restricted = {Restricted, Avoid,
//! Limited}; LFV allowed = {OK, Moderation}, restricted = {Restricted,
//! Limited}.

use crate::errors::{AppError, AppResult};
use crate::models::{LchfLimitation, LchfRule, LfvLimitation, LfvRule};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const RULE_COLUMNS: &str = "id, name, category, limitation, notes";

/// Manager for the LCHF and LFV diet rule tables
#[derive(Clone)]
pub struct DietRuleManager {
    pool: SqlitePool,
}

impl DietRuleManager {
    /// Create a new diet rule manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // === LCHF rules ===

    /// Search LCHF rules by case-insensitive name fragment
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty search term, or a database
    /// error if the query fails
    pub async fn lchf_search_by_name(&self, search_term: &str) -> AppResult<Vec<LchfRule>> {
        let rows = self.search_rows("lchf_rules", search_term).await?;
        rows.iter().map(row_to_lchf_rule).collect()
    }

    /// List LCHF rules in a category (exact, case-insensitive match)
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty category, or a database error
    /// if the query fails
    pub async fn lchf_by_category(&self, category: &str) -> AppResult<Vec<LchfRule>> {
        let rows = self.category_rows("lchf_rules", category).await?;
        rows.iter().map(row_to_lchf_rule).collect()
    }

    /// List LCHF rules with the given limitation tier
    ///
    /// # Errors
    ///
    /// Returns a validation error when the tier is not in the LCHF
    /// vocabulary, or a database error if the query fails
    pub async fn lchf_by_limitation(&self, limitation: &str) -> AppResult<Vec<LchfRule>> {
        let tier = LchfLimitation::parse(limitation).ok_or_else(|| {
            AppError::invalid_input(format!("unknown LCHF limitation: {limitation}"))
        })?;
        let rows = self.tier_rows("lchf_rules", &[tier.as_str()]).await?;
        rows.iter().map(row_to_lchf_rule).collect()
    }

    /// LCHF rules in the allowed tiers (OK and Recommended)
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn lchf_allowed(&self) -> AppResult<Vec<LchfRule>> {
        let tiers = [
            LchfLimitation::Ok.as_str(),
            LchfLimitation::Recommended.as_str(),
        ];
        let rows = self.tier_rows("lchf_rules", &tiers).await?;
        rows.iter().map(row_to_lchf_rule).collect()
    }

    /// LCHF rules marked Recommended
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn lchf_recommended(&self) -> AppResult<Vec<LchfRule>> {
        let rows = self
            .tier_rows("lchf_rules", &[LchfLimitation::Recommended.as_str()])
            .await?;
        rows.iter().map(row_to_lchf_rule).collect()
    }

    /// LCHF rules in the restrictive tiers (Restricted, Avoid, Limited)
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn lchf_restricted(&self) -> AppResult<Vec<LchfRule>> {
        let tiers = [
            LchfLimitation::Restricted.as_str(),
            LchfLimitation::Avoid.as_str(),
            LchfLimitation::Limited.as_str(),
        ];
        let rows = self.tier_rows("lchf_rules", &tiers).await?;
        rows.iter().map(row_to_lchf_rule).collect()
    }

    /// LCHF rules marked Avoid
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn lchf_to_avoid(&self) -> AppResult<Vec<LchfRule>> {
        let rows = self
            .tier_rows("lchf_rules", &[LchfLimitation::Avoid.as_str()])
            .await?;
        rows.iter().map(row_to_lchf_rule).collect()
    }

    /// Distinct LCHF categories, alphabetically
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn lchf_categories(&self) -> AppResult<Vec<String>> {
        self.distinct_column("lchf_rules", "category").await
    }

    /// Distinct limitation strings present in the LCHF table
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn lchf_limitations(&self) -> AppResult<Vec<String>> {
        self.distinct_column("lchf_rules", "limitation").await
    }

    /// Search LCHF rules by any combination of name fragment, category,
    /// and limitation tier; absent criteria match everything
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown tier, or a database error
    /// if the query fails
    pub async fn lchf_search(
        &self,
        name: Option<&str>,
        category: Option<&str>,
        limitation: Option<&str>,
    ) -> AppResult<Vec<LchfRule>> {
        let tier = limitation
            .map(|l| {
                LchfLimitation::parse(l).ok_or_else(|| {
                    AppError::invalid_input(format!("unknown LCHF limitation: {l}"))
                })
            })
            .transpose()?;
        let rows = self
            .multi_criteria_rows("lchf_rules", name, category, tier.map(LchfLimitation::as_str))
            .await?;
        rows.iter().map(row_to_lchf_rule).collect()
    }

    /// Look up a single LCHF rule by id
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive id, or a database error
    /// if the query fails
    pub async fn lchf_by_id(&self, id: i64) -> AppResult<Option<LchfRule>> {
        let row = self.row_by_id("lchf_rules", id).await?;
        row.as_ref().map(row_to_lchf_rule).transpose()
    }

    /// Count LCHF rules in a category
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn lchf_count_by_category(&self, category: &str) -> AppResult<i64> {
        self.count_where("lchf_rules", "category", category).await
    }

    /// Count LCHF rules with a limitation tier
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown tier, or a database error
    /// if the query fails
    pub async fn lchf_count_by_limitation(&self, limitation: &str) -> AppResult<i64> {
        let tier = LchfLimitation::parse(limitation).ok_or_else(|| {
            AppError::invalid_input(format!("unknown LCHF limitation: {limitation}"))
        })?;
        self.count_where("lchf_rules", "limitation", tier.as_str())
            .await
    }

    // === LFV rules ===

    /// Search LFV rules by case-insensitive name fragment
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty search term, or a database
    /// error if the query fails
    pub async fn lfv_search_by_name(&self, search_term: &str) -> AppResult<Vec<LfvRule>> {
        let rows = self.search_rows("lfv_rules", search_term).await?;
        rows.iter().map(row_to_lfv_rule).collect()
    }

    /// List LFV rules in a category (exact, case-insensitive match)
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty category, or a database error
    /// if the query fails
    pub async fn lfv_by_category(&self, category: &str) -> AppResult<Vec<LfvRule>> {
        let rows = self.category_rows("lfv_rules", category).await?;
        rows.iter().map(row_to_lfv_rule).collect()
    }

    /// List LFV rules with the given limitation tier
    ///
    /// # Errors
    ///
    /// Returns a validation error when the tier is not in the LFV
    /// vocabulary, or a database error if the query fails
    pub async fn lfv_by_limitation(&self, limitation: &str) -> AppResult<Vec<LfvRule>> {
        let tier = LfvLimitation::parse(limitation).ok_or_else(|| {
            AppError::invalid_input(format!("unknown LFV limitation: {limitation}"))
        })?;
        let rows = self.tier_rows("lfv_rules", &[tier.as_str()]).await?;
        rows.iter().map(row_to_lfv_rule).collect()
    }

    /// LFV rules in the allowed tiers (OK and Moderation)
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn lfv_allowed(&self) -> AppResult<Vec<LfvRule>> {
        let tiers = [
            LfvLimitation::Ok.as_str(),
            LfvLimitation::Moderation.as_str(),
        ];
        let rows = self.tier_rows("lfv_rules", &tiers).await?;
        rows.iter().map(row_to_lfv_rule).collect()
    }

    /// LFV rules in the restrictive tiers (Restricted and Limited)
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn lfv_restricted(&self) -> AppResult<Vec<LfvRule>> {
        let tiers = [
            LfvLimitation::Restricted.as_str(),
            LfvLimitation::Limited.as_str(),
        ];
        let rows = self.tier_rows("lfv_rules", &tiers).await?;
        rows.iter().map(row_to_lfv_rule).collect()
    }

    /// Distinct LFV categories, alphabetically
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn lfv_categories(&self) -> AppResult<Vec<String>> {
        self.distinct_column("lfv_rules", "category").await
    }

    /// Distinct limitation strings present in the LFV table
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn lfv_limitations(&self) -> AppResult<Vec<String>> {
        self.distinct_column("lfv_rules", "limitation").await
    }

    /// Search LFV rules by any combination of name fragment, category,
    /// and limitation tier; absent criteria match everything
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown tier, or a database error
    /// if the query fails
    pub async fn lfv_search(
        &self,
        name: Option<&str>,
        category: Option<&str>,
        limitation: Option<&str>,
    ) -> AppResult<Vec<LfvRule>> {
        let tier = limitation
            .map(|l| {
                LfvLimitation::parse(l)
                    .ok_or_else(|| AppError::invalid_input(format!("unknown LFV limitation: {l}")))
            })
            .transpose()?;
        let rows = self
            .multi_criteria_rows("lfv_rules", name, category, tier.map(LfvLimitation::as_str))
            .await?;
        rows.iter().map(row_to_lfv_rule).collect()
    }

    /// Look up a single LFV rule by id
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive id, or a database error
    /// if the query fails
    pub async fn lfv_by_id(&self, id: i64) -> AppResult<Option<LfvRule>> {
        let row = self.row_by_id("lfv_rules", id).await?;
        row.as_ref().map(row_to_lfv_rule).transpose()
    }

    /// Count LFV rules in a category
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn lfv_count_by_category(&self, category: &str) -> AppResult<i64> {
        self.count_where("lfv_rules", "category", category).await
    }

    /// Count LFV rules with a limitation tier
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown tier, or a database error
    /// if the query fails
    pub async fn lfv_count_by_limitation(&self, limitation: &str) -> AppResult<i64> {
        let tier = LfvLimitation::parse(limitation).ok_or_else(|| {
            AppError::invalid_input(format!("unknown LFV limitation: {limitation}"))
        })?;
        self.count_where("lfv_rules", "limitation", tier.as_str())
            .await
    }

    // === Shared query plumbing ===
    //
    // Table names below are compile-time literals, never caller data.

    async fn search_rows(&self, table: &str, search_term: &str) -> AppResult<Vec<SqliteRow>> {
        let term = search_term.trim();
        if term.is_empty() {
            return Err(AppError::invalid_input("search term cannot be empty"));
        }

        let query = format!(
            r"
            SELECT {RULE_COLUMNS} FROM {table}
            WHERE LOWER(name) LIKE '%' || LOWER(?) || '%'
            ORDER BY name
            "
        );
        sqlx::query(&query)
            .bind(term)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to search {table}: {e}")))
    }

    async fn category_rows(&self, table: &str, category: &str) -> AppResult<Vec<SqliteRow>> {
        let category = category.trim();
        if category.is_empty() {
            return Err(AppError::invalid_input("category cannot be empty"));
        }

        let query = format!(
            r"
            SELECT {RULE_COLUMNS} FROM {table}
            WHERE LOWER(category) = LOWER(?)
            ORDER BY name
            "
        );
        sqlx::query(&query)
            .bind(category)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to fetch {table} by category: {e}")))
    }

    async fn tier_rows(&self, table: &str, tiers: &[&str]) -> AppResult<Vec<SqliteRow>> {
        // Stored tiers are not guaranteed canonical case, so the comparison
        // lowercases both sides
        let placeholders = vec!["?"; tiers.len()].join(", ");
        let query = format!(
            r"
            SELECT {RULE_COLUMNS} FROM {table}
            WHERE LOWER(limitation) IN ({placeholders})
            ORDER BY name
            "
        );
        let mut q = sqlx::query(&query);
        for tier in tiers {
            q = q.bind(tier.to_lowercase());
        }
        q.fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to fetch {table} by tier: {e}")))
    }

    async fn multi_criteria_rows(
        &self,
        table: &str,
        name: Option<&str>,
        category: Option<&str>,
        limitation: Option<&str>,
    ) -> AppResult<Vec<SqliteRow>> {
        let mut conditions = Vec::new();
        let mut bind_values = Vec::new();

        if let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) {
            conditions.push("LOWER(name) LIKE '%' || LOWER(?) || '%'");
            bind_values.push(name.to_owned());
        }
        if let Some(category) = category.map(str::trim).filter(|c| !c.is_empty()) {
            conditions.push("LOWER(category) = LOWER(?)");
            bind_values.push(category.to_owned());
        }
        if let Some(limitation) = limitation {
            conditions.push("LOWER(limitation) = LOWER(?)");
            bind_values.push(limitation.to_owned());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let query = format!("SELECT {RULE_COLUMNS} FROM {table} {where_clause} ORDER BY name");

        let mut q = sqlx::query(&query);
        for value in &bind_values {
            q = q.bind(value);
        }
        q.fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to search {table}: {e}")))
    }

    async fn row_by_id(&self, table: &str, id: i64) -> AppResult<Option<SqliteRow>> {
        if id <= 0 {
            return Err(AppError::invalid_input("id must be positive"));
        }

        let query = format!("SELECT {RULE_COLUMNS} FROM {table} WHERE id = ?");
        sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to fetch {table} rule {id}: {e}")))
    }

    async fn distinct_column(&self, table: &str, column: &str) -> AppResult<Vec<String>> {
        let query =
            format!("SELECT DISTINCT {column} FROM {table} ORDER BY {column}");
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::database(format!("Failed to fetch distinct {column} from {table}: {e}"))
            })?;

        rows.iter()
            .map(|row| {
                row.try_get(column)
                    .map_err(|e| AppError::database(format!("Failed to read {column}: {e}")))
            })
            .collect()
    }

    async fn count_where(&self, table: &str, column: &str, value: &str) -> AppResult<i64> {
        let query = format!(
            "SELECT COUNT(*) as count FROM {table} WHERE LOWER({column}) = LOWER(?)"
        );
        let row = sqlx::query(&query)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count {table}: {e}")))?;

        row.try_get("count")
            .map_err(|e| AppError::database(format!("Failed to read count: {e}")))
    }
}

fn row_to_lchf_rule(row: &SqliteRow) -> AppResult<LchfRule> {
    let limitation: String = row
        .try_get("limitation")
        .map_err(|e| AppError::database(format!("Failed to read limitation: {e}")))?;
    let limitation = LchfLimitation::parse(&limitation).ok_or_else(|| {
        AppError::database(format!("invalid LCHF limitation in database: {limitation}"))
    })?;

    Ok(LchfRule {
        id: row
            .try_get("id")
            .map_err(|e| AppError::database(format!("Failed to read id: {e}")))?,
        name: row
            .try_get("name")
            .map_err(|e| AppError::database(format!("Failed to read name: {e}")))?,
        category: row
            .try_get("category")
            .map_err(|e| AppError::database(format!("Failed to read category: {e}")))?,
        limitation,
        notes: row
            .try_get("notes")
            .map_err(|e| AppError::database(format!("Failed to read notes: {e}")))?,
    })
}

fn row_to_lfv_rule(row: &SqliteRow) -> AppResult<LfvRule> {
    let limitation: String = row
        .try_get("limitation")
        .map_err(|e| AppError::database(format!("Failed to read limitation: {e}")))?;
    let limitation = LfvLimitation::parse(&limitation).ok_or_else(|| {
        AppError::database(format!("invalid LFV limitation in database: {limitation}"))
    })?;

    Ok(LfvRule {
        id: row
            .try_get("id")
            .map_err(|e| AppError::database(format!("Failed to read id: {e}")))?,
        name: row
            .try_get("name")
            .map_err(|e| AppError::database(format!("Failed to read name: {e}")))?,
        category: row
            .try_get("category")
            .map_err(|e| AppError::database(format!("Failed to read category: {e}")))?,
        limitation,
        notes: row
            .try_get("notes")
            .map_err(|e| AppError::database(format!("Failed to read notes: {e}")))?,
    })
}
