// ABOUTME: Diet rule and eligibility REST endpoints for LCHF and LFV
// ABOUTME: Thin axum handlers over the DietRuleManager and EligibilityManager
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diet rule routes
//!
//! LCHF and LFV get parallel endpoint sets; the vocabulary-specific
//! accessors (`/lchf/recommended`, `/lchf/avoid`) exist only where the
//! tier does. `/{diet}/eligible` is the REST face of the eligibility join
//! and returns the uncapped result set.

use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{DietType, EligibleFood, LchfRule, LfvRule};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: String,
}

#[derive(Debug, Deserialize)]
struct EligibleParams {
    allergens: Option<String>,
}

/// Diet rule routes implementation
pub struct DietRoutes;

impl DietRoutes {
    /// Create the diet rule and eligibility routes
    #[must_use]
    pub fn routes(database: Database) -> Router {
        Router::new()
            // LCHF
            .route("/lchf/search", get(Self::lchf_search))
            .route("/lchf/categories", get(Self::lchf_categories))
            .route("/lchf/categories/:category", get(Self::lchf_by_category))
            .route("/lchf/limitations", get(Self::lchf_limitations))
            .route("/lchf/limitations/:tier", get(Self::lchf_by_limitation))
            .route("/lchf/allowed", get(Self::lchf_allowed))
            .route("/lchf/recommended", get(Self::lchf_recommended))
            .route("/lchf/restricted", get(Self::lchf_restricted))
            .route("/lchf/avoid", get(Self::lchf_avoid))
            .route("/lchf/eligible", get(Self::lchf_eligible))
            .route("/lchf/:id", get(Self::lchf_get))
            // LFV
            .route("/lfv/search", get(Self::lfv_search))
            .route("/lfv/categories", get(Self::lfv_categories))
            .route("/lfv/categories/:category", get(Self::lfv_by_category))
            .route("/lfv/limitations", get(Self::lfv_limitations))
            .route("/lfv/limitations/:tier", get(Self::lfv_by_limitation))
            .route("/lfv/allowed", get(Self::lfv_allowed))
            .route("/lfv/restricted", get(Self::lfv_restricted))
            .route("/lfv/eligible", get(Self::lfv_eligible))
            .route("/lfv/:id", get(Self::lfv_get))
            .with_state(database)
    }

    // === LCHF handlers ===

    async fn lchf_search(
        State(database): State<Database>,
        Query(params): Query<SearchParams>,
    ) -> AppResult<Json<Vec<LchfRule>>> {
        Ok(Json(
            database.diet_rules().lchf_search_by_name(&params.q).await?,
        ))
    }

    async fn lchf_categories(
        State(database): State<Database>,
    ) -> AppResult<Json<Vec<String>>> {
        Ok(Json(database.diet_rules().lchf_categories().await?))
    }

    async fn lchf_by_category(
        State(database): State<Database>,
        Path(category): Path<String>,
    ) -> AppResult<Json<Vec<LchfRule>>> {
        Ok(Json(database.diet_rules().lchf_by_category(&category).await?))
    }

    async fn lchf_limitations(
        State(database): State<Database>,
    ) -> AppResult<Json<Vec<String>>> {
        Ok(Json(database.diet_rules().lchf_limitations().await?))
    }

    async fn lchf_by_limitation(
        State(database): State<Database>,
        Path(tier): Path<String>,
    ) -> AppResult<Json<Vec<LchfRule>>> {
        Ok(Json(database.diet_rules().lchf_by_limitation(&tier).await?))
    }

    async fn lchf_allowed(
        State(database): State<Database>,
    ) -> AppResult<Json<Vec<LchfRule>>> {
        Ok(Json(database.diet_rules().lchf_allowed().await?))
    }

    async fn lchf_recommended(
        State(database): State<Database>,
    ) -> AppResult<Json<Vec<LchfRule>>> {
        Ok(Json(database.diet_rules().lchf_recommended().await?))
    }

    async fn lchf_restricted(
        State(database): State<Database>,
    ) -> AppResult<Json<Vec<LchfRule>>> {
        Ok(Json(database.diet_rules().lchf_restricted().await?))
    }

    async fn lchf_avoid(State(database): State<Database>) -> AppResult<Json<Vec<LchfRule>>> {
        Ok(Json(database.diet_rules().lchf_to_avoid().await?))
    }

    async fn lchf_eligible(
        State(database): State<Database>,
        Query(params): Query<EligibleParams>,
    ) -> AppResult<Json<Vec<EligibleFood>>> {
        let foods = database
            .eligibility()
            .find_eligible_foods(DietType::Lchf, params.allergens.as_deref())
            .await?;
        Ok(Json(foods))
    }

    async fn lchf_get(
        State(database): State<Database>,
        Path(id): Path<i64>,
    ) -> AppResult<Json<LchfRule>> {
        let rule = database
            .diet_rules()
            .lchf_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("LCHF rule {id}")))?;
        Ok(Json(rule))
    }

    // === LFV handlers ===

    async fn lfv_search(
        State(database): State<Database>,
        Query(params): Query<SearchParams>,
    ) -> AppResult<Json<Vec<LfvRule>>> {
        Ok(Json(
            database.diet_rules().lfv_search_by_name(&params.q).await?,
        ))
    }

    async fn lfv_categories(State(database): State<Database>) -> AppResult<Json<Vec<String>>> {
        Ok(Json(database.diet_rules().lfv_categories().await?))
    }

    async fn lfv_by_category(
        State(database): State<Database>,
        Path(category): Path<String>,
    ) -> AppResult<Json<Vec<LfvRule>>> {
        Ok(Json(database.diet_rules().lfv_by_category(&category).await?))
    }

    async fn lfv_limitations(State(database): State<Database>) -> AppResult<Json<Vec<String>>> {
        Ok(Json(database.diet_rules().lfv_limitations().await?))
    }

    async fn lfv_by_limitation(
        State(database): State<Database>,
        Path(tier): Path<String>,
    ) -> AppResult<Json<Vec<LfvRule>>> {
        Ok(Json(database.diet_rules().lfv_by_limitation(&tier).await?))
    }

    async fn lfv_allowed(State(database): State<Database>) -> AppResult<Json<Vec<LfvRule>>> {
        Ok(Json(database.diet_rules().lfv_allowed().await?))
    }

    async fn lfv_restricted(State(database): State<Database>) -> AppResult<Json<Vec<LfvRule>>> {
        Ok(Json(database.diet_rules().lfv_restricted().await?))
    }

    async fn lfv_eligible(
        State(database): State<Database>,
        Query(params): Query<EligibleParams>,
    ) -> AppResult<Json<Vec<EligibleFood>>> {
        let foods = database
            .eligibility()
            .find_eligible_foods(DietType::Lfv, params.allergens.as_deref())
            .await?;
        Ok(Json(foods))
    }

    async fn lfv_get(
        State(database): State<Database>,
        Path(id): Path<i64>,
    ) -> AppResult<Json<LfvRule>> {
        let rule = database
            .diet_rules()
            .lfv_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("LFV rule {id}")))?;
        Ok(Json(rule))
    }
}
