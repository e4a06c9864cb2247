// ABOUTME: Nutrient profile REST endpoints for threshold and composition queries
// ABOUTME: Thin axum handlers over the NutrientManager
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nutrient profile routes

use super::{PageParams, Paginated};
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{NutrientProfile, NutritionalStatistics, VitaminMineral};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

// Page fields repeated inline; flattening PageParams breaks number parsing
// in serde_urlencoded.
#[derive(Debug, Deserialize)]
struct SearchParams {
    q: String,
    page: Option<u32>,
    size: Option<u32>,
}

impl SearchParams {
    fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            size: self.size,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MinParams {
    min: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct MaxParams {
    max: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RangeParams {
    min: f64,
    max: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
struct DietaryParams {
    low_sodium: Option<bool>,
    low_fat: Option<bool>,
    high_fiber: Option<bool>,
    low_sugar: Option<bool>,
}

/// Nutrient routes implementation
pub struct NutrientRoutes;

impl NutrientRoutes {
    /// Create the nutrient routes
    #[must_use]
    pub fn routes(database: Database) -> Router {
        Router::new()
            .route("/nutrients/search", get(Self::handle_search))
            .route("/nutrients/high-protein", get(Self::handle_high_protein))
            .route("/nutrients/low-calorie", get(Self::handle_low_calorie))
            .route("/nutrients/calorie-range", get(Self::handle_calorie_range))
            .route("/nutrients/high-fiber", get(Self::handle_high_fiber))
            .route("/nutrients/low-sodium", get(Self::handle_low_sodium))
            .route(
                "/nutrients/rich-in/:vitamin",
                get(Self::handle_vitamin_rich),
            )
            .route("/nutrients/dietary", get(Self::handle_dietary))
            .route("/nutrients/balanced", get(Self::handle_balanced))
            .route("/nutrients/statistics", get(Self::handle_statistics))
            .route("/nutrients/:fdc_id", get(Self::handle_get))
            .with_state(database)
    }

    async fn handle_search(
        State(database): State<Database>,
        Query(params): Query<SearchParams>,
    ) -> AppResult<Json<Paginated<NutrientProfile>>> {
        let profiles = database.nutrients().search_by_food_name(&params.q).await?;
        Ok(Json(Paginated::from_full(profiles, &params.page_params())))
    }

    async fn handle_get(
        State(database): State<Database>,
        Path(fdc_id): Path<i64>,
    ) -> AppResult<Json<NutrientProfile>> {
        let profile = database
            .nutrients()
            .get_by_fdc_id(fdc_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Nutrients for food {fdc_id}")))?;
        Ok(Json(profile))
    }

    async fn handle_high_protein(
        State(database): State<Database>,
        Query(params): Query<MinParams>,
    ) -> AppResult<Json<Vec<NutrientProfile>>> {
        Ok(Json(database.nutrients().find_high_protein(params.min).await?))
    }

    async fn handle_low_calorie(
        State(database): State<Database>,
        Query(params): Query<MaxParams>,
    ) -> AppResult<Json<Vec<NutrientProfile>>> {
        Ok(Json(database.nutrients().find_low_calorie(params.max).await?))
    }

    async fn handle_calorie_range(
        State(database): State<Database>,
        Query(params): Query<RangeParams>,
    ) -> AppResult<Json<Vec<NutrientProfile>>> {
        let profiles = database
            .nutrients()
            .find_in_calorie_range(params.min, params.max)
            .await?;
        Ok(Json(profiles))
    }

    async fn handle_high_fiber(
        State(database): State<Database>,
        Query(params): Query<MinParams>,
    ) -> AppResult<Json<Vec<NutrientProfile>>> {
        Ok(Json(database.nutrients().find_high_fiber(params.min).await?))
    }

    async fn handle_low_sodium(
        State(database): State<Database>,
        Query(params): Query<MaxParams>,
    ) -> AppResult<Json<Vec<NutrientProfile>>> {
        Ok(Json(database.nutrients().find_low_sodium(params.max).await?))
    }

    async fn handle_vitamin_rich(
        State(database): State<Database>,
        Path(vitamin): Path<String>,
        Query(params): Query<MinParams>,
    ) -> AppResult<Json<Vec<NutrientProfile>>> {
        let vitamin = VitaminMineral::parse(&vitamin)
            .ok_or_else(|| AppError::invalid_input(format!("unknown vitamin type: {vitamin}")))?;
        let profiles = database
            .nutrients()
            .find_vitamin_rich(vitamin, params.min)
            .await?;
        Ok(Json(profiles))
    }

    async fn handle_dietary(
        State(database): State<Database>,
        Query(params): Query<DietaryParams>,
    ) -> AppResult<Json<Vec<NutrientProfile>>> {
        let profiles = database
            .nutrients()
            .find_for_dietary_restrictions(
                params.low_sodium.unwrap_or(false),
                params.low_fat.unwrap_or(false),
                params.high_fiber.unwrap_or(false),
                params.low_sugar.unwrap_or(false),
            )
            .await?;
        Ok(Json(profiles))
    }

    async fn handle_balanced(
        State(database): State<Database>,
    ) -> AppResult<Json<Vec<NutrientProfile>>> {
        Ok(Json(database.nutrients().find_balanced().await?))
    }

    async fn handle_statistics(
        State(database): State<Database>,
    ) -> AppResult<Json<NutritionalStatistics>> {
        Ok(Json(database.nutrients().statistics().await?))
    }
}
