// ABOUTME: Food catalog REST endpoints for search, lookup, and allergen queries
// ABOUTME: Thin axum handlers over the FoodManager
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Food catalog routes

use super::{PageParams, Paginated};
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::FoodItem;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

// Flattening PageParams here would break number parsing in serde_urlencoded,
// so the page fields are repeated inline.
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
struct AllergenParams {
    allergens: Option<String>,
}

/// Food routes implementation
pub struct FoodRoutes;

impl FoodRoutes {
    /// Create the food catalog routes
    #[must_use]
    pub fn routes(database: Database) -> Router {
        Router::new()
            .route("/foods/search", get(Self::handle_search))
            .route("/foods/categories", get(Self::handle_categories))
            .route(
                "/foods/categories/:category",
                get(Self::handle_by_category),
            )
            .route("/foods/allergen-free", get(Self::handle_allergen_free))
            .route("/foods/with-allergens", get(Self::handle_with_allergens))
            .route("/foods/:fdc_id", get(Self::handle_get))
            .with_state(database)
    }

    async fn handle_search(
        State(database): State<Database>,
        Query(params): Query<SearchParams>,
    ) -> AppResult<Json<Paginated<FoodItem>>> {
        let foods = database.foods().search_by_name(&params.q).await?;
        Ok(Json(Paginated::from_full(foods, &params.page_params())))
    }

    async fn handle_get(
        State(database): State<Database>,
        Path(fdc_id): Path<i64>,
    ) -> AppResult<Json<FoodItem>> {
        let food = database
            .foods()
            .get_by_fdc_id(fdc_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Food {fdc_id}")))?;
        Ok(Json(food))
    }

    async fn handle_categories(
        State(database): State<Database>,
    ) -> AppResult<Json<Vec<String>>> {
        Ok(Json(database.foods().get_categories().await?))
    }

    async fn handle_by_category(
        State(database): State<Database>,
        Path(category): Path<String>,
    ) -> AppResult<Json<Vec<FoodItem>>> {
        Ok(Json(database.foods().get_by_category(&category).await?))
    }

    async fn handle_allergen_free(
        State(database): State<Database>,
        Query(params): Query<AllergenParams>,
    ) -> AppResult<Json<Vec<FoodItem>>> {
        let foods = database
            .foods()
            .find_without_allergens(params.allergens.as_deref())
            .await?;
        Ok(Json(foods))
    }

    async fn handle_with_allergens(
        State(database): State<Database>,
        Query(params): Query<AllergenParams>,
    ) -> AppResult<Json<Vec<FoodItem>>> {
        let allergen = params
            .allergens
            .as_deref()
            .ok_or_else(|| AppError::invalid_input("allergens query parameter is required"))?;
        Ok(Json(database.foods().find_with_allergen(allergen).await?))
    }
}
