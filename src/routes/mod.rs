// ABOUTME: HTTP route organization for the REST API
// ABOUTME: Assembles the axum router and defines the shared pagination envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # REST API Routes
//!
//! The REST surface mirrors the MCP tools under the `/api/v1/diet_plan`
//! prefix. All endpoints are read-only GETs; errors use the standard JSON
//! error envelope from [`crate::errors`].

/// Diet rule endpoints (LCHF, LFV, eligibility)
pub mod diet;

/// Food catalog endpoints
pub mod foods;

/// Health check endpoints
pub mod health;

/// Nutrient profile endpoints
pub mod nutrients;

use crate::constants::limits;
use crate::database::Database;
use axum::Router;
use serde::{Deserialize, Serialize};

/// REST API prefix
pub const API_PREFIX: &str = "/api/v1/diet_plan";

/// Query parameters for paginated list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct PageParams {
    /// Zero-based page index
    pub page: Option<u32>,
    /// Page size (clamped to the maximum)
    pub size: Option<u32>,
}

impl PageParams {
    /// Resolved zero-based page index
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(0)
    }

    /// Resolved page size, clamped to [1, `MAX_PAGE_SIZE`]
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
            .unwrap_or(limits::DEFAULT_PAGE_SIZE)
            .clamp(1, limits::MAX_PAGE_SIZE)
    }
}

/// Pagination envelope for list responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total: usize,
}

impl<T> Paginated<T> {
    /// Slice a full result set into one page
    #[must_use]
    pub fn from_full(items: Vec<T>, params: &PageParams) -> Self {
        let page = params.page();
        let size = params.size();
        let total = items.len();
        let start = (page as usize).saturating_mul(size as usize);
        let items = if start >= total {
            Vec::new()
        } else {
            items
                .into_iter()
                .skip(start)
                .take(size as usize)
                .collect()
        };
        Self {
            items,
            page,
            size,
            total,
        }
    }
}

/// Build the complete REST router over the shared database handle
#[must_use]
pub fn api_routes(database: Database) -> Router {
    let api = Router::new()
        .merge(health::HealthRoutes::routes())
        .merge(foods::FoodRoutes::routes(database.clone()))
        .merge(nutrients::NutrientRoutes::routes(database.clone()))
        .merge(diet::DietRoutes::routes(database));

    Router::new().nest(API_PREFIX, api)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_slices_and_clamps() {
        let items: Vec<u32> = (0..45).collect();
        let params = PageParams {
            page: Some(2),
            size: Some(20),
        };
        let page = Paginated::from_full(items, &params);
        assert_eq!(page.total, 45);
        assert_eq!(page.items, (40..45).collect::<Vec<_>>());

        let oversized = PageParams {
            page: None,
            size: Some(10_000),
        };
        assert_eq!(oversized.size(), limits::MAX_PAGE_SIZE);
    }

    #[test]
    fn test_pagination_past_the_end_is_empty() {
        let params = PageParams {
            page: Some(9),
            size: Some(10),
        };
        let page = Paginated::from_full(vec![1, 2, 3], &params);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
    }
}
