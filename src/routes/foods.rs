// ABOUTME: Food catalog route handlers for listing, searching and filtering foods
// ABOUTME: Thin axum handlers delegating to the shared FoodCatalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

//! Food catalog routes
//!
//! | Path | Behaviour |
//! |---|---|
//! | `GET /api/foods` | every record |
//! | `GET /api/foods/search?q=` | case-insensitive name search, empty query gives `[]` |
//! | `GET /api/foods/category/:category` | exact category label match |
//! | `GET /api/foods/calories?min=&max=` | inclusive whole-number calorie range |
//! | `GET /api/categories` | distinct category labels |

use crate::catalog::calorie_bounds;
use crate::server::ServerResources;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Query parameters for name search
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Substring to look for in food names
    pub q: Option<String>,
}

/// Query parameters for the calorie range filter
///
/// Bounds stay strings so that unparseable values fall back to the defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct CalorieQuery {
    /// Lower bound in kcal per 100 g
    pub min: Option<String>,
    /// Upper bound in kcal per 100 g
    pub max: Option<String>,
}

/// Food catalog routes
pub struct FoodRoutes;

impl FoodRoutes {
    /// Create all food catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/foods", get(Self::handle_list))
            .route("/api/foods/search", get(Self::handle_search))
            .route("/api/foods/category/:category", get(Self::handle_category))
            .route("/api/foods/calories", get(Self::handle_calories))
            .route("/api/categories", get(Self::handle_categories))
            .with_state(resources)
    }

    async fn handle_list(State(resources): State<Arc<ServerResources>>) -> Response {
        Json(resources.catalog.foods()).into_response()
    }

    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<SearchQuery>,
    ) -> Response {
        let needle = query.q.unwrap_or_default();
        let results = resources.catalog.search_by_name(&needle);
        debug!(query = %needle, matches = results.len(), "Food search");
        Json(results).into_response()
    }

    async fn handle_category(
        State(resources): State<Arc<ServerResources>>,
        Path(category): Path<String>,
    ) -> Response {
        Json(resources.catalog.filter_by_category(&category)).into_response()
    }

    async fn handle_calories(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<CalorieQuery>,
    ) -> Response {
        let (min, max) = calorie_bounds(query.min.as_deref(), query.max.as_deref());
        let results = resources.catalog.filter_by_calories(min, max);
        debug!(min, max, matches = results.len(), "Calorie range filter");
        Json(results).into_response()
    }

    async fn handle_categories(State(resources): State<Arc<ServerResources>>) -> Response {
        Json(resources.catalog.categories()).into_response()
    }
}
