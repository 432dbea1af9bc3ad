// ABOUTME: Recommendation route handlers running the greedy planner over the shared catalog
// ABOUTME: POST /api/recommend with a flat nutrient target, GET /api/targets/default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

//! Recommendation routes

use crate::server::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use nutri_core::errors::AppError;
use nutri_core::models::NutrientTarget;
use serde::Deserialize;
use std::sync::Arc;

/// Recommendation request body
///
/// The nutrient target is flat: nutrient keys and `period` sit next to the
/// optional `seed`, e.g. `{"calories": 2000, "protein": 60, "seed": 7}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    /// Target amounts and period
    #[serde(flatten)]
    pub target: NutrientTarget,
    /// Fixed seed for reproducible tie-breaking
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Recommendation routes
pub struct RecommendRoutes;

impl RecommendRoutes {
    /// Create all recommendation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recommend", post(Self::handle_recommend))
            .route("/api/targets/default", get(Self::handle_default_target))
            .with_state(resources)
    }

    async fn handle_recommend(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<RecommendRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) =
            body.map_err(|rejection| AppError::invalid_input(rejection.body_text()))?;

        let foods = resources.catalog.foods();
        let recommendation = match request.seed {
            Some(seed) => resources
                .planner
                .recommend_seeded(&request.target, foods, seed),
            None => resources.planner.recommend(&request.target, foods),
        };

        Ok(Json(recommendation).into_response())
    }

    async fn handle_default_target() -> Json<NutrientTarget> {
        Json(NutrientTarget::default())
    }
}
