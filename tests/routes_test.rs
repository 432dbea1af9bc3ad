// ABOUTME: Integration tests for the HTTP routes
// ABOUTME: Health, catalog queries, recommendation requests, CORS and error bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::{mixed_catalog, protein_and_energy_catalog, test_router};
use helpers::axum_test::AxumTestRequest;
use nutri_core::models::FoodRecord;
use nutri_picker::catalog::FoodCatalog;
use serde_json::{json, Value};

fn sample_router() -> axum::Router {
    let catalog = FoodCatalog::from_json_str(common::sample_catalog_json()).unwrap();
    test_router(catalog.foods().to_vec())
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health() {
    let body: Value = AxumTestRequest::get("/health")
        .send(test_router(Vec::new()))
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

// ============================================================================
// Catalog Queries
// ============================================================================

#[tokio::test]
async fn test_list_foods() {
    let foods: Vec<FoodRecord> = AxumTestRequest::get("/api/foods")
        .send(test_router(mixed_catalog()))
        .await
        .assert_status(StatusCode::OK)
        .json();

    let names: Vec<String> = foods.into_iter().map(|f| f.name).collect();
    let expected: Vec<String> = mixed_catalog().into_iter().map(|f| f.name).collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_search() {
    let foods: Vec<FoodRecord> = AxumTestRequest::get("/api/foods/search?q=sAlMoN")
        .send(test_router(mixed_catalog()))
        .await
        .json();
    assert_eq!(foods.len(), 1);
    assert_eq!(foods[0].name, "Salmon");

    let missing: Vec<Value> = AxumTestRequest::get("/api/foods/search")
        .send(test_router(mixed_catalog()))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert!(missing.is_empty());

    let empty: Vec<Value> = AxumTestRequest::get("/api/foods/search?q=")
        .send(test_router(mixed_catalog()))
        .await
        .json();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_category_with_encoded_label() {
    // 魚介類
    let foods: Vec<FoodRecord> =
        AxumTestRequest::get("/api/foods/category/%E9%AD%9A%E4%BB%8B%E9%A1%9E")
            .send(sample_router())
            .await
            .assert_status(StatusCode::OK)
            .json();

    assert_eq!(foods.len(), 4);
    assert!(foods.iter().all(|f| f.category == "魚介類"));
}

#[tokio::test]
async fn test_calorie_range() {
    let foods: Vec<FoodRecord> = AxumTestRequest::get("/api/foods/calories?min=100&max=160")
        .send(test_router(mixed_catalog()))
        .await
        .json();
    let names: Vec<&str> = foods.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Chicken Breast", "Salmon", "Cooked Rice"]);

    // unparseable bounds fall back to 0..=1000
    let foods: Vec<FoodRecord> = AxumTestRequest::get("/api/foods/calories?min=abc&max=")
        .send(test_router(mixed_catalog()))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(foods.len(), 6);
}

#[tokio::test]
async fn test_categories() {
    let categories: Vec<String> = AxumTestRequest::get("/api/categories")
        .send(test_router(mixed_catalog()))
        .await
        .json();
    assert_eq!(
        categories,
        vec!["Meat", "Fish", "Grains", "Vegetables", "Beans", "Fats"]
    );
}

// ============================================================================
// Recommendations
// ============================================================================

#[tokio::test]
async fn test_recommend_scenario() {
    let body: Value = AxumTestRequest::post("/api/recommend")
        .json(&json!({"calories": 2000, "protein": 60, "period": "daily", "seed": 1}))
        .send(test_router(protein_and_energy_catalog()))
        .await
        .assert_status(StatusCode::OK)
        .json();

    let foods = body["foods"].as_array().unwrap();
    assert_eq!(foods.len(), 2);
    assert_eq!(foods[0]["name"], "A");
    assert_eq!(foods[0]["quantity"], 500.0);
    assert_eq!(foods[0]["selections"], 5);
    assert_eq!(foods[1]["name"], "B");
    assert_eq!(foods[1]["quantity"], 200.0);
    assert_eq!(body["totalNutrition"]["calories"], 2000.0);
    assert_eq!(body["totalNutrition"]["protein"], 100.0);
    assert_eq!(body["adjustedTarget"]["calories"], 2000.0);
    assert_eq!(body["period"], "daily");
}

#[tokio::test]
async fn test_recommend_weekly_scales_target() {
    let body: Value = AxumTestRequest::post("/api/recommend")
        .json(&json!({"protein": 60, "period": "weekly"}))
        .send(test_router(mixed_catalog()))
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["adjustedTarget"]["protein"], 420.0);
    assert_eq!(body["period"], "weekly");
}

#[tokio::test]
async fn test_recommend_with_seed_is_reproducible() {
    let request = json!({"vitaminC": 90, "iron": 18, "calories": 1800, "seed": 99});

    let first: Value = AxumTestRequest::post("/api/recommend")
        .json(&request)
        .send(sample_router())
        .await
        .json();
    let second: Value = AxumTestRequest::post("/api/recommend")
        .json(&request)
        .send(sample_router())
        .await
        .json();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_recommend_on_empty_catalog() {
    let body: Value = AxumTestRequest::post("/api/recommend")
        .json(&json!({"calories": 2000}))
        .send(test_router(Vec::new()))
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert!(body["foods"].as_array().unwrap().is_empty());
    assert_eq!(body["totalNutrition"]["calories"], 0.0);
}

#[tokio::test]
async fn test_recommend_rejects_malformed_body() {
    let body: Value = AxumTestRequest::post("/api/recommend")
        .raw_json("{\"protein\": ")
        .send(test_router(mixed_catalog()))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");

    let body: Value = AxumTestRequest::post("/api/recommend")
        .json(&json!({"protein": "lots"}))
        .send(test_router(mixed_catalog()))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn test_recommend_rejects_unknown_nutrient() {
    let body: Value = AxumTestRequest::post("/api/recommend")
        .json(&json!({"caffeine": 1, "protein": 10}))
        .send(test_router(mixed_catalog()))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();

    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("caffeine"));
}

#[tokio::test]
async fn test_recommend_unknown_period_falls_back_to_daily() {
    let body: Value = AxumTestRequest::post("/api/recommend")
        .json(&json!({"period": "yearly", "seed": 3}))
        .send(test_router(mixed_catalog()))
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["period"], "daily");
    assert_eq!(body["pickCount"], 0);
    assert!(body["foods"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_default_target() {
    let body: Value = AxumTestRequest::get("/api/targets/default")
        .send(test_router(Vec::new()))
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["calories"], 2000.0);
    assert_eq!(body["vitaminB12"], 2.4);
    assert_eq!(body["period"], "daily");
}

// ============================================================================
// Middleware
// ============================================================================

#[tokio::test]
async fn test_cors_is_permissive() {
    let response = AxumTestRequest::get("/api/foods")
        .header("origin", "http://localhost:3000")
        .send(test_router(mixed_catalog()))
        .await;

    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = AxumTestRequest::get("/api/unknown")
        .send(test_router(Vec::new()))
        .await;
    assert_eq!(response.status(), 404);
}
