// ABOUTME: Integration tests for catalog loading and catalog queries
// ABOUTME: Tolerant parsing of composition table exports, file loading errors, filters and startup validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, sample_catalog_json};
use nutri_core::errors::{AppError, ErrorCode};
use nutri_core::models::Nutrient;
use nutri_picker::catalog::{calorie_bounds, FoodCatalog};
use nutri_picker::config::{PlannerConfig, ServerConfig};
use nutri_picker::server::ServerResources;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_sample_catalog_parses() {
    let catalog = FoodCatalog::from_json_str(sample_catalog_json()).unwrap();

    assert_eq!(catalog.len(), 28);
    let rice = &catalog.foods()[0];
    assert_eq!(rice.food_id.as_deref(), Some("01088"));
    assert_eq!(rice.category, "穀類");
    assert!((rice.density(Nutrient::Calories) - 156.0).abs() < f64::EPSILON);
    // "Tr" parses to zero
    assert!(rice.density(Nutrient::VitaminE).abs() < f64::EPSILON);
}

#[test]
fn test_estimates_and_placeholders() {
    let catalog = FoodCatalog::from_json_str(sample_catalog_json()).unwrap();

    let oyster = catalog.search_by_name("かき 養殖").pop().unwrap();
    assert!((oyster.density(Nutrient::VitaminK) - 0.1).abs() < f64::EPSILON);
    assert!(oyster.density(Nutrient::Fiber).abs() < f64::EPSILON);

    let potato = catalog.search_by_name("じゃがいも").pop().unwrap();
    assert!(potato.density(Nutrient::VitaminK).abs() < f64::EPSILON);
}

#[test]
fn test_mixed_value_types_and_english_keys() {
    let json = r#"[
        {"name": "Egg", "category": "Eggs", "calories": 142, "protein": "12.2", "vitaminD": "(3.8)"},
        {"name": "Mystery", "calories": "Tr", "protein": -4, "fat": "-"},
        {"category": "orphan row without a name", "calories": 10}
    ]"#;

    let catalog = FoodCatalog::from_json_str(json).unwrap();

    assert_eq!(catalog.len(), 2);
    let egg = &catalog.foods()[0];
    assert!((egg.density(Nutrient::Protein) - 12.2).abs() < f64::EPSILON);
    assert!((egg.density(Nutrient::VitaminD) - 3.8).abs() < f64::EPSILON);
    assert!(catalog.foods()[1].nutrients.is_zero());
}

#[test]
fn test_invalid_documents() {
    let error = FoodCatalog::from_json_str("not json").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);

    let error = FoodCatalog::from_json_str(r#"{"食品名": "一件"}"#).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[tokio::test]
async fn test_load_from_file() {
    init_test_logging();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(sample_catalog_json().as_bytes()).unwrap();

    let catalog = FoodCatalog::load(file.path()).await.unwrap();
    assert_eq!(catalog.len(), 28);
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let error = FoodCatalog::load(dir.path().join("absent.json"))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_directory_is_a_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = FoodCatalog::load(dir.path()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}

#[tokio::test]
async fn test_server_resources_reject_out_of_range_planner_limits() {
    init_test_logging();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(sample_catalog_json().as_bytes()).unwrap();

    let config = ServerConfig {
        catalog_path: file.path().to_path_buf(),
        planner: PlannerConfig {
            max_picks_per_nutrient: 0,
            ..PlannerConfig::default()
        },
        ..ServerConfig::default()
    };

    let error = ServerResources::from_config(&config).await.unwrap_err();
    let app_error = error.downcast_ref::<AppError>().unwrap();
    assert_eq!(app_error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(app_error.http_status(), 400);
}

#[test]
fn test_queries_on_sample_catalog() {
    let catalog = FoodCatalog::from_json_str(sample_catalog_json()).unwrap();

    assert_eq!(catalog.filter_by_category("魚介類").len(), 4);
    assert!(catalog.filter_by_category("魚").is_empty());
    assert_eq!(catalog.search_by_name("豆腐").len(), 1);
    assert!(catalog.search_by_name("").is_empty());

    let (min, max) = calorie_bounds(Some("100"), Some("150"));
    let names: Vec<&str> = catalog
        .filter_by_calories(min, max)
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "かつお 春獲り 生",
            "しろさけ 生",
            "うし 肝臓 生",
            "にわとり 若どり むね 皮なし 生",
            "鶏卵 全卵 生"
        ]
    );

    let (min, max) = calorie_bounds(None, None);
    assert_eq!(catalog.filter_by_calories(min, max).len(), 28);
}
