// ABOUTME: Integration tests for the nutrient manager
// ABOUTME: Covers threshold defaults, range queries, vitamin lookups, and balance
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(missing_docs, clippy::unwrap_used)]

use diet_plan_mcp_server::database::Database;
use diet_plan_mcp_server::errors::ErrorCode;
use diet_plan_mcp_server::models::VitaminMineral;
use sqlx::SqlitePool;

async fn create_test_db() -> Database {
    Database::new("sqlite::memory:").await.unwrap()
}

#[allow(clippy::too_many_arguments)]
async fn insert_profile(
    pool: &SqlitePool,
    fdc_id: i64,
    name: &str,
    energy: Option<f64>,
    protein: Option<f64>,
    fat: Option<f64>,
    carbs: Option<f64>,
    fiber: Option<f64>,
    sodium: Option<f64>,
) {
    sqlx::query(
        r"
        INSERT INTO nutrients
            (fdc_id, food_name, energy_kcal, protein_g, total_fat_g, carbohydrate_g, fiber_g, sodium_mg)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        ",
    )
    .bind(fdc_id)
    .bind(name)
    .bind(energy)
    .bind(protein)
    .bind(fat)
    .bind(carbs)
    .bind(fiber)
    .bind(sodium)
    .execute(pool)
    .await
    .unwrap();
}

async fn seed(db: &Database) {
    let pool = db.pool();
    insert_profile(pool, 1, "Chicken breast", Some(165.0), Some(31.0), Some(3.6), Some(0.0), Some(0.0), Some(74.0)).await;
    insert_profile(pool, 2, "Spinach", Some(23.0), Some(2.9), Some(0.4), Some(3.6), Some(2.2), Some(79.0)).await;
    insert_profile(pool, 3, "Almonds", Some(579.0), Some(21.2), Some(49.9), Some(21.6), Some(12.5), Some(1.0)).await;
    insert_profile(pool, 4, "Canned soup", Some(80.0), Some(3.0), Some(2.0), Some(12.0), Some(1.0), Some(650.0)).await;
    // Food with unknown protein and sodium
    insert_profile(pool, 5, "Mystery snack", Some(200.0), None, Some(10.0), Some(20.0), None, None).await;
}

#[tokio::test]
async fn test_threshold_defaults_match_explicit_values() {
    let db = create_test_db().await;
    seed(&db).await;
    let nutrients = db.nutrients();

    // No-argument calls behave exactly like the documented defaults
    let defaulted = nutrients.find_high_protein(None).await.unwrap();
    let explicit = nutrients.find_high_protein(Some(10.0)).await.unwrap();
    assert_eq!(
        defaulted.iter().map(|p| p.fdc_id).collect::<Vec<_>>(),
        explicit.iter().map(|p| p.fdc_id).collect::<Vec<_>>()
    );

    let defaulted = nutrients.find_low_sodium(None).await.unwrap();
    let explicit = nutrients.find_low_sodium(Some(140.0)).await.unwrap();
    assert_eq!(defaulted.len(), explicit.len());
}

#[tokio::test]
async fn test_missing_nutrients_never_match_thresholds() {
    let db = create_test_db().await;
    seed(&db).await;

    // Mystery snack has NULL protein and sodium; it must not appear
    let high_protein = db.nutrients().find_high_protein(Some(1.0)).await.unwrap();
    assert!(high_protein.iter().all(|p| p.fdc_id != 5));

    let low_sodium = db.nutrients().find_low_sodium(Some(10_000.0)).await.unwrap();
    assert!(low_sodium.iter().all(|p| p.fdc_id != 5));
}

#[tokio::test]
async fn test_high_protein_ordering_and_threshold() {
    let db = create_test_db().await;
    seed(&db).await;

    let results = db.nutrients().find_high_protein(None).await.unwrap();
    let ids: Vec<i64> = results.iter().map(|p| p.fdc_id).collect();
    // Chicken (31 g) then almonds (21.2 g); spinach and soup fall below 10 g
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_calorie_range_defaults_and_validation() {
    let db = create_test_db().await;
    seed(&db).await;
    let nutrients = db.nutrients();

    // Missing max defaults to min + 500; ordered by energy ascending
    let range = nutrients.find_in_calorie_range(100.0, None).await.unwrap();
    let ids: Vec<i64> = range.iter().map(|p| p.fdc_id).collect();
    assert_eq!(ids, vec![1, 5, 3]);

    let err = nutrients
        .find_in_calorie_range(200.0, Some(100.0))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = nutrients.find_in_calorie_range(-5.0, None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = nutrients.find_high_protein(Some(-1.0)).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_vitamin_rich_uses_type_specific_default() {
    let db = create_test_db().await;
    let pool = db.pool();
    sqlx::query(
        "INSERT INTO nutrients (fdc_id, food_name, iron_mg) VALUES (1, 'Lentils', 3.3), (2, 'Rice', 0.6)",
    )
    .execute(pool)
    .await
    .unwrap();

    // Iron default minimum is 2 mg
    let rich = db
        .nutrients()
        .find_vitamin_rich(VitaminMineral::Iron, None)
        .await
        .unwrap();
    assert_eq!(rich.len(), 1);
    assert_eq!(rich[0].food_name, "Lentils");

    let loose = db
        .nutrients()
        .find_vitamin_rich(VitaminMineral::Iron, Some(0.5))
        .await
        .unwrap();
    assert_eq!(loose.len(), 2);
}

#[tokio::test]
async fn test_dietary_restriction_flags_compose_with_and() {
    let db = create_test_db().await;
    seed(&db).await;
    let nutrients = db.nutrients();

    // All flags off returns the whole table
    let all = nutrients
        .find_for_dietary_restrictions(false, false, false, false)
        .await
        .unwrap();
    assert_eq!(all.len(), 5);

    // Low sodium (<140) and high fiber (>3) together
    let filtered = nutrients
        .find_for_dietary_restrictions(true, false, true, false)
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].food_name, "Almonds");
}

#[tokio::test]
async fn test_balanced_foods_meet_all_macro_ranges() {
    let db = create_test_db().await;
    let pool = db.pool();
    // 20% protein, 30% fat, 50% carbs of 200 kcal: balanced
    insert_profile(pool, 1, "Balanced bowl", Some(200.0), Some(10.0), Some(6.67), Some(25.0), None, None).await;
    // Fat share too high
    insert_profile(pool, 2, "Fatty dish", Some(200.0), Some(10.0), Some(15.0), Some(25.0), None, None).await;
    // Zero energy never qualifies
    insert_profile(pool, 3, "Water", Some(0.0), Some(0.0), Some(0.0), Some(0.0), None, None).await;

    let balanced = db.nutrients().find_balanced().await.unwrap();
    assert_eq!(balanced.len(), 1);
    assert_eq!(balanced[0].food_name, "Balanced bowl");
}

#[tokio::test]
async fn test_statistics_averages() {
    let db = create_test_db().await;
    let pool = db.pool();
    insert_profile(pool, 1, "A", Some(100.0), Some(10.0), Some(5.0), Some(20.0), None, None).await;
    insert_profile(pool, 2, "B", Some(300.0), Some(30.0), Some(15.0), Some(40.0), None, None).await;
    // Rows without energy data are excluded from every average, not just
    // the calorie column
    insert_profile(pool, 3, "C", None, Some(99.0), Some(99.0), Some(99.0), None, None).await;

    let stats = db.nutrients().statistics().await.unwrap();
    assert_eq!(stats.avg_calories, Some(200.0));
    assert_eq!(stats.avg_protein, Some(20.0));
    assert_eq!(stats.avg_fat, Some(10.0));
    assert_eq!(stats.avg_carbs, Some(30.0));
}

#[tokio::test]
async fn test_search_by_food_name() {
    let db = create_test_db().await;
    seed(&db).await;

    let hits = db.nutrients().search_by_food_name("SPIN").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].food_name, "Spinach");

    let err = db.nutrients().search_by_food_name("").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let profile = db.nutrients().get_by_fdc_id(2).await.unwrap().unwrap();
    assert_eq!(profile.energy_kcal, Some(23.0));
    assert!(db.nutrients().get_by_fdc_id(999).await.unwrap().is_none());

    let err = db.nutrients().get_by_fdc_id(0).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_search_matches_simplified_name_and_synonyms() {
    let db = create_test_db().await;
    let pool = db.pool();
    sqlx::query(
        r"
        INSERT INTO nutrients (fdc_id, food_name, simplified_name, synonyms, energy_kcal)
        VALUES (1, 'Chickpeas (garbanzo beans), cooked', 'chickpeas', 'garbanzo, ceci', 164.0)
        ",
    )
    .execute(pool)
    .await
    .unwrap();

    let by_synonym = db.nutrients().search_by_food_name("garbanzo").await.unwrap();
    assert_eq!(by_synonym.len(), 1);

    let by_simplified = db.nutrients().search_by_food_name("CHICKPEA").await.unwrap();
    assert_eq!(by_simplified.len(), 1);

    assert!(db.nutrients().search_by_food_name("lentil").await.unwrap().is_empty());
}
