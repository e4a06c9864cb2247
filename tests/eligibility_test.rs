// ABOUTME: Integration tests for the eligibility join
// ABOUTME: Covers tier filtering, allergen exclusion, name dedup, and the prompt cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(missing_docs, clippy::unwrap_used)]

use diet_plan_mcp_server::database::Database;
use diet_plan_mcp_server::models::DietType;
use sqlx::SqlitePool;

async fn create_test_db() -> Database {
    Database::new("sqlite::memory:").await.unwrap()
}

async fn insert_food(pool: &SqlitePool, fdc_id: i64, name: &str, allergen_flags: &str) {
    sqlx::query(
        r"
        INSERT INTO foods (fdc_id, food_name, data_type, food_category, publication_date, allergen_flags)
        VALUES (?, ?, 'SR Legacy', 'Test', '2019-04-01', ?)
        ",
    )
    .bind(fdc_id)
    .bind(name)
    .bind(allergen_flags)
    .execute(pool)
    .await
    .unwrap();
}

async fn insert_nutrients(pool: &SqlitePool, fdc_id: i64, name: &str, energy: f64, protein: f64) {
    sqlx::query(
        r"
        INSERT INTO nutrients (fdc_id, food_name, energy_kcal, protein_g)
        VALUES (?, ?, ?, ?)
        ",
    )
    .bind(fdc_id)
    .bind(name)
    .bind(energy)
    .bind(protein)
    .execute(pool)
    .await
    .unwrap();
}

async fn insert_lchf_rule(pool: &SqlitePool, name: &str, limitation: &str) {
    sqlx::query("INSERT INTO lchf_rules (name, category, limitation) VALUES (?, 'Test', ?)")
        .bind(name)
        .bind(limitation)
        .execute(pool)
        .await
        .unwrap();
}

async fn insert_lfv_rule(pool: &SqlitePool, name: &str, limitation: &str) {
    sqlx::query("INSERT INTO lfv_rules (name, category, limitation) VALUES (?, 'Test', ?)")
        .bind(name)
        .bind(limitation)
        .execute(pool)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_only_permissive_tiers_are_eligible() {
    let db = create_test_db().await;
    let pool = db.pool();

    insert_food(pool, 1, "Chicken breast", "NaN").await;
    insert_food(pool, 2, "White bread", "Contains wheat").await;
    insert_food(pool, 3, "Whole milk", "Contains milk").await;
    insert_lchf_rule(pool, "chicken", "OK").await;
    insert_lchf_rule(pool, "bread", "Avoid").await;
    insert_lchf_rule(pool, "milk", "Limited").await;

    let eligible = db
        .eligibility()
        .find_eligible_foods(DietType::Lchf, None)
        .await
        .unwrap();

    let names: Vec<&str> = eligible.iter().map(|f| f.food_name.as_str()).collect();
    assert!(names.contains(&"Chicken breast"));
    assert!(names.contains(&"Whole milk"));
    assert!(!names.contains(&"White bread"), "Avoid tier must be excluded");
}

#[tokio::test]
async fn test_fuzzy_name_join_is_case_insensitive_containment() {
    let db = create_test_db().await;
    let pool = db.pool();

    insert_food(pool, 1, "Strawberries, raw", "NaN").await;
    insert_food(pool, 2, "Plums, raw", "NaN").await;
    // Rule fragment matches both "strawberry" and "strawberries"
    insert_lfv_rule(pool, "STRAWBERR", "OK").await;

    let eligible = db
        .eligibility()
        .find_eligible_foods(DietType::Lfv, None)
        .await
        .unwrap();

    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].food_name, "Strawberries, raw");
}

#[tokio::test]
async fn test_tier_filter_matches_rows_stored_in_any_case() {
    let db = create_test_db().await;
    let pool = db.pool();

    insert_food(pool, 1, "Chicken breast", "NaN").await;
    insert_food(pool, 2, "White bread", "Contains wheat").await;
    // Imported rule data does not guarantee canonical tier case
    insert_lchf_rule(pool, "chicken", "ok").await;
    insert_lchf_rule(pool, "bread", "avoid").await;

    let eligible = db
        .eligibility()
        .find_eligible_foods(DietType::Lchf, None)
        .await
        .unwrap();

    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].food_name, "Chicken breast");
}

#[tokio::test]
async fn test_allergen_exclusion_and_nan_sentinel() {
    let db = create_test_db().await;
    let pool = db.pool();

    insert_food(pool, 1, "Cheddar cheese", "Contains milk").await;
    insert_food(pool, 2, "Cheese substitute, soy", "Contains soy").await;
    insert_food(pool, 3, "Cheese-flavored crackers", "NaN").await;
    insert_lchf_rule(pool, "cheese", "OK").await;

    let eligible = db
        .eligibility()
        .find_eligible_foods(DietType::Lchf, Some("Milk"))
        .await
        .unwrap();

    let names: Vec<&str> = eligible.iter().map(|f| f.food_name.as_str()).collect();
    assert!(!names.contains(&"Cheddar cheese"));
    assert!(names.contains(&"Cheese substitute, soy"));
    // 'NaN' means no allergen data and never excludes
    assert!(names.contains(&"Cheese-flavored crackers"));
}

#[tokio::test]
async fn test_results_are_deduplicated_by_name() {
    let db = create_test_db().await;
    let pool = db.pool();

    // Same name under two FDC ids, and two rules matching it
    insert_food(pool, 1, "Salmon, Atlantic", "Contains fish").await;
    insert_food(pool, 2, "Salmon, Atlantic", "Contains fish").await;
    insert_lchf_rule(pool, "salmon", "OK").await;
    insert_lchf_rule(pool, "atlantic", "Limited").await;

    let eligible = db
        .eligibility()
        .find_eligible_foods(DietType::Lchf, None)
        .await
        .unwrap();

    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].fdc_id, 1, "first occurrence in name order wins");
}

#[tokio::test]
async fn test_nutrients_attach_via_left_join() {
    let db = create_test_db().await;
    let pool = db.pool();

    insert_food(pool, 1, "Egg, hard-boiled", "Contains egg").await;
    insert_food(pool, 2, "Egg substitute", "NaN").await;
    insert_nutrients(pool, 1, "Egg, hard-boiled", 155.0, 12.6).await;
    insert_lchf_rule(pool, "egg", "OK").await;

    let eligible = db
        .eligibility()
        .find_eligible_foods(DietType::Lchf, None)
        .await
        .unwrap();

    let with_profile = eligible.iter().find(|f| f.fdc_id == 1).unwrap();
    assert_eq!(with_profile.energy_kcal, Some(155.0));
    assert_eq!(with_profile.protein_g, Some(12.6));

    // No nutrient row: still eligible, all fields absent
    let without_profile = eligible.iter().find(|f| f.fdc_id == 2).unwrap();
    assert_eq!(without_profile.energy_kcal, None);
}

#[tokio::test]
async fn test_prompt_variant_caps_at_thirty() {
    let db = create_test_db().await;
    let pool = db.pool();

    for i in 0..40 {
        insert_food(pool, i, &format!("Bean variety {i:02}"), "NaN").await;
    }
    insert_lfv_rule(pool, "bean", "OK").await;

    let full = db
        .eligibility()
        .find_eligible_foods(DietType::Lfv, None)
        .await
        .unwrap();
    assert_eq!(full.len(), 40);

    let capped = db
        .eligibility()
        .find_eligible_foods_for_prompt(DietType::Lfv, None)
        .await
        .unwrap();
    assert_eq!(capped.len(), 30);
    // The cap is a prefix of the full result, not a re-ranking
    assert_eq!(capped[0].food_name, full[0].food_name);
    assert_eq!(capped[29].food_name, full[29].food_name);

    // The count reflects the uncapped result
    let count = db
        .eligibility()
        .count_eligible_foods(DietType::Lfv, None)
        .await
        .unwrap();
    assert_eq!(count, 40);
}

#[tokio::test]
async fn test_diet_tables_are_independent() {
    let db = create_test_db().await;
    let pool = db.pool();

    insert_food(pool, 1, "Chicken breast", "NaN").await;
    insert_food(pool, 2, "Lentil soup", "NaN").await;
    insert_lchf_rule(pool, "chicken", "OK").await;
    insert_lfv_rule(pool, "lentil", "OK").await;

    let lchf = db
        .eligibility()
        .find_eligible_foods(DietType::Lchf, None)
        .await
        .unwrap();
    let lfv = db
        .eligibility()
        .find_eligible_foods(DietType::Lfv, None)
        .await
        .unwrap();

    assert_eq!(lchf.len(), 1);
    assert_eq!(lchf[0].food_name, "Chicken breast");
    assert_eq!(lfv.len(), 1);
    assert_eq!(lfv[0].food_name, "Lentil soup");
}
