// ABOUTME: Integration tests for the diet rule managers
// ABOUTME: Covers strict tier validation, tier groupings, search, and counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(missing_docs, clippy::unwrap_used)]

use diet_plan_mcp_server::database::Database;
use diet_plan_mcp_server::errors::ErrorCode;
use diet_plan_mcp_server::models::{LchfLimitation, LfvLimitation};
use sqlx::SqlitePool;

async fn create_test_db() -> Database {
    Database::new("sqlite::memory:").await.unwrap()
}

async fn insert_lchf(pool: &SqlitePool, name: &str, category: &str, limitation: &str) {
    sqlx::query("INSERT INTO lchf_rules (name, category, limitation) VALUES (?, ?, ?)")
        .bind(name)
        .bind(category)
        .bind(limitation)
        .execute(pool)
        .await
        .unwrap();
}

async fn insert_lfv(pool: &SqlitePool, name: &str, category: &str, limitation: &str) {
    sqlx::query("INSERT INTO lfv_rules (name, category, limitation) VALUES (?, ?, ?)")
        .bind(name)
        .bind(category)
        .bind(limitation)
        .execute(pool)
        .await
        .unwrap();
}

async fn seed_lchf(db: &Database) {
    let pool = db.pool();
    insert_lchf(pool, "salmon", "Seafood", "Recommended").await;
    insert_lchf(pool, "chicken", "Poultry", "OK").await;
    insert_lchf(pool, "milk", "Dairy", "Limited").await;
    insert_lchf(pool, "yogurt", "Dairy", "Limit").await;
    insert_lchf(pool, "oat", "Grains", "Restricted").await;
    insert_lchf(pool, "bread", "Grains", "Avoid").await;
}

async fn seed_lfv(db: &Database) {
    let pool = db.pool();
    insert_lfv(pool, "lentil", "Legumes", "OK").await;
    insert_lfv(pool, "almond", "Nuts", "Moderation").await;
    insert_lfv(pool, "egg", "Eggs", "Limited").await;
    insert_lfv(pool, "butter", "Fats", "Restricted").await;
}

#[tokio::test]
async fn test_unknown_tier_is_a_validation_error() {
    let db = create_test_db().await;
    seed_lchf(&db).await;

    let err = db
        .diet_rules()
        .lchf_by_limitation("Sometimes")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    // Cross-vocabulary tiers are rejected too
    let err = db
        .diet_rules()
        .lfv_by_limitation("Recommended")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_tier_lookup_is_case_insensitive() {
    let db = create_test_db().await;
    seed_lchf(&db).await;

    let rules = db.diet_rules().lchf_by_limitation("recommended").await.unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].name, "salmon");
    assert_eq!(rules[0].limitation, LchfLimitation::Recommended);
}

#[tokio::test]
async fn test_lchf_tier_groupings() {
    let db = create_test_db().await;
    seed_lchf(&db).await;

    let allowed = db.diet_rules().lchf_allowed().await.unwrap();
    let allowed_names: Vec<&str> = allowed.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(allowed_names, vec!["chicken", "salmon"]);

    let restricted = db.diet_rules().lchf_restricted().await.unwrap();
    let restricted_names: Vec<&str> = restricted.iter().map(|r| r.name.as_str()).collect();
    // Restricted + Avoid + Limited; the Limit tier belongs to neither grouping
    assert_eq!(restricted_names, vec!["bread", "milk", "oat"]);

    let avoid = db.diet_rules().lchf_to_avoid().await.unwrap();
    assert_eq!(avoid.len(), 1);
    assert_eq!(avoid[0].name, "bread");

    let recommended = db.diet_rules().lchf_recommended().await.unwrap();
    assert_eq!(recommended.len(), 1);
    assert_eq!(recommended[0].name, "salmon");
}

#[tokio::test]
async fn test_lfv_tier_groupings() {
    let db = create_test_db().await;
    seed_lfv(&db).await;

    let allowed = db.diet_rules().lfv_allowed().await.unwrap();
    let allowed_names: Vec<&str> = allowed.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(allowed_names, vec!["almond", "lentil"]);

    let restricted = db.diet_rules().lfv_restricted().await.unwrap();
    let restricted_names: Vec<&str> = restricted.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(restricted_names, vec!["butter", "egg"]);

    assert_eq!(
        restricted[1].limitation,
        LfvLimitation::Limited
    );
}

#[tokio::test]
async fn test_search_and_categories() {
    let db = create_test_db().await;
    seed_lchf(&db).await;

    let hits = db.diet_rules().lchf_search_by_name("CHICK").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "chicken");

    let err = db.diet_rules().lchf_search_by_name("  ").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let categories = db.diet_rules().lchf_categories().await.unwrap();
    assert_eq!(categories, vec!["Dairy", "Grains", "Poultry", "Seafood"]);

    let dairy = db.diet_rules().lchf_by_category("dairy").await.unwrap();
    assert_eq!(dairy.len(), 2);
}

#[tokio::test]
async fn test_multi_criteria_search() {
    let db = create_test_db().await;
    seed_lchf(&db).await;

    // All criteria absent matches everything
    let all = db.diet_rules().lchf_search(None, None, None).await.unwrap();
    assert_eq!(all.len(), 6);

    let dairy_limited = db
        .diet_rules()
        .lchf_search(None, Some("Dairy"), Some("Limited"))
        .await
        .unwrap();
    assert_eq!(dairy_limited.len(), 1);
    assert_eq!(dairy_limited[0].name, "milk");

    let err = db
        .diet_rules()
        .lchf_search(None, None, Some("bogus"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_counts_and_lookup_by_id() {
    let db = create_test_db().await;
    seed_lchf(&db).await;

    assert_eq!(
        db.diet_rules().lchf_count_by_category("Grains").await.unwrap(),
        2
    );
    assert_eq!(
        db.diet_rules().lchf_count_by_limitation("avoid").await.unwrap(),
        1
    );

    let first = db.diet_rules().lchf_by_id(1).await.unwrap().unwrap();
    assert_eq!(first.name, "salmon");
    assert!(db.diet_rules().lchf_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_lfv_multi_criteria_search_and_counts() {
    let db = create_test_db().await;
    seed_lfv(&db).await;

    let moderation_nuts = db
        .diet_rules()
        .lfv_search(None, Some("Nuts"), Some("moderation"))
        .await
        .unwrap();
    assert_eq!(moderation_nuts.len(), 1);
    assert_eq!(moderation_nuts[0].name, "almond");

    assert_eq!(
        db.diet_rules().lfv_count_by_category("Eggs").await.unwrap(),
        1
    );
    assert_eq!(
        db.diet_rules()
            .lfv_count_by_limitation("restricted")
            .await
            .unwrap(),
        1
    );

    let first = db.diet_rules().lfv_by_id(1).await.unwrap().unwrap();
    assert_eq!(first.name, "lentil");
}

#[tokio::test]
async fn test_tier_queries_match_rows_stored_in_any_case() {
    let db = create_test_db().await;
    let pool = db.pool();
    // Imported data does not guarantee canonical tier case
    insert_lchf(pool, "chicken", "Poultry", "ok").await;
    insert_lchf(pool, "bread", "Grains", "AVOID").await;

    let ok_rules = db.diet_rules().lchf_by_limitation("ok").await.unwrap();
    assert_eq!(ok_rules.len(), 1);
    assert_eq!(ok_rules[0].name, "chicken");
    assert_eq!(ok_rules[0].limitation, LchfLimitation::Ok);

    // Listing and counting agree on the same rows
    assert_eq!(
        db.diet_rules().lchf_count_by_limitation("ok").await.unwrap(),
        i64::try_from(ok_rules.len()).unwrap()
    );

    let allowed = db.diet_rules().lchf_allowed().await.unwrap();
    assert_eq!(allowed.len(), 1);
    assert_eq!(allowed[0].name, "chicken");

    let avoid = db
        .diet_rules()
        .lchf_search(None, None, Some("Avoid"))
        .await
        .unwrap();
    assert_eq!(avoid.len(), 1);
    assert_eq!(avoid[0].name, "bread");
}

#[tokio::test]
async fn test_distinct_limitations_reflect_table_contents() {
    let db = create_test_db().await;
    seed_lfv(&db).await;

    let limitations = db.diet_rules().lfv_limitations().await.unwrap();
    assert_eq!(
        limitations,
        vec!["Limited", "Moderation", "OK", "Restricted"]
    );
}
