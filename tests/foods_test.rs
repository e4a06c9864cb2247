// ABOUTME: Integration tests for the food catalog manager
// ABOUTME: Covers name search, category lookups, and allergen queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(missing_docs, clippy::unwrap_used)]

use diet_plan_mcp_server::database::Database;
use diet_plan_mcp_server::errors::ErrorCode;
use sqlx::SqlitePool;

async fn create_test_db() -> Database {
    Database::new("sqlite::memory:").await.unwrap()
}

async fn insert_food(
    pool: &SqlitePool,
    fdc_id: i64,
    name: &str,
    category: Option<&str>,
    allergen_flags: Option<&str>,
) {
    sqlx::query(
        r"
        INSERT INTO foods (fdc_id, food_name, data_type, food_category, publication_date, allergen_flags)
        VALUES (?, ?, 'SR Legacy', ?, '2019-04-01', ?)
        ",
    )
    .bind(fdc_id)
    .bind(name)
    .bind(category)
    .bind(allergen_flags)
    .execute(pool)
    .await
    .unwrap();
}

async fn seed(db: &Database) {
    let pool = db.pool();
    insert_food(pool, 1, "Cheese, cheddar", Some("Dairy and Egg Products"), Some("Contains milk")).await;
    insert_food(pool, 2, "Bananas, raw", Some("Fruits and Fruit Juices"), Some("NaN")).await;
    insert_food(pool, 3, "Strawberries, raw", Some("Fruits and Fruit Juices"), Some("NaN")).await;
    insert_food(pool, 4, "Bread, whole-wheat", Some("Baked Products"), Some("Contains wheat, gluten")).await;
    insert_food(pool, 5, "Mystery item", None, None).await;
}

#[tokio::test]
async fn test_search_by_name_is_case_insensitive_substring() {
    let db = create_test_db().await;
    seed(&db).await;

    let hits = db.foods().search_by_name("RAW").await.unwrap();
    assert_eq!(hits.len(), 2);

    let err = db.foods().search_by_name("   ").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_get_by_fdc_id() {
    let db = create_test_db().await;
    seed(&db).await;

    let food = db.foods().get_by_fdc_id(1).await.unwrap().unwrap();
    assert_eq!(food.food_name, "Cheese, cheddar");
    assert_eq!(food.allergen_flags.as_deref(), Some("Contains milk"));

    assert!(db.foods().get_by_fdc_id(999).await.unwrap().is_none());

    let err = db.foods().get_by_fdc_id(0).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    let err = db.foods().get_by_fdc_id(-7).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_categories_skip_missing_values() {
    let db = create_test_db().await;
    seed(&db).await;

    let categories = db.foods().get_categories().await.unwrap();
    assert_eq!(
        categories,
        vec![
            "Baked Products",
            "Dairy and Egg Products",
            "Fruits and Fruit Juices"
        ]
    );

    let fruits = db
        .foods()
        .get_by_category("fruits and fruit juices")
        .await
        .unwrap();
    assert_eq!(fruits.len(), 2);
}

#[tokio::test]
async fn test_allergen_free_filters_only_known_flags() {
    let db = create_test_db().await;
    seed(&db).await;

    let safe = db
        .foods()
        .find_without_allergens(Some("milk, wheat"))
        .await
        .unwrap();
    let names: Vec<&str> = safe.iter().map(|f| f.food_name.as_str()).collect();
    assert!(!names.contains(&"Cheese, cheddar"));
    assert!(!names.contains(&"Bread, whole-wheat"));
    // 'NaN' and NULL flags mean no data and always pass
    assert!(names.contains(&"Bananas, raw"));
    assert!(names.contains(&"Mystery item"));

    // No allergens given: entire catalog
    let all = db.foods().find_without_allergens(None).await.unwrap();
    assert_eq!(all.len(), 5);
}

#[tokio::test]
async fn test_find_with_allergen_is_the_inverse_query() {
    let db = create_test_db().await;
    seed(&db).await;

    let with_milk = db.foods().find_with_allergen("MILK").await.unwrap();
    assert_eq!(with_milk.len(), 1);
    assert_eq!(with_milk[0].food_name, "Cheese, cheddar");

    let err = db.foods().find_with_allergen("").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_list_and_count() {
    let db = create_test_db().await;
    seed(&db).await;

    assert_eq!(db.foods().count().await.unwrap(), 5);

    let page = db.foods().list(2, 0).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].food_name, "Bananas, raw");

    let rest = db.foods().list(10, 4).await.unwrap();
    assert_eq!(rest.len(), 1);
}
