// ABOUTME: Reference data seeding utility for the diet plan server
// ABOUTME: Seeds LCHF/LFV diet rules and a demo slice of foods with nutrients
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diet data seeder.
//!
//! This binary creates the curated LCHF/LFV diet rule tables and a small
//! demonstration slice of the USDA food catalog with nutrient profiles.
//! Production deployments import the full catalog separately; the demo
//! foods make a fresh database usable immediately.
//!
//! Usage:
//! ```bash
//! # Seed diet data (uses DATABASE_URL from environment)
//! cargo run --bin seed-diet-data
//!
//! # Override database URL
//! cargo run --bin seed-diet-data -- --database-url sqlite:./data/diet_plan.db
//!
//! # Force re-seed (replaces existing data)
//! cargo run --bin seed-diet-data -- --force
//! ```

use anyhow::Result;
use clap::Parser;
use diet_plan_mcp_server::database::Database;
use sqlx::SqlitePool;
use std::env;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-diet-data",
    about = "Diet Plan MCP Server reference data seeder",
    long_about = "Create the LCHF/LFV diet rule tables and demo foods with nutrient profiles"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Force re-seed even if data already exists
    #[arg(long)]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

// ============================================================================
// Diet Rule Data
// ============================================================================

struct DietRuleData {
    name: &'static str,
    category: &'static str,
    limitation: &'static str,
    notes: Option<&'static str>,
}

const LCHF_RULES: &[DietRuleData] = &[
    DietRuleData { name: "chicken", category: "Poultry", limitation: "OK", notes: Some("Prefer thighs with skin for fat content") },
    DietRuleData { name: "turkey", category: "Poultry", limitation: "OK", notes: None },
    DietRuleData { name: "beef", category: "Meat", limitation: "OK", notes: Some("Fattier cuts fit the macro profile better") },
    DietRuleData { name: "pork", category: "Meat", limitation: "OK", notes: None },
    DietRuleData { name: "lamb", category: "Meat", limitation: "OK", notes: None },
    DietRuleData { name: "bacon", category: "Meat", limitation: "Limited", notes: Some("Processed; watch sodium") },
    DietRuleData { name: "salmon", category: "Seafood", limitation: "Recommended", notes: Some("High in omega-3 fats") },
    DietRuleData { name: "mackerel", category: "Seafood", limitation: "Recommended", notes: None },
    DietRuleData { name: "sardine", category: "Seafood", limitation: "Recommended", notes: None },
    DietRuleData { name: "shrimp", category: "Seafood", limitation: "OK", notes: None },
    DietRuleData { name: "egg", category: "Eggs", limitation: "Recommended", notes: None },
    DietRuleData { name: "butter", category: "Fats", limitation: "OK", notes: None },
    DietRuleData { name: "olive oil", category: "Fats", limitation: "Recommended", notes: None },
    DietRuleData { name: "coconut oil", category: "Fats", limitation: "OK", notes: None },
    DietRuleData { name: "cheddar", category: "Cheese", limitation: "OK", notes: None },
    DietRuleData { name: "mozzarella", category: "Cheese", limitation: "OK", notes: None },
    DietRuleData { name: "cream", category: "Dairy", limitation: "OK", notes: Some("Heavy cream only; avoid sweetened") },
    DietRuleData { name: "milk", category: "Dairy", limitation: "Limited", notes: Some("Lactose adds carbs") },
    DietRuleData { name: "yogurt", category: "Dairy", limitation: "Limit", notes: Some("Plain full-fat only") },
    DietRuleData { name: "avocado", category: "Vegetables", limitation: "Recommended", notes: None },
    DietRuleData { name: "spinach", category: "Vegetables", limitation: "OK", notes: None },
    DietRuleData { name: "broccoli", category: "Vegetables", limitation: "OK", notes: None },
    DietRuleData { name: "cauliflower", category: "Vegetables", limitation: "OK", notes: None },
    DietRuleData { name: "potato", category: "Vegetables", limitation: "Avoid", notes: Some("High starch") },
    DietRuleData { name: "almond", category: "Nuts", limitation: "OK", notes: None },
    DietRuleData { name: "walnut", category: "Nuts", limitation: "OK", notes: None },
    DietRuleData { name: "cashew", category: "Nuts", limitation: "Limit", notes: Some("Higher carb than other nuts") },
    DietRuleData { name: "strawberr", category: "Fruits", limitation: "Limit", notes: Some("Small portions; matches strawberry/strawberries") },
    DietRuleData { name: "blueberr", category: "Fruits", limitation: "Limit", notes: None },
    DietRuleData { name: "banana", category: "Fruits", limitation: "Avoid", notes: Some("High sugar") },
    DietRuleData { name: "bread", category: "Grains", limitation: "Avoid", notes: None },
    DietRuleData { name: "rice", category: "Grains", limitation: "Avoid", notes: None },
    DietRuleData { name: "pasta", category: "Grains", limitation: "Avoid", notes: None },
    DietRuleData { name: "oat", category: "Grains", limitation: "Restricted", notes: None },
    DietRuleData { name: "sugar", category: "Sweeteners", limitation: "Avoid", notes: None },
    DietRuleData { name: "honey", category: "Sweeteners", limitation: "Avoid", notes: None },
];

const LFV_RULES: &[DietRuleData] = &[
    DietRuleData { name: "lentil", category: "Legumes", limitation: "OK", notes: Some("Protein staple") },
    DietRuleData { name: "chickpea", category: "Legumes", limitation: "OK", notes: None },
    DietRuleData { name: "black bean", category: "Legumes", limitation: "OK", notes: None },
    DietRuleData { name: "tofu", category: "Soy", limitation: "OK", notes: None },
    DietRuleData { name: "tempeh", category: "Soy", limitation: "OK", notes: None },
    DietRuleData { name: "edamame", category: "Soy", limitation: "OK", notes: None },
    DietRuleData { name: "brown rice", category: "Whole Grain", limitation: "OK", notes: None },
    DietRuleData { name: "quinoa", category: "Whole Grain", limitation: "OK", notes: None },
    DietRuleData { name: "oat", category: "Whole Grain", limitation: "OK", notes: None },
    DietRuleData { name: "whole wheat", category: "Whole Grain", limitation: "OK", notes: None },
    DietRuleData { name: "spinach", category: "Vegetables", limitation: "OK", notes: None },
    DietRuleData { name: "broccoli", category: "Vegetables", limitation: "OK", notes: None },
    DietRuleData { name: "carrot", category: "Vegetables", limitation: "OK", notes: None },
    DietRuleData { name: "kale", category: "Vegetables", limitation: "OK", notes: None },
    DietRuleData { name: "banana", category: "Fruits", limitation: "OK", notes: None },
    DietRuleData { name: "apple", category: "Fruits", limitation: "OK", notes: None },
    DietRuleData { name: "strawberr", category: "Fruits", limitation: "OK", notes: Some("Matches strawberry/strawberries") },
    DietRuleData { name: "avocado", category: "Fruits", limitation: "Moderation", notes: Some("Calorie-dense fat source") },
    DietRuleData { name: "almond", category: "Nuts", limitation: "Moderation", notes: Some("High fat; small portions") },
    DietRuleData { name: "walnut", category: "Nuts", limitation: "Moderation", notes: None },
    DietRuleData { name: "olive oil", category: "Fats", limitation: "Moderation", notes: Some("Low-fat diet; use sparingly") },
    DietRuleData { name: "milk", category: "Dairy", limitation: "Limited", notes: Some("Skim only, if vegetarian rather than vegan") },
    DietRuleData { name: "yogurt", category: "Dairy", limitation: "Limited", notes: None },
    DietRuleData { name: "cheddar", category: "Dairy", limitation: "Restricted", notes: Some("High saturated fat") },
    DietRuleData { name: "butter", category: "Fats", limitation: "Restricted", notes: None },
    DietRuleData { name: "chicken", category: "Meat", limitation: "Restricted", notes: Some("Not vegetarian") },
    DietRuleData { name: "beef", category: "Meat", limitation: "Restricted", notes: None },
    DietRuleData { name: "salmon", category: "Seafood", limitation: "Restricted", notes: None },
    DietRuleData { name: "egg", category: "Eggs", limitation: "Limited", notes: Some("Vegetarian only; high cholesterol") },
    DietRuleData { name: "sugar", category: "Sweeteners", limitation: "Limited", notes: None },
];

// ============================================================================
// Demo Food Catalog Data
// ============================================================================

struct FoodData {
    fdc_id: i64,
    food_name: &'static str,
    data_type: &'static str,
    food_category: &'static str,
    publication_date: &'static str,
    allergen_flags: &'static str,
}

struct NutrientData {
    fdc_id: i64,
    food_name: &'static str,
    energy_kcal: f64,
    total_fat_g: f64,
    protein_g: f64,
    carbohydrate_g: f64,
    fiber_g: f64,
    sugars_g: f64,
    sodium_mg: f64,
    potassium_mg: f64,
    calcium_mg: f64,
    iron_mg: f64,
    vitamin_c_mg: f64,
    cholesterol_mg: f64,
    saturated_fat_g: f64,
    vitamin_d_mcg: f64,
    magnesium_mg: f64,
}

const DEMO_FOODS: &[FoodData] = &[
    FoodData { fdc_id: 171_077, food_name: "Chicken, broilers or fryers, breast, meat only, cooked, roasted", data_type: "SR Legacy", food_category: "Poultry Products", publication_date: "2019-04-01", allergen_flags: "NaN" },
    FoodData { fdc_id: 175_167, food_name: "Fish, salmon, Atlantic, farmed, cooked, dry heat", data_type: "SR Legacy", food_category: "Finfish and Shellfish Products", publication_date: "2019-04-01", allergen_flags: "Contains fish" },
    FoodData { fdc_id: 173_424, food_name: "Egg, whole, cooked, hard-boiled", data_type: "SR Legacy", food_category: "Dairy and Egg Products", publication_date: "2019-04-01", allergen_flags: "Contains egg" },
    FoodData { fdc_id: 173_441, food_name: "Cheese, cheddar", data_type: "SR Legacy", food_category: "Dairy and Egg Products", publication_date: "2019-04-01", allergen_flags: "Contains milk" },
    FoodData { fdc_id: 171_287, food_name: "Milk, whole, 3.25% milkfat, with added vitamin D", data_type: "SR Legacy", food_category: "Dairy and Egg Products", publication_date: "2019-04-01", allergen_flags: "Contains milk" },
    FoodData { fdc_id: 171_705, food_name: "Avocados, raw, all commercial varieties", data_type: "SR Legacy", food_category: "Fruits and Fruit Juices", publication_date: "2019-04-01", allergen_flags: "NaN" },
    FoodData { fdc_id: 168_462, food_name: "Spinach, raw", data_type: "SR Legacy", food_category: "Vegetables and Vegetable Products", publication_date: "2019-04-01", allergen_flags: "NaN" },
    FoodData { fdc_id: 170_379, food_name: "Broccoli, raw", data_type: "SR Legacy", food_category: "Vegetables and Vegetable Products", publication_date: "2019-04-01", allergen_flags: "NaN" },
    FoodData { fdc_id: 170_567, food_name: "Nuts, almonds", data_type: "SR Legacy", food_category: "Nut and Seed Products", publication_date: "2019-04-01", allergen_flags: "Contains tree nuts" },
    FoodData { fdc_id: 173_735, food_name: "Bread, whole-wheat, commercially prepared", data_type: "SR Legacy", food_category: "Baked Products", publication_date: "2019-04-01", allergen_flags: "Contains wheat, gluten" },
    FoodData { fdc_id: 168_878, food_name: "Rice, brown, long-grain, cooked", data_type: "SR Legacy", food_category: "Cereal Grains and Pasta", publication_date: "2019-04-01", allergen_flags: "NaN" },
    FoodData { fdc_id: 172_421, food_name: "Lentils, mature seeds, cooked, boiled, without salt", data_type: "SR Legacy", food_category: "Legumes and Legume Products", publication_date: "2019-04-01", allergen_flags: "NaN" },
    FoodData { fdc_id: 174_276, food_name: "Tofu, raw, firm, prepared with calcium sulfate", data_type: "SR Legacy", food_category: "Legumes and Legume Products", publication_date: "2019-04-01", allergen_flags: "Contains soy" },
    FoodData { fdc_id: 173_944, food_name: "Bananas, raw", data_type: "SR Legacy", food_category: "Fruits and Fruit Juices", publication_date: "2019-04-01", allergen_flags: "NaN" },
    FoodData { fdc_id: 167_762, food_name: "Strawberries, raw", data_type: "SR Legacy", food_category: "Fruits and Fruit Juices", publication_date: "2019-04-01", allergen_flags: "NaN" },
    FoodData { fdc_id: 171_413, food_name: "Oil, olive, salad or cooking", data_type: "SR Legacy", food_category: "Fats and Oils", publication_date: "2019-04-01", allergen_flags: "NaN" },
];

const DEMO_NUTRIENTS: &[NutrientData] = &[
    NutrientData { fdc_id: 171_077, food_name: "Chicken, broilers or fryers, breast, meat only, cooked, roasted", energy_kcal: 165.0, total_fat_g: 3.6, protein_g: 31.0, carbohydrate_g: 0.0, fiber_g: 0.0, sugars_g: 0.0, sodium_mg: 74.0, potassium_mg: 256.0, calcium_mg: 15.0, iron_mg: 1.0, vitamin_c_mg: 0.0, cholesterol_mg: 85.0, saturated_fat_g: 1.0, vitamin_d_mcg: 0.1, magnesium_mg: 29.0 },
    NutrientData { fdc_id: 175_167, food_name: "Fish, salmon, Atlantic, farmed, cooked, dry heat", energy_kcal: 206.0, total_fat_g: 12.4, protein_g: 22.1, carbohydrate_g: 0.0, fiber_g: 0.0, sugars_g: 0.0, sodium_mg: 61.0, potassium_mg: 384.0, calcium_mg: 15.0, iron_mg: 0.3, vitamin_c_mg: 3.9, cholesterol_mg: 63.0, saturated_fat_g: 2.5, vitamin_d_mcg: 11.0, magnesium_mg: 30.0 },
    NutrientData { fdc_id: 173_424, food_name: "Egg, whole, cooked, hard-boiled", energy_kcal: 155.0, total_fat_g: 10.6, protein_g: 12.6, carbohydrate_g: 1.1, fiber_g: 0.0, sugars_g: 1.1, sodium_mg: 124.0, potassium_mg: 126.0, calcium_mg: 50.0, iron_mg: 1.2, vitamin_c_mg: 0.0, cholesterol_mg: 373.0, saturated_fat_g: 3.3, vitamin_d_mcg: 2.2, magnesium_mg: 10.0 },
    NutrientData { fdc_id: 173_441, food_name: "Cheese, cheddar", energy_kcal: 403.0, total_fat_g: 33.1, protein_g: 24.9, carbohydrate_g: 1.3, fiber_g: 0.0, sugars_g: 0.5, sodium_mg: 621.0, potassium_mg: 98.0, calcium_mg: 721.0, iron_mg: 0.7, vitamin_c_mg: 0.0, cholesterol_mg: 105.0, saturated_fat_g: 21.0, vitamin_d_mcg: 0.6, magnesium_mg: 28.0 },
    NutrientData { fdc_id: 171_287, food_name: "Milk, whole, 3.25% milkfat, with added vitamin D", energy_kcal: 61.0, total_fat_g: 3.3, protein_g: 3.2, carbohydrate_g: 4.8, fiber_g: 0.0, sugars_g: 5.1, sodium_mg: 43.0, potassium_mg: 132.0, calcium_mg: 113.0, iron_mg: 0.0, vitamin_c_mg: 0.0, cholesterol_mg: 10.0, saturated_fat_g: 1.9, vitamin_d_mcg: 1.3, magnesium_mg: 10.0 },
    NutrientData { fdc_id: 171_705, food_name: "Avocados, raw, all commercial varieties", energy_kcal: 160.0, total_fat_g: 14.7, protein_g: 2.0, carbohydrate_g: 8.5, fiber_g: 6.7, sugars_g: 0.7, sodium_mg: 7.0, potassium_mg: 485.0, calcium_mg: 12.0, iron_mg: 0.6, vitamin_c_mg: 10.0, cholesterol_mg: 0.0, saturated_fat_g: 2.1, vitamin_d_mcg: 0.0, magnesium_mg: 29.0 },
    NutrientData { fdc_id: 168_462, food_name: "Spinach, raw", energy_kcal: 23.0, total_fat_g: 0.4, protein_g: 2.9, carbohydrate_g: 3.6, fiber_g: 2.2, sugars_g: 0.4, sodium_mg: 79.0, potassium_mg: 558.0, calcium_mg: 99.0, iron_mg: 2.7, vitamin_c_mg: 28.1, cholesterol_mg: 0.0, saturated_fat_g: 0.1, vitamin_d_mcg: 0.0, magnesium_mg: 79.0 },
    NutrientData { fdc_id: 170_379, food_name: "Broccoli, raw", energy_kcal: 34.0, total_fat_g: 0.4, protein_g: 2.8, carbohydrate_g: 6.6, fiber_g: 2.6, sugars_g: 1.7, sodium_mg: 33.0, potassium_mg: 316.0, calcium_mg: 47.0, iron_mg: 0.7, vitamin_c_mg: 89.2, cholesterol_mg: 0.0, saturated_fat_g: 0.0, vitamin_d_mcg: 0.0, magnesium_mg: 21.0 },
    NutrientData { fdc_id: 170_567, food_name: "Nuts, almonds", energy_kcal: 579.0, total_fat_g: 49.9, protein_g: 21.2, carbohydrate_g: 21.6, fiber_g: 12.5, sugars_g: 4.4, sodium_mg: 1.0, potassium_mg: 733.0, calcium_mg: 269.0, iron_mg: 3.7, vitamin_c_mg: 0.0, cholesterol_mg: 0.0, saturated_fat_g: 3.8, vitamin_d_mcg: 0.0, magnesium_mg: 270.0 },
    NutrientData { fdc_id: 173_735, food_name: "Bread, whole-wheat, commercially prepared", energy_kcal: 247.0, total_fat_g: 3.4, protein_g: 13.0, carbohydrate_g: 41.0, fiber_g: 6.0, sugars_g: 5.6, sodium_mg: 450.0, potassium_mg: 250.0, calcium_mg: 161.0, iron_mg: 2.5, vitamin_c_mg: 0.0, cholesterol_mg: 0.0, saturated_fat_g: 0.8, vitamin_d_mcg: 0.0, magnesium_mg: 75.0 },
    NutrientData { fdc_id: 168_878, food_name: "Rice, brown, long-grain, cooked", energy_kcal: 123.0, total_fat_g: 1.0, protein_g: 2.7, carbohydrate_g: 25.6, fiber_g: 1.6, sugars_g: 0.2, sodium_mg: 4.0, potassium_mg: 86.0, calcium_mg: 3.0, iron_mg: 0.6, vitamin_c_mg: 0.0, cholesterol_mg: 0.0, saturated_fat_g: 0.3, vitamin_d_mcg: 0.0, magnesium_mg: 39.0 },
    NutrientData { fdc_id: 172_421, food_name: "Lentils, mature seeds, cooked, boiled, without salt", energy_kcal: 116.0, total_fat_g: 0.4, protein_g: 9.0, carbohydrate_g: 20.1, fiber_g: 7.9, sugars_g: 1.8, sodium_mg: 2.0, potassium_mg: 369.0, calcium_mg: 19.0, iron_mg: 3.3, vitamin_c_mg: 1.5, cholesterol_mg: 0.0, saturated_fat_g: 0.1, vitamin_d_mcg: 0.0, magnesium_mg: 36.0 },
    NutrientData { fdc_id: 174_276, food_name: "Tofu, raw, firm, prepared with calcium sulfate", energy_kcal: 144.0, total_fat_g: 8.7, protein_g: 17.3, carbohydrate_g: 2.8, fiber_g: 2.3, sugars_g: 0.6, sodium_mg: 14.0, potassium_mg: 237.0, calcium_mg: 683.0, iron_mg: 2.7, vitamin_c_mg: 0.0, cholesterol_mg: 0.0, saturated_fat_g: 1.3, vitamin_d_mcg: 0.0, magnesium_mg: 58.0 },
    NutrientData { fdc_id: 173_944, food_name: "Bananas, raw", energy_kcal: 89.0, total_fat_g: 0.3, protein_g: 1.1, carbohydrate_g: 22.8, fiber_g: 2.6, sugars_g: 12.2, sodium_mg: 1.0, potassium_mg: 358.0, calcium_mg: 5.0, iron_mg: 0.3, vitamin_c_mg: 8.7, cholesterol_mg: 0.0, saturated_fat_g: 0.1, vitamin_d_mcg: 0.0, magnesium_mg: 27.0 },
    NutrientData { fdc_id: 167_762, food_name: "Strawberries, raw", energy_kcal: 32.0, total_fat_g: 0.3, protein_g: 0.7, carbohydrate_g: 7.7, fiber_g: 2.0, sugars_g: 4.9, sodium_mg: 1.0, potassium_mg: 153.0, calcium_mg: 16.0, iron_mg: 0.4, vitamin_c_mg: 58.8, cholesterol_mg: 0.0, saturated_fat_g: 0.0, vitamin_d_mcg: 0.0, magnesium_mg: 13.0 },
    NutrientData { fdc_id: 171_413, food_name: "Oil, olive, salad or cooking", energy_kcal: 884.0, total_fat_g: 100.0, protein_g: 0.0, carbohydrate_g: 0.0, fiber_g: 0.0, sugars_g: 0.0, sodium_mg: 2.0, potassium_mg: 1.0, calcium_mg: 1.0, iron_mg: 0.6, vitamin_c_mg: 0.0, cholesterol_mg: 0.0, saturated_fat_g: 13.8, vitamin_d_mcg: 0.0, magnesium_mg: 0.0 },
];

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== Diet Plan MCP Server Data Seeder ===");

    let database_url = args
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite:./data/diet_plan.db".into());

    info!("Connecting to database: {}", database_url);
    let database = Database::new(&database_url).await?;
    let pool = database.pool();

    let lchf_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lchf_rules")
        .fetch_one(pool)
        .await
        .unwrap_or((0,));
    let lfv_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lfv_rules")
        .fetch_one(pool)
        .await
        .unwrap_or((0,));
    let food_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM foods")
        .fetch_one(pool)
        .await
        .unwrap_or((0,));

    if (lchf_count.0 > 0 || lfv_count.0 > 0 || food_count.0 > 0) && !args.force {
        info!(
            "Diet data already seeded ({} LCHF rules, {} LFV rules, {} foods). Use --force to re-seed.",
            lchf_count.0, lfv_count.0, food_count.0
        );
        return Ok(());
    }

    if args.force {
        info!("Force re-seed: clearing existing reference data");
        sqlx::query("DELETE FROM lchf_rules").execute(pool).await?;
        sqlx::query("DELETE FROM lfv_rules").execute(pool).await?;
        sqlx::query("DELETE FROM foods").execute(pool).await?;
        sqlx::query("DELETE FROM nutrients").execute(pool).await?;
    }

    info!("Seeding {} LCHF rules...", LCHF_RULES.len());
    for rule in LCHF_RULES {
        seed_rule(pool, "lchf_rules", rule).await?;
    }

    info!("Seeding {} LFV rules...", LFV_RULES.len());
    for rule in LFV_RULES {
        seed_rule(pool, "lfv_rules", rule).await?;
    }

    info!("Seeding {} demo foods...", DEMO_FOODS.len());
    for food in DEMO_FOODS {
        seed_food(pool, food).await?;
    }

    info!("Seeding {} nutrient profiles...", DEMO_NUTRIENTS.len());
    for nutrients in DEMO_NUTRIENTS {
        seed_nutrients(pool, nutrients).await?;
    }

    info!("=== Seeding Complete ===");
    info!(
        "{} LCHF rules, {} LFV rules, {} foods, {} nutrient profiles",
        LCHF_RULES.len(),
        LFV_RULES.len(),
        DEMO_FOODS.len(),
        DEMO_NUTRIENTS.len()
    );

    Ok(())
}

async fn seed_rule(pool: &SqlitePool, table: &str, rule: &DietRuleData) -> Result<()> {
    let query =
        format!("INSERT INTO {table} (name, category, limitation, notes) VALUES (?, ?, ?, ?)");
    sqlx::query(&query)
        .bind(rule.name)
        .bind(rule.category)
        .bind(rule.limitation)
        .bind(rule.notes)
        .execute(pool)
        .await?;
    Ok(())
}

async fn seed_food(pool: &SqlitePool, food: &FoodData) -> Result<()> {
    sqlx::query(
        r"
        INSERT OR REPLACE INTO foods
            (fdc_id, food_name, data_type, food_category, publication_date, allergen_flags)
        VALUES (?, ?, ?, ?, ?, ?)
        ",
    )
    .bind(food.fdc_id)
    .bind(food.food_name)
    .bind(food.data_type)
    .bind(food.food_category)
    .bind(food.publication_date)
    .bind(food.allergen_flags)
    .execute(pool)
    .await?;
    Ok(())
}

async fn seed_nutrients(pool: &SqlitePool, n: &NutrientData) -> Result<()> {
    sqlx::query(
        r"
        INSERT OR REPLACE INTO nutrients
            (fdc_id, food_name, energy_kcal, total_fat_g, protein_g, carbohydrate_g,
             fiber_g, sugars_g, sodium_mg, potassium_mg, calcium_mg, iron_mg,
             vitamin_c_mg, cholesterol_mg, saturated_fat_g, vitamin_d_mcg, magnesium_mg)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ",
    )
    .bind(n.fdc_id)
    .bind(n.food_name)
    .bind(n.energy_kcal)
    .bind(n.total_fat_g)
    .bind(n.protein_g)
    .bind(n.carbohydrate_g)
    .bind(n.fiber_g)
    .bind(n.sugars_g)
    .bind(n.sodium_mg)
    .bind(n.potassium_mg)
    .bind(n.calcium_mg)
    .bind(n.iron_mg)
    .bind(n.vitamin_c_mg)
    .bind(n.cholesterol_mg)
    .bind(n.saturated_fat_g)
    .bind(n.vitamin_d_mcg)
    .bind(n.magnesium_mg)
    .execute(pool)
    .await?;
    Ok(())
}
