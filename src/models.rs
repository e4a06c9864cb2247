// ABOUTME: Common data models for food catalog, nutrient, and diet-rule data
// ABOUTME: Defines the typed entities and closed limitation vocabularies per diet
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data models for the diet plan server
//!
//! The food catalog and nutrient table are USDA-derived reference data keyed
//! by FDC id. The LCHF and LFV rule tables are independently curated; they
//! link to the catalog only by fuzzy name containment, never by foreign key.

use serde::{Deserialize, Serialize};

/// A food item from the USDA-derived catalog
///
/// Read-only reference data. `fdc_id` is the external Food Data Central
/// identifier and the join key into nutrient data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food Data Central id (stable, externally sourced)
    pub fdc_id: i64,
    /// Food name (never empty)
    pub food_name: String,
    /// Source data type (e.g. "Foundation", "Branded", "Survey")
    pub data_type: Option<String>,
    /// Category (e.g. "Fruits", "Dairy and Egg Products")
    pub food_category: Option<String>,
    /// Publication date of the source record (stored as text)
    pub publication_date: Option<String>,
    /// Free-text allergen tags; matched by case-insensitive substring.
    /// The import uses NULL, "" or the literal "NaN" for "no data".
    pub allergen_flags: Option<String>,
}

/// Per-food nutrient values, 1:1 with [`FoodItem`] by FDC id
///
/// All values are per 100 g and any may be absent for a given food. No
/// cross-field consistency is enforced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub fdc_id: i64,
    pub food_name: String,
    pub simplified_name: Option<String>,
    pub synonyms: Option<String>,
    pub energy_kcal: Option<f64>,
    pub total_fat_g: Option<f64>,
    pub protein_g: Option<f64>,
    pub carbohydrate_g: Option<f64>,
    pub fiber_g: Option<f64>,
    pub sugars_g: Option<f64>,
    pub added_sugars_g: Option<f64>,
    pub sodium_mg: Option<f64>,
    pub potassium_mg: Option<f64>,
    pub calcium_mg: Option<f64>,
    pub iron_mg: Option<f64>,
    pub vitamin_c_mg: Option<f64>,
    pub cholesterol_mg: Option<f64>,
    pub saturated_fat_g: Option<f64>,
    pub vitamin_d_mcg: Option<f64>,
    pub magnesium_mg: Option<f64>,
}

/// Diet type selecting which rule table applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DietType {
    /// Low Carb High Fat
    Lchf,
    /// Low Fat Vegetarian/Vegan
    Lfv,
}

impl DietType {
    /// Convert to the canonical uppercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lchf => "LCHF",
            Self::Lfv => "LFV",
        }
    }

    /// Strict case-insensitive parse; unknown diet types are a caller error
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "LCHF" => Some(Self::Lchf),
            "LFV" => Some(Self::Lfv),
            _ => None,
        }
    }
}

impl std::fmt::Display for DietType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Limitation tiers for the LCHF rule table (closed vocabulary)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LchfLimitation {
    #[serde(rename = "OK")]
    Ok,
    Restricted,
    Limit,
    Avoid,
    Limited,
    Recommended,
}

impl LchfLimitation {
    /// Convert to the database string representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Restricted => "Restricted",
            Self::Limit => "Limit",
            Self::Avoid => "Avoid",
            Self::Limited => "Limited",
            Self::Recommended => "Recommended",
        }
    }

    /// Strict case-insensitive parse. Unknown tiers return `None`; callers
    /// must reject them as validation errors rather than defaulting.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "OK" => Some(Self::Ok),
            "RESTRICTED" => Some(Self::Restricted),
            "LIMIT" => Some(Self::Limit),
            "AVOID" => Some(Self::Avoid),
            "LIMITED" => Some(Self::Limited),
            "RECOMMENDED" => Some(Self::Recommended),
            _ => None,
        }
    }
}

/// Limitation tiers for the LFV rule table (closed vocabulary)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LfvLimitation {
    #[serde(rename = "OK")]
    Ok,
    Moderation,
    Restricted,
    Limited,
}

impl LfvLimitation {
    /// Convert to the database string representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Moderation => "Moderation",
            Self::Restricted => "Restricted",
            Self::Limited => "Limited",
        }
    }

    /// Strict case-insensitive parse; unknown tiers return `None`
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "OK" => Some(Self::Ok),
            "MODERATION" => Some(Self::Moderation),
            "RESTRICTED" => Some(Self::Restricted),
            "LIMITED" => Some(Self::Limited),
            _ => None,
        }
    }
}

/// A curated LCHF diet rule
///
/// `name` is matched as a case-insensitive substring against food names; a
/// rule may match zero, one, or many catalog foods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LchfRule {
    pub id: i64,
    /// Ingredient/food name fragment (never empty)
    pub name: String,
    /// Diet-specific grouping label (e.g. "Cheese", "Seafood")
    pub category: String,
    pub limitation: LchfLimitation,
    pub notes: Option<String>,
}

/// A curated LFV diet rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LfvRule {
    pub id: i64,
    pub name: String,
    /// Diet-specific grouping label (e.g. "Whole Grain", "Legumes")
    pub category: String,
    pub limitation: LfvLimitation,
    pub notes: Option<String>,
}

/// Vitamins and minerals supported by the rich-in threshold query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VitaminMineral {
    C,
    D,
    Calcium,
    Iron,
    Potassium,
    Magnesium,
}

impl VitaminMineral {
    /// Canonical uppercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::D => "D",
            Self::Calcium => "CALCIUM",
            Self::Iron => "IRON",
            Self::Potassium => "POTASSIUM",
            Self::Magnesium => "MAGNESIUM",
        }
    }

    /// Strict case-insensitive parse; unknown types are a caller error
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            "CALCIUM" => Some(Self::Calcium),
            "IRON" => Some(Self::Iron),
            "POTASSIUM" => Some(Self::Potassium),
            "MAGNESIUM" => Some(Self::Magnesium),
            _ => None,
        }
    }

    /// Nutrient table column holding this vitamin/mineral
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::C => "vitamin_c_mg",
            Self::D => "vitamin_d_mcg",
            Self::Calcium => "calcium_mg",
            Self::Iron => "iron_mg",
            Self::Potassium => "potassium_mg",
            Self::Magnesium => "magnesium_mg",
        }
    }

    /// Default minimum amount when the caller supplies none
    #[must_use]
    pub const fn default_min_amount(self) -> f64 {
        match self {
            Self::C => 10.0,      // mg
            Self::D => 1.0,       // mcg
            Self::Calcium => 50.0, // mg
            Self::Iron => 2.0,    // mg
            Self::Potassium => 200.0, // mg
            Self::Magnesium => 20.0,  // mg
        }
    }
}

/// An eligibility result: a diet-and-allergen-safe food with its nutrient
/// profile attached (all nutrient fields absent when no profile exists)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibleFood {
    pub fdc_id: i64,
    pub food_name: String,
    pub energy_kcal: Option<f64>,
    pub total_fat_g: Option<f64>,
    pub protein_g: Option<f64>,
    pub carbohydrate_g: Option<f64>,
    pub fiber_g: Option<f64>,
    pub sugars_g: Option<f64>,
    pub added_sugars_g: Option<f64>,
    pub sodium_mg: Option<f64>,
    pub potassium_mg: Option<f64>,
    pub calcium_mg: Option<f64>,
    pub iron_mg: Option<f64>,
    pub vitamin_c_mg: Option<f64>,
    pub cholesterol_mg: Option<f64>,
    pub saturated_fat_g: Option<f64>,
    pub vitamin_d_mcg: Option<f64>,
    pub magnesium_mg: Option<f64>,
}

/// Average macronutrient statistics over the nutrient table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionalStatistics {
    pub avg_calories: Option<f64>,
    pub avg_protein: Option<f64>,
    pub avg_fat: Option<f64>,
    pub avg_carbs: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diet_type_parse() {
        assert_eq!(DietType::parse("lchf"), Some(DietType::Lchf));
        assert_eq!(DietType::parse(" LFV "), Some(DietType::Lfv));
        assert_eq!(DietType::parse("keto"), None);
    }

    #[test]
    fn test_lchf_limitation_round_trip() {
        for tier in [
            LchfLimitation::Ok,
            LchfLimitation::Restricted,
            LchfLimitation::Limit,
            LchfLimitation::Avoid,
            LchfLimitation::Limited,
            LchfLimitation::Recommended,
        ] {
            assert_eq!(LchfLimitation::parse(tier.as_str()), Some(tier));
        }
        assert_eq!(LchfLimitation::parse("Sometimes"), None);
    }

    #[test]
    fn test_lfv_limitation_strictness() {
        assert_eq!(LfvLimitation::parse("moderation"), Some(LfvLimitation::Moderation));
        // "Recommended" belongs to the LCHF vocabulary only
        assert_eq!(LfvLimitation::parse("Recommended"), None);
    }

    #[test]
    fn test_vitamin_mineral_parse_and_defaults() {
        let iron = VitaminMineral::parse("iron").unwrap();
        assert_eq!(iron.column(), "iron_mg");
        assert!((iron.default_min_amount() - 2.0).abs() < f64::EPSILON);
        assert_eq!(VitaminMineral::parse("ZINC"), None);
    }
}
