// ABOUTME: Macro-balance classification of nutrient profiles
// ABOUTME: Checks protein/fat/carb energy contributions against accepted macro ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Macro-balance classification
//!
//! A food is "balanced" when each macronutrient's share of total energy
//! falls inside the accepted range: protein 10-35%, fat 20-35%, and
//! carbohydrates 45-65%. Energy contributions use the standard Atwater
//! factors (4 kcal/g protein, 9 kcal/g fat, 4 kcal/g carbohydrate).
//! Foods with zero or missing energy are never balanced.

use crate::models::NutrientProfile;

/// kcal per gram of protein
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
/// kcal per gram of fat
pub const FAT_KCAL_PER_G: f64 = 9.0;
/// kcal per gram of carbohydrate
pub const CARB_KCAL_PER_G: f64 = 4.0;

/// Accepted protein energy share
pub const PROTEIN_RATIO_RANGE: (f64, f64) = (0.10, 0.35);
/// Accepted fat energy share
pub const FAT_RATIO_RANGE: (f64, f64) = (0.20, 0.35);
/// Accepted carbohydrate energy share
pub const CARB_RATIO_RANGE: (f64, f64) = (0.45, 0.65);

/// Whether a nutrient profile meets all three macro-balance ranges
///
/// Missing macro values are treated as zero grams, which fails the range
/// check for that macro.
#[must_use]
pub fn is_balanced(profile: &NutrientProfile) -> bool {
    let Some(energy) = profile.energy_kcal else {
        return false;
    };
    if energy <= 0.0 {
        return false;
    }

    let protein_ratio = profile.protein_g.unwrap_or(0.0) * PROTEIN_KCAL_PER_G / energy;
    let fat_ratio = profile.total_fat_g.unwrap_or(0.0) * FAT_KCAL_PER_G / energy;
    let carb_ratio = profile.carbohydrate_g.unwrap_or(0.0) * CARB_KCAL_PER_G / energy;

    in_range(protein_ratio, PROTEIN_RATIO_RANGE)
        && in_range(fat_ratio, FAT_RATIO_RANGE)
        && in_range(carb_ratio, CARB_RATIO_RANGE)
}

fn in_range(value: f64, (lo, hi): (f64, f64)) -> bool {
    value >= lo && value <= hi
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(energy: f64, protein: f64, fat: f64, carbs: f64) -> NutrientProfile {
        NutrientProfile {
            fdc_id: 1,
            food_name: "test".into(),
            energy_kcal: Some(energy),
            protein_g: Some(protein),
            total_fat_g: Some(fat),
            carbohydrate_g: Some(carbs),
            ..NutrientProfile::default()
        }
    }

    #[test]
    fn test_balanced_profile_passes() {
        // 20% protein, 30% fat, 50% carbs of 200 kcal
        let p = profile(200.0, 10.0, 6.67, 25.0);
        assert!(is_balanced(&p));
    }

    #[test]
    fn test_zero_energy_is_never_balanced() {
        assert!(!is_balanced(&profile(0.0, 10.0, 5.0, 25.0)));
        let mut p = profile(100.0, 5.0, 3.0, 13.0);
        p.energy_kcal = None;
        assert!(!is_balanced(&p));
    }

    #[test]
    fn test_each_ratio_bound_is_enforced() {
        // Fat share 45% of energy, above the 35% ceiling
        let too_fatty = profile(200.0, 10.0, 10.0, 25.0);
        assert!(!is_balanced(&too_fatty));

        // Protein share 8%, below the 10% floor
        let too_lean = profile(200.0, 4.0, 6.67, 27.0);
        assert!(!is_balanced(&too_lean));

        // Carb share 30%, below the 45% floor
        let low_carb = profile(200.0, 12.0, 7.0, 15.0);
        assert!(!is_balanced(&low_carb));
    }

    #[test]
    fn test_missing_macros_count_as_zero() {
        let mut p = profile(200.0, 10.0, 6.67, 25.0);
        p.carbohydrate_g = None;
        assert!(!is_balanced(&p));
    }
}
