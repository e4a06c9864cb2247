// ABOUTME: Allergen filter tokenization and exclusion predicate
// ABOUTME: Parses caller-supplied allergen lists and matches them against food allergen flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Allergen exclusion
//!
//! Callers supply allergens as a single comma-separated string (for example
//! `"milk, peanuts"`). Matching is case-insensitive substring containment
//! against the food's free-text `allergen_flags` column. Foods without
//! allergen data (NULL, empty, or the literal `"NaN"` left by the import)
//! never match and therefore survive every filter.

/// A parsed allergen exclusion filter
#[derive(Debug, Clone, Default)]
pub struct AllergenFilter {
    terms: Vec<String>,
}

impl AllergenFilter {
    /// Parse a raw comma-separated allergen string into a filter
    ///
    /// Terms are trimmed and lowercased; empty fragments (from `",,"` or
    /// trailing commas) are dropped. `None`, an empty string, and `"NaN"`
    /// all yield an empty filter that excludes nothing.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        if raw.trim().is_empty() || raw.trim().eq_ignore_ascii_case("nan") {
            return Self::default();
        }
        let terms = raw
            .split(',')
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    /// Whether the filter carries no terms (and so excludes nothing)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The parsed, lowercased terms
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Whether a food with the given allergen flags must be excluded
    ///
    /// Returns `true` when any filter term appears (case-insensitively) as a
    /// substring of the flags. Missing flags (`None`, empty, `"NaN"`) mean
    /// "no allergen data" and never exclude.
    #[must_use]
    pub fn excludes(&self, allergen_flags: Option<&str>) -> bool {
        if self.terms.is_empty() {
            return false;
        }
        let Some(flags) = allergen_flags else {
            return false;
        };
        if flags.is_empty() || flags.eq_ignore_ascii_case("nan") {
            return false;
        }
        let flags_lower = flags.to_lowercase();
        self.terms.iter().any(|term| flags_lower.contains(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes_trims_and_lowercases() {
        let filter = AllergenFilter::from_raw(Some(" Milk , PEANUTS ,, "));
        assert_eq!(filter.terms(), &["milk".to_owned(), "peanuts".to_owned()]);
    }

    #[test]
    fn test_empty_and_nan_inputs_yield_empty_filter() {
        assert!(AllergenFilter::from_raw(None).is_empty());
        assert!(AllergenFilter::from_raw(Some("")).is_empty());
        assert!(AllergenFilter::from_raw(Some("  ")).is_empty());
        assert!(AllergenFilter::from_raw(Some("NaN")).is_empty());
    }

    #[test]
    fn test_substring_containment_is_case_insensitive() {
        let filter = AllergenFilter::from_raw(Some("milk"));
        assert!(filter.excludes(Some("Contains Milk and Soy")));
        assert!(filter.excludes(Some("BUTTERMILK")));
        assert!(!filter.excludes(Some("Contains Soy")));
    }

    #[test]
    fn test_missing_flags_never_exclude() {
        let filter = AllergenFilter::from_raw(Some("milk,peanuts"));
        assert!(!filter.excludes(None));
        assert!(!filter.excludes(Some("")));
        assert!(!filter.excludes(Some("NaN")));
    }

    #[test]
    fn test_empty_filter_excludes_nothing() {
        let filter = AllergenFilter::from_raw(Some(" , ,"));
        assert!(filter.is_empty());
        assert!(!filter.excludes(Some("milk")));
    }
}
