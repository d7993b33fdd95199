//! Patient attributes used by the prescription rules.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static LEADING_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").expect("valid integer pattern"));

static LEADING_DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+))").expect("valid decimal pattern")
});

/// Patient fields exactly as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PatientForm {
    pub age: String,
    pub weight: String,
    /// Comma or semicolon separated, e.g. "Penicillin, Sulfa drugs".
    pub allergies: String,
    /// Comma or semicolon separated, e.g. "Diabetes, Hypertension".
    pub conditions: String,
}

/// Parsed patient attributes.
///
/// Allergies and conditions are stored lowercased so lookups are
/// case-insensitive. Age and weight are `None` when the form text has no
/// leading number.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct PatientProfile {
    pub age_years: Option<i64>,
    pub weight_kg: Option<f64>,
    pub allergies: BTreeSet<String>,
    pub conditions: BTreeSet<String>,
}

impl PatientProfile {
    /// Builds a profile from raw form text. Never fails.
    pub fn from_form(form: &PatientForm) -> Self {
        Self {
            age_years: parse_leading_integer(&form.age),
            weight_kg: parse_leading_decimal(&form.weight),
            allergies: split_list(&form.allergies),
            conditions: split_list(&form.conditions),
        }
    }

    /// Returns true if any recorded allergy mentions `substance`.
    pub fn has_allergy(&self, substance: &str) -> bool {
        let needle = substance.to_lowercase();
        self.allergies.iter().any(|allergy| allergy.contains(&needle))
    }
}

#[cfg(test)]
impl PatientProfile {
    pub(crate) fn with_allergy(mut self, allergy: &str) -> Self {
        let normalized = allergy.trim().to_lowercase();
        if !normalized.is_empty() {
            self.allergies.insert(normalized);
        }
        self
    }

    pub(crate) fn with_age(mut self, years: i64) -> Self {
        self.age_years = Some(years);
        self
    }
}

/// Reads an integer prefix: `"10"`, `" 12 years"` and `"12.5"` all give a
/// value, `"ten"` gives `None`.
pub fn parse_leading_integer(text: &str) -> Option<i64> {
    LEADING_INTEGER
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

/// Reads a decimal prefix: `"70.5kg"` gives `70.5`.
pub fn parse_leading_decimal(text: &str) -> Option<f64> {
    LEADING_DECIMAL
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

fn split_list(text: &str) -> BTreeSet<String> {
    text.split([',', ';', '\n'])
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(age: &str, weight: &str, allergies: &str, conditions: &str) -> PatientForm {
        PatientForm {
            age: age.to_string(),
            weight: weight.to_string(),
            allergies: allergies.to_string(),
            conditions: conditions.to_string(),
        }
    }

    mod numbers {
        use super::*;

        #[test]
        fn age_reads_integer_prefix() {
            assert_eq!(parse_leading_integer("10"), Some(10));
            assert_eq!(parse_leading_integer("  12 years"), Some(12));
            assert_eq!(parse_leading_integer("15.9"), Some(15));
            assert_eq!(parse_leading_integer("-3"), Some(-3));
        }

        #[test]
        fn age_without_digits_is_none() {
            assert_eq!(parse_leading_integer(""), None);
            assert_eq!(parse_leading_integer("ten"), None);
            assert_eq!(parse_leading_integer("about 10"), None);
        }

        #[test]
        fn weight_reads_decimal_prefix() {
            assert_eq!(parse_leading_decimal("70.5kg"), Some(70.5));
            assert_eq!(parse_leading_decimal("80"), Some(80.0));
            assert_eq!(parse_leading_decimal(".5"), Some(0.5));
            assert_eq!(parse_leading_decimal("heavy"), None);
        }

        #[test]
        fn non_ascii_digits_are_not_numbers() {
            assert_eq!(parse_leading_integer("\u{0661}\u{0662}"), None);
            assert_eq!(parse_leading_decimal("\u{0967}\u{0966}kg"), None);
        }
    }

    mod profile {
        use super::*;

        #[test]
        fn from_form_parses_every_field() {
            let profile = PatientProfile::from_form(&form(
                "34",
                "72.4",
                "Penicillin, Sulfa drugs",
                "Diabetes; Hypertension",
            ));
            assert_eq!(profile.age_years, Some(34));
            assert_eq!(profile.weight_kg, Some(72.4));
            assert!(profile.allergies.contains("penicillin"));
            assert!(profile.allergies.contains("sulfa drugs"));
            assert!(profile.conditions.contains("hypertension"));
        }

        #[test]
        fn empty_form_gives_empty_profile() {
            assert_eq!(PatientProfile::from_form(&PatientForm::default()), PatientProfile::default());
        }

        #[test]
        fn allergy_lookup_is_case_insensitive_and_partial() {
            let profile = PatientProfile::from_form(&form("", "", "PENICILLIN G", ""));
            assert!(profile.has_allergy("penicillin"));
            assert!(profile.has_allergy("Penicillin"));
            assert!(!profile.has_allergy("aspirin"));
        }

        #[test]
        fn with_allergy_normalizes_and_skips_blank() {
            let profile = PatientProfile::default().with_allergy("  Latex ").with_allergy("  ");
            assert_eq!(profile.allergies.len(), 1);
            assert!(profile.allergies.contains("latex"));
        }

        #[test]
        fn duplicate_allergies_collapse() {
            let profile = PatientProfile::from_form(&form("", "", "Penicillin, penicillin", ""));
            assert_eq!(profile.allergies.len(), 1);
        }
    }
}
