// crates/geopattern-core/src/loader/bundled.rs

// ---------------------------------------------------------------------------
// FILE GUARD: only compiled with the 'bundled' feature.
// ---------------------------------------------------------------------------
#![cfg(feature = "bundled")]

use crate::error::Result;
use crate::model::CountryPatternsData;
use crate::validator::CountryValidator;
use once_cell::sync::OnceCell;

static BUNDLED_JSON: &str = include_str!("../../data/countries.json");

// Parsed at most once per process. Validators are still built by callers.
static BUNDLED: OnceCell<CountryPatternsData> = OnceCell::new();

/// The dataset shipped with this crate (`data/countries.json`).
pub fn bundled() -> Result<&'static CountryPatternsData> {
    BUNDLED.get_or_try_init(|| CountryPatternsData::from_json_str(BUNDLED_JSON))
}

impl CountryValidator {
    /// Builds a new validator over a copy of the bundled dataset.
    pub fn bundled() -> Result<Self> {
        Self::new(bundled()?.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_parses_once() {
        let a = bundled().unwrap();
        let b = bundled().unwrap();
        assert!(std::ptr::eq(a, b));
        assert!(!a.is_empty());
    }

    #[test]
    fn bundled_patterns_compile() {
        let v = CountryValidator::bundled().unwrap();
        assert_eq!(v.len(), bundled().unwrap().len());
    }
}
