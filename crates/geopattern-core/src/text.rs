// crates/geopattern-core/src/text.rs

//! Small string helpers shared by the validator and the search functions.

/// Canonical registry key for a country code: the code in uppercase.
///
/// No trimming is applied; `" us"` and `"US"` are different keys.
///
/// ```rust
/// use geopattern_core::text::normalize_code;
///
/// assert_eq!(normalize_code("gb"), "GB");
/// assert_eq!(normalize_code("Us"), "US");
/// ```
#[inline]
pub fn normalize_code(code: &str) -> String {
    code.to_uppercase()
}

/// Case-insensitive substring test using plain Unicode lowercasing.
///
/// The needle is expected to be lowercased already, so a search loop can
/// fold it once.
#[inline]
pub fn contains_lowercase(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Convert a string into a folded key suitable for loose comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Côte d'Ivoire` -> `Cote d'Ivoire`)
/// 2\) Normalize to lowercase
///
/// The transliteration is best-effort and comes from the `deunicode` crate.
///
/// # Examples
///
/// ```rust
/// use geopattern_core::text::fold_key;
///
/// assert_eq!(fold_key("Åland Islands"), "aland islands");
/// assert_eq!(fold_key("CURAÇAO"), "curacao");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after [`fold_key`].
///
/// ```rust
/// use geopattern_core::text::equals_folded;
///
/// assert!(equals_folded("Réunion", "reunion"));
/// assert!(!equals_folded("Réunion", "Romania"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_code_keeps_whitespace() {
        assert_eq!(normalize_code(" us"), " US");
    }

    #[test]
    fn contains_lowercase_is_case_insensitive() {
        assert!(contains_lowercase("United States", "united"));
        assert!(contains_lowercase("United States", "ed st"));
        assert!(contains_lowercase("United States", ""));
        assert!(!contains_lowercase("United States", "kingdom"));
    }

    #[test]
    fn contains_lowercase_does_not_fold_accents() {
        assert!(!contains_lowercase("Côte d'Ivoire", "cote"));
        assert!(contains_lowercase("Côte d'Ivoire", "côte"));
    }

    #[test]
    fn fold_key_strips_diacritics() {
        assert_eq!(fold_key("São Tomé and Príncipe"), "sao tome and principe");
    }
}
