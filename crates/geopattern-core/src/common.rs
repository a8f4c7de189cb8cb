// crates/geopattern-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a validator.
///
/// Returned by [`CountryValidator::stats`](crate::CountryValidator::stats).
/// Counts reflect the registry after duplicate codes were collapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub countries: usize,
    pub phone_patterns: usize,
    pub postal_patterns: usize,
}
