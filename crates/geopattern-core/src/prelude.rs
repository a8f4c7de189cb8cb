//! geopattern prelude: bring common types and traits into scope for demos.

pub use crate::common::RegistryStats;
pub use crate::error::{PatternError, PatternKind, Result};
pub use crate::model::{CountryPattern, CountryPatternsData, PhoneRule, PostalRule};
pub use crate::text::{equals_folded, fold_key, normalize_code};
pub use crate::traits::NameMatch;
pub use crate::validator::CountryValidator;

#[cfg(feature = "bundled")]
pub use crate::loader::bundled;
