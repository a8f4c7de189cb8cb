// crates/geopattern-core/src/lib.rs

//! # geopattern-core
//!
//! Validates phone numbers and postal codes against per-country regular
//! expressions, and offers lookup and search over a country dataset.
//!
//! The central type is [`CountryValidator`]. It is built once from a
//! [`CountryPatternsData`] value, compiles every pattern up front, and then
//! answers queries without further allocation of regexes.
//!
//! ```rust
//! use geopattern_core::prelude::*;
//!
//! let data = CountryPatternsData::from_json_str(r#"{
//!     "countries": [
//!         { "name": "United States", "code": "US", "flag": "🇺🇸",
//!           "phone":  { "pattern": "^\\d{3}-\\d{3}-\\d{4}$" },
//!           "postal": { "pattern": "^\\d{5}(-\\d{4})?$" } }
//!     ]
//! }"#)?;
//!
//! let validator = CountryValidator::new(data)?;
//! assert!(validator.validate_phone("us", "555-555-5555")?);
//! assert!(!validator.validate_postal("US", "1234")?);
//! # Ok::<(), geopattern_core::PatternError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
#[cfg(feature = "json")]
pub mod loader;
pub mod model;
pub mod prelude;
pub mod search;
pub mod text;
pub mod traits;
pub mod validator;

// Re-exports
pub use crate::common::RegistryStats;
pub use crate::error::{PatternError, PatternKind, Result};
pub use crate::model::{CountryPattern, CountryPatternsData, PhoneRule, PostalRule};
pub use crate::traits::NameMatch;
pub use crate::validator::CountryValidator;

#[cfg(feature = "bundled")]
pub use crate::loader::bundled;
