// crates/geopattern-core/src/error.rs
use std::fmt;
use thiserror::Error;

/// Which rule of a country a pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Phone,
    Postal,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::Phone => f.write_str("phone"),
            PatternKind::Postal => f.write_str("postal"),
        }
    }
}

/// Errors raised while loading a dataset, building a validator or
/// validating a value.
///
/// A value that simply does not satisfy a pattern is never an error; it is
/// reported as `Ok(false)`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PatternError {
    /// The code has no registry entry. Carries the code as the caller wrote it.
    #[error("Country code \"{code}\" not found")]
    CountryNotFound { code: String },

    /// The country is known but has no postal code system.
    #[error("{name} does not use postal codes")]
    NoPostalSystem { name: String },

    /// A stored pattern is not a valid regular expression.
    #[error("invalid {kind} pattern for {code} ({pattern:?}): {source}")]
    InvalidPattern {
        code: String,
        kind: PatternKind,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Dataset file missing.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PatternError>;
