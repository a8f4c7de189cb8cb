// crates/geopattern-core/src/validator.rs

//! # Country Validator
//!
//! The compiled pattern registry. All indexing and regex compilation happens
//! in [`CountryValidator::new`]; every query afterwards is a map lookup plus
//! at most one regex evaluation over immutable state, so a validator can be
//! shared across threads freely.

use crate::error::{PatternError, PatternKind, Result};
use crate::model::{CountryPattern, CountryPatternsData};
use crate::text::normalize_code;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::collections::hash_map::Entry as MapEntry;
use std::collections::HashMap;
use tracing::{debug, warn};

/// One registry slot: the record plus its compiled rules.
#[derive(Clone, Debug)]
pub(crate) struct Slot {
    /// Uppercased country code.
    pub(crate) key: String,
    pub(crate) record: CountryPattern,
    pub(crate) phone: Option<Regex>,
    pub(crate) postal: Option<Regex>,
}

/// Validates phone numbers and postal codes for the countries of a dataset.
///
/// Country codes are matched case-insensitively (`"us"`, `"Us"` and `"US"`
/// are the same country). Iteration order everywhere is the order in which
/// each code first appeared in the dataset.
///
/// A value that fails its pattern yields `Ok(false)`. Errors are reserved for
/// unknown countries and, for postal codes only, countries without a postal
/// system. See [`validate_phone`](Self::validate_phone) for the phone side.
#[derive(Clone, Debug)]
pub struct CountryValidator {
    pub(crate) slots: Vec<Slot>,
    index: HashMap<String, usize>,
}

impl CountryValidator {
    /// Builds the registry and compiles all patterns.
    ///
    /// Codes are uppercased. When two records share a code, the later record
    /// replaces the earlier one (including its patterns) but the code keeps
    /// the position of its first occurrence.
    ///
    /// # Errors
    ///
    /// [`PatternError::InvalidPattern`] if any phone or postal pattern fails
    /// to compile.
    pub fn new(data: CountryPatternsData) -> Result<Self> {
        let mut slots: Vec<Slot> = Vec::with_capacity(data.countries.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(data.countries.len());

        for record in data.countries {
            let key = normalize_code(&record.code);
            let phone = compile(&key, PatternKind::Phone, record.phone.pattern.as_deref())?;
            let postal = compile(&key, PatternKind::Postal, record.postal.pattern.as_deref())?;
            let slot = Slot {
                key: key.clone(),
                record,
                phone,
                postal,
            };

            match index.entry(key) {
                MapEntry::Occupied(existing) => {
                    let pos = *existing.get();
                    warn!(
                        code = %existing.key(),
                        replaced = %slots[pos].record.name,
                        by = %slot.record.name,
                        "duplicate country code, keeping the later record"
                    );
                    slots[pos] = slot;
                }
                MapEntry::Vacant(vacant) => {
                    vacant.insert(slots.len());
                    slots.push(slot);
                }
            }
        }

        let validator = Self { slots, index };
        let stats = validator.stats();
        debug!(
            countries = stats.countries,
            phone_patterns = stats.phone_patterns,
            postal_patterns = stats.postal_patterns,
            "country validator ready"
        );
        Ok(validator)
    }

    fn slot(&self, code: &str) -> Option<&Slot> {
        self.index
            .get(&normalize_code(code))
            .map(|&pos| &self.slots[pos])
    }

    fn require(&self, code: &str) -> Result<&Slot> {
        self.slot(code).ok_or_else(|| PatternError::CountryNotFound {
            code: code.to_string(),
        })
    }

    /// Checks `phone_number` against the country's phone pattern.
    ///
    /// The pattern is applied as written: an unanchored pattern succeeds on a
    /// substring match.
    ///
    /// A known country without a phone pattern returns `Ok(false)`. This is
    /// deliberately different from [`validate_postal`](Self::validate_postal),
    /// which treats a missing postal pattern as an error.
    ///
    /// # Errors
    ///
    /// [`PatternError::CountryNotFound`] if the code is not registered.
    pub fn validate_phone(&self, country_code: &str, phone_number: &str) -> Result<bool> {
        let slot = self.require(country_code)?;
        Ok(slot
            .phone
            .as_ref()
            .is_some_and(|re| re.is_match(phone_number)))
    }

    /// Checks `postal_code` against the country's postal pattern.
    ///
    /// # Errors
    ///
    /// - [`PatternError::CountryNotFound`] if the code is not registered.
    /// - [`PatternError::NoPostalSystem`] if the country has no postal pattern.
    pub fn validate_postal(&self, country_code: &str, postal_code: &str) -> Result<bool> {
        let slot = self.require(country_code)?;
        let re = slot
            .postal
            .as_ref()
            .ok_or_else(|| PatternError::NoPostalSystem {
                name: slot.record.name.clone(),
            })?;
        Ok(re.is_match(postal_code))
    }

    /// Case-insensitive lookup of the stored record.
    pub fn get_country(&self, country_code: &str) -> Option<&CountryPattern> {
        self.slot(country_code).map(|s| &s.record)
    }

    /// All registered codes, uppercased, in registry order.
    pub fn all_country_codes(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.key.as_str()).collect()
    }

    /// Whether a postal pattern is registered for the code.
    ///
    /// Returns `false` for unknown codes as well; never fails.
    pub fn has_postal_codes(&self, country_code: &str) -> bool {
        self.slot(country_code).is_some_and(|s| s.postal.is_some())
    }

    /// Whether a phone pattern is registered for the code. Never fails.
    pub fn has_phone_pattern(&self, country_code: &str) -> bool {
        self.slot(country_code).is_some_and(|s| s.phone.is_some())
    }

    /// All records in registry order.
    pub fn countries(&self) -> impl Iterator<Item = &CountryPattern> + '_ {
        self.slots.iter().map(|s| &s.record)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Compiles an optional pattern. An empty pattern counts as absent.
fn compile(code: &str, kind: PatternKind, pattern: Option<&str>) -> Result<Option<Regex>> {
    match pattern {
        None | Some("") => Ok(None),
        Some(src) => RegexBuilder::new(&ascii_classes(src))
            .build()
            .map(Some)
            .map_err(|source| PatternError::InvalidPattern {
                code: code.to_string(),
                kind,
                pattern: src.to_string(),
                source,
            }),
    }
}

/// Rewrites the Perl classes `\d`, `\D`, `\w` and `\W` into explicit ASCII
/// sets. Dataset patterns mean `0-9` by `\d`; the regex crate would accept
/// any Unicode digit.
///
/// The replacements are bracketed classes, which the regex crate also
/// accepts nested inside another class (`[\d-]` -> `[[0-9]-]`).
fn ascii_classes(src: &str) -> Cow<'_, str> {
    if !src.contains('\\') {
        return Cow::Borrowed(src);
    }

    let mut out = String::with_capacity(src.len() + 8);
    let mut chars = src.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('d') => out.push_str("[0-9]"),
            Some('D') => out.push_str("[^0-9]"),
            Some('w') => out.push_str("[0-9A-Za-z_]"),
            Some('W') => out.push_str("[^0-9A-Za-z_]"),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}
