// crates/geopattern-core/src/model.rs
use serde::{Deserialize, Serialize};

/// Phone rule of a country. Both fields are optional so datasets without
/// phone support deserialize unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneRule {
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Postal rule of a country.
///
/// `pattern: None` (JSON `null` or a missing key) means the country has no
/// postal code system.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalRule {
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A single country entry as it comes from the dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryPattern {
    pub name: String,
    pub code: String,
    /// Display glyph, e.g. "🇩🇪".
    #[serde(default)]
    pub flag: String,
    #[serde(default)]
    pub phone: PhoneRule,
    #[serde(default)]
    pub postal: PostalRule,
}

impl CountryPattern {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }

    pub fn phone_pattern(&self) -> Option<&str> {
        self.phone.pattern.as_deref()
    }

    pub fn postal_pattern(&self) -> Option<&str> {
        self.postal.pattern.as_deref()
    }
}

/// The whole dataset: an ordered list of countries.
///
/// Serialized as `{ "countries": [...] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryPatternsData {
    pub countries: Vec<CountryPattern>,
}

impl CountryPatternsData {
    pub fn new(countries: Vec<CountryPattern>) -> Self {
        Self { countries }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl From<Vec<CountryPattern>> for CountryPatternsData {
    fn from(countries: Vec<CountryPattern>) -> Self {
        Self { countries }
    }
}

impl FromIterator<CountryPattern> for CountryPatternsData {
    fn from_iter<I: IntoIterator<Item = CountryPattern>>(iter: I) -> Self {
        Self {
            countries: iter.into_iter().collect(),
        }
    }
}
