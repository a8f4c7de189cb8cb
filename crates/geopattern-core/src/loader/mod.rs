// crates/geopattern-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression) and turns JSON documents
//! into a [`CountryPatternsData`]. Two document shapes are accepted:
//! `{ "countries": [...] }` and a bare `[...]` array of countries.

use crate::error::Result;
use crate::model::{CountryPattern, CountryPatternsData};
use crate::validator::CountryValidator;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

mod bundled;
pub mod common_io;

#[cfg(feature = "bundled")]
pub use bundled::bundled;

impl CountryPatternsData {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "countries.json"
    }

    /// Parses a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Parses a JSON document from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_reader(reader)?;
        Self::from_json_value(value)
    }

    /// Reads a dataset file; `.json.gz` is accepted with the `compact` feature.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let data = Self::from_reader(reader)?;
        debug!(path = %path.display(), countries = data.len(), "loaded country dataset");
        Ok(data)
    }

    fn from_json_value(value: serde_json::Value) -> Result<Self> {
        if value.is_array() {
            let countries: Vec<CountryPattern> = serde_json::from_value(value)?;
            return Ok(Self { countries });
        }
        Ok(serde_json::from_value(value)?)
    }
}

impl CountryValidator {
    /// Parses `json` and builds a validator from it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::new(CountryPatternsData::from_json_str(json)?)
    }

    /// Reads a dataset file and builds a validator from it.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(CountryPatternsData::load_from_path(path)?)
    }
}
