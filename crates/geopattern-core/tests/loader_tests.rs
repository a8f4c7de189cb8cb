//! Loading datasets from disk.

use geopattern_core::prelude::*;
use std::io::Write;

const SMALL: &str = r#"{
    "countries": [
        { "name": "Canada", "code": "CA", "flag": "🇨🇦",
          "phone": { "pattern": "^\\d{10}$" },
          "postal": { "pattern": "^[A-Za-z]\\d[A-Za-z] ?\\d[A-Za-z]\\d$" } }
    ]
}"#;

#[test]
fn loads_plain_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(SMALL.as_bytes()).unwrap();

    let v = CountryValidator::load_from_path(file.path()).unwrap();
    assert_eq!(v.all_country_codes(), vec!["CA"]);
    assert!(v.validate_postal("ca", "K1A 0B1").unwrap());
}

#[cfg(feature = "compact")]
#[test]
fn loads_gzipped_json_file() {
    use flate2::{write::GzEncoder, Compression};

    let file = tempfile::Builder::new().suffix(".json.gz").tempfile().unwrap();
    let mut encoder = GzEncoder::new(file.reopen().unwrap(), Compression::default());
    encoder.write_all(SMALL.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let data = CountryPatternsData::load_from_path(file.path()).unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data.countries[0].name, "Canada");
}

#[test]
fn missing_file_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = CountryPatternsData::load_from_path(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, PatternError::NotFound(_)));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn garbage_file_reports_json_error() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(b"countries: [").unwrap();
    let err = CountryPatternsData::load_from_path(file.path()).unwrap_err();
    assert!(matches!(err, PatternError::Json(_)));
}

#[test]
fn default_dataset_file_matches_bundled_copy() {
    let path = CountryPatternsData::default_data_dir()
        .join(CountryPatternsData::default_dataset_filename());
    let from_disk = CountryPatternsData::load_from_path(path).unwrap();
    assert_eq!(&from_disk, bundled().unwrap());
}

#[test]
fn dataset_round_trips_through_serde() {
    let data = bundled().unwrap();
    let json = serde_json::to_string(data).unwrap();
    let back = CountryPatternsData::from_json_str(&json).unwrap();
    assert_eq!(&back, data);
}
