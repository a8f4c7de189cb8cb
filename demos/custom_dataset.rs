//! Custom dataset example for geopattern-rs
//!
//! Loads a dataset from a path given on the command line (plain `.json` or
//! gzipped `.json.gz`), falling back to the crate's default data file.
//!
//! ```text
//! cargo run --example custom_dataset -- path/to/countries.json
//! RUST_LOG=debug cargo run --example custom_dataset
//! ```

use geopattern_core::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args_os().nth(1).map(PathBuf::from).unwrap_or_else(|| {
        CountryPatternsData::default_data_dir().join(CountryPatternsData::default_dataset_filename())
    });

    println!("Loading {}", path.display());
    let validator = CountryValidator::load_from_path(&path)?;

    println!("{:<4} {:<28} {:>6} {:>7}", "CODE", "NAME", "PHONE", "POSTAL");
    for country in validator.countries() {
        let code = country.code();
        println!(
            "{:<4} {:<28} {:>6} {:>7}",
            code.to_uppercase(),
            country.name(),
            if validator.has_phone_pattern(code) { "yes" } else { "-" },
            if validator.has_postal_codes(code) { "yes" } else { "-" },
        );
    }

    let accented = validator.search_by_name_folded("cote");
    if !accented.is_empty() {
        println!("\nFolded search for \"cote\":");
        for c in accented {
            println!("  {} {}", c.flag(), c.name());
        }
    }

    Ok(())
}
