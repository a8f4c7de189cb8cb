//! Basic usage example for geopattern-rs
//!
//! This example demonstrates how to:
//! - Build a validator from the bundled dataset
//! - Validate phone numbers and postal codes
//! - Look up and search countries

use geopattern_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== geopattern-rs Basic Usage Example ===\n");

    let validator = CountryValidator::bundled()?;
    let stats = validator.stats();
    println!(
        "✓ Validator ready: {} countries, {} phone rules, {} postal rules\n",
        stats.countries, stats.phone_patterns, stats.postal_patterns
    );

    // Example 1: Phone numbers
    println!("--- Example 1: Phone numbers ---");
    for (code, number) in [("us", "555-555-5555"), ("US", "123"), ("FR", "06 12 34 56 78")] {
        println!("  {code} {number:<18} -> {}", validator.validate_phone(code, number)?);
    }
    println!();

    // Example 2: Postal codes
    println!("--- Example 2: Postal codes ---");
    for (code, postal) in [("US", "12345-6789"), ("US", "1234"), ("CA", "K1A 0B1")] {
        println!("  {code} {postal:<12} -> {}", validator.validate_postal(code, postal)?);
    }
    println!();

    // Example 3: Lookup
    println!("--- Example 3: Lookup by code ---");
    if let Some(country) = validator.get_country("gb") {
        println!("  {} {} ({})", country.flag(), country.name(), country.code());
        println!("  Phone pattern:  {:?}", country.phone_pattern());
        println!("  Postal pattern: {:?}", country.postal_pattern());
    }
    println!();

    // Example 4: Search
    println!("--- Example 4: Search by name ---");
    for country in validator.search_by_name("united") {
        println!("  - {} ({})", country.name(), country.code());
    }
    println!();

    // Example 5: Which countries have no postal codes?
    println!("--- Example 5: Countries without postal codes ---");
    for code in validator.all_country_codes() {
        if !validator.has_postal_codes(code) {
            println!("  - {code}");
        }
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
