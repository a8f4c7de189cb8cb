//! Error handling example for geopattern-rs
//!
//! This example demonstrates the difference between a value that fails its
//! pattern (`Ok(false)`) and the error cases.

use geopattern_core::prelude::*;

fn main() -> Result<()> {
    println!("=== geopattern-rs Error Handling Example ===\n");

    let validator = CountryValidator::bundled()?;

    // Example 1: Unknown country codes
    println!("--- Example 1: Unknown country codes ---");
    for code in ["XX", "zz", ""] {
        match validator.validate_phone(code, "123") {
            Ok(valid) => println!("  {code:?}: valid = {valid}"),
            Err(e) => println!("  {code:?}: error: {e}"),
        }
    }
    println!();

    // Example 2: Countries without a postal system
    println!("--- Example 2: Countries without postal codes ---");
    for code in ["HK", "AE", "US"] {
        match validator.validate_postal(code, "00000") {
            Ok(valid) => println!("  {code}: valid = {valid}"),
            Err(PatternError::NoPostalSystem { name }) => {
                println!("  {code}: {name} has no postal codes")
            }
            Err(e) => return Err(e),
        }
    }
    println!();

    // Example 3: Checking first instead of matching on errors
    println!("--- Example 3: Check before validating ---");
    let code = "QA";
    if validator.get_country(code).is_none() {
        println!("  {code} is not in the dataset");
    } else if !validator.has_postal_codes(code) {
        println!("  {code} is known but has no postal codes");
    }
    println!();

    // Example 4: Broken datasets fail at construction
    println!("--- Example 4: Invalid pattern ---");
    let broken = r#"{ "countries": [ { "name": "Broken", "code": "BK", "phone": { "pattern": "(" } } ] }"#;
    match CountryValidator::from_json_str(broken) {
        Ok(_) => println!("  unexpectedly built"),
        Err(e) => println!("  ✗ {e}"),
    }

    Ok(())
}
