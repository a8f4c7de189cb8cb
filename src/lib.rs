//! geopattern-rs
//! =============
//!
//! Workspace host crate. It re-exports [`geopattern_core`] so the demos under
//! `demos/` can be run from the repository root:
//!
//! ```text
//! cargo run --example basic_usage
//! cargo run --example error_handling
//! cargo run --example custom_dataset -- path/to/countries.json.gz
//! ```

pub use geopattern_core::*;
