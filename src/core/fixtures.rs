//! Built-in demo catalog
//!
//! The fixtures ship inside the binary so the portal works with no setup.
//! A catalog file named by `paths.catalog_file` replaces them entirely.

use super::catalog::Catalog;

/// Demo catalog source, compiled in
const DEMO_CATALOG: &str = include_str!("../../assets/demo_catalog.toml");

/// Build the demo catalog
///
/// # Panics
/// Panics if the compiled-in fixtures are not a valid catalog
#[must_use]
pub fn demo_catalog() -> Catalog {
    Catalog::from_toml(DEMO_CATALOG).expect("Failed to parse compiled-in demo catalog")
}
