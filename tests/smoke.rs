//! Integration smoke tests for `campus_erp`

use campus_erp::core::fixtures::demo_catalog;
use campus_erp::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn demo_catalog_is_consistent() {
    let catalog = demo_catalog();
    assert!(!catalog.institution.is_empty());
    assert_eq!(catalog.validate_links(), Ok(()));
}
