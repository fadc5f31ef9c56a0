//! Integration tests for configuration management

use campus_erp::config::{Config, ConfigOverrides};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.pages_dir.is_empty(),
        "Default pages_dir should not be empty"
    );
    assert!(
        config.paths.catalog_file.is_empty(),
        "Default catalog is the bundled demo catalog"
    );
    assert_eq!(config.library.low_stock_percent, 30);
    assert!(config.ui.page_size > 0);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
catalog_file = "/srv/erp/catalog.toml"
pages_dir = "./pages"

[library]
low_stock_percent = 25

[ui]
page_size = 20
submit_delay_ms = 150
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.catalog_file, "/srv/erp/catalog.toml");
    assert_eq!(config.paths.pages_dir, "./pages");
    assert_eq!(config.library.low_stock_percent, 25);
    assert_eq!(config.ui.page_size, 20);
    assert_eq!(config.submit_delay(), Duration::from_millis(150));
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    // numeric sections fall back to built-in defaults
    assert_eq!(config.library.low_stock_percent, 30);
    assert_eq!(config.ui.page_size, 10);
    assert_eq!(config.ui.submit_delay_ms, 800);
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$CAMPUS_ERP/test.log"

[paths]
pages_dir = "$CAMPUS_ERP/pages"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("campuserp"));
    assert!(!config.logging.file.contains("$CAMPUS_ERP"));
    assert!(config.paths.pages_dir.contains("campuserp"));
    assert!(!config.paths.pages_dir.contains("$CAMPUS_ERP"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config.set("verbose", "true").expect("Failed to set verbose");
    assert!(config.logging.verbose);

    config
        .set("low-stock-percent", "45")
        .expect("Failed to set threshold");
    assert_eq!(config.get("low_stock_percent").unwrap(), "45");

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_rejects_bad_numbers() {
    let mut config = Config::from_defaults();

    assert!(config.set("low_stock_percent", "many").is_err());
    assert!(config.set("low_stock_percent", "101").is_err());
    assert!(config.set("page_size", "0").is_err());
    assert!(config.set("verbose", "maybe").is_err());
    assert_eq!(config.library.low_stock_percent, 30);
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config.set("page_size", "50").expect("Failed to set page size");

    config.unset("level", &defaults).expect("Failed to unset level");
    config
        .unset("page-size", &defaults)
        .expect("Failed to unset page size");
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.ui.page_size, defaults.ui.page_size);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_reload_through_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config
        .set("catalog_file", "/data/catalog.toml")
        .expect("Failed to set catalog");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.paths.catalog_file, "/data/catalog.toml");
    assert_eq!(loaded.ui.page_size, config.ui.page_size);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        catalog_file: Some("./catalog.toml".to_string()),
        pages_dir: Some("./out".to_string()),
        low_stock_percent: Some(50),
        page_size: Some(3),
        submit_delay_ms: Some(0),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.catalog_file, "./catalog.toml");
    assert_eq!(config.paths.pages_dir, "./out");
    assert_eq!(config.library.low_stock_percent, 50);
    assert_eq!(config.ui.page_size, 3);
    assert_eq!(config.submit_delay(), Duration::ZERO);
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.ui.page_size;

    config.apply_overrides(&ConfigOverrides {
        level: Some("debug".to_string()),
        ..Default::default()
    });

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.ui.page_size, before);
}

#[test]
fn test_config_display_format() {
    let display_str = Config::from_defaults().to_string();

    for section in ["[logging]", "[paths]", "[library]", "[ui]"] {
        assert!(display_str.contains(section), "missing {section}");
    }
    assert!(display_str.contains("low_stock_percent = 30"));
    assert!(display_str.contains("catalog_file"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
file = ""

[paths]
pages_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.logging.file, defaults.logging.file);
    assert_eq!(config.paths.pages_dir, defaults.paths.pages_dir);
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    config.merge_defaults(&Config::from_defaults());

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
}

#[test]
fn test_load_catalog_defaults_to_demo() {
    let config = Config::from_toml("").expect("Empty config should parse");

    let catalog = config.load_catalog().expect("Demo catalog should load");
    assert!(catalog.student("21CSE007").is_some());
}

#[test]
fn test_load_catalog_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let catalog_file = temp_dir.path().join("catalog.toml");
    fs::write(
        &catalog_file,
        r#"
institution = "Test College"

[[degrees]]
id = "deg-bsc"
name = "Bachelor of Science"
code = "B.Sc"
type = "undergraduate"
duration = 3
total_semesters = 6
"#,
    )
    .expect("Failed to write catalog");

    let mut config = Config::from_defaults();
    config
        .set("catalog_file", catalog_file.to_str().unwrap())
        .unwrap();

    let catalog = config.load_catalog().expect("Catalog should load");
    assert_eq!(catalog.institution, "Test College");
    assert_eq!(catalog.degrees.len(), 1);
    assert!(catalog.students.is_empty());

    config.set("catalog_file", "/definitely/missing.toml").unwrap();
    assert!(config.load_catalog().is_err());
}

#[test]
fn test_get_campuserp_dir() {
    let dir = Config::get_campuserp_dir();

    assert!(dir.to_string_lossy().contains("campuserp"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
