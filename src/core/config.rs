//! Configuration for the campus portal CLI
//!
//! Settings live in `config.toml` (release) or `dconfig.toml` (debug) under the
//! platform config directory. Compiled-in defaults fill anything missing.

use super::catalog::{Catalog, CatalogError};
use super::fixtures::demo_catalog;
use super::models::DEFAULT_LOW_STOCK_PERCENT;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Compiled-in defaults for the current build profile
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder replaced by the config directory
const DIR_VARIABLE: &str = "$CAMPUS_ERP";

const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_SUBMIT_DELAY_MS: u64 = 800;

const fn default_low_stock_percent() -> u8 {
    DEFAULT_LOW_STOCK_PERCENT
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

const fn default_submit_delay_ms() -> u64 {
    DEFAULT_SUBMIT_DELAY_MS
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Catalog TOML file; empty means the bundled demo catalog
    #[serde(default)]
    pub catalog_file: String,
    /// Directory rendered HTML pages are written to
    #[serde(default)]
    pub pages_dir: String,
}

/// Library configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Low-stock threshold as a percentage of total copies
    #[serde(default = "default_low_stock_percent")]
    pub low_stock_percent: u8,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            low_stock_percent: DEFAULT_LOW_STOCK_PERCENT,
        }
    }
}

/// List and form behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Rows per list page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Simulated submission delay in milliseconds
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Library settings
    #[serde(default)]
    pub library: LibraryConfig,
    /// List and form settings
    #[serde(default)]
    pub ui: UiConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override catalog file
    pub catalog_file: Option<String>,
    /// Override pages output directory
    pub pages_dir: Option<String>,
    /// Override low-stock threshold
    pub low_stock_percent: Option<u8>,
    /// Override page size
    pub page_size: Option<usize>,
    /// Override simulated submit delay
    pub submit_delay_ms: Option<u64>,
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, String> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| format!("Invalid number for '{key}': '{value}'"))
}

impl Config {
    /// Get the `$CAMPUS_ERP` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/campuserp`
    /// - macOS: `~/Library/Application Support/campuserp`
    /// - Windows: `%APPDATA%\campuserp`
    #[must_use]
    pub fn get_campuserp_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("campuserp")
    }

    /// Fill empty string fields from `defaults`
    ///
    /// Numeric fields already get their defaults from serde.
    ///
    /// # Returns
    ///
    /// `true` if any field changed
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let fields = [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.paths.pages_dir, &defaults.paths.pages_dir),
        ];

        let mut changed = false;
        for (value, default) in fields {
            if value.is_empty() && !default.is_empty() {
                value.clone_from(default);
                changed = true;
            }
        }
        changed
    }

    /// Apply CLI-provided overrides for this run only
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file = Self::expand_variables(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(catalog_file) = &overrides.catalog_file {
            self.paths.catalog_file = Self::expand_variables(catalog_file);
        }
        if let Some(pages_dir) = &overrides.pages_dir {
            self.paths.pages_dir = Self::expand_variables(pages_dir);
        }
        if let Some(percent) = overrides.low_stock_percent {
            self.library.low_stock_percent = percent;
        }
        if let Some(page_size) = overrides.page_size {
            self.ui.page_size = page_size;
        }
        if let Some(delay) = overrides.submit_delay_ms {
            self.ui.submit_delay_ms = delay;
        }
    }

    /// Full path of the user config file
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_campuserp_dir().join(CONFIG_FILE_NAME)
    }

    /// Replace `$CAMPUS_ERP` with the config directory
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_campuserp_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Parse a TOML configuration string, expanding `$CAMPUS_ERP`
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.catalog_file = Self::expand_variables(&config.paths.catalog_file);
        config.paths.pages_dir = Self::expand_variables(&config.paths.pages_dir);

        Ok(config)
    }

    /// Compiled-in defaults for this build profile
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load the user config, creating it from defaults on first run
    ///
    /// Missing fields are merged in from defaults and written back. Any read or
    /// parse failure falls back to defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        match fs::read_to_string(&config_file).map(|content| Self::from_toml(&content)) {
            Ok(Ok(mut config)) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save();
                }
                config
            }
            _ => defaults,
        }
    }

    /// Write the config to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Catalog named by `paths.catalog_file`, or the demo catalog when unset
    ///
    /// # Errors
    /// Returns a [`CatalogError`] when the file cannot be read or parsed
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        if self.paths.catalog_file.is_empty() {
            crate::debug!("No catalog file configured, using demo catalog");
            return Ok(demo_catalog());
        }
        crate::debug!("Loading catalog from {}", self.paths.catalog_file);
        Catalog::load(&self.paths.catalog_file)
    }

    /// Simulated submission delay
    #[must_use]
    pub const fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.ui.submit_delay_ms)
    }

    /// Get a configuration value by key
    ///
    /// Keys: `level`, `file`, `verbose`, `catalog_file`, `pages_dir`,
    /// `low_stock_percent`, `page_size`, `submit_delay_ms`. Dashed spellings
    /// are accepted too.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "catalog_file" | "catalog-file" => Some(self.paths.catalog_file.clone()),
            "pages_dir" | "pages-dir" => Some(self.paths.pages_dir.clone()),
            "low_stock_percent" | "low-stock-percent" => {
                Some(self.library.low_stock_percent.to_string())
            }
            "page_size" | "page-size" => Some(self.ui.page_size.to_string()),
            "submit_delay_ms" | "submit-delay-ms" => Some(self.ui.submit_delay_ms.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates memory only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error for an unknown key or a value that does not parse
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "catalog_file" | "catalog-file" => self.paths.catalog_file = value.to_string(),
            "pages_dir" | "pages-dir" => self.paths.pages_dir = value.to_string(),
            "low_stock_percent" | "low-stock-percent" => {
                let percent: u8 = parse_number(key, value)?;
                if percent > 100 {
                    return Err(format!("'{key}' must be between 0 and 100, got {percent}"));
                }
                self.library.low_stock_percent = percent;
            }
            "page_size" | "page-size" => {
                let size: usize = parse_number(key, value)?;
                if size == 0 {
                    return Err(format!("'{key}' must be at least 1"));
                }
                self.ui.page_size = size;
            }
            "submit_delay_ms" | "submit-delay-ms" => {
                self.ui.submit_delay_ms = parse_number(key, value)?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset one key to its value in `defaults`
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "catalog_file" | "catalog-file" => self
                .paths
                .catalog_file
                .clone_from(&defaults.paths.catalog_file),
            "pages_dir" | "pages-dir" => self.paths.pages_dir.clone_from(&defaults.paths.pages_dir),
            "low_stock_percent" | "low-stock-percent" => {
                self.library.low_stock_percent = defaults.library.low_stock_percent;
            }
            "page_size" | "page-size" => self.ui.page_size = defaults.ui.page_size,
            "submit_delay_ms" | "submit-delay-ms" => {
                self.ui.submit_delay_ms = defaults.ui.submit_delay_ms;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Delete the config file so the next [`load()`](Config::load) recreates it
    ///
    /// Succeeds when there is no file.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  catalog_file = \"{}\"", self.paths.catalog_file)?;
        writeln!(f, "  pages_dir = \"{}\"", self.paths.pages_dir)?;

        writeln!(f, "\n[library]")?;
        writeln!(f, "  low_stock_percent = {}", self.library.low_stock_percent)?;

        writeln!(f, "\n[ui]")?;
        writeln!(f, "  page_size = {}", self.ui.page_size)?;
        writeln!(f, "  submit_delay_ms = {}", self.ui.submit_delay_ms)?;

        Ok(())
    }
}
