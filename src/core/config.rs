//! Configuration module for the course catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the catalog's config directory
const HOME_VARIABLE: &str = "$CATALOG_HOME";

/// Port used when none is configured
pub const DEFAULT_PORT: u16 = 3010;

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

/// Database configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite database file; empty means an in-memory store seeded from `paths.data_file`
    #[serde(default)]
    pub path: String,
}

/// HTTP server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default)]
    pub host: String,
    /// Bind port (0 falls back to the default)
    #[serde(default)]
    pub port: u16,
    /// Mount point of the JSON API (e.g., "/api/v1")
    #[serde(default)]
    pub base_path: String,
    /// Public origin used in hypermedia links; empty means derive from the Host header
    #[serde(default)]
    pub public_url: String,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Curriculum JSON file used for seeding
    #[serde(default)]
    pub data_file: String,
    /// Directory for rendered dashboard files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Database settings
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
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
    /// Override database path
    pub db_path: Option<String>,
    /// Override bind host
    pub host: Option<String>,
    /// Override bind port
    pub port: Option<u16>,
    /// Override curriculum data file
    pub data_file: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$CATALOG_HOME` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/coursecatalog`
    /// - macOS: `~/Library/Application Support/coursecatalog`
    /// - Windows: `%APPDATA%\coursecatalog`
    #[must_use]
    pub fn get_catalog_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("coursecatalog")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty (or zero, for the port) in the current config and set in
    /// the defaults are updated, so upgrades pick up new settings without touching user
    /// values.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        let mut fill = |target: &mut String, default: &String| {
            if target.is_empty() && !default.is_empty() {
                target.clone_from(default);
                changed = true;
            }
        };

        fill(&mut self.logging.level, &defaults.logging.level);
        fill(&mut self.logging.file, &defaults.logging.file);
        fill(&mut self.database.path, &defaults.database.path);
        fill(&mut self.server.host, &defaults.server.host);
        fill(&mut self.server.base_path, &defaults.server.base_path);
        fill(&mut self.server.public_url, &defaults.server.public_url);
        fill(&mut self.paths.data_file, &defaults.paths.data_file);
        fill(&mut self.paths.reports_dir, &defaults.paths.reports_dir);

        if self.server.port == 0 && defaults.server.port != 0 {
            self.server.port = defaults.server.port;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides affect this run only; the configuration file is left untouched.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(db_path) = &overrides.db_path {
            self.database.path.clone_from(db_path);
        }

        if let Some(host) = &overrides.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }

        if let Some(data_file) = &overrides.data_file {
            self.paths.data_file.clone_from(data_file);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_catalog_dir`](Self::get_catalog_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_catalog_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$CATALOG_HOME` in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(HOME_VARIABLE) {
            let catalog_dir = Self::get_catalog_dir();
            value.replace(HOME_VARIABLE, catalog_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults; `$CATALOG_HOME` is expanded in path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.database.path = Self::expand_variables(&config.database.path);
        config.paths.data_file = Self::expand_variables(&config.paths.data_file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// An existing file has missing fields filled from the defaults (and is re-saved when
    /// that changed anything). On first run the directory and file are created. Any read or
    /// parse failure falls back to the defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config cannot be
    /// serialized, or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Effective bind port
    #[must_use]
    pub const fn port(&self) -> u16 {
        if self.server.port == 0 {
            DEFAULT_PORT
        } else {
            self.server.port
        }
    }

    /// API mount point, normalised to a leading slash and no trailing slash
    #[must_use]
    pub fn base_path(&self) -> String {
        let trimmed = self.server.base_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        }
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `db_path`, `host`, `port`, `base_path`,
    /// `public_url`, `data_file`, `reports_dir` (dashes are accepted in place of
    /// underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key.replace('-', "_").as_str() {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "db_path" => Some(self.database.path.clone()),
            "host" => Some(self.server.host.clone()),
            "port" => Some(self.server.port.to_string()),
            "base_path" => Some(self.server.base_path.clone()),
            "public_url" => Some(self.server.public_url.clone()),
            "data_file" => Some(self.paths.data_file.clone()),
            "reports_dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be parsed
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key.replace('-', "_").as_str() {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "db_path" => self.database.path = value.to_string(),
            "host" => self.server.host = value.to_string(),
            "port" => {
                self.server.port = value
                    .parse::<u16>()
                    .map_err(|_| format!("Invalid port value: '{value}'"))?;
            }
            "base_path" => self.server.base_path = value.to_string(),
            "public_url" => self.server.public_url = value.to_string(),
            "data_file" => self.paths.data_file = value.to_string(),
            "reports_dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key.replace('-', "_").as_str() {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "db_path" => self.database.path.clone_from(&defaults.database.path),
            "host" => self.server.host.clone_from(&defaults.server.host),
            "port" => self.server.port = defaults.server.port,
            "base_path" => self
                .server
                .base_path
                .clone_from(&defaults.server.base_path),
            "public_url" => self
                .server
                .public_url
                .clone_from(&defaults.server.public_url),
            "data_file" => self.paths.data_file.clone_from(&defaults.paths.data_file),
            "reports_dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load) recreates it.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
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

        writeln!(f, "\n[database]")?;
        writeln!(f, "  path = \"{}\"", self.database.path)?;

        writeln!(f, "\n[server]")?;
        writeln!(f, "  host = \"{}\"", self.server.host)?;
        writeln!(f, "  port = {}", self.server.port)?;
        writeln!(f, "  base_path = \"{}\"", self.server.base_path)?;
        writeln!(f, "  public_url = \"{}\"", self.server.public_url)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_file = \"{}\"", self.paths.data_file)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}
