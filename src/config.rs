//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Source table configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("assets/healthcare.csv")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty means permissive
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Chart configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Number of equal-width histogram bins
    #[serde(default = "default_bins")]
    pub bins: usize,

    /// Billing slider step
    #[serde(default = "default_slider_step")]
    pub slider_step: f64,
}

fn default_bins() -> usize {
    10
}

fn default_slider_step() -> f64 {
    100.0
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bins: default_bins(),
            slider_step: default_slider_step(),
        }
    }
}

/// Page asset configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// SCSS source compiled at startup
    #[serde(default = "default_stylesheet")]
    pub stylesheet: PathBuf,

    /// Where the compiled CSS is written
    #[serde(default = "default_stylesheet_output")]
    pub stylesheet_output: PathBuf,
}

fn default_stylesheet() -> PathBuf {
    PathBuf::from("assets/style.scss")
}

fn default_stylesheet_output() -> PathBuf {
    PathBuf::from("assets/style.css")
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            stylesheet: default_stylesheet(),
            stylesheet_output: default_stylesheet_output(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for development
    Pretty,
    /// One JSON object per line, for production
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}. Use pretty or json", s)),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            Some(PathBuf::from("./healthdash.toml")),
            dirs::config_dir().map(|p| p.join("healthdash").join("config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("HEALTHDASH_DATA_PATH") {
            self.data.path = PathBuf::from(path);
        }

        if let Some(path) = lookup("HEALTHDASH_STYLESHEET") {
            self.assets.stylesheet = PathBuf::from(path);
        }
        if let Some(path) = lookup("HEALTHDASH_STYLESHEET_OUTPUT") {
            self.assets.stylesheet_output = PathBuf::from(path);
        }

        if let Some(host) = lookup("HEALTHDASH_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("HEALTHDASH_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid HEALTHDASH_PORT"),
            }
        }

        if let Some(level) = lookup("HEALTHDASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("HEALTHDASH_LOG_FORMAT") {
            match format.parse() {
                Ok(f) => self.logging.format = f,
                Err(e) => tracing::warn!("{}", e),
            }
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Healthdash Configuration
#
# Environment variables override these settings:
# - HEALTHDASH_DATA_PATH
# - HEALTHDASH_STYLESHEET
# - HEALTHDASH_STYLESHEET_OUTPUT
# - HEALTHDASH_HOST
# - HEALTHDASH_PORT
# - HEALTHDASH_LOG_LEVEL
# - HEALTHDASH_LOG_FORMAT

[data]
# CSV file with the healthcare records
path = "assets/healthcare.csv"

[api]
# Dashboard server host
host = "127.0.0.1"

# Dashboard server port
port = 8050

# Allowed CORS origins (empty = allow any)
cors_origins = []

[dashboard]
# Number of histogram bins
bins = 10

# Billing threshold slider step
slider_step = 100.0

[assets]
# SCSS source compiled when the server starts
stylesheet = "assets/style.scss"

# Compiled CSS output (must be writable)
stylesheet_output = "assets/style.css"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
