//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.drilldown/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DrilldownConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_demo: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    pub file: Option<String>,
    pub url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DEMO: &str = "settings";
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Built-in demo to show when no source is given ("settings", "form", "json").
    pub demo: String,
    /// JSON table document to load from disk instead of a demo.
    pub source_file: Option<PathBuf>,
    /// JSON table document to fetch over HTTP; wins over `source_file`.
    pub source_url: Option<String>,
    pub log_level: log::LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.drilldown/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".drilldown").join("config.toml"))
}

/// Load config from `~/.drilldown/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DrilldownConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DrilldownConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DrilldownConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(DrilldownConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: DrilldownConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Drilldown Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_demo = "settings"          # "settings", "form" or "json"
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"

# [source]
# file = "menu.json"                 # JSON table document on disk
# url = "https://example.com/menu.json"  # wins over file when both are set
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// The `cli_*` arguments come from CLI flags (None = not specified).
pub fn resolve(
    config: &DrilldownConfig,
    cli_demo: Option<&str>,
    cli_file: Option<&str>,
    cli_url: Option<&str>,
) -> ResolvedConfig {
    // Demo: CLI → env → config → default
    let demo = cli_demo
        .map(|s| s.to_string())
        .or_else(|| std::env::var("DRILLDOWN_DEMO").ok())
        .or_else(|| config.general.default_demo.clone())
        .unwrap_or_else(|| DEFAULT_DEMO.to_string());

    // Source file: CLI → env → config
    let source_file = cli_file
        .map(|s| s.to_string())
        .or_else(|| std::env::var("DRILLDOWN_FILE").ok())
        .or_else(|| config.source.file.clone())
        .map(PathBuf::from);

    // Source URL: CLI → env → config
    let source_url = cli_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("DRILLDOWN_URL").ok())
        .or_else(|| config.source.url.clone());

    // Log level: env → config → default; unparseable values fall back
    let log_level = std::env::var("DRILLDOWN_LOG")
        .ok()
        .or_else(|| config.general.log_level.clone())
        .and_then(|s| s.parse::<log::LevelFilter>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        demo,
        source_file,
        source_url,
        log_level,
    }
}
