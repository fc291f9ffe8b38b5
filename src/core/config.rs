//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.navlink/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, error, info, warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::linking::LinkingConfig;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavlinkConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    /// Inline route table. Loses to `linking_file` when both are set.
    pub linking: Option<LinkingConfig>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    /// Route table in its own TOML file, relative to `~/.navlink/`.
    pub linking_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub linking: LinkingConfig,
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

/// Returns `~/.navlink/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".navlink"))
}

/// Returns the path to `~/.navlink/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.navlink/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NavlinkConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<NavlinkConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(NavlinkConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(NavlinkConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit file.
pub fn load_config_from(path: &Path) -> Result<NavlinkConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: NavlinkConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Load a standalone route table file.
pub fn load_linking(path: &Path) -> Result<LinkingConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Navlink Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"
# linking_file = "linking.toml"      # Route table, relative to ~/.navlink/

# Inline route table, used when no linking_file is set.
# [linking]
# initial_route_name = "Home"
#
# [linking.screens.Home]
# path = ""
#
# [linking.screens.CentralPaneNavigator.screens.Report]
# path = "r/:reportID"
#
# [linking.screens.RightModalNavigator.screens.Settings.screens.Profile]
# path = "settings/profile"
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
/// `cli_linking` and `cli_log_level` are from CLI flags (None = not specified).
/// A route table file named by any layer that cannot be loaded is an error.
pub fn resolve(
    config: &NavlinkConfig,
    cli_linking: Option<&Path>,
    cli_log_level: Option<&str>,
) -> Result<ResolvedConfig, ConfigError> {
    // Log level: CLI → env → config → default
    let log_level = cli_log_level
        .map(|s| s.to_string())
        .or_else(|| std::env::var("NAVLINK_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .map(|level| parse_log_level(&level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    Ok(ResolvedConfig {
        log_level,
        linking: resolve_linking(config, cli_linking)?,
    })
}

fn parse_log_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or_else(|_| {
        warn!("Unknown log level '{}', using {}", level, DEFAULT_LOG_LEVEL);
        DEFAULT_LOG_LEVEL
    })
}

/// Resolves the route table: a file (CLI → env → config) wins over the
/// inline table, which wins over the built-in one.
fn resolve_linking(config: &NavlinkConfig, cli_linking: Option<&Path>) -> Result<LinkingConfig, ConfigError> {
    let file = cli_linking
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("NAVLINK_LINKING_FILE").ok().map(PathBuf::from))
        .or_else(|| {
            let file = config.general.linking_file.as_ref()?;
            // Relative to ~/.navlink/, like the config file itself
            Some(match config_dir() {
                Some(dir) => dir.join(file),
                None => PathBuf::from(file),
            })
        });

    if let Some(path) = file {
        return match load_linking(&path) {
            Ok(linking) => {
                info!("Loaded route table from {}", path.display());
                Ok(linking)
            }
            Err(e) => {
                error!("Failed to load route table {}: {}", path.display(), e);
                Err(e)
            }
        };
    }

    if let Some(ref linking) = config.linking {
        return Ok(linking.clone());
    }

    Ok(LinkingConfig::app_default())
}
