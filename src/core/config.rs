//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.emodo/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ============================================================================
// Config Structs (sparse TOML: everything optional)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EmodoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    /// Extra word → emoji pairs, merged over the builtin dictionary
    /// at startup. Custom entries win on collision.
    #[serde(default)]
    pub mappings: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    pub fn to_filter(self) -> simplelog::LevelFilter {
        match self {
            LogLevel::Off => simplelog::LevelFilter::Off,
            LogLevel::Error => simplelog::LevelFilter::Error,
            LogLevel::Warn => simplelog::LevelFilter::Warn,
            LogLevel::Info => simplelog::LevelFilter::Info,
            LogLevel::Debug => simplelog::LevelFilter::Debug,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(LogLevel::Off),
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(()),
        }
    }
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LogLevel,
    pub mappings: HashMap<String, String>,
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

/// Returns the path to `~/.emodo/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".emodo").join("config.toml"))
}

/// Load config, honoring a `--config <path>` override.
///
/// Without an override: if `~/.emodo/config.toml` doesn't exist,
/// generates a commented-out default there and returns
/// `EmodoConfig::default()`. With an override the file must exist.
/// A malformed file returns `ConfigError::Parse`.
pub fn load_config(path_override: Option<&Path>) -> Result<EmodoConfig, ConfigError> {
    let path = match path_override {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(EmodoConfig::default());
            }
        },
    };

    if !path.exists() {
        if path_override.is_some() {
            return Err(ConfigError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("config file not found: {}", path.display()),
            )));
        }
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(EmodoConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: EmodoConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Emodo Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"          # "off", "error", "warn", "info", "debug"

# Extra word → emoji pairs, merged over the builtin dictionary.
# Custom entries win when a word is defined in both.
# [mappings]
# taco = "🌮"
# cafe = "☕"
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

/// Resolve the final config by collapsing: defaults → config file → env → CLI.
///
/// `cli_log_level` is from the CLI flag (None = not specified).
pub fn resolve(config: &EmodoConfig, cli_log_level: Option<LogLevel>) -> ResolvedConfig {
    let env_log_level = std::env::var("EMODO_LOG_LEVEL").ok();
    resolve_with_env(config, cli_log_level, env_log_level.as_deref())
}

/// Pure resolution core: the env layer is a parameter so the hierarchy
/// is testable without mutating process environment.
fn resolve_with_env(
    config: &EmodoConfig,
    cli_log_level: Option<LogLevel>,
    env_log_level: Option<&str>,
) -> ResolvedConfig {
    // Log level: CLI → env → config → default
    let log_level = cli_log_level
        .or_else(|| env_log_level.and_then(|s| s.parse().ok()))
        .or(config.general.log_level)
        .unwrap_or_default();

    ResolvedConfig {
        log_level,
        mappings: config.mappings.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = EmodoConfig::default();
        assert!(config.mappings.is_empty());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = EmodoConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.log_level, LogLevel::Info);
        assert!(resolved.mappings.is_empty());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = EmodoConfig {
            general: GeneralConfig {
                log_level: Some(LogLevel::Debug),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_resolve_cli_log_level_wins() {
        let config = EmodoConfig {
            general: GeneralConfig {
                log_level: Some(LogLevel::Debug),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(LogLevel::Off));
        assert_eq!(resolved.log_level, LogLevel::Off);
    }

    #[test]
    fn test_toml_with_mappings_parses() {
        let toml_str = r#"
[general]
log_level = "debug"

[mappings]
taco = "🌮"
cafe = "☕"
"#;
        let config: EmodoConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, Some(LogLevel::Debug));
        assert_eq!(config.mappings.len(), 2);
        assert_eq!(config.mappings["taco"], "🌮");
        assert_eq!(config.mappings["cafe"], "☕");
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[mappings]
taco = "🌮"
"#;
        let config: EmodoConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.mappings.len(), 1);
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_log_level_from_str() {
        assert_eq!("debug".parse(), Ok(LogLevel::Debug));
        assert_eq!("WARN".parse(), Ok(LogLevel::Warn));
        assert_eq!("bogus".parse::<LogLevel>(), Err(()));
    }

    #[test]
    fn test_env_log_level_beats_file_and_loses_to_cli() {
        let config = EmodoConfig {
            general: GeneralConfig {
                log_level: Some(LogLevel::Warn),
            },
            ..Default::default()
        };

        let resolved = resolve_with_env(&config, None, Some("debug"));
        assert_eq!(resolved.log_level, LogLevel::Debug, "env wins over file");

        let resolved = resolve_with_env(&config, Some(LogLevel::Off), Some("debug"));
        assert_eq!(resolved.log_level, LogLevel::Off, "CLI wins over env");

        // Unparseable env value falls through to the file layer
        let resolved = resolve_with_env(&config, None, Some("bogus"));
        assert_eq!(resolved.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_load_config_reads_override_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[general]
log_level = "debug"

[mappings]
taco = "🌮"
"#,
        )
        .unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.general.log_level, Some(LogLevel::Debug));
        assert_eq!(config.mappings["taco"], "🌮");
    }

    #[test]
    fn test_load_config_missing_override_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let err = load_config(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)), "got {err}");
    }

    #[test]
    fn test_load_config_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\nlog_level = ").unwrap();

        let err = load_config(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got {err}");
    }

    #[test]
    fn test_generated_default_config_is_valid_and_sparse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh").join("config.toml");

        generate_default_config(&path);
        assert!(path.exists());

        // Every option is commented out, so the file parses to defaults
        let contents = fs::read_to_string(&path).unwrap();
        let config: EmodoConfig = toml::from_str(&contents).unwrap();
        assert!(config.general.log_level.is_none());
        assert!(config.mappings.is_empty());
    }
}
