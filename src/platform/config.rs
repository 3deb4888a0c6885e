// CocosProject - platform/config.rs
//
// Tool settings: config directory resolution and config.toml loading with
// validation. Uses the `directories` crate for XDG (Linux), AppData
// (Windows) and Library (macOS) locations.

use crate::core::model::Platform;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved directory holding the tool's config.toml.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// e.g. ~/.config/cocos-project/ or %APPDATA%\cocos-project\config\
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored so a newer config file still works
/// with an older binary.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[platform]` section.
    pub platform: PlatformSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[platform]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PlatformSection {
    /// Platform selected when the CLI does not name one.
    pub default: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated tool configuration derived from config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Platform to prefer when no `--platform` is given.
    pub default_platform: Option<Platform>,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

/// Location of config.toml inside `config_dir`.
pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(constants::CONFIG_FILE_NAME)
}

/// Load and validate config.toml from `config_dir`.
///
/// Returns the validated config and a list of non-fatal problems. A missing
/// file yields defaults with no warnings. An unreadable or unparseable file
/// yields defaults plus one warning; the tool still runs.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<ConfigError>) {
    let path = config_path(config_dir);
    let mut warnings = Vec::new();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(source) => {
            warnings.push(ConfigError::Io { path, source });
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(source) => {
            warnings.push(ConfigError::TomlParse { path, source });
            return (AppConfig::default(), warnings);
        }
    };

    tracing::debug!(path = %path.display(), "Loaded config.toml");
    let config = validate(raw, &mut warnings);
    (config, warnings)
}

/// Validate each field, accumulating every problem.
fn validate(raw: RawConfig, warnings: &mut Vec<ConfigError>) -> AppConfig {
    let mut config = AppConfig::default();

    if let Some(name) = raw.platform.default {
        match name.parse::<Platform>() {
            Ok(p) => config.default_platform = Some(p),
            Err(_) => warnings.push(ConfigError::InvalidValue {
                field: "[platform] default".to_string(),
                value: name,
                expected: Platform::list_for_display(),
            }),
        }
    }

    if let Some(level) = raw.logging.level {
        let lower = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lower.as_str()) {
            config.log_level = Some(lower);
        } else {
            warnings.push(ConfigError::InvalidValue {
                field: "[logging] level".to_string(),
                value: level,
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    config
}
