// CocosProject - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every message names the offending file or field, or lists the valid
// choices, so it can be shown to the user as-is.

use crate::core::model::{HostOs, Language, Platform};
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all operations.
#[derive(Debug)]
pub enum CocosError {
    /// Locating or parsing the project marker file failed.
    Project(ProjectError),

    /// Building or selecting target platforms failed.
    Platform(PlatformError),

    /// Tool configuration could not be loaded.
    Config(ConfigError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for CocosError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project(e) => write!(f, "Project error: {e}"),
            Self::Platform(e) => write!(f, "Platform error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for CocosError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Project(e) => Some(e),
            Self::Platform(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Project errors
// ---------------------------------------------------------------------------

/// Errors raised while locating and parsing the marker file.
#[derive(Debug)]
pub enum ProjectError {
    /// No marker file between the start directory and the filesystem root.
    NotFound { start: PathBuf, marker: &'static str },

    /// The marker file could not be read.
    Io { path: PathBuf, source: io::Error },

    /// The marker file exceeds the maximum allowed size.
    FileTooLarge { path: PathBuf, size: u64, max_size: u64 },

    /// The marker file is not valid JSON.
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The marker file is valid JSON but its top-level value is not an object.
    NotAnObject { path: PathBuf },

    /// A required key is absent.
    MissingField { path: PathBuf, field: &'static str },

    /// `project_type` is not one of the recognised languages.
    InvalidLanguage { path: PathBuf, value: String },

    /// A key holds a value of the wrong JSON type.
    InvalidField {
        path: PathBuf,
        field: &'static str,
        expected: &'static str,
    },
}

impl fmt::Display for ProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { start, marker } => write!(
                f,
                "Can't find config file {marker} in path '{}' or any of its parents",
                start.display()
            ),
            Self::Io { path, source } => {
                write!(f, "Could not read '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Configuration file '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Malformed { path, source } => write!(
                f,
                "Configuration file '{}' is broken: {source}",
                path.display()
            ),
            Self::NotAnObject { path } => write!(
                f,
                "Configuration file '{}' must contain a JSON object",
                path.display()
            ),
            Self::MissingField { path, field } => write!(
                f,
                "Can't get value of \"{field}\" in file '{}'",
                path.display()
            ),
            Self::InvalidLanguage { path, value } => write!(
                f,
                "The value of \"{}\" in '{}' must be one of ({}), found {value}",
                crate::util::constants::KEY_PROJECT_TYPE,
                path.display(),
                Language::list_for_display()
            ),
            Self::InvalidField {
                path,
                field,
                expected,
            } => write!(
                f,
                "The value of \"{field}\" in '{}' must be {expected}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ProjectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ProjectError> for CocosError {
    fn from(e: ProjectError) -> Self {
        Self::Project(e)
    }
}

// ---------------------------------------------------------------------------
// Platform errors
// ---------------------------------------------------------------------------

/// Errors raised while building the available platform set or choosing the
/// current platform.
#[derive(Debug)]
pub enum PlatformError {
    /// No candidate platform survived the host filter and existence checks.
    NoAvailablePlatforms {
        root: PathBuf,
        language: Language,
        has_native: bool,
        host: Option<HostOs>,
        checked: Vec<(Platform, PathBuf)>,
    },

    /// More than one platform is available and none was chosen.
    NotSpecified { available: Vec<Platform> },

    /// A `<platform>_cfg` section or one of its fields has the wrong type.
    InvalidConfig {
        platform: Platform,
        field: String,
        expected: &'static str,
    },
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAvailablePlatforms {
                root,
                language,
                has_native,
                host,
                checked,
            } => {
                let host = host.map_or("an unsupported host", |h| h.label());
                write!(
                    f,
                    "There isn't any available platform for the {language} project at '{}' \
                     (has_native = {has_native}) on {host}.",
                    root.display()
                )?;
                if checked.is_empty() {
                    write!(
                        f,
                        " No platform can be built for this project type on this host."
                    )
                } else {
                    write!(f, " Checked:")?;
                    for (platform, path) in checked {
                        write!(f, "\n  {platform}: '{}' is not a directory", path.display())?;
                    }
                    Ok(())
                }
            }
            Self::NotSpecified { available } => write!(
                f,
                "The target platform is not specified.\n\
                 You can specify a target platform with \"{}\" or \"{}\".\n\
                 Available platforms: {}",
                crate::util::constants::PLATFORM_FLAG_SHORT,
                crate::util::constants::PLATFORM_FLAG_LONG,
                crate::core::model::join_names(available)
            ),
            Self::InvalidConfig {
                platform,
                field,
                expected,
            } => write!(
                f,
                "The value of \"{field}\" for platform {platform} must be {expected}"
            ),
        }
    }
}

impl std::error::Error for PlatformError {}

impl From<PlatformError> for CocosError {
    fn from(e: PlatformError) -> Self {
        Self::Platform(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to tool configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is outside its accepted set.
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::InvalidValue {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is not recognised. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for CocosError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for results.
pub type Result<T> = std::result::Result<T, CocosError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_not_specified_lists_platforms_and_flag() {
        let err = PlatformError::NotSpecified {
            available: vec![Platform::Android, Platform::Web],
        };
        let msg = err.to_string();
        assert!(msg.contains("android, web"), "{msg}");
        assert!(msg.contains("\"-p\""), "{msg}");
        assert!(msg.contains("\"--platform\""), "{msg}");
    }

    #[test]
    fn test_invalid_language_lists_valid_values() {
        let err = ProjectError::InvalidLanguage {
            path: PathBuf::from("/p/.cocos-project.json"),
            value: "\"ruby\"".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("cpp, lua, js"), "{msg}");
        assert!(msg.contains("project_type"), "{msg}");
    }

    #[test]
    fn test_no_available_platforms_names_checked_paths() {
        let err = PlatformError::NoAvailablePlatforms {
            root: PathBuf::from("/game"),
            language: Language::Cpp,
            has_native: false,
            host: Some(HostOs::Linux),
            checked: vec![(Platform::Android, PathBuf::from("/game/proj.android"))],
        };
        let msg = err.to_string();
        assert!(msg.contains("cpp project"), "{msg}");
        assert!(msg.contains("Linux"), "{msg}");
        assert!(msg.contains("/game/proj.android"), "{msg}");
    }

    #[test]
    fn test_top_level_error_preserves_source_chain() {
        let inner = ProjectError::Io {
            path: PathBuf::from("x"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let err: CocosError = inner.into();
        let source = err.source().expect("project error source");
        assert!(source.source().is_some());
        assert!(err.to_string().starts_with("Project error:"));
    }
}
