// CocosProject - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "cocos-project";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "cocos-project";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Marker file
// =============================================================================

/// Name of the JSON file whose presence marks a directory as a project root.
pub const MARKER_FILE_NAME: &str = ".cocos-project.json";

/// Required key holding the project language.
pub const KEY_PROJECT_TYPE: &str = "project_type";

/// Optional key telling whether a script project also ships a native runtime.
pub const KEY_HAS_NATIVE: &str = "has_native";

/// Suffix appended to a platform name to form its override section key
/// (e.g. `android_cfg`).
pub const PLATFORM_CFG_SUFFIX: &str = "_cfg";

/// Maximum marker file size in bytes. Anything larger is certainly not a
/// hand-written project descriptor.
pub const MAX_MARKER_FILE_BYTES: u64 = 1024 * 1024; // 1 MiB

// =============================================================================
// Platform layout
// =============================================================================

/// Directory components between a script project's root and its native
/// `proj.<platform>` directories.
pub const SCRIPT_RUNTIME_SUBDIRS: &[&str] = &["frameworks", "runtime-src"];

/// CLI flags that select a target platform (quoted in error messages).
pub const PLATFORM_FLAG_SHORT: &str = "-p";
pub const PLATFORM_FLAG_LONG: &str = "--platform";

// =============================================================================
// Tool configuration
// =============================================================================

/// Tool settings file name, looked up next to the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Default log level when neither RUST_LOG, --debug, nor config is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";
