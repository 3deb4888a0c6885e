// CocosProject - core/model.rs
//
// Core data model types: project language, target platform, host OS, and the
// static per-platform descriptor table. Pure data with no I/O.

use crate::util::constants;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Language
// =============================================================================

/// Primary source language declared by a project's `project_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cpp,
    Lua,
    Js,
}

impl Language {
    /// All languages in display order.
    pub fn all() -> &'static [Language] {
        &[Language::Cpp, Language::Lua, Language::Js]
    }

    /// Canonical lowercase name as written in the marker file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::Lua => "lua",
            Language::Js => "js",
        }
    }

    /// Lua and JS projects run on an embedded script engine.
    pub fn is_script(&self) -> bool {
        matches!(self, Language::Lua | Language::Js)
    }

    /// Parse a language name, ignoring case.
    pub fn parse(raw: &str) -> Option<Language> {
        let lower = raw.to_lowercase();
        Language::all()
            .iter()
            .copied()
            .find(|lang| lang.as_str() == lower)
    }

    /// Comma-separated list of valid names for error messages.
    pub fn list_for_display() -> String {
        Language::all()
            .iter()
            .map(Language::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Platform
// =============================================================================

/// Target platform a project can be built for.
///
/// The set is closed; ordering follows the display order used in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
    Mac,
    Web,
    Win32,
    Linux,
}

impl Platform {
    /// All platforms in display order.
    pub fn all() -> &'static [Platform] {
        &[
            Platform::Android,
            Platform::Ios,
            Platform::Mac,
            Platform::Web,
            Platform::Win32,
            Platform::Linux,
        ]
    }

    /// Canonical lowercase name, as used on the CLI and in `<name>_cfg` keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Mac => "mac",
            Platform::Web => "web",
            Platform::Win32 => "win32",
            Platform::Linux => "linux",
        }
    }

    /// Key of this platform's override section in the marker file.
    pub fn cfg_key(&self) -> String {
        format!("{}{}", self.as_str(), constants::PLATFORM_CFG_SUFFIX)
    }

    /// Name of the native project directory, or `None` when the platform
    /// builds straight from the project root (Web).
    pub fn native_dir_name(&self) -> Option<&'static str> {
        match self {
            Platform::Android => Some("proj.android"),
            Platform::Ios | Platform::Mac => Some("proj.ios_mac"),
            Platform::Win32 => Some("proj.win32"),
            Platform::Linux => Some("proj.linux"),
            Platform::Web => None,
        }
    }

    /// Default project directory relative to the project root.
    ///
    /// Script projects keep native projects under `frameworks/runtime-src/`;
    /// native projects keep them directly at the root. An empty path means
    /// the project root itself.
    pub fn default_subdir(&self, is_script: bool) -> std::path::PathBuf {
        let mut path = std::path::PathBuf::new();
        if let Some(dir) = self.native_dir_name() {
            if is_script {
                for component in constants::SCRIPT_RUNTIME_SUBDIRS {
                    path.push(component);
                }
            }
            path.push(dir);
        }
        path
    }

    /// Override keys this platform reads from its `<name>_cfg` section,
    /// besides the shared `project_path`.
    pub fn accepted_keys(&self) -> &'static [OverrideKey] {
        match self {
            Platform::Android => &[],
            Platform::Ios | Platform::Mac => &[OverrideKey::ProjectFile, OverrideKey::TargetName],
            Platform::Win32 => &[
                OverrideKey::SlnFile,
                OverrideKey::ProjectName,
                OverrideKey::BuildCfgPath,
            ],
            Platform::Linux => &[
                OverrideKey::CmakePath,
                OverrideKey::BuildDir,
                OverrideKey::ProjectName,
                OverrideKey::BuildResultDir,
            ],
            Platform::Web => &[OverrideKey::SubUrl, OverrideKey::RunRootDir],
        }
    }

    /// Comma-separated list of valid names for error messages.
    pub fn list_for_display() -> String {
        join_names(Platform::all())
    }
}

/// Join platform names with `", "`.
pub fn join_names(platforms: &[Platform]) -> String {
    platforms
        .iter()
        .map(Platform::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlatform(pub String);

impl fmt::Display for UnknownPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown platform '{}'. Valid platforms: {}",
            self.0,
            Platform::list_for_display()
        )
    }
}

impl std::error::Error for UnknownPlatform {}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Platform::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

// =============================================================================
// Override keys
// =============================================================================

/// Optional string fields a platform section may carry.
///
/// `project_path` is shared by every platform and handled separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideKey {
    ProjectFile,
    TargetName,
    SlnFile,
    ProjectName,
    BuildCfgPath,
    CmakePath,
    BuildDir,
    BuildResultDir,
    SubUrl,
    RunRootDir,
}

impl OverrideKey {
    /// Key as written in the marker file.
    pub fn as_str(&self) -> &'static str {
        match self {
            OverrideKey::ProjectFile => "project_file",
            OverrideKey::TargetName => "target_name",
            OverrideKey::SlnFile => "sln_file",
            OverrideKey::ProjectName => "project_name",
            OverrideKey::BuildCfgPath => "build_cfg_path",
            OverrideKey::CmakePath => "cmake_path",
            OverrideKey::BuildDir => "build_dir",
            OverrideKey::BuildResultDir => "build_result_dir",
            OverrideKey::SubUrl => "sub_url",
            OverrideKey::RunRootDir => "run_root_dir",
        }
    }
}

impl fmt::Display for OverrideKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Host OS
// =============================================================================

/// Operating system the tool is running on. Decides which platforms can be
/// built locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostOs {
    Linux,
    Mac,
    Windows,
}

impl HostOs {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            HostOs::Linux => "Linux",
            HostOs::Mac => "macOS",
            HostOs::Windows => "Windows",
        }
    }

    /// Platforms that can be built on this host.
    pub fn buildable(&self) -> &'static [Platform] {
        match self {
            HostOs::Linux => &[Platform::Web, Platform::Linux, Platform::Android],
            HostOs::Mac => &[Platform::Web, Platform::Ios, Platform::Mac, Platform::Android],
            HostOs::Windows => &[Platform::Web, Platform::Win32, Platform::Android],
        }
    }

    pub fn can_build(&self, platform: Platform) -> bool {
        self.buildable().contains(&platform)
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
