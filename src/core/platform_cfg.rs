// CocosProject - core/platform_cfg.rs
//
// Per-platform build configuration, derived from the static platform
// descriptor plus the optional `<platform>_cfg` section of the marker file.

use crate::core::model::{OverrideKey, Platform};
use crate::platform::fs;
use crate::util::error::PlatformError;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Key shared by every platform section.
pub const KEY_PROJECT_PATH: &str = "project_path";

/// Resolved configuration for one target platform. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformConfig {
    platform: Platform,
    #[serde(skip)]
    root: PathBuf,
    is_script: bool,
    project_path: PathBuf,
    /// Recognised string options present in the platform section.
    options: BTreeMap<OverrideKey, String>,
    /// Web only: directory served as the site root.
    #[serde(skip_serializing_if = "Option::is_none")]
    run_root_dir: Option<PathBuf>,
}

impl PlatformConfig {
    /// Build the configuration for `platform` in the project at `root`.
    ///
    /// `section` is the raw `<platform>_cfg` value when the marker file has
    /// one. Keys the platform does not recognise are ignored, and a
    /// recognised key holding a non-string value is logged and treated as
    /// absent. Only a section that is not an object is an error.
    pub fn new(
        platform: Platform,
        root: &Path,
        is_script: bool,
        section: Option<&Value>,
    ) -> Result<Self, PlatformError> {
        let mut project_path = root.join(platform.default_subdir(is_script));
        let mut options = BTreeMap::new();

        if let Some(section) = section {
            let Value::Object(map) = section else {
                return Err(PlatformError::InvalidConfig {
                    platform,
                    field: platform.cfg_key(),
                    expected: "an object",
                });
            };

            if let Some(path) = string_field(platform, map, KEY_PROJECT_PATH) {
                project_path = root.join(path);
            }

            for key in platform.accepted_keys() {
                if let Some(value) = string_field(platform, map, key.as_str()) {
                    options.insert(*key, value.to_string());
                }
            }

            for name in map.keys() {
                let known = name == KEY_PROJECT_PATH
                    || platform.accepted_keys().iter().any(|k| k.as_str() == name);
                if !known {
                    tracing::debug!(platform = %platform, key = %name, "Ignoring unrecognised key");
                }
            }
        }

        let run_root_dir = (platform == Platform::Web).then(|| {
            options
                .get(&OverrideKey::RunRootDir)
                .map_or_else(|| root.to_path_buf(), |dir| root.join(dir))
        });

        Ok(Self {
            platform,
            root: root.to_path_buf(),
            is_script,
            project_path,
            options,
            run_root_dir,
        })
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Project root the configuration was resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_script(&self) -> bool {
        self.is_script
    }

    /// Absolute directory of the platform's native project.
    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// The platform can be built here only when its project directory exists.
    pub fn is_available(&self) -> bool {
        fs::is_dir(&self.project_path)
    }

    /// Raw value of a recognised option, `None` when absent or not accepted
    /// by this platform.
    pub fn option(&self, key: OverrideKey) -> Option<&str> {
        self.options.get(&key).map(String::as_str)
    }

    /// All options present, in key order.
    pub fn options(&self) -> impl Iterator<Item = (OverrideKey, &str)> {
        self.options.iter().map(|(k, v)| (*k, v.as_str()))
    }

    // -- iOS / Mac --

    pub fn project_file(&self) -> Option<&str> {
        self.option(OverrideKey::ProjectFile)
    }

    pub fn target_name(&self) -> Option<&str> {
        self.option(OverrideKey::TargetName)
    }

    // -- Win32 --

    pub fn sln_file(&self) -> Option<&str> {
        self.option(OverrideKey::SlnFile)
    }

    /// Win32 and Linux only.
    pub fn project_name(&self) -> Option<&str> {
        self.option(OverrideKey::ProjectName)
    }

    pub fn build_cfg_path(&self) -> Option<&str> {
        self.option(OverrideKey::BuildCfgPath)
    }

    // -- Linux --

    pub fn cmake_path(&self) -> Option<&str> {
        self.option(OverrideKey::CmakePath)
    }

    pub fn build_dir(&self) -> Option<&str> {
        self.option(OverrideKey::BuildDir)
    }

    pub fn build_result_dir(&self) -> Option<&str> {
        self.option(OverrideKey::BuildResultDir)
    }

    // -- Web --

    pub fn sub_url(&self) -> Option<&str> {
        self.option(OverrideKey::SubUrl)
    }

    /// Site root for Web, resolved against the project root. `None` for
    /// every other platform.
    pub fn run_root_dir(&self) -> Option<&Path> {
        self.run_root_dir.as_deref()
    }
}

/// Read an optional string field from a platform section. Any other
/// value type counts as unset.
fn string_field<'a>(
    platform: Platform,
    map: &'a serde_json::Map<String, Value>,
    key: &str,
) -> Option<&'a str> {
    match map.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.as_str()),
        Some(other) => {
            tracing::warn!(
                platform = %platform,
                key,
                value = %other,
                "Ignoring non-string value in {}",
                platform.cfg_key()
            );
            None
        }
    }
}
