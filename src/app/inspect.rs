// CocosProject - app/inspect.rs
//
// One resolution pass for the CLI: locate the project, build the available
// platform set, choose the current platform, and render the result.

use crate::core::model::{HostOs, Language, Platform};
use crate::core::platform_cfg::PlatformConfig;
use crate::core::project::Project;
use crate::core::registry::AvailablePlatforms;
use crate::platform::config::AppConfig;
use crate::platform::host;
use crate::util::error::Result;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// How the current platform was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Selection {
    /// Named with `--platform`.
    Explicit { platform: Platform },
    /// Taken from `[platform] default` in config.toml.
    ConfigDefault { platform: Platform },
    /// The only available platform.
    Auto { platform: Platform },
    /// Several platforms are available and none was chosen.
    Unresolved { message: String },
}

impl Selection {
    pub fn platform(&self) -> Option<Platform> {
        match self {
            Selection::Explicit { platform }
            | Selection::ConfigDefault { platform }
            | Selection::Auto { platform } => Some(*platform),
            Selection::Unresolved { .. } => None,
        }
    }
}

/// Everything learned about a project in one pass.
#[derive(Debug, Clone)]
pub struct Inspection {
    pub project: Project,
    pub platforms: AvailablePlatforms,
    pub host: Option<HostOs>,
    pub selection: Selection,
}

impl Inspection {
    /// Configuration of the chosen platform, if one was chosen.
    pub fn selected_config(&self) -> Option<&PlatformConfig> {
        self.selection
            .platform()
            .and_then(|p| self.platforms.get(p))
    }
}

/// Inspect the project containing `start_dir` on the running host.
pub fn inspect(start_dir: &Path, requested: Option<&str>, config: &AppConfig) -> Result<Inspection> {
    inspect_on_host(start_dir, requested, config, host::current())
}

/// Inspect the project as if running on `host`.
///
/// Selection order: `requested`, then the config default, then the sole
/// available platform. A requested or default platform that is not
/// available is skipped.
pub fn inspect_on_host(
    start_dir: &Path,
    requested: Option<&str>,
    config: &AppConfig,
    host: Option<HostOs>,
) -> Result<Inspection> {
    let project = Project::locate_on_host(start_dir, host)?;
    let platforms = AvailablePlatforms::build_for_host(&project, requested, host)?;

    let selection = if let Some(platform) = platforms.current() {
        Selection::Explicit { platform }
    } else if let Some(platform) = config.default_platform.filter(|p| platforms.contains(*p)) {
        tracing::debug!(platform = %platform, "Using configured default platform");
        Selection::ConfigDefault { platform }
    } else {
        match platforms.select_one() {
            Ok(platform) => Selection::Auto { platform },
            Err(e) => Selection::Unresolved {
                message: e.to_string(),
            },
        }
    };

    Ok(Inspection {
        project,
        platforms,
        host,
        selection,
    })
}

// =============================================================================
// Rendering
// =============================================================================

/// Serialisable summary used for `--json` output.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub root: &'a Path,
    pub language: Language,
    pub has_native: bool,
    pub host: Option<HostOs>,
    pub platforms: Vec<&'a PlatformConfig>,
    pub selection: &'a Selection,
}

impl<'a> Report<'a> {
    pub fn new(inspection: &'a Inspection) -> Self {
        Self {
            root: inspection.project.root(),
            language: inspection.project.language(),
            has_native: inspection.project.has_native(),
            host: inspection.host,
            platforms: inspection.platforms.platforms().values().collect(),
            selection: &inspection.selection,
        }
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Human-readable report, rendered through `Display`.
#[derive(Debug, Clone, Copy)]
pub struct TextReport<'a>(pub &'a Inspection);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inspection = self.0;
        let project = &inspection.project;

        writeln!(f, "Project root : {}", project.root().display())?;
        writeln!(f, "Language     : {}", project.language())?;
        if project.is_script() {
            writeln!(f, "Native       : {}", project.has_native())?;
        }
        writeln!(
            f,
            "Host         : {}",
            inspection.host.map_or("unsupported", |h| h.label())
        )?;
        writeln!(f, "Platforms    :")?;

        for (platform, cfg) in inspection.platforms.platforms() {
            let marker = if inspection.selection.platform() == Some(*platform) {
                '*'
            } else {
                ' '
            };
            writeln!(
                f,
                "  {marker} {:<8} {}",
                platform.as_str(),
                cfg.project_path().display()
            )?;
            for (key, value) in cfg.options() {
                writeln!(f, "      {key} = {value}")?;
            }
            if let Some(dir) = cfg.run_root_dir() {
                writeln!(f, "      run_root_dir = {}", dir.display())?;
            }
        }

        match &inspection.selection {
            Selection::Explicit { platform } => writeln!(f, "Selected     : {platform}"),
            Selection::ConfigDefault { platform } => {
                writeln!(f, "Selected     : {platform} (config default)")
            }
            Selection::Auto { platform } => {
                writeln!(f, "Selected     : {platform} (only available platform)")
            }
            Selection::Unresolved { message } => writeln!(f, "Selected     : none\n{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::constants;
    use crate::util::error::CocosError;
    use std::fs;

    fn js_native_project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(constants::MARKER_FILE_NAME),
            r#"{"project_type": "js", "has_native": true, "web_cfg": {"sub_url": "/g/"}}"#,
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("frameworks/runtime-src/proj.android")).unwrap();
        dir
    }

    #[test]
    fn test_explicit_request_wins() {
        let dir = js_native_project();
        let config = AppConfig {
            default_platform: Some(Platform::Web),
            ..Default::default()
        };
        let result =
            inspect_on_host(dir.path(), Some("android"), &config, Some(HostOs::Linux)).unwrap();
        assert_eq!(result.selection, Selection::Explicit { platform: Platform::Android });
        assert_eq!(
            result.selected_config().map(|c| c.platform()),
            Some(Platform::Android)
        );
    }

    #[test]
    fn test_config_default_used_when_no_request() {
        let dir = js_native_project();
        let config = AppConfig {
            default_platform: Some(Platform::Web),
            ..Default::default()
        };
        let result = inspect_on_host(dir.path(), None, &config, Some(HostOs::Linux)).unwrap();
        assert_eq!(result.selection, Selection::ConfigDefault { platform: Platform::Web });
    }

    #[test]
    fn test_unavailable_default_leaves_selection_unresolved() {
        let dir = js_native_project();
        let config = AppConfig {
            default_platform: Some(Platform::Ios),
            ..Default::default()
        };
        let result = inspect_on_host(dir.path(), None, &config, Some(HostOs::Linux)).unwrap();
        match &result.selection {
            Selection::Unresolved { message } => assert!(message.contains("android, web")),
            other => panic!("unexpected selection {other:?}"),
        }
        assert!(result.selected_config().is_none());
    }

    #[test]
    fn test_missing_project_is_project_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = inspect_on_host(dir.path(), None, &AppConfig::default(), Some(HostOs::Linux))
            .unwrap_err();
        assert!(matches!(err, CocosError::Project(_)), "got {err:?}");
    }

    #[test]
    fn test_text_and_json_reports() {
        let dir = js_native_project();
        let result =
            inspect_on_host(dir.path(), Some("web"), &AppConfig::default(), Some(HostOs::Linux))
                .unwrap();

        let text = TextReport(&result).to_string();
        assert!(text.contains("Language     : js"), "{text}");
        assert!(text.contains("* web"), "{text}");
        assert!(text.contains("sub_url = /g/"), "{text}");
        assert!(text.contains("proj.android"), "{text}");

        let json: serde_json::Value =
            serde_json::from_str(&Report::new(&result).to_json().unwrap()).unwrap();
        assert_eq!(json["language"], "js");
        assert_eq!(json["has_native"], true);
        assert_eq!(json["selection"]["source"], "explicit");
        assert_eq!(json["selection"]["platform"], "web");
        assert_eq!(json["platforms"][1]["platform"], "web");
        assert_eq!(json["platforms"][1]["options"]["sub_url"], "/g/");
    }
}
