// CocosProject - core/registry.rs
//
// Available platform set for a project: candidates by language, filtered by
// host OS, instantiated from the marker file and kept only when their
// project directory exists.

use crate::core::model::{HostOs, Language, Platform};
use crate::core::platform_cfg::PlatformConfig;
use crate::core::project::Project;
use crate::platform::host;
use crate::util::error::PlatformError;
use std::collections::BTreeMap;
use std::path::Path;

/// Platforms a project of this language could target, before host filtering.
pub fn candidate_platforms(language: Language, has_native: bool) -> &'static [Platform] {
    const NATIVE: &[Platform] = &[
        Platform::Android,
        Platform::Win32,
        Platform::Ios,
        Platform::Mac,
        Platform::Linux,
    ];
    const JS_NATIVE: &[Platform] = &[
        Platform::Android,
        Platform::Win32,
        Platform::Ios,
        Platform::Mac,
        Platform::Web,
    ];

    match (language, has_native) {
        (Language::Cpp, _) => NATIVE,
        (Language::Lua, true) => NATIVE,
        (Language::Lua, false) => &[],
        (Language::Js, true) => JS_NATIVE,
        (Language::Js, false) => &[Platform::Web],
    }
}

/// Drop candidates that cannot be built on `host`. An unsupported host
/// keeps nothing.
pub fn filter_for_host(candidates: &[Platform], host: Option<HostOs>) -> Vec<Platform> {
    let Some(host) = host else {
        return Vec::new();
    };
    candidates
        .iter()
        .copied()
        .filter(|p| host.can_build(*p))
        .collect()
}

/// Platforms available for one project, plus the optional current selection.
#[derive(Debug, Clone)]
pub struct AvailablePlatforms {
    platforms: BTreeMap<Platform, PlatformConfig>,
    current: Option<Platform>,
}

impl AvailablePlatforms {
    /// Build the available set on the running host.
    ///
    /// `current` is the user's explicit platform choice, matched without
    /// regard to case. A choice that is unknown or unavailable is ignored.
    pub fn build(project: &Project, current: Option<&str>) -> Result<Self, PlatformError> {
        Self::build_for_host(project, current, host::current())
    }

    /// Build the available set as if running on `host`.
    pub fn build_for_host(
        project: &Project,
        current: Option<&str>,
        host: Option<HostOs>,
    ) -> Result<Self, PlatformError> {
        let candidates = filter_for_host(
            candidate_platforms(project.language(), project.has_native()),
            host,
        );
        tracing::debug!(
            language = %project.language(),
            has_native = project.has_native(),
            host = ?host,
            candidates = ?candidates,
            "Platform candidates"
        );

        let mut platforms = BTreeMap::new();
        let mut checked = Vec::new();
        for platform in candidates {
            let cfg = PlatformConfig::new(
                platform,
                project.root(),
                project.is_script(),
                project.platform_section(platform),
            )?;

            if cfg.is_available() {
                tracing::debug!(
                    platform = %platform,
                    path = %cfg.project_path().display(),
                    "Platform available"
                );
                platforms.insert(platform, cfg);
            } else {
                tracing::debug!(
                    platform = %platform,
                    path = %cfg.project_path().display(),
                    "Platform project directory missing"
                );
                checked.push((platform, cfg.project_path().to_path_buf()));
            }
        }

        if platforms.is_empty() {
            return Err(PlatformError::NoAvailablePlatforms {
                root: project.root().to_path_buf(),
                language: project.language(),
                has_native: project.has_native(),
                host,
                checked,
            });
        }

        let current = current.and_then(|name| match name.parse::<Platform>() {
            Ok(p) if platforms.contains_key(&p) => Some(p),
            Ok(p) => {
                tracing::warn!(platform = %p, "Requested platform is not available; none selected");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring requested platform");
                None
            }
        });

        tracing::info!(
            available = %crate::core::model::join_names(&platforms.keys().copied().collect::<Vec<_>>()),
            current = ?current,
            "Available platforms resolved"
        );

        Ok(Self { platforms, current })
    }

    /// All available configurations, in platform display order.
    pub fn platforms(&self) -> &BTreeMap<Platform, PlatformConfig> {
        &self.platforms
    }

    pub fn get(&self, platform: Platform) -> Option<&PlatformConfig> {
        self.platforms.get(&platform)
    }

    pub fn contains(&self, platform: Platform) -> bool {
        self.platforms.contains_key(&platform)
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    /// Always false for a successfully built set.
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Available platform names, in display order.
    pub fn names(&self) -> Vec<Platform> {
        self.platforms.keys().copied().collect()
    }

    pub fn current(&self) -> Option<Platform> {
        self.current
    }

    pub fn none_active(&self) -> bool {
        self.current.is_none()
    }

    pub fn is_active(&self, platform: Platform) -> bool {
        self.current == Some(platform)
    }

    /// Configuration of the current selection.
    pub fn current_config(&self) -> Option<&PlatformConfig> {
        self.current.and_then(|p| self.platforms.get(&p))
    }

    /// Project directory of the current selection.
    pub fn project_path(&self) -> Option<&Path> {
        self.current_config().map(PlatformConfig::project_path)
    }

    pub fn has_one(&self) -> bool {
        self.platforms.len() == 1
    }

    /// The sole available platform. Fails when there is more than one,
    /// listing the choices.
    pub fn select_one(&self) -> Result<Platform, PlatformError> {
        match (self.has_one(), self.platforms.keys().next()) {
            (true, Some(platform)) => Ok(*platform),
            _ => Err(PlatformError::NotSpecified {
                available: self.names(),
            }),
        }
    }

    /// The current selection, falling back to [`select_one`](Self::select_one).
    pub fn resolve_current(&self) -> Result<Platform, PlatformError> {
        match self.current {
            Some(platform) => Ok(platform),
            None => self.select_one(),
        }
    }
}
