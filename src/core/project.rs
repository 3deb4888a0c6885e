// CocosProject - core/project.rs
//
// Project root location and marker file parsing.
//
// The marker file is searched for from the start directory upward. The
// first directory that holds it becomes the project root; the filesystem
// root itself is never searched.

use crate::core::model::{HostOs, Language, Platform};
use crate::platform::{fs, host};
use crate::util::constants;
use crate::util::error::ProjectError;
use serde_json::{Map, Value};
use std::path::{Component, Path, PathBuf};

/// A located and validated project. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    language: Language,
    has_native: bool,
    info: Map<String, Value>,
}

impl Project {
    /// Locate the project containing `start_dir` and parse its marker file.
    pub fn locate(start_dir: &Path) -> Result<Self, ProjectError> {
        Self::locate_on_host(start_dir, host::current())
    }

    /// Same as [`Project::locate`] with an explicit host for root detection.
    pub fn locate_on_host(start_dir: &Path, host: Option<HostOs>) -> Result<Self, ProjectError> {
        let start = absolutize(start_dir);
        let root = find_project_dir(&start, host).ok_or_else(|| ProjectError::NotFound {
            start: start.clone(),
            marker: constants::MARKER_FILE_NAME,
        })?;

        let marker = root.join(constants::MARKER_FILE_NAME);
        let text = match fs::read_bounded(&marker, constants::MAX_MARKER_FILE_BYTES) {
            Ok(Ok(text)) => text,
            Ok(Err(size)) => {
                return Err(ProjectError::FileTooLarge {
                    path: marker,
                    size,
                    max_size: constants::MAX_MARKER_FILE_BYTES,
                })
            }
            Err(source) => return Err(ProjectError::Io { path: marker, source }),
        };

        let project = Self::from_json_str(root, &text)?;
        tracing::info!(
            root = %project.root.display(),
            language = %project.language,
            has_native = project.has_native,
            "Project located"
        );
        Ok(project)
    }

    /// Build a project from marker file contents already read into memory.
    ///
    /// `root` is recorded as-is; error messages refer to the marker file
    /// inside it.
    pub fn from_json_str(root: PathBuf, text: &str) -> Result<Self, ProjectError> {
        let marker = root.join(constants::MARKER_FILE_NAME);

        let value: Value = serde_json::from_str(text).map_err(|source| ProjectError::Malformed {
            path: marker.clone(),
            source,
        })?;
        let Value::Object(info) = value else {
            return Err(ProjectError::NotAnObject { path: marker });
        };

        let raw_lang = info
            .get(constants::KEY_PROJECT_TYPE)
            .ok_or_else(|| ProjectError::MissingField {
                path: marker.clone(),
                field: constants::KEY_PROJECT_TYPE,
            })?;
        let language = raw_lang
            .as_str()
            .and_then(Language::parse)
            .ok_or_else(|| ProjectError::InvalidLanguage {
                path: marker.clone(),
                value: raw_lang.to_string(),
            })?;

        // Only script projects can carry a native runtime; cpp ignores the key.
        let has_native = if language.is_script() {
            match info.get(constants::KEY_HAS_NATIVE) {
                None => false,
                Some(Value::Bool(flag)) => *flag,
                Some(_) => {
                    return Err(ProjectError::InvalidField {
                        path: marker,
                        field: constants::KEY_HAS_NATIVE,
                        expected: "true or false",
                    })
                }
            }
        } else {
            false
        };

        Ok(Self {
            root,
            language,
            has_native,
            info,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the marker file inside the root.
    pub fn marker_path(&self) -> PathBuf {
        self.root.join(constants::MARKER_FILE_NAME)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Whether a script project also has a native runtime. Always false for cpp.
    pub fn has_native(&self) -> bool {
        self.has_native
    }

    pub fn is_script(&self) -> bool {
        self.language.is_script()
    }

    pub fn is_cpp(&self) -> bool {
        self.language == Language::Cpp
    }

    pub fn is_lua(&self) -> bool {
        self.language == Language::Lua
    }

    pub fn is_js(&self) -> bool {
        self.language == Language::Js
    }

    /// The full parsed marker file.
    pub fn info(&self) -> &Map<String, Value> {
        &self.info
    }

    /// The `<platform>_cfg` override section, if present.
    pub fn platform_section(&self, platform: Platform) -> Option<&Value> {
        self.info.get(&platform.cfg_key())
    }
}

/// Walk from `start` toward the filesystem root and return the first
/// directory that contains the marker file as a regular file.
///
/// `start` is normalised first so the walk only ever moves upward.
pub fn find_project_dir(start: &Path, host: Option<HostOs>) -> Option<PathBuf> {
    let start = lexical_normalize(start);
    let mut current = start.as_path();
    loop {
        if host::is_filesystem_root(current, host) {
            tracing::debug!(start = %start.display(), "Reached filesystem root without a marker file");
            return None;
        }

        let candidate = current.join(constants::MARKER_FILE_NAME);
        if fs::is_file(&candidate) {
            tracing::debug!(root = %current.display(), "Found marker file");
            return Some(current.to_path_buf());
        }

        current = current.parent()?;
    }
}

/// Make a relative path absolute against the current directory, then
/// resolve `.` and `..` components.
///
/// Stays lexical (no symlink resolution) so reported roots match what the
/// user typed.
fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return lexical_normalize(path);
    }
    match std::env::current_dir() {
        Ok(cwd) => lexical_normalize(&cwd.join(path)),
        Err(e) => {
            tracing::warn!(error = %e, "Could not read current directory; using path as given");
            lexical_normalize(path)
        }
    }
}

/// Drop `.` components and fold each `..` into its parent. A `..` at the
/// root stays at the root.
fn lexical_normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                // Relative path climbing above its start: keep the `..`.
                _ => normalized.push(component.as_os_str()),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;

    fn parse(text: &str) -> Result<Project, ProjectError> {
        Project::from_json_str(PathBuf::from("/game"), text)
    }

    #[test]
    fn test_language_normalised_to_lowercase() {
        for (raw, expected) in [
            ("CPP", Language::Cpp),
            ("Lua", Language::Lua),
            ("lUa", Language::Lua),
            ("Js", Language::Js),
        ] {
            let project = parse(&format!(r#"{{"project_type": "{raw}"}}"#)).unwrap();
            assert_eq!(project.language(), expected, "{raw}");
            assert_eq!(project.language().as_str(), raw.to_lowercase());
        }
    }

    #[test]
    fn test_missing_project_type_is_missing_field() {
        let err = parse(r#"{"has_native": true}"#).unwrap_err();
        assert!(
            matches!(err, ProjectError::MissingField { field: "project_type", .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let err = parse(r#"{"project_type": "python"}"#).unwrap_err();
        assert!(matches!(err, ProjectError::InvalidLanguage { .. }), "got {err:?}");

        let err = parse(r#"{"project_type": 3}"#).unwrap_err();
        assert!(matches!(err, ProjectError::InvalidLanguage { .. }), "got {err:?}");
    }

    #[test]
    fn test_broken_json_is_malformed() {
        let err = parse(r#"{"project_type": "cpp""#).unwrap_err();
        assert!(matches!(err, ProjectError::Malformed { .. }), "got {err:?}");

        let err = parse("[1, 2]").unwrap_err();
        assert!(matches!(err, ProjectError::NotAnObject { .. }), "got {err:?}");
    }

    #[test]
    fn test_has_native_only_read_for_script_projects() {
        let lua = parse(r#"{"project_type": "lua", "has_native": true}"#).unwrap();
        assert!(lua.has_native());
        assert!(lua.is_script());

        let js = parse(r#"{"project_type": "js"}"#).unwrap();
        assert!(!js.has_native());

        // A cpp project never reads the key, even when it is malformed.
        let cpp = parse(r#"{"project_type": "cpp", "has_native": "yes"}"#).unwrap();
        assert!(!cpp.has_native());
        assert!(cpp.is_cpp());
    }

    #[test]
    fn test_has_native_must_be_boolean() {
        let err = parse(r#"{"project_type": "js", "has_native": "yes"}"#).unwrap_err();
        assert!(
            matches!(err, ProjectError::InvalidField { field: "has_native", .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_platform_section_lookup() {
        let project =
            parse(r#"{"project_type": "cpp", "win32_cfg": {"sln_file": "game.sln"}}"#).unwrap();
        assert!(project.platform_section(Platform::Win32).is_some());
        assert!(project.platform_section(Platform::Linux).is_none());
    }

    #[test]
    fn test_find_project_dir_walks_upward() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        stdfs::write(root.join(constants::MARKER_FILE_NAME), "{}").unwrap();
        let nested = root.join("src").join("deep");
        stdfs::create_dir_all(&nested).unwrap();

        let found = find_project_dir(&nested, host::current()).unwrap();
        assert_eq!(found, root);
    }

    #[test]
    fn test_find_project_dir_ignores_marker_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("game");
        // A directory named like the marker does not count.
        stdfs::create_dir_all(root.join(constants::MARKER_FILE_NAME)).unwrap();

        assert_eq!(find_project_dir(&root, host::current()), None);
    }

    #[test]
    fn test_lexical_normalize() {
        assert_eq!(lexical_normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(lexical_normalize(Path::new("/tmp/..")), PathBuf::from("/"));
        assert_eq!(lexical_normalize(Path::new("/../..")), PathBuf::from("/"));
        assert_eq!(lexical_normalize(Path::new("a/../../b")), PathBuf::from("../b"));
        assert_eq!(lexical_normalize(Path::new("../../x")), PathBuf::from("../../x"));
    }

    #[test]
    fn test_find_project_dir_never_descends() {
        let dir = tempfile::tempdir().unwrap();
        let child = dir.path().join("child");
        stdfs::create_dir_all(&child).unwrap();
        stdfs::write(child.join(constants::MARKER_FILE_NAME), "{}").unwrap();

        assert_eq!(find_project_dir(&child.join(".."), host::current()), None);
        assert_eq!(
            find_project_dir(&child.join(".").join("..").join("child"), host::current()),
            Some(child.clone())
        );
    }

    #[test]
    fn test_find_project_dir_stops_at_root_after_parent_dir() {
        // `/tmp/..` is the root itself and must not be searched.
        assert_eq!(
            find_project_dir(Path::new("/tmp/.."), Some(HostOs::Linux)),
            None
        );
    }

    #[test]
    fn test_find_project_dir_with_windows_host_rules() {
        let dir = tempfile::tempdir().unwrap();
        stdfs::write(dir.path().join(constants::MARKER_FILE_NAME), "{}").unwrap();
        let nested = dir.path().join("src");
        stdfs::create_dir_all(&nested).unwrap();

        assert_eq!(
            find_project_dir(&nested, Some(HostOs::Windows)),
            Some(dir.path().to_path_buf())
        );
    }

    #[test]
    fn test_locate_reports_marker_path_on_error() {
        let dir = tempfile::tempdir().unwrap();
        stdfs::write(dir.path().join(constants::MARKER_FILE_NAME), "not json").unwrap();

        let err = Project::locate(dir.path()).unwrap_err();
        assert!(matches!(err, ProjectError::Malformed { .. }), "got {err:?}");
        assert!(err.to_string().contains(constants::MARKER_FILE_NAME));
    }
}
