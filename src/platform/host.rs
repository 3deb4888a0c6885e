// CocosProject - platform/host.rs
//
// Host operating system identification and filesystem-root detection.

use crate::core::model::HostOs;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Detect the host OS from the compilation target.
///
/// Returns `None` on hosts that cannot build any target (BSDs, etc.).
pub fn current() -> Option<HostOs> {
    match std::env::consts::OS {
        "linux" => Some(HostOs::Linux),
        "macos" => Some(HostOs::Mac),
        "windows" => Some(HostOs::Windows),
        other => {
            tracing::debug!(os = other, "Unsupported host operating system");
            None
        }
    }
}

/// True when `path` is the root of the filesystem for the given host.
///
/// Windows roots are drive letters (`C:\`, `C:/`, `C:`); every other host
/// has the single root `/`. A path without a parent is always a root.
pub fn is_filesystem_root(path: &Path, host: Option<HostOs>) -> bool {
    if path.parent().is_none() {
        return true;
    }

    let text = path.to_string_lossy();
    match host {
        Some(HostOs::Windows) => drive_root_regex().is_match(&text),
        _ => text == "/",
    }
}

fn drive_root_regex() -> &'static Regex {
    static DRIVE_ROOT: OnceLock<Regex> = OnceLock::new();
    // Pattern is a literal covered by the unit tests below.
    DRIVE_ROOT.get_or_init(|| Regex::new(r"^[A-Za-z]:[\\/]?$").expect("drive root regex"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_root_detection() {
        assert!(is_filesystem_root(Path::new("/"), Some(HostOs::Linux)));
        assert!(is_filesystem_root(Path::new("/"), Some(HostOs::Mac)));
        assert!(!is_filesystem_root(Path::new("/home"), Some(HostOs::Linux)));
        assert!(!is_filesystem_root(Path::new("/home/user/game"), None));
    }

    #[test]
    fn test_windows_drive_root_detection() {
        let windows = Some(HostOs::Windows);
        assert!(is_filesystem_root(Path::new(r"C:\"), windows));
        assert!(is_filesystem_root(Path::new("D:/"), windows));
        assert!(!is_filesystem_root(Path::new(r"C:\game"), windows));
        assert!(!is_filesystem_root(Path::new(r"C:\Users\dev\game"), windows));
    }

    #[test]
    fn test_unix_paths_are_never_drive_roots() {
        for host in [Some(HostOs::Linux), Some(HostOs::Mac), Some(HostOs::Windows), None] {
            assert!(!is_filesystem_root(Path::new("/home"), host), "{host:?}");
            assert!(!is_filesystem_root(Path::new("/home/user/game"), host), "{host:?}");
            assert!(!is_filesystem_root(Path::new("/c"), host), "{host:?}");
        }
    }

    #[test]
    fn test_drive_root_regex() {
        let re = drive_root_regex();
        assert!(re.is_match(r"C:\"));
        assert!(re.is_match("d:/"));
        assert!(re.is_match("E:"));
        assert!(!re.is_match(r"C:\Users"));
        assert!(!re.is_match(r"\\server\share"));
    }

    #[test]
    fn test_current_host_matches_target() {
        let host = current();
        if cfg!(target_os = "linux") {
            assert_eq!(host, Some(HostOs::Linux));
        } else if cfg!(target_os = "macos") {
            assert_eq!(host, Some(HostOs::Mac));
        } else if cfg!(target_os = "windows") {
            assert_eq!(host, Some(HostOs::Windows));
        }
    }
}
