// CocosProject - platform/fs.rs
//
// Filesystem probes used by project location and platform availability.

use std::io;
use std::path::Path;

/// True when `path` exists and is a directory (symlinks followed).
pub fn is_dir(path: &Path) -> bool {
    path.is_dir()
}

/// True when `path` exists and is a regular file (symlinks followed).
pub fn is_file(path: &Path) -> bool {
    path.is_file()
}

/// Read a UTF-8 text file, refusing files larger than `max_bytes`.
///
/// Returns `Ok(Err(size))` when the file is too large so the caller can
/// report the actual size without a second metadata call.
pub fn read_bounded(path: &Path, max_bytes: u64) -> io::Result<Result<String, u64>> {
    let size = std::fs::metadata(path)?.len();
    if size > max_bytes {
        tracing::debug!(path = %path.display(), size, max_bytes, "File exceeds size limit");
        return Ok(Err(size));
    }
    std::fs::read_to_string(path).map(Ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probes_distinguish_files_and_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.json");
        std::fs::write(&file, "{}").unwrap();

        assert!(is_dir(dir.path()));
        assert!(!is_file(dir.path()));
        assert!(is_file(&file));
        assert!(!is_dir(&file));
        assert!(!is_dir(&dir.path().join("missing")));
    }

    #[test]
    fn test_read_bounded_rejects_large_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("big.json");
        std::fs::write(&file, "x".repeat(64)).unwrap();

        assert_eq!(read_bounded(&file, 32).unwrap(), Err(64));
        assert_eq!(read_bounded(&file, 64).unwrap().unwrap().len(), 64);
        assert!(read_bounded(&dir.path().join("missing"), 64).is_err());
    }
}
