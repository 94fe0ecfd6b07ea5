//! Temporary directories for download tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Create a fresh temporary download directory.
///
/// The directory is removed when the returned guard is dropped.
pub fn temp_test_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("nexrad-test-")
        .tempdir()
        .expect("failed to create temp dir")
}

/// A path under `dir` that is guaranteed not to exist.
pub fn missing_dir(dir: &Path) -> PathBuf {
    dir.join("does-not-exist")
}

/// Names of the regular files in `dir`, sorted.
pub fn list_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter(|e| e.path().is_file())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_lifecycle() {
        let path = {
            let dir = temp_test_dir();
            std::fs::write(dir.path().join("a.gz"), b"x").unwrap();
            assert_eq!(list_file_names(dir.path()), vec!["a.gz"]);
            assert!(!missing_dir(dir.path()).exists());
            dir.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
