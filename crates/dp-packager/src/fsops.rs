//! Filesystem steps: clean, initialize, recursive copy.

use std::fs;
use std::path::Path;

use crate::error::{PackagerError, PackagerResult};

fn io_err(path: &Path, source: std::io::Error) -> PackagerError {
    PackagerError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Remove a directory tree if present. Returns whether anything was removed;
/// an absent directory is not an error.
pub fn remove_dir_if_exists(path: &Path) -> PackagerResult<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_dir_all(path).map_err(|e| io_err(path, e))?;
    Ok(true)
}

/// Create a directory and any missing parents.
pub fn create_dir(path: &Path) -> PackagerResult<()> {
    fs::create_dir_all(path).map_err(|e| io_err(path, e))
}

/// Copy a single file.
pub fn copy_file(src: &Path, dest: &Path) -> PackagerResult<()> {
    fs::copy(src, dest).map_err(|e| io_err(src, e))?;
    Ok(())
}

/// Recursively copy `src` into `dest`, preserving relative paths and
/// directory structure. Returns the number of files copied.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> PackagerResult<u64> {
    create_dir(dest)?;

    let mut copied = 0;
    for entry in fs::read_dir(src).map_err(|e| io_err(src, e))? {
        let entry = entry.map_err(|e| io_err(src, e))?;
        let entry_path = entry.path();
        let file_type = entry.file_type().map_err(|e| io_err(&entry_path, e))?;
        let target = dest.join(entry.file_name());

        if file_type.is_dir() {
            copied += copy_dir_recursive(&entry_path, &target)?;
        } else {
            fs::copy(&entry_path, &target).map_err(|e| io_err(&entry_path, e))?;
            copied += 1;
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_preserves_nested_structure() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("routes")).unwrap();
        fs::write(src.join("main.txt"), "main").unwrap();
        fs::write(src.join("routes").join("health.txt"), "health").unwrap();

        let dest = dir.path().join("out");
        let copied = copy_dir_recursive(&src, &dest).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read_to_string(dest.join("main.txt")).unwrap(), "main");
        assert_eq!(
            fs::read_to_string(dest.join("routes").join("health.txt")).unwrap(),
            "health"
        );
    }

    #[test]
    fn copy_missing_source_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = copy_dir_recursive(&missing, &dir.path().join("out")).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn remove_absent_directory_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let removed = remove_dir_if_exists(&dir.path().join("absent")).unwrap();
        assert!(!removed);
    }

    #[test]
    fn remove_existing_directory_reports_removal() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("build");
        fs::create_dir_all(target.join("stale")).unwrap();
        fs::write(target.join("stale").join("old.txt"), "old").unwrap();

        assert!(remove_dir_if_exists(&target).unwrap());
        assert!(!target.exists());
    }
}
