//! # chatrs Filesystem Helpers (`common::fs`)
//!
//! File: cli/src/common/fs.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` used when loading and saving transcripts:
//! - **`ensure_dir_exists`**: creates a directory (and parents) if missing, and
//!   rejects paths that exist but are not directories.
//! - **`read_file_to_string`**: `fs::read_to_string` with the path in the error.
//! - **`write_file_replacing`**: writes the full content to `<name>.tmp` next to
//!   the target and renames it over the target, so an interrupted write never
//!   leaves a half-written transcript behind.
//!
use crate::core::error::{ChatError, Result};
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path, creating parents as needed.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if the
/// directory cannot be created.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ChatError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Writes `content` to `path`, replacing any existing file in one rename.
///
/// The parent directory is created if it does not exist.
///
/// # Errors
///
/// Returns an `Err` if `path` is a directory, the parent directory cannot be
/// created, or writing/renaming fails (e.g. permissions).
pub fn write_file_replacing(path: &Path, content: &str) -> Result<()> {
    if path.is_dir() {
        anyhow::bail!(ChatError::FileSystem(format!(
            "Cannot write file, path is a directory: {:?}",
            path
        )));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }

    let tmp_path = temp_path_for(path);
    {
        let mut file = fs::File::create(&tmp_path)
            .with_context(|| format!("Failed to create temporary file {:?}", tmp_path))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write to file {:?}", tmp_path))?;
        file.sync_all()
            .with_context(|| format!("Failed to flush file {:?}", tmp_path))?;
    }
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e).with_context(|| format!("Failed to replace file {:?}", path));
    }
    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("new/subdir");
        assert!(!new_dir.exists());
        ensure_dir_exists(&new_dir)?;
        assert!(new_dir.is_dir());
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_path_is_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("a_file.txt");
        fs::write(&file_path, "hello")?;
        let result = ensure_dir_exists(&file_path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path exists but is not a directory"));
        Ok(())
    }

    #[test]
    fn test_write_creates_parents_and_replaces() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("logs/chat.json");

        write_file_replacing(&file_path, "first")?;
        assert_eq!(read_file_to_string(&file_path)?, "first");

        write_file_replacing(&file_path, "second")?;
        assert_eq!(read_file_to_string(&file_path)?, "second");
        assert!(!temp_path_for(&file_path).exists());
        Ok(())
    }

    #[test]
    fn test_write_to_directory_fails() -> Result<()> {
        let base_dir = tempdir()?;
        let result = write_file_replacing(base_dir.path(), "x");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("is a directory"));
        Ok(())
    }

    #[test]
    fn test_read_file_not_found() -> Result<()> {
        let base_dir = tempdir()?;
        let result = read_file_to_string(&base_dir.path().join("nonexistent.json"));
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_temp_path_is_sibling() {
        assert_eq!(
            temp_path_for(Path::new("/tmp/chat_history.json")),
            PathBuf::from("/tmp/chat_history.json.tmp")
        );
    }
}
