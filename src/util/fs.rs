//! Filesystem utilities.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::core::errors::ModgenError;

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path.display()))
}

/// Read a configured input file, reporting a missing file as [`ModgenError::MissingInput`].
pub fn read_input(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(ModgenError::MissingInput {
            path: path.to_path_buf(),
        }
        .into());
    }
    read_to_string(path)
}

/// Read and deserialize a JSON input file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = read_input(path)?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse JSON: {}", path.display()))
}

/// Whether `path` exists and already holds exactly `contents`.
pub fn file_matches(path: &Path, contents: &str) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }
    let existing =
        fs::read(path).with_context(|| format!("failed to read file: {}", path.display()))?;
    Ok(existing == contents.as_bytes())
}

/// Write a string to a file, creating parent directories if needed.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_write_string_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("generated/backends/imgui_impl_glfw.cppm");

        write_string(&path, "module;\n").unwrap();
        assert_eq!(read_to_string(&path).unwrap(), "module;\n");
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("generated");

        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_read_json_reports_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_json::<BTreeMap<String, String>>(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to parse JSON"));
        assert!(format!("{:#}", err).contains("broken.json"));
    }

    #[test]
    fn test_read_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = read_to_string(&tmp.path().join("imgui.h")).unwrap_err();
        assert!(err.to_string().contains("failed to read file"));
    }

    #[test]
    fn test_read_input_missing_is_modgen_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("definitions.json");

        let err = read_json::<BTreeMap<String, String>>(&path).unwrap_err();
        match err.downcast_ref::<ModgenError>() {
            Some(ModgenError::MissingInput { path: missing }) => assert_eq!(missing, &path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_file_matches() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("imgui.cppm");

        assert!(!file_matches(&path, "module;\n").unwrap());

        fs::write(&path, "module;\n").unwrap();
        assert!(file_matches(&path, "module;\n").unwrap());
        assert!(!file_matches(&path, "module;\n\n").unwrap());
    }
}
