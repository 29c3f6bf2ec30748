//! Flushing generated modules to disk.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::builder::module::GeneratedModule;
use crate::util::fs;

/// What happened to one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// The file did not exist before.
    Created,
    /// The file existed with different contents.
    Updated,
    /// The file already held the generated contents; it was not touched.
    Unchanged,
    /// Dry run; nothing was written.
    Skipped,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileStatus::Created => write!(f, "created"),
            FileStatus::Updated => write!(f, "updated"),
            FileStatus::Unchanged => write!(f, "unchanged"),
            FileStatus::Skipped => write!(f, "skipped"),
        }
    }
}

/// One output file and its status.
#[derive(Debug, Clone, Serialize)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Writes modules as `<dir>/<location>.<extension>`.
#[derive(Debug, Clone)]
pub struct ModuleWriter {
    dir: PathBuf,
    extension: String,
    dry_run: bool,
}

impl ModuleWriter {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        ModuleWriter {
            dir: dir.into(),
            extension: extension.into(),
            dry_run: false,
        }
    }

    /// Compute statuses without touching the filesystem.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Output path for a module.
    pub fn path_for(&self, module: &GeneratedModule) -> PathBuf {
        self.dir.join(format!("{}.{}", module.location, self.extension))
    }

    /// Write every module, skipping files whose contents are already current.
    pub fn write_all(&self, modules: &[GeneratedModule]) -> Result<Vec<WrittenFile>> {
        if !self.dry_run {
            fs::ensure_dir(&self.dir)?;
        }

        let mut written = Vec::with_capacity(modules.len());
        for module in modules {
            let path = self.path_for(module);
            let status = self.write_one(&path, &module.contents)?;
            tracing::debug!("{} {}", status, path.display());
            written.push(WrittenFile { path, status });
        }

        Ok(written)
    }

    fn write_one(&self, path: &Path, contents: &str) -> Result<FileStatus> {
        if self.dry_run {
            return Ok(FileStatus::Skipped);
        }

        if fs::file_matches(path, contents)? {
            return Ok(FileStatus::Unchanged);
        }

        let status = if path.exists() {
            FileStatus::Updated
        } else {
            FileStatus::Created
        };
        fs::write_string(path, contents)?;
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::location::Location;
    use tempfile::TempDir;

    fn module(location: &str, contents: &str) -> GeneratedModule {
        GeneratedModule {
            location: Location::new(location),
            contents: contents.to_string(),
        }
    }

    #[test]
    fn test_write_statuses() {
        let tmp = TempDir::new().unwrap();
        let writer = ModuleWriter::new(tmp.path().join("generated"), "cppm");

        let first = writer
            .write_all(&[module("imgui", "a"), module("imgui_internal", "b")])
            .unwrap();
        assert!(first.iter().all(|f| f.status == FileStatus::Created));
        assert!(tmp.path().join("generated/imgui.cppm").exists());

        let second = writer
            .write_all(&[module("imgui", "a"), module("imgui_internal", "c")])
            .unwrap();
        assert_eq!(second[0].status, FileStatus::Unchanged);
        assert_eq!(second[1].status, FileStatus::Updated);
        assert_eq!(
            std::fs::read_to_string(tmp.path().join("generated/imgui_internal.cppm")).unwrap(),
            "c"
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("generated");
        let writer = ModuleWriter::new(&dir, "cppm").with_dry_run(true);

        let files = writer.write_all(&[module("imgui", "a")]).unwrap();
        assert_eq!(files[0].status, FileStatus::Skipped);
        assert_eq!(files[0].path, dir.join("imgui.cppm"));
        assert!(!dir.exists());
    }
}
