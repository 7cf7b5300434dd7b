use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::{AppError, MANIFEST_FILENAME, Manifest};

/// Filesystem access rooted at the project directory.
#[derive(Debug, Clone)]
pub struct ProjectFilesystem {
    root: PathBuf,
}

impl ProjectFilesystem {
    /// Create a project filesystem for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a project-relative path.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Read a file, mapping absence to `None`.
    pub fn read_optional(&self, relative: &str) -> Result<Option<Vec<u8>>, AppError> {
        let path = self.path(relative);
        match fs::read(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(AppError::ReadFailed { path, source }),
        }
    }

    /// Read a UTF-8 file, mapping absence to `None`.
    pub fn read_optional_string(&self, relative: &str) -> Result<Option<String>, AppError> {
        let Some(bytes) = self.read_optional(relative)? else {
            return Ok(None);
        };
        String::from_utf8(bytes).map(Some).map_err(|err| AppError::ReadFailed {
            path: self.path(relative),
            source: io::Error::new(io::ErrorKind::InvalidData, err),
        })
    }

    /// Replace a file atomically: write a sibling temp file, then rename it over
    /// the target so readers never observe a partial write.
    pub fn write_atomic(&self, relative: &str, content: &[u8]) -> Result<(), AppError> {
        let path = self.path(relative);
        let wrap = |source: io::Error| AppError::WriteFailed { path: path.clone(), source };

        let parent = path.parent().unwrap_or(self.root.as_path());
        fs::create_dir_all(parent).map_err(wrap)?;

        let mut temp = NamedTempFile::new_in(parent).map_err(wrap)?;
        temp.write_all(content).map_err(wrap)?;
        temp.as_file().sync_all().map_err(wrap)?;
        temp.persist(&path).map_err(|err| wrap(err.error))?;

        debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }

    /// Whether `relative` contains a file with one of `extensions`, at any depth.
    pub fn contains_files_with_extension(
        &self,
        relative: &str,
        extensions: &[&str],
    ) -> Result<bool, AppError> {
        scan_for_extension(&self.path(relative), extensions)
    }

    /// Load `package.json`. A missing file is `None`; anything else unreadable
    /// or unparsable is an error naming the path.
    pub fn load_manifest(&self) -> Result<Option<Manifest>, AppError> {
        let Some(content) = self.read_optional_string(MANIFEST_FILENAME)? else {
            return Ok(None);
        };
        Manifest::from_json(&content).map(Some).map_err(|err| AppError::ManifestParse {
            path: self.path(MANIFEST_FILENAME),
            details: err.to_string(),
        })
    }

    pub fn save_manifest(&self, manifest: &Manifest) -> Result<(), AppError> {
        let content = manifest.to_json().map_err(|err| AppError::ManifestParse {
            path: self.path(MANIFEST_FILENAME),
            details: err.to_string(),
        })?;
        self.write_atomic(MANIFEST_FILENAME, content.as_bytes())
    }
}

fn scan_for_extension(dir: &Path, extensions: &[&str]) -> Result<bool, AppError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(source) => return Err(AppError::ReadFailed { path: dir.to_path_buf(), source }),
    };

    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            if scan_for_extension(&path, extensions)? {
                return Ok(true);
            }
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.contains(&ext))
        {
            return Ok(true);
        }
    }

    Ok(false)
}
