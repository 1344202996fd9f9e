use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::error::{BuildError, Result};

/// Resolves configured paths against the project's base directory.
///
/// Absolute paths pass through untouched; relative ones are joined onto the
/// base and lexically normalized. Nothing is checked against the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    base: PathBuf,
}

impl PathResolver {
    /// The base is made absolute against the current directory if needed.
    pub fn new(base: impl AsRef<Path>) -> Result<Self> {
        let base = base.as_ref();
        let absolute = std::path::absolute(base).map_err(|source| BuildError::BaseDir {
            path: base.to_path_buf(),
            source,
        })?;

        Ok(Self {
            base: absolute.clean(),
        })
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            return path.to_path_buf();
        }
        if path.as_os_str().is_empty() {
            return self.base.clone();
        }
        self.base.join(path).clean()
    }
}
