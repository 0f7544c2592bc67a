//! File access scoped to the configured root directory.
//!
//! Names come straight from the request path, so they are only accepted when
//! every component is a plain file or directory name. `..`, absolute paths
//! and empty names never reach the file system.

use std::io;
use std::path::{Component, Path, PathBuf};

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("no root directory configured")]
    NoRoot,

    #[error("invalid file name {name:?}")]
    InvalidName { name: String },

    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("io error on {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl FileError {
    fn io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path: path.to_owned() },
            _ => Self::Io { path: path.to_owned(), source },
        }
    }

    /// `true` when the requested file simply does not exist (or can't name one).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoRoot | Self::InvalidName { .. } | Self::NotFound { .. })
    }
}

/// Reads and writes files below a root directory.
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    root: Option<PathBuf>,
}

impl FileStore {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Maps a relative file name onto a path under the root.
    ///
    /// # Errors
    ///
    /// [`FileError::NoRoot`] without a root directory, [`FileError::InvalidName`]
    /// for names that are empty or not made of plain components only.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, FileError> {
        let root = self.root.as_deref().ok_or(FileError::NoRoot)?;

        let relative = Path::new(name);
        let plain = relative.components().all(|component| matches!(component, Component::Normal(_)));
        if name.is_empty() || !plain {
            return Err(FileError::InvalidName { name: name.to_owned() });
        }

        Ok(root.join(relative))
    }

    /// Reads the whole file.
    ///
    /// # Errors
    ///
    /// [`FileError::NotFound`] when the file doesn't exist, [`FileError::Io`]
    /// for any other read failure, and the [`resolve`](Self::resolve) errors.
    pub async fn read(&self, name: &str) -> Result<Bytes, FileError> {
        let path = self.resolve(name)?;
        debug!(path = %path.display(), "read file");

        let contents = tokio::fs::read(&path).await.map_err(|e| FileError::io(&path, e))?;
        Ok(Bytes::from(contents))
    }

    /// Creates or truncates the file and writes `contents` to it, creating
    /// missing parent directories first.
    ///
    /// # Errors
    ///
    /// [`FileError::Io`] when a directory or the file can't be created or
    /// written, and the [`resolve`](Self::resolve) errors.
    pub async fn write(&self, name: &str, contents: &[u8]) -> Result<(), FileError> {
        let path = self.resolve(name)?;
        debug!(path = %path.display(), size = contents.len(), "write file");

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| FileError::Io { path: parent.to_owned(), source: e })?;
        }

        tokio::fs::write(&path, contents).await.map_err(|e| FileError::Io { path: path.clone(), source: e })
    }
}
