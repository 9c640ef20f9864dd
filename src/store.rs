use crate::{error::StoreError, version::Version};
use std::{
    fs,
    io::{self, ErrorKind, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// What [VersionFile::load] found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loaded {
    /// The first line of an existing version file, without its line terminator.
    Existing(String),

    /// The file did not exist, so it was created holding [Version::INITIAL].
    Bootstrapped(Version),
}

/// A text file holding a single version line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFile {
    path: PathBuf,
}

impl VersionFile {
    /// Returns a store for the file at `path`. Nothing is touched until [VersionFile::load].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of this file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the first line of the file.
    ///
    /// A missing file is created holding [Version::INITIAL] and reported as
    /// [Loaded::Bootstrapped]. No bump is applied to the bootstrapped version.
    ///
    /// # Errors
    ///
    /// - [StoreError::Empty] if the file exists but has no first line.
    /// - [StoreError::Io] for any other I/O failure.
    pub fn load(&self) -> Result<Loaded, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let line = contents
                    .lines()
                    .next()
                    .ok_or_else(|| StoreError::Empty {
                        path: self.path.clone(),
                    })?;
                debug!(path = %self.path.display(), line, "read version file");
                Ok(Loaded::Existing(line.to_owned()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "version file not found, creating it");
                self.create(&Version::INITIAL)?;
                Ok(Loaded::Bootstrapped(Version::INITIAL))
            }
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// Replaces the whole content of the file with `version`, without a trailing newline.
    ///
    /// The text is written to a temporary file next to the target, then moved over it, so a
    /// failure part way leaves the previous content in place. Symlinks are followed, and the new
    /// file keeps the permissions of the one it replaces.
    pub fn save(&self, version: &Version) -> Result<(), StoreError> {
        let target = fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        write!(tmp, "{version}").map_err(|e| self.io_error(e))?;
        if let Ok(metadata) = fs::metadata(&target) {
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| self.io_error(e))?;
        }
        tmp.as_file().sync_all().map_err(|e| self.io_error(e))?;
        tmp.persist(&target).map_err(|e| self.io_error(e.error))?;

        info!(path = %target.display(), %version, "wrote version file");
        Ok(())
    }

    fn create(&self, version: &Version) -> Result<(), StoreError> {
        // `create_new` so a file appearing between the read and here is not clobbered
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        write!(file, "{version}").map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
