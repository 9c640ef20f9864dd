use crate::{
    error::ReleaseError,
    level::BumpKind,
    store::{Loaded, VersionFile},
    version::Version,
};
use tracing::debug;

/// The result of one [Release::run].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The version file was missing and was created holding `version`. The requested bump was
    /// not applied.
    Bootstrapped {
        /// The version written to the new file.
        version: Version,
    },

    /// The stored version was bumped. `saved` is false on a dry run.
    Bumped {
        /// The version read from the file.
        current: Version,
        /// The version after the bump.
        next: Version,
        /// Whether `next` was written back to the file.
        saved: bool,
    },
}

/// One bump of the version held in a [VersionFile].
#[derive(Debug, Clone)]
pub struct Release {
    store: VersionFile,
    kind: BumpKind,
    execute: bool,
}

impl Release {
    /// Returns a dry-run release. Use [Release::execute] to persist the result.
    pub fn new(store: VersionFile, kind: BumpKind) -> Self {
        Self {
            store,
            kind,
            execute: false,
        }
    }

    /// Sets whether the next version is written back to the store.
    pub fn execute(mut self, execute: bool) -> Self {
        self.execute = execute;
        self
    }

    /// Loads the stored version, bumps it, and saves it if this release executes.
    ///
    /// # Errors
    ///
    /// - [ReleaseError::Store] if the file cannot be read, created, or written.
    /// - [ReleaseError::InvalidVersion] if the stored line is not a version.
    /// - [ReleaseError::Version] if the bumped value would overflow.
    pub fn run(&self) -> Result<Outcome, ReleaseError> {
        let line = match self.store.load()? {
            Loaded::Existing(line) => line,
            Loaded::Bootstrapped(version) => return Ok(Outcome::Bootstrapped { version }),
        };

        let current = Version::parse(&line).map_err(|source| ReleaseError::InvalidVersion {
            path: self.store.path().to_owned(),
            source,
        })?;
        let next = current.next(self.kind)?;
        debug!(%current, %next, kind = %self.kind, execute = self.execute, "computed next version");

        if self.execute {
            self.store.save(&next)?;
        }

        Ok(Outcome::Bumped {
            current,
            next,
            saved: self.execute,
        })
    }
}
