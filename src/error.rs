use std::{io, path::PathBuf};

/// Errors from parsing or incrementing a [crate::Version].
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum VersionError {
    /// The version did not split into exactly three dot-separated segments.
    #[error("Version `{version}` should have exactly three dot-separated segments, found {found}")]
    WrongSegmentCount {
        /// The trimmed version text.
        version: String,
        /// How many segments were found.
        found: usize,
    },

    /// A segment was empty or held something other than ASCII digits.
    #[error("Segment `{segment}` of version `{version}` should be a non-negative integer")]
    NonNumericSegment {
        /// The trimmed version text.
        version: String,
        /// The offending segment.
        segment: String,
    },

    /// A segment's digits do not fit in a `u64`.
    #[error("Segment `{segment}` of version `{version}` is too large")]
    SegmentOutOfRange {
        /// The trimmed version text.
        version: String,
        /// The offending segment.
        segment: String,
    },

    /// The value to increment is already `u64::MAX`.
    #[error("Cannot increment {level} value `{value}` without overflowing")]
    Overflow {
        /// The name of the level being bumped.
        level: &'static str,
        /// The value that could not be incremented.
        value: u64,
    },
}

/// Errors from reading or writing a [crate::VersionFile].
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Reading, creating, or writing the file failed.
    #[error("I/O error on version file `{}`: {source}", .path.display())]
    Io {
        /// The version file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file exists but holds no line.
    #[error("Version file `{}` is empty", .path.display())]
    Empty {
        /// The version file.
        path: PathBuf,
    },
}

/// Errors from a [crate::Release] run.
#[derive(thiserror::Error, Debug)]
pub enum ReleaseError {
    /// The version file could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The stored line is not a version.
    #[error("Version file `{}` holds an unusable version: {source}", .path.display())]
    InvalidVersion {
        /// The version file.
        path: PathBuf,
        /// Why the stored line is not a version.
        #[source]
        source: VersionError,
    },

    /// The stored version could not be bumped.
    #[error(transparent)]
    Version(#[from] VersionError),
}
