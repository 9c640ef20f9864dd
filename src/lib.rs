//! # relver
//!
//! A release helper that bumps a semantic version stored in a single-line text file.
//!
//! The version file holds exactly one line, `<MAJOR>.<MINOR>.<PATCH>`. A bump increments one of
//! those values and resets every lesser one to zero. Bumps are dry by default: the next version is
//! computed and reported, and only written back when asked to.
//!
//! ## Examples
//!
//! Quickly get a next version:
//!
//! ```
//! use relver::prelude::*;
//!
//! let next = Version::bump("1.2.3", BumpKind::Minor).unwrap();
//! assert_eq!(next, "1.3.0");
//! ```
//!
//! Or, bump the version held in a file:
//!
//! ```no_run
//! use relver::prelude::*;
//!
//! let store = VersionFile::new("version");
//! let outcome = Release::new(store, BumpKind::Patch).execute(true).run().unwrap();
//! if let Outcome::Bumped { current, next, .. } = outcome {
//!     println!("{current} -> {next}");
//! }
//! ```
//!
//! ## Rollover
//!
//! | Bump | Before | After |
//! |---|---|---|
//! | [`BumpKind::Patch`] | `1.2.3` | `1.2.4` |
//! | [`BumpKind::Minor`] | `1.2.3` | `1.3.0` |
//! | [`BumpKind::Major`] | `1.2.3` | `2.0.0` |
//!
//! ## Missing files
//!
//! If the version file does not exist, it is created holding `0.0.1` and the requested bump is
//! *not* applied, whichever [`BumpKind`] was asked for. This happens on dry runs too.
#![warn(missing_docs)]

mod error;
mod level;
mod release;
mod store;
mod version;

pub use crate::error::{ReleaseError, StoreError, VersionError};
pub use crate::level::{BumpKind, UnknownBumpKind};
pub use crate::release::{Outcome, Release};
pub use crate::store::{Loaded, VersionFile};
pub use crate::version::Version;

/// A convenience module appropriate for glob imports (`use relver::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::BumpKind;
    #[doc(no_inline)]
    pub use crate::Outcome;
    #[doc(no_inline)]
    pub use crate::Release;
    #[doc(no_inline)]
    pub use crate::ReleaseError;
    #[doc(no_inline)]
    pub use crate::StoreError;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionError;
    #[doc(no_inline)]
    pub use crate::VersionFile;
}
