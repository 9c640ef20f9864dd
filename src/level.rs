use core::{fmt, str::FromStr};

/// The component of a version to increment.
///
/// Exactly one level is bumped per call to [crate::Version::next]. Bumping a level resets every
/// lesser level to zero. Levels are declared least significant first, so they order
/// `Patch < Minor < Major`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum BumpKind {
    /// The patch level. It is less than the major and minor levels.
    Patch,
    /// The minor level. It is less than the major level and greater than the patch level.
    Minor,
    /// The major level. It is greater than the minor and patch levels.
    Major,
}

impl BumpKind {
    /// All levels, least significant first.
    pub const ALL: [BumpKind; 3] = [BumpKind::Patch, BumpKind::Minor, BumpKind::Major];

    /// Returns the lowercase name of this level, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no [BumpKind].
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("Unknown bump level `{0}`, expected one of `patch`, `minor`, or `major`")]
pub struct UnknownBumpKind(
    /// The text that was not a level name.
    pub String,
);

impl FromStr for BumpKind {
    type Err = UnknownBumpKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BumpKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownBumpKind(s.to_owned()))
    }
}
