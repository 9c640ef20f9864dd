use crate::{error::VersionError, level::BumpKind};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// A semantic version made of a major, minor, and patch value.
///
/// Versions compare field by field, major first.
///
/// ```
/// use relver::{BumpKind, Version};
///
/// let version: Version = "1.2.3".parse().unwrap();
/// let next = version.next(BumpKind::Minor).unwrap();
/// assert_eq!("1.3.0", next.to_string());
/// assert!(next > version);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    /// The major value.
    pub major: u64,
    /// The minor value.
    pub minor: u64,
    /// The patch value.
    pub patch: u64,
}

impl Version {
    /// The version written to a version file that does not exist yet.
    pub const INITIAL: Version = Version::new(0, 0, 1);

    /// Returns a new version with the given values.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parses a version string of the form `<MAJOR>.<MINOR>.<PATCH>`.
    ///
    /// Surrounding whitespace is ignored, so a line read from a file may be passed as is. Each
    /// value must be made only of ASCII digits. Leading zeros are accepted and dropped, so `01.2.3`
    /// parses to the same version as `1.2.3`.
    ///
    /// # Errors
    ///
    /// - [VersionError::WrongSegmentCount] if there are not exactly three dot-separated segments.
    /// - [VersionError::NonNumericSegment] if a segment is empty or contains a non-digit.
    /// - [VersionError::SegmentOutOfRange] if a segment does not fit in a `u64`.
    pub fn parse(version_str: &str) -> Result<Self, VersionError> {
        let trimmed = version_str.trim();
        let segments: Vec<&str> = trimmed.split('.').collect();

        let [major, minor, patch] = &segments[..] else {
            return Err(VersionError::WrongSegmentCount {
                version: trimmed.to_owned(),
                found: segments.len(),
            });
        };

        Ok(Self::new(
            Self::parse_segment(trimmed, major)?,
            Self::parse_segment(trimmed, minor)?,
            Self::parse_segment(trimmed, patch)?,
        ))
    }

    fn parse_segment(version_str: &str, segment: &str) -> Result<u64, VersionError> {
        // `u64::from_str` would also take a leading `+`, which is not a version digit
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VersionError::NonNumericSegment {
                version: version_str.to_owned(),
                segment: segment.to_owned(),
            });
        }

        // only digits remain, so the only possible failure is overflow
        segment
            .parse()
            .map_err(|_| VersionError::SegmentOutOfRange {
                version: version_str.to_owned(),
                segment: segment.to_owned(),
            })
    }

    /// Returns a new version where the value of the given [BumpKind] is incremented, and all
    /// lesser values are reset to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use relver::{BumpKind, Version};
    ///
    /// let version = Version::new(1, 2, 3);
    /// assert_eq!(Version::new(1, 2, 4), version.next(BumpKind::Patch).unwrap());
    /// assert_eq!(Version::new(1, 3, 0), version.next(BumpKind::Minor).unwrap());
    /// assert_eq!(Version::new(2, 0, 0), version.next(BumpKind::Major).unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// - Returns [VersionError::Overflow] if the value to increment is already `u64::MAX`.
    pub fn next(&self, kind: BumpKind) -> Result<Self, VersionError> {
        let Self {
            major,
            minor,
            patch,
        } = *self;

        Ok(match kind {
            BumpKind::Patch => Self::new(major, minor, incr(kind, patch)?),
            BumpKind::Minor => Self::new(major, incr(kind, minor)?, 0),
            BumpKind::Major => Self::new(incr(kind, major)?, 0, 0),
        })
    }

    /// Parses `version_str`, increments it by `kind`, and returns the rendered next version.
    ///
    /// ```
    /// use relver::{BumpKind, Version};
    ///
    /// assert_eq!("1.10.0", Version::bump("1.9.9", BumpKind::Minor).unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// Any error from [Version::parse] or [Version::next].
    pub fn bump(version_str: &str, kind: BumpKind) -> Result<String, VersionError> {
        Ok(Self::parse(version_str)?.next(kind)?.to_string())
    }
}

fn incr(kind: BumpKind, value: u64) -> Result<u64, VersionError> {
    value.checked_add(1).ok_or(VersionError::Overflow {
        level: kind.name(),
        value,
    })
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Version {
    /// Returns the rendered version string
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;
    use rstest::*;

    #[fixture]
    fn values() -> [u64; 5] {
        [0, 1, 9, 10, 1_000_000]
    }

    #[rstest]
    fn test_patch_keeps_major_minor(values: [u64; 5]) {
        for (major, minor, patch) in iproduct!(values, values, values) {
            let next = Version::new(major, minor, patch).next(BumpKind::Patch);
            assert_eq!(Ok(Version::new(major, minor, patch + 1)), next);
        }
    }

    #[rstest]
    fn test_minor_resets_patch(values: [u64; 5]) {
        for (major, minor, patch) in iproduct!(values, values, values) {
            let next = Version::new(major, minor, patch).next(BumpKind::Minor);
            assert_eq!(Ok(Version::new(major, minor + 1, 0)), next);
        }
    }

    #[rstest]
    fn test_major_resets_minor_and_patch(values: [u64; 5]) {
        for (major, minor, patch) in iproduct!(values, values, values) {
            let next = Version::new(major, minor, patch).next(BumpKind::Major);
            assert_eq!(Ok(Version::new(major + 1, 0, 0)), next);
        }
    }

    #[rstest]
    fn test_next_is_greater(values: [u64; 5]) {
        for ((major, minor, patch), kind) in
            iproduct!(iproduct!(values, values, values), BumpKind::ALL)
        {
            let version = Version::new(major, minor, patch);
            assert!(version.next(kind).unwrap() > version);
        }
    }

    #[rstest]
    #[case("0.0.0", BumpKind::Patch, "0.0.1")]
    #[case("1.9.9", BumpKind::Minor, "1.10.0")]
    #[case("9.9.9", BumpKind::Major, "10.0.0")]
    #[case("1.2.3", BumpKind::Minor, "1.3.0")]
    #[case("1.2.3", BumpKind::Patch, "1.2.4")]
    #[case("0.9.99", BumpKind::Patch, "0.9.100")]
    fn test_bump(#[case] current: &str, #[case] kind: BumpKind, #[case] expected: &str) {
        assert_eq!(Ok(expected.to_owned()), Version::bump(current, kind));
    }

    #[rstest]
    #[case("1.2.3", Version::new(1, 2, 3))]
    #[case("10.20.30", Version::new(10, 20, 30))]
    #[case("01.002.0003", Version::new(1, 2, 3))] // leading zeros dropped
    #[case("1.2.3\n", Version::new(1, 2, 3))]
    #[case("  4.5.6  ", Version::new(4, 5, 6))]
    #[case("18446744073709551615.0.0", Version::new(u64::MAX, 0, 0))]
    fn test_parse_ok(#[case] version_str: &str, #[case] expected: Version) {
        assert_eq!(Ok(expected), Version::parse(version_str));
    }

    #[rstest]
    #[case("", 1)]
    #[case("1", 1)]
    #[case("1.2", 2)]
    #[case("1.2.3.4", 4)]
    #[case("1..2.3", 4)]
    fn test_parse_wrong_segment_count(#[case] version_str: &str, #[case] found: usize) {
        assert!(matches!(
            Version::parse(version_str),
            Err(VersionError::WrongSegmentCount { found: f, .. }) if f == found
        ));
    }

    #[rstest]
    #[case("1.x.3", "x")]
    #[case("1..3", "")]
    #[case("1.2.", "")]
    #[case("+1.2.3", "+1")]
    #[case("-1.2.3", "-1")]
    #[case("1.2.3-rc", "3-rc")]
    #[case("1. 2.3", " 2")]
    fn test_parse_non_numeric(#[case] version_str: &str, #[case] segment: &str) {
        assert!(matches!(
            Version::parse(version_str),
            Err(VersionError::NonNumericSegment { segment: s, .. }) if s == segment
        ));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(matches!(
            Version::parse("1.18446744073709551616.0"),
            Err(VersionError::SegmentOutOfRange { .. })
        ));
    }

    #[test]
    fn test_overflow() {
        let version = Version::new(u64::MAX, u64::MAX, u64::MAX);
        for kind in BumpKind::ALL {
            assert_eq!(
                Err(VersionError::Overflow {
                    level: kind.name(),
                    value: u64::MAX
                }),
                version.next(kind)
            );
        }

        // lesser values at the limit do not matter, they get reset
        assert_eq!(
            Ok(Version::new(1, 0, 0)),
            Version::new(0, u64::MAX, u64::MAX).next(BumpKind::Major)
        );
    }

    #[rstest]
    fn test_format_parse_identity(values: [u64; 5]) {
        for (major, minor, patch) in iproduct!(values, values, values) {
            let version = Version::new(major, minor, patch);
            assert_eq!(Ok(version), version.to_string().parse());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!("0.0.1", Version::INITIAL.to_string());
        assert_eq!("10.0.0", Version::new(10, 0, 0).to_string());
    }
}
