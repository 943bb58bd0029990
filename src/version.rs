//! Two-field `MAJOR.MINOR` versions as published by the release endpoint
use std::cmp::Ordering;
use std::fmt;

/// A `MAJOR.MINOR` version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Version {
    pub major: i32,
    pub minor: i32,
}

impl Version {
    #[must_use]
    pub fn new(major: i32, minor: i32) -> Self {
        Self { major, minor }
    }

    /// Parses a dot separated `MAJOR.MINOR` string
    ///
    /// Empty fields are skipped, so `"1..2"` parses as `1.2`. Returns `None` unless exactly two
    /// fields remain. Fields that are not a valid `i32`, including out of range numbers, parse
    /// as `0`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let fields = input
            .split('.')
            .filter(|field| !field.is_empty())
            .collect::<Vec<_>>();

        let [major, minor] = fields.as_slice() else {
            return None;
        };

        Some(Self::new(lenient_parse(major), lenient_parse(minor)))
    }
}

fn lenient_parse(field: &str) -> i32 {
    field.trim().parse().unwrap_or(0)
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Returns true if `latest` is strictly newer than `current`
///
/// Malformed input on either side never reports an update.
#[must_use]
pub fn is_newer_version(current: &str, latest: &str) -> bool {
    match (Version::parse(current), Version::parse(latest)) {
        (Some(current), Some(latest)) => latest > current,
        _ => false,
    }
}
