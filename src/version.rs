//! Version tokens, comparison and allocation
//!
//! A version is a 4-digit zero-padded token `vNNNN`. The fixed width
//! makes lexicographic order on tokens equal to numeric order, which is
//! what the on-disk naming relies on; `v9999` is a reserved floating
//! "latest" alias and never counts as a real version.

use std::fmt;

use crate::error::{Result, SyncError};

/// A 4-digit zero-padded version, `v0000` through `v9999`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u16);

impl Version {
    /// The floor substituted for an absent version during comparison
    pub const FLOOR: Self = Self(0);

    /// The reserved floating "latest" alias
    pub const ALIAS: Self = Self(9999);

    /// Highest version [`Version::next`] may produce; `v9999` is reserved
    pub const MAX_ASSIGNABLE: Self = Self(9998);

    /// Build a version from a raw number, rejecting values past 4 digits
    #[must_use]
    pub fn new(number: u16) -> Option<Self> {
        (number <= Self::ALIAS.0).then_some(Self(number))
    }

    /// Parse a strict `vNNNN` token: a leading `v` and exactly four
    /// ASCII digits, nothing else
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let digits = token.strip_prefix('v')?;
        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().map(Self)
    }

    /// The numeric value
    #[must_use]
    pub const fn number(self) -> u16 {
        self.0
    }

    /// Whether this is the reserved `v9999` alias
    #[must_use]
    pub const fn is_alias(self) -> bool {
        self.0 == Self::ALIAS.0
    }

    /// The next assignable version
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::VersionOverflow`] when the next number would
    /// be the reserved `9999`; the counter never wraps.
    pub fn next(self) -> Result<Self> {
        if self >= Self::MAX_ASSIGNABLE {
            return Err(SyncError::VersionOverflow { current: self });
        }
        Ok(Self(self.0 + 1))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{:04}", self.0)
    }
}

/// The larger of two scan results, treating an absent side as `v0000`
#[must_use]
pub fn newer(a: Option<Version>, b: Option<Version>) -> Version {
    a.unwrap_or(Version::FLOOR).max(b.unwrap_or(Version::FLOOR))
}

/// Allocate the version after the larger of the dev and pub maxima
///
/// # Errors
///
/// Returns [`SyncError::VersionOverflow`] when allocation would reach the
/// reserved `v9999`.
pub fn allocate(dev_max: Option<Version>, pub_max: Option<Version>) -> Result<Version> {
    newer(dev_max, pub_max).next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_tokens() {
        assert_eq!(Version::parse("v0011"), Version::new(11));
        assert_eq!(Version::parse("v0000"), Some(Version::FLOOR));
        assert_eq!(Version::parse("v9999"), Some(Version::ALIAS));
    }

    #[test]
    fn test_parse_rejects_malformed_tokens() {
        for token in ["0011", "V0011", "v011", "v00110", "vXXXX", "v 011", "v-001", ""] {
            assert_eq!(Version::parse(token), None, "token {token:?} should not parse");
        }
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(Version::new(6).unwrap().to_string(), "v0006");
        assert_eq!(Version::ALIAS.to_string(), "v9999");
    }

    #[test]
    fn test_ordering_matches_numeric_value() {
        let v4 = Version::parse("v0004").unwrap();
        let v5 = Version::parse("v0005").unwrap();
        assert!(v4 < v5);
        assert!(Version::MAX_ASSIGNABLE < Version::ALIAS);
    }

    #[test]
    fn test_newer_substitutes_floor_for_absent() {
        assert_eq!(newer(None, None), Version::FLOOR);
        let v5 = Version::new(5);
        assert_eq!(newer(v5, None), v5.unwrap());
        assert_eq!(newer(None, v5), v5.unwrap());
    }

    #[test]
    fn test_allocate_picks_higher_plus_one() {
        let next = allocate(Version::new(5), Version::new(4)).unwrap();
        assert_eq!(next.to_string(), "v0006");
    }

    #[test]
    fn test_allocate_from_empty_directories() {
        let next = allocate(None, None).unwrap();
        assert_eq!(next.to_string(), "v0001");
    }

    #[test]
    fn test_allocate_refuses_the_reserved_boundary() {
        let result = allocate(Version::new(9998), None);
        assert!(matches!(result, Err(SyncError::VersionOverflow { .. })));
    }

    #[test]
    fn test_next_never_emits_the_alias() {
        assert!(Version::MAX_ASSIGNABLE.next().is_err());
        assert!(Version::ALIAS.next().is_err());
        assert_eq!(
            Version::new(9997).unwrap().next().unwrap(),
            Version::MAX_ASSIGNABLE
        );
    }
}
