//! Epoch-relative birth years
//!
//! Catalog sources tag years with a suffix relative to the galactic epoch:
//! `"19BBY"` is 19 years before, `"11ABY"` 11 years after. An `Era` stores
//! the signed offset so two birth years compare as plain integers.

use std::fmt;

/// Signed year offset from the galactic epoch
///
/// Before-epoch years are negative, after-epoch years positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Era(i32);

impl Era {
    /// Wrap a signed year offset
    #[inline]
    #[must_use]
    pub const fn new(years: i32) -> Self {
        Self(years)
    }

    /// Signed offset in years
    #[inline]
    #[must_use]
    pub const fn years(self) -> i32 {
        self.0
    }

    /// Parse a suffix-tagged year string like `"19BBY"` or `"4ABY"`
    ///
    /// Fractional magnitudes truncate toward zero (`"41.9BBY"` → `-41`).
    /// Returns `None` for a missing or unrecognized suffix, or a
    /// non-numeric magnitude. Unknown years degrade, they never panic.
    ///
    /// # Examples
    /// ```
    /// use swordle::core::Era;
    ///
    /// assert_eq!(Era::parse("19BBY"), Some(Era::new(-19)));
    /// assert_eq!(Era::parse("11ABY"), Some(Era::new(11)));
    /// assert_eq!(Era::parse("unknown"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        let (magnitude, sign) = if let Some(stripped) = s.strip_suffix("BBY") {
            (stripped, -1)
        } else if let Some(stripped) = s.strip_suffix("ABY") {
            (stripped, 1)
        } else {
            return None;
        };

        let value: f64 = magnitude.trim().parse().ok()?;
        if !value.is_finite() || value < 0.0 {
            return None;
        }

        Some(Self(sign * value as i32))
    }

    /// Absolute distance to another era, in years
    #[inline]
    #[must_use]
    pub const fn distance(self, other: Self) -> i32 {
        (self.0 - other.0).abs()
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "{}BBY", -self.0)
        } else {
            write!(f, "{}ABY", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_before_epoch() {
        assert_eq!(Era::parse("19BBY"), Some(Era::new(-19)));
        assert_eq!(Era::parse("896BBY"), Some(Era::new(-896)));
    }

    #[test]
    fn parse_after_epoch() {
        assert_eq!(Era::parse("11ABY"), Some(Era::new(11)));
        assert_eq!(Era::parse("0ABY"), Some(Era::new(0)));
    }

    #[test]
    fn parse_fractional_truncates() {
        assert_eq!(Era::parse("41.9BBY"), Some(Era::new(-41)));
        assert_eq!(Era::parse("31.5BBY"), Some(Era::new(-31)));
    }

    #[test]
    fn parse_tolerates_whitespace() {
        assert_eq!(Era::parse(" 19BBY "), Some(Era::new(-19)));
        assert_eq!(Era::parse("19 BBY"), Some(Era::new(-19)));
    }

    #[test]
    fn parse_unknown_is_none() {
        assert_eq!(Era::parse("unknown"), None);
        assert_eq!(Era::parse(""), None);
        assert_eq!(Era::parse("19"), None);
        assert_eq!(Era::parse("BBY"), None);
        assert_eq!(Era::parse("soonBBY"), None);
    }

    #[test]
    fn parse_rejects_negative_magnitude() {
        assert_eq!(Era::parse("-19BBY"), None);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Era::new(-19);
        let b = Era::new(-29);
        assert_eq!(a.distance(b), 10);
        assert_eq!(b.distance(a), 10);
    }

    #[test]
    fn display_round_trips() {
        for s in ["19BBY", "896BBY", "11ABY", "0ABY"] {
            let era = Era::parse(s).unwrap();
            assert_eq!(format!("{era}"), s);
        }
    }

    #[test]
    fn ordering_runs_old_to_recent() {
        let old = Era::parse("896BBY").unwrap();
        let recent = Era::parse("11ABY").unwrap();
        assert!(old < recent);
    }
}
