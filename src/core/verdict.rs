//! Comparison verdicts and directional hints
//!
//! A guess is judged one attribute at a time. Each attribute produces a
//! three-valued verdict (exact / close / miss) plus an optional directional
//! hint for ordered attributes like height and birth year.

use std::fmt;

/// Three-valued outcome of comparing one attribute of a guess to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Attribute matches the target exactly (rendered green)
    Exact,
    /// Attribute is near the target per that attribute's closeness rule (rendered amber)
    Close,
    /// Attribute does not match (rendered neutral)
    Miss,
}

impl Verdict {
    /// Check if this verdict is an exact match
    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Exact)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Close => write!(f, "close"),
            Self::Miss => write!(f, "miss"),
        }
    }
}

/// Directional hint shown alongside a non-exact verdict on an ordered attribute
///
/// `Higher`/`Lower` describe the *guessed* value relative to the target.
/// How the direction is drawn (which way the arrow points) is a presentation
/// decision made in one place by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    /// Guessed value is above the target
    Higher,
    /// Guessed value is below the target
    Lower,
    /// The attribute could not be resolved through the data provider
    Unresolved,
}

/// Verdict plus optional hint for a single attribute cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub verdict: Verdict,
    pub hint: Option<Hint>,
}

impl Comparison {
    /// Exact match, no hint
    #[inline]
    #[must_use]
    pub const fn exact() -> Self {
        Self {
            verdict: Verdict::Exact,
            hint: None,
        }
    }

    /// Close match with an optional direction
    #[inline]
    #[must_use]
    pub const fn close(hint: Option<Hint>) -> Self {
        Self {
            verdict: Verdict::Close,
            hint,
        }
    }

    /// No match, no hint
    #[inline]
    #[must_use]
    pub const fn miss() -> Self {
        Self {
            verdict: Verdict::Miss,
            hint: None,
        }
    }

    /// No match with a direction
    #[inline]
    #[must_use]
    pub const fn miss_with(hint: Hint) -> Self {
        Self {
            verdict: Verdict::Miss,
            hint: Some(hint),
        }
    }

    /// Attribute degraded because a reference lookup failed
    #[inline]
    #[must_use]
    pub const fn unresolved() -> Self {
        Self {
            verdict: Verdict::Miss,
            hint: Some(Hint::Unresolved),
        }
    }

    /// Check if the verdict is an exact match
    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        self.verdict.is_exact()
    }
}
