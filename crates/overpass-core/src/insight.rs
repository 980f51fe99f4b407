//! Per-value runtime refinement tags.
//!
//! An [`Insight`] is an opaque tag the frontend attaches to each actual
//! argument at call time. It refines the static type token with the value's
//! runtime shape, most commonly the concrete subclass of a polymorphic base.
//! Conversion routes can price themselves differently per insight, which is
//! how one route yields different weights for different shapes of the same
//! static type.
//!
//! Insights are totally ordered and equality-comparable because they are part
//! of the resolution-cache fingerprint.

use std::fmt;

use crate::TypeToken;

/// Opaque, totally ordered refinement tag for one actual argument.
///
/// [`Insight::NONE`] means "no refinement" and is what frontends report for
/// values whose static type says everything.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Insight(u64);

impl Insight {
    /// The "no refinement" default.
    pub const NONE: Insight = Insight(0);

    /// Create an insight from a raw tag value.
    #[inline]
    pub const fn new(tag: u64) -> Self {
        Insight(tag)
    }

    /// Check whether this is the "no refinement" value.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Get the raw tag value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<TypeToken> for Insight {
    /// Use a type token as the refinement tag.
    ///
    /// Frontends for class hierarchies report the value's concrete class this
    /// way, so insight-priced routes can compare against known subclasses.
    fn from(token: TypeToken) -> Self {
        Insight(token.as_u64())
    }
}

impl fmt::Debug for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "Insight(NONE)")
        } else {
            write!(f, "Insight({:#018x})", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_none() {
        assert_eq!(Insight::default(), Insight::NONE);
        assert!(Insight::NONE.is_none());
        assert!(!Insight::new(7).is_none());
    }

    #[test]
    fn total_order() {
        let a = Insight::new(1);
        let b = Insight::new(2);
        assert!(a < b);
        assert_eq!(a, Insight::new(1));
    }

    #[test]
    fn from_token_round_trips_value() {
        let token = TypeToken::from_name("Derived");
        let insight = Insight::from(token);
        assert_eq!(insight.as_u64(), token.as_u64());
        assert_eq!(insight, Insight::from(token));
    }
}
