//! Path length with a saturating "unreached" sentinel
//!
//! Every shortest-path algorithm in this crate agrees on [`Distance`]:
//! a signed integer length where [`Distance::INFINITY`] means no path is known.
//! Addition involving the sentinel short-circuits to the sentinel, so two
//! unreached lengths can never wrap into a small finite value.

use crate::common::{Weight, MAX_WEIGHT};
use std::fmt;
use std::ops::Add;

/// Shortest-path length from some source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(i64);

impl Distance {
    /// "No path known". Half of `i64::MAX`, so even an unguarded sum of two
    /// sentinels stays inside the type.
    pub const INFINITY: Distance = Distance(i64::MAX / 2);

    pub const ZERO: Distance = Distance(0);

    /// Largest finite length, equal to [`MAX_WEIGHT`](crate::common::MAX_WEIGHT).
    pub const MAX_FINITE: Distance = Distance(MAX_WEIGHT);

    /// Wrap a finite length. Values above [`Distance::MAX_FINITE`] collapse
    /// to the sentinel.
    pub fn new(value: i64) -> Self {
        Distance(value.min(Self::INFINITY.0))
    }

    pub fn is_finite(self) -> bool {
        self.0 < Self::INFINITY.0
    }

    pub fn is_infinite(self) -> bool {
        !self.is_finite()
    }

    /// The finite length, or `None` for the sentinel.
    pub fn value(self) -> Option<i64> {
        if self.is_finite() {
            Some(self.0)
        } else {
            None
        }
    }

    /// Extend this length by one edge.
    ///
    /// An unreached length stays unreached.
    pub fn add_weight(self, weight: Weight) -> Distance {
        if self.is_infinite() {
            return Distance::INFINITY;
        }
        Distance::new(self.0.saturating_add(weight))
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        if self.is_infinite() || rhs.is_infinite() {
            return Distance::INFINITY;
        }
        Distance::new(self.0.saturating_add(rhs.0))
    }
}

impl From<i64> for Distance {
    fn from(value: i64) -> Self {
        Distance::new(value)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(v) => write!(f, "{}", v),
            None => write!(f, "inf"),
        }
    }
}

// Serialized as an optional integer: `null` is the sentinel.
#[cfg(feature = "serde")]
impl serde::Serialize for Distance {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Distance {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<i64>::deserialize(deserializer)?;
        Ok(value.map_or(Distance::INFINITY, Distance::new))
    }
}
