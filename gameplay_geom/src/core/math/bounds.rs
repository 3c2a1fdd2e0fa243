use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds defined by minimum and maximum extents on each axis.
///
/// Callers are expected to uphold `min_x <= max_x` and `min_y <= max_y`;
/// the invariant is not validated and queries over inverted bounds yield
/// undefined numeric results.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds2<T = f64> {
    pub min_x: T,
    pub min_y: T,
    pub max_x: T,
    pub max_y: T,
}

impl<T> Bounds2<T>
where
    T: Real,
{
    /// Create new bounds from the extents given.
    pub fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Bounds2 {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Extent along the x axis.
    pub fn width(&self) -> T {
        self.max_x - self.min_x
    }

    /// Extent along the y axis.
    pub fn height(&self) -> T {
        self.max_y - self.min_y
    }

    /// Fuzzy equal comparison with other bounds using `fuzzy_epsilon` given.
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.min_x.fuzzy_eq_eps(other.min_x, fuzzy_epsilon)
            && self.min_y.fuzzy_eq_eps(other.min_y, fuzzy_epsilon)
            && self.max_x.fuzzy_eq_eps(other.max_x, fuzzy_epsilon)
            && self.max_y.fuzzy_eq_eps(other.max_y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with other bounds using `T::fuzzy_epsilon()`.
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}
