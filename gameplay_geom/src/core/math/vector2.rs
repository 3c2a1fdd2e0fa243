use super::base_math::min_max;
use crate::core::traits::Real;
use crate::errors::Error;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D point or direction with `x` and `y` components.
///
/// The type is dual-purpose: whether it represents a position or a direction
/// is contextual to the call, no distinction is enforced.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Create a zero vector (x = 0, y = 0).
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Uniformly scale the vector by `scale_factor`.
    pub fn scale(&self, scale_factor: T) -> Self {
        vec2(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product.
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Compute the perpendicular dot product (`self.x * other.y - self.y * other.x`).
    ///
    /// This is the 2D cross product; its sign tells which side of `self` the
    /// `other` vector lies on.
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared length of the vector.
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length of the vector.
    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }

    /// Length of the vector computed by max/min decomposition,
    /// `max * sqrt((min / max)^2 + 1)`.
    ///
    /// Avoids the intermediate overflow/underflow the naive `sqrt(x^2 + y^2)`
    /// suffers for extreme component magnitudes. Returns exactly zero when
    /// both components are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gameplay_geom::core::math::Vector2;
    /// let v = Vector2::new(1e200f64, 1e200);
    /// assert!(v.length().is_infinite());
    /// assert!(v.robust_length().is_finite());
    /// assert_eq!(Vector2::<f64>::zero().robust_length(), 0.0);
    /// ```
    pub fn robust_length(&self) -> T {
        let (min, max) = min_max(self.x.abs(), self.y.abs());
        if max == T::zero() {
            return T::zero();
        }

        let ratio = min / max;
        max * (ratio * ratio + T::one()).sqrt()
    }

    /// Normalize the vector (length = 1).
    ///
    /// Fails with [Error::ZeroLengthVector] when the squared length is exactly
    /// zero, since a zero-length vector has no direction (dividing through
    /// would yield non-finite components).
    ///
    /// # Examples
    ///
    /// ```
    /// # use gameplay_geom::core::math::Vector2;
    /// # use gameplay_geom::Error;
    /// let n = Vector2::new(3.0, 4.0).try_normalize().unwrap();
    /// assert!(n.fuzzy_eq(Vector2::new(0.6, 0.8)));
    /// assert_eq!(Vector2::<f64>::zero().try_normalize(), Err(Error::ZeroLengthVector));
    /// ```
    pub fn try_normalize(&self) -> Result<Self, Error> {
        let length_squared = self.length_squared();
        if length_squared == T::zero() {
            return Err(Error::ZeroLengthVector);
        }

        Ok(self.scale(T::one() / length_squared.sqrt()))
    }

    /// Fuzzy equal comparison with another vector using `fuzzy_epsilon` given.
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using `T::fuzzy_epsilon()`.
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    /// Rotate this point around an `origin` point by some `angle` in radians.
    pub fn rotate_about(&self, origin: Self, angle: T) -> Self {
        // translate to origin
        let translated = self - origin;

        // rotate
        let s = angle.sin();
        let c = angle.cos();
        let rotated = vec2(
            translated.x * c - translated.y * s,
            translated.x * s + translated.y * c,
        );

        // translate back
        rotated + origin
    }
}

#[inline(always)]
pub fn vec2<T>(x: T, y: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(x, y)
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: &Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }


        impl<'a, 'b, T: Real> ops::$op_trait<&'b Vector2<T>> for &'a Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, _rhs: &'b Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op _rhs.x, self.y $op _rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);
// component-wise multiply, distinct from both dot and perp_dot
ImplBinaryOp!(Mul, mul, *);

macro_rules! ImplUnaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self) -> Self::Output {
                Vector2::new($op self.x, $op self.y)
            }
        }

        impl<T: Real> ops::$op_trait for &Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self) -> Self::Output {
                Vector2::new($op self.x, $op self.y)
            }
        }

    };
}

ImplUnaryOp!(Neg, neg, -);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    macro_rules! test_binary_op {
        ($v1:ident, $v2:ident, $op:tt, $expected:expr) => {
            assert!(($v1 $op $v2).fuzzy_eq($expected));
            assert!((&$v1 $op $v2).fuzzy_eq($expected));
            assert!(($v1 $op &$v2).fuzzy_eq($expected));
            assert!((&$v1 $op &$v2).fuzzy_eq($expected));
        };
    }

    #[test]
    fn ops() {
        let v1 = vec2(4.0, 5.0);
        let v2 = vec2(1.0, 2.0);
        test_binary_op!(v1, v2, +, vec2(5.0, 7.0));
        test_binary_op!(v1, v2, -, vec2(3.0, 3.0));
        test_binary_op!(v1, v2, *, vec2(4.0, 10.0));
        assert!((-v1).fuzzy_eq(vec2(-4.0, -5.0)));
    }

    #[test]
    fn lengths() {
        let v = vec2(3.0, 4.0);
        assert_fuzzy_eq!(v.length_squared(), 25.0);
        assert_fuzzy_eq!(v.length(), 5.0);
        assert_fuzzy_eq!(v.robust_length(), 5.0);
    }

    #[test]
    fn robust_length_extremes() {
        let v = vec2(3e200f64, 4e200);
        assert!(v.length().is_infinite());
        assert!((v.robust_length() / 1e200).fuzzy_eq(5.0));
        assert_eq!(Vector2::<f64>::zero().robust_length(), 0.0);
    }

    #[test]
    fn try_normalize() {
        let n = vec2(3.0, 4.0).try_normalize().unwrap();
        assert!(n.fuzzy_eq(vec2(0.6, 0.8)));
        assert_eq!(
            Vector2::<f64>::zero().try_normalize(),
            Err(Error::ZeroLengthVector)
        );
    }
}
