//! Angle conversions and arithmetic in the crate's screen-space degree convention.
//!
//! Angles are degrees with 0° pointing "up" on screen (negative y in a y-down
//! coordinate system) and increasing clockwise on screen. Converting between
//! angles and direction vectors applies the [SCREEN_ANGLE_OFFSET_DEGREES]
//! offset so that convention holds; angle outputs are normalized into
//! `[0, 360)`.
use super::Vector2;
use crate::core::traits::Real;

/// Offset in degrees between the screen-space angle convention (0° = up) and
/// the mathematical convention (0° = +x axis).
///
/// [vector_from_angle] subtracts this offset before converting to radians and
/// [angle_between] adds it back, so the two functions are inverses of each
/// other modulo the `[0, 360)` normalization.
pub const SCREEN_ANGLE_OFFSET_DEGREES: f64 = 90.0;

/// Unit direction vector for the screen-space `angle` in degrees.
///
/// Total over all real inputs.
///
/// # Examples
///
/// ```
/// # use gameplay_geom::core::math::*;
/// // 0° points up on screen (negative y with y-down coordinates)
/// assert!(vector_from_angle(0.0).fuzzy_eq(Vector2::new(0.0, -1.0)));
/// assert!(vector_from_angle(90.0).fuzzy_eq(Vector2::new(1.0, 0.0)));
/// assert!(vector_from_angle(180.0).fuzzy_eq(Vector2::new(0.0, 1.0)));
/// ```
#[inline]
pub fn vector_from_angle<T>(angle: T) -> Vector2<T>
where
    T: Real,
{
    let (s, c) = (angle - T::ninety()).to_radians().sin_cos();
    Vector2::new(c, s)
}

/// Screen-space angle in degrees of the direction from `p0` to `p1`.
///
/// Result is in `[0, 360)`. Propagates `None` when either point is missing.
/// Inverse of [vector_from_angle].
///
/// # Examples
///
/// ```
/// # use gameplay_geom::core::math::*;
/// # use gameplay_geom::core::traits::*;
/// let origin = Some(Vector2::new(0.0, 0.0));
/// assert!(angle_between(origin, Some(Vector2::new(1.0, 0.0))).unwrap().fuzzy_eq(90.0));
/// assert!(angle_between(origin, Some(Vector2::new(0.0, 1.0))).unwrap().fuzzy_eq(180.0));
/// assert_eq!(angle_between(origin, None), None);
/// ```
#[inline]
pub fn angle_between<T>(p0: Option<Vector2<T>>, p1: Option<Vector2<T>>) -> Option<T>
where
    T: Real,
{
    let (p0, p1) = (p0?, p1?);
    let angle = T::atan2(p1.y - p0.y, p1.x - p0.x).to_degrees() + T::ninety();
    if angle < T::zero() {
        Some(angle + T::three_sixty())
    } else {
        Some(angle)
    }
}

/// Shortest signed difference between two angles in degrees,
/// `floor_mod(a0 - a1 + 180, 360) - 180`.
///
/// Positive result means `a0` is clockwise-ahead of `a1` on screen. An exact
/// half-turn difference maps to `-180`, so the result lies in `[-180, 180)`.
///
/// # Examples
///
/// ```
/// # use gameplay_geom::core::math::*;
/// # use gameplay_geom::core::traits::*;
/// assert!(angle_difference(90.0, 45.0).fuzzy_eq(45.0));
/// assert!(angle_difference(45.0, 90.0).fuzzy_eq(-45.0));
/// // wraps across 0/360
/// assert!(angle_difference(10.0, 350.0).fuzzy_eq(20.0));
/// ```
#[inline]
pub fn angle_difference<T>(a0: T, a1: T) -> T
where
    T: Real,
{
    floor_mod(a0 - a1 + T::one_eighty(), T::three_sixty()) - T::one_eighty()
}

/// Floor-division modulo, `value - floor(value / modulus) * modulus`.
///
/// Unlike the truncating `%` remainder the result always has the sign of
/// `modulus`, so for a positive modulus it is never negative.
///
/// # Examples
///
/// ```
/// # use gameplay_geom::core::math::*;
/// # use gameplay_geom::core::traits::*;
/// assert!(floor_mod(450.0, 360.0).fuzzy_eq(90.0));
/// assert!(floor_mod(-90.0, 360.0).fuzzy_eq(270.0));
/// assert!((-90.0f64 % 360.0).fuzzy_eq(-90.0));
/// ```
#[inline]
pub fn floor_mod<T>(value: T, modulus: T) -> T
where
    T: Real,
{
    value - (value / modulus).floor() * modulus
}

/// Normalize degrees to be in `[0, 360)`, e.g. `-45` becomes `315` and `405`
/// becomes `45`.
///
/// # Examples
///
/// ```
/// # use gameplay_geom::core::math::*;
/// # use gameplay_geom::core::traits::*;
/// assert!(normalize_degrees(-45.0).fuzzy_eq(315.0));
/// assert!(normalize_degrees(405.0).fuzzy_eq(45.0));
/// assert!(normalize_degrees(360.0).fuzzy_eq(0.0));
/// // anything already in [0, 360) is left unchanged
/// assert!(normalize_degrees(359.5).fuzzy_eq(359.5));
/// ```
#[inline]
pub fn normalize_degrees<T>(angle: T) -> T
where
    T: Real,
{
    if angle >= T::zero() && angle < T::three_sixty() {
        return angle;
    }

    floor_mod(angle, T::three_sixty())
}
