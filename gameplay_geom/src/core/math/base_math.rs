use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use gameplay_geom::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 { (v1, v2) } else { (v2, v1) }
}

/// Distance squared between the points `p0` and `p1`.
///
/// Propagates `None` when either point is missing.
#[inline]
pub fn dist_squared<T>(p0: Option<Vector2<T>>, p1: Option<Vector2<T>>) -> Option<T>
where
    T: Real,
{
    let d = p1? - p0?;
    Some(d.dot(d))
}

/// Distance between the points `p0` and `p1`.
///
/// Propagates `None` when either point is missing. Note
/// [Vector2::length] stays total; only the two-point distance queries carry
/// the missing-input contract.
///
/// # Examples
///
/// ```
/// # use gameplay_geom::core::math::*;
/// # use gameplay_geom::core::traits::*;
/// let p0 = Some(Vector2::new(0.0, 0.0));
/// let p1 = Some(Vector2::new(3.0, 4.0));
/// assert!(dist(p0, p1).unwrap().fuzzy_eq(5.0));
/// assert_eq!(dist(p0, None), None);
/// ```
#[inline]
pub fn dist<T>(p0: Option<Vector2<T>>, p1: Option<Vector2<T>>) -> Option<T>
where
    T: Real,
{
    Some(dist_squared(p0, p1)?.sqrt())
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Returns the point offset from `p1` by `distance` along the direction from
/// `p0` to `p1`.
///
/// `distance` is not clamped to the segment, the result extrapolates freely
/// beyond `p1` (or behind it for negative `distance`). The heading comes from
/// `atan2`, so coincident input points degenerate to an offset along +x
/// rather than a division by zero.
///
/// # Examples
///
/// ```
/// # use gameplay_geom::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(1.0, 0.0);
/// assert!(point_along_line(p0, p1, 2.0).fuzzy_eq(Vector2::new(3.0, 0.0)));
/// ```
#[inline]
pub fn point_along_line<T>(p0: Vector2<T>, p1: Vector2<T>, distance: T) -> Vector2<T>
where
    T: Real,
{
    let (s, c) = T::atan2(p1.y - p0.y, p1.x - p0.x).sin_cos();
    Vector2::new(p1.x + distance * c, p1.y + distance * s)
}

/// Position of `value` within the range `min` to `max` as a fraction,
/// `(value - min) / (max - min)`.
///
/// Only the upper bound is clamped: results above `1` return `1` while values
/// below `min` yield negative results untouched. The asymmetry is part of the
/// contract.
///
/// # Examples
///
/// ```
/// # use gameplay_geom::core::math::*;
/// # use gameplay_geom::core::traits::*;
/// assert!(normalize_range(5.0, 0.0, 10.0).fuzzy_eq(0.5));
/// assert!(normalize_range(15.0, 0.0, 10.0).fuzzy_eq(1.0));
/// assert!(normalize_range(-5.0, 0.0, 10.0).fuzzy_eq(-0.5));
/// ```
#[inline]
pub fn normalize_range<T>(value: T, min: T, max: T) -> T
where
    T: Real,
{
    let fraction = (value - min) / (max - min);
    if fraction > T::one() { T::one() } else { fraction }
}

/// Affine remap of `value` from the range `min_a..max_a` to `min_b..max_b`.
///
/// No clamping at either end.
#[inline]
pub fn remap_range<T>(value: T, min_a: T, max_a: T, min_b: T, max_b: T) -> T
where
    T: Real,
{
    (value - min_a) / (max_a - min_a) * (max_b - min_b) + min_b
}

/// Round `number` to `decimal_places` using round-half-up,
/// `floor(number * 10^p + 0.5) / 10^p`.
///
/// Propagates `None` when `number` is missing. Half-up is biased for negative
/// numbers: `-0.5` rounds to `0`, not away from zero.
///
/// # Examples
///
/// ```
/// # use gameplay_geom::core::math::*;
/// assert_eq!(round_to(Some(2.345), 2), Some(2.35));
/// assert_eq!(round_to(Some(-0.5), 0), Some(0.0));
/// assert_eq!(round_to::<f64>(None, 0), None);
/// ```
#[inline]
pub fn round_to<T>(number: Option<T>, decimal_places: i32) -> Option<T>
where
    T: Real,
{
    let factor = T::ten().powi(decimal_places);
    Some((number? * factor + T::half()).floor() / factor)
}

/// Clamp `value` into the inclusive range `min` to `max`.
#[inline]
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: Real,
{
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
