use super::{Bounds2, Vector2, clamp, point_in_polygon};
use crate::core::traits::Real;

/// Inclusive test for whether `point` lies within `bounds` on both axes.
///
/// Propagates `None` (not `false`) when either input is missing, unlike the
/// collision tests below, so callers can distinguish "outside" from "unknown".
///
/// # Examples
///
/// ```
/// # use gameplay_geom::core::math::*;
/// let bounds = Bounds2::new(0.0, 0.0, 2.0, 1.0);
/// assert_eq!(point_in_bounds(Some(Vector2::new(1.0, 0.5)), Some(&bounds)), Some(true));
/// assert_eq!(point_in_bounds(Some(Vector2::new(3.0, 0.5)), Some(&bounds)), Some(false));
/// assert_eq!(point_in_bounds(None, Some(&bounds)), None);
/// ```
#[inline]
pub fn point_in_bounds<T>(point: Option<Vector2<T>>, bounds: Option<&Bounds2<T>>) -> Option<bool>
where
    T: Real,
{
    let (p, b) = (point?, bounds?);
    Some(p.x >= b.min_x && p.x <= b.max_x && p.y >= b.min_y && p.y <= b.max_y)
}

/// Corner points of a `width` by `height` rectangle centered at `center` and
/// rotated about it by `rotation` degrees.
///
/// Corners are returned in counter clockwise order starting from the
/// (pre-rotation) minimum corner.
#[inline]
pub fn rotated_bounds_corners<T>(
    center: Vector2<T>,
    width: T,
    height: T,
    rotation: T,
) -> [Vector2<T>; 4]
where
    T: Real,
{
    let half_width = width / T::two();
    let half_height = height / T::two();
    let radians = rotation.to_radians();
    [
        Vector2::new(center.x - half_width, center.y - half_height),
        Vector2::new(center.x + half_width, center.y - half_height),
        Vector2::new(center.x + half_width, center.y + half_height),
        Vector2::new(center.x - half_width, center.y + half_height),
    ]
    .map(|corner| corner.rotate_about(center, radians))
}

/// Test for whether `point` lies within the rotated rectangle defined by
/// `center`, `width`, `height`, and `rotation` degrees.
///
/// Derives the four rotated corners with [rotated_bounds_corners] and
/// delegates to [point_in_polygon], so boundary behavior matches that
/// function.
#[inline]
pub fn point_in_rotated_bounds<T>(
    point: Vector2<T>,
    center: Vector2<T>,
    width: T,
    height: T,
    rotation: T,
) -> bool
where
    T: Real,
{
    point_in_polygon(point, &rotated_bounds_corners(center, width, height, rotation))
}

/// Inclusive test for whether `point` lies within the circle with `radius`
/// and `center` given.
///
/// Compares squared distance to squared radius, points exactly on the
/// boundary are inside.
#[inline]
pub fn point_in_circle<T>(point: Vector2<T>, radius: T, center: Vector2<T>) -> bool
where
    T: Real,
{
    let d = point - center;
    d.dot(d) <= radius * radius
}

/// Test for whether two circles overlap.
///
/// Defensively answers `false` when any input is missing. Overlap is strict,
/// `distance < radius0 + radius1`: circles touching at exact tangency have
/// not collided.
///
/// # Examples
///
/// ```
/// # use gameplay_geom::core::math::*;
/// let c0 = Some(Vector2::new(0.0, 0.0));
/// let c1 = Some(Vector2::new(1.0, 0.0));
/// assert!(circles_collided(c0, c1, Some(1.0), Some(1.0)));
/// // tangent circles are not collided
/// let c2 = Some(Vector2::new(2.0, 0.0));
/// assert!(!circles_collided(c0, c2, Some(1.0), Some(1.0)));
/// assert!(!circles_collided(c0, None, Some(1.0), Some(1.0)));
/// ```
#[inline]
pub fn circles_collided<T>(
    center0: Option<Vector2<T>>,
    center1: Option<Vector2<T>>,
    radius0: Option<T>,
    radius1: Option<T>,
) -> bool
where
    T: Real,
{
    match (center0, center1, radius0, radius1) {
        (Some(c0), Some(c1), Some(r0), Some(r1)) => {
            let d = c1 - c0;
            d.dot(d).sqrt() < r0 + r1
        }
        _ => false,
    }
}

/// Test for whether two axis-aligned bounds overlap.
///
/// Defensively answers `false` when either bounds is missing. The overlap
/// comparisons are inclusive on both axes: bounds sharing only an edge have
/// collided.
#[inline]
pub fn bounds_collided<T>(b0: Option<&Bounds2<T>>, b1: Option<&Bounds2<T>>) -> bool
where
    T: Real,
{
    match (b0, b1) {
        (Some(b0), Some(b1)) => {
            b0.min_x <= b1.max_x
                && b0.max_x >= b1.min_x
                && b0.min_y <= b1.max_y
                && b0.max_y >= b1.min_y
        }
        _ => false,
    }
}

/// Test for whether the circle with `radius` and `center` overlaps `bounds`.
///
/// Clamps the circle center into the bounds to find the closest point, then
/// compares squared distance to squared radius with strict `<`: touching the
/// boundary exactly is not a collision, consistent with [circles_collided].
#[inline]
pub fn circle_in_bounds_collided<T>(radius: T, center: Vector2<T>, bounds: &Bounds2<T>) -> bool
where
    T: Real,
{
    let closest = Vector2::new(
        clamp(center.x, bounds.min_x, bounds.max_x),
        clamp(center.y, bounds.min_y, bounds.max_y),
    );
    let d = center - closest;
    d.dot(d) < radius * radius
}
