use super::Vector2;
use crate::core::traits::Real;
use crate::errors::Error;

/// Signed area of the polygon defined by `vertexes` using the shoelace
/// formula.
///
/// Accumulates the perpendicular dot product of consecutive vertex pairs
/// (wrapping last to first) and halves the total. The sign encodes winding
/// order: positive for counter clockwise vertex order, negative for
/// clockwise. Callers needing the unsigned area take the absolute value
/// themselves, this function never does.
///
/// # Examples
///
/// ```
/// # use gameplay_geom::core::math::*;
/// # use gameplay_geom::core::traits::*;
/// # use gameplay_geom::points;
/// let square = points![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
/// assert!(polygon_area(&square).fuzzy_eq(1.0));
/// let reversed = points![(0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)];
/// assert!(polygon_area(&reversed).fuzzy_eq(-1.0));
/// ```
pub fn polygon_area<T>(vertexes: &[Vector2<T>]) -> T
where
    T: Real,
{
    let mut double_area = T::zero();
    for (i, v1) in vertexes.iter().enumerate() {
        let v2 = vertexes[(i + 1) % vertexes.len()];
        double_area = double_area + v1.perp_dot(v2);
    }

    double_area / T::two()
}

/// Centroid of the polygon defined by `vertexes`, weighted by the same
/// per-edge perpendicular dot products as [polygon_area].
///
/// Fails with [Error::DegeneratePolygon] when the signed area is fuzzy zero
/// (degenerate/collinear vertexes), since the weight denominator would divide
/// by zero. The result is winding independent: reversing the vertex order
/// negates both the weights and the area, which cancel.
///
/// # Examples
///
/// ```
/// # use gameplay_geom::core::math::*;
/// # use gameplay_geom::points;
/// let square = points![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
/// let centroid = polygon_centroid(&square).unwrap();
/// assert!(centroid.fuzzy_eq(Vector2::new(0.5, 0.5)));
/// ```
pub fn polygon_centroid<T>(vertexes: &[Vector2<T>]) -> Result<Vector2<T>, Error>
where
    T: Real,
{
    let area = polygon_area(vertexes);
    if area.fuzzy_eq_zero() {
        return Err(Error::DegeneratePolygon);
    }

    let mut weighted_sum = Vector2::zero();
    for (i, v1) in vertexes.iter().enumerate() {
        let v2 = vertexes[(i + 1) % vertexes.len()];
        weighted_sum = weighted_sum + (v1 + v2).scale(v1.perp_dot(v2));
    }

    Ok(weighted_sum.scale(T::one() / (T::six() * area)))
}

/// Even-odd ray cast test for whether `point` lies inside the polygon defined
/// by `vertexes`.
///
/// Counts edge crossings of a ray cast from the point using the
/// `(i, j = i - 1 wrapping)` edge rule; an odd count means inside. Correct
/// for simple (non-self-intersecting) polygons of either winding;
/// implementation-defined for self-intersecting polygons (inherent to the
/// even-odd rule). Points exactly on the boundary are implementation-defined:
/// for an axis-aligned square the left/bottom edges test inside and the
/// right/top edges test outside.
///
/// # Examples
///
/// ```
/// # use gameplay_geom::core::math::*;
/// # use gameplay_geom::points;
/// let square = points![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
/// assert!(point_in_polygon(Vector2::new(0.5, 0.5), &square));
/// assert!(!point_in_polygon(Vector2::new(1.5, 0.5), &square));
/// ```
pub fn point_in_polygon<T>(point: Vector2<T>, vertexes: &[Vector2<T>]) -> bool
where
    T: Real,
{
    if vertexes.is_empty() {
        return false;
    }

    let mut inside = false;
    let mut j = vertexes.len() - 1;
    for i in 0..vertexes.len() {
        let (vi, vj) = (vertexes[i], vertexes[j]);
        if (vi.y > point.y) != (vj.y > point.y) {
            let intersect_x = (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x;
            if point.x < intersect_x {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}
