use gameplay_geom::assert_fuzzy_eq;
use gameplay_geom::core::math::{
    Vector2, clamp, dist, dist_squared, midpoint, min_max, normalize_range, point_along_line,
    remap_range, round_to,
};
use gameplay_geom::core::traits::FuzzyEq;

#[test]
fn min_max_orders_values() {
    assert_eq!(min_max(8.0, 4.0), (4.0, 8.0));
    assert_eq!(min_max(4.0, 8.0), (4.0, 8.0));
    assert_eq!(min_max(5.0, 5.0), (5.0, 5.0));
}

#[test]
fn dist_squared_basic() {
    let p0 = Some(Vector2::new(1.0, 2.0));
    let p1 = Some(Vector2::new(4.0, 6.0));
    assert_fuzzy_eq!(dist_squared(p0, p1).unwrap(), 25.0);
    assert_fuzzy_eq!(dist_squared(p0, p0).unwrap(), 0.0);
}

#[test]
fn dist_basic_and_symmetric() {
    let p0 = Some(Vector2::new(0.0, 0.0));
    let p1 = Some(Vector2::new(3.0, 4.0));
    assert_fuzzy_eq!(dist(p0, p1).unwrap(), 5.0);
    assert_eq!(dist(p0, p1), dist(p1, p0));
}

#[test]
fn dist_missing_inputs_propagate() {
    let p = Some(Vector2::new(1.0, 1.0));
    assert_eq!(dist_squared(None, p), None);
    assert_eq!(dist_squared(p, None), None);
    assert_eq!(dist(None, p), None);
    assert_eq!(dist::<f64>(None, None), None);
}

#[test]
fn midpoint_basic() {
    let mid = midpoint(Vector2::new(0.0, 0.0), Vector2::new(4.0, 2.0));
    assert!(mid.fuzzy_eq(Vector2::new(2.0, 1.0)));
}

#[test]
fn point_along_line_extends_past_end() {
    let p0 = Vector2::new(0.0, 0.0);
    let p1 = Vector2::new(1.0, 0.0);
    assert!(point_along_line(p0, p1, 2.0).fuzzy_eq(Vector2::new(3.0, 0.0)));
    // negative distance steps back toward p0
    assert!(point_along_line(p0, p1, -0.5).fuzzy_eq(Vector2::new(0.5, 0.0)));
}

#[test]
fn point_along_line_diagonal() {
    let p0 = Vector2::new(0.0, 0.0);
    let p1 = Vector2::new(3.0, 4.0);
    let result = point_along_line(p0, p1, 5.0);
    assert!(result.fuzzy_eq(Vector2::new(6.0, 8.0)));
}

#[test]
fn point_along_line_coincident_points() {
    // atan2(0, 0) is 0, so the offset degenerates to +x
    let p = Vector2::new(1.0, 1.0);
    assert!(point_along_line(p, p, 5.0).fuzzy_eq(Vector2::new(6.0, 1.0)));
}

#[test]
fn normalize_range_endpoints() {
    assert_fuzzy_eq!(normalize_range(0.0, 0.0, 10.0), 0.0);
    assert_fuzzy_eq!(normalize_range(10.0, 0.0, 10.0), 1.0);
    assert_fuzzy_eq!(normalize_range(5.0, 0.0, 10.0), 0.5);
}

#[test]
fn normalize_range_clamps_upper_only() {
    // above max clamps to 1
    assert_fuzzy_eq!(normalize_range(15.0, 0.0, 10.0), 1.0);
    // below min is left negative, no lower clamp
    assert!(normalize_range(-5.0, 0.0, 10.0) < 0.0);
    assert_fuzzy_eq!(normalize_range(-5.0, 0.0, 10.0), -0.5);
}

#[test]
fn remap_range_no_clamping() {
    assert_fuzzy_eq!(remap_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
    assert_fuzzy_eq!(remap_range(0.0, 0.0, 10.0, 50.0, 100.0), 50.0);
    // outside the source range extrapolates
    assert_fuzzy_eq!(remap_range(15.0, 0.0, 10.0, 0.0, 100.0), 150.0);
    assert_fuzzy_eq!(remap_range(-5.0, 0.0, 10.0, 0.0, 100.0), -50.0);
}

#[test]
fn remap_range_inverted_target() {
    assert_fuzzy_eq!(remap_range(2.0, 0.0, 10.0, 100.0, 0.0), 80.0);
}

#[test]
fn round_to_decimal_places() {
    assert_eq!(round_to(Some(2.345), 2), Some(2.35));
    assert_eq!(round_to(Some(2.4), 0), Some(2.0));
    assert_eq!(round_to(Some(2.5), 0), Some(3.0));
    assert_eq!(round_to(Some(123.456), 1), Some(123.5));
}

#[test]
fn round_to_half_up_bias_for_negatives() {
    // half-up, not away-from-zero: -0.5 rounds toward 0
    assert_eq!(round_to(Some(-0.5), 0), Some(0.0));
    assert_eq!(round_to(Some(-1.5), 0), Some(-1.0));
    assert_eq!(round_to(Some(-2.4), 0), Some(-2.0));
    assert_eq!(round_to(Some(-2.6), 0), Some(-3.0));
}

#[test]
fn round_to_missing_input_propagates() {
    assert_eq!(round_to::<f64>(None, 2), None);
}

#[test]
fn clamp_basic() {
    assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
    assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
    assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    assert_eq!(clamp(0.0, 0.0, 10.0), 0.0);
    assert_eq!(clamp(10.0, 0.0, 10.0), 10.0);
}
