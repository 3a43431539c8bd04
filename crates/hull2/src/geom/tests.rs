use super::*;
use proptest::prelude::*;

#[test]
fn point_accessors_and_origin() {
    let p = Point::new(1.0, 2.0);
    assert_eq!(p.x(), 1.0);
    assert_eq!(p.y(), 2.0);
    assert_eq!(Point::origin(), Point::new(0.0, 0.0));
}

#[test]
fn point_distance_is_euclidean() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert_eq!(a.distance_to(b), 5.0);
    assert_eq!(a.distance_to(a), 0.0);
}

#[test]
fn point_equality_is_exact() {
    let a = Point::new(0.0, 0.0);
    assert_eq!(a, Point::new(0.0, 0.0));
    assert_ne!(a, Point::new(1.0, 1.0));
    assert_ne!(a, Point::new(1e-300, 0.0));
}

#[test]
fn point_subtraction_is_displacement() {
    assert_eq!(
        Point::new(1.0, 1.0) - Point::new(2.0, 2.0),
        Point::new(-1.0, -1.0)
    );
}

#[test]
fn display_formats() {
    let l = Line::new(Point::new(0.0, 0.5), Point::new(1.0, -2.0));
    assert_eq!(l.start().to_string(), "(0, 0.5)");
    assert_eq!(l.to_string(), "(0, 0.5)->(1, -2)");
}

#[test]
fn line_reversed_swaps_endpoints() {
    let s = Point::new(0.0, 0.0);
    let e = Point::new(1.0, 1.0);
    let r = Line::new(s, e).reversed();
    assert_eq!(r.start(), e);
    assert_eq!(r.end(), s);
}

#[test]
fn line_slope_intercept_length() {
    let l = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
    assert_eq!(l.slope(), 1.0);
    assert_eq!(l.intercept(), 0.0);
    assert!((l.length() - 2f64.sqrt()).abs() < 1e-12);

    let shifted = Line::new(Point::new(1.0, 3.0), Point::new(3.0, 7.0));
    assert_eq!(shifted.slope(), 2.0);
    assert_eq!(shifted.intercept(), 1.0);

    let vertical = Line::new(Point::new(2.0, 0.0), Point::new(2.0, 5.0));
    assert!(vertical.is_vertical());
    assert!(vertical.slope().is_infinite());
}

#[test]
fn distance_from_point_vertical_fallback() {
    let l = Line::new(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
    assert_eq!(l.distance_from_point(Point::new(1.0, 0.0)), 1.0);
    // unsigned on both sides and for either direction
    assert_eq!(l.distance_from_point(Point::new(-2.0, 7.0)), 2.0);
    assert_eq!(l.reversed().distance_from_point(Point::new(-2.0, 7.0)), 2.0);
}

#[test]
fn distance_from_point_general_and_on_line() {
    let l = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
    assert_eq!(l.distance_from_point(Point::new(2.0, 2.0)), 0.0);
    assert_eq!(l.distance_from_point(Point::new(-3.0, -3.0)), 0.0);
    let d = l.distance_from_point(Point::new(1.0, 0.0));
    assert!((d - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);

    let horizontal = Line::new(Point::new(-1.0, 2.0), Point::new(4.0, 2.0));
    assert_eq!(horizontal.distance_from_point(Point::new(0.0, -1.0)), 3.0);
}

#[test]
fn left_of_is_counter_clockwise_side() {
    let l = Line::new(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
    assert!(l.is_point_on_left_of_line(Point::new(-1.0, 0.0)));
    assert!(!l.is_point_on_left_of_line(Point::new(1.0, 0.0)));
    // on the line (inside and beyond the segment) is never left
    assert!(!l.is_point_on_left_of_line(Point::new(0.0, 0.5)));
    assert!(!l.is_point_on_left_of_line(Point::new(0.0, 9.0)));
}

#[test]
fn cos_angle_straight_turn_and_reversal() {
    let a = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
    let straight = Line::new(Point::new(1.0, 0.0), Point::new(3.0, 0.0));
    let right_angle = Line::new(Point::new(1.0, 0.0), Point::new(1.0, 2.0));
    assert!((a.cos_angle(&straight) - 1.0).abs() < 1e-12);
    assert!(a.cos_angle(&right_angle).abs() < 1e-12);
    assert!((a.cos_angle(&a.reversed()) + 1.0).abs() < 1e-12);

    let degenerate = Line::new(Point::new(1.0, 0.0), Point::new(1.0, 0.0));
    assert!(a.cos_angle(&degenerate).is_nan());
}

#[test]
fn line_subtraction_is_endpoint_wise() {
    let first = Line::new(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
    let second = Line::new(Point::new(1.0, 0.0), Point::new(-1.0, 0.0));
    let diff = first - second;
    assert_eq!(diff.start(), Point::new(-1.0, 0.0));
    assert_eq!(diff.end(), Point::new(1.0, 1.0));
}

fn coord() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

proptest! {
    #[test]
    fn left_of_flips_under_reversal(
        sx in coord(), sy in coord(), ex in coord(), ey in coord(), px in coord(), py in coord()
    ) {
        let l = Line::new(Point::new(sx, sy), Point::new(ex, ey));
        let p = Point::new(px, py);
        prop_assume!(l.cross(p).abs() > 1e-6);
        prop_assert_ne!(l.is_point_on_left_of_line(p), l.reversed().is_point_on_left_of_line(p));
    }

    #[test]
    fn distance_is_finite_and_symmetric_under_reversal(
        sx in coord(), sy in coord(), ex in coord(), ey in coord(), px in coord(), py in coord()
    ) {
        let l = Line::new(Point::new(sx, sy), Point::new(ex, ey));
        prop_assume!(l.start() != l.end());
        let p = Point::new(px, py);
        let d = l.distance_from_point(p);
        prop_assert!(d.is_finite() && d >= 0.0);
        let r = l.reversed().distance_from_point(p);
        prop_assert!((d - r).abs() <= 1e-9 * (1.0 + d.abs()));
    }
}
