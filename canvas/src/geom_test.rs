#![allow(clippy::float_cmp)]

use super::*;

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

// --- Bounds ---

#[test]
fn bounds_pixel_is_one_by_one() {
    let b = Bounds::pixel(7, 9);
    assert_eq!(b, Bounds { min_x: 7, min_y: 9, max_x: 7, max_y: 9 });
    assert_eq!(b.center(), Point::new(7.0, 9.0));
}

#[test]
fn bounds_include_grows_in_every_direction() {
    let mut b = Bounds::pixel(10, 10);
    b.include(4, 12);
    b.include(15, 2);
    assert_eq!(b, Bounds { min_x: 4, min_y: 2, max_x: 15, max_y: 12 });
}

#[test]
fn bounds_include_inside_is_noop() {
    let mut b = Bounds { min_x: 0, min_y: 0, max_x: 10, max_y: 10 };
    b.include(5, 5);
    assert_eq!(b, Bounds { min_x: 0, min_y: 0, max_x: 10, max_y: 10 });
}

#[test]
fn bounds_center_is_midpoint_of_corners() {
    let b = Bounds { min_x: 10, min_y: 20, max_x: 30, max_y: 61 };
    assert_eq!(b.center(), Point::new(20.0, 40.5));
}

// --- normalize_client_point ---

#[test]
fn normalize_subtracts_rect_origin() {
    let p = normalize_client_point(Point::new(150.0, 90.0), Point::new(100.0, 40.0));
    assert_eq!(p, Point::new(50.0, 50.0));
}

#[test]
fn normalize_with_zero_origin_is_identity() {
    let p = normalize_client_point(Point::new(12.5, 7.25), Point::default());
    assert_eq!(p, Point::new(12.5, 7.25));
}

#[test]
fn normalize_can_go_negative_outside_canvas() {
    let p = normalize_client_point(Point::new(5.0, 5.0), Point::new(20.0, 10.0));
    assert_eq!(p, Point::new(-15.0, -5.0));
}
