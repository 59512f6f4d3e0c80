use multipose_base::{Rect, Vec2};

#[test]
fn test_rect_from_min_max() {
    let rect = Rect::from_min_max(Vec2::new(0.25, 0.5), Vec2::new(0.75, 1.0));
    assert_eq!(rect.origin, Vec2::new(0.25, 0.5));
    assert_eq!(rect.size, Vec2::new(0.5, 0.5));
    assert_eq!(rect.max(), Vec2::new(0.75, 1.0));
}

#[test]
fn test_rect_from_corners_any_order() {
    let a = Rect::from_corners(Vec2::new(0.8, 0.1), Vec2::new(0.2, 0.6));
    let b = Rect::from_corners(Vec2::new(0.2, 0.6), Vec2::new(0.8, 0.1));
    assert_eq!(a, b);
    assert_eq!(a.min(), Vec2::new(0.2, 0.1));
    assert_eq!(a.max(), Vec2::new(0.8, 0.6));
}

#[test]
fn test_rect_area_and_center() {
    let rect = Rect::new(Vec2::new(0.0f32, 0.0), Vec2::new(0.5, 0.25));
    assert_eq!(rect.area(), 0.125);
    assert_eq!(rect.center(), Vec2::new(0.25, 0.125));
}

#[test]
fn test_rect_contains_point_inclusive_edges() {
    let rect = Rect::new(Vec2::new(0.0f32, 0.0), Vec2::new(1.0, 1.0));
    assert!(rect.contains_point(Vec2::new(0.0, 0.0)));
    assert!(rect.contains_point(Vec2::new(1.0, 1.0)));
    assert!(!rect.contains_point(Vec2::new(1.1, 0.5)));
}

#[test]
fn test_rect_default_is_zero() {
    let rect: Rect<f32> = Rect::default();
    assert_eq!(rect.origin, Vec2::zero());
    assert_eq!(rect.size, Vec2::zero());
}
