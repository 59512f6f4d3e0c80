use multipose_base::{Rect, Vec2};

/// Convert a vertical coordinate between the model's top-down origin and the
/// consumer's bottom-up origin. The mapping is its own inverse.
#[inline]
pub fn flip_y(y: f32) -> f32 {
    1.0 - y
}

/// Read a model-space `(y, x)` pair as a bottom-up point.
#[inline]
pub fn to_bottom_up(y: f32, x: f32) -> Vec2<f32> {
    Vec2::new(x, flip_y(y))
}

/// Rebuild a model-space `(y_min, x_min, y_max, x_max)` box as a bottom-up rect.
pub fn box_to_bottom_up(y_min: f32, x_min: f32, y_max: f32, x_max: f32) -> Rect<f32> {
    Rect::from_corners(to_bottom_up(y_min, x_min), to_bottom_up(y_max, x_max))
}

/// Mirror a rect vertically, switching between top-left and bottom-left origin.
pub fn flip_rect(rect: Rect<f32>) -> Rect<f32> {
    Rect::new(
        Vec2::new(rect.origin.x, flip_y(rect.origin.y + rect.size.y)),
        rect.size,
    )
}
