use crate::Vec2;

/// Axis-aligned rectangle stored as origin (minimum corner) plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T> {
    pub origin: Vec2<T>,
    pub size: Vec2<T>,
}

impl<T: Default> Default for Rect<T> {
    fn default() -> Self {
        Self {
            origin: Vec2::zero(),
            size: Vec2::zero(),
        }
    }
}

impl<T> Rect<T> {
    pub fn new(origin: Vec2<T>, size: Vec2<T>) -> Self {
        Self { origin, size }
    }
}

impl<T: std::ops::Add<Output = T> + Copy> Rect<T> {
    pub fn min(&self) -> Vec2<T> {
        self.origin
    }

    pub fn max(&self) -> Vec2<T> {
        self.origin + self.size
    }
}

impl<T: std::ops::Mul<Output = T> + Copy> Rect<T> {
    pub fn area(&self) -> T {
        self.size.x * self.size.y
    }
}

impl<T: std::ops::Add<Output = T> + std::ops::Div<Output = T> + Copy + From<u8>> Rect<T> {
    pub fn center(&self) -> Vec2<T> {
        let two: T = T::from(2u8);
        Vec2::new(
            self.origin.x + self.size.x / two,
            self.origin.y + self.size.y / two,
        )
    }
}

impl<T: std::ops::Sub<Output = T> + Copy> Rect<T> {
    pub fn from_min_max(min: Vec2<T>, max: Vec2<T>) -> Self {
        Self {
            origin: min,
            size: max - min,
        }
    }
}

impl<T: std::ops::Sub<Output = T> + PartialOrd + Copy> Rect<T> {
    /// Build the rectangle spanned by two arbitrary corners, whichever order
    /// their coordinates come in.
    pub fn from_corners(a: Vec2<T>, b: Vec2<T>) -> Self {
        let (min_x, max_x) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };
        let (min_y, max_y) = if a.y <= b.y { (a.y, b.y) } else { (b.y, a.y) };
        Self::from_min_max(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
    }
}

impl<T: std::ops::Add<Output = T> + PartialOrd + Copy> Rect<T> {
    pub fn contains_point(&self, point: Vec2<T>) -> bool {
        let max = self.max();
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x <= max.x
            && point.y <= max.y
    }
}
