#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use std::ops::Sub;

use crate::consts::ZOOM_SCALE;

/// A point in screen space (CSS pixels, as reported by pointer events).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

/// Transform applied to the enlarged image.
///
/// `pan_x` / `pan_y` are in CSS pixels, measured in screen space so they
/// track the pointer one-to-one. `scale` is 1.0 when flat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub pan_x: f64,
    pub pan_y: f64,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// No scale, no translation.
    #[must_use]
    pub fn identity() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, scale: 1.0 }
    }

    /// Fixed zoom scale with the given pan offset. No clamping is applied.
    #[must_use]
    pub fn zoomed(pan: Point) -> Self {
        Self { pan_x: pan.x, pan_y: pan.y, scale: ZOOM_SCALE }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// The pan offset as a point.
    #[must_use]
    pub fn pan(&self) -> Point {
        Point::new(self.pan_x, self.pan_y)
    }

    /// CSS `transform` value, or `None` when the style should be cleared.
    ///
    /// Translation comes first so it is applied in unscaled screen pixels.
    #[must_use]
    pub fn to_css(&self) -> Option<String> {
        if self.is_identity() {
            return None;
        }
        Some(format!("translate({}px, {}px) scale({})", self.pan_x, self.pan_y, self.scale))
    }
}
