//! A single LED: a point plus its color.

use serde::{Deserialize, Serialize};

use crate::model::{Color, Point};

/// An addressable LED value.
///
/// A light doubles as a device command ("set this cell to this color")
/// and as the payload of a single-cell change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Light {
    point: Point,
    color: Color,
}

impl Light {
    /// Create a switched-off light at the point.
    pub const fn new(point: Point) -> Self {
        Self {
            point,
            color: Color::OFF,
        }
    }

    /// Create a light at the point with the given color.
    pub const fn with_color(point: Point, color: Color) -> Self {
        Self { point, color }
    }

    /// Create a switched-off light from raw coordinates.
    pub const fn at(x: i32, y: i32, z: i32) -> Self {
        Light::new(Point::new(x, y, z))
    }

    /// Turn the light on with the default on color.
    pub fn on(&mut self) {
        self.color = Color::ON;
    }

    /// Turn the light on with a special color.
    pub fn on_with(&mut self, color: Color) {
        self.color = color;
    }

    /// Turn the light off.
    pub fn off(&mut self) {
        self.color = Color::OFF;
    }

    /// Position of the light.
    #[inline]
    pub fn point(&self) -> Point {
        self.point
    }

    /// Current color of the light.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.point.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.point.y
    }

    #[inline]
    pub fn z(&self) -> i32 {
        self.point.z
    }
}

impl From<Point> for Light {
    fn from(point: Point) -> Self {
        Light::new(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_off() {
        let light = Light::new(Point::new(1, 2, 3));
        assert_eq!(light.color(), Color::OFF);
        assert_eq!(Light::from(Point::new(1, 2, 3)), light);
        assert_eq!(Light::at(1, 2, 3), light);
    }

    #[test]
    fn test_switching() {
        let mut light = Light::at(0, 0, 0);
        light.on();
        assert_eq!(light.color(), Color::ON);
        light.on_with(Color::RED);
        assert_eq!(light.color(), Color::RED);
        light.off();
        assert_eq!(light.color(), Color::OFF);
    }

    #[test]
    fn test_copy_preserves_value() {
        let mut original = Light::with_color(Point::new(4, 5, 6), Color::BLUE);
        let copy = original;
        original.off();
        assert_eq!(copy.color(), Color::BLUE);
        assert_eq!(copy.point(), Point::new(4, 5, 6));
    }
}
