//! Generators for commonly used shapes.

use crate::model::{Dimension, Point, Shape};

/// Enumerates coordinate sets within one dimension.
///
/// All generated shapes use a fixed nested axis order — x outer, y middle,
/// z inner — so callers can zip a shape against a parallel sequence of
/// colors deterministically.
#[derive(Debug, Clone, Copy)]
pub struct Shaper {
    dim: Dimension,
}

impl Shaper {
    /// Create a shaper for a dimension.
    pub fn new(dim: Dimension) -> Self {
        Self { dim }
    }

    /// The dimension the shaper enumerates within.
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// Every coordinate in the volume.
    pub fn full_cube(&self) -> Shape {
        let mut shape = Shape::with_capacity(self.dim.volume());
        for x in 0..self.dim.width() as i32 {
            for y in 0..self.dim.height() as i32 {
                for z in 0..self.dim.depth() as i32 {
                    shape.push(Point::new(x, y, z));
                }
            }
        }
        shape
    }

    /// The y/z slice at a fixed x. Empty when `x` is outside the dimension.
    pub fn plane_x(&self, x: u32) -> Shape {
        if x >= self.dim.width() {
            return Shape::new();
        }
        let mut shape = Shape::with_capacity((self.dim.height() * self.dim.depth()) as usize);
        for y in 0..self.dim.height() as i32 {
            for z in 0..self.dim.depth() as i32 {
                shape.push(Point::new(x as i32, y, z));
            }
        }
        shape
    }

    /// The x/z slice at a fixed y. Empty when `y` is outside the dimension.
    pub fn plane_y(&self, y: u32) -> Shape {
        if y >= self.dim.height() {
            return Shape::new();
        }
        let mut shape = Shape::with_capacity((self.dim.width() * self.dim.depth()) as usize);
        for x in 0..self.dim.width() as i32 {
            for z in 0..self.dim.depth() as i32 {
                shape.push(Point::new(x, y as i32, z));
            }
        }
        shape
    }

    /// The x/y slice at a fixed z. Empty when `z` is outside the dimension.
    pub fn plane_z(&self, z: u32) -> Shape {
        if z >= self.dim.depth() {
            return Shape::new();
        }
        let mut shape = Shape::with_capacity((self.dim.width() * self.dim.height()) as usize);
        for x in 0..self.dim.width() as i32 {
            for y in 0..self.dim.height() as i32 {
                shape.push(Point::new(x, y, z as i32));
            }
        }
        shape
    }
}
