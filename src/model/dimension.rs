//! Bounds of a cube: width, height and depth.

use std::fmt;

use crate::error::CubeError;
use crate::model::Point;

/// The size of a cube along its three axes.
///
/// Every axis is at least 1; construction rejects anything smaller. A
/// dimension is created once per cube or state and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    width: u32,
    height: u32,
    depth: u32,
}

impl Dimension {
    /// Create a dimension from the three axis sizes.
    pub fn new(width: u32, height: u32, depth: u32) -> Result<Self, CubeError> {
        if width == 0 || height == 0 || depth == 0 {
            return Err(CubeError::InvalidDimension {
                width,
                height,
                depth,
            });
        }
        Ok(Self {
            width,
            height,
            depth,
        })
    }

    /// Create a regular cubic dimension with equal sides.
    pub fn cubic(side: u32) -> Result<Self, CubeError> {
        Dimension::new(side, side, side)
    }

    /// Width of the dimension (X axis).
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the dimension (Y axis).
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Depth of the dimension (Z axis).
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Total cell count (width * height * depth).
    #[inline]
    pub fn volume(&self) -> usize {
        self.width as usize * self.height as usize * self.depth as usize
    }

    /// Test whether the point lies inside the dimension.
    ///
    /// True iff every coordinate is within `[0, axis)` for its axis.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && (point.x as u32) < self.width
            && point.y >= 0
            && (point.y as u32) < self.height
            && point.z >= 0
            && (point.z as u32) < self.depth
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.depth)
    }
}
