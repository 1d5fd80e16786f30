//! Error types for cube construction and bounds-checked access.

use crate::model::{Dimension, Point};

/// Errors raised by cube construction and access.
///
/// Dimension mismatches during playback are not represented here; the
/// player reports those as boolean failures so heterogeneous animation
/// content can be skipped instead of aborting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CubeError {
    /// A dimension axis was below the minimum of 1.
    #[error("Dimension axes must all be at least 1 (got {width}x{height}x{depth})")]
    InvalidDimension {
        width: u32,
        height: u32,
        depth: u32,
    },

    /// A point addressed a cell outside the cube.
    #[error("Point {point} is outside the {dimension} cube")]
    OutOfBounds { point: Point, dimension: Dimension },

    /// A border offset left no room to sample a point.
    #[error("Offset {offset} leaves no room inside a {dimension} dimension")]
    InvalidOffset { offset: u32, dimension: Dimension },
}
