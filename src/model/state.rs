//! A momentary snapshot of every LED color in a cube.

use crate::model::{Color, Dimension, Light};

/// A dense grid of colors sized exactly to one [`Dimension`].
///
/// Cells are stored in a flat buffer indexed `((x * height) + y) * depth + z`,
/// matching the x-outer, y-middle, z-inner iteration order used by the
/// shape helpers.
///
/// `get`/`set` perform no bounds validation of their own; an out-of-range
/// index panics via the slice index. Bounds policy belongs to the callers:
/// [`Cube`](crate::model::Cube) and [`Player`](crate::animation::Player)
/// are the sanctioned callers and both check first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    dim: Dimension,
    cells: Vec<Color>,
}

impl State {
    /// Create a state with every cell switched off.
    pub fn new(dim: Dimension) -> Self {
        State::filled(dim, Color::OFF)
    }

    /// Create a state with every cell set to the given color.
    pub fn filled(dim: Dimension, color: Color) -> Self {
        Self {
            dim,
            cells: vec![color; dim.volume()],
        }
    }

    /// The dimension this state was sized to.
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// Convert (x, y, z) coordinates to a flat index.
    #[inline]
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (x * self.dim.height() as usize + y) * self.dim.depth() as usize + z
    }

    /// Color of the cell at (x, y, z). Trusts the caller to stay in bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Color {
        self.cells[self.index(x, y, z)]
    }

    /// Set the cell at (x, y, z). Trusts the caller to stay in bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, color: Color) {
        let index = self.index(x, y, z);
        self.cells[index] = color;
    }

    /// Write a light into its cell. Same trust contract as [`State::set`].
    pub fn set_light(&mut self, light: Light) {
        self.set(
            light.x() as usize,
            light.y() as usize,
            light.z() as usize,
            light.color(),
        );
    }

    /// Overwrite every cell with one color.
    pub fn fill(&mut self, color: Color) {
        self.cells.fill(color);
    }
}
