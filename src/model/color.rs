//! RGBA color values for individual LEDs.

use serde::{Deserialize, Serialize};

/// An 8-bit RGBA color.
///
/// Colors are plain values with structural equality, so they can key
/// material caches in a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::opaque(0, 0, 0);
    pub const WHITE: Color = Color::opaque(255, 255, 255);
    pub const RED: Color = Color::opaque(255, 0, 0);
    pub const GREEN: Color = Color::opaque(0, 255, 0);
    pub const BLUE: Color = Color::opaque(0, 0, 255);

    /// Color of a switched-off LED.
    pub const OFF: Color = Color::BLACK;
    /// Default color of a switched-on LED.
    pub const ON: Color = Color::WHITE;

    /// Create a color from all four components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::OFF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_off() {
        assert_eq!(Color::default(), Color::OFF);
        assert_eq!(Color::OFF, Color::BLACK);
        assert_eq!(Color::ON, Color::WHITE);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Color::opaque(1, 2, 3), Color::new(1, 2, 3, 255));
        assert_ne!(Color::RED, Color::GREEN);
    }
}
