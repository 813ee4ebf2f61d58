//! Stroke colors understood by the laser software.
//!
//! Blue strokes are cut, red strokes are engraved.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const CUT_BLUE: Color = Color::rgb(0, 0, 255);
    pub const ENGRAVE_RED: Color = Color::rgb(255, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_display() {
        assert_eq!(Color::CUT_BLUE.to_string(), "rgb(0,0,255)");
        assert_eq!(Color::ENGRAVE_RED.to_string(), "rgb(255,0,0)");
        assert_eq!(Color::default(), Color::BLACK);
    }
}
