//! 5×7 pixel font for engraving short labels.
//!
//! Only the letters needed for "FAX MACHINE" exist. Each glyph is a list of
//! `(column, row)` cells with row 0 at the top; every cell becomes a small
//! engraved square.

use faxbox_core::EngravingSettings;

use crate::panel::Cutout;

/// Glyph height in cells
pub const GLYPH_ROWS: usize = 7;
/// Glyph width in cells
pub const GLYPH_COLUMNS: usize = 5;

type Glyph = &'static [(u8, u8)];

const GLYPH_F: Glyph = &[
    (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6),
    (1, 0), (2, 0), (3, 0), (4, 0),
    (1, 3), (2, 3), (3, 3),
];

const GLYPH_A: Glyph = &[
    (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6),
    (1, 0), (2, 0), (3, 0),
    (4, 1), (4, 2), (4, 3), (4, 4), (4, 5), (4, 6),
    (1, 3), (2, 3), (3, 3),
];

const GLYPH_X: Glyph = &[
    (0, 0), (0, 1), (4, 0), (4, 1),
    (1, 2), (3, 2),
    (2, 3),
    (1, 4), (3, 4),
    (0, 5), (0, 6), (4, 5), (4, 6),
];

const GLYPH_M: Glyph = &[
    (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6),
    (1, 1), (2, 2), (3, 1),
    (4, 0), (4, 1), (4, 2), (4, 3), (4, 4), (4, 5), (4, 6),
];

const GLYPH_C: Glyph = &[
    (1, 0), (2, 0), (3, 0), (4, 0),
    (0, 1), (0, 2), (0, 3), (0, 4), (0, 5),
    (1, 6), (2, 6), (3, 6), (4, 6),
];

const GLYPH_H: Glyph = &[
    (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6),
    (1, 3), (2, 3), (3, 3),
    (4, 0), (4, 1), (4, 2), (4, 3), (4, 4), (4, 5), (4, 6),
];

const GLYPH_I: Glyph = &[
    (0, 0), (1, 0), (2, 0), (3, 0), (4, 0),
    (2, 1), (2, 2), (2, 3), (2, 4), (2, 5),
    (0, 6), (1, 6), (2, 6), (3, 6), (4, 6),
];

const GLYPH_N: Glyph = &[
    (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6),
    (1, 1), (2, 2), (3, 3),
    (4, 0), (4, 1), (4, 2), (4, 3), (4, 4), (4, 5), (4, 6),
];

const GLYPH_E: Glyph = &[
    (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6),
    (1, 0), (2, 0), (3, 0), (4, 0),
    (1, 3), (2, 3), (3, 3),
    (1, 6), (2, 6), (3, 6), (4, 6),
];

/// Cells of a glyph; `None` for characters outside the font
pub fn glyph(c: char) -> Option<Glyph> {
    match c {
        'F' => Some(GLYPH_F),
        'A' => Some(GLYPH_A),
        'X' => Some(GLYPH_X),
        'M' => Some(GLYPH_M),
        'C' => Some(GLYPH_C),
        'H' => Some(GLYPH_H),
        'I' => Some(GLYPH_I),
        'N' => Some(GLYPH_N),
        'E' => Some(GLYPH_E),
        ' ' => Some(&[]),
        _ => None,
    }
}

fn drawn_glyph(c: char) -> Option<Glyph> {
    glyph(c).filter(|cells| !cells.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelFont {
    pub pixel_size: f64,
    pub char_spacing: f64,
    /// Fraction of the cell covered by the engraved square
    pub cell_fill: f64,
}

impl From<&EngravingSettings> for PixelFont {
    fn from(settings: &EngravingSettings) -> Self {
        Self {
            pixel_size: settings.pixel_size,
            char_spacing: settings.char_spacing,
            cell_fill: settings.cell_fill,
        }
    }
}

impl PixelFont {
    /// Horizontal distance to the next character
    pub fn advance(&self, c: char) -> f64 {
        match drawn_glyph(c.to_ascii_uppercase()) {
            Some(_) => GLYPH_COLUMNS as f64 * self.pixel_size + self.char_spacing,
            None => 3.0 * self.pixel_size,
        }
    }

    pub fn text_height(&self) -> f64 {
        GLYPH_ROWS as f64 * self.pixel_size
    }

    /// Measured width of the text, without the spacing after the last glyph
    pub fn text_width(&self, text: &str) -> f64 {
        let upper = text.to_uppercase();
        let total: f64 = upper.chars().map(|c| self.advance(c)).sum();
        match upper.chars().last() {
            Some(c) if drawn_glyph(c).is_some() => total - self.char_spacing,
            _ => total,
        }
    }

    /// Engraved squares for `text`, its lower left corner at `(x, y)`
    pub fn render(&self, text: &str, x: f64, y: f64) -> Vec<Cutout> {
        let s = self.pixel_size;
        let cell = self.cell_fill * s;
        let mut squares = Vec::new();
        let mut cursor_x = x;

        for c in text.to_uppercase().chars() {
            if let Some(cells) = drawn_glyph(c) {
                for &(col, row) in cells {
                    let cx = cursor_x + (col as f64 + 0.5) * s;
                    let cy = y + ((GLYPH_ROWS - 1 - row as usize) as f64 + 0.5) * s;
                    squares.push(Cutout::rectangle(cx, cy, cell, cell).engraved());
                }
            }
            cursor_x += self.advance(c);
        }

        squares
    }
}
