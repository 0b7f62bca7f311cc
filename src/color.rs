//! B/W/R Color for EPDs
//!
//! Two bit-planes encode every color. A set bit in the black plane means "no
//! black ink", a set bit in the red plane means "no red ink":
//!
//! | Color | black plane | red plane |
//! |-------|-------------|-----------|
//! | White | 1           | 1         |
//! | Black | 0           | 1         |
//! | Red   | 1           | 0         |
//!
//! [`Color::None`] is transparent and never touches either plane.

use embedded_graphics_core::pixelcolor::{BinaryColor, PixelColor};

/// Color of a single pixel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// Transparent: drawing with it leaves the buffer untouched
    None,
    /// White pixel
    #[default]
    White,
    /// Black pixel
    Black,
    /// Red pixel
    Red,
}

impl Color {
    /// Bit values `(black_plane, red_plane)` for this color, or `None` when
    /// the color is transparent.
    pub const fn plane_bits(self) -> Option<(bool, bool)> {
        match self {
            Color::None => None,
            Color::White => Some((true, true)),
            Color::Black => Some((false, true)),
            Color::Red => Some((true, false)),
        }
    }

    /// Byte values `(black_plane, red_plane)` for eight pixels of this color.
    pub const fn plane_bytes(self) -> Option<(u8, u8)> {
        match self.plane_bits() {
            Some((black, red)) => Some((byte_for(black), byte_for(red))),
            None => None,
        }
    }

    /// Decode a pixel from its two plane bits.
    ///
    /// Both bits cleared has no defined color on the panel and reads back as
    /// black, which is what the controller shows for it.
    pub const fn from_plane_bits(black: bool, red: bool) -> Self {
        match (black, red) {
            (true, true) => Color::White,
            (true, false) => Color::Red,
            (false, _) => Color::Black,
        }
    }

    /// Whether drawing with this color mutates the buffer
    pub const fn is_opaque(self) -> bool {
        !matches!(self, Color::None)
    }
}

const fn byte_for(bit: bool) -> u8 {
    if bit {
        0xFF
    } else {
        0x00
    }
}

impl PixelColor for Color {
    type Raw = ();
}

impl From<BinaryColor> for Color {
    fn from(b: BinaryColor) -> Color {
        match b {
            BinaryColor::On => Color::White,
            BinaryColor::Off => Color::Black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_bytes_follow_the_encoding() {
        assert_eq!(Color::White.plane_bytes(), Some((0xFF, 0xFF)));
        assert_eq!(Color::Black.plane_bytes(), Some((0x00, 0xFF)));
        assert_eq!(Color::Red.plane_bytes(), Some((0xFF, 0x00)));
        assert_eq!(Color::None.plane_bytes(), None);
    }

    #[test]
    fn plane_bits_decode_back() {
        for color in [Color::White, Color::Black, Color::Red] {
            let (black, red) = color.plane_bits().unwrap();
            assert_eq!(Color::from_plane_bits(black, red), color);
        }
    }

    #[test]
    fn from_binary_color() {
        assert_eq!(Color::from(BinaryColor::On), Color::White);
        assert_eq!(Color::from(BinaryColor::Off), Color::Black);
    }
}
