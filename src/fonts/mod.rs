//! Fixed-size bitmap fonts for printable ASCII
//!
//! Glyphs are stored row-major at 1 bit per pixel, MSB = leftmost column,
//! each row padded to a whole byte. The table starts at `' '` and ends at
//! `'~'`.

mod font12;
mod font16;
mod font20;
mod font24;
mod font8;

/// First character in every font table
pub const FIRST_CHAR: char = ' ';
/// Last character in every font table
pub const LAST_CHAR: char = '~';

/// A static bitmap font
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Font {
    /// Glyph table, `height * bytes_per_row()` bytes per glyph
    pub table: &'static [u8],
    /// Glyph width in pixels
    pub width: u16,
    /// Glyph height in pixels
    pub height: u16,
}

impl Font {
    /// Bytes used by one glyph row
    pub const fn bytes_per_row(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Bytes used by one glyph
    pub const fn glyph_len(&self) -> usize {
        self.height as usize * self.bytes_per_row()
    }

    /// Whether the font has a glyph for `ch`
    pub fn covers(ch: char) -> bool {
        (FIRST_CHAR..=LAST_CHAR).contains(&ch)
    }

    /// Bitmap of `ch`, or `None` if it is outside the printable range
    pub fn glyph(&self, ch: char) -> Option<&'static [u8]> {
        if !Self::covers(ch) {
            return None;
        }
        let offset = (ch as usize - FIRST_CHAR as usize) * self.glyph_len();
        self.table.get(offset..offset + self.glyph_len())
    }
}

/// 5x8 font
pub const FONT8: Font = Font {
    table: &font8::TABLE,
    width: 5,
    height: 8,
};

/// 7x12 font
pub const FONT12: Font = Font {
    table: &font12::TABLE,
    width: 7,
    height: 12,
};

/// 11x16 font
pub const FONT16: Font = Font {
    table: &font16::TABLE,
    width: 11,
    height: 16,
};

/// 14x20 font
pub const FONT20: Font = Font {
    table: &font20::TABLE,
    width: 14,
    height: 20,
};

/// 17x24 font
pub const FONT24: Font = Font {
    table: &font24::TABLE,
    width: 17,
    height: 24,
};

#[cfg(test)]
mod tests {
    use super::*;

    const GLYPHS: usize = 95;

    #[test]
    fn tables_hold_every_printable_glyph() {
        for font in [FONT8, FONT12, FONT16, FONT20, FONT24] {
            assert_eq!(font.table.len(), GLYPHS * font.glyph_len());
            assert!(font.glyph('~').is_some());
        }
        assert_eq!(FONT16.bytes_per_row(), 2);
        assert_eq!(FONT24.bytes_per_row(), 3);
    }

    #[test]
    fn space_is_blank_and_bang_is_not() {
        assert!(FONT12.glyph(' ').unwrap().iter().all(|&b| b == 0));
        assert!(FONT12.glyph('!').unwrap().iter().any(|&b| b != 0));
    }

    #[test]
    fn non_printable_has_no_glyph() {
        assert_eq!(FONT8.glyph('\n'), None);
        assert_eq!(FONT8.glyph('\u{7f}'), None);
        assert_eq!(FONT8.glyph('é'), None);
    }
}
