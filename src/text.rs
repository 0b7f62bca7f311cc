//! Text rendering with the bitmap fonts in [`crate::fonts`]

use core::fmt::Write;

use embedded_graphics_core::geometry::Point;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::DiagnosticSink;
use crate::fonts::Font;

/// Longest `{:.2}` rendering of an `f32`, sign included
const FLOAT_CAPACITY: usize = 48;

/// Sign and ten digits of `i32::MIN`
const NUMBER_CAPACITY: usize = 11;

impl<S: DiagnosticSink> Canvas<S> {
    /// Draw one glyph with its top-left corner at `origin`.
    ///
    /// Set bits are painted `fg`; clear bits are painted `bg` unless it is
    /// [`Color::None`].
    pub fn draw_char(&mut self, origin: Point, ch: char, font: &Font, fg: Color, bg: Color) {
        if !self.check_bounds("draw_char", origin) {
            return;
        }
        self.glyph(origin, ch, font, fg, bg);
    }

    /// Draw a string, wrapping at the right edge.
    ///
    /// When a wrapped line would run past the bottom edge, drawing restarts
    /// at `origin` and overwrites what is already there.
    pub fn draw_string(&mut self, origin: Point, text: &str, font: &Font, fg: Color, bg: Color) {
        if !self.check_bounds("draw_string", origin) {
            return;
        }
        let (w, h) = (i32::from(font.width), i32::from(font.height));
        let mut cursor = origin;

        for ch in text.chars() {
            if cursor.x + w > i32::from(self.width()) {
                cursor.x = origin.x;
                cursor.y += h;
            }
            if cursor.y + h > i32::from(self.height()) {
                cursor = origin;
            }
            self.glyph(cursor, ch, font, fg, bg);
            cursor.x += w;
        }
    }

    /// Draw a signed decimal integer.
    pub fn draw_number(&mut self, origin: Point, number: i32, font: &Font, fg: Color, bg: Color) {
        if !self.check_bounds("draw_number", origin) {
            return;
        }

        let mut digits: heapless::Vec<u8, NUMBER_CAPACITY> = heapless::Vec::new();
        let mut rest = number.unsigned_abs();
        loop {
            // at most ten digits plus a sign
            let pushed = digits.push(b'0' + (rest % 10) as u8);
            debug_assert!(pushed.is_ok());
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        if number < 0 {
            let pushed = digits.push(b'-');
            debug_assert!(pushed.is_ok());
        }
        digits.reverse();

        if let Ok(text) = core::str::from_utf8(&digits) {
            self.draw_string(origin, text, font, fg, bg);
        }
    }

    /// Draw a float rounded to two decimals.
    pub fn draw_float(&mut self, origin: Point, number: f32, font: &Font, fg: Color, bg: Color) {
        if !self.check_bounds("draw_float", origin) {
            return;
        }
        let mut text: heapless::String<FLOAT_CAPACITY> = heapless::String::new();
        if write!(text, "{:.2}", number).is_err() {
            return self.invalid("draw_float", "formatted number does not fit");
        }
        self.draw_string(origin, &text, font, fg, bg);
    }

    /// Draw `HH:MM:SS` with the colons tucked between the digit pairs.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_time(
        &mut self,
        origin: Point,
        hour: u8,
        minute: u8,
        second: u8,
        font: &Font,
        fg: Color,
        bg: Color,
    ) {
        if hour > 99 || minute > 99 || second > 99 {
            return self.invalid("draw_time", "time fields must have two digits");
        }
        if !self.check_bounds("draw_time", origin) {
            return;
        }

        let dx = i32::from(font.width);
        let layout = [
            (0, digit(hour / 10)),
            (dx, digit(hour % 10)),
            (dx + dx / 4 + dx / 2, ':'),
            (dx * 2 + dx / 2, digit(minute / 10)),
            (dx * 3 + dx / 2, digit(minute % 10)),
            (dx * 4 + dx / 2 - dx / 4, ':'),
            (dx * 5, digit(second / 10)),
            (dx * 6, digit(second % 10)),
        ];
        for (offset, ch) in layout {
            self.glyph(origin + Point::new(offset, 0), ch, font, fg, bg);
        }
    }

    /// Glyph blit without an origin check; pixels off the canvas are clipped
    fn glyph(&mut self, origin: Point, ch: char, font: &Font, fg: Color, bg: Color) {
        let Some(bitmap) = font.glyph(ch) else {
            return self.invalid("draw_char", "character outside the printable ASCII range");
        };
        let stride = font.bytes_per_row();

        for row in 0..usize::from(font.height) {
            let line = &bitmap[row * stride..(row + 1) * stride];
            for col in 0..usize::from(font.width) {
                let set = line[col / 8] & (0x80 >> (col % 8)) != 0;
                let color = if set { fg } else { bg };
                if color.is_opaque() {
                    self.plot(origin + Point::new(col as i32, row as i32), color);
                }
            }
        }
    }
}

fn digit(value: u8) -> char {
    char::from(b'0' + value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::tests::{canvas, pixels_of, TestCanvas};
    use crate::error::Diagnostic;
    use crate::fonts::{FONT12, FONT8};

    fn glyphs_at(width: u16, height: u16, font: &Font, placed: &[(i32, i32, char)]) -> TestCanvas {
        let mut c = canvas(width, height);
        for &(x, y, ch) in placed {
            c.draw_char(Point::new(x, y), ch, font, Color::Black, Color::None);
        }
        c
    }

    #[test]
    fn char_paints_foreground_and_background() {
        let mut c = canvas(16, 16);
        c.fill_screen(Color::Red);
        c.draw_char(Point::new(2, 2), '-', &FONT8, Color::Black, Color::White);
        // '-' in the 5x8 font is one full row at y = 3
        let black = pixels_of(&c, Color::Black);
        assert_eq!(black.len(), 5);
        assert!(black.iter().all(|p| p.y == 5 && (2..7).contains(&p.x)));
        assert_eq!(pixels_of(&c, Color::White).len(), 5 * 8 - 5);
    }

    #[test]
    fn transparent_background_keeps_canvas() {
        let mut c = canvas(16, 16);
        c.fill_screen(Color::Red);
        c.draw_char(Point::new(2, 2), '-', &FONT8, Color::Black, Color::None);
        assert_eq!(pixels_of(&c, Color::Black).len(), 5);
        assert!(pixels_of(&c, Color::White).is_empty());
    }

    #[test]
    fn non_printable_char_is_reported() {
        let mut c = canvas(16, 16);
        c.draw_char(Point::new(0, 0), '\t', &FONT8, Color::Black, Color::White);
        assert!(pixels_of(&c, Color::Black).is_empty());
        assert_eq!(
            c.sink()[..],
            [Diagnostic::InvalidParameter {
                op: "draw_char",
                reason: "character outside the printable ASCII range",
            }]
        );
    }

    #[test]
    fn string_wraps_at_glyph_boundary() {
        let mut c = canvas(20, 24);
        c.draw_string(Point::new(0, 0), "ABCDE", &FONT8, Color::Black, Color::White);

        // four 5px glyphs fit exactly, the fifth starts the next line
        let expected = glyphs_at(
            20,
            24,
            &FONT8,
            &[(0, 0, 'A'), (5, 0, 'B'), (10, 0, 'C'), (15, 0, 'D'), (0, 8, 'E')],
        );
        assert_eq!(c.black_plane(), expected.black_plane());
        assert_eq!(c.red_plane(), expected.red_plane());
    }

    #[test]
    fn vertical_overflow_restarts_at_origin() {
        let mut c = canvas(20, 16);
        c.draw_string(Point::new(0, 0), "ABCDEFGHI", &FONT8, Color::Black, Color::White);

        // 'I' does not fit below row 8 and overwrites 'A' at the origin
        let expected = glyphs_at(
            20,
            16,
            &FONT8,
            &[
                (5, 0, 'B'),
                (10, 0, 'C'),
                (15, 0, 'D'),
                (0, 8, 'E'),
                (5, 8, 'F'),
                (10, 8, 'G'),
                (15, 8, 'H'),
                (0, 0, 'I'),
            ],
        );
        assert_eq!(c.black_plane(), expected.black_plane());
    }

    #[test]
    fn negative_number_renders_sign_then_digits() {
        let mut c = canvas(40, 16);
        c.draw_number(Point::new(1, 1), -42, &FONT12, Color::Black, Color::White);
        let expected = glyphs_at(40, 16, &FONT12, &[(1, 1, '-'), (8, 1, '4'), (15, 1, '2')]);
        assert_eq!(c.black_plane(), expected.black_plane());
    }

    #[test]
    fn number_extremes() {
        let mut c = canvas(120, 16);
        c.draw_number(Point::zero(), i32::MIN, &FONT8, Color::Black, Color::None);
        let mut expected = canvas(120, 16);
        expected.draw_string(Point::zero(), "-2147483648", &FONT8, Color::Black, Color::None);
        assert_eq!(c.black_plane(), expected.black_plane());

        let mut c = canvas(16, 16);
        c.draw_number(Point::zero(), 0, &FONT8, Color::Black, Color::None);
        let expected = glyphs_at(16, 16, &FONT8, &[(0, 0, '0')]);
        assert_eq!(c.black_plane(), expected.black_plane());
    }

    #[test]
    fn float_rounds_to_two_decimals() {
        let mut c = canvas(64, 16);
        c.draw_float(Point::new(0, 2), 3.14159, &FONT12, Color::Red, Color::None);
        let mut expected = canvas(64, 16);
        expected.draw_string(Point::new(0, 2), "3.14", &FONT12, Color::Red, Color::None);
        assert_eq!(c.red_plane(), expected.red_plane());
        assert!(c.sink().is_empty());
    }

    #[test]
    fn time_places_colons_between_pairs() {
        let mut c = canvas(64, 16);
        c.draw_time(Point::new(0, 0), 12, 34, 56, &FONT8, Color::Black, Color::None);
        // dx = 5
        let expected = glyphs_at(
            64,
            16,
            &FONT8,
            &[
                (0, 0, '1'),
                (5, 0, '2'),
                (8, 0, ':'),
                (12, 0, '3'),
                (17, 0, '4'),
                (21, 0, ':'),
                (25, 0, '5'),
                (30, 0, '6'),
            ],
        );
        assert_eq!(c.black_plane(), expected.black_plane());
    }
}
