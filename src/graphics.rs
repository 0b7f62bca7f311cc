//! `embedded-graphics` support
//!
//! With the `graphics` feature the canvas is a [`DrawTarget`], so any
//! embedded-graphics primitive, image or mono font can be drawn onto it.
//! Pixels go through [`Canvas::set_pixel`] and therefore honor the current
//! orientation.

use core::convert::Infallible;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::Pixel;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::DiagnosticSink;

impl<S: DiagnosticSink> DrawTarget for Canvas<S> {
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.plot(point, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(color);
        Ok(())
    }
}

impl<S: DiagnosticSink> OriginDimensions for Canvas<S> {
    fn size(&self) -> Size {
        self.dimensions().size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::tests::{canvas, pixels_of};
    use crate::orientation::{Mirror, Rotation};
    use embedded_graphics::mono_font::{ascii::FONT_6X10, MonoTextStyle};
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
    use embedded_graphics::text::Text;

    #[test]
    fn primitives_draw_through_the_canvas() {
        let mut c = canvas(32, 16);
        Line::new(Point::new(0, 0), Point::new(10, 0))
            .into_styled(PrimitiveStyle::with_stroke(Color::Black, 1))
            .draw(&mut c)
            .unwrap();
        assert_eq!(pixels_of(&c, Color::Black).len(), 11);

        Rectangle::new(Point::new(2, 4), Size::new(4, 3))
            .into_styled(PrimitiveStyle::with_fill(Color::Red))
            .draw(&mut c)
            .unwrap();
        assert_eq!(pixels_of(&c, Color::Red).len(), 12);
    }

    #[test]
    fn off_canvas_pixels_are_clipped_quietly() {
        let mut c = canvas(16, 16);
        Line::new(Point::new(-5, 3), Point::new(40, 3))
            .into_styled(PrimitiveStyle::with_stroke(Color::Black, 1))
            .draw(&mut c)
            .unwrap();
        assert_eq!(pixels_of(&c, Color::Black).len(), 16);
        assert!(c.sink().is_empty());
    }

    #[test]
    fn clear_and_size() {
        let mut c = canvas(24, 8);
        c.clear(Color::Black).unwrap();
        assert!(c.black_plane().iter().all(|&b| b == 0x00));
        assert_eq!(c.size(), Size::new(24, 8));
        assert_eq!(c.bounding_box(), Rectangle::new(Point::zero(), Size::new(24, 8)));
    }

    #[test]
    fn mono_text_honors_orientation() {
        let style = MonoTextStyle::new(&FONT_6X10, Color::Black);
        let text = Text::new("Hi", Point::new(1, 9), style);

        let mut plain = canvas(32, 32);
        text.draw(&mut plain).unwrap();

        // 180 degrees plus a full mirror is the identity
        let mut turned = canvas(32, 32);
        turned.set_orientation(Rotation::Rotate180, Mirror::Both);
        text.draw(&mut turned).unwrap();
        assert!(!pixels_of(&plain, Color::Black).is_empty());
        assert_eq!(turned.black_plane(), plain.black_plane());

        let mut flipped = canvas(32, 32);
        flipped.set_mirror(Mirror::Horizontal);
        text.draw(&mut flipped).unwrap();
        assert_ne!(flipped.black_plane(), plain.black_plane());
    }
}
