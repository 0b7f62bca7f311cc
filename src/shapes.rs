//! Points, lines, rectangles and circles

use embedded_graphics_core::geometry::Point;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::DiagnosticSink;

/// Stroke pattern for lines and outlines
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineStyle {
    /// Every step is drawn
    #[default]
    Solid,
    /// `3 * width` steps drawn, then `width` steps skipped
    Dotted,
}

/// Whether a closed shape is filled
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Fill {
    /// Outline only
    #[default]
    Empty,
    /// Outline and interior
    Full,
}

impl<S: DiagnosticSink> Canvas<S> {
    /// Draw a square dot of side `2 * width - 1` centred on `center`.
    pub fn draw_point(&mut self, center: Point, color: Color, width: u8) {
        if width == 0 {
            return self.invalid("draw_point", "width must be at least 1");
        }
        if !self.check_bounds("draw_point", center) {
            return;
        }
        self.stamp(center, color, width);
    }

    /// Draw a line between two on-canvas points.
    pub fn draw_line(&mut self, start: Point, end: Point, color: Color, width: u8, style: LineStyle) {
        if width == 0 {
            return self.invalid("draw_line", "width must be at least 1");
        }
        if !self.check_bounds("draw_line", start) || !self.check_bounds("draw_line", end) {
            return;
        }
        self.line(start, end, color, width, style);
    }

    /// Draw an axis-aligned rectangle spanning two opposite corners.
    pub fn draw_rectangle(
        &mut self,
        corner_a: Point,
        corner_b: Point,
        color: Color,
        width: u8,
        style: LineStyle,
        fill: Fill,
    ) {
        if width == 0 {
            return self.invalid("draw_rectangle", "width must be at least 1");
        }
        if !self.check_bounds("draw_rectangle", corner_a)
            || !self.check_bounds("draw_rectangle", corner_b)
        {
            return;
        }
        let (tl, br) = normalize(corner_a, corner_b);

        match fill {
            Fill::Full => {
                for y in tl.y..=br.y {
                    self.line(
                        Point::new(tl.x, y),
                        Point::new(br.x, y),
                        color,
                        width,
                        LineStyle::Solid,
                    );
                }
            }
            Fill::Empty => {
                let tr = Point::new(br.x, tl.y);
                let bl = Point::new(tl.x, br.y);
                self.line(tl, tr, color, width, style);
                self.line(tl, bl, color, width, style);
                self.line(br, tr, color, width, style);
                self.line(br, bl, color, width, style);
            }
        }
    }

    /// Draw a circle around an on-canvas centre.
    ///
    /// Parts of the circle that fall off the canvas are clipped.
    pub fn draw_circle(&mut self, center: Point, radius: u16, color: Color, width: u8, fill: Fill) {
        if width == 0 {
            return self.invalid("draw_circle", "width must be at least 1");
        }
        if !self.check_bounds("draw_circle", center) {
            return;
        }

        let (cx, cy) = (center.x, center.y);
        let mut x = 0i32;
        let mut y = i32::from(radius);
        let mut esp = 3 - 2 * i32::from(radius);

        while x <= y {
            if fill == Fill::Full {
                self.hspan(cx - x, cx + x, cy + y, color);
                self.hspan(cx - x, cx + x, cy - y, color);
                self.hspan(cx - y, cx + y, cy + x, color);
                self.hspan(cx - y, cx + y, cy - x, color);
            }
            for p in octants(center, x, y) {
                self.stamp(p, color, width);
            }

            if esp < 0 {
                esp += 4 * x + 6;
            } else {
                esp += 10 + 4 * (x - y);
                y -= 1;
            }
            x += 1;
        }
    }

    /// Stamp a dot of the given width, clipping pixels off the canvas
    pub(crate) fn stamp(&mut self, center: Point, color: Color, width: u8) {
        if width <= 1 {
            return self.plot(center, color);
        }
        let reach = i32::from(width) - 1;
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                self.plot(center + Point::new(dx, dy), color);
            }
        }
    }

    /// Horizontal run of single pixels from `x0` to `x1` inclusive, clipped
    pub(crate) fn hspan(&mut self, x0: i32, x1: i32, y: i32, color: Color) {
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let lo = lo.max(0);
        let hi = hi.min(i32::from(self.width()) - 1);
        if y < 0 || y >= i32::from(self.height()) {
            return;
        }
        for x in lo..=hi {
            self.set_pixel(Point::new(x, y), color);
        }
    }

    /// Bresenham line without endpoint validation; off-canvas steps are clipped
    pub(crate) fn line(&mut self, start: Point, end: Point, color: Color, width: u8, style: LineStyle) {
        let dx = (end.x - start.x).abs();
        let dy = -(end.y - start.y).abs();
        let sx = if start.x < end.x { 1 } else { -1 };
        let sy = if start.y < end.y { 1 } else { -1 };
        let mut err = dx + dy;

        let period = 4 * u32::from(width.max(1));
        let on = 3 * u32::from(width.max(1));
        let mut step = 0u32;
        let mut p = start;

        loop {
            if style == LineStyle::Solid || step % period < on {
                self.stamp(p, color, width);
            }
            step = step.wrapping_add(1);

            if p == end {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                p.x += sx;
            }
            if e2 <= dx {
                err += dx;
                p.y += sy;
            }
        }
    }
}

/// Top-left and bottom-right corners of the box spanned by `a` and `b`
pub(crate) fn normalize(a: Point, b: Point) -> (Point, Point) {
    (
        Point::new(a.x.min(b.x), a.y.min(b.y)),
        Point::new(a.x.max(b.x), a.y.max(b.y)),
    )
}

/// The eight reflections of `(x, y)` around `c`
pub(crate) fn octants(c: Point, x: i32, y: i32) -> [Point; 8] {
    [
        Point::new(c.x + x, c.y + y),
        Point::new(c.x - x, c.y + y),
        Point::new(c.x - y, c.y + x),
        Point::new(c.x - y, c.y - x),
        Point::new(c.x - x, c.y - y),
        Point::new(c.x + x, c.y - y),
        Point::new(c.x + y, c.y - x),
        Point::new(c.x + y, c.y + x),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::tests::{canvas, pixels_of};
    use crate::error::Diagnostic;
    use alloc::collections::BTreeSet;
    use alloc::vec::Vec;

    #[test]
    fn horizontal_line_sets_eleven_pixels() {
        let mut c = canvas(32, 8);
        c.draw_line(Point::new(0, 0), Point::new(10, 0), Color::Black, 1, LineStyle::Solid);
        let black = pixels_of(&c, Color::Black);
        assert_eq!(black.len(), 11);
        assert!(black.iter().all(|p| p.y == 0 && (0..=10).contains(&p.x)));
        assert!(c.sink().is_empty());
    }

    #[test]
    fn line_reaches_both_endpoints_in_any_direction() {
        let mut c = canvas(32, 32);
        let (a, b) = (Point::new(20, 3), Point::new(2, 17));
        c.draw_line(a, b, Color::Red, 1, LineStyle::Solid);
        assert_eq!(c.pixel(a), Some(Color::Red));
        assert_eq!(c.pixel(b), Some(Color::Red));
        // one pixel per step along the major axis
        assert_eq!(pixels_of(&c, Color::Red).len(), 19);
    }

    #[test]
    fn every_line_in_a_small_grid_ends_on_its_endpoint() {
        let grid: Vec<Point> = (0..6).flat_map(|y| (0..6).map(move |x| Point::new(x, y))).collect();
        for &a in &grid {
            for &b in &grid {
                let mut c = canvas(8, 8);
                c.draw_line(a, b, Color::Black, 1, LineStyle::Solid);
                assert_eq!(c.pixel(a), Some(Color::Black), "{a:?} -> {b:?}");
                assert_eq!(c.pixel(b), Some(Color::Black), "{a:?} -> {b:?}");
                let major = (b.x - a.x).abs().max((b.y - a.y).abs()) as usize;
                assert_eq!(pixels_of(&c, Color::Black).len(), major + 1, "{a:?} -> {b:?}");
            }
        }
    }

    #[test]
    fn dotted_line_draws_three_skips_one() {
        let mut c = canvas(32, 4);
        c.draw_line(Point::new(0, 1), Point::new(19, 1), Color::Black, 1, LineStyle::Dotted);
        let xs: Vec<i32> = pixels_of(&c, Color::Black).iter().map(|p| p.x).collect();
        let expected: Vec<i32> = (0..20).filter(|x| x % 4 != 3).collect();
        assert_eq!(xs, expected);
    }

    #[test]
    fn line_rejects_out_of_bounds_endpoint() {
        let mut c = canvas(16, 16);
        c.draw_line(Point::new(0, 0), Point::new(16, 3), Color::Black, 1, LineStyle::Solid);
        assert!(pixels_of(&c, Color::Black).is_empty());
        assert_eq!(
            c.sink()[..],
            [Diagnostic::BoundsViolation { op: "draw_line", x: 16, y: 3 }]
        );

        c.draw_line(Point::new(0, 0), Point::new(3, 3), Color::Black, 0, LineStyle::Solid);
        assert!(matches!(
            c.sink().last(),
            Some(Diagnostic::InvalidParameter { op: "draw_line", .. })
        ));
    }

    #[test]
    fn thick_point_is_centred_square() {
        let mut c = canvas(24, 24);
        c.draw_point(Point::new(10, 10), Color::Black, 3);
        let black = pixels_of(&c, Color::Black);
        assert_eq!(black.len(), 25);
        assert_eq!(black.first(), Some(&Point::new(8, 8)));
        assert_eq!(black.last(), Some(&Point::new(12, 12)));

        let mut c = canvas(8, 8);
        c.draw_point(Point::new(3, 3), Color::Red, 1);
        assert_eq!(pixels_of(&c, Color::Red), [Point::new(3, 3)]);
    }

    #[test]
    fn thick_point_clips_at_edge() {
        let mut c = canvas(8, 8);
        c.draw_point(Point::new(0, 0), Color::Black, 2);
        assert_eq!(pixels_of(&c, Color::Black).len(), 4);
        assert!(c.sink().is_empty());
    }

    #[test]
    fn filled_rectangle_is_inclusive() {
        let mut c = canvas(16, 16);
        c.draw_rectangle(
            Point::new(9, 6),
            Point::new(2, 3),
            Color::Red,
            1,
            LineStyle::Solid,
            Fill::Full,
        );
        let red = pixels_of(&c, Color::Red);
        assert_eq!(red.len(), 8 * 4);
        assert_eq!(red.first(), Some(&Point::new(2, 3)));
        assert_eq!(red.last(), Some(&Point::new(9, 6)));
    }

    #[test]
    fn empty_rectangle_draws_only_edges() {
        let mut c = canvas(16, 16);
        c.draw_rectangle(
            Point::new(2, 2),
            Point::new(7, 5),
            Color::Black,
            1,
            LineStyle::Solid,
            Fill::Empty,
        );
        let black = pixels_of(&c, Color::Black);
        assert_eq!(black.len(), 2 * 6 + 2 * 2);
        assert!(black
            .iter()
            .all(|p| p.x == 2 || p.x == 7 || p.y == 2 || p.y == 5));
    }

    #[test]
    fn circle_is_octant_symmetric() {
        let mut c = canvas(100, 100);
        c.draw_circle(Point::new(50, 50), 10, Color::Black, 1, Fill::Empty);
        let set: BTreeSet<(i32, i32)> = pixels_of(&c, Color::Black)
            .iter()
            .map(|p| (p.x - 50, p.y - 50))
            .collect();
        assert!(!set.is_empty());
        for &(x, y) in &set {
            for m in [(x, y), (-x, y), (x, -y), (-x, -y), (y, x), (-y, x), (y, -x), (-y, -x)] {
                assert!(set.contains(&m), "missing reflection {m:?} of ({x}, {y})");
            }
        }
        assert!(set.contains(&(0, 10)));
        assert!(set.contains(&(10, 0)));
    }

    #[test]
    fn filled_circle_has_no_holes() {
        let mut c = canvas(40, 40);
        c.draw_circle(Point::new(20, 20), 8, Color::Red, 1, Fill::Full);
        for y in 13..=27 {
            for x in 13..=27 {
                let (dx, dy) = (x - 20, y - 20);
                if dx * dx + dy * dy <= 49 {
                    assert_eq!(c.pixel(Point::new(x, y)), Some(Color::Red), "hole at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn circle_clips_against_edges() {
        let mut c = canvas(20, 20);
        c.draw_circle(Point::new(1, 1), 6, Color::Black, 1, Fill::Empty);
        assert!(!pixels_of(&c, Color::Black).is_empty());
        assert!(c.sink().is_empty());

        c.draw_circle(Point::new(20, 1), 3, Color::Black, 1, Fill::Empty);
        assert_eq!(c.sink().len(), 1);
    }
}
