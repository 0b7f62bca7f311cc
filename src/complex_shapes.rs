//! Ellipses, rounded rectangles, triangles, polygons and stars

use core::f32::consts::PI;

use embedded_graphics_core::geometry::Point;
use heapless::Vec;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::DiagnosticSink;
use crate::shapes::{normalize, Fill, LineStyle};

/// Most vertices accepted by [`Canvas::draw_polygon`]
pub const MAX_POLYGON_POINTS: usize = 20;

/// Most spikes drawn by [`Canvas::draw_star`]
pub const MAX_STAR_POINTS: u8 = 10;

/// Fewest spikes drawn by [`Canvas::draw_star`]
pub const MIN_STAR_POINTS: u8 = 3;

const STAR_VERTICES: usize = 2 * MAX_STAR_POINTS as usize;

impl<S: DiagnosticSink> Canvas<S> {
    /// Draw an axis-aligned ellipse with the midpoint algorithm.
    pub fn draw_ellipse(
        &mut self,
        center: Point,
        radius_x: u16,
        radius_y: u16,
        color: Color,
        width: u8,
        fill: Fill,
    ) {
        if width == 0 {
            return self.invalid("draw_ellipse", "width must be at least 1");
        }
        if radius_x == 0 || radius_y == 0 {
            return self.invalid("draw_ellipse", "radii must be non-zero");
        }
        if !self.check_bounds("draw_ellipse", center) {
            return;
        }

        let rx = i64::from(radius_x);
        let ry = i64::from(radius_y);
        let rx2 = rx * rx;
        let ry2 = ry * ry;

        // region 1: from the top, x advances every step
        let (mut x, mut y) = (0i64, ry);
        let mut s = 2 * ry2 + rx2 * (1 - 2 * ry);
        while ry2 * x <= rx2 * y {
            self.ellipse_step(center, x as i32, y as i32, color, width, fill);
            if s >= 0 {
                s += 4 * rx2 * (1 - y);
                y -= 1;
            }
            s += ry2 * (4 * x + 6);
            x += 1;
        }

        // region 2: from the side, y advances every step
        let (mut x, mut y) = (rx, 0i64);
        let mut s = 2 * rx2 + ry2 * (1 - 2 * rx);
        while rx2 * y <= ry2 * x {
            self.ellipse_step(center, x as i32, y as i32, color, width, fill);
            if s >= 0 {
                s += 4 * ry2 * (1 - x);
                x -= 1;
            }
            s += rx2 * (4 * y + 6);
            y += 1;
        }
    }

    fn ellipse_step(&mut self, c: Point, x: i32, y: i32, color: Color, width: u8, fill: Fill) {
        if fill == Fill::Full {
            self.hspan(c.x - x, c.x + x, c.y + y, color);
            self.hspan(c.x - x, c.x + x, c.y - y, color);
        }
        for p in [
            Point::new(c.x + x, c.y + y),
            Point::new(c.x - x, c.y + y),
            Point::new(c.x + x, c.y - y),
            Point::new(c.x - x, c.y - y),
        ] {
            self.stamp(p, color, width);
        }
    }

    /// Draw a rectangle with quarter-circle corners.
    ///
    /// A radius larger than half the shorter side is clamped and reported.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_rounded_rectangle(
        &mut self,
        corner_a: Point,
        corner_b: Point,
        radius: u16,
        color: Color,
        width: u8,
        style: LineStyle,
        fill: Fill,
    ) {
        if width == 0 {
            return self.invalid("draw_rounded_rectangle", "width must be at least 1");
        }
        if !self.check_bounds("draw_rounded_rectangle", corner_a)
            || !self.check_bounds("draw_rounded_rectangle", corner_b)
        {
            return;
        }
        let (tl, br) = normalize(corner_a, corner_b);

        let limit = (br.x - tl.x).min(br.y - tl.y) / 2;
        let mut r = i32::from(radius);
        if r > limit {
            self.invalid(
                "draw_rounded_rectangle",
                "radius exceeds half the shorter side, clamped",
            );
            r = limit;
        }

        // corner circle centres
        let (left, right) = (tl.x + r, br.x - r);
        let (top, bottom) = (tl.y + r, br.y - r);

        if fill == Fill::Full {
            for y in top..=bottom {
                self.hspan(tl.x, br.x, y, color);
            }
        }

        self.line(Point::new(left, tl.y), Point::new(right, tl.y), color, width, style);
        self.line(Point::new(tl.x, top), Point::new(tl.x, bottom), color, width, style);
        self.line(Point::new(br.x, bottom), Point::new(br.x, top), color, width, style);
        self.line(Point::new(right, br.y), Point::new(left, br.y), color, width, style);

        let mut x = 0i32;
        let mut y = r;
        let mut esp = 3 - 2 * r;
        while x <= y {
            if fill == Fill::Full {
                self.hspan(left - x, right + x, top - y, color);
                self.hspan(left - y, right + y, top - x, color);
                self.hspan(left - x, right + x, bottom + y, color);
                self.hspan(left - y, right + y, bottom + x, color);
            }
            if style == LineStyle::Solid || x % 2 == 0 {
                for p in [
                    Point::new(right + x, bottom + y),
                    Point::new(left - x, bottom + y),
                    Point::new(left - y, bottom + x),
                    Point::new(left - y, top - x),
                    Point::new(left - x, top - y),
                    Point::new(right + x, top - y),
                    Point::new(right + y, top - x),
                    Point::new(right + y, bottom + x),
                ] {
                    self.stamp(p, color, width);
                }
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

    /// Draw a triangle; `Fill::Full` scan-fills it in two halves.
    pub fn draw_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: Color, width: u8, fill: Fill) {
        if width == 0 {
            return self.invalid("draw_triangle", "width must be at least 1");
        }
        for p in [p1, p2, p3] {
            if !self.check_bounds("draw_triangle", p) {
                return;
            }
        }

        if fill == Fill::Empty {
            self.line(p1, p2, color, width, LineStyle::Solid);
            self.line(p2, p3, color, width, LineStyle::Solid);
            self.line(p3, p1, color, width, LineStyle::Solid);
            return;
        }

        let mut v = [p1, p2, p3];
        v.sort_unstable_by_key(|p| p.y);
        let [a, b, c] = v;

        if a.y == c.y {
            let lo = a.x.min(b.x).min(c.x);
            let hi = a.x.max(b.x).max(c.x);
            return self.line(Point::new(lo, a.y), Point::new(hi, a.y), color, width, LineStyle::Solid);
        }

        // flat-bottom half, a.y ..= b.y
        let mut lower_start = b.y;
        if b.y != a.y {
            for y in a.y..=b.y {
                let xa = lerp_x(a, b, y);
                let xb = lerp_x(a, c, y);
                self.line(Point::new(xa, y), Point::new(xb, y), color, width, LineStyle::Solid);
            }
            lower_start = b.y + 1;
        }

        // flat-top half, down to c.y
        if c.y != b.y {
            for y in lower_start..=c.y {
                let xa = lerp_x(b, c, y);
                let xb = lerp_x(a, c, y);
                self.line(Point::new(xa, y), Point::new(xb, y), color, width, LineStyle::Solid);
            }
        }
    }

    /// Draw a closed polygon of 3 to [`MAX_POLYGON_POINTS`] vertices.
    ///
    /// `Fill::Full` uses an even-odd scanline fill.
    pub fn draw_polygon(&mut self, points: &[Point], color: Color, width: u8, fill: Fill) {
        if width == 0 {
            return self.invalid("draw_polygon", "width must be at least 1");
        }
        if points.len() < 3 {
            return self.invalid("draw_polygon", "a polygon needs at least 3 points");
        }
        if points.len() > MAX_POLYGON_POINTS {
            return self.invalid("draw_polygon", "too many polygon points");
        }
        for &p in points {
            if !self.check_bounds("draw_polygon", p) {
                return;
            }
        }

        if fill == Fill::Empty {
            for (i, &p) in points.iter().enumerate() {
                let next = points[(i + 1) % points.len()];
                self.line(p, next, color, width, LineStyle::Solid);
            }
            return;
        }

        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0);
        let max_y = points.iter().map(|p| p.y).max().unwrap_or(0);

        for y in min_y..=max_y {
            let mut crossings: Vec<i32, MAX_POLYGON_POINTS> = Vec::new();
            for (i, &pi) in points.iter().enumerate() {
                let pj = points[(i + 1) % points.len()];
                if (pi.y <= y && pj.y > y) || (pi.y > y && pj.y <= y) {
                    // an n-gon crosses a row at most n times
                    let pushed = crossings.push(lerp_x(pi, pj, y));
                    debug_assert!(pushed.is_ok());
                }
            }
            crossings.sort_unstable();
            for pair in crossings.chunks_exact(2) {
                self.line(
                    Point::new(pair[0], y),
                    Point::new(pair[1], y),
                    color,
                    width,
                    LineStyle::Solid,
                );
            }
        }
    }

    /// Draw a star with `points` spikes, clamped to
    /// [`MIN_STAR_POINTS`]..=[`MAX_STAR_POINTS`].
    ///
    /// `Fill::Full` sweeps radial lines from the centre to the outline, which
    /// approximates a wedge fill.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_star(
        &mut self,
        center: Point,
        radius_outer: u16,
        radius_inner: u16,
        points: u8,
        color: Color,
        width: u8,
        fill: Fill,
    ) {
        if width == 0 {
            return self.invalid("draw_star", "width must be at least 1");
        }
        if !self.check_bounds("draw_star", center) {
            return;
        }
        let n = if points < MIN_STAR_POINTS {
            self.invalid("draw_star", "too few star points, clamped to 3");
            MIN_STAR_POINTS
        } else if points > MAX_STAR_POINTS {
            self.invalid("draw_star", "too many star points, clamped to 10");
            MAX_STAR_POINTS
        } else {
            points
        };

        let vertices = star_vertices(center, radius_outer, radius_inner, n);

        for (i, &p) in vertices.iter().enumerate() {
            let next = vertices[(i + 1) % vertices.len()];
            match fill {
                Fill::Empty => self.line(p, next, color, width, LineStyle::Solid),
                Fill::Full => {
                    let d = next - p;
                    let steps = d.x.abs().max(d.y.abs()).max(1);
                    for step in 0..=steps {
                        let q = p + Point::new(scale(d.x, step, steps), scale(d.y, step, steps));
                        self.ray(center, q, color);
                    }
                }
            }
        }
    }

    /// Single-pixel Bresenham from `from` towards `to`, stopping where it
    /// leaves the canvas. `from` must be on the canvas.
    fn ray(&mut self, from: Point, to: Point, color: Color) {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let mut p = from;

        // the canvas is convex, so nothing past the first exit is visible
        while self.dimensions().contains(p) {
            self.set_pixel(p, color);
            if p == to {
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

/// x on segment `a`-`b` at row `y`; `a.y != b.y`
fn lerp_x(a: Point, b: Point, y: i32) -> i32 {
    let num = i64::from(b.x - a.x) * i64::from(y - a.y);
    a.x + (num / i64::from(b.y - a.y)) as i32
}

/// `v * num / den` without intermediate overflow; `|num| <= |den|`
fn scale(v: i32, num: i32, den: i32) -> i32 {
    (i64::from(v) * i64::from(num) / i64::from(den)) as i32
}

/// Alternating outer/inner vertices, starting at the top
fn star_vertices(center: Point, outer: u16, inner: u16, n: u8) -> Vec<Point, STAR_VERTICES> {
    let total = 2 * usize::from(n);
    let step = PI / f32::from(n);
    let mut out = Vec::new();
    for i in 0..total.min(STAR_VERTICES) {
        let angle = -PI / 2.0 + i as f32 * step;
        let r = f32::from(if i % 2 == 0 { outer } else { inner });
        let v = center + Point::new((r * libm::cosf(angle)) as i32, (r * libm::sinf(angle)) as i32);
        // capacity matches the clamp above
        let pushed = out.push(v);
        debug_assert!(pushed.is_ok());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::tests::{canvas, pixels_of};
    use crate::error::Diagnostic;
    use alloc::collections::BTreeSet;

    #[test]
    fn ellipse_touches_its_axes_and_is_symmetric() {
        let mut c = canvas(64, 48);
        let center = Point::new(30, 20);
        c.draw_ellipse(center, 20, 8, Color::Black, 1, Fill::Empty);
        let set: BTreeSet<(i32, i32)> = pixels_of(&c, Color::Black)
            .iter()
            .map(|p| (p.x - 30, p.y - 20))
            .collect();
        for extreme in [(20, 0), (-20, 0), (0, 8), (0, -8)] {
            assert!(set.contains(&extreme), "missing {extreme:?}");
        }
        for &(x, y) in &set {
            assert!(set.contains(&(-x, y)) && set.contains(&(x, -y)));
            assert!(x.abs() <= 20 && y.abs() <= 8);
        }
    }

    #[test]
    fn filled_ellipse_covers_centre_rows() {
        let mut c = canvas(64, 48);
        c.draw_ellipse(Point::new(30, 20), 12, 6, Color::Red, 1, Fill::Full);
        for x in 18..=42 {
            assert_eq!(c.pixel(Point::new(x, 20)), Some(Color::Red));
        }
        assert_eq!(c.pixel(Point::new(30, 14)), Some(Color::Red));
        assert_eq!(c.pixel(Point::new(30, 13)), Some(Color::White));
    }

    #[test]
    fn ellipse_rejects_zero_radius() {
        let mut c = canvas(16, 16);
        c.draw_ellipse(Point::new(8, 8), 0, 4, Color::Black, 1, Fill::Empty);
        assert!(pixels_of(&c, Color::Black).is_empty());
        assert_eq!(c.sink().len(), 1);
    }

    #[test]
    fn rounded_rectangle_clamps_radius() {
        let mut c = canvas(40, 40);
        c.draw_rounded_rectangle(
            Point::new(5, 5),
            Point::new(25, 15),
            30,
            Color::Black,
            1,
            LineStyle::Solid,
            Fill::Empty,
        );
        assert_eq!(
            c.sink()[..],
            [Diagnostic::InvalidParameter {
                op: "draw_rounded_rectangle",
                reason: "radius exceeds half the shorter side, clamped",
            }]
        );
        // clamped to 5: straight edges and arcs stay inside the box
        let black = pixels_of(&c, Color::Black);
        assert!(!black.is_empty());
        assert!(black.iter().all(|p| (5..=25).contains(&p.x) && (5..=15).contains(&p.y)));
        assert_eq!(c.pixel(Point::new(15, 5)), Some(Color::Black));
        assert_eq!(c.pixel(Point::new(5, 5)), Some(Color::White));
    }

    #[test]
    fn rounded_rectangle_corners_are_cut() {
        let mut c = canvas(40, 40);
        c.draw_rounded_rectangle(
            Point::new(2, 2),
            Point::new(30, 20),
            4,
            Color::Red,
            1,
            LineStyle::Solid,
            Fill::Full,
        );
        assert!(c.sink().is_empty());
        assert_eq!(c.pixel(Point::new(2, 2)), Some(Color::White));
        assert_eq!(c.pixel(Point::new(30, 20)), Some(Color::White));
        assert_eq!(c.pixel(Point::new(16, 11)), Some(Color::Red));
        assert_eq!(c.pixel(Point::new(2, 11)), Some(Color::Red));
        assert_eq!(c.pixel(Point::new(16, 2)), Some(Color::Red));
    }

    #[test]
    fn filled_triangle_is_solid_between_edges() {
        let mut c = canvas(32, 32);
        c.draw_triangle(
            Point::new(2, 20),
            Point::new(16, 2),
            Point::new(28, 20),
            Color::Black,
            1,
            Fill::Full,
        );
        for x in 2..=28 {
            assert_eq!(c.pixel(Point::new(x, 20)), Some(Color::Black));
        }
        assert_eq!(c.pixel(Point::new(16, 2)), Some(Color::Black));
        assert_eq!(c.pixel(Point::new(16, 12)), Some(Color::Black));
        assert_eq!(c.pixel(Point::new(3, 3)), Some(Color::White));
    }

    #[test]
    fn flat_triangle_draws_a_line() {
        let mut c = canvas(16, 16);
        c.draw_triangle(
            Point::new(9, 4),
            Point::new(1, 4),
            Point::new(5, 4),
            Color::Red,
            1,
            Fill::Full,
        );
        assert_eq!(pixels_of(&c, Color::Red).len(), 9);
    }

    #[test]
    fn polygon_fill_area_tracks_triangle_area() {
        let tri = [Point::new(0, 0), Point::new(10, 0), Point::new(5, 10)];
        let mut c = canvas(16, 16);
        c.draw_polygon(&tri, Color::Black, 1, Fill::Full);
        let filled = pixels_of(&c, Color::Black);
        // true area 50
        assert!((40..=70).contains(&filled.len()), "area {}", filled.len());
        assert!(filled.iter().all(|p| p.y <= 10 && p.x <= 10));
    }

    #[test]
    fn empty_polygon_covers_only_edges() {
        let tri = [Point::new(0, 0), Point::new(10, 0), Point::new(5, 10)];
        let mut c = canvas(16, 16);
        c.draw_polygon(&tri, Color::Black, 1, Fill::Empty);

        let mut edges = canvas(16, 16);
        for i in 0..3 {
            edges.draw_line(tri[i], tri[(i + 1) % 3], Color::Black, 1, LineStyle::Solid);
        }
        assert_eq!(pixels_of(&c, Color::Black), pixels_of(&edges, Color::Black));
        assert_eq!(c.pixel(Point::new(5, 4)), Some(Color::White));
    }

    #[test]
    fn polygon_capacity_overflow_is_reported() {
        let mut c = canvas(64, 64);
        let many: alloc::vec::Vec<Point> =
            (0..=MAX_POLYGON_POINTS as i32).map(|i| Point::new(i * 2, (i % 3) * 10)).collect();
        c.draw_polygon(&many, Color::Black, 1, Fill::Full);
        assert!(pixels_of(&c, Color::Black).is_empty());
        assert_eq!(
            c.sink()[..],
            [Diagnostic::InvalidParameter {
                op: "draw_polygon",
                reason: "too many polygon points",
            }]
        );

        c.draw_polygon(&many[..2], Color::Black, 1, Fill::Empty);
        assert_eq!(c.sink().len(), 2);
    }

    #[test]
    fn star_clamps_point_count() {
        let mut c = canvas(64, 64);
        c.draw_star(Point::new(32, 32), 20, 8, 2, Color::Black, 1, Fill::Empty);
        c.draw_star(Point::new(32, 32), 20, 8, 12, Color::Black, 1, Fill::Empty);
        assert_eq!(c.sink().len(), 2);
        assert!(matches!(
            c.sink()[0],
            Diagnostic::InvalidParameter { op: "draw_star", .. }
        ));
        assert_eq!(star_vertices(Point::new(32, 32), 20, 8, 3).len(), 6);
        assert_eq!(star_vertices(Point::new(32, 32), 20, 8, 10).len(), 20);
    }

    #[test]
    fn dotted_rounded_rectangle_skips_odd_arc_steps() {
        let draw = |style| {
            let mut c = canvas(40, 40);
            c.draw_rounded_rectangle(
                Point::new(2, 2),
                Point::new(30, 20),
                6,
                Color::Black,
                1,
                style,
                Fill::Empty,
            );
            c
        };
        let solid = draw(LineStyle::Solid);
        let dotted = draw(LineStyle::Dotted);

        // arc step 1 of the bottom-right and bottom-left-side corners
        assert_eq!(solid.pixel(Point::new(25, 20)), Some(Color::Black));
        assert_eq!(solid.pixel(Point::new(2, 15)), Some(Color::Black));
        assert_eq!(dotted.pixel(Point::new(25, 20)), Some(Color::White));
        assert_eq!(dotted.pixel(Point::new(2, 15)), Some(Color::White));
        // arc step 2
        assert_eq!(dotted.pixel(Point::new(26, 20)), Some(Color::Black));

        let solid_set: BTreeSet<(i32, i32)> =
            pixels_of(&solid, Color::Black).iter().map(|p| (p.x, p.y)).collect();
        let dotted_px = pixels_of(&dotted, Color::Black);
        assert!(dotted_px.len() < solid_set.len());
        assert!(dotted_px.iter().all(|p| solid_set.contains(&(p.x, p.y))));
    }

    #[test]
    fn empty_triangle_is_its_three_edges() {
        let (a, b, p) = (Point::new(3, 25), Point::new(15, 2), Point::new(28, 18));
        let mut c = canvas(32, 32);
        c.draw_triangle(a, b, p, Color::Red, 1, Fill::Empty);

        let mut edges = canvas(32, 32);
        for (from, to) in [(a, b), (b, p), (p, a)] {
            edges.draw_line(from, to, Color::Red, 1, LineStyle::Solid);
        }
        assert_eq!(pixels_of(&c, Color::Red), pixels_of(&edges, Color::Red));
        for corner in [a, b, p] {
            assert_eq!(c.pixel(corner), Some(Color::Red));
        }
        assert_eq!(c.pixel(Point::new(15, 15)), Some(Color::White));
    }

    #[test]
    fn empty_star_is_its_outline() {
        let center = Point::new(32, 32);
        let mut c = canvas(64, 64);
        c.draw_star(center, 20, 8, 5, Color::Black, 1, Fill::Empty);
        assert!(c.sink().is_empty());

        let vertices = star_vertices(center, 20, 8, 5);
        let mut outline = canvas(64, 64);
        for (i, &v) in vertices.iter().enumerate() {
            let next = vertices[(i + 1) % vertices.len()];
            outline.draw_line(v, next, Color::Black, 1, LineStyle::Solid);
        }
        assert_eq!(pixels_of(&c, Color::Black), pixels_of(&outline, Color::Black));
        assert_eq!(c.pixel(Point::new(32, 12)), Some(Color::Black));
        assert_eq!(c.pixel(center), Some(Color::White));
    }

    #[test]
    fn huge_star_is_clipped_without_overflow() {
        let mut c = canvas(16, 16);
        c.draw_star(Point::new(8, 8), 50000, 0, 3, Color::Black, 1, Fill::Full);
        assert!(c.sink().is_empty());
        // the top spike runs straight up through the canvas
        for y in 0..=8 {
            assert_eq!(c.pixel(Point::new(8, y)), Some(Color::Black));
        }

        c.draw_star(Point::new(8, 8), u16::MAX, u16::MAX, 10, Color::Red, 1, Fill::Empty);
        assert!(c.sink().is_empty());
    }

    #[test]
    fn interpolation_is_exact_for_large_coordinates() {
        let (a, b) = (Point::new(0, 0), Point::new(60000, 60000));
        assert_eq!(lerp_x(a, b, 50000), 50000);
        assert_eq!(lerp_x(b, a, 30000), 30000);
        assert_eq!(scale(65535, 65535, 65535), 65535);
        assert_eq!(scale(-60000, 40000, 60000), -40000);
    }

    #[test]
    fn star_starts_at_the_top() {
        let mut c = canvas(64, 64);
        c.draw_star(Point::new(32, 32), 20, 8, 5, Color::Red, 1, Fill::Full);
        assert!(c.sink().is_empty());
        assert_eq!(c.pixel(Point::new(32, 12)), Some(Color::Red));
        assert_eq!(c.pixel(Point::new(32, 32)), Some(Color::Red));
        assert_eq!(c.pixel(Point::new(32, 11)), Some(Color::White));
    }
}
