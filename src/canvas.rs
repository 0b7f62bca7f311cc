//! Dual bit-plane framebuffer
//!
//! [`Canvas`] owns one black plane and one red plane. Every drawing operation
//! in this crate ends in [`Canvas::set_pixel`], which runs the coordinate
//! transform and applies the color encoding from [`crate::color`].

use alloc::vec::Vec;
use embedded_graphics_core::geometry::{Point, Size};
use log::debug;

use crate::color::Color;
use crate::error::{Diagnostic, DiagnosticSink, Error, LogSink};
use crate::orientation::{find_position, Mirror, Orientation, Rotation, TransformError};

/// Logical canvas size and the physical extents of plane memory
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Logical width in pixels
    pub width: u16,
    /// Logical height in pixels
    pub height: u16,
    /// Physical plane width in pixels
    pub width_memory: u16,
    /// Physical plane height in pixels
    pub height_memory: u16,
}

impl Dimensions {
    /// Dimensions whose memory extents equal the logical canvas
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            width_memory: width,
            height_memory: height,
        }
    }

    /// Dimensions with distinct physical memory extents
    pub const fn with_memory(width: u16, height: u16, width_memory: u16, height_memory: u16) -> Self {
        Self {
            width,
            height,
            width_memory,
            height_memory,
        }
    }

    /// Bytes per plane row
    pub const fn width_byte(&self) -> usize {
        (self.width_memory as usize).div_ceil(8)
    }

    /// Rows per plane
    pub const fn height_byte(&self) -> usize {
        self.height_memory as usize
    }

    /// Bytes per plane
    pub const fn buffer_len(&self) -> usize {
        self.width_byte() * self.height_byte()
    }

    /// Logical size
    pub const fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }

    /// Whether `p` lies on the logical canvas
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < i32::from(self.width) && p.y < i32::from(self.height)
    }
}

/// Black/white/red framebuffer
///
/// Drawing never fails: rejected calls are reported to the sink `S` and
/// leave the planes untouched.
pub struct Canvas<S: DiagnosticSink = LogSink> {
    black: Vec<u8>,
    red: Vec<u8>,
    dims: Dimensions,
    orientation: Orientation,
    sink: S,
}

impl Canvas<LogSink> {
    /// Allocate both planes for a `width` × `height` canvas, cleared to white.
    pub fn new(width: u16, height: u16) -> Result<Self, Error> {
        Self::with_dimensions(Dimensions::new(width, height))
    }

    /// Allocate both planes for the given dimensions, cleared to white.
    pub fn with_dimensions(dims: Dimensions) -> Result<Self, Error> {
        Canvas::with_sink(dims, LogSink)
    }
}

impl<S: DiagnosticSink> Canvas<S> {
    /// Allocate both planes and report diagnostics to `sink`.
    pub fn with_sink(dims: Dimensions, sink: S) -> Result<Self, Error> {
        if dims.width == 0 || dims.height == 0 || dims.width_memory == 0 || dims.height_memory == 0 {
            return Err(Error::InvalidParameter("canvas extents must be non-zero"));
        }

        let len = dims.buffer_len();
        debug!("allocating two {} byte planes for {:?}", len, dims);
        let black = alloc_plane(len, "black")?;
        // `black` is dropped here if the red plane fails
        let red = alloc_plane(len, "red")?;

        Ok(Canvas {
            black,
            red,
            dims,
            orientation: Orientation::default(),
            sink,
        })
    }

    /// Canvas dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Logical width
    pub fn width(&self) -> u16 {
        self.dims.width
    }

    /// Logical height
    pub fn height(&self) -> u16 {
        self.dims.height
    }

    /// Black plane, row-major, MSB = leftmost pixel
    pub fn black_plane(&self) -> &[u8] {
        &self.black
    }

    /// Red plane, row-major, MSB = leftmost pixel
    pub fn red_plane(&self) -> &[u8] {
        &self.red
    }

    /// The diagnostic sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the diagnostic sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Current orientation
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Set rotation and mirror for all subsequent writes
    pub fn set_orientation(&mut self, rotation: Rotation, mirror: Mirror) {
        self.orientation = Orientation::new(rotation, mirror);
    }

    /// Set the rotation, keeping the mirror
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.orientation.rotation = rotation;
    }

    /// Set the mirror, keeping the rotation
    pub fn set_mirror(&mut self, mirror: Mirror) {
        self.orientation.mirror = mirror;
    }

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        self.sink.emit(diagnostic);
    }

    pub(crate) fn out_of_bounds(&mut self, op: &'static str, p: Point) {
        self.report(Diagnostic::BoundsViolation { op, x: p.x, y: p.y });
    }

    pub(crate) fn invalid(&mut self, op: &'static str, reason: &'static str) {
        self.report(Diagnostic::InvalidParameter { op, reason });
    }

    /// Whether `p` lies on the logical canvas, reporting when it does not
    pub(crate) fn check_bounds(&mut self, op: &'static str, p: Point) -> bool {
        if self.dims.contains(p) {
            true
        } else {
            self.out_of_bounds(op, p);
            false
        }
    }

    /// Write `p` if it lies on the canvas, silently skipping it otherwise
    pub(crate) fn plot(&mut self, p: Point, color: Color) {
        if self.dims.contains(p) {
            self.set_pixel(p, color);
        }
    }

    /// Write one logical pixel.
    pub fn set_pixel(&mut self, p: Point, color: Color) {
        let (x, y) = match self.orientation.transform(p.x, p.y, &self.dims) {
            Ok(xy) => xy,
            Err(TransformError::Logical) => return self.out_of_bounds("set_pixel", p),
            Err(TransformError::Physical { x, y }) => {
                return self.out_of_bounds("set_pixel", Point::new(x, y))
            }
        };

        let Some((black_bit, red_bit)) = color.plane_bits() else {
            return;
        };

        let (index, bit) = find_position(x, y, self.dims.width_byte());
        apply_bit(&mut self.black[index], bit, black_bit);
        apply_bit(&mut self.red[index], bit, red_bit);
    }

    /// Read back one logical pixel
    pub fn pixel(&self, p: Point) -> Option<Color> {
        let (x, y) = self.orientation.transform(p.x, p.y, &self.dims).ok()?;
        let (index, bit) = find_position(x, y, self.dims.width_byte());
        Some(Color::from_plane_bits(
            self.black[index] & bit != 0,
            self.red[index] & bit != 0,
        ))
    }

    /// Fill both planes with `color`; transparent leaves them untouched.
    pub fn fill_screen(&mut self, color: Color) {
        let Some((black, red)) = color.plane_bytes() else {
            return;
        };
        self.black.fill(black);
        self.red.fill(red);
    }

    /// Blit a 1bpp bitmap with black for set bits and white for clear bits.
    pub fn draw_bitmap_mono(&mut self, origin: Point, size: Size, bits: &[u8]) {
        self.draw_bitmap(origin, size, bits, Color::Black, Color::White);
    }

    /// Blit a 1bpp bitmap.
    ///
    /// `bits` is a packed MSB-first row-major stream: pixel `i = col + row * w`
    /// lives in bit `0x80 >> (i % 8)` of byte `i / 8`. Set bits are drawn with
    /// `active`, clear bits with `inactive`; either may be [`Color::None`].
    pub fn draw_bitmap(
        &mut self,
        origin: Point,
        size: Size,
        bits: &[u8],
        active: Color,
        inactive: Color,
    ) {
        if !self.check_bounds("draw_bitmap", origin) {
            return;
        }
        let (w, h) = (u64::from(size.width), u64::from(size.height));
        if (bits.len() as u64) < (w * h).div_ceil(8) {
            return self.invalid("draw_bitmap", "bitmap data shorter than width * height bits");
        }

        // only the part overlapping the canvas is visited
        let cols = w.min(u64::from(self.width()) - origin.x as u64);
        let rows = h.min(u64::from(self.height()) - origin.y as u64);
        for row in 0..rows {
            for col in 0..cols {
                let p = origin + Point::new(col as i32, row as i32);
                // below w * h, which the length check bounds by the slice
                let i = (col + row * w) as usize;
                let color = if bits[i / 8] & (0x80 >> (i % 8)) != 0 {
                    active
                } else {
                    inactive
                };
                self.set_pixel(p, color);
            }
        }
    }
}

fn alloc_plane(len: usize, plane: &'static str) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    if buf.try_reserve_exact(len).is_err() {
        debug!("failed to allocate memory for {} plane", plane);
        return Err(Error::AllocationFailure { plane, bytes: len });
    }
    buf.resize(len, 0xFF);
    Ok(buf)
}

fn apply_bit(byte: &mut u8, mask: u8, set: bool) {
    if set {
        *byte |= mask;
    } else {
        *byte &= !mask;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    pub(crate) type TestCanvas = Canvas<Vec<Diagnostic>>;

    pub(crate) fn canvas(width: u16, height: u16) -> TestCanvas {
        Canvas::with_sink(Dimensions::new(width, height), Vec::new()).unwrap()
    }

    /// All logical points that currently hold `color`
    pub(crate) fn pixels_of(c: &TestCanvas, color: Color) -> Vec<Point> {
        let mut out = Vec::new();
        for y in 0..i32::from(c.height()) {
            for x in 0..i32::from(c.width()) {
                let p = Point::new(x, y);
                if c.pixel(p) == Some(color) {
                    out.push(p);
                }
            }
        }
        out
    }

    #[test]
    fn new_canvas_is_white() {
        let c = canvas(20, 4);
        assert_eq!(c.black_plane().len(), 3 * 4);
        assert!(c.black_plane().iter().all(|&b| b == 0xFF));
        assert!(c.red_plane().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn zero_extent_is_rejected() {
        assert_eq!(
            Canvas::new(0, 10).err(),
            Some(Error::InvalidParameter("canvas extents must be non-zero"))
        );
    }

    #[test]
    fn plane_layout_uses_ceil_width() {
        let d = Dimensions::new(880, 528);
        assert_eq!(d.width_byte(), 110);
        assert_eq!(d.buffer_len(), 110 * 528);
        assert_eq!(Dimensions::new(13, 2).width_byte(), 2);
    }

    #[test]
    fn fill_screen_patterns() {
        let mut c = canvas(16, 8);

        c.fill_screen(Color::White);
        assert!(c.black_plane().iter().all(|&b| b == 0xFF));
        assert!(c.red_plane().iter().all(|&b| b == 0xFF));

        c.fill_screen(Color::Black);
        assert!(c.black_plane().iter().all(|&b| b == 0x00));
        assert!(c.red_plane().iter().all(|&b| b == 0xFF));

        c.fill_screen(Color::Red);
        assert!(c.black_plane().iter().all(|&b| b == 0xFF));
        assert!(c.red_plane().iter().all(|&b| b == 0x00));

        c.fill_screen(Color::None);
        assert!(c.black_plane().iter().all(|&b| b == 0xFF));
        assert!(c.red_plane().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn set_pixel_color_rule() {
        let mut c = canvas(16, 2);
        c.set_pixel(Point::new(0, 0), Color::Black);
        c.set_pixel(Point::new(1, 0), Color::Red);
        c.set_pixel(Point::new(9, 1), Color::Black);
        assert_eq!(c.black_plane(), &[0x7F, 0xFF, 0xFF, 0xBF]);
        assert_eq!(c.red_plane(), &[0xBF, 0xFF, 0xFF, 0xFF]);

        c.set_pixel(Point::new(0, 0), Color::White);
        assert_eq!(c.black_plane()[0], 0xFF);
        assert_eq!(c.red_plane()[0], 0xBF);
    }

    #[test]
    fn transparent_pixel_is_noop() {
        let mut c = canvas(8, 1);
        c.fill_screen(Color::Red);
        c.set_pixel(Point::new(3, 0), Color::None);
        assert_eq!(c.pixel(Point::new(3, 0)), Some(Color::Red));
        assert!(c.sink().is_empty());
    }

    #[test]
    fn set_pixel_past_width_mutates_nothing() {
        let mut c = canvas(16, 8);
        c.set_pixel(Point::new(2, 2), Color::Red);
        let black = c.black_plane().to_vec();
        let red = c.red_plane().to_vec();

        c.set_pixel(Point::new(17, 0), Color::Black);
        c.set_pixel(Point::new(16, 0), Color::Black);

        assert_eq!(c.black_plane(), &black[..]);
        assert_eq!(c.red_plane(), &red[..]);
        assert_eq!(
            c.sink()[0],
            Diagnostic::BoundsViolation { op: "set_pixel", x: 17, y: 0 }
        );
        assert_eq!(c.sink().len(), 2);
    }

    #[test]
    fn orientation_is_stored_and_applied() {
        let mut c = canvas(16, 16);
        c.set_orientation(Rotation::Rotate180, Mirror::None);
        assert_eq!(c.orientation(), Orientation::new(Rotation::Rotate180, Mirror::None));

        c.set_pixel(Point::new(0, 0), Color::Black);
        // physical (15, 15): last byte, last bit
        let last = c.black_plane().len() - 1;
        assert_eq!(c.black_plane()[last], 0xFE);
        assert_eq!(c.pixel(Point::new(0, 0)), Some(Color::Black));

        c.set_mirror(Mirror::Both);
        assert_eq!(c.orientation().rotation, Rotation::Rotate180);
        c.set_pixel(Point::new(0, 0), Color::Red);
        assert_eq!(c.red_plane()[0], 0x7F);
    }

    #[test]
    fn rotated_write_outside_memory_is_reported() {
        let mut c = canvas(32, 8);
        c.set_rotation(Rotation::Rotate90);
        c.set_pixel(Point::new(20, 0), Color::Black);
        assert!(c.black_plane().iter().all(|&b| b == 0xFF));
        assert!(matches!(
            c.sink()[0],
            Diagnostic::BoundsViolation { op: "set_pixel", .. }
        ));
    }

    #[test]
    fn bitmap_blit_uses_packed_bits() {
        let mut c = canvas(16, 4);
        // 3x3 plus sign: 010 111 010 -> 0b0101_1101, 0b0000_0000
        let bits = [0b0101_1101, 0b0000_0000];
        c.draw_bitmap(Point::new(4, 1), Size::new(3, 3), &bits, Color::Red, Color::None);

        let red = pixels_of(&c, Color::Red);
        assert_eq!(
            red,
            vec![
                Point::new(5, 1),
                Point::new(4, 2),
                Point::new(5, 2),
                Point::new(6, 2),
                Point::new(5, 3),
            ]
        );
    }

    #[test]
    fn bitmap_mono_paints_inactive_white() {
        let mut c = canvas(8, 1);
        c.fill_screen(Color::Red);
        c.draw_bitmap_mono(Point::zero(), Size::new(8, 1), &[0xF0]);
        assert_eq!(c.black_plane(), &[0x0F]);
        assert_eq!(c.red_plane(), &[0xFF]);
    }

    #[test]
    fn bitmap_clips_and_validates() {
        let mut c = canvas(8, 2);
        c.draw_bitmap(Point::new(6, 0), Size::new(4, 1), &[0xF0], Color::Black, Color::None);
        assert_eq!(pixels_of(&c, Color::Black), vec![Point::new(6, 0), Point::new(7, 0)]);
        assert!(c.sink().is_empty());

        c.draw_bitmap(Point::new(0, 0), Size::new(8, 2), &[0xFF], Color::Black, Color::None);
        assert_eq!(
            c.sink().last(),
            Some(&Diagnostic::InvalidParameter {
                op: "draw_bitmap",
                reason: "bitmap data shorter than width * height bits",
            })
        );

        c.draw_bitmap(Point::new(8, 0), Size::new(1, 1), &[0xFF], Color::Black, Color::None);
        assert!(matches!(
            c.sink().last(),
            Some(Diagnostic::BoundsViolation { op: "draw_bitmap", .. })
        ));
    }

    #[test]
    fn bitmap_wider_than_canvas_keeps_its_row_stride() {
        let mut c = canvas(16, 4);
        let mut bits = [0x00; 16];
        // row 1 starts at bit 64
        bits[8] = 0xFF;
        c.draw_bitmap(Point::zero(), Size::new(64, 2), &bits, Color::Black, Color::None);
        let expected: Vec<Point> = (0..8).map(|x| Point::new(x, 1)).collect();
        assert_eq!(pixels_of(&c, Color::Black), expected);
        assert!(c.sink().is_empty());
    }

    #[test]
    fn oversized_bitmap_extent_is_rejected() {
        let mut c = canvas(16, 4);
        c.draw_bitmap(Point::zero(), Size::new(u32::MAX, u32::MAX), &[0xFF; 8], Color::Black, Color::None);
        assert!(pixels_of(&c, Color::Black).is_empty());
        assert!(matches!(
            c.sink()[..],
            [Diagnostic::InvalidParameter { op: "draw_bitmap", .. }]
        ));
    }
}
