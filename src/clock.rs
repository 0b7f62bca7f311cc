//! Analog and seven-segment clock faces

use core::f32::consts::PI;

use embedded_graphics_core::geometry::{Point, Size};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::DiagnosticSink;
use crate::fonts::FONT16;
use crate::shapes::{Fill, LineStyle};

/// Lit segments per digit, bit 0 = a ... bit 6 = g
pub const SEGMENT_PATTERNS: [u8; 10] = [
    0b0011_1111, // 0
    0b0000_0110, // 1
    0b0101_1011, // 2
    0b0100_1111, // 3
    0b0110_0110, // 4
    0b0110_1101, // 5
    0b0111_1101, // 6
    0b0000_0111, // 7
    0b0111_1111, // 8
    0b0110_1111, // 9
];

/// Bar thickness of a seven-segment digit
pub const SEGMENT_THICKNESS: i32 = 4;

const DIGIT_GAP: i32 = 10;
const COLON_SPACING: i32 = 15;
const COLON_GAP: i32 = 10;
const MERIDIEM_GAP: i32 = 20;
const MAX_CELL: u32 = u16::MAX as u32;

/// Time of day shown by a clock face
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockTime {
    /// 0..=23
    pub hour: u8,
    /// 0..=59
    pub minute: u8,
    /// 0..=59
    pub second: u8,
}

impl ClockTime {
    /// Create a time of day
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    fn is_valid(&self) -> bool {
        self.hour < 24 && self.minute < 60 && self.second < 60
    }
}

/// Colors and options of an analog clock
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalogClockStyle {
    /// Rim, hour ticks and minute dots
    pub face: Color,
    /// Hour and minute hands and the centre disc
    pub hands: Color,
    /// Hour numerals
    pub numbers: Color,
    /// Draw the red second hand
    pub show_seconds: bool,
    /// Draw numerals 1 to 12
    pub show_numbers: bool,
}

impl Default for AnalogClockStyle {
    fn default() -> Self {
        Self {
            face: Color::Black,
            hands: Color::Black,
            numbers: Color::Black,
            show_seconds: true,
            show_numbers: true,
        }
    }
}

/// 12 or 24 hour display
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HourFormat {
    /// 00 to 23
    #[default]
    H24,
    /// 1 to 12 with an AM/PM suffix
    H12,
}

/// Colors and options of a seven-segment clock
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentClockStyle {
    /// Lit segments, colons and the AM/PM suffix
    pub on: Color,
    /// Dark segments; [`Color::None`] leaves them undrawn
    pub off: Color,
    /// Append a seconds group
    pub show_seconds: bool,
    /// Hour format
    pub format: HourFormat,
}

impl Default for SegmentClockStyle {
    fn default() -> Self {
        Self {
            on: Color::Black,
            off: Color::None,
            show_seconds: true,
            format: HourFormat::H24,
        }
    }
}

/// One bar of a seven-segment digit
///
/// ```text
///  a
/// f b
///  g
/// e c
///  d
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Top
    A,
    /// Upper right
    B,
    /// Lower right
    C,
    /// Bottom
    D,
    /// Lower left
    E,
    /// Upper left
    F,
    /// Middle
    G,
}

impl Segment {
    /// All segments in bit order
    pub const ALL: [Segment; 7] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
    ];

    /// Whether this segment is lit for `digit`
    pub fn is_lit(self, digit: u8) -> bool {
        SEGMENT_PATTERNS
            .get(usize::from(digit))
            .is_some_and(|pattern| pattern & (1 << self as u8) != 0)
    }

    /// Inclusive top-left and bottom-right corners of the bar inside a cell.
    ///
    /// Cell extents are capped at `u16::MAX`.
    pub fn bounds(self, origin: Point, cell: Size) -> (Point, Point) {
        let (x, y) = (origin.x, origin.y);
        let w = cell.width.min(MAX_CELL) as i32;
        let h = cell.height.min(MAX_CELL) as i32;
        let t = SEGMENT_THICKNESS;
        let half = h / 2;

        let (x0, y0, x1, y1) = match self {
            Segment::A => (x + t, y, x + w - t, y + t),
            Segment::B => (x + w - t, y + t, x + w, y + half),
            Segment::C => (x + w - t, y + half, x + w, y + h - t),
            Segment::D => (x + t, y + h - t, x + w - t, y + h),
            Segment::E => (x, y + half, x + t, y + h - t),
            Segment::F => (x, y + t, x + t, y + half),
            Segment::G => (x + t, y + half - t / 2, x + w - t, y + half + t / 2),
        };
        (Point::new(x0, y0), Point::new(x1 - 1, y1 - 1))
    }
}

impl<S: DiagnosticSink> Canvas<S> {
    /// Draw an analog clock face showing `time`.
    pub fn draw_analog_clock(
        &mut self,
        center: Point,
        radius: u16,
        time: ClockTime,
        style: &AnalogClockStyle,
    ) {
        if !time.is_valid() {
            return self.invalid("draw_analog_clock", "time of day out of range");
        }
        if !self.check_bounds("draw_analog_clock", center) {
            return;
        }
        let r = f32::from(radius);

        self.draw_circle(center, radius, style.face, 2, Fill::Empty);

        for i in 0..12u8 {
            let angle = f32::from(i) * 30.0 - 90.0;
            let inner = polar(center, r - 10.0, angle);
            let outer = polar(center, r - 5.0, angle);
            self.line(inner, outer, style.face, 2, LineStyle::Solid);

            if style.show_numbers {
                let at = polar(center, r - 25.0, angle) + Point::new(-6, -8);
                let numeral = if i == 0 { 12 } else { i32::from(i) };
                if self.dimensions().contains(at) {
                    self.draw_number(at, numeral, &FONT16, style.numbers, Color::None);
                }
            }
        }

        self.minute_dots(center, r, style.face);

        let hour_angle =
            f32::from(time.hour % 12) * 30.0 + f32::from(time.minute) * 0.5 - 90.0;
        let minute_angle = f32::from(time.minute) * 6.0 - 90.0;
        let second_angle = f32::from(time.second) * 6.0 - 90.0;

        let hour_tip = polar(center, trunc(r * 0.5), hour_angle);
        self.line(center, hour_tip, style.hands, 3, LineStyle::Solid);

        let minute_tip = polar(center, trunc(r * 0.7), minute_angle);
        self.line(center, minute_tip, style.hands, 2, LineStyle::Solid);

        if style.show_seconds {
            let second_tip = polar(center, trunc(r * 0.8), second_angle);
            self.line(center, second_tip, Color::Red, 1, LineStyle::Solid);
        }

        self.draw_circle(center, 5, style.hands, 1, Fill::Full);
    }

    /// Draw `time` as seven-segment digits, each in a `cell` sized box.
    pub fn draw_digital_clock_7segment(
        &mut self,
        origin: Point,
        cell: Size,
        time: ClockTime,
        style: &SegmentClockStyle,
    ) {
        if !time.is_valid() {
            return self.invalid("draw_digital_clock_7segment", "time of day out of range");
        }
        if cell.width < 2 * SEGMENT_THICKNESS as u32 || cell.height < 2 * SEGMENT_THICKNESS as u32 {
            return self.invalid(
                "draw_digital_clock_7segment",
                "cell must be at least twice the segment thickness",
            );
        }
        if cell.width > u32::from(self.width()) || cell.height > u32::from(self.height()) {
            return self.invalid(
                "draw_digital_clock_7segment",
                "cell is larger than the canvas",
            );
        }
        if !self.check_bounds("draw_digital_clock_7segment", origin) {
            return;
        }

        let pitch = cell.width as i32 + DIGIT_GAP;
        let h = cell.height as i32;
        let mut x = origin.x;

        let hour = match style.format {
            HourFormat::H24 => time.hour,
            HourFormat::H12 => match time.hour {
                0 => 12,
                h if h > 12 => h - 12,
                h => h,
            },
        };

        if style.format == HourFormat::H24 || hour >= 10 {
            self.segment_digit(Point::new(x, origin.y), cell, hour / 10, style);
            x += pitch;
        }
        self.segment_digit(Point::new(x, origin.y), cell, hour % 10, style);
        x += pitch;

        let values = [time.minute, time.second];
        let groups = if style.show_seconds { &values[..] } else { &values[..1] };

        for &value in groups {
            let colon_x = x + COLON_SPACING / 2;
            self.stamp(Point::new(colon_x, origin.y + h / 3), style.on, 3);
            self.stamp(Point::new(colon_x, origin.y + 2 * h / 3), style.on, 3);
            x += COLON_SPACING + COLON_GAP;

            self.segment_digit(Point::new(x, origin.y), cell, value / 10, style);
            x += pitch;
            self.segment_digit(Point::new(x, origin.y), cell, value % 10, style);
            x += pitch;
        }

        if style.format == HourFormat::H12 {
            let suffix = if time.hour < 12 { "AM" } else { "PM" };
            let at = Point::new(x + MERIDIEM_GAP, origin.y + h / 4);
            self.draw_string(at, suffix, &FONT16, style.on, Color::None);
        }
    }

    /// One dot per minute at `r - 8`, except where an hour tick sits
    fn minute_dots(&mut self, center: Point, r: f32, color: Color) {
        for i in (0..60u8).filter(|i| i % 5 != 0) {
            let dot = polar(center, r - 8.0, f32::from(i) * 6.0 - 90.0);
            self.stamp(dot, color, 1);
        }
    }

    fn segment_digit(&mut self, origin: Point, cell: Size, digit: u8, style: &SegmentClockStyle) {
        for segment in Segment::ALL {
            let color = if segment.is_lit(digit) { style.on } else { style.off };
            if !color.is_opaque() {
                continue;
            }
            let (tl, br) = segment.bounds(origin, cell);
            for y in tl.y..=br.y {
                self.hspan(tl.x, br.x, y, color);
            }
        }
    }
}

/// Point at `length` from `center` along `degrees`, clockwise from east
fn polar(center: Point, length: f32, degrees: f32) -> Point {
    let rad = degrees * PI / 180.0;
    center + Point::new((length * libm::cosf(rad)) as i32, (length * libm::sinf(rad)) as i32)
}

fn trunc(v: f32) -> f32 {
    libm::truncf(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::tests::{canvas, pixels_of};
    use crate::error::Diagnostic;

    #[test]
    fn segment_patterns_match_digits() {
        let lit = |d: u8| -> heapless::Vec<Segment, 7> {
            Segment::ALL.into_iter().filter(|s| s.is_lit(d)).collect()
        };
        assert_eq!(lit(1)[..], [Segment::B, Segment::C]);
        assert_eq!(lit(7)[..], [Segment::A, Segment::B, Segment::C]);
        assert_eq!(lit(8).len(), 7);
        assert!(!Segment::G.is_lit(0));
        assert!(!Segment::A.is_lit(10));
    }

    #[test]
    fn segment_bars_stay_inside_cell() {
        let cell = Size::new(20, 40);
        for s in Segment::ALL {
            let (tl, br) = s.bounds(Point::new(5, 5), cell);
            assert!(tl.x >= 5 && tl.y >= 5 && br.x <= 24 && br.y <= 44, "{s:?}");
        }
        let (tl, br) = Segment::A.bounds(Point::zero(), cell);
        assert_eq!((tl, br), (Point::new(4, 0), Point::new(15, 3)));
    }

    #[test]
    fn twelve_hour_clock_drops_leading_zero_and_adds_suffix() {
        let mut c = canvas(200, 48);
        let style = SegmentClockStyle {
            on: Color::Black,
            off: Color::None,
            show_seconds: false,
            format: HourFormat::H12,
        };
        c.draw_digital_clock_7segment(Point::zero(), Size::new(20, 40), ClockTime::new(13, 5, 0), &style);
        assert!(c.sink().is_empty());

        // first cell shows '1': right bars only
        assert_eq!(c.pixel(Point::new(10, 1)), Some(Color::White));
        assert_eq!(c.pixel(Point::new(18, 10)), Some(Color::Black));
        assert_eq!(c.pixel(Point::new(1, 10)), Some(Color::White));

        // colon dots
        assert_eq!(c.pixel(Point::new(37, 13)), Some(Color::Black));
        assert_eq!(c.pixel(Point::new(37, 26)), Some(Color::Black));

        // "PM" after the minutes: 30 + 25 + 2 * 30 + 20
        let mut expected = canvas(200, 48);
        expected.draw_string(Point::new(135, 10), "PM", &FONT16, Color::Black, Color::None);
        for p in pixels_of(&expected, Color::Black) {
            assert_eq!(c.pixel(p), Some(Color::Black), "suffix pixel {p:?}");
        }
    }

    #[test]
    fn midnight_is_twelve_am() {
        let mut c = canvas(240, 48);
        let style = SegmentClockStyle {
            show_seconds: false,
            format: HourFormat::H12,
            ..Default::default()
        };
        c.draw_digital_clock_7segment(Point::zero(), Size::new(20, 40), ClockTime::new(0, 0, 0), &style);

        // two hour digits "12", so minutes start one pitch later
        assert_eq!(c.pixel(Point::new(18, 10)), Some(Color::Black));
        assert_eq!(c.pixel(Point::new(40, 1)), Some(Color::Black));
        let mut expected = canvas(240, 48);
        expected.draw_string(Point::new(165, 10), "AM", &FONT16, Color::Black, Color::None);
        for p in pixels_of(&expected, Color::Black) {
            assert_eq!(c.pixel(p), Some(Color::Black));
        }
    }

    #[test]
    fn dark_segments_use_off_color() {
        let mut c = canvas(120, 48);
        let style = SegmentClockStyle {
            on: Color::Black,
            off: Color::Red,
            show_seconds: false,
            format: HourFormat::H24,
        };
        c.draw_digital_clock_7segment(Point::zero(), Size::new(20, 40), ClockTime::new(9, 30, 0), &style);
        // leading '0' has a dark middle bar, '9' a lit one
        assert_eq!(c.pixel(Point::new(10, 20)), Some(Color::Red));
        assert_eq!(c.pixel(Point::new(40, 20)), Some(Color::Black));
    }

    #[test]
    fn seconds_group_adds_two_digits() {
        let mut c = canvas(320, 48);
        let style = SegmentClockStyle::default();
        c.draw_digital_clock_7segment(Point::zero(), Size::new(20, 40), ClockTime::new(10, 20, 38), &style);
        // hours 0..60, colon, minutes 85..145, colon, seconds 170..230
        assert_eq!(c.pixel(Point::new(18, 20)), Some(Color::Black));
        assert_eq!(c.pixel(Point::new(152, 13)), Some(Color::Black));
        assert_eq!(c.pixel(Point::new(210, 20)), Some(Color::Black));
        assert!(c.sink().is_empty());
    }

    #[test]
    fn invalid_time_is_reported() {
        let mut c = canvas(64, 64);
        c.draw_digital_clock_7segment(
            Point::zero(),
            Size::new(20, 40),
            ClockTime::new(24, 0, 0),
            &SegmentClockStyle::default(),
        );
        c.draw_analog_clock(Point::new(32, 32), 30, ClockTime::new(1, 60, 0), &AnalogClockStyle::default());
        assert!(pixels_of(&c, Color::Black).is_empty());
        assert_eq!(c.sink().len(), 2);
        assert!(matches!(c.sink()[0], Diagnostic::InvalidParameter { .. }));
    }

    #[test]
    fn analog_second_hand_is_red() {
        let mut c = canvas(100, 100);
        let style = AnalogClockStyle {
            show_numbers: false,
            ..Default::default()
        };
        c.draw_analog_clock(Point::new(50, 50), 40, ClockTime::new(0, 0, 15), &style);

        assert_eq!(c.pixel(Point::new(75, 50)), Some(Color::Red));
        // hour and minute hands both point up
        assert_eq!(c.pixel(Point::new(50, 35)), Some(Color::Black));
        assert_eq!(c.pixel(Point::new(50, 50)), Some(Color::Black));
        // rim
        assert_eq!(c.pixel(Point::new(50, 10)), Some(Color::Black));
        assert!(c.sink().is_empty());
    }

    #[test]
    fn hour_zero_is_labelled_twelve_at_the_top() {
        let mut c = canvas(200, 200);
        let style = AnalogClockStyle {
            numbers: Color::Red,
            show_seconds: false,
            ..Default::default()
        };
        // both hands point right, away from the top numeral
        c.draw_analog_clock(Point::new(100, 100), 80, ClockTime::new(3, 15, 0), &style);

        let at = polar(Point::new(100, 100), 55.0, -90.0) + Point::new(-6, -8);
        assert_eq!(at, Point::new(94, 37));
        let mut twelve = canvas(200, 200);
        twelve.draw_number(at, 12, &FONT16, Color::Red, Color::None);

        let in_label = |p: &Point| (94..=116).contains(&p.x) && (37..=52).contains(&p.y);
        let label: alloc::vec::Vec<Point> =
            pixels_of(&c, Color::Red).into_iter().filter(in_label).collect();
        assert!(!label.is_empty());
        assert_eq!(label, pixels_of(&twelve, Color::Red));
    }

    #[test]
    fn minute_dots_skip_hour_positions() {
        let center = Point::new(100, 100);
        let mut c = canvas(200, 200);
        c.minute_dots(center, 80.0, Color::Black);

        assert_eq!(pixels_of(&c, Color::Black).len(), 48);
        // minute 1, just right of the top
        assert_eq!(c.pixel(Point::new(107, 29)), Some(Color::Black));
        // minutes 0 and 15 carry hour ticks instead
        assert_eq!(c.pixel(Point::new(100, 28)), Some(Color::White));
        assert_eq!(c.pixel(Point::new(172, 100)), Some(Color::White));
    }

    #[test]
    fn oversized_cell_is_rejected() {
        let mut c = canvas(64, 48);
        c.draw_digital_clock_7segment(
            Point::zero(),
            Size::new(1_200_000_000, 40),
            ClockTime::new(10, 20, 30),
            &SegmentClockStyle::default(),
        );
        assert!(pixels_of(&c, Color::Black).is_empty());
        assert_eq!(
            c.sink()[..],
            [Diagnostic::InvalidParameter {
                op: "draw_digital_clock_7segment",
                reason: "cell is larger than the canvas",
            }]
        );

        // a cell as large as the canvas is fine; later digits are clipped
        c.draw_digital_clock_7segment(
            Point::zero(),
            Size::new(64, 48),
            ClockTime::new(10, 20, 30),
            &SegmentClockStyle::default(),
        );
        assert_eq!(c.sink().len(), 1);
        assert!(!pixels_of(&c, Color::Black).is_empty());

        let (_, br) = Segment::D.bounds(Point::zero(), Size::new(u32::MAX, u32::MAX));
        assert_eq!(br, Point::new(65534 - SEGMENT_THICKNESS, 65534));
    }

    #[test]
    fn suffix_follows_the_seconds_group() {
        let mut c = canvas(260, 48);
        let style = SegmentClockStyle {
            format: HourFormat::H12,
            ..Default::default()
        };
        c.draw_digital_clock_7segment(Point::zero(), Size::new(20, 40), ClockTime::new(13, 5, 9), &style);
        assert!(c.sink().is_empty());

        // '1' at 0, minutes at 55 and 85, seconds at 140 and 170, one more pitch, then 20
        let mut expected = canvas(260, 48);
        expected.draw_string(Point::new(220, 10), "PM", &FONT16, Color::Black, Color::None);
        for p in pixels_of(&expected, Color::Black) {
            assert_eq!(c.pixel(p), Some(Color::Black), "suffix pixel {p:?}");
        }
        assert_eq!(c.pixel(Point::new(205, 20)), Some(Color::White));
    }

    #[test]
    fn analog_numbers_use_their_color() {
        let mut c = canvas(200, 200);
        let style = AnalogClockStyle {
            numbers: Color::Red,
            show_seconds: false,
            ..Default::default()
        };
        c.draw_analog_clock(Point::new(100, 100), 80, ClockTime::new(3, 0, 0), &style);
        let red = pixels_of(&c, Color::Red);
        assert!(!red.is_empty());
        assert!(red.iter().all(|p| (20..=180).contains(&p.x) && (20..=180).contains(&p.y)));
        assert!(c.sink().is_empty());
    }
}
