//! Black/white/red e-paper canvas
//!
//! Renders pixels, lines, shapes, text and clock faces into the two bit-planes
//! a tri-color e-paper controller expects, and ships a driver for the
//! 880x528 7.5" B HD panel.
//!
//! ## Architecture
//!
//! Rendering is separated from hardware control:
//! - [`Canvas`](canvas::Canvas) owns the black and red planes. Every draw call
//!   goes through the rotation/mirror transform and the color encoding.
//! - [`Transport`](transport::Transport) is anything that can push finished
//!   planes to a panel. [`Epd7in5bHd`](driver::Epd7in5bHd) is the SPI
//!   implementation for the 7.5" B HD panel.
//!
//! Draw calls never fail. Out-of-range coordinates and bad parameters skip the
//! call and emit a [`Diagnostic`](error::Diagnostic) to the canvas' sink,
//! which logs at debug level by default.
//!
//! ## Usage
//!
//! ```rust, ignore
//! use tricolor_epd::prelude::*;
//!
//! // 1. Create the hardware driver
//! let mut epd = Epd7in5bHd::new(spi, busy, dc, rst);
//! epd.init(&mut delay)?;
//!
//! // 2. Create the canvas
//! let mut canvas = Canvas::new(EPD_7IN5B_HD_WIDTH, EPD_7IN5B_HD_HEIGHT)?;
//! canvas.fill_screen(Color::White);
//!
//! // 3. Draw
//! canvas.draw_rectangle(
//!     Point::new(10, 10),
//!     Point::new(200, 80),
//!     Color::Black,
//!     2,
//!     LineStyle::Solid,
//!     Fill::Empty,
//! );
//! canvas.draw_string(Point::new(20, 30), "Hello", &FONT24, Color::Red, Color::None);
//! canvas.draw_analog_clock(
//!     Point::new(440, 264),
//!     200,
//!     ClockTime::new(10, 8, 30),
//!     &AnalogClockStyle::default(),
//! );
//!
//! // 4. Push both planes to the panel
//! canvas.flush(&mut epd, &mut delay)?;
//! epd.sleep(&mut delay)?;
//! ```
//!
//! With the `graphics` feature (on by default) the canvas is also an
//! `embedded-graphics` `DrawTarget`.
//!
#![no_std]
#![deny(missing_docs)]
#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

extern crate alloc;

pub mod canvas;
pub mod clock;
mod cmd;
pub mod color;
pub mod complex_shapes;
pub mod driver;
pub mod error;
mod flag;
pub mod fonts;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod interface;
pub mod orientation;
pub mod shapes;
pub mod text;
pub mod transport;

/// Width of the 7.5" B HD panel in pixels
pub const EPD_7IN5B_HD_WIDTH: u16 = 880;

/// Height of the 7.5" B HD panel in pixels
pub const EPD_7IN5B_HD_HEIGHT: u16 = 528;

/// Useful exports
pub mod prelude {
    pub use embedded_graphics_core::geometry::{Point, Size};

    pub use crate::canvas::{Canvas, Dimensions};
    pub use crate::clock::{AnalogClockStyle, ClockTime, HourFormat, SegmentClockStyle};
    pub use crate::color::Color;
    pub use crate::driver::Epd7in5bHd;
    pub use crate::error::{Diagnostic, DiagnosticSink, Error, LogSink};
    pub use crate::fonts::{Font, FONT12, FONT16, FONT20, FONT24, FONT8};
    pub use crate::orientation::{Mirror, Rotation};
    pub use crate::shapes::{Fill, LineStyle};
    pub use crate::transport::Transport;
    pub use crate::{EPD_7IN5B_HD_HEIGHT, EPD_7IN5B_HD_WIDTH};
}
