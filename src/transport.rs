//! Handing finished planes to hardware

use embedded_hal::delay::DelayNs;

use crate::canvas::Canvas;
use crate::error::DiagnosticSink;

/// Something that delivers a black and a red plane to a display.
///
/// Planes arrive in canvas layout: row-major, `ceil(width_memory / 8)` bytes
/// per row, MSB = leftmost pixel, with the bit encoding from
/// [`crate::color`]. Any conversion the panel needs (such as inverting the
/// red plane) is the transport's job.
pub trait Transport {
    /// Transport failure
    type Error;

    /// Push both planes to the display and refresh it
    fn transmit(
        &mut self,
        black: &[u8],
        red: &[u8],
        delay: &mut impl DelayNs,
    ) -> Result<(), Self::Error>;
}

impl<S: DiagnosticSink> Canvas<S> {
    /// Send the current planes through `transport`.
    ///
    /// The canvas is borrowed for the whole transfer, so no drawing can
    /// change the planes while they are read.
    pub fn flush<T: Transport>(
        &self,
        transport: &mut T,
        delay: &mut impl DelayNs,
    ) -> Result<(), T::Error> {
        transport.transmit(self.black_plane(), self.red_plane(), delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::tests::canvas;
    use crate::color::Color;
    use alloc::vec::Vec;
    use embedded_graphics_core::geometry::Point;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(Vec<u8>, Vec<u8>)>,
    }

    impl Transport for Recorder {
        type Error = ();

        fn transmit(&mut self, black: &[u8], red: &[u8], _: &mut impl DelayNs) -> Result<(), ()> {
            self.frames.push((black.to_vec(), red.to_vec()));
            Ok(())
        }
    }

    struct NoDelay;
    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    #[test]
    fn flush_hands_over_both_planes() {
        let mut c = canvas(16, 2);
        c.set_pixel(Point::new(0, 0), Color::Black);
        c.set_pixel(Point::new(15, 1), Color::Red);

        let mut t = Recorder::default();
        c.flush(&mut t, &mut NoDelay).unwrap();

        assert_eq!(t.frames.len(), 1);
        let (black, red) = &t.frames[0];
        assert_eq!(black[..], [0x7F, 0xFF, 0xFF, 0xFF]);
        assert_eq!(red[..], [0xFF, 0xFF, 0xFF, 0xFE]);
    }
}
