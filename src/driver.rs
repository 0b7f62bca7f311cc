//! Driver for the 880x528 7.5" B HD black/white/red panel
pub use display_interface::DisplayError;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;

use crate::cmd::Cmd;
use crate::error::Error;
use crate::flag::Flag;
use crate::interface::SpiDisplayInterface;
use crate::transport::Transport;
use crate::{EPD_7IN5B_HD_HEIGHT, EPD_7IN5B_HD_WIDTH};

use log::debug;

/// Bytes in one full-panel plane
pub const PLANE_BYTES: usize =
    (EPD_7IN5B_HD_WIDTH as usize).div_ceil(8) * EPD_7IN5B_HD_HEIGHT as usize;

/// Gate counter start: the data entry mode counts y down from 0x2AF
const RAM_Y_START: [u8; 2] = [0xAF, 0x02];

const SLEEP_SETTLE_MS: u32 = 100;
const CLEAR_SETTLE_MS: u32 = 200;

/// Power-on sequence of the panel
pub const INIT_SEQUENCE: &[InitStep] = &[
    InitStep::SWReset,
    InitStep::WaitUntilIdle,
    // fill both RAMs with the auto-write pattern
    InitStep::CmdData(Cmd::AUTO_WRITE_RED_RAM, &[Flag::AUTO_WRITE_PATTERN]),
    InitStep::WaitUntilIdle,
    InitStep::CmdData(Cmd::AUTO_WRITE_BW_RAM, &[Flag::AUTO_WRITE_PATTERN]),
    InitStep::WaitUntilIdle,
    InitStep::CmdData(Cmd::BOOSTER_SOFT_START, &[0xAE, 0xC7, 0xC3, 0xC0, 0x40]),
    // MUX 527
    InitStep::CmdData(Cmd::DRIVER_OUTPUT_CTRL, &[0xAF, 0x02, 0x01]),
    InitStep::CmdData(Cmd::DATA_ENTRY_MODE, &[Flag::DATA_ENTRY_DECRY_INCRX]),
    // x 0..=0x36F
    InitStep::CmdData(Cmd::SET_RAMXPOS, &[0x00, 0x00, 0x6F, 0x03]),
    // y 0x2AF down to 0
    InitStep::CmdData(Cmd::SET_RAMYPOS, &[0xAF, 0x02, 0x00, 0x00]),
    InitStep::CmdData(Cmd::BORDER_WAVEFORM_CTRL, &[Flag::BORDER_WAVEFORM_LUT1]),
    InitStep::CmdData(Cmd::TEMP_CONTROL, &[Flag::INTERNAL_TEMP_SENSOR]),
    InitStep::CmdData(
        Cmd::DISPLAY_UPDATE_CTRL2,
        &[Flag::DISPLAY_MODE_LOAD_TEMP_WAVEFORM],
    ),
    InitStep::Cmd(Cmd::MASTER_ACTIVATE),
    InitStep::WaitUntilIdle,
    InitStep::CmdData(Cmd::SET_RAMX_COUNTER, &[0x00, 0x00]),
    InitStep::CmdData(Cmd::SET_RAMY_COUNTER, &RAM_Y_START),
];

/// Steps that an init sequence can contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitStep {
    /// Software reset command
    SWReset,
    /// Sleep for a number of milliseconds
    DelayMs(u8),
    /// Wait until the busy line is released
    WaitUntilIdle,
    /// Send a bare command byte
    Cmd(u8),
    /// Send a command with a static data slice
    CmdData(u8, &'static [u8]),
}

/// The 7.5" B HD panel behind an SPI interface
pub struct Epd7in5bHd<SPI, BSY, DC, RST> {
    interface: SpiDisplayInterface<SPI, BSY, DC, RST>,
    init_sequence: &'static [InitStep],
    initialized: bool,
    asleep: bool,
}

impl<SPI, BSY, DC, RST> Epd7in5bHd<SPI, BSY, DC, RST>
where
    SPI: SpiDevice,
    BSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create the driver. Nothing is sent until [`Self::init`].
    pub fn new(spi: SPI, busy: BSY, dc: DC, rst: RST) -> Self {
        Self::with_init_sequence(spi, busy, dc, rst, INIT_SEQUENCE)
    }

    /// Create the driver with a custom power-on sequence
    pub fn with_init_sequence(
        spi: SPI,
        busy: BSY,
        dc: DC,
        rst: RST,
        init_sequence: &'static [InitStep],
    ) -> Self {
        debug!("creating new Epd7in5bHd instance");
        Epd7in5bHd {
            interface: SpiDisplayInterface::new(spi, busy, dc, rst),
            init_sequence,
            initialized: false,
            asleep: false,
        }
    }

    /// Give back the bus and pins
    pub fn release(self) -> (SPI, BSY, DC, RST) {
        self.interface.release()
    }

    /// Whether [`Self::init`] has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether the panel is in deep sleep
    pub fn is_asleep(&self) -> bool {
        self.asleep
    }

    /// Reset and configure the panel. Does nothing if it is already running.
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), Error> {
        if self.initialized && !self.asleep {
            debug!("panel already initialized");
            return Ok(());
        }
        self.reset(delay)?;
        self.run_init_sequence(delay)
    }

    /// Pulse the reset line; this also ends deep sleep.
    pub fn reset(&mut self, delay: &mut impl DelayNs) -> Result<(), Error> {
        self.interface.hard_reset(delay)?;
        self.asleep = false;
        Ok(())
    }

    /// Wipe the panel to white.
    pub fn clear(&mut self, delay: &mut impl DelayNs) -> Result<(), Error> {
        self.ensure_ready()?;
        debug!("clearing panel");

        self.interface.wait_until_idle(delay);
        self.interface.cmd_with_data(Cmd::SET_RAMY_COUNTER, &RAM_Y_START)?;
        self.interface.cmd(Cmd::WRITE_RED_DATA)?;
        self.interface.data_x_times(0x00, PLANE_BYTES as u32)?;

        self.interface.wait_until_idle(delay);
        self.interface.cmd_with_data(Cmd::SET_RAMY_COUNTER, &RAM_Y_START)?;
        self.interface.cmd(Cmd::WRITE_BW_DATA)?;
        self.interface.data_x_times(0xFF, PLANE_BYTES as u32)?;

        self.interface
            .cmd_with_data(Cmd::DISPLAY_UPDATE_CTRL2, &[Flag::DISPLAY_MODE_FULL_REFRESH])?;
        self.interface.cmd(Cmd::MASTER_ACTIVATE)?;
        delay.delay_ms(CLEAR_SETTLE_MS);
        self.interface.wait_until_idle(delay);
        Ok(())
    }

    /// Write both planes and run a full refresh.
    ///
    /// The red plane is inverted on the way out: the controller's red RAM
    /// uses 1 for red ink.
    pub fn display(&mut self, black: &[u8], red: &[u8], delay: &mut impl DelayNs) -> Result<(), Error> {
        self.ensure_ready()?;
        if black.len() != PLANE_BYTES || red.len() != PLANE_BYTES {
            return Err(Error::InvalidParameter("plane size does not match the panel"));
        }
        debug!("displaying planes");

        self.interface.cmd_with_data(Cmd::SET_RAMY_COUNTER, &RAM_Y_START)?;
        self.interface.cmd_with_data(Cmd::WRITE_BW_DATA, black)?;
        self.interface.wait_until_idle(delay);

        self.interface.cmd_with_data(Cmd::SET_RAMY_COUNTER, &RAM_Y_START)?;
        self.interface.cmd(Cmd::WRITE_RED_DATA)?;
        self.interface.data_inverted(red)?;

        self.interface
            .cmd_with_data(Cmd::DISPLAY_UPDATE_CTRL2, &[Flag::DISPLAY_MODE_FULL_REFRESH])?;
        self.interface.cmd(Cmd::MASTER_ACTIVATE)?;
        self.interface.wait_until_idle(delay);
        Ok(())
    }

    /// Enter deep sleep. Wake with [`Self::wake_up`].
    pub fn sleep(&mut self, delay: &mut impl DelayNs) -> Result<(), Error> {
        self.ensure_ready()?;
        debug!("entering deep sleep");
        self.interface
            .cmd_with_data(Cmd::DEEP_SLEEP, &[Flag::DEEP_SLEEP_MODE_1])?;
        delay.delay_ms(SLEEP_SETTLE_MS);
        self.asleep = true;
        Ok(())
    }

    /// Leave deep sleep by resetting and reconfiguring the panel.
    pub fn wake_up(&mut self, delay: &mut impl DelayNs) -> Result<(), Error> {
        if !self.asleep {
            debug!("panel already awake");
            return Ok(());
        }
        debug!("waking panel");
        self.reset(delay)?;
        self.run_init_sequence(delay)
    }

    fn ensure_ready(&self) -> Result<(), Error> {
        if !self.initialized || self.asleep {
            debug!(
                "panel not ready: initialized={}, asleep={}",
                self.initialized, self.asleep
            );
            return Err(Error::NotReady);
        }
        Ok(())
    }

    fn run_init_sequence(&mut self, delay: &mut impl DelayNs) -> Result<(), Error> {
        debug!("running init sequence");
        for step in self.init_sequence {
            debug!("init step: {:?}", step);
            match *step {
                InitStep::SWReset => self.interface.cmd(Cmd::SW_RESET)?,
                InitStep::DelayMs(ms) => delay.delay_ms(u32::from(ms)),
                InitStep::WaitUntilIdle => self.interface.wait_until_idle(delay),
                InitStep::Cmd(c) => self.interface.cmd(c)?,
                InitStep::CmdData(c, d) => self.interface.cmd_with_data(c, d)?,
            }
        }
        debug!("init sequence complete");
        self.initialized = true;
        self.asleep = false;
        Ok(())
    }
}

impl<SPI, BSY, DC, RST> Transport for Epd7in5bHd<SPI, BSY, DC, RST>
where
    SPI: SpiDevice,
    BSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    type Error = Error;

    fn transmit(&mut self, black: &[u8], red: &[u8], delay: &mut impl DelayNs) -> Result<(), Error> {
        self.display(black, red, delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::color::Color;
    use alloc::vec;
    use alloc::vec::Vec;
    use embedded_graphics_core::geometry::Point;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

    /// Bytes per SPI write when the interface streams generated data
    const CHUNK: usize = 64;

    /// Expected traffic on the bus and each pin
    #[derive(Default)]
    struct Expect {
        spi: Vec<SpiTransaction<u8>>,
        busy: Vec<PinTransaction>,
        dc: Vec<PinTransaction>,
        rst: Vec<PinTransaction>,
    }

    impl Expect {
        fn write(&mut self, bytes: &[u8]) {
            self.spi.push(SpiTransaction::transaction_start());
            self.spi.push(SpiTransaction::write_vec(bytes.to_vec()));
            self.spi.push(SpiTransaction::transaction_end());
        }

        fn cmd(&mut self, command: u8) -> &mut Self {
            self.dc.push(PinTransaction::set(PinState::Low));
            self.write(&[command]);
            self
        }

        fn data(&mut self, data: &[u8]) -> &mut Self {
            self.dc.push(PinTransaction::set(PinState::High));
            self.write(data);
            self
        }

        /// Data streamed through the interface's staging buffer
        fn streamed(&mut self, data: &[u8]) -> &mut Self {
            self.dc.push(PinTransaction::set(PinState::High));
            for chunk in data.chunks(CHUNK) {
                self.write(chunk);
            }
            self
        }

        fn idle_after(&mut self, busy_polls: usize) -> &mut Self {
            for _ in 0..busy_polls {
                self.busy.push(PinTransaction::get(PinState::High));
            }
            self.busy.push(PinTransaction::get(PinState::Low));
            self
        }

        fn idle(&mut self) -> &mut Self {
            self.idle_after(0)
        }

        fn reset(&mut self) -> &mut Self {
            self.rst.push(PinTransaction::set(PinState::Low));
            self.rst.push(PinTransaction::set(PinState::High));
            self
        }

        fn power_on(&mut self) -> &mut Self {
            self.reset().cmd(0x12).idle();
            self.cmd(0x46).data(&[0xF7]).idle();
            self.cmd(0x47).data(&[0xF7]).idle();
            self.cmd(0x0C).data(&[0xAE, 0xC7, 0xC3, 0xC0, 0x40]);
            self.cmd(0x01).data(&[0xAF, 0x02, 0x01]);
            self.cmd(0x11).data(&[0x01]);
            self.cmd(0x44).data(&[0x00, 0x00, 0x6F, 0x03]);
            self.cmd(0x45).data(&[0xAF, 0x02, 0x00, 0x00]);
            self.cmd(0x3C).data(&[0x01]);
            self.cmd(0x18).data(&[0x80]);
            self.cmd(0x22).data(&[0xB1]);
            self.cmd(0x20).idle();
            self.cmd(0x4E).data(&[0x00, 0x00]);
            self.cmd(0x4F).data(&[0xAF, 0x02])
        }

        fn refresh(&mut self) -> &mut Self {
            self.cmd(0x22).data(&[0xC7]).cmd(0x20)
        }

        fn build(&self) -> Harness {
            Harness {
                spi: SpiMock::new(&self.spi),
                busy: PinMock::new(&self.busy),
                dc: PinMock::new(&self.dc),
                rst: PinMock::new(&self.rst),
            }
        }
    }

    struct Harness {
        spi: SpiMock<u8>,
        busy: PinMock,
        dc: PinMock,
        rst: PinMock,
    }

    impl Harness {
        fn epd(&self) -> TestEpd {
            Epd7in5bHd::new(
                self.spi.clone(),
                self.busy.clone(),
                self.dc.clone(),
                self.rst.clone(),
            )
        }

        /// Check every expectation was met
        fn done(mut self) {
            self.spi.done();
            self.busy.done();
            self.dc.done();
            self.rst.done();
        }
    }

    type TestEpd = Epd7in5bHd<SpiMock<u8>, PinMock, PinMock, PinMock>;

    /// Delay that only tallies milliseconds
    #[derive(Default)]
    struct MsCounter {
        ms: u64,
    }

    impl DelayNs for MsCounter {
        fn delay_ns(&mut self, _ns: u32) {}
        fn delay_ms(&mut self, ms: u32) {
            self.ms += u64::from(ms);
        }
    }

    #[test]
    fn init_sends_the_power_on_sequence() {
        let harness = Expect::default().power_on().build();
        let mut epd = harness.epd();
        let mut delay = MsCounter::default();

        epd.init(&mut delay).unwrap();
        assert!(epd.is_initialized());
        // reset pulse and recovery, then four busy waits of 200 ms
        assert_eq!(delay.ms, 2 + 200 + 4 * 200);
        harness.done();
    }

    #[test]
    fn init_is_idempotent() {
        let harness = Expect::default().power_on().build();
        let mut epd = harness.epd();
        epd.init(&mut NoopDelay::new()).unwrap();
        epd.init(&mut NoopDelay::new()).unwrap();
        harness.done();
    }

    #[test]
    fn busy_line_is_polled_until_released() {
        let mut expect = Expect::default();
        expect.power_on();
        // first wait sees five busy polls
        for _ in 0..5 {
            expect.busy.insert(0, PinTransaction::get(PinState::High));
        }
        let harness = expect.build();
        let mut epd = harness.epd();
        let mut delay = MsCounter::default();

        epd.init(&mut delay).unwrap();
        assert_eq!(delay.ms, 2 + 200 + 4 * 200 + 5);
        harness.done();
    }

    #[test]
    fn operations_need_an_initialized_panel() {
        let harness = Expect::default().build();
        let mut epd = harness.epd();
        let mut delay = NoopDelay::new();
        let plane = vec![0xFF; PLANE_BYTES];

        assert_eq!(epd.display(&plane, &plane, &mut delay), Err(Error::NotReady));
        assert_eq!(epd.clear(&mut delay), Err(Error::NotReady));
        assert_eq!(epd.sleep(&mut delay), Err(Error::NotReady));
        harness.done();
    }

    #[test]
    fn display_inverts_the_red_plane() {
        let mut black = vec![0xFF; PLANE_BYTES];
        let mut red = vec![0xFF; PLANE_BYTES];
        black[0] = 0x0F;
        red[1] = 0x3C;
        let inverted: Vec<u8> = red.iter().map(|b| !b).collect();
        assert_eq!(inverted[1], 0xC3);

        let harness = Expect::default()
            .power_on()
            .cmd(0x4F)
            .data(&[0xAF, 0x02])
            .cmd(0x24)
            .data(&black)
            .idle()
            .cmd(0x4F)
            .data(&[0xAF, 0x02])
            .cmd(0x26)
            .streamed(&inverted)
            .refresh()
            .idle()
            .build();
        let mut epd = harness.epd();
        let mut delay = NoopDelay::new();

        epd.init(&mut delay).unwrap();
        epd.display(&black, &red, &mut delay).unwrap();
        harness.done();
    }

    #[test]
    fn display_rejects_wrong_plane_size() {
        let harness = Expect::default().power_on().build();
        let mut epd = harness.epd();
        let mut delay = NoopDelay::new();
        epd.init(&mut delay).unwrap();

        let short = [0xFF; 16];
        assert!(matches!(
            epd.display(&short, &short, &mut delay),
            Err(Error::InvalidParameter(_))
        ));
        harness.done();
    }

    #[test]
    fn clear_writes_white_to_both_rams() {
        let harness = Expect::default()
            .power_on()
            .idle()
            .cmd(0x4F)
            .data(&[0xAF, 0x02])
            .cmd(0x26)
            .streamed(&vec![0x00; PLANE_BYTES])
            .idle()
            .cmd(0x4F)
            .data(&[0xAF, 0x02])
            .cmd(0x24)
            .streamed(&vec![0xFF; PLANE_BYTES])
            .refresh()
            .idle()
            .build();
        let mut epd = harness.epd();
        let mut delay = NoopDelay::new();

        epd.init(&mut delay).unwrap();
        epd.clear(&mut delay).unwrap();
        harness.done();
    }

    #[test]
    fn sleep_and_wake_up() {
        let harness = Expect::default()
            .power_on()
            .cmd(0x10)
            .data(&[0x01])
            .power_on()
            .build();
        let mut epd = harness.epd();
        let mut delay = NoopDelay::new();

        epd.init(&mut delay).unwrap();
        epd.sleep(&mut delay).unwrap();
        assert!(epd.is_asleep());
        assert_eq!(epd.sleep(&mut delay), Err(Error::NotReady));
        assert_eq!(epd.clear(&mut delay), Err(Error::NotReady));

        epd.wake_up(&mut delay).unwrap();
        assert!(!epd.is_asleep());
        // already awake: nothing is sent
        epd.wake_up(&mut delay).unwrap();
        harness.done();
    }

    #[test]
    fn canvas_flushes_through_the_panel() {
        let mut canvas = Canvas::new(EPD_7IN5B_HD_WIDTH, EPD_7IN5B_HD_HEIGHT).unwrap();
        canvas.set_pixel(Point::new(0, 0), Color::Red);
        let inverted: Vec<u8> = canvas.red_plane().iter().map(|b| !b).collect();
        assert_eq!(inverted[0], 0x80);
        assert!(inverted[1..].iter().all(|&b| b == 0x00));

        let harness = Expect::default()
            .power_on()
            .cmd(0x4F)
            .data(&[0xAF, 0x02])
            .cmd(0x24)
            .data(canvas.black_plane())
            .idle()
            .cmd(0x4F)
            .data(&[0xAF, 0x02])
            .cmd(0x26)
            .streamed(&inverted)
            .refresh()
            .idle()
            .build();
        let mut epd = harness.epd();
        let mut delay = NoopDelay::new();

        epd.init(&mut delay).unwrap();
        canvas.flush(&mut epd, &mut delay).unwrap();
        harness.done();
    }
}
