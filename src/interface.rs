//! SPI command/data framing for the panel controller
use display_interface::DisplayError;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;

use log::debug;

/// Bytes staged per SPI write when a payload is generated on the fly
const CHUNK: usize = 64;

/// Busy poll interval
const BUSY_POLL_MS: u32 = 1;

/// Settle time after the busy line drops
const BUSY_SETTLE_MS: u32 = 200;

/// Reset pulse width
const RESET_PULSE_MS: u32 = 2;

/// Wait after releasing reset
const RESET_RECOVERY_MS: u32 = 200;

/// Connection to the controller: SPI for bytes, DC to tell commands from
/// data, RST for hardware reset and BUSY (high while the controller works).
pub struct SpiDisplayInterface<SPI, BSY, DC, RST> {
    spi: SPI,
    busy: BSY,
    dc: DC,
    rst: RST,
}

impl<SPI, BSY, DC, RST> SpiDisplayInterface<SPI, BSY, DC, RST>
where
    SPI: SpiDevice,
    BSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new interface
    pub fn new(spi: SPI, busy: BSY, dc: DC, rst: RST) -> Self {
        SpiDisplayInterface { spi, busy, dc, rst }
    }

    /// Give back the bus and pins
    pub fn release(self) -> (SPI, BSY, DC, RST) {
        (self.spi, self.busy, self.dc, self.rst)
    }

    /// Send a command byte
    pub fn cmd(&mut self, command: u8) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;
        self.write(&[command])
    }

    /// Send data bytes
    pub fn data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;
        self.write(data)
    }

    /// Send a command followed by its data
    pub fn cmd_with_data(&mut self, command: u8, data: &[u8]) -> Result<(), DisplayError> {
        self.cmd(command)?;
        self.data(data)
    }

    /// Send `value` as data `repetitions` times
    pub fn data_x_times(&mut self, value: u8, repetitions: u32) -> Result<(), DisplayError> {
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;
        let chunk = [value; CHUNK];
        let mut left = repetitions as usize;
        while left > 0 {
            let n = left.min(CHUNK);
            self.write(&chunk[..n])?;
            left -= n;
        }
        Ok(())
    }

    /// Send every byte of `data` bitwise inverted
    pub fn data_inverted(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;
        let mut chunk = [0u8; CHUNK];
        for part in data.chunks(CHUNK) {
            for (dst, src) in chunk.iter_mut().zip(part) {
                *dst = !*src;
            }
            self.write(&chunk[..part.len()])?;
        }
        Ok(())
    }

    /// Pulse the reset line
    pub fn hard_reset(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        debug!("hard reset");
        self.rst.set_low().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(RESET_RECOVERY_MS);
        Ok(())
    }

    /// Block until the controller drops BUSY, then let it settle
    pub fn wait_until_idle(&mut self, delay: &mut impl DelayNs) {
        debug!("waiting for busy to release");
        while self.is_busy() {
            delay.delay_ms(BUSY_POLL_MS);
        }
        delay.delay_ms(BUSY_SETTLE_MS);
        debug!("busy released");
    }

    fn is_busy(&mut self) -> bool {
        // an unreadable pin is treated as idle
        self.busy.is_high().unwrap_or(false)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.spi.write(bytes).map_err(|_| DisplayError::BusWriteError)
    }
}
