//! Data bytes sent along with [`crate::cmd::Cmd`]

pub struct Flag;
impl Flag {
    pub const AUTO_WRITE_PATTERN: u8 = 0xF7;
    pub const DATA_ENTRY_DECRY_INCRX: u8 = 0x01;
    pub const BORDER_WAVEFORM_LUT1: u8 = 0x01;
    pub const INTERNAL_TEMP_SENSOR: u8 = 0x80;
    pub const DISPLAY_MODE_LOAD_TEMP_WAVEFORM: u8 = 0xB1;
    pub const DISPLAY_MODE_FULL_REFRESH: u8 = 0xC7;
    pub const DEEP_SLEEP_MODE_1: u8 = 0x01;
}
