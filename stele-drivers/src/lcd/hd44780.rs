//! HD44780 controller driver
//!
//! Frames full bytes as high-nibble/low-nibble pairs over the 4-bit bus,
//! runs the power-on recovery handshake, and exposes the session
//! operations: cursor addressing, text output and CGRAM glyph
//! programming.
//!
//! Everything here is fire-and-forget. The controller offers no status
//! path on a write-only harness, so a missing or miswired module shows
//! up only as a blank display.

use embedded_hal::delay::DelayNs;
use stele_hal::OutputPin;

use crate::lcd::bus::FourBitBus;

/// HD44780 instruction bytes and flag bits
mod cmd {
    pub const CLEAR_DISPLAY: u8 = 0x01;
    pub const RETURN_HOME: u8 = 0x02;
    pub const ENTRY_MODE_SET: u8 = 0x04;
    pub const ENTRY_INCREMENT: u8 = 0x02;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const DISPLAY_ON: u8 = 0x04;
    pub const CURSOR_ON: u8 = 0x02;
    pub const BLINK_ON: u8 = 0x01;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const FUNCTION_TWO_LINES: u8 = 0x08;
    pub const SET_CGRAM_ADDR: u8 = 0x40;
    pub const SET_DDRAM_ADDR: u8 = 0x80;

    /// Raw nibbles for the 4-bit recovery handshake. Sent as single
    /// transfers, not as command bytes.
    pub const RESET_TO_EIGHT_BIT: u8 = 0x03;
    pub const COMMIT_FOUR_BIT: u8 = 0x02;
}

/// Settle time after power application before the controller accepts
/// anything (datasheet minimum 15 ms; 20 ms leaves margin for slow
/// supply ramps).
const POWER_ON_SETTLE_MS: u32 = 20;

/// Settle time after each raw handshake nibble.
const MODE_RESET_SETTLE_MS: u32 = 5;

/// Conservative settle time after every command byte. Covers the slow
/// instructions (clear, return home, ~1.6 ms) as well as the fast ones;
/// this driver issues too few commands for per-instruction timing to be
/// worth the bookkeeping.
const COMMAND_SETTLE_MS: u32 = 2;

/// Extra margin given to clear/return-home on top of the generic bound.
const SLOW_COMMAND_SETTLE_MS: u32 = 5;

/// DDRAM cells addressable per line on two-line modules.
const LINE_CELLS: u8 = 40;

/// DDRAM address distance between line 1 and line 2.
const SECOND_LINE_OFFSET: u8 = 0x40;

/// Number of CGRAM glyph slots.
const GLYPH_SLOTS: u8 = 8;

/// Visible display line.
///
/// Two-line modules address line 1 from DDRAM base 0x80 and line 2 from
/// 0xC0. Larger geometries interleave their address map differently and
/// are out of scope here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    First,
    Second,
}

impl Line {
    fn base_address(self) -> u8 {
        match self {
            Line::First => cmd::SET_DDRAM_ADDR,
            Line::Second => cmd::SET_DDRAM_ADDR | SECOND_LINE_OFFSET,
        }
    }
}

/// Errors from cursor addressing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError {
    /// Requested column is beyond the controller's 40-cell line window
    ColumnOutOfRange,
}

/// The six output signals wired to the module, assigned once at
/// construction and owned by the driver afterwards.
pub struct Pins<P> {
    pub rs: P,
    pub en: P,
    pub d4: P,
    pub d5: P,
    pub d6: P,
    pub d7: P,
}

/// HD44780 driver over a 4-bit parallel interface
///
/// ```ignore
/// let mut lcd = Hd44780::new(pins, Delay);
/// lcd.init();
/// lcd.set_cursor(Line::First, 0)?;
/// lcd.write_str("Hello, World!");
/// ```
pub struct Hd44780<P, D> {
    rs: P,
    bus: FourBitBus<P>,
    delay: D,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    /// Create a driver over the given wiring. No pin is touched until
    /// [`init`](Self::init) runs; the pins must already be configured
    /// as outputs, initial level low.
    pub fn new(pins: Pins<P>, delay: D) -> Self {
        Self {
            rs: pins.rs,
            bus: FourBitBus::new(pins.en, pins.d4, pins.d5, pins.d6, pins.d7),
            delay,
        }
    }

    /// Bring the controller from its undefined power-on state into
    /// 4-bit, 2-line, 5x8 font mode with the display on, cursor off and
    /// auto-incrementing entry mode.
    ///
    /// The order is fixed: the controller powers up ambiguous between
    /// 8-bit and 4-bit interpretation, and the 0x03 nibble repeated
    /// three times lands it in a known 8-bit state from any starting
    /// point before 0x02 commits 4-bit mode. Re-running the sequence is
    /// harmless but wasteful.
    pub fn init(&mut self) {
        self.delay.delay_ms(POWER_ON_SETTLE_MS);

        // Raw single-nibble handshake. Command framing is not available
        // yet, so RS is driven low here instead of by command().
        self.rs.set_low();
        for _ in 0..3 {
            self.bus.write_nibble(&mut self.delay, cmd::RESET_TO_EIGHT_BIT);
            self.delay.delay_ms(MODE_RESET_SETTLE_MS);
        }
        self.bus.write_nibble(&mut self.delay, cmd::COMMIT_FOUR_BIT);
        self.delay.delay_ms(MODE_RESET_SETTLE_MS);

        // Two-nibble commands work from here on.
        self.command(cmd::FUNCTION_SET | cmd::FUNCTION_TWO_LINES);
        self.command(cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON);
        self.command(cmd::ENTRY_MODE_SET | cmd::ENTRY_INCREMENT);
        self.command(cmd::CLEAR_DISPLAY);
        self.delay.delay_ms(SLOW_COMMAND_SETTLE_MS);
    }

    /// Move the cursor to `col` (0-39) on the given line.
    pub fn set_cursor(&mut self, line: Line, col: u8) -> Result<(), LcdError> {
        if col >= LINE_CELLS {
            return Err(LcdError::ColumnOutOfRange);
        }
        self.command(line.base_address() + col);
        Ok(())
    }

    /// Write text at the current cursor position.
    ///
    /// Bytes go out verbatim, so ASCII maps to the controller's ROM
    /// font and 0x00-0x07 select CGRAM glyphs. No wrapping: past the
    /// end of a line the controller's own address map decides where
    /// characters land.
    pub fn write_str(&mut self, text: &str) {
        for byte in text.bytes() {
            self.data(byte);
        }
    }

    /// Write a single character code at the current cursor position.
    pub fn write_char(&mut self, ch: u8) {
        self.data(ch);
    }

    /// Program one of the eight CGRAM glyph slots with a 5x8 pattern,
    /// one byte per pixel row, low 5 bits used.
    ///
    /// Slot values above 7 wrap into range. The pattern persists in the
    /// controller until overwritten or power loss, and displays wherever
    /// character code `slot` is written.
    ///
    /// CGRAM writes leave the controller's address pointer inside CGRAM:
    /// call [`set_cursor`](Self::set_cursor) before resuming text
    /// output.
    pub fn define_glyph(&mut self, slot: u8, pattern: &[u8; 8]) {
        let slot = slot & (GLYPH_SLOTS - 1);
        self.command(cmd::SET_CGRAM_ADDR | (slot << 3));
        // The controller auto-increments the CGRAM address per write.
        for &row in pattern {
            self.data(row);
        }
    }

    /// Blank the display and return the cursor to (line 1, column 0).
    pub fn clear(&mut self) {
        self.command(cmd::CLEAR_DISPLAY);
        self.delay.delay_ms(SLOW_COMMAND_SETTLE_MS);
    }

    /// Return the cursor to (line 1, column 0) and undo any display
    /// shift, leaving DDRAM contents intact.
    pub fn return_home(&mut self) {
        self.command(cmd::RETURN_HOME);
        self.delay.delay_ms(SLOW_COMMAND_SETTLE_MS);
    }

    /// Set display on/off, cursor visibility and cursor blink.
    pub fn display_control(&mut self, display_on: bool, cursor_on: bool, blink_on: bool) {
        let mut command = cmd::DISPLAY_CONTROL;
        if display_on {
            command |= cmd::DISPLAY_ON;
        }
        if cursor_on {
            command |= cmd::CURSOR_ON;
        }
        if blink_on {
            command |= cmd::BLINK_ON;
        }
        self.command(command);
    }

    /// One full instruction transfer: RS low, high nibble, low nibble,
    /// worst-case settle.
    fn command(&mut self, byte: u8) {
        self.rs.set_low();
        self.bus.write_nibble(&mut self.delay, byte >> 4);
        self.bus.write_nibble(&mut self.delay, byte & 0x0F);
        self.delay.delay_ms(COMMAND_SETTLE_MS);
    }

    /// One full character transfer: RS high, both nibbles. No trailing
    /// settle - the enable-pulse spacing already exceeds the 43 us a
    /// data write needs, which is what makes bulk text output fast.
    fn data(&mut self, byte: u8) {
        self.rs.set_high();
        self.bus.write_nibble(&mut self.delay, byte >> 4);
        self.bus.write_nibble(&mut self.delay, byte & 0x0F);
    }
}
