//! HD44780 character LCD driver (4-bit parallel interface)
//!
//! This module drives HD44780-compatible character displays through six
//! GPIO lines: register select (RS), enable (EN) and the upper data bus
//! half (D4-D7). The protocol is layered the way the wiring is:
//!
//! - [`bus::FourBitBus`] - transfers one nibble and latches it with an
//!   enable pulse
//! - [`Hd44780`] - frames full command/character bytes as nibble pairs
//!   and exposes the session operations (init, cursor addressing, text
//!   output, CGRAM glyph programming)
//!
//! The interface is write-only: the R/W line is assumed strapped to
//! ground, so there is no busy-flag polling and no way to detect a
//! missing or faulty module. Timing is enforced with worst-case waits
//! through an injected `embedded_hal::delay::DelayNs`.

pub mod bus;
pub mod hd44780;

pub use bus::FourBitBus;
pub use hd44780::{Hd44780, LcdError, Line, Pins};
