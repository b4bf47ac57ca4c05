//! 4-bit data bus transport
//!
//! Transfers one nibble at a time: the four data lines are set to the
//! nibble value, then an enable pulse tells the controller to latch
//! them. RS is owned by the caller and must already be in the desired
//! state when a nibble is written.

use embedded_hal::delay::DelayNs;
use stele_hal::OutputPin;

/// Minimum enable-pulse width and cycle recovery time.
///
/// The controller latches on the falling edge; the datasheet minimum is
/// 450 ns high with a 1 us full cycle, so 1 us on both edges keeps every
/// transfer inside the datasheet limits.
const ENABLE_PULSE_US: u32 = 1;

/// The EN + D4-D7 half of the LCD wiring.
pub struct FourBitBus<P> {
    en: P,
    d4: P,
    d5: P,
    d6: P,
    d7: P,
}

impl<P: OutputPin> FourBitBus<P> {
    pub fn new(en: P, d4: P, d5: P, d6: P, d7: P) -> Self {
        Self { en, d4, d5, d6, d7 }
    }

    /// Present the low 4 bits of `nibble` on D4-D7 and latch them.
    ///
    /// Bit 0 drives D4 through bit 3 driving D7. The upper half of the
    /// byte is ignored.
    pub fn write_nibble<D: DelayNs>(&mut self, delay: &mut D, nibble: u8) {
        self.d4.set_state(nibble & 0x01 != 0);
        self.d5.set_state(nibble & 0x02 != 0);
        self.d6.set_state(nibble & 0x04 != 0);
        self.d7.set_state(nibble & 0x08 != 0);
        self.pulse_enable(delay);
    }

    fn pulse_enable<D: DelayNs>(&mut self, delay: &mut D) {
        self.en.set_high();
        delay.delay_us(ENABLE_PULSE_US);
        self.en.set_low();
        delay.delay_us(ENABLE_PULSE_US);
    }
}
