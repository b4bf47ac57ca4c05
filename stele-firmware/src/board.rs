//! Board wiring for the LCD header
//!
//! Adapts embassy-rp GPIO outputs to the stele-hal pin capability. The
//! demo wiring puts the module's R/W line on ground (write-only) and the
//! six driven signals on GPIO8-GPIO13:
//!
//! | Signal | GPIO |
//! |--------|------|
//! | RS     | 8    |
//! | EN     | 9    |
//! | D4     | 10   |
//! | D5     | 11   |
//! | D6     | 12   |
//! | D7     | 13   |

use embassy_rp::gpio::Output;
use stele_hal::OutputPin;

/// An RP2040 GPIO output presented as a stele-hal pin.
pub struct BoardPin(Output<'static>);

impl BoardPin {
    pub fn new(output: Output<'static>) -> Self {
        Self(output)
    }
}

impl OutputPin for BoardPin {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}
