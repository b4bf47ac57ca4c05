//! Stele demo firmware
//!
//! Drives a 2x16 HD44780 character module from an RP2040 over the
//! 4-bit parallel interface: a greeting screen, then the eight CGRAM
//! icons as a block, held on screen indefinitely.

#![no_std]
#![no_main]

mod board;
mod glyphs;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use crate::board::BoardPin;
use stele_drivers::lcd::{Hd44780, Line, Pins};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Stele firmware starting...");

    let p = embassy_rp::init(Default::default());

    // LCD header wiring (see board.rs), all outputs, idle low
    let pins = Pins {
        rs: BoardPin::new(Output::new(p.PIN_8, Level::Low)),
        en: BoardPin::new(Output::new(p.PIN_9, Level::Low)),
        d4: BoardPin::new(Output::new(p.PIN_10, Level::Low)),
        d5: BoardPin::new(Output::new(p.PIN_11, Level::Low)),
        d6: BoardPin::new(Output::new(p.PIN_12, Level::Low)),
        d7: BoardPin::new(Output::new(p.PIN_13, Level::Low)),
    };

    let mut lcd = Hd44780::new(pins, Delay);
    lcd.init();
    info!("LCD initialized");

    lcd.set_cursor(Line::First, 0).unwrap();
    lcd.write_str("Hello, World!");
    lcd.set_cursor(Line::Second, 0).unwrap();
    lcd.write_str("Stele v0.1");

    Timer::after_secs(3).await;

    // Second screen: the CGRAM icon set as a 2x4 block
    for (slot, pattern) in glyphs::ICONS.iter().enumerate() {
        lcd.define_glyph(slot as u8, pattern);
    }
    // CGRAM writes park the address pointer in CGRAM; re-address first
    lcd.clear();
    lcd.set_cursor(Line::First, 6).unwrap();
    for code in 0..4 {
        lcd.write_char(code);
    }
    lcd.set_cursor(Line::Second, 6).unwrap();
    for code in 4..8 {
        lcd.write_char(code);
    }
    info!("Demo drawn, holding steady state");

    loop {
        Timer::after_secs(60).await;
    }
}
