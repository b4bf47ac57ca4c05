//! CGRAM icon set for the demo screen
//!
//! Eight 5x8 patterns, one byte per pixel row, low 5 bits used. The
//! controller displays slot N wherever character code N (0-7) is
//! written.

/// Icons in CGRAM slot order: heart, bell, eighth note, clock face,
/// arrow up, arrow down, arrow right, degree mark.
pub const ICONS: [[u8; 8]; 8] = [
    // Heart
    [0b00000, 0b01010, 0b11111, 0b11111, 0b01110, 0b00100, 0b00000, 0b00000],
    // Bell
    [0b00100, 0b01110, 0b01110, 0b01110, 0b11111, 0b00000, 0b00100, 0b00000],
    // Eighth note
    [0b00010, 0b00011, 0b00010, 0b00010, 0b01110, 0b11110, 0b01100, 0b00000],
    // Clock face
    [0b00000, 0b01110, 0b10101, 0b10111, 0b10001, 0b01110, 0b00000, 0b00000],
    // Arrow up
    [0b00100, 0b01110, 0b10101, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000],
    // Arrow down
    [0b00100, 0b00100, 0b00100, 0b00100, 0b10101, 0b01110, 0b00100, 0b00000],
    // Arrow right
    [0b00000, 0b00100, 0b00010, 0b11111, 0b00010, 0b00100, 0b00000, 0b00000],
    // Degree mark
    [0b00110, 0b01001, 0b01001, 0b00110, 0b00000, 0b00000, 0b00000, 0b00000],
];
