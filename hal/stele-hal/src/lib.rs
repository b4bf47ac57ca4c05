//! Stele Hardware Abstraction Layer
//!
//! This crate defines the hardware capability traits the LCD driver
//! consumes, so the same driver code runs against real GPIO on a target
//! board or against recording mocks in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (stele-firmware)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  stele-drivers (LCD protocol logic)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  stele-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!          board GPIO / test mocks
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output
//!
//! Delays are taken from `embedded_hal::delay::DelayNs` directly; there
//! is no point wrapping a trait the ecosystem already agrees on.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
