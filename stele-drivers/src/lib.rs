//! Display driver implementations
//!
//! This crate provides the protocol logic for the character LCD modules
//! Stele drives, built on the capability traits in stele-hal:
//!
//! - HD44780-compatible character LCDs over a 4-bit parallel interface

#![no_std]
#![deny(unsafe_code)]

pub mod lcd;
