//! HT16K33 command definitions
//!
//! This module defines the command bytes used to control the HT16K33 LED
//! controller. Every command is a single byte with no data payload and is
//! sent as its own I2C write. The low bits of a command carry its argument
//! (oscillator flag, display flag and blink code, or dimming level).
//!
//! ## Command Structure
//!
//! 1. START + 7-bit address + W
//! 2. Command byte (opcode OR'd with its argument)
//! 3. STOP
//!
//! Display RAM is written the same way, except that the first byte is the RAM
//! start address and the chip auto-increments its pointer for each byte that
//! follows.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ht16k33_led::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let mut interface = Interface::new(MockI2c);
//! // Start the oscillator, then turn the display on without blinking
//! let _ = interface.send_command(command::SYSTEM_SETUP | command::OSCILLATOR_ON);
//! let _ = interface.send_command(command::DISPLAY_SETUP | command::DISPLAY_ON);
//!
//! // Write four bytes of display RAM starting at address 0
//! let _ = interface.write_ram(command::DISPLAY_RAM_START, &[0x3F, 0x00, 0x06, 0x00]);
//! ```

// System setup

/// System setup command (0x20)
///
/// Bit 0 controls the internal oscillator. With the oscillator off the chip
/// is in standby and the display is blank.
pub const SYSTEM_SETUP: u8 = 0x20;

/// Oscillator on flag for [`SYSTEM_SETUP`]
pub const OSCILLATOR_ON: u8 = 0x01;

// Display setup

/// Display setup command (0x80)
///
/// - Bit 0: display on
/// - Low bits: blink rate code from [`BlinkRate::code`](crate::BlinkRate::code),
///   OR'd in alongside the display on flag
pub const DISPLAY_SETUP: u8 = 0x80;

/// Display on flag for [`DISPLAY_SETUP`]
pub const DISPLAY_ON: u8 = 0x01;

// Dimming

/// Dimming (brightness) command (0xE0)
///
/// The low nibble holds the duty cycle, 1/16 to 16/16.
pub const DIMMING: u8 = 0xE0;

/// Mask applied to a brightness level before it is OR'd into [`DIMMING`]
pub const DIMMING_MASK: u8 = 0x0F;

// Display RAM

/// Display RAM start address (0x00)
///
/// Sent as the first byte of a buffer commit. The chip's RAM pointer
/// auto-increments for each following byte, so a frame must go out in one
/// transaction.
pub const DISPLAY_RAM_START: u8 = 0x00;
