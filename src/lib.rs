//! HT16K33 LED Display Driver
//!
//! A driver for the Holtek HT16K33 LED controller wired to either of the two
//! common backpack layouts: a 4-digit 7-segment display or an 8x16 LED matrix.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration for the matrix (with `graphics` feature)
//! - Hex digits, minus and degree glyphs on the 7-segment display
//! - ASCII font, text drawing and scrolling on the matrix
//! - Brightness and hardware blink control
//!
//! ## Model
//!
//! Each driver owns a copy of the chip's display RAM. Drawing calls change
//! only that copy; `commit()` sends all of it in a single I2C write. Bad
//! drawing input is ignored (the call returns `None`), while bus failures are
//! returned as [`Error`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ht16k33_led::{BlinkRate, Builder, Interface, SegmentDisplay};
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
//! # let i2c = MockI2c;
//! let interface = Interface::with_address(i2c, 0x70);
//! let config = Builder::new().brightness(8).build();
//!
//! let mut display = match SegmentDisplay::new(interface, config) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! display.set_char('-', 0, false);
//! display.set_digit(4, 1, false);
//! display.set_digit(2, 2, true);
//! display.set_char('°', 3, false);
//! let _ = display.commit();
//! let _ = display.set_blink(BlinkRate::OneHz);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Display RAM addressing for both layouts
pub mod addressing;
/// Matrix pixel state
pub mod color;
/// HT16K33 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core HT16K33 operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Glyph tables
pub mod font;
/// Hardware interface abstraction
pub mod interface;
/// 8x16 matrix display
pub mod matrix;
/// 4-digit 7-segment display
pub mod segment;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(test)]
mod mock;

pub use color::Color;
pub use config::{BlinkRate, Brightness, Builder, Config};
pub use display::{Ht16k33, MATRIX_BUFFER_SIZE, SEGMENT_BUFFER_SIZE};
pub use error::Error;
pub use interface::{DEFAULT_ADDRESS, DisplayInterface, Interface};
pub use matrix::MatrixDisplay;
pub use segment::SegmentDisplay;
