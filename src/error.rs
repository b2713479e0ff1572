//! Error types for the driver
//!
//! Only bus failures are errors. Bad drawing input (a digit index past the
//! last digit, a pixel off the matrix, a character with no glyph) is not: the
//! drawing calls return `None` and leave the buffer untouched, so a status
//! display keeps showing something instead of aborting its render loop.
//!
//! ## Example
//!
//! ```
//! use ht16k33_led::{DisplayInterface, Error};
//!
//! #[derive(Debug)]
//! struct Broken;
//!
//! impl DisplayInterface for Broken {
//!     type Error = &'static str;
//!     fn send_command(&mut self, _command: u8) -> Result<(), Self::Error> {
//!         Err("nack")
//!     }
//!     fn write_ram(&mut self, _start: u8, _data: &[u8]) -> Result<(), Self::Error> {
//!         Err("nack")
//!     }
//! }
//!
//! let result = ht16k33_led::SegmentDisplay::new(Broken, Default::default());
//! assert!(matches!(result, Err(Error::Interface("nack"))));
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when talking to the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying bus error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (I2C)
    ///
    /// Wraps the underlying bus error from the [`DisplayInterface`]
    /// implementation. A failed commit may have partially reached the chip.
    Interface(I::Error),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}
