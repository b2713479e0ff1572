//! 4-digit 7-segment display
//!
//! Drives the common HT16K33 backpack with four 7-segment digits, a decimal
//! point after each digit and a center colon.
//!
//! Drawing calls only change the local buffer. Nothing reaches the display
//! until [`SegmentDisplay::commit`] is called. Calls with a digit index past
//! the last digit or a character with no glyph return `None` and change
//! nothing.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ht16k33_led::{Config, Interface, SegmentDisplay};
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
//! let mut display = match SegmentDisplay::new(Interface::new(MockI2c), Config::default()) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! // "12:34"
//! display.set_digit(1, 0, false);
//! display.set_digit(2, 1, false);
//! display.set_digit(3, 2, false);
//! display.set_digit(4, 3, false);
//! display.set_colon(true);
//! let _ = display.commit();
//! ```

use crate::addressing::{COLON_OFFSET, DIGIT_COUNT, digit_offset};
use crate::config::{BlinkRate, Brightness, Config};
use crate::display::{Ht16k33, SEGMENT_BUFFER_SIZE};
use crate::error::Error;
use crate::font::{SEGMENT_DECIMAL_POINT, segment_digit, segment_glyph};
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Colon byte value when lit
const COLON_ON: u8 = 0x02;

/// Driver for the 4-digit 7-segment layout
pub struct SegmentDisplay<I>
where
    I: DisplayInterface,
{
    /// The underlying HT16K33 driver
    device: Ht16k33<I, SEGMENT_BUFFER_SIZE>,
}

impl<I> SegmentDisplay<I>
where
    I: DisplayInterface,
{
    /// Number of digits
    pub const DIGITS: usize = DIGIT_COUNT;

    /// Create a driver and power the display up blank
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if any power-up write fails.
    pub fn new(interface: I, config: Config) -> Result<Self, Error<I>> {
        Ok(Self {
            device: Ht16k33::new(interface, config)?,
        })
    }

    /// Draw a numeric value (0-15, shown as hex) at `digit` (0-3, left to right)
    ///
    /// If `decimal_point` is true the point after the digit is lit too.
    pub fn set_digit(&mut self, value: u8, digit: usize, decimal_point: bool) -> Option<&mut Self> {
        let Some(glyph) = segment_digit(value) else {
            log::trace!("ht16k33: no 7-segment glyph for value {value}");
            return None;
        };
        self.write_glyph(glyph, digit, decimal_point)
    }

    /// Draw a character at `digit` (0-3, left to right)
    ///
    /// Accepts `0`-`9`, `a`-`f` in either case, `-`, `°` and space (blank).
    pub fn set_char(&mut self, ch: char, digit: usize, decimal_point: bool) -> Option<&mut Self> {
        let Some(glyph) = segment_glyph(ch) else {
            log::trace!("ht16k33: no 7-segment glyph for {ch:?}");
            return None;
        };
        self.write_glyph(glyph, digit, decimal_point)
    }

    fn write_glyph(&mut self, glyph: u8, digit: usize, decimal_point: bool) -> Option<&mut Self> {
        let Some(offset) = digit_offset(digit) else {
            log::trace!("ht16k33: digit {digit} out of range");
            return None;
        };
        let byte = self.device.buffer_mut().get_mut(offset)?;
        *byte = glyph;
        if decimal_point {
            *byte |= SEGMENT_DECIMAL_POINT;
        }
        Some(self)
    }

    /// Light or clear the center colon
    pub fn set_colon(&mut self, on: bool) -> &mut Self {
        if let Some(byte) = self.device.buffer_mut().get_mut(COLON_OFFSET) {
            *byte = if on { COLON_ON } else { 0x00 };
        }
        self
    }

    /// Blank every digit, decimal point and the colon
    pub fn clear(&mut self) -> &mut Self {
        self.device.clear_buffer();
        self
    }

    /// Send the buffer to the display
    pub fn commit(&mut self) -> DisplayResult<I> {
        self.device.commit()
    }

    /// Set the display brightness (out-of-range levels fall back to 15)
    pub fn set_brightness(&mut self, brightness: impl Into<Brightness>) -> DisplayResult<I> {
        self.device.set_brightness(brightness)
    }

    /// Set the blink rate
    pub fn set_blink(&mut self, rate: BlinkRate) -> DisplayResult<I> {
        self.device.set_blink(rate)
    }

    /// Access the local buffer
    pub fn buffer(&self) -> &[u8; SEGMENT_BUFFER_SIZE] {
        self.device.buffer()
    }

    /// Access the underlying HT16K33 driver
    pub fn device(&self) -> &Ht16k33<I, SEGMENT_BUFFER_SIZE> {
        &self.device
    }

    /// Mutably access the underlying HT16K33 driver
    ///
    /// Use this for power control ([`Ht16k33::set_display_on`],
    /// [`Ht16k33::standby`]).
    pub fn device_mut(&mut self) -> &mut Ht16k33<I, SEGMENT_BUFFER_SIZE> {
        &mut self.device
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.device.release()
    }
}
