//! Core display operations
//!
//! [`Ht16k33`] owns the display buffer and the bus interface and knows how
//! to power the chip up, dim it, blink it and commit the buffer. It knows
//! nothing about what the bytes mean; [`SegmentDisplay`](crate::SegmentDisplay)
//! and [`MatrixDisplay`](crate::MatrixDisplay) layer the drawing API on top.

use crate::command::{
    DIMMING, DISPLAY_ON, DISPLAY_RAM_START, DISPLAY_SETUP, OSCILLATOR_ON, SYSTEM_SETUP,
};
use crate::config::{BlinkRate, Brightness, Config};
use crate::error::Error;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Display buffer size of the 4-digit 7-segment layout
pub const SEGMENT_BUFFER_SIZE: usize = 16;

/// Display buffer size of the 8x16 matrix layout
pub const MATRIX_BUFFER_SIZE: usize = 32;

/// Core driver for the HT16K33
///
/// `N` is the size of the display buffer mirrored to the chip on every
/// [`commit`](Self::commit). The buffer is zero-filled at construction and
/// never resized.
pub struct Ht16k33<I, const N: usize>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Local image of display RAM
    buffer: [u8; N],
}

impl<I, const N: usize> Ht16k33<I, N>
where
    I: DisplayInterface,
{
    /// Create a driver and power the display up
    ///
    /// Starts the oscillator, turns the display on with the configured blink
    /// rate, sets the configured brightness and commits the blank buffer so
    /// the chip is in a known state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] on the first failed bus write. Nothing is
    /// retried.
    pub fn new(interface: I, config: Config) -> Result<Self, Error<I>> {
        let mut device = Self {
            interface,
            buffer: [0; N],
        };
        device.power_up(config)?;
        Ok(device)
    }

    fn power_up(&mut self, config: Config) -> DisplayResult<I> {
        self.wake()?;
        self.set_blink(config.blink)?;
        self.set_brightness(config.brightness)?;
        self.commit()?;
        log::debug!(
            "ht16k33: powered up ({} byte buffer, brightness {}, blink {:?})",
            N,
            config.brightness.value(),
            config.blink
        );
        Ok(())
    }

    /// Set the display brightness
    ///
    /// Accepts a raw level or a [`Brightness`]. Raw levels outside `1..=15`
    /// fall back to 15.
    pub fn set_brightness(&mut self, brightness: impl Into<Brightness>) -> DisplayResult<I> {
        let brightness = brightness.into();
        self.send_command(DIMMING | brightness.value())
    }

    /// Turn the display on with the given blink rate
    pub fn set_blink(&mut self, rate: BlinkRate) -> DisplayResult<I> {
        self.send_command(DISPLAY_SETUP | DISPLAY_ON | rate.code())
    }

    /// Turn the display on (no blinking) or off
    ///
    /// Display RAM is kept while the display is off.
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        log::debug!("ht16k33: display {}", if on { "on" } else { "off" });
        if on {
            self.send_command(DISPLAY_SETUP | DISPLAY_ON)
        } else {
            self.send_command(DISPLAY_SETUP)
        }
    }

    /// Stop the oscillator (standby)
    ///
    /// The display goes dark until [`wake`](Self::wake) is called.
    pub fn standby(&mut self) -> DisplayResult<I> {
        log::debug!("ht16k33: standby");
        self.send_command(SYSTEM_SETUP)
    }

    /// Start the oscillator
    pub fn wake(&mut self) -> DisplayResult<I> {
        self.send_command(SYSTEM_SETUP | OSCILLATOR_ON)
    }

    /// Send the whole buffer to display RAM
    ///
    /// The RAM start address and all `N` bytes go out as one transaction.
    pub fn commit(&mut self) -> DisplayResult<I> {
        log::trace!("ht16k33: commit {:02x?}", self.buffer);
        self.interface
            .write_ram(DISPLAY_RAM_START, &self.buffer)
            .map_err(Error::Interface)
    }

    /// Zero the local buffer
    pub fn clear_buffer(&mut self) {
        self.buffer.fill(0);
    }

    /// Access the local buffer
    pub fn buffer(&self) -> &[u8; N] {
        &self.buffer
    }

    /// Mutable access to the local buffer
    ///
    /// Changes are sent on the next [`commit`](Self::commit).
    pub fn buffer_mut(&mut self) -> &mut [u8; N] {
        &mut self.buffer
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Send a command to the display controller
    fn send_command(&mut self, command: u8) -> DisplayResult<I> {
        self.interface.send_command(command).map_err(Error::Interface)
    }

    #[cfg(test)]
    pub(crate) fn interface(&self) -> &I {
        &self.interface
    }

    #[cfg(test)]
    pub(crate) fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }
}
