//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the HT16K33 controller over I2C.
//!
//! ## Hardware Requirements
//!
//! The HT16K33 only needs an I2C bus (SDA + SCL). The 7-bit address is
//! `0x70` plus the state of the A0-A2 solder jumpers, so `0x70..=0x77`.
//!
//! ## Sharing the bus
//!
//! `embedded-hal` implements [`I2c`] for `&mut T`, so the driver can borrow a
//! bus that outlives it instead of owning it:
//!
//! ```rust,no_run
//! use ht16k33_led::{DisplayInterface, Interface};
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
//! let mut bus = MockI2c;
//! {
//!     let mut interface = Interface::with_address(&mut bus, 0x71);
//!     let _ = interface.send_command(0x21);
//! }
//! // `bus` is usable again here
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{I2c, Operation};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Default 7-bit I2C address of the HT16K33 (all address jumpers open)
pub const DEFAULT_ADDRESS: u8 = 0x70;

/// Trait for hardware interface to the HT16K33 controller
///
/// This trait abstracts over different bus implementations, allowing the
/// drivers to work with any transport that can send a framed write to the
/// chip. Each call is exactly one START ... STOP transaction.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this trait
/// yourself to route the chip through a bridge, a bus multiplexer, or a test
/// double.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a single command byte in its own transaction
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Write display RAM starting at `start`
    ///
    /// The implementation must send `start` followed by every byte of `data`
    /// in ONE transaction. The chip advances its RAM pointer per byte after
    /// the address, so splitting the write would desynchronise it.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails.
    fn write_ram(&mut self, start: u8, data: &[u8]) -> InterfaceResult<(), Self::Error>;
}

/// I2C interface implementation for the HT16K33
///
/// Implements [`DisplayInterface`] for any embedded-hal v1.0 [`I2c`] bus.
///
/// ## Example
///
/// ```rust,no_run
/// use ht16k33_led::{Config, Interface, SegmentDisplay};
/// # use core::convert::Infallible;
/// # use embedded_hal::i2c::{ErrorType, I2c, Operation};
/// # struct MockI2c;
/// # impl ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// let interface = Interface::new(MockI2c);
/// let _display = SegmentDisplay::new(interface, Config::default());
/// ```
pub struct Interface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C> Interface<I2C>
where
    I2C: I2c,
{
    /// Create a new Interface at [`DEFAULT_ADDRESS`]
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a new Interface at a specific 7-bit address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        if address & 0xF8 != DEFAULT_ADDRESS {
            log::warn!("ht16k33: address {address:#04x} is outside 0x70..=0x77");
        }
        Self { i2c, address }
    }

    /// Get the 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for Interface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.i2c.write(self.address, &[command])
    }

    fn write_ram(&mut self, start: u8, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        // Adjacent writes in one transaction go out without a repeated start
        self.i2c.transaction(
            self.address,
            &mut [Operation::Write(&[start]), Operation::Write(data)],
        )
    }
}
