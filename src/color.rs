//! LED state for the matrix display
//!
//! Each matrix pixel is a single bit in display RAM: set means lit.
//!
//! ## Example
//!
//! ```
//! use ht16k33_led::Color;
//!
//! assert!(Color::On.is_on());
//! assert_eq!(Color::from(false), Color::Off);
//! ```

/// Matrix pixel state
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Color {
    /// LED off (bit cleared)
    #[default]
    Off,
    /// LED on (bit set)
    On,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        Self::from(color.is_on())
    }
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl Color {
    /// Whether the LED is lit
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}
