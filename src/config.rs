//! Display configuration types and builder

use crate::command::DIMMING_MASK;

/// LED brightness level (1-15)
///
/// The HT16K33 dims the display with a 4-bit duty cycle. Levels outside the
/// supported range do not clamp to the nearest value: they fall back to full
/// brightness, so a bad value never leaves the display unreadably dim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brightness(u8);

impl Brightness {
    /// Lowest supported level
    pub const MIN: Self = Self(1);
    /// Highest supported level, also used as the fallback for invalid input
    pub const MAX: Self = Self(15);
    /// Level applied at power-up unless configured otherwise
    pub const DEFAULT: Self = Self(10);

    /// Create a brightness level
    ///
    /// Any `level` outside `1..=15` becomes [`Brightness::MAX`].
    ///
    /// ```
    /// use ht16k33_led::Brightness;
    ///
    /// assert_eq!(Brightness::new(7).value(), 7);
    /// assert_eq!(Brightness::new(0), Brightness::MAX);
    /// assert_eq!(Brightness::new(200), Brightness::MAX);
    /// ```
    pub fn new(level: u8) -> Self {
        if (Self::MIN.0..=Self::MAX.0).contains(&level) {
            Self(level & DIMMING_MASK)
        } else {
            Self::MAX
        }
    }

    /// Raw 4-bit level
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for Brightness {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}

/// Hardware blink rate
///
/// The variants are ordered as the chip's rate list `[0, 2, 1, 0.5]` Hz; the
/// discriminant is the index in that list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum BlinkRate {
    /// No blinking
    #[default]
    Off = 0,
    /// Blink at 2 Hz
    TwoHz = 1,
    /// Blink at 1 Hz
    OneHz = 2,
    /// Blink at 0.5 Hz
    HalfHz = 3,
}

impl BlinkRate {
    /// Map a frequency in Hz to a blink rate
    ///
    /// Only 0, 2, 1 and 0.5 are recognised. Anything else turns blinking off.
    ///
    /// ```
    /// use ht16k33_led::BlinkRate;
    ///
    /// assert_eq!(BlinkRate::from_hz(0.5), BlinkRate::HalfHz);
    /// assert_eq!(BlinkRate::from_hz(3.0), BlinkRate::Off);
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn from_hz(hz: f32) -> Self {
        if hz == 2.0 {
            Self::TwoHz
        } else if hz == 1.0 {
            Self::OneHz
        } else if hz == 0.5 {
            Self::HalfHz
        } else {
            Self::Off
        }
    }

    /// Code OR'd into the display setup command
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Display configuration
///
/// Applied once at power-up. Use [`Builder`] to create a Config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Initial brightness
    pub brightness: Brightness,
    /// Initial blink rate
    pub blink: BlinkRate,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ht16k33_led::{BlinkRate, Builder};
///
/// let config = Builder::new().brightness(4).blink(BlinkRate::OneHz).build();
/// assert_eq!(config.brightness.value(), 4);
/// assert_eq!(config.blink, BlinkRate::OneHz);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    /// Initial brightness
    brightness: Brightness,
    /// Initial blink rate
    blink: BlinkRate,
}

impl Builder {
    /// Create a new Builder with default values (brightness 10, no blinking)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the power-up brightness (out-of-range levels fall back to 15)
    pub fn brightness(mut self, level: u8) -> Self {
        self.brightness = Brightness::new(level);
        self
    }

    /// Set the power-up blink rate
    pub fn blink(mut self, rate: BlinkRate) -> Self {
        self.blink = rate;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            brightness: self.brightness,
            blink: self.blink,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_in_range_is_kept() {
        for level in 1..=15 {
            assert_eq!(Brightness::new(level).value(), level);
        }
    }

    #[test]
    fn test_brightness_out_of_range_falls_back_to_max() {
        assert_eq!(Brightness::new(0), Brightness::MAX);
        assert_eq!(Brightness::new(16), Brightness::MAX);
        assert_eq!(Brightness::new(u8::MAX), Brightness::MAX);
    }

    #[test]
    fn test_blink_rate_codes_follow_rate_list_order() {
        assert_eq!(BlinkRate::from_hz(0.0).code(), 0);
        assert_eq!(BlinkRate::from_hz(2.0).code(), 1);
        assert_eq!(BlinkRate::from_hz(1.0).code(), 2);
        assert_eq!(BlinkRate::from_hz(0.5).code(), 3);
    }

    #[test]
    fn test_unknown_blink_rate_is_off() {
        assert_eq!(BlinkRate::from_hz(0.25), BlinkRate::Off);
        assert_eq!(BlinkRate::from_hz(-1.0), BlinkRate::Off);
        assert_eq!(BlinkRate::from_hz(f32::NAN), BlinkRate::Off);
    }

    #[test]
    fn test_builder_defaults() {
        let config = Builder::new().build();
        assert_eq!(config.brightness, Brightness::DEFAULT);
        assert_eq!(config.blink, BlinkRate::Off);
        assert_eq!(config, Config::default());
    }
}
