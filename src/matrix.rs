//! 8x16 LED matrix display
//!
//! Drives the HT16K33 8x16 matrix backpack. The long axis `x` (0-15) selects
//! a row byte through [`row_offset`]; the short axis `y` (0-7) selects the bit
//! within it.
//!
//! Drawing calls return `Some(&mut Self)` when they were applied and `None`
//! when the input was rejected (off-matrix pixel, unknown character), so they
//! chain with `?` or [`Option::and_then`] and stop at the first rejection.
//! Nothing reaches the display until [`MatrixDisplay::commit`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use ht16k33_led::{Color, Config, Interface, MatrixDisplay};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! let mut display = match MatrixDisplay::new(Interface::new(MockI2c), Config::default()) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! if let Some(display) = display.clear().plot(3, 4, Color::On) {
//!     let _ = display.commit();
//! }
//!
//! display.clear().draw_char('*', 5);
//! let _ = display.commit();
//!
//! let _ = display.scroll_text("Hello, world", &mut delay, 100);
//! ```

use core::iter;

use embedded_hal::delay::DelayNs;

use crate::addressing::{MATRIX_ROW_BITS, MATRIX_ROWS, pixel_location, row_offset};
use crate::color::Color;
use crate::config::{BlinkRate, Brightness, Config};
use crate::display::{Ht16k33, MATRIX_BUFFER_SIZE};
use crate::error::Error;
use crate::font::matrix_glyph;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Blank spaces appended to scrolling text so it scrolls fully off the display
const SCROLL_PAD: &str = "        ";

/// Driver for the 8x16 matrix layout
pub struct MatrixDisplay<I>
where
    I: DisplayInterface,
{
    /// The underlying HT16K33 driver
    device: Ht16k33<I, MATRIX_BUFFER_SIZE>,
}

impl<I> MatrixDisplay<I>
where
    I: DisplayInterface,
{
    /// Matrix width (`x` axis)
    pub const WIDTH: usize = MATRIX_ROWS;
    /// Matrix height (`y` axis)
    pub const HEIGHT: usize = MATRIX_ROW_BITS;

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

    /// Turn every LED off in the local buffer
    pub fn clear(&mut self) -> &mut Self {
        self.device.clear_buffer();
        self
    }

    /// Set or clear one pixel
    ///
    /// Returns `None` and leaves the buffer unchanged when `x >= 16` or
    /// `y >= 8`.
    pub fn plot(&mut self, x: usize, y: usize, color: Color) -> Option<&mut Self> {
        let Some((index, bit)) = pixel_location(x, y) else {
            log::trace!("ht16k33: pixel ({x}, {y}) is off the matrix");
            return None;
        };
        let byte = self.device.buffer_mut().get_mut(index)?;
        match color {
            Color::On => *byte |= bit,
            Color::Off => *byte &= !bit,
        }
        Some(self)
    }

    /// Whether a pixel is lit in the local buffer
    ///
    /// Returns `None` for pixels off the matrix.
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        let (index, bit) = pixel_location(x, y)?;
        self.device.buffer().get(index).map(|byte| byte & bit != 0)
    }

    /// Draw a character with its first column at row `start_row`
    ///
    /// Lit glyph pixels are OR'd into the buffer; nothing is cleared. Columns
    /// that would land past row 15 are cut off. Returns `None` when the
    /// character has no glyph or `start_row` is off the matrix.
    pub fn draw_char(&mut self, ch: char, start_row: usize) -> Option<&mut Self> {
        if start_row >= Self::WIDTH {
            log::trace!("ht16k33: start row {start_row} is off the matrix");
            return None;
        }
        let Some(glyph) = matrix_glyph(ch) else {
            log::trace!("ht16k33: no matrix glyph for {ch:?}");
            return None;
        };
        self.or_columns(start_row, glyph.iter().copied());
        Some(self)
    }

    /// Draw a line of text starting at row `start_row`
    ///
    /// Characters are separated by one blank column. Characters with no glyph
    /// are skipped and the text is cut off at row 15. Returns `None` only when
    /// `start_row` is off the matrix.
    pub fn draw_text(&mut self, text: &str, start_row: usize) -> Option<&mut Self> {
        if start_row >= Self::WIDTH {
            log::trace!("ht16k33: start row {start_row} is off the matrix");
            return None;
        }
        self.or_columns(start_row, text_columns(text));
        Some(self)
    }

    fn or_columns(&mut self, start_row: usize, columns: impl Iterator<Item = u8>) {
        let buffer = self.device.buffer_mut();
        for (row, column) in (start_row..Self::WIDTH).zip(columns) {
            if let Some(byte) = row_offset(row).and_then(|offset| buffer.get_mut(offset)) {
                *byte |= column;
            }
        }
    }

    /// Scroll text across the display from right to left
    ///
    /// The text, followed by eight blank spaces, is laid out as one strip of
    /// columns. A 16-column window slides over the strip one column per frame;
    /// each frame is committed and followed by a `frame_delay_ms` pause. The
    /// call returns after the window has traversed the whole strip.
    ///
    /// Returns the number of frames committed. Text with no drawable
    /// characters commits nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if a frame commit fails; the animation
    /// stops at that frame.
    pub fn scroll_text<D: DelayNs>(
        &mut self,
        text: &str,
        delay: &mut D,
        frame_delay_ms: u32,
    ) -> Result<usize, Error<I>> {
        self.scroll_text_while(text, delay, frame_delay_ms, |_| true)
    }

    /// Scroll text like [`scroll_text`](Self::scroll_text), stopping early on request
    ///
    /// `keep_going` is called with the frame number before every frame; when
    /// it returns `false` the animation stops and the frames committed so far
    /// are returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if a frame commit fails.
    pub fn scroll_text_while<D, F>(
        &mut self,
        text: &str,
        delay: &mut D,
        frame_delay_ms: u32,
        mut keep_going: F,
    ) -> Result<usize, Error<I>>
    where
        D: DelayNs,
        F: FnMut(usize) -> bool,
    {
        if !text.chars().any(|ch| matrix_glyph(ch).is_some()) {
            return Ok(0);
        }

        let strip_len = scroll_columns(text).count();
        let mut columns = scroll_columns(text);
        let mut window = [0u8; MATRIX_ROWS];
        for slot in &mut window {
            *slot = columns.next().unwrap_or(0);
        }

        log::debug!("ht16k33: scrolling {strip_len} columns");
        for frame in 0..strip_len {
            if !keep_going(frame) {
                log::debug!("ht16k33: scroll stopped at frame {frame}");
                return Ok(frame);
            }
            let buffer = self.device.buffer_mut();
            for (row, column) in window.iter().enumerate() {
                if let Some(byte) = row_offset(row).and_then(|offset| buffer.get_mut(offset)) {
                    *byte = *column;
                }
            }
            self.device.commit()?;
            delay.delay_ms(frame_delay_ms);

            window.rotate_left(1);
            if let Some(last) = window.last_mut() {
                *last = columns.next().unwrap_or(0);
            }
        }
        Ok(strip_len)
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
    pub fn buffer(&self) -> &[u8; MATRIX_BUFFER_SIZE] {
        self.device.buffer()
    }

    /// Access the underlying HT16K33 driver
    pub fn device(&self) -> &Ht16k33<I, MATRIX_BUFFER_SIZE> {
        &self.device
    }

    /// Mutably access the underlying HT16K33 driver
    pub fn device_mut(&mut self) -> &mut Ht16k33<I, MATRIX_BUFFER_SIZE> {
        &mut self.device
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.device.release()
    }
}

/// Column bytes of `text`, one blank column after every glyph
fn text_columns(text: &str) -> impl Iterator<Item = u8> + '_ {
    text.chars()
        .filter_map(matrix_glyph)
        .flat_map(|glyph| glyph.iter().copied().chain(iter::once(0)))
}

/// Column strip scrolled by [`MatrixDisplay::scroll_text`]
fn scroll_columns(text: &str) -> impl Iterator<Item = u8> + '_ {
    text_columns(text).chain(text_columns(SCROLL_PAD))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDelay, MockInterface};
    use alloc::vec::Vec;

    fn test_display() -> MatrixDisplay<MockInterface> {
        MatrixDisplay::new(MockInterface::new(), Config::default()).unwrap()
    }

    fn frames_sent(display: &MatrixDisplay<MockInterface>) -> usize {
        display.device().interface().frames().len()
    }

    #[test]
    fn test_plot_sets_bit_in_row_byte() {
        let mut display = test_display();
        display.plot(0, 0, Color::On).unwrap();
        display.plot(8, 7, Color::On).unwrap();
        assert_eq!(display.buffer()[16], 0x01);
        assert_eq!(display.buffer()[17], 0x80);
        assert_eq!(display.pixel(0, 0), Some(true));
        assert_eq!(display.pixel(1, 0), Some(false));
    }

    #[test]
    fn test_plot_then_unplot_restores_buffer() {
        let mut display = test_display();
        display.draw_char('W', 3);
        for x in 0..MatrixDisplay::<MockInterface>::WIDTH {
            for y in 0..MatrixDisplay::<MockInterface>::HEIGHT {
                if display.pixel(x, y) == Some(true) {
                    continue;
                }
                let before = *display.buffer();
                display.plot(x, y, Color::On).unwrap();
                assert_ne!(display.buffer(), &before);
                display.plot(x, y, Color::Off).unwrap();
                assert_eq!(display.buffer(), &before, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_plot_out_of_range_is_rejected() {
        let mut display = test_display();
        display.plot(2, 2, Color::On);
        let before = *display.buffer();
        for (x, y) in [(16, 0), (0, 8), (16, 8), (usize::MAX, 3)] {
            assert!(display.plot(x, y, Color::On).is_none());
            assert_eq!(display.buffer(), &before);
        }
        assert_eq!(display.pixel(16, 0), None);
    }

    #[test]
    fn test_rejected_plot_short_circuits_chain() {
        let mut display = test_display();
        let chained = display
            .clear()
            .plot(20, 0, Color::On)
            .and_then(|d| d.plot(1, 1, Color::On));
        assert!(chained.is_none());
        assert_eq!(display.pixel(1, 1), Some(false));
    }

    #[test]
    fn test_clear_then_commit_sends_zeros() {
        let mut display = test_display();
        display.draw_text("Hi", 0);
        display.clear().commit().unwrap();
        let frame = display.device().interface().last_frame().unwrap();
        assert_eq!(frame, [0u8; MATRIX_BUFFER_SIZE + 1]);
    }

    #[test]
    fn test_draw_char_writes_columns_to_successive_rows() {
        let mut display = test_display();
        display.draw_char('1', 0).unwrap();
        // '1' is 0x42, 0xFE, 0x02
        assert_eq!(display.buffer()[16], 0x42);
        assert_eq!(display.buffer()[18], 0xFE);
        assert_eq!(display.buffer()[20], 0x02);
        let lit = display.buffer().iter().filter(|b| **b != 0).count();
        assert_eq!(lit, 3);
    }

    #[test]
    fn test_draw_char_is_additive() {
        let mut display = test_display();
        display.plot(0, 0, Color::On).unwrap();
        display.draw_char('|', 0).unwrap();
        // '|' is 0xEE: bit 0 clear, but the plotted pixel stays lit
        assert_eq!(display.buffer()[16], 0xEF);
    }

    #[test]
    fn test_draw_char_cuts_off_at_last_row() {
        let mut display = test_display();
        display.draw_char('M', 14).unwrap();
        // Only the first two of five columns fit
        assert_eq!(display.buffer()[row_offset(14).unwrap()], 0xFE);
        assert_eq!(display.buffer()[row_offset(15).unwrap()], 0x40);
        let lit = display.buffer().iter().filter(|b| **b != 0).count();
        assert_eq!(lit, 2);
    }

    #[test]
    fn test_draw_char_rejects_bad_input() {
        let mut display = test_display();
        assert!(display.draw_char('A', 16).is_none());
        assert!(display.draw_char('\t', 0).is_none());
        assert_eq!(display.buffer(), &[0; MATRIX_BUFFER_SIZE]);
    }

    #[test]
    fn test_draw_text_spaces_glyphs() {
        let mut display = test_display();
        display.draw_text("i!", 0).unwrap();
        // 'i' = BC 02, gap, '!' = FA
        assert_eq!(display.buffer()[row_offset(0).unwrap()], 0xBC);
        assert_eq!(display.buffer()[row_offset(1).unwrap()], 0x02);
        assert_eq!(display.buffer()[row_offset(2).unwrap()], 0x00);
        assert_eq!(display.buffer()[row_offset(3).unwrap()], 0xFA);
    }

    #[test]
    fn test_scroll_empty_text_commits_nothing() {
        let mut display = test_display();
        let mut delay = MockDelay::default();
        let before = frames_sent(&display);
        assert_eq!(display.scroll_text("", &mut delay, 50).unwrap(), 0);
        assert_eq!(display.scroll_text("\n\t", &mut delay, 50).unwrap(), 0);
        assert_eq!(frames_sent(&display), before);
        assert!(delay.delays_ms.is_empty());
    }

    #[test]
    fn test_scroll_frame_count_covers_text_and_padding() {
        let mut display = test_display();
        let mut delay = MockDelay::default();
        let before = frames_sent(&display);
        // 'I' is 3 columns + gap, each pad space 2 columns + gap
        let frames = display.scroll_text("I", &mut delay, 25).unwrap();
        assert_eq!(frames, 4 + 8 * 3);
        assert_eq!(frames_sent(&display) - before, frames);
        assert_eq!(delay.delays_ms, [25; 28]);
    }

    #[test]
    fn test_scroll_window_slides_one_column_per_frame() {
        let mut display = test_display();
        let mut delay = MockDelay::default();
        let before = frames_sent(&display);
        display.scroll_text("I", &mut delay, 0).unwrap();
        let frames: Vec<_> = display.device().interface().frames()[before..].to_vec();

        // 'I' is 0x82, 0xFE, 0x82; row r lives at frame[row_offset(r) + 1]
        let row = |frame: &Vec<u8>, r: usize| frame[row_offset(r).unwrap() + 1];
        assert_eq!(row(&frames[0], 0), 0x82);
        assert_eq!(row(&frames[0], 1), 0xFE);
        assert_eq!(row(&frames[0], 2), 0x82);
        assert_eq!(row(&frames[0], 3), 0x00);
        assert_eq!(row(&frames[1], 0), 0xFE);
        assert_eq!(row(&frames[1], 1), 0x82);
        assert_eq!(row(&frames[2], 0), 0x82);
        assert_eq!(row(&frames[3], 0), 0x00);
        assert!(frames.last().unwrap().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_scroll_text_wider_than_display() {
        let mut display = test_display();
        let mut delay = MockDelay::default();
        let before = frames_sent(&display);
        let frames = display.scroll_text("WWWW", &mut delay, 0).unwrap();
        assert_eq!(frames, 4 * 6 + 8 * 3);
        let sent = display.device().interface().frames();
        // Frame 6 starts at the second 'W'
        assert_eq!(sent[before + 6][row_offset(0).unwrap() + 1], 0xFC);
    }

    #[test]
    fn test_scroll_can_be_stopped_between_frames() {
        let mut display = test_display();
        let mut delay = MockDelay::default();
        let before = frames_sent(&display);
        let frames = display
            .scroll_text_while("Hello", &mut delay, 10, |frame| frame < 5)
            .unwrap();
        assert_eq!(frames, 5);
        assert_eq!(frames_sent(&display) - before, 5);
        assert_eq!(delay.delays_ms.len(), 5);
    }

    #[test]
    fn test_scroll_commit_failure_stops_animation() {
        let mut display = test_display();
        let mut delay = MockDelay::default();
        let sent = display.device().interface().transactions.len();
        display.device_mut().interface_mut().fail_after = Some(sent + 3);
        let result = display.scroll_text("Hello", &mut delay, 10);
        assert!(matches!(result, Err(Error::Interface(_))));
        assert_eq!(delay.delays_ms.len(), 3);
    }
}
