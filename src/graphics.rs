//! Graphics support via embedded-graphics
//!
//! This module implements the [`DrawTarget`] trait from the embedded-graphics
//! ecosystem for [`MatrixDisplay`], so primitives, images and mono fonts can
//! be drawn onto the 16x8 matrix. Pixels go through
//! [`MatrixDisplay::plot`]; anything off the matrix is dropped.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     prelude::*,
//!     primitives::{Line, PrimitiveStyle},
//! };
//! use ht16k33_led::{Color, Config, Interface, MatrixDisplay};
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
//! let mut display = match MatrixDisplay::new(Interface::new(MockI2c), Config::default()) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! // Diagonal across the matrix
//! let _ = Line::new(Point::new(0, 0), Point::new(15, 7))
//!     .into_styled(PrimitiveStyle::with_stroke(Color::On, 1))
//!     .draw(&mut display);
//!
//! // Update physical display
//! let _ = display.commit();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::addressing::row_offset;
use crate::color::Color;
use crate::interface::DisplayInterface;
use crate::matrix::MatrixDisplay;

impl<I> DrawTarget for MatrixDisplay<I>
where
    I: DisplayInterface,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
                continue;
            };
            self.plot(x, y, color);
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = if color.is_on() { 0xFF } else { 0x00 };
        let buffer = self.device_mut().buffer_mut();
        for offset in (0..Self::WIDTH).filter_map(row_offset) {
            if let Some(byte) = buffer.get_mut(offset) {
                *byte = fill;
            }
        }
        Ok(())
    }
}

impl<I> OriginDimensions for MatrixDisplay<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(Self::WIDTH as u32, Self::HEIGHT as u32)
    }
}
