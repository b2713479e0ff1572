//! Display RAM addressing
//!
//! This module maps logical positions to locations in the display buffer.
//! Both layouts are wired to the HT16K33 differently, so neither is a simple
//! linear stride.
//!
//! ## 4-digit 7-segment display
//!
//! Each digit owns one byte. Digits sit at offsets 0, 2, 6 and 8; the colon
//! between the second and third digit has its own byte at offset 4.
//!
//! ## 8x16 matrix display
//!
//! A matrix row (the `x` axis, 0-15) is one byte and its 8 LEDs are the bits
//! of that byte (the `y` axis). Rows 0-7 are interleaved onto the even bytes
//! from 16 upward, rows 8-15 onto the odd bytes from 17 upward.
//!
//! | row | 0  | 1  | ... | 7  | 8  | 9  | ... | 15 |
//! |-----|----|----|-----|----|----|----|-----|----|
//! | byte| 16 | 18 | ... | 30 | 17 | 19 | ... | 31 |
//!
//! ## Example
//!
//! ```
//! use ht16k33_led::addressing::{digit_offset, pixel_location, row_offset};
//!
//! assert_eq!(digit_offset(2), Some(6));
//! assert_eq!(row_offset(8), Some(17));
//!
//! // Pixel (x=1, y=3) lives in row 1's byte, bit 3
//! assert_eq!(pixel_location(1, 3), Some((18, 0x08)));
//! ```

/// Number of digits on the 7-segment display
pub const DIGIT_COUNT: usize = 4;

/// Buffer offset of each 7-segment digit
pub const DIGIT_OFFSETS: [usize; DIGIT_COUNT] = [0, 2, 6, 8];

/// Buffer offset of the 7-segment colon
pub const COLON_OFFSET: usize = 4;

/// Matrix width in rows (`x` axis)
pub const MATRIX_ROWS: usize = 16;

/// Matrix height in LEDs per row (`y` axis)
pub const MATRIX_ROW_BITS: usize = 8;

/// Buffer offset of a 7-segment digit
///
/// Returns `None` for any digit past the last one.
pub fn digit_offset(digit: usize) -> Option<usize> {
    DIGIT_OFFSETS.get(digit).copied()
}

/// Buffer offset of a matrix row
///
/// Returns `None` for rows outside `0..16`.
///
/// ```
/// use ht16k33_led::addressing::row_offset;
///
/// assert_eq!(row_offset(0), Some(16));
/// assert_eq!(row_offset(15), Some(31));
/// assert_eq!(row_offset(16), None);
/// ```
pub fn row_offset(row: usize) -> Option<usize> {
    match row {
        0..8 => Some(16 + (row << 1)),
        8..MATRIX_ROWS => Some(1 + (row << 1)),
        _ => None,
    }
}

/// Buffer location of a matrix pixel
///
/// `x` selects the row byte and `y` the bit within it. Returns
/// `(byte_index, bit_mask)`, or `None` when the pixel is off the matrix.
pub fn pixel_location(x: usize, y: usize) -> Option<(usize, u8)> {
    if y >= MATRIX_ROW_BITS {
        return None;
    }
    row_offset(x).map(|index| (index, 1 << y))
}
