//! Glyph tables
//!
//! Fixed font data for both display layouts.
//!
//! ## 7-segment glyphs
//!
//! One byte per glyph, segments `a`-`g` in bits 0-6. Bit 7 is the decimal
//! point and is never set by a glyph.
//!
//! ```text
//!    --a--
//!   |     |
//!   f     b
//!   |--g--|
//!   e     c
//!   |     |
//!    --d--  .dp
//! ```
//!
//! ## Matrix glyphs
//!
//! Printable ASCII (32-127, with 127 drawn as a degree sign). Each glyph is a
//! list of column bytes, one per matrix row it occupies, bit 0 at `y = 0`.
//! Glyphs are 1-5 columns wide and the width is part of the glyph.
//!
//! ## Example
//!
//! ```
//! use ht16k33_led::font::{matrix_glyph, segment_glyph};
//!
//! assert_eq!(segment_glyph('7'), Some(0x07));
//! assert_eq!(segment_glyph('x'), None);
//! assert_eq!(matrix_glyph('i').map(<[u8]>::len), Some(2));
//! ```

/// Decimal point bit of a 7-segment digit
pub const SEGMENT_DECIMAL_POINT: u8 = 0b1000_0000;

/// Index of the minus glyph in [`SEGMENT_GLYPHS`]
pub const SEGMENT_MINUS: usize = 0x10;

/// Index of the degree glyph in [`SEGMENT_GLYPHS`]
pub const SEGMENT_DEGREE: usize = 0x11;

/// Blank 7-segment digit
pub const SEGMENT_BLANK: u8 = 0x00;

/// 7-segment glyphs: 0-9, A-F, minus, degree
pub const SEGMENT_GLYPHS: [u8; 18] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F, // 0-9
    0x5F, 0x7C, 0x58, 0x5E, 0x7B, 0x71, // A-F
    0x40, // -
    0x63, // degree
];

/// First character code in [`MATRIX_GLYPHS`]
pub const MATRIX_FIRST_CHAR: u32 = 32;

/// Matrix glyphs for character codes 32-127
pub static MATRIX_GLYPHS: [&[u8]; 96] = [
    &[0x00, 0x00], // space
    &[0xFA], // !
    &[0xC0, 0x00, 0xC0], // "
    &[0x24, 0x7E, 0x24, 0x7E, 0x24], // #
    &[0x24, 0xD4, 0x56, 0x48], // $
    &[0xC6, 0xC8, 0x10, 0x26, 0xC6], // %
    &[0x6C, 0x92, 0x6A, 0x04, 0x0A], // &
    &[0xC0], // apostrophe
    &[0x7C, 0x82], // (
    &[0x82, 0x7C], // )
    &[0x10, 0x7C, 0x38, 0x7C, 0x10], // *
    &[0x10, 0x10, 0x7C, 0x10, 0x10], // +
    &[0x06, 0x07], // ,
    &[0x10, 0x10, 0x10, 0x10], // -
    &[0x06, 0x06], // .
    &[0x04, 0x08, 0x10, 0x20, 0x40], // /
    &[0x7C, 0x8A, 0x92, 0xA2, 0x7C], // 0
    &[0x42, 0xFE, 0x02], // 1
    &[0x46, 0x8A, 0x92, 0x92, 0x62], // 2
    &[0x44, 0x92, 0x92, 0x92, 0x6C], // 3
    &[0x18, 0x28, 0x48, 0xFE, 0x08], // 4
    &[0xF4, 0x92, 0x92, 0x92, 0x8C], // 5
    &[0x3C, 0x52, 0x92, 0x92, 0x8C], // 6
    &[0x80, 0x8E, 0x90, 0xA0, 0xC0], // 7
    &[0x6C, 0x92, 0x92, 0x92, 0x6C], // 8
    &[0x60, 0x92, 0x92, 0x94, 0x78], // 9
    &[0x36, 0x36], // :
    &[0x36, 0x37], // ;
    &[0x10, 0x28, 0x44, 0x82], // <
    &[0x24, 0x24, 0x24, 0x24, 0x24], // =
    &[0x82, 0x44, 0x28, 0x10], // >
    &[0x60, 0x80, 0x9A, 0x90, 0x60], // ?
    &[0x7C, 0x82, 0xBA, 0xAA, 0x78], // @
    &[0x7E, 0x90, 0x90, 0x90, 0x7E], // A
    &[0xFE, 0x92, 0x92, 0x92, 0x6C], // B
    &[0x7C, 0x82, 0x82, 0x82, 0x44], // C
    &[0xFE, 0x82, 0x82, 0x82, 0x7C], // D
    &[0xFE, 0x92, 0x92, 0x92, 0x82], // E
    &[0xFE, 0x90, 0x90, 0x90, 0x80], // F
    &[0x7C, 0x82, 0x92, 0x92, 0x5C], // G
    &[0xFE, 0x10, 0x10, 0x10, 0xFE], // H
    &[0x82, 0xFE, 0x82], // I
    &[0x0C, 0x02, 0x02, 0x02, 0xFC], // J
    &[0xFE, 0x10, 0x28, 0x44, 0x82], // K
    &[0xFE, 0x02, 0x02, 0x02, 0x02], // L
    &[0xFE, 0x40, 0x20, 0x40, 0xFE], // M
    &[0xFE, 0x40, 0x20, 0x10, 0xFE], // N
    &[0x7C, 0x82, 0x82, 0x82, 0x7C], // O
    &[0xFE, 0x90, 0x90, 0x90, 0x60], // P
    &[0x7C, 0x82, 0x92, 0x8C, 0x7A], // Q
    &[0xFE, 0x90, 0x90, 0x98, 0x66], // R
    &[0x64, 0x92, 0x92, 0x92, 0x4C], // S
    &[0x80, 0x80, 0xFE, 0x80, 0x80], // T
    &[0xFC, 0x02, 0x02, 0x02, 0xFC], // U
    &[0xF8, 0x04, 0x02, 0x04, 0xF8], // V
    &[0xFC, 0x02, 0x3C, 0x02, 0xFC], // W
    &[0xC6, 0x28, 0x10, 0x28, 0xC6], // X
    &[0xE0, 0x10, 0x0E, 0x10, 0xE0], // Y
    &[0x86, 0x8A, 0x92, 0xA2, 0xC2], // Z
    &[0xFE, 0x82, 0x82], // [
    &[0x40, 0x20, 0x10, 0x08, 0x04], // backslash
    &[0x82, 0x82, 0xFE], // ]
    &[0x20, 0x40, 0x80, 0x40, 0x20], // ^
    &[0x02, 0x02, 0x02, 0x02, 0x02], // _
    &[0xC0, 0xE0], // grave
    &[0x04, 0x2A, 0x2A, 0x1E], // a
    &[0xFE, 0x22, 0x22, 0x1C], // b
    &[0x1C, 0x22, 0x22, 0x22], // c
    &[0x1C, 0x22, 0x22, 0xFC], // d
    &[0x1C, 0x2A, 0x2A, 0x10], // e
    &[0x10, 0x7E, 0x90, 0x80], // f
    &[0x18, 0x25, 0x25, 0x3E], // g
    &[0xFE, 0x20, 0x20, 0x1E], // h
    &[0xBC, 0x02], // i
    &[0x02, 0x01, 0x21, 0xBE], // j
    &[0xFE, 0x08, 0x14, 0x22], // k
    &[0xFC, 0x02], // l
    &[0x3E, 0x20, 0x18, 0x20, 0x1E], // m
    &[0x3E, 0x20, 0x20, 0x1E], // n
    &[0x1C, 0x22, 0x22, 0x1C], // o
    &[0x3F, 0x22, 0x22, 0x1C], // p
    &[0x1C, 0x22, 0x22, 0x3F], // q
    &[0x22, 0x1E, 0x20, 0x10], // r
    &[0x12, 0x2A, 0x2A, 0x04], // s
    &[0x20, 0x7C, 0x22, 0x04], // t
    &[0x3C, 0x02, 0x02, 0x3E], // u
    &[0x38, 0x04, 0x02, 0x04, 0x38], // v
    &[0x3C, 0x06, 0x0C, 0x06, 0x3C], // w
    &[0x22, 0x14, 0x08, 0x14, 0x22], // x
    &[0x39, 0x05, 0x06, 0x3C], // y
    &[0x26, 0x2A, 0x2A, 0x32], // z
    &[0x10, 0x7C, 0x82, 0x82], // {
    &[0xEE], // |
    &[0x82, 0x82, 0x7C, 0x10], // }
    &[0x40, 0x80, 0x40, 0x80], // ~
    &[0x60, 0x90, 0x90, 0x60], // degree sign
];

/// 7-segment glyph for a numeric value
///
/// Accepts 0-15 and renders it as a hex digit. Other values have no glyph.
pub fn segment_digit(value: u8) -> Option<u8> {
    if value < 16 {
        SEGMENT_GLYPHS.get(usize::from(value)).copied()
    } else {
        None
    }
}

/// 7-segment glyph for a character
///
/// Accepts `0`-`9`, `a`-`f` in either case, `-`, `°` and space (blank).
pub fn segment_glyph(ch: char) -> Option<u8> {
    match ch {
        ' ' => Some(SEGMENT_BLANK),
        '-' => SEGMENT_GLYPHS.get(SEGMENT_MINUS).copied(),
        '°' => SEGMENT_GLYPHS.get(SEGMENT_DEGREE).copied(),
        _ => ch
            .to_digit(16)
            .and_then(|value| SEGMENT_GLYPHS.get(value as usize).copied()),
    }
}

/// Matrix glyph columns for a character
///
/// Covers printable ASCII plus DEL. `°` is accepted as an alias for the
/// degree glyph at DEL.
pub fn matrix_glyph(ch: char) -> Option<&'static [u8]> {
    let code = if ch == '°' { 127 } else { u32::from(ch) };
    let index = code.checked_sub(MATRIX_FIRST_CHAR)?;
    MATRIX_GLYPHS.get(index as usize).copied()
}
