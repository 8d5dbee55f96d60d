//! Seven-segment font.
//!
//! Bit positions of a glyph map to segments as follows; the most significant
//! bit is unused.
//!
//! ```text
//!    --1--
//!   |     |
//!   2     0
//!   |     |
//!    --3--
//!   |     |
//!   6     4
//!   |     |
//!    --5--
//! ```

use crate::error::{Error, Result};

pub const CHAR_DASH: u8 = 16;
pub const CHAR_UNDERSCORE: u8 = 17;
pub const CHAR_DEGREE: u8 = 18;

/// Glyphs for 0-9, A-F, dash, underscore and degree
pub const FONT: [u8; 19] = [
    0b0111_0111, // 0
    0b0001_0001, // 1
    0b0110_1011, // 2
    0b0011_1011, // 3
    0b0001_1101, // 4
    0b0011_1110, // 5
    0b0111_1110, // 6
    0b0001_0011, // 7
    0b0111_1111, // 8
    0b0011_1111, // 9
    0b0101_1111, // A
    0b0111_1100, // b
    0b0110_0110, // C
    0b0111_1001, // d
    0b0110_1110, // E
    0b0100_1110, // F
    0b0000_1000, // -
    0b0010_0000, // _
    0b0000_1111, // degree
];

/// Segment pattern for `character`
pub fn glyph(character: u8) -> Result<u8> {
    FONT.get(usize::from(character))
        .copied()
        .ok_or(Error::UnknownGlyph(character))
}
