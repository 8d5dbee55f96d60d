//! Pixel addressing: from digits, segments and matrix coordinates to
//! physical LED indices.

mod digit;
mod matrix;
mod presets;

pub use digit::{DigitDescriptor, StripPixels};
pub use matrix::{MatrixMap, glyph_cell, serpentine_rows};
pub use presets::{
    MATRIX_CLOCK, MATRIX_CLOCK_LEDS, MATRIX_HEIGHT, MATRIX_WIDTH, SEGMENT_CLOCK,
    SEGMENT_CLOCK_LEDS,
};

use crate::error::{Error, Result};

/// Number of segments in a digit
pub const SEGMENT_COUNT: u8 = 7;

/// How a digit is wired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitShape {
    /// Chained physical strips
    Strips(DigitDescriptor),
    /// Glyph drawn on the matrix with its top-left corner at (x, y)
    Matrix { x: u8, y: u8, length: u8 },
}

/// Complete physical description of a clock
#[derive(Debug, Clone, Copy)]
pub struct ClockLayout {
    /// Number of visible LEDs
    pub led_count: u16,
    /// Digit positions, place 0 is the rightmost (minute ones)
    pub digits: &'static [DigitShape],
    /// Pixels between the hour and minute digits
    pub colon: &'static [u16],
    /// Coordinate table, present only on matrix builds
    pub matrix: Option<MatrixMap>,
}

impl ClockLayout {
    /// Index that absorbs out-of-range writes
    pub const fn sentinel(&self) -> u16 {
        self.led_count
    }

    pub const fn digit_count(&self) -> usize {
        self.digits.len()
    }

    pub const fn has_matrix(&self) -> bool {
        self.matrix.is_some()
    }

    /// Physical LEDs lighting `segment` of the digit at `place`
    pub fn segment_pixels(&self, place: u8, segment: u8) -> Result<SegmentPixels> {
        if segment >= SEGMENT_COUNT {
            return Err(Error::SegmentOutOfRange(segment));
        }
        let shape = self
            .digits
            .get(usize::from(place))
            .ok_or(Error::DigitOutOfRange(place))?;

        Ok(match *shape {
            DigitShape::Strips(digit) => SegmentPixels::Strips(StripPixels::new(digit, segment)),
            DigitShape::Matrix { x, y, length } => match self.matrix {
                Some(matrix) => SegmentPixels::Glyph {
                    matrix,
                    x,
                    y,
                    segment,
                    length,
                    next: 0,
                },
                None => SegmentPixels::Empty,
            },
        })
    }
}

/// Iterator over the physical LEDs of one segment
#[derive(Debug, Clone)]
pub enum SegmentPixels {
    Strips(StripPixels),
    Glyph {
        matrix: MatrixMap,
        x: u8,
        y: u8,
        segment: u8,
        length: u8,
        next: u8,
    },
    Empty,
}

impl Iterator for SegmentPixels {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        match self {
            Self::Strips(pixels) => pixels.next(),
            Self::Glyph {
                matrix,
                x,
                y,
                segment,
                length,
                next,
            } => {
                if *next >= *length {
                    return None;
                }
                let (dx, dy) = glyph_cell(*segment, *next, *length);
                *next += 1;
                Some(matrix.index(
                    i16::from(*x) + i16::from(dx),
                    i16::from(*y) + i16::from(dy),
                ))
            }
            Self::Empty => None,
        }
    }
}
