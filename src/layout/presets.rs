//! Layouts of the two supported builds.

use super::{ClockLayout, DigitDescriptor, DigitShape, MatrixMap, serpentine_rows};

/// LEDs on the seven-segment clock: four 42-LED digits and two colon pixels
pub const SEGMENT_CLOCK_LEDS: usize = 170;

const SEGMENT_DIGITS: [DigitShape; 4] = [
    DigitShape::Strips(DigitDescriptor::new(0, 2, 3)),
    DigitShape::Strips(DigitDescriptor::new(42, 2, 3)),
    DigitShape::Strips(DigitDescriptor::new(86, 2, 3)),
    DigitShape::Strips(DigitDescriptor::new(128, 2, 3)),
];

const SEGMENT_COLON: [u16; 2] = [84, 85];

/// Seven-segment clock, no matrix
#[allow(clippy::cast_possible_truncation)]
pub static SEGMENT_CLOCK: ClockLayout = ClockLayout {
    led_count: SEGMENT_CLOCK_LEDS as u16,
    digits: &SEGMENT_DIGITS,
    colon: &SEGMENT_COLON,
    matrix: None,
};

pub const MATRIX_WIDTH: u8 = 25;
pub const MATRIX_HEIGHT: u8 = 9;
pub const MATRIX_CLOCK_LEDS: usize = MATRIX_WIDTH as usize * MATRIX_HEIGHT as usize;

const MATRIX_TABLE: [u16; MATRIX_CLOCK_LEDS] = serpentine_rows(MATRIX_WIDTH);

#[allow(clippy::cast_possible_truncation)]
const MATRIX: MatrixMap = MatrixMap::new(
    MATRIX_WIDTH,
    MATRIX_HEIGHT,
    &MATRIX_TABLE,
    MATRIX_CLOCK_LEDS as u16,
);

// 5x9 glyphs with 3-pixel segments, colon column in the middle
const MATRIX_DIGITS: [DigitShape; 4] = [
    DigitShape::Matrix {
        x: 20,
        y: 0,
        length: 3,
    },
    DigitShape::Matrix {
        x: 14,
        y: 0,
        length: 3,
    },
    DigitShape::Matrix {
        x: 6,
        y: 0,
        length: 3,
    },
    DigitShape::Matrix {
        x: 0,
        y: 0,
        length: 3,
    },
];

const MATRIX_COLON: [u16; 2] = [MATRIX.index(12, 2), MATRIX.index(12, 6)];

/// Serpentine matrix clock
#[allow(clippy::cast_possible_truncation)]
pub static MATRIX_CLOCK: ClockLayout = ClockLayout {
    led_count: MATRIX_CLOCK_LEDS as u16,
    digits: &MATRIX_DIGITS,
    colon: &MATRIX_COLON,
    matrix: Some(MATRIX),
};
