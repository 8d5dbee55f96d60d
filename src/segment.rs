//! Seven-segment drawing on top of the pixel addressing table.

use crate::canvas::Canvas;
use crate::color::{BLACK, Rgb};
use crate::error::Result;
use crate::font::glyph;
use crate::layout::SEGMENT_COUNT;

/// Path of the progress bar as (place, segment) pairs.
///
/// Starts at the top of the leftmost digit, runs across the top, down one
/// segment, back along the middle, down again and across the bottom.
pub const PROGRESS_PATH: [(u8, u8); 14] = [
    (3, 1),
    (2, 1),
    (1, 1),
    (0, 1),
    (0, 0),
    (0, 3),
    (1, 3),
    (2, 3),
    (3, 3),
    (3, 6),
    (3, 5),
    (2, 5),
    (1, 5),
    (0, 5),
];

impl Canvas<'_> {
    /// Light every LED of one segment. Does not flush.
    pub fn write_segment(&mut self, place: u8, segment: u8, color: Rgb) -> Result<()> {
        let pixels = self.layout().segment_pixels(place, segment)?;
        for index in pixels {
            self.set(index, color);
        }
        Ok(())
    }

    /// Draw `character` at `place`; unset segments are switched off.
    ///
    /// Characters outside the font are rejected before anything is drawn.
    pub fn write_digit(&mut self, character: u8, place: u8, color: Rgb) -> Result<()> {
        let mut segments = glyph(character)?;
        for segment in 0..SEGMENT_COUNT {
            let segment_color = if segments & 0x01 == 0 { BLACK } else { color };
            self.write_segment(place, segment, segment_color)?;
            segments >>= 1;
        }
        Ok(())
    }

    /// Draw the same character on every digit
    #[allow(clippy::cast_possible_truncation)]
    pub fn write_all_digits(&mut self, character: u8, color: Rgb) -> Result<()> {
        for place in 0..self.layout().digit_count() {
            self.write_digit(character, place as u8, color)?;
        }
        Ok(())
    }

    /// Light the colon pixels
    pub fn write_colon(&mut self, color: Rgb) {
        for &index in self.layout().colon {
            self.set(index, color);
        }
    }
}

/// Number of path entries lit at `percentage`
#[allow(clippy::cast_possible_truncation)]
pub const fn progress_bars(percentage: u8) -> usize {
    let percentage = if percentage > 100 { 100 } else { percentage };
    percentage as usize * PROGRESS_PATH.len() / 100
}

/// Progress bar snaking through the digits.
///
/// Remembers the last drawn percentage so repeated reports cost no flush.
#[derive(Debug, Clone, Default)]
pub struct ProgressBar {
    last: Option<u8>,
}

impl ProgressBar {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Forget the last drawn value so the next call always draws
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Draw `percentage` into the canvas.
    ///
    /// Returns `false` when nothing changed since the previous call and the
    /// frame does not need flushing.
    pub fn draw(&mut self, canvas: &mut Canvas<'_>, percentage: u8, color: Rgb) -> Result<bool> {
        if self.last == Some(percentage) {
            return Ok(false);
        }
        self.last = Some(percentage);

        canvas.clear();
        for &(place, segment) in PROGRESS_PATH.iter().take(progress_bars(percentage)) {
            canvas.write_segment(place, segment, color)?;
        }
        Ok(true)
    }
}
