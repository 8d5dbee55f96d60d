//! Rainbow wash over the matrix
//!
//! Hue runs along two orthogonal gradients whose steepness oscillates over
//! time, giving a shifting diagonal rainbow.

use embassy_time::Duration;

use super::{FrameContext, FrameGate, Program};
use crate::canvas::Canvas;
use crate::color::hsv;
use crate::math8::cos16;

// Oscillation speeds of the row and column gradients
const ROW_RATE: u64 = 27;
const COLUMN_RATE: u64 = 39;

// Hue spread across the whole matrix at the oscillation peak
const ROW_SPREAD: i32 = 350;
const COLUMN_SPREAD: i32 = 310;

#[derive(Debug, Clone, Default)]
pub struct RainbowProgram {
    gate: FrameGate,
}

impl RainbowProgram {
    pub const fn new() -> Self {
        Self {
            gate: FrameGate::new(),
        }
    }

    /// Per-step hue delta at `ms` for a gradient spanning `cells` pixels
    #[allow(clippy::cast_possible_truncation)]
    fn hue_delta(ms: u64, rate: u64, spread: i32, cells: u8) -> i8 {
        let theta = (ms.wrapping_mul(rate) & 0xFFFF) as u16;
        let per_cell = spread / i32::from(cells.max(1));
        let delta = i32::from(cos16(theta)) * per_cell / 32768;
        delta.clamp(-127, 127) as i8
    }
}

impl Program for RainbowProgram {
    const FRAME_PERIOD: Duration = Duration::from_millis(20);

    fn gate(&mut self) -> &mut FrameGate {
        &mut self.gate
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn draw(&mut self, ctx: &FrameContext, canvas: &mut Canvas<'_>) -> bool {
        let Some(matrix) = canvas.matrix() else {
            return false;
        };
        let ms = ctx.now.as_millis();
        let row_delta = Self::hue_delta(ms, ROW_RATE, ROW_SPREAD, matrix.width());
        let column_delta = Self::hue_delta(ms, COLUMN_RATE, COLUMN_SPREAD, matrix.height());

        let mut line_hue = (ms >> 5) as u8;
        for y in 0..i16::from(matrix.height()) {
            line_hue = line_hue.wrapping_add(row_delta as u8);
            let mut pixel_hue = line_hue;
            for x in 0..i16::from(matrix.width()) {
                pixel_hue = pixel_hue.wrapping_add(column_delta as u8);
                canvas.set_xy(x, y, hsv(pixel_hue, 255, 255));
            }
        }
        true
    }
}
