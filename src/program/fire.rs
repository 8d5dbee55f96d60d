//! Fire rising from the bottom of the matrix
//!
//! Smooth 2D value noise scrolls upward over time. Heat falls off with
//! height, and the result is mapped through a black body palette.

use embassy_time::{Duration, Instant};

use super::{FrameContext, FrameGate, Program};
use crate::canvas::Canvas;
use crate::color::{HEAT_PALETTE, sample_palette};
use crate::math8::{blend8, ease_in_out_quad};

// Noise cell size: 8.8 fixed-point steps per pixel
const X_SCALE: u32 = 72;
const Y_SCALE: u32 = 96;

// Upward scroll in 8.8 noise units per second
const RISE_SPEED: u64 = 640;

// Extra heat lost per row above the bottom, as a fraction of 255 per row of
// the matrix height
const FALLOFF: u16 = 300;

#[derive(Debug, Clone, Default)]
pub struct FireProgram {
    gate: FrameGate,
    /// Start of the noise time axis, taken on the first frame
    origin: Option<Instant>,
}

impl FireProgram {
    pub const fn new() -> Self {
        Self {
            gate: FrameGate::new(),
            origin: None,
        }
    }

    /// Simple deterministic hash of a lattice point
    #[inline]
    const fn hash(x: u32, y: u32) -> u8 {
        // SplitMix64-style mixing, then fold down to a byte.
        let mut z = ((x as u64) | ((y as u64) << 32)).wrapping_add(0x9e37_79b9_7f4a_7c15);
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        #[allow(clippy::cast_possible_truncation)]
        {
            ((z ^ (z >> 31)) & 0xFF) as u8
        }
    }

    /// Smooth 2D value noise: inputs are 8.8 fixed-point positions.
    /// Returns 0-255.
    #[allow(clippy::cast_possible_truncation)]
    fn value_noise(x_fp: u32, y_fp: u32) -> u8 {
        let (cx, cy) = (x_fp >> 8, y_fp >> 8);
        let tx = ease_in_out_quad((x_fp & 0xFF) as u8);
        let ty = ease_in_out_quad((y_fp & 0xFF) as u8);

        let top = blend8(
            Self::hash(cx, cy),
            Self::hash(cx.wrapping_add(1), cy),
            tx,
        );
        let bottom = blend8(
            Self::hash(cx, cy.wrapping_add(1)),
            Self::hash(cx.wrapping_add(1), cy.wrapping_add(1)),
            tx,
        );
        blend8(top, bottom, ty)
    }

    /// Heat lost at `rows_up` rows above the bottom of a `height` matrix
    #[allow(clippy::cast_possible_truncation)]
    fn falloff(rows_up: u16, height: u8) -> u8 {
        let cooling = rows_up * FALLOFF / u16::from(height.max(1));
        cooling.min(255) as u8
    }
}

impl Program for FireProgram {
    const FRAME_PERIOD: Duration = Duration::from_millis(30);

    fn gate(&mut self) -> &mut FrameGate {
        &mut self.gate
    }

    fn reset(&mut self) {
        self.origin = None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn draw(&mut self, ctx: &FrameContext, canvas: &mut Canvas<'_>) -> bool {
        let Some(matrix) = canvas.matrix() else {
            return false;
        };
        let origin = *self.origin.get_or_insert(ctx.now);
        let elapsed_ms = ctx
            .now
            .checked_duration_since(origin)
            .map_or(0, |elapsed| elapsed.as_millis());
        let rise = (elapsed_ms * RISE_SPEED / 1000) as u32;

        let height = matrix.height();
        for (x, y) in matrix.cells() {
            let noise = Self::value_noise(
                x as u32 * X_SCALE,
                (y as u32 * Y_SCALE).wrapping_add(rise),
            );
            let rows_up = (i16::from(height) - 1 - y) as u16;
            let heat = noise.saturating_sub(Self::falloff(rows_up, height));
            canvas.set_xy(x, y, sample_palette(&HEAT_PALETTE, heat));
        }
        true
    }
}
