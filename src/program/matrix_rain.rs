//! Digital rain falling down the matrix columns.
//!
//! The program keeps no per-drop state: a pixel in the head color is a drop,
//! everything else is trail that fades a little every frame.

use embassy_time::Duration;
use fastrand::Rng;

use super::{FrameContext, FrameGate, Program};
use crate::canvas::Canvas;
use crate::color::{Rgb, fade, is_black};

const HEAD: Rgb = Rgb {
    r: 175,
    g: 255,
    b: 175,
};
const TRAIL: Rgb = Rgb {
    r: 27,
    g: 130,
    b: 39,
};

/// Per-frame fade of non-head pixels (192/256)
const FADE_SCALE: u8 = 192;

/// Chance out of 256 that a new drop spawns on a non-dark frame
const SPAWN_CHANCE: u8 = 25;

#[derive(Debug, Clone)]
pub struct MatrixRainProgram {
    gate: FrameGate,
    rng: Rng,
}

impl MatrixRainProgram {
    pub fn new(seed: u64) -> Self {
        Self {
            gate: FrameGate::new(),
            rng: Rng::with_seed(seed),
        }
    }
}

impl Program for MatrixRainProgram {
    const FRAME_PERIOD: Duration = Duration::from_millis(75);

    fn gate(&mut self) -> &mut FrameGate {
        &mut self.gate
    }

    fn draw(&mut self, ctx: &FrameContext, canvas: &mut Canvas<'_>) -> bool {
        let Some(matrix) = canvas.matrix() else {
            return false;
        };
        if matrix.width() == 0 || matrix.height() == 0 {
            return false;
        }
        if ctx.first_frame {
            canvas.clear();
        }
        let width = i16::from(matrix.width());
        let height = i16::from(matrix.height());

        canvas.map_pixels(|pixel| if pixel == HEAD { pixel } else { fade(pixel, FADE_SCALE) });

        // Drops on the last row fall off the screen
        for x in 0..width {
            if canvas.get_xy(x, height - 1) == HEAD {
                canvas.set_xy(x, height - 1, TRAIL);
            }
        }
        // Bottom-up, so every drop moves exactly one row
        for y in (0..height - 1).rev() {
            for x in 0..width {
                if canvas.get_xy(x, y) == HEAD {
                    canvas.set_xy(x, y, TRAIL);
                    canvas.set_xy(x, y + 1, HEAD);
                }
            }
        }

        let dark = canvas.pixels().iter().all(|pixel| is_black(*pixel));
        if dark || self.rng.u8(..) < SPAWN_CHANCE {
            let x = i16::from(self.rng.u8(0..matrix.width()));
            canvas.set_xy(x, 0, HEAD);
        }
        true
    }
}
