//! Plasma: three interfering sine fields mapped to hue.
//!
//! The phase advances by a random step each frame. Every time the phase
//! wraps around a new step is drawn, so the drift speed changes now and then.

use embassy_time::Duration;
use fastrand::Rng;

use super::{FrameContext, FrameGate, Program};
use crate::canvas::Canvas;
use crate::color::hsv;
use crate::math8::{cos8, sin8};

const MIN_STEP: u16 = 96;
const MAX_STEP: u16 = 640;

// Spatial frequency of the horizontal and vertical fields
const X_FREQUENCY: u8 = 16;
const Y_FREQUENCY: u8 = 24;
const DIAGONAL_FREQUENCY: u8 = 8;

#[derive(Debug, Clone)]
pub struct PlasmaProgram {
    gate: FrameGate,
    rng: Rng,
    phase: u16,
    step: u16,
}

impl PlasmaProgram {
    pub fn new(seed: u64) -> Self {
        let mut rng = Rng::with_seed(seed);
        let step = rng.u16(MIN_STEP..=MAX_STEP);
        Self {
            gate: FrameGate::new(),
            rng,
            phase: 0,
            step,
        }
    }

    fn advance(&mut self) {
        let (phase, wrapped) = self.phase.overflowing_add(self.step);
        self.phase = phase;
        if wrapped {
            self.step = self.rng.u16(MIN_STEP..=MAX_STEP);
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn hue_at(x: i16, y: i16, t: u8) -> u8 {
        let (x, y) = (x as u8, y as u8);
        let a = u16::from(sin8(x.wrapping_mul(X_FREQUENCY).wrapping_add(t)));
        let b = u16::from(cos8(
            y.wrapping_mul(Y_FREQUENCY).wrapping_add(t.wrapping_mul(2)),
        ));
        let c = u16::from(sin8(
            x.wrapping_add(y)
                .wrapping_mul(DIAGONAL_FREQUENCY)
                .wrapping_sub(t.wrapping_mul(3)),
        ));
        ((a + b + c) / 3) as u8
    }
}

impl Program for PlasmaProgram {
    const FRAME_PERIOD: Duration = Duration::from_millis(30);

    fn gate(&mut self) -> &mut FrameGate {
        &mut self.gate
    }

    fn reset(&mut self) {
        self.phase = 0;
        self.step = self.rng.u16(MIN_STEP..=MAX_STEP);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw(&mut self, _ctx: &FrameContext, canvas: &mut Canvas<'_>) -> bool {
        let Some(matrix) = canvas.matrix() else {
            return false;
        };
        self.advance();
        let t = (self.phase >> 8) as u8;

        for (x, y) in matrix.cells() {
            let hue = Self::hue_at(x, y, t);
            canvas.set_xy(x, y, hsv(hue, 255, 255));
        }
        true
    }
}
