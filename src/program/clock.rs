//! Clock face: HH:MM with a colon blinking once per second.

use embassy_time::Duration;

use super::{FrameContext, FrameGate, Program};
use crate::canvas::Canvas;
use crate::color::{BLACK, Rgb};
use crate::error::Result;
use crate::log::log;
use crate::timezone::LocalTime;

/// Colors of the clock face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockColors {
    pub hour: Rgb,
    pub minute: Rgb,
    pub colon: Rgb,
}

impl Default for ClockColors {
    fn default() -> Self {
        Self {
            hour: Rgb { r: 255, g: 96, b: 0 },
            minute: Rgb {
                r: 255,
                g: 160,
                b: 32,
            },
            colon: Rgb { r: 0, g: 96, b: 255 },
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClockProgram {
    gate: FrameGate,
    colors: ClockColors,
}

impl ClockProgram {
    pub const fn new(colors: ClockColors) -> Self {
        Self {
            gate: FrameGate::new(),
            colors,
        }
    }

    fn draw_time(&self, time: &LocalTime, canvas: &mut Canvas<'_>) -> Result<()> {
        canvas.write_digit(time.minute % 10, 0, self.colors.minute)?;
        canvas.write_digit(time.minute / 10, 1, self.colors.minute)?;
        canvas.write_digit(time.hour % 10, 2, self.colors.hour)?;
        canvas.write_digit(time.hour / 10, 3, self.colors.hour)?;

        let colon = if time.second % 2 == 1 {
            self.colors.colon
        } else {
            BLACK
        };
        canvas.write_colon(colon);
        Ok(())
    }
}

impl Program for ClockProgram {
    const FRAME_PERIOD: Duration = Duration::from_millis(1000);

    fn gate(&mut self) -> &mut FrameGate {
        &mut self.gate
    }

    fn draw(&mut self, ctx: &FrameContext, canvas: &mut Canvas<'_>) -> bool {
        // Nothing to show before the first sync; the status screen stays
        // and the first-frame repaint waits for the time
        let Some(time) = ctx.local_time else {
            return false;
        };
        if ctx.first_frame {
            canvas.clear();
        }

        match self.draw_time(&time, canvas) {
            Ok(()) => true,
            Err(err) => {
                log!("[ClockProgram.draw] {}", err);
                false
            }
        }
    }
}
