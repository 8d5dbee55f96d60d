//! Rendering programs with compile-time known variants
//!
//! All programs are stored in an enum to avoid heap allocations.
//! Each program implements the `Program` trait.

mod clock;
mod fire;
mod matrix_rain;
mod plasma;
mod rainbow;

pub use clock::{ClockColors, ClockProgram};
pub use fire::FireProgram;
pub use matrix_rain::MatrixRainProgram;
pub use plasma::PlasmaProgram;
pub use rainbow::RainbowProgram;

use embassy_time::{Duration, Instant};

use crate::canvas::Canvas;
use crate::timezone::LocalTime;

const PROGRAM_NAME_CLOCK: &str = "clock";
const PROGRAM_NAME_MATRIX: &str = "matrix";
const PROGRAM_NAME_RAINBOW: &str = "rainbow";
const PROGRAM_NAME_FIRE: &str = "fire";
const PROGRAM_NAME_PLASMA: &str = "plasma";

const PROGRAM_ID_CLOCK: u8 = 0;
const PROGRAM_ID_MATRIX: u8 = 1;
const PROGRAM_ID_RAINBOW: u8 = 2;
const PROGRAM_ID_FIRE: u8 = 3;
const PROGRAM_ID_PLASMA: u8 = 4;

/// Number of registered programs
pub const PROGRAM_COUNT: usize = 5;

/// Inputs for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub now: Instant,
    /// Local wall-clock time, `None` until the first time sync
    pub local_time: Option<LocalTime>,
    /// Set on the first frame after activation; forces a repaint
    pub first_frame: bool,
}

/// Tracks when a program last painted
#[derive(Debug, Clone, Default)]
pub struct FrameGate {
    last_update: Option<Instant>,
}

impl FrameGate {
    pub const fn new() -> Self {
        Self { last_update: None }
    }

    /// Whether a frame is due; records `now` when it is
    pub fn is_due(&mut self, now: Instant, period: Duration, force: bool) -> bool {
        let due = force
            || self.last_update.is_none_or(|last| {
                now.checked_duration_since(last)
                    .is_some_and(|elapsed| elapsed >= period)
            });
        if due {
            self.last_update = Some(now);
        }
        due
    }
}

pub trait Program {
    /// Minimum time between two painted frames
    const FRAME_PERIOD: Duration;

    fn gate(&mut self) -> &mut FrameGate;

    /// Paint one frame; returns `false` if the canvas was left untouched
    fn draw(&mut self, ctx: &FrameContext, canvas: &mut Canvas<'_>) -> bool;

    /// Reinitialise state when the program becomes active
    fn reset(&mut self) {}

    /// Paint a frame if the frame period elapsed or on the first frame
    fn render(&mut self, ctx: &FrameContext, canvas: &mut Canvas<'_>) -> bool {
        if !self.gate().is_due(ctx.now, Self::FRAME_PERIOD, ctx.first_frame) {
            return false;
        }
        self.draw(ctx, canvas)
    }
}

/// Program slot - enum containing all possible programs
#[derive(Debug, Clone)]
pub enum ProgramSlot {
    Clock(ClockProgram),
    MatrixRain(MatrixRainProgram),
    Rainbow(RainbowProgram),
    Fire(FireProgram),
    Plasma(PlasmaProgram),
}

/// Known program ids, in registry order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ProgramId {
    Clock = PROGRAM_ID_CLOCK,
    MatrixRain = PROGRAM_ID_MATRIX,
    Rainbow = PROGRAM_ID_RAINBOW,
    Fire = PROGRAM_ID_FIRE,
    Plasma = PROGRAM_ID_PLASMA,
}

impl ProgramId {
    pub const ALL: [Self; PROGRAM_COUNT] = [
        Self::Clock,
        Self::MatrixRain,
        Self::Rainbow,
        Self::Fire,
        Self::Plasma,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PROGRAM_ID_CLOCK => Self::Clock,
            PROGRAM_ID_MATRIX => Self::MatrixRain,
            PROGRAM_ID_RAINBOW => Self::Rainbow,
            PROGRAM_ID_FIRE => Self::Fire,
            PROGRAM_ID_PLASMA => Self::Plasma,
            _ => return None,
        })
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clock => PROGRAM_NAME_CLOCK,
            Self::MatrixRain => PROGRAM_NAME_MATRIX,
            Self::Rainbow => PROGRAM_NAME_RAINBOW,
            Self::Fire => PROGRAM_NAME_FIRE,
            Self::Plasma => PROGRAM_NAME_PLASMA,
        }
    }

    /// Exact, case-sensitive name lookup
    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PROGRAM_NAME_CLOCK => Some(Self::Clock),
            PROGRAM_NAME_MATRIX => Some(Self::MatrixRain),
            PROGRAM_NAME_RAINBOW => Some(Self::Rainbow),
            PROGRAM_NAME_FIRE => Some(Self::Fire),
            PROGRAM_NAME_PLASMA => Some(Self::Plasma),
            _ => None,
        }
    }

    /// Programs addressing the matrix cannot run on digit-only layouts
    pub const fn requires_matrix(self) -> bool {
        !matches!(self, Self::Clock)
    }
}

impl ProgramSlot {
    /// Create the registry entry for `id`
    pub fn new(id: ProgramId, colors: ClockColors, seed: u64) -> Self {
        match id {
            ProgramId::Clock => Self::Clock(ClockProgram::new(colors)),
            ProgramId::MatrixRain => Self::MatrixRain(MatrixRainProgram::new(seed)),
            ProgramId::Rainbow => Self::Rainbow(RainbowProgram::new()),
            ProgramId::Fire => Self::Fire(FireProgram::new()),
            ProgramId::Plasma => Self::Plasma(PlasmaProgram::new(seed)),
        }
    }

    /// Render the current program
    pub fn render(&mut self, ctx: &FrameContext, canvas: &mut Canvas<'_>) -> bool {
        match self {
            Self::Clock(program) => program.render(ctx, canvas),
            Self::MatrixRain(program) => program.render(ctx, canvas),
            Self::Rainbow(program) => program.render(ctx, canvas),
            Self::Fire(program) => program.render(ctx, canvas),
            Self::Plasma(program) => program.render(ctx, canvas),
        }
    }

    /// Reset the program state
    pub fn reset(&mut self) {
        match self {
            Self::Clock(program) => Program::reset(program),
            Self::MatrixRain(program) => Program::reset(program),
            Self::Rainbow(program) => Program::reset(program),
            Self::Fire(program) => Program::reset(program),
            Self::Plasma(program) => Program::reset(program),
        }
    }

    pub fn id(&self) -> ProgramId {
        match self {
            Self::Clock(_) => ProgramId::Clock,
            Self::MatrixRain(_) => ProgramId::MatrixRain,
            Self::Rainbow(_) => ProgramId::Rainbow,
            Self::Fire(_) => ProgramId::Fire,
            Self::Plasma(_) => ProgramId::Plasma,
        }
    }
}
