//! Program scheduler
//!
//! Owns the program registry and decides which program renders. Selection
//! comes from settings or the configuration UI; the optional surprise mode
//! swaps the clock for a random animation at the top of every hour.

use embassy_time::Instant;
use fastrand::Rng;

use crate::canvas::Canvas;
use crate::log::log;
use crate::program::{ClockColors, FrameContext, PROGRAM_COUNT, ProgramId, ProgramSlot};
use crate::timezone::LocalTime;

/// Seconds into the hour during which the surprise program may start
const SURPRISE_WINDOW_SECONDS: u8 = 10;

pub struct ProgramScheduler {
    programs: [ProgramSlot; PROGRAM_COUNT],
    active: ProgramId,
    pending_first_frame: bool,
    /// Canvas still holds an animation frame the new program did not cover
    stale_frame: bool,
    matrix_available: bool,
    surprise: bool,
    rng: Rng,
}

impl ProgramScheduler {
    /// Create the registry with Clock active.
    ///
    /// Programs that need a matrix cannot be selected when
    /// `matrix_available` is false; surprise mode is then disabled too.
    pub fn new(colors: ClockColors, seed: u64, matrix_available: bool, surprise: bool) -> Self {
        let programs = ProgramId::ALL
            .map(|id| ProgramSlot::new(id, colors, seed.wrapping_add(id.index() as u64)));
        Self {
            programs,
            active: ProgramId::Clock,
            pending_first_frame: true,
            stale_frame: false,
            matrix_available,
            surprise,
            rng: Rng::with_seed(seed.rotate_left(17)),
        }
    }

    pub const fn active(&self) -> ProgramId {
        self.active
    }

    pub const fn surprise_enabled(&self) -> bool {
        self.surprise && self.matrix_available
    }

    /// Whether `id` can run on this layout
    pub const fn is_available(&self, id: ProgramId) -> bool {
        self.matrix_available || !id.requires_matrix()
    }

    /// Make `id` the active program.
    ///
    /// Returns `false` if it is already active or cannot run on this layout.
    pub fn select(&mut self, id: ProgramId) -> bool {
        if id == self.active || !self.is_available(id) {
            return false;
        }
        log!(
            "[ProgramScheduler.select] {} -> {}",
            self.active.as_str(),
            id.as_str()
        );
        self.stale_frame = self.active != ProgramId::Clock;
        self.active = id;
        self.programs[id.index()].reset();
        self.pending_first_frame = true;
        true
    }

    /// Select by registry index; out-of-range indexes are ignored
    pub fn select_index(&mut self, index: u8) -> bool {
        ProgramId::from_raw(index).is_some_and(|id| self.select(id))
    }

    /// Select by exact name; unknown names are ignored
    pub fn select_by_name(&mut self, name: &str) -> bool {
        ProgramId::parse_from_str(name).is_some_and(|id| self.select(id))
    }

    /// Force a full repaint on the next tick
    pub fn request_first_frame(&mut self) {
        self.pending_first_frame = true;
    }

    /// Run one scheduling step and render the active program.
    ///
    /// Returns `true` if the canvas was painted. A switch away from an
    /// animation blanks the canvas when the new program cannot paint yet.
    pub fn tick(
        &mut self,
        now: Instant,
        local_time: Option<LocalTime>,
        canvas: &mut Canvas<'_>,
    ) -> bool {
        if let Some(time) = local_time {
            self.rotate(&time);
        }

        let ctx = FrameContext {
            now,
            local_time,
            first_frame: self.pending_first_frame,
        };
        let painted = self.programs[self.active.index()].render(&ctx, canvas);
        if painted {
            self.pending_first_frame = false;
            self.stale_frame = false;
            return true;
        }
        if self.stale_frame {
            canvas.clear();
            self.stale_frame = false;
            return true;
        }
        false
    }

    fn rotate(&mut self, time: &LocalTime) {
        if !self.surprise_enabled() || time.minute != 0 {
            return;
        }
        if time.second < SURPRISE_WINDOW_SECONDS {
            if self.active == ProgramId::Clock {
                // Plasma is last in the registry and never picked
                let index = self.rng.usize(1..PROGRAM_COUNT - 1);
                let id = ProgramId::ALL[index];
                log!("[ProgramScheduler.rotate] surprise: {}", id.as_str());
                self.select(id);
            }
        } else if self.active != ProgramId::Clock {
            self.select(ProgramId::Clock);
        }
    }
}
