//! Main loop pacing.
//!
//! Provides portable loop timing without async/await or platform-specific
//! timers. The caller is responsible for sleeping between ticks and for
//! restarting the device when asked to.

use embassy_time::{Duration, Instant};

use crate::OutputDriver;
use crate::engine::ClockEngine;
use crate::event::EventReceiver;
use crate::settings::SettingsStore;
use crate::time_sync::TimeSource;

/// Result of a loop tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick.
    ///
    /// Never shorter than the flush yield after a tick that flushed.
    pub sleep_duration: Duration,
    /// The engine requested a device restart.
    pub restart: bool,
}

/// Drives a [`ClockEngine`] at a fixed loop period.
///
/// Each tick drains queued events, steps the engine and computes how long
/// the caller should sleep.
///
/// # Usage
///
/// ```ignore
/// static EVENTS: EventChannel<8> = EventChannel::new();
///
/// let engine = ClockEngine::<_, _, SEGMENT_CLOCK_LEDS>::new(driver, store, &config)?;
/// let mut scheduler = FrameScheduler::new(engine, ntp, EVENTS.receiver());
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     if result.restart {
///         reset();
///     }
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, O, S, T, const N: usize, const EVENTS: usize>
where
    O: OutputDriver,
    S: SettingsStore,
    T: TimeSource,
{
    engine: ClockEngine<O, S, N>,
    time_source: T,
    events: EventReceiver<'a, EVENTS>,
    next_frame: Instant,
    frame_duration: Duration,
    flush_yield: Duration,
}

impl<'a, O, S, T, const N: usize, const EVENTS: usize> FrameScheduler<'a, O, S, T, N, EVENTS>
where
    O: OutputDriver,
    S: SettingsStore,
    T: TimeSource,
{
    /// Create a scheduler using the engine's configured loop period.
    pub fn new(engine: ClockEngine<O, S, N>, time_source: T, events: EventReceiver<'a, EVENTS>) -> Self {
        let timings = *engine.timings();
        Self {
            engine,
            time_source,
            events,
            next_frame: Instant::from_millis(0),
            frame_duration: timings.loop_period,
            flush_yield: timings.flush_yield,
        }
    }

    /// Run one loop iteration and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Delivers queued events to the engine
    /// 3. Steps the engine
    /// 4. Returns the deadline for the next tick
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog after a long stall instead of bursting to catch up
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let mut flushed = self.engine.drain(&self.events, now);
        let outcome = self.engine.step(now, &mut self.time_source);
        flushed |= outcome.flushed;

        self.next_frame += self.frame_duration;

        let mut sleep_duration = self
            .next_frame
            .checked_duration_since(now)
            .unwrap_or(Duration::from_millis(0));
        if flushed && sleep_duration < self.flush_yield {
            sleep_duration = self.flush_yield;
        }

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            restart: outcome.restart,
        }
    }

    pub fn engine(&self) -> &ClockEngine<O, S, N> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ClockEngine<O, S, N> {
        &mut self.engine
    }

    pub fn time_source_mut(&mut self) -> &mut T {
        &mut self.time_source
    }
}
