//! Clock engine - the main orchestrator
//!
//! Owns the pixel buffer, the program scheduler, time sync state, the live
//! settings and the device status. One call to [`ClockEngine::step`] is one
//! iteration of the cooperative main loop.

use core::fmt::Write as _;

use embassy_time::Instant;
use heapless::String;

use crate::OutputDriver;
use crate::canvas::PixelBuffer;
use crate::color::{GREEN, RED, Rgb, YELLOW};
use crate::config::{EngineConfig, EngineTimings};
use crate::error::{Error, Result};
use crate::event::{ClockEvent, EventReceiver, OtaError};
use crate::font::CHAR_DASH;
use crate::layout::ClockLayout;
use crate::log::log;
use crate::program::ProgramId;
use crate::scheduler::ProgramScheduler;
use crate::segment::ProgressBar;
use crate::settings::{SETTINGS_CAPACITY, Settings, SettingsStore, SettingsSubmission};
use crate::status::{DeviceStatus, OtaState};
use crate::time_sync::{TimeSource, TimeSync};
use crate::timezone::{LocalTime, TimezoneEntry, find_timezone};

/// Room for [`ClockEngine::time_banner`]
pub const BANNER_CAPACITY: usize = 48;

/// What happened during one [`ClockEngine::step`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// The buffer was pushed to the output driver
    pub flushed: bool,
    /// The device should restart now
    pub restart: bool,
}

pub struct ClockEngine<O: OutputDriver, S: SettingsStore, const N: usize> {
    // External dependencies and configuration
    output: O,
    store: S,
    layout: &'static ClockLayout,
    brightness: u8,
    timings: EngineTimings,

    // Internal state
    buffer: PixelBuffer<N>,
    scheduler: ProgramScheduler,
    settings: Settings,
    time_sync: TimeSync,
    status: DeviceStatus,
    progress: ProgressBar,
}

impl<O: OutputDriver, S: SettingsStore, const N: usize> ClockEngine<O, S, N> {
    /// Create the engine, load persisted settings and show the boot screen.
    ///
    /// `N` must equal the layout's LED count.
    pub fn new(output: O, mut store: S, config: &EngineConfig) -> Result<Self> {
        let layout = config.layout;
        if usize::from(layout.led_count) != N {
            return Err(Error::LayoutMismatch {
                expected: layout.led_count,
                actual: N,
            });
        }

        let mut buf = [0u8; SETTINGS_CAPACITY];
        let mut settings = match store.load(&mut buf) {
            Ok(json) => Settings::from_json(json),
            Err(err) => {
                log!("[ClockEngine.new] settings not loaded: {}", err);
                Settings::default()
            }
        };

        let mut scheduler = ProgramScheduler::new(
            config.colors,
            config.seed,
            layout.has_matrix(),
            config.surprise,
        );
        if settings.program != ProgramId::Clock && !scheduler.select(settings.program) {
            log!(
                "[ClockEngine.new] program {} needs a matrix",
                settings.program.as_str()
            );
            settings.program = scheduler.active();
        }

        let mut engine = Self {
            output,
            store,
            layout,
            brightness: config.brightness,
            timings: config.timings,
            buffer: PixelBuffer::new(),
            scheduler,
            settings,
            time_sync: TimeSync::new(config.timings.time_retry, config.timings.time_update),
            status: DeviceStatus::new(),
            progress: ProgressBar::new(),
        };
        engine.write_all_digits(CHAR_DASH, config.colors.colon)?;
        Ok(engine)
    }

    /// Run one loop iteration.
    ///
    /// Order: portal blink, pending restart, then, while connected and no
    /// update is running, one render of the active program followed by a
    /// time resync.
    pub fn step<T: TimeSource + ?Sized>(&mut self, now: Instant, time_source: &mut T) -> StepOutcome {
        let mut outcome = StepOutcome::default();

        if let Some(color) = self.status.blink(now, self.timings.portal_blink) {
            outcome.flushed |= self.show_dashes(color);
        }

        if let OtaState::RestartPending { at } = self.status.ota() {
            outcome.restart = now >= at;
        }

        if self.status.is_connected() && !self.status.ota().suspends_rendering() {
            let local_time = self.local_time(now);
            let painted = {
                let mut canvas = self.buffer.canvas(self.layout);
                self.scheduler.tick(now, local_time, &mut canvas)
            };
            if painted {
                self.flush();
                outcome.flushed = true;
            }
            self.time_sync.poll(now, time_source);
        }

        outcome
    }

    /// Handle one collaborator event.
    ///
    /// Returns `true` if the display was flushed.
    pub fn notify(&mut self, event: ClockEvent, now: Instant) -> bool {
        match event {
            ClockEvent::PortalStarted => {
                log!("[ClockEngine.notify] portal started");
                self.status.portal_started(now);
                self.show_dashes(RED)
            }
            ClockEvent::NetworkConnected => {
                log!("[ClockEngine.notify] network connected");
                self.status.connected();
                self.show_dashes(GREEN)
            }
            ClockEvent::NetworkLost => {
                log!("[ClockEngine.notify] network lost");
                self.status.disconnected();
                false
            }
            ClockEvent::SettingsSubmitted(submission) => {
                if let Err(err) = self.apply_submission(&submission) {
                    log!("[ClockEngine.notify] settings not saved: {}", err);
                }
                false
            }
            ClockEvent::UpdateStarted => {
                log!("[ClockEngine.notify] update started");
                self.status.set_ota(OtaState::InProgress);
                self.progress.reset();
                self.clear();
                true
            }
            ClockEvent::UpdateProgress(percentage) => {
                if self.status.ota() != OtaState::InProgress {
                    return false;
                }
                match self.write_progress_bar(percentage, YELLOW) {
                    Ok(flushed) => flushed,
                    Err(err) => {
                        log!("[ClockEngine.notify] progress not drawn: {}", err);
                        false
                    }
                }
            }
            ClockEvent::UpdateFinished => {
                log!("[ClockEngine.notify] update finished");
                self.status.set_ota(OtaState::Idle);
                self.scheduler.request_first_frame();
                false
            }
            ClockEvent::UpdateFailed(error) => {
                self.update_failed(error, now);
                false
            }
        }
    }

    /// Handle every queued event.
    ///
    /// Returns `true` if any of them flushed the display.
    pub fn drain<const SIZE: usize>(&mut self, events: &EventReceiver<'_, SIZE>, now: Instant) -> bool {
        let mut flushed = false;
        while let Some(event) = events.receive() {
            flushed |= self.notify(event, now);
        }
        flushed
    }

    /// Draw `character` on every digit and flush
    pub fn write_all_digits(&mut self, character: u8, color: Rgb) -> Result<()> {
        self.buffer
            .canvas(self.layout)
            .write_all_digits(character, color)?;
        self.flush();
        Ok(())
    }

    /// Draw the progress bar and flush.
    ///
    /// Returns `false` without flushing when `percentage` was already shown.
    pub fn write_progress_bar(&mut self, percentage: u8, color: Rgb) -> Result<bool> {
        let mut canvas = self.buffer.canvas(self.layout);
        if !self.progress.draw(&mut canvas, percentage, color)? {
            return Ok(false);
        }
        self.flush();
        Ok(true)
    }

    /// Apply submitted values and persist the result.
    ///
    /// Timezone names match case-insensitively, program names exactly.
    /// Unknown names are ignored.
    pub fn apply_submission(&mut self, submission: &SettingsSubmission) -> Result<()> {
        let mut changed = false;

        if let Some(name) = submission.timezone.as_deref() {
            match find_timezone(name) {
                Some(index) => {
                    log!("[ClockEngine.apply_submission] time zone: {}", name);
                    self.settings.timezone = index;
                    changed = true;
                }
                None => log!("[ClockEngine.apply_submission] unknown time zone: {}", name),
            }
        }
        if let Some(name) = submission.program.as_deref() {
            if self.scheduler.select_by_name(name) {
                self.settings.program = self.scheduler.active();
                changed = true;
            }
        }

        if !changed {
            return Ok(());
        }
        let mut buf = [0u8; SETTINGS_CAPACITY];
        let len = self.settings.to_json(&mut buf)?;
        self.store.save(&buf[..len])
    }

    /// Select a program by registry index; out-of-range or unavailable
    /// indexes are ignored
    pub fn select_program(&mut self, index: u8) -> bool {
        let selected = self.scheduler.select_index(index);
        if selected {
            self.settings.program = self.scheduler.active();
        }
        selected
    }

    /// Current local time in the selected zone, `None` before the first sync
    pub fn local_time(&self, now: Instant) -> Option<LocalTime> {
        let utc = self.time_sync.now(now)?;
        self.settings.timezone_entry().zone.local_time(utc)
    }

    /// One-line status, `"HH:MM:SS, <zone>"` or a notice while unsynced
    pub fn time_banner(&self, now: Instant) -> String<BANNER_CAPACITY> {
        let mut banner = String::new();
        let written = match self.local_time(now) {
            Some(time) => write!(
                banner,
                "{:02}:{:02}:{:02}, {}",
                time.hour,
                time.minute,
                time.second,
                self.timezone().name
            ),
            None => write!(banner, "Waiting for NTP sync"),
        };
        if written.is_err() {
            log!("[ClockEngine.time_banner] banner truncated");
        }
        banner
    }

    pub const fn active_program(&self) -> ProgramId {
        self.scheduler.active()
    }

    pub fn timezone(&self) -> &'static TimezoneEntry {
        self.settings.timezone_entry()
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    pub const fn status(&self) -> &DeviceStatus {
        &self.status
    }

    pub const fn is_synced(&self) -> bool {
        self.time_sync.is_synced()
    }

    pub const fn timings(&self) -> &EngineTimings {
        &self.timings
    }

    pub const fn layout(&self) -> &'static ClockLayout {
        self.layout
    }

    pub fn pixels(&self) -> &[Rgb] {
        self.buffer.pixels()
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Blank the display and flush
    pub fn clear(&mut self) {
        self.buffer.canvas(self.layout).clear();
        self.flush();
    }

    fn update_failed(&mut self, error: OtaError, now: Instant) {
        log!("[ClockEngine.update_failed] update failed: {:?}", error);
        if error.is_fatal() {
            self.status.set_ota(OtaState::RestartPending {
                at: now + self.timings.restart_delay,
            });
        } else {
            self.status.set_ota(OtaState::Idle);
            self.scheduler.request_first_frame();
        }
    }

    fn show_dashes(&mut self, color: Rgb) -> bool {
        match self.write_all_digits(CHAR_DASH, color) {
            Ok(()) => true,
            Err(err) => {
                log!("[ClockEngine.show_dashes] {}", err);
                false
            }
        }
    }

    fn flush(&mut self) {
        self.output.write(self.buffer.pixels(), self.brightness);
    }
}
