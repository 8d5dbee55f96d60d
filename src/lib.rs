#![no_std]

pub mod canvas;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod font;
pub mod frame_scheduler;
pub mod layout;
pub(crate) mod log;
pub mod math8;
pub mod program;
pub mod scheduler;
pub mod segment;
pub mod settings;
pub mod status;
pub mod time_sync;
pub mod timezone;

pub use canvas::{Canvas, PixelBuffer};
pub use config::{EngineConfig, EngineTimings};
pub use engine::{ClockEngine, StepOutcome};
pub use error::{Error, Result};
pub use event::{ClockEvent, EventChannel, EventReceiver, EventSender, OtaError};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use layout::{ClockLayout, MATRIX_CLOCK, SEGMENT_CLOCK};
pub use program::{ClockColors, ProgramId};
pub use scheduler::ProgramScheduler;
pub use settings::{Settings, SettingsStore, SettingsSubmission};
pub use time_sync::{TimeSource, TimeSync};
pub use timezone::{TIMEZONES, Timezone, UnixSeconds};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The clock engine is generic over this trait.
pub trait OutputDriver {
    /// Push a whole frame to the LEDs, scaled to `brightness` (0-255)
    fn write(&mut self, colors: &[Rgb], brightness: u8);
}
