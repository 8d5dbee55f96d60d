use embassy_time::Duration;

use crate::layout::{ClockLayout, SEGMENT_CLOCK};
use crate::program::ClockColors;

/// Luminance passed to the output driver unless configured otherwise
pub const DEFAULT_BRIGHTNESS: u8 = 32;

/// Timing knobs of the engine and the outer loop
#[derive(Debug, Clone, Copy)]
pub struct EngineTimings {
    /// Period of the red/black dash blink while the portal waits
    pub portal_blink: Duration,
    /// Time sync retry interval until the first success
    pub time_retry: Duration,
    /// Time sync interval after the first success
    pub time_update: Duration,
    /// Delay between a fatal update failure and the restart request
    pub restart_delay: Duration,
    /// Minimum pause after a flush so other tasks get to run
    pub flush_yield: Duration,
    /// Period of the main loop
    pub loop_period: Duration,
}

impl Default for EngineTimings {
    fn default() -> Self {
        Self {
            portal_blink: Duration::from_millis(1000),
            time_retry: Duration::from_secs(5),
            time_update: Duration::from_secs(10 * 60),
            restart_delay: Duration::from_secs(2),
            flush_yield: Duration::from_millis(2),
            loop_period: Duration::from_millis(10),
        }
    }
}

/// Configuration for the clock engine
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub layout: &'static ClockLayout,
    pub colors: ClockColors,
    pub brightness: u8,
    /// Swap the clock for a random animation at the top of the hour
    pub surprise: bool,
    /// Seed for the animation RNGs
    pub seed: u64,
    pub timings: EngineTimings,
}

impl EngineConfig {
    /// Defaults for `layout`
    pub fn for_layout(layout: &'static ClockLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            layout: &SEGMENT_CLOCK,
            colors: ClockColors::default(),
            brightness: DEFAULT_BRIGHTNESS,
            surprise: true,
            seed: 0x5eed_c10c,
            timings: EngineTimings::default(),
        }
    }
}
