//! Connectivity and update state shown on the digits.

use embassy_time::{Duration, Instant};

use crate::color::{BLACK, RED, Rgb};

/// Firmware update phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OtaState {
    #[default]
    Idle,
    InProgress,
    /// Finalising failed; a restart is due at `at`
    RestartPending { at: Instant },
}

impl OtaState {
    /// Rendering is suspended in every phase but `Idle`
    pub const fn suspends_rendering(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeviceStatus {
    connected: bool,
    portal_active: bool,
    blink_at: Option<Instant>,
    blink_on: bool,
    ota: OtaState,
}

impl DeviceStatus {
    pub const fn new() -> Self {
        Self {
            connected: false,
            portal_active: false,
            blink_at: None,
            blink_on: false,
            ota: OtaState::Idle,
        }
    }

    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    pub const fn is_portal_active(&self) -> bool {
        self.portal_active
    }

    pub const fn ota(&self) -> OtaState {
        self.ota
    }

    pub fn set_ota(&mut self, state: OtaState) {
        self.ota = state;
    }

    /// Portal came up with red dashes on screen
    pub fn portal_started(&mut self, now: Instant) {
        self.portal_active = true;
        self.blink_at = Some(now);
        self.blink_on = true;
    }

    pub fn connected(&mut self) {
        self.connected = true;
        self.portal_active = false;
        self.blink_at = None;
    }

    pub fn disconnected(&mut self) {
        self.connected = false;
    }

    /// Next color of the waiting-for-network blink, if the blink period has
    /// elapsed
    pub fn blink(&mut self, now: Instant, period: Duration) -> Option<Rgb> {
        if self.connected || !self.portal_active {
            return None;
        }
        let due = self.blink_at.is_none_or(|last| {
            now.checked_duration_since(last)
                .is_some_and(|elapsed| elapsed >= period)
        });
        if !due {
            return None;
        }
        self.blink_at = Some(now);
        self.blink_on = !self.blink_on;
        Some(if self.blink_on { RED } else { BLACK })
    }
}
