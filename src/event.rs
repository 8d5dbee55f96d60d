//! Notifications from the network, portal and OTA collaborators.
//!
//! Callbacks that run outside the main loop (interrupt handlers, network
//! stack callbacks) push into an [`EventChannel`]; the engine drains it at
//! the start of every step. Code already on the main loop can call
//! `ClockEngine::notify` directly.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::settings::SettingsSubmission;

/// Failure class reported by the OTA collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtaError {
    Auth,
    Begin,
    Connect,
    Receive,
    End,
}

impl OtaError {
    /// Only a failed finalisation leaves the device in a state that needs a
    /// restart
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::End)
    }
}

/// Update progress as a percentage, clamped to 100
#[allow(clippy::cast_possible_truncation)]
pub const fn percent(written: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let value = written as u64 * 100 / total as u64;
    if value > 100 { 100 } else { value as u8 }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockEvent {
    /// Captive configuration portal is up
    PortalStarted,
    /// Station connected to the configured network
    NetworkConnected,
    /// Connection dropped; the portal takes over
    NetworkLost,
    /// New values posted through the portal
    SettingsSubmitted(SettingsSubmission),
    UpdateStarted,
    /// Update progress in percent; ignored unless an update was started
    UpdateProgress(u8),
    UpdateFinished,
    UpdateFailed(OtaError),
}

/// Event did not fit into the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueFull(pub ClockEvent);

/// Bounded event queue shared between callbacks and the main loop
pub struct EventChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<ClockEvent, SIZE>>>,
}

impl<const SIZE: usize> EventChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> EventSender<'_, SIZE> {
        EventSender { channel: self }
    }

    pub const fn receiver(&self) -> EventReceiver<'_, SIZE> {
        EventReceiver { channel: self }
    }

    /// Queue `event`, handing it back if the queue is full
    pub fn push(&self, event: ClockEvent) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            self.queue
                .borrow(cs)
                .borrow_mut()
                .push_back(event)
                .map_err(QueueFull)
        })
    }

    /// Oldest queued event
    pub fn pop(&self) -> Option<ClockEvent> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().pop_front())
    }

    pub fn is_empty(&self) -> bool {
        critical_section::with(|cs| self.queue.borrow(cs).borrow().is_empty())
    }
}

impl<const SIZE: usize> Default for EventChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of an [`EventChannel`]
#[derive(Clone, Copy)]
pub struct EventSender<'a, const SIZE: usize> {
    channel: &'a EventChannel<SIZE>,
}

impl<const SIZE: usize> EventSender<'_, SIZE> {
    pub fn send(&self, event: ClockEvent) -> Result<(), QueueFull> {
        self.channel.push(event)
    }
}

/// Consumer side of an [`EventChannel`]
#[derive(Clone, Copy)]
pub struct EventReceiver<'a, const SIZE: usize> {
    channel: &'a EventChannel<SIZE>,
}

impl<const SIZE: usize> EventReceiver<'_, SIZE> {
    pub fn receive(&self) -> Option<ClockEvent> {
        self.channel.pop()
    }
}
