//! Wall-clock synchronisation against an external time source.
//!
//! After the first successful fetch the clock keeps running on the monotonic
//! [`Instant`] between syncs. Failed fetches leave the previous anchor alone.

use embassy_time::{Duration, Instant};

use crate::log::log;
use crate::timezone::UnixSeconds;

/// Supplier of the current UTC time, typically an NTP client
pub trait TimeSource {
    /// Fetch the current time; `None` when no answer was obtained
    fn fetch(&mut self) -> Option<UnixSeconds>;
}

#[derive(Debug, Clone, Copy)]
struct Anchor {
    utc: UnixSeconds,
    at: Instant,
}

/// Synchronisation state and retry policy
#[derive(Debug, Clone)]
pub struct TimeSync {
    anchor: Option<Anchor>,
    last_attempt: Option<Instant>,
    retry_interval: Duration,
    update_interval: Duration,
}

impl TimeSync {
    /// `retry_interval` applies until the first success, `update_interval`
    /// afterwards
    pub const fn new(retry_interval: Duration, update_interval: Duration) -> Self {
        Self {
            anchor: None,
            last_attempt: None,
            retry_interval,
            update_interval,
        }
    }

    pub const fn is_synced(&self) -> bool {
        self.anchor.is_some()
    }

    /// Current UTC time, if a sync ever succeeded
    #[allow(clippy::cast_possible_wrap)]
    pub fn now(&self, now: Instant) -> Option<UnixSeconds> {
        let anchor = self.anchor?;
        let elapsed = now
            .checked_duration_since(anchor.at)
            .map_or(0, |elapsed| elapsed.as_secs());
        Some(UnixSeconds(anchor.utc.as_i64() + elapsed as i64))
    }

    /// Query `source` if the current interval has elapsed.
    ///
    /// Returns `true` when a fetch succeeded during this call.
    pub fn poll<T: TimeSource + ?Sized>(&mut self, now: Instant, source: &mut T) -> bool {
        let interval = if self.is_synced() {
            self.update_interval
        } else {
            self.retry_interval
        };
        let due = self.last_attempt.is_none_or(|last| {
            now.checked_duration_since(last)
                .is_some_and(|elapsed| elapsed >= interval)
        });
        if !due {
            return false;
        }
        self.last_attempt = Some(now);

        let Some(utc) = source.fetch() else {
            log!("[TimeSync.poll] time update failed");
            return false;
        };

        match self.now(now) {
            Some(before) => {
                log!(
                    "[TimeSync.poll] adjusted local clock by {}s",
                    utc.as_i64() - before.as_i64()
                );
            }
            None => {
                log!("[TimeSync.poll] initial time sync at {}", utc.as_i64());
            }
        }
        self.anchor = Some(Anchor { utc, at: now });
        true
    }
}
