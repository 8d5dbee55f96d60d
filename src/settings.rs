//! Persisted user settings.
//!
//! Stored as a small JSON document, `{"timezone":"<name>","program":"<name>"}`.
//! Timezone names match case-insensitively, program names exactly.

use heapless::String;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::log::log;
use crate::program::ProgramId;
use crate::timezone::{TIMEZONES, TimezoneEntry, find_timezone};

/// Room for a serialized settings document
pub const SETTINGS_CAPACITY: usize = 128;

/// Longest name accepted from a submission
pub const NAME_CAPACITY: usize = 32;

/// Storage medium for the settings document (flash file, NVS, ...)
pub trait SettingsStore {
    /// Read the stored document into `buf`, returning the filled part
    fn load<'b>(&mut self, buf: &'b mut [u8]) -> Result<&'b [u8]>;

    /// Replace the stored document
    fn save(&mut self, json: &[u8]) -> Result<()>;
}

#[derive(Deserialize)]
struct SettingsDocument<'a> {
    #[serde(default, borrow)]
    timezone: Option<&'a str>,
    #[serde(default, borrow)]
    program: Option<&'a str>,
}

#[derive(Serialize)]
struct SettingsRecord<'a> {
    timezone: &'a str,
    program: &'a str,
}

/// Live selection mirrored into storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Index into [`TIMEZONES`]
    pub timezone: usize,
    pub program: ProgramId,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timezone: 0,
            program: ProgramId::Clock,
        }
    }
}

impl Settings {
    /// Parse a stored document; unreadable or unknown values fall back to
    /// the defaults
    pub fn from_json(json: &[u8]) -> Self {
        let mut settings = Self::default();
        let document = match serde_json_core::from_slice::<SettingsDocument<'_>>(json) {
            Ok((document, _)) => document,
            Err(_) => {
                log!("[Settings.from_json] failed to read settings");
                return settings;
            }
        };

        if let Some(name) = document.timezone {
            match find_timezone(name) {
                Some(index) => {
                    settings.timezone = index;
                    log!("[Settings.from_json] loaded time zone: {}", name);
                }
                None => log!("[Settings.from_json] unknown time zone: {}", name),
            }
        }
        if let Some(program) = document.program.and_then(ProgramId::parse_from_str) {
            settings.program = program;
        }
        settings
    }

    /// Serialize into `buf`, returning the written length
    pub fn to_json(&self, buf: &mut [u8]) -> Result<usize> {
        let record = SettingsRecord {
            timezone: self.timezone_entry().name,
            program: self.program.as_str(),
        };
        serde_json_core::to_slice(&record, buf).map_err(|_| Error::SettingsSerialize)
    }

    pub fn timezone_entry(&self) -> &'static TimezoneEntry {
        TIMEZONES.get(self.timezone).unwrap_or(&TIMEZONES[0])
    }
}

/// Values submitted through the configuration UI
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsSubmission {
    pub timezone: Option<String<NAME_CAPACITY>>,
    pub program: Option<String<NAME_CAPACITY>>,
}

impl SettingsSubmission {
    /// Build a submission; names longer than [`NAME_CAPACITY`] are dropped
    pub fn new(timezone: Option<&str>, program: Option<&str>) -> Self {
        Self {
            timezone: timezone.and_then(bounded),
            program: program.and_then(bounded),
        }
    }

    /// Parse a submission posted as a settings document
    pub fn from_json(json: &[u8]) -> Result<Self> {
        let (document, _) = serde_json_core::from_slice::<SettingsDocument<'_>>(json)
            .map_err(|_| Error::SettingsParse)?;
        Ok(Self::new(document.timezone, document.program))
    }
}

fn bounded(value: &str) -> Option<String<NAME_CAPACITY>> {
    let mut out = String::new();
    out.push_str(value).ok()?;
    Some(out)
}
