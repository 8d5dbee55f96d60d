//! Timezones with daylight saving rules.
//!
//! A zone is a pair of [`TimeChangeRule`]s: the rule that starts daylight
//! time and the rule that starts standard time. A zone without DST uses the
//! same rule twice.

use time::{Date, Month, OffsetDateTime, Weekday};

const SECS_PER_DAY: i64 = 86_400;

/// Units-safe wrapper for Unix timestamps (seconds since 1970-01-01 00:00:00 UTC)
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct UnixSeconds(pub i64);

impl UnixSeconds {
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

/// Which occurrence of the weekday in the month a rule fires on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Week {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

/// When a zone switches offset, and to which offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeChangeRule {
    /// Abbreviation shown while the rule is in effect
    pub abbrev: &'static str,
    pub week: Week,
    pub weekday: Weekday,
    pub month: Month,
    /// Local hour of the change
    pub hour: u8,
    /// Offset from UTC in minutes while the rule is in effect
    pub offset_minutes: i16,
}

impl TimeChangeRule {
    /// Local wall-clock moment of the change in `year`, as if it were UTC
    fn local_transition(&self, year: i32) -> Option<i64> {
        let (mut year, mut month) = (year, self.month);
        if self.week == Week::Last {
            // Count back from the first matching weekday of the next month
            month = month.next();
            if month == Month::January {
                year += 1;
            }
        }

        let first = Date::from_calendar_date(year, month, 1).ok()?;
        let days_ahead = (7 + i64::from(self.weekday.number_days_from_sunday())
            - i64::from(first.weekday().number_days_from_sunday()))
            % 7;
        let weeks = match self.week {
            Week::First | Week::Last => 0,
            Week::Second => 1,
            Week::Third => 2,
            Week::Fourth => 3,
        };
        let mut days = days_ahead + weeks * 7;
        if self.week == Week::Last {
            days -= 7;
        }

        let midnight = first.midnight().assume_utc().unix_timestamp();
        Some(midnight + days * SECS_PER_DAY + i64::from(self.hour) * 3600)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone {
    dst: TimeChangeRule,
    std: TimeChangeRule,
}

impl Timezone {
    pub const fn new(dst: TimeChangeRule, std: TimeChangeRule) -> Self {
        Self { dst, std }
    }

    /// Zone that never observes daylight time
    pub const fn fixed(rule: TimeChangeRule) -> Self {
        Self {
            dst: rule,
            std: rule,
        }
    }

    pub const fn observes_dst(&self) -> bool {
        self.dst.offset_minutes != self.std.offset_minutes
    }

    /// Whether daylight time is in effect at `utc`
    pub fn is_dst(&self, utc: UnixSeconds) -> bool {
        if !self.observes_dst() {
            return false;
        }
        let Ok(moment) = OffsetDateTime::from_unix_timestamp(utc.as_i64()) else {
            return false;
        };
        let year = moment.year();
        let (Some(dst_local), Some(std_local)) = (
            self.dst.local_transition(year),
            self.std.local_transition(year),
        ) else {
            return false;
        };

        // Daylight time starts on standard wall-clock time and ends on
        // daylight wall-clock time
        let dst_start = dst_local - i64::from(self.std.offset_minutes) * 60;
        let std_start = std_local - i64::from(self.dst.offset_minutes) * 60;
        let utc = utc.as_i64();

        if std_start > dst_start {
            utc >= dst_start && utc < std_start
        } else {
            // Southern hemisphere
            !(utc >= std_start && utc < dst_start)
        }
    }

    /// Rule in effect at `utc`
    pub fn rule_at(&self, utc: UnixSeconds) -> &TimeChangeRule {
        if self.is_dst(utc) { &self.dst } else { &self.std }
    }

    /// Shift `utc` to local wall-clock seconds
    pub fn to_local(&self, utc: UnixSeconds) -> UnixSeconds {
        let offset = i64::from(self.rule_at(utc).offset_minutes) * 60;
        UnixSeconds(utc.as_i64() + offset)
    }

    /// Local wall-clock fields at `utc`
    pub fn local_time(&self, utc: UnixSeconds) -> Option<LocalTime> {
        let rule = self.rule_at(utc);
        let local = utc.as_i64() + i64::from(rule.offset_minutes) * 60;
        let moment = OffsetDateTime::from_unix_timestamp(local).ok()?;
        Some(LocalTime {
            hour: moment.hour(),
            minute: moment.minute(),
            second: moment.second(),
            abbrev: rule.abbrev,
        })
    }
}

/// Wall-clock fields handed to the programs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub abbrev: &'static str,
}

/// Named zone as offered to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneEntry {
    pub name: &'static str,
    pub zone: Timezone,
}

const fn rule(
    abbrev: &'static str,
    week: Week,
    month: Month,
    offset_minutes: i16,
) -> TimeChangeRule {
    TimeChangeRule {
        abbrev,
        week,
        weekday: Weekday::Sunday,
        month,
        hour: 2,
        offset_minutes,
    }
}

// US zones: daylight time from the second Sunday of March to the first
// Sunday of November
const EDT: TimeChangeRule = rule("EDT", Week::Second, Month::March, -240);
const EST: TimeChangeRule = rule("EST", Week::First, Month::November, -300);
const CDT: TimeChangeRule = rule("CDT", Week::Second, Month::March, -300);
const CST: TimeChangeRule = rule("CST", Week::First, Month::November, -360);
const MDT: TimeChangeRule = rule("MDT", Week::Second, Month::March, -360);
const MST: TimeChangeRule = rule("MST", Week::First, Month::November, -420);
const PDT: TimeChangeRule = rule("PDT", Week::Second, Month::March, -420);
const PST: TimeChangeRule = rule("PST", Week::First, Month::November, -480);

/// Zones selectable from the configuration UI; the first one is the default
pub static TIMEZONES: [TimezoneEntry; 5] = [
    TimezoneEntry {
        name: "America/Eastern",
        zone: Timezone::new(EDT, EST),
    },
    TimezoneEntry {
        name: "America/Central",
        zone: Timezone::new(CDT, CST),
    },
    TimezoneEntry {
        name: "America/Mountain",
        zone: Timezone::new(MDT, MST),
    },
    TimezoneEntry {
        name: "America/Arizona",
        zone: Timezone::fixed(MST),
    },
    TimezoneEntry {
        name: "America/Pacific",
        zone: Timezone::new(PDT, PST),
    },
];

/// Position of the zone called `name`, ignoring ASCII case
pub fn find_timezone(name: &str) -> Option<usize> {
    TIMEZONES
        .iter()
        .position(|entry| entry.name.eq_ignore_ascii_case(name))
}
