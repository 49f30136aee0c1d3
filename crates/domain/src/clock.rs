// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time and calendar utilities.
//!
//! ## Invariants
//!
//! - All comparisons are minute-granular; sub-minute precision is discarded
//! - "Now" is always interpreted in the club's IANA timezone
//! - Dates and slot times are zone-less wall-clock values scoped to the venue

use crate::entities::Club;
use crate::error::DomainError;
use crate::types::SlotTime;
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;

/// Source of the current instant.
///
/// Rules never read the system clock themselves; callers pass the instant a
/// `Clock` produced so evaluations stay repeatable.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Parses an IANA timezone name.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimezone` if the name is not a known zone.
pub fn parse_timezone(name: &str) -> Result<Tz, DomainError> {
    name.parse::<Tz>()
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}

/// Returns `now` as a wall-clock moment in `timezone`, truncated to the minute.
///
/// A missing, empty or unknown timezone falls back to the system's local
/// zone. That path is best-effort only.
#[must_use]
pub fn current_moment_in_zone(timezone: Option<&str>, now: DateTime<Utc>) -> NaiveDateTime {
    let zoned: NaiveDateTime = match timezone.filter(|tz| !tz.is_empty()).map(parse_timezone) {
        Some(Ok(tz)) => now.with_timezone(&tz).naive_local(),
        _ => now.with_timezone(&Local).naive_local(),
    };
    truncate_to_minute(zoned)
}

/// Returns the club's current wall-clock moment.
#[must_use]
pub fn club_now(club: &Club, now: DateTime<Utc>) -> NaiveDateTime {
    current_moment_in_zone(club.timezone.as_deref(), now)
}

/// Returns today's date in the club's zone.
#[must_use]
pub fn club_today(club: &Club, now: DateTime<Utc>) -> NaiveDate {
    club_now(club, now).date()
}

fn truncate_to_minute(moment: NaiveDateTime) -> NaiveDateTime {
    moment
        .with_second(0)
        .and_then(|m| m.with_nanosecond(0))
        .unwrap_or(moment)
}

/// Combines a schedule date and slot time into a wall-clock moment.
#[must_use]
pub fn slot_moment(date: NaiveDate, time: SlotTime) -> NaiveDateTime {
    date.and_time(time.as_naive())
}

/// Returns the weekday index of `date`, 0 = Sunday through 6 = Saturday.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn weekday_index(date: NaiveDate) -> u8 {
    // num_days_from_sunday is always in 0..=6
    date.weekday().num_days_from_sunday() as u8
}

/// Formats a slot time for display with a strftime-style pattern.
#[must_use]
pub fn time_string_to_display(time: SlotTime, out_format: &str) -> String {
    time.to_display(out_format)
}

/// An inclusive range of calendar dates.
///
/// The range is a value: iterating it never consumes it, so the same range
/// can be walked any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range covering `start` through `end`, both inclusive.
    ///
    /// A range whose end precedes its start is empty.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// An empty range.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            start: NaiveDate::MAX,
            end: NaiveDate::MIN,
        }
    }

    /// Returns whether the range yields no dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Returns whether `date` lies inside the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns a fresh iterator over the range.
    #[must_use]
    pub const fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a `DateRange`.
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DateRangeIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current: NaiveDate = self.next.filter(|d| *d <= self.end)?;
        self.next = current.succ_opt();
        Some(current)
    }
}

/// Enumerates the dates from `start` through `end`, both inclusive.
#[must_use]
pub const fn enumerate_dates(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange::new(start, end)
}
