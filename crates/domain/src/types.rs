// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Value types shared by every entity: times of day, time filters and the
//! closed status vocabularies used on the wire.

use crate::error::DomainError;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A wall-clock time of day with minute precision.
///
/// Times are zone-less: they are already scoped to the venue they belong to.
/// On the wire they are zero-padded 24-hour `HH:mm` strings, so the
/// lexicographic and chronological orders agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotTime(NaiveTime);

impl SlotTime {
    /// Creates a `SlotTime` from an hour and minute.
    ///
    /// # Errors
    ///
    /// Returns an error if the hour or minute is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, DomainError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidSlotTime {
                value: format!("{hour}:{minute}"),
                error: String::from("hour or minute out of range"),
            })
    }

    /// Parses an `HH:mm` (or `HH:mm:ss`) string. Seconds are discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid time of day.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map(Self::truncate)
            .map_err(|e| DomainError::InvalidSlotTime {
                value: value.to_string(),
                error: e.to_string(),
            })
    }

    /// Builds a `SlotTime` from any `NaiveTime`, dropping sub-minute precision.
    #[must_use]
    pub fn truncate(time: NaiveTime) -> Self {
        Self(
            NaiveTime::from_hms_opt(time.hour(), time.minute(), 0)
                .unwrap_or(NaiveTime::MIN),
        )
    }

    /// Returns the underlying `NaiveTime`.
    #[must_use]
    pub const fn as_naive(&self) -> NaiveTime {
        self.0
    }

    /// Returns whether the time is before noon.
    #[must_use]
    pub fn is_morning(&self) -> bool {
        self.0.hour() < 12
    }

    /// Formats the time with a strftime-style pattern, e.g. `%-I:%M %p`.
    #[must_use]
    pub fn to_display(&self, out_format: &str) -> String {
        self.0.format(out_format).to_string()
    }
}

impl std::fmt::Display for SlotTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for SlotTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SlotTime {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SlotTime> for String {
    fn from(value: SlotTime) -> Self {
        value.to_string()
    }
}

/// An open-ended part of the day a request may target instead of a concrete
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeRange {
    /// Any time of the day.
    AnyTime,
    /// Any time strictly before noon.
    Morning,
    /// Any time from noon onwards.
    Afternoon,
}

impl TimeRange {
    /// Returns the wire token for this range.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AnyTime => "any",
            Self::Morning => "any_morning",
            Self::Afternoon => "any_afternoon",
        }
    }

    /// Returns whether `time` falls inside this range.
    #[must_use]
    pub fn contains(&self, time: SlotTime) -> bool {
        match self {
            Self::AnyTime => true,
            Self::Morning => time.is_morning(),
            Self::Afternoon => !time.is_morning(),
        }
    }
}

impl FromStr for TimeRange {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(Self::AnyTime),
            "any_morning" => Ok(Self::Morning),
            "any_afternoon" => Ok(Self::Afternoon),
            _ => Err(DomainError::InvalidTimeFilter(s.to_string())),
        }
    }
}

impl TryFrom<String> for TimeRange {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeRange> for String {
    fn from(value: TimeRange) -> Self {
        value.as_str().to_string()
    }
}

/// The time constraint a user browses open schedules with.
///
/// `Morning` keeps slots before 12:00, `Afternoon` keeps 12:00 and later, and
/// `Exact` keeps a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeFilter {
    /// No time constraint.
    #[default]
    Any,
    /// Slots before noon.
    Morning,
    /// Slots at or after noon.
    Afternoon,
    /// Exactly this slot.
    Exact(SlotTime),
}

impl TimeFilter {
    /// Returns whether `time` passes the filter.
    #[must_use]
    pub fn matches(&self, time: SlotTime) -> bool {
        match self {
            Self::Any => true,
            Self::Morning => time.is_morning(),
            Self::Afternoon => !time.is_morning(),
            Self::Exact(exact) => *exact == time,
        }
    }
}

impl From<TimeRange> for TimeFilter {
    fn from(range: TimeRange) -> Self {
        match range {
            TimeRange::AnyTime => Self::Any,
            TimeRange::Morning => Self::Morning,
            TimeRange::Afternoon => Self::Afternoon,
        }
    }
}

impl FromStr for TimeFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(range) = s.parse::<TimeRange>() {
            return Ok(range.into());
        }
        SlotTime::parse(s)
            .map(Self::Exact)
            .map_err(|_| DomainError::InvalidTimeFilter(s.to_string()))
    }
}

impl std::fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "{}", TimeRange::AnyTime.as_str()),
            Self::Morning => write!(f, "{}", TimeRange::Morning.as_str()),
            Self::Afternoon => write!(f, "{}", TimeRange::Afternoon.as_str()),
            Self::Exact(time) => write!(f, "{time}"),
        }
    }
}

impl TryFrom<String> for TimeFilter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeFilter> for String {
    fn from(value: TimeFilter) -> Self {
        value.to_string()
    }
}

/// Whether a venue is a physical facility or a virtual one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueType {
    /// A physical set of courts.
    Real,
    /// A virtual venue (lessons, online sessions).
    Virtual,
}

/// Activation status of a venue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VenueStatus {
    /// The venue is open for scheduling.
    Activated,
    /// Any other status reported by the backend.
    Other(String),
}

impl From<String> for VenueStatus {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("activated") {
            Self::Activated
        } else {
            Self::Other(value)
        }
    }
}

impl From<VenueStatus> for String {
    fn from(value: VenueStatus) -> Self {
        match value {
            VenueStatus::Activated => Self::from("activated"),
            VenueStatus::Other(other) => other,
        }
    }
}

/// Status of a schedule record.
///
/// `Open` and `Canceled` both denote a claimable slot: a canceled confirmed
/// slot becomes open again without a separate transition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScheduleStatus {
    /// Available to claim.
    Open,
    /// Confirmed for its owner.
    Confirm,
    /// Canceled by its owner; claimable again.
    Canceled,
    /// Any other backend status.
    Other(String),
}

impl ScheduleStatus {
    /// Converts this status to its wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "OPEN",
            Self::Confirm => "CONFIRM",
            Self::Canceled => "CANCELED",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for ScheduleStatus {
    fn from(value: String) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "OPEN" => Self::Open,
            "CONFIRM" => Self::Confirm,
            "CANCELED" => Self::Canceled,
            _ => Self::Other(value),
        }
    }
}

impl From<ScheduleStatus> for String {
    fn from(value: ScheduleStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Publication status of a request template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TemplateStatus {
    /// Users may request slots against the template.
    Published,
    /// Any other status (draft, archived).
    Other(String),
}

impl From<String> for TemplateStatus {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("published") {
            Self::Published
        } else {
            Self::Other(value)
        }
    }
}

impl From<TemplateStatus> for String {
    fn from(value: TemplateStatus) -> Self {
        match value {
            TemplateStatus::Published => Self::from("published"),
            TemplateStatus::Other(other) => other,
        }
    }
}

/// Billing status of a club subscription.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubscriptionStatus {
    /// Paid and current.
    Active,
    /// Any other status (past due, canceled, incomplete).
    Other(String),
}

impl From<String> for SubscriptionStatus {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("active") {
            Self::Active
        } else {
            Self::Other(value)
        }
    }
}

impl From<SubscriptionStatus> for String {
    fn from(value: SubscriptionStatus) -> Self {
        match value {
            SubscriptionStatus::Active => Self::from("ACTIVE"),
            SubscriptionStatus::Other(other) => other,
        }
    }
}

/// Gender used by profiles and eligibility constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// No gender constraint.
    Mixed,
}

impl Gender {
    /// Converts this gender to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Who may register for a club event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegRestrictType {
    /// Every club member.
    #[default]
    OpenToAll,
    /// Only guests of the event's sub-club.
    OnlyGuests,
    /// Only members of one of the invited circles.
    OnlyCircleMembers,
    /// Only members living in one of the listed areas.
    ParticularArea,
}
