// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Externally owned records the rules evaluate.
//!
//! Every entity mirrors the JSON shape of the remote platform (camelCase
//! field names). The rules only ever read these records.

use crate::types::{
    Gender, RegRestrictType, ScheduleStatus, SlotTime, SubscriptionStatus, TemplateStatus,
    TimeRange, VenueStatus, VenueType,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A club: the tenant that owns venues, circles and events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    /// Club identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// IANA timezone name. Every "now" comparison in the club uses it.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Venues, either expanded or still bare identifiers.
    #[serde(default)]
    pub venues: Vec<VenueRef>,
    /// Club-wide settings.
    #[serde(default)]
    pub setting: ClubSetting,
}

/// Club-wide settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubSetting {
    /// Whether participation requires a paid subscription.
    #[serde(default)]
    pub is_req_subscription: bool,
    /// Monthly subscription price.
    #[serde(default)]
    pub subscription_price: Option<f64>,
    /// Catalog of time slots offered across the club.
    #[serde(default)]
    pub time_slots: Vec<SlotTime>,
}

/// A venue reference that may not have been expanded yet.
///
/// The backend returns bare identifiers until the venue list is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VenueRef {
    /// A fully loaded venue.
    Expanded(Box<Venue>),
    /// An identifier whose venue has not been loaded.
    Id(String),
}

impl VenueRef {
    /// Returns the venue identifier regardless of expansion.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Expanded(venue) => &venue.id,
            Self::Id(id) => id,
        }
    }

    /// Returns the expanded venue, if loaded.
    #[must_use]
    pub fn expanded(&self) -> Option<&Venue> {
        match self {
            Self::Expanded(venue) => Some(venue),
            Self::Id(_) => None,
        }
    }
}

impl From<Venue> for VenueRef {
    fn from(venue: Venue) -> Self {
        Self::Expanded(Box::new(venue))
    }
}

/// A bookable facility (a set of courts) within a club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Venue identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Real or virtual.
    #[serde(rename = "type")]
    pub venue_type: VenueType,
    /// Activation status.
    pub status: VenueStatus,
    /// Last date for which schedules exist.
    #[serde(default)]
    pub rs_et_date: Option<NaiveDate>,
    /// Slot grids and rule flags.
    #[serde(default)]
    pub setting: VenueSetting,
}

/// The two parallel grids of a venue plus its rule flags.
///
/// The planned grid is the template for future cycles; the `curt*` grid is
/// what applies now.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueSetting {
    /// Number of courts in the planned grid.
    #[serde(default)]
    pub court_count: u32,
    /// Courts activated in the planned grid.
    #[serde(default)]
    pub activated_courts: Vec<u32>,
    /// Slot length in minutes in the planned grid.
    #[serde(default)]
    pub time_slot_interval: u32,
    /// Slot start times in the planned grid.
    #[serde(default)]
    pub time_slots: Vec<SlotTime>,
    /// Number of courts in the current cycle.
    #[serde(default)]
    pub curt_court_count: u32,
    /// Courts activated in the current cycle.
    #[serde(default)]
    pub curt_activated_courts: Vec<u32>,
    /// Slot length in minutes in the current cycle.
    #[serde(default)]
    pub curt_time_slot_interval: u32,
    /// Slot start times in the current cycle.
    #[serde(default)]
    pub curt_time_slots: Vec<SlotTime>,
    /// Policy flags.
    #[serde(default)]
    pub rules: VenueRuleSettings,
}

/// Policy flags of a venue. Never changed by scheduling operations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueRuleSettings {
    /// Reservations must disclose the other players.
    #[serde(default)]
    pub is_req_other_py_name: bool,
    /// Same-day slots may be challenged.
    #[serde(default)]
    pub can_make_challenge: bool,
    /// Players must check in on arrival.
    #[serde(default)]
    pub is_require_check_in: bool,
    /// User allowed to check other players in.
    #[serde(default)]
    pub check_in_sponsor: Option<String>,
}

/// A player attached to a schedule besides its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMember {
    /// Email; the join key for shared membership.
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// The owner shares the slot with this player.
    #[serde(default)]
    pub is_share_user: bool,
    /// The player checked in.
    #[serde(default)]
    pub is_arrived: bool,
}

/// A concrete court-time assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Schedule identifier.
    pub id: String,
    /// Calendar date in the venue's zone.
    pub date: NaiveDate,
    /// Slot start time.
    pub time: SlotTime,
    /// Court number.
    pub court: u32,
    /// Owning venue.
    pub venue: VenueRef,
    /// Owner user id; absent means the slot is open.
    #[serde(default)]
    pub owner: Option<String>,
    /// Backend status.
    pub status: ScheduleStatus,
    /// Other players.
    #[serde(default)]
    pub members: Vec<ScheduleMember>,
    /// The owner checked in.
    #[serde(default)]
    pub is_arrived: bool,
    /// The owner offers the slot for sharing.
    #[serde(default)]
    pub is_sharing: bool,
}

/// A single inclusive time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockRange {
    /// First permitted slot.
    pub st_time: SlotTime,
    /// Last permitted slot.
    pub et_time: SlotTime,
}

impl ClockRange {
    /// Returns whether `time` lies inside the window, both ends inclusive.
    #[must_use]
    pub fn contains(&self, time: SlotTime) -> bool {
        self.st_time <= time && time <= self.et_time
    }
}

/// Windows during which scheduling is permitted on one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTimeRanges {
    /// Weekday index, 0 = Sunday through 6 = Saturday.
    pub day: u8,
    /// Permitted windows.
    #[serde(default)]
    pub time_ranges: Vec<ClockRange>,
}

/// Scheduling rights of a member type at one venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberTypePermission {
    /// Venue the permission applies to.
    pub venue: String,
    /// May schedule at all.
    #[serde(default)]
    pub is_allow_sched: bool,
    /// May reserve on the spot.
    #[serde(default, rename = "isAllowReserveOTS")]
    pub is_allow_reserve_ots: bool,
    /// Maximum days ahead; `-1` means unlimited.
    #[serde(default = "unlimited_advance_days", rename = "reserveOTSAdvancedDay")]
    pub reserve_ots_advanced_day: i32,
    /// Weekday windows.
    #[serde(default)]
    pub allow_sched_time_ranges: Vec<DayTimeRanges>,
}

const fn unlimited_advance_days() -> i32 {
    -1
}

/// A membership category of a club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberType {
    /// Member type identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Per-venue permissions.
    #[serde(default)]
    pub permissions: Vec<MemberTypePermission>,
}

/// A user's subscription to one club (or sub-club).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Club the subscription pays for.
    pub club: String,
    /// Billing provider identifier; absent when never subscribed.
    #[serde(default)]
    pub id: Option<String>,
    /// Billing status.
    pub status: SubscriptionStatus,
    /// Instant of the next charge. Valid through the end of that day.
    #[serde(default)]
    pub next_payment_date: Option<DateTime<Utc>>,
}

/// A user's guest standing with a sub-club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestRecord {
    /// Sub-club identifier.
    pub sub_club: String,
    /// The guest must also hold the sub-club's subscription.
    #[serde(default)]
    pub is_require_membership: bool,
}

/// The current user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier.
    pub id: String,
    /// Email address.
    pub email: String,
    /// Profile gender.
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Game level.
    #[serde(default)]
    pub level: Option<f64>,
    /// Age category.
    #[serde(default)]
    pub age: Option<String>,
    /// Residential area.
    #[serde(default)]
    pub area: Option<String>,
    /// Venue sorted first in venue pickers.
    #[serde(default)]
    pub preferred_venue: Option<String>,
    /// Membership category in the current club.
    #[serde(default)]
    pub member_type: Option<MemberType>,
    /// Subscriptions, one per club.
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    /// Guest standings, one per sub-club.
    #[serde(default)]
    pub guests: Vec<GuestRecord>,
    /// Circles the user belongs to.
    #[serde(default)]
    pub circles: Vec<String>,
}

impl User {
    /// Returns the subscription held for `club_id`.
    #[must_use]
    pub fn subscription_for(&self, club_id: &str) -> Option<&Subscription> {
        self.subscriptions.iter().find(|s| s.club == club_id)
    }

    /// Returns the guest record held for `sub_club_id`.
    #[must_use]
    pub fn guest_of(&self, sub_club_id: &str) -> Option<&GuestRecord> {
        self.guests.iter().find(|g| g.sub_club == sub_club_id)
    }

    /// Returns whether the user belongs to `circle_id`.
    #[must_use]
    pub fn is_circle_member(&self, circle_id: &str) -> bool {
        self.circles.iter().any(|c| c == circle_id)
    }
}

/// An inclusive game-level range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelRange {
    /// Lowest accepted level.
    pub from: f64,
    /// Highest accepted level.
    pub to: f64,
}

impl LevelRange {
    /// Returns whether `level` lies inside the range, both ends inclusive.
    #[must_use]
    pub fn contains(&self, level: f64) -> bool {
        self.from <= level && level <= self.to
    }
}

/// A social group within a club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circle {
    /// Circle identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Sub-club whose guests the circle admits.
    #[serde(default)]
    pub sub_club: Option<String>,
    /// Required gender; `Mixed` or absent means any.
    #[serde(default)]
    pub eligible_gender: Option<Gender>,
    /// Required level range.
    #[serde(default)]
    pub eligible_level: Option<LevelRange>,
    /// Accepted age categories.
    #[serde(default)]
    pub age_ranges: Vec<String>,
}

/// A club event users register for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubEvent {
    /// Event identifier.
    pub id: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Registration restriction.
    #[serde(default)]
    pub reg_restrict_type: RegRestrictType,
    /// Sub-club for guest-only events.
    #[serde(default)]
    pub sub_club: Option<String>,
    /// Circles invited to circle-only events.
    #[serde(default)]
    pub invited_circles: Vec<Circle>,
    /// Areas admitted to area-restricted events.
    #[serde(default)]
    pub particular_areas: Vec<String>,
    /// Required gender; `Mixed` or absent means any.
    #[serde(default)]
    pub eligible_gender: Option<Gender>,
    /// Required level range.
    #[serde(default)]
    pub eligible_level: Option<LevelRange>,
}

/// Availability of one date inside a request template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeSetting {
    /// The date.
    pub date: NaiveDate,
    /// Whether requests are accepted on this date.
    #[serde(default)]
    pub is_enabled: bool,
    /// Slots for this date; the template's slots apply when absent.
    #[serde(default)]
    pub time_slots: Option<Vec<SlotTime>>,
}

/// A published cycle definition bounding which dates and times are requestable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestTemplate {
    /// Template identifier.
    pub id: String,
    /// Venue the template belongs to.
    pub venue: String,
    /// First date of the cycle.
    pub st_date: NaiveDate,
    /// Last date of the cycle.
    pub et_date: NaiveDate,
    /// Default slots.
    #[serde(default)]
    pub time_slots: Vec<SlotTime>,
    /// Per-date availability.
    #[serde(default)]
    pub date_time_settings: Vec<DateTimeSetting>,
    /// Publication status.
    pub status: TemplateStatus,
}

/// A user's expressed interest in a future slot, prior to assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// Request identifier.
    pub id: String,
    /// Requesting user.
    pub user: String,
    /// Target venue.
    pub venue: String,
    /// Template the request was made against.
    pub template: String,
    /// Requested date.
    pub date: NaiveDate,
    /// Concrete time, exclusive with `time_range`.
    #[serde(default)]
    pub time: Option<SlotTime>,
    /// Set together with `time_range`.
    #[serde(default)]
    pub is_any_time: bool,
    /// Part of day, exclusive with `time`.
    #[serde(default)]
    pub time_range: Option<TimeRange>,
}
