// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Scheduling eligibility rules for a multi-venue sports club.
//!
//! Every rule is a pure function over immutable snapshots of club, venue,
//! user and schedule records. The current instant is always an explicit
//! argument; nothing in this crate reads the system clock except
//! [`SystemClock`].

mod check_in;
mod clock;
mod entities;
mod error;
mod gate;
mod permission;
mod request;
mod schedule;
mod types;
mod venues;

#[cfg(test)]
mod tests;

pub use check_in::{CheckInStatus, can_check_in, check_in_status};
pub use clock::{
    Clock, DateRange, DateRangeIter, FixedClock, SystemClock, club_now, club_today,
    current_moment_in_zone, enumerate_dates, parse_timezone, slot_moment, time_string_to_display,
    weekday_index,
};
pub use entities::{
    Circle, ClockRange, Club, ClubEvent, ClubSetting, DateTimeSetting, DayTimeRanges, GuestRecord,
    LevelRange, MemberType, MemberTypePermission, Request, RequestTemplate, Schedule,
    ScheduleMember, Subscription, User, Venue, VenueRef, VenueRuleSettings, VenueSetting,
};
pub use error::DomainError;
pub use gate::{
    Reason, Verdict, check_eligibility_for_circle, check_eligibility_for_event,
    check_guest_permission_for_sub_club, check_permission_for_circle, check_permission_for_event,
    check_subscription,
};
pub use permission::{is_scheduling_permitted, is_slot_permitted, permission_for_venue};
pub use request::{
    RequestProposal, RequestedTime, can_make_request, is_available_request, requestable_dates,
    requestable_times, resolve_requested_time, slots_for_date,
};
pub use schedule::{
    NO_SHOW_GRACE_MINUTES, filter_open_schedules, is_available_time_slot_court,
    is_challenge_schedule, is_forward_schedule, is_in_member_type_permission, is_invited_schedule,
    is_my_schedule, is_no_show, is_open_schedule, is_owner_schedule, is_shared_schedule,
};
pub use types::{
    Gender, RegRestrictType, ScheduleStatus, SlotTime, SubscriptionStatus, TemplateStatus,
    TimeFilter, TimeRange, VenueStatus, VenueType,
};
pub use venues::{
    active_real_venues, active_venues, active_virtual_venues, find_venue, requires_subscription,
    schedulable_dates,
};
