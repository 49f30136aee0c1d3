// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule eligibility predicates and the open-schedule filter.
//!
//! Every predicate is pure: the same inputs always yield the same verdict.

use crate::clock::{club_now, club_today, slot_moment};
use crate::entities::{Club, Schedule, User, Venue};
use crate::permission::is_scheduling_permitted;
use crate::types::{ScheduleStatus, TimeFilter};
use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// Minutes after its start time before an unattended slot counts as a no-show.
pub const NO_SHOW_GRACE_MINUTES: i64 = 5;

/// Returns whether the schedule can be claimed.
///
/// `Canceled` counts as open: a canceled slot returns to the pool directly.
#[must_use]
pub fn is_open_schedule(schedule: &Schedule) -> bool {
    matches!(schedule.status, ScheduleStatus::Open | ScheduleStatus::Canceled)
}

/// Returns whether `user` owns the schedule.
#[must_use]
pub fn is_owner_schedule(schedule: &Schedule, user: &User) -> bool {
    schedule.owner.as_deref() == Some(user.id.as_str())
}

/// Returns whether `user` does not own the schedule. Unowned slots count as
/// invited.
#[must_use]
pub fn is_invited_schedule(schedule: &Schedule, user: &User) -> bool {
    !is_owner_schedule(schedule, user)
}

/// Returns whether the schedule is shared with `user`.
///
/// Shared membership joins on email, not user id: shared players may not be
/// registered yet.
#[must_use]
pub fn is_shared_schedule(schedule: &Schedule, user: &User) -> bool {
    !is_owner_schedule(schedule, user)
        && schedule
            .members
            .iter()
            .any(|member| member.is_share_user && member.email == user.email)
}

/// Returns whether the slot's time and court belong to the current cycle grid.
///
/// Records for a deactivated court or a retired time grid are excluded.
#[must_use]
pub fn is_available_time_slot_court(venue: &Venue, schedule: &Schedule) -> bool {
    venue.setting.curt_time_slots.contains(&schedule.time)
        && venue.setting.curt_activated_courts.contains(&schedule.court)
}

/// Returns whether the schedule belongs to the challenge flow: the venue
/// allows challenges and the slot is today or earlier in the club's zone.
#[must_use]
pub fn is_challenge_schedule(
    club: &Club,
    venue: &Venue,
    schedule: &Schedule,
    now: DateTime<Utc>,
) -> bool {
    venue.setting.rules.can_make_challenge && schedule.date <= club_today(club, now)
}

/// Returns whether `user` owns the schedule or, where the venue requires
/// player disclosure, is listed among its players.
#[must_use]
pub fn is_my_schedule(venue: &Venue, schedule: &Schedule, user: &User) -> bool {
    is_owner_schedule(schedule, user)
        || (venue.setting.rules.is_req_other_py_name
            && schedule.members.iter().any(|member| member.email == user.email))
}

/// Delegates to the membership permission evaluator.
#[must_use]
pub fn is_in_member_type_permission(
    schedule: &Schedule,
    user: &User,
    club: &Club,
    now: DateTime<Utc>,
) -> bool {
    is_scheduling_permitted(schedule, user, club, now)
}

/// Returns whether the slot has not yet passed by more than one slot interval.
#[must_use]
pub fn is_forward_schedule(
    schedule: &Schedule,
    venue: &Venue,
    club: &Club,
    now: DateTime<Utc>,
) -> bool {
    let interval: Duration = Duration::minutes(i64::from(venue.setting.time_slot_interval));
    let cutoff: NaiveDateTime = club_now(club, now) - interval;
    cutoff <= slot_moment(schedule.date, schedule.time)
}

/// Returns whether the current time is strictly more than five minutes past
/// the slot's start.
#[must_use]
pub fn is_no_show(schedule: &Schedule, club: &Club, now: DateTime<Utc>) -> bool {
    let deadline: NaiveDateTime = slot_moment(schedule.date, schedule.time)
        + Duration::minutes(NO_SHOW_GRACE_MINUTES);
    club_now(club, now) > deadline
}

/// Keeps the schedules `user` may book at `venue`.
///
/// A schedule is kept when it sits on the current grid, is open (or is a
/// shared slot of someone else at a venue requiring player disclosure), is
/// not a challenge slot, is permitted for the user's member type and passes
/// `time_filter`. Backend order is preserved.
#[must_use]
pub fn filter_open_schedules<'a>(
    schedules: &'a [Schedule],
    venue: &Venue,
    club: &Club,
    user: &User,
    time_filter: TimeFilter,
    now: DateTime<Utc>,
) -> Vec<&'a Schedule> {
    schedules
        .iter()
        .filter(|schedule| {
            is_available_time_slot_court(venue, schedule)
                && (is_open_schedule(schedule)
                    || (venue.setting.rules.is_req_other_py_name
                        && schedule.is_sharing
                        && !is_my_schedule(venue, schedule, user)))
                && !is_challenge_schedule(club, venue, schedule, now)
                && is_in_member_type_permission(schedule, user, club, now)
                && time_filter.matches(schedule.time)
        })
        .collect()
}
