// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Membership permission evaluation.
//!
//! A member type grants scheduling rights per venue. A slot is permitted only
//! when every one of these holds:
//!
//! - the member type has a permission entry for the slot's venue
//! - the entry allows both scheduling and on-the-spot reservation
//! - the slot is within the advance-booking horizon (`-1` = unlimited)
//! - the slot's weekday and time fall inside an allowed window
//!
//! Denial is an ordinary `false`, never an error.

use crate::clock::{club_today, weekday_index};
use crate::entities::{Club, MemberTypePermission, Schedule, User};
use crate::types::SlotTime;
use chrono::{DateTime, Days, NaiveDate, Utc};

/// Returns the permission entry of `user`'s member type for `venue_id`.
#[must_use]
pub fn permission_for_venue<'a>(
    user: &'a User,
    venue_id: &str,
) -> Option<&'a MemberTypePermission> {
    user.member_type
        .as_ref()?
        .permissions
        .iter()
        .find(|permission| permission.venue == venue_id)
}

/// Returns whether `user` may schedule the slot `(venue_id, date, time)`.
///
/// The slot does not need to exist yet; requests evaluate tentative slots
/// through this function.
#[must_use]
pub fn is_slot_permitted(
    venue_id: &str,
    date: NaiveDate,
    time: SlotTime,
    user: &User,
    club: &Club,
    now: DateTime<Utc>,
) -> bool {
    let Some(permission) = permission_for_venue(user, venue_id) else {
        return false;
    };

    // Both flags are required.
    if !permission.is_allow_reserve_ots || !permission.is_allow_sched {
        return false;
    }

    if let Ok(advance_days) = u64::try_from(permission.reserve_ots_advanced_day) {
        let horizon: Option<NaiveDate> =
            club_today(club, now).checked_add_days(Days::new(advance_days));
        if horizon.is_some_and(|last_day| last_day < date) {
            return false;
        }
    }

    let weekday: u8 = weekday_index(date);
    permission
        .allow_sched_time_ranges
        .iter()
        .filter(|window| window.day == weekday)
        .any(|window| window.time_ranges.iter().any(|range| range.contains(time)))
}

/// Returns whether `user`'s member type permits scheduling `schedule`.
#[must_use]
pub fn is_scheduling_permitted(
    schedule: &Schedule,
    user: &User,
    club: &Club,
    now: DateTime<Utc>,
) -> bool {
    is_slot_permitted(
        schedule.venue.id(),
        schedule.date,
        schedule.time,
        user,
        club,
        now,
    )
}
