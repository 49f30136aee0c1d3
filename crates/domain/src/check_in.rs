// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Check-in evaluation for confirmed schedules.

use crate::clock::club_today;
use crate::entities::{Club, Schedule, User, Venue};
use crate::schedule::{is_no_show, is_owner_schedule};
use crate::types::ScheduleStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Attendance state of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckInStatus {
    /// The venue does not track attendance, or the slot is not confirmed.
    NotRequired,
    /// Players have checked in.
    Arrived,
    /// The grace period passed without a check-in.
    NoShow,
    /// Check-in is still possible.
    Pending,
}

impl CheckInStatus {
    /// Returns the wire token for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotRequired => "notRequired",
            Self::Arrived => "arrived",
            Self::NoShow => "noShow",
            Self::Pending => "pending",
        }
    }
}

impl std::fmt::Display for CheckInStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns the attendance state of `schedule` at `venue`.
#[must_use]
pub fn check_in_status(
    schedule: &Schedule,
    venue: &Venue,
    club: &Club,
    now: DateTime<Utc>,
) -> CheckInStatus {
    if !venue.setting.rules.is_require_check_in || schedule.status != ScheduleStatus::Confirm {
        return CheckInStatus::NotRequired;
    }
    if schedule.is_arrived {
        return CheckInStatus::Arrived;
    }
    if is_no_show(schedule, club, now) {
        return CheckInStatus::NoShow;
    }
    CheckInStatus::Pending
}

/// Returns whether `user` may check in `schedule` now.
///
/// The schedule must be pending and dated today in the club's zone. The
/// owner, any listed player (matched by email) and the venue's check-in
/// sponsor may check in.
#[must_use]
pub fn can_check_in(
    schedule: &Schedule,
    venue: &Venue,
    user: &User,
    club: &Club,
    now: DateTime<Utc>,
) -> bool {
    if check_in_status(schedule, venue, club, now) != CheckInStatus::Pending {
        return false;
    }
    if schedule.date != club_today(club, now) {
        return false;
    }

    is_owner_schedule(schedule, user)
        || schedule
            .members
            .iter()
            .any(|member| member.email == user.email)
        || venue.setting.rules.check_in_sponsor.as_deref() == Some(user.id.as_str())
}
