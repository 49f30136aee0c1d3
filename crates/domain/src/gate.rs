// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Participation gates for circles and events.
//!
//! Each gate is a chain of independent checks. The first failing check wins
//! and its verdict explains the deficiency together with a remedial `Reason`
//! that the presentation layer maps to a screen (subscribe, edit profile, ...).
//!
//! ## Check order
//!
//! - guest or circle membership before subscription, where the restriction
//!   type requires membership
//! - subscription before eligibility, always
//! - eligibility: gender, then level, then age (circles only)

use crate::clock::{club_today, current_moment_in_zone};
use crate::entities::{Circle, Club, ClubEvent, Subscription, User};
use crate::types::{Gender, RegRestrictType, SubscriptionStatus};
use crate::venues::requires_subscription;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Remedy suggested to the user when a gate fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reason {
    /// Go to the subscription screen.
    #[serde(rename = "subscribe")]
    Subscribe,
    /// Go to the profile editor.
    #[serde(rename = "profile")]
    Profile,
    /// Become a guest of the sub-club.
    #[serde(rename = "shouldBeGuest")]
    ShouldBeGuest,
    /// Join the single circle invited to the event.
    #[serde(rename = "one_circle_join")]
    OneCircleJoin,
    /// Join one of several circles invited to the event.
    #[serde(rename = "multi_circle_join")]
    MultiCircleJoin,
}

/// Outcome of a gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Whether the user may proceed.
    pub valid: bool,
    /// Human-readable explanation of a failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Label of the remedial call to action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_action: Option<String>,
    /// Label of the dismiss action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_action: Option<String>,
    /// Remedy token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
}

impl Verdict {
    /// A passing verdict.
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            valid: true,
            message: None,
            primary_action: None,
            secondary_action: None,
            reason: None,
        }
    }

    /// A failing verdict with a message, a remedy and the default actions.
    #[must_use]
    pub fn fail(reason: Reason, message: impl Into<String>) -> Self {
        let primary: &str = match reason {
            Reason::Subscribe => "Subscribe",
            Reason::Profile => "Edit Profile",
            Reason::ShouldBeGuest => "Become a Guest",
            Reason::OneCircleJoin => "Join",
            Reason::MultiCircleJoin => "",
        };
        Self {
            valid: false,
            message: Some(message.into()),
            primary_action: (!primary.is_empty()).then(|| primary.to_string()),
            secondary_action: Some(String::from("Cancel")),
            reason: Some(reason),
        }
    }

    /// Returns whether the verdict passes.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Checks that `user` holds a current subscription to `club`.
///
/// Clubs that do not require a subscription pass automatically. Otherwise
/// the subscription must have an id, be active and have a next payment date
/// whose day (in the club's zone) has not ended yet.
#[must_use]
pub fn check_subscription(user: &User, club: &Club, now: DateTime<Utc>) -> Verdict {
    if !requires_subscription(club) {
        return Verdict::pass();
    }

    let subscription: Option<&Subscription> = user
        .subscription_for(&club.id)
        .filter(|subscription| subscription.id.is_some());
    let Some(subscription) = subscription else {
        return Verdict::fail(
            Reason::Subscribe,
            format!("A subscription to {} is required.", club.name),
        );
    };

    if subscription.status != SubscriptionStatus::Active {
        return Verdict::fail(
            Reason::Subscribe,
            format!("Your subscription to {} is not active.", club.name),
        );
    }

    let Some(next_payment) = subscription.next_payment_date else {
        return Verdict::fail(
            Reason::Subscribe,
            format!("Your subscription to {} has no upcoming payment.", club.name),
        );
    };

    // Valid through the end of the payment day in the club's zone.
    let last_valid_day: NaiveDate =
        current_moment_in_zone(club.timezone.as_deref(), next_payment).date();
    if club_today(club, now) > last_valid_day {
        return Verdict::fail(
            Reason::Subscribe,
            format!("Your subscription to {} has expired.", club.name),
        );
    }

    Verdict::pass()
}

fn check_gender(required: Option<Gender>, user: &User, target: &str) -> Option<Verdict> {
    let required: Gender = required.filter(|gender| *gender != Gender::Mixed)?;
    (user.gender != Some(required)).then(|| {
        Verdict::fail(
            Reason::Profile,
            format!("This {target} is only open to {required} players."),
        )
    })
}

fn check_level(
    required: Option<crate::entities::LevelRange>,
    user: &User,
    target: &str,
) -> Option<Verdict> {
    let range = required?;
    match user.level {
        None => Some(Verdict::fail(
            Reason::Profile,
            format!("Set your game level to join this {target}."),
        )),
        Some(level) if !range.contains(level) => Some(Verdict::fail(
            Reason::Profile,
            format!(
                "This {target} is for levels {} to {}; your level is {level}.",
                range.from, range.to
            ),
        )),
        Some(_) => None,
    }
}

/// Checks a circle's gender, level and age constraints against the profile.
///
/// The age check only verifies that the profile has an age when the circle
/// lists age ranges; it does not check membership in those ranges.
#[must_use]
pub fn check_eligibility_for_circle(circle: &Circle, user: &User) -> Verdict {
    if let Some(failure) = check_gender(circle.eligible_gender, user, "circle") {
        return failure;
    }
    if let Some(failure) = check_level(circle.eligible_level, user, "circle") {
        return failure;
    }
    if !circle.age_ranges.is_empty() && user.age.is_none() {
        return Verdict::fail(Reason::Profile, "Set your age to join this circle.");
    }
    Verdict::pass()
}

/// Checks an event's gender and level constraints against the profile.
#[must_use]
pub fn check_eligibility_for_event(event: &ClubEvent, user: &User) -> Verdict {
    if let Some(failure) = check_gender(event.eligible_gender, user, "event") {
        return failure;
    }
    if let Some(failure) = check_level(event.eligible_level, user, "event") {
        return failure;
    }
    Verdict::pass()
}

/// Checks that `user` is a guest of `sub_club`, including its subscription
/// when the guest record requires membership.
#[must_use]
pub fn check_guest_permission_for_sub_club(
    sub_club: &Club,
    user: &User,
    now: DateTime<Utc>,
) -> Verdict {
    match user.guest_of(&sub_club.id) {
        None => Verdict::fail(
            Reason::ShouldBeGuest,
            format!("Only guests of {} can take part.", sub_club.name),
        ),
        Some(guest) if guest.is_require_membership => check_subscription(user, sub_club, now),
        Some(_) => Verdict::pass(),
    }
}

/// Guest check by sub-club id. An unknown sub-club whose guest record
/// requires membership is denied.
fn check_guest_by_id(
    sub_club_id: &str,
    sub_clubs: &[Club],
    user: &User,
    now: DateTime<Utc>,
) -> Verdict {
    if let Some(sub_club) = sub_clubs.iter().find(|c| c.id == sub_club_id) {
        return check_guest_permission_for_sub_club(sub_club, user, now);
    }
    match user.guest_of(sub_club_id) {
        None => Verdict::fail(Reason::ShouldBeGuest, "Only guests of this sub-club can take part."),
        Some(guest) if guest.is_require_membership => Verdict::fail(
            Reason::Subscribe,
            "A subscription to this sub-club is required.",
        ),
        Some(_) => Verdict::pass(),
    }
}

/// Checks whether `user` may join `circle`.
///
/// Circles attached to a sub-club gate on guest standing, the others on the
/// club subscription; circle eligibility is checked last.
#[must_use]
pub fn check_permission_for_circle(
    circle: &Circle,
    user: &User,
    club: &Club,
    sub_clubs: &[Club],
    now: DateTime<Utc>,
) -> Verdict {
    let membership: Verdict = match circle.sub_club.as_deref() {
        Some(sub_club_id) => check_guest_by_id(sub_club_id, sub_clubs, user, now),
        None => check_subscription(user, club, now),
    };
    if !membership.is_valid() {
        return membership;
    }
    check_eligibility_for_circle(circle, user)
}

/// Checks whether `user` may register for `event`.
///
/// The branch order decides which message the user sees first:
///
/// - `OpenToAll`: subscription, eligibility
/// - `OnlyGuests`: guest standing with the event's sub-club, eligibility
/// - `OnlyCircleMembers`: invited-circle membership, then guest standing or
///   subscription, eligibility
/// - `ParticularArea`: subscription, area, eligibility
#[must_use]
pub fn check_permission_for_event(
    event: &ClubEvent,
    user: &User,
    club: &Club,
    sub_clubs: &[Club],
    now: DateTime<Utc>,
) -> Verdict {
    let membership: Verdict = match event.reg_restrict_type {
        RegRestrictType::OpenToAll => check_subscription(user, club, now),
        RegRestrictType::OnlyGuests => match event.sub_club.as_deref() {
            Some(sub_club_id) => check_guest_by_id(sub_club_id, sub_clubs, user, now),
            None => Verdict::fail(
                Reason::ShouldBeGuest,
                "Only sub-club guests can register for this event.",
            ),
        },
        RegRestrictType::OnlyCircleMembers => {
            check_invited_circles(event, user, club, sub_clubs, now)
        }
        RegRestrictType::ParticularArea => {
            let subscription: Verdict = check_subscription(user, club, now);
            if subscription.is_valid() {
                check_area(event, user)
            } else {
                subscription
            }
        }
    };
    if !membership.is_valid() {
        return membership;
    }
    check_eligibility_for_event(event, user)
}

fn check_area(event: &ClubEvent, user: &User) -> Verdict {
    let in_area: bool = user
        .area
        .as_ref()
        .is_some_and(|area| event.particular_areas.contains(area));
    if in_area {
        Verdict::pass()
    } else {
        Verdict::fail(
            Reason::Profile,
            format!(
                "This event is only open to players from {}.",
                event.particular_areas.join(", ")
            ),
        )
    }
}

fn check_invited_circles(
    event: &ClubEvent,
    user: &User,
    club: &Club,
    sub_clubs: &[Club],
    now: DateTime<Utc>,
) -> Verdict {
    if let Some(circle) = event
        .invited_circles
        .iter()
        .find(|circle| user.is_circle_member(&circle.id))
    {
        return match circle.sub_club.as_deref() {
            Some(sub_club_id) => check_guest_by_id(sub_club_id, sub_clubs, user, now),
            None => check_subscription(user, club, now),
        };
    }

    let open_circles: Vec<&Circle> = event
        .invited_circles
        .iter()
        .filter(|circle| circle.sub_club.is_none())
        .collect();
    match open_circles.as_slice() {
        [] => Verdict::fail(
            Reason::ShouldBeGuest,
            "Only guests of the invited circles' sub-clubs can register for this event.",
        ),
        [circle] => Verdict::fail(
            Reason::OneCircleJoin,
            format!("Only members of {} can register for this event.", circle.name),
        ),
        circles => {
            let names: Vec<&str> = circles.iter().map(|circle| circle.name.as_str()).collect();
            Verdict::fail(
                Reason::MultiCircleJoin,
                format!(
                    "Only members of one of these circles can register: {}.",
                    names.join(", ")
                ),
            )
        }
    }
}
