// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only views over club and venue configuration.
//!
//! When a club's venue list still contains bare identifiers the views return
//! nothing at all: "not loaded yet" and "no venues" render the same way.

use crate::clock::{DateRange, club_today, enumerate_dates};
use crate::entities::{Club, User, Venue};
use crate::types::{VenueStatus, VenueType};
use chrono::{DateTime, Utc};

/// Returns every expanded venue, or nothing if any venue is unexpanded.
fn expanded_venues(club: &Club) -> Vec<&Venue> {
    club.venues
        .iter()
        .map(crate::entities::VenueRef::expanded)
        .collect::<Option<Vec<&Venue>>>()
        .unwrap_or_default()
}

/// Returns the club's activated venues.
#[must_use]
pub fn active_venues(club: &Club) -> Vec<&Venue> {
    expanded_venues(club)
        .into_iter()
        .filter(|venue| venue.status == VenueStatus::Activated)
        .collect()
}

/// Returns the club's activated real venues, the user's preferred venue first.
///
/// The remaining venues are ordered by id. Callers rely on index 0 being the
/// default selection.
#[must_use]
pub fn active_real_venues<'a>(club: &'a Club, user: &User) -> Vec<&'a Venue> {
    let mut venues: Vec<&Venue> = active_venues(club)
        .into_iter()
        .filter(|venue| venue.venue_type == VenueType::Real)
        .collect();

    let preferred: Option<&str> = user.preferred_venue.as_deref();
    venues.sort_by(|a, b| {
        let a_preferred: bool = preferred == Some(a.id.as_str());
        let b_preferred: bool = preferred == Some(b.id.as_str());
        b_preferred.cmp(&a_preferred).then_with(|| a.id.cmp(&b.id))
    });
    venues
}

/// Returns the club's activated virtual venues.
#[must_use]
pub fn active_virtual_venues(club: &Club) -> Vec<&Venue> {
    active_venues(club)
        .into_iter()
        .filter(|venue| venue.venue_type == VenueType::Virtual)
        .collect()
}

/// Looks up an expanded venue by id.
#[must_use]
pub fn find_venue<'a>(club: &'a Club, venue_id: &str) -> Option<&'a Venue> {
    club.venues
        .iter()
        .filter_map(crate::entities::VenueRef::expanded)
        .find(|venue| venue.id == venue_id)
}

/// Returns whether the club requires a paid subscription.
///
/// Both the flag and a positive price are required; a flag without a price
/// means no subscription is required.
#[must_use]
pub fn requires_subscription(club: &Club) -> bool {
    club.setting.is_req_subscription && club.setting.subscription_price.is_some_and(|p| p > 0.0)
}

/// Dates on which schedules can exist for `venue`: today in the club's zone
/// through the venue's `rs_et_date`, both inclusive.
#[must_use]
pub fn schedulable_dates(venue: &Venue, club: &Club, now: DateTime<Utc>) -> DateRange {
    venue.rs_et_date.map_or_else(DateRange::empty, |end| {
        enumerate_dates(club_today(club, now), end)
    })
}
