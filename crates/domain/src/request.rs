// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request lifecycle helpers.
//!
//! A request is made against a published template. The template bounds the
//! cycle (`st_date`..=`et_date`), enables individual dates and lists the slots
//! of each date. Past dates are never offered, even inside a valid cycle.

use crate::clock::club_today;
use crate::entities::{Club, DateTimeSetting, Request, RequestTemplate, User};
use crate::error::DomainError;
use crate::permission::is_slot_permitted;
use crate::types::{SlotTime, TemplateStatus, TimeRange};
use chrono::{DateTime, NaiveDate, Utc};

/// The time part of a request once validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestedTime {
    /// A concrete slot.
    Exact(SlotTime),
    /// Any slot inside a part of the day.
    Range(TimeRange),
}

/// Validates that exactly one of `time` and `time_range` is present.
///
/// # Errors
///
/// Returns `DomainError::AmbiguousRequestTime` when both are set and
/// `DomainError::MissingRequestTime` when neither is.
pub fn resolve_requested_time(
    time: Option<SlotTime>,
    time_range: Option<TimeRange>,
) -> Result<RequestedTime, DomainError> {
    match (time, time_range) {
        (Some(time), None) => Ok(RequestedTime::Exact(time)),
        (None, Some(range)) => Ok(RequestedTime::Range(range)),
        (Some(_), Some(_)) => Err(DomainError::AmbiguousRequestTime),
        (None, None) => Err(DomainError::MissingRequestTime),
    }
}

impl Request {
    /// Returns the validated time part of this request.
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly one of `time` and `time_range` is set.
    pub fn requested_time(&self) -> Result<RequestedTime, DomainError> {
        resolve_requested_time(self.time, self.time_range)
    }
}

fn date_setting(template: &RequestTemplate, date: NaiveDate) -> Option<&DateTimeSetting> {
    template
        .date_time_settings
        .iter()
        .find(|setting| setting.date == date)
}

/// Returns the slots configured for `date`: the date's own list when it has
/// one, the template's default list otherwise.
#[must_use]
pub fn slots_for_date(template: &RequestTemplate, date: NaiveDate) -> &[SlotTime] {
    date_setting(template, date)
        .and_then(|setting| setting.time_slots.as_deref())
        .unwrap_or(&template.time_slots)
}

/// Returns the dates of a published template that are enabled and not in the
/// past (club zone). Unpublished templates offer nothing.
#[must_use]
pub fn requestable_dates(
    template: &RequestTemplate,
    club: &Club,
    now: DateTime<Utc>,
) -> Vec<NaiveDate> {
    if template.status != TemplateStatus::Published {
        return Vec::new();
    }

    let today: NaiveDate = club_today(club, now);
    let mut dates: Vec<NaiveDate> = template
        .date_time_settings
        .iter()
        .filter(|setting| setting.is_enabled)
        .map(|setting| setting.date)
        .filter(|date| template.st_date <= *date && *date <= template.et_date && *date >= today)
        .collect();
    dates.sort_unstable();
    dates.dedup();
    dates
}

/// Returns whether `(date, time)` is offered by the template right now.
#[must_use]
pub fn is_available_request(
    template: &RequestTemplate,
    date: NaiveDate,
    time: SlotTime,
    club: &Club,
    now: DateTime<Utc>,
) -> bool {
    requestable_dates(template, club, now).contains(&date)
        && slots_for_date(template, date).contains(&time)
}

/// Returns the slots of `date` that `user` may still request.
#[must_use]
pub fn requestable_times(
    template: &RequestTemplate,
    date: NaiveDate,
    user: &User,
    club: &Club,
    now: DateTime<Utc>,
) -> Vec<SlotTime> {
    if !requestable_dates(template, club, now).contains(&date) {
        return Vec::new();
    }

    let mut times: Vec<SlotTime> = slots_for_date(template, date)
        .iter()
        .copied()
        .filter(|time| is_slot_permitted(&template.venue, date, *time, user, club, now))
        .collect();
    times.sort_unstable();
    times.dedup();
    times
}

/// A prospective request, before it reaches the external API.
#[derive(Debug, Clone, Copy)]
pub struct RequestProposal<'a> {
    /// The requesting user.
    pub user: &'a User,
    /// The selected venue id.
    pub venue_id: &'a str,
    /// The template the request is made against.
    pub template: &'a RequestTemplate,
    /// The selected date.
    pub date: NaiveDate,
    /// A concrete time, exclusive with `time_range`.
    pub time: Option<SlotTime>,
    /// A part of the day, exclusive with `time`.
    pub time_range: Option<TimeRange>,
}

/// Returns whether the proposal may be submitted.
///
/// An exact time must be offered by the template and permitted for the
/// user's member type. A time range is satisfied by any offered, permitted
/// slot inside it.
///
/// # Errors
///
/// Returns an error if the proposal is malformed: the template belongs to
/// another venue, or not exactly one of `time` and `time_range` is set.
pub fn can_make_request(
    proposal: &RequestProposal<'_>,
    club: &Club,
    now: DateTime<Utc>,
) -> Result<bool, DomainError> {
    if proposal.template.venue != proposal.venue_id {
        return Err(DomainError::TemplateVenueMismatch {
            template: proposal.template.id.clone(),
            venue: proposal.venue_id.to_string(),
        });
    }

    let allowed: bool = match resolve_requested_time(proposal.time, proposal.time_range)? {
        RequestedTime::Exact(time) => {
            is_available_request(proposal.template, proposal.date, time, club, now)
                && is_slot_permitted(
                    proposal.venue_id,
                    proposal.date,
                    time,
                    proposal.user,
                    club,
                    now,
                )
        }
        RequestedTime::Range(range) => {
            requestable_times(proposal.template, proposal.date, proposal.user, club, now)
                .into_iter()
                .any(|time| range.contains(time))
        }
    };
    Ok(allowed)
}
