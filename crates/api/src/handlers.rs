// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handlers.
//!
//! Each handler translates an API request into domain calls and maps any
//! lower-level error into an `ApiError`. Handlers are synchronous and take
//! the current instant explicitly.

use crate::chat::chat_topic;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    ActiveVenuesRequest, ActiveVenuesResponse, ChatTopicResponse, CheckInRequest, CheckInResponse,
    CheckRequestRequest, CheckRequestResponse, CircleCheckRequest, EventCheckRequest,
    OpenSchedulesRequest, OpenSchedulesResponse, RequestAction, RequestableRequest,
    RequestableResponse, SchedulableDatesRequest, SchedulableDatesResponse, SubmitRequestRequest,
    SubmitRequestResponse, SubscriptionCheckRequest,
};
use chrono::{DateTime, NaiveDate, Utc};
use courtside::{Command, Context, Mutation, apply};
use courtside_domain::{
    CheckInStatus, Club, RequestProposal, Schedule, SlotTime, TimeFilter, Venue, Verdict,
    active_real_venues, active_virtual_venues, can_make_request, check_permission_for_circle,
    check_permission_for_event, check_subscription, filter_open_schedules, find_venue,
    requestable_dates, requestable_times, schedulable_dates,
};
use tracing::{debug, info};

fn lookup_venue<'a>(club: &'a Club, venue_id: &str) -> Result<&'a Venue, ApiError> {
    find_venue(club, venue_id).ok_or_else(|| ApiError::ResourceNotFound {
        resource_type: String::from("Venue"),
        message: format!("Venue '{venue_id}' is not loaded for club '{}'", club.id),
    })
}

/// Lists the club's active venues for a user.
#[must_use]
pub fn active_venues(request: &ActiveVenuesRequest) -> ActiveVenuesResponse {
    info!(
        club_id = %request.club.id,
        user_id = %request.user.id,
        "Handling active_venues request"
    );
    ActiveVenuesResponse {
        real: active_real_venues(&request.club, &request.user)
            .into_iter()
            .cloned()
            .collect(),
        virtual_venues: active_virtual_venues(&request.club)
            .into_iter()
            .cloned()
            .collect(),
    }
}

/// Lists the dates on which schedules can exist for a venue.
///
/// # Errors
///
/// Returns an error if the venue is not loaded in the club.
pub fn schedulable_dates_for_venue(
    request: &SchedulableDatesRequest,
    now: DateTime<Utc>,
) -> Result<SchedulableDatesResponse, ApiError> {
    info!(venue_id = %request.venue_id, "Handling schedulable_dates request");
    let venue: &Venue = lookup_venue(&request.club, &request.venue_id)?;
    let dates: Vec<NaiveDate> = schedulable_dates(venue, &request.club, now)
        .into_iter()
        .collect();
    debug!(count = dates.len(), "Computed schedulable dates");
    Ok(SchedulableDatesResponse {
        venue_id: request.venue_id.clone(),
        dates,
    })
}

/// Filters a venue's schedules down to those the user may book.
///
/// # Errors
///
/// Returns an error if the venue is not loaded or the time filter is invalid.
pub fn open_schedules(
    request: &OpenSchedulesRequest,
    now: DateTime<Utc>,
) -> Result<OpenSchedulesResponse, ApiError> {
    info!(
        venue_id = %request.venue_id,
        user_id = %request.user.id,
        time_filter = ?request.time_filter,
        "Handling open_schedules request"
    );
    let venue: &Venue = lookup_venue(&request.club, &request.venue_id)?;
    let time_filter: TimeFilter = request
        .time_filter
        .as_deref()
        .map(str::parse::<TimeFilter>)
        .transpose()
        .map_err(translate_domain_error)?
        .unwrap_or_default();

    let schedules: Vec<Schedule> = filter_open_schedules(
        &request.schedules,
        venue,
        &request.club,
        &request.user,
        time_filter,
        now,
    )
    .into_iter()
    .cloned()
    .collect();
    debug!(
        received = request.schedules.len(),
        kept = schedules.len(),
        "Filtered open schedules"
    );
    Ok(OpenSchedulesResponse { schedules })
}

/// Validates a check-in and returns the call that records it.
///
/// # Errors
///
/// Returns an error if the schedule or its venue is unknown, or the user may
/// not check in now.
pub fn check_in(request: &CheckInRequest, now: DateTime<Utc>) -> Result<CheckInResponse, ApiError> {
    info!(
        schedule_id = %request.schedule_id,
        user_id = %request.user.id,
        "Handling check_in request"
    );
    let context: Context<'_> =
        Context::new(&request.club, &request.user).with_schedules(&request.schedules);
    let mutation: Mutation = apply(
        &context,
        Command::CheckIn {
            schedule_id: request.schedule_id.clone(),
        },
        now,
    )
    .map_err(translate_core_error)?;

    info!(schedule_id = %request.schedule_id, "Check-in accepted");
    Ok(CheckInResponse {
        schedule_id: request.schedule_id.clone(),
        // Only pending schedules can be checked in.
        status: CheckInStatus::Pending,
        mutation,
    })
}

/// Lists a template's requestable dates, and the times of one date.
#[must_use]
pub fn requestable(request: &RequestableRequest, now: DateTime<Utc>) -> RequestableResponse {
    info!(
        template_id = %request.template.id,
        date = ?request.date,
        "Handling requestable request"
    );
    let dates: Vec<NaiveDate> = requestable_dates(&request.template, &request.club, now);
    let times: Option<Vec<SlotTime>> = request
        .date
        .map(|date| requestable_times(&request.template, date, &request.user, &request.club, now));
    RequestableResponse { dates, times }
}

/// Checks whether a request may be made.
///
/// # Errors
///
/// Returns an error if the request is malformed: the template belongs to
/// another venue, or not exactly one of time and time range is set.
pub fn check_request(
    request: &CheckRequestRequest,
    now: DateTime<Utc>,
) -> Result<CheckRequestResponse, ApiError> {
    info!(
        venue_id = %request.venue_id,
        template_id = %request.template.id,
        date = %request.date,
        "Handling check_request request"
    );
    let proposal: RequestProposal<'_> = RequestProposal {
        user: &request.user,
        venue_id: &request.venue_id,
        template: &request.template,
        date: request.date,
        time: request.time,
        time_range: request.time_range,
    };
    let allowed: bool =
        can_make_request(&proposal, &request.club, now).map_err(translate_domain_error)?;
    Ok(CheckRequestResponse { allowed })
}

/// Validates a request command and returns the outbound mutation.
///
/// # Errors
///
/// Returns an error if the command fails validation.
pub fn submit_request(
    request: SubmitRequestRequest,
    now: DateTime<Utc>,
) -> Result<SubmitRequestResponse, ApiError> {
    info!(user_id = %request.user.id, "Handling submit_request request");
    let command: Command = match request.action {
        RequestAction::Create { draft } => Command::CreateRequest { draft },
        RequestAction::Update { request_id, draft } => Command::UpdateRequest { request_id, draft },
        RequestAction::Delete { request_id } => Command::DeleteRequest { request_id },
    };
    let context: Context<'_> =
        Context::new(&request.club, &request.user).with_templates(&request.templates);
    let mutation: Mutation = apply(&context, command, now).map_err(translate_core_error)?;

    info!(action = mutation.name(), "Request command validated");
    Ok(SubmitRequestResponse {
        message: format!("{} is ready to send", mutation.name()),
        mutation,
    })
}

/// Checks a user's subscription to a club.
#[must_use]
pub fn subscription_eligibility(request: &SubscriptionCheckRequest, now: DateTime<Utc>) -> Verdict {
    info!(
        club_id = %request.club.id,
        user_id = %request.user.id,
        "Handling subscription_eligibility request"
    );
    check_subscription(&request.user, &request.club, now)
}

/// Checks whether a user may join a circle.
#[must_use]
pub fn circle_eligibility(request: &CircleCheckRequest, now: DateTime<Utc>) -> Verdict {
    info!(
        circle_id = %request.circle.id,
        user_id = %request.user.id,
        "Handling circle_eligibility request"
    );
    let verdict: Verdict = check_permission_for_circle(
        &request.circle,
        &request.user,
        &request.club,
        &request.sub_clubs,
        now,
    );
    debug!(valid = verdict.valid, reason = ?verdict.reason, "Circle verdict");
    verdict
}

/// Checks whether a user may register for an event.
#[must_use]
pub fn event_eligibility(request: &EventCheckRequest, now: DateTime<Utc>) -> Verdict {
    info!(
        event_id = %request.event.id,
        user_id = %request.user.id,
        "Handling event_eligibility request"
    );
    let verdict: Verdict = check_permission_for_event(
        &request.event,
        &request.user,
        &request.club,
        &request.sub_clubs,
        now,
    );
    debug!(valid = verdict.valid, reason = ?verdict.reason, "Event verdict");
    verdict
}

/// Returns the chat topic shared by two users.
///
/// # Errors
///
/// Returns an error if either id is empty.
pub fn topic_for(user_a: &str, user_b: &str) -> Result<ChatTopicResponse, ApiError> {
    for (field, value) in [("a", user_a), ("b", user_b)] {
        if value.trim().is_empty() {
            return Err(ApiError::InvalidInput {
                field: field.to_string(),
                message: String::from("User id must not be empty"),
            });
        }
    }
    Ok(ChatTopicResponse {
        topic: chat_topic(user_a, user_b),
    })
}
