// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, RequestDraft};
use crate::context::{Context, Mutation, RequestPayload};
use crate::error::CoreError;
use chrono::{DateTime, NaiveDate, Utc};
use courtside_domain::{
    RequestProposal, RequestTemplate, RequestedTime, Schedule, Venue, can_check_in,
    can_make_request, check_in_status, find_venue, resolve_requested_time,
};

/// Validates a command against `context` and returns the mutation to send.
///
/// Nothing is sent by this function. A returned mutation has passed every
/// local check: complete selections, exclusive time choice, a template that
/// belongs to the venue and offers the slot, and check-in eligibility.
///
/// # Arguments
///
/// * `context` - The club, user, templates and schedules to validate against
/// * `command` - The command to apply
/// * `now` - The current instant
///
/// # Returns
///
/// * `Ok(Mutation)` describing the outbound call
/// * `Err(CoreError)` if the command is malformed or not allowed
///
/// # Errors
///
/// Returns an error if:
/// - A draft is missing its venue, template or date
/// - A draft carries both or neither of a time and a time range
/// - A request id is empty
/// - A referenced template, schedule or venue is unknown
/// - The template does not offer the selection to the user
/// - The user may not check in the schedule
pub fn apply(
    context: &Context<'_>,
    command: Command,
    now: DateTime<Utc>,
) -> Result<Mutation, CoreError> {
    match command {
        Command::CreateRequest { draft } => {
            let payload: RequestPayload = validate_draft(context, &draft, now)?;
            Ok(Mutation::CreateRequest { payload })
        }
        Command::UpdateRequest { request_id, draft } => {
            require_request_id(&request_id)?;
            let payload: RequestPayload = validate_draft(context, &draft, now)?;
            Ok(Mutation::UpdateRequest {
                request_id,
                payload,
            })
        }
        Command::DeleteRequest { request_id } => {
            require_request_id(&request_id)?;
            Ok(Mutation::DeleteRequest { request_id })
        }
        Command::CheckIn { schedule_id } => {
            let schedule: &Schedule = context
                .schedule(&schedule_id)
                .ok_or_else(|| CoreError::ScheduleNotFound(schedule_id.clone()))?;
            let venue: &Venue = schedule
                .venue
                .expanded()
                .or_else(|| find_venue(context.club, schedule.venue.id()))
                .ok_or_else(|| CoreError::VenueNotFound(schedule.venue.id().to_string()))?;

            if !can_check_in(schedule, venue, context.user, context.club, now) {
                return Err(CoreError::CheckInNotAllowed {
                    schedule_id,
                    status: check_in_status(schedule, venue, context.club, now),
                });
            }

            Ok(Mutation::CheckIn {
                schedule_id,
                user: context.user.id.clone(),
            })
        }
    }
}

fn require_request_id(request_id: &str) -> Result<(), CoreError> {
    if request_id.trim().is_empty() {
        return Err(CoreError::MissingRequestId);
    }
    Ok(())
}

fn validate_draft(
    context: &Context<'_>,
    draft: &RequestDraft,
    now: DateTime<Utc>,
) -> Result<RequestPayload, CoreError> {
    let venue_id: &str = draft
        .venue
        .as_deref()
        .ok_or(CoreError::IncompleteDraft { field: "venue" })?;
    let template_id: &str = draft
        .template
        .as_deref()
        .ok_or(CoreError::IncompleteDraft { field: "template" })?;
    let date: NaiveDate = draft
        .date
        .ok_or(CoreError::IncompleteDraft { field: "date" })?;

    // Exclusivity is checked before any lookup.
    let requested: RequestedTime = resolve_requested_time(draft.time, draft.time_range)?;

    let template: &RequestTemplate = context
        .template(template_id)
        .ok_or_else(|| CoreError::TemplateNotFound(template_id.to_string()))?;

    let proposal: RequestProposal<'_> = RequestProposal {
        user: context.user,
        venue_id,
        template,
        date,
        time: draft.time,
        time_range: draft.time_range,
    };
    if !can_make_request(&proposal, context.club, now)? {
        return Err(CoreError::RequestNotAllowed {
            venue: venue_id.to_string(),
            date,
        });
    }

    let (time, time_range) = match requested {
        RequestedTime::Exact(time) => (Some(time), None),
        RequestedTime::Range(range) => (None, Some(range)),
    };
    Ok(RequestPayload {
        user: context.user.id.clone(),
        venue: venue_id.to_string(),
        template: template_id.to_string(),
        date,
        time,
        is_any_time: time_range.is_some(),
        time_range,
    })
}
