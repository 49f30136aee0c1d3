// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use courtside_domain::{CheckInStatus, DomainError};

/// Errors that can occur while turning a command into a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A request draft is missing a required selection.
    IncompleteDraft {
        /// The missing field.
        field: &'static str,
    },
    /// An update or delete command carried an empty request id.
    MissingRequestId,
    /// The referenced template is not in the context.
    TemplateNotFound(String),
    /// The referenced schedule is not in the context.
    ScheduleNotFound(String),
    /// The referenced venue is not loaded.
    VenueNotFound(String),
    /// The template does not offer the requested date and time to the user.
    RequestNotAllowed {
        /// The target venue.
        venue: String,
        /// The requested date.
        date: NaiveDate,
    },
    /// The user may not check in the schedule now.
    CheckInNotAllowed {
        /// The schedule identifier.
        schedule_id: String,
        /// The schedule's attendance state.
        status: CheckInStatus,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::IncompleteDraft { field } => write!(f, "Request draft is missing '{field}'"),
            Self::MissingRequestId => write!(f, "Request id must not be empty"),
            Self::TemplateNotFound(id) => write!(f, "Request template '{id}' not found"),
            Self::ScheduleNotFound(id) => write!(f, "Schedule '{id}' not found"),
            Self::VenueNotFound(id) => write!(f, "Venue '{id}' not found"),
            Self::RequestNotAllowed { venue, date } => {
                write!(f, "Venue '{venue}' does not accept this request on {date}")
            }
            Self::CheckInNotAllowed {
                schedule_id,
                status,
            } => write!(
                f,
                "Cannot check in schedule '{schedule_id}' (status: {status})"
            ),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
