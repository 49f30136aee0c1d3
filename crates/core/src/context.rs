// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use courtside_domain::{Club, RequestTemplate, Schedule, SlotTime, TimeRange, User};
use serde::{Deserialize, Serialize};

/// The snapshot a command is validated against.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// The current club.
    pub club: &'a Club,
    /// The acting user.
    pub user: &'a User,
    /// Request templates known to the client.
    pub templates: &'a [RequestTemplate],
    /// Schedules known to the client.
    pub schedules: &'a [Schedule],
}

impl<'a> Context<'a> {
    /// Creates a context without templates or schedules.
    #[must_use]
    pub const fn new(club: &'a Club, user: &'a User) -> Self {
        Self {
            club,
            user,
            templates: &[],
            schedules: &[],
        }
    }

    /// Returns a copy of this context with `templates` attached.
    #[must_use]
    pub const fn with_templates(self, templates: &'a [RequestTemplate]) -> Self {
        Self { templates, ..self }
    }

    /// Returns a copy of this context with `schedules` attached.
    #[must_use]
    pub const fn with_schedules(self, schedules: &'a [Schedule]) -> Self {
        Self { schedules, ..self }
    }

    /// Looks up a template by id.
    #[must_use]
    pub fn template(&self, template_id: &str) -> Option<&'a RequestTemplate> {
        self.templates.iter().find(|t| t.id == template_id)
    }

    /// Looks up a schedule by id.
    #[must_use]
    pub fn schedule(&self, schedule_id: &str) -> Option<&'a Schedule> {
        self.schedules.iter().find(|s| s.id == schedule_id)
    }
}

/// Body of a create or update request call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    /// Requesting user.
    pub user: String,
    /// Target venue.
    pub venue: String,
    /// Template the request is made against.
    pub template: String,
    /// Requested date.
    pub date: NaiveDate,
    /// Concrete time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<SlotTime>,
    /// Set whenever `time_range` is.
    pub is_any_time: bool,
    /// Part of day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
}

/// The outbound call a validated command resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Mutation {
    /// Create a request.
    CreateRequest {
        /// Request body.
        payload: RequestPayload,
    },
    /// Replace a request.
    #[serde(rename_all = "camelCase")]
    UpdateRequest {
        /// The request being replaced.
        request_id: String,
        /// Request body.
        payload: RequestPayload,
    },
    /// Delete a request.
    #[serde(rename_all = "camelCase")]
    DeleteRequest {
        /// The request being withdrawn.
        request_id: String,
    },
    /// Mark a schedule as arrived.
    #[serde(rename_all = "camelCase")]
    CheckIn {
        /// The schedule.
        schedule_id: String,
        /// The user performing the check-in.
        user: String,
    },
}

impl Mutation {
    /// Returns the action name, as used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateRequest { .. } => "CreateRequest",
            Self::UpdateRequest { .. } => "UpdateRequest",
            Self::DeleteRequest { .. } => "DeleteRequest",
            Self::CheckIn { .. } => "CheckIn",
        }
    }
}
