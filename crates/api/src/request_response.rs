// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry the full snapshot the rules need; nothing is looked up on
//! the server side.

use crate::notifications::Notification;
use chrono::NaiveDate;
use courtside::{Mutation, RequestDraft};
use courtside_domain::{
    CheckInStatus, Circle, Club, ClubEvent, RequestTemplate, Schedule, SlotTime, TimeRange, User,
    Venue,
};
use serde::{Deserialize, Serialize};

/// API request for the active venues of a club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveVenuesRequest {
    /// The club.
    pub club: Club,
    /// The current user; decides the preferred venue.
    pub user: User,
}

/// API response listing the active venues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveVenuesResponse {
    /// Real venues, preferred venue first.
    pub real: Vec<Venue>,
    /// Virtual venues.
    #[serde(rename = "virtual")]
    pub virtual_venues: Vec<Venue>,
}

/// API request for the schedulable dates of a venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulableDatesRequest {
    /// The club.
    pub club: Club,
    /// The venue.
    pub venue_id: String,
}

/// API response listing schedulable dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulableDatesResponse {
    /// The venue.
    pub venue_id: String,
    /// Dates from today through the venue's last schedule date.
    pub dates: Vec<NaiveDate>,
}

/// API request to browse open schedules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSchedulesRequest {
    /// The club.
    pub club: Club,
    /// The browsing user.
    pub user: User,
    /// The venue being browsed.
    pub venue_id: String,
    /// Schedules as returned by the platform.
    pub schedules: Vec<Schedule>,
    /// `any`, `any_morning`, `any_afternoon` or `HH:mm`; `any` when absent.
    #[serde(default)]
    pub time_filter: Option<String>,
}

/// API response listing bookable schedules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSchedulesResponse {
    /// Kept schedules in platform order.
    pub schedules: Vec<Schedule>,
}

/// API request to check in a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    /// The club.
    pub club: Club,
    /// The user checking in.
    pub user: User,
    /// Schedules known to the client.
    pub schedules: Vec<Schedule>,
    /// The schedule to check in.
    pub schedule_id: String,
}

/// API response for an accepted check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInResponse {
    /// The schedule.
    pub schedule_id: String,
    /// Attendance state before the check-in.
    pub status: CheckInStatus,
    /// The outbound call.
    pub mutation: Mutation,
}

/// API request for the dates and times a template offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestableRequest {
    /// The club.
    pub club: Club,
    /// The requesting user.
    pub user: User,
    /// The template.
    pub template: RequestTemplate,
    /// A date to list times for.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// API response listing requestable dates and times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestableResponse {
    /// Enabled, non-past dates of the template.
    pub dates: Vec<NaiveDate>,
    /// Permitted times on the requested date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times: Option<Vec<SlotTime>>,
}

/// API request to check whether a request may be made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequestRequest {
    /// The club.
    pub club: Club,
    /// The requesting user.
    pub user: User,
    /// The selected venue.
    pub venue_id: String,
    /// The template.
    pub template: RequestTemplate,
    /// The selected date.
    pub date: NaiveDate,
    /// A concrete time.
    #[serde(default)]
    pub time: Option<SlotTime>,
    /// A part of the day.
    #[serde(default)]
    pub time_range: Option<TimeRange>,
}

/// API response to a request check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequestResponse {
    /// Whether the request may be submitted.
    pub allowed: bool,
}

/// What a submission does to a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum RequestAction {
    /// Create a request.
    Create {
        /// The composed request.
        draft: RequestDraft,
    },
    /// Replace a request.
    #[serde(rename_all = "camelCase")]
    Update {
        /// The request being replaced.
        request_id: String,
        /// The new selections.
        draft: RequestDraft,
    },
    /// Withdraw a request.
    #[serde(rename_all = "camelCase")]
    Delete {
        /// The request being withdrawn.
        request_id: String,
    },
}

/// API request to submit a request command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequestRequest {
    /// The club.
    pub club: Club,
    /// The requesting user.
    pub user: User,
    /// Templates known to the client.
    #[serde(default)]
    pub templates: Vec<RequestTemplate>,
    /// The command.
    #[serde(flatten)]
    pub action: RequestAction,
}

/// API response carrying a validated outbound mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequestResponse {
    /// The outbound call.
    pub mutation: Mutation,
    /// A success message.
    pub message: String,
}

/// API request to check a club subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionCheckRequest {
    /// The club.
    pub club: Club,
    /// The user.
    pub user: User,
}

/// API request to check whether a user may join a circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleCheckRequest {
    /// The club.
    pub club: Club,
    /// The user.
    pub user: User,
    /// The circle.
    pub circle: Circle,
    /// Sub-clubs the circle may belong to.
    #[serde(default)]
    pub sub_clubs: Vec<Club>,
}

/// API request to check whether a user may register for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCheckRequest {
    /// The club.
    pub club: Club,
    /// The user.
    pub user: User,
    /// The event.
    pub event: ClubEvent,
    /// Sub-clubs referenced by the event.
    #[serde(default)]
    pub sub_clubs: Vec<Club>,
}

/// API response naming a chat topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTopicResponse {
    /// The canonical topic.
    pub topic: String,
}

/// API response after recording a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordNotificationResponse {
    /// `false` when the notification was a duplicate or already expired.
    pub stored: bool,
}

/// API response listing cached notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNotificationsResponse {
    /// Retained notifications, oldest first.
    pub notifications: Vec<Notification>,
}
