// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! The API boundary between transports (HTTP, CLI) and the rules.

mod chat;
mod error;
mod handlers;
mod notifications;
mod request_response;
mod snapshot;

#[cfg(test)]
mod tests;

pub use chat::chat_topic;
pub use error::{ApiError, SnapshotError, translate_core_error, translate_domain_error};
pub use handlers::{
    active_venues, check_in, check_request, circle_eligibility, event_eligibility, open_schedules,
    requestable, schedulable_dates_for_venue, submit_request, subscription_eligibility, topic_for,
};
pub use notifications::{NOTIFICATION_RETENTION_DAYS, Notification, NotificationCache};
pub use request_response::{
    ActiveVenuesRequest, ActiveVenuesResponse, ChatTopicResponse, CheckInRequest, CheckInResponse,
    CheckRequestRequest, CheckRequestResponse, CircleCheckRequest, EventCheckRequest,
    ListNotificationsResponse, OpenSchedulesRequest, OpenSchedulesResponse,
    RecordNotificationResponse, RequestAction, RequestableRequest, RequestableResponse,
    SchedulableDatesRequest, SchedulableDatesResponse, SubmitRequestRequest, SubmitRequestResponse,
    SubscriptionCheckRequest,
};
pub use snapshot::ClubSnapshot;
