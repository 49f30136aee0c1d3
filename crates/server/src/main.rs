// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use courtside_api::{
    ActiveVenuesRequest, ActiveVenuesResponse, ApiError, ChatTopicResponse, CheckInRequest,
    CheckInResponse, CheckRequestRequest, CheckRequestResponse, CircleCheckRequest,
    EventCheckRequest, ListNotificationsResponse, Notification, NotificationCache,
    OpenSchedulesRequest, OpenSchedulesResponse, RecordNotificationResponse, RequestableRequest,
    RequestableResponse, SchedulableDatesRequest, SchedulableDatesResponse, SubmitRequestRequest,
    SubmitRequestResponse, SubscriptionCheckRequest,
};
use courtside_domain::{Clock, SystemClock, Verdict};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Courtside Server - HTTP front end for the club scheduling rules
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The rules are stateless; only the notification cache lives here.
#[derive(Clone)]
struct AppState {
    /// Notifications received while clients were away.
    notifications: Arc<Mutex<NotificationCache>>,
    /// Source of the current instant handed to every rule.
    clock: Arc<dyn Clock>,
}

/// Query parameters for GET `/chat/topic`.
#[derive(Debug, Deserialize)]
struct ChatTopicQuery {
    /// One participant.
    a: String,
    /// The other participant.
    b: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for POST `/venues/active` endpoint.
async fn handle_active_venues(Json(req): Json<ActiveVenuesRequest>) -> Json<ActiveVenuesResponse> {
    Json(courtside_api::active_venues(&req))
}

/// Handler for POST `/schedules/dates` endpoint.
///
/// Lists the dates of the venue's current schedule cycle.
async fn handle_schedulable_dates(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SchedulableDatesRequest>,
) -> Result<Json<SchedulableDatesResponse>, HttpError> {
    let response: SchedulableDatesResponse =
        courtside_api::schedulable_dates_for_venue(&req, app_state.clock.now())?;
    Ok(Json(response))
}

/// Handler for POST `/schedules/open` endpoint.
///
/// Filters the supplied schedules down to those the user may book.
async fn handle_open_schedules(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<OpenSchedulesRequest>,
) -> Result<Json<OpenSchedulesResponse>, HttpError> {
    let response: OpenSchedulesResponse =
        courtside_api::open_schedules(&req, app_state.clock.now())?;
    Ok(Json(response))
}

/// Handler for POST `/schedules/check_in` endpoint.
async fn handle_check_in(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CheckInRequest>,
) -> Result<Json<CheckInResponse>, HttpError> {
    let response: CheckInResponse = courtside_api::check_in(&req, app_state.clock.now())?;
    Ok(Json(response))
}

/// Handler for POST `/requests/dates` endpoint.
///
/// Lists a template's requestable dates and, when a date is given, its times.
async fn handle_requestable(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RequestableRequest>,
) -> Json<RequestableResponse> {
    Json(courtside_api::requestable(&req, app_state.clock.now()))
}

/// Handler for POST `/requests/check` endpoint.
async fn handle_check_request(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CheckRequestRequest>,
) -> Result<Json<CheckRequestResponse>, HttpError> {
    let response: CheckRequestResponse = courtside_api::check_request(&req, app_state.clock.now())?;
    Ok(Json(response))
}

/// Handler for POST `/requests/submit` endpoint.
///
/// Validates a create, update or delete and returns the outbound mutation.
/// Nothing is sent to the booking backend from here.
async fn handle_submit_request(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SubmitRequestRequest>,
) -> Result<Json<SubmitRequestResponse>, HttpError> {
    let response: SubmitRequestResponse =
        courtside_api::submit_request(req, app_state.clock.now())?;
    info!(message = %response.message, "Request submission validated");
    Ok(Json(response))
}

/// Handler for POST `/eligibility/subscription` endpoint.
async fn handle_subscription_eligibility(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SubscriptionCheckRequest>,
) -> Json<Verdict> {
    Json(courtside_api::subscription_eligibility(&req, app_state.clock.now()))
}

/// Handler for POST `/eligibility/circle` endpoint.
async fn handle_circle_eligibility(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CircleCheckRequest>,
) -> Json<Verdict> {
    Json(courtside_api::circle_eligibility(&req, app_state.clock.now()))
}

/// Handler for POST `/eligibility/event` endpoint.
async fn handle_event_eligibility(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<EventCheckRequest>,
) -> Json<Verdict> {
    Json(courtside_api::event_eligibility(&req, app_state.clock.now()))
}

/// Handler for GET `/chat/topic` endpoint.
async fn handle_chat_topic(
    Query(query): Query<ChatTopicQuery>,
) -> Result<Json<ChatTopicResponse>, HttpError> {
    info!(a = %query.a, b = %query.b, "Handling chat_topic request");
    let response: ChatTopicResponse = courtside_api::topic_for(&query.a, &query.b)?;
    Ok(Json(response))
}

/// Handler for POST `/notifications` endpoint.
///
/// Stores a notification unless its id is already cached.
async fn handle_record_notification(
    AxumState(app_state): AxumState<AppState>,
    Json(notification): Json<Notification>,
) -> Json<RecordNotificationResponse> {
    info!(id = %notification.id, "Handling record_notification request");
    let mut cache = app_state.notifications.lock().await;
    let stored: bool = cache.record(notification, app_state.clock.now());
    drop(cache);
    Json(RecordNotificationResponse { stored })
}

/// Handler for GET `/notifications` endpoint.
async fn handle_list_notifications(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListNotificationsResponse> {
    info!("Handling list_notifications request");
    let mut cache = app_state.notifications.lock().await;
    let notifications: Vec<Notification> = cache.list(app_state.clock.now());
    drop(cache);
    Json(ListNotificationsResponse { notifications })
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/venues/active", post(handle_active_venues))
        .route("/schedules/dates", post(handle_schedulable_dates))
        .route("/schedules/open", post(handle_open_schedules))
        .route("/schedules/check_in", post(handle_check_in))
        .route("/requests/dates", post(handle_requestable))
        .route("/requests/check", post(handle_check_request))
        .route("/requests/submit", post(handle_submit_request))
        .route(
            "/eligibility/subscription",
            post(handle_subscription_eligibility),
        )
        .route("/eligibility/circle", post(handle_circle_eligibility))
        .route("/eligibility/event", post(handle_event_eligibility))
        .route("/chat/topic", get(handle_chat_topic))
        .route(
            "/notifications",
            post(handle_record_notification).get(handle_list_notifications),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Courtside Server");

    let app_state: AppState = AppState {
        notifications: Arc::new(Mutex::new(NotificationCache::new())),
        clock: Arc::new(SystemClock),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use chrono::{DateTime, TimeZone, Utc};
    use courtside_domain::FixedClock;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    /// 2024-03-08 09:50 UTC, a Friday.
    fn create_test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 8, 9, 50, 0).unwrap()
    }

    fn create_test_app_state() -> AppState {
        AppState {
            notifications: Arc::new(Mutex::new(NotificationCache::new())),
            clock: Arc::new(FixedClock(create_test_now())),
        }
    }

    fn create_test_club() -> Value {
        json!({
            "id": "club-1",
            "name": "Riverside Tennis",
            "timezone": "UTC",
            "venues": [
                {
                    "id": "venue-a",
                    "name": "Centre Courts",
                    "type": "real",
                    "status": "activated",
                    "rsEtDate": "2024-03-10",
                    "setting": {
                        "timeSlotInterval": 60,
                        "curtActivatedCourts": [1, 2],
                        "curtTimeSlots": ["10:00", "14:00"],
                        "rules": { "isRequireCheckIn": true }
                    }
                },
                {
                    "id": "venue-v",
                    "name": "Online Coaching",
                    "type": "virtual",
                    "status": "activated"
                }
            ],
            "setting": { "isReqSubscription": true, "subscriptionPrice": 25 }
        })
    }

    fn create_test_user() -> Value {
        json!({
            "id": "user-1",
            "email": "player@example.com",
            "gender": "female",
            "level": 3.5
        })
    }

    fn create_test_schedule() -> Value {
        json!({
            "id": "sched-mine",
            "date": "2024-03-08",
            "time": "10:00",
            "court": 2,
            "venue": "venue-a",
            "status": "CONFIRM",
            "owner": "user-1"
        })
    }

    async fn send(
        app: Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (HttpStatusCode, Value) {
        let request_body: Body = match body {
            Some(value) => Body::from(serde_json::to_string(&value).unwrap()),
            None => Body::empty(),
        };
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(request_body)
                    .unwrap(),
            )
            .await
            .unwrap();

        let status: HttpStatusCode = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    #[tokio::test]
    async fn test_active_venues_splits_real_and_virtual() {
        let app: Router = build_router(create_test_app_state());
        let body: Value = json!({ "club": create_test_club(), "user": create_test_user() });

        let (status, response) = send(app, "POST", "/venues/active", Some(body)).await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(response["real"][0]["id"], "venue-a");
        assert_eq!(response["virtual"][0]["id"], "venue-v");
    }

    #[tokio::test]
    async fn test_schedulable_dates_run_from_today_to_cycle_end() {
        let app: Router = build_router(create_test_app_state());
        let body: Value = json!({ "club": create_test_club(), "venueId": "venue-a" });

        let (status, response) = send(app, "POST", "/schedules/dates", Some(body)).await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(
            response["dates"],
            json!(["2024-03-08", "2024-03-09", "2024-03-10"])
        );
    }

    #[tokio::test]
    async fn test_open_schedules_unknown_venue_is_not_found() {
        let app: Router = build_router(create_test_app_state());
        let body: Value = json!({
            "club": create_test_club(),
            "user": create_test_user(),
            "venueId": "venue-missing",
            "schedules": []
        });

        let (status, response) = send(app, "POST", "/schedules/open", Some(body)).await;

        assert_eq!(status, HttpStatusCode::NOT_FOUND);
        assert_eq!(response["error"], true);
        assert!(
            response["message"]
                .as_str()
                .unwrap()
                .contains("venue-missing")
        );
    }

    #[tokio::test]
    async fn test_open_schedules_invalid_filter_is_bad_request() {
        let app: Router = build_router(create_test_app_state());
        let body: Value = json!({
            "club": create_test_club(),
            "user": create_test_user(),
            "venueId": "venue-a",
            "schedules": [],
            "timeFilter": "midnight"
        });

        let (status, response) = send(app, "POST", "/schedules/open", Some(body)).await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
        assert_eq!(response["error"], true);
    }

    #[tokio::test]
    async fn test_owner_checks_in_pending_schedule() {
        let app: Router = build_router(create_test_app_state());
        let body: Value = json!({
            "club": create_test_club(),
            "user": create_test_user(),
            "schedules": [create_test_schedule()],
            "scheduleId": "sched-mine"
        });

        let (status, response) = send(app, "POST", "/schedules/check_in", Some(body)).await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(response["scheduleId"], "sched-mine");
        assert_eq!(response["status"], "pending");
        assert_eq!(response["mutation"]["action"], "checkIn");
    }

    #[tokio::test]
    async fn test_stranger_check_in_is_rule_violation() {
        let app: Router = build_router(create_test_app_state());
        let body: Value = json!({
            "club": create_test_club(),
            "user": { "id": "user-9", "email": "stranger@example.com" },
            "schedules": [create_test_schedule()],
            "scheduleId": "sched-mine"
        });

        let (status, response) = send(app, "POST", "/schedules/check_in", Some(body)).await;

        assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response["error"], true);
    }

    #[tokio::test]
    async fn test_submit_without_template_is_bad_request() {
        let app: Router = build_router(create_test_app_state());
        let body: Value = json!({
            "club": create_test_club(),
            "user": create_test_user(),
            "action": "create",
            "draft": { "venue": "venue-a", "date": "2024-03-12", "time": "09:00" }
        });

        let (status, response) = send(app, "POST", "/requests/submit", Some(body)).await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
        assert!(response["message"].as_str().unwrap().contains("template"));
    }

    #[tokio::test]
    async fn test_missing_subscription_suggests_subscribe() {
        let app: Router = build_router(create_test_app_state());
        let body: Value = json!({ "club": create_test_club(), "user": create_test_user() });

        let (status, response) = send(app, "POST", "/eligibility/subscription", Some(body)).await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(response["valid"], false);
        assert_eq!(response["reason"], "subscribe");
        assert_eq!(response["primaryAction"], "Subscribe");
    }

    #[tokio::test]
    async fn test_event_for_uninvited_user_suggests_single_circle() {
        let app: Router = build_router(create_test_app_state());
        let body: Value = json!({
            "club": create_test_club(),
            "user": create_test_user(),
            "event": {
                "id": "event-1",
                "title": "Spring Ladder",
                "regRestrictType": "ONLY_CIRCLE_MEMBERS",
                "invitedCircles": [{ "id": "circle-1", "name": "Thursday Doubles" }]
            }
        });

        let (status, response) = send(app, "POST", "/eligibility/event", Some(body)).await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(response["valid"], false);
        assert_eq!(response["reason"], "one_circle_join");
    }

    #[tokio::test]
    async fn test_chat_topic_is_order_independent() {
        let app: Router = build_router(create_test_app_state());

        let (status, forward) = send(app.clone(), "GET", "/chat/topic?a=zoe&b=adam", None).await;
        let (_, backward) = send(app, "GET", "/chat/topic?a=adam&b=zoe", None).await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(forward["topic"], "adam_zoe");
        assert_eq!(forward, backward);
    }

    #[tokio::test]
    async fn test_chat_topic_empty_id_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let (status, response) = send(app, "GET", "/chat/topic?a=&b=adam", None).await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
        assert_eq!(response["error"], true);
    }

    #[tokio::test]
    async fn test_notifications_ignore_duplicates_and_list_retained() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);
        let notification: Value = json!({
            "id": "msg-1",
            "title": "Court assigned",
            "body": "Court 2 at 10:00",
            "receivedAt": "2024-03-08T09:00:00Z"
        });

        let (status, first) = send(
            app.clone(),
            "POST",
            "/notifications",
            Some(notification.clone()),
        )
        .await;
        let (_, second) = send(app.clone(), "POST", "/notifications", Some(notification)).await;
        let (_, listed) = send(app, "GET", "/notifications", None).await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(first["stored"], true);
        assert_eq!(second["stored"], false);
        assert_eq!(listed["notifications"].as_array().unwrap().len(), 1);
        assert_eq!(listed["notifications"][0]["id"], "msg-1");
    }

    #[tokio::test]
    async fn test_stale_notification_is_not_stored() {
        let app: Router = build_router(create_test_app_state());
        let notification: Value = json!({
            "id": "msg-old",
            "receivedAt": "2024-03-01T09:00:00Z"
        });

        let (_, response) = send(app, "POST", "/notifications", Some(notification)).await;

        assert_eq!(response["stored"], false);
    }
}
