// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use fairway_api::{
    ApiError, ApproveStandingRequestRequest, ApproveStandingRequestResponse,
    AuthenticatedActor, AvailabilitySummaryResponse, BookSlotRequest, BookSlotResponse,
    CancelReservationRequest, CancelReservationResponse, CreateEventRequest, CreateEventResponse,
    DeleteEventResponse, GenerateDaySheetRequest, GenerateDaySheetResponse, GetDaySheetResponse,
    ListEventsResponse, ListSlotsResponse, ListStandingRequestsResponse,
    RevokeStandingRequestResponse, Role, SubmitStandingRequestRequest,
    SubmitStandingRequestResponse, AllMembersEligible, approve_standing_request,
    authenticate_stub, book_slot, cancel_reservation, create_event, delete_event,
    generate_day_sheet, get_day_sheet, list_events, list_slots, list_standing_requests,
    revoke_standing_request, submit_standing_request, summarize_availability,
};
use fairway_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{OffsetDateTime, PrimitiveDateTime};
use tokio::sync::Mutex;
use tracing::info;

/// Fairway Server - HTTP server for the Fairway tee sheet system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// MariaDB/MySQL connection URL. Takes precedence over --database.
    #[arg(long)]
    mysql_url: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The persistence adapter is wrapped in a Mutex to allow safe
/// concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence adapter for the tee sheet store.
    persistence: Arc<Mutex<Persistence>>,
}

/// API request for generating a day sheet.
///
/// This includes authentication information in addition to the sheet data.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct GenerateDaySheetApiRequest {
    /// The member account performing this action.
    member_id: i64,
    /// The role of the actor.
    actor_role: String,
    /// The date to generate (ISO 8601).
    sheet_date: String,
    /// First tee time of the day (ISO 8601).
    operating_start: String,
    /// Last tee time of the day (ISO 8601).
    operating_end: String,
    /// Minutes between tee times for a uniform grid.
    interval_minutes: Option<u16>,
    /// Minute offsets repeated every hour.
    hourly_offset_minutes: Option<Vec<u8>>,
}

/// API request for booking a slot.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct BookSlotApiRequest {
    /// The member account performing this action.
    member_id: i64,
    /// The role of the actor.
    actor_role: String,
    /// The slot to book into.
    slot_id: i64,
    /// Players covered by the booking.
    number_of_players: u8,
    /// Carts requested.
    number_of_carts: u8,
}

/// API request for cancelling a reservation.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CancelReservationApiRequest {
    /// The member account performing this action.
    member_id: i64,
    /// The role of the actor.
    actor_role: String,
    /// The reservation to cancel.
    reservation_id: i64,
}

/// API request for creating a club event.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateEventApiRequest {
    /// The member account performing this action.
    member_id: i64,
    /// The role of the actor.
    actor_role: String,
    /// The event display name.
    name: String,
    /// The event date (ISO 8601).
    event_date: String,
    /// First blocked tee time (ISO 8601).
    start_time: String,
    /// Last blocked tee time (ISO 8601).
    end_time: String,
    /// Display color for calendar rendering.
    color: String,
}

/// API request for deleting a club event.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct DeleteEventApiRequest {
    /// The member account performing this action.
    member_id: i64,
    /// The role of the actor.
    actor_role: String,
}

/// API request for submitting a standing request.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SubmitStandingRequestApiRequest {
    /// The member account performing this action.
    member_id: i64,
    /// The role of the actor.
    actor_role: String,
    /// Up to three additional party members.
    partner_ids: Vec<i64>,
    /// The weekday requested, 0 (Sunday) through 6.
    day_of_week: u8,
    /// First date of the recurrence (ISO 8601).
    start_date: String,
    /// Last date of the recurrence (ISO 8601).
    end_date: String,
    /// The requested tee time (ISO 8601).
    desired_time: String,
}

/// API request for approving a standing request.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ApproveStandingRequestApiRequest {
    /// The member account performing this action.
    member_id: i64,
    /// The role of the actor.
    actor_role: String,
    /// The request to approve.
    standing_request_id: i64,
    /// The priority rank. Lower wins.
    priority: i32,
    /// The granted tee time (ISO 8601).
    approved_time: String,
}

/// API request for revoking a standing request.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RevokeStandingRequestApiRequest {
    /// The member account performing this action.
    member_id: i64,
    /// The role of the actor.
    actor_role: String,
    /// The request to revoke.
    standing_request_id: i64,
}

/// Query parameters for fetching one day sheet.
#[derive(Debug, Deserialize)]
struct DaySheetQuery {
    /// The sheet date (ISO 8601).
    sheet_date: String,
}

/// Query parameters for date-range endpoints.
#[derive(Debug, Deserialize)]
struct RangeQuery {
    /// First date of the range (ISO 8601).
    start_date: String,
    /// Last date of the range (ISO 8601).
    end_date: String,
}

/// Query parameters for listing standing requests.
#[derive(Debug, Deserialize)]
struct StandingRequestsQuery {
    /// The member account performing this action.
    member_id: i64,
    /// The role of the actor.
    actor_role: String,
    /// Optional status filter (Pending, Approved, Rejected).
    status: Option<String>,
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
        let status = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } | ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. } | ApiError::BookingPolicyViolation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::AlreadyExists { .. }
            | ApiError::SlotUnavailable { .. }
            | ApiError::CapacityExceeded { .. }
            | ApiError::HasReservations { .. } => StatusCode::CONFLICT,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Parses a role string into a Role enum.
fn parse_role(role_str: &str) -> Result<Role, HttpError> {
    match role_str.to_lowercase().as_str() {
        "member" => Ok(Role::Member),
        "staff" => Ok(Role::Staff),
        "committee" => Ok(Role::Committee),
        _ => Err(HttpError {
            status: StatusCode::BAD_REQUEST,
            message: format!(
                "Invalid role: '{role_str}'. Must be 'member', 'staff', or 'committee'"
            ),
        }),
    }
}

/// Authenticates the actor named in a request envelope.
fn authenticate(member_id: i64, role_str: &str) -> Result<AuthenticatedActor, HttpError> {
    let role: Role = parse_role(role_str)?;
    authenticate_stub(member_id, role)
        .map_err(ApiError::from)
        .map_err(HttpError::from)
}

/// Returns the current wall-clock time without offset.
fn current_datetime() -> PrimitiveDateTime {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(now.date(), now.time())
}

/// Handler for POST `/day_sheets` endpoint.
///
/// Generates the tee sheet for one date.
async fn handle_generate_day_sheet(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<GenerateDaySheetApiRequest>,
) -> Result<Json<GenerateDaySheetResponse>, HttpError> {
    info!(
        member_id = req.member_id,
        role = %req.actor_role,
        sheet_date = %req.sheet_date,
        "Handling generate_day_sheet request"
    );

    let actor: AuthenticatedActor = authenticate(req.member_id, &req.actor_role)?;
    let request: GenerateDaySheetRequest = GenerateDaySheetRequest {
        sheet_date: req.sheet_date,
        operating_start: req.operating_start,
        operating_end: req.operating_end,
        interval_minutes: req.interval_minutes,
        hourly_offset_minutes: req.hourly_offset_minutes,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: GenerateDaySheetResponse =
        generate_day_sheet(&mut persistence, &request, &actor, current_datetime())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/day_sheets` endpoint.
async fn handle_get_day_sheet(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<DaySheetQuery>,
) -> Result<Json<GetDaySheetResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: GetDaySheetResponse = get_day_sheet(&mut persistence, &query.sheet_date)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/slots` endpoint.
async fn handle_list_slots(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<ListSlotsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListSlotsResponse =
        list_slots(&mut persistence, &query.start_date, &query.end_date)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/availability` endpoint.
async fn handle_summarize_availability(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<AvailabilitySummaryResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: AvailabilitySummaryResponse =
        summarize_availability(&mut persistence, &query.start_date, &query.end_date)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/reservations` endpoint.
///
/// Books players into a slot for the acting member.
async fn handle_book_slot(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<BookSlotApiRequest>,
) -> Result<Json<BookSlotResponse>, HttpError> {
    info!(
        member_id = req.member_id,
        slot_id = req.slot_id,
        number_of_players = req.number_of_players,
        "Handling book_slot request"
    );

    let actor: AuthenticatedActor = authenticate(req.member_id, &req.actor_role)?;
    let request: BookSlotRequest = BookSlotRequest {
        slot_id: req.slot_id,
        number_of_players: req.number_of_players,
        number_of_carts: req.number_of_carts,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: BookSlotResponse =
        book_slot(&mut persistence, &request, &actor, current_datetime())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/reservations/cancel` endpoint.
async fn handle_cancel_reservation(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CancelReservationApiRequest>,
) -> Result<Json<CancelReservationResponse>, HttpError> {
    info!(
        member_id = req.member_id,
        reservation_id = req.reservation_id,
        "Handling cancel_reservation request"
    );

    let actor: AuthenticatedActor = authenticate(req.member_id, &req.actor_role)?;
    let request: CancelReservationRequest = CancelReservationRequest {
        reservation_id: req.reservation_id,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: CancelReservationResponse =
        cancel_reservation(&mut persistence, &request, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/events` endpoint.
async fn handle_create_event(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateEventApiRequest>,
) -> Result<Json<CreateEventResponse>, HttpError> {
    info!(
        member_id = req.member_id,
        name = %req.name,
        event_date = %req.event_date,
        "Handling create_event request"
    );

    let actor: AuthenticatedActor = authenticate(req.member_id, &req.actor_role)?;
    let request: CreateEventRequest = CreateEventRequest {
        name: req.name,
        event_date: req.event_date,
        start_time: req.start_time,
        end_time: req.end_time,
        color: req.color,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateEventResponse = create_event(&mut persistence, &request, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/events/{event_id}/delete` endpoint.
async fn handle_delete_event(
    AxumState(app_state): AxumState<AppState>,
    Path(event_id): Path<i64>,
    Json(req): Json<DeleteEventApiRequest>,
) -> Result<Json<DeleteEventResponse>, HttpError> {
    info!(
        member_id = req.member_id,
        event_id, "Handling delete_event request"
    );

    let actor: AuthenticatedActor = authenticate(req.member_id, &req.actor_role)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteEventResponse = delete_event(&mut persistence, event_id, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/events` endpoint.
async fn handle_list_events(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<ListEventsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListEventsResponse =
        list_events(&mut persistence, &query.start_date, &query.end_date)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/standing_requests` endpoint.
async fn handle_submit_standing_request(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SubmitStandingRequestApiRequest>,
) -> Result<Json<SubmitStandingRequestResponse>, HttpError> {
    info!(
        member_id = req.member_id,
        day_of_week = req.day_of_week,
        desired_time = %req.desired_time,
        "Handling submit_standing_request request"
    );

    let actor: AuthenticatedActor = authenticate(req.member_id, &req.actor_role)?;
    let request: SubmitStandingRequestRequest = SubmitStandingRequestRequest {
        partner_ids: req.partner_ids,
        day_of_week: req.day_of_week,
        start_date: req.start_date,
        end_date: req.end_date,
        desired_time: req.desired_time,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: SubmitStandingRequestResponse =
        submit_standing_request(&mut persistence, &request, &actor, &AllMembersEligible)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/standing_requests/approve` endpoint.
async fn handle_approve_standing_request(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ApproveStandingRequestApiRequest>,
) -> Result<Json<ApproveStandingRequestResponse>, HttpError> {
    info!(
        member_id = req.member_id,
        standing_request_id = req.standing_request_id,
        priority = req.priority,
        "Handling approve_standing_request request"
    );

    let actor: AuthenticatedActor = authenticate(req.member_id, &req.actor_role)?;
    let request: ApproveStandingRequestRequest = ApproveStandingRequestRequest {
        standing_request_id: req.standing_request_id,
        priority: req.priority,
        approved_time: req.approved_time,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: ApproveStandingRequestResponse = approve_standing_request(
        &mut persistence,
        &request,
        &actor,
        current_datetime().date(),
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/standing_requests/revoke` endpoint.
async fn handle_revoke_standing_request(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RevokeStandingRequestApiRequest>,
) -> Result<Json<RevokeStandingRequestResponse>, HttpError> {
    info!(
        member_id = req.member_id,
        standing_request_id = req.standing_request_id,
        "Handling revoke_standing_request request"
    );

    let actor: AuthenticatedActor = authenticate(req.member_id, &req.actor_role)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: RevokeStandingRequestResponse =
        revoke_standing_request(&mut persistence, req.standing_request_id, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/standing_requests` endpoint.
async fn handle_list_standing_requests(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<StandingRequestsQuery>,
) -> Result<Json<ListStandingRequestsResponse>, HttpError> {
    let actor: AuthenticatedActor = authenticate(query.member_id, &query.actor_role)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: ListStandingRequestsResponse =
        list_standing_requests(&mut persistence, query.status.as_deref(), &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/day_sheets", post(handle_generate_day_sheet))
        .route("/day_sheets", get(handle_get_day_sheet))
        .route("/slots", get(handle_list_slots))
        .route("/availability", get(handle_summarize_availability))
        .route("/reservations", post(handle_book_slot))
        .route("/reservations/cancel", post(handle_cancel_reservation))
        .route("/events", post(handle_create_event))
        .route("/events", get(handle_list_events))
        .route("/events/{event_id}/delete", post(handle_delete_event))
        .route("/standing_requests", post(handle_submit_standing_request))
        .route("/standing_requests", get(handle_list_standing_requests))
        .route(
            "/standing_requests/approve",
            post(handle_approve_standing_request),
        )
        .route(
            "/standing_requests/revoke",
            post(handle_revoke_standing_request),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Fairway Server");

    // Initialize persistence based on CLI arguments
    let persistence: Persistence = if let Some(mysql_url) = &args.mysql_url {
        info!("Using MariaDB database");
        Persistence::new_with_mysql(mysql_url)?
    } else if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }

    fn generate_request(role: &str) -> GenerateDaySheetApiRequest {
        GenerateDaySheetApiRequest {
            member_id: 500,
            actor_role: role.to_string(),
            sheet_date: String::from("2026-06-06"),
            operating_start: String::from("08:00:00"),
            operating_end: String::from("10:00:00"),
            interval_minutes: Some(30),
            hourly_offset_minutes: None,
        }
    }

    async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn get_uri(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_generate_and_fetch_day_sheet() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let response = post_json(app.clone(), "/day_sheets", &generate_request("staff")).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let generated: GenerateDaySheetResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(generated.slot_count, 5);

        let fetched = get_uri(app, "/day_sheets?sheet_date=2026-06-06").await;
        assert_eq!(fetched.status(), HttpStatusCode::OK);

        let bytes = axum::body::to_bytes(fetched.into_body(), usize::MAX)
            .await
            .unwrap();
        let sheet: GetDaySheetResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(sheet.slots.len(), 5);
    }

    #[tokio::test]
    async fn test_generate_requires_staff_role() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let response = post_json(app, "/day_sheets", &generate_request("member")).await;

        assert_eq!(response.status(), HttpStatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unknown_role_is_bad_request() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let response = post_json(app, "/day_sheets", &generate_request("greenskeeper")).await;

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_duplicate_sheet_is_conflict() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let first = post_json(app.clone(), "/day_sheets", &generate_request("staff")).await;
        assert_eq!(first.status(), HttpStatusCode::OK);

        let second = post_json(app, "/day_sheets", &generate_request("staff")).await;
        assert_eq!(second.status(), HttpStatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_missing_sheet_is_not_found() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let response = get_uri(app, "/day_sheets?sheet_date=2026-06-06").await;

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_booking_flow_over_http() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let generated = post_json(app.clone(), "/day_sheets", &generate_request("staff")).await;
        assert_eq!(generated.status(), HttpStatusCode::OK);

        let fetched = get_uri(app.clone(), "/day_sheets?sheet_date=2026-06-06").await;
        let bytes = axum::body::to_bytes(fetched.into_body(), usize::MAX)
            .await
            .unwrap();
        let sheet: GetDaySheetResponse = serde_json::from_slice(&bytes).unwrap();
        let slot_id: i64 = sheet.slots[0].slot_id;

        let booking = BookSlotApiRequest {
            member_id: 7,
            actor_role: String::from("member"),
            slot_id,
            number_of_players: 4,
            number_of_carts: 2,
        };
        let booked = post_json(app.clone(), "/reservations", &booking).await;
        assert_eq!(booked.status(), HttpStatusCode::OK);

        // The slot is now full; a second booking conflicts.
        let second = BookSlotApiRequest {
            member_id: 8,
            actor_role: String::from("member"),
            slot_id,
            number_of_players: 1,
            number_of_carts: 0,
        };
        let refused = post_json(app, "/reservations", &second).await;
        assert_eq!(refused.status(), HttpStatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_booking_policy_violation_is_bad_request() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);
        post_json(app.clone(), "/day_sheets", &generate_request("staff")).await;

        let booking = BookSlotApiRequest {
            member_id: 7,
            actor_role: String::from("member"),
            slot_id: 1,
            number_of_players: 5,
            number_of_carts: 0,
        };
        let response = post_json(app, "/reservations", &booking).await;

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_standing_request_lifecycle_over_http() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let submit = SubmitStandingRequestApiRequest {
            member_id: 42,
            actor_role: String::from("member"),
            partner_ids: vec![43],
            day_of_week: 6,
            start_date: String::from("2026-01-01"),
            end_date: String::from("2026-12-31"),
            desired_time: String::from("09:00:00"),
        };
        let submitted = post_json(app.clone(), "/standing_requests", &submit).await;
        assert_eq!(submitted.status(), HttpStatusCode::OK);

        let bytes = axum::body::to_bytes(submitted.into_body(), usize::MAX)
            .await
            .unwrap();
        let created: SubmitStandingRequestResponse = serde_json::from_slice(&bytes).unwrap();

        let approve = ApproveStandingRequestApiRequest {
            member_id: 900,
            actor_role: String::from("committee"),
            standing_request_id: created.standing_request_id,
            priority: 1,
            approved_time: String::from("09:00:00"),
        };
        let approved = post_json(app.clone(), "/standing_requests/approve", &approve).await;
        assert_eq!(approved.status(), HttpStatusCode::OK);

        let listed = get_uri(
            app,
            "/standing_requests?member_id=900&actor_role=committee&status=Approved",
        )
        .await;
        assert_eq!(listed.status(), HttpStatusCode::OK);
        let bytes = axum::body::to_bytes(listed.into_body(), usize::MAX)
            .await
            .unwrap();
        let list: ListStandingRequestsResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(list.requests.len(), 1);
        assert_eq!(list.requests[0].member_id, 42);
    }

    #[tokio::test]
    async fn test_event_block_and_delete_over_http() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);
        post_json(app.clone(), "/day_sheets", &generate_request("staff")).await;

        let event = CreateEventApiRequest {
            member_id: 500,
            actor_role: String::from("staff"),
            name: String::from("Club Championship"),
            event_date: String::from("2026-06-06"),
            start_time: String::from("08:30:00"),
            end_time: String::from("09:30:00"),
            color: String::from("#2e7d32"),
        };
        let created = post_json(app.clone(), "/events", &event).await;
        assert_eq!(created.status(), HttpStatusCode::OK);

        let bytes = axum::body::to_bytes(created.into_body(), usize::MAX)
            .await
            .unwrap();
        let response: CreateEventResponse = serde_json::from_slice(&bytes).unwrap();

        let delete_body = DeleteEventApiRequest {
            member_id: 500,
            actor_role: String::from("staff"),
        };
        let deleted = post_json(
            app,
            &format!("/events/{}/delete", response.event_id),
            &delete_body,
        )
        .await;
        assert_eq!(deleted.status(), HttpStatusCode::OK);
    }
}
