// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API operation handlers.
//!
//! Each handler checks the role gate, parses and validates its input,
//! orchestrates the planning logic against the persistence adapter, and
//! translates every lower-layer error into the API contract. Handlers take
//! the current time as an argument so they stay deterministic under test;
//! the transport supplies the real clock.

use crate::auth::{AuthenticatedActor, AuthorizationService, MembershipEligibility};
use crate::booking_policy::BookingPolicy;
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    ApproveStandingRequestRequest, ApproveStandingRequestResponse, AvailabilitySummaryResponse,
    BookSlotRequest, BookSlotResponse, CancelReservationRequest, CancelReservationResponse,
    CreateEventRequest, CreateEventResponse, DayAvailabilityInfo, DaySlotsInfo,
    DeleteEventResponse, EventInfo, GenerateDaySheetRequest, GenerateDaySheetResponse,
    GetDaySheetResponse, ListEventsResponse, ListSlotsResponse, ListStandingRequestsResponse,
    RevokeStandingRequestResponse, SkippedRequestInfo, SlotInfo, StandingRequestInfo,
    SubmitStandingRequestRequest, SubmitStandingRequestResponse,
};
use fairway_core::build_day_sheet_plan;
use fairway_domain::{
    ClubEvent, IntervalPolicy, OperatingHours, RequestStatus, Slot, StandingRequest,
    validate_date_range, validate_priority, weekday_from_index, weekday_index,
};
use fairway_persistence::Persistence;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time};
use tracing::{debug, warn};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]:[second]");
const DATETIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

fn parse_date(field: &str, value: &str) -> Result<Date, ApiError> {
    Date::parse(value, DATE_FORMAT).map_err(|_| ApiError::InvalidInput {
        field: field.to_string(),
        message: format!("'{value}' is not a valid date (expected YYYY-MM-DD)"),
    })
}

fn parse_time(field: &str, value: &str) -> Result<Time, ApiError> {
    Time::parse(value, TIME_FORMAT).map_err(|_| ApiError::InvalidInput {
        field: field.to_string(),
        message: format!("'{value}' is not a valid time (expected HH:MM:SS)"),
    })
}

fn fmt_date(date: Date) -> Result<String, ApiError> {
    date.format(DATE_FORMAT).map_err(|err| ApiError::Internal {
        message: format!("Failed to format date: {err}"),
    })
}

fn fmt_time(time: Time) -> Result<String, ApiError> {
    time.format(TIME_FORMAT).map_err(|err| ApiError::Internal {
        message: format!("Failed to format time: {err}"),
    })
}

fn fmt_datetime(datetime: PrimitiveDateTime) -> Result<String, ApiError> {
    datetime
        .format(DATETIME_FORMAT)
        .map_err(|err| ApiError::Internal {
            message: format!("Failed to format datetime: {err}"),
        })
}

fn slot_info(slot: &Slot) -> Result<SlotInfo, ApiError> {
    Ok(SlotInfo {
        slot_id: slot.slot_id().ok_or_else(|| ApiError::Internal {
            message: String::from("Stored slot has no identifier"),
        })?,
        start: fmt_datetime(slot.start())?,
        booked_player_count: slot.booked_player_count(),
        max_players: slot.max_players(),
        is_available: slot.is_available(),
        notes: slot.notes().map(str::to_string),
        linked_event_id: slot.linked_event_id(),
    })
}

fn event_info(event: &ClubEvent) -> Result<EventInfo, ApiError> {
    Ok(EventInfo {
        event_id: event.event_id.ok_or_else(|| ApiError::Internal {
            message: String::from("Stored event has no identifier"),
        })?,
        name: event.name.clone(),
        event_date: fmt_date(event.event_date)?,
        start_time: fmt_time(event.start_time)?,
        end_time: fmt_time(event.end_time)?,
        color: event.color.clone(),
    })
}

fn standing_request_info(request: &StandingRequest) -> Result<StandingRequestInfo, ApiError> {
    Ok(StandingRequestInfo {
        standing_request_id: request.standing_request_id.ok_or_else(|| {
            ApiError::Internal {
                message: String::from("Stored standing request has no identifier"),
            }
        })?,
        member_id: request.member_id,
        partner_ids: request.partner_ids.clone(),
        day_of_week: weekday_index(request.day_of_week),
        start_date: fmt_date(request.start_date)?,
        end_date: fmt_date(request.end_date)?,
        desired_time: fmt_time(request.desired_time)?,
        status: request.status.as_str().to_string(),
        priority: request.priority,
        approved_time: request.approved_time.map(fmt_time).transpose()?,
        approved_by: request.approved_by,
        approved_date: request.approved_date.map(fmt_date).transpose()?,
    })
}

fn interval_policy_from_request(request: &GenerateDaySheetRequest) -> Result<IntervalPolicy, ApiError> {
    match (request.interval_minutes, request.hourly_offset_minutes.as_ref()) {
        (Some(minutes), None) => IntervalPolicy::uniform(minutes).map_err(translate_domain_error),
        (None, Some(offsets)) => {
            IntervalPolicy::hourly_offsets(offsets.clone()).map_err(translate_domain_error)
        }
        _ => Err(ApiError::InvalidInput {
            field: String::from("interval_minutes"),
            message: String::from(
                "Exactly one of interval_minutes and hourly_offset_minutes must be set",
            ),
        }),
    }
}

/// Generates the tee sheet for one date.
///
/// Approved standing requests are resolved first and their slots are
/// written empty, then one single-player reservation is attached per
/// party member with the slot's booked count raised in the same
/// transaction. An attachment failure is logged and does not fail the
/// generation; the tee time stays open for regular booking.
///
/// # Arguments
///
/// * `persistence` - The persistence adapter
/// * `request` - The generation request
/// * `actor` - The authenticated actor. Must hold the Staff role.
/// * `now` - The current time, stamped onto standing reservations
///
/// # Errors
///
/// Returns an error if the actor is not Staff, the input is invalid, a
/// sheet already exists for the date, or persistence fails.
pub fn generate_day_sheet(
    persistence: &mut Persistence,
    request: &GenerateDaySheetRequest,
    actor: &AuthenticatedActor,
    now: PrimitiveDateTime,
) -> Result<GenerateDaySheetResponse, ApiError> {
    AuthorizationService::authorize_generate_day_sheet(actor)?;

    let sheet_date = parse_date("sheet_date", &request.sheet_date)?;
    let operating_start = parse_time("operating_start", &request.operating_start)?;
    let operating_end = parse_time("operating_end", &request.operating_end)?;
    let hours = OperatingHours::new(operating_start, operating_end)
        .map_err(translate_domain_error)?;
    let policy = interval_policy_from_request(request)?;

    let approved = persistence
        .list_standing_requests(Some(RequestStatus::Approved))
        .map_err(translate_persistence_error)?;
    let plan = build_day_sheet_plan(sheet_date, hours, policy, &approved)
        .map_err(translate_core_error)?;

    let day_sheet_id = persistence
        .insert_day_sheet(&plan.sheet, &plan.slots)
        .map_err(translate_persistence_error)?;

    let mut standing_reservation_count = 0;
    for assignment in &plan.assignments {
        match persistence.attach_standing_reservations(day_sheet_id, sheet_date, assignment, now) {
            Ok(written) => standing_reservation_count += written,
            Err(err) => {
                warn!(
                    standing_request_id = ?assignment.request.standing_request_id,
                    member_id = assignment.request.member_id,
                    error = %err,
                    "Failed to attach standing reservations; the tee time stays open"
                );
            }
        }
    }

    for skip in &plan.skipped {
        warn!(
            standing_request_id = ?skip.standing_request_id,
            member_id = skip.member_id,
            reason = %skip.reason,
            "Standing request skipped during day sheet generation"
        );
    }

    debug!(
        day_sheet_id,
        sheet_date = %request.sheet_date,
        slot_count = plan.slots.len(),
        standing_reservation_count,
        "Day sheet generated"
    );

    Ok(GenerateDaySheetResponse {
        day_sheet_id,
        sheet_date: request.sheet_date.clone(),
        slot_count: plan.slots.len(),
        standing_reservation_count,
        skipped: plan
            .skipped
            .iter()
            .map(|skip| SkippedRequestInfo {
                standing_request_id: skip.standing_request_id,
                member_id: skip.member_id,
                reason: skip.reason.to_string(),
            })
            .collect(),
        message: format!(
            "Day sheet generated for {} with {} slot(s)",
            request.sheet_date,
            plan.slots.len()
        ),
    })
}

/// Retrieves the day sheet for a date with its slots in tee-time order.
///
/// Reads are open to every authenticated actor, so no role gate applies.
///
/// # Errors
///
/// Returns an error if the date is malformed or no sheet exists for it.
pub fn get_day_sheet(
    persistence: &mut Persistence,
    sheet_date: &str,
) -> Result<GetDaySheetResponse, ApiError> {
    let date = parse_date("sheet_date", sheet_date)?;
    let (sheet, slots) = persistence
        .get_day_sheet_with_slots(date)
        .map_err(translate_persistence_error)?;

    Ok(GetDaySheetResponse {
        day_sheet_id: sheet.day_sheet_id().ok_or_else(|| ApiError::Internal {
            message: String::from("Stored day sheet has no identifier"),
        })?,
        sheet_date: fmt_date(sheet.sheet_date())?,
        operating_start: fmt_time(sheet.operating_hours().start())?,
        operating_end: fmt_time(sheet.operating_hours().end())?,
        is_active: sheet.is_active(),
        slots: slots.iter().map(slot_info).collect::<Result<_, _>>()?,
    })
}

/// Lists the slots of every sheet in an inclusive date range.
///
/// Dates without a sheet are simply absent from the result.
///
/// # Errors
///
/// Returns an error if a date is malformed, the range is inverted, or the
/// query fails.
pub fn list_slots(
    persistence: &mut Persistence,
    start_date: &str,
    end_date: &str,
) -> Result<ListSlotsResponse, ApiError> {
    let start = parse_date("start_date", start_date)?;
    let end = parse_date("end_date", end_date)?;
    validate_date_range(start, end).map_err(translate_domain_error)?;

    let sheets = persistence
        .sheets_with_slots_in_range(start, end)
        .map_err(translate_persistence_error)?;

    let mut days = Vec::with_capacity(sheets.len());
    for (date, slots) in &sheets {
        days.push(DaySlotsInfo {
            sheet_date: fmt_date(*date)?,
            slots: slots.iter().map(slot_info).collect::<Result<_, _>>()?,
        });
    }
    Ok(ListSlotsResponse { days })
}

/// Books players into a slot for the acting member.
///
/// Members always book for themselves. The booking policy is checked
/// before the capacity check so a malformed booking never reaches the
/// database.
///
/// # Arguments
///
/// * `persistence` - The persistence adapter
/// * `request` - The booking request
/// * `actor` - The authenticated actor. Must hold the Member role.
/// * `now` - The current time, stamped onto the reservation
///
/// # Errors
///
/// Returns an error if the actor is not a Member, the booking violates
/// policy, the slot is missing or full, or persistence fails.
pub fn book_slot(
    persistence: &mut Persistence,
    request: &BookSlotRequest,
    actor: &AuthenticatedActor,
    now: PrimitiveDateTime,
) -> Result<BookSlotResponse, ApiError> {
    AuthorizationService::authorize_book_slot(actor)?;
    BookingPolicy::default().validate(request.number_of_players, request.number_of_carts)?;

    let reservation_id = persistence
        .book_slot(
            request.slot_id,
            actor.member_id,
            request.number_of_players,
            request.number_of_carts,
            now,
        )
        .map_err(translate_persistence_error)?;

    debug!(
        reservation_id,
        slot_id = request.slot_id,
        member_id = actor.member_id,
        "Slot booked"
    );

    Ok(BookSlotResponse {
        reservation_id,
        slot_id: request.slot_id,
        message: format!(
            "Booked {} player(s) into slot {}",
            request.number_of_players, request.slot_id
        ),
    })
}

/// Cancels one of the acting member's reservations.
///
/// Cancelling an already-cancelled reservation succeeds without
/// releasing anything twice.
///
/// # Errors
///
/// Returns an error if the actor is not a Member, the reservation does
/// not exist, or it belongs to a different member.
pub fn cancel_reservation(
    persistence: &mut Persistence,
    request: &CancelReservationRequest,
    actor: &AuthenticatedActor,
) -> Result<CancelReservationResponse, ApiError> {
    AuthorizationService::authorize_cancel_reservation(actor)?;

    persistence
        .cancel_reservation(request.reservation_id, actor.member_id)
        .map_err(translate_persistence_error)?;

    Ok(CancelReservationResponse {
        message: format!("Reservation {} cancelled", request.reservation_id),
    })
}

/// Summarizes availability for every sheet in an inclusive date range.
///
/// # Errors
///
/// Returns an error if a date is malformed, the range is inverted, or the
/// query fails.
pub fn summarize_availability(
    persistence: &mut Persistence,
    start_date: &str,
    end_date: &str,
) -> Result<AvailabilitySummaryResponse, ApiError> {
    let start = parse_date("start_date", start_date)?;
    let end = parse_date("end_date", end_date)?;
    validate_date_range(start, end).map_err(translate_domain_error)?;

    let sheets = persistence
        .sheets_with_slots_in_range(start, end)
        .map_err(translate_persistence_error)?;
    let summary = fairway_core::summarize_availability(&sheets);

    let mut days = Vec::with_capacity(summary.len());
    for entry in &summary {
        days.push(DayAvailabilityInfo {
            date: fmt_date(entry.date)?,
            total_slots: entry.total_slots,
            available_slots: entry.available_slots,
            occupancy: entry.occupancy.as_str().to_string(),
        });
    }
    Ok(AvailabilitySummaryResponse { days })
}

/// Creates a club event and blocks the covered tee times.
///
/// If a sheet already exists for the event date, every slot whose tee
/// time falls inside the window is booked to capacity and annotated with
/// the event name.
///
/// # Errors
///
/// Returns an error if the actor is not Staff, the input is invalid, or
/// persistence fails.
pub fn create_event(
    persistence: &mut Persistence,
    request: &CreateEventRequest,
    actor: &AuthenticatedActor,
) -> Result<CreateEventResponse, ApiError> {
    AuthorizationService::authorize_manage_events(actor)?;

    let event_date = parse_date("event_date", &request.event_date)?;
    let start_time = parse_time("start_time", &request.start_time)?;
    let end_time = parse_time("end_time", &request.end_time)?;
    let event = ClubEvent::new(
        request.name.clone(),
        event_date,
        start_time,
        end_time,
        request.color.clone(),
    )
    .map_err(translate_domain_error)?;

    let event_id = persistence
        .create_event(&event)
        .map_err(translate_persistence_error)?;

    debug!(event_id, name = %request.name, event_date = %request.event_date, "Event created");

    Ok(CreateEventResponse {
        event_id,
        message: format!("Event '{}' created", request.name),
    })
}

/// Deletes a club event and releases its blocked tee times.
///
/// Deletion is refused while any blocked slot carries a confirmed
/// reservation.
///
/// # Errors
///
/// Returns an error if the actor is not Staff, the event does not exist,
/// or its slots carry confirmed reservations.
pub fn delete_event(
    persistence: &mut Persistence,
    event_id: i64,
    actor: &AuthenticatedActor,
) -> Result<DeleteEventResponse, ApiError> {
    AuthorizationService::authorize_manage_events(actor)?;

    persistence
        .delete_event(event_id)
        .map_err(translate_persistence_error)?;

    Ok(DeleteEventResponse {
        message: format!("Event {event_id} deleted"),
    })
}

/// Lists club events in an inclusive date range.
///
/// # Errors
///
/// Returns an error if a date is malformed, the range is inverted, or the
/// query fails.
pub fn list_events(
    persistence: &mut Persistence,
    start_date: &str,
    end_date: &str,
) -> Result<ListEventsResponse, ApiError> {
    let start = parse_date("start_date", start_date)?;
    let end = parse_date("end_date", end_date)?;
    validate_date_range(start, end).map_err(translate_domain_error)?;

    let events = persistence
        .list_events_in_range(start, end)
        .map_err(translate_persistence_error)?;
    Ok(ListEventsResponse {
        events: events.iter().map(event_info).collect::<Result<_, _>>()?,
    })
}

/// Submits a standing tee-time request for the acting member.
///
/// The request lands in `Pending` state and schedules nothing until the
/// committee approves it.
///
/// # Arguments
///
/// * `persistence` - The persistence adapter
/// * `request` - The submission request
/// * `actor` - The authenticated actor. Must hold the Member role.
/// * `eligibility` - Decides whether the member may hold a standing time
///
/// # Errors
///
/// Returns an error if the actor is not a Member, the member is not
/// eligible, the input is invalid, or persistence fails.
pub fn submit_standing_request(
    persistence: &mut Persistence,
    request: &SubmitStandingRequestRequest,
    actor: &AuthenticatedActor,
    eligibility: &dyn MembershipEligibility,
) -> Result<SubmitStandingRequestResponse, ApiError> {
    AuthorizationService::authorize_submit_standing_request(actor)?;
    if !eligibility.is_eligible(actor.member_id) {
        return Err(ApiError::Forbidden {
            message: format!(
                "Member {} is not eligible to hold a standing tee time",
                actor.member_id
            ),
        });
    }

    let day_of_week = weekday_from_index(request.day_of_week).map_err(translate_domain_error)?;
    let start_date = parse_date("start_date", &request.start_date)?;
    let end_date = parse_date("end_date", &request.end_date)?;
    let desired_time = parse_time("desired_time", &request.desired_time)?;

    let standing_request = StandingRequest::new(
        actor.member_id,
        request.partner_ids.clone(),
        day_of_week,
        start_date,
        end_date,
        desired_time,
    )
    .map_err(translate_domain_error)?;

    let standing_request_id = persistence
        .insert_standing_request(&standing_request)
        .map_err(translate_persistence_error)?;

    debug!(
        standing_request_id,
        member_id = actor.member_id,
        "Standing request submitted"
    );

    Ok(SubmitStandingRequestResponse {
        standing_request_id,
        message: format!("Standing request {standing_request_id} submitted for review"),
    })
}

/// Approves a pending standing request.
///
/// The approval records the priority rank, the granted tee time, the
/// approving committee member, and the approval date.
///
/// # Arguments
///
/// * `persistence` - The persistence adapter
/// * `request` - The approval request
/// * `actor` - The authenticated actor. Must hold the Committee role.
/// * `today` - The approval date
///
/// # Errors
///
/// Returns an error if the actor is not Committee, the priority or time
/// is invalid, the request does not exist, or it is not pending.
pub fn approve_standing_request(
    persistence: &mut Persistence,
    request: &ApproveStandingRequestRequest,
    actor: &AuthenticatedActor,
    today: Date,
) -> Result<ApproveStandingRequestResponse, ApiError> {
    AuthorizationService::authorize_review_standing_requests(actor)?;
    validate_priority(request.priority).map_err(translate_domain_error)?;
    let approved_time = parse_time("approved_time", &request.approved_time)?;

    persistence
        .approve_standing_request(
            request.standing_request_id,
            request.priority,
            approved_time,
            actor.member_id,
            today,
        )
        .map_err(translate_persistence_error)?;

    debug!(
        standing_request_id = request.standing_request_id,
        priority = request.priority,
        approved_by = actor.member_id,
        "Standing request approved"
    );

    Ok(ApproveStandingRequestResponse {
        standing_request_id: request.standing_request_id,
        message: format!("Standing request {} approved", request.standing_request_id),
    })
}

/// Revokes an approved standing request.
///
/// A request that never produced a reservation is removed entirely.
/// Otherwise its confirmed reservations are cancelled, their spots are
/// released, and the request is kept as `Rejected` for history.
///
/// # Errors
///
/// Returns an error if the actor is not Committee, the request does not
/// exist, or it is not approved.
pub fn revoke_standing_request(
    persistence: &mut Persistence,
    standing_request_id: i64,
    actor: &AuthenticatedActor,
) -> Result<RevokeStandingRequestResponse, ApiError> {
    AuthorizationService::authorize_review_standing_requests(actor)?;

    persistence
        .revoke_standing_request(standing_request_id)
        .map_err(translate_persistence_error)?;

    debug!(standing_request_id, "Standing request revoked");

    Ok(RevokeStandingRequestResponse {
        message: format!("Standing request {standing_request_id} revoked"),
    })
}

/// Lists standing requests, optionally filtered by status.
///
/// # Errors
///
/// Returns an error if the actor is not Committee, the status filter is
/// not a known status, or the query fails.
pub fn list_standing_requests(
    persistence: &mut Persistence,
    status: Option<&str>,
    actor: &AuthenticatedActor,
) -> Result<ListStandingRequestsResponse, ApiError> {
    AuthorizationService::authorize_review_standing_requests(actor)?;

    let status = status
        .map(str::parse::<RequestStatus>)
        .transpose()
        .map_err(translate_domain_error)?;

    let requests = persistence
        .list_standing_requests(status)
        .map_err(translate_persistence_error)?;
    Ok(ListStandingRequestsResponse {
        requests: requests
            .iter()
            .map(standing_request_info)
            .collect::<Result<_, _>>()?,
    })
}
