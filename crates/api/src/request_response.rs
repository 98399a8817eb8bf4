// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates and times cross the boundary as ISO-8601 text and are parsed by
//! the handlers, so malformed values surface as `InvalidInput` for the
//! offending field.

use serde::{Deserialize, Serialize};

/// API request to generate the day sheet for a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateDaySheetRequest {
    /// The date to generate, as ISO text (e.g., `2026-06-06`).
    pub sheet_date: String,
    /// First tee time of the day, as ISO text (e.g., `07:00:00`).
    pub operating_start: String,
    /// Last tee time of the day, as ISO text.
    pub operating_end: String,
    /// Minutes between tee times for a uniform grid.
    ///
    /// Exactly one of `interval_minutes` and `hourly_offset_minutes`
    /// must be set.
    pub interval_minutes: Option<u16>,
    /// Minute offsets repeated every hour (e.g., `[0, 15, 30, 45]`).
    pub hourly_offset_minutes: Option<Vec<u8>>,
}

/// A standing request the resolver could not place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRequestInfo {
    /// The skipped request's identifier.
    pub standing_request_id: Option<i64>,
    /// The requesting member.
    pub member_id: i64,
    /// Why the request was skipped.
    pub reason: String,
}

/// API response for a successful day sheet generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateDaySheetResponse {
    /// The canonical day sheet identifier.
    pub day_sheet_id: i64,
    /// The generated date, as ISO text.
    pub sheet_date: String,
    /// The number of slots generated.
    pub slot_count: usize,
    /// The number of standing reservations written.
    pub standing_reservation_count: usize,
    /// Standing requests that could not be placed.
    pub skipped: Vec<SkippedRequestInfo>,
    /// A success message.
    pub message: String,
}

/// A single slot on a day sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotInfo {
    /// The canonical slot identifier.
    pub slot_id: i64,
    /// The tee time, as ISO datetime text.
    pub start: String,
    /// Players currently booked.
    pub booked_player_count: u8,
    /// Slot capacity.
    pub max_players: u8,
    /// Whether at least one spot remains.
    pub is_available: bool,
    /// Free-form note, e.g. a blocking event's name.
    pub notes: Option<String>,
    /// The blocking event's identifier, if any.
    pub linked_event_id: Option<i64>,
}

/// API response carrying a full day sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetDaySheetResponse {
    /// The canonical day sheet identifier.
    pub day_sheet_id: i64,
    /// The sheet date, as ISO text.
    pub sheet_date: String,
    /// First tee time of the day, as ISO text.
    pub operating_start: String,
    /// Last tee time of the day, as ISO text.
    pub operating_end: String,
    /// Whether the sheet is open for play.
    pub is_active: bool,
    /// The slots in tee-time order.
    pub slots: Vec<SlotInfo>,
}

/// One date's slots in a range listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlotsInfo {
    /// The sheet date, as ISO text.
    pub sheet_date: String,
    /// The slots in tee-time order.
    pub slots: Vec<SlotInfo>,
}

/// API response listing slots over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSlotsResponse {
    /// One entry per date that has a sheet, in date order.
    pub days: Vec<DaySlotsInfo>,
}

/// API request to book a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSlotRequest {
    /// The slot to book into.
    pub slot_id: i64,
    /// Players covered by the booking.
    pub number_of_players: u8,
    /// Carts requested.
    pub number_of_carts: u8,
}

/// API response for a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSlotResponse {
    /// The canonical reservation identifier.
    pub reservation_id: i64,
    /// The booked slot.
    pub slot_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to cancel a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelReservationRequest {
    /// The reservation to cancel.
    pub reservation_id: i64,
}

/// API response for a successful cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelReservationResponse {
    /// A success message.
    pub message: String,
}

/// Availability classification for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailabilityInfo {
    /// The date, as ISO text.
    pub date: String,
    /// Total slots on the sheet.
    pub total_slots: usize,
    /// Slots with at least one spot remaining.
    pub available_slots: usize,
    /// The occupancy classification (`FullyBooked`, `Limited`, `Open`).
    pub occupancy: String,
}

/// API response summarizing availability over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySummaryResponse {
    /// One entry per date that has a sheet, in date order.
    pub days: Vec<DayAvailabilityInfo>,
}

/// API request to create a club event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    /// The event display name.
    pub name: String,
    /// The event date, as ISO text.
    pub event_date: String,
    /// First blocked tee time, as ISO text, inclusive.
    pub start_time: String,
    /// Last blocked tee time, as ISO text, inclusive.
    pub end_time: String,
    /// Display color for calendar rendering.
    pub color: String,
}

/// API response for a successful event creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventResponse {
    /// The canonical event identifier.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for a successful event deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteEventResponse {
    /// A success message.
    pub message: String,
}

/// A club event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInfo {
    /// The canonical event identifier.
    pub event_id: i64,
    /// The event display name.
    pub name: String,
    /// The event date, as ISO text.
    pub event_date: String,
    /// First blocked tee time, as ISO text.
    pub start_time: String,
    /// Last blocked tee time, as ISO text.
    pub end_time: String,
    /// Display color for calendar rendering.
    pub color: String,
}

/// API response listing club events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEventsResponse {
    /// Events in date order.
    pub events: Vec<EventInfo>,
}

/// API request to submit a standing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitStandingRequestRequest {
    /// Up to three additional party members.
    pub partner_ids: Vec<i64>,
    /// The weekday requested, 0 (Sunday) through 6.
    pub day_of_week: u8,
    /// First date of the recurrence, as ISO text.
    pub start_date: String,
    /// Last date of the recurrence, as ISO text.
    pub end_date: String,
    /// The requested tee time, as ISO text.
    pub desired_time: String,
}

/// API response for a successful standing request submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitStandingRequestResponse {
    /// The canonical standing request identifier.
    pub standing_request_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to approve a standing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproveStandingRequestRequest {
    /// The request to approve.
    pub standing_request_id: i64,
    /// The priority rank. Lower wins.
    pub priority: i32,
    /// The granted tee time, as ISO text. May differ from the desired
    /// time.
    pub approved_time: String,
}

/// API response for a successful approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproveStandingRequestResponse {
    /// The approved request's identifier.
    pub standing_request_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for a successful revocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokeStandingRequestResponse {
    /// A success message.
    pub message: String,
}

/// A standing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRequestInfo {
    /// The canonical standing request identifier.
    pub standing_request_id: i64,
    /// The requesting member.
    pub member_id: i64,
    /// Additional party members.
    pub partner_ids: Vec<i64>,
    /// The weekday requested, 0 (Sunday) through 6.
    pub day_of_week: u8,
    /// First date of the recurrence, as ISO text.
    pub start_date: String,
    /// Last date of the recurrence, as ISO text.
    pub end_date: String,
    /// The requested tee time, as ISO text.
    pub desired_time: String,
    /// Lifecycle state (`Pending`, `Approved`, `Rejected`).
    pub status: String,
    /// Priority rank assigned at approval.
    pub priority: Option<i32>,
    /// The granted tee time, as ISO text.
    pub approved_time: Option<String>,
    /// The approving committee member.
    pub approved_by: Option<i64>,
    /// The approval date, as ISO text.
    pub approved_date: Option<String>,
}

/// API response listing standing requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStandingRequestsResponse {
    /// Requests ordered by identifier.
    pub requests: Vec<StandingRequestInfo>,
}
