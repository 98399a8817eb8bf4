// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and conversions between stored text and domain types.
//!
//! Dates and times are stored as ISO-8601 text. All parsing and formatting
//! goes through the helpers here so the storage format has exactly one
//! definition.

use num_traits::ToPrimitive;
use std::str::FromStr;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time};

use crate::error::PersistenceError;
use fairway_domain::{
    ClubEvent, DaySheet, IntervalPolicy, OperatingHours, RequestStatus, Reservation,
    ReservationKind, ReservationStatus, Slot, StandingRequest, weekday_from_index,
};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]:[second]");
const DATETIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Full row of the `day_sheets` table in declaration order.
pub type DaySheetRow = (i64, String, String, String, String, i32);

/// Full row of the `slots` table in declaration order.
pub type SlotRow = (i64, i64, String, i32, i32, Option<String>, Option<i64>);

/// Full row of the `standing_requests` table in declaration order.
pub type StandingRequestRow = (
    i64,
    i64,
    Option<i64>,
    Option<i64>,
    Option<i64>,
    i32,
    String,
    String,
    String,
    String,
    Option<i32>,
    Option<String>,
    Option<i64>,
    Option<String>,
);

/// Full row of the `reservations` table in declaration order.
pub type ReservationRow = (i64, i64, i64, i32, i32, String, String, Option<i64>, String);

/// Full row of the `events` table in declaration order.
pub type EventRow = (i64, String, String, String, String, String);

/// Formats a date as ISO-8601 text.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn format_date(date: Date) -> Result<String, PersistenceError> {
    date.format(DATE_FORMAT)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

/// Parses a date from ISO-8601 text.
///
/// # Errors
///
/// Returns an error if the text is not a valid date.
pub fn parse_date(text: &str) -> Result<Date, PersistenceError> {
    Date::parse(text, DATE_FORMAT)
        .map_err(|e| PersistenceError::SerializationError(format!("invalid date '{text}': {e}")))
}

/// Formats a time of day as ISO-8601 text.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn format_time(t: Time) -> Result<String, PersistenceError> {
    t.format(TIME_FORMAT)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

/// Parses a time of day from ISO-8601 text.
///
/// # Errors
///
/// Returns an error if the text is not a valid time.
pub fn parse_time(text: &str) -> Result<Time, PersistenceError> {
    Time::parse(text, TIME_FORMAT)
        .map_err(|e| PersistenceError::SerializationError(format!("invalid time '{text}': {e}")))
}

/// Formats a date and time as ISO-8601 text.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn format_datetime(dt: PrimitiveDateTime) -> Result<String, PersistenceError> {
    dt.format(DATETIME_FORMAT)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

/// Parses a date and time from ISO-8601 text.
///
/// # Errors
///
/// Returns an error if the text is not a valid datetime.
pub fn parse_datetime(text: &str) -> Result<PrimitiveDateTime, PersistenceError> {
    PrimitiveDateTime::parse(text, DATETIME_FORMAT).map_err(|e| {
        PersistenceError::SerializationError(format!("invalid datetime '{text}': {e}"))
    })
}

fn to_u8(value: i32, what: &str) -> Result<u8, PersistenceError> {
    value
        .to_u8()
        .ok_or_else(|| PersistenceError::SerializationError(format!("{what} out of range: {value}")))
}

/// Converts a `day_sheets` row into a domain `DaySheet`.
///
/// # Errors
///
/// Returns an error if a stored value cannot be parsed.
pub fn day_sheet_from_row(row: &DaySheetRow) -> Result<DaySheet, PersistenceError> {
    let (day_sheet_id, sheet_date, operating_start, operating_end, interval_policy, is_active) =
        row;
    let hours = OperatingHours::new(parse_time(operating_start)?, parse_time(operating_end)?)?;
    let policy: IntervalPolicy = serde_json::from_str(interval_policy)?;
    Ok(DaySheet::with_id(
        *day_sheet_id,
        parse_date(sheet_date)?,
        hours,
        policy,
        *is_active != 0,
    ))
}

/// Converts a `slots` row into a domain `Slot`.
///
/// # Errors
///
/// Returns an error if a stored value cannot be parsed.
pub fn slot_from_row(row: &SlotRow) -> Result<Slot, PersistenceError> {
    let (slot_id, day_sheet_id, start_datetime, booked, max_players, notes, linked_event_id) = row;
    Ok(Slot::with_id(
        *slot_id,
        *day_sheet_id,
        parse_datetime(start_datetime)?,
        to_u8(*booked, "booked_player_count")?,
        to_u8(*max_players, "max_players")?,
        notes.clone(),
        *linked_event_id,
    ))
}

/// Converts a `standing_requests` row into a domain `StandingRequest`.
///
/// # Errors
///
/// Returns an error if a stored value cannot be parsed.
pub fn standing_request_from_row(
    row: &StandingRequestRow,
) -> Result<StandingRequest, PersistenceError> {
    let (
        standing_request_id,
        member_id,
        second_player_id,
        third_player_id,
        fourth_player_id,
        day_of_week,
        start_date,
        end_date,
        desired_time,
        status,
        priority,
        approved_time,
        approved_by,
        approved_date,
    ) = row;

    let day_index = to_u8(*day_of_week, "day_of_week")?;
    let partner_ids: Vec<i64> = [second_player_id, third_player_id, fourth_player_id]
        .into_iter()
        .filter_map(|id| *id)
        .collect();

    Ok(StandingRequest::with_id(
        *standing_request_id,
        *member_id,
        partner_ids,
        weekday_from_index(day_index)?,
        parse_date(start_date)?,
        parse_date(end_date)?,
        parse_time(desired_time)?,
        RequestStatus::from_str(status)?,
        *priority,
        approved_time.as_deref().map(parse_time).transpose()?,
        *approved_by,
        approved_date.as_deref().map(parse_date).transpose()?,
    ))
}

/// Converts a `reservations` row into a domain `Reservation`.
///
/// # Errors
///
/// Returns an error if a stored value cannot be parsed.
pub fn reservation_from_row(row: &ReservationRow) -> Result<Reservation, PersistenceError> {
    let (
        reservation_id,
        slot_id,
        member_id,
        number_of_players,
        number_of_carts,
        status,
        made_at,
        standing_request_id,
        reservation_type,
    ) = row;
    Ok(Reservation::with_id(
        *reservation_id,
        *slot_id,
        *member_id,
        to_u8(*number_of_players, "number_of_players")?,
        to_u8(*number_of_carts, "number_of_carts")?,
        ReservationStatus::from_str(status)?,
        parse_datetime(made_at)?,
        *standing_request_id,
        ReservationKind::from_str(reservation_type)?,
    ))
}

/// Converts an `events` row into a domain `ClubEvent`.
///
/// # Errors
///
/// Returns an error if a stored value cannot be parsed.
pub fn event_from_row(row: &EventRow) -> Result<ClubEvent, PersistenceError> {
    let (event_id, name, event_date, start_time, end_time, color) = row;
    Ok(ClubEvent::with_id(
        *event_id,
        name.clone(),
        parse_date(event_date)?,
        parse_time(start_time)?,
        parse_time(end_time)?,
        color.clone(),
    ))
}
