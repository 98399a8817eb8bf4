// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::{
    validate_cart_count, validate_date_range, validate_event_name, validate_partner_ids,
    validate_player_count,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, PrimitiveDateTime, Time, Weekday};

/// Maximum number of players a single tee-time slot can hold.
pub const MAX_PLAYERS_PER_SLOT: u8 = 4;

/// Converts a stored day-of-week index (0 = Sunday) to a `Weekday`.
///
/// # Errors
///
/// Returns an error if the index is greater than 6.
pub const fn weekday_from_index(value: u8) -> Result<Weekday, DomainError> {
    match value {
        0 => Ok(Weekday::Sunday),
        1 => Ok(Weekday::Monday),
        2 => Ok(Weekday::Tuesday),
        3 => Ok(Weekday::Wednesday),
        4 => Ok(Weekday::Thursday),
        5 => Ok(Weekday::Friday),
        6 => Ok(Weekday::Saturday),
        _ => Err(DomainError::InvalidDayOfWeek { value }),
    }
}

/// Converts a `Weekday` to its stored index (0 = Sunday).
#[must_use]
pub const fn weekday_index(weekday: Weekday) -> u8 {
    weekday.number_days_from_sunday()
}

/// Lifecycle state of a standing tee-time request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RequestStatus {
    /// Submitted, awaiting committee review.
    #[default]
    Pending,
    /// Approved with an assigned priority and tee time.
    Approved,
    /// Rejected or revoked. Never scheduled.
    Rejected,
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Approved" => Ok(Self::Approved),
            "Rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidRequestStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl RequestStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// Lifecycle state of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReservationStatus {
    /// Active reservation counted against slot capacity.
    #[default]
    Confirmed,
    /// Cancelled reservation retained for history.
    Cancelled,
}

impl FromStr for ReservationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Confirmed" => Ok(Self::Confirmed),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidReservationStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ReservationStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Origin of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReservationKind {
    /// Booked directly by a member.
    #[default]
    Regular,
    /// Created by resolving an approved standing request.
    Standing,
    /// Placeholder written while a slot is blocked for a club event.
    Event,
    /// Placeholder written while a slot is blocked for course maintenance.
    Maintenance,
}

impl FromStr for ReservationKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Regular" => Ok(Self::Regular),
            "Standing" => Ok(Self::Standing),
            "Event" => Ok(Self::Event),
            "Maintenance" => Ok(Self::Maintenance),
            _ => Err(DomainError::InvalidReservationKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReservationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ReservationKind {
    /// Converts this reservation type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Standing => "Standing",
            Self::Event => "Event",
            Self::Maintenance => "Maintenance",
        }
    }
}

/// A single tee-time slot on a day sheet.
///
/// Availability is derived, never stored: a slot is available while
/// `booked_player_count < max_players`. Blocking a slot (for an event or
/// maintenance) books it to capacity so the same comparison covers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the slot has not been persisted yet.
    slot_id: Option<i64>,
    /// The owning day sheet's identifier, once persisted.
    day_sheet_id: Option<i64>,
    /// The tee-off date and time.
    start: PrimitiveDateTime,
    /// Players currently booked into this slot.
    booked_player_count: u8,
    /// Capacity of this slot.
    max_players: u8,
    /// Free-form note, e.g. the name of a blocking event.
    notes: Option<String>,
    /// The blocking event's identifier, if any.
    linked_event_id: Option<i64>,
}

impl Slot {
    /// Creates a new empty slot without a persisted ID.
    ///
    /// # Arguments
    ///
    /// * `start` - The tee-off date and time
    #[must_use]
    pub const fn new(start: PrimitiveDateTime) -> Self {
        Self {
            slot_id: None,
            day_sheet_id: None,
            start,
            booked_player_count: 0,
            max_players: MAX_PLAYERS_PER_SLOT,
            notes: None,
            linked_event_id: None,
        }
    }

    /// Creates a `Slot` from persisted state.
    #[must_use]
    pub const fn with_id(
        slot_id: i64,
        day_sheet_id: i64,
        start: PrimitiveDateTime,
        booked_player_count: u8,
        max_players: u8,
        notes: Option<String>,
        linked_event_id: Option<i64>,
    ) -> Self {
        Self {
            slot_id: Some(slot_id),
            day_sheet_id: Some(day_sheet_id),
            start,
            booked_player_count,
            max_players,
            notes,
            linked_event_id,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn slot_id(&self) -> Option<i64> {
        self.slot_id
    }

    /// Returns the owning day sheet's identifier if persisted.
    #[must_use]
    pub const fn day_sheet_id(&self) -> Option<i64> {
        self.day_sheet_id
    }

    /// Returns the tee-off date and time.
    #[must_use]
    pub const fn start(&self) -> PrimitiveDateTime {
        self.start
    }

    /// Returns the number of players currently booked.
    #[must_use]
    pub const fn booked_player_count(&self) -> u8 {
        self.booked_player_count
    }

    /// Returns the slot capacity.
    #[must_use]
    pub const fn max_players(&self) -> u8 {
        self.max_players
    }

    /// Returns the slot note, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the blocking event's identifier, if any.
    #[must_use]
    pub const fn linked_event_id(&self) -> Option<i64> {
        self.linked_event_id
    }

    /// Returns whether at least one spot remains.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.booked_player_count < self.max_players
    }

    /// Returns the number of spots remaining.
    #[must_use]
    pub const fn remaining_capacity(&self) -> u8 {
        self.max_players.saturating_sub(self.booked_player_count)
    }

    /// Books `count` players into this slot.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero or exceeds the remaining capacity.
    pub const fn add_players(&mut self, count: u8) -> Result<(), DomainError> {
        if count == 0 {
            return Err(DomainError::InvalidPlayerCount { count });
        }
        let remaining = self.remaining_capacity();
        if count > remaining {
            return Err(DomainError::SlotCapacityExceeded {
                requested: count,
                remaining,
            });
        }
        self.booked_player_count += count;
        Ok(())
    }

    /// Releases `count` players from this slot, flooring at zero.
    pub const fn release_players(&mut self, count: u8) {
        self.booked_player_count = self.booked_player_count.saturating_sub(count);
    }

    /// Blocks this slot for an event by booking it to capacity.
    pub fn block_for_event(&mut self, event_id: i64, event_name: &str) {
        self.booked_player_count = self.max_players;
        self.linked_event_id = Some(event_id);
        self.notes = Some(event_name.to_string());
    }

    /// Releases an event block, restoring the booked count from `restored`.
    pub fn clear_event_block(&mut self, restored: u8) {
        self.booked_player_count = restored;
        self.linked_event_id = None;
        self.notes = None;
    }
}

/// The tee sheet for a single date.
///
/// The generation configuration is kept on the sheet so standing request
/// resolution can re-derive the rounding grid later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySheet {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the sheet has not been persisted yet.
    day_sheet_id: Option<i64>,
    /// The date this sheet covers. Unique across sheets.
    sheet_date: Date,
    /// First and last tee times of the day.
    operating_hours: crate::schedule::OperatingHours,
    /// The interval policy the slots were generated under.
    interval_policy: crate::schedule::IntervalPolicy,
    /// Whether the sheet is open for play.
    is_active: bool,
}

impl DaySheet {
    /// Creates a new active `DaySheet` without a persisted ID.
    #[must_use]
    pub const fn new(
        sheet_date: Date,
        operating_hours: crate::schedule::OperatingHours,
        interval_policy: crate::schedule::IntervalPolicy,
    ) -> Self {
        Self {
            day_sheet_id: None,
            sheet_date,
            operating_hours,
            interval_policy,
            is_active: true,
        }
    }

    /// Creates a `DaySheet` from persisted state.
    #[must_use]
    pub const fn with_id(
        day_sheet_id: i64,
        sheet_date: Date,
        operating_hours: crate::schedule::OperatingHours,
        interval_policy: crate::schedule::IntervalPolicy,
        is_active: bool,
    ) -> Self {
        Self {
            day_sheet_id: Some(day_sheet_id),
            sheet_date,
            operating_hours,
            interval_policy,
            is_active,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn day_sheet_id(&self) -> Option<i64> {
        self.day_sheet_id
    }

    /// Returns the date this sheet covers.
    #[must_use]
    pub const fn sheet_date(&self) -> Date {
        self.sheet_date
    }

    /// Returns the operating hours of the day.
    #[must_use]
    pub const fn operating_hours(&self) -> &crate::schedule::OperatingHours {
        &self.operating_hours
    }

    /// Returns the interval policy the slots were generated under.
    #[must_use]
    pub const fn interval_policy(&self) -> &crate::schedule::IntervalPolicy {
        &self.interval_policy
    }

    /// Returns whether the sheet is open for play.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }
}

/// A recurring weekly tee-time request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRequest {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the request has not been persisted yet.
    pub standing_request_id: Option<i64>,
    /// The requesting member.
    pub member_id: i64,
    /// Up to three additional party members.
    pub partner_ids: Vec<i64>,
    /// The weekday the party wants to play.
    pub day_of_week: Weekday,
    /// First date the recurrence applies to.
    pub start_date: Date,
    /// Last date the recurrence applies to.
    pub end_date: Date,
    /// The tee time the member asked for.
    pub desired_time: Time,
    /// Lifecycle state.
    pub status: RequestStatus,
    /// Priority rank assigned at approval. Lower wins.
    pub priority: Option<i32>,
    /// The tee time granted at approval. May differ from `desired_time`.
    pub approved_time: Option<Time>,
    /// The committee member who approved the request.
    pub approved_by: Option<i64>,
    /// The date the request was approved.
    pub approved_date: Option<Date>,
}

impl StandingRequest {
    /// Creates a new `Pending` standing request without a persisted ID.
    ///
    /// # Arguments
    ///
    /// * `member_id` - The requesting member
    /// * `partner_ids` - Up to three additional party members
    /// * `day_of_week` - The weekday the party wants to play
    /// * `start_date` - First date of the recurrence
    /// * `end_date` - Last date of the recurrence
    /// * `desired_time` - The requested tee time
    ///
    /// # Errors
    ///
    /// Returns an error if more than three partners are named or the date
    /// range is inverted.
    pub fn new(
        member_id: i64,
        partner_ids: Vec<i64>,
        day_of_week: Weekday,
        start_date: Date,
        end_date: Date,
        desired_time: Time,
    ) -> Result<Self, DomainError> {
        validate_partner_ids(&partner_ids)?;
        validate_date_range(start_date, end_date)?;
        Ok(Self {
            standing_request_id: None,
            member_id,
            partner_ids,
            day_of_week,
            start_date,
            end_date,
            desired_time,
            status: RequestStatus::Pending,
            priority: None,
            approved_time: None,
            approved_by: None,
            approved_date: None,
        })
    }

    /// Creates a `StandingRequest` from persisted state.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn with_id(
        standing_request_id: i64,
        member_id: i64,
        partner_ids: Vec<i64>,
        day_of_week: Weekday,
        start_date: Date,
        end_date: Date,
        desired_time: Time,
        status: RequestStatus,
        priority: Option<i32>,
        approved_time: Option<Time>,
        approved_by: Option<i64>,
        approved_date: Option<Date>,
    ) -> Self {
        Self {
            standing_request_id: Some(standing_request_id),
            member_id,
            partner_ids,
            day_of_week,
            start_date,
            end_date,
            desired_time,
            status,
            priority,
            approved_time,
            approved_by,
            approved_date,
        }
    }

    /// Returns whether this request applies to the given date.
    ///
    /// A request is active for a date when it is approved, the weekday
    /// matches, and the date falls within the recurrence range inclusive.
    #[must_use]
    pub fn is_active_on(&self, date: Date) -> bool {
        self.status == RequestStatus::Approved
            && date.weekday() == self.day_of_week
            && self.start_date <= date
            && date <= self.end_date
    }

    /// Returns the full party: the requesting member plus named partners.
    #[must_use]
    pub fn party_member_ids(&self) -> Vec<i64> {
        let mut party = Vec::with_capacity(1 + self.partner_ids.len());
        party.push(self.member_id);
        party.extend_from_slice(&self.partner_ids);
        party
    }

    /// Returns the party size including the requesting member.
    ///
    /// The constructors cap the partner list at `MAX_PLAYERS_PER_SLOT - 1`;
    /// an oversized list built by hand is reported as-is so capacity checks
    /// downstream reject it instead of quietly fitting.
    #[must_use]
    pub fn party_size(&self) -> u8 {
        debug_assert!(
            self.partner_ids.len() < usize::from(MAX_PLAYERS_PER_SLOT),
            "partner list exceeds slot capacity"
        );
        u8::try_from(1 + self.partner_ids.len()).unwrap_or(u8::MAX)
    }
}

/// A booking against a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the reservation has not been persisted yet.
    pub reservation_id: Option<i64>,
    /// The slot this reservation occupies.
    pub slot_id: i64,
    /// The booking member.
    pub member_id: i64,
    /// Players covered by this reservation.
    pub number_of_players: u8,
    /// Carts requested.
    pub number_of_carts: u8,
    /// Lifecycle state.
    pub status: ReservationStatus,
    /// When the reservation was made.
    pub made_at: PrimitiveDateTime,
    /// The standing request that produced this reservation, if any.
    pub standing_request_id: Option<i64>,
    /// Origin of the reservation.
    pub kind: ReservationKind,
}

impl Reservation {
    /// Creates a new `Confirmed` reservation without a persisted ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the player or cart count is out of range.
    pub fn new(
        slot_id: i64,
        member_id: i64,
        number_of_players: u8,
        number_of_carts: u8,
        made_at: PrimitiveDateTime,
        standing_request_id: Option<i64>,
        kind: ReservationKind,
    ) -> Result<Self, DomainError> {
        validate_player_count(number_of_players)?;
        validate_cart_count(number_of_carts)?;
        Ok(Self {
            reservation_id: None,
            slot_id,
            member_id,
            number_of_players,
            number_of_carts,
            status: ReservationStatus::Confirmed,
            made_at,
            standing_request_id,
            kind,
        })
    }

    /// Creates a `Reservation` from persisted state.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn with_id(
        reservation_id: i64,
        slot_id: i64,
        member_id: i64,
        number_of_players: u8,
        number_of_carts: u8,
        status: ReservationStatus,
        made_at: PrimitiveDateTime,
        standing_request_id: Option<i64>,
        kind: ReservationKind,
    ) -> Self {
        Self {
            reservation_id: Some(reservation_id),
            slot_id,
            member_id,
            number_of_players,
            number_of_carts,
            status,
            made_at,
            standing_request_id,
            kind,
        }
    }

    /// Returns whether this reservation counts against slot capacity.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Confirmed
    }
}

/// A club event that blocks a span of tee times on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubEvent {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the event has not been persisted yet.
    pub event_id: Option<i64>,
    /// Display name, written into blocked slot notes.
    pub name: String,
    /// The date the event takes place.
    pub event_date: Date,
    /// First blocked tee time, inclusive.
    pub start_time: Time,
    /// Last blocked tee time, inclusive.
    pub end_time: Time,
    /// Display color for calendar rendering.
    pub color: String,
}

impl ClubEvent {
    /// Creates a new `ClubEvent` without a persisted ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the time window is inverted.
    pub fn new(
        name: String,
        event_date: Date,
        start_time: Time,
        end_time: Time,
        color: String,
    ) -> Result<Self, DomainError> {
        validate_event_name(&name)?;
        if start_time > end_time {
            return Err(DomainError::InvalidEventWindow {
                start_time,
                end_time,
            });
        }
        Ok(Self {
            event_id: None,
            name,
            event_date,
            start_time,
            end_time,
            color,
        })
    }

    /// Creates a `ClubEvent` from persisted state.
    #[must_use]
    pub const fn with_id(
        event_id: i64,
        name: String,
        event_date: Date,
        start_time: Time,
        end_time: Time,
        color: String,
    ) -> Self {
        Self {
            event_id: Some(event_id),
            name,
            event_date,
            start_time,
            end_time,
            color,
        }
    }

    /// Returns whether the given tee time falls inside the blocked window.
    #[must_use]
    pub fn covers(&self, tee_time: Time) -> bool {
        self.start_time <= tee_time && tee_time <= self.end_time
    }
}
