// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Slot interval must be greater than zero minutes.
    InvalidInterval {
        /// The invalid interval value in minutes.
        minutes: u16,
    },
    /// Hourly offset list is empty or contains an offset >= 60.
    InvalidHourlyOffsets {
        /// Description of the validation error.
        reason: String,
    },
    /// Operating hours start must precede the end.
    InvalidOperatingHours {
        /// The first tee time of the day.
        start: time::Time,
        /// The last tee time of the day.
        end: time::Time,
    },
    /// Player count must be between 1 and the slot maximum.
    InvalidPlayerCount {
        /// The invalid count value.
        count: u8,
    },
    /// Cart count must not exceed the slot maximum.
    InvalidCartCount {
        /// The invalid count value.
        count: u8,
    },
    /// A standing request party may name at most four members in total.
    InvalidPartySize {
        /// The total party size including the requesting member.
        count: usize,
    },
    /// Date range start must not be after the end.
    InvalidDateRange {
        /// The range start.
        start_date: time::Date,
        /// The range end.
        end_date: time::Date,
    },
    /// Event window start must not be after the end.
    InvalidEventWindow {
        /// The window start.
        start_time: time::Time,
        /// The window end.
        end_time: time::Time,
    },
    /// Day-of-week index must be 0 (Sunday) through 6 (Saturday).
    InvalidDayOfWeek {
        /// The invalid index.
        value: u8,
    },
    /// Approval priority must be a positive rank.
    InvalidPriority {
        /// The invalid priority value.
        priority: i32,
    },
    /// Name field is empty or invalid.
    InvalidName(String),
    /// Standing request status text is not a known value.
    InvalidRequestStatus(String),
    /// Reservation status text is not a known value.
    InvalidReservationStatus(String),
    /// Reservation type text is not a known value.
    InvalidReservationKind(String),
    /// Adding players would exceed the slot's remaining capacity.
    SlotCapacityExceeded {
        /// The number of players requested.
        requested: u8,
        /// The capacity remaining on the slot.
        remaining: u8,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInterval { minutes } => {
                write!(
                    f,
                    "Invalid slot interval: {minutes} minutes. Must be greater than 0"
                )
            }
            Self::InvalidHourlyOffsets { reason } => {
                write!(f, "Invalid hourly offsets: {reason}")
            }
            Self::InvalidOperatingHours { start, end } => {
                write!(
                    f,
                    "Invalid operating hours: start {start} must not be after end {end}"
                )
            }
            Self::InvalidPlayerCount { count } => {
                write!(f, "Invalid player count: {count}. Must be between 1 and 4")
            }
            Self::InvalidCartCount { count } => {
                write!(f, "Invalid cart count: {count}. Must be between 0 and 4")
            }
            Self::InvalidPartySize { count } => {
                write!(
                    f,
                    "Invalid party size: {count}. A party may name at most 4 members"
                )
            }
            Self::InvalidDateRange {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "Invalid date range: start {start_date} is after end {end_date}"
                )
            }
            Self::InvalidEventWindow {
                start_time,
                end_time,
            } => {
                write!(
                    f,
                    "Invalid event window: start {start_time} is after end {end_time}"
                )
            }
            Self::InvalidDayOfWeek { value } => {
                write!(
                    f,
                    "Invalid day of week: {value}. Must be 0 (Sunday) through 6 (Saturday)"
                )
            }
            Self::InvalidPriority { priority } => {
                write!(f, "Invalid priority: {priority}. Must be 1 or greater")
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidRequestStatus(value) => {
                write!(f, "Invalid standing request status: {value}")
            }
            Self::InvalidReservationStatus(value) => {
                write!(f, "Invalid reservation status: {value}")
            }
            Self::InvalidReservationKind(value) => {
                write!(f, "Invalid reservation type: {value}")
            }
            Self::SlotCapacityExceeded {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "Cannot add {requested} player(s): only {remaining} spot(s) remain in this slot"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
