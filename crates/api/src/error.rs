// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::booking_policy::BookingPolicyError;
use fairway_core::CoreError;
use fairway_domain::DomainError;
use fairway_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed,
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: &'static str,
        /// The role required for this action.
        required_role: &'static str,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed => {
                write!(f, "Authentication failed: invalid member ID")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core/persistence errors and represent
/// the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The resource to create already exists.
    AlreadyExists {
        /// The type of resource that already exists.
        resource_type: String,
        /// A human-readable description of the conflict.
        message: String,
    },
    /// The actor may not operate on a resource it does not own.
    Forbidden {
        /// A human-readable description of the refusal.
        message: String,
    },
    /// The slot has no capacity left.
    SlotUnavailable {
        /// The slot identifier.
        slot_id: i64,
    },
    /// The booking asks for more spots than the slot has left.
    CapacityExceeded {
        /// The slot identifier.
        slot_id: i64,
        /// The number of players requested.
        requested: u8,
        /// The capacity remaining on the slot.
        remaining: u8,
    },
    /// The event cannot be deleted while its slots carry reservations.
    HasReservations {
        /// The event identifier.
        event_id: i64,
    },
    /// Booking policy violation.
    BookingPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::AlreadyExists {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} already exists: {message}")
            }
            Self::Forbidden { message } => {
                write!(f, "Forbidden: {message}")
            }
            Self::SlotUnavailable { slot_id } => {
                write!(f, "Slot {slot_id} has no capacity left")
            }
            Self::CapacityExceeded {
                slot_id,
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "Slot {slot_id} cannot take {requested} player(s): only {remaining} spot(s) remain"
                )
            }
            Self::HasReservations { event_id } => {
                write!(
                    f,
                    "Event {event_id} cannot be deleted: its slots carry confirmed reservations"
                )
            }
            Self::BookingPolicyViolation { message } => {
                write!(f, "Booking policy violation: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed => Self::AuthenticationFailed {
                reason: String::from("invalid member ID"),
            },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action: action.to_string(),
                required_role: required_role.to_string(),
            },
        }
    }
}

impl From<BookingPolicyError> for ApiError {
    fn from(err: BookingPolicyError) -> Self {
        Self::BookingPolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidInterval { minutes } => ApiError::InvalidInput {
            field: String::from("interval_minutes"),
            message: format!("Invalid interval: {minutes} minutes. Must be greater than 0"),
        },
        DomainError::InvalidHourlyOffsets { reason } => ApiError::InvalidInput {
            field: String::from("hourly_offset_minutes"),
            message: format!("Invalid hourly offsets: {reason}"),
        },
        DomainError::InvalidOperatingHours { start, end } => ApiError::InvalidInput {
            field: String::from("operating_hours"),
            message: format!("Operating start {start} must be before end {end}"),
        },
        DomainError::InvalidPlayerCount { count } => ApiError::InvalidInput {
            field: String::from("number_of_players"),
            message: format!("Invalid player count: {count}. Must be between 1 and 4"),
        },
        DomainError::InvalidCartCount { count } => ApiError::InvalidInput {
            field: String::from("number_of_carts"),
            message: format!("Invalid cart count: {count}. Must be at most 4"),
        },
        DomainError::InvalidPartySize { count } => ApiError::InvalidInput {
            field: String::from("partner_ids"),
            message: format!("Invalid party size: {count}. A party holds at most 4 players"),
        },
        DomainError::InvalidDateRange {
            start_date,
            end_date,
        } => ApiError::InvalidInput {
            field: String::from("date_range"),
            message: format!("Start date {start_date} must not be after end date {end_date}"),
        },
        DomainError::InvalidEventWindow {
            start_time,
            end_time,
        } => ApiError::InvalidInput {
            field: String::from("event_window"),
            message: format!("Event start {start_time} must not be after end {end_time}"),
        },
        DomainError::InvalidDayOfWeek { value } => ApiError::InvalidInput {
            field: String::from("day_of_week"),
            message: format!("Invalid day of week: {value}. Must be between 0 (Sunday) and 6"),
        },
        DomainError::InvalidPriority { priority } => ApiError::InvalidInput {
            field: String::from("priority"),
            message: format!("Invalid priority: {priority}. Must be at least 1"),
        },
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidRequestStatus(msg) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid request status: {msg}"),
        },
        DomainError::InvalidReservationStatus(msg) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid reservation status: {msg}"),
        },
        DomainError::InvalidReservationKind(msg) => ApiError::InvalidInput {
            field: String::from("reservation_type"),
            message: format!("Invalid reservation type: {msg}"),
        },
        DomainError::SlotCapacityExceeded {
            requested,
            remaining,
        } => ApiError::DomainRuleViolation {
            rule: String::from("slot_capacity"),
            message: format!(
                "Cannot add {requested} player(s): only {remaining} spot(s) remain in this slot"
            ),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a persistence error into an API error.
///
/// Typed conflicts keep their meaning across the boundary; everything
/// operational surfaces as `Internal`.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        PersistenceError::DuplicateDaySheet { sheet_date } => ApiError::AlreadyExists {
            resource_type: String::from("Day sheet"),
            message: format!("A day sheet already exists for {sheet_date}"),
        },
        PersistenceError::DaySheetNotFound { sheet_date } => ApiError::ResourceNotFound {
            resource_type: String::from("Day sheet"),
            message: format!("No day sheet exists for {sheet_date}"),
        },
        PersistenceError::SlotNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Slot"),
            message: format!("Slot {id} does not exist"),
        },
        PersistenceError::ReservationNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Reservation"),
            message: format!("Reservation {id} does not exist"),
        },
        PersistenceError::StandingRequestNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Standing request"),
            message: format!("Standing request {id} does not exist"),
        },
        PersistenceError::EventNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Event"),
            message: format!("Event {id} does not exist"),
        },
        PersistenceError::NotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Resource"),
            message: msg,
        },
        PersistenceError::SlotUnavailable { slot_id } => ApiError::SlotUnavailable { slot_id },
        PersistenceError::SlotCapacityConflict {
            slot_id,
            requested,
            remaining,
        } => ApiError::CapacityExceeded {
            slot_id,
            requested,
            remaining,
        },
        PersistenceError::NotReservationOwner {
            reservation_id,
            member_id,
        } => ApiError::Forbidden {
            message: format!("Reservation {reservation_id} does not belong to member {member_id}"),
        },
        PersistenceError::RequestNotPending(id) => ApiError::DomainRuleViolation {
            rule: String::from("request_pending"),
            message: format!("Standing request {id} is not pending"),
        },
        PersistenceError::RequestNotApproved(id) => ApiError::DomainRuleViolation {
            rule: String::from("request_approved"),
            message: format!("Standing request {id} is not approved"),
        },
        PersistenceError::EventHasReservations { event_id } => {
            ApiError::HasReservations { event_id }
        }
        PersistenceError::DatabaseError(_)
        | PersistenceError::DatabaseConnectionFailed(_)
        | PersistenceError::MigrationFailed(_)
        | PersistenceError::QueryFailed(_)
        | PersistenceError::SerializationError(_)
        | PersistenceError::InitializationError(_)
        | PersistenceError::ForeignKeyEnforcementNotEnabled
        | PersistenceError::Other(_) => ApiError::Internal {
            message: err.to_string(),
        },
    }
}
