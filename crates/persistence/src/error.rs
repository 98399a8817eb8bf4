// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fairway_domain::DomainError;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Serialization/deserialization error.
    SerializationError(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// A stored value violated a domain rule while loading.
    DomainViolation(DomainError),
    /// A day sheet already exists for the date.
    DuplicateDaySheet {
        /// The sheet date as ISO text.
        sheet_date: String,
    },
    /// No day sheet exists for the date.
    DaySheetNotFound {
        /// The sheet date as ISO text.
        sheet_date: String,
    },
    /// The requested slot was not found.
    SlotNotFound(i64),
    /// The slot has no capacity left.
    SlotUnavailable {
        /// The slot identifier.
        slot_id: i64,
    },
    /// The booking asks for more spots than the slot has left.
    SlotCapacityConflict {
        /// The slot identifier.
        slot_id: i64,
        /// The number of players requested.
        requested: u8,
        /// The capacity remaining on the slot.
        remaining: u8,
    },
    /// The requested reservation was not found.
    ReservationNotFound(i64),
    /// The reservation belongs to a different member.
    NotReservationOwner {
        /// The reservation identifier.
        reservation_id: i64,
        /// The member who attempted the operation.
        member_id: i64,
    },
    /// The requested standing request was not found.
    StandingRequestNotFound(i64),
    /// The standing request is not pending, so it cannot be approved.
    RequestNotPending(i64),
    /// The standing request is not approved, so it cannot be revoked.
    RequestNotApproved(i64),
    /// The requested event was not found.
    EventNotFound(i64),
    /// The event cannot be deleted while its slots carry reservations.
    EventHasReservations {
        /// The event identifier.
        event_id: i64,
    },
    /// The requested resource was not found.
    NotFound(String),
    /// A general error occurred.
    Other(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::DuplicateDaySheet { sheet_date } => {
                write!(f, "A day sheet already exists for {sheet_date}")
            }
            Self::DaySheetNotFound { sheet_date } => {
                write!(f, "No day sheet exists for {sheet_date}")
            }
            Self::SlotNotFound(id) => write!(f, "Slot not found: {id}"),
            Self::SlotUnavailable { slot_id } => {
                write!(f, "Slot {slot_id} has no capacity left")
            }
            Self::SlotCapacityConflict {
                slot_id,
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "Slot {slot_id} cannot take {requested} player(s): only {remaining} spot(s) remain"
                )
            }
            Self::ReservationNotFound(id) => write!(f, "Reservation not found: {id}"),
            Self::NotReservationOwner {
                reservation_id,
                member_id,
            } => {
                write!(
                    f,
                    "Reservation {reservation_id} does not belong to member {member_id}"
                )
            }
            Self::StandingRequestNotFound(id) => {
                write!(f, "Standing request not found: {id}")
            }
            Self::RequestNotPending(id) => {
                write!(f, "Standing request {id} is not pending")
            }
            Self::RequestNotApproved(id) => {
                write!(f, "Standing request {id} is not approved")
            }
            Self::EventNotFound(id) => write!(f, "Event not found: {id}"),
            Self::EventHasReservations { event_id } => {
                write!(
                    f,
                    "Event {event_id} cannot be deleted: its slots carry confirmed reservations"
                )
            }
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
