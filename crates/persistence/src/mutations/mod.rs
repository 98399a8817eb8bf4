// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules for persistence layer.
//!
//! This module contains all write operations for the persistence layer.
//!
//! ## Module Organization
//!
//! - `sheets` — Day sheet and slot persistence
//! - `reservations` — Booking and cancellation
//! - `standing` — Standing request lifecycle
//! - `events` — Club event creation and removal
//!
//! ## Backend-Specific Functions
//!
//! All mutation functions are generated in backend-specific monomorphic
//! versions:
//! - Functions suffixed with `_sqlite` for `SQLite`
//! - Functions suffixed with `_mysql` for `MySQL`/`MariaDB`
//!
//! Multi-statement mutations run inside a transaction so partial writes
//! never become visible.

pub mod events;
pub mod reservations;
pub mod sheets;
pub mod standing;

pub use events::{
    create_event_mysql, create_event_sqlite, delete_event_mysql, delete_event_sqlite,
};
pub use reservations::{
    book_slot_mysql, book_slot_sqlite, cancel_reservation_mysql, cancel_reservation_sqlite,
};
pub use sheets::{insert_day_sheet_mysql, insert_day_sheet_sqlite};
pub use standing::{
    approve_standing_request_mysql, approve_standing_request_sqlite,
    attach_standing_reservations_mysql, attach_standing_reservations_sqlite,
    insert_standing_request_mysql, insert_standing_request_sqlite, revoke_standing_request_mysql,
    revoke_standing_request_sqlite,
};
