// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `sheets` — Day sheet and slot queries
//! - `reservations` — Reservation queries
//! - `standing` — Standing request queries
//! - `events` — Club event queries
//!
//! ## Backend-Specific Functions
//!
//! All query functions are generated in backend-specific monomorphic versions:
//! - Functions suffixed with `_sqlite` for `SQLite`
//! - Functions suffixed with `_mysql` for `MySQL`/`MariaDB`
//!
//! The `Persistence` adapter in `lib.rs` dispatches to the appropriate version
//! based on the active backend connection.

pub mod events;
pub mod reservations;
pub mod sheets;
pub mod standing;

pub use events::{
    count_confirmed_reservations_for_event_mysql, count_confirmed_reservations_for_event_sqlite,
    get_event_row_mysql, get_event_row_sqlite, list_event_rows_in_range_mysql,
    list_event_rows_in_range_sqlite,
};
pub use reservations::{
    get_reservation_row_mysql, get_reservation_row_sqlite, list_reservation_rows_for_member_mysql,
    list_reservation_rows_for_member_sqlite, list_reservation_rows_for_slot_mysql,
    list_reservation_rows_for_slot_sqlite,
};
pub use sheets::{
    get_day_sheet_row_mysql, get_day_sheet_row_sqlite, get_slot_row_mysql, get_slot_row_sqlite,
    list_day_sheet_rows_in_range_mysql, list_day_sheet_rows_in_range_sqlite,
    list_slot_rows_for_sheet_mysql, list_slot_rows_for_sheet_sqlite,
};
pub use standing::{
    get_standing_request_row_mysql, get_standing_request_row_sqlite,
    list_standing_request_rows_by_status_mysql, list_standing_request_rows_by_status_sqlite,
    list_standing_request_rows_mysql, list_standing_request_rows_sqlite,
};
