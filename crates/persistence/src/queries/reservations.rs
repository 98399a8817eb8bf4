// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation queries.
//!
//! All queries are generated in backend-specific monomorphic versions
//! (`_sqlite` and `_mysql` suffixes) using the `backend_fn!` macro.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use crate::data_models::ReservationRow;
use crate::diesel_schema::reservations;
use crate::error::PersistenceError;

backend_fn! {
/// Fetches a single reservation row.
///
/// # Errors
///
/// Returns an error if the reservation does not exist.
pub fn get_reservation_row(
    conn: &mut _,
    reservation_id: i64,
) -> Result<ReservationRow, PersistenceError> {
    let result = reservations::table
        .filter(reservations::reservation_id.eq(reservation_id))
        .first::<ReservationRow>(conn);

    match result {
        Ok(row) => Ok(row),
        Err(diesel::result::Error::NotFound) => {
            Err(PersistenceError::ReservationNotFound(reservation_id))
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all reservation rows of a slot, newest last.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_reservation_rows_for_slot(
    conn: &mut _,
    slot_id: i64,
) -> Result<Vec<ReservationRow>, PersistenceError> {
    Ok(reservations::table
        .filter(reservations::slot_id.eq(slot_id))
        .order(reservations::reservation_id.asc())
        .load::<ReservationRow>(conn)?)
}
}

backend_fn! {
/// Lists all reservation rows made by a member, newest last.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_reservation_rows_for_member(
    conn: &mut _,
    member_id: i64,
) -> Result<Vec<ReservationRow>, PersistenceError> {
    Ok(reservations::table
        .filter(reservations::member_id.eq(member_id))
        .order(reservations::reservation_id.asc())
        .load::<ReservationRow>(conn)?)
}
}
