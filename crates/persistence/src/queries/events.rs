// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Club event queries.
//!
//! All queries are generated in backend-specific monomorphic versions
//! (`_sqlite` and `_mysql` suffixes) using the `backend_fn!` macro.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use fairway_domain::ReservationStatus;

use crate::data_models::EventRow;
use crate::diesel_schema::{events, reservations, slots};
use crate::error::PersistenceError;

backend_fn! {
/// Fetches a single event row.
///
/// # Errors
///
/// Returns an error if the event does not exist.
pub fn get_event_row(conn: &mut _, event_id: i64) -> Result<EventRow, PersistenceError> {
    let result = events::table
        .filter(events::event_id.eq(event_id))
        .first::<EventRow>(conn);

    match result {
        Ok(row) => Ok(row),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::EventNotFound(event_id)),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all event rows whose date falls in the inclusive range.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_event_rows_in_range(
    conn: &mut _,
    start_date: &str,
    end_date: &str,
) -> Result<Vec<EventRow>, PersistenceError> {
    Ok(events::table
        .filter(events::event_date.ge(start_date))
        .filter(events::event_date.le(end_date))
        .order((events::event_date.asc(), events::start_time.asc()))
        .load::<EventRow>(conn)?)
}
}

backend_fn! {
/// Counts confirmed reservations on slots blocked by an event.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_confirmed_reservations_for_event(
    conn: &mut _,
    event_id: i64,
) -> Result<i64, PersistenceError> {
    Ok(reservations::table
        .inner_join(slots::table)
        .filter(slots::linked_event_id.eq(event_id))
        .filter(reservations::status.eq(ReservationStatus::Confirmed.as_str()))
        .count()
        .get_result(conn)?)
}
}
