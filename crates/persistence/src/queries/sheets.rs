// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day sheet and slot queries.
//!
//! All queries are generated in backend-specific monomorphic versions
//! (`_sqlite` and `_mysql` suffixes) using the `backend_fn!` macro.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use crate::data_models::{DaySheetRow, SlotRow};
use crate::diesel_schema::{day_sheets, slots};
use crate::error::PersistenceError;

backend_fn! {
/// Fetches the day sheet row for a date.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `sheet_date` - The sheet date as ISO text
///
/// # Errors
///
/// Returns an error if no sheet exists for the date.
pub fn get_day_sheet_row(conn: &mut _, sheet_date: &str) -> Result<DaySheetRow, PersistenceError> {
    let result = day_sheets::table
        .filter(day_sheets::sheet_date.eq(sheet_date))
        .first::<DaySheetRow>(conn);

    match result {
        Ok(row) => Ok(row),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::DaySheetNotFound {
            sheet_date: sheet_date.to_string(),
        }),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Fetches a single slot row.
///
/// # Errors
///
/// Returns an error if the slot does not exist.
pub fn get_slot_row(conn: &mut _, slot_id: i64) -> Result<SlotRow, PersistenceError> {
    let result = slots::table
        .filter(slots::slot_id.eq(slot_id))
        .first::<SlotRow>(conn);

    match result {
        Ok(row) => Ok(row),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::SlotNotFound(slot_id)),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all slot rows of a day sheet ordered by tee time.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_slot_rows_for_sheet(
    conn: &mut _,
    day_sheet_id: i64,
) -> Result<Vec<SlotRow>, PersistenceError> {
    Ok(slots::table
        .filter(slots::day_sheet_id.eq(day_sheet_id))
        .order(slots::start_datetime.asc())
        .load::<SlotRow>(conn)?)
}
}

backend_fn! {
/// Lists all day sheet rows whose date falls in the inclusive range.
///
/// ISO date text compares lexicographically in date order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_day_sheet_rows_in_range(
    conn: &mut _,
    start_date: &str,
    end_date: &str,
) -> Result<Vec<DaySheetRow>, PersistenceError> {
    Ok(day_sheets::table
        .filter(day_sheets::sheet_date.ge(start_date))
        .filter(day_sheets::sheet_date.le(end_date))
        .order(day_sheets::sheet_date.asc())
        .load::<DaySheetRow>(conn)?)
}
}
