// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Standing request queries.
//!
//! All queries are generated in backend-specific monomorphic versions
//! (`_sqlite` and `_mysql` suffixes) using the `backend_fn!` macro.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use crate::data_models::StandingRequestRow;
use crate::diesel_schema::standing_requests;
use crate::error::PersistenceError;

backend_fn! {
/// Fetches a single standing request row.
///
/// # Errors
///
/// Returns an error if the request does not exist.
pub fn get_standing_request_row(
    conn: &mut _,
    standing_request_id: i64,
) -> Result<StandingRequestRow, PersistenceError> {
    let result = standing_requests::table
        .filter(standing_requests::standing_request_id.eq(standing_request_id))
        .first::<StandingRequestRow>(conn);

    match result {
        Ok(row) => Ok(row),
        Err(diesel::result::Error::NotFound) => {
            Err(PersistenceError::StandingRequestNotFound(standing_request_id))
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all standing request rows ordered by identifier.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_standing_request_rows(
    conn: &mut _,
) -> Result<Vec<StandingRequestRow>, PersistenceError> {
    Ok(standing_requests::table
        .order(standing_requests::standing_request_id.asc())
        .load::<StandingRequestRow>(conn)?)
}
}

backend_fn! {
/// Lists standing request rows with the given status text.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_standing_request_rows_by_status(
    conn: &mut _,
    status: &str,
) -> Result<Vec<StandingRequestRow>, PersistenceError> {
    Ok(standing_requests::table
        .filter(standing_requests::status.eq(status))
        .order(standing_requests::standing_request_id.asc())
        .load::<StandingRequestRow>(conn)?)
}
}
