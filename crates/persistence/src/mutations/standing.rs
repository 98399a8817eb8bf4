// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Standing request lifecycle mutations.
//!
//! All mutations are generated in backend-specific monomorphic versions
//! (`_sqlite` and `_mysql` suffixes) using the `backend_fn!` macro.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use num_traits::ToPrimitive;
use tracing::debug;

use crate::backend::PersistenceBackend;
use crate::data_models::{format_date, format_time};
use crate::diesel_schema::{reservations, slots, standing_requests};
use crate::error::PersistenceError;
use fairway_domain::{
    RequestStatus, ReservationKind, ReservationStatus, StandingRequest, weekday_index,
};

backend_fn! {
/// Inserts a new standing request in `Pending` state.
///
/// # Errors
///
/// Returns an error if a database operation fails.
pub fn insert_standing_request(
    conn: &mut _,
    request: &StandingRequest,
) -> Result<i64, PersistenceError> {
    let start_date = format_date(request.start_date)?;
    let end_date = format_date(request.end_date)?;
    let desired_time = format_time(request.desired_time)?;

    diesel::insert_into(standing_requests::table)
        .values((
            standing_requests::member_id.eq(request.member_id),
            standing_requests::second_player_id.eq(request.partner_ids.first().copied()),
            standing_requests::third_player_id.eq(request.partner_ids.get(1).copied()),
            standing_requests::fourth_player_id.eq(request.partner_ids.get(2).copied()),
            standing_requests::day_of_week.eq(i32::from(weekday_index(request.day_of_week))),
            standing_requests::start_date.eq(&start_date),
            standing_requests::end_date.eq(&end_date),
            standing_requests::desired_time.eq(&desired_time),
            standing_requests::status.eq(RequestStatus::Pending.as_str()),
        ))
        .execute(conn)?;

    let standing_request_id: i64 = conn.last_insert_id()?;

    debug!(
        standing_request_id,
        member_id = request.member_id,
        "Inserted standing request"
    );

    Ok(standing_request_id)
}
}

backend_fn! {
/// Approves a pending standing request.
///
/// Approval records the committee's priority rank, the granted tee time,
/// who approved it, and when.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `standing_request_id` - The request to approve
/// * `priority` - The priority rank. Lower wins.
/// * `approved_time` - The granted tee time as ISO text
/// * `approved_by` - The approving committee member
/// * `approved_date` - The approval date as ISO text
///
/// # Errors
///
/// Returns an error if the request does not exist or is not pending.
pub fn approve_standing_request(
    conn: &mut _,
    standing_request_id: i64,
    priority: i32,
    approved_time: &str,
    approved_by: i64,
    approved_date: &str,
) -> Result<(), PersistenceError> {
    conn.transaction::<(), PersistenceError, _>(|conn| {
        let status: Result<String, _> = standing_requests::table
            .filter(standing_requests::standing_request_id.eq(standing_request_id))
            .select(standing_requests::status)
            .first(conn);
        let status = match status {
            Ok(s) => s,
            Err(diesel::result::Error::NotFound) => {
                return Err(PersistenceError::StandingRequestNotFound(standing_request_id));
            }
            Err(e) => return Err(PersistenceError::from(e)),
        };
        if status != RequestStatus::Pending.as_str() {
            return Err(PersistenceError::RequestNotPending(standing_request_id));
        }

        diesel::update(
            standing_requests::table
                .filter(standing_requests::standing_request_id.eq(standing_request_id)),
        )
        .set((
            standing_requests::status.eq(RequestStatus::Approved.as_str()),
            standing_requests::priority.eq(Some(priority)),
            standing_requests::approved_time.eq(Some(approved_time)),
            standing_requests::approved_by.eq(Some(approved_by)),
            standing_requests::approved_date.eq(Some(approved_date)),
        ))
        .execute(conn)?;

        debug!(
            standing_request_id,
            priority, approved_by, "Approved standing request"
        );

        Ok(())
    })
}
}

backend_fn! {
/// Revokes an approved standing request.
///
/// When the request has never produced a reservation the row is deleted
/// outright. Otherwise its confirmed reservations are cancelled, their
/// spots released with the standing note cleared, and the request is kept
/// as `Rejected` with its approval fields cleared.
///
/// # Errors
///
/// Returns an error if the request does not exist or is not approved.
pub fn revoke_standing_request(
    conn: &mut _,
    standing_request_id: i64,
) -> Result<(), PersistenceError> {
    conn.transaction::<(), PersistenceError, _>(|conn| {
        let status: Result<String, _> = standing_requests::table
            .filter(standing_requests::standing_request_id.eq(standing_request_id))
            .select(standing_requests::status)
            .first(conn);
        let status = match status {
            Ok(s) => s,
            Err(diesel::result::Error::NotFound) => {
                return Err(PersistenceError::StandingRequestNotFound(standing_request_id));
            }
            Err(e) => return Err(PersistenceError::from(e)),
        };
        if status != RequestStatus::Approved.as_str() {
            return Err(PersistenceError::RequestNotApproved(standing_request_id));
        }

        let linked: Vec<(i64, i64, i32, String)> = reservations::table
            .filter(reservations::standing_request_id.eq(Some(standing_request_id)))
            .select((
                reservations::reservation_id,
                reservations::slot_id,
                reservations::number_of_players,
                reservations::status,
            ))
            .load(conn)?;

        if linked.is_empty() {
            diesel::delete(
                standing_requests::table
                    .filter(standing_requests::standing_request_id.eq(standing_request_id)),
            )
            .execute(conn)?;
            debug!(standing_request_id, "Deleted unused standing request");
            return Ok(());
        }

        for (reservation_id, slot_id, number_of_players, res_status) in &linked {
            if res_status != ReservationStatus::Confirmed.as_str() {
                continue;
            }
            diesel::update(
                reservations::table.filter(reservations::reservation_id.eq(reservation_id)),
            )
            .set(reservations::status.eq(ReservationStatus::Cancelled.as_str()))
            .execute(conn)?;

            let booked: i32 = slots::table
                .filter(slots::slot_id.eq(slot_id))
                .select(slots::booked_player_count)
                .first(conn)?;
            diesel::update(slots::table.filter(slots::slot_id.eq(slot_id)))
                .set((
                    slots::booked_player_count.eq((booked - number_of_players).max(0)),
                    slots::notes.eq(None::<String>),
                ))
                .execute(conn)?;
        }

        diesel::update(
            standing_requests::table
                .filter(standing_requests::standing_request_id.eq(standing_request_id)),
        )
        .set((
            standing_requests::status.eq(RequestStatus::Rejected.as_str()),
            standing_requests::priority.eq(None::<i32>),
            standing_requests::approved_time.eq(None::<String>),
            standing_requests::approved_by.eq(None::<i64>),
            standing_requests::approved_date.eq(None::<String>),
        ))
        .execute(conn)?;

        debug!(
            standing_request_id,
            cancelled = linked.len(),
            "Revoked standing request"
        );

        Ok(())
    })
}
}

backend_fn! {
/// Writes the reservations for one resolved standing assignment.
///
/// One single-player confirmed reservation is written per party member
/// against the slot at the assigned tee time. The slot's booked count is
/// raised by the party size and its note is set in the same transaction,
/// so the count matches the sum of confirmed reservations whether or not
/// the attachment succeeds.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `day_sheet_id` - The sheet the assignment belongs to
/// * `start_datetime` - The assigned tee time as ISO datetime text
/// * `standing_request_id` - The request that produced the assignment
/// * `party` - The member and partners to reserve for
/// * `note` - Slot note marking the standing hold
/// * `made_at` - Reservation timestamp as ISO text
///
/// # Errors
///
/// Returns an error if the slot does not exist on the sheet, lacks the
/// capacity for the party, or a database operation fails.
pub fn attach_standing_reservations(
    conn: &mut _,
    day_sheet_id: i64,
    start_datetime: &str,
    standing_request_id: i64,
    party: &[i64],
    note: &str,
    made_at: &str,
) -> Result<usize, PersistenceError> {
    conn.transaction::<usize, PersistenceError, _>(|conn| {
        let slot: Result<(i64, i32, i32), _> = slots::table
            .filter(slots::day_sheet_id.eq(day_sheet_id))
            .filter(slots::start_datetime.eq(start_datetime))
            .select((
                slots::slot_id,
                slots::booked_player_count,
                slots::max_players,
            ))
            .first(conn);
        let (slot_id, booked, max_players) = match slot {
            Ok(row) => row,
            Err(diesel::result::Error::NotFound) => {
                return Err(PersistenceError::NotFound(format!(
                    "No slot at {start_datetime} on day sheet {day_sheet_id}"
                )));
            }
            Err(e) => return Err(PersistenceError::from(e)),
        };

        let party_size = party
            .len()
            .to_i32()
            .ok_or_else(|| PersistenceError::Other("Standing party size out of range".to_string()))?;
        if party_size > max_players - booked {
            return Err(PersistenceError::SlotCapacityConflict {
                slot_id,
                requested: party.len().to_u8().unwrap_or(u8::MAX),
                remaining: (max_players - booked).to_u8().unwrap_or(0),
            });
        }

        for member_id in party {
            diesel::insert_into(reservations::table)
                .values((
                    reservations::slot_id.eq(slot_id),
                    reservations::member_id.eq(member_id),
                    reservations::number_of_players.eq(1),
                    reservations::number_of_carts.eq(0),
                    reservations::status.eq(ReservationStatus::Confirmed.as_str()),
                    reservations::made_at.eq(made_at),
                    reservations::standing_request_id.eq(Some(standing_request_id)),
                    reservations::reservation_type.eq(ReservationKind::Standing.as_str()),
                ))
                .execute(conn)?;
        }

        // Conditioned on the count read above. Zero rows means a booking
        // got there first; the rollback drops the reservation rows too.
        let updated = diesel::update(
            slots::table
                .filter(slots::slot_id.eq(slot_id))
                .filter(slots::booked_player_count.eq(booked)),
        )
        .set((
            slots::booked_player_count.eq(booked + party_size),
            slots::notes.eq(Some(note)),
        ))
        .execute(conn)?;
        if updated == 0 {
            return Err(PersistenceError::SlotUnavailable { slot_id });
        }

        debug!(
            slot_id,
            standing_request_id,
            party_size = party.len(),
            "Attached standing reservations"
        );

        Ok(party.len())
    })
}
}
