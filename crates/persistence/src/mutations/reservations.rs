// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking and cancellation mutations.
//!
//! All mutations are generated in backend-specific monomorphic versions
//! (`_sqlite` and `_mysql` suffixes) using the `backend_fn!` macro.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use num_traits::ToPrimitive;
use tracing::debug;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{reservations, slots};
use crate::error::PersistenceError;
use fairway_domain::{ReservationKind, ReservationStatus};

backend_fn! {
/// Books players into a slot and records the reservation.
///
/// The slot counter update is conditioned on the booked count read at the
/// start of the transaction, so two overlapping bookings cannot both take
/// the last spot.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `slot_id` - The slot to book into
/// * `member_id` - The booking member
/// * `number_of_players` - Players covered by the booking
/// * `number_of_carts` - Carts requested
/// * `made_at` - Booking timestamp as ISO text
///
/// # Errors
///
/// Returns an error if the slot does not exist, has no capacity left, or
/// has fewer spots than requested.
pub fn book_slot(
    conn: &mut _,
    slot_id: i64,
    member_id: i64,
    number_of_players: u8,
    number_of_carts: u8,
    made_at: &str,
) -> Result<i64, PersistenceError> {
    conn.transaction::<i64, PersistenceError, _>(|conn| {
        let counts: Result<(i32, i32), _> = slots::table
            .filter(slots::slot_id.eq(slot_id))
            .select((slots::booked_player_count, slots::max_players))
            .first(conn);
        let (booked, max_players) = match counts {
            Ok(pair) => pair,
            Err(diesel::result::Error::NotFound) => {
                return Err(PersistenceError::SlotNotFound(slot_id));
            }
            Err(e) => return Err(PersistenceError::from(e)),
        };

        let remaining = max_players - booked;
        if remaining <= 0 {
            return Err(PersistenceError::SlotUnavailable { slot_id });
        }
        if i32::from(number_of_players) > remaining {
            return Err(PersistenceError::SlotCapacityConflict {
                slot_id,
                requested: number_of_players,
                remaining: remaining.to_u8().unwrap_or(0),
            });
        }

        // Conditioned on the count read above. Zero rows means another
        // booking got there first.
        let updated = diesel::update(
            slots::table
                .filter(slots::slot_id.eq(slot_id))
                .filter(slots::booked_player_count.eq(booked)),
        )
        .set(slots::booked_player_count.eq(booked + i32::from(number_of_players)))
        .execute(conn)?;
        if updated == 0 {
            let current: (i32, i32) = slots::table
                .filter(slots::slot_id.eq(slot_id))
                .select((slots::booked_player_count, slots::max_players))
                .first(conn)?;
            return Err(PersistenceError::SlotCapacityConflict {
                slot_id,
                requested: number_of_players,
                remaining: (current.1 - current.0).to_u8().unwrap_or(0),
            });
        }

        diesel::insert_into(reservations::table)
            .values((
                reservations::slot_id.eq(slot_id),
                reservations::member_id.eq(member_id),
                reservations::number_of_players.eq(i32::from(number_of_players)),
                reservations::number_of_carts.eq(i32::from(number_of_carts)),
                reservations::status.eq(ReservationStatus::Confirmed.as_str()),
                reservations::made_at.eq(made_at),
                reservations::standing_request_id.eq(None::<i64>),
                reservations::reservation_type.eq(ReservationKind::Regular.as_str()),
            ))
            .execute(conn)?;

        let reservation_id: i64 = conn.last_insert_id()?;

        debug!(
            reservation_id,
            slot_id, member_id, number_of_players, "Booked slot"
        );

        Ok(reservation_id)
    })
}
}

backend_fn! {
/// Cancels a reservation and releases its spots back to the slot.
///
/// Cancelling an already-cancelled reservation is a no-op. The cancelled
/// row is kept for history.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `reservation_id` - The reservation to cancel
/// * `member_id` - The member attempting the cancellation
///
/// # Errors
///
/// Returns an error if the reservation does not exist or belongs to a
/// different member.
pub fn cancel_reservation(
    conn: &mut _,
    reservation_id: i64,
    member_id: i64,
) -> Result<(), PersistenceError> {
    conn.transaction::<(), PersistenceError, _>(|conn| {
        let row: Result<(i64, i64, i32, String), _> = reservations::table
            .filter(reservations::reservation_id.eq(reservation_id))
            .select((
                reservations::slot_id,
                reservations::member_id,
                reservations::number_of_players,
                reservations::status,
            ))
            .first(conn);
        let (slot_id, owner_id, number_of_players, status) = match row {
            Ok(row) => row,
            Err(diesel::result::Error::NotFound) => {
                return Err(PersistenceError::ReservationNotFound(reservation_id));
            }
            Err(e) => return Err(PersistenceError::from(e)),
        };

        if owner_id != member_id {
            return Err(PersistenceError::NotReservationOwner {
                reservation_id,
                member_id,
            });
        }

        if status == ReservationStatus::Cancelled.as_str() {
            debug!(reservation_id, "Reservation already cancelled");
            return Ok(());
        }

        diesel::update(reservations::table.filter(reservations::reservation_id.eq(reservation_id)))
            .set(reservations::status.eq(ReservationStatus::Cancelled.as_str()))
            .execute(conn)?;

        let booked: i32 = slots::table
            .filter(slots::slot_id.eq(slot_id))
            .select(slots::booked_player_count)
            .first(conn)?;
        diesel::update(slots::table.filter(slots::slot_id.eq(slot_id)))
            .set(slots::booked_player_count.eq((booked - number_of_players).max(0)))
            .execute(conn)?;

        debug!(reservation_id, slot_id, member_id, "Cancelled reservation");

        Ok(())
    })
}
}
