// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Club event mutations.
//!
//! All mutations are generated in backend-specific monomorphic versions
//! (`_sqlite` and `_mysql` suffixes) using the `backend_fn!` macro.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{events, reservations, slots};
use crate::error::PersistenceError;
use fairway_domain::ReservationStatus;

backend_fn! {
/// Creates a club event and blocks the covered slots.
///
/// When a day sheet exists for the event date, every slot whose tee time
/// falls inside the event window is booked to capacity, linked to the
/// event, and annotated with the event name. Without a sheet only the
/// event row is written; a sheet generated later is unaffected.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The event display name
/// * `event_date` - The event date as ISO text
/// * `start_time` - First blocked tee time as ISO text, inclusive
/// * `end_time` - Last blocked tee time as ISO text, inclusive
/// * `color` - Display color for calendar rendering
///
/// # Errors
///
/// Returns an error if a database operation fails.
pub fn create_event(
    conn: &mut _,
    name: &str,
    event_date: &str,
    start_time: &str,
    end_time: &str,
    color: &str,
) -> Result<i64, PersistenceError> {
    conn.transaction::<i64, PersistenceError, _>(|conn| {
        diesel::insert_into(events::table)
            .values((
                events::name.eq(name),
                events::event_date.eq(event_date),
                events::start_time.eq(start_time),
                events::end_time.eq(end_time),
                events::color.eq(color),
            ))
            .execute(conn)?;

        let event_id: i64 = conn.last_insert_id()?;

        let sheet: Option<i64> = crate::diesel_schema::day_sheets::table
            .filter(crate::diesel_schema::day_sheets::sheet_date.eq(event_date))
            .select(crate::diesel_schema::day_sheets::day_sheet_id)
            .first(conn)
            .optional()?;

        let mut blocked = 0;
        if let Some(day_sheet_id) = sheet {
            // Slot datetimes are "date time" text, so the window bounds
            // concatenate the same way.
            let block_start = format!("{event_date} {start_time}");
            let block_end = format!("{event_date} {end_time}");
            blocked = diesel::update(
                slots::table
                    .filter(slots::day_sheet_id.eq(day_sheet_id))
                    .filter(slots::start_datetime.ge(&block_start))
                    .filter(slots::start_datetime.le(&block_end)),
            )
            .set((
                slots::booked_player_count.eq(slots::max_players),
                slots::linked_event_id.eq(Some(event_id)),
                slots::notes.eq(Some(name)),
            ))
            .execute(conn)?;
        }

        debug!(event_id, event_date, blocked, "Created event");

        Ok(event_id)
    })
}
}

backend_fn! {
/// Deletes a club event and releases its blocked slots.
///
/// Deletion is refused while any blocked slot carries a confirmed
/// reservation. Released slots return to empty.
///
/// # Errors
///
/// Returns an error if the event does not exist or its slots carry
/// confirmed reservations.
pub fn delete_event(conn: &mut _, event_id: i64) -> Result<(), PersistenceError> {
    conn.transaction::<(), PersistenceError, _>(|conn| {
        let exists: Option<i64> = events::table
            .filter(events::event_id.eq(event_id))
            .select(events::event_id)
            .first(conn)
            .optional()?;
        if exists.is_none() {
            return Err(PersistenceError::EventNotFound(event_id));
        }

        let confirmed: i64 = reservations::table
            .inner_join(slots::table)
            .filter(slots::linked_event_id.eq(event_id))
            .filter(reservations::status.eq(ReservationStatus::Confirmed.as_str()))
            .count()
            .get_result(conn)?;
        if confirmed > 0 {
            return Err(PersistenceError::EventHasReservations { event_id });
        }

        let released = diesel::update(slots::table.filter(slots::linked_event_id.eq(event_id)))
            .set((
                slots::booked_player_count.eq(0),
                slots::linked_event_id.eq(None::<i64>),
                slots::notes.eq(None::<String>),
            ))
            .execute(conn)?;

        diesel::delete(events::table.filter(events::event_id.eq(event_id))).execute(conn)?;

        debug!(event_id, released, "Deleted event");

        Ok(())
    })
}
}
