// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day sheet and slot mutations.
//!
//! All mutations are generated in backend-specific monomorphic versions
//! (`_sqlite` and `_mysql` suffixes) using the `backend_fn!` macro.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::backend::PersistenceBackend;
use crate::data_models::{format_date, format_datetime, format_time};
use crate::diesel_schema::{day_sheets, slots};
use crate::error::PersistenceError;
use fairway_domain::{DaySheet, Slot};

backend_fn! {
/// Inserts a day sheet and all of its slots in one transaction.
///
/// Slots are written with whatever counts they carry; freshly generated
/// sheets hold only empty slots. The sheet date is unique, so a second
/// sheet for the same date is rejected before any row is written.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `sheet` - The day sheet to persist
/// * `slot_list` - The slots generated for the sheet, in tee-time order
///
/// # Errors
///
/// Returns an error if a sheet already exists for the date or if a
/// database operation fails.
pub fn insert_day_sheet(
    conn: &mut _,
    sheet: &DaySheet,
    slot_list: &[Slot],
) -> Result<i64, PersistenceError> {
    let sheet_date = format_date(sheet.sheet_date())?;
    let operating_start = format_time(sheet.operating_hours().start())?;
    let operating_end = format_time(sheet.operating_hours().end())?;
    let interval_policy = serde_json::to_string(sheet.interval_policy())?;

    conn.transaction::<i64, PersistenceError, _>(|conn| {
        let existing: Option<i64> = day_sheets::table
            .filter(day_sheets::sheet_date.eq(&sheet_date))
            .select(day_sheets::day_sheet_id)
            .first(conn)
            .optional()?;
        if existing.is_some() {
            return Err(PersistenceError::DuplicateDaySheet {
                sheet_date: sheet_date.clone(),
            });
        }

        diesel::insert_into(day_sheets::table)
            .values((
                day_sheets::sheet_date.eq(&sheet_date),
                day_sheets::operating_start.eq(&operating_start),
                day_sheets::operating_end.eq(&operating_end),
                day_sheets::interval_policy.eq(&interval_policy),
                day_sheets::is_active.eq(i32::from(sheet.is_active())),
            ))
            .execute(conn)?;

        let day_sheet_id: i64 = conn.last_insert_id()?;

        for slot in slot_list {
            diesel::insert_into(slots::table)
                .values((
                    slots::day_sheet_id.eq(day_sheet_id),
                    slots::start_datetime.eq(format_datetime(slot.start())?),
                    slots::booked_player_count.eq(i32::from(slot.booked_player_count())),
                    slots::max_players.eq(i32::from(slot.max_players())),
                    slots::notes.eq(slot.notes()),
                    slots::linked_event_id.eq(slot.linked_event_id()),
                ))
                .execute(conn)?;
        }

        debug!(
            day_sheet_id,
            sheet_date,
            slot_count = slot_list.len(),
            "Inserted day sheet"
        );

        Ok(day_sheet_id)
    })
}
}
