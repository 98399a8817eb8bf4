// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod event_tests;
mod reservation_tests;

use time::macros::{date, time};
use time::{Date, PrimitiveDateTime};

use crate::Persistence;
use fairway_domain::{
    DaySheet, IntervalPolicy, OperatingHours, Slot, StandingRequest, generate_slot_times,
};

/// A Saturday, so Saturday standing requests apply to it.
pub const SHEET_DATE: Date = date!(2026 - 06 - 06);

pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory database")
}

pub fn short_hours() -> OperatingHours {
    OperatingHours::new(time!(08:00), time!(10:00)).unwrap()
}

pub fn half_hour_policy() -> IntervalPolicy {
    IntervalPolicy::uniform(30).unwrap()
}

/// Inserts a sheet with empty slots at 08:00 through 10:00 every half hour
/// and returns the sheet ID plus the stored slots in tee-time order.
pub fn create_sheet(persistence: &mut Persistence, sheet_date: Date) -> (i64, Vec<Slot>) {
    let hours = short_hours();
    let policy = half_hour_policy();
    let slots: Vec<Slot> = generate_slot_times(&hours, &policy)
        .into_iter()
        .map(|t| Slot::new(PrimitiveDateTime::new(sheet_date, t)))
        .collect();
    let sheet = DaySheet::new(sheet_date, hours, policy);

    let day_sheet_id = persistence
        .insert_day_sheet(&sheet, &slots)
        .expect("Failed to insert day sheet");
    let (_, stored) = persistence
        .get_day_sheet_with_slots(sheet_date)
        .expect("Failed to read back day sheet");
    (day_sheet_id, stored)
}

pub fn pending_request(member_id: i64, partner_ids: Vec<i64>) -> StandingRequest {
    StandingRequest::new(
        member_id,
        partner_ids,
        time::Weekday::Saturday,
        date!(2026 - 01 - 01),
        date!(2026 - 12 - 31),
        time!(09:00),
    )
    .unwrap()
}

pub fn booking_timestamp() -> PrimitiveDateTime {
    PrimitiveDateTime::new(date!(2026 - 06 - 01), time!(12:00))
}
