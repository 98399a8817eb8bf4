// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Handler tests against an in-memory SQLite backend.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod auth_tests;
mod booking_tests;
mod standing_tests;

use crate::auth::{AuthenticatedActor, Role};
use crate::handlers::{generate_day_sheet, get_day_sheet};
use crate::request_response::{GenerateDaySheetRequest, GenerateDaySheetResponse, SlotInfo};
use fairway_persistence::Persistence;
use time::macros::{date, datetime};
use time::{Date, PrimitiveDateTime};

/// A Saturday, matching the standing request fixtures.
pub const SHEET_DATE: &str = "2026-06-06";

pub const STAFF_ID: i64 = 500;
pub const COMMITTEE_ID: i64 = 900;

pub fn member(member_id: i64) -> AuthenticatedActor {
    AuthenticatedActor::new(member_id, Role::Member)
}

pub fn staff() -> AuthenticatedActor {
    AuthenticatedActor::new(STAFF_ID, Role::Staff)
}

pub fn committee() -> AuthenticatedActor {
    AuthenticatedActor::new(COMMITTEE_ID, Role::Committee)
}

pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn now() -> PrimitiveDateTime {
    datetime!(2026-06-01 12:00:00)
}

pub fn today() -> Date {
    date!(2026 - 06 - 01)
}

/// A half-hour sheet from 08:00 to 10:00: five slots.
pub fn sheet_request_for(sheet_date: &str) -> GenerateDaySheetRequest {
    GenerateDaySheetRequest {
        sheet_date: sheet_date.to_string(),
        operating_start: "08:00:00".to_string(),
        operating_end: "10:00:00".to_string(),
        interval_minutes: Some(30),
        hourly_offset_minutes: None,
    }
}

pub fn generate_sheet(persistence: &mut Persistence) -> GenerateDaySheetResponse {
    generate_day_sheet(persistence, &sheet_request_for(SHEET_DATE), &staff(), now())
        .expect("Failed to generate day sheet")
}

pub fn sheet_slots(persistence: &mut Persistence) -> Vec<SlotInfo> {
    get_day_sheet(persistence, SHEET_DATE)
        .expect("Failed to fetch day sheet")
        .slots
}
