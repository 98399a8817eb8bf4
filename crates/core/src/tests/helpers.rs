// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fairway_domain::{
    IntervalPolicy, OperatingHours, RequestStatus, StandingRequest,
};
use time::macros::{date, time};
use time::{Time, Weekday};

/// Saturday 2026-06-06 falls inside every helper request's range.
pub const SHEET_DATE: time::Date = date!(2026 - 06 - 06);

pub fn standard_hours() -> OperatingHours {
    OperatingHours::new(time!(07:00), time!(19:00)).unwrap()
}

pub fn ten_minute_policy() -> IntervalPolicy {
    IntervalPolicy::uniform(10).unwrap()
}

/// An approved Saturday request with the given priority and tee time.
pub fn approved_request(
    standing_request_id: i64,
    member_id: i64,
    partner_ids: Vec<i64>,
    priority: i32,
    approved_time: Time,
) -> StandingRequest {
    StandingRequest::with_id(
        standing_request_id,
        member_id,
        partner_ids,
        Weekday::Saturday,
        date!(2026 - 04 - 01),
        date!(2026 - 09 - 30),
        approved_time,
        RequestStatus::Approved,
        Some(priority),
        Some(approved_time),
        Some(900),
        Some(date!(2026 - 03 - 15)),
    )
}
