// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day-sheet planning.
//!
//! Planning is side-effect free: it produces the sheet, its slots, and the
//! standing assignments that still need reservation rows. The caller
//! persists the sheet and slots in one transaction, then attaches standing
//! reservations per request, tolerating individual failures.
//!
//! Slots claimed by a standing assignment are created empty. The booked
//! count is accumulated when the reservation rows attach, in the same
//! transaction, so the count never exceeds the sum of confirmed
//! reservations on the slot.

use crate::error::CoreError;
use crate::resolver::{ResolutionOutcome, SkippedRequest, StandingAssignment, resolve_standing_requests};
use fairway_domain::{
    DaySheet, DomainError, IntervalPolicy, OperatingHours, Slot, StandingRequest,
    generate_slot_times,
};
use std::collections::HashSet;
use time::{Date, PrimitiveDateTime, Time};

/// A fully planned day sheet, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySheetPlan {
    /// The sheet row to insert.
    pub sheet: DaySheet,
    /// All slots for the date, sorted by start time. All slots are empty,
    /// including those granted to a standing assignment.
    pub slots: Vec<Slot>,
    /// Winning standing requests needing reservation rows.
    pub assignments: Vec<StandingAssignment>,
    /// Standing requests that were active but received nothing.
    pub skipped: Vec<SkippedRequest>,
}

/// Plans the tee sheet for one date.
///
/// # Arguments
///
/// * `sheet_date` - The date to generate
/// * `hours` - Operating hours for the date
/// * `policy` - Interval policy for the date
/// * `standing_requests` - All standing requests to consider
///
/// # Returns
///
/// A `DaySheetPlan` whose slot list covers every canonical tee time
/// exactly once.
///
/// # Errors
///
/// Returns an error if a standing party cannot fit its own slot, which
/// would mean a party larger than the slot capacity slipped past
/// validation.
pub fn build_day_sheet_plan(
    sheet_date: Date,
    hours: OperatingHours,
    policy: IntervalPolicy,
    standing_requests: &[StandingRequest],
) -> Result<DaySheetPlan, CoreError> {
    let outcome: ResolutionOutcome =
        resolve_standing_requests(sheet_date, &hours, &policy, standing_requests)?;

    let mut slots: Vec<Slot> = Vec::new();
    let mut claimed: HashSet<Time> = HashSet::new();

    // Phase 1: empty placeholder slots for standing assignments. The
    // booked count is applied when the reservation rows attach.
    for assignment in &outcome.assignments {
        let slot = Slot::new(PrimitiveDateTime::new(sheet_date, assignment.tee_time));
        let party_size = assignment.request.party_size();
        if party_size > slot.remaining_capacity() {
            return Err(CoreError::from(DomainError::SlotCapacityExceeded {
                requested: party_size,
                remaining: slot.remaining_capacity(),
            }));
        }
        claimed.insert(assignment.tee_time);
        slots.push(slot);
    }

    // Phase 2: empty slots for every unclaimed canonical tee time.
    for tee_time in generate_slot_times(&hours, &policy) {
        if !claimed.contains(&tee_time) {
            slots.push(Slot::new(PrimitiveDateTime::new(sheet_date, tee_time)));
        }
    }

    slots.sort_by_key(Slot::start);

    Ok(DaySheetPlan {
        sheet: DaySheet::new(sheet_date, hours, policy),
        slots,
        assignments: outcome.assignments,
        skipped: outcome.skipped,
    })
}
