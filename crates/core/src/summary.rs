// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability summary aggregation.
//!
//! This module folds the slots of each sheet in a date range into the
//! per-date counts and occupancy label shown on the booking calendar.
//! Dates without a sheet simply do not appear.

use fairway_domain::{DayOccupancy, OccupancyCounts, Slot};
use serde::{Deserialize, Serialize};
use time::Date;

/// Availability for a single date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateAvailability {
    /// The sheet date.
    pub date: Date,
    /// Total slots on the sheet.
    pub total_slots: usize,
    /// Slots with at least one spot remaining.
    pub available_slots: usize,
    /// The occupancy label.
    pub occupancy: DayOccupancy,
}

/// Summarizes availability for the given sheets.
///
/// # Arguments
///
/// * `sheets` - One entry per existing sheet: the date and its slots
///
/// # Returns
///
/// One `DateAvailability` per sheet, sorted by date.
#[must_use]
pub fn summarize_availability(sheets: &[(Date, Vec<Slot>)]) -> Vec<DateAvailability> {
    let mut summary: Vec<DateAvailability> = sheets
        .iter()
        .map(|(date, slots)| {
            let counts = OccupancyCounts::new(
                slots.len(),
                slots.iter().filter(|slot| slot.is_available()).count(),
            );
            DateAvailability {
                date: *date,
                total_slots: counts.total_slots,
                available_slots: counts.available_slots,
                occupancy: counts.classify(),
            }
        })
        .collect();
    summary.sort_by_key(|entry| entry.date);
    summary
}
