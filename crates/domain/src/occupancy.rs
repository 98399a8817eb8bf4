// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Occupancy classification for the availability summary.
//!
//! This module provides read-only aggregation of slot counts into the
//! three-state occupancy label shown on the availability calendar.

use serde::{Deserialize, Serialize};

/// Occupancy label for one date on the availability calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayOccupancy {
    /// At least one slot exists and none has a spot left.
    FullyBooked,
    /// At most a quarter of the slots still have a spot.
    Limited,
    /// More than a quarter of the slots still have a spot.
    Open,
}

impl DayOccupancy {
    /// Converts this label to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullyBooked => "FullyBooked",
            Self::Limited => "Limited",
            Self::Open => "Open",
        }
    }
}

impl std::fmt::Display for DayOccupancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Slot counts for a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyCounts {
    /// Total slots on the date's sheet.
    pub total_slots: usize,
    /// Slots with at least one spot remaining.
    pub available_slots: usize,
}

impl OccupancyCounts {
    /// Creates new `OccupancyCounts`.
    #[must_use]
    pub const fn new(total_slots: usize, available_slots: usize) -> Self {
        Self {
            total_slots,
            available_slots,
        }
    }

    /// Classifies the date.
    ///
    /// Fully booked requires at least one slot with none available.
    /// Limited means the available share is at or below one quarter.
    /// The comparison is exact integer arithmetic, no float rounding.
    #[must_use]
    pub const fn classify(&self) -> DayOccupancy {
        if self.total_slots == 0 {
            return DayOccupancy::Open;
        }
        if self.available_slots == 0 {
            return DayOccupancy::FullyBooked;
        }
        if self.available_slots.saturating_mul(4) <= self.total_slots {
            return DayOccupancy::Limited;
        }
        DayOccupancy::Open
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_no_available_slots_is_fully_booked() {
        let counts = OccupancyCounts::new(40, 0);
        assert_eq!(counts.classify(), DayOccupancy::FullyBooked);
    }

    #[test]
    fn test_quarter_available_is_limited() {
        // 12 of 50 is 24%, at or under the quarter threshold.
        let counts = OccupancyCounts::new(50, 12);
        assert_eq!(counts.classify(), DayOccupancy::Limited);
    }

    #[test]
    fn test_just_over_quarter_is_open() {
        // 13 of 50 is 26%.
        let counts = OccupancyCounts::new(50, 13);
        assert_eq!(counts.classify(), DayOccupancy::Open);
    }

    #[test]
    fn test_exact_quarter_is_limited() {
        let counts = OccupancyCounts::new(40, 10);
        assert_eq!(counts.classify(), DayOccupancy::Limited);
    }

    #[test]
    fn test_single_open_slot_of_many() {
        let counts = OccupancyCounts::new(73, 1);
        assert_eq!(counts.classify(), DayOccupancy::Limited);
    }

    #[test]
    fn test_everything_available_is_open() {
        let counts = OccupancyCounts::new(73, 73);
        assert_eq!(counts.classify(), DayOccupancy::Open);
    }

    #[test]
    fn test_zero_slots_is_open() {
        let counts = OccupancyCounts::new(0, 0);
        assert_eq!(counts.classify(), DayOccupancy::Open);
    }
}
