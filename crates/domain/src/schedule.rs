// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Slot calendar calculation.
//!
//! This module derives the canonical tee times for a day sheet from its
//! operating hours and interval policy, and snaps arbitrary requested times
//! onto that grid.
//!
//! ## Invariants
//!
//! - Slot times are strictly increasing and lie within operating hours,
//!   both endpoints inclusive.
//! - The grid is deterministic: the same hours and policy always produce
//!   the same times.
//! - Rounding snaps to the nearest grid time; an exact tie rounds to the
//!   later time. A time that snaps outside operating hours is rejected.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Time;

const MINUTES_PER_HOUR: u16 = 60;
const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// How tee times are spaced across the operating day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntervalPolicy {
    /// A fixed number of minutes between consecutive tee times, anchored
    /// at the operating start.
    Uniform {
        /// Minutes between consecutive tee times.
        minutes: u16,
    },
    /// Fixed minute offsets repeated every hour, e.g. `[0, 15, 30, 45]`.
    HourlyOffsets {
        /// Sorted, deduplicated minute offsets, each less than 60.
        minutes: Vec<u8>,
    },
}

impl IntervalPolicy {
    /// Creates a uniform interval policy.
    ///
    /// # Errors
    ///
    /// Returns an error if `minutes` is zero.
    pub const fn uniform(minutes: u16) -> Result<Self, DomainError> {
        if minutes == 0 {
            return Err(DomainError::InvalidInterval { minutes });
        }
        Ok(Self::Uniform { minutes })
    }

    /// Creates an hourly-offset interval policy.
    ///
    /// Offsets are sorted and deduplicated.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or any offset is 60 or more.
    pub fn hourly_offsets(mut minutes: Vec<u8>) -> Result<Self, DomainError> {
        if minutes.is_empty() {
            return Err(DomainError::InvalidHourlyOffsets {
                reason: "offset list is empty".to_string(),
            });
        }
        if let Some(bad) = minutes.iter().find(|&&m| u16::from(m) >= MINUTES_PER_HOUR) {
            return Err(DomainError::InvalidHourlyOffsets {
                reason: format!("offset {bad} is not less than 60"),
            });
        }
        minutes.sort_unstable();
        minutes.dedup();
        Ok(Self::HourlyOffsets { minutes })
    }
}

/// First and last tee times of an operating day, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    start: Time,
    end: Time,
}

impl OperatingHours {
    /// Creates validated `OperatingHours`.
    ///
    /// `start == end` is a valid single-slot operating window.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is after `end`.
    pub fn new(start: Time, end: Time) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvalidOperatingHours { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first tee time of the day.
    #[must_use]
    pub const fn start(&self) -> Time {
        self.start
    }

    /// Returns the last tee time of the day.
    #[must_use]
    pub const fn end(&self) -> Time {
        self.end
    }
}

fn minutes_of_day(t: Time) -> u16 {
    u16::from(t.hour()) * MINUTES_PER_HOUR + u16::from(t.minute())
}

fn time_from_minutes(total: u16) -> Option<Time> {
    if total >= MINUTES_PER_DAY {
        return None;
    }
    let hour = u8::try_from(total / MINUTES_PER_HOUR).ok()?;
    let minute = u8::try_from(total % MINUTES_PER_HOUR).ok()?;
    Time::from_hms(hour, minute, 0).ok()
}

/// Generates the canonical tee times for a day.
///
/// # Arguments
///
/// * `hours` - The operating hours, both endpoints inclusive
/// * `policy` - The interval policy
///
/// # Returns
///
/// Strictly increasing tee times within the operating hours. Never empty:
/// the operating start itself always qualifies under a uniform policy, and
/// an hourly-offset grid that misses the window entirely still yields the
/// offsets that land inside it.
#[must_use]
pub fn generate_slot_times(hours: &OperatingHours, policy: &IntervalPolicy) -> Vec<Time> {
    let start_min = minutes_of_day(hours.start());
    let end_min = minutes_of_day(hours.end());

    match policy {
        IntervalPolicy::Uniform { minutes } => (start_min..=end_min)
            .step_by(usize::from(*minutes))
            .filter_map(time_from_minutes)
            .collect(),
        IntervalPolicy::HourlyOffsets { minutes } => {
            let mut times = Vec::new();
            for hour in hours.start().hour()..=hours.end().hour() {
                for &offset in minutes {
                    let candidate = u16::from(hour) * MINUTES_PER_HOUR + u16::from(offset);
                    if start_min <= candidate && candidate <= end_min {
                        if let Some(t) = time_from_minutes(candidate) {
                            times.push(t);
                        }
                    }
                }
            }
            times
        }
    }
}

/// Snaps a requested time onto the slot grid.
///
/// The grid is extended across the whole day, the requested time snaps to
/// the nearest grid time (an exact tie rounds later), and the result is
/// accepted only if it falls within operating hours.
///
/// # Arguments
///
/// * `hours` - The operating hours of the sheet
/// * `policy` - The interval policy of the sheet
/// * `requested` - The time to snap
///
/// # Returns
///
/// The nearest tee time, or `None` when the snapped time lands outside
/// operating hours.
#[must_use]
pub fn round_to_tee_time(
    hours: &OperatingHours,
    policy: &IntervalPolicy,
    requested: Time,
) -> Option<Time> {
    let start_min = i32::from(minutes_of_day(hours.start()));
    let end_min = i32::from(minutes_of_day(hours.end()));
    let requested_min = i32::from(minutes_of_day(requested));

    let rounded = match policy {
        IntervalPolicy::Uniform { minutes } => {
            let interval = i32::from(*minutes);
            let offset = requested_min - start_min;
            let mut index = offset.div_euclid(interval);
            if offset.rem_euclid(interval) * 2 >= interval {
                index += 1;
            }
            start_min + index * interval
        }
        IntervalPolicy::HourlyOffsets { minutes } => {
            let mut best: Option<(i32, i32)> = None;
            for hour in 0..24_i32 {
                for &offset in minutes {
                    let candidate = hour * i32::from(MINUTES_PER_HOUR) + i32::from(offset);
                    let distance = (candidate - requested_min).abs();
                    // Candidates ascend, so on an exact tie the later one wins.
                    let replace = best.is_none_or(|(d, _)| distance <= d);
                    if replace {
                        best = Some((distance, candidate));
                    }
                }
            }
            best.map(|(_, candidate)| candidate)?
        }
    };

    if rounded < start_min || rounded > end_min {
        return None;
    }
    u16::try_from(rounded).ok().and_then(time_from_minutes)
}
