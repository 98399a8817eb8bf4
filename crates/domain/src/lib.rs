// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod occupancy;
mod schedule;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use occupancy::{DayOccupancy, OccupancyCounts};
pub use schedule::{IntervalPolicy, OperatingHours, generate_slot_times, round_to_tee_time};
pub use types::{
    ClubEvent, DaySheet, MAX_PLAYERS_PER_SLOT, RequestStatus, Reservation, ReservationKind,
    ReservationStatus, Slot, StandingRequest, weekday_from_index, weekday_index,
};
pub use validation::{
    validate_cart_count, validate_date_range, validate_event_name, validate_partner_ids,
    validate_player_count, validate_priority,
};
