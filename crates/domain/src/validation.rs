// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::MAX_PLAYERS_PER_SLOT;
use time::Date;

/// Validates a booking's player count.
///
/// # Arguments
///
/// * `count` - The number of players in the booking
///
/// # Returns
///
/// * `Ok(())` if the count is between 1 and the slot maximum
/// * `Err(DomainError)` otherwise
///
/// # Errors
///
/// Returns an error if the count is zero or greater than 4.
pub const fn validate_player_count(count: u8) -> Result<(), DomainError> {
    if count == 0 || count > MAX_PLAYERS_PER_SLOT {
        return Err(DomainError::InvalidPlayerCount { count });
    }
    Ok(())
}

/// Validates a booking's cart count.
///
/// # Arguments
///
/// * `count` - The number of carts requested
///
/// # Errors
///
/// Returns an error if the count is greater than 4.
pub const fn validate_cart_count(count: u8) -> Result<(), DomainError> {
    if count > MAX_PLAYERS_PER_SLOT {
        return Err(DomainError::InvalidCartCount { count });
    }
    Ok(())
}

/// Validates the partner list of a standing request.
///
/// The requesting member is implicit, so at most three partners may be
/// named for a four-player party.
///
/// # Errors
///
/// Returns an error if more than three partners are named.
pub fn validate_partner_ids(partner_ids: &[i64]) -> Result<(), DomainError> {
    let party = 1 + partner_ids.len();
    if party > usize::from(MAX_PLAYERS_PER_SLOT) {
        return Err(DomainError::InvalidPartySize { count: party });
    }
    Ok(())
}

/// Validates that a date range is not inverted.
///
/// # Errors
///
/// Returns an error if `start_date` is after `end_date`.
pub fn validate_date_range(start_date: Date, end_date: Date) -> Result<(), DomainError> {
    if start_date > end_date {
        return Err(DomainError::InvalidDateRange {
            start_date,
            end_date,
        });
    }
    Ok(())
}

/// Validates an approval priority rank.
///
/// # Errors
///
/// Returns an error if the priority is less than 1.
pub const fn validate_priority(priority: i32) -> Result<(), DomainError> {
    if priority < 1 {
        return Err(DomainError::InvalidPriority { priority });
    }
    Ok(())
}

/// Validates an event name.
///
/// # Errors
///
/// Returns an error if the name is empty or whitespace only.
pub fn validate_event_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(
            "event name cannot be empty".to_string(),
        ));
    }
    Ok(())
}
