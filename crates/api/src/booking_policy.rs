// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking policy validation.
//!
//! This module enforces the club's booking rules for a single
//! reservation before it ever reaches the capacity check.

use thiserror::Error;

/// Booking policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingPolicyError {
    /// A booking must cover at least one player.
    #[error("A booking must cover at least one player")]
    NoPlayers,

    /// Too many players requested.
    #[error("A booking covers at most {max_players} players (requested {requested})")]
    TooManyPlayers { max_players: u8, requested: u8 },

    /// Too many carts requested.
    #[error("A booking requests at most {max_carts} carts (requested {requested})")]
    TooManyCarts { max_carts: u8, requested: u8 },

    /// More carts than players requested.
    #[error("Carts ({carts}) must not exceed players ({players})")]
    CartsExceedPlayers { players: u8, carts: u8 },
}

/// Booking policy configuration.
pub struct BookingPolicy {
    /// Maximum players per booking.
    pub max_players: u8,
    /// Maximum carts per booking.
    pub max_carts: u8,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            max_players: 4,
            max_carts: 4,
        }
    }
}

impl BookingPolicy {
    /// Validates player and cart counts against the policy.
    ///
    /// # Arguments
    ///
    /// * `number_of_players` - Players the booking covers
    /// * `number_of_carts` - Carts requested
    ///
    /// # Errors
    ///
    /// Returns a `BookingPolicyError` if the counts violate the policy.
    pub const fn validate(
        &self,
        number_of_players: u8,
        number_of_carts: u8,
    ) -> Result<(), BookingPolicyError> {
        if number_of_players == 0 {
            return Err(BookingPolicyError::NoPlayers);
        }
        if number_of_players > self.max_players {
            return Err(BookingPolicyError::TooManyPlayers {
                max_players: self.max_players,
                requested: number_of_players,
            });
        }
        if number_of_carts > self.max_carts {
            return Err(BookingPolicyError::TooManyCarts {
                max_carts: self.max_carts,
                requested: number_of_carts,
            });
        }
        if number_of_carts > number_of_players {
            return Err(BookingPolicyError::CartsExceedPlayers {
                players: number_of_players,
                carts: number_of_carts,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_player_no_carts_accepted() {
        let policy = BookingPolicy::default();
        assert_eq!(policy.validate(1, 0), Ok(()));
    }

    #[test]
    fn test_full_foursome_with_carts_accepted() {
        let policy = BookingPolicy::default();
        assert_eq!(policy.validate(4, 4), Ok(()));
    }

    #[test]
    fn test_zero_players_rejected() {
        let policy = BookingPolicy::default();
        assert_eq!(policy.validate(0, 0), Err(BookingPolicyError::NoPlayers));
    }

    #[test]
    fn test_five_players_rejected() {
        let policy = BookingPolicy::default();
        assert_eq!(
            policy.validate(5, 0),
            Err(BookingPolicyError::TooManyPlayers {
                max_players: 4,
                requested: 5,
            })
        );
    }

    #[test]
    fn test_carts_exceeding_players_rejected() {
        let policy = BookingPolicy::default();
        assert_eq!(
            policy.validate(2, 3),
            Err(BookingPolicyError::CartsExceedPlayers {
                players: 2,
                carts: 3,
            })
        );
    }

    #[test]
    fn test_five_carts_rejected() {
        let policy = BookingPolicy::default();
        assert_eq!(
            policy.validate(4, 5),
            Err(BookingPolicyError::TooManyCarts {
                max_carts: 4,
                requested: 5,
            })
        );
    }
}
