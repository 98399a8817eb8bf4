// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::handlers::{book_slot, cancel_reservation};
use crate::request_response::{BookSlotRequest, CancelReservationRequest};
use fairway_persistence::Persistence;

fn booking(slot_id: i64, number_of_players: u8, number_of_carts: u8) -> BookSlotRequest {
    BookSlotRequest {
        slot_id,
        number_of_players,
        number_of_carts,
    }
}

/// Generates the standard sheet and returns its first slot ID.
fn sheet_with_first_slot(persistence: &mut Persistence) -> i64 {
    super::generate_sheet(persistence);
    super::sheet_slots(persistence)[0].slot_id
}

#[test]
fn test_booking_records_reservation_and_occupies_slot() {
    let mut persistence = super::test_persistence();
    let slot_id = sheet_with_first_slot(&mut persistence);

    let response = book_slot(
        &mut persistence,
        &booking(slot_id, 2, 1),
        &super::member(7),
        super::now(),
    )
    .unwrap();

    assert_eq!(response.slot_id, slot_id);
    let slot = &super::sheet_slots(&mut persistence)[0];
    assert_eq!(slot.booked_player_count, 2);
    assert!(slot.is_available);

    let reservation = persistence.get_reservation(response.reservation_id).unwrap();
    assert_eq!(reservation.member_id, 7);
    assert_eq!(reservation.number_of_players, 2);
    assert_eq!(reservation.number_of_carts, 1);
}

#[test]
fn test_booking_zero_players_violates_policy() {
    let mut persistence = super::test_persistence();
    let slot_id = sheet_with_first_slot(&mut persistence);

    let result = book_slot(
        &mut persistence,
        &booking(slot_id, 0, 0),
        &super::member(7),
        super::now(),
    );

    assert!(matches!(result, Err(ApiError::BookingPolicyViolation { .. })));
}

#[test]
fn test_booking_five_players_violates_policy() {
    let mut persistence = super::test_persistence();
    let slot_id = sheet_with_first_slot(&mut persistence);

    let result = book_slot(
        &mut persistence,
        &booking(slot_id, 5, 0),
        &super::member(7),
        super::now(),
    );

    assert!(matches!(result, Err(ApiError::BookingPolicyViolation { .. })));
}

#[test]
fn test_booking_more_carts_than_players_violates_policy() {
    let mut persistence = super::test_persistence();
    let slot_id = sheet_with_first_slot(&mut persistence);

    let result = book_slot(
        &mut persistence,
        &booking(slot_id, 2, 3),
        &super::member(7),
        super::now(),
    );

    assert!(matches!(result, Err(ApiError::BookingPolicyViolation { .. })));

    // Policy failures never touch the slot.
    assert_eq!(super::sheet_slots(&mut persistence)[0].booked_player_count, 0);
}

#[test]
fn test_booking_beyond_remaining_capacity_reports_counts() {
    let mut persistence = super::test_persistence();
    let slot_id = sheet_with_first_slot(&mut persistence);
    book_slot(
        &mut persistence,
        &booking(slot_id, 3, 0),
        &super::member(7),
        super::now(),
    )
    .unwrap();

    let result = book_slot(
        &mut persistence,
        &booking(slot_id, 2, 0),
        &super::member(8),
        super::now(),
    );

    assert_eq!(
        result,
        Err(ApiError::CapacityExceeded {
            slot_id,
            requested: 2,
            remaining: 1,
        })
    );
}

#[test]
fn test_booking_full_slot_unavailable() {
    let mut persistence = super::test_persistence();
    let slot_id = sheet_with_first_slot(&mut persistence);
    book_slot(
        &mut persistence,
        &booking(slot_id, 4, 0),
        &super::member(7),
        super::now(),
    )
    .unwrap();

    let result = book_slot(
        &mut persistence,
        &booking(slot_id, 1, 0),
        &super::member(8),
        super::now(),
    );

    assert_eq!(result, Err(ApiError::SlotUnavailable { slot_id }));
}

#[test]
fn test_booking_unknown_slot_not_found() {
    let mut persistence = super::test_persistence();
    super::generate_sheet(&mut persistence);

    let result = book_slot(
        &mut persistence,
        &booking(9999, 1, 0),
        &super::member(7),
        super::now(),
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { resource_type, .. }) if resource_type == "Slot"
    ));
}

#[test]
fn test_cancellation_releases_spots() {
    let mut persistence = super::test_persistence();
    let slot_id = sheet_with_first_slot(&mut persistence);
    let reservation_id = book_slot(
        &mut persistence,
        &booking(slot_id, 3, 0),
        &super::member(7),
        super::now(),
    )
    .unwrap()
    .reservation_id;

    cancel_reservation(
        &mut persistence,
        &CancelReservationRequest { reservation_id },
        &super::member(7),
    )
    .unwrap();

    let slot = &super::sheet_slots(&mut persistence)[0];
    assert_eq!(slot.booked_player_count, 0);
    assert!(slot.is_available);
}

#[test]
fn test_cancelling_someone_elses_reservation_forbidden() {
    let mut persistence = super::test_persistence();
    let slot_id = sheet_with_first_slot(&mut persistence);
    let reservation_id = book_slot(
        &mut persistence,
        &booking(slot_id, 2, 0),
        &super::member(7),
        super::now(),
    )
    .unwrap()
    .reservation_id;

    let result = cancel_reservation(
        &mut persistence,
        &CancelReservationRequest { reservation_id },
        &super::member(8),
    );

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
    assert_eq!(super::sheet_slots(&mut persistence)[0].booked_player_count, 2);
}

#[test]
fn test_cancelling_unknown_reservation_not_found() {
    let mut persistence = super::test_persistence();
    super::generate_sheet(&mut persistence);

    let result = cancel_reservation(
        &mut persistence,
        &CancelReservationRequest {
            reservation_id: 9999,
        },
        &super::member(7),
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { resource_type, .. }) if resource_type == "Reservation"
    ));
}

#[test]
fn test_cancellation_is_idempotent() {
    let mut persistence = super::test_persistence();
    let slot_id = sheet_with_first_slot(&mut persistence);
    let reservation_id = book_slot(
        &mut persistence,
        &booking(slot_id, 2, 0),
        &super::member(7),
        super::now(),
    )
    .unwrap()
    .reservation_id;
    let request = CancelReservationRequest { reservation_id };

    cancel_reservation(&mut persistence, &request, &super::member(7)).unwrap();
    cancel_reservation(&mut persistence, &request, &super::member(7)).unwrap();

    // The spots were released exactly once.
    assert_eq!(super::sheet_slots(&mut persistence)[0].booked_player_count, 0);
}
