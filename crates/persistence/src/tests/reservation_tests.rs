// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking and cancellation tests.

use super::{SHEET_DATE, booking_timestamp, create_sheet, test_persistence};
use crate::PersistenceError;
use fairway_domain::{ReservationKind, ReservationStatus};

#[test]
fn test_booking_records_reservation_and_counts_players() {
    let mut persistence = test_persistence();
    let (_, slots) = create_sheet(&mut persistence, SHEET_DATE);
    let slot_id = slots[0].slot_id().unwrap();

    let reservation_id = persistence
        .book_slot(slot_id, 42, 2, 1, booking_timestamp())
        .unwrap();

    let reservation = persistence.get_reservation(reservation_id).unwrap();
    assert_eq!(reservation.slot_id, slot_id);
    assert_eq!(reservation.member_id, 42);
    assert_eq!(reservation.number_of_players, 2);
    assert_eq!(reservation.number_of_carts, 1);
    assert_eq!(reservation.status, ReservationStatus::Confirmed);
    assert_eq!(reservation.kind, ReservationKind::Regular);
    assert_eq!(reservation.standing_request_id, None);

    let slot = persistence.get_slot(slot_id).unwrap();
    assert_eq!(slot.booked_player_count(), 2);
    assert!(slot.is_available());
}

#[test]
fn test_bookings_accumulate_until_full() {
    let mut persistence = test_persistence();
    let (_, slots) = create_sheet(&mut persistence, SHEET_DATE);
    let slot_id = slots[0].slot_id().unwrap();

    persistence
        .book_slot(slot_id, 1, 2, 0, booking_timestamp())
        .unwrap();
    persistence
        .book_slot(slot_id, 2, 2, 0, booking_timestamp())
        .unwrap();

    let slot = persistence.get_slot(slot_id).unwrap();
    assert_eq!(slot.booked_player_count(), 4);
    assert!(!slot.is_available());
}

#[test]
fn test_full_slot_rejects_booking() {
    let mut persistence = test_persistence();
    let (_, slots) = create_sheet(&mut persistence, SHEET_DATE);
    let slot_id = slots[0].slot_id().unwrap();

    persistence
        .book_slot(slot_id, 1, 4, 0, booking_timestamp())
        .unwrap();
    let result = persistence.book_slot(slot_id, 2, 1, 0, booking_timestamp());

    assert_eq!(result, Err(PersistenceError::SlotUnavailable { slot_id }));
}

#[test]
fn test_partial_slot_reports_remaining_capacity() {
    let mut persistence = test_persistence();
    let (_, slots) = create_sheet(&mut persistence, SHEET_DATE);
    let slot_id = slots[0].slot_id().unwrap();

    persistence
        .book_slot(slot_id, 1, 3, 0, booking_timestamp())
        .unwrap();
    let result = persistence.book_slot(slot_id, 2, 2, 0, booking_timestamp());

    assert_eq!(
        result,
        Err(PersistenceError::SlotCapacityConflict {
            slot_id,
            requested: 2,
            remaining: 1,
        })
    );

    // The failed booking wrote nothing.
    let slot = persistence.get_slot(slot_id).unwrap();
    assert_eq!(slot.booked_player_count(), 3);
}

#[test]
fn test_booking_unknown_slot_fails() {
    let mut persistence = test_persistence();
    create_sheet(&mut persistence, SHEET_DATE);

    let result = persistence.book_slot(9999, 1, 1, 0, booking_timestamp());

    assert_eq!(result, Err(PersistenceError::SlotNotFound(9999)));
}

#[test]
fn test_cancellation_releases_spots() {
    let mut persistence = test_persistence();
    let (_, slots) = create_sheet(&mut persistence, SHEET_DATE);
    let slot_id = slots[0].slot_id().unwrap();

    let reservation_id = persistence
        .book_slot(slot_id, 42, 3, 0, booking_timestamp())
        .unwrap();
    persistence.cancel_reservation(reservation_id, 42).unwrap();

    let reservation = persistence.get_reservation(reservation_id).unwrap();
    assert_eq!(reservation.status, ReservationStatus::Cancelled);

    let slot = persistence.get_slot(slot_id).unwrap();
    assert_eq!(slot.booked_player_count(), 0);
    assert!(slot.is_available());
}

#[test]
fn test_cancellation_is_idempotent() {
    let mut persistence = test_persistence();
    let (_, slots) = create_sheet(&mut persistence, SHEET_DATE);
    let slot_id = slots[0].slot_id().unwrap();

    let reservation_id = persistence
        .book_slot(slot_id, 42, 2, 0, booking_timestamp())
        .unwrap();
    persistence.cancel_reservation(reservation_id, 42).unwrap();
    persistence.cancel_reservation(reservation_id, 42).unwrap();

    // Spots are released exactly once.
    let slot = persistence.get_slot(slot_id).unwrap();
    assert_eq!(slot.booked_player_count(), 0);
}

#[test]
fn test_only_the_owner_can_cancel() {
    let mut persistence = test_persistence();
    let (_, slots) = create_sheet(&mut persistence, SHEET_DATE);
    let slot_id = slots[0].slot_id().unwrap();

    let reservation_id = persistence
        .book_slot(slot_id, 42, 2, 0, booking_timestamp())
        .unwrap();
    let result = persistence.cancel_reservation(reservation_id, 7);

    assert_eq!(
        result,
        Err(PersistenceError::NotReservationOwner {
            reservation_id,
            member_id: 7,
        })
    );

    let reservation = persistence.get_reservation(reservation_id).unwrap();
    assert_eq!(reservation.status, ReservationStatus::Confirmed);
}

#[test]
fn test_cancelling_unknown_reservation_fails() {
    let mut persistence = test_persistence();
    create_sheet(&mut persistence, SHEET_DATE);

    let result = persistence.cancel_reservation(9999, 42);

    assert_eq!(result, Err(PersistenceError::ReservationNotFound(9999)));
}

#[test]
fn test_member_reservation_history_includes_cancelled() {
    let mut persistence = test_persistence();
    let (_, slots) = create_sheet(&mut persistence, SHEET_DATE);
    let first_slot = slots[0].slot_id().unwrap();
    let second_slot = slots[1].slot_id().unwrap();

    let first = persistence
        .book_slot(first_slot, 42, 2, 0, booking_timestamp())
        .unwrap();
    let second = persistence
        .book_slot(second_slot, 42, 1, 0, booking_timestamp())
        .unwrap();
    persistence
        .book_slot(second_slot, 7, 1, 0, booking_timestamp())
        .unwrap();
    persistence.cancel_reservation(first, 42).unwrap();

    let history = persistence.list_reservations_for_member(42).unwrap();
    let ids: Vec<_> = history.iter().map(|r| r.reservation_id).collect();
    assert_eq!(ids, vec![Some(first), Some(second)]);
    assert_eq!(history[0].status, ReservationStatus::Cancelled);
    assert_eq!(history[1].status, ReservationStatus::Confirmed);
}

#[test]
fn test_slot_reservations_listing() {
    let mut persistence = test_persistence();
    let (_, slots) = create_sheet(&mut persistence, SHEET_DATE);
    let slot_id = slots[0].slot_id().unwrap();

    persistence
        .book_slot(slot_id, 1, 1, 0, booking_timestamp())
        .unwrap();
    persistence
        .book_slot(slot_id, 2, 1, 0, booking_timestamp())
        .unwrap();

    let listed = persistence.list_reservations_for_slot(slot_id).unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|r| r.slot_id == slot_id));
}
