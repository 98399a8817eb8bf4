// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Club event tests.

use time::macros::{date, time};

use super::{SHEET_DATE, booking_timestamp, create_sheet, test_persistence};
use crate::PersistenceError;
use fairway_domain::ClubEvent;

fn morning_event(name: &str) -> ClubEvent {
    ClubEvent::new(
        name.to_string(),
        SHEET_DATE,
        time!(08:30),
        time!(09:30),
        "#2e7d32".to_string(),
    )
    .unwrap()
}

#[test]
fn test_create_and_fetch_event() {
    let mut persistence = test_persistence();

    let event_id = persistence
        .create_event(&morning_event("Spring Scramble"))
        .unwrap();

    let stored = persistence.get_event(event_id).unwrap();
    assert_eq!(stored.event_id, Some(event_id));
    assert_eq!(stored.name, "Spring Scramble");
    assert_eq!(stored.event_date, SHEET_DATE);
    assert_eq!(stored.start_time, time!(08:30));
    assert_eq!(stored.end_time, time!(09:30));
    assert_eq!(stored.color, "#2e7d32");
}

#[test]
fn test_event_blocks_covered_slots() {
    let mut persistence = test_persistence();
    let (_, slots) = create_sheet(&mut persistence, SHEET_DATE);

    let event_id = persistence
        .create_event(&morning_event("Spring Scramble"))
        .unwrap();

    // 08:30, 09:00, and 09:30 fall inside the window; 08:00 and 10:00 do not.
    let (_, stored) = persistence.get_day_sheet_with_slots(SHEET_DATE).unwrap();
    for (slot, original) in stored.iter().zip(&slots) {
        let covered = time!(08:30) <= slot.start().time() && slot.start().time() <= time!(09:30);
        if covered {
            assert!(!slot.is_available());
            assert_eq!(slot.booked_player_count(), slot.max_players());
            assert_eq!(slot.linked_event_id(), Some(event_id));
            assert_eq!(slot.notes(), Some("Spring Scramble"));
        } else {
            assert_eq!(slot, original);
        }
    }
}

#[test]
fn test_event_without_sheet_writes_only_the_event() {
    let mut persistence = test_persistence();

    let event_id = persistence
        .create_event(&morning_event("Spring Scramble"))
        .unwrap();

    assert!(persistence.get_event(event_id).is_ok());
    // The sheet generated later starts unblocked.
    let (_, slots) = create_sheet(&mut persistence, SHEET_DATE);
    assert!(slots.iter().all(fairway_domain::Slot::is_available));
}

#[test]
fn test_blocked_slot_rejects_booking() {
    let mut persistence = test_persistence();
    let (_, slots) = create_sheet(&mut persistence, SHEET_DATE);
    persistence
        .create_event(&morning_event("Spring Scramble"))
        .unwrap();

    let slot_id = slots[2].slot_id().unwrap();
    let result = persistence.book_slot(slot_id, 42, 1, 0, booking_timestamp());

    assert_eq!(result, Err(PersistenceError::SlotUnavailable { slot_id }));
}

#[test]
fn test_deleting_event_releases_slots() {
    let mut persistence = test_persistence();
    create_sheet(&mut persistence, SHEET_DATE);
    let event_id = persistence
        .create_event(&morning_event("Spring Scramble"))
        .unwrap();

    persistence.delete_event(event_id).unwrap();

    assert_eq!(
        persistence.get_event(event_id),
        Err(PersistenceError::EventNotFound(event_id))
    );
    let (_, slots) = persistence.get_day_sheet_with_slots(SHEET_DATE).unwrap();
    for slot in &slots {
        assert!(slot.is_available());
        assert_eq!(slot.linked_event_id(), None);
        assert_eq!(slot.notes(), None);
    }
}

#[test]
fn test_deletion_refused_while_reservations_exist() {
    let mut persistence = test_persistence();
    let (_, slots) = create_sheet(&mut persistence, SHEET_DATE);

    // Book before the event lands, so a confirmed reservation sits on a
    // covered slot.
    let slot_id = slots[2].slot_id().unwrap();
    persistence
        .book_slot(slot_id, 42, 2, 0, booking_timestamp())
        .unwrap();
    let event_id = persistence
        .create_event(&morning_event("Spring Scramble"))
        .unwrap();

    let result = persistence.delete_event(event_id);

    assert_eq!(
        result,
        Err(PersistenceError::EventHasReservations { event_id })
    );
    assert!(persistence.get_event(event_id).is_ok());
}

#[test]
fn test_deleting_unknown_event_fails() {
    let mut persistence = test_persistence();

    let result = persistence.delete_event(9999);

    assert_eq!(result, Err(PersistenceError::EventNotFound(9999)));
}

#[test]
fn test_event_listing_ordered_by_date_and_time() {
    let mut persistence = test_persistence();
    let late = ClubEvent::new(
        "Twilight League".to_string(),
        date!(2026 - 06 - 08),
        time!(17:00),
        time!(18:00),
        "#1565c0".to_string(),
    )
    .unwrap();
    persistence.create_event(&late).unwrap();
    persistence
        .create_event(&morning_event("Spring Scramble"))
        .unwrap();

    let events = persistence
        .list_events_in_range(date!(2026 - 06 - 01), date!(2026 - 06 - 30))
        .unwrap();

    let names: Vec<_> = events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Spring Scramble", "Twilight League"]);

    let narrow = persistence
        .list_events_in_range(date!(2026 - 06 - 07), date!(2026 - 06 - 30))
        .unwrap();
    assert_eq!(narrow.len(), 1);
}
