// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::auth::{AllMembersEligible, Role, authenticate_stub};
use crate::error::{ApiError, AuthError};
use crate::handlers::{
    approve_standing_request, book_slot, cancel_reservation, create_event, delete_event,
    generate_day_sheet, list_standing_requests, revoke_standing_request, submit_standing_request,
};
use crate::request_response::{
    ApproveStandingRequestRequest, BookSlotRequest, CancelReservationRequest, CreateEventRequest,
    SubmitStandingRequestRequest,
};

#[test]
fn test_authenticate_stub_accepts_positive_member_id() {
    let actor = authenticate_stub(42, Role::Member).unwrap();
    assert_eq!(actor.member_id, 42);
    assert_eq!(actor.role, Role::Member);
}

#[test]
fn test_authenticate_stub_rejects_non_positive_member_id() {
    assert_eq!(
        authenticate_stub(0, Role::Member),
        Err(AuthError::AuthenticationFailed)
    );
    assert_eq!(
        authenticate_stub(-5, Role::Staff),
        Err(AuthError::AuthenticationFailed)
    );
}

#[test]
fn test_member_cannot_generate_day_sheet() {
    let mut persistence = super::test_persistence();

    let result = generate_day_sheet(
        &mut persistence,
        &super::sheet_request_for(super::SHEET_DATE),
        &super::member(1),
        super::now(),
    );

    assert_eq!(
        result,
        Err(ApiError::Unauthorized {
            action: String::from("generate_day_sheet"),
            required_role: String::from("Staff"),
        })
    );
}

#[test]
fn test_staff_cannot_book_slot() {
    let mut persistence = super::test_persistence();
    super::generate_sheet(&mut persistence);
    let slot_id = super::sheet_slots(&mut persistence)[0].slot_id;

    let request = BookSlotRequest {
        slot_id,
        number_of_players: 2,
        number_of_carts: 0,
    };
    let result = book_slot(&mut persistence, &request, &super::staff(), super::now());

    assert_eq!(
        result,
        Err(ApiError::Unauthorized {
            action: String::from("book_slot"),
            required_role: String::from("Member"),
        })
    );
}

#[test]
fn test_committee_cannot_cancel_reservation() {
    let mut persistence = super::test_persistence();

    let request = CancelReservationRequest { reservation_id: 1 };
    let result = cancel_reservation(&mut persistence, &request, &super::committee());

    assert_eq!(
        result,
        Err(ApiError::Unauthorized {
            action: String::from("cancel_reservation"),
            required_role: String::from("Member"),
        })
    );
}

#[test]
fn test_member_cannot_manage_events() {
    let mut persistence = super::test_persistence();

    let request = CreateEventRequest {
        name: "Club Championship".to_string(),
        event_date: super::SHEET_DATE.to_string(),
        start_time: "08:00:00".to_string(),
        end_time: "09:00:00".to_string(),
        color: "#2e7d32".to_string(),
    };
    let created = create_event(&mut persistence, &request, &super::member(1));
    let deleted = delete_event(&mut persistence, 1, &super::member(1));

    for result in [created.map(|_| ()), deleted.map(|_| ())] {
        assert_eq!(
            result,
            Err(ApiError::Unauthorized {
                action: String::from("manage_events"),
                required_role: String::from("Staff"),
            })
        );
    }
}

#[test]
fn test_staff_cannot_submit_standing_request() {
    let mut persistence = super::test_persistence();

    let request = SubmitStandingRequestRequest {
        partner_ids: vec![],
        day_of_week: 6,
        start_date: "2026-01-01".to_string(),
        end_date: "2026-12-31".to_string(),
        desired_time: "09:00:00".to_string(),
    };
    let result = submit_standing_request(
        &mut persistence,
        &request,
        &super::staff(),
        &AllMembersEligible,
    );

    assert_eq!(
        result,
        Err(ApiError::Unauthorized {
            action: String::from("submit_standing_request"),
            required_role: String::from("Member"),
        })
    );
}

#[test]
fn test_member_cannot_review_standing_requests() {
    let mut persistence = super::test_persistence();
    let unauthorized = Err(ApiError::Unauthorized {
        action: String::from("review_standing_requests"),
        required_role: String::from("Committee"),
    });

    let approve = ApproveStandingRequestRequest {
        standing_request_id: 1,
        priority: 1,
        approved_time: "09:00:00".to_string(),
    };
    assert_eq!(
        approve_standing_request(&mut persistence, &approve, &super::member(1), super::today())
            .map(|_| ()),
        unauthorized
    );
    assert_eq!(
        revoke_standing_request(&mut persistence, 1, &super::member(1)).map(|_| ()),
        unauthorized
    );
    assert_eq!(
        list_standing_requests(&mut persistence, None, &super::member(1)).map(|_| ()),
        unauthorized
    );
}
