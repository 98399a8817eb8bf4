// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::auth::{AllMembersEligible, MembershipEligibility};
use crate::error::ApiError;
use crate::handlers::{
    approve_standing_request, list_standing_requests, revoke_standing_request,
    submit_standing_request,
};
use crate::request_response::{ApproveStandingRequestRequest, SubmitStandingRequestRequest};
use fairway_persistence::Persistence;

struct NobodyEligible;

impl MembershipEligibility for NobodyEligible {
    fn is_eligible(&self, _member_id: i64) -> bool {
        false
    }
}

fn saturday_request(partner_ids: Vec<i64>) -> SubmitStandingRequestRequest {
    SubmitStandingRequestRequest {
        partner_ids,
        day_of_week: 6,
        start_date: "2026-01-01".to_string(),
        end_date: "2026-12-31".to_string(),
        desired_time: "09:00:00".to_string(),
    }
}

fn submit(persistence: &mut Persistence, member_id: i64, partner_ids: Vec<i64>) -> i64 {
    submit_standing_request(
        persistence,
        &saturday_request(partner_ids),
        &super::member(member_id),
        &AllMembersEligible,
    )
    .unwrap()
    .standing_request_id
}

fn approve(persistence: &mut Persistence, standing_request_id: i64, priority: i32) {
    let request = ApproveStandingRequestRequest {
        standing_request_id,
        priority,
        approved_time: "09:00:00".to_string(),
    };
    approve_standing_request(persistence, &request, &super::committee(), super::today()).unwrap();
}

#[test]
fn test_submitted_request_is_pending() {
    let mut persistence = super::test_persistence();
    let standing_request_id = submit(&mut persistence, 42, vec![43]);

    let response =
        list_standing_requests(&mut persistence, None, &super::committee()).unwrap();

    assert_eq!(response.requests.len(), 1);
    let info = &response.requests[0];
    assert_eq!(info.standing_request_id, standing_request_id);
    assert_eq!(info.member_id, 42);
    assert_eq!(info.partner_ids, vec![43]);
    assert_eq!(info.day_of_week, 6);
    assert_eq!(info.desired_time, "09:00:00");
    assert_eq!(info.status, "Pending");
    assert_eq!(info.priority, None);
    assert_eq!(info.approved_by, None);
}

#[test]
fn test_submission_rejects_oversized_party() {
    let mut persistence = super::test_persistence();

    let result = submit_standing_request(
        &mut persistence,
        &saturday_request(vec![2, 3, 4, 5]),
        &super::member(1),
        &AllMembersEligible,
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "partner_ids"
    ));
}

#[test]
fn test_submission_rejects_inverted_date_range() {
    let mut persistence = super::test_persistence();
    let mut request = saturday_request(vec![]);
    request.start_date = "2026-12-31".to_string();
    request.end_date = "2026-01-01".to_string();

    let result = submit_standing_request(
        &mut persistence,
        &request,
        &super::member(1),
        &AllMembersEligible,
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "date_range"
    ));
}

#[test]
fn test_submission_rejects_bad_weekday() {
    let mut persistence = super::test_persistence();
    let mut request = saturday_request(vec![]);
    request.day_of_week = 7;

    let result = submit_standing_request(
        &mut persistence,
        &request,
        &super::member(1),
        &AllMembersEligible,
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "day_of_week"
    ));
}

#[test]
fn test_ineligible_member_forbidden() {
    let mut persistence = super::test_persistence();

    let result = submit_standing_request(
        &mut persistence,
        &saturday_request(vec![]),
        &super::member(1),
        &NobodyEligible,
    );

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[test]
fn test_approval_records_grant() {
    let mut persistence = super::test_persistence();
    let standing_request_id = submit(&mut persistence, 42, vec![]);

    approve(&mut persistence, standing_request_id, 3);

    let response =
        list_standing_requests(&mut persistence, Some("Approved"), &super::committee()).unwrap();
    assert_eq!(response.requests.len(), 1);
    let info = &response.requests[0];
    assert_eq!(info.status, "Approved");
    assert_eq!(info.priority, Some(3));
    assert_eq!(info.approved_time.as_deref(), Some("09:00:00"));
    assert_eq!(info.approved_by, Some(super::COMMITTEE_ID));
    assert_eq!(info.approved_date.as_deref(), Some("2026-06-01"));
}

#[test]
fn test_approving_twice_rejected() {
    let mut persistence = super::test_persistence();
    let standing_request_id = submit(&mut persistence, 42, vec![]);
    approve(&mut persistence, standing_request_id, 1);

    let request = ApproveStandingRequestRequest {
        standing_request_id,
        priority: 2,
        approved_time: "09:00:00".to_string(),
    };
    let result =
        approve_standing_request(&mut persistence, &request, &super::committee(), super::today());

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "request_pending"
    ));
}

#[test]
fn test_approval_rejects_non_positive_priority() {
    let mut persistence = super::test_persistence();
    let standing_request_id = submit(&mut persistence, 42, vec![]);

    let request = ApproveStandingRequestRequest {
        standing_request_id,
        priority: 0,
        approved_time: "09:00:00".to_string(),
    };
    let result =
        approve_standing_request(&mut persistence, &request, &super::committee(), super::today());

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "priority"
    ));
}

#[test]
fn test_approving_unknown_request_not_found() {
    let mut persistence = super::test_persistence();

    let request = ApproveStandingRequestRequest {
        standing_request_id: 9999,
        priority: 1,
        approved_time: "09:00:00".to_string(),
    };
    let result =
        approve_standing_request(&mut persistence, &request, &super::committee(), super::today());

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { resource_type, .. }) if resource_type == "Standing request"
    ));
}

#[test]
fn test_revoking_unused_request_removes_it() {
    let mut persistence = super::test_persistence();
    let standing_request_id = submit(&mut persistence, 42, vec![]);
    approve(&mut persistence, standing_request_id, 1);

    revoke_standing_request(&mut persistence, standing_request_id, &super::committee()).unwrap();

    let response =
        list_standing_requests(&mut persistence, None, &super::committee()).unwrap();
    assert!(response.requests.is_empty());
}

#[test]
fn test_revoking_pending_request_rejected() {
    let mut persistence = super::test_persistence();
    let standing_request_id = submit(&mut persistence, 42, vec![]);

    let result =
        revoke_standing_request(&mut persistence, standing_request_id, &super::committee());

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "request_approved"
    ));
}

#[test]
fn test_revoking_used_request_releases_slot_and_keeps_history() {
    let mut persistence = super::test_persistence();
    let standing_request_id = submit(&mut persistence, 42, vec![43]);
    approve(&mut persistence, standing_request_id, 1);
    let generated = super::generate_sheet(&mut persistence);
    assert_eq!(generated.standing_reservation_count, 2);

    revoke_standing_request(&mut persistence, standing_request_id, &super::committee()).unwrap();

    let granted = super::sheet_slots(&mut persistence)
        .into_iter()
        .find(|slot| slot.start == "2026-06-06 09:00:00")
        .unwrap();
    assert_eq!(granted.booked_player_count, 0);
    assert!(granted.is_available);

    let response =
        list_standing_requests(&mut persistence, None, &super::committee()).unwrap();
    assert_eq!(response.requests.len(), 1);
    assert_eq!(response.requests[0].status, "Rejected");
    assert_eq!(response.requests[0].priority, None);
}

#[test]
fn test_listing_rejects_unknown_status_filter() {
    let mut persistence = super::test_persistence();

    let result = list_standing_requests(&mut persistence, Some("Maybe"), &super::committee());

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "status"
    ));
}

#[test]
fn test_status_filter_narrows_listing() {
    let mut persistence = super::test_persistence();
    let first = submit(&mut persistence, 42, vec![]);
    submit(&mut persistence, 77, vec![]);
    approve(&mut persistence, first, 1);

    let pending =
        list_standing_requests(&mut persistence, Some("Pending"), &super::committee()).unwrap();
    let approved =
        list_standing_requests(&mut persistence, Some("Approved"), &super::committee()).unwrap();
    let all = list_standing_requests(&mut persistence, None, &super::committee()).unwrap();

    assert_eq!(pending.requests.len(), 1);
    assert_eq!(pending.requests[0].member_id, 77);
    assert_eq!(approved.requests.len(), 1);
    assert_eq!(approved.requests[0].member_id, 42);
    assert_eq!(all.requests.len(), 2);
}
