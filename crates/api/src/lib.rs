// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Fairway tee sheet system.
//!
//! This crate is the operation boundary consumed by any transport. It owns
//! the request/response DTOs, the role gate, the booking policy, and the
//! translation of lower-layer errors into the API contract. Handlers
//! orchestrate the pure allocation logic in `fairway-core` against the
//! persistence adapter.

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
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod booking_policy;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{
    AllMembersEligible, AuthenticatedActor, AuthorizationService, MembershipEligibility, Role,
    authenticate_stub,
};
pub use booking_policy::{BookingPolicy, BookingPolicyError};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use handlers::{
    approve_standing_request, book_slot, cancel_reservation, create_event, delete_event,
    generate_day_sheet, get_day_sheet, list_events, list_slots, list_standing_requests,
    revoke_standing_request, submit_standing_request, summarize_availability,
};
pub use request_response::{
    ApproveStandingRequestRequest, ApproveStandingRequestResponse, AvailabilitySummaryResponse,
    BookSlotRequest, BookSlotResponse, CancelReservationRequest, CancelReservationResponse,
    CreateEventRequest, CreateEventResponse, DayAvailabilityInfo, DaySlotsInfo,
    DeleteEventResponse, EventInfo, GenerateDaySheetRequest, GenerateDaySheetResponse,
    GetDaySheetResponse, ListEventsResponse, ListSlotsResponse, ListStandingRequestsResponse,
    RevokeStandingRequestResponse, SkippedRequestInfo, SlotInfo, StandingRequestInfo,
    SubmitStandingRequestRequest, SubmitStandingRequestResponse,
};
