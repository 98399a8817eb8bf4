// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use crate::error::AuthError;

/// Actor roles for authorization.
///
/// Roles determine what actions an authenticated actor may perform.
/// The role gate is deliberately thin: actors carry a role, handlers
/// check it. Real identity management sits outside this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Member role: club members booking for themselves.
    ///
    /// Members may:
    /// - book a slot for themselves
    /// - cancel their own reservations
    /// - submit standing requests
    Member,
    /// Staff role: pro-shop staff managing the tee sheet.
    ///
    /// Staff may:
    /// - generate day sheets
    /// - create and delete club events
    Staff,
    /// Committee role: the standing-request committee.
    ///
    /// Committee members may:
    /// - approve and revoke standing requests
    /// - list standing requests
    Committee,
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Staff => "Staff",
            Self::Committee => "Committee",
        }
    }
}

/// An authenticated actor with an associated role.
///
/// This represents a club member or staff account that has been
/// authenticated and may perform actions according to its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The member account behind this actor.
    pub member_id: i64,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `member_id` - The member account behind this actor
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(member_id: i64, role: Role) -> Self {
        Self { member_id, role }
    }
}

/// Stub authentication function.
///
/// This is a minimal placeholder. It does NOT implement real
/// authentication - that is explicitly out of scope. In a real system,
/// this would validate credentials or integrate with an identity
/// provider.
///
/// # Arguments
///
/// * `member_id` - The member account to authenticate
/// * `role` - The role to assign to the actor
///
/// # Errors
///
/// Returns an error if the member ID is not a positive identifier.
pub const fn authenticate_stub(
    member_id: i64,
    role: Role,
) -> Result<AuthenticatedActor, AuthError> {
    if member_id <= 0 {
        return Err(AuthError::AuthenticationFailed);
    }
    Ok(AuthenticatedActor::new(member_id, role))
}

/// Decides whether a member may submit standing requests.
///
/// Standing tee times are a privilege of certain membership classes, and
/// the membership ledger lives outside this system. Callers supply an
/// implementation backed by whatever source of truth they have.
pub trait MembershipEligibility {
    /// Returns whether the member may hold a standing tee time.
    fn is_eligible(&self, member_id: i64) -> bool;
}

/// Eligibility implementation that accepts every member.
///
/// Used by deployments without membership-class distinctions, and by
/// tests.
pub struct AllMembersEligible;

impl MembershipEligibility for AllMembersEligible {
    fn is_eligible(&self, _member_id: i64) -> bool {
        true
    }
}

/// Authorization service for enforcing role-based access control.
///
/// This service determines whether an authenticated actor has permission
/// to perform a specific action based on their role.
pub struct AuthorizationService;

impl AuthorizationService {
    fn require(
        actor: &AuthenticatedActor,
        required: Role,
        action: &'static str,
    ) -> Result<(), AuthError> {
        if actor.role == required {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action,
                required_role: required.as_str(),
            })
        }
    }

    /// Checks if an actor is authorized to generate a day sheet.
    ///
    /// Only Staff actors may generate day sheets.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Staff role.
    pub fn authorize_generate_day_sheet(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, Role::Staff, "generate_day_sheet")
    }

    /// Checks if an actor is authorized to book a slot.
    ///
    /// Only Member actors may book; members always book for themselves.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Member role.
    pub fn authorize_book_slot(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, Role::Member, "book_slot")
    }

    /// Checks if an actor is authorized to cancel a reservation.
    ///
    /// Only Member actors may cancel; ownership is enforced separately.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Member role.
    pub fn authorize_cancel_reservation(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, Role::Member, "cancel_reservation")
    }

    /// Checks if an actor is authorized to manage club events.
    ///
    /// Only Staff actors may create or delete events.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Staff role.
    pub fn authorize_manage_events(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, Role::Staff, "manage_events")
    }

    /// Checks if an actor is authorized to submit a standing request.
    ///
    /// Only Member actors may submit standing requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Member role.
    pub fn authorize_submit_standing_request(
        actor: &AuthenticatedActor,
    ) -> Result<(), AuthError> {
        Self::require(actor, Role::Member, "submit_standing_request")
    }

    /// Checks if an actor is authorized to review standing requests.
    ///
    /// Only Committee actors may approve, revoke, or list standing
    /// requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Committee role.
    pub fn authorize_review_standing_requests(
        actor: &AuthenticatedActor,
    ) -> Result<(), AuthError> {
        Self::require(actor, Role::Committee, "review_standing_requests")
    }
}
