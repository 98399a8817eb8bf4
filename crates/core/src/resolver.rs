// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Standing request resolution for a single sheet date.
//!
//! Resolution is pure and deterministic: the same requests in any input
//! order produce the same assignments. The caller decides what to do with
//! the outcome; skipped requests carry a typed reason so the API layer can
//! log them.
//!
//! ## Invariants
//!
//! - Only approved requests whose weekday and date range match the sheet
//!   date participate. Approved rows carrying no priority rank are
//!   excluded outright.
//! - Requests are considered in priority order, lowest rank first, with
//!   the request identifier as a deterministic tiebreaker.
//! - Each tee time is granted at most once per day. Losers are skipped,
//!   not moved: their requests stay approved and untouched.

use crate::error::CoreError;
use fairway_domain::{IntervalPolicy, OperatingHours, StandingRequest, round_to_tee_time};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use time::{Date, Time};

/// A standing request granted a tee time on the sheet date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingAssignment {
    /// The winning request, including its party.
    pub request: StandingRequest,
    /// The granted tee time, snapped onto the slot grid.
    pub tee_time: Time,
}

/// Why a standing request received nothing on the sheet date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The approved time snaps outside the sheet's operating hours.
    OutsideOperatingHours,
    /// A higher-priority request already claimed the tee time.
    TimeAlreadyClaimed(Time),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutsideOperatingHours => {
                write!(f, "approved time falls outside operating hours")
            }
            Self::TimeAlreadyClaimed(tee_time) => {
                write!(f, "tee time {tee_time} already claimed by a higher priority")
            }
        }
    }
}

/// A standing request that was active on the sheet date but not granted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRequest {
    /// The request's persisted identifier, if any.
    pub standing_request_id: Option<i64>,
    /// The requesting member.
    pub member_id: i64,
    /// Why the request was skipped.
    pub reason: SkipReason,
}

/// Result of resolving standing requests for one sheet date.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolutionOutcome {
    /// Winning requests in priority order.
    pub assignments: Vec<StandingAssignment>,
    /// Active requests that received nothing, with reasons.
    pub skipped: Vec<SkippedRequest>,
}

/// Resolves which standing requests win tee times on a sheet date.
///
/// # Arguments
///
/// * `sheet_date` - The date being generated
/// * `hours` - The sheet's operating hours
/// * `policy` - The sheet's interval policy
/// * `requests` - All standing requests to consider; inactive ones are
///   ignored
///
/// # Returns
///
/// The assignments in priority order plus the skipped requests.
///
/// # Errors
///
/// This function currently has no failure path of its own; the `Result`
/// matches the other planning entry points.
pub fn resolve_standing_requests(
    sheet_date: Date,
    hours: &OperatingHours,
    policy: &IntervalPolicy,
    requests: &[StandingRequest],
) -> Result<ResolutionOutcome, CoreError> {
    // A rank-less approved row can only come from hand-edited data; it
    // never competes.
    let mut active: Vec<&StandingRequest> = requests
        .iter()
        .filter(|request| request.is_active_on(sheet_date) && request.priority.is_some())
        .collect();

    // Lowest priority rank wins; request id breaks ties deterministically.
    active.sort_by_key(|request| {
        (
            request.priority,
            request.standing_request_id.unwrap_or(i64::MAX),
        )
    });

    let mut outcome = ResolutionOutcome::default();
    let mut claimed: HashSet<Time> = HashSet::new();

    for request in active {
        let wanted = request.approved_time.unwrap_or(request.desired_time);
        let Some(tee_time) = round_to_tee_time(hours, policy, wanted) else {
            outcome.skipped.push(SkippedRequest {
                standing_request_id: request.standing_request_id,
                member_id: request.member_id,
                reason: SkipReason::OutsideOperatingHours,
            });
            continue;
        };

        if claimed.contains(&tee_time) {
            outcome.skipped.push(SkippedRequest {
                standing_request_id: request.standing_request_id,
                member_id: request.member_id,
                reason: SkipReason::TimeAlreadyClaimed(tee_time),
            });
            continue;
        }

        claimed.insert(tee_time);
        outcome.assignments.push(StandingAssignment {
            request: request.clone(),
            tee_time,
        });
    }

    Ok(outcome)
}
