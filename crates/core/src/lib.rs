// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod plan;
mod resolver;
mod summary;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use plan::{DaySheetPlan, build_day_sheet_plan};
pub use resolver::{
    ResolutionOutcome, SkipReason, SkippedRequest, StandingAssignment, resolve_standing_requests,
};
pub use summary::{DateAvailability, summarize_availability};
