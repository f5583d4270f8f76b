//! Calculation logic for the Childcare Subsidy Engine.
//!
//! This module contains the subsidy calculation pipeline: income bracket
//! resolution, child ranking by monthly hours, per-child cost and subsidy
//! calculation with rate and hour caps, household aggregation, cent rounding,
//! and normalization of free-text care-offering names.

mod aggregate;
mod bracket;
mod care_type;
mod child_cost;
mod engine;
mod ranking;
mod rounding;

pub use aggregate::aggregate;
pub use bracket::{BracketResolution, SubsidyPercentages, resolve_percentages};
pub use care_type::normalize_care_category;
pub use child_cost::{ChildCalculation, MAX_REIMBURSED_MONTHLY_HOURS, calculate_child};
pub use engine::{calculate, calculate_with_schedule};
pub use ranking::{RankedChild, rank_children};
pub use rounding::round_to_cents;
