//! Calculation result models for the Childcare Subsidy Engine.
//!
//! This module contains the [`CalculationResult`] type and its associated structures
//! that capture all outputs from a subsidy calculation, including per-child
//! breakdowns, household totals, and the audit trace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::CareCategory;

/// The cost and subsidy breakdown for a single child.
///
/// All money figures are rounded to cents.
///
/// # Example
///
/// ```
/// use subsidy_engine::models::{CareCategory, ChildResult};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let child = ChildResult {
///     care_category: CareCategory::Daycare,
///     is_first_child: true,
///     applied_percentage: Decimal::from(96),
///     reimbursed_hourly_rate: Decimal::from_str("8.50").unwrap(),
///     reimbursed_hours: Decimal::from(160),
///     gross_cost: Decimal::from_str("1360.00").unwrap(),
///     national_subsidy: Decimal::from_str("1305.60").unwrap(),
///     municipal_subsidy: Decimal::ZERO,
///     total_subsidy: Decimal::from_str("1305.60").unwrap(),
///     net_cost: Decimal::from_str("54.40").unwrap(),
/// };
/// assert_eq!(child.gross_cost - child.total_subsidy, child.net_cost);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildResult {
    /// The care category of the child.
    pub care_category: CareCategory,
    /// Whether this child was ranked first (most monthly hours).
    pub is_first_child: bool,
    /// The national subsidy percentage applied to this child.
    pub applied_percentage: Decimal,
    /// The hourly rate eligible for subsidy (capped at the schedule maximum).
    pub reimbursed_hourly_rate: Decimal,
    /// The monthly hours eligible for subsidy (capped at the policy maximum).
    pub reimbursed_hours: Decimal,
    /// The family's actual monthly bill before subsidy.
    pub gross_cost: Decimal,
    /// The national government subsidy.
    pub national_subsidy: Decimal,
    /// The municipal supplement.
    pub municipal_subsidy: Decimal,
    /// National plus municipal subsidy.
    pub total_subsidy: Decimal,
    /// What the family pays after subsidy, never negative.
    pub net_cost: Decimal,
}

/// Household totals across all children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsidyTotals {
    /// Sum of the children's gross costs.
    pub total_gross_cost: Decimal,
    /// Sum of the children's national subsidies.
    pub total_national_subsidy: Decimal,
    /// Sum of the children's municipal subsidies.
    pub total_municipal_subsidy: Decimal,
    /// National plus municipal totals.
    pub total_subsidy: Decimal,
    /// Gross minus subsidy for the household, never negative.
    pub total_net_cost: Decimal,
}

/// The schedule figures a calculation was based on, echoed for traceability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// The schedule year.
    pub year: i32,
    /// Maximum reimbursable hourly rate per care category.
    pub max_hourly_rate: BTreeMap<CareCategory, Decimal>,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag figures a reader may want to double check; they never
/// prevent a result from being produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// The trace holds no timestamps or timings so that repeated calculations
/// compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of a subsidy calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Household totals.
    pub totals: SubsidyTotals,
    /// Per-child breakdowns, in the same order as the request's children.
    pub children: Vec<ChildResult>,
    /// The schedule the calculation used.
    pub schedule_used: ScheduleSummary,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
