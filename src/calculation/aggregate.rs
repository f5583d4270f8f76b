//! Household aggregation.
//!
//! Totals are summed from the already-rounded per-child figures so that the
//! displayed breakdown always adds up to the displayed totals.

use rust_decimal::Decimal;

use crate::models::{AuditStep, ChildResult, SubsidyTotals};

use super::rounding::round_to_cents;

/// Sums per-child results into household totals.
///
/// Gross cost, national subsidy and municipal subsidy are summed across the
/// rounded child figures. The total net cost is clamped at zero on its own,
/// independently of each child's clamp, then rounded again.
///
/// # Examples
///
/// ```
/// use subsidy_engine::calculation::aggregate;
///
/// let totals = aggregate(&[]);
/// assert!(totals.total_net_cost.is_zero());
/// ```
pub fn aggregate(results: &[ChildResult]) -> SubsidyTotals {
    let total_gross_cost: Decimal = results.iter().map(|r| r.gross_cost).sum();
    let total_national_subsidy: Decimal = results.iter().map(|r| r.national_subsidy).sum();
    let total_municipal_subsidy: Decimal = results.iter().map(|r| r.municipal_subsidy).sum();
    let total_subsidy = total_national_subsidy + total_municipal_subsidy;
    let total_net_cost = (total_gross_cost - total_subsidy).max(Decimal::ZERO);

    SubsidyTotals {
        total_gross_cost: round_to_cents(total_gross_cost),
        total_national_subsidy: round_to_cents(total_national_subsidy),
        total_municipal_subsidy: round_to_cents(total_municipal_subsidy),
        total_subsidy: round_to_cents(total_subsidy),
        total_net_cost: round_to_cents(total_net_cost),
    }
}

/// Builds the audit step describing an aggregation.
pub(crate) fn aggregation_audit_step(
    results: &[ChildResult],
    totals: &SubsidyTotals,
    step_number: u32,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "household_totals".to_string(),
        rule_name: "Household Totals".to_string(),
        input: serde_json::json!({
            "child_count": results.len(),
            "child_net_costs": results.iter().map(|r| r.net_cost.to_string()).collect::<Vec<_>>()
        }),
        output: serde_json::json!({
            "total_gross_cost": totals.total_gross_cost.to_string(),
            "total_national_subsidy": totals.total_national_subsidy.to_string(),
            "total_municipal_subsidy": totals.total_municipal_subsidy.to_string(),
            "total_subsidy": totals.total_subsidy.to_string(),
            "total_net_cost": totals.total_net_cost.to_string()
        }),
        reasoning: format!(
            "${} gross - ${} subsidy = ${} net across {} children",
            totals.total_gross_cost,
            totals.total_subsidy,
            totals.total_net_cost,
            results.len()
        ),
    }
}
