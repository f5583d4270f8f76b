//! Per-child cost and subsidy calculation.
//!
//! This module applies the hourly-rate and monthly-hours caps to a single
//! child and splits the family's bill into subsidy and net cost.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::SubsidySchedule;
use crate::error::EngineResult;
use crate::models::{AuditStep, AuditWarning, ChildInput, ChildResult, MunicipalSupplement};

use super::rounding::round_to_cents;

/// Maximum monthly hours of care eligible for subsidy.
pub const MAX_REIMBURSED_MONTHLY_HOURS: Decimal = Decimal::from_parts(230, 0, 0, false, 0);

/// The result of calculating one child's costs, including audit output.
#[derive(Debug, Clone)]
pub struct ChildCalculation {
    /// The child's breakdown.
    pub result: ChildResult,
    /// Warnings raised for this child (capped hours or rate, clamped net cost).
    pub warnings: Vec<AuditWarning>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates gross cost, subsidy and net cost for one child.
///
/// The subsidy base is the hourly rate capped at the schedule maximum for the
/// child's care category, times the monthly hours capped at
/// [`MAX_REIMBURSED_MONTHLY_HOURS`]. The gross cost is the uncapped bill.
/// Net cost is clamped at zero before rounding, and each money figure is
/// rounded to cents independently.
///
/// # Arguments
///
/// * `child` - The child's care arrangement
/// * `schedule` - The subsidy schedule supplying the maximum hourly rate
/// * `assigned_pct` - The national subsidy percentage for this child's rank
/// * `supplement` - The household's municipal supplement
/// * `is_first_child` - Whether the child was ranked first
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `ChildCalculation`, or `MissingCareRate` if the schedule has no
/// maximum rate for the child's care category.
///
/// # Examples
///
/// ```
/// use subsidy_engine::calculation::calculate_child;
/// use subsidy_engine::config::{IncomeBracket, SubsidySchedule};
/// use subsidy_engine::models::{CareCategory, ChildInput, MunicipalSupplement};
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
/// use std::str::FromStr;
///
/// let d = |s: &str| Decimal::from_str(s).unwrap();
/// let schedule = SubsidySchedule {
///     year: 2025,
///     max_hourly_rate: BTreeMap::from([(CareCategory::Daycare, d("10.25"))]),
///     income_brackets: vec![IncomeBracket {
///         min: Decimal::ZERO,
///         max: None,
///         first_child_pct: d("96"),
///         other_children_pct: d("96"),
///     }],
/// };
/// let child = ChildInput {
///     care_category: CareCategory::Daycare,
///     monthly_hours: d("160"),
///     hourly_rate: d("8.50"),
/// };
///
/// let calc = calculate_child(&child, &schedule, d("96"), &MunicipalSupplement::inactive(), true, 1)
///     .unwrap();
/// assert_eq!(calc.result.gross_cost, d("1360.00"));
/// assert_eq!(calc.result.national_subsidy, d("1305.60"));
/// assert_eq!(calc.result.net_cost, d("54.40"));
/// ```
pub fn calculate_child(
    child: &ChildInput,
    schedule: &SubsidySchedule,
    assigned_pct: Decimal,
    supplement: &MunicipalSupplement,
    is_first_child: bool,
    step_number: u32,
) -> EngineResult<ChildCalculation> {
    let max_rate = schedule.max_rate(child.care_category)?;

    let reimbursed_hourly_rate = child.hourly_rate.min(max_rate);
    let reimbursed_hours = child.monthly_hours.min(MAX_REIMBURSED_MONTHLY_HOURS);

    let gross_cost = child.hourly_rate * child.monthly_hours;
    let subsidy_base = reimbursed_hourly_rate * reimbursed_hours;

    let national_subsidy = subsidy_base * assigned_pct / Decimal::ONE_HUNDRED;
    let municipal_subsidy = if supplement.active {
        subsidy_base * supplement.percentage / Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    let total_subsidy = national_subsidy + municipal_subsidy;
    let unclamped_net = gross_cost - total_subsidy;
    let net_cost = unclamped_net.max(Decimal::ZERO);

    let result = ChildResult {
        care_category: child.care_category,
        is_first_child,
        applied_percentage: assigned_pct,
        reimbursed_hourly_rate,
        reimbursed_hours,
        gross_cost: round_to_cents(gross_cost),
        national_subsidy: round_to_cents(national_subsidy),
        municipal_subsidy: round_to_cents(municipal_subsidy),
        total_subsidy: round_to_cents(total_subsidy),
        net_cost: round_to_cents(net_cost),
    };

    let mut warnings = Vec::new();
    if child.monthly_hours > MAX_REIMBURSED_MONTHLY_HOURS {
        warnings.push(AuditWarning {
            code: "HOURS_CAPPED".to_string(),
            message: format!(
                "{} monthly hours exceed the {} hour subsidy maximum",
                child.monthly_hours.normalize(),
                MAX_REIMBURSED_MONTHLY_HOURS
            ),
            severity: "low".to_string(),
        });
    }
    if child.hourly_rate > max_rate {
        warnings.push(AuditWarning {
            code: "RATE_CAPPED".to_string(),
            message: format!(
                "Hourly rate {} exceeds the {} maximum of {} for {}",
                child.hourly_rate.normalize(),
                schedule.year,
                max_rate.normalize(),
                child.care_category
            ),
            severity: "low".to_string(),
        });
    }
    if unclamped_net < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "NET_CLAMPED".to_string(),
            message: format!(
                "Subsidy {} exceeds gross cost {}; net cost set to zero",
                result.total_subsidy, result.gross_cost
            ),
            severity: "low".to_string(),
        });
    }

    debug!(
        category = %child.care_category,
        is_first_child,
        gross_cost = %result.gross_cost,
        total_subsidy = %result.total_subsidy,
        net_cost = %result.net_cost,
        "Calculated child subsidy"
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "child_subsidy".to_string(),
        rule_name: "Child Subsidy Calculation".to_string(),
        input: serde_json::json!({
            "care_category": child.care_category,
            "monthly_hours": child.monthly_hours.normalize().to_string(),
            "hourly_rate": child.hourly_rate.normalize().to_string(),
            "max_hourly_rate": max_rate.normalize().to_string(),
            "assigned_pct": assigned_pct.normalize().to_string(),
            "is_first_child": is_first_child,
            "municipal_active": supplement.active,
            "municipal_pct": supplement.percentage.normalize().to_string()
        }),
        output: serde_json::json!({
            "reimbursed_hourly_rate": reimbursed_hourly_rate.normalize().to_string(),
            "reimbursed_hours": reimbursed_hours.normalize().to_string(),
            "subsidy_base": subsidy_base.normalize().to_string(),
            "gross_cost": result.gross_cost.to_string(),
            "national_subsidy": result.national_subsidy.to_string(),
            "municipal_subsidy": result.municipal_subsidy.to_string(),
            "net_cost": result.net_cost.to_string()
        }),
        reasoning: format!(
            "{}h × ${} = ${} gross; subsidy base {}h × ${} = ${} at {}%",
            child.monthly_hours.normalize(),
            child.hourly_rate.normalize(),
            result.gross_cost,
            reimbursed_hours.normalize(),
            reimbursed_hourly_rate.normalize(),
            subsidy_base.normalize(),
            assigned_pct.normalize()
        ),
    };

    Ok(ChildCalculation {
        result,
        warnings,
        audit_step,
    })
}
