//! Calculation entry points.
//!
//! This module wires bracket resolution, child ranking, the per-child
//! calculator and aggregation into a single household calculation.

use tracing::info;

use crate::config::{ScheduleProvider, SubsidySchedule};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditTrace, CalculationRequest, CalculationResult, ChildResult};

use super::aggregate::{aggregate, aggregation_audit_step};
use super::bracket::resolve_percentages;
use super::child_cost::calculate_child;
use super::ranking::{rank_children, ranking_audit_step};

/// Calculates a household's childcare costs for the request's year.
///
/// The schedule for `request.year` is fetched from `provider`; everything
/// else is a pure function of the request and that schedule.
///
/// # Returns
///
/// Returns the `CalculationResult`, or an error if:
/// - The provider has no schedule for the year (`ScheduleNotFound`)
/// - The schedule has no income brackets (`InvalidSchedule`)
/// - The schedule lacks a rate for a requested care category (`MissingCareRate`)
///
/// # Examples
///
/// ```
/// use subsidy_engine::calculation::calculate;
/// use subsidy_engine::config::SubsidySchedule;
/// use subsidy_engine::error::EngineError;
/// use subsidy_engine::models::{CalculationRequest, MunicipalSupplement};
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let schedules: HashMap<i32, SubsidySchedule> = HashMap::new();
/// let request = CalculationRequest {
///     year: 2025,
///     household_income: Decimal::from(20000),
///     municipal_supplement: MunicipalSupplement::inactive(),
///     children: vec![],
/// };
///
/// let result = calculate(&request, &schedules);
/// assert!(matches!(result, Err(EngineError::ScheduleNotFound { year: 2025 })));
/// ```
pub fn calculate<P>(request: &CalculationRequest, provider: &P) -> EngineResult<CalculationResult>
where
    P: ScheduleProvider + ?Sized,
{
    let schedule = provider
        .lookup_schedule(request.year)
        .ok_or(EngineError::ScheduleNotFound { year: request.year })?;

    calculate_with_schedule(request, schedule)
}

/// Calculates a household's childcare costs against a given schedule.
///
/// Percentages are resolved once for the household, children are ranked by
/// monthly hours, each child is calculated with the percentage for its rank,
/// and the results are returned in the request's order together with the
/// household totals.
pub fn calculate_with_schedule(
    request: &CalculationRequest,
    schedule: &SubsidySchedule,
) -> EngineResult<CalculationResult> {
    let mut audit_trace = AuditTrace::default();
    let mut step_number: u32 = 1;

    let resolution = resolve_percentages(request.household_income, schedule, step_number)?;
    audit_trace.steps.push(resolution.audit_step);
    audit_trace.warnings.extend(resolution.warning);
    step_number += 1;

    let ranked = rank_children(&request.children);
    audit_trace.steps.push(ranking_audit_step(&ranked, step_number));
    step_number += 1;

    let mut indexed_results: Vec<(usize, ChildResult)> = Vec::with_capacity(ranked.len());
    for ranked_child in &ranked {
        let calculation = calculate_child(
            ranked_child.child,
            schedule,
            resolution.percentages.for_rank(ranked_child.is_first_child),
            &request.municipal_supplement,
            ranked_child.is_first_child,
            step_number,
        )?;
        audit_trace.steps.push(calculation.audit_step);
        audit_trace.warnings.extend(calculation.warnings);
        indexed_results.push((ranked_child.original_index, calculation.result));
        step_number += 1;
    }

    indexed_results.sort_by_key(|(index, _)| *index);
    let children: Vec<ChildResult> = indexed_results
        .into_iter()
        .map(|(_, result)| result)
        .collect();

    let totals = aggregate(&children);
    audit_trace
        .steps
        .push(aggregation_audit_step(&children, &totals, step_number));

    info!(
        year = schedule.year,
        children = children.len(),
        total_gross_cost = %totals.total_gross_cost,
        total_subsidy = %totals.total_subsidy,
        total_net_cost = %totals.total_net_cost,
        "Subsidy calculation completed"
    );

    Ok(CalculationResult {
        totals,
        children,
        schedule_used: schedule.summary(),
        audit_trace,
    })
}
