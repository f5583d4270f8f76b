//! Income bracket resolution.
//!
//! This module maps a household income onto the subsidy percentages of a
//! schedule's income brackets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::SubsidySchedule;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditWarning};

/// The subsidy percentages that apply to a household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsidyPercentages {
    /// Percentage for the child with the most monthly hours.
    pub first_child_pct: Decimal,
    /// Percentage for every other child.
    pub other_children_pct: Decimal,
}

impl SubsidyPercentages {
    /// Returns the percentage for a child given its rank.
    pub fn for_rank(&self, is_first_child: bool) -> Decimal {
        if is_first_child {
            self.first_child_pct
        } else {
            self.other_children_pct
        }
    }
}

/// The result of resolving a household's income bracket.
#[derive(Debug, Clone)]
pub struct BracketResolution {
    /// The percentages of the selected bracket.
    pub percentages: SubsidyPercentages,
    /// Index of the selected bracket in the schedule.
    pub bracket_index: usize,
    /// Set when the income matched no bracket and the last bracket was used.
    pub warning: Option<AuditWarning>,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Resolves the subsidy percentages for a household income.
///
/// Brackets are scanned in order and the first bracket with
/// `min <= income <= max` (or an open-ended `max`) is selected. An income
/// that matches no bracket, because it lies below the lowest `min` or in a
/// gap between brackets, falls back to the last bracket of the schedule.
/// The fallback is not an error; it is reported as a warning.
///
/// # Arguments
///
/// * `income` - Annual household income
/// * `schedule` - The subsidy schedule
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `BracketResolution`, or `InvalidSchedule` if the schedule has no
/// income brackets at all.
///
/// # Examples
///
/// ```
/// use subsidy_engine::calculation::resolve_percentages;
/// use subsidy_engine::config::{IncomeBracket, SubsidySchedule};
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
///
/// let schedule = SubsidySchedule {
///     year: 2025,
///     max_hourly_rate: BTreeMap::new(),
///     income_brackets: vec![
///         IncomeBracket {
///             min: Decimal::ZERO,
///             max: Some(Decimal::from(23000)),
///             first_child_pct: Decimal::from(96),
///             other_children_pct: Decimal::from(96),
///         },
///         IncomeBracket {
///             min: Decimal::from(23001),
///             max: None,
///             first_child_pct: Decimal::from(50),
///             other_children_pct: Decimal::from(60),
///         },
///     ],
/// };
///
/// let resolution = resolve_percentages(Decimal::from(40000), &schedule, 1).unwrap();
/// assert_eq!(resolution.percentages.first_child_pct, Decimal::from(50));
/// assert_eq!(resolution.percentages.other_children_pct, Decimal::from(60));
/// assert!(resolution.warning.is_none());
/// ```
pub fn resolve_percentages(
    income: Decimal,
    schedule: &SubsidySchedule,
    step_number: u32,
) -> EngineResult<BracketResolution> {
    let Some(fallback_index) = schedule.income_brackets.len().checked_sub(1) else {
        return Err(EngineError::InvalidSchedule {
            year: schedule.year,
            message: "no income brackets".to_string(),
        });
    };

    let (bracket_index, warning) = match schedule.bracket_for(income) {
        Some((index, _)) => (index, None),
        None => {
            warn!(
                year = schedule.year,
                income = %income,
                "Income matched no bracket, using last bracket"
            );
            let warning = AuditWarning {
                code: "BRACKET_FALLBACK".to_string(),
                message: format!(
                    "Income {} matched no bracket in the {} schedule; the last bracket was applied",
                    income.normalize(),
                    schedule.year
                ),
                severity: "medium".to_string(),
            };
            (fallback_index, Some(warning))
        }
    };

    let bracket = &schedule.income_brackets[bracket_index];
    let percentages = SubsidyPercentages {
        first_child_pct: bracket.first_child_pct,
        other_children_pct: bracket.other_children_pct,
    };

    let reasoning = if warning.is_some() {
        format!(
            "Income {} falls outside every bracket; last bracket applies ({}% / {}%)",
            income.normalize(),
            percentages.first_child_pct.normalize(),
            percentages.other_children_pct.normalize()
        )
    } else {
        format!(
            "Income {} falls in bracket {}: {}% for the first child, {}% for other children",
            income.normalize(),
            bracket_index,
            percentages.first_child_pct.normalize(),
            percentages.other_children_pct.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "bracket_resolution".to_string(),
        rule_name: "Income Bracket Resolution".to_string(),
        input: serde_json::json!({
            "household_income": income.normalize().to_string(),
            "schedule_year": schedule.year
        }),
        output: serde_json::json!({
            "bracket_index": bracket_index,
            "fallback": warning.is_some(),
            "first_child_pct": percentages.first_child_pct.normalize().to_string(),
            "other_children_pct": percentages.other_children_pct.normalize().to_string()
        }),
        reasoning,
    };

    Ok(BracketResolution {
        percentages,
        bracket_index,
        warning,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IncomeBracket;
    use std::collections::BTreeMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bracket(min: &str, max: Option<&str>, first: &str, other: &str) -> IncomeBracket {
        IncomeBracket {
            min: dec(min),
            max: max.map(dec),
            first_child_pct: dec(first),
            other_children_pct: dec(other),
        }
    }

    fn create_test_schedule() -> SubsidySchedule {
        SubsidySchedule {
            year: 2025,
            max_hourly_rate: BTreeMap::new(),
            income_brackets: vec![
                bracket("0", Some("23000"), "96", "96"),
                bracket("23001", Some("53000"), "83", "83"),
                bracket("53001", Some("75000"), "50", "50"),
                bracket("75001", None, "0", "0"),
            ],
        }
    }

    fn resolve(income: &str) -> BracketResolution {
        resolve_percentages(dec(income), &create_test_schedule(), 1).unwrap()
    }

    #[test]
    fn test_low_income_gets_first_bracket() {
        let result = resolve("20000");
        assert_eq!(result.bracket_index, 0);
        assert_eq!(result.percentages.first_child_pct, dec("96"));
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_zero_income_gets_first_bracket() {
        assert_eq!(resolve("0").bracket_index, 0);
    }

    #[test]
    fn test_bracket_upper_bound_is_inclusive() {
        assert_eq!(resolve("23000").bracket_index, 0);
        assert_eq!(resolve("23001").bracket_index, 1);
    }

    #[test]
    fn test_middle_bracket() {
        let result = resolve("40000");
        assert_eq!(result.bracket_index, 1);
        assert_eq!(result.percentages.other_children_pct, dec("83"));
    }

    #[test]
    fn test_open_ended_bracket() {
        let result = resolve("80000");
        assert_eq!(result.bracket_index, 3);
        assert_eq!(result.percentages.first_child_pct, Decimal::ZERO);
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_income_in_gap_falls_back_to_last_bracket() {
        let result = resolve("23000.50");
        assert_eq!(result.bracket_index, 3);
        assert_eq!(result.percentages.first_child_pct, Decimal::ZERO);

        let warning = result.warning.expect("fallback should warn");
        assert_eq!(warning.code, "BRACKET_FALLBACK");
        assert_eq!(result.audit_step.output["fallback"], true);
    }

    #[test]
    fn test_income_below_lowest_min_falls_back_to_last_bracket() {
        let mut schedule = create_test_schedule();
        schedule.income_brackets[0].min = dec("1000");

        let result = resolve_percentages(dec("500"), &schedule, 1).unwrap();
        assert_eq!(result.bracket_index, 3);
        assert!(result.warning.is_some());
    }

    #[test]
    fn test_schedule_without_brackets_is_rejected() {
        let mut schedule = create_test_schedule();
        schedule.income_brackets.clear();

        match resolve_percentages(dec("20000"), &schedule, 1) {
            Err(EngineError::InvalidSchedule { year, message }) => {
                assert_eq!(year, 2025);
                assert_eq!(message, "no income brackets");
            }
            other => panic!("Expected InvalidSchedule, got {:?}", other),
        }
    }

    #[test]
    fn test_first_and_other_percentages_can_differ() {
        let mut schedule = create_test_schedule();
        schedule.income_brackets[1] = bracket("23001", Some("53000"), "80", "90");

        let result = resolve_percentages(dec("30000"), &schedule, 1).unwrap();
        assert_eq!(result.percentages.for_rank(true), dec("80"));
        assert_eq!(result.percentages.for_rank(false), dec("90"));
    }

    #[test]
    fn test_audit_step_records_bracket() {
        let result = resolve_percentages(dec("40000"), &create_test_schedule(), 3).unwrap();
        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "bracket_resolution");
        assert_eq!(result.audit_step.input["household_income"], "40000");
        assert_eq!(result.audit_step.output["first_child_pct"], "83");
        assert!(result.audit_step.reasoning.contains("bracket 1"));
    }
}
