//! Child ranking.
//!
//! The child with the most monthly hours of care is treated as the "first
//! child" for subsidy-percentage purposes. Ranking is kept separate from the
//! per-child arithmetic so each can be tested on its own.

use crate::models::{AuditStep, ChildInput};

/// A child together with its position in the request and its rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedChild<'a> {
    /// The child's care arrangement.
    pub child: &'a ChildInput,
    /// Position of the child in the request.
    pub original_index: usize,
    /// Whether this child is ranked first.
    pub is_first_child: bool,
}

/// Orders children by monthly hours, most hours first.
///
/// The input is left untouched. The sort is stable, so when several children
/// share the maximum hours the earliest of them in the request is ranked first.
///
/// # Examples
///
/// ```
/// use subsidy_engine::calculation::rank_children;
/// use subsidy_engine::models::{CareCategory, ChildInput};
/// use rust_decimal::Decimal;
///
/// let children = vec![
///     ChildInput {
///         care_category: CareCategory::AfterSchoolCare,
///         monthly_hours: Decimal::from(80),
///         hourly_rate: Decimal::from(7),
///     },
///     ChildInput {
///         care_category: CareCategory::Daycare,
///         monthly_hours: Decimal::from(160),
///         hourly_rate: Decimal::from(9),
///     },
/// ];
///
/// let ranked = rank_children(&children);
/// assert_eq!(ranked[0].original_index, 1);
/// assert!(ranked[0].is_first_child);
/// assert!(!ranked[1].is_first_child);
/// ```
pub fn rank_children(children: &[ChildInput]) -> Vec<RankedChild<'_>> {
    let mut ranked: Vec<RankedChild<'_>> = children
        .iter()
        .enumerate()
        .map(|(original_index, child)| RankedChild {
            child,
            original_index,
            is_first_child: false,
        })
        .collect();

    ranked.sort_by(|a, b| b.child.monthly_hours.cmp(&a.child.monthly_hours));

    if let Some(first) = ranked.first_mut() {
        first.is_first_child = true;
    }

    ranked
}

/// Builds the audit step describing a ranking.
pub(crate) fn ranking_audit_step(ranked: &[RankedChild<'_>], step_number: u32) -> AuditStep {
    let order: Vec<usize> = ranked.iter().map(|r| r.original_index).collect();
    let hours: Vec<String> = ranked
        .iter()
        .map(|r| r.child.monthly_hours.normalize().to_string())
        .collect();

    let reasoning = match ranked.first() {
        Some(first) => format!(
            "Child {} has the most monthly hours ({}) and is ranked first",
            first.original_index,
            first.child.monthly_hours.normalize()
        ),
        None => "No children to rank".to_string(),
    };

    AuditStep {
        step_number,
        rule_id: "child_ranking".to_string(),
        rule_name: "Child Ranking".to_string(),
        input: serde_json::json!({
            "child_count": ranked.len()
        }),
        output: serde_json::json!({
            "ranked_order": order,
            "ranked_hours": hours
        }),
        reasoning,
    }
}
