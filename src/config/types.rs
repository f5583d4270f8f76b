//! Configuration types for subsidy calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{CareCategory, ScheduleSummary};

/// Metadata about the subsidy scheme.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemeMetadata {
    /// Short identifier of the scheme (e.g., "kinderopvangtoeslag").
    pub code: String,
    /// The human-readable name of the scheme.
    pub name: String,
    /// URL to the official scheme documentation.
    pub source_url: String,
}

/// One income bracket of a subsidy schedule.
///
/// A bracket with `max = None` is open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeBracket {
    /// Lowest household income in the bracket (inclusive).
    pub min: Decimal,
    /// Highest household income in the bracket (inclusive).
    #[serde(default)]
    pub max: Option<Decimal>,
    /// Subsidy percentage for the first child.
    pub first_child_pct: Decimal,
    /// Subsidy percentage for every other child.
    pub other_children_pct: Decimal,
}

impl IncomeBracket {
    /// Returns true if `income` falls inside this bracket.
    pub fn contains(&self, income: Decimal) -> bool {
        income >= self.min && self.max.is_none_or(|max| income <= max)
    }
}

/// The subsidy schedule for one calendar year.
///
/// # Example
///
/// ```
/// use subsidy_engine::config::{IncomeBracket, SubsidySchedule};
/// use subsidy_engine::models::CareCategory;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
///
/// let schedule = SubsidySchedule {
///     year: 2025,
///     max_hourly_rate: CareCategory::ALL
///         .into_iter()
///         .map(|c| (c, Decimal::from(10)))
///         .collect::<BTreeMap<_, _>>(),
///     income_brackets: vec![IncomeBracket {
///         min: Decimal::ZERO,
///         max: None,
///         first_child_pct: Decimal::from(50),
///         other_children_pct: Decimal::from(50),
///     }],
/// };
/// assert!(schedule.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsidySchedule {
    /// The calendar year the schedule applies to.
    pub year: i32,
    /// Maximum reimbursable hourly rate per care category.
    pub max_hourly_rate: BTreeMap<CareCategory, Decimal>,
    /// Income brackets, ascending by `min`.
    pub income_brackets: Vec<IncomeBracket>,
}

impl SubsidySchedule {
    /// Returns the maximum reimbursable hourly rate for a care category.
    ///
    /// Fails with `MissingCareRate` rather than defaulting to zero.
    pub fn max_rate(&self, category: CareCategory) -> EngineResult<Decimal> {
        self.max_hourly_rate
            .get(&category)
            .copied()
            .ok_or(EngineError::MissingCareRate {
                year: self.year,
                category,
            })
    }

    /// Returns the first bracket containing `income`, with its index.
    pub fn bracket_for(&self, income: Decimal) -> Option<(usize, &IncomeBracket)> {
        self.income_brackets
            .iter()
            .enumerate()
            .find(|(_, bracket)| bracket.contains(income))
    }

    /// Returns the year and rates of this schedule for echoing in results.
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            year: self.year,
            max_hourly_rate: self.max_hourly_rate.clone(),
        }
    }

    /// Checks the structural rules every loaded schedule must satisfy.
    ///
    /// # Returns
    ///
    /// Returns an error if:
    /// - A care category has no maximum rate (`MissingCareRate`)
    /// - A maximum rate is not positive
    /// - There are no income brackets
    /// - A bracket has `min > max`, a percentage outside 0-100, or is open-ended
    ///   without being the last bracket
    /// - Brackets are not strictly ascending by `min`
    pub fn validate(&self) -> EngineResult<()> {
        for category in CareCategory::ALL {
            let rate = self.max_rate(category)?;
            if rate <= Decimal::ZERO {
                return Err(self.invalid(format!(
                    "maximum hourly rate for '{}' must be positive, got {}",
                    category, rate
                )));
            }
        }

        if self.income_brackets.is_empty() {
            return Err(self.invalid("no income brackets".to_string()));
        }

        let hundred = Decimal::ONE_HUNDRED;
        let last = self.income_brackets.len() - 1;
        for (index, bracket) in self.income_brackets.iter().enumerate() {
            match bracket.max {
                Some(max) if bracket.min > max => {
                    return Err(self.invalid(format!(
                        "bracket {} has min {} above max {}",
                        index, bracket.min, max
                    )));
                }
                None if index != last => {
                    return Err(self.invalid(format!(
                        "bracket {} is open-ended but is not the last bracket",
                        index
                    )));
                }
                _ => {}
            }

            for pct in [bracket.first_child_pct, bracket.other_children_pct] {
                if pct < Decimal::ZERO || pct > hundred {
                    return Err(self.invalid(format!(
                        "bracket {} has percentage {} outside 0-100",
                        index, pct
                    )));
                }
            }

            if index > 0 && bracket.min <= self.income_brackets[index - 1].min {
                return Err(self.invalid(format!(
                    "bracket {} is not ascending by min",
                    index
                )));
            }
        }

        Ok(())
    }

    fn invalid(&self, message: String) -> EngineError {
        EngineError::InvalidSchedule {
            year: self.year,
            message,
        }
    }
}

/// The complete subsidy configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct SubsidyConfig {
    /// Scheme metadata.
    metadata: SchemeMetadata,
    /// Schedules keyed by year.
    schedules: BTreeMap<i32, SubsidySchedule>,
}

impl SubsidyConfig {
    /// Creates a new SubsidyConfig from its component parts.
    pub fn new(metadata: SchemeMetadata, schedules: BTreeMap<i32, SubsidySchedule>) -> Self {
        Self {
            metadata,
            schedules,
        }
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        &self.metadata
    }

    /// Returns all schedules keyed by year.
    pub fn schedules(&self) -> &BTreeMap<i32, SubsidySchedule> {
        &self.schedules
    }
}
