//! Care category model.
//!
//! This module defines the three canonical care categories that a subsidy
//! schedule assigns a maximum hourly rate to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The canonical categories of childcare recognised by a subsidy schedule.
///
/// # Example
///
/// ```
/// use subsidy_engine::models::CareCategory;
///
/// let category = CareCategory::AfterSchoolCare;
/// assert_eq!(category.to_string(), "after_school_care");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareCategory {
    /// Full-day care at a daycare centre.
    Daycare,
    /// Care before or after school hours for school-age children.
    AfterSchoolCare,
    /// Home-based care provided by a registered childminder.
    Childminder,
}

impl CareCategory {
    /// Every category a valid schedule must carry a rate for.
    pub const ALL: [CareCategory; 3] = [
        CareCategory::Daycare,
        CareCategory::AfterSchoolCare,
        CareCategory::Childminder,
    ];

    /// Returns the wire name of the category.
    pub fn label(&self) -> &'static str {
        match self {
            CareCategory::Daycare => "daycare",
            CareCategory::AfterSchoolCare => "after_school_care",
            CareCategory::Childminder => "childminder",
        }
    }

    /// Classifies a free-text care-offering name.
    ///
    /// See [`crate::calculation::normalize_care_category`].
    pub fn from_free_text(text: &str) -> Self {
        crate::calculation::normalize_care_category(text)
    }
}

impl fmt::Display for CareCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
