//! Calculation request models.
//!
//! A [`CalculationRequest`] is constructed fresh by the caller for every
//! calculation. Bounds on income, hours, rates and the number of children
//! are enforced before the request reaches the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CareCategory;

/// A single child's care arrangement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildInput {
    /// The category of care the child attends.
    pub care_category: CareCategory,
    /// Hours of care per month.
    pub monthly_hours: Decimal,
    /// The hourly rate charged by the care provider.
    pub hourly_rate: Decimal,
}

/// An optional supplement paid by the municipality on top of the national subsidy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MunicipalSupplement {
    /// Whether the supplement applies to this household.
    pub active: bool,
    /// Percentage of the subsidy base paid by the municipality (0-100).
    pub percentage: Decimal,
}

impl MunicipalSupplement {
    /// A supplement that contributes nothing.
    pub fn inactive() -> Self {
        Self {
            active: false,
            percentage: Decimal::ZERO,
        }
    }

    /// An active supplement at the given percentage.
    ///
    /// ```
    /// use subsidy_engine::models::MunicipalSupplement;
    /// use rust_decimal::Decimal;
    ///
    /// let supplement = MunicipalSupplement::active(Decimal::from(10));
    /// assert!(supplement.active);
    /// ```
    pub fn active(percentage: Decimal) -> Self {
        Self {
            active: true,
            percentage,
        }
    }
}

impl Default for MunicipalSupplement {
    fn default() -> Self {
        Self::inactive()
    }
}

/// Input for a single household calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The calendar year whose subsidy schedule applies.
    pub year: i32,
    /// Annual household income.
    pub household_income: Decimal,
    /// The municipal supplement, if any.
    #[serde(default)]
    pub municipal_supplement: MunicipalSupplement,
    /// The children in care, in the caller's order.
    pub children: Vec<ChildInput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "year": 2025,
            "household_income": "40000",
            "municipal_supplement": { "active": true, "percentage": "10" },
            "children": [
                { "care_category": "daycare", "monthly_hours": "160", "hourly_rate": "8.50" },
                { "care_category": "after_school_care", "monthly_hours": "80", "hourly_rate": "7.00" }
            ]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.year, 2025);
        assert_eq!(request.household_income, Decimal::from(40000));
        assert!(request.municipal_supplement.active);
        assert_eq!(request.children.len(), 2);
        assert_eq!(request.children[1].care_category, CareCategory::AfterSchoolCare);
        assert_eq!(request.children[0].hourly_rate, Decimal::new(850, 2));
    }

    #[test]
    fn test_missing_supplement_defaults_to_inactive() {
        let json = r#"{
            "year": 2025,
            "household_income": "20000",
            "children": [
                { "care_category": "childminder", "monthly_hours": "40", "hourly_rate": "7.00" }
            ]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.municipal_supplement, MunicipalSupplement::inactive());
    }

    #[test]
    fn test_missing_children_fails() {
        let json = r#"{ "year": 2025, "household_income": "20000" }"#;
        let result: Result<CalculationRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
