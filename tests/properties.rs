//! Property tests for the Childcare Subsidy Engine.
//!
//! These tests check the invariants that must hold for every valid request:
//! capped hours and rates, non-negative net costs, a single first child with
//! maximal hours, input order preservation and repeatable results.

use proptest::prelude::*;
use rust_decimal::Decimal;

use subsidy_engine::calculation::{
    MAX_REIMBURSED_MONTHLY_HOURS, calculate, calculate_with_schedule, round_to_cents,
};
use subsidy_engine::config::{ConfigLoader, SubsidySchedule};
use subsidy_engine::models::{CalculationRequest, CareCategory, ChildInput, MunicipalSupplement};

fn schedule_2025() -> SubsidySchedule {
    ConfigLoader::load("./config")
        .expect("Failed to load config")
        .get_schedule(2025)
        .expect("2025 schedule missing")
        .clone()
}

fn care_category() -> impl Strategy<Value = CareCategory> {
    prop_oneof![
        Just(CareCategory::Daycare),
        Just(CareCategory::AfterSchoolCare),
        Just(CareCategory::Childminder),
    ]
}

fn child_input() -> impl Strategy<Value = ChildInput> {
    // Hours 0.1-400.0 in tenths, rates 1.00-20.00 in cents
    (care_category(), 1i64..=4000, 100i64..=2000).prop_map(|(care_category, tenths, cents)| {
        ChildInput {
            care_category,
            monthly_hours: Decimal::new(tenths, 1),
            hourly_rate: Decimal::new(cents, 2),
        }
    })
}

fn supplement() -> impl Strategy<Value = MunicipalSupplement> {
    (any::<bool>(), 0i64..=100).prop_map(|(active, pct)| MunicipalSupplement {
        active,
        percentage: Decimal::from(pct),
    })
}

fn request() -> impl Strategy<Value = CalculationRequest> {
    (
        0i64..=15_000_000,
        supplement(),
        prop::collection::vec(child_input(), 1..=10),
    )
        .prop_map(|(income_cents, municipal_supplement, children)| CalculationRequest {
            year: 2025,
            household_income: Decimal::new(income_cents, 2),
            municipal_supplement,
            children,
        })
}

proptest! {
    #[test]
    fn reimbursed_hours_are_capped(req in request()) {
        let result = calculate_with_schedule(&req, &schedule_2025()).unwrap();

        for (input, output) in req.children.iter().zip(&result.children) {
            prop_assert!(output.reimbursed_hours >= Decimal::ZERO);
            prop_assert!(output.reimbursed_hours <= MAX_REIMBURSED_MONTHLY_HOURS);
            prop_assert!(output.reimbursed_hours <= input.monthly_hours);
        }
    }

    #[test]
    fn reimbursed_rate_is_capped(req in request()) {
        let schedule = schedule_2025();
        let result = calculate_with_schedule(&req, &schedule).unwrap();

        for (input, output) in req.children.iter().zip(&result.children) {
            let max_rate = schedule.max_rate(input.care_category).unwrap();
            prop_assert!(output.reimbursed_hourly_rate <= max_rate);
            prop_assert!(output.reimbursed_hourly_rate <= input.hourly_rate);
        }
    }

    #[test]
    fn net_costs_are_never_negative(req in request()) {
        let result = calculate_with_schedule(&req, &schedule_2025()).unwrap();

        for output in &result.children {
            prop_assert!(output.net_cost >= Decimal::ZERO);
        }
        prop_assert!(result.totals.total_net_cost >= Decimal::ZERO);
    }

    #[test]
    fn exactly_one_first_child_with_max_hours(req in request()) {
        let result = calculate_with_schedule(&req, &schedule_2025()).unwrap();

        let firsts: Vec<usize> = result
            .children
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_first_child)
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(firsts.len(), 1);

        let max_hours = req.children.iter().map(|c| c.monthly_hours).max().unwrap();
        prop_assert_eq!(req.children[firsts[0]].monthly_hours, max_hours);
    }

    #[test]
    fn output_preserves_input_order(req in request()) {
        let result = calculate_with_schedule(&req, &schedule_2025()).unwrap();

        prop_assert_eq!(result.children.len(), req.children.len());
        for (input, output) in req.children.iter().zip(&result.children) {
            prop_assert_eq!(output.care_category, input.care_category);
            prop_assert_eq!(
                output.gross_cost,
                round_to_cents(input.hourly_rate * input.monthly_hours)
            );
        }
    }

    #[test]
    fn totals_are_sums_of_rounded_children(req in request()) {
        let result = calculate_with_schedule(&req, &schedule_2025()).unwrap();

        let gross: Decimal = result.children.iter().map(|c| c.gross_cost).sum();
        let national: Decimal = result.children.iter().map(|c| c.national_subsidy).sum();
        let municipal: Decimal = result.children.iter().map(|c| c.municipal_subsidy).sum();

        prop_assert_eq!(result.totals.total_gross_cost, gross);
        prop_assert_eq!(result.totals.total_national_subsidy, national);
        prop_assert_eq!(result.totals.total_municipal_subsidy, municipal);
        prop_assert_eq!(result.totals.total_subsidy, national + municipal);
    }

    #[test]
    fn calculation_is_repeatable(req in request()) {
        let loader = ConfigLoader::load("./config").unwrap();

        let first = calculate(&req, &loader).unwrap();
        let second = calculate(&req, &loader).unwrap();
        prop_assert_eq!(first, second);
    }
}
