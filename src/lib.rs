//! Childcare Subsidy Engine
//!
//! This crate estimates the monthly net cost of childcare for a household after
//! applying a per-year government subsidy schedule and an optional municipal
//! supplement.
//!
//! # Example
//!
//! ```no_run
//! use subsidy_engine::calculation::calculate;
//! use subsidy_engine::config::ConfigLoader;
//! use subsidy_engine::models::{CalculationRequest, CareCategory, ChildInput, MunicipalSupplement};
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let loader = ConfigLoader::load("./config")?;
//! let request = CalculationRequest {
//!     year: 2025,
//!     household_income: Decimal::from(20000),
//!     municipal_supplement: MunicipalSupplement::inactive(),
//!     children: vec![ChildInput {
//!         care_category: CareCategory::Daycare,
//!         monthly_hours: Decimal::from(160),
//!         hourly_rate: Decimal::from_str("8.50").unwrap(),
//!     }],
//! };
//!
//! let result = calculate(&request, &loader)?;
//! println!("Net cost: {}", result.totals.total_net_cost);
//! # Ok::<(), subsidy_engine::error::EngineError>(())
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
