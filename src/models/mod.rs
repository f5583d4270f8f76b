//! Core data models for the Childcare Subsidy Engine.
//!
//! This module contains the request and result types exchanged with callers.

mod calculation_result;
mod care_category;
mod request;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, ChildResult, ScheduleSummary,
    SubsidyTotals,
};
pub use care_category::CareCategory;
pub use request::{CalculationRequest, ChildInput, MunicipalSupplement};
