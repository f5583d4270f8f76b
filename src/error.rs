//! Error types for the Childcare Subsidy Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading subsidy schedules
//! or running a calculation.

use thiserror::Error;

use crate::models::CareCategory;

/// Broad classification of an [`EngineError`].
///
/// Callers map `NotFound` to a user-facing "no data for this year" message;
/// `Configuration` errors indicate malformed reference data and are not retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested data does not exist.
    NotFound,
    /// Reference data is missing or malformed.
    Configuration,
}

/// The main error type for the Childcare Subsidy Engine.
///
/// # Example
///
/// ```
/// use subsidy_engine::error::{EngineError, ErrorKind};
///
/// let error = EngineError::ScheduleNotFound { year: 2019 };
/// assert_eq!(error.to_string(), "No subsidy schedule for year 2019");
/// assert_eq!(error.kind(), ErrorKind::NotFound);
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A subsidy schedule violated one of its structural rules.
    #[error("Invalid subsidy schedule for year {year}: {message}")]
    InvalidSchedule {
        /// The schedule year.
        year: i32,
        /// A description of the violation.
        message: String,
    },

    /// No subsidy schedule exists for the requested year.
    #[error("No subsidy schedule for year {year}")]
    ScheduleNotFound {
        /// The year that was requested.
        year: i32,
    },

    /// A schedule is missing the maximum hourly rate for a care category.
    #[error("Subsidy schedule for year {year} has no maximum hourly rate for '{category}'")]
    MissingCareRate {
        /// The schedule year.
        year: i32,
        /// The care category without a rate.
        category: CareCategory,
    },
}

impl EngineError {
    /// Returns the broad kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::ScheduleNotFound { .. } => ErrorKind::NotFound,
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidSchedule { .. }
            | EngineError::MissingCareRate { .. } => ErrorKind::Configuration,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
