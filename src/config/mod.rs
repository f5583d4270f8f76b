//! Configuration loading and management for the Childcare Subsidy Engine.
//!
//! This module provides functionality to load subsidy schedules from YAML files
//! and the [`ScheduleProvider`] seam through which the engine receives them.
//!
//! # Example
//!
//! ```no_run
//! use subsidy_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Loaded scheme: {}", config.scheme().name);
//! ```

mod loader;
mod provider;
mod types;

pub use loader::ConfigLoader;
pub use provider::ScheduleProvider;
pub use types::{IncomeBracket, SchemeMetadata, SubsidyConfig, SubsidySchedule};
