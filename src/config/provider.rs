//! Schedule lookup abstraction.
//!
//! The engine never loads schedules itself; callers hand it anything that
//! implements [`ScheduleProvider`].

use std::collections::{BTreeMap, HashMap};

use super::types::SubsidySchedule;

/// Looks up the subsidy schedule for a calendar year.
///
/// Implementations must only return schedules that carry a rate for every
/// care category and at least one income bracket, ascending by `min`.
///
/// # Example
///
/// ```
/// use subsidy_engine::config::{ScheduleProvider, SubsidySchedule};
/// use std::collections::HashMap;
///
/// let schedules: HashMap<i32, SubsidySchedule> = HashMap::new();
/// assert!(schedules.lookup_schedule(2025).is_none());
/// ```
pub trait ScheduleProvider {
    /// Returns the schedule for `year`, or `None` if there is none.
    fn lookup_schedule(&self, year: i32) -> Option<&SubsidySchedule>;
}

impl ScheduleProvider for HashMap<i32, SubsidySchedule> {
    fn lookup_schedule(&self, year: i32) -> Option<&SubsidySchedule> {
        self.get(&year)
    }
}

impl ScheduleProvider for BTreeMap<i32, SubsidySchedule> {
    fn lookup_schedule(&self, year: i32) -> Option<&SubsidySchedule> {
        self.get(&year)
    }
}

impl ScheduleProvider for SubsidySchedule {
    fn lookup_schedule(&self, year: i32) -> Option<&SubsidySchedule> {
        (self.year == year).then_some(self)
    }
}
