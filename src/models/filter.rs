//! Scheduling-quality filter model.
//!
//! A [`Filter`] is the immutable per-run configuration for one generation
//! call: which weekdays a student is willing to come to campus, and a
//! per-weekday record of time window, daily load, consecutive-run, and
//! modality constraints. The shape is fixed — one [`DayFilter`] per
//! schedulable weekday — so the search never touches dynamic lookups;
//! structural validation happens at the collaborator boundary
//! (see [`crate::validation`]), not here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Day, Modality};

/// Constraints applying to a single weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayFilter {
    /// Earliest allowed class start (military).
    pub start: u16,
    /// Latest allowed class end (military).
    pub end: u16,
    /// Maximum number of classes on this day.
    pub max_per_day: usize,
    /// Maximum length of a consecutive run (gap ≤ 15 minutes) of classes.
    pub max_consecutive: usize,
    /// Delivery modes allowed on this day.
    pub modalities: BTreeSet<Modality>,
}

impl DayFilter {
    /// Creates a permissive day filter: full-day window, unbounded
    /// counts, every modality allowed.
    pub fn new() -> Self {
        Self {
            start: 0,
            end: 2400,
            max_per_day: usize::MAX,
            max_consecutive: usize::MAX,
            modalities: Modality::ALL.into_iter().collect(),
        }
    }

    /// Sets the allowed time window.
    pub fn with_window(mut self, start: u16, end: u16) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Sets the daily class-count limit.
    pub fn with_max_per_day(mut self, max_per_day: usize) -> Self {
        self.max_per_day = max_per_day;
        self
    }

    /// Sets the consecutive-run limit.
    pub fn with_max_consecutive(mut self, max_consecutive: usize) -> Self {
        self.max_consecutive = max_consecutive;
        self
    }

    /// Restricts allowed delivery modes.
    pub fn with_modalities(mut self, modalities: impl IntoIterator<Item = Modality>) -> Self {
        self.modalities = modalities.into_iter().collect();
        self
    }
}

impl Default for DayFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-weekday filter record, one entry per schedulable weekday.
///
/// A fixed struct rather than a map: the set of weekdays is closed, and a
/// missing entry is not a representable state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekFilter {
    pub mon: DayFilter,
    pub tue: DayFilter,
    pub wed: DayFilter,
    pub thu: DayFilter,
    pub fri: DayFilter,
    pub sat: DayFilter,
}

impl WeekFilter {
    /// Creates a permissive week filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a week filter with the same constraints every day.
    pub fn uniform(filter: DayFilter) -> Self {
        Self {
            mon: filter.clone(),
            tue: filter.clone(),
            wed: filter.clone(),
            thu: filter.clone(),
            fri: filter.clone(),
            sat: filter,
        }
    }

    /// Replaces one weekday's constraints. `Unknown` is not a weekday
    /// and is ignored.
    pub fn with_day(mut self, day: Day, filter: DayFilter) -> Self {
        match day {
            Day::Mon => self.mon = filter,
            Day::Tue => self.tue = filter,
            Day::Wed => self.wed = filter,
            Day::Thu => self.thu = filter,
            Day::Fri => self.fri = filter,
            Day::Sat => self.sat = filter,
            Day::Unknown => {}
        }
        self
    }

    /// The constraints for a weekday; `None` for `Unknown`.
    pub fn day(&self, day: Day) -> Option<&DayFilter> {
        match day {
            Day::Mon => Some(&self.mon),
            Day::Tue => Some(&self.tue),
            Day::Wed => Some(&self.wed),
            Day::Thu => Some(&self.thu),
            Day::Fri => Some(&self.fri),
            Day::Sat => Some(&self.sat),
            Day::Unknown => None,
        }
    }
}

/// Week-wide constraints that are not per-day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralFilter {
    /// Weekdays the student is willing to attend in person.
    /// In-person slots on any other day disqualify their section.
    pub days_in_person: BTreeSet<Day>,
}

impl GeneralFilter {
    /// Creates a permissive general filter (every weekday allowed).
    pub fn new() -> Self {
        Self {
            days_in_person: Day::WEEKDAYS.into_iter().collect(),
        }
    }

    /// Restricts in-person attendance to the given weekdays.
    pub fn with_days_in_person(mut self, days: impl IntoIterator<Item = Day>) -> Self {
        self.days_in_person = days.into_iter().collect();
        self
    }
}

impl Default for GeneralFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete filter for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Week-wide constraints.
    pub general: GeneralFilter,
    /// Per-weekday constraints.
    pub specific: WeekFilter,
}

impl Filter {
    /// Creates a permissive filter (everything passes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the general section.
    pub fn with_general(mut self, general: GeneralFilter) -> Self {
        self.general = general;
        self
    }

    /// Replaces one weekday's constraints.
    pub fn with_day(mut self, day: Day, filter: DayFilter) -> Self {
        self.specific = self.specific.with_day(day, filter);
        self
    }

    /// Applies the same constraints to every weekday.
    pub fn with_uniform_days(mut self, filter: DayFilter) -> Self {
        self.specific = WeekFilter::uniform(filter);
        self
    }
}
