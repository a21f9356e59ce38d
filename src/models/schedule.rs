//! Generated schedule and generation result models.
//!
//! A generated schedule is one complete, internally conflict-free
//! assignment of exactly one section per participating course. Schedules
//! are ephemeral values: created fresh per generation call, never
//! persisted by this crate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Class, Day, TimeSlot};

/// Fixed display palette, drawn from without replacement when coloring
/// the courses of a generation result.
pub const PALETTE: [&str; 16] = [
    "#e57373", "#64b5f6", "#81c784", "#ffb74d", "#ba68c8", "#4db6ac", "#f06292", "#a1887f",
    "#7986cb", "#dce775", "#4dd0e1", "#ff8a65", "#9575cd", "#aed581", "#f48fb1", "#90a4ae",
];

/// One complete, conflict-free class assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSchedule {
    /// Exactly one section per participating course, in course input order.
    pub classes: Vec<Class>,
}

impl GeneratedSchedule {
    /// Wraps a list of chosen sections.
    pub fn new(classes: Vec<Class>) -> Self {
        Self { classes }
    }

    /// Number of sections in this schedule.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether this schedule holds no sections.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The section chosen for a course, if the course participates.
    pub fn class_for_course(&self, course_code: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.course == course_code)
    }

    /// Course codes in this schedule, in input order.
    pub fn course_codes(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.course.as_str()).collect()
    }

    /// All concrete-weekday meeting times, bucketed by day.
    ///
    /// `Unknown`-day placeholders are excluded; rendering and post-filter
    /// constraints only deal in known weekdays.
    pub fn weekday_slots(&self) -> BTreeMap<Day, Vec<&TimeSlot>> {
        let mut by_day: BTreeMap<Day, Vec<&TimeSlot>> = BTreeMap::new();
        for class in &self.classes {
            for slot in &class.schedules {
                if slot.day != Day::Unknown {
                    by_day.entry(slot.day).or_default().push(slot);
                }
            }
        }
        by_day
    }

    /// Whether no two sections in this schedule conflict.
    ///
    /// Holds by construction for schedules produced by the generator;
    /// exposed so consumers can assert it on externally stored data.
    pub fn is_conflict_free(&self) -> bool {
        for (i, a) in self.classes.iter().enumerate() {
            for b in &self.classes[i + 1..] {
                if a.conflicts_with(b) {
                    return false;
                }
            }
        }
        true
    }
}

/// Result of one generation call.
///
/// Empty `schedules` with empty `colors` is the canonical "nothing
/// generated" value — not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Every surviving schedule, across all group selections.
    pub schedules: Vec<GeneratedSchedule>,
    /// Display color per distinct course code appearing in `schedules`.
    pub colors: BTreeMap<String, String>,
}

impl GenerationResult {
    /// The canonical empty result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether nothing was generated.
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Modality;

    fn sample_schedule() -> GeneratedSchedule {
        GeneratedSchedule::new(vec![
            Class::new(1, "CSMATH1", "S11")
                .with_schedule(TimeSlot::new(Day::Mon, 900, 1000))
                .with_schedule(TimeSlot::new(Day::Thu, 900, 1000)),
            Class::new(2, "NSCOM01", "S12")
                .with_schedule(TimeSlot::new(Day::Mon, 1030, 1130))
                .with_modality(Modality::Hybrid),
            Class::new(3, "THSIS01", "S13").with_schedule(TimeSlot::new(Day::Unknown, 0, 0)),
        ])
    }

    #[test]
    fn test_weekday_slots_excludes_unknown() {
        let s = sample_schedule();
        let by_day = s.weekday_slots();
        assert_eq!(by_day[&Day::Mon].len(), 2);
        assert_eq!(by_day[&Day::Thu].len(), 1);
        assert!(!by_day.contains_key(&Day::Unknown));
    }

    #[test]
    fn test_is_conflict_free() {
        let s = sample_schedule();
        assert!(s.is_conflict_free());

        let clashing = GeneratedSchedule::new(vec![
            Class::new(1, "CSMATH1", "S11").with_schedule(TimeSlot::new(Day::Mon, 900, 1000)),
            Class::new(2, "NSCOM01", "S12").with_schedule(TimeSlot::new(Day::Mon, 930, 1030)),
        ]);
        assert!(!clashing.is_conflict_free());
    }

    #[test]
    fn test_class_for_course() {
        let s = sample_schedule();
        assert_eq!(s.class_for_course("NSCOM01").unwrap().code, 2);
        assert!(s.class_for_course("GEMATMW").is_none());
    }

    #[test]
    fn test_palette_entries_are_distinct() {
        let mut seen = std::collections::BTreeSet::new();
        for color in PALETTE {
            assert!(seen.insert(color), "duplicate palette entry {color}");
        }
    }

    #[test]
    fn test_empty_result_is_canonical() {
        let r = GenerationResult::empty();
        assert!(r.is_empty());
        assert!(r.colors.is_empty());
    }
}
