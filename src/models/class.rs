//! Class (course section) model.
//!
//! A class is one concrete offering of a course: a section with its own
//! meeting times, professor, room set, and enrollment numbers. All
//! offerings of a course are mutually exclusive alternatives — a schedule
//! contains at most one of them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::TimeSlot;

/// Delivery mode of a class.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    /// Mixed online and in-person meetings.
    Hybrid,
    /// Fully in-person.
    #[serde(rename = "F2F")]
    FaceToFace,
    /// Fully online.
    Online,
    /// Mostly online with occasional in-person meetings.
    PredominantlyOnline,
    /// Delivery mode not yet announced.
    Tentative,
}

impl Modality {
    /// All delivery modes, in declaration order.
    pub const ALL: [Modality; 5] = [
        Modality::Hybrid,
        Modality::FaceToFace,
        Modality::Online,
        Modality::PredominantlyOnline,
        Modality::Tentative,
    ];
}

/// One offering (section) of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    /// Registration code, unique within the course.
    pub code: u32,
    /// Course code this section belongs to.
    pub course: String,
    /// Section label (e.g. "S11").
    pub section: String,
    /// Assigned professor. Empty when unannounced.
    pub professor: String,
    /// Meeting times. Order is display order; irrelevant to conflicts.
    pub schedules: Vec<TimeSlot>,
    /// Currently enrolled students.
    pub enrolled: u32,
    /// Enrollment capacity.
    pub enroll_cap: u32,
    /// Rooms this section meets in.
    pub rooms: BTreeSet<String>,
    /// Delivery mode.
    pub modality: Modality,
    /// Enrollment restriction note.
    pub restriction: String,
    /// Free-form remarks from the catalog.
    pub remarks: String,
}

impl Class {
    /// Creates a new section of the given course.
    pub fn new(code: u32, course: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            code,
            course: course.into(),
            section: section.into(),
            professor: String::new(),
            schedules: Vec::new(),
            enrolled: 0,
            enroll_cap: 0,
            rooms: BTreeSet::new(),
            modality: Modality::Tentative,
            restriction: String::new(),
            remarks: String::new(),
        }
    }

    /// Sets the professor.
    pub fn with_professor(mut self, professor: impl Into<String>) -> Self {
        self.professor = professor.into();
        self
    }

    /// Adds a meeting time.
    pub fn with_schedule(mut self, slot: TimeSlot) -> Self {
        if let Some(room) = &slot.room {
            self.rooms.insert(room.clone());
        }
        self.schedules.push(slot);
        self
    }

    /// Sets enrollment numbers.
    pub fn with_enrollment(mut self, enrolled: u32, enroll_cap: u32) -> Self {
        self.enrolled = enrolled;
        self.enroll_cap = enroll_cap;
        self
    }

    /// Sets the delivery mode.
    pub fn with_modality(mut self, modality: Modality) -> Self {
        self.modality = modality;
        self
    }

    /// Sets the restriction note.
    pub fn with_restriction(mut self, restriction: impl Into<String>) -> Self {
        self.restriction = restriction.into();
        self
    }

    /// Sets the remarks.
    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }

    /// Whether this section has no open seats left.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.enrolled >= self.enroll_cap
    }

    /// Remaining open seats.
    #[inline]
    pub fn open_slots(&self) -> u32 {
        self.enroll_cap.saturating_sub(self.enrolled)
    }

    /// Whether any meeting time of this section conflicts with `other`.
    pub fn conflicts_with(&self, other: &Class) -> bool {
        self.schedules
            .iter()
            .any(|a| other.schedules.iter().any(|b| a.overlaps(b)))
    }
}
