//! Course and course-group models.
//!
//! A course aggregates the sections a student may pick exactly one from.
//! Courses are either **mandatory** (no group, or the `"Ungrouped"`
//! sentinel) or **conditional**: tagged with a group whose pick-N policy
//! decides whether the course participates in a given schedule.

use serde::{Deserialize, Serialize};

use super::Class;

/// Group name that marks a course as mandatory.
pub const UNGROUPED: &str = "Ungrouped";

/// A course: the set of interchangeable sections for one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Catalog course code, unique across the input.
    pub course_code: String,
    /// Candidate sections. Mutually exclusive alternatives.
    pub classes: Vec<Class>,
    /// Group this course belongs to, by name. `None` (or `"Ungrouped"`)
    /// means the course is mandatory.
    pub group: Option<String>,
}

impl Course {
    /// Creates an empty course.
    pub fn new(course_code: impl Into<String>) -> Self {
        Self {
            course_code: course_code.into(),
            classes: Vec::new(),
            group: None,
        }
    }

    /// Adds a candidate section.
    pub fn with_class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    /// Assigns this course to a group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Whether exactly one section of this course must appear in every
    /// generated schedule.
    pub fn is_mandatory(&self) -> bool {
        match &self.group {
            None => true,
            Some(name) => name == UNGROUPED,
        }
    }

    /// The group name, when this course is conditional.
    pub fn group_name(&self) -> Option<&str> {
        self.group.as_deref().filter(|name| *name != UNGROUPED)
    }
}

/// A named bucket of courses with a "pick N" policy.
///
/// Membership lives on the courses (weak reference by name); a group with
/// no member courses contributes nothing. A `pick` larger than the member
/// count degrades to selecting all members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseGroup {
    /// Unique group name.
    pub name: String,
    /// How many member courses each schedule takes from this group.
    pub pick: usize,
}

impl CourseGroup {
    /// Creates a new group.
    pub fn new(name: impl Into<String>, pick: usize) -> Self {
        Self {
            name: name.into(),
            pick,
        }
    }
}
