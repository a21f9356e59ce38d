//! Input validation for generation runs.
//!
//! Checks structural integrity of groups, courses, and the filter before
//! generation. Detects:
//! - Duplicate course codes and group names
//! - Courses referencing groups that were never defined
//! - Courses with no candidate sections
//! - Inverted time slots and filter day windows
//!
//! This is the collaborator-boundary check the engine contract assumes:
//! [`crate::generator::generate`] does not re-validate, and the search
//! never touches malformed shapes. A group `pick` exceeding its member
//! count is deliberately NOT flagged here — the generator degrades it to
//! "select all members"; callers wanting strictness pre-check group sizes
//! themselves.

use std::collections::HashSet;

use crate::models::{Course, CourseGroup, Day, Filter};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two courses share the same course code.
    DuplicateCourseCode,
    /// Two groups share the same name.
    DuplicateGroupName,
    /// A course references a group that doesn't exist.
    UnknownGroupReference,
    /// A course has no candidate sections.
    EmptyCourse,
    /// A time slot ends before it starts.
    InvalidTimeSlot,
    /// A filter day window ends at or before it starts.
    InvalidTimeWindow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of a generation run.
///
/// Checks:
/// 1. No duplicate group names
/// 2. No duplicate course codes
/// 3. Every grouped course references a defined group
/// 4. Every course has at least one candidate section
/// 5. Every time slot satisfies `start <= end` (equality is the
///    all-day marker)
/// 6. Every filter day window satisfies `start < end`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    groups: &[CourseGroup],
    courses: &[Course],
    filter: Option<&Filter>,
) -> ValidationResult {
    let mut errors = Vec::new();

    // Collect group names
    let mut group_names = HashSet::new();
    for group in groups {
        if !group_names.insert(group.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateGroupName,
                format!("Duplicate group name: {}", group.name),
            ));
        }
    }

    // Course codes, group references, candidate sections, slot shapes
    let mut course_codes = HashSet::new();
    for course in courses {
        if !course_codes.insert(course.course_code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCourseCode,
                format!("Duplicate course code: {}", course.course_code),
            ));
        }

        if let Some(name) = course.group_name() {
            if !group_names.contains(name) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownGroupReference,
                    format!(
                        "Course '{}' references unknown group '{}'",
                        course.course_code, name
                    ),
                ));
            }
        }

        if course.classes.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCourse,
                format!("Course '{}' has no candidate sections", course.course_code),
            ));
        }

        for class in &course.classes {
            for slot in &class.schedules {
                if slot.start > slot.end {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidTimeSlot,
                        format!(
                            "Class {} of '{}' has an inverted slot: {}-{}",
                            class.code, course.course_code, slot.start, slot.end
                        ),
                    ));
                }
            }
        }
    }

    // Filter day windows
    if let Some(filter) = filter {
        for day in Day::WEEKDAYS {
            let Some(day_filter) = filter.specific.day(day) else {
                continue;
            };
            if day_filter.start >= day_filter.end {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidTimeWindow,
                    format!(
                        "Filter window for {:?} is empty: {}-{}",
                        day, day_filter.start, day_filter.end
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Class, DayFilter, TimeSlot};

    fn sample_courses() -> Vec<Course> {
        vec![
            Course::new("CSMATH1")
                .with_class(Class::new(1, "CSMATH1", "S11").with_schedule(TimeSlot::new(
                    Day::Mon,
                    900,
                    1000,
                ))),
            Course::new("CSELEC1")
                .with_group("Electives")
                .with_class(Class::new(2, "CSELEC1", "S12").with_schedule(TimeSlot::new(
                    Day::Tue,
                    1300,
                    1430,
                ))),
        ]
    }

    fn sample_groups() -> Vec<CourseGroup> {
        vec![CourseGroup::new("Electives", 1)]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_groups(), &sample_courses(), None).is_ok());
        assert!(validate_input(&sample_groups(), &sample_courses(), Some(&Filter::new())).is_ok());
    }

    #[test]
    fn test_duplicate_course_code() {
        let mut courses = sample_courses();
        courses.push(
            Course::new("CSMATH1").with_class(Class::new(3, "CSMATH1", "S13").with_schedule(
                TimeSlot::new(Day::Fri, 900, 1000),
            )),
        );
        let errors = validate_input(&sample_groups(), &courses, None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateCourseCode));
    }

    #[test]
    fn test_duplicate_group_name() {
        let groups = vec![CourseGroup::new("Electives", 1), CourseGroup::new("Electives", 2)];
        let errors = validate_input(&groups, &sample_courses(), None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateGroupName));
    }

    #[test]
    fn test_unknown_group_reference() {
        let errors = validate_input(&[], &sample_courses(), None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownGroupReference
                && e.message.contains("Electives")));
    }

    #[test]
    fn test_empty_course() {
        let courses = vec![Course::new("GEMATMW")]; // No sections
        let errors = validate_input(&[], &courses, None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyCourse));
    }

    #[test]
    fn test_inverted_slot() {
        let courses = vec![Course::new("NSCOM01").with_class(
            Class::new(4, "NSCOM01", "S14").with_schedule(TimeSlot::new(Day::Wed, 1400, 1200)),
        )];
        let errors = validate_input(&[], &courses, None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTimeSlot));
    }

    #[test]
    fn test_all_day_marker_is_not_inverted() {
        let courses = vec![Course::new("THSIS01").with_class(
            Class::new(5, "THSIS01", "S15").with_schedule(TimeSlot::all_day(Day::Sat, 0)),
        )];
        assert!(validate_input(&[], &courses, None).is_ok());
    }

    #[test]
    fn test_inverted_filter_window() {
        let filter = Filter::new().with_day(Day::Mon, DayFilter::new().with_window(1800, 900));
        let errors = validate_input(&[], &sample_courses()[..1], Some(&filter)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTimeWindow));
    }

    #[test]
    fn test_multiple_errors_accumulate() {
        let courses = vec![
            Course::new("empty"), // No sections
            Course::new("CSELEC9").with_group("Nowhere").with_class(
                Class::new(6, "CSELEC9", "S16").with_schedule(TimeSlot::new(Day::Thu, 1000, 800)),
            ),
        ];
        let errors = validate_input(&[], &courses, None).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
