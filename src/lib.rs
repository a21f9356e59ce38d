//! Conflict-free class timetable generation.
//!
//! Builds every valid timetable from a catalog of course offerings:
//! one section per course, no time conflicts, filtered by
//! scheduling-quality constraints (time windows, modality, daily load,
//! consecutive-run limits). The search is a constrained combinatorial
//! enumeration with eager pruning — it never materializes the unpruned
//! product of all sections.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeSlot`, `Class`, `Course`,
//!   `CourseGroup`, `Filter`, `GeneratedSchedule`, `GenerationResult`
//! - **`validation`**: Collaborator-boundary input checks (duplicate
//!   codes, unknown group references, inverted windows)
//! - **`combinatorics`**: Size-k subset and Cartesian-product enumeration
//!   backing the group "pick N" machinery
//! - **`generator`**: The pipeline — offering pre-filter, frontier
//!   search, completed-schedule post-filter, orchestration, colors
//!
//! # Architecture
//!
//! Pure, synchronous, single-threaded library: no I/O, no shared state,
//! no self-imposed output cap. Catalog fetching, persistence, rendering,
//! and output-size policy (see [`generator::DEFAULT_SCHEDULE_CAP`]) are
//! the caller's collaborators.
//!
//! # Example
//!
//! ```
//! use timetabler::generator::generate;
//! use timetabler::models::{Class, Course, Day, TimeSlot};
//!
//! let courses = vec![
//!     Course::new("CSMATH1").with_class(
//!         Class::new(1, "CSMATH1", "S11")
//!             .with_schedule(TimeSlot::new(Day::Mon, 900, 1030)),
//!     ),
//!     Course::new("NSCOM01").with_class(
//!         Class::new(2, "NSCOM01", "S11")
//!             .with_schedule(TimeSlot::new(Day::Mon, 1100, 1230)),
//!     ),
//! ];
//!
//! let result = generate(&[], &courses, None).unwrap();
//! assert_eq!(result.schedules.len(), 1);
//! ```

pub mod combinatorics;
pub mod generator;
pub mod models;
pub mod validation;
