//! Timetabling domain models.
//!
//! Core data types for one generation run: meeting times, course
//! sections, course groups, the scheduling-quality filter, and the
//! generated-schedule result. All types are plain serde value data —
//! the engine reads caller input and produces fresh results, it never
//! mutates what it was given.

mod class;
mod course;
mod filter;
mod schedule;
mod time_slot;

pub use class::{Class, Modality};
pub use course::{Course, CourseGroup, UNGROUPED};
pub use filter::{DayFilter, Filter, GeneralFilter, WeekFilter};
pub use schedule::{GeneratedSchedule, GenerationResult, PALETTE};
pub use time_slot::{to_minutes, Day, TimeSlot};
