//! Schedule generation pipeline.
//!
//! Wires the stages together: split courses into mandatory and grouped,
//! expand each group's "pick N" policy into combinations, compose the
//! groups' choices via Cartesian product, then for every resulting
//! selection pre-filter the offerings, search for conflict-free
//! assignments, and post-filter the completed schedules. Surviving
//! schedules are accumulated across all selections and the distinct
//! courses get display colors from a fixed palette.
//!
//! The engine never self-limits result counts: bounding output size is
//! the caller's contract, with [`DEFAULT_SCHEDULE_CAP`] published as the
//! shared threshold.

mod postfilter;
mod prefilter;
mod search;

pub use postfilter::{filter_schedules, CONSECUTIVE_GAP_MINUTES};
pub use prefilter::filter_offerings;
pub use search::build_schedules;

use std::collections::BTreeMap;

use log::debug;
use thiserror::Error;

use crate::combinatorics::{cartesian_product, combinations_of_size};
use crate::models::{
    Class, Course, CourseGroup, Filter, GeneratedSchedule, GenerationResult, PALETTE,
};

/// Output-size threshold for callers enforcing the result-cap contract.
///
/// The generator itself never truncates; callers reject a generation
/// whose schedule count exceeds this before handing results downstream.
pub const DEFAULT_SCHEDULE_CAP: usize = 2048;

/// A hard failure of the generation pipeline.
///
/// An infeasible input is NOT an error — it produces the canonical empty
/// [`GenerationResult`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// More distinct courses in the results than palette colors.
    /// Reusing a color would break the distinct-color invariant, so the
    /// whole generation fails instead of silently truncating.
    #[error("display palette exhausted: {needed} distinct courses, {available} colors")]
    PaletteExhausted { needed: usize, available: usize },
}

/// Generates every valid schedule for the given courses and groups.
///
/// `filter` is optional; absent, both the offering pre-filter and the
/// completed-schedule post-filter are skipped entirely — unfiltered
/// generation is a first-class mode.
///
/// Inputs are read-only; every call produces a fresh result. Callers
/// supply deduplicated courses and an upstream-validated filter (see
/// [`crate::validation`]).
pub fn generate(
    groups: &[CourseGroup],
    courses: &[Course],
    filter: Option<&Filter>,
) -> Result<GenerationResult, GenerationError> {
    let mandatory: Vec<&Course> = courses.iter().filter(|c| c.is_mandatory()).collect();

    // One product dimension per group that actually has members
    let mut dimensions: Vec<Vec<Vec<&Course>>> = Vec::new();
    for group in groups {
        let members: Vec<&Course> = courses
            .iter()
            .filter(|c| c.group_name() == Some(group.name.as_str()))
            .collect();
        if members.is_empty() {
            continue;
        }
        dimensions.push(combinations_of_size(&members, group.pick));
    }

    let selections = cartesian_product(&dimensions);
    debug!(
        "generate: {} mandatory courses, {} group selections",
        mandatory.len(),
        selections.len()
    );

    let mut schedules: Vec<GeneratedSchedule> = Vec::new();
    for selection in &selections {
        let participating: Vec<&Course> = mandatory
            .iter()
            .copied()
            .chain(selection.iter().flatten().copied())
            .collect();
        if participating.is_empty() {
            continue;
        }

        let mut candidates: Vec<Vec<Class>> =
            participating.iter().map(|c| c.classes.clone()).collect();
        if let Some(filter) = filter {
            candidates = filter_offerings(&candidates, filter);
        }

        let mut found = build_schedules(&candidates);
        if let Some(filter) = filter {
            found = filter_schedules(found, filter);
        }
        schedules.extend(found.into_iter().map(GeneratedSchedule::new));
    }

    let colors = assign_colors(&schedules)?;
    Ok(GenerationResult { schedules, colors })
}

/// Assigns one palette color to each distinct course code appearing in
/// the results, in first-appearance order, without replacement.
fn assign_colors(
    schedules: &[GeneratedSchedule],
) -> Result<BTreeMap<String, String>, GenerationError> {
    let mut order: Vec<&str> = Vec::new();
    for schedule in schedules {
        for class in &schedule.classes {
            if !order.contains(&class.course.as_str()) {
                order.push(&class.course);
            }
        }
    }

    if order.len() > PALETTE.len() {
        return Err(GenerationError::PaletteExhausted {
            needed: order.len(),
            available: PALETTE.len(),
        });
    }

    Ok(order
        .into_iter()
        .zip(PALETTE)
        .map(|(code, color)| (code.to_string(), color.to_string()))
        .collect())
}
