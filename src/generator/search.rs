//! Schedule search core.
//!
//! Breadth-first frontier expansion over partial schedules: courses are
//! processed one at a time in input order, and every partial schedule is
//! extended by every candidate section of the current course that
//! conflicts with none of the sections already placed. Partials that no
//! candidate can extend simply fail to reach the next generation —
//! backtracking by elimination, with memory bounded to one frontier.
//!
//! The result is the Cartesian product of the candidate lists restricted
//! to pairwise-compatible tuples, computed without ever materializing
//! the unpruned product.

use log::trace;

use crate::models::Class;

/// Builds every conflict-free assignment of one section per course.
///
/// `courses` holds one candidate list per course, in course order; each
/// output schedule holds one section per course, in the same order. An
/// empty candidate list makes the whole combination infeasible and the
/// result empty.
pub fn build_schedules(courses: &[Vec<Class>]) -> Vec<Vec<Class>> {
    let mut frontier: Vec<Vec<Class>> = vec![Vec::new()];

    for (index, candidates) in courses.iter().enumerate() {
        let mut next = Vec::new();
        for partial in &frontier {
            for candidate in candidates {
                let compatible = partial
                    .iter()
                    .all(|placed| !placed.conflicts_with(candidate));
                if compatible {
                    let mut extended = partial.clone();
                    extended.push(candidate.clone());
                    next.push(extended);
                }
            }
        }
        trace!(
            "search: course {index} expanded frontier {} -> {}",
            frontier.len(),
            next.len()
        );
        frontier = next;
        if frontier.is_empty() {
            break;
        }
    }

    frontier
}
