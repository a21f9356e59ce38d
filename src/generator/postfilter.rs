//! Completed-schedule post-filter.
//!
//! Validates whole schedules against per-day constraints the search
//! cannot see while schedules are partial: how many classes land on one
//! day, and how long a back-to-back run gets. Two same-day classes are
//! "consecutive" when the gap from the earlier end to the later start is
//! at most [`CONSECUTIVE_GAP_MINUTES`].

use log::debug;

use crate::models::{to_minutes, Class, Day, Filter};

/// Maximum gap (minutes) between two classes still counted as
/// consecutive.
pub const CONSECUTIVE_GAP_MINUTES: i32 = 15;

/// Keeps only the schedules that satisfy the filter's per-day limits.
pub fn filter_schedules(schedules: Vec<Vec<Class>>, filter: &Filter) -> Vec<Vec<Class>> {
    let before = schedules.len();
    let kept: Vec<Vec<Class>> = schedules
        .into_iter()
        .filter(|schedule| schedule_passes(schedule, filter))
        .collect();
    debug!("post-filter kept {} of {before} schedules", kept.len());
    kept
}

/// Whether one completed schedule satisfies every day's limits.
fn schedule_passes(classes: &[Class], filter: &Filter) -> bool {
    for day in Day::WEEKDAYS {
        let mut intervals: Vec<(i32, i32)> = Vec::new();
        for class in classes {
            for slot in &class.schedules {
                if slot.day == day {
                    intervals.push((to_minutes(slot.start), to_minutes(slot.end)));
                }
            }
        }
        if intervals.is_empty() {
            continue;
        }

        let Some(day_filter) = filter.specific.day(day) else {
            continue;
        };
        if intervals.len() > day_filter.max_per_day {
            return false;
        }
        // No run can exceed a limit the day's total doesn't reach
        if intervals.len() <= day_filter.max_consecutive {
            continue;
        }
        if longest_consecutive_run(&mut intervals) > day_filter.max_consecutive {
            return false;
        }
    }
    true
}

/// Longest run of start-sorted intervals where each adjacent pair is
/// within the consecutive gap. Sorts in place.
fn longest_consecutive_run(intervals: &mut [(i32, i32)]) -> usize {
    intervals.sort_by_key(|&(start, _)| start);

    let mut longest = 1;
    let mut run = 1;
    for pair in intervals.windows(2) {
        let (_, earlier_end) = pair[0];
        let (later_start, _) = pair[1];
        if later_start - earlier_end <= CONSECUTIVE_GAP_MINUTES {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }
    longest
}
