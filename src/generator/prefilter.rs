//! Offering pre-filter.
//!
//! Removes individual candidate sections that violate the active filter
//! before the search runs, shrinking the branching factor early. A
//! section is dropped when **any** of its meeting times is invalid —
//! one bad slot disqualifies the whole section, not just the slot.
//! Pure and idempotent.

use log::debug;

use crate::models::{Class, Day, Filter, TimeSlot};

/// Filters each course's candidate list against the active filter.
///
/// Input and output are per-course candidate lists, in course order.
/// A candidate list may come back empty — the search treats that as an
/// infeasible course combination.
pub fn filter_offerings(courses: &[Vec<Class>], filter: &Filter) -> Vec<Vec<Class>> {
    let before: usize = courses.iter().map(Vec::len).sum();

    let filtered: Vec<Vec<Class>> = courses
        .iter()
        .map(|candidates| {
            candidates
                .iter()
                .filter(|class| class_passes(class, filter))
                .cloned()
                .collect()
        })
        .collect();

    let after: usize = filtered.iter().map(Vec::len).sum();
    debug!("pre-filter kept {after} of {before} candidate sections");
    filtered
}

/// Whether every meeting time of a section survives the filter.
fn class_passes(class: &Class, filter: &Filter) -> bool {
    class
        .schedules
        .iter()
        .all(|slot| slot_is_valid(slot, class, filter))
}

/// Whether one meeting time survives the filter.
///
/// `Unknown`-day slots always pass — they carry no weekday to check.
/// Otherwise a slot is invalid when it is in-person on a day the student
/// won't attend in person, when it leaves the day's time window, or when
/// the section's modality is not allowed that day.
fn slot_is_valid(slot: &TimeSlot, class: &Class, filter: &Filter) -> bool {
    if slot.day == Day::Unknown {
        return true;
    }
    let Some(day_filter) = filter.specific.day(slot.day) else {
        return true;
    };

    if !slot.is_online && !filter.general.days_in_person.contains(&slot.day) {
        return false;
    }
    if slot.start < day_filter.start || slot.end > day_filter.end {
        return false;
    }
    if !day_filter.modalities.contains(&class.modality) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayFilter, GeneralFilter, Modality};

    fn section(code: u32, slot: TimeSlot, modality: Modality) -> Class {
        Class::new(code, "CSMATH1", format!("S{code}"))
            .with_schedule(slot)
            .with_modality(modality)
    }

    #[test]
    fn test_in_person_day_policy() {
        // Student only comes to campus Mon and Thu
        let filter = Filter::new()
            .with_general(GeneralFilter::new().with_days_in_person([Day::Mon, Day::Thu]));

        let mon = section(1, TimeSlot::new(Day::Mon, 900, 1000), Modality::FaceToFace);
        let tue = section(2, TimeSlot::new(Day::Tue, 900, 1000), Modality::FaceToFace);
        // Online meetings are exempt from the in-person day policy
        let tue_online = section(3, TimeSlot::online(Day::Tue, 900, 1000), Modality::Online);

        let result = filter_offerings(&[vec![mon, tue, tue_online]], &filter);
        let codes: Vec<u32> = result[0].iter().map(|c| c.code).collect();
        assert_eq!(codes, vec![1, 3]);
    }

    #[test]
    fn test_time_window() {
        let filter = Filter::new().with_day(Day::Wed, DayFilter::new().with_window(900, 1700));

        let inside = section(1, TimeSlot::new(Day::Wed, 900, 1030), Modality::FaceToFace);
        let starts_early = section(2, TimeSlot::new(Day::Wed, 730, 900), Modality::FaceToFace);
        let ends_late = section(3, TimeSlot::new(Day::Wed, 1600, 1730), Modality::FaceToFace);

        let result = filter_offerings(&[vec![inside, starts_early, ends_late]], &filter);
        let codes: Vec<u32> = result[0].iter().map(|c| c.code).collect();
        assert_eq!(codes, vec![1]);
    }

    #[test]
    fn test_modality_policy() {
        let filter = Filter::new().with_day(
            Day::Fri,
            DayFilter::new().with_modalities([Modality::Online, Modality::PredominantlyOnline]),
        );

        let online = section(1, TimeSlot::online(Day::Fri, 900, 1000), Modality::Online);
        let f2f = section(2, TimeSlot::new(Day::Fri, 900, 1000), Modality::FaceToFace);

        let result = filter_offerings(&[vec![online, f2f]], &filter);
        let codes: Vec<u32> = result[0].iter().map(|c| c.code).collect();
        assert_eq!(codes, vec![1]);
    }

    #[test]
    fn test_unknown_day_always_passes() {
        // Harshest possible filter: no in-person days, tiny windows
        let filter = Filter::new()
            .with_general(GeneralFilter::new().with_days_in_person([]))
            .with_uniform_days(DayFilter::new().with_window(100, 200));

        let tbd = section(1, TimeSlot::new(Day::Unknown, 0, 0), Modality::Tentative);
        // Unknown-day slot passes even though the section is in-person
        let result = filter_offerings(&[vec![tbd]], &filter);
        assert_eq!(result[0].len(), 1);
    }

    #[test]
    fn test_one_invalid_slot_drops_whole_section() {
        let filter = Filter::new().with_day(Day::Thu, DayFilter::new().with_window(900, 1700));

        // Tue slot fine, Thu slot leaves the window: whole section goes
        let class = Class::new(1, "LCLSONE", "S11")
            .with_schedule(TimeSlot::new(Day::Tue, 1000, 1130))
            .with_schedule(TimeSlot::new(Day::Thu, 1600, 1730))
            .with_modality(Modality::FaceToFace);

        let result = filter_offerings(&[vec![class]], &filter);
        assert!(result[0].is_empty());
    }

    #[test]
    fn test_idempotent() {
        let filter = Filter::new()
            .with_general(GeneralFilter::new().with_days_in_person([Day::Mon]))
            .with_day(Day::Mon, DayFilter::new().with_window(800, 1800));

        let candidates = vec![vec![
            section(1, TimeSlot::new(Day::Mon, 900, 1000), Modality::FaceToFace),
            section(2, TimeSlot::new(Day::Tue, 900, 1000), Modality::FaceToFace),
            section(3, TimeSlot::new(Day::Mon, 700, 800), Modality::FaceToFace),
        ]];

        let once = filter_offerings(&candidates, &filter);
        let twice = filter_offerings(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_permissive_filter_keeps_everything() {
        let candidates = vec![vec![
            section(1, TimeSlot::new(Day::Mon, 730, 900), Modality::FaceToFace),
            section(2, TimeSlot::online(Day::Sat, 1800, 2100), Modality::Online),
        ]];
        let result = filter_offerings(&candidates, &Filter::new());
        assert_eq!(result[0].len(), 2);
    }
}
