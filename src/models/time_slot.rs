//! Time slot model and overlap primitives.
//!
//! Defines weekday-recurring (or one-off, date-pinned) meeting times and
//! the conflict predicate the whole search is built on.
//!
//! # Time Model
//! Times are integer military times (`730` = 07:30, `1400` = 14:00).
//! Military values compare consistently with clock order, so interval
//! checks work on the raw values; gap arithmetic converts to
//! minutes-since-midnight first.
//!
//! # Overlap Rule
//! Two slots conflict iff they share a concrete weekday and their closed
//! intervals intersect. Slots that touch at an endpoint (one ends exactly
//! when the other begins) DO conflict — back-to-back meetings in the same
//! seat are not schedulable. `Unknown`-day slots are placeholders ("day to
//! be determined") and never conflict with anything.

use serde::{Deserialize, Serialize};

/// Day of the week a slot recurs on.
///
/// `Unknown` marks a slot whose day has not been announced yet; it is
/// exempt from weekly-recurrence overlap checks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Unknown,
}

impl Day {
    /// The six schedulable weekdays, in week order (`Unknown` excluded).
    pub const WEEKDAYS: [Day; 6] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri, Day::Sat];
}

/// One meeting time of a class section.
///
/// Usually a weekly-recurring slot; a slot with a `date` is a one-off
/// event (makeup session, orientation) pinned to a calendar date but
/// still carrying its weekday for conflict purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Weekday this slot falls on.
    pub day: Day,
    /// Start time (military, inclusive).
    pub start: u16,
    /// End time (military, inclusive for conflict purposes).
    ///
    /// `start == end` is the all-day / no-time-known marker.
    pub end: u16,
    /// Calendar date for one-off, non-recurring meetings.
    pub date: Option<String>,
    /// Whether this meeting is held online.
    pub is_online: bool,
    /// Assigned room, when known.
    pub room: Option<String>,
}

impl TimeSlot {
    /// Creates an in-person recurring slot.
    pub fn new(day: Day, start: u16, end: u16) -> Self {
        Self {
            day,
            start,
            end,
            date: None,
            is_online: false,
            room: None,
        }
    }

    /// Creates an online recurring slot.
    pub fn online(day: Day, start: u16, end: u16) -> Self {
        Self {
            is_online: true,
            ..Self::new(day, start, end)
        }
    }

    /// Creates an all-day marker (`start == end` convention).
    pub fn all_day(day: Day, at: u16) -> Self {
        Self::new(day, at, at)
    }

    /// Pins this slot to a calendar date (one-off meeting).
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Sets the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Whether this is an all-day / no-time-known marker.
    #[inline]
    pub fn is_all_day(&self) -> bool {
        self.start == self.end
    }

    /// Start time as minutes since midnight.
    #[inline]
    pub fn start_minutes(&self) -> i32 {
        to_minutes(self.start)
    }

    /// End time as minutes since midnight.
    #[inline]
    pub fn end_minutes(&self) -> i32 {
        to_minutes(self.end)
    }

    /// Whether two slots conflict.
    ///
    /// True iff both slots fall on the same concrete weekday and the
    /// closed intervals `[start, end]` intersect. Endpoint contact counts
    /// as a conflict. `Unknown`-day slots never conflict.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        if self.day == Day::Unknown || other.day == Day::Unknown {
            return false;
        }
        self.day == other.day && self.start <= other.end && other.start <= self.end
    }
}

/// Converts a military time to minutes since midnight.
#[inline]
pub fn to_minutes(military: u16) -> i32 {
    let t = i32::from(military);
    (t / 100) * 60 + (t % 100)
}
