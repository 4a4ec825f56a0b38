//! Faculty availability and daily load queries.
//!
//! Two pure queries drive every placement decision:
//!
//! - [`is_free`]: the exact (day, period) pair is in the faculty's
//!   declared free set. No wildcards, no inference from neighbouring cells.
//! - [`daily_load`]: how many slots the faculty already holds on a day
//!   within a (partial) slot list.
//!
//! [`AvailabilityIndex`] answers the same questions in O(1) for the
//! scheduler's inner loop and keeps load counts current as slots are placed.

use std::collections::{HashMap, HashSet};

use crate::models::{Faculty, TimeSlot};

/// Whether `faculty` declared the exact (day, period) pair free.
pub fn is_free(faculty: &Faculty, day: &str, period_id: &str) -> bool {
    faculty.has_free_slot(day, period_id)
}

/// Number of slots in `slots` taught by `faculty_id` on `day`.
pub fn daily_load(slots: &[TimeSlot], faculty_id: &str, day: &str) -> u32 {
    slots
        .iter()
        .filter(|s| s.faculty_id == faculty_id && s.day == day)
        .count() as u32
}

/// Hashed availability and load lookups over a faculty collection.
///
/// Load counts start at zero (or from an existing slot list via
/// [`AvailabilityIndex::with_slots`]) and grow only through [`record`].
///
/// [`record`]: AvailabilityIndex::record
#[derive(Debug, Clone, Default)]
pub struct AvailabilityIndex<'a> {
    faculty: HashMap<&'a str, &'a Faculty>,
    free: HashSet<(&'a str, &'a str, &'a str)>,
    load: HashMap<(&'a str, &'a str), u32>,
}

impl<'a> AvailabilityIndex<'a> {
    /// Indexes the free slots of every faculty member.
    ///
    /// If two members share an id, the first one listed wins.
    pub fn new(faculty: &'a [Faculty]) -> Self {
        let mut by_id = HashMap::with_capacity(faculty.len());
        let mut free = HashSet::new();
        for f in faculty {
            if by_id.contains_key(f.id.as_str()) {
                continue;
            }
            by_id.insert(f.id.as_str(), f);
            for slot in &f.free_slots {
                free.insert((f.id.as_str(), slot.day.as_str(), slot.period_id.as_str()));
            }
        }
        Self {
            faculty: by_id,
            free,
            load: HashMap::new(),
        }
    }

    /// Seeds load counts from an existing slot list.
    pub fn with_slots(mut self, slots: &'a [TimeSlot]) -> Self {
        for s in slots {
            self.record(&s.faculty_id, &s.day);
        }
        self
    }

    /// Looks up a faculty member by id.
    pub fn faculty(&self, faculty_id: &str) -> Option<&'a Faculty> {
        self.faculty.get(faculty_id).copied()
    }

    /// Whether the faculty member declared the exact cell free.
    ///
    /// Unknown faculty are never free.
    pub fn is_free(&self, faculty_id: &str, day: &str, period_id: &str) -> bool {
        self.free.contains(&(faculty_id, day, period_id))
    }

    /// Slots recorded for the faculty member on `day`.
    pub fn daily_load(&self, faculty_id: &str, day: &str) -> u32 {
        self.load.get(&(faculty_id, day)).copied().unwrap_or(0)
    }

    /// Whether one more slot on `day` stays within the daily cap.
    pub fn has_capacity(&self, faculty: &Faculty, day: &str) -> bool {
        self.daily_load(&faculty.id, day) < faculty.max_hours_per_day
    }

    /// Records one placed slot.
    pub fn record(&mut self, faculty_id: &'a str, day: &'a str) {
        *self.load.entry((faculty_id, day)).or_insert(0) += 1;
    }
}
