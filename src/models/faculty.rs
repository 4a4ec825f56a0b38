//! Faculty model.
//!
//! Faculty members teach courses. Availability is declared explicitly as
//! a set of free (day, period) pairs; a member with no free slots can
//! never be scheduled. Daily workload is capped by `max_hours_per_day`.

use serde::{Deserialize, Serialize};

/// A (day, period) pair a faculty member has declared free.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeSlot {
    /// Working-day label.
    pub day: String,
    /// Period id within the template.
    pub period_id: String,
}

impl FreeSlot {
    /// Creates a free slot.
    pub fn new(day: impl Into<String>, period_id: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            period_id: period_id.into(),
        }
    }

    /// Exact match against a (day, period) cell.
    #[inline]
    pub fn matches(&self, day: &str, period_id: &str) -> bool {
        self.day == day && self.period_id == period_id
    }
}

/// A staff member who can be assigned courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    /// Unique faculty identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Department label.
    pub department: String,
    /// Maximum number of slots per working day (positive).
    pub max_hours_per_day: u32,
    /// Declared free cells. Each (day, period) appears at most once.
    #[serde(default)]
    pub free_slots: Vec<FreeSlot>,
}

impl Faculty {
    /// Creates a faculty member with a daily cap of 1 and no free slots.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: String::new(),
            max_hours_per_day: 1,
            free_slots: Vec::new(),
        }
    }

    /// Sets the department label.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the daily cap.
    pub fn with_max_hours_per_day(mut self, hours: u32) -> Self {
        self.max_hours_per_day = hours;
        self
    }

    /// Declares a free cell. Already-declared cells are ignored.
    pub fn with_free_slot(mut self, day: impl Into<String>, period_id: impl Into<String>) -> Self {
        let slot = FreeSlot::new(day, period_id);
        if !self.free_slots.contains(&slot) {
            self.free_slots.push(slot);
        }
        self
    }

    /// Declares every period in `period_ids` free on `day`.
    pub fn with_free_day<I, S>(mut self, day: &str, period_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for period_id in period_ids {
            self = self.with_free_slot(day, period_id);
        }
        self
    }

    /// Whether the exact (day, period) pair is declared free.
    pub fn has_free_slot(&self, day: &str, period_id: &str) -> bool {
        self.free_slots.iter().any(|s| s.matches(day, period_id))
    }

    /// Flips membership of a free cell.
    ///
    /// Returns `true` if the cell is free after the call.
    pub fn toggle_free_slot(&mut self, day: &str, period_id: &str) -> bool {
        match self.free_slots.iter().position(|s| s.matches(day, period_id)) {
            Some(idx) => {
                self.free_slots.remove(idx);
                false
            }
            None => {
                self.free_slots.push(FreeSlot::new(day, period_id));
                true
            }
        }
    }

    /// Number of declared free cells.
    pub fn free_slot_count(&self) -> usize {
        self.free_slots.len()
    }
}
