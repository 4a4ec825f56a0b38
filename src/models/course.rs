//! Course model.
//!
//! A course is owned by exactly one faculty member and demands a fixed
//! number of distinct (day, period) cells per week.

use serde::{Deserialize, Serialize};

/// A teaching unit to be placed on the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owning faculty member.
    pub faculty_id: String,
    /// Weekly demand: number of cells this course must occupy (positive).
    pub hours_per_week: u32,
}

impl Course {
    /// Creates a course with a weekly demand of 1.
    pub fn new(id: impl Into<String>, faculty_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            faculty_id: faculty_id.into(),
            hours_per_week: 1,
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the weekly demand.
    pub fn with_hours_per_week(mut self, hours: u32) -> Self {
        self.hours_per_week = hours;
        self
    }
}
