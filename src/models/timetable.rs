//! Generated timetable (solution) model.
//!
//! A generated timetable is the output of one scheduling run against a
//! template: an unordered set of time slots, each binding a course and
//! its faculty to one (day, period) cell. Timetables are append-only;
//! after generation they change only through manual patches and
//! referential cleanup when a course or faculty member is deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One occupied grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Working-day label.
    pub day: String,
    /// Period id within the template.
    pub period_id: String,
    /// Scheduled course.
    pub course_id: String,
    /// Faculty teaching the course (denormalized from the course).
    pub faculty_id: String,
}

/// The output of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTimetable {
    /// Unique timetable identifier.
    pub id: String,
    /// Template the timetable was generated against.
    pub template_id: String,
    /// Occupied cells. At most one per (day, period).
    pub slots: Vec<TimeSlot>,
    /// Generation time.
    pub created_at: DateTime<Utc>,
}

/// A broken timetable invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related entity ID (course, faculty, or period).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
    /// Severity (0-100, higher = worse).
    pub severity: i32,
}

/// Classification of timetable violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Two slots occupy the same (day, period) cell.
    CellConflict,
    /// A slot occupies a break period.
    BreakOccupied,
    /// A slot references a period or day the template does not define.
    OutsideTemplate,
    /// A faculty member exceeds their daily cap.
    DailyCapExceeded,
    /// A slot's faculty differs from its course's owner.
    FacultyMismatch,
    /// A slot references a course that no longer exists.
    UnknownCourse,
    /// A slot is placed outside its faculty's declared free cells.
    FacultyUnavailable,
}

impl TimeSlot {
    /// Creates a time slot.
    pub fn new(
        day: impl Into<String>,
        period_id: impl Into<String>,
        course_id: impl Into<String>,
        faculty_id: impl Into<String>,
    ) -> Self {
        Self {
            day: day.into(),
            period_id: period_id.into(),
            course_id: course_id.into(),
            faculty_id: faculty_id.into(),
        }
    }

    /// Whether this slot occupies the given cell.
    #[inline]
    pub fn is_at(&self, day: &str, period_id: &str) -> bool {
        self.day == day && self.period_id == period_id
    }
}

impl Violation {
    /// Creates a violation.
    pub fn new(
        violation_type: ViolationType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let severity = match violation_type {
            ViolationType::CellConflict => 95,
            ViolationType::BreakOccupied | ViolationType::OutsideTemplate => 90,
            ViolationType::UnknownCourse | ViolationType::FacultyMismatch => 85,
            ViolationType::DailyCapExceeded => 70,
            ViolationType::FacultyUnavailable => 60,
        };
        Self {
            violation_type,
            entity_id: entity_id.into(),
            message: message.into(),
            severity,
        }
    }
}

impl GeneratedTimetable {
    /// Creates a timetable stamped with the current time.
    pub fn new(
        id: impl Into<String>,
        template_id: impl Into<String>,
        slots: Vec<TimeSlot>,
    ) -> Self {
        Self {
            id: id.into(),
            template_id: template_id.into(),
            slots,
            created_at: Utc::now(),
        }
    }

    /// Overrides the creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Finds the slot occupying a cell.
    pub fn slot_at(&self, day: &str, period_id: &str) -> Option<&TimeSlot> {
        self.slots.iter().find(|s| s.is_at(day, period_id))
    }

    /// Mutable access to the slot occupying a cell.
    pub fn slot_at_mut(&mut self, day: &str, period_id: &str) -> Option<&mut TimeSlot> {
        self.slots.iter_mut().find(|s| s.is_at(day, period_id))
    }

    /// Returns all slots for a given course.
    pub fn slots_for_course(&self, course_id: &str) -> Vec<&TimeSlot> {
        self.slots.iter().filter(|s| s.course_id == course_id).collect()
    }

    /// Returns all slots for a given faculty member.
    pub fn slots_for_faculty(&self, faculty_id: &str) -> Vec<&TimeSlot> {
        self.slots
            .iter()
            .filter(|s| s.faculty_id == faculty_id)
            .collect()
    }

    /// Number of slots placed for each course.
    pub fn placed_hours(&self) -> HashMap<&str, u32> {
        let mut placed: HashMap<&str, u32> = HashMap::new();
        for s in &self.slots {
            *placed.entry(s.course_id.as_str()).or_insert(0) += 1;
        }
        placed
    }

    /// Removes every slot taught by `faculty_id`. Returns the number removed.
    pub fn strip_faculty(&mut self, faculty_id: &str) -> usize {
        let before = self.slots.len();
        self.slots.retain(|s| s.faculty_id != faculty_id);
        before - self.slots.len()
    }

    /// Removes every slot of `course_id`. Returns the number removed.
    pub fn strip_course(&mut self, course_id: &str) -> usize {
        let before = self.slots.len();
        self.slots.retain(|s| s.course_id != course_id);
        before - self.slots.len()
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timetable() -> GeneratedTimetable {
        GeneratedTimetable::new(
            "TT1",
            "college-template",
            vec![
                TimeSlot::new("Monday", "1", "C1", "F1"),
                TimeSlot::new("Monday", "2", "C2", "F2"),
                TimeSlot::new("Tuesday", "1", "C1", "F1"),
            ],
        )
    }

    #[test]
    fn test_slot_at() {
        let t = sample_timetable();
        assert_eq!(t.slot_at("Monday", "2").map(|s| s.course_id.as_str()), Some("C2"));
        assert!(t.slot_at("Monday", "3").is_none());
        assert!(t.slot_at("Wednesday", "1").is_none());
    }

    #[test]
    fn test_slots_for_course_and_faculty() {
        let t = sample_timetable();
        assert_eq!(t.slots_for_course("C1").len(), 2);
        assert_eq!(t.slots_for_faculty("F2").len(), 1);
        assert!(t.slots_for_faculty("F9").is_empty());
    }

    #[test]
    fn test_placed_hours() {
        let t = sample_timetable();
        let placed = t.placed_hours();
        assert_eq!(placed["C1"], 2);
        assert_eq!(placed["C2"], 1);
        assert!(!placed.contains_key("C3"));
    }

    #[test]
    fn test_strip() {
        let mut t = sample_timetable();
        assert_eq!(t.strip_faculty("F1"), 2);
        assert_eq!(t.slot_count(), 1);
        assert_eq!(t.strip_course("C9"), 0);
        assert_eq!(t.strip_course("C2"), 1);
        assert_eq!(t.slot_count(), 0);
    }

    #[test]
    fn test_violation_severity() {
        let conflict = Violation::new(ViolationType::CellConflict, "1", "double booked");
        let cap = Violation::new(ViolationType::DailyCapExceeded, "F1", "over cap");
        assert!(conflict.severity > cap.severity);
        assert_eq!(cap.entity_id, "F1");
    }

    #[test]
    fn test_timetable_wire_format() {
        let t = sample_timetable();
        let value = serde_json::to_value(&t).unwrap();
        assert_eq!(value["templateId"], "college-template");
        assert_eq!(value["slots"][0]["periodId"], "1");
        assert_eq!(value["slots"][0]["facultyId"], "F1");
        assert!(value["createdAt"].is_string());
    }
}
