//! Manual slot patching.
//!
//! A patch retargets one already-scheduled cell to a different course.
//! The slot's faculty is always re-derived from the new course's owner.
//! Availability and the daily cap are not re-checked: a manual override
//! may break them on purpose. Use [`audit_timetable`] to see what it broke.
//!
//! [`audit_timetable`]: crate::validation::audit_timetable

use crate::error::{EntityKind, Result, TimetableError};
use crate::models::{Course, GeneratedTimetable, TimeSlot};

/// What a patch did to the timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The cell now holds the new course. Carries the slot as it was before.
    Retargeted {
        /// Slot contents before the patch.
        previous: TimeSlot,
    },
    /// Nothing changed (no slot at the cell, or no such timetable).
    Unchanged,
}

impl PatchOutcome {
    /// Whether the timetable was modified.
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Retargeted { .. })
    }
}

/// Retargets the slot at (day, period) to `new_course_id`.
///
/// - No slot at the cell: `Ok(Unchanged)`. Patching never creates slots.
/// - Unknown course: `Err(NotFound)`, timetable untouched.
/// - Otherwise the slot's course and faculty are replaced.
pub fn patch_slot(
    timetable: &mut GeneratedTimetable,
    day: &str,
    period_id: &str,
    new_course_id: &str,
    courses: &[Course],
) -> Result<PatchOutcome> {
    let Some(slot) = timetable.slot_at_mut(day, period_id) else {
        log::debug!(
            "patch of empty cell {}/{} in timetable '{}' ignored",
            day,
            period_id,
            timetable.id
        );
        return Ok(PatchOutcome::Unchanged);
    };

    let course = courses
        .iter()
        .find(|c| c.id == new_course_id)
        .ok_or_else(|| TimetableError::not_found(EntityKind::Course, new_course_id))?;

    let previous = slot.clone();
    slot.course_id = course.id.clone();
    slot.faculty_id = course.faculty_id.clone();

    Ok(PatchOutcome::Retargeted { previous })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_courses() -> Vec<Course> {
        vec![
            Course::new("C1", "F1").with_name("Algebra"),
            Course::new("C2", "F2").with_name("Biology"),
        ]
    }

    fn sample_timetable() -> GeneratedTimetable {
        GeneratedTimetable::new(
            "TT1",
            "T1",
            vec![
                TimeSlot::new("Monday", "1", "C1", "F1"),
                TimeSlot::new("Monday", "2", "C1", "F1"),
            ],
        )
    }

    #[test]
    fn test_patch_rederives_faculty() {
        let mut tt = sample_timetable();
        let outcome = patch_slot(&mut tt, "Monday", "2", "C2", &sample_courses()).unwrap();

        assert_eq!(
            outcome,
            PatchOutcome::Retargeted {
                previous: TimeSlot::new("Monday", "2", "C1", "F1")
            }
        );
        let slot = tt.slot_at("Monday", "2").unwrap();
        assert_eq!(slot.course_id, "C2");
        assert_eq!(slot.faculty_id, "F2");
        // Other slots untouched.
        assert_eq!(tt.slot_at("Monday", "1").unwrap().course_id, "C1");
    }

    #[test]
    fn test_patch_empty_cell_is_noop() {
        let mut tt = sample_timetable();
        let before = tt.slots.clone();
        let outcome = patch_slot(&mut tt, "Tuesday", "1", "C2", &sample_courses()).unwrap();
        assert_eq!(outcome, PatchOutcome::Unchanged);
        assert!(!outcome.is_changed());
        assert_eq!(tt.slots, before);
    }

    #[test]
    fn test_patch_empty_cell_ignores_unknown_course() {
        let mut tt = sample_timetable();
        let before = tt.clone();
        let outcome = patch_slot(&mut tt, "Tuesday", "1", "ghost", &sample_courses()).unwrap();
        assert_eq!(outcome, PatchOutcome::Unchanged);
        assert_eq!(tt, before);
    }

    #[test]
    fn test_patch_unknown_course_fails() {
        let mut tt = sample_timetable();
        let before = tt.clone();
        let err = patch_slot(&mut tt, "Monday", "1", "C9", &sample_courses()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(tt, before);
    }

    #[test]
    fn test_patch_may_exceed_cap() {
        // Manual overrides are trusted; nothing is re-validated.
        let mut tt = sample_timetable();
        let courses = vec![Course::new("C3", "F1")];
        patch_slot(&mut tt, "Monday", "1", "C3", &courses).unwrap();
        assert_eq!(tt.slots_for_faculty("F1").len(), 2);
    }
}
