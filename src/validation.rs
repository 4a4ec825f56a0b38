//! Input validation and timetable auditing.
//!
//! Input checks run before entities enter the store and detect:
//! - Duplicate IDs
//! - Courses owned by unknown faculty
//! - Non-positive weekly demand or daily cap
//! - Duplicate free-slot declarations
//! - Templates with duplicate period ids or an empty grid
//!
//! [`audit_timetable`] re-checks the structural invariants of a generated
//! timetable. Generation never produces violations; manual patches may,
//! and the audit reports them instead of rejecting the timetable.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::availability::AvailabilityIndex;
use crate::models::{Course, Faculty, GeneratedTimetable, Template, Violation, ViolationType};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A course references a faculty member that doesn't exist.
    InvalidFacultyReference,
    /// Weekly demand or daily cap is zero.
    NonPositiveHours,
    /// A faculty member declares the same free cell twice.
    DuplicateFreeSlot,
    /// Two periods of a template share an id.
    DuplicatePeriod,
    /// A template has no working days or no periods.
    EmptyTemplate,
    /// A built-in preset cannot be deleted.
    ProtectedTemplate,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the course and faculty collections.
///
/// Checks:
/// 1. No duplicate faculty IDs
/// 2. Every faculty member has a positive daily cap
/// 3. No faculty member declares the same free cell twice
/// 4. No duplicate course IDs
/// 5. Every course has positive weekly demand
/// 6. Every course's owner exists
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(courses: &[Course], faculty: &[Faculty]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut faculty_ids = HashSet::new();
    for f in faculty {
        if !faculty_ids.insert(f.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate faculty ID: {}", f.id),
            ));
        }
        errors.extend(validate_faculty(f));
    }

    let mut course_ids = HashSet::new();
    for c in courses {
        if !course_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", c.id),
            ));
        }
        errors.extend(validate_course(c, faculty));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks a single faculty member in isolation.
pub fn validate_faculty(faculty: &Faculty) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if faculty.max_hours_per_day == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveHours,
            format!("Faculty '{}' has a daily cap of zero hours", faculty.id),
        ));
    }

    let mut seen = HashSet::new();
    for slot in &faculty.free_slots {
        if !seen.insert((slot.day.as_str(), slot.period_id.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateFreeSlot,
                format!(
                    "Faculty '{}' declares {}/{} free more than once",
                    faculty.id, slot.day, slot.period_id
                ),
            ));
        }
    }

    errors
}

/// Checks a single course against the faculty collection.
pub fn validate_course(course: &Course, faculty: &[Faculty]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if course.hours_per_week == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveHours,
            format!("Course '{}' requires zero hours per week", course.id),
        ));
    }

    if !faculty.iter().any(|f| f.id == course.faculty_id) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidFacultyReference,
            format!(
                "Course '{}' references unknown faculty '{}'",
                course.id, course.faculty_id
            ),
        ));
    }

    errors
}

/// Validates the shape of a template.
///
/// Checks:
/// 1. At least one working day
/// 2. At least one period
/// 3. Period ids are unique
pub fn validate_template(template: &Template) -> ValidationResult {
    let mut errors = Vec::new();

    if template.working_days.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTemplate,
            format!("Template '{}' has no working days", template.name),
        ));
    }
    if template.periods.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTemplate,
            format!("Template '{}' has no periods", template.name),
        ));
    }

    let mut period_ids = HashSet::new();
    for p in &template.periods {
        if !period_ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePeriod,
                format!("Template '{}' repeats period ID: {}", template.name, p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Audits a timetable against its template and the current entities.
///
/// Reports, in slot order:
/// - cells holding more than one slot
/// - slots on break periods or outside the template grid
/// - slots whose course is gone or whose faculty is not the course owner
/// - slots outside the faculty's declared free cells
/// - faculty days above the daily cap
///
/// An empty result means every structural invariant holds.
pub fn audit_timetable(
    timetable: &GeneratedTimetable,
    template: &Template,
    courses: &[Course],
    faculty: &[Faculty],
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let index = AvailabilityIndex::new(faculty).with_slots(&timetable.slots);
    let course_by_id: HashMap<&str, &Course> = courses.iter().map(|c| (c.id.as_str(), c)).collect();

    let mut cells = HashSet::new();
    let mut capped = HashSet::new();

    for slot in &timetable.slots {
        let cell = (slot.day.as_str(), slot.period_id.as_str());
        if !cells.insert(cell) {
            violations.push(Violation::new(
                ViolationType::CellConflict,
                &slot.period_id,
                format!("{}/{} holds more than one slot", slot.day, slot.period_id),
            ));
        }

        match template.period(&slot.period_id) {
            None => violations.push(Violation::new(
                ViolationType::OutsideTemplate,
                &slot.period_id,
                format!("Period '{}' is not part of the template", slot.period_id),
            )),
            Some(p) if p.is_break => violations.push(Violation::new(
                ViolationType::BreakOccupied,
                &slot.period_id,
                format!("{}/{} is a break period", slot.day, slot.period_id),
            )),
            Some(_) => {}
        }
        if !template.working_days.contains(&slot.day) {
            violations.push(Violation::new(
                ViolationType::OutsideTemplate,
                &slot.day,
                format!("Day '{}' is not a working day of the template", slot.day),
            ));
        }

        match course_by_id.get(slot.course_id.as_str()) {
            None => violations.push(Violation::new(
                ViolationType::UnknownCourse,
                &slot.course_id,
                format!("Course '{}' does not exist", slot.course_id),
            )),
            Some(course) if course.faculty_id != slot.faculty_id => {
                violations.push(Violation::new(
                    ViolationType::FacultyMismatch,
                    &slot.course_id,
                    format!(
                        "Course '{}' is owned by '{}', slot names '{}'",
                        slot.course_id, course.faculty_id, slot.faculty_id
                    ),
                ))
            }
            Some(_) => {}
        }

        if let Some(f) = index.faculty(&slot.faculty_id) {
            if !index.is_free(&f.id, &slot.day, &slot.period_id) {
                violations.push(Violation::new(
                    ViolationType::FacultyUnavailable,
                    &f.id,
                    format!("Faculty '{}' is not free at {}/{}", f.id, slot.day, slot.period_id),
                ));
            }
            let load = index.daily_load(&f.id, &slot.day);
            if load > f.max_hours_per_day && capped.insert((f.id.as_str(), slot.day.as_str())) {
                violations.push(Violation::new(
                    ViolationType::DailyCapExceeded,
                    &f.id,
                    format!(
                        "Faculty '{}' teaches {} hours on {} (cap {})",
                        f.id, load, slot.day, f.max_hours_per_day
                    ),
                ));
            }
        }
    }

    violations
}
