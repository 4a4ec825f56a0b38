//! Error types for store and timetable operations.
//!
//! Every fallible operation is all-or-nothing: when an error is returned,
//! no collection has been modified.

use std::fmt;

use crate::validation::ValidationError;

/// Result type for timetable operations.
pub type Result<T> = std::result::Result<T, TimetableError>;

/// Kind of entity an id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A template.
    Template,
    /// A faculty member.
    Faculty,
    /// A course.
    Course,
    /// A generated timetable.
    Timetable,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Template => "template",
            EntityKind::Faculty => "faculty",
            EntityKind::Course => "course",
            EntityKind::Timetable => "timetable",
        };
        f.write_str(name)
    }
}

/// Error type for timetable operations.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// Input rejected before any state change.
    #[error("Validation failed: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// An explicitly requested entity does not exist.
    #[error("Not found: {entity} '{id}'")]
    NotFound {
        /// Kind of entity looked up.
        entity: EntityKind,
        /// The id that was not found.
        id: String,
    },

    /// Structured input (template file, config) could not be parsed.
    #[error("Invalid format: {0}")]
    InvalidFormat(#[from] serde_json::Error),
}

impl TimetableError {
    /// Creates a not-found error.
    pub fn not_found(entity: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Whether this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Validation findings, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for TimetableError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_not_found_display() {
        let err = TimetableError::not_found(EntityKind::Course, "C9");
        assert_eq!(err.to_string(), "Not found: course 'C9'");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_display_joins_messages() {
        let err = TimetableError::from(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate course ID: C1"),
            ValidationError::new(ValidationErrorKind::NonPositiveHours, "Course 'C2' has no hours"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: Duplicate course ID: C1; Course 'C2' has no hours"
        );
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_invalid_format_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: TimetableError = parse_err.into();
        assert!(matches!(err, TimetableError::InvalidFormat(_)));
        assert!(err.to_string().starts_with("Invalid format"));
    }
}
