//! Period model.
//!
//! A period is one time column within a school day. Periods are ordered
//! by their position in the owning template; that order is the column
//! order of every timetable generated against it.

use serde::{Deserialize, Serialize};

/// One time column within a day.
///
/// Start and end are wall-clock strings (e.g. `"09:00"`). They are
/// displayed as-is and never checked for overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    /// Identifier, unique within the owning template.
    pub id: String,
    /// Wall-clock start time.
    pub start_time: String,
    /// Wall-clock end time.
    pub end_time: String,
    /// Non-teaching period (lunch, recess). Never receives a slot.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_break: bool,
}

impl Period {
    /// Creates a teaching period.
    pub fn new(
        id: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            is_break: false,
        }
    }

    /// Creates a break period.
    pub fn break_period(
        id: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self::new(id, start_time, end_time).as_break()
    }

    /// Marks this period as a break.
    pub fn as_break(mut self) -> Self {
        self.is_break = true;
        self
    }

    /// Whether courses may be placed in this period.
    #[inline]
    pub fn is_teaching(&self) -> bool {
        !self.is_break
    }

    /// Column label, `"start-end"`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.start_time, self.end_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_builder() {
        let p = Period::new("1", "09:00", "10:00");
        assert_eq!(p.id, "1");
        assert!(p.is_teaching());
        assert_eq!(p.label(), "09:00-10:00");

        let lunch = Period::break_period("lunch", "12:00", "13:00");
        assert!(lunch.is_break);
        assert!(!lunch.is_teaching());
    }

    #[test]
    fn test_period_wire_format() {
        let json = serde_json::to_string(&Period::new("1", "09:00", "10:00")).unwrap();
        assert_eq!(json, r#"{"id":"1","startTime":"09:00","endTime":"10:00"}"#);

        let lunch: Period = serde_json::from_str(
            r#"{"id":"lunch","startTime":"12:00","endTime":"13:00","isBreak":true}"#,
        )
        .unwrap();
        assert!(lunch.is_break);

        let plain: Period =
            serde_json::from_str(r#"{"id":"2","startTime":"10:00","endTime":"11:00"}"#).unwrap();
        assert!(!plain.is_break);
    }
}
