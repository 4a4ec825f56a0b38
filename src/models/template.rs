//! Template model and built-in presets.
//!
//! A template is the reusable shape of a week: an ordered list of
//! working-day labels (rows) and an ordered list of periods (columns).
//! Timetables are generated against a template and reference it by id.
//!
//! # Presets
//!
//! Three presets ship with every store and cannot be deleted:
//!
//! | Id | Days | Teaching periods |
//! |----|------|------------------|
//! | `school-template` | Mon-Sat | 7 |
//! | `college-template` | Mon-Fri | 7 |
//! | `engineering-template` | Mon-Fri | 8 |
//!
//! Each has a single `lunch` break column.

use serde::{Deserialize, Serialize};

use super::Period;

/// Reserved id of the School preset.
pub const SCHOOL_TEMPLATE_ID: &str = "school-template";
/// Reserved id of the College preset.
pub const COLLEGE_TEMPLATE_ID: &str = "college-template";
/// Reserved id of the Engineering preset.
pub const ENGINEERING_TEMPLATE_ID: &str = "engineering-template";

/// All reserved preset ids, in seeding order.
pub const PRESET_TEMPLATE_IDS: [&str; 3] = [
    SCHOOL_TEMPLATE_ID,
    COLLEGE_TEMPLATE_ID,
    ENGINEERING_TEMPLATE_ID,
];

const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// The weekly grid a timetable is laid out on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Unique template identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Working-day labels in row order.
    pub working_days: Vec<String>,
    /// Periods in column order.
    pub periods: Vec<Period>,
}

impl Template {
    /// Creates an empty template.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            working_days: Vec::new(),
            periods: Vec::new(),
        }
    }

    /// Appends a working day.
    pub fn with_day(mut self, day: impl Into<String>) -> Self {
        self.working_days.push(day.into());
        self
    }

    /// Replaces the working days.
    pub fn with_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.working_days = days.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a period.
    pub fn with_period(mut self, period: Period) -> Self {
        self.periods.push(period);
        self
    }

    /// Replaces the periods.
    pub fn with_periods(mut self, periods: Vec<Period>) -> Self {
        self.periods = periods;
        self
    }

    /// Finds a period by id.
    pub fn period(&self, period_id: &str) -> Option<&Period> {
        self.periods.iter().find(|p| p.id == period_id)
    }

    /// Whether `period_id` names a break period of this template.
    pub fn is_break(&self, period_id: &str) -> bool {
        self.period(period_id).is_some_and(|p| p.is_break)
    }

    /// Periods that can receive slots, in column order.
    pub fn teaching_periods(&self) -> impl Iterator<Item = &Period> {
        self.periods.iter().filter(|p| p.is_teaching())
    }

    /// Number of (day, period) cells that can receive slots.
    pub fn teaching_cell_count(&self) -> usize {
        self.working_days.len() * self.teaching_periods().count()
    }

    /// Whether this template is one of the built-in presets.
    pub fn is_preset(&self) -> bool {
        is_preset_id(&self.id)
    }

    /// The School preset (Mon-Sat, 50-minute periods).
    pub fn school() -> Self {
        Self::new(SCHOOL_TEMPLATE_ID, "School Template")
            .with_days(WEEKDAYS.iter().copied().chain(["Saturday"]))
            .with_periods(vec![
                Period::new("1", "08:30", "09:20"),
                Period::new("2", "09:20", "10:10"),
                Period::new("3", "10:30", "11:20"),
                Period::new("4", "11:20", "12:10"),
                Period::break_period("lunch", "12:10", "13:00"),
                Period::new("5", "13:00", "13:50"),
                Period::new("6", "13:50", "14:40"),
                Period::new("7", "14:50", "15:40"),
            ])
    }

    /// The College preset (Mon-Fri, hour-long periods).
    pub fn college() -> Self {
        Self::new(COLLEGE_TEMPLATE_ID, "College Template")
            .with_days(WEEKDAYS)
            .with_periods(college_periods())
    }

    /// The Engineering preset (Mon-Fri, eight teaching periods).
    pub fn engineering() -> Self {
        Self::new(ENGINEERING_TEMPLATE_ID, "Engineering Template")
            .with_days(WEEKDAYS)
            .with_periods(vec![
                Period::new("1", "08:30", "09:30"),
                Period::new("2", "09:30", "10:30"),
                Period::new("3", "10:45", "11:45"),
                Period::new("4", "11:45", "12:45"),
                Period::break_period("lunch", "12:45", "13:30"),
                Period::new("5", "13:30", "14:30"),
                Period::new("6", "14:30", "15:30"),
                Period::new("7", "15:45", "16:45"),
                Period::new("8", "16:45", "17:45"),
            ])
    }

    /// All presets, in seeding order.
    pub fn presets() -> Vec<Self> {
        vec![Self::school(), Self::college(), Self::engineering()]
    }

    /// Looks up a preset by its reserved id.
    pub fn preset(id: &str) -> Option<Self> {
        match id {
            SCHOOL_TEMPLATE_ID => Some(Self::school()),
            COLLEGE_TEMPLATE_ID => Some(Self::college()),
            ENGINEERING_TEMPLATE_ID => Some(Self::engineering()),
            _ => None,
        }
    }
}

/// Whether `id` is reserved for a built-in preset.
pub fn is_preset_id(id: &str) -> bool {
    PRESET_TEMPLATE_IDS.contains(&id)
}

/// Period layout of the College preset. Also the default layout for
/// templates created from just a name and a day list.
pub fn college_periods() -> Vec<Period> {
    vec![
        Period::new("1", "09:00", "10:00"),
        Period::new("2", "10:00", "11:00"),
        Period::new("3", "11:15", "12:15"),
        Period::new("4", "12:15", "13:15"),
        Period::break_period("lunch", "13:15", "14:00"),
        Period::new("5", "14:00", "15:00"),
        Period::new("6", "15:00", "16:00"),
        Period::new("7", "16:15", "17:15"),
    ]
}
