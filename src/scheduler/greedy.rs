//! First-fit greedy timetable generator.
//!
//! # Algorithm
//!
//! 1. Seed a remaining-hours counter per course from `hours_per_week`.
//! 2. Walk the grid day by day (template order), period by period
//!    (template order), skipping break periods.
//! 3. At each open cell, scan courses in collection order and place the
//!    first one whose owner exists, is free at the cell, and is below
//!    the daily cap. At most one slot per cell.
//! 4. Courses still holding hours after the walk are left under-scheduled.
//!
//! There is no backtracking and no priority key: the first-listed course
//! wins every contested cell, so a course listed early can starve a later
//! one that shares its faculty.
//!
//! # Complexity
//! O(d * p * c) where d=working days, p=periods, c=courses.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::availability::AvailabilityIndex;
use crate::models::{Course, Faculty, GeneratedTimetable, Template, TimeSlot};

/// Slots and leftover demand from one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreedyRun {
    /// Placed slots, in placement order.
    pub slots: Vec<TimeSlot>,
    /// Hours still unplaced per course id.
    pub remaining_hours: HashMap<String, u32>,
}

impl GreedyRun {
    /// Hours still unplaced for a course, if it took part in the run.
    pub fn remaining_for(&self, course_id: &str) -> Option<u32> {
        self.remaining_hours.get(course_id).copied()
    }

    /// Total hours left unplaced across all courses.
    pub fn unmet_hours(&self) -> u32 {
        self.remaining_hours.values().sum()
    }

    /// Courses with hours left, sorted by id.
    pub fn under_scheduled(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .remaining_hours
            .iter()
            .filter(|&(_, &left)| left > 0)
            .map(|(id, _)| id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Wraps the placed slots into a timetable stamped now.
    pub fn into_timetable(
        self,
        id: impl Into<String>,
        template_id: impl Into<String>,
    ) -> GeneratedTimetable {
        GeneratedTimetable::new(id, template_id, self.slots)
    }
}

/// Deterministic first-fit scheduler.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Course, Faculty, Period, Template};
/// use u_timetable::scheduler::GreedyScheduler;
///
/// let template = Template::new("T1", "Mornings")
///     .with_day("Monday")
///     .with_period(Period::new("P1", "09:00", "10:00"))
///     .with_period(Period::break_period("P2", "10:00", "11:00"));
/// let faculty = vec![
///     Faculty::new("Fa", "Ada")
///         .with_max_hours_per_day(2)
///         .with_free_slot("Monday", "P1"),
/// ];
/// let courses = vec![Course::new("Ca", "Fa").with_hours_per_week(1)];
///
/// let timetable = GreedyScheduler::new().generate(&template, &courses, &faculty);
/// assert_eq!(timetable.slot_count(), 1);
/// assert_eq!(timetable.slots[0].period_id, "P1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler;

impl GreedyScheduler {
    /// Creates a scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Runs one generation pass and returns the placed slots with the
    /// leftover demand.
    ///
    /// Empty course or faculty collections yield an empty run.
    pub fn schedule(
        &self,
        template: &Template,
        courses: &[Course],
        faculty: &[Faculty],
    ) -> GreedyRun {
        let mut remaining: HashMap<&str, u32> = courses
            .iter()
            .map(|c| (c.id.as_str(), c.hours_per_week))
            .collect();
        let mut index = AvailabilityIndex::new(faculty);
        let mut occupied: HashSet<(&str, &str)> = HashSet::new();
        let mut slots = Vec::new();

        for day in &template.working_days {
            for period in template.teaching_periods() {
                // An occupied cell blocks every course, including one already
                // taught here or one whose faculty is already here.
                if occupied.contains(&(day.as_str(), period.id.as_str())) {
                    continue;
                }

                for course in courses {
                    let left = remaining.get(course.id.as_str()).copied().unwrap_or(0);
                    if left == 0 {
                        continue;
                    }
                    let Some(owner) = index.faculty(&course.faculty_id) else {
                        continue;
                    };
                    if !index.is_free(&owner.id, day, &period.id) || !index.has_capacity(owner, day)
                    {
                        continue;
                    }

                    slots.push(TimeSlot::new(day, &period.id, &course.id, &owner.id));
                    index.record(&owner.id, day);
                    occupied.insert((day.as_str(), period.id.as_str()));
                    remaining.insert(course.id.as_str(), left - 1);
                    break;
                }
            }
        }

        let run = GreedyRun {
            slots,
            remaining_hours: remaining
                .into_iter()
                .map(|(id, left)| (id.to_string(), left))
                .collect(),
        };
        for id in run.under_scheduled() {
            log::debug!(
                "course '{}' left with {} unplaced hour(s) on template '{}'",
                id,
                run.remaining_for(id).unwrap_or(0),
                template.id
            );
        }
        run
    }

    /// Runs one generation pass and wraps the result in a new timetable
    /// with a random id and the current timestamp.
    pub fn generate(
        &self,
        template: &Template,
        courses: &[Course],
        faculty: &[Faculty],
    ) -> GeneratedTimetable {
        self.schedule(template, courses, faculty)
            .into_timetable(Uuid::new_v4().to_string(), &template.id)
    }
}
