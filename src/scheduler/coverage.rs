//! Demand coverage of a timetable.
//!
//! Under-scheduling is not an error: the greedy pass silently leaves
//! demand unplaced when it runs out of free, uncapped cells. This report
//! compares placed slots against each course's weekly demand so callers
//! can surface the shortfall.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Placed | Slots in the timetable for the course |
//! | Shortfall | max(0, required - placed) |
//! | Demand rate | min(placed, required) summed / required summed |
//! | Grid fill | slots / teaching cells of the template |

use crate::models::{Course, GeneratedTimetable, Template};

/// Placed vs. required hours for one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCoverage {
    /// Course id.
    pub course_id: String,
    /// Weekly demand.
    pub required: u32,
    /// Slots in the timetable.
    pub placed: u32,
}

impl CourseCoverage {
    /// Hours still missing. Zero when demand is met or exceeded.
    pub fn shortfall(&self) -> u32 {
        self.required.saturating_sub(self.placed)
    }

    /// Whether weekly demand is met.
    pub fn is_satisfied(&self) -> bool {
        self.placed >= self.required
    }
}

/// Per-course coverage for a timetable.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    /// One entry per course, in collection order.
    pub courses: Vec<CourseCoverage>,
    /// Fraction of weekly demand placed (0.0..1.0). 1.0 with no demand.
    pub demand_rate: f64,
}

impl CoverageReport {
    /// Computes coverage of `courses` by `timetable`.
    ///
    /// Slots of courses not in `courses` are ignored.
    pub fn calculate(timetable: &GeneratedTimetable, courses: &[Course]) -> Self {
        let placed = timetable.placed_hours();
        let entries: Vec<CourseCoverage> = courses
            .iter()
            .map(|c| CourseCoverage {
                course_id: c.id.clone(),
                required: c.hours_per_week,
                placed: placed.get(c.id.as_str()).copied().unwrap_or(0),
            })
            .collect();

        let required: u64 = entries.iter().map(|e| u64::from(e.required)).sum();
        let met: u64 = entries
            .iter()
            .map(|e| u64::from(e.placed.min(e.required)))
            .sum();
        let demand_rate = if required == 0 {
            1.0
        } else {
            met as f64 / required as f64
        };

        Self {
            courses: entries,
            demand_rate,
        }
    }

    /// Courses whose demand is not met.
    pub fn under_scheduled(&self) -> Vec<&CourseCoverage> {
        self.courses.iter().filter(|c| !c.is_satisfied()).collect()
    }

    /// Whether every course's demand is met.
    pub fn is_complete(&self) -> bool {
        self.courses.iter().all(CourseCoverage::is_satisfied)
    }

    /// Total missing hours.
    pub fn total_shortfall(&self) -> u32 {
        self.courses.iter().map(CourseCoverage::shortfall).sum()
    }

    /// Coverage entry for a course.
    pub fn for_course(&self, course_id: &str) -> Option<&CourseCoverage> {
        self.courses.iter().find(|c| c.course_id == course_id)
    }
}

/// Fraction of the template's teaching cells that hold a slot.
///
/// Returns `None` if the template has no teaching cells.
pub fn grid_fill(timetable: &GeneratedTimetable, template: &Template) -> Option<f64> {
    let cells = template.teaching_cell_count();
    if cells == 0 {
        return None;
    }
    Some(timetable.slot_count() as f64 / cells as f64)
}
