//! Timetabling domain models.
//!
//! Plain records with identity and relationships. Ids are strings;
//! relationships are by id (a course names its faculty, a time slot
//! names its course and faculty, a timetable names its template).
//!
//! # Relationships
//!
//! | Entity | References | Cleanup on delete |
//! |--------|-----------|-------------------|
//! | Course | Faculty | removed with its faculty |
//! | TimeSlot | Course, Faculty | stripped from every timetable |
//! | GeneratedTimetable | Template | removed with its template |

mod course;
mod faculty;
mod period;
mod template;
mod timetable;

pub use course::Course;
pub use faculty::{Faculty, FreeSlot};
pub use period::Period;
pub use template::{
    college_periods, is_preset_id, Template, COLLEGE_TEMPLATE_ID, ENGINEERING_TEMPLATE_ID,
    PRESET_TEMPLATE_IDS, SCHOOL_TEMPLATE_ID,
};
pub use timetable::{GeneratedTimetable, TimeSlot, Violation, ViolationType};
