//! Tabular projection of a timetable.
//!
//! Rows are working days, columns are periods. The grid carries no
//! scheduling logic; it is what a document exporter prints.
//!
//! | Day/Time | 09:00-10:00 | 10:00-11:00 | ... |
//! |----------|-------------|-------------|-----|
//! | Monday | Algebra\nAda | - | ... |

use std::collections::HashMap;
use std::fmt;

use crate::models::{Course, Faculty, GeneratedTimetable, Template, TimeSlot};

/// Text of a cell with no slot.
pub const EMPTY_CELL: &str = "-";
/// Text of an unoccupied break cell.
pub const BREAK_CELL: &str = "Break";
/// Header of the day column.
pub const DAY_HEADER: &str = "Day/Time";

/// One cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    /// A scheduled course and its faculty.
    Assigned {
        /// Course name (the id if the course no longer exists).
        course_name: String,
        /// Faculty name (the id if the faculty no longer exists).
        faculty_name: String,
    },
    /// A teaching cell with no slot.
    Empty,
    /// A break cell.
    Break,
}

impl GridCell {
    /// Printable cell text: `"<course>\n<faculty>"`, `-`, or `Break`.
    pub fn text(&self) -> String {
        match self {
            GridCell::Assigned {
                course_name,
                faculty_name,
            } => format!("{course_name}\n{faculty_name}"),
            GridCell::Empty => EMPTY_CELL.to_string(),
            GridCell::Break => BREAK_CELL.to_string(),
        }
    }
}

/// One working day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    /// Working-day label.
    pub day: String,
    /// One cell per period, in column order.
    pub cells: Vec<GridCell>,
}

/// A timetable laid out on its template grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableGrid {
    /// `"Timetable - <template name>"`.
    pub title: String,
    /// `"Generated on: <date>"`.
    pub subtitle: String,
    /// `Day/Time` followed by `"start-end"` per period.
    pub headers: Vec<String>,
    /// Period ids in column order.
    pub period_ids: Vec<String>,
    /// One row per working day.
    pub rows: Vec<GridRow>,
}

impl TimetableGrid {
    /// Projects `timetable` onto `template`, resolving names from the
    /// current course and faculty collections.
    pub fn build(
        timetable: &GeneratedTimetable,
        template: &Template,
        courses: &[Course],
        faculty: &[Faculty],
    ) -> Self {
        let mut slots: HashMap<(&str, &str), &TimeSlot> = HashMap::new();
        for s in &timetable.slots {
            slots.entry((s.day.as_str(), s.period_id.as_str())).or_insert(s);
        }
        let course_names: HashMap<&str, &str> = courses
            .iter()
            .map(|c| (c.id.as_str(), c.name.as_str()))
            .collect();
        let faculty_names: HashMap<&str, &str> = faculty
            .iter()
            .map(|f| (f.id.as_str(), f.name.as_str()))
            .collect();

        let rows = template
            .working_days
            .iter()
            .map(|day| GridRow {
                day: day.clone(),
                cells: template
                    .periods
                    .iter()
                    .map(|p| match slots.get(&(day.as_str(), p.id.as_str())) {
                        Some(slot) => GridCell::Assigned {
                            course_name: course_names
                                .get(slot.course_id.as_str())
                                .copied()
                                .unwrap_or(&slot.course_id)
                                .to_string(),
                            faculty_name: faculty_names
                                .get(slot.faculty_id.as_str())
                                .copied()
                                .unwrap_or(&slot.faculty_id)
                                .to_string(),
                        },
                        None if p.is_break => GridCell::Break,
                        None => GridCell::Empty,
                    })
                    .collect(),
            })
            .collect();

        let headers = std::iter::once(DAY_HEADER.to_string())
            .chain(template.periods.iter().map(|p| p.label()))
            .collect();

        Self {
            title: format!("Timetable - {}", template.name),
            subtitle: format!("Generated on: {}", timetable.created_at.format("%Y-%m-%d")),
            headers,
            period_ids: template.periods.iter().map(|p| p.id.clone()).collect(),
            rows,
        }
    }

    /// Cell at (day, period). First row wins for repeated day labels.
    pub fn cell(&self, day: &str, period_id: &str) -> Option<&GridCell> {
        let col = self.period_ids.iter().position(|id| id == period_id)?;
        self.rows
            .iter()
            .find(|r| r.day == day)
            .and_then(|r| r.cells.get(col))
    }

    /// Printable text of the cell at (day, period).
    pub fn cell_text(&self, day: &str, period_id: &str) -> Option<String> {
        self.cell(day, period_id).map(GridCell::text)
    }

    /// Body rows as text: day label followed by cell texts.
    pub fn body(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                std::iter::once(r.day.clone())
                    .chain(r.cells.iter().map(GridCell::text))
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for TimetableGrid {
    /// Plain-text table; multi-line cells are joined with `" / "`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.subtitle)?;
        writeln!(f, "| {} |", self.headers.join(" | "))?;
        for row in self.body() {
            let cells: Vec<String> = row.iter().map(|c| c.replace('\n', " / ")).collect();
            writeln!(f, "| {} |", cells.join(" | "))?;
        }
        Ok(())
    }
}

/// Lower-cased `name` with each whitespace run replaced by `-`.
pub fn file_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    slug
}

/// Download file name for a printed timetable, `timetable-<slug>.pdf`.
pub fn document_file_name(template: &Template) -> String {
    format!("timetable-{}.pdf", file_slug(&template.name))
}
