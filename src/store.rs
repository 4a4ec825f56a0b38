//! In-memory entity store.
//!
//! `TimetableStore` owns the four collections (templates, faculty,
//! courses, generated timetables) and is the only place they change.
//! Every operation runs to completion before returning; a failed
//! operation leaves all collections as they were.
//!
//! # Referential cleanup
//!
//! | Delete | Also removes |
//! |--------|--------------|
//! | Faculty | its courses; its slots in every timetable |
//! | Course | its slots in every timetable |
//! | Template | every timetable generated against it |
//!
//! Presets cannot be deleted.
//!
//! # Snapshots
//!
//! The store is `Clone`; a clone is an independent snapshot that later
//! operations on the source store do not affect.

use serde::Deserialize;

use crate::config::{IdGenerator, StoreConfig};
use crate::error::{EntityKind, Result, TimetableError};
use crate::models::{
    college_periods, Course, Faculty, GeneratedTimetable, Period, Template, Violation,
};
use crate::render::{file_slug, TimetableGrid};
use crate::scheduler::{patch_slot, CoverageReport, GreedyScheduler, PatchOutcome};
use crate::validation::{
    audit_timetable, validate_course, validate_faculty, validate_template, ValidationError,
    ValidationErrorKind,
};

/// Template file contents. Any `id` in the file is ignored on import.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TemplateDocument {
    name: String,
    working_days: Vec<String>,
    periods: Vec<Period>,
}

/// The application state: all entities plus the generated timetables.
///
/// # Example
///
/// ```
/// use u_timetable::config::StoreConfig;
/// use u_timetable::models::COLLEGE_TEMPLATE_ID;
/// use u_timetable::store::TimetableStore;
///
/// let mut store = TimetableStore::with_config(StoreConfig::new().with_sequential_ids("id"));
/// let ada = store.add_faculty("Ada", "Mathematics", 2).unwrap();
/// store.toggle_free_slot(&ada, "Monday", "1");
/// store.add_course("Algebra", &ada, 1).unwrap();
///
/// let timetable = store.generate_timetable(COLLEGE_TEMPLATE_ID).unwrap();
/// assert_eq!(timetable.slot_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TimetableStore {
    templates: Vec<Template>,
    faculty: Vec<Faculty>,
    courses: Vec<Course>,
    generated_timetables: Vec<GeneratedTimetable>,
    scheduler: GreedyScheduler,
    ids: IdGenerator,
}

impl Default for TimetableStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TimetableStore {
    /// Creates a store with the default configuration (presets seeded, UUID ids).
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates a store from a configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        let templates = if config.seed_presets {
            Template::presets()
        } else {
            Vec::new()
        };
        Self {
            templates,
            faculty: Vec::new(),
            courses: Vec::new(),
            generated_timetables: Vec::new(),
            scheduler: GreedyScheduler::new(),
            ids: IdGenerator::new(config.id_strategy),
        }
    }

    // ---- collections ----

    /// All templates, presets first.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// All faculty members.
    pub fn faculty(&self) -> &[Faculty] {
        &self.faculty
    }

    /// All courses, in scheduling priority order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// All generated timetables, oldest first.
    pub fn generated_timetables(&self) -> &[GeneratedTimetable] {
        &self.generated_timetables
    }

    /// Finds a template by id.
    pub fn template(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Finds a faculty member by id.
    pub fn faculty_member(&self, id: &str) -> Option<&Faculty> {
        self.faculty.iter().find(|f| f.id == id)
    }

    /// Finds a course by id.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Finds a generated timetable by id.
    pub fn timetable(&self, id: &str) -> Option<&GeneratedTimetable> {
        self.generated_timetables.iter().find(|t| t.id == id)
    }

    /// Timetables generated against a template, oldest first.
    pub fn timetables_for_template(&self, template_id: &str) -> Vec<&GeneratedTimetable> {
        self.generated_timetables
            .iter()
            .filter(|t| t.template_id == template_id)
            .collect()
    }

    // ---- templates ----

    /// Creates a template with the College period layout.
    pub fn add_template<I, S>(&mut self, name: impl Into<String>, working_days: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let template = Template::new(String::new(), name)
            .with_days(working_days)
            .with_periods(college_periods());
        self.insert_template(template)
    }

    /// Stores a caller-built template under a fresh id.
    pub fn insert_template(&mut self, mut template: Template) -> Result<String> {
        if let Err(errors) = validate_template(&template) {
            log::warn!("template '{}' rejected: {} problem(s)", template.name, errors.len());
            return Err(errors.into());
        }
        template.id = self.ids.next_id();
        let id = template.id.clone();
        self.templates.push(template);
        Ok(id)
    }

    /// Copies a preset under a fresh id, named `"Custom <preset name>"`.
    ///
    /// Returns `None` if `preset_id` is not a preset.
    pub fn use_preset_template(&mut self, preset_id: &str) -> Option<String> {
        let Some(mut template) = Template::preset(preset_id) else {
            log::debug!("unknown preset '{preset_id}'");
            return None;
        };
        template.id = self.ids.next_id();
        template.name = format!("Custom {}", template.name);
        let id = template.id.clone();
        self.templates.push(template);
        Some(id)
    }

    /// Deletes a template and every timetable generated against it.
    ///
    /// Returns `Ok(false)` if no such template exists.
    ///
    /// # Errors
    /// `Validation` if the template is a preset.
    pub fn delete_template(&mut self, id: &str) -> Result<bool> {
        if crate::models::is_preset_id(id) {
            log::warn!("refusing to delete preset template '{id}'");
            return Err(vec![ValidationError::new(
                ValidationErrorKind::ProtectedTemplate,
                format!("Preset template '{id}' cannot be deleted"),
            )]
            .into());
        }

        let before = self.templates.len();
        self.templates.retain(|t| t.id != id);
        if self.templates.len() == before {
            return Ok(false);
        }

        let timetables = self.generated_timetables.len();
        self.generated_timetables.retain(|t| t.template_id != id);
        log::info!(
            "deleted template '{}' and {} timetable(s)",
            id,
            timetables - self.generated_timetables.len()
        );
        Ok(true)
    }

    /// Imports a template from its JSON file form under a fresh id.
    ///
    /// # Errors
    /// `InvalidFormat` for malformed JSON or a missing field,
    /// `Validation` for an empty grid or duplicate period ids.
    pub fn import_template(&mut self, json: &str) -> Result<String> {
        let document: TemplateDocument = serde_json::from_str(json).map_err(|e| {
            log::warn!("template import failed: {e}");
            TimetableError::from(e)
        })?;
        let template = Template::new(String::new(), document.name)
            .with_days(document.working_days)
            .with_periods(document.periods);
        let id = self.insert_template(template)?;
        log::info!("imported template '{id}'");
        Ok(id)
    }

    /// Serializes a template to its pretty-printed JSON file form.
    ///
    /// # Errors
    /// `NotFound` if no such template exists.
    pub fn export_template(&self, id: &str) -> Result<String> {
        let template = self
            .template(id)
            .ok_or_else(|| TimetableError::not_found(EntityKind::Template, id))?;
        let json = serde_json::to_string_pretty(template)?;
        log::info!("exported template '{id}'");
        Ok(json)
    }

    /// Download file name for a template export, `template-<slug>.json`.
    pub fn template_file_name(&self, id: &str) -> Option<String> {
        self.template(id)
            .map(|t| format!("template-{}.json", file_slug(&t.name)))
    }

    // ---- faculty ----

    /// Adds a faculty member with no free slots.
    ///
    /// # Errors
    /// `Validation` if `max_hours_per_day` is zero.
    pub fn add_faculty(
        &mut self,
        name: impl Into<String>,
        department: impl Into<String>,
        max_hours_per_day: u32,
    ) -> Result<String> {
        let id = self.ids.next_id();
        let faculty = Faculty::new(id.clone(), name)
            .with_department(department)
            .with_max_hours_per_day(max_hours_per_day);
        let errors = validate_faculty(&faculty);
        if !errors.is_empty() {
            return Err(errors.into());
        }
        self.faculty.push(faculty);
        Ok(id)
    }

    /// Deletes a faculty member, their courses, and their slots in every
    /// timetable.
    ///
    /// Returns `false` if no such faculty member exists.
    pub fn delete_faculty(&mut self, id: &str) -> bool {
        let before = self.faculty.len();
        self.faculty.retain(|f| f.id != id);
        if self.faculty.len() == before {
            return false;
        }

        let courses = self.courses.len();
        self.courses.retain(|c| c.faculty_id != id);
        let slots: usize = self
            .generated_timetables
            .iter_mut()
            .map(|t| t.strip_faculty(id))
            .sum();
        log::info!(
            "deleted faculty '{}', {} course(s), {} slot(s)",
            id,
            courses - self.courses.len(),
            slots
        );
        true
    }

    /// Flips a (day, period) pair in a faculty member's free set.
    ///
    /// Returns the new membership, or `None` if no such faculty member exists.
    pub fn toggle_free_slot(
        &mut self,
        faculty_id: &str,
        day: &str,
        period_id: &str,
    ) -> Option<bool> {
        let faculty = self.faculty.iter_mut().find(|f| f.id == faculty_id)?;
        Some(faculty.toggle_free_slot(day, period_id))
    }

    // ---- courses ----

    /// Adds a course owned by an existing faculty member.
    ///
    /// New courses go to the end of the collection, so they get the
    /// lowest priority in generation.
    ///
    /// # Errors
    /// `Validation` if `hours_per_week` is zero or the faculty does not exist.
    pub fn add_course(
        &mut self,
        name: impl Into<String>,
        faculty_id: impl Into<String>,
        hours_per_week: u32,
    ) -> Result<String> {
        let id = self.ids.next_id();
        let course = Course::new(id.clone(), faculty_id)
            .with_name(name)
            .with_hours_per_week(hours_per_week);
        let errors = validate_course(&course, &self.faculty);
        if !errors.is_empty() {
            return Err(errors.into());
        }
        self.courses.push(course);
        Ok(id)
    }

    /// Deletes a course and its slots in every timetable.
    ///
    /// Returns `false` if no such course exists.
    pub fn delete_course(&mut self, id: &str) -> bool {
        let before = self.courses.len();
        self.courses.retain(|c| c.id != id);
        if self.courses.len() == before {
            return false;
        }

        let slots: usize = self
            .generated_timetables
            .iter_mut()
            .map(|t| t.strip_course(id))
            .sum();
        log::info!("deleted course '{id}' and {slots} slot(s)");
        true
    }

    // ---- timetables ----

    /// Runs one generation pass against a template and appends the result.
    ///
    /// Earlier timetables are never touched. Returns `None` if no such
    /// template exists.
    pub fn generate_timetable(&mut self, template_id: &str) -> Option<&GeneratedTimetable> {
        let Some(template) = self.templates.iter().find(|t| t.id == template_id) else {
            log::debug!("generation skipped: unknown template '{template_id}'");
            return None;
        };

        let run = self.scheduler.schedule(template, &self.courses, &self.faculty);
        let under_scheduled = run.under_scheduled().len();
        let timetable = run.into_timetable(self.ids.next_id(), template_id);
        log::info!(
            "generated timetable '{}' for template '{}': {} slot(s), {} course(s) under-scheduled",
            timetable.id,
            template_id,
            timetable.slot_count(),
            under_scheduled
        );

        self.generated_timetables.push(timetable);
        self.generated_timetables.last()
    }

    /// Retargets one slot of a timetable to another course.
    ///
    /// Unknown timetable or empty cell: `Ok(Unchanged)`.
    ///
    /// # Errors
    /// `NotFound` if the cell is occupied but `course_id` does not exist.
    pub fn patch_slot(
        &mut self,
        timetable_id: &str,
        day: &str,
        period_id: &str,
        course_id: &str,
    ) -> Result<PatchOutcome> {
        let Some(timetable) = self
            .generated_timetables
            .iter_mut()
            .find(|t| t.id == timetable_id)
        else {
            log::debug!("patch skipped: unknown timetable '{timetable_id}'");
            return Ok(PatchOutcome::Unchanged);
        };

        let outcome = patch_slot(timetable, day, period_id, course_id, &self.courses)?;
        if let PatchOutcome::Retargeted { previous } = &outcome {
            log::debug!(
                "patched {}/{} in '{}': '{}' -> '{}'",
                day,
                period_id,
                timetable_id,
                previous.course_id,
                course_id
            );
        }
        Ok(outcome)
    }

    /// Coverage of current course demand by a timetable.
    pub fn coverage(&self, timetable_id: &str) -> Option<CoverageReport> {
        self.timetable(timetable_id)
            .map(|t| CoverageReport::calculate(t, &self.courses))
    }

    /// Invariant audit of a timetable against its template and the
    /// current entities.
    ///
    /// Returns `None` if the timetable or its template is missing.
    pub fn audit(&self, timetable_id: &str) -> Option<Vec<Violation>> {
        let timetable = self.timetable(timetable_id)?;
        let template = self.template(&timetable.template_id)?;
        Some(audit_timetable(timetable, template, &self.courses, &self.faculty))
    }

    /// Tabular projection of a timetable for document export.
    ///
    /// Returns `None` if the timetable or its template is missing.
    pub fn render(&self, timetable_id: &str) -> Option<TimetableGrid> {
        let timetable = self.timetable(timetable_id)?;
        let template = self.template(&timetable.template_id)?;
        Some(TimetableGrid::build(timetable, template, &self.courses, &self.faculty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        TimeSlot, COLLEGE_TEMPLATE_ID, ENGINEERING_TEMPLATE_ID, SCHOOL_TEMPLATE_ID,
    };

    fn store() -> TimetableStore {
        TimetableStore::with_config(StoreConfig::new().with_sequential_ids("id"))
    }

    /// One-day template: P1 teaching, P2 break.
    fn store_with_monday_template() -> (TimetableStore, String) {
        let mut s = store();
        let template = Template::new("", "Monday")
            .with_day("Monday")
            .with_period(Period::new("P1", "09:00", "10:00"))
            .with_period(Period::break_period("P2", "10:00", "11:00"));
        let id = s.insert_template(template).unwrap();
        (s, id)
    }

    #[test]
    fn test_presets_seeded() {
        let s = TimetableStore::new();
        let ids: Vec<_> = s.templates().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![SCHOOL_TEMPLATE_ID, COLLEGE_TEMPLATE_ID, ENGINEERING_TEMPLATE_ID]
        );

        let bare = TimetableStore::with_config(StoreConfig::new().with_seed_presets(false));
        assert!(bare.templates().is_empty());
    }

    #[test]
    fn test_presets_not_deletable() {
        let mut s = store();
        let err = s.delete_template(SCHOOL_TEMPLATE_ID).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::ProtectedTemplate
        );
        assert_eq!(s.templates().len(), 3);
    }

    #[test]
    fn test_use_preset_template() {
        let mut s = store();
        let id = s.use_preset_template(ENGINEERING_TEMPLATE_ID).unwrap();
        let copy = s.template(&id).unwrap();
        assert_eq!(copy.name, "Custom Engineering Template");
        assert_eq!(copy.periods, Template::engineering().periods);
        assert!(!copy.is_preset());

        assert!(s.use_preset_template("nope").is_none());
        assert_eq!(s.templates().len(), 4);
    }

    #[test]
    fn test_add_template_uses_college_layout() {
        let mut s = store();
        let id = s.add_template("Weekend", ["Saturday", "Sunday"]).unwrap();
        let t = s.template(&id).unwrap();
        assert_eq!(t.working_days, vec!["Saturday", "Sunday"]);
        assert_eq!(t.periods, college_periods());

        let empty: [&str; 0] = [];
        assert!(s.add_template("No days", empty).unwrap_err().is_validation());
    }

    #[test]
    fn test_delete_template_removes_timetables() {
        let (mut s, tid) = store_with_monday_template();
        s.generate_timetable(&tid).unwrap();
        s.generate_timetable(COLLEGE_TEMPLATE_ID).unwrap();
        assert_eq!(s.generated_timetables().len(), 2);

        assert!(s.delete_template(&tid).unwrap());
        assert!(s.template(&tid).is_none());
        assert_eq!(s.generated_timetables().len(), 1);
        assert_eq!(s.generated_timetables()[0].template_id, COLLEGE_TEMPLATE_ID);

        assert!(!s.delete_template(&tid).unwrap());
    }

    #[test]
    fn test_add_faculty_and_course_validation() {
        let mut s = store();
        let err = s.add_faculty("Zero", "Math", 0).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.validation_errors()[0].message,
            "Faculty 'id-1' has a daily cap of zero hours"
        );
        assert!(s.faculty().is_empty());

        let f = s.add_faculty("Ada", "Math", 3).unwrap();
        assert_eq!(s.faculty_member(&f).unwrap().department, "Math");
        assert!(s.faculty_member(&f).unwrap().free_slots.is_empty());

        assert!(s.add_course("Nothing", &f, 0).unwrap_err().is_validation());
        let err = s.add_course("Orphan", "ghost", 2).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::InvalidFacultyReference
        );
        assert!(!err.validation_errors()[0].message.contains("''"));
        assert!(s.courses().is_empty());

        let c = s.add_course("Algebra", &f, 2).unwrap();
        assert_eq!(s.course(&c).unwrap().faculty_id, f);
    }

    #[test]
    fn test_toggle_free_slot() {
        let mut s = store();
        let f = s.add_faculty("Ada", "Math", 3).unwrap();
        assert_eq!(s.toggle_free_slot(&f, "Monday", "1"), Some(true));
        assert_eq!(s.toggle_free_slot(&f, "Monday", "1"), Some(false));
        assert_eq!(s.toggle_free_slot("ghost", "Monday", "1"), None);
    }

    #[test]
    fn test_generate_single_slot_scenario() {
        let (mut s, tid) = store_with_monday_template();
        let fa = s.add_faculty("Fa", "Dept", 2).unwrap();
        s.toggle_free_slot(&fa, "Monday", "P1");
        let ca = s.add_course("Ca", &fa, 1).unwrap();

        let tt = s.generate_timetable(&tid).unwrap();
        assert_eq!(tt.template_id, tid);
        assert_eq!(tt.slots, vec![TimeSlot::new("Monday", "P1", &ca, &fa)]);
    }

    #[test]
    fn test_generate_unknown_template_is_noop() {
        let mut s = store();
        assert!(s.generate_timetable("ghost").is_none());
        assert!(s.generated_timetables().is_empty());
    }

    #[test]
    fn test_generation_appends() {
        let (mut s, tid) = store_with_monday_template();
        let fa = s.add_faculty("Fa", "Dept", 2).unwrap();
        s.toggle_free_slot(&fa, "Monday", "P1");
        s.add_course("Ca", &fa, 1).unwrap();

        let first = s.generate_timetable(&tid).unwrap().clone();
        let second = s.generate_timetable(&tid).unwrap().clone();
        assert_ne!(first.id, second.id);
        assert_eq!(first.slots, second.slots);
        assert_eq!(s.timetables_for_template(&tid).len(), 2);
        assert_eq!(s.timetable(&first.id), Some(&first));
    }

    #[test]
    fn test_delete_faculty_cascades() {
        let (mut s, tid) = store_with_monday_template();
        let fa = s.add_faculty("Fa", "Dept", 2).unwrap();
        let fb = s.add_faculty("Fb", "Dept", 2).unwrap();
        s.toggle_free_slot(&fa, "Monday", "1");
        s.toggle_free_slot(&fb, "Monday", "2");
        s.toggle_free_slot(&fa, "Monday", "P1");
        let ca = s.add_course("Ca", &fa, 1).unwrap();
        let cb = s.add_course("Cb", &fb, 1).unwrap();

        let college = s.generate_timetable(COLLEGE_TEMPLATE_ID).unwrap().id.clone();
        let monday = s.generate_timetable(&tid).unwrap().id.clone();
        assert_eq!(s.timetable(&college).unwrap().slot_count(), 2);
        assert_eq!(s.timetable(&monday).unwrap().slot_count(), 1);

        assert!(s.delete_faculty(&fa));
        assert!(s.course(&ca).is_none());
        assert!(s.course(&cb).is_some());

        let college_tt = s.timetable(&college).unwrap();
        assert_eq!(college_tt.slots, vec![TimeSlot::new("Monday", "2", &cb, &fb)]);
        assert_eq!(s.timetable(&monday).unwrap().slot_count(), 0);

        assert!(!s.delete_faculty(&fa));
    }

    #[test]
    fn test_delete_course_cascades() {
        let mut s = store();
        let fa = s.add_faculty("Fa", "Dept", 4).unwrap();
        for p in ["1", "2", "3"] {
            s.toggle_free_slot(&fa, "Monday", p);
        }
        let ca = s.add_course("Ca", &fa, 2).unwrap();
        let cb = s.add_course("Cb", &fa, 1).unwrap();
        let tt = s.generate_timetable(COLLEGE_TEMPLATE_ID).unwrap().id.clone();
        assert_eq!(s.timetable(&tt).unwrap().slot_count(), 3);

        assert!(s.delete_course(&ca));
        let remaining = &s.timetable(&tt).unwrap().slots;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].course_id, cb);
        assert!(!s.delete_course(&ca));
    }

    #[test]
    fn test_patch_slot() {
        let mut s = store();
        let fa = s.add_faculty("Fa", "Dept", 2).unwrap();
        let fb = s.add_faculty("Fb", "Dept", 2).unwrap();
        s.toggle_free_slot(&fa, "Monday", "1");
        let ca = s.add_course("Ca", &fa, 1).unwrap();
        let cb = s.add_course("Cb", &fb, 1).unwrap();
        let tt = s.generate_timetable(COLLEGE_TEMPLATE_ID).unwrap().id.clone();

        let outcome = s.patch_slot(&tt, "Monday", "1", &cb).unwrap();
        assert!(outcome.is_changed());
        let slot = s.timetable(&tt).unwrap().slot_at("Monday", "1").unwrap();
        assert_eq!(slot.course_id, cb);
        assert_eq!(slot.faculty_id, fb);

        // Fb never declared Monday/1 free; the audit notices, the patch did not care.
        let violations = s.audit(&tt).unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].violation_type,
            crate::models::ViolationType::FacultyUnavailable
        );

        let before = s.timetable(&tt).unwrap().clone();
        assert!(s.patch_slot(&tt, "Monday", "1", "ghost").unwrap_err().is_not_found());
        assert_eq!(s.timetable(&tt), Some(&before));

        assert_eq!(
            s.patch_slot(&tt, "Friday", "7", &ca).unwrap(),
            PatchOutcome::Unchanged
        );
        assert_eq!(
            s.patch_slot(&tt, "Friday", "7", "ghost").unwrap(),
            PatchOutcome::Unchanged
        );
        assert_eq!(
            s.patch_slot("ghost", "Monday", "1", &ca).unwrap(),
            PatchOutcome::Unchanged
        );
        assert_eq!(s.timetable(&tt), Some(&before));
    }

    #[test]
    fn test_import_export_template() {
        let mut s = store();
        let json = r#"{
            "id": "ignored",
            "name": "Night School",
            "workingDays": ["Monday", "Wednesday"],
            "periods": [
                {"id": "1", "startTime": "18:00", "endTime": "19:00"},
                {"id": "tea", "startTime": "19:00", "endTime": "19:15", "isBreak": true},
                {"id": "2", "startTime": "19:15", "endTime": "20:15"}
            ]
        }"#;
        let id = s.import_template(json).unwrap();
        assert_ne!(id, "ignored");
        assert!(s.template("ignored").is_none());

        let t = s.template(&id).unwrap();
        assert_eq!(t.name, "Night School");
        assert!(t.is_break("tea"));

        let exported = s.export_template(&id).unwrap();
        let round: Template = serde_json::from_str(&exported).unwrap();
        assert_eq!(&round, t);
        assert_eq!(
            s.template_file_name(&id).as_deref(),
            Some("template-night-school.json")
        );

        assert!(s.export_template("ghost").unwrap_err().is_not_found());
    }

    #[test]
    fn test_import_rejects_malformed() {
        let mut s = store();
        let count = s.templates().len();

        let err = s.import_template("{ not json").unwrap_err();
        assert!(matches!(err, TimetableError::InvalidFormat(_)));

        let err = s.import_template(r#"{"name": "No grid"}"#).unwrap_err();
        assert!(matches!(err, TimetableError::InvalidFormat(_)));

        let dup = r#"{"name": "Dup", "workingDays": ["Monday"], "periods": [
            {"id": "1", "startTime": "09:00", "endTime": "10:00"},
            {"id": "1", "startTime": "10:00", "endTime": "11:00"}
        ]}"#;
        assert!(s.import_template(dup).unwrap_err().is_validation());

        assert_eq!(s.templates().len(), count);
    }

    #[test]
    fn test_coverage_and_render() {
        let mut s = store();
        let fa = s.add_faculty("Ada", "Math", 1).unwrap();
        s.toggle_free_slot(&fa, "Monday", "1");
        let ca = s.add_course("Algebra", &fa, 3).unwrap();
        let tt = s.generate_timetable(COLLEGE_TEMPLATE_ID).unwrap().id.clone();

        let report = s.coverage(&tt).unwrap();
        assert_eq!(report.for_course(&ca).unwrap().shortfall(), 2);

        let grid = s.render(&tt).unwrap();
        assert_eq!(grid.cell_text("Monday", "1").as_deref(), Some("Algebra\nAda"));
        assert!(s.render("ghost").is_none());
        assert!(s.coverage("ghost").is_none());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut s = store();
        let snapshot = s.clone();
        s.add_faculty("Ada", "Math", 1).unwrap();
        assert!(snapshot.faculty().is_empty());
        assert_eq!(s.faculty().len(), 1);
    }
}
