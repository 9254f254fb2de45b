//! Host-side course log state.
//!
//! A [`Session`] owns the course list a host edits, the layout computed
//! from it, the current selection and an explicit unsaved-changes flag.
//! Every change to the list recomputes the layout in full.
//!
//! # Event flow
//! - "record set changed" (add, edit, delete): relayout, mark dirty
//! - "pointer down at (x, y)": hit test, select the course under the point
//! - "save": write through a [`CourseStore`], mark clean

use log::{debug, warn};

use crate::engine::{LayoutConfig, TimelineLayout};
use crate::error::{Result, StoreResult};
use crate::models::{Course, Layout};
use crate::store::CourseStore;
use crate::validation::validate_course;

/// Course list, layout snapshot, selection and dirty flag.
#[derive(Debug, Clone)]
pub struct Session {
    engine: TimelineLayout,
    courses: Vec<Course>,
    layout: Layout,
    selected: Option<usize>,
    dirty: bool,
}

impl Session {
    /// Creates an empty, clean session.
    pub fn new(config: LayoutConfig) -> Result<Self> {
        Self::with_courses(config, Vec::new())
    }

    /// Creates a clean session over an existing course list.
    ///
    /// Fails if the configuration or any course cannot be laid out.
    pub fn with_courses(config: LayoutConfig, courses: Vec<Course>) -> Result<Self> {
        let engine = TimelineLayout::with_config(config);
        let layout = engine.compute(&courses)?;
        Ok(Self {
            engine,
            courses,
            layout,
            selected: None,
            dirty: false,
        })
    }

    /// Opens a session from a store.
    ///
    /// A missing or unreadable file yields an empty list. Stored courses
    /// that cannot be laid out are skipped with a warning.
    pub fn open(config: LayoutConfig, store: &CourseStore) -> Result<Self> {
        let courses: Vec<Course> = store
            .load_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(i, course)| {
                let problems = validate_course(i, &course);
                if problems.is_empty() {
                    Some(course)
                } else {
                    for p in &problems {
                        warn!("Skipping stored {p}");
                    }
                    None
                }
            })
            .collect();
        Self::with_courses(config, courses)
    }

    /// All courses, in insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Layout of the current course list.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Index of the selected course.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected course.
    pub fn selected(&self) -> Option<&Course> {
        self.selected.and_then(|i| self.courses.get(i))
    }

    /// Whether there are unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Flags unsaved changes.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clears the unsaved-changes flag.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Appends an empty course, selects it and returns its index.
    pub fn add_course(&mut self) -> Result<usize> {
        self.courses.push(Course::new());
        let index = self.courses.len() - 1;
        self.relayout()?;
        self.selected = Some(index);
        self.dirty = true;
        Ok(index)
    }

    /// Selects a course by index. Out-of-range indices clear the selection.
    pub fn select(&mut self, index: usize) -> Option<&Course> {
        self.selected = (index < self.courses.len()).then_some(index);
        self.selected()
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Selects the course under a point.
    ///
    /// A miss leaves the selection unchanged and returns `None`.
    pub fn select_at(&mut self, px: f64, py: f64) -> Option<&Course> {
        let index = self.layout.hit_test(px, py)?;
        self.selected = Some(index);
        self.courses.get(index)
    }

    /// Applies an edit to the selected course.
    ///
    /// Returns `Ok(false)` without a selection. If the edited course cannot
    /// be laid out, the edit is rolled back and the error returned.
    pub fn edit_selected<F>(&mut self, edit: F) -> Result<bool>
    where
        F: FnOnce(&mut Course),
    {
        let Some(index) = self.selected else {
            return Ok(false);
        };

        let previous = self.courses[index].clone();
        edit(&mut self.courses[index]);

        match self.engine.compute(&self.courses) {
            Ok(layout) => {
                self.layout = layout;
                self.dirty = true;
                Ok(true)
            }
            Err(e) => {
                warn!("Rejected edit of course #{index}: {e}");
                self.courses[index] = previous;
                Err(e)
            }
        }
    }

    /// Removes the selected course and clears the selection.
    pub fn delete_selected(&mut self) -> Result<Option<Course>> {
        let Some(index) = self.selected.take() else {
            return Ok(None);
        };
        let removed = self.courses.remove(index);
        self.relayout()?;
        self.dirty = true;
        Ok(Some(removed))
    }

    /// Writes the course list and clears the unsaved-changes flag.
    pub fn save(&mut self, store: &CourseStore) -> StoreResult<()> {
        store.save(&self.courses)?;
        self.dirty = false;
        Ok(())
    }

    fn relayout(&mut self) -> Result<()> {
        self.layout = self.engine.compute(&self.courses)?;
        debug!("Relayout: {} course(s)", self.courses.len());
        Ok(())
    }
}
