//! Course record model.
//!
//! A course is one logged university course: what it was, how much work
//! it carried, how it went, and when it was held. Records are plain values;
//! the layout engine only reads them.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::{Period, Semester};

/// Outcome state of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CourseState {
    /// Not yet taken.
    #[default]
    Planned = 0,
    /// Passed without a numeric grade.
    Passed = 1,
    /// Passed with a numeric grade.
    Graded = 2,
    /// Not passed.
    Failed = 3,
}

impl CourseState {
    /// Returns the state for a widget index, if valid.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(CourseState::Planned),
            1 => Some(CourseState::Passed),
            2 => Some(CourseState::Graded),
            3 => Some(CourseState::Failed),
            _ => None,
        }
    }
}

/// A logged university course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course title. Not unique.
    pub title: String,
    /// Free-text category label (lecture, seminar, lab, ...).
    #[serde(rename = "type")]
    pub course_type: String,
    /// Workload units. Must be positive.
    pub credits: f64,
    /// Number of periods the course spans. Must be at least 1.
    pub duration: u32,
    /// Outcome state.
    pub state: CourseState,
    /// Numeric grade, only meaningful when `state == Graded`.
    pub grade: Option<f64>,
    /// Semester the course started in.
    pub semester: Semester,
    /// Calendar year the course started in.
    pub year: i32,
}

impl Default for Course {
    fn default() -> Self {
        Self::new()
    }
}

impl Course {
    /// Grade assigned when a course first becomes graded.
    pub const DEFAULT_GRADE: f64 = 1.0;
    /// Credits of a freshly added course.
    pub const DEFAULT_CREDITS: f64 = 6.0;

    /// Creates an empty course in the Winter semester of the current year.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            course_type: String::new(),
            credits: Self::DEFAULT_CREDITS,
            duration: 1,
            state: CourseState::Planned,
            grade: None,
            semester: Semester::Winter,
            year: chrono::Local::now().year(),
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the category label.
    pub fn with_type(mut self, course_type: impl Into<String>) -> Self {
        self.course_type = course_type.into();
        self
    }

    /// Sets the credits.
    pub fn with_credits(mut self, credits: f64) -> Self {
        self.credits = credits;
        self
    }

    /// Sets the duration in periods.
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the starting period.
    pub fn with_period(mut self, year: i32, semester: Semester) -> Self {
        self.year = year;
        self.semester = semester;
        self
    }

    /// Sets the outcome state (see [`Course::set_state`]).
    pub fn with_state(mut self, state: CourseState) -> Self {
        self.set_state(state);
        self
    }

    /// Sets a grade and marks the course as graded.
    pub fn with_grade(mut self, grade: f64) -> Self {
        self.state = CourseState::Graded;
        self.grade = Some(grade);
        self
    }

    /// Changes the outcome state.
    ///
    /// Entering `Graded` without a grade seeds [`Course::DEFAULT_GRADE`].
    /// Other states keep the stored grade so toggling back restores it.
    pub fn set_state(&mut self, state: CourseState) {
        self.state = state;
        if state == CourseState::Graded && self.grade.is_none() {
            self.grade = Some(Self::DEFAULT_GRADE);
        }
    }

    /// The grade, if the course is graded.
    pub fn effective_grade(&self) -> Option<f64> {
        match self.state {
            CourseState::Graded => self.grade,
            _ => None,
        }
    }

    /// Whether the grade input applies to this course.
    #[inline]
    pub fn grade_editable(&self) -> bool {
        self.state == CourseState::Graded
    }

    /// Starting period.
    #[inline]
    pub fn period(&self) -> Period {
        Period::new(self.year, self.semester)
    }

    /// Ordering key (see [`Period::date_index`]).
    #[inline]
    pub fn date_index(&self) -> i64 {
        self.period().date_index()
    }

    /// Compares two courses by when they were held.
    ///
    /// Courses of the same period compare equal; use a stable sort to
    /// keep their insertion order.
    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        self.date_index().cmp(&other.date_index())
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Course['{}' {} {}]", self.title, self.semester, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_defaults() {
        let course = Course::new();
        assert_eq!(course.title, "");
        assert_eq!(course.course_type, "");
        assert_eq!(course.credits, 6.0);
        assert_eq!(course.duration, 1);
        assert_eq!(course.state, CourseState::Planned);
        assert_eq!(course.grade, None);
        assert_eq!(course.semester, Semester::Winter);
        assert_eq!(course.year, chrono::Local::now().year());
    }

    #[test]
    fn test_course_builder() {
        let course = Course::new()
            .with_title("Analysis I")
            .with_type("Lecture")
            .with_credits(9.0)
            .with_duration(2)
            .with_period(2017, Semester::Summer);

        assert_eq!(course.title, "Analysis I");
        assert_eq!(course.course_type, "Lecture");
        assert_eq!(course.credits, 9.0);
        assert_eq!(course.duration, 2);
        assert_eq!(course.date_index(), 4034);
    }

    #[test]
    fn test_entering_graded_seeds_default_grade() {
        let mut course = Course::new();
        assert!(!course.grade_editable());

        course.set_state(CourseState::Graded);
        assert!(course.grade_editable());
        assert_eq!(course.grade, Some(Course::DEFAULT_GRADE));

        course.grade = Some(2.3);
        course.set_state(CourseState::Passed);
        assert_eq!(course.effective_grade(), None);
        course.set_state(CourseState::Graded);
        assert_eq!(course.effective_grade(), Some(2.3));
    }

    #[test]
    fn test_with_grade() {
        let course = Course::new().with_grade(1.7);
        assert_eq!(course.state, CourseState::Graded);
        assert_eq!(course.effective_grade(), Some(1.7));
    }

    #[test]
    fn test_chronological_order() {
        let summer = Course::new().with_period(2018, Semester::Summer);
        let winter = Course::new().with_period(2018, Semester::Winter);
        assert_eq!(summer.chronological_cmp(&winter), Ordering::Less);
        assert_eq!(winter.chronological_cmp(&winter.clone()), Ordering::Equal);
    }

    #[test]
    fn test_display() {
        let course = Course::new()
            .with_title("Logic")
            .with_period(2019, Semester::Summer);
        assert_eq!(course.to_string(), "Course['Logic' SUMMER 2019]");
    }

    #[test]
    fn test_serde_type_field() {
        let course = Course::new().with_type("Seminar");
        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(json["type"], "Seminar");
        let back: Course = serde_json::from_value(json).unwrap();
        assert_eq!(back, course);
    }
}
