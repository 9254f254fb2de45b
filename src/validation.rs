//! Input validation for course lists.
//!
//! Checks every course before any geometry is computed. Detects:
//! - Zero duration (widths divide by duration)
//! - Non-positive or non-finite credits
//! - Years outside the supported range
//!
//! The layout engine additionally reports [`ValidationErrorKind::GeometryOverflow`]
//! when finite inputs scale to a rectangle that is not finite.
//!
//! All problems are collected, not only the first one, so a host can
//! report them together.

use crate::models::{Course, Rect};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Largest absolute year accepted by the layout engine.
pub const MAX_ABS_YEAR: i32 = 1_000_000;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Index of the offending course in the input slice.
    pub course_index: usize,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A course spans zero periods.
    ZeroDuration,
    /// Credits are zero, negative, NaN or infinite.
    InvalidCredits,
    /// The year is beyond [`MAX_ABS_YEAR`].
    YearOutOfRange,
    /// The course's rectangle does not fit in finite canvas coordinates.
    GeometryOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, course_index: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            course_index,
            message: message.into(),
        }
    }

    pub(crate) fn geometry_overflow(course_index: usize, course: &Course, rect: &Rect) -> Self {
        Self::new(
            ValidationErrorKind::GeometryOverflow,
            course_index,
            format!(
                "'{}' does not fit the canvas: x={} y={} width={} height={}",
                course.title, rect.x, rect.y, rect.width, rect.height
            ),
        )
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "course #{}: {}", self.course_index, self.message)
    }
}

/// Validates a single course.
///
/// Returns every problem found for this course.
pub fn validate_course(index: usize, course: &Course) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if course.duration == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroDuration,
            index,
            format!("'{}' has a duration of zero periods", course.title),
        ));
    }

    if !course.credits.is_finite() || course.credits <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCredits,
            index,
            format!("'{}' has invalid credits {}", course.title, course.credits),
        ));
    }

    if course.year.unsigned_abs() > MAX_ABS_YEAR.unsigned_abs() {
        errors.push(ValidationError::new(
            ValidationErrorKind::YearOutOfRange,
            index,
            format!("'{}' has unsupported year {}", course.title, course.year),
        ));
    }

    errors
}

/// Validates a course list for layout.
///
/// Checks:
/// 1. Every course spans at least one period
/// 2. Every course carries positive, finite credits
/// 3. Every year lies within ±[`MAX_ABS_YEAR`]
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_courses(courses: &[Course]) -> ValidationResult {
    let errors: Vec<ValidationError> = courses
        .iter()
        .enumerate()
        .flat_map(|(i, c)| validate_course(i, c))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
