//! Greedy timeline packer.
//!
//! # Algorithm
//!
//! 1. Validate the course list; invalid input never reaches the geometry.
//! 2. Stable-sort course indices by date index.
//! 3. Walk the sorted courses; each new date index opens a band at
//!    `(date_index - min_date_index) * period_height`.
//! 4. Size each course: `width = credits * credit_scale / duration`,
//!    `height = duration * period_height`.
//! 5. Start at `x = 0` on the band and push right past the first placed
//!    rectangle it intersects (`right + spacing`), re-scanning from the
//!    start after every move, until nothing intersects.
//! 6. Reject the whole input if any rectangle, before or after packing,
//!    leaves finite coordinates.
//!
//! Empty periods between courses still take up vertical space, so band
//! offsets reflect elapsed time.
//!
//! # Complexity
//! A course passes each placed rectangle at most once, so it moves O(n)
//! times, and every move re-scans the O(n) placed rectangles: O(n²) checks
//! per course, O(n³) per layout in the worst case. That worst case needs
//! every course to collide with every earlier one after each move; typical
//! inputs move each course a few times, O(n²) per layout. Course lists are
//! small (tens of records).
//!
//! # Reference
//! Baker, Coffman & Rivest (1980), "Orthogonal Packings in Two Dimensions",
//! SIAM J. Computing 9(4): bottom-left style displacement heuristics.

use log::{debug, trace};

use super::LayoutConfig;
use crate::error::{LayoutError, Result};
use crate::models::{Band, Course, Layout, Placement, Rect};
use crate::validation::{validate_courses, ValidationError};

/// Timeline layout engine.
///
/// Stateless apart from its configuration: every call to
/// [`TimelineLayout::compute`] is a pure function of its input and returns
/// a fresh [`Layout`].
///
/// # Example
///
/// ```
/// use u_courselog::engine::TimelineLayout;
/// use u_courselog::models::{Course, Semester};
///
/// let courses = vec![
///     Course::new().with_title("Analysis I").with_period(2017, Semester::Winter),
///     Course::new().with_title("Linear Algebra").with_period(2017, Semester::Winter),
/// ];
///
/// let layout = TimelineLayout::new().compute(&courses).unwrap();
/// assert_eq!(layout.placement_for(0).unwrap().rect.x, 0.0);
/// assert_eq!(layout.placement_for(1).unwrap().rect.x, 151.0);
/// assert_eq!(layout.hit_test(152.0, 1.0), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimelineLayout {
    config: LayoutConfig,
}

impl TimelineLayout {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given configuration.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Engine configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Computes the layout of a course list.
    ///
    /// # Errors
    /// - [`LayoutError::InvalidConfig`] if the configuration is degenerate.
    /// - [`LayoutError::InvalidInput`] if any course has zero duration,
    ///   non-positive credits or an unsupported year, or if its rectangle
    ///   overflows finite coordinates.
    pub fn compute(&self, courses: &[Course]) -> Result<Layout> {
        self.config.validate()?;
        validate_courses(courses).map_err(LayoutError::InvalidInput)?;

        let mut order: Vec<usize> = (0..courses.len()).collect();
        order.sort_by_key(|&i| courses[i].date_index());

        let min_date_index = order
            .first()
            .map(|&i| courses[i].date_index())
            .unwrap_or(0);

        let mut layout = Layout::new();
        let mut band_y = 0.0;

        for &course_index in &order {
            let course = &courses[course_index];
            let period = course.period();

            if layout.bands().last().map(|b| b.period) != Some(period) {
                band_y = (course.date_index() - min_date_index) as f64 * self.config.period_height;
                layout.add_band(Band { period, y: band_y });
            }

            let (width, height) = self.course_size(course);
            let unpacked = Rect::new(0.0, band_y, width, height);
            check_finite(course_index, course, &unpacked)?;
            let rect = self.pack(unpacked, layout.placements());
            check_finite(course_index, course, &rect)?;

            layout.add_placement(Placement {
                course_index,
                period,
                rect,
            });
        }

        debug!(
            "Laid out {} course(s) in {} period(s), extent {}x{}",
            layout.len(),
            layout.bands().len(),
            layout.extent().width,
            layout.extent().height
        );

        Ok(layout)
    }

    /// Unpacked size of a course rectangle.
    ///
    /// The course must have passed validation (non-zero duration).
    fn course_size(&self, course: &Course) -> (f64, f64) {
        let duration = f64::from(course.duration);
        let width = course.credits * self.config.credit_scale / duration;
        let height = duration * self.config.period_height;
        (width, height)
    }

    /// Moves `candidate` right until it intersects no placed rectangle.
    ///
    /// Each move lands past an obstacle's right edge, so `x` strictly grows
    /// and every obstacle is passed at most once.
    fn pack(&self, mut candidate: Rect, placed: &[Placement]) -> Rect {
        while let Some(obstacle) = placed.iter().find(|p| p.rect.intersects(&candidate)) {
            let x = obstacle.rect.right() + self.config.spacing;
            trace!(
                "course #{} blocks candidate at ({}, {}), moving to x={}",
                obstacle.course_index,
                candidate.x,
                candidate.y,
                x
            );
            candidate.x = x;
        }
        candidate
    }
}

fn check_finite(course_index: usize, course: &Course, rect: &Rect) -> Result<()> {
    if rect.right().is_finite() && rect.bottom().is_finite() {
        return Ok(());
    }
    Err(LayoutError::InvalidInput(vec![
        ValidationError::geometry_overflow(course_index, course, rect),
    ]))
}

/// Computes a layout with the default configuration.
pub fn compute_layout(courses: &[Course]) -> Result<Layout> {
    TimelineLayout::new().compute(courses)
}
