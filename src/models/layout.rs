//! Layout (solution) model.
//!
//! A layout is the geometry computed for one course list: a rectangle per
//! course, the vertical band of every period present, and the bounding
//! extent of the canvas. Layouts are immutable snapshots; every
//! recomputation produces a fresh one.

use serde::{Deserialize, Serialize};

use super::{Course, Extent, Period, Rect};

/// A computed timeline layout.
///
/// Placements are stored in placement order (chronological, stable within
/// a period). This order is also the hit-test order. Only the engine adds
/// to a layout; hosts get read access.
///
/// ```compile_fail
/// use u_courselog::engine::compute_layout;
/// use u_courselog::models::{Band, Period, Semester};
///
/// let mut layout = compute_layout(&[]).unwrap();
/// layout.add_band(Band { period: Period::new(2020, Semester::Winter), y: 0.0 });
/// ```
///
/// ```compile_fail
/// use u_courselog::engine::compute_layout;
///
/// let mut layout = compute_layout(&[]).unwrap();
/// layout.placements.clear();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    placements: Vec<Placement>,
    bands: Vec<Band>,
    extent: Extent,
}

/// A course-rectangle association.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Index of the course in the slice the layout was computed from.
    pub course_index: usize,
    /// Starting period of the course.
    pub period: Period,
    /// Rectangle assigned to the course.
    pub rect: Rect,
}

/// The vertical slice of the canvas allocated to one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Period this band belongs to.
    pub period: Period,
    /// Top edge of the band.
    pub y: f64,
}

impl Layout {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a placement and grows the extent to enclose it.
    pub(crate) fn add_placement(&mut self, placement: Placement) {
        self.extent.include(&placement.rect);
        self.placements.push(placement);
    }

    /// Appends a band.
    pub(crate) fn add_band(&mut self, band: Band) {
        self.bands.push(band);
    }

    /// Course rectangles, in placement order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// One band per distinct period present, chronological.
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Bounding extent of all placements.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Index of the first course whose rectangle contains the point.
    pub fn hit_test(&self, px: f64, py: f64) -> Option<usize> {
        self.placements
            .iter()
            .find(|p| p.rect.contains(px, py))
            .map(|p| p.course_index)
    }

    /// Resolves a hit test against the courses this layout was computed from.
    pub fn course_at<'a>(&self, courses: &'a [Course], px: f64, py: f64) -> Option<&'a Course> {
        self.hit_test(px, py).and_then(|i| courses.get(i))
    }

    /// Finds the placement for a given course index.
    pub fn placement_for(&self, course_index: usize) -> Option<&Placement> {
        self.placements
            .iter()
            .find(|p| p.course_index == course_index)
    }

    /// Returns all placements starting in a given period.
    pub fn placements_in(&self, period: Period) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| p.period == period)
            .collect()
    }

    /// Finds the band of a period.
    pub fn band_for(&self, period: Period) -> Option<&Band> {
        self.bands.iter().find(|b| b.period == period)
    }

    /// Number of placements.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Semester;

    fn sample_layout() -> Layout {
        let p0 = Period::new(2020, Semester::Summer);
        let p1 = Period::new(2020, Semester::Winter);
        let mut layout = Layout::new();
        layout.add_band(Band { period: p0, y: 0.0 });
        layout.add_band(Band { period: p1, y: 50.0 });
        layout.add_placement(Placement {
            course_index: 2,
            period: p0,
            rect: Rect::new(0.0, 0.0, 150.0, 50.0),
        });
        layout.add_placement(Placement {
            course_index: 0,
            period: p0,
            rect: Rect::new(151.0, 0.0, 100.0, 50.0),
        });
        layout.add_placement(Placement {
            course_index: 1,
            period: p1,
            rect: Rect::new(0.0, 50.0, 75.0, 100.0),
        });
        layout
    }

    #[test]
    fn test_extent_tracks_placements() {
        let layout = sample_layout();
        assert_eq!(layout.extent(), Extent::new(251.0, 150.0));
        assert_eq!(layout.len(), 3);
    }

    #[test]
    fn test_read_access() {
        let layout = sample_layout();
        assert_eq!(layout.placements().len(), 3);
        assert_eq!(layout.placements()[0].course_index, 2);
        assert_eq!(layout.bands().len(), 2);
        assert_eq!(layout.bands()[1].y, 50.0);
    }

    #[test]
    fn test_hit_test() {
        let layout = sample_layout();
        assert_eq!(layout.hit_test(1.0, 1.0), Some(2));
        assert_eq!(layout.hit_test(200.0, 10.0), Some(0));
        assert_eq!(layout.hit_test(10.0, 120.0), Some(1));
        assert_eq!(layout.hit_test(150.5, 10.0), None);
        assert_eq!(layout.hit_test(-1.0, 0.0), None);
    }

    #[test]
    fn test_course_at() {
        let layout = sample_layout();
        let courses = vec![
            Course::new().with_title("A"),
            Course::new().with_title("B"),
            Course::new().with_title("C"),
        ];
        assert_eq!(layout.course_at(&courses, 1.0, 1.0).unwrap().title, "C");
        assert!(layout.course_at(&courses, 500.0, 500.0).is_none());
        assert!(layout.course_at(&courses[..1], 1.0, 1.0).is_none());
    }

    #[test]
    fn test_queries() {
        let layout = sample_layout();
        let p0 = Period::new(2020, Semester::Summer);
        assert_eq!(layout.placement_for(1).unwrap().rect.y, 50.0);
        assert!(layout.placement_for(9).is_none());
        assert_eq!(layout.placements_in(p0).len(), 2);
        assert_eq!(
            layout
                .band_for(Period::new(2020, Semester::Winter))
                .unwrap()
                .y,
            50.0
        );
    }

    #[test]
    fn test_empty_layout() {
        let layout = Layout::new();
        assert!(layout.is_empty());
        assert_eq!(layout.extent(), Extent::ZERO);
        assert_eq!(layout.hit_test(0.0, 0.0), None);
    }
}
