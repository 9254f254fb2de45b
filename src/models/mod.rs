//! Course log domain models.
//!
//! Provides the value types shared by the layout engine and its hosts:
//! course records, academic periods, canvas geometry and computed layouts.
//!
//! # Domain Mappings
//!
//! | u-courselog | Calendar | Canvas |
//! |-------------|----------|--------|
//! | Course | Enrollment | Rectangle owner |
//! | Period | Year × Semester | Band |
//! | Layout | Timeline | Scrollable viewport |

mod course;
mod geometry;
mod layout;
mod period;

pub use course::{Course, CourseState};
pub use geometry::{Extent, Rect};
pub use layout::{Band, Layout, Placement};
pub use period::{Period, Semester};
