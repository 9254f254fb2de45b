//! Course log with a timeline layout engine.
//!
//! Records university courses (title, credits, grade, period, duration)
//! and lays them out as a timeline of rectangles: one band per academic
//! period, widths proportional to credits per period, heights proportional
//! to duration, packed left-to-right without overlaps.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `CourseState`, `Semester`,
//!   `Period`, `Rect`, `Extent`, `Layout`, `Placement`, `Band`
//! - **`validation`**: Input integrity checks (zero duration, invalid credits)
//! - **`engine`**: `TimelineLayout` packer and `LayoutConfig`
//! - **`session`**: Host-side state: course list, selection, dirty flag
//! - **`store`**: JSON persistence in the per-user data directory
//!
//! # Architecture
//!
//! The engine only reads courses and returns fresh, immutable layouts.
//! Hosts (GUI toolkits, web canvases, terminal renderers) own the course
//! list, call the engine after every change, paint the returned
//! rectangles and route pointer events back through hit testing.
//!
//! # Example
//!
//! ```
//! use u_courselog::engine::compute_layout;
//! use u_courselog::models::{Course, Semester};
//!
//! let courses = vec![
//!     Course::new().with_title("Analysis I").with_period(2017, Semester::Summer),
//!     Course::new().with_title("Analysis II").with_period(2017, Semester::Winter),
//! ];
//! let layout = compute_layout(&courses).unwrap();
//! assert_eq!(layout.extent().height, 100.0);
//! assert_eq!(layout.course_at(&courses, 10.0, 60.0).unwrap().title, "Analysis II");
//! ```

pub mod engine;
pub mod error;
pub mod models;
pub mod session;
pub mod store;
pub mod validation;

pub use error::{LayoutError, Result, StoreError};
