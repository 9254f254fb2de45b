//! Timeline layout engine.
//!
//! Turns a course list into a [`Layout`](crate::models::Layout): one
//! rectangle per course, grouped into period bands, sized by credits and
//! duration, and packed left-to-right without overlaps.
//!
//! # Algorithm
//!
//! `TimelineLayout` is a greedy, leftmost-fit-by-displacement packer. It is
//! deterministic and recomputes the whole layout on every call; there is no
//! incremental update.
//!
//! # Configuration
//!
//! `LayoutConfig` holds the canvas scale: units per credit, band height
//! per period, and the gap left after a displaced rectangle.

mod config;
mod timeline;

pub use config::LayoutConfig;
pub use timeline::{compute_layout, TimelineLayout};
