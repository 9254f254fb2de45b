//! Academic period model.
//!
//! A period is one (year, semester) pair, the unit of academic time
//! grouping. Periods are totally ordered by calendar progression through
//! their date index.
//!
//! # Date Index
//! `date_index = year * 2 + (1 if Winter else 0)`
//!
//! Summer of a year precedes Winter of the same year:
//! Summer 2018 < Winter 2018 < Summer 2019 < Winter 2019.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Semester of an academic year.
///
/// Discriminants follow the order the host's selection widgets use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Semester {
    /// Winter semester (second half of the academic year).
    Winter = 0,
    /// Summer semester (first half of the academic year).
    Summer = 1,
}

impl Semester {
    /// Offset this semester adds to `year * 2`.
    #[inline]
    pub fn date_offset(self) -> i64 {
        match self {
            Semester::Winter => 1,
            Semester::Summer => 0,
        }
    }

    /// Returns the semester for a widget index, if valid.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Semester::Winter),
            1 => Some(Semester::Summer),
            _ => None,
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Semester::Winter => f.write_str("WINTER"),
            Semester::Summer => f.write_str("SUMMER"),
        }
    }
}

/// One academic period: a (year, semester) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// Calendar year.
    pub year: i32,
    /// Semester within the year.
    pub semester: Semester,
}

impl Period {
    /// Creates a new period.
    pub fn new(year: i32, semester: Semester) -> Self {
        Self { year, semester }
    }

    /// Integer encoding of this period.
    ///
    /// Consecutive periods differ by exactly one, so the difference of two
    /// indices is the number of elapsed periods between them.
    #[inline]
    pub fn date_index(&self) -> i64 {
        i64::from(self.year) * 2 + self.semester.date_offset()
    }

    /// Inverse of [`Period::date_index`]. Odd indices are Winter.
    ///
    /// Returns `None` when the year does not fit in an `i32`.
    pub fn from_date_index(index: i64) -> Option<Self> {
        let year = i32::try_from(index.div_euclid(2)).ok()?;
        let semester = if index.rem_euclid(2) == 1 {
            Semester::Winter
        } else {
            Semester::Summer
        };
        Some(Self { year, semester })
    }

    /// The period immediately following this one.
    pub fn next(&self) -> Option<Self> {
        Self::from_date_index(self.date_index() + 1)
    }

    /// Number of periods from `self` to `other` (negative if `other` is earlier).
    pub fn periods_until(&self, other: &Self) -> i64 {
        other.date_index() - self.date_index()
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date_index().cmp(&other.date_index())
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.semester, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_index_formula() {
        assert_eq!(Period::new(2017, Semester::Summer).date_index(), 4034);
        assert_eq!(Period::new(2017, Semester::Winter).date_index(), 4035);
    }

    #[test]
    fn test_summer_precedes_winter() {
        let summer = Period::new(2018, Semester::Summer);
        let winter = Period::new(2018, Semester::Winter);
        let next_summer = Period::new(2019, Semester::Summer);
        assert!(summer < winter);
        assert!(winter < next_summer);
        assert_eq!(summer.periods_until(&next_summer), 2);
    }

    #[test]
    fn test_from_date_index_inverts() {
        for period in [
            Period::new(2020, Semester::Winter),
            Period::new(2021, Semester::Summer),
            Period::new(-3, Semester::Winter),
            Period::new(0, Semester::Summer),
        ] {
            assert_eq!(Period::from_date_index(period.date_index()), Some(period));
        }
    }

    #[test]
    fn test_next_period() {
        let p = Period::new(2020, Semester::Summer);
        assert_eq!(p.next(), Some(Period::new(2020, Semester::Winter)));
        assert_eq!(
            Period::new(2020, Semester::Winter).next(),
            Some(Period::new(2021, Semester::Summer))
        );
    }

    #[test]
    fn test_semester_from_index() {
        assert_eq!(Semester::from_index(0), Some(Semester::Winter));
        assert_eq!(Semester::from_index(1), Some(Semester::Summer));
        assert_eq!(Semester::from_index(2), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Period::new(2019, Semester::Winter).to_string(), "WINTER 2019");
    }
}
