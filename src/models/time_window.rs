//! Time interval primitives.
//!
//! Every availability decision in the crate reduces to a strict-overlap
//! test between half-open intervals. Touching endpoints do not conflict,
//! so one plan may begin at the exact instant the previous one ends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A time interval [start, end).
///
/// Half-open: includes start, excludes end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub start: DateTime<Utc>,
    /// Interval end (exclusive).
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Duration of this window in whole minutes.
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether a timestamp falls within this window.
    #[inline]
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        t >= self.start && t < self.end
    }

    /// Whether two windows strictly overlap.
    ///
    /// `[a, b)` and `[b, c)` share only the boundary instant and do not
    /// overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, h, m, 0).unwrap()
    }

    #[test]
    fn test_duration_and_contains() {
        let w = TimeWindow::new(at(8, 0), at(9, 30));
        assert_eq!(w.duration_minutes(), 90);
        assert!(w.contains(at(8, 0)));
        assert!(w.contains(at(9, 29)));
        assert!(!w.contains(at(9, 30))); // exclusive end
        assert!(!w.contains(at(7, 59)));
    }

    #[test]
    fn test_overlap() {
        let a = TimeWindow::new(at(8, 0), at(12, 0));
        let b = TimeWindow::new(at(10, 0), at(14, 0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let inside = TimeWindow::new(at(9, 0), at(10, 0));
        assert!(a.overlaps(&inside));
    }

    #[test]
    fn test_touching_windows_do_not_overlap() {
        let a = TimeWindow::new(at(8, 0), at(16, 0));
        let after = TimeWindow::new(at(16, 0), at(17, 0));
        let before = TimeWindow::new(at(7, 0), at(8, 0));
        assert!(!a.overlaps(&after));
        assert!(!a.overlaps(&before));
    }
}
