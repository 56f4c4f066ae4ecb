//! Duty period model.
//!
//! A duty period is the date interval during which a professional is on
//! shift, written `"<start> to <end>"`.
//!
//! # Date Model
//!
//! Dates are kept as the strings they arrived as and compared
//! lexicographically, never parsed into calendar types. Inputs are
//! ISO-8601-like (`YYYY-MM-DD`), so string order equals chronological
//! order. That format is a precondition, not something this module checks:
//! garbage dates produce garbage comparisons.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A date interval [start, end], inclusive at both ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyPeriod {
    /// First on-duty date (inclusive).
    pub start: String,
    /// Last on-duty date (inclusive).
    pub end: String,
}

impl DutyPeriod {
    /// Creates a duty period from its bounds.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parses a `"<start> to <end>"` string.
    ///
    /// Returns `None` when the separator is missing. Callers that must not
    /// fail degrade to [`DutyPeriod::empty`], which matches no date.
    pub fn parse(period: &str) -> Option<Self> {
        let (start, end) = period.split_once(" to ")?;
        Some(Self::new(start, end))
    }

    /// The empty window: matches no date, covers no period.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether a date falls within this period.
    #[inline]
    pub fn contains_date(&self, date: &str) -> bool {
        self.start.as_str() <= date && self.end.as_str() >= date
    }

    /// Whether this period fully contains `other`.
    ///
    /// Superset containment, not mere overlap: a professional is in
    /// service for a requested period only when on duty for all of it.
    pub fn covers(&self, other: &Self) -> bool {
        self.start <= other.start && self.end >= other.end
    }
}

impl fmt::Display for DutyPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        let p = DutyPeriod::parse("2024-01-01 to 2024-01-31").unwrap();
        assert_eq!(p.start, "2024-01-01");
        assert_eq!(p.end, "2024-01-31");
        assert_eq!(p.to_string(), "2024-01-01 to 2024-01-31");
    }

    #[test]
    fn test_parse_missing_separator() {
        assert_eq!(DutyPeriod::parse("2024-01-01"), None);
        assert_eq!(DutyPeriod::parse(""), None);
    }

    #[test]
    fn test_contains_date() {
        let p = DutyPeriod::new("2024-01-01", "2024-01-31");
        assert!(p.contains_date("2024-01-01")); // inclusive start
        assert!(p.contains_date("2024-01-15"));
        assert!(p.contains_date("2024-01-31")); // inclusive end
        assert!(!p.contains_date("2023-12-31"));
        assert!(!p.contains_date("2024-02-01"));
    }

    #[test]
    fn test_covers_is_superset_not_overlap() {
        let duty = DutyPeriod::new("2024-01-01", "2024-03-31");
        let inside = DutyPeriod::new("2024-02-01", "2024-02-15");
        let straddling = DutyPeriod::new("2024-03-01", "2024-04-15");

        assert!(duty.covers(&inside));
        assert!(!duty.covers(&straddling)); // overlaps but not contained
        assert!(duty.covers(&duty));
    }

    #[test]
    fn test_empty_window_matches_nothing() {
        let e = DutyPeriod::empty();
        assert!(!e.contains_date("2024-01-01"));
        assert!(!e.covers(&DutyPeriod::new("2024-01-01", "2024-01-02")));
    }
}
