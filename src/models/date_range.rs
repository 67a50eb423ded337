//! Calendar-day ranges and ISO date parsing

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Result, VanScoutError};

/// ISO calendar date format accepted on every input surface
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A `(start, end)` pair with `start <= end`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range from two dates in any order; the earlier one becomes `start`
    #[must_use]
    pub fn ordered(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Build a range, rejecting `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(VanScoutError::validation(format!(
                "start date {start} is after end date {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Number of nights between the two dates
    #[must_use]
    pub fn duration_days(&self) -> u32 {
        stay_duration_days(self.start, self.end)
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Whole days between two dates, order independent
#[must_use]
pub fn stay_duration_days(start: NaiveDate, end: NaiveDate) -> u32 {
    let days = (end - start).num_days().unsigned_abs();
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Parse a `YYYY-MM-DD` string
pub fn parse_iso_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(VanScoutError::validation("date cannot be empty"));
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT).map_err(|e| {
        VanScoutError::validation(format!("'{trimmed}' is not a YYYY-MM-DD date: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(s: &str) -> NaiveDate {
        parse_iso_date(s).unwrap()
    }

    #[test]
    fn test_ordered_swaps_reversed_dates() {
        let range = DateRange::ordered(date("2024-06-10"), date("2024-06-05"));
        assert_eq!(range.start, date("2024-06-05"));
        assert_eq!(range.end, date("2024-06-10"));
    }

    #[test]
    fn test_new_rejects_reversed_dates() {
        assert!(DateRange::new(date("2024-06-10"), date("2024-06-05")).is_err());
        let same = DateRange::new(date("2024-06-10"), date("2024-06-10")).unwrap();
        assert_eq!(same.duration_days(), 0);
        assert!(same.contains(date("2024-06-10")));
    }

    #[rstest]
    #[case("2024-06-10", "2024-06-15", 5)]
    #[case("2024-06-15", "2024-06-10", 5)]
    #[case("2024-02-28", "2024-03-01", 2)]
    #[case("2024-12-31", "2025-01-01", 1)]
    fn test_stay_duration(#[case] start: &str, #[case] end: &str, #[case] expected: u32) {
        assert_eq!(stay_duration_days(date(start), date(end)), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("2024-13-01")]
    #[case("10/06/2024")]
    #[case("2024-06-10T00:00:00")]
    fn test_parse_iso_date_rejects(#[case] input: &str) {
        assert!(matches!(
            parse_iso_date(input),
            Err(VanScoutError::Validation { .. })
        ));
    }

    #[test]
    fn test_parse_iso_date_trims() {
        assert_eq!(
            parse_iso_date(" 2024-06-10 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
        );
    }
}
