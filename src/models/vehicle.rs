//! Vehicle model and its availability windows

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Result, VanScoutError};

/// Closed calendar-day interval during which a vehicle can be booked.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl AvailabilityWindow {
    /// Create a window, rejecting `start_date > end_date`
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self> {
        let window = Self {
            start_date,
            end_date,
        };
        if !window.is_well_formed() {
            return Err(VanScoutError::validation(format!(
                "availability window starts after it ends: {start_date} > {end_date}"
            )));
        }
        Ok(window)
    }

    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.start_date <= self.end_date
    }

    /// Closed-interval overlap with `[start, end]`. Touching endpoints
    /// overlap. The request is not normalized: a reversed request is tested
    /// as given.
    #[must_use]
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.end_date && end >= self.start_date
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub name: String,
    pub rating: f64,
    pub response_time: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Specifications {
    pub length: String,
    pub height: String,
    pub width: String,
    pub engine: String,
    pub power: String,
}

/// A rentable van. Catalog entries are immutable once loaded.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Home location id
    pub location: String,
    /// Daily price in euros
    pub price_per_day: u32,
    /// Sleeping capacity
    pub sleeps: u32,
    /// Average rating (0 to 5)
    pub rating: f64,
    pub review_count: u32,
    /// Bookable date ranges, in catalog order
    #[serde(default)]
    pub availability: Vec<AvailabilityWindow>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub extras: Vec<String>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub mileage: Option<u32>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub transmission: Option<String>,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub specifications: Option<Specifications>,
}

impl Vehicle {
    /// Minimal vehicle with no descriptive extras
    #[must_use]
    pub fn new(id: &str, title: &str, location: &str, price_per_day: u32, sleeps: u32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            location: location.to_string(),
            price_per_day,
            sleeps,
            rating: 0.0,
            review_count: 0,
            availability: Vec::new(),
            image: None,
            features: Vec::new(),
            extras: Vec::new(),
            year: None,
            mileage: None,
            fuel_type: None,
            transmission: None,
            owner: None,
            specifications: None,
        }
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    #[must_use]
    pub fn with_window(mut self, window: AvailabilityWindow) -> Self {
        self.availability.push(window);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// True when at least one availability window overlaps `[start, end]`
    #[must_use]
    pub fn is_available_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.availability.iter().any(|w| w.overlaps(start, end))
    }

    /// Case-insensitive substring match on title or description.
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// Price of a stay of `days` days
    #[must_use]
    pub fn stay_price(&self, days: u32) -> u32 {
        self.price_per_day.saturating_mul(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn june_window() -> AvailabilityWindow {
        AvailabilityWindow::new(date("2024-06-10"), date("2024-06-20")).unwrap()
    }

    #[rstest]
    #[case("2024-06-10", "2024-06-10", true)]
    #[case("2024-06-20", "2024-06-25", true)]
    #[case("2024-06-01", "2024-06-10", true)]
    #[case("2024-06-12", "2024-06-15", true)]
    #[case("2024-06-01", "2024-06-30", true)]
    #[case("2024-06-01", "2024-06-09", false)]
    #[case("2024-06-21", "2024-06-30", false)]
    fn test_window_overlap(#[case] start: &str, #[case] end: &str, #[case] expected: bool) {
        assert_eq!(june_window().overlaps(date(start), date(end)), expected);
    }

    #[test]
    fn test_reversed_request_is_tested_literally() {
        // start=06-25 > end=06-15: 06-25 <= 06-20 fails, so no overlap
        assert!(!june_window().overlaps(date("2024-06-25"), date("2024-06-15")));
        // start=06-15 <= 06-20 and end=06-12 >= 06-10
        assert!(june_window().overlaps(date("2024-06-15"), date("2024-06-12")));
    }

    #[test]
    fn test_window_rejects_reversed_bounds() {
        let result = AvailabilityWindow::new(date("2024-06-20"), date("2024-06-10"));
        assert!(matches!(result, Err(VanScoutError::Validation { .. })));
        assert!(AvailabilityWindow::new(date("2024-06-10"), date("2024-06-10")).is_ok());
    }

    #[test]
    fn test_vehicle_availability_any_window() {
        let van = Vehicle::new("v1", "Test", "paris", 80, 2)
            .with_window(AvailabilityWindow::new(date("2024-01-01"), date("2024-01-31")).unwrap())
            .with_window(AvailabilityWindow::new(date("2024-03-01"), date("2024-03-31")).unwrap());

        assert!(van.is_available_between(date("2024-03-10"), date("2024-03-12")));
        assert!(!van.is_available_between(date("2024-02-05"), date("2024-02-20")));
        assert!(!Vehicle::new("v2", "Empty", "paris", 80, 2)
            .is_available_between(date("2024-03-10"), date("2024-03-12")));
    }

    #[test]
    fn test_vehicle_search_and_price() {
        let van = Vehicle::new("v1", "Volkswagen California", "paris", 110, 4)
            .with_description("Van compact et élégant");
        assert!(van.matches_search("california"));
        assert!(van.matches_search("élégant"));
        assert!(!van.matches_search("sprinter"));
        assert_eq!(van.stay_price(3), 330);
        assert_eq!(van.stay_price(0), 0);
    }
}
