//! Combined listing filter
//!
//! Every criterion is optional; set criteria are ANDed together.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Catalog;
use crate::models::Vehicle;
use crate::{Result, VanScoutError};

/// Inclusive daily price bounds, written `min-max` on the listing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    /// Parse the listing page's `"min-max"` price option, e.g. `"50-100"`
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let (min, max) = input.split_once('-').ok_or_else(|| {
            VanScoutError::validation(format!("Price range must be 'min-max', got '{input}'"))
        })?;

        let min = min
            .trim()
            .parse::<u32>()
            .map_err(|_| VanScoutError::validation(format!("Invalid minimum price: '{min}'")))?;
        let max = max
            .trim()
            .parse::<u32>()
            .map_err(|_| VanScoutError::validation(format!("Invalid maximum price: '{max}'")))?;

        if min > max {
            return Err(VanScoutError::validation(format!(
                "Minimum price {min} exceeds maximum price {max}"
            )));
        }

        Ok(Self { min, max })
    }

    #[must_use]
    pub fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }
}

impl FromStr for PriceRange {
    type Err = VanScoutError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Listing page criteria
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleFilter {
    /// Substring of title or description, any case
    pub search: Option<String>,
    /// Exact location id
    pub location: Option<String>,
    pub price: Option<PriceRange>,
    pub min_sleeps: Option<u32>,
}

impl VehicleFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn search(mut self, term: &str) -> Self {
        self.search = Some(term.to_string());
        self
    }

    #[must_use]
    pub fn location(mut self, location_id: &str) -> Self {
        self.location = Some(location_id.to_string());
        self
    }

    #[must_use]
    pub fn price(mut self, range: PriceRange) -> Self {
        self.price = Some(range);
        self
    }

    #[must_use]
    pub fn min_sleeps(mut self, sleeps: u32) -> Self {
        self.min_sleeps = Some(sleeps);
        self
    }

    /// Whether `vehicle` satisfies every set criterion.
    /// Blank strings count as unset.
    #[must_use]
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => vehicle.matches_search(&term.to_lowercase()),
            _ => true,
        };
        let matches_location = match self.location.as_deref() {
            Some(location) if !location.is_empty() => vehicle.location == location,
            _ => true,
        };
        let matches_price = self
            .price
            .is_none_or(|range| range.contains(vehicle.price_per_day));
        let matches_capacity = self.min_sleeps.is_none_or(|sleeps| vehicle.sleeps >= sleeps);

        matches_search && matches_location && matches_price && matches_capacity
    }
}

impl Catalog {
    /// Vehicles matching `filter`, in catalog order
    #[must_use]
    pub fn filter(&self, filter: &VehicleFilter) -> Vec<&Vehicle> {
        self.vehicles().iter().filter(|v| filter.matches(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn seed() -> Catalog {
        Catalog::embedded().unwrap()
    }

    fn ids(vehicles: Vec<&Vehicle>) -> Vec<String> {
        vehicles.into_iter().map(|v| v.id.clone()).collect()
    }

    #[rstest]
    #[case("50-100", 50, 100)]
    #[case(" 100 - 150 ", 100, 150)]
    #[case("85-85", 85, 85)]
    fn test_price_range_parse(#[case] input: &str, #[case] min: u32, #[case] max: u32) {
        assert_eq!(PriceRange::parse(input).unwrap(), PriceRange { min, max });
    }

    #[rstest]
    #[case("")]
    #[case("100")]
    #[case("abc-100")]
    #[case("50-")]
    #[case("150-100")]
    fn test_price_range_parse_rejects(#[case] input: &str) {
        assert!(matches!(
            PriceRange::parse(input),
            Err(VanScoutError::Validation { .. })
        ));
    }

    #[test]
    fn test_price_range_display_roundtrips_through_from_str() {
        let range: PriceRange = "50-100".parse().unwrap();
        assert_eq!(range.to_string(), "50-100");
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let catalog = seed();
        assert_eq!(catalog.filter(&VehicleFilter::new()).len(), catalog.vehicles().len());

        let blank = VehicleFilter::new().search("  ").location("");
        assert_eq!(catalog.filter(&blank).len(), catalog.vehicles().len());
    }

    #[test]
    fn test_search_matches_title_and_description() {
        let catalog = seed();
        assert_eq!(
            ids(catalog.filter(&VehicleFilter::new().search("MERCEDES"))),
            vec!["van1", "van10"]
        );
        assert_eq!(
            ids(catalog.filter(&VehicleFilter::new().search("montagne"))),
            vec!["van4"]
        );
    }

    #[test]
    fn test_criteria_are_combined() {
        let catalog = seed();
        let filter = VehicleFilter::new()
            .price(PriceRange { min: 100, max: 150 })
            .min_sleeps(4);
        assert_eq!(
            ids(catalog.filter(&filter)),
            vec!["van2", "van3", "van7", "van8", "van10"]
        );

        let filter = filter.location("marseille").search("ducato");
        assert_eq!(ids(catalog.filter(&filter)), vec!["van2"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = seed();
        let filter = VehicleFilter::new().location("nantes").min_sleeps(6);
        assert!(catalog.filter(&filter).is_empty());
    }
}
