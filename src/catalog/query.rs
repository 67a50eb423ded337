//! Pure queries over the catalog
//!
//! None of these fail: "no match" is an empty list or `None`.

use chrono::NaiveDate;
use serde::Serialize;

use super::Catalog;
use crate::models::{Location, Vehicle};

/// Number of vehicles returned by `top_rated` when the caller has no preference
pub const DEFAULT_TOP_RATED_LIMIT: usize = 3;

/// Aggregate figures shown under the listing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub vehicle_count: usize,
    pub average_rating: f64,
    pub total_reviews: u64,
}

impl Catalog {
    /// Vehicles at `location_id` with at least one availability window
    /// overlapping `[start, end]`. Touching endpoints count. A reversed
    /// request (`start > end`) is tested as given, without normalization.
    #[must_use]
    pub fn available_vehicles(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        location_id: &str,
    ) -> Vec<&Vehicle> {
        self.vehicles()
            .iter()
            .filter(|v| v.location == location_id && v.is_available_between(start, end))
            .collect()
    }

    #[must_use]
    pub fn vehicles_by_location(&self, location_id: &str) -> Vec<&Vehicle> {
        self.vehicles()
            .iter()
            .filter(|v| v.location == location_id)
            .collect()
    }

    #[must_use]
    pub fn vehicle_by_id(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles().iter().find(|v| v.id == id)
    }

    /// The `limit` best-rated vehicles, highest first. Equal ratings keep
    /// catalog order.
    #[must_use]
    pub fn top_rated(&self, limit: usize) -> Vec<&Vehicle> {
        let mut ranked: Vec<&Vehicle> = self.vehicles().iter().collect();
        // stable: ties stay in insertion order
        ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        ranked.truncate(limit);
        ranked
    }

    /// Vehicles priced within `[min, max]` per day
    #[must_use]
    pub fn by_price_range(&self, min: u32, max: u32) -> Vec<&Vehicle> {
        self.vehicles()
            .iter()
            .filter(|v| v.price_per_day >= min && v.price_per_day <= max)
            .collect()
    }

    /// Vehicles sleeping at least `min_sleeps` people
    #[must_use]
    pub fn by_capacity(&self, min_sleeps: u32) -> Vec<&Vehicle> {
        self.vehicles()
            .iter()
            .filter(|v| v.sleeps >= min_sleeps)
            .collect()
    }

    #[must_use]
    pub fn location_by_id(&self, id: &str) -> Option<&Location> {
        self.locations().iter().find(|l| l.id == id)
    }

    /// Locations whose name or region contains `term`, ignoring case.
    /// A blank term returns every location.
    #[must_use]
    pub fn search_locations(&self, term: &str) -> Vec<&Location> {
        let needle = term.trim().to_lowercase();
        self.locations()
            .iter()
            .filter(|l| needle.is_empty() || l.matches_search(&needle))
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        let vehicles = self.vehicles();
        if vehicles.is_empty() {
            return CatalogStats {
                vehicle_count: 0,
                average_rating: 0.0,
                total_reviews: 0,
            };
        }

        let rating_sum: f64 = vehicles.iter().map(|v| v.rating).sum();
        CatalogStats {
            vehicle_count: vehicles.len(),
            average_rating: rating_sum / vehicles.len() as f64,
            total_reviews: vehicles.iter().map(|v| u64::from(v.review_count)).sum(),
        }
    }
}

/// Flat estimate for a stay when no vehicle has been picked yet
#[must_use]
pub fn estimate_stay_cost(days: u32, daily_rate: u32) -> u32 {
    days.saturating_mul(daily_rate)
}
