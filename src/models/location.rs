//! Pickup location model

use serde::{Deserialize, Serialize};

/// City a van can be picked up from.
///
/// `van_count` and `rating` are advertised figures for display. They are
/// not derived from the vehicle list and may disagree with it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Stable key referenced by `Vehicle::location`
    pub id: String,
    /// Display name (city)
    pub name: String,
    /// Administrative region
    pub region: String,
    /// Whether pickups are currently offered here
    #[serde(default = "default_available")]
    pub available: bool,
    /// Advertised number of vans
    pub van_count: u32,
    /// Advertised rating (0 to 5)
    pub rating: f64,
    /// Card image path
    #[serde(default)]
    pub image: Option<String>,
}

fn default_available() -> bool {
    true
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(id: &str, name: &str, region: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            region: region.to_string(),
            available: true,
            van_count: 0,
            rating: 0.0,
            image: None,
        }
    }

    /// Case-insensitive substring match on name or region.
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.region.to_lowercase().contains(needle)
    }
}
